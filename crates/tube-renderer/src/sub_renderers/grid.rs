//! Grid sub-renderer for the ground plane.

use egui::{Color32, Stroke};
use glam::Vec3;
use tube_core::Drawable;

use crate::config::GridConfig;
use crate::constants::grid as constants;
use crate::context::FrameContext;
use crate::traits::SubRenderer;

/// A grid line on the ground plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub start: Vec3,
    pub end: Vec3,
    pub color: [u8; 4],
}

/// Grid sub-renderer for ground reference plane.
pub struct GridSubRenderer {
    enabled: bool,
    lines: Vec<GridLine>,
}

impl GridSubRenderer {
    /// Creates a new grid sub-renderer.
    pub fn new(config: &GridConfig) -> Self {
        Self {
            enabled: true,
            lines: generate_grid_lines(config.size, config.spacing),
        }
    }
}

impl Default for GridSubRenderer {
    fn default() -> Self {
        Self::new(&GridConfig::default())
    }
}

impl SubRenderer for GridSubRenderer {
    fn name(&self) -> &str {
        "grid"
    }

    fn priority(&self) -> i32 {
        super::priorities::GRID
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn paint(&self, frame: &FrameContext<'_>, _drawables: &[Drawable]) {
        for line in &self.lines {
            let (Some(a), Some(b)) = (frame.to_screen(line.start), frame.to_screen(line.end))
            else {
                continue;
            };
            let [r, g, blue, alpha] = line.color;
            let color = Color32::from_rgba_unmultiplied(r, g, blue, alpha);
            frame
                .painter
                .line_segment([a.pos, b.pos], Stroke::new(constants::LINE_WIDTH, color));
        }
    }
}

/// Generate grid lines on the Y=0 plane; the lines through the origin are
/// colored as the X and Z axes.
pub fn generate_grid_lines(size: f32, spacing: f32) -> Vec<GridLine> {
    if !(spacing > 0.0) || !(size > 0.0) {
        return Vec::new();
    }

    let num_lines = (size / spacing).min(constants::MAX_LINES_PER_SIDE as f32) as i32;
    let mut lines = Vec::with_capacity((num_lines as usize * 2 + 1) * 2);

    // Lines parallel to X axis
    for i in -num_lines..=num_lines {
        let z = i as f32 * spacing;
        lines.push(GridLine {
            start: Vec3::new(-size, 0.0, z),
            end: Vec3::new(size, 0.0, z),
            color: if i == 0 { constants::X_AXIS_COLOR } else { constants::LINE_COLOR },
        });
    }

    // Lines parallel to Z axis
    for i in -num_lines..=num_lines {
        let x = i as f32 * spacing;
        lines.push(GridLine {
            start: Vec3::new(x, 0.0, -size),
            end: Vec3::new(x, 0.0, size),
            color: if i == 0 { constants::Z_AXIS_COLOR } else { constants::LINE_COLOR },
        });
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_line_count_and_axes() {
        let lines = generate_grid_lines(2.0, 1.0);
        assert_eq!(lines.len(), 10);
        assert!(lines.iter().all(|l| l.start.y == 0.0 && l.end.y == 0.0));

        let x_axis: Vec<_> = lines.iter().filter(|l| l.color == constants::X_AXIS_COLOR).collect();
        assert_eq!(x_axis.len(), 1);
        assert_eq!(x_axis[0].start, Vec3::new(-2.0, 0.0, 0.0));
    }

    #[test]
    fn test_line_count_is_bounded() {
        let lines = generate_grid_lines(1.0e9, 1.0e-6);
        let per_axis = constants::MAX_LINES_PER_SIDE as usize * 2 + 1;
        assert_eq!(lines.len(), per_axis * 2);
    }

    #[test]
    fn test_degenerate_spacing() {
        assert!(generate_grid_lines(10.0, 0.0).is_empty());
        assert!(generate_grid_lines(10.0, f32::NAN).is_empty());
    }
}
