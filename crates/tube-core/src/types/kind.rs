//! Tube profile kind

use serde::{Deserialize, Serialize};

/// Cross-section profile of a tube.
///
/// Only used for labeling; box geometry always comes from the
/// width/height/length fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TubeKind {
    #[default]
    Square,
    Rectangular,
}

impl TubeKind {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            TubeKind::Square => "Square",
            TubeKind::Rectangular => "Rectangular",
        }
    }

    /// All tube kinds for UI
    pub fn all() -> &'static [TubeKind] {
        &[TubeKind::Square, TubeKind::Rectangular]
    }
}

impl std::fmt::Display for TubeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
