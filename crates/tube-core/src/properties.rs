//! Property editing for the selected tube.
//!
//! Each edit becomes a patch touching exactly one field (or one component of
//! position/rotation) and goes through [`SceneStore::update_object`].
//! Rotation is edited in degrees and stored in radians.

use glam::Vec3;

use crate::error::{PropertyError, PropertyResult};
use crate::geometry::{degrees_to_radians, radians_to_degrees};
use crate::scene::SceneStore;
use crate::types::{Tube, TubeId, TubeKind, TubePatch};

/// Editable tube field as shown in the property panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyField {
    Kind,
    Width,
    Height,
    Thickness,
    Length,
    PositionX,
    PositionY,
    PositionZ,
    RotationX,
    RotationY,
    RotationZ,
}

impl PropertyField {
    pub fn label(&self) -> &'static str {
        match self {
            PropertyField::Kind => "Type",
            PropertyField::Width => "Width",
            PropertyField::Height => "Height",
            PropertyField::Thickness => "Thickness",
            PropertyField::Length => "Length",
            PropertyField::PositionX => "Position X",
            PropertyField::PositionY => "Position Y",
            PropertyField::PositionZ => "Position Z",
            PropertyField::RotationX => "Rotation X (degrees)",
            PropertyField::RotationY => "Rotation Y (degrees)",
            PropertyField::RotationZ => "Rotation Z (degrees)",
        }
    }

    /// Increment used by drag widgets
    pub fn step(&self) -> f64 {
        match self {
            PropertyField::Thickness => 0.01,
            PropertyField::RotationX | PropertyField::RotationY | PropertyField::RotationZ => 1.0,
            _ => 0.1,
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, PropertyField::Kind)
    }

    pub fn is_rotation(&self) -> bool {
        matches!(
            self,
            PropertyField::RotationX | PropertyField::RotationY | PropertyField::RotationZ
        )
    }
}

/// Current value of a numeric field in panel units (degrees for rotation).
pub fn field_value(tube: &Tube, field: PropertyField) -> Option<f32> {
    let value = match field {
        PropertyField::Kind => return None,
        PropertyField::Width => tube.width,
        PropertyField::Height => tube.height,
        PropertyField::Thickness => tube.thickness,
        PropertyField::Length => tube.length,
        PropertyField::PositionX => tube.position.x,
        PropertyField::PositionY => tube.position.y,
        PropertyField::PositionZ => tube.position.z,
        PropertyField::RotationX => radians_to_degrees(tube.rotation.x),
        PropertyField::RotationY => radians_to_degrees(tube.rotation.y),
        PropertyField::RotationZ => radians_to_degrees(tube.rotation.z),
    };
    Some(value)
}

/// Text shown for a field. Rotations are rounded to one decimal here only.
pub fn display_value(tube: &Tube, field: PropertyField) -> String {
    match field_value(tube, field) {
        None => tube.kind.display_name().to_string(),
        Some(degrees) if field.is_rotation() => format!("{degrees:.1}"),
        Some(value) => value.to_string(),
    }
}

/// Parse panel input for a numeric field. Empty, non-numeric and non-finite
/// text is rejected.
pub fn parse_number(field: PropertyField, input: &str) -> PropertyResult<f32> {
    if !field.is_numeric() {
        return Err(PropertyError::NotNumeric { field });
    }

    match input.trim().parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(PropertyError::InvalidNumber {
            field,
            input: input.to_string(),
        }),
    }
}

/// Build the single-field patch for `value` given in panel units.
pub fn patch_for(tube: &Tube, field: PropertyField, value: f32) -> PropertyResult<TubePatch> {
    let with_component = |base: Vec3, index: usize, v: f32| {
        let mut out = base;
        out[index] = v;
        out
    };

    let patch = TubePatch::new();
    let patch = match field {
        PropertyField::Kind => return Err(PropertyError::NotNumeric { field }),
        PropertyField::Width => patch.with_width(value),
        PropertyField::Height => patch.with_height(value),
        PropertyField::Thickness => patch.with_thickness(value),
        PropertyField::Length => patch.with_length(value),
        PropertyField::PositionX => patch.with_position(with_component(tube.position, 0, value)),
        PropertyField::PositionY => patch.with_position(with_component(tube.position, 1, value)),
        PropertyField::PositionZ => patch.with_position(with_component(tube.position, 2, value)),
        PropertyField::RotationX => {
            patch.with_rotation(with_component(tube.rotation, 0, degrees_to_radians(value)))
        }
        PropertyField::RotationY => {
            patch.with_rotation(with_component(tube.rotation, 1, degrees_to_radians(value)))
        }
        PropertyField::RotationZ => {
            patch.with_rotation(with_component(tube.rotation, 2, degrees_to_radians(value)))
        }
    };
    Ok(patch)
}

/// Apply a typed value to a tube. Returns whether the tube exists and was
/// updated.
pub fn apply_value(
    store: &mut SceneStore,
    id: TubeId,
    field: PropertyField,
    value: f32,
) -> PropertyResult<bool> {
    if !value.is_finite() {
        return Err(PropertyError::InvalidNumber {
            field,
            input: value.to_string(),
        });
    }

    let Some(tube) = store.get(id) else {
        return Ok(false);
    };
    let patch = patch_for(tube, field, value)?;
    Ok(store.update_object(id, &patch))
}

/// Parse and apply text input. Invalid input leaves the store untouched.
pub fn apply_text(
    store: &mut SceneStore,
    id: TubeId,
    field: PropertyField,
    input: &str,
) -> PropertyResult<bool> {
    let value = parse_number(field, input)?;
    apply_value(store, id, field, value)
}

pub fn apply_kind(store: &mut SceneStore, id: TubeId, kind: TubeKind) -> bool {
    store.update_object(id, &TubePatch::new().with_kind(kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TubeTemplate;
    use approx::assert_relative_eq;

    fn store() -> (SceneStore, TubeId) {
        (SceneStore::with_initial_tube(&TubeTemplate::default()), TubeId(1))
    }

    #[test]
    fn test_rotation_edit_is_stored_in_radians() {
        let (mut store, id) = store();
        assert!(apply_text(&mut store, id, PropertyField::RotationY, "90").unwrap());

        let tube = store.get(id).unwrap();
        assert_relative_eq!(tube.rotation.y, std::f32::consts::FRAC_PI_2, epsilon = 1e-6);
        assert_eq!(tube.rotation.x, 0.0);
        assert_eq!(tube.rotation.z, 0.0);
    }

    #[test]
    fn test_rotation_is_not_snapped_on_store() {
        let (mut store, id) = store();
        apply_value(&mut store, id, PropertyField::RotationX, 33.3).unwrap();

        let tube = store.get(id).unwrap();
        assert_eq!(display_value(tube, PropertyField::RotationX), "33.3");
        assert_relative_eq!(tube.rotation.x, 33.3_f32.to_radians(), epsilon = 1e-6);
    }

    #[test]
    fn test_display_rounds_rotation_to_one_decimal() {
        let (mut store, id) = store();
        apply_value(&mut store, id, PropertyField::RotationZ, 12.345).unwrap();
        let tube = store.get(id).unwrap();
        assert_eq!(display_value(tube, PropertyField::RotationZ), "12.3");
        assert_eq!(display_value(tube, PropertyField::Width), "1");
        assert_eq!(display_value(tube, PropertyField::Kind), "Square");
    }

    #[test]
    fn test_position_edit_touches_one_component() {
        let (mut store, id) = store();
        apply_text(&mut store, id, PropertyField::PositionZ, " -2.5 ").unwrap();
        apply_text(&mut store, id, PropertyField::PositionX, "1").unwrap();

        assert_eq!(store.get(id).unwrap().position, Vec3::new(1.0, 0.0, -2.5));
    }

    #[test]
    fn test_invalid_input_is_rejected_without_change() {
        let (mut store, id) = store();
        let before = store.tubes().to_vec();
        let revision = store.revision();

        for input in ["", "abc", "1.2.3", "NaN", "inf"] {
            let err = apply_text(&mut store, id, PropertyField::Width, input).unwrap_err();
            assert!(matches!(err, PropertyError::InvalidNumber { .. }), "{input}");
        }
        assert!(apply_value(&mut store, id, PropertyField::Height, f32::NAN).is_err());

        assert_eq!(store.tubes(), before.as_slice());
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_negative_dimensions_are_accepted() {
        let (mut store, id) = store();
        assert!(apply_text(&mut store, id, PropertyField::Length, "-4").unwrap());
        assert_eq!(store.get(id).unwrap().length, -4.0);
    }

    #[test]
    fn test_kind_is_not_numeric() {
        let (mut store, id) = store();
        assert_eq!(
            apply_text(&mut store, id, PropertyField::Kind, "1"),
            Err(PropertyError::NotNumeric {
                field: PropertyField::Kind
            })
        );
        assert!(apply_kind(&mut store, id, TubeKind::Rectangular));
        assert_eq!(store.get(id).unwrap().kind, TubeKind::Rectangular);
    }

    #[test]
    fn test_unknown_tube_is_ignored() {
        let (mut store, _) = store();
        assert_eq!(apply_text(&mut store, TubeId(9), PropertyField::Width, "2"), Ok(false));
    }
}
