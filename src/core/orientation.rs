//! Rotations-Hilfen für Anker-Orientierungen.

use glam::{Mat3, Quat, Vec3};

/// Rotation, die `+Z` auf `forward` abbildet und `+Y` möglichst nahe an `up` hält.
///
/// Fallbacks: `forward ∥ up` → kürzeste Drehung von `+Z` nach `forward`,
/// `forward ≈ 0` → Identität.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let Some(forward) = forward.try_normalize() else {
        return Quat::IDENTITY;
    };
    let Some(right) = up.cross(forward).try_normalize() else {
        return Quat::from_rotation_arc(Vec3::Z, forward);
    };
    let up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, forward)).normalize()
}
