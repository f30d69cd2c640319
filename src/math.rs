//! Math types and basis construction for MirrorBox

pub use glam::{Vec3, Vec4};

use crate::error::{MirrorBoxError, Result};

/// Relative length below which an orthogonal remainder is treated as zero.
pub const DEGENERATE_EPSILON: f32 = 1e-6;

pub const WHITE: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);
pub const BLACK: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);
pub const RED: Vec4 = Vec4::new(1.0, 0.0, 0.0, 1.0);
pub const GREEN: Vec4 = Vec4::new(0.0, 1.0, 0.0, 1.0);
pub const BLUE: Vec4 = Vec4::new(0.0, 0.0, 1.0, 1.0);
pub const GRAY20: Vec4 = Vec4::new(0.2, 0.2, 0.2, 1.0);
pub const GRAY40: Vec4 = Vec4::new(0.4, 0.4, 0.4, 1.0);
pub const GRAY60: Vec4 = Vec4::new(0.6, 0.6, 0.6, 1.0);
pub const GRAY80: Vec4 = Vec4::new(0.8, 0.8, 0.8, 1.0);

/// Grey colour factor `(c, c, c, 1)` that scales a ray's colour by `coefficient`.
pub fn coefficient_to_colour_factor(coefficient: f32) -> Vec4 {
    Vec4::new(coefficient, coefficient, coefficient, 1.0)
}

/// Reflection coefficient for a reflection loss given in dB (a negative number).
///
/// -10 dB yields 0.9, 0 dB yields 0.
pub fn reflection_coefficient_from_loss_db(loss_db: f32) -> f32 {
    1.0 - 10f32.powf(0.1 * loss_db)
}

/// Returns the part of `v` that is perpendicular to `w`.
pub fn part_perpendicular_to(v: Vec3, w: Vec3) -> Vec3 {
    v - v.project_onto(w)
}

/// Returns `v` normalized, or `DegenerateBasis` if it has no usable direction.
pub fn normalized(v: Vec3, what: &str) -> Result<Vec3> {
    v.try_normalize()
        .ok_or_else(|| MirrorBoxError::DegenerateBasis(format!("{} has zero length", what)))
}

/// Unit vector along the part of `v` perpendicular to `w`.
///
/// Fails if `w` is zero or `v` is (nearly) parallel to `w`.
pub fn orthonormal_to(v: Vec3, w: Vec3, what: &str) -> Result<Vec3> {
    if w.length_squared() == 0.0 {
        return Err(MirrorBoxError::DegenerateBasis(format!(
            "reference direction for {} has zero length",
            what
        )));
    }
    let remainder = part_perpendicular_to(v, w);
    if !remainder.is_finite() || remainder.length() <= DEGENERATE_EPSILON * v.length() {
        return Err(MirrorBoxError::DegenerateBasis(format!(
            "{} is parallel to the primary direction",
            what
        )));
    }
    normalized(remainder, what)
}

/// Unit vector along `w1 × w2`, oriented like the projection of `v` onto it.
///
/// Fails if `w1` and `w2` are parallel or `v` lies in their span.
pub fn orthonormal_to_pair(v: Vec3, w1: Vec3, w2: Vec3, what: &str) -> Result<Vec3> {
    let axis = w1.cross(w2);
    if axis.length() <= DEGENERATE_EPSILON * w1.length() * w2.length() {
        return Err(MirrorBoxError::DegenerateBasis(format!(
            "reference directions for {} are parallel",
            what
        )));
    }
    let projection = v.project_onto(axis);
    if !projection.is_finite() || projection.length() <= DEGENERATE_EPSILON * v.length() {
        return Err(MirrorBoxError::DegenerateBasis(format!(
            "{} lies in the plane of the first two directions",
            what
        )));
    }
    normalized(projection, what)
}

/// An orthonormal frame of three unit vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub primary: Vec3,
    pub secondary: Vec3,
    pub tertiary: Vec3,
}

impl Basis {
    /// Builds an orthonormal frame from three directions by successive projection.
    ///
    /// `primary` is normalized, `secondary` loses its component along `primary`, and
    /// `tertiary` keeps only its component along `primary × secondary`.
    pub fn from_directions(primary: Vec3, secondary: Vec3, tertiary: Vec3) -> Result<Self> {
        let primary = normalized(primary, "primary direction")?;
        let secondary = orthonormal_to(secondary, primary, "secondary direction")?;
        let tertiary = orthonormal_to_pair(tertiary, primary, secondary, "tertiary direction")?;
        Ok(Self {
            primary,
            secondary,
            tertiary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-6;

    fn assert_orthonormal(basis: &Basis) {
        for v in [basis.primary, basis.secondary, basis.tertiary] {
            assert!((v.length() - 1.0).abs() < TOLERANCE, "{:?} is not unit", v);
        }
        assert!(basis.primary.dot(basis.secondary).abs() < TOLERANCE);
        assert!(basis.primary.dot(basis.tertiary).abs() < TOLERANCE);
        assert!(basis.secondary.dot(basis.tertiary).abs() < TOLERANCE);
    }

    #[test]
    fn test_basis_from_skewed_directions() {
        let inputs = [
            (Vec3::X, Vec3::new(1.0, 1.0, 0.0), Vec3::new(0.3, 0.2, 1.0)),
            (
                Vec3::new(0.0, 2.0, 0.0),
                Vec3::new(0.5, 0.5, 0.5),
                Vec3::new(1.0, 0.0, 0.0),
            ),
            (
                Vec3::new(1.0, 2.0, 3.0),
                Vec3::new(-2.0, 0.5, 1.0),
                Vec3::new(0.0, 0.0, -1.0),
            ),
        ];
        for (v1, v2, v3) in inputs {
            let basis = Basis::from_directions(v1, v2, v3).unwrap();
            assert_orthonormal(&basis);
        }
    }

    #[test]
    fn test_tertiary_keeps_orientation() {
        let up = Basis::from_directions(Vec3::X, Vec3::Y, Vec3::new(0.2, 0.1, 3.0)).unwrap();
        assert!((up.tertiary - Vec3::Z).length() < TOLERANCE);

        let down = Basis::from_directions(Vec3::X, Vec3::Y, Vec3::new(0.2, 0.1, -3.0)).unwrap();
        assert!((down.tertiary + Vec3::Z).length() < TOLERANCE);
    }

    #[test]
    fn test_secondary_already_orthogonal_is_unchanged() {
        let basis = Basis::from_directions(Vec3::Z, Vec3::X, Vec3::Y).unwrap();
        assert_eq!(basis.primary, Vec3::Z);
        assert_eq!(basis.secondary, Vec3::X);
        assert_eq!(basis.tertiary, Vec3::Y);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(matches!(
            Basis::from_directions(Vec3::ZERO, Vec3::Y, Vec3::Z),
            Err(MirrorBoxError::DegenerateBasis(_))
        ));
        assert!(matches!(
            Basis::from_directions(Vec3::X, Vec3::new(2.0, 0.0, 0.0), Vec3::Z),
            Err(MirrorBoxError::DegenerateBasis(_))
        ));
        assert!(matches!(
            Basis::from_directions(Vec3::X, Vec3::Y, Vec3::new(1.0, 1.0, 0.0)),
            Err(MirrorBoxError::DegenerateBasis(_))
        ));
        assert!(matches!(
            Basis::from_directions(Vec3::X, Vec3::Y, Vec3::ZERO),
            Err(MirrorBoxError::DegenerateBasis(_))
        ));
    }

    #[test]
    fn test_part_perpendicular_to() {
        let v = part_perpendicular_to(Vec3::new(3.0, 4.0, 0.0), Vec3::new(2.0, 0.0, 0.0));
        assert!((v - Vec3::new(0.0, 4.0, 0.0)).length() < TOLERANCE);
    }

    #[test]
    fn test_reflection_coefficient_from_loss_db() {
        assert!((reflection_coefficient_from_loss_db(-10.0) - 0.9).abs() < 1e-6);
        assert!(reflection_coefficient_from_loss_db(0.0).abs() < 1e-6);
        assert_eq!(coefficient_to_colour_factor(0.5), Vec4::new(0.5, 0.5, 0.5, 1.0));
    }
}
