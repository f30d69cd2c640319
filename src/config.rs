//! Configuration for the mirror cabinet scene

use crate::error::{MirrorBoxError, Result};

/// Configuration descriptor for a [`MirrorBox`](crate::mirror_box::MirrorBox).
///
/// The four mirrors stand on the edges of the quadrilateral
/// (x1, z1) -> (x2, z2) -> (x3, z3) -> (x4, z4) -> (x1, z1) in the horizontal plane.
#[derive(Debug, Clone, PartialEq)]
pub struct MirrorBoxDesc {
    pub x1: f32,
    pub z1: f32,
    pub x2: f32,
    pub z2: f32,
    pub x3: f32,
    pub z3: f32,
    pub x4: f32,
    pub z4: f32,
    /// Height of every mirror
    pub mirror_height: f32,
    /// Height of the mirrors' centre line and of the sphere's centre (eye level in VR)
    pub base_y: f32,
    /// Radius of the sphere placed at corner 3
    pub sphere_radius: f32,
    /// Reflection loss of the mirrors in dB, zero or negative
    pub reflection_loss_db: f32,
}

impl Default for MirrorBoxDesc {
    fn default() -> Self {
        Self {
            x1: -1.0,
            z1: -1.0,
            x2: 0.0,
            z2: -0.5,
            x3: 1.0,
            z3: -1.0,
            x4: 0.0,
            z4: 0.5,
            mirror_height: 1.0,
            base_y: 0.0,
            sphere_radius: 0.02,
            reflection_loss_db: -10.0,
        }
    }
}

impl MirrorBoxDesc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mirror_height(mut self, height: f32) -> Self {
        self.mirror_height = height;
        self
    }

    pub fn base_y(mut self, y: f32) -> Self {
        self.base_y = y;
        self
    }

    pub fn sphere_radius(mut self, radius: f32) -> Self {
        self.sphere_radius = radius;
        self
    }

    pub fn reflection_loss_db(mut self, loss_db: f32) -> Self {
        self.reflection_loss_db = loss_db;
        self
    }

    pub fn z2(mut self, z: f32) -> Self {
        self.z2 = z;
        self
    }

    pub fn z4(mut self, z: f32) -> Self {
        self.z4 = z;
        self
    }

    /// Corners of the cabinet's floor plan, in order.
    pub fn corners(&self) -> [(f32, f32); 4] {
        [
            (self.x1, self.z1),
            (self.x2, self.z2),
            (self.x3, self.z3),
            (self.x4, self.z4),
        ]
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.mirror_height > 0.0) {
            return Err(MirrorBoxError::InvalidParameter(format!(
                "mirror height must be positive, got {}",
                self.mirror_height
            )));
        }
        if !(self.sphere_radius >= 0.0) {
            return Err(MirrorBoxError::InvalidParameter(format!(
                "sphere radius must not be negative, got {}",
                self.sphere_radius
            )));
        }
        if !(self.reflection_loss_db <= 0.0) {
            return Err(MirrorBoxError::InvalidParameter(format!(
                "reflection loss must be zero or negative dB, got {}",
                self.reflection_loss_db
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(MirrorBoxDesc::default().validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let desc = MirrorBoxDesc::new()
            .mirror_height(2.0)
            .base_y(1.6)
            .sphere_radius(0.1)
            .z2(-0.25);
        assert_eq!(desc.mirror_height, 2.0);
        assert_eq!(desc.base_y, 1.6);
        assert_eq!(desc.corners()[1], (0.0, -0.25));
        assert_eq!(desc.corners()[3], (0.0, 0.5));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(MirrorBoxDesc::new().mirror_height(0.0).validate().is_err());
        assert!(MirrorBoxDesc::new().sphere_radius(-1.0).validate().is_err());
        assert!(MirrorBoxDesc::new().reflection_loss_db(3.0).validate().is_err());
        assert!(
            MirrorBoxDesc::new()
                .mirror_height(f32::NAN)
                .validate()
                .is_err()
        );
    }
}
