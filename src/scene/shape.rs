//! Geometric primitives understood by the intersection kernel.
//!
//! Every shape carries a local orthonormal frame. Frames are only ever produced by the
//! constructors in this module, which project the caller's directions into a proper
//! basis (see [`Basis::from_directions`]) and reject degenerate input instead of storing
//! non-finite vectors.

use crate::constants::ShapeKind;
use crate::error::{MirrorBoxError, Result};
use crate::math::{self, Basis, Vec3};

/// A parallelogram spanned by two vectors from a corner, normally a rectangle.
///
/// `span1` and `span2` carry the extent of the rectangle and are not normalized;
/// `span2` is made perpendicular to `span1`, and `n_normal` is a unit vector
/// perpendicular to both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleShape {
    corner: Vec3,
    span1: Vec3,
    span2: Vec3,
    n_normal: Vec3,
}

impl RectangleShape {
    /// Unit square in the z = 0 plane, centred on the origin, facing +z.
    pub const Z_UNIT: Self = Self {
        corner: Vec3::new(-0.5, -0.5, 0.0),
        span1: Vec3::X,
        span2: Vec3::Y,
        n_normal: Vec3::Z,
    };

    /// Creates a rectangle with an explicit outward normal.
    ///
    /// Only the component of `normal` along `span1 × span2` is kept, so its sign
    /// decides which side is "outside".
    pub fn new(corner: Vec3, span1: Vec3, span2: Vec3, normal: Vec3) -> Result<Self> {
        if span1.length_squared() == 0.0 {
            return Err(MirrorBoxError::DegenerateBasis(
                "span1 has zero length".to_string(),
            ));
        }
        // validates that span2 is not parallel to span1
        math::orthonormal_to(span2, span1, "span2")?;
        let span2 = math::part_perpendicular_to(span2, span1);
        let n_normal = math::orthonormal_to_pair(normal, span1, span2, "normal")?;
        Ok(Self {
            corner,
            span1,
            span2,
            n_normal,
        })
    }

    /// Creates a rectangle whose normal follows the right-hand rule, `span1 × span2`.
    ///
    /// ```
    /// use mirrorbox::math::Vec3;
    /// use mirrorbox::scene::RectangleShape;
    ///
    /// let rectangle = RectangleShape::from_spans(Vec3::ZERO, Vec3::X, Vec3::Y).unwrap();
    /// assert_eq!(rectangle.n_normal(), Vec3::Z);
    /// ```
    pub fn from_spans(corner: Vec3, span1: Vec3, span2: Vec3) -> Result<Self> {
        Self::new(corner, span1, span2, span1.cross(span2))
    }

    pub fn corner(&self) -> Vec3 {
        self.corner
    }

    pub fn span1(&self) -> Vec3 {
        self.span1
    }

    pub fn span2(&self) -> Vec3 {
        self.span2
    }

    pub fn n_normal(&self) -> Vec3 {
        self.n_normal
    }

    /// Moves the rectangle without changing its spans or orientation.
    pub fn set_corner(&mut self, corner: Vec3) {
        self.corner = corner;
    }
}

impl Default for RectangleShape {
    fn default() -> Self {
        Self::Z_UNIT
    }
}

/// A sphere with a local polar frame used for surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereShape {
    centre: Vec3,
    radius: f32,
    radius2: f32,
    /// direction of theta = 0 (north pole)
    n_theta0: Vec3,
    /// direction of phi = 0 on the equator
    n_phi0: Vec3,
    /// direction of phi = 90 degrees on the equator
    n_phi90: Vec3,
}

impl SphereShape {
    /// Unit sphere at the origin with its north pole along +z.
    pub const UNIT: Self = Self {
        centre: Vec3::ZERO,
        radius: 1.0,
        radius2: 1.0,
        n_theta0: Vec3::Z,
        n_phi0: Vec3::X,
        n_phi90: Vec3::Y,
    };

    pub fn new(centre: Vec3, radius: f32, theta0: Vec3, phi0: Vec3, phi90: Vec3) -> Result<Self> {
        let frame = Basis::from_directions(theta0, phi0, phi90)?;
        Ok(Self {
            centre,
            radius,
            radius2: radius * radius,
            n_theta0: frame.primary,
            n_phi0: frame.secondary,
            n_phi90: frame.tertiary,
        })
    }

    /// Sphere with the default frame (+z pole, +x at phi = 0, +y at phi = 90 degrees).
    pub fn at(centre: Vec3, radius: f32) -> Self {
        Self {
            centre,
            radius,
            radius2: radius * radius,
            ..Self::UNIT
        }
    }

    pub fn centre(&self) -> Vec3 {
        self.centre
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn radius2(&self) -> f32 {
        self.radius2
    }

    pub fn n_theta0(&self) -> Vec3 {
        self.n_theta0
    }

    pub fn n_phi0(&self) -> Vec3 {
        self.n_phi0
    }

    pub fn n_phi90(&self) -> Vec3 {
        self.n_phi90
    }

    pub fn set_centre(&mut self, centre: Vec3) {
        self.centre = centre;
    }

    /// Sets the radius and keeps the cached square in step.
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
        self.radius2 = radius * radius;
    }
}

impl Default for SphereShape {
    fn default() -> Self {
        Self::UNIT
    }
}

/// The curved side of a finite cylinder, without end caps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderMantleShape {
    centre: Vec3,
    radius: f32,
    radius2: f32,
    length: f32,
    n_axis: Vec3,
    n_phi0: Vec3,
    n_phi90: Vec3,
}

impl CylinderMantleShape {
    /// Unit-radius, unit-length mantle centred on the origin, axis along +x.
    pub const X_UNIT: Self = Self {
        centre: Vec3::ZERO,
        radius: 1.0,
        radius2: 1.0,
        length: 1.0,
        n_axis: Vec3::X,
        n_phi0: Vec3::Y,
        n_phi90: Vec3::Z,
    };

    pub fn new(
        centre: Vec3,
        radius: f32,
        length: f32,
        axis: Vec3,
        phi0: Vec3,
        phi90: Vec3,
    ) -> Result<Self> {
        let frame = Basis::from_directions(axis, phi0, phi90)?;
        Ok(Self {
            centre,
            radius,
            radius2: radius * radius,
            length,
            n_axis: frame.primary,
            n_phi0: frame.secondary,
            n_phi90: frame.tertiary,
        })
    }

    pub fn centre(&self) -> Vec3 {
        self.centre
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn radius2(&self) -> f32 {
        self.radius2
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn n_axis(&self) -> Vec3 {
        self.n_axis
    }

    pub fn n_phi0(&self) -> Vec3 {
        self.n_phi0
    }

    pub fn n_phi90(&self) -> Vec3 {
        self.n_phi90
    }

    pub fn set_centre(&mut self, centre: Vec3) {
        self.centre = centre;
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
        self.radius2 = radius * radius;
    }

    pub fn set_length(&mut self, length: f32) {
        self.length = length;
    }
}

impl Default for CylinderMantleShape {
    fn default() -> Self {
        Self::X_UNIT
    }
}

/// Any shape, tagged by its kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rectangle(RectangleShape),
    Sphere(SphereShape),
    CylinderMantle(CylinderMantleShape),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Rectangle(_) => ShapeKind::Rectangle,
            Self::Sphere(_) => ShapeKind::Sphere,
            Self::CylinderMantle(_) => ShapeKind::CylinderMantle,
        }
    }
}

impl From<RectangleShape> for Shape {
    fn from(shape: RectangleShape) -> Self {
        Self::Rectangle(shape)
    }
}

impl From<SphereShape> for Shape {
    fn from(shape: SphereShape) -> Self {
        Self::Sphere(shape)
    }
}

impl From<CylinderMantleShape> for Shape {
    fn from(shape: CylinderMantleShape) -> Self {
        Self::CylinderMantle(shape)
    }
}
