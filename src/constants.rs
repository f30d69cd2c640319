//! Constants shared with the intersection kernel.
//!
//! Capacities, type tags, enum codes and packing strides are defined here once.
//! The kernel receives them through [`kernel_header`], which is prepended to the
//! kernel source before compilation, so the two sides cannot drift apart.

use glam::Vec4;
use std::fmt;

/// Maximum number of scene objects.
pub const MAX_SCENE_OBJECTS: usize = 50;
/// Maximum number of rectangle shapes.
pub const MAX_RECTANGLE_SHAPES: usize = 50;
/// Maximum number of sphere shapes.
pub const MAX_SPHERE_SHAPES: usize = 10;
/// Maximum number of cylinder mantle shapes.
pub const MAX_CYLINDER_MANTLE_SHAPES: usize = 10;
/// Maximum number of colour surfaces.
pub const MAX_COLOUR_SURFACES: usize = 10;
/// Maximum number of mirror surfaces.
pub const MAX_MIRROR_SURFACES: usize = 10;
/// Maximum number of thin focussing surfaces.
pub const MAX_THIN_FOCUSSING_SURFACES: usize = 10;
/// Maximum number of checkerboard surfaces.
pub const MAX_CHECKERBOARD_SURFACES: usize = 2;

/// Floats per packed rectangle: corner, span1, span2, n_normal.
pub const RECTANGLE_STRIDE: usize = 12;
/// Floats per packed sphere: centre, radius, radius2, n_theta0, n_phi0, n_phi90.
pub const SPHERE_STRIDE: usize = 14;
/// Floats per packed cylinder mantle: centre, radius, radius2, length, n_axis, n_phi0, n_phi90.
pub const CYLINDER_MANTLE_STRIDE: usize = 15;
/// Floats per packed colour surface: rgba, semitransparent.
pub const COLOUR_STRIDE: usize = 5;
/// Floats per packed mirror surface: rgba.
pub const MIRROR_STRIDE: usize = 4;
/// Floats per packed thin focussing surface.
pub const THIN_FOCUSSING_STRIDE: usize = 14;
/// Floats per packed checkerboard surface: widths, two rgba, two flags.
pub const CHECKERBOARD_STRIDE: usize = 12;
/// Ints per packed scene object.
pub const SCENE_OBJECT_STRIDE: usize = 5;

pub const IDEAL_REFRACTION_TYPE: i32 = 0;
pub const PHASE_HOLOGRAM_REFRACTION_TYPE: i32 = 1;

pub const SPHERICAL_FOCUSSING_TYPE: i32 = 0;
pub const CYLINDRICAL_FOCUSSING_TYPE: i32 = 1;
pub const TORIC_FOCUSSING_TYPE: i32 = 2;

/// Approximate transmission coefficient of a single air-glass interface.
pub const ONE_SURFACE_TRANSMISSION_COEFFICIENT: f32 = 0.96;
/// Approximate transmission coefficient of two air-glass interfaces.
pub const TWO_SURFACE_TRANSMISSION_COEFFICIENT: f32 = 0.9216;

pub const ONE_SURFACE_COLOUR_FACTOR: Vec4 = Vec4::new(
    ONE_SURFACE_TRANSMISSION_COEFFICIENT,
    ONE_SURFACE_TRANSMISSION_COEFFICIENT,
    ONE_SURFACE_TRANSMISSION_COEFFICIENT,
    1.0,
);
pub const TWO_SURFACE_COLOUR_FACTOR: Vec4 = Vec4::new(
    TWO_SURFACE_TRANSMISSION_COEFFICIENT,
    TWO_SURFACE_TRANSMISSION_COEFFICIENT,
    TWO_SURFACE_TRANSMISSION_COEFFICIENT,
    1.0,
);

/// The closed set of shape kinds understood by the kernel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Sphere,
    CylinderMantle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [Self::Rectangle, Self::Sphere, Self::CylinderMantle];

    /// Integer type tag used by the kernel.
    pub const fn type_tag(self) -> i32 {
        match self {
            Self::Rectangle => 0,
            Self::Sphere => 1,
            Self::CylinderMantle => 2,
        }
    }

    pub const fn capacity(self) -> usize {
        match self {
            Self::Rectangle => MAX_RECTANGLE_SHAPES,
            Self::Sphere => MAX_SPHERE_SHAPES,
            Self::CylinderMantle => MAX_CYLINDER_MANTLE_SHAPES,
        }
    }

    pub const fn stride(self) -> usize {
        match self {
            Self::Rectangle => RECTANGLE_STRIDE,
            Self::Sphere => SPHERE_STRIDE,
            Self::CylinderMantle => CYLINDER_MANTLE_STRIDE,
        }
    }

    /// Name of the kernel `#define` carrying this kind's type tag.
    pub const fn tag_name(self) -> &'static str {
        match self {
            Self::Rectangle => "RECTANGLE_SHAPE",
            Self::Sphere => "SPHERE_SHAPE",
            Self::CylinderMantle => "CYLINDER_MANTLE_SHAPE",
        }
    }

    /// Name of the kernel `#define` carrying this kind's capacity.
    pub const fn capacity_name(self) -> &'static str {
        match self {
            Self::Rectangle => "MAX_RECTANGLE_SHAPES",
            Self::Sphere => "MAX_SPHERE_SHAPES",
            Self::CylinderMantle => "MAX_CYLINDER_MANTLE_SHAPES",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rectangle => "rectangle shape",
            Self::Sphere => "sphere shape",
            Self::CylinderMantle => "cylinder mantle shape",
        };
        f.write_str(name)
    }
}

/// The closed set of surface kinds understood by the kernel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    Colour,
    Mirror,
    ThinFocussing,
    Checkerboard,
}

impl SurfaceKind {
    pub const ALL: [SurfaceKind; 4] = [
        Self::Colour,
        Self::Mirror,
        Self::ThinFocussing,
        Self::Checkerboard,
    ];

    /// Integer type tag used by the kernel.
    pub const fn type_tag(self) -> i32 {
        match self {
            Self::Colour => 0,
            Self::Mirror => 1,
            Self::ThinFocussing => 2,
            Self::Checkerboard => 3,
        }
    }

    pub const fn capacity(self) -> usize {
        match self {
            Self::Colour => MAX_COLOUR_SURFACES,
            Self::Mirror => MAX_MIRROR_SURFACES,
            Self::ThinFocussing => MAX_THIN_FOCUSSING_SURFACES,
            Self::Checkerboard => MAX_CHECKERBOARD_SURFACES,
        }
    }

    pub const fn stride(self) -> usize {
        match self {
            Self::Colour => COLOUR_STRIDE,
            Self::Mirror => MIRROR_STRIDE,
            Self::ThinFocussing => THIN_FOCUSSING_STRIDE,
            Self::Checkerboard => CHECKERBOARD_STRIDE,
        }
    }

    pub const fn tag_name(self) -> &'static str {
        match self {
            Self::Colour => "COLOUR_SURFACE",
            Self::Mirror => "MIRROR_SURFACE",
            Self::ThinFocussing => "THIN_FOCUSSING_SURFACE",
            Self::Checkerboard => "CHECKERBOARD_SURFACE",
        }
    }

    pub const fn capacity_name(self) -> &'static str {
        match self {
            Self::Colour => "MAX_COLOUR_SURFACES",
            Self::Mirror => "MAX_MIRROR_SURFACES",
            Self::ThinFocussing => "MAX_THIN_FOCUSSING_SURFACES",
            Self::Checkerboard => "MAX_CHECKERBOARD_SURFACES",
        }
    }
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Colour => "colour surface",
            Self::Mirror => "mirror surface",
            Self::ThinFocussing => "thin focussing surface",
            Self::Checkerboard => "checkerboard surface",
        };
        f.write_str(name)
    }
}

/// Any record kind held by the registry, used for counts and error reporting.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Shape(ShapeKind),
    Surface(SurfaceKind),
    SceneObject,
}

impl RecordKind {
    pub const fn capacity(self) -> usize {
        match self {
            Self::Shape(kind) => kind.capacity(),
            Self::Surface(kind) => kind.capacity(),
            Self::SceneObject => MAX_SCENE_OBJECTS,
        }
    }

    /// Values per packed record: floats for shapes and surfaces, ints for scene objects.
    pub const fn stride(self) -> usize {
        match self {
            Self::Shape(kind) => kind.stride(),
            Self::Surface(kind) => kind.stride(),
            Self::SceneObject => SCENE_OBJECT_STRIDE,
        }
    }
}

impl From<ShapeKind> for RecordKind {
    fn from(kind: ShapeKind) -> Self {
        Self::Shape(kind)
    }
}

impl From<SurfaceKind> for RecordKind {
    fn from(kind: SurfaceKind) -> Self {
        Self::Surface(kind)
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape(kind) => fmt::Display::fmt(kind, f),
            Self::Surface(kind) => fmt::Display::fmt(kind, f),
            Self::SceneObject => f.write_str("scene object"),
        }
    }
}

const _: () = {
    assert!(MAX_SCENE_OBJECTS > 0);
    let mut i = 0;
    while i < ShapeKind::ALL.len() {
        assert!(ShapeKind::ALL[i].capacity() > 0);
        assert!(ShapeKind::ALL[i].type_tag() == i as i32);
        i += 1;
    }
    let mut j = 0;
    while j < SurfaceKind::ALL.len() {
        assert!(SurfaceKind::ALL[j].capacity() > 0);
        assert!(SurfaceKind::ALL[j].type_tag() == j as i32);
        j += 1;
    }
};

/// Renders every cross-boundary constant as a block of `#define`s for the kernel source.
pub fn kernel_header() -> String {
    let mut defines: Vec<(&str, i64)> = vec![("MAX_SCENE_OBJECTS", MAX_SCENE_OBJECTS as i64)];
    for kind in ShapeKind::ALL {
        defines.push((kind.capacity_name(), kind.capacity() as i64));
    }
    for kind in SurfaceKind::ALL {
        defines.push((kind.capacity_name(), kind.capacity() as i64));
    }
    for kind in ShapeKind::ALL {
        defines.push((kind.tag_name(), kind.type_tag() as i64));
    }
    for kind in SurfaceKind::ALL {
        defines.push((kind.tag_name(), kind.type_tag() as i64));
    }
    defines.extend([
        ("IDEAL_REFRACTION_TYPE", IDEAL_REFRACTION_TYPE as i64),
        (
            "PHASE_HOLOGRAM_REFRACTION_TYPE",
            PHASE_HOLOGRAM_REFRACTION_TYPE as i64,
        ),
        ("SPHERICAL_FOCUSSING_TYPE", SPHERICAL_FOCUSSING_TYPE as i64),
        ("CYLINDRICAL_FOCUSSING_TYPE", CYLINDRICAL_FOCUSSING_TYPE as i64),
        ("TORIC_FOCUSSING_TYPE", TORIC_FOCUSSING_TYPE as i64),
    ]);

    let mut header = String::from("// generated by mirrorbox, do not edit\n");
    for (name, value) in defines {
        header.push_str(&format!("#define {} {}\n", name, value));
    }
    header
}
