//! # MirrorBox
//!
//! Scene description and kernel export for a GPU raytracer that simulates the view inside
//! simple mirror cabinets.
//!
//! The renderer runs one massively parallel intersection kernel per frame. That kernel has
//! no objects, pointers or dynamic dispatch: it reads fixed-length arrays of shapes and
//! surfaces, one per kind, and an array of scene objects that refer into them by
//! (type tag, index). MirrorBox is the host side of that contract.
//!
//! ## Quick Start
//!
//! ```
//! use mirrorbox::*;
//!
//! let mut scene = RaytracingScene::new();
//!
//! // register a shape and a surface, then bind them into a scene object
//! let mirror = scene.register_surface(MirrorSurface::with_reflection_coefficient(0.9))?;
//! let wall = scene.register_shape(RectangleShape::from_spans(
//!     Vec3::new(-1.0, -0.5, -1.0),
//!     Vec3::new(1.0, 0.0, 0.5),
//!     Vec3::new(0.0, 1.0, 0.0),
//! )?)?;
//! scene.bind(true, wall, mirror)?;
//!
//! // once per frame: upload only if something changed
//! let mut bridge = ExportBridge::new();
//! if let Some(snapshot) = bridge.refresh(&scene) {
//!     let packed = snapshot.pack();
//!     assert_eq!(packed.counts.rectangle_shapes, 1);
//! }
//! # Ok::<(), MirrorBoxError>(())
//! ```
//!
//! ## Key Components
//!
//! - **[`RaytracingScene`]**: fixed-capacity registry of shapes, surfaces and scene objects
//! - **[`scene`]**: shape and surface variants and their constructors
//! - **[`ExportBridge`]** / **[`SceneSnapshot`]**: read-only copies for the kernel
//! - **[`constants`]**: capacities and type tags shared with the kernel
//! - **[`MirrorBox`]**: the mirror cabinet scene built from a [`MirrorBoxDesc`]

pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod math;
pub mod mirror_box;
pub mod scene;

pub use config::MirrorBoxDesc;
pub use constants::{RecordKind, ShapeKind, SurfaceKind};
pub use error::MirrorBoxError;
pub use export::{ExportBridge, PackedScene, SceneSnapshot};
pub use math::{Vec3, Vec4};
pub use mirror_box::MirrorBox;
pub use scene::{
    CheckerboardSurface, ColourSurface, CylinderMantleShape, MirrorSurface, RaytracingScene,
    RectangleShape, SceneObject, ShapeRef, SphereShape, SurfaceRef, ThinFocussingSurface,
};
