//! Scene description for the raytracing kernel.
//!
//! The kernel has no notion of objects or pointers. It sees one fixed-length array per
//! shape kind and per surface kind, plus an array of scene objects that refer into
//! those arrays by (type tag, index). This module is the host-side model of that layout.
//!
//! # Overview
//!
//! 1. **Shapes** - geometry with an orthonormal local frame ([`RectangleShape`],
//!    [`SphereShape`], [`CylinderMantleShape`])
//! 2. **Surfaces** - what a ray does when it hits a shape ([`ColourSurface`],
//!    [`MirrorSurface`], [`ThinFocussingSurface`], [`CheckerboardSurface`])
//! 3. **Scene objects** - a visible binding of one shape and one surface
//! 4. **RaytracingScene** - the registry that owns all of the above
//!
//! # Workflow
//!
//! 1. Build shape and surface values
//! 2. Register them with a `RaytracingScene`, keeping the returned handles
//! 3. Bind handles into scene objects
//! 4. Export the scene with [`crate::export::ExportBridge`] whenever it changed
//!
//! # Example
//!
//! ```
//! use mirrorbox::math::Vec3;
//! use mirrorbox::scene::{ColourSurface, RaytracingScene, SphereShape};
//!
//! let mut scene = RaytracingScene::new();
//! let red = scene.register_surface(ColourSurface::RED)?;
//! let ball = scene.register_shape(SphereShape::at(Vec3::new(1.0, 0.0, -1.0), 0.02))?;
//! scene.bind(true, ball, red)?;
//!
//! scene.sphere_mut(ball.index)?.set_radius(0.1);
//! assert_eq!(scene.sphere(ball.index)?.radius2(), 0.1 * 0.1);
//! # Ok::<(), mirrorbox::MirrorBoxError>(())
//! ```

pub mod object;
pub mod registry;
pub mod shape;
pub mod surface;

pub use object::{SceneObject, ShapeRef, SurfaceRef};
pub use registry::{RaytracingScene, SceneCounts, SlotArray};
pub use shape::{CylinderMantleShape, RectangleShape, Shape, SphereShape};
pub use surface::{
    CheckerboardSurface, ColourSurface, FocussingType, MirrorSurface, RefractionType, Surface,
    ThinFocussingSurface,
};
