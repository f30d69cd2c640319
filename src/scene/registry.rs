use super::object::{SceneObject, ShapeRef, SurfaceRef};
use super::shape::{CylinderMantleShape, RectangleShape, Shape, SphereShape};
use super::surface::{
    CheckerboardSurface, ColourSurface, MirrorSurface, Surface, ThinFocussingSurface,
};
use crate::constants::{RecordKind, ShapeKind, SurfaceKind};
use crate::error::{MirrorBoxError, Result};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SCENE_ID: AtomicU64 = AtomicU64::new(1);

fn next_scene_id() -> u64 {
    NEXT_SCENE_ID.fetch_add(1, Ordering::Relaxed)
}

/// Append-only, fixed-capacity storage for one record kind.
///
/// Only slots `0..len()` exist; the kernel-side padding beyond the count is produced at
/// export time and never stored here.
#[derive(Debug, Clone)]
pub struct SlotArray<T> {
    kind: RecordKind,
    records: Vec<T>,
}

impl<T> SlotArray<T> {
    pub fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            records: Vec::with_capacity(kind.capacity()),
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn capacity(&self) -> usize {
        self.kind.capacity()
    }

    /// Appends a record and returns its index, or fails without touching the array.
    pub fn push(&mut self, record: T) -> Result<usize> {
        if self.records.len() >= self.capacity() {
            log::warn!(
                "Cannot add another {}: capacity of {} reached",
                self.kind,
                self.capacity()
            );
            return Err(MirrorBoxError::CapacityExceeded {
                kind: self.kind,
                capacity: self.capacity(),
            });
        }
        let index = self.records.len();
        self.records.push(record);
        Ok(index)
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        let count = self.records.len();
        self.records
            .get(index)
            .ok_or(MirrorBoxError::IndexOutOfRange {
                kind: self.kind,
                index,
                count,
            })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let count = self.records.len();
        self.records
            .get_mut(index)
            .ok_or(MirrorBoxError::IndexOutOfRange {
                kind: self.kind,
                index,
                count,
            })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }
}

/// Per-kind record counts of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SceneCounts {
    pub scene_objects: usize,
    pub rectangle_shapes: usize,
    pub sphere_shapes: usize,
    pub cylinder_mantle_shapes: usize,
    pub colour_surfaces: usize,
    pub mirror_surfaces: usize,
    pub thin_focussing_surfaces: usize,
    pub checkerboard_surfaces: usize,
}

impl SceneCounts {
    pub fn get(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::SceneObject => self.scene_objects,
            RecordKind::Shape(ShapeKind::Rectangle) => self.rectangle_shapes,
            RecordKind::Shape(ShapeKind::Sphere) => self.sphere_shapes,
            RecordKind::Shape(ShapeKind::CylinderMantle) => self.cylinder_mantle_shapes,
            RecordKind::Surface(SurfaceKind::Colour) => self.colour_surfaces,
            RecordKind::Surface(SurfaceKind::Mirror) => self.mirror_surfaces,
            RecordKind::Surface(SurfaceKind::ThinFocussing) => self.thin_focussing_surfaces,
            RecordKind::Surface(SurfaceKind::Checkerboard) => self.checkerboard_surfaces,
        }
    }
}

impl fmt::Display for SceneCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} scene object(s), {} rectangle(s), {} sphere(s), {} cylinder(s), \
             {} colour surface(s), {} mirror surface(s), {} thin-lens surface(s), \
             {} checkerboard surface(s)",
            self.scene_objects,
            self.rectangle_shapes,
            self.sphere_shapes,
            self.cylinder_mantle_shapes,
            self.colour_surfaces,
            self.mirror_surfaces,
            self.thin_focussing_surfaces,
            self.checkerboard_surfaces
        )
    }
}

/// Owning store of every shape, surface and scene object of one scene.
///
/// `RaytracingScene` is an explicit context object: create one per scene and pass it
/// to whatever builds or exports the scene. Records are only ever appended; a record's
/// index never changes once assigned, and replaying the same sequence of registrations
/// always assigns the same indices.
///
/// # Example
///
/// ```
/// use mirrorbox::math::Vec3;
/// use mirrorbox::scene::{MirrorSurface, RaytracingScene, RectangleShape};
///
/// let mut scene = RaytracingScene::new();
/// let mirror = scene.register_surface(MirrorSurface::PERFECT)?;
/// let wall = scene.register_shape(RectangleShape::from_spans(
///     Vec3::new(-1.0, -0.5, -1.0),
///     Vec3::new(1.0, 0.0, 0.5),
///     Vec3::new(0.0, 1.0, 0.0),
/// )?)?;
/// let object = scene.bind(true, wall, mirror)?;
/// assert_eq!(object, 0);
/// # Ok::<(), mirrorbox::MirrorBoxError>(())
/// ```
#[derive(Debug)]
pub struct RaytracingScene {
    id: u64,
    scene_objects: SlotArray<SceneObject>,
    rectangle_shapes: SlotArray<RectangleShape>,
    sphere_shapes: SlotArray<SphereShape>,
    cylinder_mantle_shapes: SlotArray<CylinderMantleShape>,
    colour_surfaces: SlotArray<ColourSurface>,
    mirror_surfaces: SlotArray<MirrorSurface>,
    thin_focussing_surfaces: SlotArray<ThinFocussingSurface>,
    checkerboard_surfaces: SlotArray<CheckerboardSurface>,
    revision: u64,
}

impl RaytracingScene {
    pub fn new() -> Self {
        Self {
            id: next_scene_id(),
            scene_objects: SlotArray::new(RecordKind::SceneObject),
            rectangle_shapes: SlotArray::new(ShapeKind::Rectangle.into()),
            sphere_shapes: SlotArray::new(ShapeKind::Sphere.into()),
            cylinder_mantle_shapes: SlotArray::new(ShapeKind::CylinderMantle.into()),
            colour_surfaces: SlotArray::new(SurfaceKind::Colour.into()),
            mirror_surfaces: SlotArray::new(SurfaceKind::Mirror.into()),
            thin_focussing_surfaces: SlotArray::new(SurfaceKind::ThinFocussing.into()),
            checkerboard_surfaces: SlotArray::new(SurfaceKind::Checkerboard.into()),
            revision: 0,
        }
    }

    /// Process-unique identity of this scene; a clone gets a fresh one.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Incremented by every registration and every mutable record access.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Adds a shape to the slot array of its kind and returns a handle to it.
    ///
    /// # Errors
    ///
    /// `CapacityExceeded` if that kind's array is full; the scene is left unchanged.
    pub fn register_shape(&mut self, shape: impl Into<Shape>) -> Result<ShapeRef> {
        let shape = shape.into();
        let kind = shape.kind();
        let index = match shape {
            Shape::Rectangle(s) => self.rectangle_shapes.push(s),
            Shape::Sphere(s) => self.sphere_shapes.push(s),
            Shape::CylinderMantle(s) => self.cylinder_mantle_shapes.push(s),
        }?;
        self.revision += 1;
        log::debug!("Registered {} at index {}", kind, index);
        Ok(ShapeRef::new(kind, index))
    }

    /// Adds a surface to the slot array of its kind and returns a handle to it.
    ///
    /// # Errors
    ///
    /// `CapacityExceeded` if that kind's array is full; the scene is left unchanged.
    pub fn register_surface(&mut self, surface: impl Into<Surface>) -> Result<SurfaceRef> {
        let surface = surface.into();
        let kind = surface.kind();
        let index = match surface {
            Surface::Colour(s) => self.colour_surfaces.push(s),
            Surface::Mirror(s) => self.mirror_surfaces.push(s),
            Surface::ThinFocussing(s) => self.thin_focussing_surfaces.push(s),
            Surface::Checkerboard(s) => self.checkerboard_surfaces.push(s),
        }?;
        self.revision += 1;
        log::debug!("Registered {} at index {}", kind, index);
        Ok(SurfaceRef::new(kind, index))
    }

    /// Creates a scene object combining a registered shape and a registered surface.
    ///
    /// Returns the index of the new scene object.
    ///
    /// # Errors
    ///
    /// - `IndexOutOfRange` if either handle points past the count of its kind
    /// - `CapacityExceeded` if the scene object array is full
    pub fn bind(&mut self, visible: bool, shape: ShapeRef, surface: SurfaceRef) -> Result<usize> {
        self.add_scene_object(SceneObject::new(visible, shape, surface))
    }

    /// Adds a prebuilt scene object, with the same checks as [`bind`](Self::bind).
    pub fn add_scene_object(&mut self, scene_object: SceneObject) -> Result<usize> {
        self.check_shape(scene_object.shape)?;
        self.check_surface(scene_object.surface)?;
        let index = self.scene_objects.push(scene_object)?;
        self.revision += 1;
        log::debug!(
            "Bound scene object {}: {} with {}",
            index,
            scene_object.shape,
            scene_object.surface
        );
        Ok(index)
    }

    fn check_shape(&self, shape: ShapeRef) -> Result<()> {
        let count = self.shape_count(shape.kind);
        if shape.index >= count {
            return Err(MirrorBoxError::IndexOutOfRange {
                kind: shape.kind.into(),
                index: shape.index,
                count,
            });
        }
        Ok(())
    }

    fn check_surface(&self, surface: SurfaceRef) -> Result<()> {
        let count = self.surface_count(surface.kind);
        if surface.index >= count {
            return Err(MirrorBoxError::IndexOutOfRange {
                kind: surface.kind.into(),
                index: surface.index,
                count,
            });
        }
        Ok(())
    }

    pub fn shape_count(&self, kind: ShapeKind) -> usize {
        match kind {
            ShapeKind::Rectangle => self.rectangle_shapes.len(),
            ShapeKind::Sphere => self.sphere_shapes.len(),
            ShapeKind::CylinderMantle => self.cylinder_mantle_shapes.len(),
        }
    }

    pub fn surface_count(&self, kind: SurfaceKind) -> usize {
        match kind {
            SurfaceKind::Colour => self.colour_surfaces.len(),
            SurfaceKind::Mirror => self.mirror_surfaces.len(),
            SurfaceKind::ThinFocussing => self.thin_focussing_surfaces.len(),
            SurfaceKind::Checkerboard => self.checkerboard_surfaces.len(),
        }
    }

    pub fn scene_object_count(&self) -> usize {
        self.scene_objects.len()
    }

    pub fn counts(&self) -> SceneCounts {
        SceneCounts {
            scene_objects: self.scene_objects.len(),
            rectangle_shapes: self.rectangle_shapes.len(),
            sphere_shapes: self.sphere_shapes.len(),
            cylinder_mantle_shapes: self.cylinder_mantle_shapes.len(),
            colour_surfaces: self.colour_surfaces.len(),
            mirror_surfaces: self.mirror_surfaces.len(),
            thin_focussing_surfaces: self.thin_focussing_surfaces.len(),
            checkerboard_surfaces: self.checkerboard_surfaces.len(),
        }
    }

    /// Returns a copy of the shape behind a handle.
    pub fn shape(&self, shape: ShapeRef) -> Result<Shape> {
        Ok(match shape.kind {
            ShapeKind::Rectangle => Shape::Rectangle(*self.rectangle_shapes.get(shape.index)?),
            ShapeKind::Sphere => Shape::Sphere(*self.sphere_shapes.get(shape.index)?),
            ShapeKind::CylinderMantle => {
                Shape::CylinderMantle(*self.cylinder_mantle_shapes.get(shape.index)?)
            }
        })
    }

    /// Returns a copy of the surface behind a handle.
    pub fn surface(&self, surface: SurfaceRef) -> Result<Surface> {
        Ok(match surface.kind {
            SurfaceKind::Colour => Surface::Colour(*self.colour_surfaces.get(surface.index)?),
            SurfaceKind::Mirror => Surface::Mirror(*self.mirror_surfaces.get(surface.index)?),
            SurfaceKind::ThinFocussing => {
                Surface::ThinFocussing(*self.thin_focussing_surfaces.get(surface.index)?)
            }
            SurfaceKind::Checkerboard => {
                Surface::Checkerboard(*self.checkerboard_surfaces.get(surface.index)?)
            }
        })
    }

    pub fn scene_object(&self, index: usize) -> Result<&SceneObject> {
        self.scene_objects.get(index)
    }

    pub fn scene_object_mut(&mut self, index: usize) -> Result<&mut SceneObject> {
        let record = self.scene_objects.get_mut(index)?;
        self.revision += 1;
        Ok(record)
    }

    pub fn rectangle(&self, index: usize) -> Result<&RectangleShape> {
        self.rectangle_shapes.get(index)
    }

    pub fn rectangle_mut(&mut self, index: usize) -> Result<&mut RectangleShape> {
        let record = self.rectangle_shapes.get_mut(index)?;
        self.revision += 1;
        Ok(record)
    }

    pub fn sphere(&self, index: usize) -> Result<&SphereShape> {
        self.sphere_shapes.get(index)
    }

    pub fn sphere_mut(&mut self, index: usize) -> Result<&mut SphereShape> {
        let record = self.sphere_shapes.get_mut(index)?;
        self.revision += 1;
        Ok(record)
    }

    pub fn cylinder_mantle(&self, index: usize) -> Result<&CylinderMantleShape> {
        self.cylinder_mantle_shapes.get(index)
    }

    pub fn cylinder_mantle_mut(&mut self, index: usize) -> Result<&mut CylinderMantleShape> {
        let record = self.cylinder_mantle_shapes.get_mut(index)?;
        self.revision += 1;
        Ok(record)
    }

    pub fn colour_surface(&self, index: usize) -> Result<&ColourSurface> {
        self.colour_surfaces.get(index)
    }

    pub fn colour_surface_mut(&mut self, index: usize) -> Result<&mut ColourSurface> {
        let record = self.colour_surfaces.get_mut(index)?;
        self.revision += 1;
        Ok(record)
    }

    pub fn mirror_surface(&self, index: usize) -> Result<&MirrorSurface> {
        self.mirror_surfaces.get(index)
    }

    pub fn mirror_surface_mut(&mut self, index: usize) -> Result<&mut MirrorSurface> {
        let record = self.mirror_surfaces.get_mut(index)?;
        self.revision += 1;
        Ok(record)
    }

    pub fn thin_focussing_surface(&self, index: usize) -> Result<&ThinFocussingSurface> {
        self.thin_focussing_surfaces.get(index)
    }

    pub fn thin_focussing_surface_mut(
        &mut self,
        index: usize,
    ) -> Result<&mut ThinFocussingSurface> {
        let record = self.thin_focussing_surfaces.get_mut(index)?;
        self.revision += 1;
        Ok(record)
    }

    pub fn checkerboard_surface(&self, index: usize) -> Result<&CheckerboardSurface> {
        self.checkerboard_surfaces.get(index)
    }

    pub fn checkerboard_surface_mut(&mut self, index: usize) -> Result<&mut CheckerboardSurface> {
        let record = self.checkerboard_surfaces.get_mut(index)?;
        self.revision += 1;
        Ok(record)
    }

    pub fn scene_objects(&self) -> &[SceneObject] {
        self.scene_objects.as_slice()
    }

    pub fn rectangles(&self) -> &[RectangleShape] {
        self.rectangle_shapes.as_slice()
    }

    pub fn spheres(&self) -> &[SphereShape] {
        self.sphere_shapes.as_slice()
    }

    pub fn cylinder_mantles(&self) -> &[CylinderMantleShape] {
        self.cylinder_mantle_shapes.as_slice()
    }

    pub fn colour_surfaces(&self) -> &[ColourSurface] {
        self.colour_surfaces.as_slice()
    }

    pub fn mirror_surfaces(&self) -> &[MirrorSurface] {
        self.mirror_surfaces.as_slice()
    }

    pub fn thin_focussing_surfaces(&self) -> &[ThinFocussingSurface] {
        self.thin_focussing_surfaces.as_slice()
    }

    pub fn checkerboard_surfaces(&self) -> &[CheckerboardSurface] {
        self.checkerboard_surfaces.as_slice()
    }
}

// A clone is a separate scene and gets its own id.
impl Clone for RaytracingScene {
    fn clone(&self) -> Self {
        Self {
            id: next_scene_id(),
            scene_objects: self.scene_objects.clone(),
            rectangle_shapes: self.rectangle_shapes.clone(),
            sphere_shapes: self.sphere_shapes.clone(),
            cylinder_mantle_shapes: self.cylinder_mantle_shapes.clone(),
            colour_surfaces: self.colour_surfaces.clone(),
            mirror_surfaces: self.mirror_surfaces.clone(),
            thin_focussing_surfaces: self.thin_focussing_surfaces.clone(),
            checkerboard_surfaces: self.checkerboard_surfaces.clone(),
            revision: self.revision,
        }
    }
}

impl Default for RaytracingScene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MAX_CHECKERBOARD_SURFACES, MAX_SCENE_OBJECTS, MAX_SPHERE_SHAPES};
    use crate::math::Vec3;

    #[test]
    fn test_register_shape_assigns_sequential_indices() {
        let mut scene = RaytracingScene::new();
        for i in 0..5 {
            let handle = scene.register_shape(SphereShape::at(Vec3::ZERO, i as f32)).unwrap();
            assert_eq!(handle, ShapeRef::new(ShapeKind::Sphere, i));
        }
        assert_eq!(scene.shape_count(ShapeKind::Sphere), 5);
        assert_eq!(scene.shape_count(ShapeKind::Rectangle), 0);

        let rectangle = scene.register_shape(RectangleShape::Z_UNIT).unwrap();
        assert_eq!(rectangle.index, 0);
    }

    #[test]
    fn test_replay_is_deterministic() {
        let build = || {
            let mut scene = RaytracingScene::new();
            let mut handles = Vec::new();
            handles.push(scene.register_shape(RectangleShape::Z_UNIT).unwrap().index);
            handles.push(scene.register_surface(ColourSurface::RED).unwrap().index);
            handles.push(scene.register_shape(RectangleShape::Z_UNIT).unwrap().index);
            handles.push(scene.register_surface(MirrorSurface::PERFECT).unwrap().index);
            handles.push(scene.register_surface(ColourSurface::BLUE).unwrap().index);
            handles
        };
        assert_eq!(build(), build());
        assert_eq!(build(), vec![0, 0, 1, 0, 1]);
    }

    #[test]
    fn test_shape_capacity() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut scene = RaytracingScene::new();
        for _ in 0..MAX_SPHERE_SHAPES {
            scene.register_shape(SphereShape::UNIT).unwrap();
        }
        let revision = scene.revision();
        let result = scene.register_shape(SphereShape::at(Vec3::ONE, 2.0));
        assert_eq!(
            result,
            Err(MirrorBoxError::CapacityExceeded {
                kind: ShapeKind::Sphere.into(),
                capacity: MAX_SPHERE_SHAPES,
            })
        );
        assert_eq!(scene.shape_count(ShapeKind::Sphere), MAX_SPHERE_SHAPES);
        assert_eq!(scene.revision(), revision);
        assert_eq!(scene.spheres().last(), Some(&SphereShape::UNIT));

        // other kinds are unaffected
        assert!(scene.register_shape(CylinderMantleShape::X_UNIT).is_ok());
    }

    #[test]
    fn test_surface_capacity() {
        let mut scene = RaytracingScene::new();
        for _ in 0..MAX_CHECKERBOARD_SURFACES {
            scene.register_surface(CheckerboardSurface::BLACK_WHITE).unwrap();
        }
        assert!(matches!(
            scene.register_surface(CheckerboardSurface::GRAY_SEMITRANSPARENT),
            Err(MirrorBoxError::CapacityExceeded { .. })
        ));
        assert_eq!(
            scene.surface_count(SurfaceKind::Checkerboard),
            MAX_CHECKERBOARD_SURFACES
        );
    }

    #[test]
    fn test_scene_object_capacity() {
        let mut scene = RaytracingScene::new();
        let shape = scene.register_shape(RectangleShape::Z_UNIT).unwrap();
        let surface = scene.register_surface(ColourSurface::WHITE).unwrap();
        for i in 0..MAX_SCENE_OBJECTS {
            assert_eq!(scene.bind(true, shape, surface).unwrap(), i);
        }
        assert!(matches!(
            scene.bind(true, shape, surface),
            Err(MirrorBoxError::CapacityExceeded {
                kind: RecordKind::SceneObject,
                ..
            })
        ));
        assert_eq!(scene.scene_object_count(), MAX_SCENE_OBJECTS);
    }

    #[test]
    fn test_bind_rejects_out_of_range_references() {
        let mut scene = RaytracingScene::new();
        let shape = scene.register_shape(RectangleShape::Z_UNIT).unwrap();
        let surface = scene.register_surface(MirrorSurface::PERFECT).unwrap();

        let missing_shape = ShapeRef::new(ShapeKind::Rectangle, 1);
        assert_eq!(
            scene.bind(true, missing_shape, surface),
            Err(MirrorBoxError::IndexOutOfRange {
                kind: ShapeKind::Rectangle.into(),
                index: 1,
                count: 1,
            })
        );

        // registered index, but of a kind with no records
        let wrong_kind = SurfaceRef::new(SurfaceKind::Colour, 0);
        assert!(matches!(
            scene.bind(true, shape, wrong_kind),
            Err(MirrorBoxError::IndexOutOfRange { .. })
        ));

        assert_eq!(scene.scene_object_count(), 0);
        assert_eq!(scene.bind(false, shape, surface), Ok(0));
    }

    #[test]
    fn test_field_updates_keep_counts() {
        let mut scene = RaytracingScene::new();
        let sphere = scene.register_shape(SphereShape::at(Vec3::ZERO, 1.0)).unwrap();
        let colour = scene.register_surface(ColourSurface::RED).unwrap();
        let object = scene.bind(true, sphere, colour).unwrap();
        let counts = scene.counts();
        let revision = scene.revision();

        scene.sphere_mut(sphere.index).unwrap().set_radius(0.5);
        scene.scene_object_mut(object).unwrap().set_visible(false);
        *scene.colour_surface_mut(colour.index).unwrap() = ColourSurface::GREEN;

        assert_eq!(scene.counts(), counts);
        assert!(scene.revision() > revision);
        assert_eq!(scene.sphere(0).unwrap().radius2(), 0.25);
        assert!(!scene.scene_object(object).unwrap().visible);
        assert_eq!(
            scene.surface(colour).unwrap(),
            Surface::Colour(ColourSurface::GREEN)
        );
    }

    #[test]
    fn test_access_past_count_fails() {
        let mut scene = RaytracingScene::new();
        assert!(matches!(
            scene.rectangle_mut(0),
            Err(MirrorBoxError::IndexOutOfRange { index: 0, count: 0, .. })
        ));
        assert!(scene.shape(ShapeRef::new(ShapeKind::CylinderMantle, 3)).is_err());
        assert!(scene.scene_object(0).is_err());
        assert_eq!(scene.revision(), 0);
    }

    #[test]
    fn test_counts_display() {
        let mut scene = RaytracingScene::new();
        let shape = scene.register_shape(RectangleShape::Z_UNIT).unwrap();
        let surface = scene.register_surface(MirrorSurface::PERFECT).unwrap();
        scene.bind(true, shape, surface).unwrap();
        let summary = scene.counts().to_string();
        assert!(summary.starts_with("1 scene object(s), 1 rectangle(s), 0 sphere(s)"));
        assert!(summary.ends_with("0 checkerboard surface(s)"));
        assert_eq!(scene.counts().get(SurfaceKind::Mirror.into()), 1);
    }

    #[test]
    fn test_scene_ids_are_unique_across_clones() {
        let mut scene = RaytracingScene::new();
        scene.register_shape(SphereShape::UNIT).unwrap();
        let other = RaytracingScene::new();
        let copy = scene.clone();

        assert_ne!(scene.id(), other.id());
        assert_ne!(scene.id(), copy.id());
        assert_eq!(copy.revision(), scene.revision());
        assert_eq!(copy.spheres(), scene.spheres());
    }
}
