//! Export of the scene to the intersection kernel.
//!
//! The kernel consumes fixed-length arrays and integer counts. [`SceneSnapshot`] is an
//! owned copy of the valid records of a [`RaytracingScene`], so it stays unchanged while
//! the kernel reads it even if the scene is edited in the meantime. [`PackedScene`] is the
//! same data flattened into the strided `f32`/`i32` buffers the kernel declares, padded
//! with zeros up to each kind's capacity.

use crate::constants::{RecordKind, ShapeKind, SurfaceKind};
use crate::math::{Vec3, Vec4};
use crate::scene::{
    CheckerboardSurface, ColourSurface, CylinderMantleShape, MirrorSurface, RaytracingScene,
    RectangleShape, SceneCounts, SceneObject, SphereShape, ThinFocussingSurface,
};

/// Read-only copy of a scene's counts and valid records.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSnapshot {
    scene_id: u64,
    revision: u64,
    counts: SceneCounts,
    scene_objects: Vec<SceneObject>,
    rectangle_shapes: Vec<RectangleShape>,
    sphere_shapes: Vec<SphereShape>,
    cylinder_mantle_shapes: Vec<CylinderMantleShape>,
    colour_surfaces: Vec<ColourSurface>,
    mirror_surfaces: Vec<MirrorSurface>,
    thin_focussing_surfaces: Vec<ThinFocussingSurface>,
    checkerboard_surfaces: Vec<CheckerboardSurface>,
}

impl SceneSnapshot {
    pub fn capture(scene: &RaytracingScene) -> Self {
        Self {
            scene_id: scene.id(),
            revision: scene.revision(),
            counts: scene.counts(),
            scene_objects: scene.scene_objects().to_vec(),
            rectangle_shapes: scene.rectangles().to_vec(),
            sphere_shapes: scene.spheres().to_vec(),
            cylinder_mantle_shapes: scene.cylinder_mantles().to_vec(),
            colour_surfaces: scene.colour_surfaces().to_vec(),
            mirror_surfaces: scene.mirror_surfaces().to_vec(),
            thin_focussing_surfaces: scene.thin_focussing_surfaces().to_vec(),
            checkerboard_surfaces: scene.checkerboard_surfaces().to_vec(),
        }
    }

    /// Id of the scene this snapshot was taken from.
    pub fn scene_id(&self) -> u64 {
        self.scene_id
    }

    /// Scene revision at capture time.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn counts(&self) -> SceneCounts {
        self.counts
    }

    pub fn count(&self, kind: RecordKind) -> usize {
        self.counts.get(kind)
    }

    pub fn scene_objects(&self) -> &[SceneObject] {
        &self.scene_objects
    }

    pub fn rectangles(&self) -> &[RectangleShape] {
        &self.rectangle_shapes
    }

    pub fn spheres(&self) -> &[SphereShape] {
        &self.sphere_shapes
    }

    pub fn cylinder_mantles(&self) -> &[CylinderMantleShape] {
        &self.cylinder_mantle_shapes
    }

    pub fn colour_surfaces(&self) -> &[ColourSurface] {
        &self.colour_surfaces
    }

    pub fn mirror_surfaces(&self) -> &[MirrorSurface] {
        &self.mirror_surfaces
    }

    pub fn thin_focussing_surfaces(&self) -> &[ThinFocussingSurface] {
        &self.thin_focussing_surfaces
    }

    pub fn checkerboard_surfaces(&self) -> &[CheckerboardSurface] {
        &self.checkerboard_surfaces
    }

    /// Flattens the snapshot into kernel buffers.
    pub fn pack(&self) -> PackedScene {
        let len = RecordKind::SceneObject.capacity() * RecordKind::SceneObject.stride();
        let mut scene_objects = Vec::with_capacity(len);
        for object in &self.scene_objects {
            scene_objects.extend_from_slice(&[
                object.visible as i32,
                object.shape.kind.type_tag(),
                object.shape.index as i32,
                object.surface.kind.type_tag(),
                object.surface.index as i32,
            ]);
        }
        scene_objects.resize(len, 0);

        PackedScene {
            counts: self.counts,
            scene_objects,
            rectangle_shapes: pack_records(
                &self.rectangle_shapes,
                ShapeKind::Rectangle.into(),
                pack_rectangle,
            ),
            sphere_shapes: pack_records(
                &self.sphere_shapes,
                ShapeKind::Sphere.into(),
                pack_sphere,
            ),
            cylinder_mantle_shapes: pack_records(
                &self.cylinder_mantle_shapes,
                ShapeKind::CylinderMantle.into(),
                pack_cylinder_mantle,
            ),
            colour_surfaces: pack_records(
                &self.colour_surfaces,
                SurfaceKind::Colour.into(),
                pack_colour,
            ),
            mirror_surfaces: pack_records(
                &self.mirror_surfaces,
                SurfaceKind::Mirror.into(),
                pack_mirror,
            ),
            thin_focussing_surfaces: pack_records(
                &self.thin_focussing_surfaces,
                SurfaceKind::ThinFocussing.into(),
                pack_thin_focussing,
            ),
            checkerboard_surfaces: pack_records(
                &self.checkerboard_surfaces,
                SurfaceKind::Checkerboard.into(),
                pack_checkerboard,
            ),
        }
    }
}

/// Kernel-ready buffers, one per record kind, each `capacity * stride` long.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedScene {
    /// Number of valid records per kind.
    pub counts: SceneCounts,
    /// `[visible, shape type, shape index, surface type, surface index]` per scene object.
    pub scene_objects: Vec<i32>,
    /// `[corner, span1, span2, n_normal]` per rectangle.
    pub rectangle_shapes: Vec<f32>,
    /// `[centre, radius, radius2, n_theta0, n_phi0, n_phi90]` per sphere.
    pub sphere_shapes: Vec<f32>,
    /// `[centre, radius, radius2, length, n_axis, n_phi0, n_phi90]` per cylinder mantle.
    pub cylinder_mantle_shapes: Vec<f32>,
    /// `[rgba, semitransparent]` per colour surface.
    pub colour_surfaces: Vec<f32>,
    /// `[rgba]` per mirror surface.
    pub mirror_surfaces: Vec<f32>,
    /// `[principal point, power, focussing type, direction, reflective, refraction type, rgba]`.
    pub thin_focussing_surfaces: Vec<f32>,
    /// `[width1, width2, rgba1, rgba2, semitransparent1, semitransparent2]`.
    pub checkerboard_surfaces: Vec<f32>,
}

fn pack_records<T>(records: &[T], kind: RecordKind, pack: fn(&T, &mut Vec<f32>)) -> Vec<f32> {
    let stride = kind.stride();
    let len = kind.capacity() * stride;
    let mut data = Vec::with_capacity(len);
    for record in records {
        let start = data.len();
        pack(record, &mut data);
        debug_assert_eq!(data.len() - start, stride, "{} packed with wrong stride", kind);
    }
    data.resize(len, 0.0);
    data
}

fn push_vec3(data: &mut Vec<f32>, v: Vec3) {
    data.extend_from_slice(&v.to_array());
}

fn push_vec4(data: &mut Vec<f32>, v: Vec4) {
    data.extend_from_slice(&v.to_array());
}

fn flag(value: bool) -> f32 {
    if value { 1.0 } else { 0.0 }
}

fn pack_rectangle(shape: &RectangleShape, data: &mut Vec<f32>) {
    push_vec3(data, shape.corner());
    push_vec3(data, shape.span1());
    push_vec3(data, shape.span2());
    push_vec3(data, shape.n_normal());
}

fn pack_sphere(shape: &SphereShape, data: &mut Vec<f32>) {
    push_vec3(data, shape.centre());
    data.push(shape.radius());
    data.push(shape.radius2());
    push_vec3(data, shape.n_theta0());
    push_vec3(data, shape.n_phi0());
    push_vec3(data, shape.n_phi90());
}

fn pack_cylinder_mantle(shape: &CylinderMantleShape, data: &mut Vec<f32>) {
    push_vec3(data, shape.centre());
    data.push(shape.radius());
    data.push(shape.radius2());
    data.push(shape.length());
    push_vec3(data, shape.n_axis());
    push_vec3(data, shape.n_phi0());
    push_vec3(data, shape.n_phi90());
}

fn pack_colour(surface: &ColourSurface, data: &mut Vec<f32>) {
    push_vec4(data, surface.colour_factor);
    data.push(flag(surface.semitransparent));
}

fn pack_mirror(surface: &MirrorSurface, data: &mut Vec<f32>) {
    push_vec4(data, surface.colour_factor);
}

fn pack_thin_focussing(surface: &ThinFocussingSurface, data: &mut Vec<f32>) {
    push_vec3(data, surface.principal_point);
    data.push(surface.optical_power);
    data.push(surface.focussing_type.code() as f32);
    push_vec3(data, surface.n_optical_power_direction());
    data.push(flag(surface.reflective));
    data.push(surface.refraction_type.code() as f32);
    push_vec4(data, surface.colour_factor);
}

fn pack_checkerboard(surface: &CheckerboardSurface, data: &mut Vec<f32>) {
    data.push(surface.width1());
    data.push(surface.width2());
    push_vec4(data, surface.colour_factor1);
    push_vec4(data, surface.colour_factor2);
    data.push(flag(surface.semitransparent1));
    data.push(flag(surface.semitransparent2));
}

/// Hands out a fresh snapshot only when the scene changed since the last one.
///
/// Call [`refresh`](Self::refresh) once per frame; upload to the kernel only when it
/// returns `Some`.
#[derive(Debug, Default)]
pub struct ExportBridge {
    current: Option<SceneSnapshot>,
}

impl ExportBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures a new snapshot if `scene` is a different scene or its revision moved,
    /// and returns it.
    pub fn refresh(&mut self, scene: &RaytracingScene) -> Option<&SceneSnapshot> {
        let stale = self.current.as_ref().is_none_or(|snapshot| {
            snapshot.scene_id() != scene.id() || snapshot.revision() != scene.revision()
        });
        if !stale {
            return None;
        }
        log::debug!(
            "Exporting scene {} at revision {}",
            scene.id(),
            scene.revision()
        );
        self.current = Some(SceneSnapshot::capture(scene));
        self.current.as_ref()
    }

    /// The most recently captured snapshot, if any.
    pub fn current(&self) -> Option<&SceneSnapshot> {
        self.current.as_ref()
    }
}
