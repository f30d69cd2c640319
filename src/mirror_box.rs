//! The mirror cabinet: four upright mirrors around a small red sphere.

use crate::config::MirrorBoxDesc;
use crate::error::Result;
use crate::math::{self, Vec3};
use crate::scene::{
    ColourSurface, MirrorSurface, RaytracingScene, RectangleShape, SphereShape, SurfaceRef,
};

/// Application-level owner of the cabinet scene.
///
/// Builds the scene once from a [`MirrorBoxDesc`] and afterwards translates parameter
/// changes (typically from a menu) into in-place updates of the registered records.
/// The number of records never changes after construction.
#[derive(Debug, Clone)]
pub struct MirrorBox {
    desc: MirrorBoxDesc,
    scene: RaytracingScene,
    mirror_surface: SurfaceRef,
    mirror_objects: [usize; 4],
    sphere_object: usize,
}

impl MirrorBox {
    pub fn new(desc: MirrorBoxDesc) -> Result<Self> {
        desc.validate()?;
        let mut scene = RaytracingScene::new();

        let mirror_surface = scene.register_surface(MirrorSurface::with_reflection_coefficient(
            math::reflection_coefficient_from_loss_db(desc.reflection_loss_db),
        ))?;

        let mut mirror_objects = [0; 4];
        for (i, rectangle) in mirror_rectangles(&desc)?.into_iter().enumerate() {
            let shape = scene.register_shape(rectangle)?;
            mirror_objects[i] = scene.bind(true, shape, mirror_surface)?;
        }

        let (x3, z3) = desc.corners()[2];
        let sphere = scene.register_shape(SphereShape::at(
            Vec3::new(x3, desc.base_y, z3),
            desc.sphere_radius,
        ))?;
        let red = scene.register_surface(ColourSurface::RED)?;
        let sphere_object = scene.bind(true, sphere, red)?;

        log::info!("Mirror box scene: {}", scene.counts());

        Ok(Self {
            desc,
            scene,
            mirror_surface,
            mirror_objects,
            sphere_object,
        })
    }

    pub fn desc(&self) -> &MirrorBoxDesc {
        &self.desc
    }

    pub fn scene(&self) -> &RaytracingScene {
        &self.scene
    }

    /// Scene-object indices of the four mirrors, in floor-plan order.
    pub fn mirror_objects(&self) -> [usize; 4] {
        self.mirror_objects
    }

    pub fn sphere_object(&self) -> usize {
        self.sphere_object
    }

    /// Lifts the whole cabinet so that its centre line sits at `y`.
    pub fn set_base_y(&mut self, y: f32) -> Result<()> {
        let y_min = y - 0.5 * self.desc.mirror_height;
        for object in self.mirror_objects {
            let index = self.scene.scene_object(object)?.shape.index;
            let rectangle = self.scene.rectangle_mut(index)?;
            let corner = rectangle.corner();
            rectangle.set_corner(Vec3::new(corner.x, y_min, corner.z));
        }
        let index = self.scene.scene_object(self.sphere_object)?.shape.index;
        let sphere = self.scene.sphere_mut(index)?;
        let centre = sphere.centre();
        sphere.set_centre(Vec3::new(centre.x, y, centre.z));
        self.desc.base_y = y;
        Ok(())
    }

    pub fn set_reflection_loss_db(&mut self, loss_db: f32) -> Result<()> {
        MirrorBoxDesc {
            reflection_loss_db: loss_db,
            ..self.desc.clone()
        }
        .validate()?;
        let coefficient = math::reflection_coefficient_from_loss_db(loss_db);
        self.scene
            .mirror_surface_mut(self.mirror_surface.index)?
            .colour_factor = math::coefficient_to_colour_factor(coefficient);
        self.desc.reflection_loss_db = loss_db;
        log::debug!("Mirror reflection coefficient set to {}", coefficient);
        Ok(())
    }

    /// Moves corner 2, which reshapes mirrors 1 and 2.
    pub fn set_z2(&mut self, z: f32) -> Result<()> {
        self.rebuild_mirrors(MirrorBoxDesc {
            z2: z,
            ..self.desc.clone()
        })
    }

    /// Moves corner 4, which reshapes mirrors 3 and 4.
    pub fn set_z4(&mut self, z: f32) -> Result<()> {
        self.rebuild_mirrors(MirrorBoxDesc {
            z4: z,
            ..self.desc.clone()
        })
    }

    pub fn set_mirror_height(&mut self, height: f32) -> Result<()> {
        self.rebuild_mirrors(MirrorBoxDesc {
            mirror_height: height,
            ..self.desc.clone()
        })
    }

    pub fn set_sphere_radius(&mut self, radius: f32) -> Result<()> {
        MirrorBoxDesc {
            sphere_radius: radius,
            ..self.desc.clone()
        }
        .validate()?;
        let index = self.scene.scene_object(self.sphere_object)?.shape.index;
        self.scene.sphere_mut(index)?.set_radius(radius);
        self.desc.sphere_radius = radius;
        Ok(())
    }

    pub fn set_sphere_visible(&mut self, visible: bool) -> Result<()> {
        self.scene
            .scene_object_mut(self.sphere_object)?
            .set_visible(visible);
        Ok(())
    }

    // Replaces every mirror rectangle wholesale; nothing is written unless all four
    // rectangles can be built from `desc`.
    fn rebuild_mirrors(&mut self, desc: MirrorBoxDesc) -> Result<()> {
        desc.validate()?;
        let rectangles = mirror_rectangles(&desc)?;
        for (object, rectangle) in self.mirror_objects.into_iter().zip(rectangles) {
            let index = self.scene.scene_object(object)?.shape.index;
            *self.scene.rectangle_mut(index)? = rectangle;
        }
        self.desc = desc;
        Ok(())
    }
}

fn mirror_rectangles(desc: &MirrorBoxDesc) -> Result<[RectangleShape; 4]> {
    let corners = desc.corners();
    let y_min = desc.base_y - 0.5 * desc.mirror_height;
    let mut rectangles = [RectangleShape::Z_UNIT; 4];
    for (i, rectangle) in rectangles.iter_mut().enumerate() {
        let (x, z) = corners[i];
        let (x_next, z_next) = corners[(i + 1) % corners.len()];
        *rectangle = RectangleShape::from_spans(
            Vec3::new(x, y_min, z),
            Vec3::new(x_next - x, 0.0, z_next - z),
            Vec3::new(0.0, desc.mirror_height, 0.0),
        )?;
    }
    Ok(rectangles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ShapeKind, SurfaceKind};
    use crate::error::MirrorBoxError;
    use crate::math::Vec4;

    fn mirror_rectangle(mirror_box: &MirrorBox, i: usize) -> RectangleShape {
        let scene = mirror_box.scene();
        let object = scene.scene_object(mirror_box.mirror_objects()[i]).unwrap();
        *scene.rectangle(object.shape.index).unwrap()
    }

    #[test]
    fn test_builds_cabinet() {
        let mirror_box = MirrorBox::new(MirrorBoxDesc::default()).unwrap();
        let counts = mirror_box.scene().counts();
        assert_eq!(counts.scene_objects, 5);
        assert_eq!(counts.rectangle_shapes, 4);
        assert_eq!(counts.sphere_shapes, 1);
        assert_eq!(counts.mirror_surfaces, 1);
        assert_eq!(counts.colour_surfaces, 1);
        assert_eq!(mirror_box.mirror_objects(), [0, 1, 2, 3]);
        assert_eq!(mirror_box.sphere_object(), 4);

        let first = mirror_rectangle(&mirror_box, 0);
        assert_eq!(first.corner(), Vec3::new(-1.0, -0.5, -1.0));
        assert_eq!(first.span1(), Vec3::new(1.0, 0.0, 0.5));
        assert_eq!(first.span2(), Vec3::new(0.0, 1.0, 0.0));

        let sphere_object = mirror_box.scene().scene_object(4).unwrap();
        assert_eq!(sphere_object.shape.kind, ShapeKind::Sphere);
        assert_eq!(sphere_object.surface.kind, SurfaceKind::Colour);

        let mirror = mirror_box.scene().mirror_surface(0).unwrap();
        assert!((mirror.colour_factor - Vec4::new(0.9, 0.9, 0.9, 1.0)).length() < 1e-6);
    }

    #[test]
    fn test_mirror_normals_are_horizontal_and_unit() {
        let mirror_box = MirrorBox::new(MirrorBoxDesc::default()).unwrap();
        for i in 0..4 {
            let rectangle = mirror_rectangle(&mirror_box, i);
            assert!((rectangle.n_normal().length() - 1.0).abs() < 1e-6);
            assert!(rectangle.n_normal().y.abs() < 1e-6);
        }
    }

    #[test]
    fn test_set_base_y() {
        let mut mirror_box = MirrorBox::new(MirrorBoxDesc::default()).unwrap();
        mirror_box.set_base_y(1.5).unwrap();
        for i in 0..4 {
            assert_eq!(mirror_rectangle(&mirror_box, i).corner().y, 1.0);
        }
        let sphere = mirror_box.scene().sphere(0).unwrap();
        assert_eq!(sphere.centre(), Vec3::new(1.0, 1.5, -1.0));
        assert_eq!(mirror_box.desc().base_y, 1.5);
    }

    #[test]
    fn test_set_z2_reshapes_adjacent_mirrors() {
        let mut mirror_box = MirrorBox::new(MirrorBoxDesc::default()).unwrap();
        let before = mirror_rectangle(&mirror_box, 2);
        mirror_box.set_z2(-0.25).unwrap();
        assert_eq!(mirror_rectangle(&mirror_box, 0).span1(), Vec3::new(1.0, 0.0, 0.75));
        assert_eq!(mirror_rectangle(&mirror_box, 1).corner().z, -0.25);
        assert_eq!(mirror_rectangle(&mirror_box, 2), before);
        assert_eq!(mirror_box.scene().counts().rectangle_shapes, 4);
    }

    #[test]
    fn test_degenerate_update_is_rejected_without_changes() {
        let mut mirror_box = MirrorBox::new(MirrorBoxDesc::default()).unwrap();
        let before = mirror_box.scene().rectangles().to_vec();
        // corner 4 onto corner 1 collapses mirror 4
        let mut desc = mirror_box.desc().clone();
        desc.x4 = desc.x1;
        desc.z4 = desc.z1;
        assert!(MirrorBox::new(desc).is_err());

        assert!(matches!(
            mirror_box.set_mirror_height(0.0),
            Err(MirrorBoxError::InvalidParameter(_))
        ));
        assert_eq!(mirror_box.scene().rectangles(), before.as_slice());
        assert_eq!(mirror_box.desc().mirror_height, 1.0);
    }

    #[test]
    fn test_sphere_updates() {
        let mut mirror_box = MirrorBox::new(MirrorBoxDesc::default()).unwrap();
        mirror_box.set_sphere_radius(0.5).unwrap();
        assert_eq!(mirror_box.scene().sphere(0).unwrap().radius2(), 0.25);
        assert!(mirror_box.set_sphere_radius(-0.1).is_err());

        mirror_box.set_sphere_visible(false).unwrap();
        assert!(!mirror_box.scene().scene_object(4).unwrap().visible);
    }

    #[test]
    fn test_set_reflection_loss() {
        let mut mirror_box = MirrorBox::new(MirrorBoxDesc::default()).unwrap();
        let revision = mirror_box.scene().revision();
        mirror_box.set_reflection_loss_db(0.0).unwrap();
        assert_eq!(
            mirror_box.scene().mirror_surface(0).unwrap().colour_factor,
            Vec4::new(0.0, 0.0, 0.0, 1.0)
        );
        assert!(mirror_box.scene().revision() > revision);
        assert!(mirror_box.set_reflection_loss_db(1.0).is_err());
    }
}
