use anyhow::Result;
use mirrorbox::config::MirrorBoxDesc;
use mirrorbox::export::{ExportBridge, PackedScene};
use mirrorbox::mirror_box::MirrorBox;
use mirrorbox::scene::{CheckerboardSurface, RaytracingScene, RectangleShape};
use mirrorbox::{MirrorBoxError, SurfaceKind, SurfaceRef, Vec3};

pub fn run_cli_session() -> Result<()> {
    log::info!("=== Running Mirror Box Session ===");
    mirror_box_session()?;

    log::info!("=== Running Capacity Test ===");
    capacity_test()?;

    Ok(())
}

/// Simulated frames of the interactive app: menu changes between frames, one export
/// per frame, upload only when something changed.
fn mirror_box_session() -> Result<()> {
    let desc = MirrorBoxDesc::default();
    log::info!("Creating mirror box: {:?}", desc);
    let mut mirror_box = MirrorBox::new(desc)?;
    let mut bridge = ExportBridge::new();

    upload_frame(&mut bridge, mirror_box.scene(), 0);
    upload_frame(&mut bridge, mirror_box.scene(), 1);

    log::info!("Moving the cabinet to eye level...");
    mirror_box.set_base_y(1.6)?;
    upload_frame(&mut bridge, mirror_box.scene(), 2);

    log::info!("Lowering reflection loss to -3 dB...");
    mirror_box.set_reflection_loss_db(-3.0)?;
    log::info!("Moving corners 2 and 4...");
    mirror_box.set_z2(-0.25)?;
    mirror_box.set_z4(0.75)?;
    upload_frame(&mut bridge, mirror_box.scene(), 3);

    log::info!("Growing the sphere...");
    mirror_box.set_sphere_radius(0.1)?;
    upload_frame(&mut bridge, mirror_box.scene(), 4);

    // a collapsed mirror is rejected and leaves the scene untouched
    if let Err(e) = mirror_box.set_mirror_height(0.0) {
        log::warn!("Rejected mirror height change: {}", e);
    }
    upload_frame(&mut bridge, mirror_box.scene(), 5);

    Ok(())
}

fn upload_frame(bridge: &mut ExportBridge, scene: &RaytracingScene, frame: u32) {
    match bridge.refresh(scene) {
        Some(snapshot) => {
            let packed = snapshot.pack();
            log::info!(
                "Frame {}: uploading revision {} ({})",
                frame,
                snapshot.revision(),
                snapshot.counts()
            );
            log_buffers(&packed);
        }
        None => log::debug!("Frame {}: scene unchanged, reusing uploaded buffers", frame),
    }
}

fn log_buffers(packed: &PackedScene) {
    log::debug!(
        "  buffers: {} scene object ints, {} rectangle floats, {} sphere floats, {} mirror floats",
        packed.scene_objects.len(),
        packed.rectangle_shapes.len(),
        packed.sphere_shapes.len(),
        packed.mirror_surfaces.len()
    );
}

/// Fills the smallest slot array and checks that the scene stays usable afterwards.
fn capacity_test() -> Result<()> {
    let mut scene = RaytracingScene::new();
    let mut registered = 0;
    loop {
        match scene.register_surface(CheckerboardSurface::GRAY_SEMITRANSPARENT) {
            Ok(_) => registered += 1,
            Err(MirrorBoxError::CapacityExceeded { kind, capacity }) => {
                log::info!(
                    "{} array full after {} registration(s) (capacity {})",
                    kind,
                    registered,
                    capacity
                );
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    let floor = scene.register_shape(RectangleShape::from_spans(
        Vec3::new(-5.0, 0.0, 5.0),
        Vec3::new(10.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, -10.0),
    )?)?;
    let checkers = scene.register_surface(CheckerboardSurface::BLACK_WHITE);
    log::info!("Registering one more checkerboard: {:?}", checkers.err());
    let index = scene.bind(true, floor, SurfaceRef::new(SurfaceKind::Checkerboard, 0))?;
    log::info!("Floor bound as scene object {}: {}", index, scene.counts());

    Ok(())
}
