// Host-side tests for the per-frame driver, using a recording renderer.

use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use starfield_core::constants::{NORMAL_SPEED, ROTATION_SMOOTHING};
use starfield_core::{
    Appearance, FrameView, OrientationPermission, ParticleField, Renderer, Starfield,
    StarfieldConfig, Viewport,
};

#[derive(Default)]
struct RecordingRenderer {
    uploads: Vec<Vec<Vec3>>,
    uploaded_bytes: Vec<usize>,
    frames: Vec<FrameView>,
    resizes: Vec<Viewport>,
    fail_next: bool,
}

impl Renderer for RecordingRenderer {
    type Error = &'static str;

    fn resize(&mut self, viewport: &Viewport) {
        self.resizes.push(*viewport);
    }

    fn upload_positions(&mut self, field: &ParticleField) {
        self.uploads.push(field.positions().to_vec());
        self.uploaded_bytes.push(field.as_bytes().len());
    }

    fn render(&mut self, frame: &FrameView) -> Result<(), Self::Error> {
        if std::mem::take(&mut self.fail_next) {
            return Err("surface lost");
        }
        self.frames.push(*frame);
        Ok(())
    }
}

fn seeded_field(depths: &[f32], extent: f32) -> ParticleField {
    ParticleField::from_positions(depths.iter().map(|z| Vec3::new(0.0, 0.0, *z)).collect(), extent)
}

#[test]
fn end_to_end_small_field() {
    // A constant speed of 2 makes the advance exact
    let config = StarfieldConfig {
        particle_count: 4,
        field_extent: 10.0,
        normal_speed: 2.0,
        warp_speed: 2.0,
        ..StarfieldConfig::default()
    };
    let mut starfield = Starfield::with_field(&config, seeded_field(&[9.0, -9.0, 0.0, 5.0], 10.0));
    let mut renderer = RecordingRenderer::default();
    let state = starfield.frame(&mut renderer).expect("frame");

    assert_eq!(state.speed, 2.0);
    assert_eq!(renderer.uploads.len(), 1);
    let depths: Vec<f32> = renderer.uploads[0].iter().map(|p| p.z).collect();
    assert_eq!(depths, vec![-5.0, -7.0, 2.0, -5.0]);
    assert_eq!(renderer.uploaded_bytes, vec![4 * 12]);
    assert_eq!(renderer.frames.len(), 1);
}

#[test]
fn new_builds_configured_field() {
    let mut rng = StdRng::seed_from_u64(11);
    let starfield = Starfield::new(&StarfieldConfig::default(), &mut rng).expect("valid config");
    assert_eq!(starfield.field().len(), 6000);
    assert_eq!(starfield.speed().current(), NORMAL_SPEED);
    assert_eq!(starfield.appearance(), Appearance::RESTING);
}

#[test]
fn new_rejects_invalid_config() {
    let config = StarfieldConfig {
        particle_count: 0,
        ..StarfieldConfig::default()
    };
    assert!(Starfield::new(&config, &mut StdRng::seed_from_u64(0)).is_err());
}

#[test]
fn step_eases_speed_before_advancing() {
    let config = StarfieldConfig::default();
    let mut starfield = Starfield::with_field(&config, seeded_field(&[0.0], 2000.0));
    starfield.set_warp(true);
    let state = starfield.step();
    let expected = 2.0 + (40.0 - 2.0) * 0.02;
    assert!((state.speed - expected).abs() < 1e-5);
    assert!((starfield.field().positions()[0].z - expected).abs() < 1e-5);
}

#[test]
fn rotation_eases_toward_pointer_look() {
    let config = StarfieldConfig::default();
    let mut starfield = Starfield::with_field(&config, seeded_field(&[0.0], 2000.0));
    starfield.set_viewport(1000.0, 800.0);
    starfield.pointer_moved(900.0, 0.0);
    let target = Vec2::new(400.0, -400.0) * 0.0001;

    let first = starfield.step().rotation;
    assert!((first.yaw - target.x * ROTATION_SMOOTHING).abs() < 1e-7);
    assert!((first.pitch - target.y * ROTATION_SMOOTHING).abs() < 1e-7);

    for _ in 0..400 {
        starfield.step();
    }
    let settled = starfield.rotation();
    assert!((settled.yaw - target.x).abs() < 1e-5);
    assert!((settled.pitch - target.y).abs() < 1e-5);
}

#[test]
fn appearance_switches_once_speed_passes_threshold() {
    let config = StarfieldConfig::default();
    let mut starfield = Starfield::with_field(&config, seeded_field(&[0.0], 2000.0));
    starfield.set_warp(true);
    let mut switched_at = None;
    for frame in 0..200 {
        let state = starfield.step();
        assert_eq!(state.appearance, Appearance::for_speed(state.speed));
        if switched_at.is_none() && state.appearance == Appearance::WARP {
            switched_at = Some(frame);
        }
    }
    // 2 + 38 * (1 - 0.98^n) > 5 first holds at n = 5
    assert_eq!(switched_at, Some(4));
}

#[test]
fn denied_gyro_leaves_pointer_in_control() {
    let config = StarfieldConfig::default();
    let mut starfield = Starfield::with_field(&config, seeded_field(&[0.0], 2000.0));
    starfield.set_viewport(200.0, 200.0);
    starfield.set_orientation_permission(OrientationPermission::Denied);
    starfield.pointer_moved(150.0, 100.0);
    assert!(!starfield.orientation_changed(10.0, 80.0));
    assert_eq!(starfield.look().current_look(), Vec2::new(50.0, 0.0) * 0.0001);
}

#[test]
fn resize_updates_viewport_camera_and_surface_together() {
    let config = StarfieldConfig::default();
    let mut starfield = Starfield::with_field(&config, seeded_field(&[0.0], 2000.0));
    let mut renderer = RecordingRenderer::default();
    starfield.resize(1600.0, 400.0, &mut renderer);

    assert_eq!(starfield.viewport().half_extents(), Vec2::new(800.0, 200.0));
    assert_eq!(starfield.camera().aspect, 4.0);
    assert_eq!(renderer.resizes, vec![Viewport::new(1600.0, 400.0)]);

    // Pointer centering follows the new size immediately
    starfield.pointer_moved(800.0, 200.0);
    assert_eq!(starfield.look().raw(), Vec2::ZERO);
}

#[test]
fn viewport_tracks_resizes_before_a_renderer_exists() {
    let config = StarfieldConfig::default();
    let mut starfield = Starfield::with_field(&config, seeded_field(&[0.0], 2000.0));
    starfield.set_viewport(800.0, 600.0);
    // Window resized while the GPU is still coming up
    starfield.set_viewport(1000.0, 500.0);
    assert_eq!(starfield.camera().aspect, 2.0);

    starfield.pointer_moved(400.0, 250.0);
    assert_eq!(starfield.look().raw(), Vec2::new(-100.0, 0.0));

    // Once a renderer arrives it is brought up to the latest size
    let mut renderer = RecordingRenderer::default();
    let viewport = *starfield.viewport();
    starfield.resize(viewport.width, viewport.height, &mut renderer);
    assert_eq!(renderer.resizes, vec![Viewport::new(1000.0, 500.0)]);
}

#[test]
fn degenerate_resize_keeps_last_good_aspect() {
    let config = StarfieldConfig::default();
    let mut starfield = Starfield::with_field(&config, seeded_field(&[0.0], 2000.0));
    starfield.set_viewport(800.0, 400.0);
    starfield.set_viewport(800.0, 0.0);
    assert_eq!(starfield.camera().aspect, 2.0);
}

#[test]
fn render_failure_does_not_stop_later_frames() {
    let config = StarfieldConfig::default();
    let mut starfield = Starfield::with_field(&config, seeded_field(&[0.0, 1.0], 2000.0));
    let mut renderer = RecordingRenderer {
        fail_next: true,
        ..RecordingRenderer::default()
    };
    assert!(starfield.frame(&mut renderer).is_err());
    assert!(starfield.frame(&mut renderer).is_ok());
    assert!(starfield.frame(&mut renderer).is_ok());
    assert_eq!(renderer.frames.len(), 2);
    assert_eq!(renderer.uploads.len(), 3);
}

#[test]
fn frame_view_carries_model_rotation_and_material() {
    let config = StarfieldConfig::default();
    let mut starfield = Starfield::with_field(&config, seeded_field(&[0.0], 2000.0));
    starfield.set_viewport(200.0, 200.0);
    starfield.pointer_moved(200.0, 100.0);
    starfield.step();
    let view = starfield.frame_view();
    assert_eq!(view.model, starfield.rotation().model_matrix());
    assert_eq!(view.appearance, Appearance::RESTING);
    assert_eq!(view.point_size, 2.0);
    assert_ne!(view.model, glam::Mat4::IDENTITY);
}
