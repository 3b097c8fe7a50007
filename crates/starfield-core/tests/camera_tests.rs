// Host-side tests for camera and field-rotation math.

use glam::{Vec2, Vec3, Vec4};
use starfield_core::{Camera, Rotation};

#[test]
fn origin_projects_to_screen_center() {
    let cam = Camera::default();
    let clip = cam.projection_matrix() * cam.view_matrix() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn far_plane_star_is_inside_depth_range() {
    let cam = Camera::default();
    let clip = cam.projection_matrix() * cam.view_matrix() * Vec4::new(0.0, 0.0, -999.0, 1.0);
    let ndc_z = clip.z / clip.w;
    assert!(ndc_z > 0.0 && ndc_z <= 1.0, "ndc z {ndc_z}");
}

#[test]
fn set_aspect_ignores_degenerate_values() {
    let mut cam = Camera::default();
    cam.set_aspect(2.0);
    cam.set_aspect(0.0);
    cam.set_aspect(f32::NAN);
    assert_eq!(cam.aspect, 2.0);
}

#[test]
fn rotation_eases_by_factor() {
    let mut rot = Rotation::default();
    rot.ease_toward(Vec2::new(1.0, -1.0), 0.5);
    assert_eq!(rot, Rotation { yaw: 0.5, pitch: -0.5 });
    rot.ease_toward(Vec2::new(1.0, -1.0), 0.5);
    assert_eq!(rot, Rotation { yaw: 0.75, pitch: -0.75 });
}

#[test]
fn yaw_turns_the_field_about_y() {
    let rot = Rotation {
        yaw: std::f32::consts::FRAC_PI_2,
        pitch: 0.0,
    };
    let p = rot.model_matrix().transform_point3(Vec3::new(0.0, 0.0, 1.0));
    assert!((p - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-5);
}
