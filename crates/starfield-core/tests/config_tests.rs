// Host-side tests for configuration defaults and validation.

use starfield_core::constants::*;
use starfield_core::{ConfigError, StarfieldConfig};

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(PARTICLE_COUNT > 0);
    assert!(FIELD_EXTENT > 0.0);
    assert!(NORMAL_SPEED > 0.0 && WARP_SPEED > NORMAL_SPEED);
    assert!(SPEED_SMOOTHING > 0.0 && SPEED_SMOOTHING < 1.0);
    assert!(ROTATION_SMOOTHING > SPEED_SMOOTHING && ROTATION_SMOOTHING < 1.0);
    assert!(WARP_VISUAL_THRESHOLD > NORMAL_SPEED && WARP_VISUAL_THRESHOLD < WARP_SPEED);
    // The camera sits on the near threshold and sees the far plane
    assert_eq!(CAMERA_Z, FIELD_EXTENT * 0.5);
    assert!(CAMERA_FAR >= FIELD_EXTENT);
}

#[test]
fn default_config_is_valid() {
    let config = StarfieldConfig::default();
    assert_eq!(config.particle_count, 6000);
    assert_eq!(config.field_extent, 2000.0);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn rejects_bad_values() {
    let base = StarfieldConfig::default();

    let c = StarfieldConfig {
        particle_count: 0,
        ..base.clone()
    };
    assert_eq!(c.validate(), Err(ConfigError::EmptyField));

    let c = StarfieldConfig {
        field_extent: f32::NAN,
        ..base.clone()
    };
    assert!(matches!(c.validate(), Err(ConfigError::InvalidExtent(_))));

    let c = StarfieldConfig {
        normal_speed: -1.0,
        ..base.clone()
    };
    assert!(matches!(
        c.validate(),
        Err(ConfigError::InvalidSpeed { name: "normal", .. })
    ));

    let c = StarfieldConfig {
        warp_speed: 1.0,
        ..base.clone()
    };
    assert!(matches!(c.validate(), Err(ConfigError::WarpBelowNormal { .. })));

    let c = StarfieldConfig {
        rotation_smoothing: 0.0,
        ..base
    };
    assert!(matches!(
        c.validate(),
        Err(ConfigError::InvalidSmoothing { name: "rotation", .. })
    ));
}

#[test]
fn errors_render_readable_messages() {
    let msg = ConfigError::WarpBelowNormal {
        normal: 2.0,
        warp: 1.0,
    }
    .to_string();
    assert_eq!(msg, "warp speed 1 is below normal speed 2");
}
