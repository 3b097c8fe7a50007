use crate::constants::*;
use crate::error::ConfigError;

/// Tunables for a [`Starfield`](crate::Starfield). `Default` mirrors the
/// constants in [`crate::constants`].
#[derive(Clone, Debug, PartialEq)]
pub struct StarfieldConfig {
    pub particle_count: usize,
    pub field_extent: f32,
    pub normal_speed: f32,
    pub warp_speed: f32,
    pub speed_smoothing: f32,
    pub rotation_smoothing: f32,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            field_extent: FIELD_EXTENT,
            normal_speed: NORMAL_SPEED,
            warp_speed: WARP_SPEED,
            speed_smoothing: SPEED_SMOOTHING,
            rotation_smoothing: ROTATION_SMOOTHING,
        }
    }
}

impl StarfieldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::EmptyField);
        }
        if !(self.field_extent.is_finite() && self.field_extent > 0.0) {
            return Err(ConfigError::InvalidExtent(self.field_extent));
        }
        for (name, value) in [("normal", self.normal_speed), ("warp", self.warp_speed)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidSpeed { name, value });
            }
        }
        if self.warp_speed < self.normal_speed {
            return Err(ConfigError::WarpBelowNormal {
                normal: self.normal_speed,
                warp: self.warp_speed,
            });
        }
        for (name, value) in [
            ("speed", self.speed_smoothing),
            ("rotation", self.rotation_smoothing),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::InvalidSmoothing { name, value });
            }
        }
        Ok(())
    }
}
