//! Configuration errors raised when building a [`Starfield`](crate::Starfield).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("particle count must be at least 1")]
    EmptyField,
    #[error("field extent must be positive and finite, got {0}")]
    InvalidExtent(f32),
    #[error("{name} speed must be positive and finite, got {value}")]
    InvalidSpeed { name: &'static str, value: f32 },
    #[error("warp speed {warp} is below normal speed {normal}")]
    WarpBelowNormal { normal: f32, warp: f32 },
    #[error("{name} smoothing factor must be in (0, 1], got {value}")]
    InvalidSmoothing { name: &'static str, value: f32 },
}
