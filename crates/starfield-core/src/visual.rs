use crate::constants::{
    RESTING_COLOR, RESTING_OPACITY, WARP_COLOR, WARP_OPACITY, WARP_VISUAL_THRESHOLD,
};

/// Flat material appearance of the stars for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Appearance {
    pub color: [f32; 3],
    pub opacity: f32,
}

impl Appearance {
    pub const RESTING: Self = Self {
        color: RESTING_COLOR,
        opacity: RESTING_OPACITY,
    };

    pub const WARP: Self = Self {
        color: WARP_COLOR,
        opacity: WARP_OPACITY,
    };

    /// Warp look strictly above the threshold, resting look at or below it.
    #[inline]
    pub fn for_speed(speed: f32) -> Self {
        if speed > WARP_VISUAL_THRESHOLD {
            Self::WARP
        } else {
            Self::RESTING
        }
    }

    #[inline]
    pub fn rgba(&self) -> [f32; 4] {
        [self.color[0], self.color[1], self.color[2], self.opacity]
    }
}
