//! Warp speed control with exponential easing toward the target speed.

use crate::constants::{NORMAL_SPEED, SPEED_SMOOTHING, WARP_SPEED};

#[derive(Clone, Debug)]
pub struct SpeedController {
    current: f32,
    target: f32,
    normal: f32,
    warp: f32,
    acceleration: f32,
}

impl Default for SpeedController {
    fn default() -> Self {
        Self::new(NORMAL_SPEED, WARP_SPEED, SPEED_SMOOTHING)
    }
}

impl SpeedController {
    pub fn new(normal: f32, warp: f32, acceleration: f32) -> Self {
        Self {
            current: normal,
            target: normal,
            normal,
            warp,
            acceleration,
        }
    }

    /// Retarget between normal and warp speed. The current speed is left
    /// alone and eases over on the following ticks.
    pub fn set_warp(&mut self, active: bool) {
        let target = if active { self.warp } else { self.normal };
        if target != self.target {
            log::debug!("[warp] target {:.1} -> {:.1}", self.target, target);
        }
        self.target = target;
    }

    /// Advance the current speed one frame toward the target and return it.
    pub fn tick(&mut self) -> f32 {
        self.current += (self.target - self.current) * self.acceleration;
        self.current
    }

    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn acceleration(&self) -> f32 {
        self.acceleration
    }

    #[inline]
    pub fn is_warp_engaged(&self) -> bool {
        self.target == self.warp
    }
}

/// Number of ticks for an exponential ease from `from` to land within
/// `epsilon` of `to`. Depends only on the ratio of the gap to `epsilon`.
pub fn ticks_to_converge(from: f32, to: f32, factor: f32, epsilon: f32) -> u32 {
    let gap = (to - from).abs() as f64;
    if gap < epsilon as f64 {
        return 0;
    }
    let n = (epsilon as f64 / gap).ln() / (1.0 - factor as f64).ln();
    n.ceil() as u32
}
