//! Look input: pointer and device tilt folded into one raw 2D value.
//!
//! Both sources write the same cell and the last write wins. Events arriving
//! faster than frames overwrite each other; only the latest survives to the
//! next frame's read.

use crate::constants::{
    HOLDING_ANGLE_DEG, LOOK_SCALE, ORIENTATION_AMPLIFICATION, ORIENTATION_SCALE,
};
use crate::permission::OrientationPermission;
use crate::viewport::Viewport;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookSource {
    Pointer,
    Orientation,
}

#[derive(Clone, Debug, Default)]
pub struct LookInput {
    raw: Vec2,
    source: Option<LookSource>,
    permission: OrientationPermission,
}

impl LookInput {
    /// Store the pointer's offset from the viewport center, unscaled.
    pub fn pointer_moved(&mut self, client_x: f32, client_y: f32, viewport: &Viewport) {
        self.raw = viewport.center_offset(client_x, client_y);
        self.source = Some(LookSource::Pointer);
    }

    /// Store a device tilt reading. Ignored unless orientation access was
    /// granted, or when the sensor reports a non-finite angle.
    ///
    /// `beta` is front/back tilt, `gamma` left/right tilt, both in degrees.
    pub fn orientation_changed(&mut self, beta: f32, gamma: f32) -> bool {
        if !self.permission.is_granted() || !beta.is_finite() || !gamma.is_finite() {
            return false;
        }
        self.raw = orientation_to_raw(beta, gamma);
        self.source = Some(LookSource::Orientation);
        true
    }

    pub fn set_permission(&mut self, permission: OrientationPermission) {
        self.permission = permission;
    }

    #[inline]
    pub fn permission(&self) -> OrientationPermission {
        self.permission
    }

    /// Target yaw (x) and pitch (y), in radians.
    #[inline]
    pub fn current_look(&self) -> Vec2 {
        self.raw * LOOK_SCALE
    }

    #[inline]
    pub fn raw(&self) -> Vec2 {
        self.raw
    }

    #[inline]
    pub fn source(&self) -> Option<LookSource> {
        self.source
    }
}

/// Map tilt angles into the pointer's pixel-offset range.
#[inline]
pub fn orientation_to_raw(beta: f32, gamma: f32) -> Vec2 {
    let x = gamma * ORIENTATION_AMPLIFICATION;
    let y = (beta - HOLDING_ANGLE_DEG) * ORIENTATION_AMPLIFICATION;
    Vec2::new(x, y) * ORIENTATION_SCALE
}
