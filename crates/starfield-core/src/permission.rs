//! Orientation-sensor consent.
//!
//! Some platforms only deliver `deviceorientation` events after the page asks
//! for permission from inside a user gesture. The result of that single
//! request is folded into [`OrientationGate`], and the front-end subscribes
//! only when [`OrientationGate::should_subscribe`] says so.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrientationPermission {
    #[default]
    Unrequested,
    Granted,
    /// Denied by the user, rejected by the platform, or no sensor API at all.
    Denied,
}

impl OrientationPermission {
    /// Map the platform's permission response. Anything but `"granted"` denies.
    pub fn from_response(response: &str) -> Self {
        if response == "granted" {
            Self::Granted
        } else {
            Self::Denied
        }
    }

    #[inline]
    pub fn is_granted(self) -> bool {
        self == Self::Granted
    }
}

/// Whether the platform puts motion sensors behind an explicit consent prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorCapability {
    RequiresConsent,
    Ungated,
    Unavailable,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct OrientationGate {
    permission: OrientationPermission,
    subscribed: bool,
}

impl OrientationGate {
    /// Record the outcome of a gyroscope request on a platform with the given
    /// capability. Ungated platforms are granted on request; `response` is
    /// only consulted when consent is required.
    pub fn resolve(
        &mut self,
        capability: SensorCapability,
        response: Option<&str>,
    ) -> OrientationPermission {
        let next = match capability {
            SensorCapability::Ungated => OrientationPermission::Granted,
            SensorCapability::Unavailable => OrientationPermission::Denied,
            SensorCapability::RequiresConsent => response
                .map(OrientationPermission::from_response)
                .unwrap_or(OrientationPermission::Denied),
        };
        if next != self.permission {
            log::debug!("[gyro] permission {:?} -> {:?}", self.permission, next);
        }
        self.permission = next;
        next
    }

    #[inline]
    pub fn permission(&self) -> OrientationPermission {
        self.permission
    }

    pub fn should_subscribe(&self) -> bool {
        self.permission.is_granted() && !self.subscribed
    }

    pub fn mark_subscribed(&mut self) {
        self.subscribed = true;
    }

    #[inline]
    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }
}
