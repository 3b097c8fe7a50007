//! The particle field: a fixed set of star positions drifting along +Z.
//!
//! Stars move toward the camera every frame. Once a star passes the near
//! threshold (`extent / 2`) it is hard-reset to the far plane (`-extent / 2`),
//! which gives the endless-tunnel look without any depth recycling. A fast
//! frame can carry a star past the threshold by up to one step before the
//! reset; that overshoot is never corrected.

use glam::Vec3;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct ParticleField {
    positions: Vec<Vec3>,
    extent: f32,
    dirty: bool,
}

impl ParticleField {
    /// Scatter `count` stars uniformly through the cube of side `extent`.
    pub fn initialize<R: Rng + ?Sized>(count: usize, extent: f32, rng: &mut R) -> Self {
        let half = extent * 0.5;
        let positions = (0..count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-half..=half),
                    rng.gen_range(-half..=half),
                    rng.gen_range(-half..=half),
                )
            })
            .collect();
        Self {
            positions,
            extent,
            dirty: true,
        }
    }

    /// Build a field from known positions. Positions are taken as given, even
    /// if they sit outside the cube.
    pub fn from_positions(positions: Vec<Vec3>, extent: f32) -> Self {
        Self {
            positions,
            extent,
            dirty: true,
        }
    }

    /// Move every star `speed` units along +Z, wrapping those that pass the
    /// near threshold back to the far plane.
    pub fn advance(&mut self, speed: f32) {
        let threshold = self.wrap_threshold();
        for p in &mut self.positions {
            p.z += speed;
            if p.z > threshold {
                p.z = -threshold;
            }
        }
        self.dirty = true;
    }

    #[inline]
    pub fn wrap_threshold(&self) -> f32 {
        self.extent * 0.5
    }

    #[inline]
    pub fn extent(&self) -> f32 {
        self.extent
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Raw bytes of the position buffer, tightly packed `[f32; 3]` per star.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns whether positions changed since the last call, clearing the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}
