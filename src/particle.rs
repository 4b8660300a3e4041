//! Particle snapshot records exchanged with the simulation.
//!
//! A [`ParticleSnapshot`] is the fixed-size view of one alive particle that
//! the simulation hands out each frame and accepts back after recoloring.
//! Only the `color` field is ever written by this crate; lifetime and
//! velocity are read-only inputs.

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};

/// A fixed-size record for one alive particle.
///
/// Snapshots are plain-old-data so a capacity-sized buffer can be
/// zero-initialized and handed to a host engine in bulk. The trailing
/// padding keeps the layout valid regardless of `Vec4` alignment.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ParticleSnapshot {
    /// Current color (RGBA, 0.0-1.0). The only field the updater mutates.
    pub color: Vec4,
    /// Total velocity vector (all axes combined, not per-axis).
    pub velocity: Vec3,
    /// Lifetime the particle was born with, in seconds. Greater than zero
    /// for any particle the simulation reports as alive.
    pub start_lifetime: f32,
    /// Seconds left to live, in `0.0..=start_lifetime`.
    pub remaining_lifetime: f32,
    _pad: [f32; 3],
}

impl ParticleSnapshot {
    /// Create a just-born snapshot with the given lifetime and velocity.
    ///
    /// `remaining_lifetime` starts equal to `start_lifetime` and the color
    /// starts white; the simulation ages the particle, the updater recolors it.
    pub fn new(start_lifetime: f32, velocity: Vec3) -> Self {
        Self {
            color: Vec4::ONE,
            velocity,
            start_lifetime,
            remaining_lifetime: start_lifetime,
            _pad: [0.0; 3],
        }
    }

    /// Seconds the particle has been alive.
    pub fn age(&self) -> f32 {
        self.start_lifetime - self.remaining_lifetime
    }
}

impl Default for ParticleSnapshot {
    fn default() -> Self {
        Self::zeroed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_full_lifetime() {
        let p = ParticleSnapshot::new(2.5, Vec3::Y);
        assert_eq!(p.remaining_lifetime, 2.5);
        assert_eq!(p.color, Vec4::ONE);
        assert!((p.age() - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_age_tracks_elapsed_time() {
        let mut p = ParticleSnapshot::new(4.0, Vec3::ZERO);
        p.remaining_lifetime = 1.0;
        assert!((p.age() - 3.0).abs() < 0.001);
    }

    #[test]
    fn test_zeroed_is_valid() {
        let p = ParticleSnapshot::zeroed();
        assert_eq!(p.start_lifetime, 0.0);
        assert_eq!(p.velocity, Vec3::ZERO);
    }
}
