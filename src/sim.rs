//! The interface to the host particle simulation.
//!
//! The simulation itself (integration, emission, culling, rendering) is
//! external to this crate. [`ParticleSim`] is the narrow surface the color
//! updater needs from it: report capacity, hand out the alive particles,
//! accept them back, and start/stop emission.
//!
//! The trait replaces the inherited lifecycle-callback model of typical
//! engine components: whatever owns the frame loop calls
//! [`ColorUpdater::update`](crate::ColorUpdater::update) explicitly with a
//! simulation handle, once per frame, after the simulation has advanced.

use crate::particle::ParticleSnapshot;

/// Frame-synchronous access to a particle simulation.
///
/// All methods are called from the single simulation/render thread; the
/// exclusive `&mut self` receivers mirror the frame-exclusive ownership the
/// host loop already provides.
pub trait ParticleSim {
    /// Maximum number of particles the simulation can hold right now.
    ///
    /// May grow between frames (e.g. when an effect is reconfigured);
    /// the updater sizes its reusable buffer from this.
    fn max_particles(&self) -> usize;

    /// Copy the currently alive particles into the prefix of `buffer` and
    /// return how many entries were written.
    ///
    /// The count is at most `buffer.len()`; entries past the count are
    /// left untouched.
    fn read_alive(&mut self, buffer: &mut [ParticleSnapshot]) -> usize;

    /// Replace the simulation's internal state for exactly the given
    /// particles (the alive prefix previously read with [`read_alive`]).
    ///
    /// [`read_alive`]: ParticleSim::read_alive
    fn write_particles(&mut self, particles: &[ParticleSnapshot]);

    /// Start (or resume) particle emission.
    fn play(&mut self);

    /// Stop particle emission.
    fn stop(&mut self);
}
