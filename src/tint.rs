//! The per-frame particle color updater.
//!
//! [`ColorUpdater`] recolors every alive particle once per frame: it pulls
//! the alive particles into a reusable buffer, derives a normalized scalar
//! per particle according to the configured [`ColorMode`], evaluates the
//! gradient there, writes the color back onto the particle, and pushes the
//! buffer back into the simulation. Nothing but the color field is touched;
//! motion, lifetime, and particle count are the simulation's business.
//!
//! # Usage
//!
//! ```ignore
//! let mut updater = ColorUpdater::new(Gradient::from(Palette::Rainbow))
//!     .with_mode(ColorMode::Lifetime);
//!
//! // In the frame loop, after the simulation step:
//! updater.update(&mut sim);
//! ```

use log::{debug, trace};

use crate::gradient::Gradient;
use crate::particle::ParticleSnapshot;
use crate::sim::ParticleSim;

/// Normalize `v` into `[0, 1]` relative to the interval `a..b`.
///
/// Values outside the interval clamp to the nearest end. An inverted
/// interval (`b < a`) maps in reverse, without complaint. A zero-width
/// interval returns `0.0` rather than dividing by zero, so degenerate
/// input (a zero `start_lifetime`, equal velocity bounds) can never leak
/// a NaN into a color.
///
/// ```
/// use particle_tint::inverse_lerp;
///
/// assert_eq!(inverse_lerp(0.0, 10.0, 2.5), 0.25);
/// assert_eq!(inverse_lerp(0.0, 10.0, -5.0), 0.0);
/// assert_eq!(inverse_lerp(0.0, 10.0, 99.0), 1.0);
/// assert_eq!(inverse_lerp(3.0, 3.0, 3.0), 0.0);
/// ```
pub fn inverse_lerp(a: f32, b: f32, v: f32) -> f32 {
    let span = b - a;
    if span.abs() <= f32::EPSILON {
        return 0.0;
    }
    ((v - a) / span).clamp(0.0, 1.0)
}

/// How the per-particle scalar fed into the gradient is derived.
///
/// Modes that need an interval carry it in the variant, so the interval
/// can only be configured where it is actually used.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ColorMode {
    /// No mapping: every particle samples the gradient at `t = 0`.
    #[default]
    None,

    /// Elapsed fraction of the particle's life: `0` at birth, `1` at death.
    Lifetime,

    /// Remaining fraction of the particle's life: `1` at birth, `0` at
    /// death. The complement of [`ColorMode::Lifetime`].
    InverseLifetime,

    /// Vertical component of the normalized total velocity, mapped onto
    /// the `min..max` interval.
    ///
    /// Rising particles sample the high end of the gradient, falling ones
    /// the low end (for the usual `min < max`; swap them for the reverse).
    TotalVelocity {
        /// Normalized-velocity y value that maps to `t = 0`.
        min: f32,
        /// Normalized-velocity y value that maps to `t = 1`.
        max: f32,
    },
}

impl ColorMode {
    /// Compute the gradient scalar for one particle. Always in `[0, 1]`.
    pub fn scalar(&self, particle: &ParticleSnapshot) -> f32 {
        match self {
            ColorMode::None => 0.0,
            ColorMode::Lifetime => inverse_lerp(
                0.0,
                particle.start_lifetime,
                particle.start_lifetime - particle.remaining_lifetime,
            ),
            ColorMode::InverseLifetime => {
                inverse_lerp(0.0, particle.start_lifetime, particle.remaining_lifetime)
            }
            ColorMode::TotalVelocity { min, max } => {
                // A zero velocity normalizes to the zero vector, y = 0.
                let y = particle.velocity.normalize_or_zero().y;
                inverse_lerp(*min, *max, y)
            }
        }
    }
}

/// Recolors the alive particles of a simulation once per frame.
///
/// Holds the gradient, the scalar mode, and a reusable particle buffer
/// that grows to the simulation's capacity and is never shrunk, so steady
/// state frames allocate nothing.
///
/// Two independent switches:
/// - the administrative [`set_enabled`](ColorUpdater::set_enabled) flag
///   makes [`update`](ColorUpdater::update) a no-op when off;
/// - [`set_particles_enabled`](ColorUpdater::set_particles_enabled)
///   starts/stops emission in the simulation and does not gate recoloring.
#[derive(Debug)]
pub struct ColorUpdater {
    enabled: bool,
    particles_enabled: bool,
    mode: ColorMode,
    gradient: Gradient,
    buffer: Vec<ParticleSnapshot>,
}

impl ColorUpdater {
    /// Create an enabled updater with the given gradient and the default
    /// mode ([`ColorMode::None`]).
    pub fn new(gradient: Gradient) -> Self {
        Self {
            enabled: true,
            particles_enabled: false,
            mode: ColorMode::None,
            gradient,
            buffer: Vec::new(),
        }
    }

    /// Set the scalar mode.
    pub fn with_mode(mut self, mode: ColorMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the administrative enable flag.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Replace the gradient.
    pub fn set_gradient(&mut self, gradient: Gradient) {
        self.gradient = gradient;
    }

    /// Replace the scalar mode.
    pub fn set_mode(&mut self, mode: ColorMode) {
        self.mode = mode;
    }

    /// Administratively enable or disable the updater.
    ///
    /// While disabled, [`update`](ColorUpdater::update) leaves every
    /// particle color exactly as the previous frame left it.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Start or stop particle emission in the simulation.
    ///
    /// Play/pause semantics are the simulation's; this only records the
    /// flag and forwards the call. It does not gate recoloring: a stopped
    /// effect's leftover particles keep getting recolored until they die.
    pub fn set_particles_enabled<S: ParticleSim + ?Sized>(&mut self, sim: &mut S, enabled: bool) {
        self.particles_enabled = enabled;
        if enabled {
            sim.play();
        } else {
            sim.stop();
        }
    }

    /// Whether the updater is administratively enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether emission was last set to play.
    pub fn particles_enabled(&self) -> bool {
        self.particles_enabled
    }

    /// The configured scalar mode.
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// The configured gradient.
    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    /// Current length of the reusable particle buffer.
    ///
    /// After the first [`update`](ColorUpdater::update) this is at least
    /// the simulation's capacity at that time, and it only ever grows.
    pub fn buffer_len(&self) -> usize {
        self.buffer.len()
    }

    /// Reset hook: drop buffered particle data, keeping the allocation.
    ///
    /// Call when the effect is re-initialized (e.g. attached to a new
    /// simulation); the next [`update`](ColorUpdater::update) re-sizes the
    /// buffer from that simulation's capacity.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Recolor the alive particles for this frame.
    ///
    /// Call once per render frame, after the simulation has advanced its
    /// particles. Returns the number of particles recolored (0 when
    /// administratively disabled).
    pub fn update<S: ParticleSim + ?Sized>(&mut self, sim: &mut S) -> usize {
        if !self.enabled {
            return 0;
        }

        let capacity = sim.max_particles();
        if self.buffer.len() < capacity {
            debug!(
                "growing particle buffer: {} -> {}",
                self.buffer.len(),
                capacity
            );
            self.buffer.resize(capacity, ParticleSnapshot::default());
        }

        // Defensive: a misbehaving sim must not make us index past the buffer.
        let alive = sim.read_alive(&mut self.buffer).min(self.buffer.len());

        for particle in &mut self.buffer[..alive] {
            let t = self.mode.scalar(particle);
            particle.color = self.gradient.eval(t);
        }

        sim.write_particles(&self.buffer[..alive]);
        alive
    }

    /// Like [`update`](ColorUpdater::update), but tolerates a missing
    /// simulation handle by skipping the frame.
    ///
    /// The effect is cosmetic, so an unavailable simulation is not an
    /// error; the frame is simply left uncolored.
    pub fn update_if<S: ParticleSim + ?Sized>(&mut self, sim: Option<&mut S>) -> usize {
        match sim {
            Some(sim) => self.update(sim),
            None => {
                trace!("no simulation handle, skipping recolor");
                0
            }
        }
    }
}
