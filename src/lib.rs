//! # particle-tint
//!
//! Gradient-based recoloring for live particle effects.
//!
//! Each frame, after the host simulation has advanced its particles,
//! a [`ColorUpdater`] pulls the alive particles into a reusable buffer,
//! derives a normalized scalar per particle (elapsed life, remaining life,
//! or vertical velocity), evaluates a [`Gradient`] there, and writes the
//! resulting color back onto the particle. Purely a color post-process:
//! motion, lifetime, emission, and rendering stay with the simulation.
//!
//! ## Quick Start
//!
//! ```ignore
//! use particle_tint::prelude::*;
//!
//! // `sim` is anything implementing ParticleSim for your engine.
//! let mut updater = ColorUpdater::new(Gradient::from(Palette::Rainbow))
//!     .with_mode(ColorMode::Lifetime);
//!
//! updater.set_particles_enabled(&mut sim, true);
//!
//! loop {
//!     sim.step(dt);               // your engine's particle integration
//!     updater.update(&mut sim);   // recolor the alive particles
//!     render(&sim);
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Simulation interface
//!
//! The engine is a black box behind the [`ParticleSim`] trait: capacity,
//! alive-particle readback, write-back, and play/stop. Implement it once
//! per engine; the updater never assumes anything else about the host.
//!
//! ### Scalar modes
//!
//! [`ColorMode`] selects how the gradient position is derived:
//!
//! | Mode | `t` |
//! |------|-----|
//! | [`ColorMode::Lifetime`] | elapsed fraction of life (0 at birth, 1 at death) |
//! | [`ColorMode::InverseLifetime`] | remaining fraction of life |
//! | [`ColorMode::TotalVelocity`] | normalized velocity's y, mapped onto `min..max` |
//! | [`ColorMode::None`] | always 0 |
//!
//! Every scalar is clamped to `[0, 1]`; degenerate input (zero lifetime,
//! zero velocity, zero-width interval) clamps instead of producing NaN.
//!
//! ### Gradients
//!
//! A [`Gradient`] is an ordered set of RGBA keys over `[0, 1]` with linear
//! interpolation between them. Build one from explicit keys, from a
//! two-color pair, or from a pre-defined [`Palette`].
//!
//! ### Buffer reuse
//!
//! The updater owns one buffer sized to the simulation's capacity, grown
//! when the capacity grows and never shrunk, so steady-state frames do not
//! allocate.

mod error;
mod gradient;
mod palette;
mod particle;
mod sim;
mod tint;

pub use error::GradientError;
pub use glam::{Vec3, Vec4};
pub use gradient::{Gradient, GradientKey};
pub use palette::Palette;
pub use particle::ParticleSnapshot;
pub use sim::ParticleSim;
pub use tint::{inverse_lerp, ColorMode, ColorUpdater};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use particle_tint::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::GradientError;
    pub use crate::gradient::{Gradient, GradientKey};
    pub use crate::palette::Palette;
    pub use crate::particle::ParticleSnapshot;
    pub use crate::sim::ParticleSim;
    pub use crate::tint::{ColorMode, ColorUpdater};
    pub use crate::{Vec3, Vec4};
}
