//! Pre-defined color palettes for particle recoloring.
//!
//! Palettes are five-stop RGB ramps that convert into ready-made
//! [`Gradient`](crate::Gradient)s, so an effect can get a decent look
//! without hand-placing keys:
//!
//! ```
//! use particle_tint::{Gradient, Palette};
//!
//! let rainbow = Gradient::from(Palette::Rainbow);
//! assert_eq!(rainbow.keys().len(), 5);
//! ```

use glam::Vec3;

/// Pre-defined five-stop color ramps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// Classic rainbow (red through violet) - the default.
    #[default]
    Rainbow,

    /// Viridis - perceptually uniform, colorblind-friendly (purple to yellow).
    Viridis,

    /// Fire - dark red through orange to white-yellow.
    Fire,

    /// Ice - white through light blue to deep blue.
    Ice,

    /// Ocean - deep blue through teal to cyan.
    Ocean,

    /// Grayscale - black to white.
    Grayscale,
}

impl Palette {
    /// The five RGB stops of this palette, evenly spaced over `[0, 1]`.
    pub fn stops(&self) -> [Vec3; 5] {
        match self {
            Palette::Rainbow => [
                Vec3::new(1.0, 0.0, 0.0), // Red
                Vec3::new(1.0, 1.0, 0.0), // Yellow
                Vec3::new(0.0, 1.0, 0.0), // Green
                Vec3::new(0.0, 1.0, 1.0), // Cyan
                Vec3::new(0.5, 0.0, 1.0), // Purple
            ],
            Palette::Viridis => [
                Vec3::new(0.267, 0.004, 0.329), // Dark purple
                Vec3::new(0.282, 0.140, 0.458), // Purple
                Vec3::new(0.127, 0.566, 0.551), // Teal
                Vec3::new(0.369, 0.789, 0.383), // Green
                Vec3::new(0.993, 0.906, 0.144), // Yellow
            ],
            Palette::Fire => [
                Vec3::new(0.1, 0.0, 0.0), // Dark red
                Vec3::new(0.5, 0.0, 0.0), // Red
                Vec3::new(1.0, 0.3, 0.0), // Orange
                Vec3::new(1.0, 0.7, 0.0), // Yellow-orange
                Vec3::new(1.0, 1.0, 0.8), // White-yellow
            ],
            Palette::Ice => [
                Vec3::new(1.0, 1.0, 1.0), // White
                Vec3::new(0.8, 0.9, 1.0), // Light blue
                Vec3::new(0.4, 0.7, 1.0), // Blue
                Vec3::new(0.1, 0.4, 0.8), // Medium blue
                Vec3::new(0.0, 0.1, 0.4), // Dark blue
            ],
            Palette::Ocean => [
                Vec3::new(0.0, 0.05, 0.15), // Deep blue
                Vec3::new(0.0, 0.2, 0.4),   // Dark blue
                Vec3::new(0.0, 0.4, 0.6),   // Blue
                Vec3::new(0.2, 0.6, 0.8),   // Light blue
                Vec3::new(0.6, 0.9, 1.0),   // Cyan
            ],
            Palette::Grayscale => [
                Vec3::new(0.0, 0.0, 0.0), // Black
                Vec3::new(0.25, 0.25, 0.25),
                Vec3::new(0.5, 0.5, 0.5),
                Vec3::new(0.75, 0.75, 0.75),
                Vec3::new(1.0, 1.0, 1.0), // White
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stops_are_normalized_rgb() {
        for palette in [
            Palette::Rainbow,
            Palette::Viridis,
            Palette::Fire,
            Palette::Ice,
            Palette::Ocean,
            Palette::Grayscale,
        ] {
            for stop in palette.stops() {
                assert!(stop.min_element() >= 0.0);
                assert!(stop.max_element() <= 1.0);
            }
        }
    }

    #[test]
    fn test_default_is_rainbow() {
        assert_eq!(Palette::default(), Palette::Rainbow);
    }
}
