//! Color gradients evaluated over `[0, 1]`.
//!
//! A [`Gradient`] is an ordered set of color keys. Evaluating it at a
//! normalized scalar `t` linearly interpolates between the two bracketing
//! keys; outside the first/last key position the edge key's color is
//! returned. Evaluation is deterministic and never fails.
//!
//! # Example
//!
//! ```
//! use glam::Vec4;
//! use particle_tint::Gradient;
//!
//! let red = Vec4::new(1.0, 0.0, 0.0, 1.0);
//! let blue = Vec4::new(0.0, 0.0, 1.0, 1.0);
//! let gradient = Gradient::two_color(red, blue);
//!
//! assert_eq!(gradient.eval(0.0), red);
//! assert_eq!(gradient.eval(1.0), blue);
//! assert_eq!(gradient.eval(0.5), Vec4::new(0.5, 0.0, 0.5, 1.0));
//! ```

use glam::Vec4;

use crate::error::GradientError;
use crate::palette::Palette;

/// One color key of a gradient: a position in `[0, 1]` and the RGBA color
/// the gradient takes there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientKey {
    /// Where along the gradient this key sits. Clamped to `[0, 1]` on
    /// gradient construction.
    pub position: f32,
    /// RGBA color at this position (0.0-1.0 per channel).
    pub color: Vec4,
}

impl GradientKey {
    /// Create a key at `position` with the given color.
    pub fn new(position: f32, color: Vec4) -> Self {
        Self { position, color }
    }
}

/// An ordered, non-empty set of color keys supporting interpolated
/// evaluation at any point in `[0, 1]`.
///
/// The key list is read-only once constructed; the updater never mutates
/// the gradient it was configured with.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    keys: Vec<GradientKey>,
}

impl Gradient {
    /// Build a gradient from color keys.
    ///
    /// Keys are sorted by position and positions are clamped to `[0, 1]`,
    /// so callers may supply them in any order. At least one key is
    /// required.
    ///
    /// # Errors
    ///
    /// Returns [`GradientError::NoKeys`] if `keys` is empty.
    pub fn new(mut keys: Vec<GradientKey>) -> Result<Self, GradientError> {
        if keys.is_empty() {
            return Err(GradientError::NoKeys);
        }
        for key in &mut keys {
            key.position = key.position.clamp(0.0, 1.0);
        }
        keys.sort_by(|a, b| a.position.total_cmp(&b.position));
        Ok(Self { keys })
    }

    /// The common two-key case: `start` at 0, `end` at 1.
    pub fn two_color(start: Vec4, end: Vec4) -> Self {
        Self {
            keys: vec![GradientKey::new(0.0, start), GradientKey::new(1.0, end)],
        }
    }

    /// A gradient that evaluates to the same color everywhere.
    pub fn constant(color: Vec4) -> Self {
        Self {
            keys: vec![GradientKey::new(0.0, color)],
        }
    }

    /// The keys in ascending position order.
    pub fn keys(&self) -> &[GradientKey] {
        &self.keys
    }

    /// Evaluate the gradient at `t`.
    ///
    /// `t` is clamped to `[0, 1]` first. Between two keys the color is
    /// linearly interpolated; before the first key or past the last the
    /// edge key's color is returned verbatim. A single-key gradient is
    /// constant.
    pub fn eval(&self, t: f32) -> Vec4 {
        let t = t.clamp(0.0, 1.0);

        let first = self.keys[0];
        if t <= first.position {
            return first.color;
        }
        let last = self.keys[self.keys.len() - 1];
        if t >= last.position {
            return last.color;
        }

        for pair in self.keys.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.position {
                let span = b.position - a.position;
                if span <= f32::EPSILON {
                    // Coincident keys: the later one wins.
                    return b.color;
                }
                let local = (t - a.position) / span;
                return a.color.lerp(b.color, local);
            }
        }

        last.color
    }
}

impl From<Palette> for Gradient {
    /// Expand a palette's five stops into evenly spaced opaque keys.
    fn from(palette: Palette) -> Self {
        let stops = palette.stops();
        let keys = stops
            .iter()
            .enumerate()
            .map(|(i, stop)| {
                let position = i as f32 / (stops.len() - 1) as f32;
                GradientKey::new(position, stop.extend(1.0))
            })
            .collect();
        Self { keys }
    }
}
