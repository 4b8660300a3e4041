//! Error types for particle-tint.
//!
//! Recoloring itself cannot fail: degenerate numeric input is clamped and a
//! missing simulation handle is a silent skip. The only fallible operation
//! is constructing a [`Gradient`](crate::Gradient) from user-supplied keys.

use std::fmt;

/// Errors that can occur when constructing a gradient.
#[derive(Debug)]
pub enum GradientError {
    /// The key list was empty. A gradient needs at least one color key
    /// to evaluate to anything.
    NoKeys,
}

impl fmt::Display for GradientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradientError::NoKeys => {
                write!(f, "Gradient has no color keys. Provide at least one GradientKey.")
            }
        }
    }
}

impl std::error::Error for GradientError {}
