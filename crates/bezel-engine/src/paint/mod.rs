//! Paint model shared between the style model and surfaces.
//!
//! Scope:
//! - authored colors ([`Color`]) and concrete channels ([`Argb`])
//! - known color names and the textual color literal
//! - channel-stepped blending
//! - paint sources (solid, linear gradient) and strokes
//!
//! Geometry types remain in `coords`.

pub mod blend;
pub mod color;
pub mod gradient;
pub mod known;
pub mod literal;
pub mod stroke;

pub use color::{Argb, Color};
pub use gradient::{ColorStop, LinearGradient, SpreadMode};
pub use known::KnownColor;
pub use literal::ColorFormatError;
pub use stroke::{DashStyle, Stroke};

use crate::coords::Vec2;

/// Paint source for filling or stroking geometry.
///
/// Extend by adding variants (radial gradient, image, pattern) while keeping
/// the enum stable for surface dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Argb),
    LinearGradient(LinearGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: impl Into<Color>) -> Self {
        Paint::Solid(color.into().to_argb())
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        match self {
            Paint::Solid(c) => c.is_opaque(),
            Paint::LinearGradient(g) => g.stops.iter().all(|s| s.color.is_opaque()),
        }
    }

    /// Color this paint produces at `p`.
    #[inline]
    pub fn color_at(&self, p: Vec2) -> Argb {
        match self {
            Paint::Solid(c) => *c,
            Paint::LinearGradient(g) => g.color_at(p),
        }
    }
}
