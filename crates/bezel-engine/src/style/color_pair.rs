use crate::paint::{Color, LinearGradient, Paint};
use crate::coords::Rect;

use super::action::{update, AppearanceAction};

/// Default gradient angle: top to bottom.
pub const DEFAULT_GRADIENT: i32 = 90;

/// Two background colors blended along an angle.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ColorPair {
    pub back_color1: Color,
    pub back_color2: Color,
    /// Degrees, clockwise from +X.
    pub gradient: i32,
}

impl Default for ColorPair {
    fn default() -> Self {
        Self { back_color1: Color::Unset, back_color2: Color::Unset, gradient: DEFAULT_GRADIENT }
    }
}

impl ColorPair {
    #[inline]
    pub fn new(back_color1: impl Into<Color>, back_color2: impl Into<Color>, gradient: i32) -> Self {
        Self { back_color1: back_color1.into(), back_color2: back_color2.into(), gradient }
    }

    /// Same color at both ends.
    #[inline]
    pub fn solid(color: impl Into<Color>) -> Self {
        let color = color.into();
        Self::new(color, color, DEFAULT_GRADIENT)
    }

    pub fn set_back_color1(&mut self, color: Color) -> Option<AppearanceAction> {
        update(&mut self.back_color1, color, AppearanceAction::Repaint)
    }

    pub fn set_back_color2(&mut self, color: Color) -> Option<AppearanceAction> {
        update(&mut self.back_color2, color, AppearanceAction::Repaint)
    }

    pub fn set_gradient(&mut self, gradient: i32) -> Option<AppearanceAction> {
        update(&mut self.gradient, gradient, AppearanceAction::Repaint)
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Both colors unset and the default angle.
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    #[inline]
    pub fn default_changed(&self) -> bool {
        !self.is_empty()
    }

    /// Gradient paint spanning `rect`.
    pub fn paint(&self, rect: Rect) -> Paint {
        let (from, to) = (self.back_color1.to_argb(), self.back_color2.to_argb());
        if from == to {
            return Paint::Solid(from);
        }
        Paint::LinearGradient(LinearGradient::across(rect, from, to, self.gradient as f32))
    }
}
