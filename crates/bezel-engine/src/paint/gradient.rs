use crate::coords::{Rect, Vec2};

use super::Argb;

/// Gradient spread behavior outside [0, 1] range.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SpreadMode {
    /// Clamp to edge stops.
    Pad,
    /// Repeat the gradient pattern.
    Repeat,
    /// Mirror-repeat the gradient pattern.
    Reflect,
}

/// A single gradient stop.
///
/// `t` is expected in [0, 1] and stops are expected in ascending `t` order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Argb,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Argb) -> Self {
        Self { t, color }
    }
}

/// Linear gradient definition in surface space.
///
/// Semantics:
/// - `start` and `end` are positions in the same coordinate space as geometry.
/// - `spread` defines out-of-range behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>, spread: SpreadMode) -> Self {
        Self {
            start,
            end,
            stops,
            spread,
        }
    }

    /// Two-stop gradient across `rect` along `angle_deg` (clockwise from +X).
    ///
    /// The axis passes through the rect center and spans the rect's
    /// projection onto it, so `from` and `to` land exactly on the
    /// rect corners that are furthest apart along the axis.
    pub fn across(rect: Rect, from: Argb, to: Argb, angle_deg: f32) -> Self {
        let dir = Vec2::from_angle_deg(angle_deg);
        let half = rect.width() / 2.0 * dir.x.abs() + rect.height() / 2.0 * dir.y.abs();
        let center = rect.center();
        Self::new(
            center - dir * half,
            center + dir * half,
            vec![ColorStop::new(0.0, from), ColorStop::new(1.0, to)],
            SpreadMode::Pad,
        )
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite())
            && self.stops.len() >= 2
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }

    /// Samples the gradient at `p`, interpolating channels linearly between stops.
    pub fn color_at(&self, p: Vec2) -> Argb {
        let Some(first) = self.stops.first() else {
            return Argb::TRANSPARENT;
        };
        let axis = self.end - self.start;
        let len_sq = axis.x * axis.x + axis.y * axis.y;
        if len_sq <= f32::EPSILON {
            return first.color;
        }
        let rel = p - self.start;
        let raw = (rel.x * axis.x + rel.y * axis.y) / len_sq;
        let t = match self.spread {
            SpreadMode::Pad => raw.clamp(0.0, 1.0),
            SpreadMode::Repeat => raw.rem_euclid(1.0),
            SpreadMode::Reflect => {
                let m = raw.rem_euclid(2.0);
                if m > 1.0 { 2.0 - m } else { m }
            }
        };

        let mut prev = *first;
        for stop in &self.stops {
            if t <= stop.t {
                let span = stop.t - prev.t;
                let k = if span <= f32::EPSILON { 1.0 } else { (t - prev.t) / span };
                return mix(prev.color, stop.color, k);
            }
            prev = *stop;
        }
        prev.color
    }
}

fn mix(a: Argb, b: Argb, k: f32) -> Argb {
    let ch = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * k).round() as u8;
    Argb::new(ch(a.a, b.a), ch(a.r, b.r), ch(a.g, b.g), ch(a.b, b.b))
}
