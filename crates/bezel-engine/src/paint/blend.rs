//! Channel-stepped color blending.
//!
//! Unlike a proportional blend, every RGB channel moves a fixed number of
//! units toward the target and stops there. Shadow text, hover tints and
//! disabled tints are all derived this way.

use super::{Argb, Color};

/// Sentinel `amount` meaning "jump straight to the target".
pub const JUMP: i32 = -1;

#[inline]
fn step_channel(from: u8, to: u8, amount: i32) -> u8 {
    let (from, to) = (from as i32, to as i32);
    let stepped = if from < to {
        (from + amount).min(to)
    } else if from > to {
        (from - amount).max(to)
    } else {
        from
    };
    stepped as u8
}

impl Argb {
    /// Moves each RGB channel `amount` units toward `end` without overshooting.
    ///
    /// - `swap` exchanges `self` and `end` first.
    /// - `amount == JUMP` returns `end` unchanged (alpha included).
    /// - otherwise alpha is forced to 255; negative amounts act as 0.
    pub fn step_toward(self, end: Argb, amount: i32, swap: bool) -> Argb {
        let (start, end) = if swap { (end, self) } else { (self, end) };
        if amount == JUMP {
            return end;
        }
        let amount = amount.max(0);
        Argb::rgb(
            step_channel(start.r, end.r, amount),
            step_channel(start.g, end.g, amount),
            step_channel(start.b, end.b, amount),
        )
    }
}

impl Color {
    /// [`Argb::step_toward`] on the resolved channels.
    ///
    /// The result is always explicit channels, except for `JUMP`, which
    /// returns `end` exactly as authored.
    pub fn step_toward(self, end: Color, amount: i32, swap: bool) -> Color {
        if amount == JUMP {
            return if swap { self } else { end };
        }
        Color::Argb(self.to_argb().step_toward(end.to_argb(), amount, swap))
    }
}
