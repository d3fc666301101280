use core::ops::{BitAnd, BitOr, BitOrAssign, Not};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownName;

/// One side of a rectangle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    Left,
    Top,
    Right,
    Bottom,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Left, Side::Top, Side::Right, Side::Bottom];

    #[inline]
    pub const fn bit(self) -> u8 {
        match self {
            Side::Left => 1,
            Side::Top => 2,
            Side::Right => 4,
            Side::Bottom => 8,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Top => "Top",
            Side::Right => "Right",
            Side::Bottom => "Bottom",
        }
    }
}

/// Set of rectangle sides whose border stroke is visible.
///
/// Combine with `|`; test with [`contains`](Self::contains).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Sides(u8);

impl Sides {
    pub const NONE: Sides = Sides(0);
    pub const LEFT: Sides = Sides(1);
    pub const TOP: Sides = Sides(2);
    pub const RIGHT: Sides = Sides(4);
    pub const BOTTOM: Sides = Sides(8);
    pub const ALL: Sides = Sides(15);

    /// Builds a mask from raw bits, discarding anything above the four sides.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Sides(bits & 15)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn contains(self, side: Side) -> bool {
        self.0 & side.bit() != 0
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_all(self) -> bool {
        self.0 == 15
    }

    /// Every mask value, `NONE` through `ALL`.
    pub fn every() -> impl Iterator<Item = Sides> {
        (0..16u8).map(Sides)
    }
}

impl Default for Sides {
    fn default() -> Self {
        Sides::ALL
    }
}

impl From<Side> for Sides {
    #[inline]
    fn from(side: Side) -> Self {
        Sides(side.bit())
    }
}

impl BitOr for Sides {
    type Output = Sides;
    #[inline]
    fn bitor(self, rhs: Sides) -> Sides {
        Sides(self.0 | rhs.0)
    }
}

impl BitOrAssign for Sides {
    #[inline]
    fn bitor_assign(&mut self, rhs: Sides) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Sides {
    type Output = Sides;
    #[inline]
    fn bitand(self, rhs: Sides) -> Sides {
        Sides(self.0 & rhs.0)
    }
}

impl Not for Sides {
    type Output = Sides;
    #[inline]
    fn not(self) -> Sides {
        Sides(!self.0 & 15)
    }
}

impl fmt::Display for Sides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return f.write_str("None");
        }
        if self.is_all() {
            return f.write_str("All");
        }
        let mut first = true;
        for side in Side::ALL.into_iter().filter(|s| self.contains(*s)) {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(side.name())?;
            first = false;
        }
        Ok(())
    }
}

impl fmt::Debug for Sides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sides({})", self)
    }
}

impl FromStr for Sides {
    type Err = UnknownName;

    /// Accepts `None`, `All`, or side names separated by commas.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut out = Sides::NONE;
        for part in s.split(',').map(str::trim) {
            out |= match part {
                p if p.eq_ignore_ascii_case("none") => Sides::NONE,
                p if p.eq_ignore_ascii_case("all") => Sides::ALL,
                p => Side::ALL
                    .into_iter()
                    .find(|side| side.name().eq_ignore_ascii_case(p))
                    .map(Sides::from)
                    .ok_or_else(|| UnknownName::new("border side", s))?,
            };
        }
        Ok(out)
    }
}
