use std::fmt;
use std::str::FromStr;

use crate::error::UnknownName;

use super::Side;

/// Rendering treatment of a single rectangle corner.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum CornerType {
    /// Sharp right angle at the exact vertex.
    #[default]
    Square,
    /// Quarter-circle arc of the shared radius.
    Round,
    /// Straight chamfer cutting the corner `radius` units along each edge.
    Sliced,
}

impl CornerType {
    pub const ALL: [CornerType; 3] = [CornerType::Square, CornerType::Round, CornerType::Sliced];

    pub fn name(self) -> &'static str {
        match self {
            CornerType::Square => "Square",
            CornerType::Round => "Round",
            CornerType::Sliced => "Sliced",
        }
    }
}

impl fmt::Display for CornerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CornerType {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CornerType::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownName::new("corner type", s))
    }
}

/// Corner identity, listed in clockwise order starting at the top-left.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    /// The side a clockwise walk arrives on before turning this corner.
    #[inline]
    pub const fn leading_side(self) -> Side {
        match self {
            Corner::TopLeft => Side::Left,
            Corner::TopRight => Side::Top,
            Corner::BottomRight => Side::Right,
            Corner::BottomLeft => Side::Bottom,
        }
    }

    /// The side a clockwise walk leaves on after turning this corner.
    #[inline]
    pub const fn trailing_side(self) -> Side {
        match self {
            Corner::TopLeft => Side::Top,
            Corner::TopRight => Side::Right,
            Corner::BottomRight => Side::Bottom,
            Corner::BottomLeft => Side::Left,
        }
    }
}

/// Corner shapes of one rectangle plus the radius they share.
///
/// Default is four square corners with radius 0, which is the "no
/// customization" state reported by [`is_empty`](Self::is_empty).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct CornerModel {
    pub top_left: CornerType,
    pub top_right: CornerType,
    pub bottom_right: CornerType,
    pub bottom_left: CornerType,
    pub radius: u32,
}

impl CornerModel {
    #[inline]
    pub const fn new(
        top_left: CornerType,
        top_right: CornerType,
        bottom_right: CornerType,
        bottom_left: CornerType,
        radius: u32,
    ) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left, radius }
    }

    /// Same shape on all four corners.
    #[inline]
    pub const fn uniform(shape: CornerType, radius: u32) -> Self {
        Self::new(shape, shape, shape, shape, radius)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    #[inline]
    pub fn get(&self, corner: Corner) -> CornerType {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomRight => self.bottom_right,
            Corner::BottomLeft => self.bottom_left,
        }
    }

    #[inline]
    pub fn set(&mut self, corner: Corner, shape: CornerType) {
        match corner {
            Corner::TopLeft => self.top_left = shape,
            Corner::TopRight => self.top_right = shape,
            Corner::BottomRight => self.bottom_right = shape,
            Corner::BottomLeft => self.bottom_left = shape,
        }
    }

    /// Builder-style [`set`](Self::set).
    #[inline]
    pub fn with(mut self, corner: Corner, shape: CornerType) -> Self {
        self.set(corner, shape);
        self
    }

    /// The shape actually drawn: any corner degenerates to `Square` at radius 0.
    #[inline]
    pub fn effective(&self, corner: Corner) -> CornerType {
        if self.radius == 0 { CornerType::Square } else { self.get(corner) }
    }

    #[inline]
    pub fn radius_f32(&self) -> f32 {
        self.radius as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(CornerModel::default().is_empty());
        assert!(!CornerModel::default().with(Corner::TopLeft, CornerType::Round).is_empty());
        assert!(!CornerModel { radius: 3, ..CornerModel::default() }.is_empty());
    }

    #[test]
    fn zero_radius_degenerates_to_square() {
        let model = CornerModel::uniform(CornerType::Round, 0);
        for corner in Corner::ALL {
            assert_eq!(model.get(corner), CornerType::Round);
            assert_eq!(model.effective(corner), CornerType::Square);
        }
    }

    #[test]
    fn copies_are_independent() {
        let original = CornerModel::uniform(CornerType::Sliced, 4);
        let mut copy = original;
        copy.set(Corner::BottomLeft, CornerType::Round);
        assert_eq!(original.bottom_left, CornerType::Sliced);
        assert_eq!(copy.bottom_left, CornerType::Round);
    }

    #[test]
    fn adjacent_sides_walk_clockwise() {
        for (i, corner) in Corner::ALL.into_iter().enumerate() {
            let next = Corner::ALL[(i + 1) % 4];
            assert_eq!(corner.trailing_side(), next.leading_side());
        }
    }

    #[test]
    fn corner_type_names() {
        assert_eq!("round".parse::<CornerType>(), Ok(CornerType::Round));
        assert_eq!(CornerType::Sliced.to_string(), "Sliced");
        assert!("Bevel".parse::<CornerType>().is_err());
    }
}
