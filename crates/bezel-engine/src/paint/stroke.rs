use std::fmt;
use std::str::FromStr;

use crate::error::UnknownName;

use super::{Argb, Paint};

/// Dash pattern of a stroke.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum DashStyle {
    #[default]
    Solid,
    Dash,
    Dot,
    DashDot,
    DashDotDot,
}

impl DashStyle {
    pub const ALL: [DashStyle; 5] = [
        DashStyle::Solid,
        DashStyle::Dash,
        DashStyle::Dot,
        DashStyle::DashDot,
        DashStyle::DashDotDot,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DashStyle::Solid => "Solid",
            DashStyle::Dash => "Dash",
            DashStyle::Dot => "Dot",
            DashStyle::DashDot => "DashDot",
            DashStyle::DashDotDot => "DashDotDot",
        }
    }

    /// On/off run lengths in multiples of the stroke width. Empty for solid.
    pub fn pattern(self) -> &'static [f32] {
        match self {
            DashStyle::Solid => &[],
            DashStyle::Dash => &[3.0, 1.0],
            DashStyle::Dot => &[1.0, 1.0],
            DashStyle::DashDot => &[3.0, 1.0, 1.0, 1.0],
            DashStyle::DashDotDot => &[3.0, 1.0, 1.0, 1.0, 1.0, 1.0],
        }
    }
}

impl fmt::Display for DashStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DashStyle {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DashStyle::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownName::new("dash style", s))
    }
}

/// Stroke style: dash pattern, paint source and pen width.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub dash: DashStyle,
    pub paint: Paint,
    pub width: f32,
}

impl Stroke {
    /// One-unit pen, the width every border is drawn with.
    #[inline]
    pub fn new(dash: DashStyle, paint: Paint) -> Self {
        Self { dash, paint, width: 1.0 }
    }

    #[inline]
    pub fn solid(color: Argb) -> Self {
        Self::new(DashStyle::Solid, Paint::Solid(color))
    }
}
