use std::fmt;
use std::str::FromStr;

use crate::error::UnknownName;

use super::action::{update, AppearanceAction};

/// Font family and size in points.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: f32,
}

impl FontSpec {
    pub const DEFAULT_FAMILY: &'static str = "Microsoft Sans Serif";
    pub const DEFAULT_SIZE: f32 = 8.25;

    #[inline]
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self { family: family.into(), size }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FAMILY, Self::DEFAULT_SIZE)
    }
}

/// Placement along one axis of the layout box.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum TextAlign {
    #[default]
    Near,
    Center,
    Far,
}

/// How text that does not fit is cut.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Trimming {
    None,
    #[default]
    Character,
    Word,
    EllipsisCharacter,
    EllipsisWord,
    EllipsisPath,
}

macro_rules! named_enum {
    ($ty:ident, $kind:literal, [$($variant:ident),+ $(,)?]) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => stringify!($variant),)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownName;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name().eq_ignore_ascii_case(s))
                    .ok_or_else(|| UnknownName::new($kind, s))
            }
        }
    };
}

named_enum!(TextAlign, "text alignment", [Near, Center, Far]);
named_enum!(Trimming, "trimming", [None, Character, Word, EllipsisCharacter, EllipsisWord, EllipsisPath]);

/// Text styling of an item: font, alignment, trimming and the offset of
/// the embossed highlight copy.
#[derive(Debug, Clone, PartialEq)]
pub struct AppearanceText {
    pub font: FontSpec,
    pub alignment: TextAlign,
    pub line_alignment: TextAlign,
    pub trimming: Trimming,
    pub x_shift: i32,
    pub y_shift: i32,
}

impl Default for AppearanceText {
    fn default() -> Self {
        Self {
            font: FontSpec::default(),
            alignment: TextAlign::Near,
            line_alignment: TextAlign::Center,
            trimming: Trimming::Character,
            x_shift: 0,
            y_shift: 0,
        }
    }
}

impl AppearanceText {
    pub fn set_font(&mut self, font: FontSpec) -> Option<AppearanceAction> {
        update(&mut self.font, font, AppearanceAction::Repaint)
    }

    pub fn set_alignment(&mut self, alignment: TextAlign) -> Option<AppearanceAction> {
        update(&mut self.alignment, alignment, AppearanceAction::Repaint)
    }

    pub fn set_line_alignment(&mut self, alignment: TextAlign) -> Option<AppearanceAction> {
        update(&mut self.line_alignment, alignment, AppearanceAction::Repaint)
    }

    pub fn set_trimming(&mut self, trimming: Trimming) -> Option<AppearanceAction> {
        update(&mut self.trimming, trimming, AppearanceAction::Repaint)
    }

    pub fn set_x_shift(&mut self, shift: i32) -> Option<AppearanceAction> {
        update(&mut self.x_shift, shift, AppearanceAction::Repaint)
    }

    pub fn set_y_shift(&mut self, shift: i32) -> Option<AppearanceAction> {
        update(&mut self.y_shift, shift, AppearanceAction::Repaint)
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    #[inline]
    pub fn default_changed(&self) -> bool {
        !self.is_empty()
    }
}
