//! Textual form of [`Color`].
//!
//! - `""` is [`Color::Unset`]
//! - a name (`"ControlDark"`) is a [`KnownColor`]
//! - `"R, G, B"` or `"A, R, G, B"` are explicit channels
//!
//! Formatting always writes explicit channels alpha-first, so
//! `parse(format(c)) == c` for every color.

use std::fmt;
use std::str::FromStr;

use super::{Argb, Color, KnownColor};

/// A numeric color list that could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorFormatError {
    pub text: String,
    pub reason: &'static str,
}

impl fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color {:?}: {}", self.text, self.reason)
    }
}

impl std::error::Error for ColorFormatError {}

impl FromStr for Color {
    type Err = ColorFormatError;

    /// Unrecognized names yield [`Color::Unset`] rather than an error; only
    /// malformed numeric lists fail.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.contains(',') {
            return parse_channels(text).map(Color::Argb);
        }
        if text.is_empty() {
            return Ok(Color::Unset);
        }
        match KnownColor::from_name(text) {
            Some(k) => Ok(Color::Known(k)),
            None => {
                log::warn!("unrecognized color name {:?}, treating as unset", text);
                Ok(Color::Unset)
            }
        }
    }
}

fn parse_channels(text: &str) -> Result<Argb, ColorFormatError> {
    let err = |reason| ColorFormatError { text: text.to_string(), reason };

    let mut channels = [0u8; 4];
    let mut count = 0;
    for part in text.split(',') {
        if count == 4 {
            return Err(err("expected 3 or 4 components"));
        }
        channels[count] = part
            .trim()
            .parse::<u8>()
            .map_err(|_| err("components must be integers in 0..=255"))?;
        count += 1;
    }

    match count {
        3 => Ok(Argb::rgb(channels[0], channels[1], channels[2])),
        4 => Ok(Argb::new(channels[0], channels[1], channels[2], channels[3])),
        _ => Err(err("expected 3 or 4 components")),
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Unset => Ok(()),
            Color::Known(k) => f.write_str(k.name()),
            Color::Argb(c) => write!(f, "{}, {}, {}, {}", c.a, c.r, c.g, c.b),
        }
    }
}
