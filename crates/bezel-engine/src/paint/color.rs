use super::known::KnownColor;

/// Concrete 8-bit straight-alpha color.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Argb {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Argb {
    pub const TRANSPARENT: Argb = Argb::new(0, 0, 0, 0);

    #[inline]
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Fully opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(255, r, g, b)
    }

    /// Unpacks `0xAARRGGBB`.
    #[inline]
    pub const fn from_u32(argb: u32) -> Self {
        Self::new((argb >> 24) as u8, (argb >> 16) as u8, (argb >> 8) as u8, argb as u8)
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Premultiplied `[r, g, b, a]` in `[0, 1]`, the layout vertex buffers use.
    #[inline]
    pub fn to_premul_f32(self) -> [f32; 4] {
        let a = self.a as f32 / 255.0;
        [
            self.r as f32 / 255.0 * a,
            self.g as f32 / 255.0 * a,
            self.b as f32 / 255.0 * a,
            a,
        ]
    }
}

/// A style color as authored: unset, a known named/system color, or
/// explicit channel values.
///
/// Keeping the three apart is what lets the literal form round-trip: a
/// named color formats back to its name rather than to its channels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Color {
    /// No color chosen. Resolves to transparent black.
    #[default]
    Unset,
    Known(KnownColor),
    Argb(Argb),
}

impl Color {
    #[inline]
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color::Argb(Argb::new(a, r, g, b))
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Argb(Argb::rgb(r, g, b))
    }

    #[inline]
    pub fn is_unset(self) -> bool {
        matches!(self, Color::Unset)
    }

    /// Resolves to concrete channels.
    #[inline]
    pub fn to_argb(self) -> Argb {
        match self {
            Color::Unset => Argb::TRANSPARENT,
            Color::Known(k) => k.argb(),
            Color::Argb(c) => c,
        }
    }
}

impl From<Argb> for Color {
    #[inline]
    fn from(c: Argb) -> Self {
        Color::Argb(c)
    }
}

impl From<KnownColor> for Color {
    #[inline]
    fn from(k: KnownColor) -> Self {
        Color::Known(k)
    }
}
