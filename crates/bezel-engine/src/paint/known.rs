use super::Argb;

/// A color identified by name: either a web color or a system UI color.
///
/// Instances only come from the built-in table, so two values are equal
/// exactly when they name the same entry.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct KnownColor {
    name: &'static str,
    argb: Argb,
}

impl KnownColor {
    pub const BLACK: KnownColor = KnownColor::entry("Black", 0xFF000000);
    pub const WHITE: KnownColor = KnownColor::entry("White", 0xFFFFFFFF);
    pub const RED: KnownColor = KnownColor::entry("Red", 0xFFFF0000);
    pub const TRANSPARENT: KnownColor = KnownColor::entry("Transparent", 0x00FFFFFF);
    pub const CONTROL: KnownColor = KnownColor::entry("Control", 0xFFF0F0F0);
    pub const CONTROL_DARK: KnownColor = KnownColor::entry("ControlDark", 0xFFA0A0A0);
    pub const CONTROL_TEXT: KnownColor = KnownColor::entry("ControlText", 0xFF000000);
    pub const GRAY_TEXT: KnownColor = KnownColor::entry("GrayText", 0xFF6D6D6D);
    pub const HIGHLIGHT: KnownColor = KnownColor::entry("Highlight", 0xFF3399FF);

    const fn entry(name: &'static str, argb: u32) -> Self {
        Self { name, argb: Argb::from_u32(argb) }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<KnownColor> {
        TABLE
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(n, argb)| KnownColor::entry(n, argb))
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn argb(self) -> Argb {
        self.argb
    }

    /// True for colors that follow the desktop theme rather than a fixed value.
    pub fn is_system(self) -> bool {
        TABLE[..SYSTEM_COUNT].iter().any(|(n, _)| *n == self.name)
    }
}

const SYSTEM_COUNT: usize = 26;

// System colors use the classic light-theme defaults.
static TABLE: &[(&str, u32)] = &[
    ("ActiveBorder", 0xFFB4B4B4),
    ("ActiveCaption", 0xFF99B4D1),
    ("ActiveCaptionText", 0xFF000000),
    ("AppWorkspace", 0xFFABABAB),
    ("ButtonFace", 0xFFF0F0F0),
    ("ButtonHighlight", 0xFFFFFFFF),
    ("ButtonShadow", 0xFFA0A0A0),
    ("Control", 0xFFF0F0F0),
    ("ControlDark", 0xFFA0A0A0),
    ("ControlDarkDark", 0xFF696969),
    ("ControlLight", 0xFFE3E3E3),
    ("ControlLightLight", 0xFFFFFFFF),
    ("ControlText", 0xFF000000),
    ("Desktop", 0xFF000000),
    ("GrayText", 0xFF6D6D6D),
    ("Highlight", 0xFF3399FF),
    ("HighlightText", 0xFFFFFFFF),
    ("HotTrack", 0xFF0066CC),
    ("InactiveBorder", 0xFFF4F7FC),
    ("InactiveCaption", 0xFFBFCDDB),
    ("Info", 0xFFFFFFE1),
    ("InfoText", 0xFF000000),
    ("Menu", 0xFFF0F0F0),
    ("MenuText", 0xFF000000),
    ("Window", 0xFFFFFFFF),
    ("WindowText", 0xFF000000),
    // web colors
    ("Transparent", 0x00FFFFFF),
    ("AliceBlue", 0xFFF0F8FF),
    ("AntiqueWhite", 0xFFFAEBD7),
    ("Aqua", 0xFF00FFFF),
    ("Aquamarine", 0xFF7FFFD4),
    ("Azure", 0xFFF0FFFF),
    ("Beige", 0xFFF5F5DC),
    ("Black", 0xFF000000),
    ("Blue", 0xFF0000FF),
    ("BlueViolet", 0xFF8A2BE2),
    ("Brown", 0xFFA52A2A),
    ("CadetBlue", 0xFF5F9EA0),
    ("Chocolate", 0xFFD2691E),
    ("CornflowerBlue", 0xFF6495ED),
    ("Crimson", 0xFFDC143C),
    ("Cyan", 0xFF00FFFF),
    ("DarkBlue", 0xFF00008B),
    ("DarkGray", 0xFFA9A9A9),
    ("DarkGreen", 0xFF006400),
    ("DarkOrange", 0xFFFF8C00),
    ("DarkRed", 0xFF8B0000),
    ("DarkSlateGray", 0xFF2F4F4F),
    ("DeepSkyBlue", 0xFF00BFFF),
    ("DimGray", 0xFF696969),
    ("DodgerBlue", 0xFF1E90FF),
    ("Firebrick", 0xFFB22222),
    ("ForestGreen", 0xFF228B22),
    ("Gainsboro", 0xFFDCDCDC),
    ("Gold", 0xFFFFD700),
    ("Goldenrod", 0xFFDAA520),
    ("Gray", 0xFF808080),
    ("Green", 0xFF008000),
    ("Honeydew", 0xFFF0FFF0),
    ("Indigo", 0xFF4B0082),
    ("Ivory", 0xFFFFFFF0),
    ("Khaki", 0xFFF0E68C),
    ("Lavender", 0xFFE6E6FA),
    ("LightBlue", 0xFFADD8E6),
    ("LightGray", 0xFFD3D3D3),
    ("LightGreen", 0xFF90EE90),
    ("LightSteelBlue", 0xFFB0C4DE),
    ("LightYellow", 0xFFFFFFE0),
    ("Lime", 0xFF00FF00),
    ("Linen", 0xFFFAF0E6),
    ("Magenta", 0xFFFF00FF),
    ("Maroon", 0xFF800000),
    ("MidnightBlue", 0xFF191970),
    ("Navy", 0xFF000080),
    ("Olive", 0xFF808000),
    ("Orange", 0xFFFFA500),
    ("OrangeRed", 0xFFFF4500),
    ("Orchid", 0xFFDA70D6),
    ("PaleGreen", 0xFF98FB98),
    ("Pink", 0xFFFFC0CB),
    ("Plum", 0xFFDDA0DD),
    ("PowderBlue", 0xFFB0E0E6),
    ("Purple", 0xFF800080),
    ("Red", 0xFFFF0000),
    ("RoyalBlue", 0xFF4169E1),
    ("Salmon", 0xFFFA8072),
    ("SeaGreen", 0xFF2E8B57),
    ("Silver", 0xFFC0C0C0),
    ("SkyBlue", 0xFF87CEEB),
    ("SlateGray", 0xFF708090),
    ("SteelBlue", 0xFF4682B4),
    ("Tan", 0xFFD2B48C),
    ("Teal", 0xFF008080),
    ("Tomato", 0xFFFF6347),
    ("Turquoise", 0xFF40E0D0),
    ("Violet", 0xFFEE82EE),
    ("Wheat", 0xFFF5DEB3),
    ("White", 0xFFFFFFFF),
    ("WhiteSmoke", 0xFFF5F5F5),
    ("Yellow", 0xFFFFFF00),
    ("YellowGreen", 0xFF9ACD32),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        let k = KnownColor::from_name("controldark").unwrap();
        assert_eq!(k, KnownColor::CONTROL_DARK);
        assert_eq!(k.name(), "ControlDark");
    }

    #[test]
    fn constants_match_table() {
        for k in [
            KnownColor::BLACK,
            KnownColor::WHITE,
            KnownColor::RED,
            KnownColor::TRANSPARENT,
            KnownColor::CONTROL,
            KnownColor::CONTROL_DARK,
            KnownColor::CONTROL_TEXT,
            KnownColor::GRAY_TEXT,
            KnownColor::HIGHLIGHT,
        ] {
            assert_eq!(KnownColor::from_name(k.name()), Some(k));
        }
    }

    #[test]
    fn system_colors_are_flagged() {
        assert!(KnownColor::CONTROL.is_system());
        assert!(!KnownColor::RED.is_system());
        assert_eq!(TABLE[SYSTEM_COUNT].0, "Transparent");
    }

    #[test]
    fn unknown_name() {
        assert!(KnownColor::from_name("NotAColor").is_none());
    }
}
