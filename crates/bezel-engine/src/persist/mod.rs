//! Reading and writing style objects as `bezel-doc` documents.
//!
//! Every style object maps to one node; nested objects are child nodes
//! named after the field that holds them. Readers start from defaults, so
//! absent fields keep their default value. Writers emit every field in a
//! fixed order, so output is stable.
//!
//! ```text
//! AppearanceBorder {
//!     BorderLineStyle: Solid
//!     BorderVisibility: "Left, Top"
//!     CornerShape {
//!         TopLeft: Round
//!         TopRight: Square
//!         BottomRight: Square
//!         BottomLeft: Square
//!         Radius: 10
//!     }
//! }
//! ```

mod error;
mod fields;
mod objects;

pub use error::DocError;

use bezel_doc::{parse_str, Document, Node};

/// A style object with a document form.
pub trait Persist: Sized + Default {
    /// Node name used when the object is a document root.
    const NODE: &'static str;

    /// Reads the object from `node`, ignoring the node's own name.
    fn read_node(node: &Node) -> Result<Self, DocError>;

    /// Writes the object as a node called `name`.
    fn write_node(&self, name: &str) -> Node;
}

/// Reads `T` from a document whose root is `T::NODE`.
pub fn from_document<T: Persist>(doc: &Document) -> Result<T, DocError> {
    if doc.root.name != T::NODE {
        return Err(DocError::UnexpectedRoot { expected: T::NODE, found: doc.root.name.clone() });
    }
    T::read_node(&doc.root)
}

pub fn to_document<T: Persist>(value: &T) -> Document {
    Document::new(value.write_node(T::NODE))
}

/// Parses and reads `T` from document text.
pub fn from_str<T: Persist>(src: &str) -> Result<T, DocError> {
    let doc = parse_str(src)?;
    from_document(&doc)
}

/// Canonical document text for `value`.
pub fn to_string<T: Persist>(value: &T) -> String {
    to_document(value).to_string()
}

/// Reads the child `name` of `node`, or the default when absent.
pub(crate) fn read_child<T: Persist>(node: &Node, name: &str) -> Result<T, DocError> {
    match node.child(name) {
        Some(child) => T::read_node(child),
        None => Ok(T::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Corner, CornerModel, CornerType, Sides};
    use crate::paint::{Color, DashStyle, KnownColor};
    use crate::style::{AppearanceBorder, AppearanceItem, AppearanceText, ColorPair, FontSpec, ItemState, TextAlign, Theme, Trimming};

    // ── reading ───────────────────────────────────────────────────────────

    #[test]
    fn reads_border_document() {
        let src = r#"
            AppearanceBorder {
                BorderLineStyle: Dash
                BorderVisibility: "Left, Top"
                CornerShape { TopLeft: Round  Radius: 10 }
            }
        "#;
        let border: AppearanceBorder = from_str(src).unwrap();
        assert_eq!(border.line_style, DashStyle::Dash);
        assert_eq!(border.visibility, Sides::LEFT | Sides::TOP);
        assert_eq!(border.corners.get(Corner::TopLeft), CornerType::Round);
        assert_eq!(border.corners.get(Corner::BottomRight), CornerType::Square);
        assert_eq!(border.corners.radius, 10);
    }

    #[test]
    fn absent_fields_keep_defaults() {
        let border: AppearanceBorder = from_str("AppearanceBorder { }").unwrap();
        assert!(border.is_empty());
        let item: AppearanceItem = from_str("AppearanceItem { NormalBorder: \"Red\" }").unwrap();
        assert_eq!(item.border_color(ItemState::Normal), Color::Known(KnownColor::RED));
        assert_eq!(item.gradient(), 90);
        assert!(item.back_style.is_empty());
    }

    #[test]
    fn enum_names_may_be_quoted() {
        let pair: CornerModel = from_str(r#"CornerShape { TopRight: "sliced" }"#).unwrap();
        assert_eq!(pair.top_right, CornerType::Sliced);
    }

    #[test]
    fn invalid_enum_values_fail() {
        let err = from_str::<CornerModel>("CornerShape { TopLeft: Rounded }").unwrap_err();
        assert_eq!(err, DocError::InvalidValue { field: "CornerShape.TopLeft".into(), value: "Rounded".into() });
        assert!(from_str::<AppearanceBorder>(r#"AppearanceBorder { BorderVisibility: "Left, Middle" }"#).is_err());
        assert!(from_str::<AppearanceText>("AppearanceText { Trimming: Ellipsis }").is_err());
    }

    #[test]
    fn malformed_colors_fail() {
        let err = from_str::<ColorPair>(r#"ColorPair { BackColor1: "1, 2" }"#).unwrap_err();
        assert!(matches!(err, DocError::InvalidValue { ref field, .. } if field == "ColorPair.BackColor1"));
    }

    #[test]
    fn unknown_color_names_read_as_unset() {
        let pair: ColorPair = from_str(r#"ColorPair { BackColor1: "Blurple" }"#).unwrap();
        assert!(pair.back_color1.is_unset());
    }

    #[test]
    fn wrong_value_kinds_fail() {
        let err = from_str::<ColorPair>(r#"ColorPair { Gradient: "90" }"#).unwrap_err();
        assert_eq!(err, DocError::WrongType { field: "ColorPair.Gradient".into(), expected: "a number" });
        assert!(from_str::<ColorPair>("ColorPair { BackColor1: 7 }").is_err());
    }

    #[test]
    fn out_of_range_integers_fail() {
        assert!(from_str::<CornerModel>("CornerShape { Radius: -1 }").is_err());
        assert!(from_str::<CornerModel>("CornerShape { Radius: 2.5 }").is_err());
    }

    #[test]
    fn root_name_is_checked() {
        let err = from_str::<AppearanceBorder>("ColorPair { }").unwrap_err();
        assert_eq!(err, DocError::UnexpectedRoot { expected: "AppearanceBorder", found: "ColorPair".into() });
    }

    #[test]
    fn parse_errors_are_wrapped() {
        let err = from_str::<Theme>("Theme {").unwrap_err();
        assert!(matches!(err, DocError::Parse(_)));
        assert!(err.to_string().starts_with("style document error at 1:"));
    }

    #[test]
    fn item_gradient_does_not_override_pairs() {
        let src = "AppearanceItem { HoverStyle { Gradient: 0 } Gradient: 45 }";
        let item: AppearanceItem = from_str(src).unwrap();
        assert_eq!(item.gradient(), 45);
        assert_eq!(item.hover_style.gradient, 0);
        assert_eq!(item.back_style.gradient, 90);
    }

    // ── writing ───────────────────────────────────────────────────────────

    #[test]
    fn writes_every_field_in_order() {
        let mut border = AppearanceBorder::default();
        border.set_visibility(Sides::LEFT | Sides::TOP);
        border.set_corner(Corner::TopLeft, CornerType::Round);
        border.set_radius(10);
        let expected = "\
AppearanceBorder {
    BorderLineStyle: Solid
    BorderVisibility: \"Left, Top\"
    CornerShape {
        TopLeft: Round
        TopRight: Square
        BottomRight: Square
        BottomLeft: Square
        Radius: 10
    }
}
";
        assert_eq!(to_string(&border), expected);
    }

    #[test]
    fn item_field_order() {
        let node = AppearanceItem::default().write_node("AppearanceItem");
        let keys: Vec<&str> = node
            .items
            .iter()
            .map(|i| match i {
                bezel_doc::Item::Prop(p) => p.key.as_str(),
                bezel_doc::Item::Node(n) => n.name.as_str(),
            })
            .collect();
        assert_eq!(keys, [
            "BackStyle",
            "ClickStyle",
            "HoverStyle",
            "SelectedStyle",
            "DisabledStyle",
            "SelectedHoverStyle",
            "NormalBorder",
            "HoverBorder",
            "NormalForeGround",
            "SelectedBorder",
            "HoverForeGround",
            "AppearanceText",
            "SelectedForeGround",
            "DisabledBorder",
            "DisabledForeGround",
            "Gradient",
        ]);
    }

    // ── round trip ────────────────────────────────────────────────────────

    #[test]
    fn theme_round_trip() {
        let mut theme = Theme::default();
        theme.border.set_line_style(DashStyle::DashDotDot);
        theme.border.set_visibility(Sides::BOTTOM);
        theme.border.set_corners(CornerModel::new(CornerType::Round, CornerType::Sliced, CornerType::Square, CornerType::Round, 6));
        theme.item.set_gradient(30);
        theme.item.hover_style = ColorPair::new(Color::argb(128, 1, 2, 3), KnownColor::HIGHLIGHT, 180);
        theme.item.set_border(ItemState::Disabled, Color::Known(KnownColor::GRAY_TEXT));
        theme.item.set_fore_color(ItemState::Selected, Color::rgb(10, 20, 30));
        theme.item.text = AppearanceText {
            font: FontSpec::new("Tahoma \"Bold\"", 9.5),
            alignment: TextAlign::Far,
            line_alignment: TextAlign::Near,
            trimming: Trimming::EllipsisPath,
            x_shift: -1,
            y_shift: 2,
        };

        let text = to_string(&theme);
        let back: Theme = from_str(&text).unwrap();
        assert_eq!(back, theme);
    }

    #[test]
    fn default_theme_round_trip() {
        let back: Theme = from_str(&to_string(&Theme::default())).unwrap();
        assert!(back.is_empty());
    }
}
