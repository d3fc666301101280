use bezel_doc::Node;

use crate::coords::CornerModel;
use crate::paint::Color;
use crate::style::{AppearanceBorder, AppearanceItem, AppearanceText, ColorPair, FontSpec, Theme};

use super::fields::{ident, num, quoted, read_color, read_enum, read_f32, read_int, read_string, warn_unknown};
use super::{read_child, DocError, Persist};

// ── CornerModel ───────────────────────────────────────────────────────────

impl Persist for CornerModel {
    const NODE: &'static str = "CornerShape";

    fn read_node(node: &Node) -> Result<Self, DocError> {
        warn_unknown(node, &["TopLeft", "TopRight", "BottomRight", "BottomLeft", "Radius"]);
        let mut model = CornerModel::default();
        read_enum(node, "TopLeft", &mut model.top_left)?;
        read_enum(node, "TopRight", &mut model.top_right)?;
        read_enum(node, "BottomRight", &mut model.bottom_right)?;
        read_enum(node, "BottomLeft", &mut model.bottom_left)?;
        read_int(node, "Radius", &mut model.radius)?;
        Ok(model)
    }

    fn write_node(&self, name: &str) -> Node {
        Node::new(name)
            .with_prop("TopLeft", ident(self.top_left.name()))
            .with_prop("TopRight", ident(self.top_right.name()))
            .with_prop("BottomRight", ident(self.bottom_right.name()))
            .with_prop("BottomLeft", ident(self.bottom_left.name()))
            .with_prop("Radius", num(self.radius))
    }
}

// ── AppearanceBorder ──────────────────────────────────────────────────────

impl Persist for AppearanceBorder {
    const NODE: &'static str = "AppearanceBorder";

    fn read_node(node: &Node) -> Result<Self, DocError> {
        warn_unknown(node, &["BorderLineStyle", "BorderVisibility", CornerModel::NODE]);
        let mut border = AppearanceBorder::default();
        read_enum(node, "BorderLineStyle", &mut border.line_style)?;
        read_enum(node, "BorderVisibility", &mut border.visibility)?;
        border.corners = read_child(node, CornerModel::NODE)?;
        Ok(border)
    }

    fn write_node(&self, name: &str) -> Node {
        Node::new(name)
            .with_prop("BorderLineStyle", ident(self.line_style.name()))
            .with_prop("BorderVisibility", quoted(self.visibility))
            .with_child(self.corners.write_node(CornerModel::NODE))
    }
}

// ── ColorPair ─────────────────────────────────────────────────────────────

impl Persist for ColorPair {
    const NODE: &'static str = "ColorPair";

    fn read_node(node: &Node) -> Result<Self, DocError> {
        warn_unknown(node, &["BackColor1", "BackColor2", "Gradient"]);
        let mut pair = ColorPair::default();
        read_color(node, "BackColor1", &mut pair.back_color1)?;
        read_color(node, "BackColor2", &mut pair.back_color2)?;
        read_int(node, "Gradient", &mut pair.gradient)?;
        Ok(pair)
    }

    fn write_node(&self, name: &str) -> Node {
        Node::new(name)
            .with_prop("BackColor1", quoted(self.back_color1))
            .with_prop("BackColor2", quoted(self.back_color2))
            .with_prop("Gradient", num(self.gradient))
    }
}

// ── AppearanceText ────────────────────────────────────────────────────────

impl Persist for FontSpec {
    const NODE: &'static str = "Font";

    fn read_node(node: &Node) -> Result<Self, DocError> {
        warn_unknown(node, &["Family", "Size"]);
        let mut font = FontSpec::default();
        read_string(node, "Family", &mut font.family)?;
        read_f32(node, "Size", &mut font.size)?;
        Ok(font)
    }

    fn write_node(&self, name: &str) -> Node {
        Node::new(name).with_prop("Family", quoted(&self.family)).with_prop("Size", num(self.size))
    }
}

impl Persist for AppearanceText {
    const NODE: &'static str = "AppearanceText";

    fn read_node(node: &Node) -> Result<Self, DocError> {
        warn_unknown(node, &[FontSpec::NODE, "Alignment", "LineAlignment", "Trimming", "Xshift", "Yshift"]);
        let mut text = AppearanceText { font: read_child(node, FontSpec::NODE)?, ..AppearanceText::default() };
        read_enum(node, "Alignment", &mut text.alignment)?;
        read_enum(node, "LineAlignment", &mut text.line_alignment)?;
        read_enum(node, "Trimming", &mut text.trimming)?;
        read_int(node, "Xshift", &mut text.x_shift)?;
        read_int(node, "Yshift", &mut text.y_shift)?;
        Ok(text)
    }

    fn write_node(&self, name: &str) -> Node {
        Node::new(name)
            .with_child(self.font.write_node(FontSpec::NODE))
            .with_prop("Alignment", ident(self.alignment.name()))
            .with_prop("LineAlignment", ident(self.line_alignment.name()))
            .with_prop("Trimming", ident(self.trimming.name()))
            .with_prop("Xshift", num(self.x_shift))
            .with_prop("Yshift", num(self.y_shift))
    }
}

// ── AppearanceItem ────────────────────────────────────────────────────────

const ITEM_PAIRS: [&str; 6] =
    ["BackStyle", "ClickStyle", "HoverStyle", "SelectedStyle", "DisabledStyle", "SelectedHoverStyle"];

const ITEM_FIELDS: [&str; 16] = [
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
];

impl AppearanceItem {
    fn pair_fields(&self) -> [&ColorPair; 6] {
        [
            &self.back_style,
            &self.click_style,
            &self.hover_style,
            &self.selected_style,
            &self.disabled_style,
            &self.selected_hover_style,
        ]
    }
}

impl Persist for AppearanceItem {
    const NODE: &'static str = "AppearanceItem";

    fn read_node(node: &Node) -> Result<Self, DocError> {
        warn_unknown(node, &ITEM_FIELDS);
        let mut item = AppearanceItem::default();
        item.back_style = read_child(node, "BackStyle")?;
        item.click_style = read_child(node, "ClickStyle")?;
        item.hover_style = read_child(node, "HoverStyle")?;
        item.selected_style = read_child(node, "SelectedStyle")?;
        item.disabled_style = read_child(node, "DisabledStyle")?;
        item.selected_hover_style = read_child(node, "SelectedHoverStyle")?;
        item.text = read_child(node, AppearanceText::NODE)?;

        let colors: [(&str, &mut Color); 8] = [
            ("NormalBorder", &mut item.normal_border),
            ("HoverBorder", &mut item.hover_border),
            ("NormalForeGround", &mut item.normal_fore_ground),
            ("SelectedBorder", &mut item.selected_border),
            ("HoverForeGround", &mut item.hover_fore_ground),
            ("SelectedForeGround", &mut item.selected_fore_ground),
            ("DisabledBorder", &mut item.disabled_border),
            ("DisabledForeGround", &mut item.disabled_fore_ground),
        ];
        for (key, slot) in colors {
            read_color(node, key, slot)?;
        }

        let mut gradient = item.gradient();
        read_int(node, "Gradient", &mut gradient)?;
        // Pairs carry their own angle; the item field is restored as written.
        item.set_gradient_field(gradient);
        Ok(item)
    }

    fn write_node(&self, name: &str) -> Node {
        let mut node = Node::new(name);
        for (key, pair) in ITEM_PAIRS.into_iter().zip(self.pair_fields()) {
            node = node.with_child(pair.write_node(key));
        }
        node.with_prop("NormalBorder", quoted(self.normal_border))
            .with_prop("HoverBorder", quoted(self.hover_border))
            .with_prop("NormalForeGround", quoted(self.normal_fore_ground))
            .with_prop("SelectedBorder", quoted(self.selected_border))
            .with_prop("HoverForeGround", quoted(self.hover_fore_ground))
            .with_child(self.text.write_node(AppearanceText::NODE))
            .with_prop("SelectedForeGround", quoted(self.selected_fore_ground))
            .with_prop("DisabledBorder", quoted(self.disabled_border))
            .with_prop("DisabledForeGround", quoted(self.disabled_fore_ground))
            .with_prop("Gradient", num(self.gradient()))
    }
}

// ── Theme ─────────────────────────────────────────────────────────────────

impl Persist for Theme {
    const NODE: &'static str = "Theme";

    fn read_node(node: &Node) -> Result<Self, DocError> {
        warn_unknown(node, &[AppearanceBorder::NODE, AppearanceItem::NODE]);
        Ok(Theme {
            border: read_child(node, AppearanceBorder::NODE)?,
            item: read_child(node, AppearanceItem::NODE)?,
        })
    }

    fn write_node(&self, name: &str) -> Node {
        Node::new(name)
            .with_child(self.border.write_node(AppearanceBorder::NODE))
            .with_child(self.item.write_node(AppearanceItem::NODE))
    }
}
