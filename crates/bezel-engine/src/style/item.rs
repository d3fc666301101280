use crate::paint::Color;

use super::action::{update, AppearanceAction};
use super::color_pair::DEFAULT_GRADIENT;
use super::{AppearanceText, ColorPair};

/// Interaction state an item is drawn in.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ItemState {
    #[default]
    Normal,
    Hover,
    Pressed,
    Selected,
    SelectedHover,
    Disabled,
}

impl ItemState {
    pub const ALL: [ItemState; 6] = [
        ItemState::Normal,
        ItemState::Hover,
        ItemState::Pressed,
        ItemState::Selected,
        ItemState::SelectedHover,
        ItemState::Disabled,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ItemState::Normal => "Normal",
            ItemState::Hover => "Hover",
            ItemState::Pressed => "Pressed",
            ItemState::Selected => "Selected",
            ItemState::SelectedHover => "SelectedHover",
            ItemState::Disabled => "Disabled",
        }
    }
}

/// Colors and text styling of an item in every interaction state.
///
/// Unset colors mean "inherit from the host"; `is_empty` is true while
/// nothing has been customized.
#[derive(Debug, Clone, PartialEq)]
pub struct AppearanceItem {
    pub back_style: ColorPair,
    pub click_style: ColorPair,
    pub hover_style: ColorPair,
    pub selected_style: ColorPair,
    pub disabled_style: ColorPair,
    pub selected_hover_style: ColorPair,

    pub normal_border: Color,
    pub hover_border: Color,
    pub selected_border: Color,
    pub disabled_border: Color,

    pub normal_fore_ground: Color,
    pub hover_fore_ground: Color,
    pub selected_fore_ground: Color,
    pub disabled_fore_ground: Color,

    pub text: AppearanceText,
    gradient: i32,
}

impl Default for AppearanceItem {
    fn default() -> Self {
        Self {
            back_style: ColorPair::default(),
            click_style: ColorPair::default(),
            hover_style: ColorPair::default(),
            selected_style: ColorPair::default(),
            disabled_style: ColorPair::default(),
            selected_hover_style: ColorPair::default(),
            normal_border: Color::Unset,
            hover_border: Color::Unset,
            selected_border: Color::Unset,
            disabled_border: Color::Unset,
            normal_fore_ground: Color::Unset,
            hover_fore_ground: Color::Unset,
            selected_fore_ground: Color::Unset,
            disabled_fore_ground: Color::Unset,
            text: AppearanceText::default(),
            gradient: DEFAULT_GRADIENT,
        }
    }
}

impl AppearanceItem {
    #[inline]
    pub fn gradient(&self) -> i32 {
        self.gradient
    }

    /// Sets the item gradient and copies it into every state's pair.
    pub fn set_gradient(&mut self, gradient: i32) -> Option<AppearanceAction> {
        let mut action = update(&mut self.gradient, gradient, AppearanceAction::Repaint);
        for pair in self.pairs_mut() {
            action = AppearanceAction::merge(action, pair.set_gradient(gradient));
        }
        action
    }

    /// Restores the gradient field alone, e.g. after reading a document,
    /// without touching the per-state pairs.
    pub(crate) fn set_gradient_field(&mut self, gradient: i32) {
        self.gradient = gradient;
    }

    pub fn set_border(&mut self, state: ItemState, color: Color) -> Option<AppearanceAction> {
        let slot = match state {
            ItemState::Normal => &mut self.normal_border,
            ItemState::Hover | ItemState::Pressed | ItemState::SelectedHover => &mut self.hover_border,
            ItemState::Selected => &mut self.selected_border,
            ItemState::Disabled => &mut self.disabled_border,
        };
        update(slot, color, AppearanceAction::Repaint)
    }

    pub fn set_fore_color(&mut self, state: ItemState, color: Color) -> Option<AppearanceAction> {
        let slot = match state {
            ItemState::Normal => &mut self.normal_fore_ground,
            ItemState::Hover | ItemState::Pressed => &mut self.hover_fore_ground,
            ItemState::Selected | ItemState::SelectedHover => &mut self.selected_fore_ground,
            ItemState::Disabled => &mut self.disabled_fore_ground,
        };
        update(slot, color, AppearanceAction::Repaint)
    }

    /// Background pair for `state`.
    pub fn back_style(&self, state: ItemState) -> &ColorPair {
        match state {
            ItemState::Normal => &self.back_style,
            ItemState::Hover => &self.hover_style,
            ItemState::Pressed => &self.click_style,
            ItemState::Selected => &self.selected_style,
            ItemState::SelectedHover => &self.selected_hover_style,
            ItemState::Disabled => &self.disabled_style,
        }
    }

    pub fn back_style_mut(&mut self, state: ItemState) -> &mut ColorPair {
        match state {
            ItemState::Normal => &mut self.back_style,
            ItemState::Hover => &mut self.hover_style,
            ItemState::Pressed => &mut self.click_style,
            ItemState::Selected => &mut self.selected_style,
            ItemState::SelectedHover => &mut self.selected_hover_style,
            ItemState::Disabled => &mut self.disabled_style,
        }
    }

    /// Border color for `state`. Pressed and selected-hover share the hover border.
    pub fn border_color(&self, state: ItemState) -> Color {
        match state {
            ItemState::Normal => self.normal_border,
            ItemState::Hover | ItemState::Pressed | ItemState::SelectedHover => self.hover_border,
            ItemState::Selected => self.selected_border,
            ItemState::Disabled => self.disabled_border,
        }
    }

    /// Text color for `state`. Pressed follows hover, selected-hover follows selected.
    pub fn fore_color(&self, state: ItemState) -> Color {
        match state {
            ItemState::Normal => self.normal_fore_ground,
            ItemState::Hover | ItemState::Pressed => self.hover_fore_ground,
            ItemState::Selected | ItemState::SelectedHover => self.selected_fore_ground,
            ItemState::Disabled => self.disabled_fore_ground,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    #[inline]
    pub fn default_changed(&self) -> bool {
        !self.is_empty()
    }

    fn pairs_mut(&mut self) -> [&mut ColorPair; 6] {
        [
            &mut self.back_style,
            &mut self.click_style,
            &mut self.hover_style,
            &mut self.selected_style,
            &mut self.disabled_style,
            &mut self.selected_hover_style,
        ]
    }
}
