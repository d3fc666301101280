use super::{AppearanceBorder, AppearanceItem};

/// Border and item appearance stored together in one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    pub border: AppearanceBorder,
    pub item: AppearanceItem,
}

impl Theme {
    pub fn reset(&mut self) {
        self.border.reset();
        self.item.reset();
    }

    pub fn is_empty(&self) -> bool {
        self.border.is_empty() && self.item.is_empty()
    }

    #[inline]
    pub fn default_changed(&self) -> bool {
        !self.is_empty()
    }
}
