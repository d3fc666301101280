/// What a caller must do after a style value changed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum AppearanceAction {
    /// Colors changed; redraw with the existing geometry.
    Repaint,
    /// Border geometry changed; rebuild cached outlines, then redraw.
    Recreate,
}

impl AppearanceAction {
    /// The stronger of two actions.
    #[inline]
    pub fn merge(a: Option<Self>, b: Option<Self>) -> Option<Self> {
        a.max(b)
    }
}

/// Stores `value` in `slot` and reports `action` if it differs.
#[inline]
pub(crate) fn update<T: PartialEq>(slot: &mut T, value: T, action: AppearanceAction) -> Option<AppearanceAction> {
    if *slot == value {
        return None;
    }
    *slot = value;
    Some(action)
}
