use core::cmp::Ordering;

/// Paint layer of a draw item. Higher values appear on top of lower values.
///
/// The recording surface places each command kind on its own layer so an
/// item's background never covers its border or text, whatever order the
/// caller drew them in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    pub const FILL: ZIndex = ZIndex(0);
    pub const BORDER: ZIndex = ZIndex(10);
    pub const TEXT: ZIndex = ZIndex(20);

    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }

    /// Same layer shifted by `offset`, e.g. to stack one item above another.
    #[inline]
    pub const fn offset(self, offset: i32) -> Self {
        Self(self.0 + offset)
    }
}

impl Ord for ZIndex {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for ZIndex {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
