use core::cmp::Ordering;

use super::ZIndex;

/// Paint-order key of a recorded command: layer first, then recording order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    /// Recording index, so equal layers keep the order they were drawn in.
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}

impl Ord for SortKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.z.cmp(&other.z).then(self.order.cmp(&other.order))
    }
}

impl PartialOrd for SortKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
