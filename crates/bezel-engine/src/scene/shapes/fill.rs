use crate::coords::Rect;
use crate::geometry::ClosedPath;
use crate::paint::Paint;

/// Area a fill covers.
#[derive(Debug, Clone, PartialEq)]
pub enum FillShape {
    Rect(Rect),
    Path(ClosedPath),
}

/// Fill draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct FillCmd {
    pub shape: FillShape,
    pub paint: Paint,
}

impl FillCmd {
    #[inline]
    pub fn new(shape: FillShape, paint: Paint) -> Self {
        Self { shape, paint }
    }
}
