use crate::geometry::{ClosedPath, Segment};
use crate::paint::Stroke;

/// Geometry a stroke was recorded with.
#[derive(Debug, Clone, PartialEq)]
pub enum StrokeShape {
    Path(ClosedPath),
    Segment(Segment),
}

/// Stroke draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeCmd {
    pub shape: StrokeShape,
    pub stroke: Stroke,
}

impl StrokeCmd {
    #[inline]
    pub fn new(shape: StrokeShape, stroke: Stroke) -> Self {
        Self { shape, stroke }
    }

    /// Total stroked length.
    pub fn length(&self) -> f32 {
        match &self.shape {
            StrokeShape::Path(path) => path.length(),
            StrokeShape::Segment(seg) => seg.length(),
        }
    }
}
