use crate::coords::{Corner, CornerType, Rect, Vec2};

use super::Segment;

/// Key points of one corner for a given inset.
///
/// `leading` lies on the side a clockwise walk arrives on, `trailing` on the
/// side it leaves on; both sit `inset` units from `vertex`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CornerFrame {
    pub corner: Corner,
    pub vertex: Vec2,
    pub leading: Vec2,
    pub trailing: Vec2,
    pub inset: f32,
}

impl CornerFrame {
    pub fn new(rect: Rect, corner: Corner, inset: f32) -> Self {
        let (l, t, r, b) = (rect.x(), rect.y(), rect.right(), rect.bottom());
        let (vertex, leading, trailing) = match corner {
            Corner::TopLeft => (Vec2::new(l, t), Vec2::new(l, t + inset), Vec2::new(l + inset, t)),
            Corner::TopRight => (Vec2::new(r, t), Vec2::new(r - inset, t), Vec2::new(r, t + inset)),
            Corner::BottomRight => (Vec2::new(r, b), Vec2::new(r, b - inset), Vec2::new(r - inset, b)),
            Corner::BottomLeft => (Vec2::new(l, b), Vec2::new(l + inset, b), Vec2::new(l, b - inset)),
        };
        Self { corner, vertex, leading, trailing, inset }
    }

    /// Quarter arc from `leading` to `trailing`.
    pub fn arc(&self) -> Segment {
        let (center, start_deg) = match self.corner {
            Corner::TopLeft => (Vec2::new(self.trailing.x, self.leading.y), 180.0),
            Corner::TopRight => (Vec2::new(self.leading.x, self.trailing.y), 270.0),
            Corner::BottomRight => (Vec2::new(self.trailing.x, self.leading.y), 0.0),
            Corner::BottomLeft => (Vec2::new(self.leading.x, self.trailing.y), 90.0),
        };
        Segment::arc(center, self.inset, start_deg, 90.0)
    }

    /// Stub along the leading side, from the corner treatment's start to the vertex.
    #[inline]
    pub fn leading_stub(&self) -> Segment {
        Segment::line(self.leading, self.vertex)
    }

    /// Stub along the trailing side, from the vertex to the corner treatment's end.
    #[inline]
    pub fn trailing_stub(&self) -> Segment {
        Segment::line(self.vertex, self.trailing)
    }

    /// The full corner treatment for `shape`, from `leading` to `trailing`.
    pub fn treatment(&self, shape: CornerType) -> Vec<Segment> {
        match shape {
            CornerType::Square => vec![self.leading_stub(), self.trailing_stub()],
            CornerType::Round => vec![self.arc()],
            CornerType::Sliced => vec![Segment::line(self.leading, self.trailing)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: Rect = Rect::new(0.0, 0.0, 100.0, 50.0);

    #[test]
    fn arcs_connect_leading_to_trailing() {
        for corner in Corner::ALL {
            let frame = CornerFrame::new(RECT, corner, 10.0);
            let arc = frame.arc();
            assert!(arc.start().approx_eq(frame.leading, 1e-3), "{corner:?}");
            assert!(arc.end().approx_eq(frame.trailing, 1e-3), "{corner:?}");
        }
    }

    #[test]
    fn top_left_arc_center() {
        let Segment::Arc { center, radius, sweep_deg, .. } = CornerFrame::new(RECT, Corner::TopLeft, 10.0).arc() else {
            panic!("expected an arc");
        };
        assert_eq!(center, Vec2::new(10.0, 10.0));
        assert_eq!(radius, 10.0);
        assert_eq!(sweep_deg, 90.0);
    }

    #[test]
    fn every_treatment_spans_leading_to_trailing() {
        for corner in Corner::ALL {
            let frame = CornerFrame::new(RECT, corner, 8.0);
            for shape in CornerType::ALL {
                let segs = frame.treatment(shape);
                assert!(segs[0].start().approx_eq(frame.leading, 1e-3));
                assert!(segs[segs.len() - 1].end().approx_eq(frame.trailing, 1e-3));
            }
        }
    }

    #[test]
    fn zero_inset_collapses_onto_vertex() {
        let frame = CornerFrame::new(RECT, Corner::BottomRight, 0.0);
        assert_eq!(frame.leading, frame.vertex);
        assert_eq!(frame.trailing, frame.vertex);
        assert!(frame.treatment(CornerType::Square).iter().all(Segment::is_degenerate));
    }
}
