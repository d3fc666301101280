use crate::coords::{Corner, CornerModel, Rect, Side, Sides};
use crate::geometry::{build_outline, ClosedPath, CornerFrame, Segment};

/// Which part of the border a planned segment belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BorderPart {
    Edge(Side),
    Corner(Corner),
}

/// How one corner is drawn given the visibility of its two sides.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum CornerRule {
    Nothing,
    /// Straight piece on the leading side, up to the vertex.
    StubLeading,
    /// Straight piece on the trailing side, from the vertex.
    StubTrailing,
    /// The corner's own shape.
    Full,
}

/// Indexed by `[leading visible][trailing visible]`.
const CORNER_RULES: [[CornerRule; 2]; 2] = [
    [CornerRule::Nothing, CornerRule::StubTrailing],
    [CornerRule::StubLeading, CornerRule::Full],
];

#[inline]
pub(crate) fn corner_rule(corner: Corner, visibility: Sides) -> CornerRule {
    let leading = visibility.contains(corner.leading_side()) as usize;
    let trailing = visibility.contains(corner.trailing_side()) as usize;
    CORNER_RULES[leading][trailing]
}

/// Stroke geometry for a border, before any surface is involved.
#[derive(Debug, Clone, PartialEq)]
pub enum BorderPlan {
    /// Nothing visible.
    None,
    /// Every side visible: the whole outline as one path.
    Outline(ClosedPath),
    /// Some sides visible: independent segments in clockwise order.
    Segments(Vec<(BorderPart, Segment)>),
}

impl BorderPlan {
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, BorderPlan::None)
    }

    /// Total stroked length.
    pub fn ink(&self) -> f32 {
        match self {
            BorderPlan::None => 0.0,
            BorderPlan::Outline(path) => path.length(),
            BorderPlan::Segments(segs) => segs.iter().map(|(_, s)| s.length()).sum(),
        }
    }

    /// Planned segments belonging to `part`. Empty for an outline plan.
    pub fn part(&self, part: BorderPart) -> Vec<Segment> {
        match self {
            BorderPlan::Segments(segs) => segs.iter().filter(|(p, _)| *p == part).map(|(_, s)| *s).collect(),
            _ => Vec::new(),
        }
    }
}

/// Plans the visible border of `rect`.
///
/// With partial visibility each visible side gets an edge line inset by the
/// radius at both ends, and each corner is resolved from the visibility of
/// its two sides: both visible draws the full corner, one visible draws a
/// straight stub on that side up to the vertex, none draws nothing.
/// Zero-length pieces are dropped.
pub fn plan_border(rect: Rect, corners: &CornerModel, visibility: Sides) -> BorderPlan {
    if visibility.is_none() {
        return BorderPlan::None;
    }
    if visibility.is_all() {
        return BorderPlan::Outline(build_outline(rect, corners));
    }

    let radius = corners.radius_f32();
    let frames = Corner::ALL.map(|corner| CornerFrame::new(rect, corner, radius));
    let mut out = Vec::with_capacity(8);

    // Edge i runs between corner i and corner i + 1 (top, right, bottom, left).
    for i in 0..4 {
        let from = frames[i];
        let to = frames[(i + 1) % 4];
        let side = to.corner.leading_side();

        if visibility.contains(side) {
            out.push((BorderPart::Edge(side), Segment::line(from.trailing, to.leading)));
        }

        let part = BorderPart::Corner(to.corner);
        match corner_rule(to.corner, visibility) {
            CornerRule::Nothing => {}
            CornerRule::StubLeading => out.push((part, to.leading_stub())),
            CornerRule::StubTrailing => out.push((part, to.trailing_stub())),
            CornerRule::Full => {
                let shape = corners.effective(to.corner);
                out.extend(to.treatment(shape).into_iter().map(|seg| (part, seg)));
            }
        }
    }

    out.retain(|(_, seg)| !seg.is_degenerate());
    BorderPlan::Segments(out)
}
