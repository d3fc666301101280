use crate::coords::{Corner, CornerModel, CornerType, Rect};

use super::{ClosedPath, CornerFrame, Segment};

/// Corner frames as the outline sees them: square corners sit on the
/// vertex, shaped corners are inset by the shared radius.
pub(crate) fn outline_frames(rect: Rect, corners: &CornerModel) -> [(CornerType, CornerFrame); 4] {
    let radius = corners.radius_f32();
    Corner::ALL.map(|corner| {
        let shape = corners.effective(corner);
        let inset = if shape == CornerType::Square { 0.0 } else { radius };
        (shape, CornerFrame::new(rect, corner, inset))
    })
}

/// Builds the closed outline of `rect` with the given corner shapes.
///
/// The walk runs clockwise from the top edge: each edge is a line up to the
/// next corner's leading point, followed by that corner's treatment when it
/// is not square. Radius is not validated; radii above half the shorter
/// side produce overlapping but finite geometry.
pub fn build_outline(rect: Rect, corners: &CornerModel) -> ClosedPath {
    let frames = outline_frames(rect, corners);
    let mut segments = Vec::with_capacity(8);

    for i in 0..4 {
        let (_, from) = frames[i];
        let (shape, to) = frames[(i + 1) % 4];
        segments.push(Segment::line(from.trailing, to.leading));
        if shape != CornerType::Square {
            segments.extend(to.treatment(shape));
        }
    }

    ClosedPath::from_segments(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;

    const TOL: f32 = 1e-3;

    fn models(radius: u32) -> impl Iterator<Item = CornerModel> {
        // Every combination of the three shapes over the four corners.
        (0..81u32).map(move |mut n| {
            let mut model = CornerModel { radius, ..CornerModel::default() };
            for corner in Corner::ALL {
                model.set(corner, CornerType::ALL[(n % 3) as usize]);
                n /= 3;
            }
            model
        })
    }

    // ── closure ───────────────────────────────────────────────────────────

    #[test]
    fn closed_for_every_shape_combination() {
        for rect in [Rect::new(0.0, 0.0, 100.0, 50.0), Rect::new(-5.5, 3.25, 1.0, 1.0), Rect::new(7.0, 9.0, 20.0, 20.0)] {
            let max_r = (rect.width().min(rect.height()) / 2.0) as u32;
            for radius in [0, max_r / 2, max_r] {
                for model in models(radius) {
                    let path = build_outline(rect, &model);
                    assert!(path.is_closed(TOL), "{rect:?} {model:?}");
                }
            }
        }
    }

    #[test]
    fn starts_on_top_edge_and_runs_clockwise() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let path = build_outline(rect, &CornerModel::uniform(CornerType::Sliced, 5));
        let first = path.segments()[0];
        assert_eq!(first, Segment::line(Vec2::new(5.0, 0.0), Vec2::new(95.0, 0.0)));
        // Second leg heads down the right side.
        assert_eq!(path.segments()[2].start(), Vec2::new(100.0, 5.0));
    }

    // ── degenerate radius ─────────────────────────────────────────────────

    #[test]
    fn zero_radius_is_a_plain_rectangle() {
        let rect = Rect::new(2.0, 3.0, 40.0, 20.0);
        let expected = [
            Segment::line(Vec2::new(2.0, 3.0), Vec2::new(42.0, 3.0)),
            Segment::line(Vec2::new(42.0, 3.0), Vec2::new(42.0, 23.0)),
            Segment::line(Vec2::new(42.0, 23.0), Vec2::new(2.0, 23.0)),
            Segment::line(Vec2::new(2.0, 23.0), Vec2::new(2.0, 3.0)),
        ];
        for model in models(0) {
            assert_eq!(build_outline(rect, &model).segments(), &expected, "{model:?}");
        }
    }

    // ── shapes ────────────────────────────────────────────────────────────

    #[test]
    fn single_round_corner() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let model = CornerModel::default().with(Corner::TopLeft, CornerType::Round);
        let model = CornerModel { radius: 10, ..model };
        let path = build_outline(rect, &model);

        assert_eq!(path.arc_count(), 1);
        assert_eq!(path.segments().len(), 5);
        let Some(&Segment::Arc { center, radius, sweep_deg, .. }) = path.segments().iter().find(|s| s.is_arc()) else {
            panic!("missing arc");
        };
        assert_eq!(center, Vec2::new(10.0, 10.0));
        assert_eq!(radius, 10.0);
        assert_eq!(sweep_deg, 90.0);

        // The other three corners are exact vertices.
        let ends: Vec<Vec2> = path.segments().iter().map(Segment::end).collect();
        for vertex in [Vec2::new(100.0, 0.0), Vec2::new(100.0, 50.0), Vec2::new(0.0, 50.0)] {
            assert!(ends.contains(&vertex), "{vertex:?}");
        }
    }

    #[test]
    fn mixed_round_and_sliced() {
        let rect = Rect::new(0.0, 0.0, 60.0, 40.0);
        let model = CornerModel::new(CornerType::Round, CornerType::Sliced, CornerType::Square, CornerType::Round, 8);
        let path = build_outline(rect, &model);
        assert_eq!(path.arc_count(), 2);
        // 4 edges + 2 arcs + 1 chamfer
        assert_eq!(path.segments().len(), 7);
        assert!(path.segments().contains(&Segment::line(Vec2::new(52.0, 0.0), Vec2::new(60.0, 8.0))));
    }

    #[test]
    fn rounding_shortens_the_perimeter() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let square = build_outline(rect, &CornerModel::default()).length();
        let round = build_outline(rect, &CornerModel::uniform(CornerType::Round, 10)).length();
        let sliced = build_outline(rect, &CornerModel::uniform(CornerType::Sliced, 10)).length();
        assert_eq!(square, 300.0);
        assert!(round < square);
        assert!(sliced < round);
    }

    #[test]
    fn oversized_radius_does_not_panic() {
        let path = build_outline(Rect::new(0.0, 0.0, 10.0, 10.0), &CornerModel::uniform(CornerType::Round, 50));
        assert!(path.segments().iter().all(|s| s.start().is_finite() && s.end().is_finite()));
    }
}
