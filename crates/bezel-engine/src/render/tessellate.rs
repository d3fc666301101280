use crate::coords::{Rect, Vec2, Viewport};
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawItem, DrawList, FillCmd, FillShape, StrokeCmd, StrokeShape};

use super::dash::dash_polyline;
use super::{Mesh, Vertex};

/// Flattens a recorded draw list into line and triangle lists in paint order.
///
/// Arcs are split so chords stay within `tolerance` surface units of the
/// curve. Pieces lying entirely inside an item's exclusion regions are
/// dropped. Text is counted but not tessellated.
pub fn tessellate(list: &mut DrawList, viewport: Viewport, tolerance: f32) -> Mesh {
    let mut mesh = Mesh::default();
    if !viewport.is_valid() {
        log::warn!("tessellate: invalid viewport {:?}", viewport);
        return mesh;
    }

    for item in list.iter_in_paint_order() {
        match &item.cmd {
            DrawCmd::Stroke(cmd) => stroke(&mut mesh, item, cmd, viewport, tolerance),
            DrawCmd::Fill(cmd) => fill(&mut mesh, item, cmd, viewport, tolerance),
            DrawCmd::Text(_) => mesh.skipped_text += 1,
        }
    }

    log::trace!(
        "tessellated {} lines, {} triangles, {} text runs skipped",
        mesh.lines.len() / 2,
        mesh.triangles.len() / 3,
        mesh.skipped_text
    );
    mesh
}

fn excluded(item: &DrawItem, points: &[Vec2]) -> bool {
    item.excluded.iter().any(|ex| points.iter().all(|&p| ex.contains(p)))
}

fn stroke(mesh: &mut Mesh, item: &DrawItem, cmd: &StrokeCmd, viewport: Viewport, tolerance: f32) {
    let points = match &cmd.shape {
        StrokeShape::Path(path) => {
            let mut pts = path.flatten(tolerance);
            if let Some(&first) = pts.first() {
                pts.push(first);
            }
            pts
        }
        StrokeShape::Segment(seg) => {
            let mut pts = vec![seg.start()];
            seg.flatten_into(tolerance, &mut pts);
            pts
        }
    };

    let width = cmd.stroke.width.max(1.0);
    let pattern: Vec<f32> = cmd.stroke.dash.pattern().iter().map(|&run| run * width).collect();
    for (a, b) in dash_polyline(&points, &pattern) {
        if excluded(item, &[a, b]) {
            continue;
        }
        mesh.lines.push(Vertex::at(a, &cmd.stroke.paint, viewport));
        mesh.lines.push(Vertex::at(b, &cmd.stroke.paint, viewport));
    }
}

fn fill(mesh: &mut Mesh, item: &DrawItem, cmd: &FillCmd, viewport: Viewport, tolerance: f32) {
    match &cmd.shape {
        FillShape::Rect(rect) => fill_rect(mesh, item, *rect, &cmd.paint, viewport),
        FillShape::Path(path) => {
            let pts = path.flatten(tolerance);
            if pts.len() < 3 {
                return;
            }
            // Outlines are convex for radii up to half the shorter side, so
            // a fan around the centroid covers them.
            let center = pts.iter().fold(Vec2::zero(), |acc, &p| acc + p) / pts.len() as f32;
            for i in 0..pts.len() {
                let (a, b) = (pts[i], pts[(i + 1) % pts.len()]);
                push_triangle(mesh, item, [center, a, b], &cmd.paint, viewport);
            }
        }
    }
}

fn fill_rect(mesh: &mut Mesh, item: &DrawItem, rect: Rect, paint: &Paint, viewport: Viewport) {
    let (tl, br) = (rect.min(), rect.max());
    let tr = Vec2::new(br.x, tl.y);
    let bl = Vec2::new(tl.x, br.y);
    push_triangle(mesh, item, [tl, tr, br], paint, viewport);
    push_triangle(mesh, item, [tl, br, bl], paint, viewport);
}

fn push_triangle(mesh: &mut Mesh, item: &DrawItem, tri: [Vec2; 3], paint: &Paint, viewport: Viewport) {
    if excluded(item, &tri) {
        return;
    }
    mesh.triangles.extend(tri.map(|p| Vertex::at(p, paint, viewport)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::border::{draw_border, fill_background, paint_gradient};
    use crate::coords::{CornerModel, CornerType, Sides};
    use crate::paint::{Argb, DashStyle, Stroke};
    use crate::scene::Surface;
    use crate::style::ColorPair;

    const VIEW: Viewport = Viewport::new(100.0, 100.0);

    fn ndc_eq(a: [f32; 2], b: [f32; 2]) -> bool {
        (a[0] - b[0]).abs() < 1e-4 && (a[1] - b[1]).abs() < 1e-4
    }

    #[test]
    fn outline_stroke_is_a_closed_line_list() {
        let mut list = DrawList::new();
        let corners = CornerModel::uniform(CornerType::Round, 8);
        let stroke = Stroke::solid(Argb::rgb(0, 0, 0));
        draw_border(&mut list, Rect::new(10.0, 10.0, 60.0, 40.0), &corners, Sides::ALL, &stroke, None).unwrap();

        let mesh = tessellate(&mut list, VIEW, 0.25);
        let lines = &mesh.lines;
        assert!(lines.len() >= 8 && lines.len() % 2 == 0);
        for pair in lines.chunks(2).collect::<Vec<_>>().windows(2) {
            assert!(ndc_eq(pair[0][1].pos, pair[1][0].pos));
        }
        assert!(ndc_eq(lines[lines.len() - 1].pos, lines[0].pos));
    }

    #[test]
    fn dashed_stroke_leaves_gaps() {
        let mut list = DrawList::new();
        let solid = Stroke::solid(Argb::rgb(0, 0, 0));
        let dashed = Stroke { dash: DashStyle::Dash, ..solid.clone() };
        let rect = Rect::new(0.0, 0.0, 40.0, 40.0);

        draw_border(&mut list, rect, &CornerModel::default(), Sides::TOP, &solid, None).unwrap();
        let solid_lines = tessellate(&mut list, VIEW, 0.25).lines.len();
        list.clear();
        draw_border(&mut list, rect, &CornerModel::default(), Sides::TOP, &dashed, None).unwrap();
        let dashed_lines = tessellate(&mut list, VIEW, 0.25).lines.len();

        assert_eq!(solid_lines, 2);
        assert_eq!(dashed_lines, 2 * 10);
    }

    #[test]
    fn fills_become_triangles() {
        let mut list = DrawList::new();
        let pair = ColorPair::new(Argb::rgb(0, 0, 0), Argb::rgb(255, 255, 255), 90);
        paint_gradient(&mut list, Rect::new(0.0, 0.0, 100.0, 100.0), &pair).unwrap();
        let mesh = tessellate(&mut list, VIEW, 0.25);

        assert_eq!(mesh.triangles.len(), 6);
        // Top vertices black, bottom vertices white.
        assert_eq!(mesh.triangles[0].color, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(mesh.triangles[2].color, [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn rounded_background_fans_from_center() {
        let mut list = DrawList::new();
        let paint = Paint::Solid(Argb::rgb(9, 9, 9));
        let rect = Rect::new(0.0, 0.0, 50.0, 50.0);
        fill_background(&mut list, rect, &paint, &CornerModel::uniform(CornerType::Round, 10), None).unwrap();
        let mesh = tessellate(&mut list, VIEW, 0.25);
        assert!(mesh.triangles.len() > 12);
        assert!(mesh.triangles.chunks(3).all(|t| ndc_eq(t[0].pos, VIEW.to_ndc(rect.center()))));
    }

    #[test]
    fn excluded_pieces_are_dropped() {
        let mut list = DrawList::new();
        list.push_exclusion(Rect::new(0.0, 0.0, 100.0, 100.0));
        list.fill_rect(&Paint::Solid(Argb::rgb(1, 1, 1)), Rect::new(10.0, 10.0, 5.0, 5.0)).unwrap();
        list.pop_exclusion();
        list.fill_rect(&Paint::Solid(Argb::rgb(1, 1, 1)), Rect::new(10.0, 10.0, 5.0, 5.0)).unwrap();
        assert_eq!(tessellate(&mut list, VIEW, 0.25).triangles.len(), 6);
    }

    #[test]
    fn invalid_viewport_yields_nothing() {
        let mut list = DrawList::new();
        list.fill_rect(&Paint::Solid(Argb::rgb(1, 1, 1)), Rect::new(0.0, 0.0, 5.0, 5.0)).unwrap();
        assert!(tessellate(&mut list, Viewport::new(0.0, 0.0), 0.25).is_empty());
    }
}
