use crate::coords::{CornerModel, Rect, Sides};
use crate::geometry::build_outline;
use crate::paint::{Paint, Stroke};
use crate::scene::{ScopedExclusion, ScopedPen, Surface, SurfaceError};

use super::plan::{plan_border, BorderPlan};

/// Strokes the visible border of `rect` onto `surface`.
///
/// `rect` is clamped to at least 1x1 first. Nothing is acquired when no side
/// is visible. The pen and the optional exclusion region are released on
/// every exit path, including surface errors, which are returned unchanged.
pub fn draw_border<S: Surface + ?Sized>(
    surface: &mut S,
    rect: Rect,
    corners: &CornerModel,
    visibility: Sides,
    stroke: &Stroke,
    exclude: Option<Rect>,
) -> Result<(), SurfaceError> {
    let rect = rect.at_least_one();
    let plan = plan_border(rect, corners, visibility);
    if plan.is_none() {
        return Ok(());
    }

    let mut surface = ScopedExclusion::push(surface, exclude);
    let mut pen = ScopedPen::acquire(&mut *surface, stroke)?;

    match &plan {
        BorderPlan::None => {}
        BorderPlan::Outline(path) => pen.stroke_path(path)?,
        BorderPlan::Segments(segs) => {
            for (_, seg) in segs {
                pen.stroke_segment(seg)?;
            }
        }
    }

    log::trace!("border {:?} sides={} ink={:.1}", rect, visibility, plan.ink());
    Ok(())
}

/// Fills the interior of `rect`, respecting its corner shapes.
pub fn fill_background<S: Surface + ?Sized>(
    surface: &mut S,
    rect: Rect,
    paint: &Paint,
    corners: &CornerModel,
    exclude: Option<Rect>,
) -> Result<(), SurfaceError> {
    let rect = rect.at_least_one();
    let outline = build_outline(rect, corners);

    let mut surface = ScopedExclusion::push(surface, exclude);
    surface.fill_path(paint, &outline)?;

    log::trace!("background {:?} segments={}", rect, outline.segments().len());
    Ok(())
}
