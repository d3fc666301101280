use crate::coords::{CornerModel, Rect};
use crate::geometry::build_outline;
use crate::paint::{Color, Stroke};
use crate::scene::{ScopedPen, Surface, SurfaceError};
use crate::style::ColorPair;

/// Fills `rect` with the pair's two-color gradient at the pair's angle.
///
/// Returns the rectangle actually painted (clamped to at least 1x1).
pub fn paint_gradient<S: Surface + ?Sized>(
    surface: &mut S,
    rect: Rect,
    pair: &ColorPair,
) -> Result<Rect, SurfaceError> {
    let rect = rect.at_least_one();
    surface.fill_rect(&pair.paint(rect), rect)?;
    Ok(rect)
}

/// Thin square frame just inside `rect`: the right and bottom lines sit one
/// unit in from the rect's far edges.
pub fn paint_frame<S: Surface + ?Sized>(surface: &mut S, rect: Rect, color: Color) -> Result<(), SurfaceError> {
    let inner = Rect::new(rect.x(), rect.y(), rect.width() - 1.0, rect.height() - 1.0).at_least_one();
    let outline = build_outline(inner, &CornerModel::default());
    let mut pen = ScopedPen::acquire(surface, &Stroke::solid(color.to_argb()))?;
    pen.stroke_path(&outline)
}
