use crate::border::draw_border;
use crate::coords::{Corner, CornerModel, CornerType, Rect, Sides};
use crate::paint::{Color, DashStyle, Paint, Stroke};
use crate::scene::{Surface, SurfaceError};

use super::action::{update, AppearanceAction};

/// Border look of an item: dash style, visible sides and corner shapes.
///
/// Every change here alters stroke geometry, so all setters report
/// [`AppearanceAction::Recreate`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct AppearanceBorder {
    pub line_style: DashStyle,
    pub visibility: Sides,
    pub corners: CornerModel,
}

impl Default for AppearanceBorder {
    fn default() -> Self {
        Self { line_style: DashStyle::Solid, visibility: Sides::ALL, corners: CornerModel::default() }
    }
}

impl AppearanceBorder {
    pub fn set_line_style(&mut self, style: DashStyle) -> Option<AppearanceAction> {
        update(&mut self.line_style, style, AppearanceAction::Recreate)
    }

    pub fn set_visibility(&mut self, visibility: Sides) -> Option<AppearanceAction> {
        update(&mut self.visibility, visibility, AppearanceAction::Recreate)
    }

    pub fn set_corners(&mut self, corners: CornerModel) -> Option<AppearanceAction> {
        update(&mut self.corners, corners, AppearanceAction::Recreate)
    }

    pub fn set_corner(&mut self, corner: Corner, shape: CornerType) -> Option<AppearanceAction> {
        self.set_corners(self.corners.with(corner, shape))
    }

    pub fn set_radius(&mut self, radius: u32) -> Option<AppearanceAction> {
        self.set_corners(CornerModel { radius, ..self.corners })
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Solid line, all sides, square corners.
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    #[inline]
    pub fn default_changed(&self) -> bool {
        !self.is_empty()
    }

    /// One-unit stroke in `color` with this border's dash style.
    #[inline]
    pub fn stroke(&self, color: Color) -> Stroke {
        Stroke::new(self.line_style, Paint::solid(color))
    }

    /// Draws this border around `rect` in `color`.
    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        rect: Rect,
        color: Color,
        exclude: Option<Rect>,
    ) -> Result<(), SurfaceError> {
        draw_border(surface, rect, &self.corners, self.visibility, &self.stroke(color), exclude)
    }
}
