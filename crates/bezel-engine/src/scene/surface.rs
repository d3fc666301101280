use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::coords::Rect;
use crate::geometry::{ClosedPath, Segment};
use crate::paint::{Paint, Stroke};

use super::shapes::text::TextRun;

/// Handle to a pen held by a [`Surface`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PenId(pub u32);

/// Failure reported by a surface. Propagated unchanged by the renderers.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceError {
    /// No pen could be created, or the handle is no longer live.
    PenUnavailable,
    /// The fill source could not be created.
    FillUnavailable,
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::PenUnavailable => f.write_str("surface could not provide a pen"),
            SurfaceError::FillUnavailable => f.write_str("surface could not provide a fill"),
        }
    }
}

impl std::error::Error for SurfaceError {}

/// The render surface the border and fill routines draw onto.
///
/// Coordinates are surface units, top-left origin, +Y down. Pens are
/// acquired and released explicitly; prefer [`ScopedPen`], which releases on
/// drop. Exclusion regions nest; everything drawn while one is pushed must
/// leave the excluded area untouched.
pub trait Surface {
    fn acquire_pen(&mut self, stroke: &Stroke) -> Result<PenId, SurfaceError>;
    fn release_pen(&mut self, pen: PenId);

    fn stroke_path(&mut self, pen: PenId, path: &ClosedPath) -> Result<(), SurfaceError>;
    fn stroke_segment(&mut self, pen: PenId, segment: &Segment) -> Result<(), SurfaceError>;

    fn fill_path(&mut self, paint: &Paint, path: &ClosedPath) -> Result<(), SurfaceError>;
    fn fill_rect(&mut self, paint: &Paint, rect: Rect) -> Result<(), SurfaceError>;

    fn draw_text(&mut self, run: &TextRun<'_>) -> Result<(), SurfaceError>;

    fn push_exclusion(&mut self, rect: Rect);
    fn pop_exclusion(&mut self);
}

/// A pen that is released when dropped, on success and error paths alike.
pub struct ScopedPen<'s, S: Surface + ?Sized> {
    surface: &'s mut S,
    id: PenId,
}

impl<'s, S: Surface + ?Sized> ScopedPen<'s, S> {
    pub fn acquire(surface: &'s mut S, stroke: &Stroke) -> Result<Self, SurfaceError> {
        let id = surface.acquire_pen(stroke)?;
        Ok(Self { surface, id })
    }

    #[inline]
    pub fn id(&self) -> PenId {
        self.id
    }

    #[inline]
    pub fn stroke_path(&mut self, path: &ClosedPath) -> Result<(), SurfaceError> {
        self.surface.stroke_path(self.id, path)
    }

    #[inline]
    pub fn stroke_segment(&mut self, segment: &Segment) -> Result<(), SurfaceError> {
        self.surface.stroke_segment(self.id, segment)
    }
}

impl<S: Surface + ?Sized> Drop for ScopedPen<'_, S> {
    fn drop(&mut self) {
        self.surface.release_pen(self.id);
    }
}

/// Optional exclusion region that is popped when dropped.
///
/// Derefs to the surface so drawing happens through the guard.
pub struct ScopedExclusion<'s, S: Surface + ?Sized> {
    surface: &'s mut S,
    pushed: bool,
}

impl<'s, S: Surface + ?Sized> ScopedExclusion<'s, S> {
    pub fn push(surface: &'s mut S, exclude: Option<Rect>) -> Self {
        if let Some(rect) = exclude {
            surface.push_exclusion(rect);
        }
        Self { surface, pushed: exclude.is_some() }
    }
}

impl<S: Surface + ?Sized> Deref for ScopedExclusion<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for ScopedExclusion<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for ScopedExclusion<'_, S> {
    fn drop(&mut self) {
        if self.pushed {
            self.surface.pop_exclusion();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Argb;
    use crate::scene::DrawList;

    #[test]
    fn scoped_pen_releases_on_drop() {
        let mut list = DrawList::new();
        {
            let pen = ScopedPen::acquire(&mut list, &Stroke::solid(Argb::rgb(0, 0, 0))).unwrap();
            assert_eq!(pen.id(), PenId(0));
        }
        assert_eq!(list.live_pens(), 0);
    }

    #[test]
    fn scoped_exclusion_pops_on_drop() {
        let mut list = DrawList::new();
        {
            let guard = ScopedExclusion::push(&mut list, Some(Rect::new(0.0, 0.0, 5.0, 5.0)));
            assert_eq!(guard.exclusion_depth(), 1);
        }
        assert_eq!(list.exclusion_depth(), 0);
    }

    #[test]
    fn no_exclusion_pushes_nothing() {
        let mut list = DrawList::new();
        let guard = ScopedExclusion::push(&mut list, None);
        assert_eq!(guard.exclusion_depth(), 0);
    }

    #[test]
    fn errors_display() {
        assert_eq!(SurfaceError::PenUnavailable.to_string(), "surface could not provide a pen");
    }
}
