use crate::scene::shapes::fill::FillCmd;
use crate::scene::shapes::stroke::StrokeCmd;
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a payload module under `scene::shapes::*`
/// - add a variant here
/// - record it from the `Surface` impl on `DrawList`
/// - handle it in `render::tessellate`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Fill(FillCmd),
    Stroke(StrokeCmd),
    Text(TextCmd),
}

impl DrawCmd {
    #[inline]
    pub fn as_stroke(&self) -> Option<&StrokeCmd> {
        match self {
            DrawCmd::Stroke(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_fill(&self) -> Option<&FillCmd> {
        match self {
            DrawCmd::Fill(f) => Some(f),
            _ => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&TextCmd> {
        match self {
            DrawCmd::Text(t) => Some(t),
            _ => None,
        }
    }
}
