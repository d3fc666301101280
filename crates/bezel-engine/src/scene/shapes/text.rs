use crate::coords::Rect;
use crate::paint::Argb;
use crate::style::{AppearanceText, FontSpec, TextAlign, Trimming};

/// Borrowed text request handed to [`Surface::draw_text`](crate::scene::Surface::draw_text).
#[derive(Debug, Copy, Clone)]
pub struct TextRun<'a> {
    pub text: &'a str,
    /// Layout box the text is aligned and trimmed within.
    pub rect: Rect,
    pub style: &'a AppearanceText,
    pub color: Argb,
}

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub rect: Rect,
    pub font: FontSpec,
    pub alignment: TextAlign,
    pub line_alignment: TextAlign,
    pub trimming: Trimming,
    pub color: Argb,
}

impl From<&TextRun<'_>> for TextCmd {
    fn from(run: &TextRun<'_>) -> Self {
        Self {
            text: run.text.to_string(),
            rect: run.rect,
            font: run.style.font.clone(),
            alignment: run.style.alignment,
            line_alignment: run.style.line_alignment,
            trimming: run.style.trimming,
            color: run.color,
        }
    }
}
