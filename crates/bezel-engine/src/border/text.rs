use crate::coords::{Rect, Vec2};
use crate::paint::{Color, KnownColor};
use crate::scene::{Surface, SurfaceError, TextRun};
use crate::style::AppearanceText;

/// Units the highlight copy is lightened toward white.
const HIGHLIGHT_STEP: i32 = 100;

/// Draws `text` with an embossed look: a lightened copy offset by the
/// appearance's shift, then the text itself in `color` on top.
///
/// Does nothing for an empty `rect`.
pub fn draw_embossed_text<S: Surface + ?Sized>(
    surface: &mut S,
    rect: Rect,
    text: &str,
    appearance: &AppearanceText,
    color: Color,
) -> Result<(), SurfaceError> {
    if rect.is_empty() {
        return Ok(());
    }

    let highlight = color.step_toward(Color::Known(KnownColor::WHITE), HIGHLIGHT_STEP, false);
    let shift = Vec2::new(appearance.x_shift as f32, appearance.y_shift as f32);

    surface.draw_text(&TextRun {
        text,
        rect: rect.translated(shift),
        style: appearance,
        color: highlight.to_argb(),
    })?;
    surface.draw_text(&TextRun { text, rect, style: appearance, color: color.to_argb() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Argb;
    use crate::scene::DrawList;
    use crate::style::TextAlign;

    #[test]
    fn draws_highlight_then_text() {
        let mut list = DrawList::new();
        let mut app = AppearanceText::default();
        app.set_x_shift(1);
        app.set_y_shift(2);
        app.set_alignment(TextAlign::Center);
        let rect = Rect::new(10.0, 10.0, 50.0, 20.0);

        draw_embossed_text(&mut list, rect, "Open", &app, Color::Known(KnownColor::BLACK)).unwrap();

        let runs: Vec<_> = list.texts().collect();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].rect, Rect::new(11.0, 12.0, 50.0, 20.0));
        assert_eq!(runs[0].color, Argb::rgb(100, 100, 100));
        assert_eq!(runs[1].rect, rect);
        assert_eq!(runs[1].color, Argb::rgb(0, 0, 0));
        assert!(runs.iter().all(|r| r.text == "Open" && r.alignment == TextAlign::Center));
    }

    #[test]
    fn zero_shift_overlaps() {
        let mut list = DrawList::new();
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        draw_embossed_text(&mut list, rect, "x", &AppearanceText::default(), Color::rgb(250, 250, 250)).unwrap();
        let runs: Vec<_> = list.texts().collect();
        assert_eq!(runs[0].rect, runs[1].rect);
        assert_eq!(runs[0].color, Argb::rgb(255, 255, 255));
    }

    #[test]
    fn empty_rect_draws_nothing() {
        let mut list = DrawList::new();
        draw_embossed_text(&mut list, Rect::new(0.0, 0.0, 0.0, 10.0), "x", &AppearanceText::default(), Color::Unset)
            .unwrap();
        assert!(list.is_empty());
    }
}
