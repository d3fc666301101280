use bezel_engine::border::{draw_border, draw_embossed_text, fill_background};
use bezel_engine::coords::{Rect, Vec2};
use bezel_engine::paint::{Color, KnownColor, Paint, Stroke};
use bezel_engine::scene::{DrawList, SurfaceError};
use bezel_engine::style::{ColorPair, ItemState, Theme};

/// Gap between item cells.
const GAP: f32 = 8.0;

/// Host colors used where the theme leaves a color unset.
fn or_host(color: Color, host: KnownColor) -> Color {
    if color.is_unset() { Color::Known(host) } else { color }
}

fn host_pair(pair: &ColorPair) -> ColorPair {
    ColorPair {
        back_color1: or_host(pair.back_color1, KnownColor::CONTROL),
        back_color2: or_host(pair.back_color2, KnownColor::CONTROL),
        gradient: pair.gradient,
    }
}

/// Cell of `state` in a single column of `cell`-sized items.
pub fn cell_rect(index: usize, cell: Vec2) -> Rect {
    Rect::new(GAP, GAP + index as f32 * (cell.y + GAP), cell.x, cell.y)
}

/// Renders one item per state into `list`, top to bottom.
pub fn render_states(list: &mut DrawList, theme: &Theme, cell: Vec2) -> Result<(), SurfaceError> {
    let border = &theme.border;
    let item = &theme.item;

    for (index, state) in ItemState::ALL.into_iter().enumerate() {
        let rect = cell_rect(index, cell);
        list.set_layer_offset(index as i32 * 100);

        let pair = host_pair(item.back_style(state));
        fill_background(list, rect, &pair.paint(rect), &border.corners, None)?;

        let border_color = or_host(item.border_color(state), KnownColor::CONTROL_DARK);
        let stroke = Stroke::new(border.line_style, Paint::solid(border_color));
        draw_border(list, rect, &border.corners, border.visibility, &stroke, None)?;

        let fore = match state {
            ItemState::Disabled => or_host(item.fore_color(state), KnownColor::GRAY_TEXT),
            _ => or_host(item.fore_color(state), KnownColor::CONTROL_TEXT),
        };
        draw_embossed_text(list, rect, state.name(), &item.text, fore)?;

        log::debug!("{:<14} {:?}", state.name(), rect);
    }

    list.set_layer_offset(0);
    Ok(())
}
