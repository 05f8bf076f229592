//! Shared overlay utilities.
//!
//! Helpers for dimming the background, clearing cells, and drawing a
//! drop shadow under the studio menu.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Dim all cells in the given area by overriding their styles.
///
/// Simulates the semi-transparent dark backdrop shown behind the open
/// studio menu.
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim_style = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);

    let y_end = area.y.saturating_add(area.height);
    let x_end = area.x.saturating_add(area.width);
    for y in area.y..y_end {
        for x in area.x..x_end {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// Render a 1-cell shadow offset to the right and bottom of an overlay rect.
pub fn render_shadow(buf: &mut Buffer, overlay_rect: Rect) {
    let shadow_style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);

    let right_x = overlay_rect.x.saturating_add(overlay_rect.width);
    for y in overlay_rect.y.saturating_add(1)
        ..overlay_rect
            .y
            .saturating_add(overlay_rect.height)
            .saturating_add(1)
    {
        if let Some(cell) = buf.cell_mut((right_x, y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }

    let bottom_y = overlay_rect.y.saturating_add(overlay_rect.height);
    for x in overlay_rect.x.saturating_add(1)
        ..overlay_rect
            .x
            .saturating_add(overlay_rect.width)
            .saturating_add(1)
    {
        if let Some(cell) = buf.cell_mut((x, bottom_y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
}

/// Clear a rect and prepare it for overlay content.
pub fn clear_area(buf: &mut Buffer, area: Rect) {
    Clear.render(area, buf);
}
