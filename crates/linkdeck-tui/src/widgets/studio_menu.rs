//! AI Studio dropdown menu overlay
//!
//! Transient overlay anchored under the studio trigger. The menu never
//! commits the secondary context itself: it only emits entry-click
//! messages, and the reducer decides what they mean.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use linkdeck_app::message::Message;
use linkdeck_app::state::AppState;
use linkdeck_core::registry::SECONDARY_ENTRIES;

use crate::theme::{palette, styles};

use super::overlay;

const MENU_TITLE: &str = " AI STUDIO ";
const NEW_BADGE: &str = " NEW";

/// Screen rect of the open menu, anchored under the trigger and clamped to
/// the frame.
pub fn menu_rect(frame_area: Rect, anchor: Rect) -> Rect {
    let width = menu_width();
    let height = SECONDARY_ENTRIES.len() as u16 + 2; // entries + borders

    // Prefer left-aligning with the trigger; pull back if it would overflow
    let max_x = frame_area.right().saturating_sub(width + 1);
    let x = anchor.x.min(max_x).max(frame_area.x);
    let y = anchor.y.saturating_add(1);

    let w = width.min(frame_area.width);
    let h = height.min(frame_area.height.saturating_sub(y - frame_area.y));
    Rect::new(x, y, w, h)
}

fn menu_width() -> u16 {
    let widest = SECONDARY_ENTRIES
        .iter()
        .map(|e| entry_text(e.icon, e.label).width() + if e.is_new { NEW_BADGE.width() } else { 0 })
        .max()
        .unwrap_or(0);
    (widest as u16).max(MENU_TITLE.width() as u16) + 2 // borders
}

fn entry_text(icon: &str, label: &str) -> String {
    format!(" {} {} ", icon, label)
}

/// Map a click inside the menu rect to an entry-click message.
pub fn hit_test(rect: Rect, column: u16, row: u16) -> Option<Message> {
    if rect.width < 3 || rect.height < 3 {
        return None;
    }
    let inner = Rect::new(
        rect.x + 1,
        rect.y + 1,
        rect.width - 2,
        rect.height - 2,
    );
    if column < inner.x || column >= inner.right() || row < inner.y || row >= inner.bottom() {
        return None;
    }

    let idx = (row - inner.y) as usize;
    SECONDARY_ENTRIES.get(idx).map(|entry| Message::StudioEntryClicked {
        route: entry.route.to_string(),
    })
}

pub struct StudioMenu<'a> {
    state: &'a AppState,
    anchor: Rect,
}

impl<'a> StudioMenu<'a> {
    pub fn new(state: &'a AppState, anchor: Rect) -> Self {
        Self { state, anchor }
    }
}

impl Widget for StudioMenu<'_> {
    /// `area` is the full frame; the menu positions itself from its anchor.
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.state.nav.menu_open {
            return;
        }

        let rect = menu_rect(area, self.anchor);
        if rect.width < 3 || rect.height < 3 {
            return;
        }

        overlay::render_shadow(buf, rect);
        overlay::clear_area(buf, rect);

        let block = styles::menu_block(MENU_TITLE);
        let inner = block.inner(rect);
        block.render(rect, buf);

        for (idx, entry) in SECONDARY_ENTRIES.iter().enumerate() {
            let y = inner.y + idx as u16;
            if y >= inner.bottom() {
                break;
            }

            let selected = idx == self.state.nav.menu_cursor;
            let base = if selected {
                styles::focused_selected()
            } else {
                Style::default()
                    .fg(styles::accent_color(entry.accent))
                    .bg(palette::POPUP_BG)
            };

            let mut spans = vec![Span::styled(entry_text(entry.icon, entry.label), base)];
            if entry.is_new {
                let badge = if selected {
                    base
                } else {
                    Style::default()
                        .fg(palette::STATUS_YELLOW)
                        .bg(palette::POPUP_BG)
                        .add_modifier(Modifier::BOLD)
                };
                spans.push(Span::styled(NEW_BADGE, badge));
            }

            // Pad the selected row so the highlight spans the full width
            let line = Line::from(spans);
            let line_w = line.width() as u16;
            buf.set_line(inner.x, y, &line, inner.width);
            if selected && line_w < inner.width {
                let pad = " ".repeat((inner.width - line_w) as usize);
                buf.set_line(inner.x + line_w, y, &Line::from(Span::styled(pad, base)), inner.width - line_w);
            }
        }
    }
}
