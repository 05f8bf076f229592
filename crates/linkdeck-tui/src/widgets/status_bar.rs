//! Bottom status bar
//!
//! One row: context badge and current route on the left, the most recent
//! status line in the middle, key hints on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use linkdeck_app::state::AppState;

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mut left_spans = vec![
            Span::styled(
                format!(" {} ", self.state.nav.context.label()),
                styles::focused_selected(),
            ),
            Span::styled(
                format!(" {} ", self.state.current_route),
                styles::text_muted(),
            ),
        ];
        if let Some(entry) = self.state.last_status() {
            left_spans.push(Span::styled("│ ", styles::text_muted()));
            left_spans.push(Span::styled(
                entry.message.clone(),
                styles::status_level(entry.level),
            ));
        }
        let left = Line::from(left_spans);

        let hints = Line::from(vec![
            Span::styled("[1-5]", styles::keybinding()),
            Span::styled(" sections ", styles::text_muted()),
            Span::styled("[a]", styles::keybinding()),
            Span::styled(" studio ", styles::text_muted()),
            Span::styled("[w]", styles::keybinding()),
            Span::styled(" wallet ", styles::text_muted()),
            Span::styled("[q]", styles::keybinding()),
            Span::styled(" quit ", styles::text_muted()),
        ]);

        let left_w = left.width() as u16;
        let hints_w = hints.width() as u16;

        buf.set_line(area.x, area.y, &left, area.width);
        if left_w + hints_w < area.width {
            buf.set_line(area.x + area.width - hints_w, area.y, &hints, hints_w);
        }
    }
}
