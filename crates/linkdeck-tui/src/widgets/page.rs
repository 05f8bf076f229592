//! Section content page
//!
//! Renders the destination resolved from the current route: a summary of
//! the section plus the recent activity feed. Scrolls by whole rows via the
//! state's scroll offset.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use linkdeck_app::state::AppState;
use linkdeck_core::registry::{self, NavEntry};

use crate::theme::{palette, styles};

pub struct SectionPage<'a> {
    state: &'a AppState,
}

impl<'a> SectionPage<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn entry(&self) -> &'static NavEntry {
        registry::find_by_route(&self.state.current_route).unwrap_or_else(registry::default_entry)
    }

    fn summary_lines(entry: &NavEntry) -> &'static [&'static str] {
        match entry.id {
            "build" => &[
                "Compose your public creator page.",
                "Drag sections, pick a theme, and preview the live profile.",
                "Changes publish to your link-in-bio URL immediately.",
            ],
            "manage" => &[
                "Curate the links and content blocks on your page.",
                "Reorder, archive, and schedule links.",
                "Broken destinations are flagged automatically.",
            ],
            "payments" => &[
                "Accept crypto payments from supporters.",
                "Configure receiving addresses per chain.",
                "Payouts settle directly to your connected wallet.",
            ],
            "leads" => &[
                "Capture emails and wallet addresses from visitors.",
                "Export your audience or sync it to a CRM.",
                "Gated content unlocks drive signups.",
            ],
            "analytics" => &[
                "Traffic, clicks, and conversion for every link.",
                "Compare sections over time.",
                "See which AI Studio assets perform best.",
            ],
            _ => &[
                "Generate assets with the AI Studio toolchain.",
                "Results land in your media library, ready to attach to links.",
            ],
        }
    }

    fn content_lines(&self) -> Vec<Line<'static>> {
        let entry = self.entry();

        let mut title_spans = vec![Span::styled(
            format!("{} {}", entry.icon, entry.label),
            Style::default()
                .fg(styles::accent_color(entry.accent))
                .add_modifier(ratatui::style::Modifier::BOLD),
        )];
        if entry.is_new {
            title_spans.push(Span::styled(
                "  NEW",
                Style::default().fg(palette::STATUS_YELLOW),
            ));
        }

        let mut lines = vec![
            Line::from(title_spans),
            Line::from(Span::styled(
                self.state.current_route.clone(),
                styles::text_muted(),
            )),
            Line::default(),
        ];

        for text in Self::summary_lines(entry) {
            lines.push(Line::from(vec![
                Span::styled("• ", styles::accent()),
                Span::styled(*text, styles::text_primary()),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Recent activity",
            styles::text_secondary(),
        )));
        for entry in self.state.status.iter().rev() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", entry.timestamp.format("%H:%M:%S")),
                    styles::text_muted(),
                ),
                Span::styled(format!("[{}] ", entry.source.label()), styles::text_muted()),
                Span::styled(entry.message.clone(), styles::status_level(entry.level)),
            ]));
        }

        lines
    }
}

impl Widget for SectionPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let entry = self.entry();
        let block = styles::glass_block(false)
            .title(Span::styled(
                format!(" {} ", self.state.nav.context.label()),
                Style::default().fg(styles::accent_color(entry.accent)),
            ))
            .style(Style::default().bg(palette::CARD_BG));

        let paragraph = Paragraph::new(self.content_lines())
            .block(block)
            .scroll((self.state.scroll_offset, 0));
        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use linkdeck_app::handler::update;
    use linkdeck_app::message::Message;

    fn state_at(path: &str) -> AppState {
        let mut state = AppState::new();
        update(
            &mut state,
            Message::RouteChanged {
                path: path.to_string(),
            },
        );
        state
    }

    #[test]
    fn test_page_shows_section_label_and_route() {
        let mut term = TestTerminal::new();
        let state = state_at("/crypto-payment-setup");

        term.render_widget(SectionPage::new(&state), term.area());

        assert!(term.buffer_contains("Payments"));
        assert!(term.buffer_contains("/crypto-payment-setup"));
        assert!(term.buffer_contains("WEB3"));
    }

    #[test]
    fn test_page_shows_studio_context_for_tool_route() {
        let mut term = TestTerminal::new();
        let state = state_at("/ai-image-upscaler");

        term.render_widget(SectionPage::new(&state), term.area());

        assert!(term.buffer_contains("Image Upscaler"));
        assert!(term.buffer_contains("AI STUDIO"));
    }

    #[test]
    fn test_page_falls_back_to_default_for_unknown_route() {
        let mut term = TestTerminal::new();
        let state = state_at("/nope");

        term.render_widget(SectionPage::new(&state), term.area());
        assert!(term.buffer_contains("Build"));
    }

    #[test]
    fn test_page_shows_status_feed() {
        let mut term = TestTerminal::new();
        let mut state = state_at("/profile-builder-dashboard");
        state.status_info(linkdeck_core::types::StatusSource::App, "hello feed");

        term.render_widget(SectionPage::new(&state), term.area());
        assert!(term.buffer_contains("hello feed"));
    }

    #[test]
    fn test_scroll_offset_moves_content_out_of_view() {
        let mut term = TestTerminal::new();
        let mut state = state_at("/crypto-payment-setup");
        state.scroll_offset = 5;

        term.render_widget(SectionPage::new(&state), term.area());
        // The route line sits near the top and scrolls away
        assert!(!term.line_contains(2, "/crypto-payment-setup"));
    }
}
