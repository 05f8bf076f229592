//! Navigation bar widget
//!
//! Single-row header: brand, the five Web3 section tabs, the AI Studio
//! trigger, and the wallet pill right-aligned. Hit-testing reuses the same
//! segment builder as rendering so click targets can never drift from what
//! is on screen.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use linkdeck_app::message::Message;
use linkdeck_app::state::AppState;
use linkdeck_core::registry::PRIMARY_ENTRIES;

use crate::theme::{palette, styles};

const BRAND: &str = " ⬡ LinkDeck ";
const TRIGGER_LABEL: &str = "✦ AI Studio";

/// Clickable segment of the nav bar, in left-to-right order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Brand,
    Tab(usize),
    StudioTrigger,
}

pub struct NavBar<'a> {
    state: &'a AppState,
}

impl<'a> NavBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

/// Left-side segments with their display text
fn left_segments(state: &AppState) -> Vec<(String, Segment)> {
    let mut segments = vec![(BRAND.to_string(), Segment::Brand)];

    for (idx, entry) in PRIMARY_ENTRIES.iter().enumerate() {
        segments.push((format!(" {} {} ", entry.icon, entry.label), Segment::Tab(idx)));
    }

    let chevron = if state.nav.menu_open { "▴" } else { "▾" };
    segments.push((
        format!(" {} {} ", TRIGGER_LABEL, chevron),
        Segment::StudioTrigger,
    ));

    segments
}

/// Wallet pill text for the right edge
fn wallet_label(state: &AppState) -> String {
    let wallet = &state.wallet;
    if wallet.connecting {
        " ⟳ Connecting… ".to_string()
    } else if wallet.connected {
        format!(" ⬡ {} · {} ", wallet.short_address(), wallet.balance)
    } else if wallet.remembered {
        " ⬡ Reconnect Wallet ".to_string()
    } else {
        " ⬡ Connect Wallet ".to_string()
    }
}

/// Map a click to a message. `area` is the full nav bar rect including
/// borders, as produced by the screen layout.
pub fn hit_test(state: &AppState, area: Rect, column: u16, row: u16) -> Option<Message> {
    let inner = styles::glass_block(false).inner(area);
    if inner.height == 0 || row != inner.y {
        return None;
    }

    // Wallet pill is right-aligned
    let wallet = wallet_label(state);
    let wallet_w = wallet.width() as u16;
    let wallet_x = inner.x + inner.width.saturating_sub(wallet_w);
    if column >= wallet_x && column < inner.x + inner.width {
        return Some(if state.wallet.connected {
            Message::WalletDisconnectRequested
        } else {
            Message::WalletConnectRequested
        });
    }

    let mut x = inner.x;
    for (text, segment) in left_segments(state) {
        let w = text.width() as u16;
        let end = x.saturating_add(w);
        if column >= x && column < end {
            return match segment {
                Segment::Brand => None,
                Segment::Tab(idx) => Some(Message::PrimaryTabClicked {
                    tab_id: PRIMARY_ENTRIES[idx].id.to_string(),
                }),
                Segment::StudioTrigger => Some(Message::StudioMenuToggled),
            };
        }
        x = end;
    }

    None
}

/// Screen rect of the studio trigger segment, used to anchor the menu.
pub fn trigger_rect(state: &AppState, area: Rect) -> Rect {
    let inner = styles::glass_block(false).inner(area);
    let mut x = inner.x;
    for (text, segment) in left_segments(state) {
        let w = text.width() as u16;
        if segment == Segment::StudioTrigger {
            return Rect::new(x, inner.y, w, 1);
        }
        x = x.saturating_add(w);
    }
    Rect::new(inner.x, inner.y, 0, 1)
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Scrolled content promotes the bar to its elevated look
        let block = styles::glass_block(self.state.is_scrolled)
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut x = inner.x;
        for (text, segment) in left_segments(self.state) {
            let w = text.width() as u16;
            if x >= inner.x + inner.width {
                break;
            }

            let style = match segment {
                Segment::Brand => styles::accent_bold(),
                Segment::Tab(idx) => {
                    let entry = &PRIMARY_ENTRIES[idx];
                    let active = self.state.nav.context
                        == linkdeck_core::types::NavContext::Primary
                        && self.state.nav.active_tab == entry.id
                        && !self.state.nav.menu_open;
                    if active {
                        styles::focused_selected()
                    } else {
                        Style::default().fg(styles::accent_color(entry.accent))
                    }
                }
                Segment::StudioTrigger => {
                    if self.state.nav.studio_highlighted() {
                        styles::focused_selected()
                    } else {
                        styles::text_secondary()
                    }
                }
            };

            let line = Line::from(Span::styled(text, style));
            let remaining = (inner.x + inner.width).saturating_sub(x);
            buf.set_line(x, inner.y, &line, remaining.min(w));
            x = x.saturating_add(w);
        }

        // Wallet pill, right-aligned; skipped when it would collide with tabs
        let wallet = wallet_label(self.state);
        let wallet_w = wallet.width() as u16;
        let wallet_x = inner.x + inner.width.saturating_sub(wallet_w);
        if wallet_x > x {
            let style = if self.state.wallet.connected {
                Style::default().fg(palette::STATUS_GREEN)
            } else {
                styles::text_secondary()
            };
            let line = Line::from(Span::styled(wallet, style));
            buf.set_line(wallet_x, inner.y, &line, wallet_w);
        }
    }
}
