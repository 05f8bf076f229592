//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use linkdeck_app::message::Message;
use linkdeck_app::InputKey;
use linkdeck_core::prelude::*;
use std::time::Duration;

/// An event produced by one poll pass.
///
/// Pointer clicks are surfaced as raw positions: only the event loop knows
/// the current layout, so hit-testing happens there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollEvent {
    Message(Message),
    Click { column: u16, row: u16 },
}

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None, // Unsupported keys ignored
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<PollEvent>> {
    // Poll with 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        let event = event::read()?;

        match event {
            Event::Key(key) => {
                if key.kind == event::KeyEventKind::Press {
                    if let Some(input_key) = key_event_to_input(key) {
                        Ok(Some(PollEvent::Message(Message::Key(input_key))))
                    } else {
                        Ok(None)
                    }
                } else {
                    Ok(None)
                }
            }
            Event::Mouse(mouse) => Ok(match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => Some(PollEvent::Click {
                    column: mouse.column,
                    row: mouse.row,
                }),
                MouseEventKind::ScrollUp => Some(PollEvent::Message(Message::ContentScrollUp)),
                MouseEventKind::ScrollDown => Some(PollEvent::Message(Message::ContentScrollDown)),
                _ => None,
            }),
            _ => Ok(None),
        }
    } else {
        // Generate tick on timeout so debounced observers still settle
        Ok(Some(PollEvent::Message(Message::Tick)))
    }
}
