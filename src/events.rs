use crate::tea::message::{ScrollAction, SystemMessage, UIMessage};
use crate::tea::Message;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translates terminal input into dashboard messages
#[derive(Debug, Default, Clone, Copy)]
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Map a terminal event to a message, if it means anything to the dashboard
    pub fn handle_event(&self, event: Event) -> Option<Message> {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Resize(width, height) => Some(SystemMessage::Resize(width, height).into()),
            _ => None,
        }
    }

    /// Map a key press to a message
    pub fn handle_key_event(&self, key: KeyEvent) -> Option<Message> {
        // Windows reports releases as well as presses
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(SystemMessage::Quit.into()),
                _ => None,
            };
        }

        let action = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Some(SystemMessage::Quit.into()),
            KeyCode::Up | KeyCode::Char('k') => ScrollAction::Up,
            KeyCode::Down | KeyCode::Char('j') => ScrollAction::Down,
            KeyCode::PageUp => ScrollAction::PageUp,
            KeyCode::PageDown | KeyCode::Char(' ') => ScrollAction::PageDown,
            KeyCode::Home | KeyCode::Char('g') => ScrollAction::Top,
            KeyCode::End | KeyCode::Char('G') => ScrollAction::Bottom,
            _ => return None,
        };

        Some(UIMessage::Scroll(action).into())
    }
}
