//! Central message type for the dashboard following TEA pattern
//!
//! Key presses, terminal events and fetch results all flow through here.

use crate::api::UserProfile;
use crate::error::FetchResult;
use serde_json::Value;

/// Main application message type
#[derive(Debug, Clone)]
pub enum Message {
    /// Lifecycle messages
    System(SystemMessage),

    /// UI interaction messages
    UI(UIMessage),

    /// Results of the fetch round
    Data(DataMessage),
}

/// System-level messages for application lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemMessage {
    /// The dashboard view has been mounted; starts the fetch round
    Mount,

    /// Application should quit
    Quit,

    /// Terminal was resized
    Resize(u16, u16),

    /// Tick for periodic redraws
    Tick,
}

/// UI-related messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UIMessage {
    Scroll(ScrollAction),
}

/// Movements of the user list selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAction {
    Up,
    Down,
    PageUp,
    PageDown,
    Top,
    Bottom,
}

/// Fetch round results
#[derive(Debug, Clone)]
pub enum DataMessage {
    /// The users request settled
    UsersSettled(FetchResult<Vec<UserProfile>>),

    /// Every auxiliary request settled; one result per dataset in table order
    DatasetsSettled(Vec<FetchResult<Value>>),
}

impl From<SystemMessage> for Message {
    fn from(msg: SystemMessage) -> Self {
        Message::System(msg)
    }
}

impl From<UIMessage> for Message {
    fn from(msg: UIMessage) -> Self {
        Message::UI(msg)
    }
}

impl From<DataMessage> for Message {
    fn from(msg: DataMessage) -> Self {
        Message::Data(msg)
    }
}
