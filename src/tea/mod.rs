//! The Elm Architecture (TEA) pattern for the dashboard
//!
//! State lives in a single [`Model`]. Input events and async results arrive
//! as [`Message`]s, [`update`] is the only place the model changes, and side
//! effects are returned as [`Command`]s for the [`CommandExecutor`] to run.

pub mod command;
pub mod message;
pub mod model;
pub mod update;

pub use command::{AsyncTask, Command, CommandExecutor};
pub use message::Message;
pub use model::Model;
pub use update::update;
