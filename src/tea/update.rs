//! Update function for TEA pattern
//!
//! Every state change of the dashboard happens here.

use crate::tea::message::{DataMessage, SystemMessage, UIMessage};
use crate::tea::{Command, Message, Model};
use tokio::time::Instant;

/// Main update function: applies a message to the model and returns the
/// side effects to run
pub fn update(model: &mut Model, message: Message) -> Vec<Command> {
    match message {
        Message::System(msg) => update_system(model, msg),
        Message::UI(msg) => update_ui(model, msg),
        Message::Data(msg) => update_data(model, msg),
    }
}

/// Handle system messages
fn update_system(model: &mut Model, message: SystemMessage) -> Vec<Command> {
    match message {
        SystemMessage::Mount => {
            model.app_state.mounted = true;

            match model.orchestrator.activate() {
                Some(task) => vec![Command::task("dashboard-fetch", task)],
                None => Vec::new(),
            }
        }

        SystemMessage::Quit => {
            model.app_state.should_quit = true;
            Vec::new()
        }

        SystemMessage::Resize(width, height) => {
            model.app_state.terminal_size = (width, height);
            Vec::new()
        }

        SystemMessage::Tick => {
            model.app_state.last_tick = Instant::now();
            Vec::new()
        }
    }
}

/// Handle UI messages
fn update_ui(model: &mut Model, message: UIMessage) -> Vec<Command> {
    match message {
        UIMessage::Scroll(action) => {
            let total = model.dashboard.users().len();
            model.user_list.scroll(action, total);
        }
    }
    Vec::new()
}

/// Handle fetch results
fn update_data(model: &mut Model, message: DataMessage) -> Vec<Command> {
    match message {
        DataMessage::UsersSettled(result) => {
            model.dashboard.apply_users(result);
            model.user_list.clamp(model.dashboard.users().len());
        }
        DataMessage::DatasetsSettled(results) => {
            model.dashboard.apply_datasets(results);
        }
    }
    Vec::new()
}
