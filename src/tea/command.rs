//! Command system for TEA pattern
//!
//! Commands represent side effects requested by `update`. They are run by the
//! [`CommandExecutor`] and may feed new messages back into the loop.

use crate::tea::Message;
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Command that can be executed to perform side effects
#[derive(Debug)]
pub enum Command {
    /// No operation - used when no side effects are needed
    None,

    /// Send a message back to the update loop
    SendMessage(Message),

    /// Execute an async task
    Task(TaskCommand),

    /// Batch multiple commands
    Batch(Vec<Command>),
}

/// Async task command
#[derive(Debug)]
pub struct TaskCommand {
    pub id: String,
    pub name: String,
    pub task: Arc<dyn AsyncTask>,
}

/// Trait for async tasks
#[async_trait::async_trait]
pub trait AsyncTask: Send + Sync + std::fmt::Debug {
    /// Execute the task and return messages to send
    async fn execute(&self) -> Vec<Message>;
}

/// Command executor that runs commands without blocking the UI loop
#[derive(Debug, Clone)]
pub struct CommandExecutor {
    message_sender: mpsc::UnboundedSender<Message>,
}

impl CommandExecutor {
    /// Create a new command executor
    pub fn new(message_sender: mpsc::UnboundedSender<Message>) -> Self {
        Self { message_sender }
    }

    /// Execute a command.
    ///
    /// Tasks are spawned on the tokio runtime; their messages are delivered
    /// when they finish. Must be called from within a runtime.
    pub fn execute(&self, command: Command) {
        match command {
            Command::None => {}
            Command::SendMessage(message) => self.send(message),
            Command::Task(task_command) => self.spawn_task(task_command),
            Command::Batch(commands) => {
                for cmd in commands {
                    self.execute(cmd);
                }
            }
        }
    }

    fn spawn_task(&self, task_command: TaskCommand) {
        tracing::debug!("Spawning task {} ({})", task_command.name, task_command.id);

        let executor = self.clone();
        tokio::spawn(async move {
            let messages = task_command.task.execute().await;
            tracing::debug!("Task {} finished with {} messages", task_command.name, messages.len());

            for message in messages {
                executor.send(message);
            }
        });
    }

    fn send(&self, message: Message) {
        // The loop is gone once the view has shut down; late results are dropped.
        if let Err(e) = self.message_sender.send(message) {
            tracing::debug!("Dropping message, update loop has stopped: {:?}", e.0);
        }
    }
}

/// Helper functions for creating common commands
impl Command {
    /// Create a no-op command
    pub fn none() -> Self {
        Command::None
    }

    /// Create a command to send a message
    pub fn message(msg: Message) -> Self {
        Command::SendMessage(msg)
    }

    /// Create a batch of commands
    pub fn batch(commands: Vec<Command>) -> Self {
        Command::Batch(commands)
    }

    /// Create a task command
    pub fn task<T>(name: impl Into<String>, task: T) -> Self
    where
        T: AsyncTask + 'static,
    {
        Command::Task(TaskCommand {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            task: Arc::new(task),
        })
    }

    /// Whether this command (or any command in a batch) runs a task
    pub fn spawns_task(&self) -> bool {
        match self {
            Command::Task(_) => true,
            Command::Batch(commands) => commands.iter().any(Command::spawns_task),
            Command::None | Command::SendMessage(_) => false,
        }
    }
}
