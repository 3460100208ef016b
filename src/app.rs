use anyhow::{anyhow, Context, Result};
use crossterm::{
    event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};

use crate::api::ApiClient;
use crate::config::DashboardConfig;
use crate::dashboard::{DatasetTable, FetchOrchestrator};
use crate::events::EventHandler;
use crate::tea::message::SystemMessage;
use crate::tea::{update, CommandExecutor, Message, Model};
use crate::theme::Theme;
use crate::ui::DashboardView;

pub struct App {
    model: Model,
    view: DashboardView,
    theme: Theme,
    event_handler: EventHandler,
    executor: CommandExecutor,
    messages: mpsc::UnboundedReceiver<Message>,
    tick_rate: Duration,
}

impl App {
    /// Build the application from configuration, with HTTP-backed datasets
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        config.validate()?;

        let client = ApiClient::new();
        let table = DatasetTable::from_config(config, &client).context("Failed to build dataset table")?;

        let theme = Theme::by_name(&config.ui.theme)
            .ok_or_else(|| anyhow!("Unknown theme '{}'", config.ui.theme))?;

        Ok(Self::with_table(
            Arc::new(table),
            DashboardView::new(config.ui.row_height),
            theme,
            Duration::from_millis(config.ui.tick_rate_ms),
        ))
    }

    /// Build the application around an existing dataset table
    pub fn with_table(table: Arc<DatasetTable>, view: DashboardView, theme: Theme, tick_rate: Duration) -> Self {
        let (message_sender, messages) = mpsc::unbounded_channel();
        let orchestrator = Arc::new(FetchOrchestrator::new(table));

        Self {
            model: Model::new(orchestrator),
            view,
            theme,
            event_handler: EventHandler::new(),
            executor: CommandExecutor::new(message_sender),
            messages,
            tick_rate,
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Apply a message and run the commands it produces
    pub fn dispatch(&mut self, message: Message) {
        for command in update(&mut self.model, message) {
            self.executor.execute(command);
        }
    }

    /// Mount the dashboard, starting the fetch round
    pub fn mount(&mut self) {
        self.dispatch(SystemMessage::Mount.into());
    }

    /// Apply every message that has already arrived
    pub fn process_pending_messages(&mut self) {
        while let Ok(message) = self.messages.try_recv() {
            self.dispatch(message);
        }
    }

    /// Mount if needed, then apply messages until every dataset has settled
    pub async fn wait_until_settled(&mut self) -> Result<()> {
        if !self.model.app_state.mounted {
            self.mount();
        }

        while !self.model.dashboard.is_settled() {
            let message = self
                .messages
                .recv()
                .await
                .ok_or_else(|| anyhow!("Message channel closed before the dashboard settled"))?;
            self.dispatch(message);
        }

        Ok(())
    }

    /// Draw one frame
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|frame| {
            self.view
                .render(frame, &self.model.dashboard, &mut self.model.user_list, &self.theme)
        })?;
        Ok(())
    }

    /// Run the interactive dashboard until the user quits
    pub async fn run(&mut self) -> Result<()> {
        if !io::stdout().is_tty() {
            return Err(anyhow!(
                "userboard requires a terminal (TTY). Use --plain for non-interactive output."
            ));
        }

        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

        let result = self.run_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn run_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let size = terminal.size()?;
        self.dispatch(SystemMessage::Resize(size.width, size.height).into());
        self.mount();

        let mut last_tick = Instant::now();

        loop {
            self.process_pending_messages();
            if self.model.app_state.should_quit {
                tracing::debug!("Quit requested, leaving event loop");
                return Ok(());
            }

            self.draw(terminal)?;

            let timeout = self.tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                if let Some(message) = self.event_handler.handle_event(event::read()?) {
                    self.dispatch(message);
                }
            }

            if last_tick.elapsed() >= self.tick_rate {
                self.dispatch(SystemMessage::Tick.into());
                last_tick = Instant::now();
            }
        }
    }
}
