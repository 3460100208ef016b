use crate::dashboard::{DashboardState, DatasetState};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use serde_json::Value;

pub const PANEL_TITLE: &str = "Other Data (Fetched Asynchronously)";

/// Status line for one auxiliary dataset
pub fn status_text(state: &DatasetState) -> String {
    match state {
        DatasetState::Pending => "Loading...".to_string(),
        DatasetState::Failed(message) => message.clone(),
        DatasetState::Loaded(Value::Array(items)) => format!("Loaded {} records.", items.len()),
        DatasetState::Loaded(_) => "Loaded data records.".to_string(),
    }
}

/// Panel listing every auxiliary dataset with its load status
pub struct DatasetPanel<'a> {
    state: &'a DashboardState,
    theme: &'a Theme,
}

impl<'a> DatasetPanel<'a> {
    pub fn new(state: &'a DashboardState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Height needed to show every dataset, borders included
    pub fn height(state: &DashboardState) -> u16 {
        u16::try_from(state.datasets().len()).unwrap_or(u16::MAX).saturating_add(2)
    }

    fn status_style(&self, state: &DatasetState) -> Style {
        let colors = &self.theme.colors.dataset_panel;
        match state {
            DatasetState::Pending => Style::default().fg(colors.loading),
            DatasetState::Failed(_) => Style::default().fg(colors.failed),
            DatasetState::Loaded(_) => Style::default().fg(colors.loaded),
        }
    }
}

impl Widget for DatasetPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let name_style = Style::default()
            .fg(self.theme.colors.dataset_panel.name)
            .add_modifier(Modifier::BOLD);

        let lines: Vec<Line> = self
            .state
            .auxiliary()
            .map(|(name, state)| {
                Line::from(vec![
                    Span::styled(name.to_string(), name_style),
                    Span::raw("  "),
                    Span::styled(status_text(state), self.status_style(state)),
                ])
            })
            .collect();

        let block = Block::default()
            .title(PANEL_TITLE)
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
