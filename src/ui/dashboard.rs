use crate::dashboard::DashboardState;
use crate::theme::Theme;
use crate::ui::dataset_panel::DatasetPanel;
use crate::ui::user_list::{UserList, UserListState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const USER_LIST_TITLE: &str = "User List";
pub const USERS_LOADING_TEXT: &str = "Loading users...";

/// Full-screen dashboard: user list on top, dataset panel below
#[derive(Debug, Clone)]
pub struct DashboardView {
    row_height: u16,
}

impl DashboardView {
    pub fn new(row_height: u16) -> Self {
        Self {
            row_height: row_height.max(1),
        }
    }

    /// Render the dashboard for the current snapshot
    pub fn render(&self, frame: &mut Frame, state: &DashboardState, list: &mut UserListState, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),                          // Header
                Constraint::Min(3),                             // User list
                Constraint::Length(DatasetPanel::height(state)), // Dataset panel
                Constraint::Length(1),                          // Footer
            ])
            .split(frame.size());

        self.render_header(frame, chunks[0], theme);
        self.render_users(frame, chunks[1], state, list, theme);
        frame.render_widget(DatasetPanel::new(state, theme), chunks[2]);
        self.render_footer(frame, chunks[3], state, theme);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                "User Dashboard",
                Style::default()
                    .fg(theme.colors.palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "  Assessment & Data Visualization",
                Style::default().fg(theme.colors.palette.text_muted),
            ),
        ]));
        frame.render_widget(header, area);
    }

    fn render_users(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &DashboardState,
        list: &mut UserListState,
        theme: &Theme,
    ) {
        let title = if state.loading_users() || state.error_users().is_some() {
            USER_LIST_TITLE.to_string()
        } else {
            format!("{} ({})", USER_LIST_TITLE, state.users().len())
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(theme.border_style(true));

        if state.loading_users() {
            let loading = Paragraph::new(USERS_LOADING_TEXT)
                .style(Style::default().fg(theme.colors.dataset_panel.loading))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(loading, area);
        } else if let Some(error) = state.error_users() {
            let error = Paragraph::new(error.to_string())
                .style(Style::default().fg(theme.colors.palette.error))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(error, area);
        } else {
            let users = UserList::new(state.users(), theme)
                .row_height(self.row_height)
                .block(block);
            frame.render_stateful_widget(users, area, list);
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, state: &DashboardState, theme: &Theme) {
        let mut spans = vec![Span::styled(
            "↑/↓ move  PgUp/PgDn page  g/G top/bottom  q quit",
            Style::default().fg(theme.colors.palette.text_muted),
        )];

        spans.push(Span::raw("  |  "));
        spans.push(Span::styled(
            format!("{}/{} datasets settled", state.settled_count(), state.table().len()),
            Style::default().fg(theme.colors.palette.text_secondary),
        ));

        if let Some(settled_at) = state.datasets_settled_at().or(state.users_settled_at()) {
            spans.push(Span::styled(
                format!("  updated {}", settled_at.format("%H:%M:%S")),
                Style::default().fg(theme.colors.palette.text_secondary),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new(3)
    }
}
