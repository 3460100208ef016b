//! Plain-text rendering of the dashboard, for non-interactive output

use crate::dashboard::DashboardState;
use crate::ui::dashboard::{USERS_LOADING_TEXT, USER_LIST_TITLE};
use crate::ui::dataset_panel::{status_text, PANEL_TITLE};
use std::fmt;

/// Plain-text view of a snapshot. Every user is listed.
pub struct Report<'a> {
    state: &'a DashboardState,
}

impl<'a> Report<'a> {
    pub fn new(state: &'a DashboardState) -> Self {
        Self { state }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state;

        writeln!(f, "{}", USER_LIST_TITLE)?;
        if state.loading_users() {
            writeln!(f, "{}", USERS_LOADING_TEXT)?;
        } else if let Some(error) = state.error_users() {
            writeln!(f, "{}", error)?;
        } else {
            for user in state.users() {
                writeln!(
                    f,
                    "{} | Age: {} | {} | {}",
                    user.full_name(),
                    user.age,
                    user.location(),
                    user.avatar_url
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{}", PANEL_TITLE)?;
        for (name, dataset) in state.auxiliary() {
            writeln!(f, "{}: {}", name, status_text(dataset))?;
        }

        Ok(())
    }
}

/// Render the snapshot as text lines
pub fn render_report(state: &DashboardState) -> String {
    Report::new(state).to_string()
}
