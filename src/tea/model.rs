//! Application model following TEA pattern
//!
//! Holds all dashboard state. Only `update` mutates it.

use crate::dashboard::{DashboardState, FetchOrchestrator};
use crate::ui::user_list::UserListState;
use std::sync::Arc;
use tokio::time::Instant;

/// Main application model containing all state
#[derive(Debug, Clone)]
pub struct Model {
    /// Application lifecycle state
    pub app_state: AppState,

    /// Snapshot rendered by the dashboard view
    pub dashboard: DashboardState,

    /// Scroll position of the user list
    pub user_list: UserListState,

    /// Starts the fetch round on mount
    pub orchestrator: Arc<FetchOrchestrator>,
}

/// Application lifecycle state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Whether the application should quit
    pub should_quit: bool,

    /// Whether the dashboard has been mounted
    pub mounted: bool,

    /// Terminal dimensions
    pub terminal_size: (u16, u16),

    /// Last tick time for periodic updates
    pub last_tick: Instant,

    /// Application start time
    pub start_time: Instant,
}

impl Default for AppState {
    fn default() -> Self {
        let now = Instant::now();
        Self {
            should_quit: false,
            mounted: false,
            terminal_size: (0, 0),
            last_tick: now,
            start_time: now,
        }
    }
}

impl Model {
    /// Create a model for a fresh mount of the dashboard
    pub fn new(orchestrator: Arc<FetchOrchestrator>) -> Self {
        Self {
            app_state: AppState::default(),
            dashboard: DashboardState::new(Arc::clone(orchestrator.table())),
            user_list: UserListState::default(),
            orchestrator,
        }
    }
}
