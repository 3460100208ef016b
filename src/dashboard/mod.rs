//! Dataset orchestration for the dashboard
//!
//! [`DatasetTable`] is the fixed set of datasets built at startup,
//! [`DashboardState`] is the snapshot the view renders, and
//! [`FetchOrchestrator`] runs the single fetch round that fills it.

pub mod orchestrator;
pub mod state;
pub mod table;

pub use orchestrator::{FetchOrchestrator, FetchOutcome, FetchTask};
pub use state::{DashboardState, DatasetState, DATASET_ERROR_MESSAGE, USERS_ERROR_MESSAGE};
pub use table::{DatasetConfig, DatasetTable};
