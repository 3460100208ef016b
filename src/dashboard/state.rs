use crate::api::UserProfile;
use crate::dashboard::DatasetTable;
use crate::error::FetchResult;
use chrono::{DateTime, Local};
use serde_json::Value;
use std::sync::Arc;

/// Shown when the users dataset fails, whatever the cause
pub const USERS_ERROR_MESSAGE: &str = "Failed to load users.";

/// Shown when an auxiliary dataset fails, whatever the cause
pub const DATASET_ERROR_MESSAGE: &str = "Failed to load.";

/// Load state of one auxiliary dataset.
///
/// Starts `Pending` and settles exactly once.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetState {
    Pending,
    Loaded(Value),
    Failed(String),
}

impl DatasetState {
    pub fn is_loading(&self) -> bool {
        matches!(self, DatasetState::Pending)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            DatasetState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&Value> {
        match self {
            DatasetState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Number of records: array length, 0 for null or no data, 1 otherwise
    pub fn record_count(&self) -> usize {
        match self.data() {
            Some(Value::Array(items)) => items.len(),
            Some(Value::Null) | None => 0,
            Some(_) => 1,
        }
    }

    /// Settle a pending dataset. Returns false if it had already settled.
    fn settle(&mut self, result: FetchResult<Value>) -> bool {
        if !self.is_loading() {
            return false;
        }

        *self = match result {
            Ok(value) => DatasetState::Loaded(value),
            Err(_) => DatasetState::Failed(DATASET_ERROR_MESSAGE.to_string()),
        };
        true
    }
}

/// Snapshot of everything the dashboard view renders
#[derive(Debug, Clone)]
pub struct DashboardState {
    table: Arc<DatasetTable>,
    users: Vec<UserProfile>,
    loading_users: bool,
    error_users: Option<String>,
    datasets: Vec<DatasetState>,
    users_settled_at: Option<DateTime<Local>>,
    datasets_settled_at: Option<DateTime<Local>>,
}

impl DashboardState {
    /// Fresh state for a mount: users loading, every auxiliary dataset pending
    pub fn new(table: Arc<DatasetTable>) -> Self {
        let datasets = vec![DatasetState::Pending; table.auxiliary().len()];

        Self {
            table,
            users: Vec::new(),
            loading_users: true,
            error_users: None,
            datasets,
            users_settled_at: None,
            datasets_settled_at: None,
        }
    }

    pub fn users(&self) -> &[UserProfile] {
        &self.users
    }

    pub fn loading_users(&self) -> bool {
        self.loading_users
    }

    pub fn error_users(&self) -> Option<&str> {
        self.error_users.as_deref()
    }

    /// Auxiliary dataset states, in table order
    pub fn datasets(&self) -> &[DatasetState] {
        &self.datasets
    }

    /// The dataset table this state was built from
    pub fn table(&self) -> &DatasetTable {
        &self.table
    }

    /// Auxiliary dataset names paired with their states, in table order
    pub fn auxiliary(&self) -> impl Iterator<Item = (&str, &DatasetState)> {
        self.table
            .auxiliary()
            .iter()
            .map(|config| config.name.as_str())
            .zip(self.datasets.iter())
    }

    /// Number of datasets (primary included) that have settled
    pub fn settled_count(&self) -> usize {
        let users = usize::from(!self.loading_users);
        users + self.datasets.iter().filter(|state| !state.is_loading()).count()
    }

    /// Whether users and every auxiliary dataset have an outcome
    pub fn is_settled(&self) -> bool {
        self.settled_count() == self.table.len()
    }

    pub fn users_settled_at(&self) -> Option<DateTime<Local>> {
        self.users_settled_at
    }

    pub fn datasets_settled_at(&self) -> Option<DateTime<Local>> {
        self.datasets_settled_at
    }

    /// Apply the outcome of the users request
    pub fn apply_users(&mut self, result: FetchResult<Vec<UserProfile>>) {
        if !self.loading_users {
            tracing::warn!("Ignoring users outcome: dataset already settled");
            return;
        }

        match result {
            Ok(users) => {
                tracing::info!("Loaded {} users", users.len());
                self.users = users;
                self.error_users = None;
            }
            Err(e) => {
                tracing::warn!("{}: {}", self.table.primary().name, e);
                self.error_users = Some(USERS_ERROR_MESSAGE.to_string());
            }
        }

        self.loading_users = false;
        self.users_settled_at = Some(Local::now());
    }

    /// Apply every auxiliary outcome in one write.
    ///
    /// Outcomes are matched to datasets by position in the table.
    pub fn apply_datasets(&mut self, results: Vec<FetchResult<Value>>) {
        if results.len() != self.datasets.len() {
            tracing::warn!(
                "Got {} dataset outcomes for {} datasets",
                results.len(),
                self.datasets.len()
            );
        }

        let names = self.table.auxiliary().iter().map(|config| config.name.as_str());
        for ((name, state), result) in names.zip(self.datasets.iter_mut()).zip(results) {
            if let Err(e) = &result {
                tracing::warn!("{}: {}", name, e);
            }
            if !state.settle(result) {
                tracing::warn!("Ignoring outcome for {}: dataset already settled", name);
            }
        }

        self.datasets_settled_at = Some(Local::now());
    }
}
