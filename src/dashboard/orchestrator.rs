use crate::api::{users_from_value, UserProfile};
use crate::dashboard::{DashboardState, DatasetTable};
use crate::error::FetchResult;
use crate::tea::command::AsyncTask;
use crate::tea::message::{DataMessage, Message};
use async_trait::async_trait;
use futures::future::join_all;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Starts the one fetch round of a mount.
///
/// `activate` hands out a [`FetchTask`] the first time it is called and
/// nothing afterwards, however often the view redraws.
#[derive(Debug)]
pub struct FetchOrchestrator {
    table: Arc<DatasetTable>,
    started: AtomicBool,
}

impl FetchOrchestrator {
    pub fn new(table: Arc<DatasetTable>) -> Self {
        Self {
            table,
            started: AtomicBool::new(false),
        }
    }

    pub fn table(&self) -> &Arc<DatasetTable> {
        &self.table
    }

    /// Whether the fetch round has already been handed out
    pub fn has_started(&self) -> bool {
        self.started.load(Ordering::Acquire)
    }

    /// Claim the fetch round. Returns `None` once it has been claimed.
    pub fn activate(&self) -> Option<FetchTask> {
        if self
            .started
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("Fetch round already started, ignoring activation");
            return None;
        }

        tracing::info!("Starting fetch round for {} datasets", self.table.len());
        Some(FetchTask {
            table: Arc::clone(&self.table),
        })
    }

    /// Activate and run the fetch round to completion, applying it to `state`.
    ///
    /// Returns false without fetching if the round was already started.
    pub async fn load(&self, state: &mut DashboardState) -> bool {
        match self.activate() {
            Some(task) => {
                task.run().await.apply_to(state);
                true
            }
            None => false,
        }
    }
}

/// One fetch round over every dataset in the table
#[derive(Debug)]
pub struct FetchTask {
    table: Arc<DatasetTable>,
}

impl FetchTask {
    /// Fetch every dataset concurrently.
    ///
    /// All requests are created and polled together; a failure in one never
    /// cancels the others.
    pub async fn run(&self) -> FetchOutcome {
        let primary = self.table.primary().source.fetch();
        let auxiliary = join_all(self.table.auxiliary().iter().map(|config| config.source.fetch()));

        let (users, datasets) = tokio::join!(primary, auxiliary);

        let primary_name = self.table.primary().name.as_str();
        let outcome = FetchOutcome {
            users: users.and_then(|value| users_from_value(primary_name, value)),
            datasets,
        };

        tracing::info!(
            "Fetch round finished: users {}, {}/{} datasets loaded",
            if outcome.users.is_ok() { "ok" } else { "failed" },
            outcome.datasets.iter().filter(|result| result.is_ok()).count(),
            outcome.datasets.len()
        );

        outcome
    }
}

#[async_trait]
impl AsyncTask for FetchTask {
    async fn execute(&self) -> Vec<Message> {
        self.run().await.into_messages()
    }
}

/// Settled results of a fetch round
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub users: FetchResult<Vec<UserProfile>>,
    /// One result per auxiliary dataset, in table order
    pub datasets: Vec<FetchResult<Value>>,
}

impl FetchOutcome {
    /// Messages that apply this outcome: users first, then every auxiliary
    /// dataset in a single batch
    pub fn into_messages(self) -> Vec<Message> {
        vec![
            DataMessage::UsersSettled(self.users).into(),
            DataMessage::DatasetsSettled(self.datasets).into(),
        ]
    }

    pub fn apply_to(self, state: &mut DashboardState) {
        state.apply_users(self.users);
        state.apply_datasets(self.datasets);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DatasetSource;
    use crate::dashboard::{DatasetConfig, DATASET_ERROR_MESSAGE, USERS_ERROR_MESSAGE};
    use crate::error::FetchError;
    use serde_json::json;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;
    use tokio::sync::Barrier;

    /// Source returning a fixed result and counting its calls
    #[derive(Debug)]
    struct StubSource {
        result: FetchResult<Value>,
        calls: AtomicUsize,
    }

    impl StubSource {
        fn ok(value: Value) -> Arc<Self> {
            Arc::new(Self {
                result: Ok(value),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                result: Err(FetchError::transport("http://stub", "connection reset")),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DatasetSource for StubSource {
        async fn fetch(&self) -> FetchResult<Value> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    /// Source that only answers once every source in the round has been polled
    #[derive(Debug)]
    struct RendezvousSource {
        barrier: Arc<Barrier>,
        value: Value,
    }

    #[async_trait]
    impl DatasetSource for RendezvousSource {
        async fn fetch(&self) -> FetchResult<Value> {
            self.barrier.wait().await;
            Ok(self.value.clone())
        }
    }

    fn items(count: usize) -> Value {
        Value::Array((0..count).map(|id| json!({ "id": id })).collect())
    }

    fn john_doe() -> Value {
        json!([{
            "login": { "uuid": "1" },
            "name": { "first": "John", "last": "Doe" },
            "dob": { "age": 30 },
            "location": { "city": "NY", "country": "USA" },
            "picture": { "thumbnail": "a.jpg" }
        }])
    }

    fn orchestrator(primary: Arc<StubSource>, auxiliary: Vec<(&str, Arc<StubSource>)>) -> FetchOrchestrator {
        let auxiliary = auxiliary
            .into_iter()
            .map(|(name, source)| DatasetConfig::new(name, source))
            .collect();
        let table = DatasetTable::new(DatasetConfig::new("Users (High Priority)", primary), auxiliary);
        FetchOrchestrator::new(Arc::new(table))
    }

    #[tokio::test]
    async fn test_all_datasets_load() {
        let orchestrator = orchestrator(
            StubSource::ok(john_doe()),
            vec![
                ("Posts", StubSource::ok(items(10))),
                ("Comments", StubSource::ok(items(20))),
                ("Todos", StubSource::ok(items(5))),
            ],
        );
        let mut state = DashboardState::new(Arc::clone(orchestrator.table()));

        assert!(orchestrator.load(&mut state).await);

        assert!(!state.loading_users());
        assert_eq!(state.users().len(), 1);
        assert_eq!(state.users()[0].full_name(), "John Doe");

        let counts: Vec<usize> = state.datasets().iter().map(|d| d.record_count()).collect();
        assert_eq!(counts, vec![10, 20, 5]);
        assert!(state.datasets().iter().all(|d| !d.is_loading() && d.error().is_none()));
    }

    #[tokio::test]
    async fn test_users_failure_does_not_touch_datasets() {
        let orchestrator = orchestrator(
            StubSource::failing(),
            vec![
                ("Posts", StubSource::ok(items(2))),
                ("Comments", StubSource::ok(items(0))),
                ("Todos", StubSource::ok(items(0))),
            ],
        );
        let mut state = DashboardState::new(Arc::clone(orchestrator.table()));
        orchestrator.load(&mut state).await;

        assert_eq!(state.error_users(), Some(USERS_ERROR_MESSAGE));
        assert!(!state.loading_users());
        assert_eq!(state.datasets()[0].record_count(), 2);
        assert!(state.datasets().iter().all(|d| d.error().is_none()));
    }

    #[tokio::test]
    async fn test_partial_auxiliary_failure() {
        let orchestrator = orchestrator(
            StubSource::ok(john_doe()),
            vec![
                ("Posts", StubSource::ok(json!([1, 2, 3]))),
                ("Comments", StubSource::failing()),
                ("Todos", StubSource::ok(json!([1]))),
            ],
        );
        let mut state = DashboardState::new(Arc::clone(orchestrator.table()));
        orchestrator.load(&mut state).await;

        assert_eq!(state.users().len(), 1);
        assert_eq!(state.datasets()[0].record_count(), 3);

        let comments = &state.datasets()[1];
        assert!(!comments.is_loading());
        assert_eq!(comments.error(), Some(DATASET_ERROR_MESSAGE));
        assert!(comments.data().is_none());

        assert_eq!(state.datasets()[2].record_count(), 1);
    }

    #[tokio::test]
    async fn test_malformed_users_payload_is_a_failure() {
        let orchestrator = orchestrator(StubSource::ok(json!([{ "id": 1 }])), vec![("Posts", StubSource::ok(items(1)))]);
        let mut state = DashboardState::new(Arc::clone(orchestrator.table()));
        orchestrator.load(&mut state).await;

        assert_eq!(state.error_users(), Some(USERS_ERROR_MESSAGE));
        assert_eq!(state.datasets()[0].record_count(), 1);
    }

    #[tokio::test]
    async fn test_malformed_users_error_names_primary_dataset() {
        let orchestrator = orchestrator(StubSource::ok(json!([{ "id": 1 }])), Vec::new());
        let outcome = orchestrator.activate().unwrap().run().await;

        match outcome.users {
            Err(FetchError::Payload { dataset, .. }) => assert_eq!(dataset, "Users (High Priority)"),
            other => panic!("unexpected users outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_activation_is_idempotent() {
        let primary = StubSource::ok(json!([]));
        let posts = StubSource::ok(items(3));
        let orchestrator = orchestrator(Arc::clone(&primary), vec![("Posts", Arc::clone(&posts))]);
        let mut state = DashboardState::new(Arc::clone(orchestrator.table()));

        assert!(!orchestrator.has_started());
        assert!(orchestrator.load(&mut state).await);
        assert!(orchestrator.has_started());

        assert!(orchestrator.activate().is_none());
        assert!(!orchestrator.load(&mut state).await);

        assert_eq!(primary.calls(), 1);
        assert_eq!(posts.calls(), 1);
    }

    #[tokio::test]
    async fn test_requests_are_dispatched_together() {
        // Every source blocks until all four have been polled, so a round
        // that awaited them one by one would never finish.
        let barrier = Arc::new(Barrier::new(4));
        let source = |value: Value| -> Arc<dyn DatasetSource> {
            Arc::new(RendezvousSource {
                barrier: Arc::clone(&barrier),
                value,
            })
        };

        let table = DatasetTable::new(
            DatasetConfig::new("Users", source(json!([]))),
            vec![
                DatasetConfig::new("Posts", source(items(1))),
                DatasetConfig::new("Comments", source(items(2))),
                DatasetConfig::new("Todos", source(items(3))),
            ],
        );
        let orchestrator = FetchOrchestrator::new(Arc::new(table));
        let task = orchestrator.activate().unwrap();

        let outcome = tokio::time::timeout(Duration::from_secs(5), task.run())
            .await
            .expect("requests were not dispatched concurrently");

        assert!(outcome.users.is_ok());
        assert_eq!(outcome.datasets.len(), 3);
    }

    #[tokio::test]
    async fn test_outcome_messages_batch_datasets() {
        let orchestrator = orchestrator(
            StubSource::ok(json!([])),
            vec![("Posts", StubSource::ok(items(1))), ("Todos", StubSource::failing())],
        );
        let task = orchestrator.activate().unwrap();
        let messages = task.execute().await;

        assert_eq!(messages.len(), 2);
        assert!(matches!(messages[0], Message::Data(DataMessage::UsersSettled(Ok(_)))));
        match &messages[1] {
            Message::Data(DataMessage::DatasetsSettled(results)) => {
                assert_eq!(results.len(), 2);
                assert!(results[0].is_ok());
                assert!(results[1].is_err());
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }
}
