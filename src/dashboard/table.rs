use crate::api::{ApiClient, DatasetSource, JsonEndpoint, UserDirectory};
use crate::config::DashboardConfig;
use crate::error::ConfigError;
use std::sync::Arc;

/// A named dataset and the capability that fetches it
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    pub name: String,
    pub source: Arc<dyn DatasetSource>,
}

impl DatasetConfig {
    pub fn new(name: impl Into<String>, source: Arc<dyn DatasetSource>) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }
}

/// The fixed table of datasets: the primary users dataset plus the
/// auxiliary ones in display order.
///
/// Built once at startup and shared behind an `Arc`; never mutated.
#[derive(Debug)]
pub struct DatasetTable {
    primary: DatasetConfig,
    auxiliary: Vec<DatasetConfig>,
}

impl DatasetTable {
    pub fn new(primary: DatasetConfig, auxiliary: Vec<DatasetConfig>) -> Self {
        Self { primary, auxiliary }
    }

    /// Build the HTTP-backed table described by `config`
    pub fn from_config(config: &DashboardConfig, client: &ApiClient) -> Result<Self, ConfigError> {
        let users_url = config.users.parsed_url()?;
        let primary = DatasetConfig::new(
            config.users.name.clone(),
            Arc::new(UserDirectory::new(client.clone(), users_url)),
        );

        let auxiliary = config
            .datasets
            .iter()
            .map(|endpoint| {
                let url = endpoint.parsed_url()?;
                Ok(DatasetConfig::new(
                    endpoint.name.clone(),
                    Arc::new(JsonEndpoint::new(client.clone(), url)),
                ))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Self::new(primary, auxiliary))
    }

    pub fn primary(&self) -> &DatasetConfig {
        &self.primary
    }

    pub fn auxiliary(&self) -> &[DatasetConfig] {
        &self.auxiliary
    }

    /// All configs, primary first
    pub fn iter(&self) -> impl Iterator<Item = &DatasetConfig> {
        std::iter::once(&self.primary).chain(self.auxiliary.iter())
    }

    /// Total number of datasets, primary included
    pub fn len(&self) -> usize {
        1 + self.auxiliary.len()
    }

    /// Always false: the primary dataset is mandatory
    pub fn is_empty(&self) -> bool {
        false
    }
}
