use crate::data_store::ClientConfig;
use anyhow::Result;
use serde::Deserialize;
use std::time::Duration;

/// Environment variables override file values, e.g.
/// `CONVERSATION_TREE_DATA_STORE__BASE_URL=http://10.0.0.2:8000`
const ENV_PREFIX: &str = "CONVERSATION_TREE";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub data_store: DataStoreConfig,
}

#[derive(Debug, Deserialize)]
pub struct DataStoreConfig {
    pub base_url: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load from `path` (any extension the `config` crate knows) if it exists,
    /// then from the environment, falling back to a local data store.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("data_store.base_url", ClientConfig::default().base_url)?
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

impl From<&DataStoreConfig> for ClientConfig {
    fn from(cfg: &DataStoreConfig) -> Self {
        ClientConfig {
            base_url: cfg.base_url.clone(),
            timeout: cfg.timeout_secs.map(Duration::from_secs),
        }
    }
}
