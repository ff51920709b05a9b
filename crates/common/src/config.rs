use config::{Config, File};
use dotenv::dotenv;
use eyre::Result;
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_RPC_URL: &str = "https://mainnet.infura.io/v3/YOUR_INFURA_KEY";
pub const DEFAULT_RPC_TIMEOUT_SECS: u64 = 30;

const CONFIG_FILE: &str = "soundness.yaml";

/// Settings that can come from `soundness.yaml`, the environment or a `.env` file.
///
/// `RPC_URL` and `RPC_TIMEOUT` land in `rpc_url` and `rpc_timeout`.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub rpc_url: Option<String>,
    pub rpc_timeout: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let settings = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let cfg: AppConfig = settings.try_deserialize().map_err(eyre::Error::from)?;
        debug!(?cfg, "Loaded configuration");
        Ok(cfg)
    }

    /// Picks the endpoint: explicit flag first, then configuration, then the placeholder default.
    pub fn resolve_rpc_url(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.rpc_url.clone())
            .unwrap_or_else(|| DEFAULT_RPC_URL.to_owned())
    }

    pub fn resolve_timeout(&self, flag: Option<u64>) -> u64 {
        flag.or(self.rpc_timeout)
            .unwrap_or(DEFAULT_RPC_TIMEOUT_SECS)
    }
}
