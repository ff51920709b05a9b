use std::time::Duration;

use providers::{evm::EvmProvider, ChainProvider};
use tracing::{debug, info};

use crate::AuditError;

/// Scheme check done before any network activity. `https` passes through the `http` prefix.
pub fn validate_rpc_url(url: &str) -> Result<(), AuditError> {
    if url.starts_with("http") {
        Ok(())
    } else {
        Err(AuditError::InvalidRpcUrl(url.to_owned()))
    }
}

/// Validates `url`, builds the HTTP client and probes the node once.
pub async fn connect(url: &str, timeout: Duration) -> Result<EvmProvider, AuditError> {
    validate_rpc_url(url)?;

    let provider = EvmProvider::new(url, timeout).map_err(|e| {
        debug!("Failed building RPC client for {}: {:?}", url, e);
        AuditError::InvalidRpcUrl(url.to_owned())
    })?;

    ensure_connected(&provider, url).await?;
    info!("Connected to {}", provider.url());
    Ok(provider)
}

pub async fn ensure_connected<P: ChainProvider + ?Sized>(
    provider: &P,
    url: &str,
) -> Result<(), AuditError> {
    if provider.is_connected().await {
        Ok(())
    } else {
        Err(AuditError::ConnectionFailed(url.to_owned()))
    }
}
