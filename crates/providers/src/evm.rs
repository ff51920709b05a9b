use std::{fmt, future::Future, sync::Arc, time::Duration};

use alloy::{
    eips::BlockNumberOrTag,
    providers::{Provider, ProviderBuilder},
    rpc::types::{Block, BlockTransactionsKind},
};
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{ChainProvider, FetchedBlock};

/// HTTP JSON-RPC client backed by alloy. Every call is bounded by `timeout`.
#[derive(Clone)]
pub struct EvmProvider {
    http: Arc<dyn Provider + Send + Sync>,
    http_url: String,
    timeout: Duration,
}

impl fmt::Debug for EvmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvmProvider")
            .field("http_url", &self.http_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl EvmProvider {
    pub fn new(http_url: &str, timeout: Duration) -> eyre::Result<Self> {
        let parsed_http_url = http_url
            .parse::<alloy::transports::http::reqwest::Url>()
            .map_err(|e| eyre::eyre!("Invalid HTTP URL: {}", e))?;
        let http = ProviderBuilder::new().on_http(parsed_http_url);

        Ok(Self::with_provider(Arc::new(http), http_url, timeout))
    }

    pub fn with_provider(
        http: Arc<dyn Provider + Send + Sync>,
        http_url: &str,
        timeout: Duration,
    ) -> Self {
        Self {
            http,
            http_url: http_url.to_string(),
            timeout,
        }
    }

    pub fn url(&self) -> &str {
        &self.http_url
    }

    async fn with_timeout<T, F>(&self, request: F) -> eyre::Result<T>
    where
        F: Future<Output = eyre::Result<T>>,
    {
        match tokio::time::timeout(self.timeout, request).await {
            Ok(result) => result,
            Err(_) => Err(eyre::eyre!(
                "request timed out after {}s",
                self.timeout.as_secs()
            )),
        }
    }
}

/// `None` is the node's latest block.
pub fn block_tag(number: Option<u64>) -> BlockNumberOrTag {
    number.map_or(BlockNumberOrTag::Latest, BlockNumberOrTag::Number)
}

impl From<Block> for FetchedBlock {
    fn from(block: Block) -> Self {
        Self {
            number: block.header.number,
            timestamp: block.header.timestamp,
            hash: block.header.hash,
            transaction_count: block.transactions.len(),
        }
    }
}

#[async_trait]
impl ChainProvider for EvmProvider {
    async fn is_connected(&self) -> bool {
        let probe = self.with_timeout(async {
            self.http
                .get_client_version()
                .await
                .map_err(eyre::Report::from)
        });

        match probe.await {
            Ok(version) => {
                debug!(url = %self.http_url, %version, "Connected to node");
                true
            }
            Err(e) => {
                warn!(url = %self.http_url, "Connection probe failed: {:?}", e);
                false
            }
        }
    }

    async fn chain_id(&self) -> eyre::Result<u64> {
        self.with_timeout(async { self.http.get_chain_id().await.map_err(Into::into) })
            .await
    }

    async fn get_block(&self, number: Option<u64>) -> eyre::Result<Option<FetchedBlock>> {
        // Hashes are enough, only the transaction count is reported.
        let block = self
            .with_timeout(async {
                self.http
                    .get_block_by_number(block_tag(number), BlockTransactionsKind::Hashes)
                    .await
                    .map_err(eyre::Report::from)
            })
            .await?;

        Ok(block.map(FetchedBlock::from))
    }
}
