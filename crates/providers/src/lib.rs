use alloy::primitives::B256;
use async_trait::async_trait;

pub mod evm;

/// The parts of a block the audit report is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedBlock {
    pub number: u64,
    pub timestamp: u64,
    pub hash: B256,
    pub transaction_count: usize,
}

/// Minimal view of a JSON-RPC node.
#[async_trait]
pub trait ChainProvider: Send + Sync {
    /// Probe the endpoint. Any failure counts as "not connected".
    async fn is_connected(&self) -> bool;

    async fn chain_id(&self) -> eyre::Result<u64>;

    /// `None` asks for the node's latest block. `Ok(None)` means the node has no such block.
    async fn get_block(&self, number: Option<u64>) -> eyre::Result<Option<FetchedBlock>>;
}
