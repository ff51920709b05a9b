use std::fmt;

use alloy::primitives::{hex, keccak256};
use providers::ChainProvider;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::AuditError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockTarget {
    Latest,
    Number(u64),
}

impl BlockTarget {
    pub fn number(&self) -> Option<u64> {
        match self {
            BlockTarget::Latest => None,
            BlockTarget::Number(n) => Some(*n),
        }
    }
}

impl From<Option<u64>> for BlockTarget {
    fn from(number: Option<u64>) -> Self {
        number.map_or(BlockTarget::Latest, BlockTarget::Number)
    }
}

impl fmt::Display for BlockTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockTarget::Latest => write!(f, "latest"),
            BlockTarget::Number(n) => write!(f, "{}", n),
        }
    }
}

/// One block as reported by the node plus the locally derived checksum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockReport {
    pub number: u64,
    pub timestamp: u64,
    pub hash: String,
    pub checksum: String,
    #[serde(rename = "transactions")]
    pub transaction_count: usize,
}

/// Keccak-256 over the UTF-8 text of `hash_text`, `0x`-prefixed.
///
/// This is a transcription check on the hash string. It does not re-verify the block.
pub fn checksum(hash_text: &str) -> String {
    hex::encode_prefixed(keccak256(hash_text.as_bytes()))
}

#[instrument(skip_all, fields(target = %target))]
pub async fn fetch_block_details<P: ChainProvider + ?Sized>(
    provider: &P,
    target: BlockTarget,
) -> Result<BlockReport, AuditError> {
    let block = provider
        .get_block(target.number())
        .await
        .map_err(|e| AuditError::BlockFetch(e.to_string()))?
        .ok_or_else(|| AuditError::BlockFetch(format!("block {} not found", target)))?;

    let hash = hex::encode_prefixed(block.hash);
    let checksum = checksum(&hash);
    debug!(number = block.number, %hash, "Fetched block");

    Ok(BlockReport {
        number: block.number,
        timestamp: block.timestamp,
        hash,
        checksum,
        transaction_count: block.transaction_count,
    })
}
