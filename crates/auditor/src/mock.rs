use std::{collections::VecDeque, sync::Mutex};

use alloy::primitives::B256;
use async_trait::async_trait;
use providers::{ChainProvider, FetchedBlock};

/// In-memory node used by the unit tests.
pub(crate) struct MockNode {
    connected: bool,
    chain_id: Option<u64>,
    queued_chain_ids: Mutex<VecDeque<Option<u64>>>,
    blocks: Vec<FetchedBlock>,
    block_error: Option<String>,
    pub(crate) block_requests: Mutex<Vec<Option<u64>>>,
}

impl Default for MockNode {
    fn default() -> Self {
        Self {
            connected: true,
            chain_id: Some(1),
            queued_chain_ids: Mutex::new(VecDeque::new()),
            blocks: vec![
                block(100, 1_700_000_000, B256::repeat_byte(0xab), 3),
                block(101, 1_700_000_012, B256::repeat_byte(0xcd), 0),
            ],
            block_error: None,
            block_requests: Mutex::new(Vec::new()),
        }
    }
}

pub(crate) fn block(number: u64, timestamp: u64, hash: B256, txs: usize) -> FetchedBlock {
    FetchedBlock {
        number,
        timestamp,
        hash,
        transaction_count: txs,
    }
}

impl MockNode {
    pub(crate) fn disconnected(mut self) -> Self {
        self.connected = false;
        self
    }

    pub(crate) fn with_chain_id(mut self, chain_id: Option<u64>) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Answers for the next `chain_id` calls, in order. `None` is a failed call.
    pub(crate) fn with_chain_id_sequence(self, answers: Vec<Option<u64>>) -> Self {
        *self.queued_chain_ids.lock().unwrap() = answers.into();
        self
    }

    pub(crate) fn with_blocks(mut self, blocks: Vec<FetchedBlock>) -> Self {
        self.blocks = blocks;
        self
    }

    pub(crate) fn failing_blocks(mut self, message: &str) -> Self {
        self.block_error = Some(message.to_owned());
        self
    }
}

#[async_trait]
impl ChainProvider for MockNode {
    async fn is_connected(&self) -> bool {
        self.connected
    }

    async fn chain_id(&self) -> eyre::Result<u64> {
        let answer = self
            .queued_chain_ids
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(self.chain_id);
        answer.ok_or_else(|| eyre::eyre!("eth_chainId not supported"))
    }

    async fn get_block(&self, number: Option<u64>) -> eyre::Result<Option<FetchedBlock>> {
        self.block_requests.lock().unwrap().push(number);

        if let Some(message) = &self.block_error {
            return Err(eyre::eyre!("{}", message));
        }

        let found = match number {
            Some(n) => self.blocks.iter().find(|b| b.number == n),
            None => self.blocks.iter().max_by_key(|b| b.number),
        };
        Ok(found.cloned())
    }
}
