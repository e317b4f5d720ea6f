#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use alloy::{
    eips::BlockId,
    primitives::{Bytes, U256},
    rpc::types::TransactionRequest,
    sol_types::SolValue,
};
use eth_multicaller::{evm::multicall::Multicall2, ChainCaller, MulticallError};

pub enum Reply {
    Raw(Bytes),
    Fail(String),
}

/// Chain node stand-in: reports a fixed chain id (or fails to) and answers
/// every `eth_call` with a canned reply, recording what it was asked.
pub struct FakeNode {
    chain_id: Result<u64, String>,
    reply: Reply,
    pub requests: Mutex<Vec<(TransactionRequest, BlockId)>>,
    pub chain_id_queries: AtomicUsize,
}

impl FakeNode {
    pub fn new(chain_id: u64, reply: Reply) -> Self {
        Self {
            chain_id: Ok(chain_id),
            reply,
            requests: Mutex::new(Vec::new()),
            chain_id_queries: AtomicUsize::new(0),
        }
    }

    pub fn returning(chain_id: u64, entries: &[(bool, Bytes)]) -> Self {
        Self::new(chain_id, Reply::Raw(aggregate_response(entries)))
    }

    /// A node whose chain id query fails, as when it cannot be reached.
    pub fn unreachable(message: &str) -> Self {
        Self {
            chain_id: Err(message.to_string()),
            ..Self::returning(1, &[])
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl ChainCaller for FakeNode {
    async fn chain_id(&self) -> Result<u64, MulticallError> {
        self.chain_id_queries.fetch_add(1, Ordering::SeqCst);
        self.chain_id.clone().map_err(MulticallError::Connection)
    }

    async fn simulate_call(
        &self,
        tx: TransactionRequest,
        block: BlockId,
    ) -> Result<Bytes, MulticallError> {
        self.requests.lock().unwrap().push((tx, block));

        match &self.reply {
            Reply::Raw(raw) => Ok(raw.clone()),
            Reply::Fail(message) => Err(MulticallError::Simulation(message.clone())),
        }
    }
}

/// Return data of `tryAggregate` for the given (success, returnData) pairs.
pub fn aggregate_response(entries: &[(bool, Bytes)]) -> Bytes {
    let results: Vec<Multicall2::Result> = entries
        .iter()
        .map(|(success, data)| Multicall2::Result {
            success: *success,
            returnData: data.clone(),
        })
        .collect();

    (results,).abi_encode_params().into()
}

pub fn uint(value: u64) -> Bytes {
    U256::from(value).abi_encode().into()
}
