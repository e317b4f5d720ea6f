use std::future::Future;

use alloy::eips::BlockId;
use alloy::primitives::Bytes;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;

use crate::domain::MulticallError;

pub mod signer;

/// The chain node as seen by the multicaller: chain id discovery and
/// `eth_call` pinned to a block.
pub trait ChainCaller: Send + Sync {
    fn chain_id(&self) -> impl Future<Output = Result<u64, MulticallError>> + Send;

    fn simulate_call(
        &self,
        tx: TransactionRequest,
        block: BlockId,
    ) -> impl Future<Output = Result<Bytes, MulticallError>> + Send;
}

impl<T: ChainCaller> ChainCaller for &T {
    fn chain_id(&self) -> impl Future<Output = Result<u64, MulticallError>> + Send {
        (**self).chain_id()
    }

    fn simulate_call(
        &self,
        tx: TransactionRequest,
        block: BlockId,
    ) -> impl Future<Output = Result<Bytes, MulticallError>> + Send {
        (**self).simulate_call(tx, block)
    }
}

impl ChainCaller for DynProvider {
    async fn chain_id(&self) -> Result<u64, MulticallError> {
        self.get_chain_id()
            .await
            .map_err(|err| MulticallError::Connection(err.to_string()))
    }

    async fn simulate_call(
        &self,
        tx: TransactionRequest,
        block: BlockId,
    ) -> Result<Bytes, MulticallError> {
        self.call(tx)
            .block(block)
            .await
            .map_err(|err| MulticallError::Simulation(err.to_string()))
    }
}

// fillers are disabled so that a batch is exactly one eth_call
pub async fn connect(rpc_url: &str) -> Result<DynProvider, MulticallError> {
    let provider = ProviderBuilder::new()
        .disable_recommended_fillers()
        .connect(rpc_url)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "unable to connect to {}", rpc_url);
            MulticallError::Connection(err.to_string())
        })?;

    Ok(provider.erased())
}
