use std::time::Instant;

use alloy::eips::BlockNumberOrTag;
use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes};
use alloy::providers::DynProvider;
use alloy::rpc::types::TransactionRequest;
use tracing::info;

use crate::config::{constants::SIMULATION_GAS_PRICE, multicall_address::get_multicall_address};
use crate::domain::{Call, EvmNetwork, MulticallError, ResultSet};
use crate::infra::{self, signer::SimulationIdentity, ChainCaller};
use crate::services::{decoder, encoder};

/// Runs batches of read-only calls through the chain's Multicall2 contract.
///
/// All state is fixed at construction, so one instance can serve concurrent
/// batches as long as the underlying `ChainCaller` can.
pub struct MultiCaller<C = DynProvider> {
    chain: C,
    network: EvmNetwork,
    multicall: Address,
    identity: SimulationIdentity,
}

impl MultiCaller<DynProvider> {
    pub async fn connect(rpc_url: &str) -> Result<Self, MulticallError> {
        let provider = infra::connect(rpc_url).await?;
        Self::new(provider).await
    }
}

impl<C: ChainCaller> MultiCaller<C> {
    /// Resolves the chain id and the multicall deployment for it. Fails with
    /// `UnsupportedChain` when the chain has no known deployment.
    pub async fn new(chain: C) -> Result<Self, MulticallError> {
        let chain_id = chain.chain_id().await?;
        let network = EvmNetwork::try_from(chain_id)
            .map_err(|_| MulticallError::UnsupportedChain(chain_id))?;
        let multicall = get_multicall_address(&network);

        info!(%network, %multicall, "multicaller ready");

        Ok(Self {
            chain,
            network,
            multicall,
            identity: SimulationIdentity::random(),
        })
    }

    pub fn network(&self) -> EvmNetwork {
        self.network
    }

    pub fn multicall_address(&self) -> Address {
        self.multicall
    }

    /// Executes `calls` as a single simulated `tryAggregate` at `block`.
    ///
    /// A reverting sub-call does not fail the batch; it shows up with
    /// `success: false`. Errors are reserved for the batch as a whole.
    pub async fn execute(
        &self,
        calls: &[Call],
        block: BlockNumberOrTag,
    ) -> Result<ResultSet, MulticallError> {
        let payload = encoder::encode_calls(calls);
        let tx = self.simulation_request(payload);

        let t0 = Instant::now();
        let raw = self.chain.simulate_call(tx, block.into()).await?;

        info!(
            calls = calls.len(),
            %block,
            time = t0.elapsed().as_millis(),
            "aggregate call complete"
        );

        decoder::decode_response(calls, &raw)
    }

    fn simulation_request(&self, payload: Bytes) -> TransactionRequest {
        TransactionRequest::default()
            .with_from(self.identity.from)
            .with_to(self.multicall)
            .with_gas_price(SIMULATION_GAS_PRICE)
            .with_input(payload)
    }
}
