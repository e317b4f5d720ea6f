use std::collections::HashMap;
use std::time::Instant;

use alloy::eips::BlockNumberOrTag;
use alloy::primitives::Address;
use alloy::sol_types::SolCall;
use tracing::{info, warn};

use crate::domain::{Call, MulticallError};
use crate::evm::erc20::ERC20;
use crate::infra::ChainCaller;
use crate::services::multicaller::MultiCaller;

/// ERC-20 balances of `owner` for every token, in one aggregate call.
///
/// Tokens whose `balanceOf` reverts or returns garbage are left out.
pub async fn get_balances<C: ChainCaller>(
    multicaller: &MultiCaller<C>,
    tokens: &[Address],
    owner: Address,
    block: BlockNumberOrTag,
) -> Result<HashMap<Address, String>, MulticallError> {
    let balance_of = ERC20::balanceOfCall { owner }.abi_encode();
    let calls: Vec<Call> = tokens
        .iter()
        .map(|token| Call::new(token.to_string(), *token, balance_of.clone()))
        .collect();

    let t0 = Instant::now();
    let results = multicaller.execute(&calls, block).await?;

    info!(time = t0.elapsed().as_millis(), "aggregate balances complete");

    let mut balances: HashMap<Address, String> = HashMap::new();
    for call in &calls {
        match results.get(call.name()) {
            Some(result) if result.success => {
                match ERC20::balanceOfCall::abi_decode_returns(&result.output) {
                    Ok(balance) => {
                        balances.insert(call.target(), balance.to_string());
                    }
                    Err(err) => {
                        warn!(error = %err, "unable to decode balance for token {}", call.target());
                    }
                }
            }
            Some(_) => warn!("balanceOf reverted for token {}", call.target()),
            None => warn!("no balance returned for token {}", call.target()),
        }
    }

    Ok(balances)
}
