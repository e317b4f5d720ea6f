use alloy::sol_types::SolCall;
use tracing::warn;

use crate::domain::{Call, CallResult, MulticallError, ResultSet};
use crate::evm::multicall::Multicall2;

impl From<Multicall2::Result> for CallResult {
    fn from(result: Multicall2::Result) -> Self {
        CallResult {
            success: result.success,
            output: result.returnData,
        }
    }
}

/// Decodes the return data of `tryAggregate` into per-call results.
pub fn decode_results(raw: &[u8]) -> Result<Vec<CallResult>, MulticallError> {
    let results = Multicall2::tryAggregateCall::abi_decode_returns(raw)
        .map_err(|err| MulticallError::Decoding(err.to_string()))?;

    Ok(results.into_iter().map(CallResult::from).collect())
}

/// Binds `results[i]` to the name of `calls[i]`.
///
/// The aggregator returns results positionally, so this is the only link
/// between a result and its call. When the lengths differ only the common
/// prefix is mapped; names past it are absent from the set.
pub fn map_results(calls: &[Call], results: Vec<CallResult>) -> ResultSet {
    if results.len() != calls.len() {
        // has been seen with extra empty entries at the head of the response
        warn!(
            calls = calls.len(),
            results = results.len(),
            "aggregate response length does not match the batch"
        );
    }

    calls
        .iter()
        .zip(results)
        .map(|(call, result)| (call.name().to_string(), result))
        .collect()
}

pub fn decode_response(calls: &[Call], raw: &[u8]) -> Result<ResultSet, MulticallError> {
    let results = decode_results(raw)?;
    Ok(map_results(calls, results))
}
