use alloy::primitives::Bytes;
use alloy::sol_types::SolCall;

use crate::domain::Call;
use crate::evm::multicall::Multicall2;

impl From<&Call> for Multicall2::Call {
    fn from(call: &Call) -> Self {
        Multicall2::Call {
            target: call.target(),
            callData: call.input().clone(),
        }
    }
}

/// Calldata for `tryAggregate(false, calls)`, keeping the order of `calls`.
///
/// `requireSuccess` is always false so that one reverting call does not
/// revert the whole batch.
pub fn encode_calls(calls: &[Call]) -> Bytes {
    let calls: Vec<Multicall2::Call> = calls.iter().map(Multicall2::Call::from).collect();

    Multicall2::tryAggregateCall {
        requireSuccess: false,
        calls,
    }
    .abi_encode()
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, Address};

    const TOKEN: Address = address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
    const ORACLE: Address = address!("0x5f4eC3Df9cbd43714FE2740f5E3616155c5b8419");

    fn decode(payload: &[u8]) -> Multicall2::tryAggregateCall {
        Multicall2::tryAggregateCall::abi_decode(payload).unwrap()
    }

    #[test]
    fn payload_starts_with_try_aggregate_selector() {
        let payload = encode_calls(&[]);
        assert_eq!(&payload[..4], Multicall2::tryAggregateCall::SELECTOR.as_slice());
    }

    #[test]
    fn keeps_targets_and_inputs_in_order() {
        let calls = vec![
            Call::new("a", TOKEN, vec![0x70u8, 0xa0, 0x82, 0x31]),
            Call::new("b", ORACLE, vec![0xfeu8, 0xaf, 0x96, 0x8c]),
            Call::new("c", TOKEN, Vec::<u8>::new()),
        ];

        let decoded = decode(&encode_calls(&calls));

        assert!(!decoded.requireSuccess);
        assert_eq!(decoded.calls.len(), calls.len());
        for (encoded, call) in decoded.calls.iter().zip(&calls) {
            assert_eq!(encoded.target, call.target());
            assert_eq!(&encoded.callData, call.input());
        }
    }

    #[test]
    fn empty_batch_encodes_zero_calls() {
        let decoded = decode(&encode_calls(&[]));

        assert!(!decoded.requireSuccess);
        assert!(decoded.calls.is_empty());
    }
}
