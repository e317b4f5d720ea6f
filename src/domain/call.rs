use std::collections::HashMap;

use alloy::primitives::{Address, Bytes};
use serde::{Deserialize, Serialize};

use crate::domain::errors::MulticallError;

/// A named read-only call against `target`, carrying ABI encoded calldata.
///
/// The name is only used to key the result; results are matched back to
/// calls by position, so names should be unique within a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    name: String,
    target: Address,
    input: Bytes,
}

impl Call {
    pub fn new(name: impl Into<String>, target: Address, input: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            target,
            input: input.into(),
        }
    }

    /// Builds a call from hex strings, e.g. as received over HTTP.
    pub fn from_hex(
        name: impl Into<String>,
        target: &str,
        input: &str,
    ) -> Result<Self, MulticallError> {
        let name = name.into();

        let target = target.parse::<Address>().map_err(|err| {
            MulticallError::Encoding(format!("call {name}: invalid target {target}: {err}"))
        })?;

        let input = input.parse::<Bytes>().map_err(|err| {
            MulticallError::Encoding(format!("call {name}: invalid calldata: {err}"))
        })?;

        Ok(Self { name, target, input })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> Address {
        self.target
    }

    pub fn input(&self) -> &Bytes {
        &self.input
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallResult {
    pub success: bool,
    #[serde(rename = "returnData")]
    pub output: Bytes,
}

/// Results keyed by call name. On a name collision the later call wins.
pub type ResultSet = HashMap<String, CallResult>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn from_hex_parses_target_and_calldata() {
        let call = Call::from_hex(
            "decimals",
            "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
            "0x313ce567",
        )
        .unwrap();

        assert_eq!(call.name(), "decimals");
        assert_eq!(
            call.target(),
            address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2")
        );
        assert_eq!(&call.input()[..], &[0x31, 0x3c, 0xe5, 0x67]);
    }

    #[test]
    fn from_hex_rejects_short_address() {
        let err = Call::from_hex("bad", "0x1234", "0x").unwrap_err();
        assert!(matches!(err, MulticallError::Encoding(_)));
    }

    #[test]
    fn from_hex_rejects_odd_calldata() {
        let err = Call::from_hex(
            "bad",
            "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
            "0x313ce56",
        )
        .unwrap_err();
        assert!(matches!(err, MulticallError::Encoding(_)));
    }

    #[test]
    fn call_result_serializes_with_return_data_key() {
        let result = CallResult {
            success: false,
            output: Bytes::from_static(&[0xde, 0xad]),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["returnData"], "0xdead");
    }
}
