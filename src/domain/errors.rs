use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum EvmError {
    #[error("Network with id {0} is not supported")]
    UnsupportedNetwork(u64),
}

/// Fatal conditions of a multicall. A sub-call that reverts is not one of
/// them: it comes back as `CallResult { success: false, .. }`.
#[derive(Debug, Clone, Error)]
pub enum MulticallError {
    #[error("unable to reach chain node: {0}")]
    Connection(String),

    #[error("no multicall contract known for chain id {0}")]
    UnsupportedChain(u64),

    #[error("unable to encode call: {0}")]
    Encoding(String),

    #[error("simulated aggregate call failed: {0}")]
    Simulation(String),

    #[error("unable to decode aggregate response: {0}")]
    Decoding(String),
}
