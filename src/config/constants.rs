/// Upper bound on calls accepted in one HTTP multicall request
pub const DEFAULT_MAX_CALLS_PER_BATCH: usize = 500;

/// Gas price set on the simulated aggregate call
pub const SIMULATION_GAS_PRICE: u128 = 0;
