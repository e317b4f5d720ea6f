pub mod balances;
pub mod block;
pub mod chain;
pub mod multicall;
