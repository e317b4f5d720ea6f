pub mod erc20;
pub mod multicall;
