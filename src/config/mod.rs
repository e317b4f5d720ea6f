pub mod constants;
pub mod multicall_address;
