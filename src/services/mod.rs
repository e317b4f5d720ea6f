pub mod balances;
pub mod decoder;
pub mod encoder;
pub mod multicaller;
