//! Batches read-only contract calls into one simulated Multicall2
//! `tryAggregate` call and maps the results back to call names.

pub mod api;
pub mod app_error;
pub mod app_state;
pub mod args;
pub mod config;
pub mod domain;
pub mod evm;
pub mod infra;
pub mod routes;
pub mod services;

pub use domain::{Call, CallResult, MulticallError, ResultSet};
pub use infra::ChainCaller;
pub use services::multicaller::MultiCaller;
