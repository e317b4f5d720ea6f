pub mod call;
pub mod errors;
pub mod network;

pub use call::*;
pub use errors::*;
pub use network::*;
