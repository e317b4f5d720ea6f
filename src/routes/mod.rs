pub mod create_router;

pub use create_router::create_router;
