// Shared kernel: configuration, error types and logging used by every module

pub mod config; // Endpoint and client settings
pub mod errors; // Shared error types
pub mod utils; // Shared utilities

pub use config::DcnetConfig;
