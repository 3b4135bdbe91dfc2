pub mod config;
pub mod error;
pub mod receipts;
pub mod telemetry;
