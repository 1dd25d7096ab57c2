pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod loader;
pub mod reporting;
pub mod scan;
pub mod types;
