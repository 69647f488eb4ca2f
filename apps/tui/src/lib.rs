// Export our modules for use in binaries and tests

pub mod app;
pub mod chart;
pub mod cli;
pub mod config;
pub mod domain;
pub mod event;
pub mod export;
pub mod ingest;
pub mod terminal;
pub mod ui;

pub use domain::{CanonicalRecord, TriggerLevel};
