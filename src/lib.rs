pub mod configuration;
pub mod domain;
pub mod error;
pub mod generator;
pub mod store;
pub mod telemetry;
