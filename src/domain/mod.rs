//! Domain layer: pure models, validation errors, and the issue-tracker port.

pub mod errors;
pub mod models;
pub mod ports;
