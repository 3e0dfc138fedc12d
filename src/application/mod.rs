//! Application layer: input validation and the action flow.

pub mod runner;
pub mod validation;

pub use runner::{run_action, RunOutcome};
pub use validation::InputValidator;
