//! Action input loading.

pub mod loader;

pub use loader::InputLoader;
