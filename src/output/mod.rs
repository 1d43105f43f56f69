//! Operator-facing output: console rendering and progress.

pub mod console;
pub mod progress;

pub use console::RunSummary;
