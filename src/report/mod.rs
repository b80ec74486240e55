//! Terminal output formatting for the factor line.

pub mod format;

pub use format::*;
