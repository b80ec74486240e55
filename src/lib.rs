//! `lens-planes` library crate.
//!
//! The binary (`planes`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the cosmology and recurrence modules are reusable (e.g., from a larger
//!   lensing pipeline or notebooks)
//! - code stays easy to navigate

pub mod app;
pub mod cli;
pub mod cosmo;
pub mod error;
pub mod math;
pub mod planes;
pub mod report;
