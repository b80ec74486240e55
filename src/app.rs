//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - evaluates distances under the fixed cosmology
//! - runs the plane factor recurrence
//! - prints the tab-separated factor line

use clap::Parser;

use crate::cli::Cli;
use crate::cosmo::FlatLambdaCdm;
use crate::error::AppError;

/// Entry point for the `planes` binary.
pub fn run() -> Result<(), AppError> {
    env_logger::init();

    let cli = Cli::parse();
    let cosmo = FlatLambdaCdm::standard();

    let factors = crate::planes::scale_factors(&cosmo, &cli.redshifts)?;
    log::debug!(
        "{} redshifts -> {} scale factors",
        cli.redshifts.len(),
        factors.len()
    );

    println!("{}", crate::report::format_factor_line(&factors));
    Ok(())
}
