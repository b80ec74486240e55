//! Command-line parsing for the lens plane factor tool.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! cosmology/recurrence code.

use clap::Parser;

/// Top-level CLI.
///
/// The tool takes nothing but a list of redshifts; the cosmology is fixed
/// (H0 = 70 km/s/Mpc, Om0 = 0.3) to match the lensing code it feeds.
#[derive(Debug, Parser)]
#[command(
    name = "planes",
    version,
    about = "Multi-plane lensing scale factors from a list of redshifts"
)]
pub struct Cli {
    /// Lens plane redshifts, e.g. `planes 0.3 0.6 0.9 1.2`.
    ///
    /// Factors are reported for the third redshift onward; the first two
    /// only seed the distance recurrence.
    #[arg(required = true, value_name = "Z", allow_negative_numbers = true)]
    pub redshifts: Vec<f64>,
}
