//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use palsel_core::options::Options;

/// Select the palindromic integers from a list.
///
/// Numbers come from positional arguments, from `--input`, or from stdin
/// when neither is given. Separate them with whitespace or commas. Options
/// go before the numbers.
#[derive(Parser, Debug)]
#[command(name = "palsel", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Integers to filter.
    #[arg(allow_negative_numbers = true, allow_hyphen_values = true)]
    pub numbers: Vec<String>,

    /// Read integers from this file instead of the arguments.
    #[arg(short, long, conflicts_with = "numbers")]
    pub input: Option<PathBuf>,

    /// Selector to use: seq, par, or all.
    #[arg(long, default_value = "all", env = "PALSEL_ALGO")]
    pub algo: String,

    /// Worker threads for the concurrent selector (0 = one per core).
    #[arg(long, default_value = "0", env = "PALSEL_THREADS")]
    pub threads: usize,

    /// Inputs shorter than this skip the worker pool (0 = default).
    #[arg(long, default_value = "0")]
    pub parallel_threshold: usize,

    /// Sort concurrent output ascending.
    #[arg(long)]
    pub sort: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show detailed counts.
    #[arg(short, long)]
    pub details: bool,

    /// Quiet mode (only output the numbers).
    #[arg(short, long)]
    pub quiet: bool,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Selection options derived from the flags.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            threads: self.threads,
            parallel_threshold: self.parallel_threshold,
            sort_output: self.sort,
        }
        .normalize()
    }
}
