use clap::{Parser, Subcommand};

use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_range, Validate};

#[derive(Debug, Clone, Parser)]
#[command(name = "collatz-lab")]
#[command(about = "Compute Collatz sequences, search for the longest one, or serve them over HTTP")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the Collatz sequence for a starting value
    Sequence {
        /// Positive starting value
        n: u64,
    },
    /// Find the starting value with the longest sequence under a bound
    Search {
        #[arg(long, default_value = "1000000", help = "Inclusive upper bound for candidates")]
        bound: u64,

        #[arg(long, help = "Worker threads; defaults to available CPUs")]
        workers: Option<usize>,
    },
    /// Run the HTTP service
    Serve {
        #[arg(long, default_value = "9090")]
        port: u16,
    },
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Sequence { n } => validate_positive_number("n", *n, 1),
            Command::Search { bound, workers } => {
                validate_positive_number("bound", *bound, 1)?;
                if let Some(workers) = workers {
                    validate_range("workers", *workers, 1, 512)?;
                }
                Ok(())
            }
            Command::Serve { .. } => Ok(()),
        }
    }
}
