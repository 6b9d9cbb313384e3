use clap::Parser;
use collatz_lab::utils::{logger, validation::Validate};
use collatz_lab::{CliConfig, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    match config.command {
        Command::Sequence { n } => {
            let sequence = collatz_lab::sequence(n)?;
            tracing::info!("sequence for {} has {} elements", n, sequence.len());
            println!("{}", serde_json::to_string(&sequence)?);
        }
        Command::Search { bound, workers } => {
            let workers = workers.unwrap_or_else(num_cpus::get);
            tracing::info!("searching 1..={} with {} workers", bound, workers);

            let started = std::time::Instant::now();
            let (result, reports) = collatz_lab::search_parallel(bound, workers).await?;

            for report in &reports {
                tracing::info!(
                    "worker {}: {} candidates, local best {} ({} elements), {:?}",
                    report.worker_id,
                    report.numbers_processed,
                    report.best.start,
                    report.best.length,
                    report.elapsed
                );
            }
            tracing::info!("search finished in {:?}", started.elapsed());

            println!(
                "longest sequence under {} starts at {} ({} elements)",
                bound, result.start, result.length
            );
        }
        Command::Serve { port } => {
            collatz_lab::server::serve(port).await?;
        }
    }

    Ok(())
}
