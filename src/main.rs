use anyhow::{Context, Result};
use go_stats::cli::output::{self, create_spinner};
use go_stats::cli::Cli;
use go_stats::{HttpConfigFetcher, StatsEngine};
use tracing::{error, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging; stdout is reserved for the report
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    println!("{}", output::BANNER);

    let fetcher = HttpConfigFetcher::new(cli.fetch_config());
    let engine = match fetcher {
        Ok(fetcher) => StatsEngine::new(fetcher),
        Err(e) => fail(&e),
    };

    let spinner = create_spinner("Fetching config...");
    let result = engine.run().await;
    spinner.finish_and_clear();

    let report = match result {
        Ok(report) => report,
        Err(e) => fail(&e),
    };

    if let Some(e) = &report.decode_error {
        output::print_decode_failure(e);
    }

    print!("{}", output::render_report(&report.stats));

    Ok(())
}

fn fail(e: &go_stats::FetchError) -> ! {
    error!("{}", e);
    output::print_fetch_failure(e);
    std::process::exit(1);
}
