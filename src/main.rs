use clap::Parser;
use nexrad_locator::cli::{run, Cli};
use nexrad_locator::error::{LocatorError, Result};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| LocatorError::Logging(e.to_string()))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match init_logging(cli.verbose) {
        Ok(()) => run(cli).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
