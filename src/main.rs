// src/main.rs

use watch::config::WatchConfig;
use watch::errors::WatchError;
use watch::{cli, logging, run};

#[tokio::main]
async fn main() {
    if let Err(err) = run_main().await {
        eprintln!("watch: error: {err}");
        std::process::exit(err.exit_code());
    }
}

async fn run_main() -> Result<(), WatchError> {
    let args = cli::parse();
    logging::init_logging(args.requested_log_level())?;
    let config = WatchConfig::try_from(args)?;
    run(config).await
}
