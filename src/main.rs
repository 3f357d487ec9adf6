//! swagger-ts-gen CLI binary

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use swagger_ts_gen::cli::CliApp;

const DEFAULT_LOG_FILTER: &str = "swagger_ts_gen=info,swagger_ts_generator=info";

#[tokio::main]
async fn main() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let matches = CliApp::app().get_matches();
    CliApp::run(&matches).await
}
