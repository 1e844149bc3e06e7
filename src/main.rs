//! ads-board server: loads `.env`, reads config, creates the ads table if absent, serves HTTP.

use ads_board::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ads_board=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    ads_board::run(config).await
}
