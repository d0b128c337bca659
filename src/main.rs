use std::sync::Arc;

use log::{info, warn};

use price_bot_service::bot::Bot;
use price_bot_service::config::Config;
use price_bot_service::router;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    if config.scraper_api_key.is_none() {
        warn!("SCRAPER_API_KEY not set; product lookups will fail");
    }
    if config.telegram_token.is_none() {
        warn!("TELEGRAM_TOKEN not set; webhook calls will be rejected");
    }

    let bot = Arc::new(Bot::from_config(&config)?);
    let app = router(bot);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
