//! Telegram bot that answers Amazon product links with the current price,
//! scraped through ScraperAPI.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{Router, routing::get, routing::post};
use log::warn;

pub mod bot;
pub mod config;
pub mod error;
pub mod extract;
pub mod scraper_api;
pub mod send_message;
pub mod types;

use bot::{Bot, ProductSource, ReplySink};
use types::TelegramWebhook;

pub fn router<P, S>(bot: Arc<Bot<P, S>>) -> Router
where
    P: ProductSource + 'static,
    S: ReplySink + 'static,
{
    Router::new()
        .route("/", get(|| async { "OK" }))
        .route("/webhook", post(webhook_handler::<P, S>))
        .with_state(bot)
}

// The body is decoded by hand: a JSON rejection would be a 4xx, and Telegram
// keeps redelivering anything that is not a 200.
async fn webhook_handler<P, S>(
    State(bot): State<Arc<Bot<P, S>>>,
    body: Bytes,
) -> (StatusCode, &'static str)
where
    P: ProductSource + 'static,
    S: ReplySink + 'static,
{
    let update = serde_json::from_slice::<TelegramWebhook>(&body).unwrap_or_else(|e| {
        warn!("Ignoring undecodable update: {}", e);
        TelegramWebhook::default()
    });
    bot.handle(&update).await
}
