use std::future::Future;

use axum::http::StatusCode;
use log::{debug, error, info};
use reqwest::Client;

use crate::config::Config;
use crate::error::{ExtractError, SendError};
use crate::scraper_api::ScraperApi;
use crate::send_message::TelegramClient;
use crate::types::{ProductDetails, Reply, TelegramWebhook};

pub const WELCOME_TEXT: &str = "Welcome! Send me an Amazon link to get its price.";
pub const FETCH_FAILED_TEXT: &str = "❌ Sorry, I could not fetch the product details.";
pub const INVALID_LINK_TEXT: &str = "Please send a valid Amazon link.";
pub const TOKEN_MISSING_BODY: &str = "Telegram Token not set.";
pub const OK_BODY: &str = "OK";

/// Something that can turn a product link into product details.
pub trait ProductSource: Send + Sync {
    fn fetch_product(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<ProductDetails, ExtractError>> + Send;
}

/// Something that can deliver a reply to a chat.
pub trait ReplySink: Send + Sync {
    fn send_message(&self, reply: &Reply) -> impl Future<Output = Result<(), SendError>> + Send;
}

/// What the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Start,
    ProductLink(&'a str),
    Unknown,
}

impl<'a> Command<'a> {
    pub fn parse(text: &'a str) -> Self {
        if text == "/start" {
            Command::Start
        } else if text.contains("amazon") || text.contains("amzn") {
            Command::ProductLink(text)
        } else {
            Command::Unknown
        }
    }
}

pub fn product_found_text(title: &str, price: u64) -> String {
    format!(
        "✅ **Product Found!**\n\n**Product:** `{}`\n**Current Price:** `₹{}`",
        title, price
    )
}

/// Webhook handler. Without a reply sink (no bot token) every update is
/// rejected with a 500.
pub struct Bot<P, S> {
    products: P,
    replies: Option<S>,
}

impl Bot<ScraperApi, TelegramClient> {
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self::new(
            ScraperApi::new(client.clone(), config),
            TelegramClient::from_config(client, config),
        ))
    }
}

impl<P: ProductSource, S: ReplySink> Bot<P, S> {
    pub fn new(products: P, replies: Option<S>) -> Self {
        Self { products, replies }
    }

    pub async fn handle(&self, update: &TelegramWebhook) -> (StatusCode, &'static str) {
        let Some(replies) = &self.replies else {
            error!("TELEGRAM_TOKEN not set; rejecting update");
            return (StatusCode::INTERNAL_SERVER_ERROR, TOKEN_MISSING_BODY);
        };

        let Some(message) = &update.message else {
            debug!("Ignoring update without a message");
            return (StatusCode::OK, OK_BODY);
        };
        let Some(text) = message.text.as_deref() else {
            debug!("Ignoring non-text message in chat {}", message.chat.id);
            return (StatusCode::OK, OK_BODY);
        };

        let reply = Reply::markdown(message.chat.id, self.reply_text(text).await);

        // Telegram redelivers on anything but 200, which would only repeat
        // the failed send; log it and acknowledge.
        if let Err(e) = replies.send_message(&reply).await {
            error!("Failed to send reply to chat {}: {}", reply.chat_id, e);
        }

        (StatusCode::OK, OK_BODY)
    }

    pub async fn reply_text(&self, text: &str) -> String {
        match Command::parse(text) {
            Command::Start => {
                info!("Handling /start");
                WELCOME_TEXT.to_string()
            }
            Command::ProductLink(url) => {
                info!("Handling product link");
                match self.products.fetch_product(url).await {
                    Ok(ProductDetails {
                        title,
                        price: Some(price),
                    }) => product_found_text(&title, price),
                    Ok(_) => {
                        info!("No price found for {}", url);
                        FETCH_FAILED_TEXT.to_string()
                    }
                    // Already logged by the product source.
                    Err(_) => FETCH_FAILED_TEXT.to_string(),
                }
            }
            Command::Unknown => INVALID_LINK_TEXT.to_string(),
        }
    }
}
