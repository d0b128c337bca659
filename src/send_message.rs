use std::time::Duration;

use log::{error, info};
use reqwest::Client;

use crate::bot::ReplySink;
use crate::config::Config;
use crate::error::SendError;
use crate::types::Reply;

/// Delivers replies through the Bot API `sendMessage` method.
#[derive(Clone)]
pub struct TelegramClient {
    client: Client,
    url: String,
    timeout: Duration,
}

impl TelegramClient {
    /// `None` when no bot token is configured.
    pub fn from_config(client: Client, config: &Config) -> Option<Self> {
        let token = config.telegram_token.as_deref()?;
        Some(Self {
            client,
            url: format!("{}/bot{}/sendMessage", config.telegram_api_url, token),
            timeout: config.telegram_timeout,
        })
    }

    pub async fn send_message(&self, reply: &Reply) -> Result<(), SendError> {
        let res = self
            .client
            .post(&self.url)
            .timeout(self.timeout)
            .json(reply)
            .send()
            .await?;

        if res.status().is_success() {
            info!("Reply sent to chat {}.", reply.chat_id);
            return Ok(());
        }

        let status = res.status();
        let body = res.text().await.unwrap_or_else(|_| "Unknown error".into());
        error!("Telegram API error {}: {}", status, body);
        Err(SendError::Api { status, body })
    }
}

impl ReplySink for TelegramClient {
    async fn send_message(&self, reply: &Reply) -> Result<(), SendError> {
        TelegramClient::send_message(self, reply).await
    }
}
