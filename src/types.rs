use serde::{Deserialize, Serialize};

/// Inbound Telegram update. Anything other than a plain message (edits,
/// callback queries, channel posts) leaves `message` empty.
#[derive(Debug, Default, Deserialize)]
pub struct TelegramWebhook {
    pub message: Option<TelegramMessage>,
}

#[derive(Debug, Deserialize)]
pub struct TelegramMessage {
    pub chat: TelegramChat,
    pub text: Option<String>, // Text might be missing (e.g., photo messages)
}

#[derive(Debug, Deserialize)]
pub struct TelegramChat {
    pub id: i64,
}

/// Outbound `sendMessage` body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    pub chat_id: i64,
    pub text: String,
    pub parse_mode: ParseMode,
}

impl Reply {
    pub fn markdown(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            parse_mode: ParseMode::Markdown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParseMode {
    Markdown,
}

/// Best-effort details scraped from a product page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetails {
    pub title: String,
    /// Whole currency units, cents dropped.
    pub price: Option<u64>,
}
