use reqwest::StatusCode;

/// Failure fetching a product page through the scraping proxy
#[derive(Debug)]
pub enum ExtractError {
    /// No proxy credential configured; no request was attempted.
    Configuration(String),
    Fetch(reqwest::Error),
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractError::Configuration(msg) => write!(f, "configuration error: {}", msg),
            ExtractError::Fetch(e) => write!(f, "fetch error: {}", e),
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractError::Configuration(_) => None,
            ExtractError::Fetch(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for ExtractError {
    fn from(err: reqwest::Error) -> Self {
        ExtractError::Fetch(err.without_url())
    }
}

/// Failure delivering a reply through the Telegram API
#[derive(Debug)]
pub enum SendError {
    Http(reqwest::Error),
    Api { status: StatusCode, body: String },
}

impl std::fmt::Display for SendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SendError::Http(e) => write!(f, "HTTP error: {}", e),
            SendError::Api { status, body } => write!(f, "Telegram API error {}: {}", status, body),
        }
    }
}

impl std::error::Error for SendError {}

impl From<reqwest::Error> for SendError {
    // The request URL embeds the bot token.
    fn from(err: reqwest::Error) -> Self {
        SendError::Http(err.without_url())
    }
}

/// An environment value that could not be parsed
#[derive(Debug)]
pub enum ConfigError {
    Invalid { key: &'static str, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid { key, value } => {
                write!(f, "invalid value for {}: {:?}", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
