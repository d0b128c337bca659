use std::time::Duration;

use log::{debug, error};
use reqwest::Client;

use crate::bot::ProductSource;
use crate::config::Config;
use crate::error::ExtractError;
use crate::extract::parse_product;
use crate::types::ProductDetails;

/// Fetches product pages through ScraperAPI, which renders the page and
/// deals with bot detection on our behalf.
#[derive(Clone)]
pub struct ScraperApi {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl ScraperApi {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.scraper_api_url.clone(),
            api_key: config.scraper_api_key.clone(),
            timeout: config.scraper_timeout,
        }
    }

    /// Proxy URL for `target`, or `None` without a configured key.
    pub fn proxy_url(&self, target: &str) -> Option<String> {
        let key = self.api_key.as_deref()?;
        Some(format!(
            "{}/?api_key={}&url={}",
            self.base_url,
            urlencoding::encode(key),
            urlencoding::encode(target)
        ))
    }

    pub async fn fetch_product(&self, url: &str) -> Result<ProductDetails, ExtractError> {
        let Some(proxy_url) = self.proxy_url(url) else {
            error!("SCRAPER_API_KEY not set; cannot fetch {}", url);
            return Err(ExtractError::Configuration(
                "SCRAPER_API_KEY not set".to_string(),
            ));
        };

        // Converting drops the proxy URL (and with it the key) from the error.
        let html = self
            .fetch_html(&proxy_url)
            .await
            .map_err(ExtractError::from)
            .inspect_err(|e| error!("Error calling ScraperAPI for {}: {}", url, e))?;

        let details = parse_product(&html);
        debug!("Parsed {}: {:?}", url, details);
        Ok(details)
    }

    async fn fetch_html(&self, proxy_url: &str) -> Result<String, reqwest::Error> {
        self.client
            .get(proxy_url)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }
}

impl ProductSource for ScraperApi {
    async fn fetch_product(&self, url: &str) -> Result<ProductDetails, ExtractError> {
        ScraperApi::fetch_product(self, url).await
    }
}
