use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::types::ProductDetails;

/// Title used when the page has no usable `#productTitle`
pub const FALLBACK_TITLE: &str = "Product";

static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("#productTitle"));
static PRICE_WHOLE: LazyLock<Selector> = LazyLock::new(|| selector("span.a-price-whole"));
static PRICE_OFFSCREEN: LazyLock<Selector> =
    LazyLock::new(|| selector(".a-price .a-offscreen"));

fn selector(css: &str) -> Selector {
    // Only called with the literals above.
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e}"))
}

/// Parse a product page. Missing fields are defaulted, never an error.
pub fn parse_product(html: &str) -> ProductDetails {
    let doc = Html::parse_document(html);
    ProductDetails {
        title: extract_title(&doc),
        price: extract_price(&doc),
    }
}

pub fn extract_title(doc: &Html) -> String {
    doc.select(&TITLE)
        .next()
        .map(stripped_text)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| FALLBACK_TITLE.to_string())
}

/// Two-tier price lookup.
///
/// The whole-number span wins when present, even if its text does not
/// parse. Only when it is missing entirely is the offscreen price consulted.
pub fn extract_price(doc: &Html) -> Option<u64> {
    if let Some(whole) = doc.select(&PRICE_WHOLE).next() {
        return parse_whole_price(&stripped_text(whole));
    }
    let offscreen = doc.select(&PRICE_OFFSCREEN).next()?;
    parse_offscreen_price(&offscreen.text().collect::<String>())
}

/// `"1,299."` -> `1299`
pub fn parse_whole_price(text: &str) -> Option<u64> {
    text.trim()
        .chars()
        .filter(|c| *c != ',' && *c != '.')
        .collect::<String>()
        .parse()
        .ok()
}

/// Keep the digits of a composite price string and drop the trailing two
/// (cents), unless there are two digits or fewer: `"₹1,234.56"` -> `1234`,
/// `"$0.5"` -> `5`.
pub fn parse_offscreen_price(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    let whole = if digits.len() > 2 {
        &digits[..digits.len() - 2]
    } else {
        &digits[..]
    };
    whole.parse().ok()
}

/// Text of every descendant node, each trimmed, concatenated.
fn stripped_text(el: ElementRef<'_>) -> String {
    el.text().map(str::trim).collect()
}
