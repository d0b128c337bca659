use price_bot_service::extract::{
    FALLBACK_TITLE, parse_offscreen_price, parse_product, parse_whole_price,
};
use price_bot_service::types::ProductDetails;

// ===== Price string parsing =====

#[test]
fn test_offscreen_price_short_digit_strings_are_kept() {
    assert_eq!(parse_offscreen_price("1"), Some(1));
    assert_eq!(parse_offscreen_price("12"), Some(12));
    assert_eq!(parse_offscreen_price("$0.5"), Some(5));
}

#[test]
fn test_offscreen_price_drops_cents() {
    assert_eq!(parse_offscreen_price("12345"), Some(123));
    assert_eq!(parse_offscreen_price("123"), Some(1));
    assert_eq!(parse_offscreen_price("₹1,299.00"), Some(1299));
    assert_eq!(parse_offscreen_price("$ 24.99 "), Some(24));
}

#[test]
fn test_offscreen_price_without_digits() {
    assert_eq!(parse_offscreen_price(""), None);
    assert_eq!(parse_offscreen_price("Currently unavailable"), None);
}

#[test]
fn test_whole_price_strips_separators() {
    assert_eq!(parse_whole_price("1,299."), Some(1299));
    assert_eq!(parse_whole_price(" 49,999 "), Some(49999));
    assert_eq!(parse_whole_price("7"), Some(7));
    assert_eq!(parse_whole_price(""), None);
    assert_eq!(parse_whole_price("N/A"), None);
}

// ===== Page fixtures =====

const FULL_PAGE: &str = r#"
<html><body>
  <span id="productTitle" class="a-size-large">
        Widget Pro 3000, Blue
  </span>
  <div class="a-price">
    <span class="a-offscreen">₹1,499.00</span>
    <span class="a-price-whole">1,299<span class="a-price-decimal">.</span></span>
  </div>
</body></html>
"#;

const OFFSCREEN_ONLY: &str = r#"
<html><body>
  <h1><span id="productTitle">Gadget</span></h1>
  <span class="a-price"><span class="a-offscreen">$24.99</span></span>
</body></html>
"#;

#[test]
fn test_parse_full_page() {
    assert_eq!(
        parse_product(FULL_PAGE),
        ProductDetails {
            title: "Widget Pro 3000, Blue".to_string(),
            price: Some(1299),
        }
    );
}

#[test]
fn test_parse_falls_back_to_offscreen_price() {
    let details = parse_product(OFFSCREEN_ONLY);
    assert_eq!(details.title, "Gadget");
    assert_eq!(details.price, Some(24));
}

#[test]
fn test_offscreen_outside_price_block_is_ignored() {
    let html = r#"<span id="productTitle">Gadget</span><span class="a-offscreen">$24.99</span>"#;
    assert_eq!(parse_product(html).price, None);
}

#[test]
fn test_unparseable_whole_price_does_not_fall_through() {
    let html = r#"
        <span class="a-price-whole">--</span>
        <span class="a-price"><span class="a-offscreen">$24.99</span></span>
    "#;
    assert_eq!(parse_product(html).price, None);
}

#[test]
fn test_missing_title_uses_fallback() {
    let html = r#"<span class="a-price-whole">499</span>"#;
    let details = parse_product(html);
    assert_eq!(details.title, FALLBACK_TITLE);
    assert_eq!(details.price, Some(499));
}

#[test]
fn test_blank_title_uses_fallback() {
    let html = r#"<span id="productTitle">   </span>"#;
    assert_eq!(parse_product(html).title, FALLBACK_TITLE);
}

#[test]
fn test_page_without_product_markup() {
    let details = parse_product("<html><body><p>Robot check</p></body></html>");
    assert_eq!(details.title, FALLBACK_TITLE);
    assert_eq!(details.price, None);
}
