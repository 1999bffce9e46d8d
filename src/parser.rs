use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::models::Listing;

const SITE_ROOT: &str = "https://www.amazon.com";
const MAX_TITLE_CHARS: usize = 100;

static CARD: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"div[data-component-type="s-search-result"]"#).unwrap());
static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h2 a span, h2 span").unwrap());
static PRICE_OFFSCREEN: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.a-price span.a-offscreen").unwrap());
static PRICE_WHOLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.a-price-whole").unwrap());
static PRICE_FRACTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.a-price-fraction").unwrap());
static RATING: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.a-icon-alt").unwrap());
static REVIEWS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.a-size-base.s-underline-text").unwrap());
static IMAGE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img.s-image").unwrap());
static LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2 a[href], a.a-link-normal[href]").unwrap());

/// Pull up to `max` listings out of a search results page, in document order.
///
/// Cards without a title are skipped; everything else is best effort.
pub fn parse_listings(html: &str, max: usize) -> Vec<Listing> {
    let doc = Html::parse_document(html);
    let cards: Vec<ElementRef> = doc.select(&CARD).collect();
    log::debug!("Found {} candidate cards", cards.len());

    cards
        .into_iter()
        .filter_map(|card| {
            let listing = parse_card(card);
            if listing.is_none() {
                log::debug!("Skipping card without a title");
            }
            listing
        })
        .take(max)
        .collect()
}

fn parse_card(card: ElementRef) -> Option<Listing> {
    let title = first_text(card, &TITLE).filter(|t| !t.is_empty())?;

    Some(Listing {
        asin: card
            .value()
            .attr("data-asin")
            .map(|a| a.trim().to_string())
            .unwrap_or_default(),
        title: truncate_title(&title),
        price: extract_price(card),
        rating: first_text(card, &RATING)
            .map(|r| normalize_rating(&r))
            .unwrap_or_default(),
        image_url: first_attr(card, &IMAGE, "src").unwrap_or_default(),
        reviews: first_text(card, &REVIEWS).unwrap_or_default(),
        product_url: first_attr(card, &LINK, "href")
            .map(|href| absolute_url(&href))
            .unwrap_or_default(),
    })
}

fn first_text(el: ElementRef, selector: &Selector) -> Option<String> {
    el.select(selector).next().map(|e| clean_text(e.text()))
}

fn first_attr(el: ElementRef, selector: &Selector, attr: &str) -> Option<String> {
    el.select(selector)
        .next()
        .and_then(|e| e.value().attr(attr))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn clean_text<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn extract_price(card: ElementRef) -> String {
    if let Some(price) = first_text(card, &PRICE_OFFSCREEN).filter(|p| !p.is_empty()) {
        return price;
    }

    let Some(whole) = first_text(card, &PRICE_WHOLE) else {
        return String::new();
    };
    let mut price: String = whole.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
    if price.is_empty() {
        return String::new();
    }
    if let Some(fraction) = first_text(card, &PRICE_FRACTION).filter(|f| !f.is_empty()) {
        if !price.ends_with('.') {
            price.push('.');
        }
        price.push_str(&fraction);
    }
    let price = price.trim_end_matches('.');
    format!("${price}")
}

// "4.5 out of 5 stars" -> "4.5"
fn normalize_rating(raw: &str) -> String {
    match raw.split_whitespace().next() {
        Some(first) if first.parse::<f32>().is_ok() => first.to_string(),
        _ => raw.to_string(),
    }
}

fn truncate_title(title: &str) -> String {
    if title.chars().count() > MAX_TITLE_CHARS {
        let cut: String = title.chars().take(MAX_TITLE_CHARS).collect();
        format!("{cut}...")
    } else {
        title.to_string()
    }
}

fn absolute_url(href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else if href.starts_with('/') {
        format!("{SITE_ROOT}{href}")
    } else {
        format!("{SITE_ROOT}/{href}")
    }
}
