// Collector behaviour through a stub page source, no network.
use std::cell::RefCell;

use listing_scraper::collector::{self, harvest};
use listing_scraper::fetcher::{AcquisitionError, PageSource};
use listing_scraper::samples;

enum Stub {
    Page(String),
    Down,
}

struct StubSource {
    reply: Stub,
    seen: RefCell<Vec<String>>,
}

impl StubSource {
    fn page(html: String) -> Self {
        Self { reply: Stub::Page(html), seen: RefCell::new(Vec::new()) }
    }
    fn down() -> Self {
        Self { reply: Stub::Down, seen: RefCell::new(Vec::new()) }
    }
}

impl PageSource for StubSource {
    fn fetch(&self, url: &str) -> Result<String, AcquisitionError> {
        self.seen.borrow_mut().push(url.to_string());
        match &self.reply {
            Stub::Page(html) => Ok(html.clone()),
            Stub::Down => Err(AcquisitionError::NoListings),
        }
    }
}

fn results_page(titles: &[&str]) -> String {
    let cards: String = titles
        .iter()
        .enumerate()
        .map(|(i, t)| {
            format!(
                r#"<div data-component-type="s-search-result" data-asin="A{i}">
                     <h2><a href="/dp/A{i}"><span>{t}</span></a></h2>
                     <span class="a-price"><span class="a-offscreen">${i}.99</span></span>
                     <span class="a-icon-alt">4.{i} out of 5 stars</span>
                     <img class="s-image" src="https://img.test/{i}.jpg">
                   </div>"#
            )
        })
        .collect();
    format!("<html><body><div class=\"s-main-slot\">{cards}</div></body></html>")
}

#[test]
fn three_fragments_give_three_listings_in_order() {
    let source = StubSource::page(results_page(&["Rope Toy", "Chew Bone", "Tennis Ball"]));
    let listings = collector::collect_from(&source, "dog toys", 10);

    assert_eq!(listings.len(), 3);
    let titles: Vec<_> = listings.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(titles, ["Rope Toy", "Chew Bone", "Tennis Ball"]);
    assert_eq!(listings[1].price, "$1.99");
    assert_eq!(listings[1].rating, "4.1");
    assert_eq!(listings[2].image_url, "https://img.test/2.jpg");
    assert_eq!(listings[0].product_url, "https://www.amazon.com/dp/A0");
    assert_eq!(listings[0].asin, "A0");
}

#[test]
fn max_results_caps_real_listings() {
    let source = StubSource::page(results_page(&["A", "B", "C", "D", "E"]));
    let listings = collector::collect_from(&source, "dog toys", 2);

    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].title, "A");
    assert_eq!(listings[1].title, "B");
}

#[test]
fn request_goes_to_search_endpoint() {
    let source = StubSource::page(results_page(&["A"]));
    collector::collect_from(&source, "dog toys", 1);
    assert_eq!(source.seen.borrow().as_slice(), ["https://www.amazon.com/s?k=dog+toys"]);
}

#[test]
fn network_failure_gives_fixed_samples() {
    let first = collector::collect_from(&StubSource::down(), "dog toys", 5);
    let second = collector::collect_from(&StubSource::down(), "dog toys", 5);

    assert_eq!(first.len(), 5);
    assert_eq!(first[0].title, "Squeaky Dog Toy Set");
    assert_eq!(first, second);
    assert_eq!(first, samples::sample_listings(5));
}

#[test]
fn empty_or_foreign_body_gives_samples() {
    for body in ["", "<html><body>Sorry, we just need to make sure you're not a robot.</body></html>", "<<<not html"] {
        let h = harvest(&StubSource::page(body.to_string()), "dog toys", 4);
        assert!(h.is_fallback(), "body {body:?} should fall back");
        assert_eq!(h.into_listings(), samples::sample_listings(4));
    }
}

#[test]
fn cards_without_titles_only_gives_samples() {
    let html = r#"<div data-component-type="s-search-result"><img class="s-image" src="x.jpg"></div>"#;
    let listings = collector::collect_from(&StubSource::page(html.to_string()), "dog toys", 3);
    assert_eq!(listings, samples::sample_listings(3));
}

#[test]
fn fallback_ignores_the_query() {
    let listings = collector::collect_from(&StubSource::down(), "garden hose", 2);
    assert_eq!(listings[0].title, "Squeaky Dog Toy Set");
    assert_eq!(listings[1].title, "Cat Scratching Post");
}

#[test]
fn length_bounds_hold_for_any_cap() {
    for max in 1..=12 {
        let real = collector::collect_from(&StubSource::page(results_page(&["A", "B", "C"])), "q", max);
        assert!(!real.is_empty() && real.len() <= max);

        let fallback = collector::collect_from(&StubSource::down(), "q", max);
        assert_eq!(fallback.len(), max.min(samples::SAMPLE_COUNT));
    }
}
