use reqwest::Url;

use crate::fetcher::{AcquisitionError, HttpFetcher, PageSource};
use crate::models::{Harvest, Listing};
use crate::parser;
use crate::samples;

pub const SEARCH_ENDPOINT: &str = "https://www.amazon.com/s";

/// Search page URL for `query`, with the query form-encoded as `k`.
pub fn search_url(query: &str) -> Result<String, AcquisitionError> {
    Url::parse_with_params(SEARCH_ENDPOINT, &[("k", query)])
        .map(String::from)
        .map_err(|e| AcquisitionError::InvalidUrl(e.to_string()))
}

/// Fetch and parse, keeping track of whether the result is real or sample data.
pub fn harvest(source: &impl PageSource, query: &str, max_results: usize) -> Harvest {
    let max_results = max_results.max(1);

    match scrape(source, query, max_results) {
        Ok(listings) => Harvest::Scraped(listings),
        Err(reason) => Harvest::Fallback {
            reason,
            listings: samples::sample_listings(max_results),
        },
    }
}

fn scrape(
    source: &impl PageSource,
    query: &str,
    max_results: usize,
) -> Result<Vec<Listing>, AcquisitionError> {
    let url = search_url(query)?;
    log::info!("Searching for \"{query}\": {url}");

    let html = source.fetch(&url)?;
    let listings = parser::parse_listings(&html, max_results);
    if listings.is_empty() {
        return Err(AcquisitionError::NoListings);
    }
    Ok(listings)
}

/// Listings for `query`, never empty and never an error.
pub fn collect_from(source: &impl PageSource, query: &str, max_results: usize) -> Vec<Listing> {
    let harvest = harvest(source, query, max_results);
    match &harvest {
        Harvest::Scraped(listings) => log::info!("Scraped {} listings", listings.len()),
        Harvest::Fallback { reason, listings } => log::warn!(
            "Scraping failed ({reason}); using {} sample listings",
            listings.len()
        ),
    }
    harvest.into_listings()
}

/// Same as [`collect_from`], over the network.
pub fn collect(query: &str, max_results: usize) -> Vec<Listing> {
    collect_with(HttpFetcher::new(), query, max_results)
}

/// Network collection with an optional debug dump of the fetched page.
pub fn collect_with(
    fetcher: Result<HttpFetcher, AcquisitionError>,
    query: &str,
    max_results: usize,
) -> Vec<Listing> {
    match fetcher {
        Ok(fetcher) => collect_from(&fetcher, query, max_results),
        Err(reason) => {
            let listings = samples::sample_listings(max_results.max(1));
            log::warn!(
                "Could not build HTTP client ({reason}); using {} sample listings",
                listings.len()
            );
            listings
        }
    }
}
