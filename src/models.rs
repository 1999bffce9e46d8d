use serde::{Deserialize, Serialize};

/// One product card, scraped or taken from the sample table.
///
/// Optional fields are empty strings when the page did not carry them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(default)]
    pub asin: String,
    pub title: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub reviews: String,
    #[serde(default)]
    pub product_url: String,
}

/// Where a result set came from. Only used for logging; callers get the
/// listings either way.
#[derive(Debug)]
pub enum Harvest {
    Scraped(Vec<Listing>),
    Fallback {
        reason: crate::fetcher::AcquisitionError,
        listings: Vec<Listing>,
    },
}

impl Harvest {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Harvest::Fallback { .. })
    }

    pub fn into_listings(self) -> Vec<Listing> {
        match self {
            Harvest::Scraped(listings) => listings,
            Harvest::Fallback { listings, .. } => listings,
        }
    }
}
