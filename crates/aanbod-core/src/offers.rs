//! Canonical catalog types produced by the extraction pipeline.
//!
//! ## Serialized shape
//!
//! A catalog serializes as a JSON array of categories, each with camelCase
//! field names:
//!
//! ```json
//! [
//!   {
//!     "categoryName": "Groente & fruit",
//!     "offers": [
//!       {
//!         "productName": "Hollandse trostomaten",
//!         "image": "https://static.ah.nl/...jpg",
//!         "deal": "2 voor €5",
//!         "date": { "start": "2024-09-04T00:00:00Z", "end": "2024-09-10T00:00:00Z" },
//!         "price": { "now": "2.49", "was": "3.19" }
//!       }
//!     ]
//!   }
//! ]
//! ```
//!
//! `image`, `date`, `price.now` and `price.was` are `null` when the source
//! card does not carry them; `deal` is an empty string in that case, never
//! null.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The promotional validity window of an offer.
///
/// Both instants are UTC midnight; `start <= end` always holds for ranges
/// produced by the date parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Current/previous price pair as displayed on an offer card.
///
/// Values are the retailer's raw display strings (e.g. `"2.49"`); no decimal
/// parsing or currency normalization happens at this layer. The two fields
/// are independent: a card may show either, both, or neither.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferPrice {
    pub now: Option<String>,
    pub was: Option<String>,
}

/// A single normalized promotional offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub product_name: String,
    pub image: Option<String>,
    /// Deal tag text, e.g. `"2 voor €5"`. Empty when the card has no deal
    /// tag.
    pub deal: String,
    /// `None` when the card's date expression was absent or unparseable.
    pub date: Option<DateRange>,
    pub price: OfferPrice,
}

/// A named group of offers as presented on the retailer's page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_name: String,
    pub offers: Vec<Offer>,
}

/// The full extracted catalog, categories in document encounter order.
pub type Catalog = Vec<Category>;
