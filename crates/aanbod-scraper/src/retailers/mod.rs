//! Retailer-specific document adapters.
//!
//! Each adapter reads one retailer's rendered offers page into the shared
//! [`RawCategory`] shape. Selectors, date notation and field availability
//! are the only things that differ per retailer; date parsing and
//! normalization are shared downstream.

mod ah;
mod dirk;
mod jumbo;

use std::str::FromStr;

use scraper::{ElementRef, Html, Selector};

use crate::error::ScrapeError;
use crate::types::RawCategory;

/// The closed set of supported retailers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retailer {
    Ah,
    Dirk,
    Jumbo,
}

/// How a retailer writes offer validity on its cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DateNotation {
    /// An explicit `"<start> t/m <end>"` range.
    ExplicitRange,
    /// A single end date; the window length comes from configuration.
    EndDateOnly,
}

impl Retailer {
    /// Stable lowercase identifier, also the CLI spelling.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Retailer::Ah => "ah",
            Retailer::Dirk => "dirk",
            Retailer::Jumbo => "jumbo",
        }
    }

    /// The retailer's public offers page.
    ///
    /// AH and Jumbo only render their offer grids client-side; fetching
    /// these URLs directly yields a shell page, so their snapshots normally
    /// come from a file captured after rendering.
    #[must_use]
    pub fn offers_url(self) -> &'static str {
        match self {
            Retailer::Ah => "https://www.ah.nl/bonus",
            Retailer::Dirk => "https://www.dirk.nl/aanbiedingen",
            Retailer::Jumbo => "https://www.jumbo.com/aanbiedingen/nu",
        }
    }

    pub(crate) fn date_notation(self) -> DateNotation {
        match self {
            Retailer::Ah | Retailer::Jumbo => DateNotation::ExplicitRange,
            Retailer::Dirk => DateNotation::EndDateOnly,
        }
    }

    /// Extracts raw categories from a rendered offers-page snapshot.
    pub(crate) fn extract(self, doc: &Html) -> Vec<RawCategory> {
        match self {
            Retailer::Ah => ah::extract(doc),
            Retailer::Dirk => dirk::extract(doc),
            Retailer::Jumbo => jumbo::extract(doc),
        }
    }
}

impl FromStr for Retailer {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ah" => Ok(Retailer::Ah),
            "dirk" => Ok(Retailer::Dirk),
            "jumbo" => Ok(Retailer::Jumbo),
            _ => Err(ScrapeError::UnknownRetailer {
                name: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Retailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

// ---------------------------------------------------------------------------
// Shared selector helpers
// ---------------------------------------------------------------------------

/// Parses a compile-time-constant CSS selector.
pub(in crate::retailers) fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

/// Trims `raw` and lifts it into `Option`, mapping whitespace-only text to
/// `None`.
pub(in crate::retailers) fn clean(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Text content of the first element under `scope` matching `sel`.
pub(in crate::retailers) fn text_of(scope: ElementRef<'_>, sel: &Selector) -> Option<String> {
    scope
        .select(sel)
        .next()
        .and_then(|el| clean(&el.text().collect::<String>()))
}

/// Attribute value of the first element under `scope` matching `sel`.
pub(in crate::retailers) fn attr_of(
    scope: ElementRef<'_>,
    sel: &Selector,
    attr: &str,
) -> Option<String> {
    scope
        .select(sel)
        .next()
        .and_then(|el| el.value().attr(attr))
        .and_then(clean)
}

/// Image URL of the first `<img>` under `scope` matching `sel`.
///
/// The lazy-load placeholder attribute wins over `src`: before
/// viewport-triggered loading the direct `src` is a transparent stub, while
/// `data-src` already carries the real URL.
pub(in crate::retailers) fn image_of(scope: ElementRef<'_>, sel: &Selector) -> Option<String> {
    let img = scope.select(sel).next()?;
    img.value()
        .attr("data-src")
        .and_then(clean)
        .or_else(|| img.value().attr("src").and_then(clean))
}
