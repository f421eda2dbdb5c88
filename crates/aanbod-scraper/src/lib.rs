//! Offer extraction for Dutch grocery retailers.
//!
//! Turns a rendered offers-page snapshot into a canonical
//! [`aanbod_core::Catalog`]: retailer adapters read the page structure into
//! raw field bundles, the date parser resolves Dutch validity expressions
//! into UTC instants, and the normalizer folds both into [`aanbod_core::Offer`]s.
//!
//! The pipeline itself ([`extract_catalog`]) is pure and synchronous: it
//! takes the snapshot HTML and the reference instant as explicit inputs and
//! performs no I/O. Downloading snapshots is the [`SnapshotClient`]'s job.

pub mod client;
pub mod dates;
pub mod error;
pub mod normalize;
pub mod retailers;
pub mod types;

mod catalog;
mod months;
mod retry;

use chrono::{DateTime, Datelike, Utc};
use scraper::Html;

pub use client::SnapshotClient;
pub use error::ScrapeError;
pub use normalize::normalize_offer;
pub use retailers::Retailer;
pub use types::{RawCategory, RawOfferFields};

/// Runs the full extraction pipeline over one page snapshot.
///
/// `reference` supplies the year used to resolve date expressions (retailer
/// pages never print one); pass the capture instant of the snapshot, not a
/// value read inside this crate, so the transform stays deterministic.
/// `window_days` is the configured offer-window length for retailers whose
/// cards carry only an end date; it is ignored for the others.
///
/// Per-offer failures never abort the pipeline: an unparseable date becomes
/// `date: None`, a nameless card is skipped, and a category left without
/// offers is dropped from the catalog.
///
/// # Errors
///
/// Returns [`ScrapeError::EmptySnapshot`] when `html` is blank, the only
/// condition fatal to the transform.
pub fn extract_catalog(
    retailer: Retailer,
    html: &str,
    reference: DateTime<Utc>,
    window_days: u32,
) -> Result<aanbod_core::Catalog, ScrapeError> {
    if html.trim().is_empty() {
        return Err(ScrapeError::EmptySnapshot {
            retailer: retailer.slug(),
        });
    }

    let doc = Html::parse_document(html);
    let raw_categories = retailer.extract(&doc);
    tracing::debug!(
        retailer = retailer.slug(),
        sections = raw_categories.len(),
        "extracted raw categories from snapshot"
    );

    Ok(catalog::assemble(
        raw_categories,
        retailer.date_notation(),
        reference.year(),
        window_days,
    ))
}
