//! Normalization from raw scraped fields to canonical [`Offer`]s.
//!
//! Date parsing is delegated to [`crate::dates`]; this module folds one raw
//! field bundle and its already-parsed validity range into the canonical
//! shape, resolving the per-field fallbacks.

use aanbod_core::{DateRange, Offer, OfferPrice};

use crate::types::RawOfferFields;

/// Builds a canonical [`Offer`] from one raw field bundle and its parsed
/// validity range.
///
/// Returns `None` when the product name is absent or blank; an offer cannot
/// exist without it. Every other missing field degrades, image and prices to
/// `None` and the deal text to an empty string.
#[must_use]
pub fn normalize_offer(raw: RawOfferFields, date: Option<DateRange>) -> Option<Offer> {
    let product_name = raw
        .product_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())?
        .to_string();

    Some(Offer {
        product_name,
        image: raw.image.filter(|url| !url.is_empty()),
        deal: resolve_deal(raw.deal_line, raw.deal_upper, raw.deal_lower),
        date,
        price: OfferPrice {
            now: raw.price_now.filter(|p| !p.is_empty()),
            was: raw.price_was.filter(|p| !p.is_empty()),
        },
    })
}

/// A one-line deal tag wins over the two-line variant; the two-line parts
/// join with a single space. A card without any deal tag gets an empty
/// string, never a null.
fn resolve_deal(
    line: Option<String>,
    upper: Option<String>,
    lower: Option<String>,
) -> String {
    if let Some(line) = line.filter(|text| !text.is_empty()) {
        return line;
    }

    let parts: Vec<String> = [upper, lower]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect();
    parts.join(" ")
}
