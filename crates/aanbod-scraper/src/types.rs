//! Transient extraction types produced by the retailer adapters.
//!
//! These bundles hold field values as they appear in the page markup, with
//! every field optional and nothing parsed yet. They live only between an
//! adapter invocation and catalog assembly; the canonical shapes are in
//! [`aanbod_core::offers`].

/// Raw per-offer field bundle as scraped from one offer card.
#[derive(Debug, Clone, Default)]
pub struct RawOfferFields {
    /// Essential: an offer without a product name is dropped downstream.
    pub product_name: Option<String>,
    /// Raw validity expression, e.g. `"wo 4 sep t/m di 10 sep"`.
    pub date_expr: Option<String>,
    /// Single-line deal tag text, e.g. `"2 voor €5"`.
    pub deal_line: Option<String>,
    /// Upper half of a two-line deal tag, e.g. `"2 voor"`.
    pub deal_upper: Option<String>,
    /// Lower half of a two-line deal tag, e.g. `"€5"`.
    pub deal_lower: Option<String>,
    pub price_now: Option<String>,
    pub price_was: Option<String>,
    pub image: Option<String>,
}

/// One page section: a category heading plus its offer cards, in document
/// order.
#[derive(Debug, Clone, Default)]
pub struct RawCategory {
    pub category_name: String,
    pub offers: Vec<RawOfferFields>,
}
