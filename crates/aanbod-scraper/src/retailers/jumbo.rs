//! Jumbo offers-page adapter.
//!
//! Jumbo prints validity per card (`.content .subtitle`, weekday-prefixed
//! range) and uses two deal-tag layouts: a single span, or an upper/lower
//! span pair. The single-span variant is matched with `:not(...)` so the
//! two-line spans don't shadow it; which variant wins is the normalizer's
//! call, the adapter just reports both.

use scraper::Html;

use crate::retailers::{image_of, selector, text_of};
use crate::types::{RawCategory, RawOfferFields};

pub(super) fn extract(doc: &Html) -> Vec<RawCategory> {
    let section_sel = selector(".category-section.padding-bottom");
    let heading_sel = selector(".category-heading strong");
    let card_sel = selector("article");
    let name_sel = selector(".content h3");
    let subtitle_sel = selector(".content .subtitle");
    let deal_line_sel = selector(".tag span:not(.upper):not(.lower)");
    let deal_upper_sel = selector(".tag .upper");
    let deal_lower_sel = selector(".tag .lower");
    let image_sel = selector(".card-image img");

    let mut categories = Vec::new();
    for section in doc.select(&section_sel) {
        let Some(category_name) = text_of(section, &heading_sel) else {
            tracing::debug!(retailer = "jumbo", "skipping section without heading");
            continue;
        };

        let mut offers = Vec::new();
        for card in section.select(&card_sel) {
            offers.push(RawOfferFields {
                product_name: text_of(card, &name_sel),
                date_expr: text_of(card, &subtitle_sel),
                deal_line: text_of(card, &deal_line_sel),
                deal_upper: text_of(card, &deal_upper_sel),
                deal_lower: text_of(card, &deal_lower_sel),
                price_now: None,
                price_was: None,
                image: image_of(card, &image_sel),
            });
        }

        categories.push(RawCategory {
            category_name,
            offers,
        });
    }

    categories
}
