//! Albert Heijn bonus-page adapter.
//!
//! AH renders one promotional period for the whole page (a label above the
//! grid, e.g. `"wo 4 sep t/m di 10 sep"`) rather than per card, so the same
//! raw date expression is attached to every offer. Prices live in data
//! attributes on the price element, not in its text.

use scraper::Html;

use crate::retailers::{attr_of, image_of, selector, text_of};
use crate::types::{RawCategory, RawOfferFields};

pub(super) fn extract(doc: &Html) -> Vec<RawCategory> {
    let section_sel = selector(".grid_spanFrom-lg-2__jv8EM section");
    let heading_sel = selector("div h3");
    let card_sel = selector(r#"[data-testhook="card"]"#);
    let name_sel = selector(r#"[data-testhook="card-title"] span"#);
    let promo_sel = selector(r#"[data-testhook="promotion-text"]"#);
    let price_sel = selector(r#"[data-testhook="price"]"#);
    let image_sel = selector(r#"[data-testid="card-image"] img"#);
    let period_sel = selector(".period-toggle_periodLabel__NVVAd");

    // One period label covers every offer on the page.
    let period = doc
        .select(&period_sel)
        .next()
        .and_then(|el| super::clean(&el.text().collect::<String>()));

    let mut categories = Vec::new();
    for section in doc.select(&section_sel) {
        let Some(category_name) = text_of(section, &heading_sel) else {
            tracing::debug!(retailer = "ah", "skipping section without heading");
            continue;
        };

        let mut offers = Vec::new();
        for card in section.select(&card_sel) {
            // The promotion text is split over multiple spans ("2 stuks",
            // "50% korting"); join them into one line.
            let promo_parts: Vec<String> = card
                .select(&promo_sel)
                .filter_map(|el| super::clean(&el.text().collect::<String>()))
                .collect();
            let deal_line = if promo_parts.is_empty() {
                None
            } else {
                Some(promo_parts.join(" "))
            };

            offers.push(RawOfferFields {
                product_name: text_of(card, &name_sel),
                date_expr: period.clone(),
                deal_line,
                deal_upper: None,
                deal_lower: None,
                price_now: attr_of(card, &price_sel, "data-testpricenow"),
                price_was: attr_of(card, &price_sel, "data-testpricewas"),
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
