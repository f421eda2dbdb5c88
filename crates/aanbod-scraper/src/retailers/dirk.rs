//! Dirk aanbiedingen-page adapter.
//!
//! Dirk is the only source served fully server-side, and the only one whose
//! cards carry a single end date (`"t/m zondag 12 mei"`) instead of an
//! explicit range; the window length is configured per deployment. Prices
//! are plain text, deal tags don't exist.

use scraper::Html;

use crate::retailers::{image_of, selector, text_of};
use crate::types::{RawCategory, RawOfferFields};

pub(super) fn extract(doc: &Html) -> Vec<RawCategory> {
    let section_sel = selector(".offers section");
    let heading_sel = selector("h2");
    let card_sel = selector("article");
    let name_sel = selector("a.bottom .title");
    let subtitle_sel = selector("a.bottom .subtitle");
    let price_now_sel = selector(".price-container .price");
    let price_was_sel = selector(".regular-price span");
    let image_sel = selector("a img");

    let mut categories = Vec::new();
    for section in doc.select(&section_sel) {
        let Some(category_name) = text_of(section, &heading_sel) else {
            tracing::debug!(retailer = "dirk", "skipping section without heading");
            continue;
        };

        let mut offers = Vec::new();
        for card in section.select(&card_sel) {
            offers.push(RawOfferFields {
                product_name: text_of(card, &name_sel),
                date_expr: text_of(card, &subtitle_sel),
                deal_line: None,
                deal_upper: None,
                deal_lower: None,
                price_now: text_of(card, &price_now_sel),
                price_was: text_of(card, &price_was_sel),
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

#[cfg(test)]
mod tests {
    use super::*;

    const OFFERS_PAGE: &str = r#"
        <html><body>
        <div class="offers">
          <section>
            <h2>Vlees</h2>
            <article>
              <a href="/product/1"><img src="https://dirk.nl/kipfilet.jpg"></a>
              <a class="bottom" href="/product/1">
                <span class="title">Kipfilet 500 gram</span>
                <span class="subtitle">t/m zondag 12 mei</span>
              </a>
              <div class="price-container"><span class="price">3.99</span></div>
              <div class="regular-price"><span>5.49</span></div>
            </article>
            <article>
              <a class="bottom" href="/product/2">
                <span class="title">Rundergehakt kilo</span>
              </a>
              <div class="price-container"><span class="price">5.99</span></div>
            </article>
          </section>
          <section>
            <h2>Brood</h2>
            <article>
              <a class="bottom" href="/product/3">
                <span class="subtitle">t/m zondag 12 mei</span>
              </a>
            </article>
          </section>
        </div>
        </body></html>
    "#;

    #[test]
    fn extracts_categories_and_offers_in_order() {
        let doc = Html::parse_document(OFFERS_PAGE);
        let categories = extract(&doc);
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].category_name, "Vlees");
        assert_eq!(categories[0].offers.len(), 2);
        assert_eq!(categories[1].category_name, "Brood");
    }

    #[test]
    fn reads_text_prices() {
        let doc = Html::parse_document(OFFERS_PAGE);
        let categories = extract(&doc);
        let kipfilet = &categories[0].offers[0];
        assert_eq!(kipfilet.price_now.as_deref(), Some("3.99"));
        assert_eq!(kipfilet.price_was.as_deref(), Some("5.49"));
    }

    #[test]
    fn reads_the_validity_subtitle() {
        let doc = Html::parse_document(OFFERS_PAGE);
        let categories = extract(&doc);
        assert_eq!(
            categories[0].offers[0].date_expr.as_deref(),
            Some("t/m zondag 12 mei")
        );
    }

    #[test]
    fn missing_fields_stay_none() {
        let doc = Html::parse_document(OFFERS_PAGE);
        let categories = extract(&doc);
        let gehakt = &categories[0].offers[1];
        assert_eq!(gehakt.product_name.as_deref(), Some("Rundergehakt kilo"));
        assert!(gehakt.date_expr.is_none());
        assert!(gehakt.price_was.is_none());
        assert!(gehakt.image.is_none());
    }

    #[test]
    fn nameless_card_is_still_reported_raw() {
        // Dropping nameless offers happens at assembly, not extraction.
        let doc = Html::parse_document(OFFERS_PAGE);
        let categories = extract(&doc);
        assert_eq!(categories[1].offers.len(), 1);
        assert!(categories[1].offers[0].product_name.is_none());
    }
}
