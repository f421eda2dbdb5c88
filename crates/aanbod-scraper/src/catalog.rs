//! Catalog assembly: date resolution, normalization, ordering and the
//! emptiness rule.

use aanbod_core::{Catalog, Category};

use crate::dates::{parse_date_range, parse_end_date_window};
use crate::normalize::normalize_offer;
use crate::retailers::DateNotation;
use crate::types::RawCategory;

/// Folds raw categories into the canonical catalog.
///
/// Categories and offers keep document encounter order; no re-sorting, no
/// cross-category deduplication. Offers without a product name are skipped,
/// and a category left without offers is dropped entirely.
pub(crate) fn assemble(
    raw_categories: Vec<RawCategory>,
    notation: DateNotation,
    reference_year: i32,
    window_days: u32,
) -> Catalog {
    let mut catalog = Vec::new();

    for raw_category in raw_categories {
        let category_name = raw_category.category_name;

        let offers: Vec<_> = raw_category
            .offers
            .into_iter()
            .filter_map(|fields| {
                let date = fields.date_expr.as_deref().and_then(|expr| match notation {
                    DateNotation::ExplicitRange => parse_date_range(expr, reference_year),
                    DateNotation::EndDateOnly => {
                        parse_end_date_window(expr, reference_year, window_days)
                    }
                });
                if let (None, Some(expr)) = (date, fields.date_expr.as_deref()) {
                    tracing::debug!(category = %category_name, expr, "unparseable date expression");
                }

                normalize_offer(fields, date)
            })
            .collect();

        if offers.is_empty() {
            tracing::debug!(category = %category_name, "dropping category without offers");
            continue;
        }

        catalog.push(Category {
            category_name,
            offers,
        });
    }

    catalog
}
