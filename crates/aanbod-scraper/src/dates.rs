//! Parsing of Dutch offer-validity expressions into UTC date ranges.
//!
//! Retailers print validity in two notations:
//!
//! - an explicit range, `"4 september t/m 10 september"`, where either side
//!   may drop a repeated month (`"4 t/m 10 september"`) and carry a weekday
//!   prefix (`"wo 4 sep t/m di 10 sep"`);
//! - a single end date, `"t/m zondag 12 mei"`, where the window length is a
//!   per-retailer configuration value.
//!
//! Pages never print a year, so the caller supplies a reference year taken
//! from the snapshot's capture instant. Parsing never fails loudly: every
//! malformed input yields `None`, which downstream becomes `date: null` on
//! the offer.

use chrono::{DateTime, Duration, TimeZone, Utc};

use aanbod_core::DateRange;

use crate::months::month_number;

/// "tot en met", the Dutch range separator, with its mandatory spaces.
const RANGE_SEPARATOR: &str = " t/m ";

const WEEKDAYS: [&str; 14] = [
    "ma",
    "di",
    "wo",
    "do",
    "vr",
    "za",
    "zo",
    "maandag",
    "dinsdag",
    "woensdag",
    "donderdag",
    "vrijdag",
    "zaterdag",
    "zondag",
];

/// One side of a validity expression: a day-of-month and an optional month
/// token, weekday prefix already stripped.
struct DayMonth<'a> {
    day: u32,
    month_token: Option<&'a str>,
}

/// Parses an explicit `"<day> <month> t/m <day> <month>"` range.
///
/// A side that omits its month inherits the other side's. When the end
/// resolves before the start (`"30 dec t/m 3 jan"`), the end date rolls into
/// the year after `reference_year`; the start year is never adjusted.
///
/// Returns `None` on any malformed input: missing or repeated separator, an
/// unknown month token, a non-numeric or calendar-invalid day, or no month
/// on either side.
#[must_use]
pub fn parse_date_range(expr: &str, reference_year: i32) -> Option<DateRange> {
    let parts: Vec<&str> = expr.split(RANGE_SEPARATOR).collect();
    if parts.len() != 2 {
        return None;
    }

    let left = parse_side(parts[0])?;
    let right = parse_side(parts[1])?;

    let start_month = month_number(left.month_token.or(right.month_token)?)?;
    let end_month = month_number(right.month_token.or(left.month_token)?)?;

    let start = utc_midnight(reference_year, start_month, left.day)?;
    let mut end = utc_midnight(reference_year, end_month, right.day)?;

    // A range crossing New Year ends in the following calendar year.
    if end < start {
        end = utc_midnight(reference_year + 1, end_month, right.day)?;
    }

    Some(DateRange { start, end })
}

/// Parses a single end-date expression (`"t/m zondag 12 mei"`, `"12 mei"`)
/// into the window it closes.
///
/// The start date is `window_days - 1` days before the end date, computed
/// by calendar subtraction so it rolls correctly across month and year
/// boundaries. Returns `None` when the day or month cannot be resolved.
#[must_use]
pub fn parse_end_date_window(expr: &str, reference_year: i32, window_days: u32) -> Option<DateRange> {
    let end_part = parse_side(expr)?;
    let end = utc_midnight(
        reference_year,
        month_number(end_part.month_token?)?,
        end_part.day,
    )?;
    let start = end - Duration::days(i64::from(window_days.saturating_sub(1)));
    Some(DateRange { start, end })
}

/// Splits one expression side into `(day, month?)`, skipping leading weekday
/// tokens and a leading `t/m` literal. Rejects sides with trailing tokens or
/// a non-numeric day.
fn parse_side(side: &str) -> Option<DayMonth<'_>> {
    let mut tokens = side
        .split_whitespace()
        .skip_while(|token| is_prefix_token(token));

    let day = tokens.next()?.parse::<u32>().ok()?;
    let month_token = tokens.next();
    if tokens.next().is_some() {
        return None;
    }

    Some(DayMonth { day, month_token })
}

/// Tokens allowed before the day number: weekday names and the `t/m`
/// separator literal (Dirk prints its end date as "t/m zondag 12 mei").
fn is_prefix_token(token: &str) -> bool {
    let lower = token.to_lowercase();
    lower == "t/m" || WEEKDAYS.contains(&lower.as_str())
}

/// Builds a UTC-midnight instant, or `None` for calendar-invalid dates
/// ("31 februari").
fn utc_midnight(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single()
}
