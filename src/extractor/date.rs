//! Publication date strategies and date parsing.
//!
//! First-hit cascade: the first `<time>` element, then the
//! `article:published_time` meta tag, then a scan of the raw HTML for a
//! numeric `D/M/YYYY` or `D-M-YYYY` token. A candidate that does not parse
//! falls through to the next strategy; if none parses the date is absent.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::dom::{self, Selection};
use crate::options::Options;
use crate::patterns::{DATE_LABEL, NUMERIC_DATE, ORDINAL_SUFFIX, WHITESPACE_NORMALIZE};

use super::cascade::{self, Page, Strategy, Tier};

/// Output format for publication dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date strategies in priority order.
pub const DATE_STRATEGIES: [Strategy<Option<NaiveDateTime>>; 3] = [
    Strategy { name: "time_element", tier: Tier::Primary, run: time_element },
    Strategy { name: "published_time_meta", tier: Tier::Primary, run: published_time_meta },
    Strategy { name: "numeric_date_scan", tier: Tier::Fallback, run: numeric_date_scan },
];

/// Datetime formats tried after RFC 3339 and RFC 2822.
const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Date-only formats, numeric and English month names.
const DATE_FORMATS: [&str; 12] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%d %B, %Y",
    "%A, %B %d, %Y",
    "%a, %b %d, %Y",
];

/// Pick the publication date for a page, formatted with [`DATE_FORMAT`].
#[must_use]
pub fn extract_date(page: &Page<'_>, options: &Options) -> Option<String> {
    cascade::first_hit(page, options, &DATE_STRATEGIES)
        .map(|(_, date)| date.format(DATE_FORMAT).to_string())
}

fn time_element(page: &Page<'_>, _: &Options) -> Option<NaiveDateTime> {
    let time = page.doc.select("time");
    let first = Selection::from(*time.nodes().first()?);
    let text = dom::visible_text(&first);
    parse_date(&text).or_else(|| dom::get_attribute(&first, "datetime").and_then(|d| parse_date(&d)))
}

fn published_time_meta(page: &Page<'_>, _: &Options) -> Option<NaiveDateTime> {
    dom::meta_content(&page.doc, "property", "article:published_time")
        .and_then(|content| parse_date(&content))
}

fn numeric_date_scan(page: &Page<'_>, _: &Options) -> Option<NaiveDateTime> {
    NUMERIC_DATE.captures_iter(page.html).find_map(|caps| {
        let day_or_month: u32 = caps[1].parse().ok()?;
        let month_or_day: u32 = caps[2].parse().ok()?;
        let year = expand_year(caps[3].parse().ok()?, caps[3].len())?;
        numeric_date(year, day_or_month, month_or_day)
    })
}

/// Two-digit years are 20xx; three-digit years are rejected.
fn expand_year(year: i32, digits: usize) -> Option<i32> {
    match digits {
        2 => Some(2000 + year),
        4 => Some(year),
        _ => None,
    }
}

/// Day-first, then month-first when day-first is impossible.
fn numeric_date(year: i32, first: u32, second: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, second, first)
        .or_else(|| NaiveDate::from_ymd_opt(year, first, second))
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Parse a human-written date.
///
/// Accepts RFC 3339 / ISO 8601 (with or without offset and time), RFC 2822,
/// numeric `D/M/YYYY` and `D-M-YYYY`, and English month-name forms with an
/// optional weekday, ordinal suffix or "Published:" style label. A date
/// with an offset keeps its local wall-clock time.
///
/// # Examples
///
/// ```
/// use news_extract::extractor::date::parse_date;
///
/// let parsed = parse_date("Monday, May 1st, 2023").expect("date");
/// assert_eq!(parsed.format("%Y-%m-%d").to_string(), "2023-05-01");
/// assert!(parse_date("yesterday-ish").is_none());
/// ```
#[must_use]
pub fn parse_date(text: &str) -> Option<NaiveDateTime> {
    let text = WHITESPACE_NORMALIZE.replace_all(text.trim(), " ");
    let text = DATE_LABEL.replace(&text, "");
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.naive_local());
    }
    // Offsets without a colon, e.g. 2023-05-01T14:30:00+0000
    if let Ok(dt) = DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%z") {
        return Some(dt.naive_local());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(dt);
        }
    }

    // Whole-text numeric tokens are resolved here; "%Y-%m-%d" would read
    // "14-03-24" as the year 14.
    if let Some(caps) = NUMERIC_DATE.captures(text) {
        if caps.get(0).is_some_and(|m| m.as_str().len() == text.len()) {
            let year = expand_year(caps[3].parse().ok()?, caps[3].len())?;
            return numeric_date(year, caps[1].parse().ok()?, caps[2].parse().ok()?);
        }
    }

    let text = ORDINAL_SUFFIX.replace_all(text, "$1");
    DATE_FORMATS.iter().find_map(|fmt| {
        NaiveDate::parse_from_str(&text, fmt)
            .ok()
            .map(|date| date.and_time(NaiveTime::MIN))
    })
}
