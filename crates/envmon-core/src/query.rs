//! Query engine: validation, filtering, and pagination over the cached
//! sample sequence.
//!
//! Every execution is a pure computation over an immutable slice. Validation
//! fails fast before any filtering; filters apply in a fixed order, each step
//! narrowing the survivors; pagination clamps rather than rejects.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{EnvmonError, Result};
use crate::models::{PageResult, Sample, SampleQuery, SampleType, Status, Zone};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 50;

/// Run a query against the full dataset and return one page of results.
///
/// Enumerated filter values are validated up front; the first invalid value
/// aborts the query with a field-specific error. Unparseable date bounds are
/// not errors, they are treated as "no constraint".
pub fn execute(samples: &[Sample], query: &SampleQuery) -> Result<PageResult> {
    let zone: Option<Zone> =
        parse_enum_filter(query.zone.as_deref(), |value| EnvmonError::InvalidZone { value })?;
    let sample_type: Option<SampleType> =
        parse_enum_filter(query.sample_type.as_deref(), |value| EnvmonError::InvalidSampleType {
            value,
        })?;
    let status: Option<Status> =
        parse_enum_filter(query.status.as_deref(), |value| EnvmonError::InvalidStatus { value })?;

    let mut filtered: Vec<&Sample> = samples.iter().collect();

    if let Some(zone) = zone {
        filtered.retain(|s| s.zone == zone.as_str());
    }
    if let Some(sample_type) = sample_type {
        filtered.retain(|s| s.sample_type == sample_type.as_str());
    }
    if let Some(status) = status {
        filtered.retain(|s| s.status == status.as_str());
    }
    if let Some(operator) = non_empty(query.operator.as_deref()) {
        filtered.retain(|s| s.operator == operator);
    }

    filter_by_date_range(
        &mut filtered,
        query.min_date.as_deref(),
        query.max_date.as_deref(),
    );

    let page_size = parse_page_size(query.page_size.as_deref());
    let requested_page = parse_page(query.page.as_deref());

    let total_items = filtered.len();
    let total_pages = (total_items.div_ceil(page_size as usize) as u32).max(1);

    // Out-of-range page requests clamp to the last page instead of erroring.
    let page = requested_page.min(total_pages);
    let start = (page - 1) as usize * page_size as usize;

    let items: Vec<Sample> = filtered
        .into_iter()
        .skip(start)
        .take(page_size as usize)
        .cloned()
        .collect();

    Ok(PageResult { page, page_size, total_items, total_pages, items })
}

/// Validate an enumerated filter value. Absent or empty means no filter;
/// anything else must parse into the enumeration.
fn parse_enum_filter<T: FromStr>(
    raw: Option<&str>,
    invalid: impl FnOnce(String) -> EnvmonError,
) -> Result<Option<T>> {
    match non_empty(raw) {
        None => Ok(None),
        Some(value) => value.parse::<T>().map(Some).map_err(|_| invalid(value.to_string())),
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.is_empty())
}

/// Keep samples whose collection date falls within the parsed bounds.
/// A bound that does not parse is silently ignored; once a bound applies, a
/// sample whose own date does not parse never satisfies it.
fn filter_by_date_range(
    samples: &mut Vec<&Sample>,
    min_date: Option<&str>,
    max_date: Option<&str>,
) {
    if let Some(min) = non_empty(min_date).and_then(parse_date) {
        samples.retain(|s| parse_date(&s.collection_date).is_some_and(|d| d >= min));
    }
    if let Some(max) = non_empty(max_date).and_then(parse_date) {
        samples.retain(|s| parse_date(&s.collection_date).is_some_and(|d| d <= max));
    }
}

/// Parse a date string as RFC 3339, a naive datetime, or a bare calendar date
/// (interpreted as midnight).
fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().map(|d| d.and_hms_opt(0, 0, 0).unwrap())
}

/// Coerce the requested page to an integer >= 1; non-numeric input defaults
/// to the first page.
pub fn parse_page(raw: Option<&str>) -> u32 {
    non_empty(raw)
        .and_then(|s| s.trim().parse::<i64>().ok())
        .map(|p| p.clamp(1, u32::MAX as i64) as u32)
        .unwrap_or(DEFAULT_PAGE)
}

/// Coerce the requested page size to an integer clamped to [1, 50];
/// non-numeric input defaults to 10.
pub fn parse_page_size(raw: Option<&str>) -> u32 {
    non_empty(raw)
        .and_then(|s| s.trim().parse::<i64>().ok())
        .map(|n| n.clamp(1, MAX_PAGE_SIZE as i64) as u32)
        .unwrap_or(DEFAULT_PAGE_SIZE)
}
