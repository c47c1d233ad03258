use serde::{Deserialize, Serialize};

use super::Sample;

/// Filter criteria and pagination parameters for one read request.
///
/// Every field is optional and arrives transport-decoded as a string; the
/// query engine owns all coercion and validation. An empty string is treated
/// the same as an absent field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SampleQuery {
    /// Exact zone match, validated against [`super::Zone`]
    pub zone: Option<String>,

    /// Exact sample-type match, validated against [`super::SampleType`]
    pub sample_type: Option<String>,

    /// Exact status match, validated against [`super::Status`]
    pub status: Option<String>,

    /// Exact operator-name match, no enumerated constraint
    pub operator: Option<String>,

    /// Inclusive lower bound on collection date; ignored if unparseable
    pub min_date: Option<String>,

    /// Inclusive upper bound on collection date; ignored if unparseable
    pub max_date: Option<String>,

    /// Requested page number, coerced to an integer >= 1 (default 1)
    pub page: Option<String>,

    /// Requested page size, coerced and clamped to [1, 50] (default 10)
    pub page_size: Option<String>,
}

/// One page of query results plus pagination metadata, all derived.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageResult {
    /// Page actually served; out-of-range requests clamp to the last page
    pub page: u32,

    /// Effective page size after clamping
    pub page_size: u32,

    /// Count of samples surviving all filters
    pub total_items: usize,

    /// Always at least 1, even for an empty filtered result
    pub total_pages: u32,

    /// The served slice, in dataset order
    pub items: Vec<Sample>,
}
