use envmon_core::models::SampleQuery;
use serde::Deserialize;

/// Query-string parameters for the samples listing.
///
/// Everything arrives as an optional string; coercion, clamping, and
/// validation live in the core engine, not here.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleQueryParams {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub zone: Option<String>,
    pub sample_type: Option<String>,
    pub status: Option<String>,
    pub operator: Option<String>,
    pub min_date: Option<String>,
    pub max_date: Option<String>,
}

impl From<SampleQueryParams> for SampleQuery {
    fn from(params: SampleQueryParams) -> Self {
        SampleQuery {
            zone: params.zone,
            sample_type: params.sample_type,
            status: params.status,
            operator: params.operator,
            min_date: params.min_date,
            max_date: params.max_date,
            page: params.page,
            page_size: params.page_size,
        }
    }
}
