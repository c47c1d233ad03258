use envmon_core::models::{PageResult, Sample};
use serde::Serialize;

/// One page of samples plus pagination metadata, serialized camelCase for
/// the frontend.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    pub page: u32,
    pub page_size: u32,
    pub total_items: usize,
    pub total_pages: u32,
    pub items: Vec<Sample>,
}

impl From<PageResult> for PageResponse {
    fn from(result: PageResult) -> Self {
        Self {
            page: result.page,
            page_size: result.page_size,
            total_items: result.total_items,
            total_pages: result.total_pages,
            items: result.items,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self { status: "ok", service: "envmon-api" }
    }
}
