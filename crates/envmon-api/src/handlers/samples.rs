use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use envmon_core::models::SampleQuery;
use envmon_core::query;

use crate::dto::{PageResponse, SampleQueryParams};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/samples — filtered, paginated sample listing.
pub async fn list_samples(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SampleQueryParams>,
) -> Result<Json<PageResponse>, ApiError> {
    tracing::info!(
        zone = params.zone.as_deref().unwrap_or("-"),
        sample_type = params.sample_type.as_deref().unwrap_or("-"),
        status = params.status.as_deref().unwrap_or("-"),
        "Listing samples"
    );

    let samples = state.samples.load().await?;
    let query: SampleQuery = params.into();
    let result = query::execute(samples, &query)?;

    Ok(Json(PageResponse::from(result)))
}
