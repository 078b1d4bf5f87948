//! HTTP handlers for the REST API.

use axum::extract::{RawQuery, State};

use super::dto::{ApiResponse, ContributionsQuery};
use super::error::AppError;
use super::state::AppState;

/// GET /contributions?name=<name>&dayCount=<0..=365>
///
/// Sum of activity levels over the trailing `dayCount` days (default 30).
/// Parameters are validated before anything is fetched.
pub async fn get_contributions(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<ApiResponse, AppError> {
    let request = ContributionsQuery::from_raw(query.as_deref()).validate()?;

    let summary = state.engine.run(&request.name, request.day_count).await?;

    Ok(ApiResponse::success(summary.points))
}
