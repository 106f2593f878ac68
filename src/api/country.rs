use crate::models::country::CountryView;
use crate::services::country::normalize_query;
use crate::AppState;
use axum::{
    extract::{Query, State},
    Json,
};

use super::error::ApiError;

#[derive(serde::Deserialize)]
pub struct CountryQueryParams {
    pub value: Option<String>,
}

pub async fn get_country(
    State(app_state): State<AppState>,
    Query(params): Query<CountryQueryParams>,
) -> Result<Json<CountryView>, ApiError> {
    let query = normalize_query(params.value.as_deref()).ok_or(ApiError::MissingQuery)?;

    let record = app_state
        .country_service
        .lookup(&query)
        .ok_or(ApiError::NotFound)?;

    Ok(Json(CountryView::from(record)))
}
