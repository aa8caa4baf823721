//! Advertisement Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::application::dto::{AdvertisementRequest, AdvertisementResponse, PageQuery, PageResponse};
use crate::application::services::reject_invalid;
use crate::domain::Advertisement;
use crate::presentation::http::extractors::{JsonBody, QueryParams};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Body returned by a successful delete
pub const DELETED: &str = "deleted!";

/// Build a validated advertisement from a request body
fn to_advertisement(
    operation: &'static str,
    body: AdvertisementRequest,
) -> Result<Advertisement, AppError> {
    Advertisement::try_from(body).map_err(|e| reject_invalid(operation, e).into())
}

/// List advertisements, one page at a time
pub async fn get_advertisements(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<PageQuery>,
) -> Result<Json<PageResponse<AdvertisementResponse>>, AppError> {
    let request = query
        .into_page_request(&state.settings.pagination)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let page = state.advertisements.get_advertisements(request).await?;

    Ok(Json(PageResponse::from(page)))
}

/// Get advertisement by ID
pub async fn get_advertisement(
    State(state): State<AppState>,
    Path(ad_id): Path<String>,
) -> Result<Json<AdvertisementResponse>, AppError> {
    let advertisement = state.advertisements.get_advertisement(&ad_id).await?;

    Ok(Json(AdvertisementResponse::from(advertisement)))
}

/// Create a new advertisement
pub async fn create_advertisement(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<AdvertisementRequest>,
) -> Result<Json<AdvertisementResponse>, AppError> {
    let advertisement = to_advertisement("create", body)?;

    let created = state.advertisements.create_advertisement(advertisement).await?;

    Ok(Json(AdvertisementResponse::from(created)))
}

/// Delete advertisement by ID; answers with a plain-text body
pub async fn delete_advertisement(
    State(state): State<AppState>,
    Path(ad_id): Path<String>,
) -> Result<&'static str, AppError> {
    state.advertisements.delete_advertisement(&ad_id).await?;

    Ok(DELETED)
}

/// Replace an existing advertisement
pub async fn update_advertisement(
    State(state): State<AppState>,
    Path(ad_id): Path<String>,
    JsonBody(body): JsonBody<AdvertisementRequest>,
) -> Result<Json<AdvertisementResponse>, AppError> {
    let advertisement = to_advertisement("update", body)?;

    let updated = state
        .advertisements
        .update_advertisement(&ad_id, advertisement)
        .await?;

    Ok(Json(AdvertisementResponse::from(updated)))
}
