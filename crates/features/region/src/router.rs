//! Region routes.

use crate::schemas::{RegionCreate, RegionRead, RegionUpdate};
use crate::service;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use lendhub_domain::constants::REGIONS_TAG;
use lendhub_kernel::server::{ApiError, ApiState, ErrorBody};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Region routes, to be merged into the server router.
pub fn region_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(list_regions_handler, create_region_handler))
        .routes(routes!(get_region_handler, update_region_handler, delete_region_handler))
}

#[utoipa::path(
    get,
    path = "/v1/regions",
    responses((status = OK, description = "All regions", body = [RegionRead])),
    tag = REGIONS_TAG,
)]
async fn list_regions_handler(
    State(state): State<ApiState>,
) -> Result<Json<Vec<RegionRead>>, ApiError> {
    let mut session = state.database.begin().await?;
    let regions = service::list_regions(&mut session).await?;

    Ok(Json(regions))
}

#[utoipa::path(
    post,
    path = "/v1/regions",
    request_body = RegionCreate,
    responses(
        (status = CREATED, description = "Region created", body = RegionRead),
        (status = CONFLICT, description = "Name already taken", body = ErrorBody),
    ),
    tag = REGIONS_TAG,
)]
async fn create_region_handler(
    State(state): State<ApiState>,
    Json(create): Json<RegionCreate>,
) -> Result<impl IntoResponse, ApiError> {
    let mut session = state.database.begin().await?;
    let created = service::create_region(&mut session, &create).await?;
    session.commit().await?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/v1/regions/{region_id}",
    params(("region_id" = i64, Path, description = "Region identifier")),
    responses(
        (status = OK, description = "The region", body = RegionRead),
        (status = NOT_FOUND, description = "No such region", body = ErrorBody),
    ),
    tag = REGIONS_TAG,
)]
async fn get_region_handler(
    State(state): State<ApiState>,
    Path(region_id): Path<i64>,
) -> Result<Json<RegionRead>, ApiError> {
    let mut session = state.database.begin().await?;
    let found = service::get_region(&mut session, region_id).await?;

    Ok(Json(found))
}

#[utoipa::path(
    put,
    path = "/v1/regions/{region_id}",
    params(("region_id" = i64, Path, description = "Region identifier")),
    request_body = RegionUpdate,
    responses(
        (status = OK, description = "Region renamed", body = RegionRead),
        (status = NOT_FOUND, description = "No such region", body = ErrorBody),
    ),
    tag = REGIONS_TAG,
)]
async fn update_region_handler(
    State(state): State<ApiState>,
    Path(region_id): Path<i64>,
    Json(update): Json<RegionUpdate>,
) -> Result<Json<RegionRead>, ApiError> {
    let mut session = state.database.begin().await?;
    let updated = service::update_region(&mut session, region_id, &update).await?;
    session.commit().await?;

    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/v1/regions/{region_id}",
    params(("region_id" = i64, Path, description = "Region identifier")),
    responses(
        (status = NO_CONTENT, description = "Region deleted"),
        (status = NOT_FOUND, description = "No such region", body = ErrorBody),
    ),
    tag = REGIONS_TAG,
)]
async fn delete_region_handler(
    State(state): State<ApiState>,
    Path(region_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let mut session = state.database.begin().await?;
    service::delete_region(&mut session, region_id).await?;
    session.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}
