//! Image routes.

use crate::Images;
use crate::schemas::{ImageQuery, ImageRead};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use lendhub_domain::constants::IMAGES_TAG;
use lendhub_kernel::server::{ApiError, ApiState, ErrorBody};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Image routes, to be merged into the server router.
pub fn image_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(get_image_handler))
        .routes(routes!(get_image_record_handler))
}

#[utoipa::path(
    get,
    path = "/v1/images/{image_name}",
    params(
        ("image_name" = String, Path, description = "Stored image name"),
        ImageQuery,
    ),
    responses(
        (status = OK, description = "The image bytes", content_type = "image/jpeg"),
        (status = NOT_FOUND, description = "No such image", body = ErrorBody),
        (status = BAD_GATEWAY, description = "Image store unreachable", body = ErrorBody),
    ),
    tag = IMAGES_TAG,
)]
async fn get_image_handler(
    State(state): State<ApiState>,
    Path(image_name): Path<String>,
    Query(query): Query<ImageQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let images = state.try_get_slice::<Images>()?;
    let bytes = images.fetch_image(&image_name, query.size).await.map_err(ApiError::from)?;

    Ok(([(header::CONTENT_TYPE, "image/jpeg")], bytes))
}

#[utoipa::path(
    get,
    path = "/v1/images/{image_name}/record",
    params(("image_name" = String, Path, description = "Stored image name")),
    responses(
        (status = OK, description = "The image record", body = ImageRead),
        (status = NOT_FOUND, description = "No such image record", body = ErrorBody),
    ),
    tag = IMAGES_TAG,
)]
async fn get_image_record_handler(
    State(state): State<ApiState>,
    Path(image_name): Path<String>,
) -> Result<Json<ImageRead>, ApiError> {
    let mut session = state.database.begin().await?;
    let row = lendhub_database::image::get_image(&mut session, &image_name).await?;

    Ok(Json(row.into()))
}
