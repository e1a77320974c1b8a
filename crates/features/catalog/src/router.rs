//! Catalog routes: items, users, and the like/save relationships.

use crate::Catalog;
use crate::schemas::{ItemCreate, ItemListQuery, ItemRead, UserCreate, UserRead};
use crate::service::{item, liked, saved, user};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderName, StatusCode, Uri, header};
use axum::response::{AppendHeaders, IntoResponse};
use lendhub_domain::constants::{CATALOG_TAG, CURSOR_PARAM, USERS_TAG};
use lendhub_kernel::server::{ApiError, ApiState, ErrorBody};
use lendhub_kernel::web::{QueryPairs, X_TOTAL_COUNT, next_page_link};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Catalog routes, to be merged into the server router.
pub fn catalog_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(list_items_handler, create_item_handler))
        .routes(routes!(get_item_handler, delete_item_handler))
        .routes(routes!(like_item_handler, unlike_item_handler))
        .routes(routes!(save_item_handler, unsave_item_handler))
        .routes(routes!(create_user_handler))
        .routes(routes!(get_user_handler, delete_user_handler))
}

#[utoipa::path(
    post,
    path = "/v1/items",
    request_body = ItemCreate,
    responses(
        (status = CREATED, description = "Item created", body = ItemRead),
        (status = INTERNAL_SERVER_ERROR, description = "Storage failure", body = ErrorBody),
    ),
    tag = CATALOG_TAG,
)]
async fn create_item_handler(
    State(state): State<ApiState>,
    Json(create): Json<ItemCreate>,
) -> Result<impl IntoResponse, ApiError> {
    let mut session = state.database.begin().await?;
    let created = item::create_item(&mut session, &create).await?;
    session.commit().await?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/v1/items",
    params(ItemListQuery),
    responses((status = OK, description = "One page of items", body = [ItemRead])),
    tag = CATALOG_TAG,
)]
async fn list_items_handler(
    State(state): State<ApiState>,
    uri: Uri,
    Query(query): Query<ItemListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let catalog = state.try_get_slice::<Catalog>()?;
    let page = query.page_options(catalog.default_page_size());
    let words = query.words();

    let mut session = state.database.begin().await?;
    let result = item::list_items(&mut session, &words, &page).await?;
    session.rollback().await?;

    let mut headers =
        vec![(HeaderName::from_static(X_TOTAL_COUNT), result.total_count.to_string())];

    if let Some(next_item_id) = result.next_item_id {
        let pairs = QueryPairs::parse(uri.query().unwrap_or_default());
        let cursor = [(CURSOR_PARAM, next_item_id.to_string())];
        headers.push((header::LINK, next_page_link(uri.path(), &pairs, &cursor)));
    }

    Ok((AppendHeaders(headers), Json(result.items)))
}

#[utoipa::path(
    get,
    path = "/v1/items/{item_id}",
    params(("item_id" = i64, Path, description = "Item identifier")),
    responses(
        (status = OK, description = "The item", body = ItemRead),
        (status = NOT_FOUND, description = "No such item", body = ErrorBody),
    ),
    tag = CATALOG_TAG,
)]
async fn get_item_handler(
    State(state): State<ApiState>,
    Path(item_id): Path<i64>,
) -> Result<Json<ItemRead>, ApiError> {
    let mut session = state.database.begin().await?;
    let found = item::get_item(&mut session, item_id).await?;

    Ok(Json(found))
}

#[utoipa::path(
    delete,
    path = "/v1/items/{item_id}",
    params(("item_id" = i64, Path, description = "Item identifier")),
    responses(
        (status = NO_CONTENT, description = "Item deleted"),
        (status = NOT_FOUND, description = "No such item", body = ErrorBody),
    ),
    tag = CATALOG_TAG,
)]
async fn delete_item_handler(
    State(state): State<ApiState>,
    Path(item_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let mut session = state.database.begin().await?;
    item::delete_item(&mut session, item_id).await?;
    session.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/v1/users/{user_id}/liked/{item_id}",
    params(
        ("user_id" = i64, Path, description = "User identifier"),
        ("item_id" = i64, Path, description = "Item identifier"),
    ),
    responses(
        (status = NO_CONTENT, description = "Like recorded"),
        (status = CONFLICT, description = "Already liked", body = ErrorBody),
    ),
    tag = USERS_TAG,
)]
async fn like_item_handler(
    State(state): State<ApiState>,
    Path((user_id, item_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError> {
    let mut session = state.database.begin().await?;
    liked::add_liked_item(&mut session, user_id, item_id).await?;
    session.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/v1/users/{user_id}/liked/{item_id}",
    params(
        ("user_id" = i64, Path, description = "User identifier"),
        ("item_id" = i64, Path, description = "Item identifier"),
    ),
    responses(
        (status = NO_CONTENT, description = "Like removed"),
        (status = NOT_FOUND, description = "No such like", body = ErrorBody),
    ),
    tag = USERS_TAG,
)]
async fn unlike_item_handler(
    State(state): State<ApiState>,
    Path((user_id, item_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError> {
    let mut session = state.database.begin().await?;
    liked::remove_liked_item(&mut session, user_id, item_id).await?;
    session.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/v1/users/{user_id}/saved/{item_id}",
    params(
        ("user_id" = i64, Path, description = "User identifier"),
        ("item_id" = i64, Path, description = "Item identifier"),
    ),
    responses(
        (status = NO_CONTENT, description = "Save recorded"),
        (status = CONFLICT, description = "Already saved", body = ErrorBody),
    ),
    tag = USERS_TAG,
)]
async fn save_item_handler(
    State(state): State<ApiState>,
    Path((user_id, item_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError> {
    let mut session = state.database.begin().await?;
    saved::add_saved_item(&mut session, user_id, item_id).await?;
    session.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/v1/users/{user_id}/saved/{item_id}",
    params(
        ("user_id" = i64, Path, description = "User identifier"),
        ("item_id" = i64, Path, description = "Item identifier"),
    ),
    responses(
        (status = NO_CONTENT, description = "Save removed"),
        (status = NOT_FOUND, description = "No such save", body = ErrorBody),
    ),
    tag = USERS_TAG,
)]
async fn unsave_item_handler(
    State(state): State<ApiState>,
    Path((user_id, item_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError> {
    let mut session = state.database.begin().await?;
    saved::remove_saved_item(&mut session, user_id, item_id).await?;
    session.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/v1/users",
    request_body = UserCreate,
    responses(
        (status = CREATED, description = "User created", body = UserRead),
        (status = CONFLICT, description = "Email already registered", body = ErrorBody),
    ),
    tag = USERS_TAG,
)]
async fn create_user_handler(
    State(state): State<ApiState>,
    Json(create): Json<UserCreate>,
) -> Result<impl IntoResponse, ApiError> {
    let mut session = state.database.begin().await?;
    let created = user::create_user(&mut session, &create).await?;
    session.commit().await?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/v1/users/{user_id}",
    params(("user_id" = i64, Path, description = "User identifier")),
    responses(
        (status = OK, description = "The user", body = UserRead),
        (status = NOT_FOUND, description = "No such user", body = ErrorBody),
    ),
    tag = USERS_TAG,
)]
async fn get_user_handler(
    State(state): State<ApiState>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserRead>, ApiError> {
    let mut session = state.database.begin().await?;
    let found = user::get_user(&mut session, user_id).await?;

    Ok(Json(found))
}

#[utoipa::path(
    delete,
    path = "/v1/users/{user_id}",
    params(("user_id" = i64, Path, description = "User identifier")),
    responses(
        (status = NO_CONTENT, description = "User deleted"),
        (status = NOT_FOUND, description = "No such user", body = ErrorBody),
    ),
    tag = USERS_TAG,
)]
async fn delete_user_handler(
    State(state): State<ApiState>,
    Path(user_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let mut session = state.database.begin().await?;
    user::delete_user(&mut session, user_id).await?;
    session.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}
