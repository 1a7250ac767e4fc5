use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::ValidatedJson;
use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, UserResponse};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for the users endpoints
#[derive(utoipa::OpenApi)]
#[openapi(
    paths(list_users, create_user, get_user, update_user, delete_user),
    components(schemas(CreateUser, UpdateUser, UserResponse)),
    tags((name = "users", description = "User management operations"))
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
        .with_state(shared_service)
}

/// List all users
///
/// GET /v1/users
#[utoipa::path(
    get,
    path = "",
    responses(
        (status = 200, description = "All users", body = [UserResponse])
    ),
    tag = "users"
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Json<Vec<UserResponse>>> {
    let users = service.get_all_users().await?;
    Ok(Json(users))
}

/// Create a new user
///
/// POST /v1/users
#[utoipa::path(
    post,
    path = "",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created"),
        (status = 400, description = "Malformed request body")
    ),
    tag = "users"
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> UserResult<impl IntoResponse> {
    let id = service.create_user(input).await?;
    // Must match the prefix this router is nested under in the app.
    let location = format!("/v1/users/{id}");

    Ok((StatusCode::CREATED, [(header::LOCATION, location)]))
}

/// Get a user by ID
///
/// GET /v1/users/:id
#[utoipa::path(
    get,
    path = "/{id}",
    responses(
        (status = 200, description = "The user", body = UserResponse),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> UserResult<Json<UserResponse>> {
    let user = service
        .get_user(&id)
        .await?
        .ok_or(UserError::NotFound(id))?;

    Ok(Json(user))
}

/// Update a user
///
/// PUT /v1/users/:id
#[utoipa::path(
    put,
    path = "/{id}",
    request_body = UpdateUser,
    responses(
        (status = 204, description = "Update applied (or id unknown)"),
        (status = 400, description = "Malformed id or body")
    ),
    tag = "users"
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateUser>,
) -> UserResult<impl IntoResponse> {
    service.update_user(&id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a user
///
/// DELETE /v1/users/:id
#[utoipa::path(
    delete,
    path = "/{id}",
    responses(
        (status = 204, description = "Delete applied (or id unknown)"),
        (status = 400, description = "Malformed id")
    ),
    tag = "users"
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> UserResult<impl IntoResponse> {
    service.delete_user(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
