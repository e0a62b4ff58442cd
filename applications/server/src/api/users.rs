/// Users API routes
use crate::{
    error::{ErrorBody, Result, ServerError},
    router::segment_position,
    state::AppState,
};
use axum::{
    extract::{path::ErrorKind, rejection::PathRejection, Path, State},
    Json,
};
use roster_core::{
    validation::{validate_age, validate_user_id, validate_username, Field},
    User, ValidationError,
};

/// Unwrap a path extraction
///
/// `fields` names each path parameter in order. A segment that does not parse
/// answers 422 against its field, the same as a range violation. Handlers
/// validate every parameter before the store is touched.
fn params<T>(path: std::result::Result<Path<T>, PathRejection>, fields: &[Field]) -> Result<T> {
    match path {
        Ok(Path(params)) => Ok(params),
        Err(rejection) => Err(path_error(&rejection, fields)),
    }
}

fn path_error(rejection: &PathRejection, fields: &[Field]) -> ServerError {
    let PathRejection::FailedToDeserializePathParams(err) = rejection else {
        return ServerError::InvalidPath(rejection.body_text());
    };

    let (position, value) = match err.kind() {
        ErrorKind::ParseError { value, .. } => (Some(0), value.clone()),
        ErrorKind::ParseErrorAtIndex { index, value, .. } => (Some(*index), value.clone()),
        ErrorKind::ParseErrorAtKey { key, value, .. } => (segment_position(key), value.clone()),
        ErrorKind::InvalidUtf8InPathParam { key } => (segment_position(key), String::new()),
        _ => (None, String::new()),
    };

    let Some(field) = position.and_then(|position| fields.get(position).copied()) else {
        return ServerError::InvalidPath(rejection.body_text());
    };

    let message = match field {
        Field::Username => "username must be valid UTF-8".to_string(),
        Field::UserId | Field::Age => format!("{} must be an integer", field),
    };
    ServerError::Validation(ValidationError::new(field, value, message))
}

/// GET /
/// List all users in insertion order
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "All users in insertion order", body = [User])
    ),
    tag = "users",
    operation_id = "listUsers"
)]
pub async fn list_users(State(app_state): State<AppState>) -> Json<Vec<User>> {
    Json(app_state.users.list().await)
}

/// GET /users/:user_id
/// Get the user at position `user_id - 1` of the listing
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    params(
        ("user_id" = i64, Path, description = "Enter User ID", minimum = 1, maximum = 100, example = 1)
    ),
    responses(
        (status = 200, description = "User at position user_id - 1", body = User),
        (status = 404, description = "Position past the end of the listing", body = ErrorBody),
        (status = 422, description = "Invalid path parameters", body = ErrorBody)
    ),
    tag = "users",
    operation_id = "getUser"
)]
pub async fn get_user(
    State(app_state): State<AppState>,
    path: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<User>> {
    let user_id = validate_user_id(params(path, &[Field::UserId])?)?;

    let user = app_state.users.get_by_position(user_id).await?;
    Ok(Json(user))
}

/// POST /user/:username/:age
/// Create a user with the next free id
#[utoipa::path(
    post,
    path = "/user/{username}/{age}",
    params(
        ("username" = String, Path, description = "Enter username", min_length = 5, max_length = 20, example = "UrbanUser"),
        ("age" = i64, Path, description = "Enter age", minimum = 12, maximum = 120, example = 24)
    ),
    responses(
        (status = 200, description = "Created user", body = User),
        (status = 422, description = "Invalid path parameters", body = ErrorBody)
    ),
    tag = "users",
    operation_id = "createUser"
)]
pub async fn create_user(
    State(app_state): State<AppState>,
    path: std::result::Result<Path<(String, i64)>, PathRejection>,
) -> Result<Json<User>> {
    let (username, age) = params(path, &[Field::Username, Field::Age])?;
    let username = validate_username(&username)?;
    let age = validate_age(age)?;

    let user = app_state.users.create(username, age).await;
    Ok(Json(user))
}

/// PUT /user/:user_id/:username/:age
/// Replace username and age of an existing user
#[utoipa::path(
    put,
    path = "/user/{user_id}/{username}/{age}",
    params(
        ("user_id" = i64, Path, description = "Enter User ID", minimum = 1, maximum = 100, example = 1),
        ("username" = String, Path, description = "Enter username", min_length = 5, max_length = 20, example = "UrbanUser"),
        ("age" = i64, Path, description = "Enter age", minimum = 12, maximum = 120, example = 24)
    ),
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 404, description = "User was not found", body = ErrorBody),
        (status = 422, description = "Invalid path parameters", body = ErrorBody)
    ),
    tag = "users",
    operation_id = "updateUser"
)]
pub async fn update_user(
    State(app_state): State<AppState>,
    path: std::result::Result<Path<(i64, String, i64)>, PathRejection>,
) -> Result<Json<User>> {
    let (user_id, username, age) = params(path, &[Field::UserId, Field::Username, Field::Age])?;
    let user_id = validate_user_id(user_id)?;
    let username = validate_username(&username)?;
    let age = validate_age(age)?;

    let user = app_state.users.update(user_id, username, age).await?;
    Ok(Json(user))
}

/// DELETE /user/:user_id
/// Delete a user and return the removed record
#[utoipa::path(
    delete,
    path = "/user/{user_id}",
    params(
        ("user_id" = i64, Path, description = "Enter User ID", minimum = 1, maximum = 100, example = 1)
    ),
    responses(
        (status = 200, description = "Deleted user", body = User),
        (status = 404, description = "User was not found", body = ErrorBody),
        (status = 422, description = "Invalid path parameters", body = ErrorBody)
    ),
    tag = "users",
    operation_id = "deleteUser"
)]
pub async fn delete_user(
    State(app_state): State<AppState>,
    path: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<User>> {
    let user_id = validate_user_id(params(path, &[Field::UserId])?)?;

    let user = app_state.users.delete(user_id).await?;
    Ok(Json(user))
}
