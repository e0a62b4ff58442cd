//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects the user and health endpoints together with the
//! [`User`] and [`ErrorBody`] schemas. The router serves the document as JSON
//! and mounts Swagger UI next to it.

use crate::{api, error::ErrorBody};
use roster_core::User;
use utoipa::OpenApi;

/// Swagger UI mount point
pub const SWAGGER_UI_PATH: &str = "/docs";

/// Where the generated OpenAPI document is served
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI document for the roster HTTP API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        description = "In-memory user roster: list, look up, create, update and delete users."
    ),
    paths(
        api::users::list_users,
        api::users::get_user,
        api::users::create_user,
        api::users::update_user,
        api::users::delete_user,
        api::health::health,
    ),
    components(schemas(User, ErrorBody, api::health::HealthResponse)),
    tags(
        (name = "users", description = "Operations on user records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
