/// HTTP router
use crate::{
    api,
    doc::{ApiDoc, OPENAPI_JSON_PATH, SWAGGER_UI_PATH},
    state::AppState,
};
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Parameter names of the `/user/...` routes, in segment order
///
/// The path router allows a single parameter name per segment position, so
/// these routes use neutral names and handlers extract them as tuples.
const USER_SEGMENTS: [&str; 3] = ["a", "b", "c"];

/// Position of a named path parameter within its route
pub(crate) fn segment_position(key: &str) -> Option<usize> {
    match key {
        "user_id" => Some(0),
        _ => USER_SEGMENTS.iter().position(|segment| *segment == key),
    }
}

/// Build the application router
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(api::users::list_users))
        .route("/health", get(api::health::health))
        .route("/users/:user_id", get(api::users::get_user))
        // DELETE /user/:user_id
        .route("/user/:a", delete(api::users::delete_user))
        // POST /user/:username/:age
        .route("/user/:a/:b", post(api::users::create_user))
        // PUT /user/:user_id/:username/:age
        .route("/user/:a/:b/:c", put(api::users::update_user))
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
