use axum::{
    extract::Request,
    http::{header, Method, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::AppState;

/// Build the full application router: habit routes under `/api/v1`, plus the
/// service index and health check at the root.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            "/habits",
            get(handlers::habits::list_habits).post(handlers::habits::create_habit),
        )
        .route(
            "/habits/:id",
            get(handlers::habits::get_habit)
                .put(handlers::habits::update_habit)
                .delete(handlers::habits::delete_habit),
        )
        .route("/habits/:id/log", post(handlers::habit_logs::log_habit))
        .route(
            "/habits/:id/logs",
            get(handlers::habit_logs::list_habit_logs),
        );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/", get(handlers::health::index))
        .route("/health", get(handlers::health::health_check))
        .nest("/api/v1", api_routes)
        .layer(cors)
        .layer(middleware::from_fn(options_no_content))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Answer every OPTIONS request with 204, keeping the CORS headers the inner
/// layer attached.
async fn options_no_content(req: Request, next: Next) -> Response {
    let is_options = req.method() == Method::OPTIONS;
    let mut response = next.run(req).await;
    if is_options {
        *response.status_mut() = StatusCode::NO_CONTENT;
    }
    response
}
