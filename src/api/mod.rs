pub mod country;
pub mod error;
pub mod middleware;

use crate::models::response::ErrorBody;
use crate::AppState;
use axum::{
    http::StatusCode,
    middleware::from_fn_with_state,
    routing::{get, Router},
    Json,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Assembles the request pipeline: trace and CORS outermost, then the
/// access gate, then the rate limiter, then the handlers. The fallback
/// sits behind the same layers as the routes.
pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/country", get(country::get_country))
        .route(
            "/health",
            get(|| async {
                (
                    StatusCode::OK,
                    Json(serde_json::json!({ "status": "healthy" })),
                )
            }),
        )
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(from_fn_with_state(app_state.clone(), middleware::gate))
                .layer(from_fn_with_state(app_state.clone(), middleware::rate_limit)),
        )
        .with_state(app_state)
}

async fn route_not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Route not found".to_string(),
        }),
    )
}
