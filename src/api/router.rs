use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{AppState, checkout, get_report, return_book, search};

/// Creates the API router for the lending service
///
/// Command endpoints:
/// - POST /checkouts - Check a book out to a member
/// - POST /returns - Return a checked-out book
///
/// Query endpoints:
/// - GET /reports/:kind - Availability or overdue report (text/plain)
/// - GET /books/search - Search by title, author or ISBN
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .route("/checkouts", post(checkout))
        .route("/returns", post(return_book))
        .route("/reports/:kind", get(get_report))
        .route("/books/search", get(search))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
