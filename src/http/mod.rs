//! HTTP router and handlers.

use crate::app::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub mod address;
pub mod domains;
pub mod files;
pub mod inbox;
pub mod ui;
pub mod webhook;

/// Assemble the HTTP router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::index))
        .route("/webhook", post(webhook::receive_webhook))
        .route("/api/domains", get(domains::list_domains))
        .route("/api/new", get(address::new_address))
        .route("/api/custom", post(address::custom_address))
        .route("/api/inbox/:address", get(inbox::list_inbox))
        .route("/attachments/:filename", get(files::serve_attachment))
        .route("/static/:file", get(files::serve_static))
        .route("/:email", get(ui::index_with_address))
        .with_state(state)
}
