//! Receiving-domain listing API.

use crate::{app::AppState, provider};
use axum::{Json, extract::State};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DomainsResponse {
  pub domains: Vec<String>,
}

/// Domains mail can currently be received on. Always non-empty: provider
/// failures degrade to the configured fallback.
pub async fn list_domains(State(state): State<AppState>) -> Json<DomainsResponse> {
  Json(DomainsResponse {
    domains: provider::resolve_domains(&state.config).await,
  })
}
