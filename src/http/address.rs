//! Address suggestion APIs.

use crate::{app::AppState, provider, util};
use axum::{Form, Json, extract::State};
use serde::{Deserialize, Serialize};

const LOCAL_PART_LEN: usize = 8;

#[derive(Debug, Serialize)]
pub struct AddressResponse {
  pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct CustomAddressForm {
  pub address: String,
}

/// Suggest a fresh random address on the first routable domain. Nothing is
/// reserved; the webhook accepts mail for any address either way.
pub async fn new_address(State(state): State<AppState>) -> Json<AddressResponse> {
  let domains = provider::resolve_domains(&state.config).await;
  let domain = domains
    .into_iter()
    .next()
    .unwrap_or_else(|| state.config.fallback_domain.clone());
  let local = util::random_local_part(LOCAL_PART_LEN);
  Json(AddressResponse {
    email: format!("{local}@{domain}"),
  })
}

/// Echo a caller-chosen address back, unvalidated.
pub async fn custom_address(Form(form): Form<CustomAddressForm>) -> Json<AddressResponse> {
  Json(AddressResponse {
    email: form.address,
  })
}
