//! Inbox query API.

use crate::{
  app::AppState,
  models::{
    attachment::attachment_meta::AttachmentMeta,
    email::{api_email::ApiEmail, db_email::DbEmail},
  },
};
use axum::{
  Json,
  extract::{Path as AxumPath, State},
  http::StatusCode,
  response::IntoResponse,
};
use tracing::error;

/// All messages addressed exactly to `address`, newest first, with their
/// attachment metadata. No pagination; an inbox is returned whole.
pub async fn list_inbox(
  State(state): State<AppState>,
  AxumPath(address): AxumPath<String>,
) -> impl IntoResponse {
  let rows: Result<Vec<DbEmail>, _> = sqlx::query_as(
        "SELECT id, email_to, sender, subject, body_text, body_html, received_at FROM emails WHERE email_to = ? ORDER BY received_at DESC, id DESC",
    )
    .bind(&address)
    .fetch_all(&state.db)
    .await;

  let rows = match rows {
    Ok(rows) => rows,
    Err(e) => {
      error!("list_inbox error: {e}");
      return (StatusCode::INTERNAL_SERVER_ERROR, "db error").into_response();
    }
  };

  let mut out: Vec<ApiEmail> = Vec::with_capacity(rows.len());
  for row in rows {
    let attachments: Vec<AttachmentMeta> =
      sqlx::query_as("SELECT filename, filepath AS url FROM attachments WHERE email_id = ? ORDER BY id")
        .bind(row.id)
        .fetch_all(&state.db)
        .await
        .unwrap_or_default();
    out.push(ApiEmail::from_parts(row, attachments));
  }
  Json(out).into_response()
}
