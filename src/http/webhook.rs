//! Ingestion endpoint for the external mail-routing worker.

use crate::app::AppState;
use axum::{
  Json,
  extract::State,
  http::{HeaderMap, StatusCode},
  response::IntoResponse,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{error, info, warn};

#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
  pub to: String,
  pub from: String,
  pub subject: Option<String>,
  pub body_text: Option<String>,
  pub body_html: Option<String>,
  pub date: Option<String>,
  #[serde(default)]
  pub attachments: Vec<AttachmentPayload>,
}

#[derive(Debug, Deserialize)]
pub struct AttachmentPayload {
  pub filename: Option<String>,
  pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WebhookResponse {
  pub status: &'static str,
  pub id: i64,
}

/// When the worker sent a timestamp, take it; otherwise the ingestion time.
/// Unparseable strings also fall back, so one bad message cannot be rejected
/// for its date alone.
fn parse_received_at(date: Option<&str>) -> DateTime<Utc> {
  let Some(s) = date else {
    return Utc::now();
  };
  if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
    return dt.with_timezone(&Utc);
  }
  // Offset-less ISO-8601, as some workers emit
  if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
    return naive.and_utc();
  }
  warn!("unparseable date {s:?}, storing ingestion time");
  Utc::now()
}

/// Attachment filenames come from untrusted mail; only the final path
/// component is usable under the upload directory.
fn disk_name(raw: &str) -> Option<String> {
  Path::new(raw)
    .file_name()
    .and_then(|n| n.to_str())
    .map(str::to_string)
}

async fn insert_email(
  state: &AppState,
  payload: &WebhookPayload,
  received_at: DateTime<Utc>,
) -> Result<i64, sqlx::Error> {
  let result = sqlx::query(
        "INSERT INTO emails (email_to, sender, subject, body_text, body_html, received_at) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&payload.to)
    .bind(&payload.from)
    .bind(&payload.subject)
    .bind(&payload.body_text)
    .bind(&payload.body_html)
    .bind(received_at)
    .execute(&state.db)
    .await?;
  Ok(result.last_insert_rowid())
}

pub async fn receive_webhook(
  State(state): State<AppState>,
  headers: HeaderMap,
  Json(payload): Json<WebhookPayload>,
) -> impl IntoResponse {
  if let Some(expected) = state.config.webhook_token.as_deref() {
    let given = headers.get("x-webhook-token").and_then(|v| v.to_str().ok());
    if given != Some(expected) {
      return (StatusCode::UNAUTHORIZED, "invalid webhook token").into_response();
    }
  }

  let received_at = parse_received_at(payload.date.as_deref());

  let email_id = match insert_email(&state, &payload, received_at).await {
    Ok(id) => id,
    Err(e) => {
      error!("webhook insert error: {e}");
      return (StatusCode::INTERNAL_SERVER_ERROR, "db error").into_response();
    }
  };

  for att in &payload.attachments {
    let filename = att
      .filename
      .as_deref()
      .and_then(disk_name)
      .unwrap_or_else(|| format!("file_{email_id}"));
    // Undecodable content degrades to an empty file; the attachment row is
    // still recorded.
    let data = match att.content.as_deref() {
      Some(content) => B64.decode(content).unwrap_or_default(),
      None => Vec::new(),
    };

    let path = state.config.upload_dir.join(&filename);
    if let Err(e) = tokio::fs::write(&path, &data).await {
      error!("attachment write error for {}: {e}", path.display());
      return (StatusCode::INTERNAL_SERVER_ERROR, "storage error").into_response();
    }

    if let Err(e) = sqlx::query("INSERT INTO attachments (email_id, filename, filepath) VALUES (?, ?, ?)")
      .bind(email_id)
      .bind(&filename)
      .bind(format!("/attachments/{filename}"))
      .execute(&state.db)
      .await
    {
      error!("attachment insert error: {e}");
      return (StatusCode::INTERNAL_SERVER_ERROR, "db error").into_response();
    }
  }

  info!("stored message {} for {}", email_id, payload.to);

  Json(WebhookResponse {
    status: "ok",
    id: email_id,
  })
  .into_response()
}
