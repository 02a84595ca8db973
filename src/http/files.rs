//! Read-only file serving for stored attachments and static assets.

use crate::{app::AppState, util::content_type_for};
use axum::{
  extract::{Path as AxumPath, State},
  http::{HeaderMap, HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};
use std::path::Path;

/// Bytes previously written by the webhook, at the path recorded in the
/// attachment row.
pub async fn serve_attachment(
  State(state): State<AppState>,
  AxumPath(filename): AxumPath<String>,
) -> Response {
  serve_from(&state.config.upload_dir, &filename).await
}

/// Static assets (client script, stylesheet).
pub async fn serve_static(
  State(state): State<AppState>,
  AxumPath(file): AxumPath<String>,
) -> Response {
  serve_from(&state.config.static_dir, &file).await
}

async fn serve_from(dir: &Path, name: &str) -> Response {
  // Final path component only; the route never matches nested paths anyway.
  let Some(name) = Path::new(name).file_name().and_then(|n| n.to_str()) else {
    return (StatusCode::NOT_FOUND, "not found").into_response();
  };
  match tokio::fs::read(dir.join(name)).await {
    Ok(bytes) => {
      let mut headers = HeaderMap::new();
      headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(content_type_for(name)),
      );
      if let Ok(disposition) = format!("inline; filename=\"{name}\"").parse() {
        headers.insert(header::CONTENT_DISPOSITION, disposition);
      }
      (headers, bytes).into_response()
    }
    Err(_) => (StatusCode::NOT_FOUND, "not found").into_response(),
  }
}
