//! Public attachment metadata.

use serde::Serialize;
use sqlx::FromRow;

/// Filename plus the URL path the bytes are served from.
#[derive(Debug, Serialize, FromRow)]
pub struct AttachmentMeta {
  pub filename: String,
  pub url: String,
}
