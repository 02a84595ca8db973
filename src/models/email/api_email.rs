//! API representation of an inbox entry.

use super::db_email::DbEmail;
use crate::models::attachment::attachment_meta::AttachmentMeta;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiEmail {
  pub id: i64,
  pub from: String,
  pub subject: Option<String>,
  pub date: DateTime<Utc>,
  pub body_text: Option<String>,
  pub body_html: Option<String>,
  pub attachments: Vec<AttachmentMeta>,
}

impl ApiEmail {
  pub fn from_parts(e: DbEmail, attachments: Vec<AttachmentMeta>) -> Self {
    ApiEmail {
      id: e.id,
      from: e.sender,
      subject: e.subject,
      date: e.received_at,
      body_text: e.body_text,
      body_html: e.body_html,
      attachments,
    }
  }
}
