//! Utility functions: tracing, randomness, content types, HTML escape.

use rand::Rng;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize pretty CLI logging.
pub fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  fmt()
    .with_env_filter(filter)
    .with_target(false)
    .pretty()
    .init();
}

const LOCAL_PART_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Random lowercase-alphanumeric local part for a generated address.
///
/// `thread_rng` is a CSPRNG seeded from the OS, which is what throwaway
/// address generation wants.
pub fn random_local_part(len: usize) -> String {
  let mut rng = rand::thread_rng();
  (0..len)
    .map(|_| LOCAL_PART_ALPHABET[rng.gen_range(0..LOCAL_PART_ALPHABET.len())] as char)
    .collect()
}

/// Content type for a stored file, by extension.
pub fn content_type_for(name: &str) -> &'static str {
  match name.rsplit('.').next().map(str::to_ascii_lowercase).as_deref() {
    Some("txt") => "text/plain; charset=utf-8",
    Some("html") | Some("htm") => "text/html; charset=utf-8",
    Some("css") => "text/css",
    Some("js") => "text/javascript",
    Some("json") => "application/json",
    Some("png") => "image/png",
    Some("jpg") | Some("jpeg") => "image/jpeg",
    Some("gif") => "image/gif",
    Some("pdf") => "application/pdf",
    _ => "application/octet-stream",
  }
}

/// Minimal HTML escaping for text placed in markup or attributes.
pub fn html_escape(s: &str) -> String {
  s.replace('&', "&amp;")
    .replace('<', "&lt;")
    .replace('>', "&gt;")
    .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn local_part_has_requested_length_and_charset() {
    for _ in 0..32 {
      let part = random_local_part(8);
      assert_eq!(part.len(), 8);
      assert!(part.bytes().all(|b| LOCAL_PART_ALPHABET.contains(&b)));
    }
  }

  #[test]
  fn content_type_falls_back_to_octet_stream() {
    assert_eq!(content_type_for("a.txt"), "text/plain; charset=utf-8");
    assert_eq!(content_type_for("photo.JPG"), "image/jpeg");
    assert_eq!(content_type_for("README"), "application/octet-stream");
    assert_eq!(content_type_for("archive.bin"), "application/octet-stream");
  }

  #[test]
  fn html_escape_covers_attribute_context() {
    assert_eq!(html_escape(r#"<a b="c">&"#), "&lt;a b=&quot;c&quot;&gt;&amp;");
  }
}
