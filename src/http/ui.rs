//! Inbox shell HTML.
//!
//! The page is a shell only: the client script fills it from the JSON API.

use crate::util::html_escape;
use axum::{extract::Path as AxumPath, response::Html};

pub async fn index() -> Html<String> {
  render_shell(None)
}

/// Same shell, pre-filled with the address embedded in the URL path.
pub async fn index_with_address(AxumPath(email): AxumPath<String>) -> Html<String> {
  render_shell(Some(&email))
}

fn render_shell(initial_address: Option<&str>) -> Html<String> {
  let template = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>mailbin</title>
  <link rel="stylesheet" href="/static/style.css" />
</head>
<body data-initial-address="{ADDRESS}">
  <h1>mailbin</h1>
  <p class="tagline">Disposable inboxes. Mail to any address shows up here.</p>
  <div class="address-bar">
    <input id="address" placeholder="pick an address" />
    <select id="domains"></select>
    <button id="generate">New</button>
    <button id="copy">Copy</button>
    <button id="refresh">Refresh</button>
  </div>
  <div id="inbox" class="inbox"></div>
  <div id="detail" class="detail hidden"></div>
  <script src="/static/app.js"></script>
</body>
</html>
"#;
  let address = initial_address.map(html_escape).unwrap_or_default();
  Html(template.replace("{ADDRESS}", &address))
}
