//! Receiving-domain discovery via the Cloudflare Email Routing API.
//!
//! Every failure path collapses to the configured fallback domain; callers
//! never see an error and never get an empty list.

use crate::app::Config;
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Deserialize)]
struct DomainsEnvelope {
  #[serde(default)]
  success: bool,
  #[serde(default)]
  result: Vec<RoutingDomain>,
}

#[derive(Debug, Deserialize)]
struct RoutingDomain {
  name: String,
  #[serde(default)]
  status: String,
}

/// Currently routable receiving domains, in provider order.
pub async fn resolve_domains(config: &Config) -> Vec<String> {
  let (Some(token), Some(account)) = (config.cf_api_token.as_deref(), config.cf_account_id.as_deref())
  else {
    return vec![config.fallback_domain.clone()];
  };
  match fetch_active_domains(token, account).await {
    Ok(domains) if !domains.is_empty() => domains,
    Ok(_) => vec![config.fallback_domain.clone()],
    Err(e) => {
      warn!("domain lookup failed, using fallback: {e}");
      vec![config.fallback_domain.clone()]
    }
  }
}

async fn fetch_active_domains(token: &str, account: &str) -> Result<Vec<String>, reqwest::Error> {
  let url = format!("https://api.cloudflare.com/client/v4/accounts/{account}/email/routing/domains");
  let client = reqwest::Client::builder().timeout(LOOKUP_TIMEOUT).build()?;
  let envelope: DomainsEnvelope = client
    .get(url)
    .bearer_auth(token)
    .send()
    .await?
    .json()
    .await?;
  if !envelope.success {
    return Ok(Vec::new());
  }
  Ok(
    envelope
      .result
      .into_iter()
      .filter(|d| d.status == "active")
      .map(|d| d.name)
      .collect(),
  )
}
