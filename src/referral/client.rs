use async_trait::async_trait;
use gloo_net::http::Request;
use log::{info, warn};
use thiserror::Error;

use super::models::{ReferralRequest, ReferralResponse};
use crate::config;

pub const REFER_PATH: &str = "/referdata";

#[derive(Debug, Error)]
pub enum ReferralError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("backend responded with status {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ReferralError {
    fn from(e: gloo_net::Error) -> Self {
        ReferralError::Request(e.to_string())
    }
}

/// Where a referral goes once it has passed validation. One call per submission, no retries.
#[async_trait(?Send)]
pub trait ReferralTransport {
    async fn send_referral(&self, request: &ReferralRequest) -> Result<ReferralResponse, ReferralError>;
}

/// Posts referrals to `<base>/referdata` with gloo-net.
#[derive(Clone, Debug, PartialEq)]
pub struct ReferralClient {
    url: String,
}

impl ReferralClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            url: config::endpoint(base_url, REFER_PATH),
        }
    }

    pub fn from_config() -> Self {
        Self::new(config::get_backend_url())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl ReferralTransport for ReferralClient {
    async fn send_referral(&self, request: &ReferralRequest) -> Result<ReferralResponse, ReferralError> {
        info!("Posting referral to {}", self.url);
        let response = Request::post(&self.url)
            .json(request)?
            .send()
            .await?;

        let status = response.status();
        let ok = response.ok();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if ok => return Err(ReferralError::Decode(e.to_string())),
            Err(e) => {
                warn!("Could not read error body: {}", e);
                String::new()
            }
        };
        read_response(ok, status, &body)
    }
}

/// Interprets a finished HTTP exchange.
///
/// A 2xx body must be a JSON record; missing fields are tolerated and read as a refusal.
/// A non-2xx body only counts as an answer when it still carries a `status` field,
/// anything else on an error status is a transport failure.
pub fn read_response(ok: bool, status: u16, body: &str) -> Result<ReferralResponse, ReferralError> {
    if ok {
        return serde_json::from_str::<ReferralResponse>(body)
            .map_err(|e| ReferralError::Decode(e.to_string()));
    }

    match serde_json::from_str::<ReferralResponse>(body) {
        Ok(parsed) if parsed.status.is_some() => {
            warn!("Referral refused with HTTP {}", status);
            Ok(parsed)
        }
        _ => Err(ReferralError::Status(status)),
    }
}
