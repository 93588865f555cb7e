use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::AppError;

const TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

/// Identity asserted by the external provider after token verification.
#[derive(Debug, Clone)]
pub struct VerifiedIdentity {
    pub email: String,
    pub name: Option<String>,
    pub subject: String,
}

/// Seam for external ID-token verification so handlers and tests never talk
/// to the real provider directly.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity, AppError>;
}

/// Verifies Google ID tokens against the tokeninfo endpoint.
pub struct GoogleVerifier {
    http: reqwest::Client,
    client_id: String,
}

#[derive(Debug, Deserialize)]
struct TokenInfo {
    aud: String,
    email: Option<String>,
    name: Option<String>,
    sub: String,
}

impl GoogleVerifier {
    pub fn new(client_id: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            client_id,
        }
    }

    fn accept(&self, info: TokenInfo) -> Result<VerifiedIdentity, AppError> {
        if info.aud != self.client_id {
            warn!(aud = %info.aud, "google token audience mismatch");
            return Err(AppError::Unauthorized);
        }
        let email = info.email.ok_or(AppError::Unauthorized)?;
        Ok(VerifiedIdentity {
            email,
            name: info.name,
            subject: info.sub,
        })
    }
}

#[async_trait]
impl IdentityVerifier for GoogleVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity, AppError> {
        let response = self
            .http
            .get(TOKENINFO_URL)
            .query(&[("id_token", token)])
            .send()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;

        // Google answers 4xx for malformed or expired tokens.
        if !response.status().is_success() {
            warn!(status = %response.status(), "google token rejected");
            return Err(AppError::Unauthorized);
        }

        let info: TokenInfo = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;
        debug!(sub = %info.sub, "google token verified");
        self.accept(info)
    }
}
