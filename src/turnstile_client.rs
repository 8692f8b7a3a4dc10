use anyhow::Context;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::TurnstileToken;

/// Talks to Cloudflare's `siteverify` endpoint.
#[derive(Clone)]
pub struct TurnstileClient {
    http_client: Client,
    verify_url: Url,
    secret_key: SecretString,
}

#[derive(Serialize)]
struct VerifyRequest<'a> {
    secret: &'a str,
    response: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct VerificationResult {
    pub success: bool,
    #[serde(rename = "error-codes", default)]
    pub error_codes: Vec<String>,
}

impl TurnstileClient {
    pub fn new(base_url: String, secret_key: SecretString) -> Result<Self, anyhow::Error> {
        let http_client = Client::builder()
            .build()
            .context("Failed to build the Turnstile http client.")?;
        let verify_url = Url::parse(&base_url)
            .and_then(|base| base.join("turnstile/v0/siteverify"))
            .context("Failed parsing the Turnstile base url.")?;

        Ok(Self {
            http_client,
            verify_url,
            secret_key,
        })
    }

    #[tracing::instrument(name = "Verifying a Turnstile token", skip_all)]
    pub async fn verify(
        &self,
        token: &TurnstileToken,
    ) -> Result<VerificationResult, reqwest::Error> {
        let body = VerifyRequest {
            secret: self.secret_key.expose_secret(),
            response: token.as_ref(),
        };

        self.http_client
            .post(self.verify_url.clone())
            .form(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<VerificationResult>()
            .await
    }
}
