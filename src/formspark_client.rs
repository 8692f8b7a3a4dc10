use std::error::Error;
use std::time::Duration;

use anyhow::Context;
use chrono::{SecondsFormat, Utc};
use reqwest::{Client, StatusCode, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::domain::WaitlistEmail;
use crate::routes::error_chain_fmt;

const USER_AGENT: &str = "Amber-Waitlist/1.0";

/// Forwards waitlist leads to a Formspark form.
#[derive(Clone)]
pub struct FormsparkClient {
    http_client: Client,
    form_url: Option<Url>,
    source: String,
}

#[derive(Serialize)]
struct LeadRequest<'a> {
    email: &'a str,
    timestamp: String,
    source: &'a str,
}

#[derive(thiserror::Error)]
pub enum FormsparkError {
    #[error("No Formspark form id is configured.")]
    MissingFormId,
    #[error("Failed to reach Formspark.")]
    Transport(#[source] reqwest::Error),
    #[error("Formspark rejected the submission with status {status}: {body}")]
    Rejected { status: StatusCode, body: String },
}

impl std::fmt::Debug for FormsparkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl FormsparkClient {
    /// `timeout` bounds the whole call; a call still in flight when it fires is dropped.
    pub fn new(
        base_url: String,
        form_id: Option<SecretString>,
        source: String,
        timeout: Duration,
    ) -> Result<Self, anyhow::Error> {
        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build the Formspark http client.")?;
        let base_url =
            Url::parse(&base_url).context("Failed parsing the Formspark base url.")?;
        let form_url = form_id
            .map(|id| base_url.join(id.expose_secret()))
            .transpose()
            .context("Failed building the Formspark form url.")?;

        Ok(Self {
            http_client,
            form_url,
            source,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.form_url.is_some()
    }

    #[tracing::instrument(name = "Forwarding a lead to Formspark", skip_all)]
    pub async fn submit(&self, email: &WaitlistEmail) -> Result<(), FormsparkError> {
        let url = self.form_url.clone().ok_or(FormsparkError::MissingFormId)?;

        let body = LeadRequest {
            email: email.as_ref(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            source: &self.source,
        };

        let response = self
            .http_client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(FormsparkError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
            return Err(FormsparkError::Rejected { status, body });
        }

        Ok(())
    }
}

/// Message fragments of TLS failures that Formspark's edge is known to produce
/// after it has already stored the submission.
const BENIGN_MESSAGE_FRAGMENTS: &[&str] = &[
    "packet length too long",
    "PACKET_LENGTH_TOO_LONG",
    "SSL",
    "aborted",
];

/// Whether a forwarding failure that never produced a response most likely
/// happened after Formspark had accepted the lead.
///
/// Walks the whole source chain: timeouts anywhere in it count, and so does
/// any link whose message carries one of the known TLS failure fragments.
pub fn is_likely_benign_transport_failure(error: &(dyn Error + 'static)) -> bool {
    let mut current = Some(error);

    while let Some(cause) = current {
        if is_timeout(cause) {
            return true;
        }

        let message = cause.to_string();
        if BENIGN_MESSAGE_FRAGMENTS
            .iter()
            .any(|fragment| message.contains(fragment))
        {
            return true;
        }

        current = cause.source();
    }

    false
}

fn is_timeout(error: &(dyn Error + 'static)) -> bool {
    if let Some(e) = error.downcast_ref::<reqwest::Error>() {
        return e.is_timeout();
    }
    if let Some(e) = error.downcast_ref::<std::io::Error>() {
        return e.kind() == std::io::ErrorKind::TimedOut;
    }
    false
}
