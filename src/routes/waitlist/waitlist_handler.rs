use actix_web::{HttpResponse, web};
use anyhow::Context;

use super::{
    errors::WaitlistError,
    types::{SubmissionRequest, WaitlistSubmission},
};
use crate::{
    domain::{TurnstileToken, WaitlistEmail},
    formspark_client::{FormsparkClient, FormsparkError, is_likely_benign_transport_failure},
    turnstile_client::TurnstileClient,
};

#[tracing::instrument(
    name = "Joining the waitlist",
    skip(body, turnstile_client, formspark_client),
    fields(waitlist_email = tracing::field::Empty)
)]
pub async fn join_waitlist(
    body: web::Json<SubmissionRequest>,
    turnstile_client: web::Data<TurnstileClient>,
    formspark_client: web::Data<FormsparkClient>,
) -> Result<HttpResponse, WaitlistError> {
    let submission: WaitlistSubmission = body.into_inner().try_into()?;
    tracing::Span::current().record(
        "waitlist_email",
        tracing::field::display(&submission.email),
    );

    verify_token(&turnstile_client, &submission.token).await?;

    forward_lead(&formspark_client, &submission.email).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Successfully joined the waitlist!"
    })))
}

#[tracing::instrument(name = "Checking the bot-mitigation challenge", skip_all)]
async fn verify_token(
    turnstile_client: &TurnstileClient,
    token: &TurnstileToken,
) -> Result<(), WaitlistError> {
    let result = turnstile_client
        .verify(token)
        .await
        .context("Failed to reach the Turnstile verification service.")
        .map_err(WaitlistError::VerificationFailed)?;

    if !result.success {
        tracing::warn!(
            error_codes = ?result.error_codes,
            "Turnstile rejected the submitted token."
        );
        return Err(WaitlistError::VerificationFailed(anyhow::anyhow!(
            "Turnstile rejected the token: {:?}",
            result.error_codes
        )));
    }

    Ok(())
}

/// Transport failures classified as benign are reported as a success: the
/// lead has most likely been stored already. A response with a non-2xx
/// status never qualifies.
#[tracing::instrument(name = "Forwarding the lead", skip_all)]
async fn forward_lead(
    formspark_client: &FormsparkClient,
    email: &WaitlistEmail,
) -> Result<(), WaitlistError> {
    match formspark_client.submit(email).await {
        Ok(()) => Ok(()),
        Err(FormsparkError::Transport(e)) if is_likely_benign_transport_failure(&e) => {
            tracing::warn!(
                error.message = %e,
                "Formspark call failed in a way that usually means the lead was stored. \
                Reporting success."
            );
            Ok(())
        }
        Err(e @ FormsparkError::MissingFormId) => {
            tracing::error!("The Formspark form id is not set.");
            Err(WaitlistError::ConfigurationError(anyhow::Error::new(e)))
        }
        Err(e) => {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Waitlist submission failed."
            );
            Err(WaitlistError::UnexpectedError(
                anyhow::Error::new(e).context("Failed to forward the lead to Formspark."),
            ))
        }
    }
}
