use serde_json::Value;

use crate::domain::{TurnstileToken, WaitlistEmail};

use super::errors::WaitlistError;

/// The JSON body posted by the landing page form.
///
/// Fields stay untyped so a mistyped field still reaches the checks below
/// instead of failing the whole decode.
#[derive(serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub turnstile_token: Option<Value>,
    #[serde(default)]
    pub honeypot: Option<Value>,
}

/// A submission that passed every local check and still needs its token verified.
#[derive(Debug)]
pub struct WaitlistSubmission {
    pub email: WaitlistEmail,
    pub token: TurnstileToken,
}

impl TryFrom<SubmissionRequest> for WaitlistSubmission {
    type Error = WaitlistError;

    /// Checks run in a fixed order and stop at the first failure.
    fn try_from(value: SubmissionRequest) -> Result<Self, Self::Error> {
        if is_filled(value.honeypot.as_ref()) {
            return Err(WaitlistError::HoneypotTripped);
        }

        let email = WaitlistEmail::parse(into_string(value.email).unwrap_or_default())
            .map_err(|e| WaitlistError::InvalidEmail(anyhow::anyhow!(e)))?;
        let token = TurnstileToken::parse(into_string(value.turnstile_token))
            .ok_or(WaitlistError::MissingToken)?;

        Ok(Self { email, token })
    }
}

/// Anything but null, `false`, `0` or an empty string counts as filled in.
fn is_filled(field: Option<&Value>) -> bool {
    match field {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(_) => true,
    }
}

fn into_string(field: Option<Value>) -> Option<String> {
    match field {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}
