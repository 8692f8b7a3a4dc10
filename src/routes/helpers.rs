use std::error::Error;

use actix_web::{HttpRequest, error::JsonPayloadError};

use super::WaitlistError;

pub fn error_chain_fmt(e: &impl Error, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    writeln!(f, "{e}\n")?;
    let mut current = e.source();

    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{cause}")?;
        current = cause.source();
    }

    Ok(())
}

pub fn e500<T>(e: T) -> actix_web::Error
where
    T: std::fmt::Debug + std::fmt::Display + 'static,
{
    actix_web::error::ErrorInternalServerError(e)
}

/// A body that cannot be decoded is an unexpected failure, never a hint to the caller.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(error.message = %err, "Failed to decode the waitlist request body");
    WaitlistError::UnexpectedError(anyhow::anyhow!("Failed to decode the request body: {err}"))
        .into()
}
