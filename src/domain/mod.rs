mod turnstile_token;
mod waitlist_email;

pub use turnstile_token::TurnstileToken;
pub use waitlist_email::WaitlistEmail;
