use once_cell::sync::Lazy;
use regex::Regex;

/// Deliberately lax: a non-whitespace local part, an `@` and a dotted domain.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Email pattern must be a valid regex.")
});

#[derive(Debug, Clone)]
pub struct WaitlistEmail(String);

impl WaitlistEmail {
    pub fn parse(s: String) -> Result<Self, String> {
        if !EMAIL_PATTERN.is_match(&s) {
            return Err(format!("{s} is not a valid waitlist email."));
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for WaitlistEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WaitlistEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for WaitlistEmail {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        WaitlistEmail::parse(value)
    }
}
