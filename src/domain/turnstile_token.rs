/// A bot-mitigation token handed over by the Turnstile widget.
#[derive(Debug, Clone)]
pub struct TurnstileToken(String);

impl TurnstileToken {
    /// Missing, null and empty tokens all mean the widget produced nothing.
    pub fn parse(s: Option<String>) -> Option<Self> {
        s.filter(|token| !token.is_empty()).map(Self)
    }
}

impl AsRef<str> for TurnstileToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
