//! Credential value object.
//!
//! The API key travels as an explicit value handed to the gateway rather
//! than ambient process state. Environment resolution checks the fixed
//! names `GEMINI_API_KEY` then `GOOGLE_API_KEY`; interactive entry is the
//! presentation layer's job. No validation of the secret's shape.

/// An operator-supplied API secret.
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Resolve from the environment, first match wins. Empty values count
    /// as absent.
    pub fn from_env() -> Option<Self> {
        ["GEMINI_API_KEY", "GOOGLE_API_KEY"]
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|v| !v.trim().is_empty())
            .map(Self)
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// The raw secret, for building authenticated requests.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}
