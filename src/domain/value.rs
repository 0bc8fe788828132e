use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// GatewayAPI account token used as the HTTP Basic username.
///
/// Invariant: non-empty after trimming.
pub struct ApiToken(String);

impl ApiToken {
    /// Configuration option name (`api_token`).
    pub const FIELD: &'static str = "api_token";

    /// Create a validated [`ApiToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Recipient phone number (MSISDN): full international number without
/// prefixed zeros or `+`, either as an integer or a numeric string.
///
/// GatewayAPI parses and validates the number server-side, so no local
/// format check is applied; whatever value is given here goes on the wire
/// unchanged.
pub enum Msisdn {
    Number(u64),
    Text(String),
}

impl Msisdn {
    /// Create an integer MSISDN, e.g. `4510203040`.
    pub fn number(value: u64) -> Self {
        Self::Number(value)
    }

    /// Create a string MSISDN, e.g. `"4510203040"`.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

impl From<u64> for Msisdn {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<String> for Msisdn {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Msisdn {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}
