use std::fmt;

use crate::domain::validation::ValidationError;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Fasmga API token, sent verbatim in the `Authorization` header.
///
/// Invariant: non-empty and made only of visible ASCII characters. The value is
/// kept exactly as provided.
pub struct Token(String);

impl Token {
    /// Name used in validation errors (`token`).
    pub const FIELD: &'static str = "token";

    /// Create a validated [`Token`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !value.chars().all(|c| c.is_ascii_graphic()) {
            return Err(ValidationError::InvalidToken);
        }
        Ok(Self(value))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(..)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Identifier of a shortened url (`id`).
///
/// Invariant: not blank. The value is kept exactly as provided.
pub struct UrlId(String);

impl UrlId {
    /// Field name used by Fasmga (`id`).
    pub const FIELD: &'static str = "id";

    /// Create a validated [`UrlId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Target url a short link redirects to (`url`).
///
/// Invariant: not blank. The value is kept exactly as provided; whether it is an
/// acceptable url is for the API to decide.
pub struct TargetUrl(String);

impl TargetUrl {
    /// Field name used by Fasmga (`url`).
    pub const FIELD: &'static str = "url";

    /// Create a validated [`TargetUrl`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the validated url.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Password protecting a short link (`password`).
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct UrlPassword(String);

impl UrlPassword {
    /// Field name used by Fasmga (`password`).
    pub const FIELD: &'static str = "password";

    /// Create a validated [`UrlPassword`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for UrlPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UrlPassword(..)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unix timestamp in seconds.
pub struct UnixTimestamp(u64);

impl UnixTimestamp {
    /// Create a timestamp value (no range validation is performed).
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying timestamp in seconds.
    pub fn value(self) -> u64 {
        self.0
    }
}
