use crate::domain::validation::ValidationError;
use crate::domain::value::{TargetUrl, UrlId, UrlPassword};

/// Sentinel password value that tells Fasmga to clear a url's password.
pub const REMOVE_PASSWORD_SENTINEL: &str = "#remove#";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Shape of the id Fasmga generates when no custom id is given (`idtype`).
pub enum IdType {
    /// Lowercase letters, e.g. `abcdefgh`.
    Lowercase,
    /// Lowercase letters and digits, e.g. `abc12345`.
    LowercaseDigits,
    /// Mixed-case letters, e.g. `aBCde`.
    MixedCase,
}

impl IdType {
    /// Field name used by Fasmga (`idtype`).
    pub const FIELD: &'static str = "idtype";

    /// Wire value understood by the API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lowercase => "abcdefgh",
            Self::LowercaseDigits => "abc12345",
            Self::MixedCase => "aBCde",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// How the id of a new short link is chosen. Always exactly one strategy.
pub enum IdStrategy {
    Custom(UrlId),
    Generated(IdType),
}

#[derive(Debug, Clone, Default)]
/// Caller input for [`crate::FasmgaClient::short`].
///
/// Fields are loosely typed so that a missing value surfaces as a
/// [`ValidationError`] returned by the call rather than a compile error.
/// `nsfw` must be set explicitly; `Some(false)` is valid. When both `id` and
/// `id_type` are set, `id` wins.
pub struct ShortOptions {
    pub url: Option<String>,
    pub nsfw: Option<bool>,
    pub id: Option<String>,
    pub id_type: Option<IdType>,
    pub password: Option<String>,
    pub captcha: Option<bool>,
    pub unembedify: Option<bool>,
}

impl ShortOptions {
    /// Options for a link with a server-generated id.
    pub fn generated(url: impl Into<String>, nsfw: bool, id_type: IdType) -> Self {
        Self {
            url: Some(url.into()),
            nsfw: Some(nsfw),
            id_type: Some(id_type),
            ..Default::default()
        }
    }

    /// Options for a link with a custom id.
    pub fn custom(url: impl Into<String>, nsfw: bool, id: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            nsfw: Some(nsfw),
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Check required fields and resolve the id strategy.
    pub fn validate(&self) -> Result<CreateUrl, ValidationError> {
        let url = match self.url.as_deref() {
            Some(url) => TargetUrl::new(url)?,
            None => {
                return Err(ValidationError::Empty {
                    field: TargetUrl::FIELD,
                });
            }
        };
        let nsfw = self.nsfw.ok_or(ValidationError::MissingNsfw)?;

        let custom_id = self.id.as_deref().filter(|id| !id.is_empty());
        let id = match (custom_id, self.id_type) {
            (Some(id), _) => IdStrategy::Custom(UrlId::new(id)?),
            (None, Some(id_type)) => IdStrategy::Generated(id_type),
            (None, None) => return Err(ValidationError::MissingIdStrategy),
        };

        let password = self.password.clone().map(UrlPassword::new).transpose()?;

        Ok(CreateUrl {
            url,
            nsfw,
            id,
            password,
            captcha: self.captcha,
            unembedify: self.unembedify,
        })
    }
}

#[derive(Debug, Clone)]
/// Validated create request produced by [`ShortOptions::validate`].
pub struct CreateUrl {
    url: TargetUrl,
    nsfw: bool,
    id: IdStrategy,
    password: Option<UrlPassword>,
    captcha: Option<bool>,
    unembedify: Option<bool>,
}

impl CreateUrl {
    pub fn url(&self) -> &TargetUrl {
        &self.url
    }

    pub fn nsfw(&self) -> bool {
        self.nsfw
    }

    pub fn id(&self) -> &IdStrategy {
        &self.id
    }

    pub fn password(&self) -> Option<&UrlPassword> {
        self.password.as_ref()
    }

    pub fn captcha(&self) -> Option<bool> {
        self.captcha
    }

    pub fn unembedify(&self) -> Option<bool> {
        self.unembedify
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// New password for an existing link, or removal of the current one.
pub enum PasswordUpdate {
    Set(UrlPassword),
    Remove,
}

impl PasswordUpdate {
    /// Build a [`PasswordUpdate::Set`] from a raw password.
    pub fn set(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::Set(UrlPassword::new(value)?))
    }

    /// Wire value; [`PasswordUpdate::Remove`] maps to [`REMOVE_PASSWORD_SENTINEL`].
    pub fn as_str(&self) -> &str {
        match self {
            Self::Set(password) => password.as_str(),
            Self::Remove => REMOVE_PASSWORD_SENTINEL,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Caller input for [`crate::FasmgaClient::edit`]. At least one field must be set.
pub struct EditOptions {
    pub nsfw: Option<bool>,
    pub password: Option<PasswordUpdate>,
    pub captcha: Option<bool>,
    pub unembedify: Option<bool>,
}

impl EditOptions {
    /// Whether any editable field is present.
    pub fn has_changes(&self) -> bool {
        self.nsfw.is_some()
            || self.password.is_some()
            || self.captcha.is_some()
            || self.unembedify.is_some()
    }
}

#[derive(Debug, Clone)]
/// Validated edit request: a target id plus a non-empty set of changes.
pub struct EditUrl {
    id: UrlId,
    options: EditOptions,
}

impl EditUrl {
    pub fn new(id: impl Into<String>, options: EditOptions) -> Result<Self, ValidationError> {
        if !options.has_changes() {
            return Err(ValidationError::NoEditableField);
        }
        Ok(Self {
            id: UrlId::new(id)?,
            options,
        })
    }

    pub fn id(&self) -> &UrlId {
        &self.id
    }

    pub fn options(&self) -> &EditOptions {
        &self.options
    }
}
