use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidToken,
    InvalidUrl { input: String },
    MissingNsfw,
    MissingIdStrategy,
    NoEditableField,
    /// The API answered `400 Bad Request`; `body` is the serialized JSON reply.
    Rejected { body: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidToken => write!(f, "token must contain only visible ASCII characters"),
            Self::InvalidUrl { input } => write!(f, "invalid url: {input}"),
            Self::MissingNsfw => write!(f, "nsfw must be set to true or false"),
            Self::MissingIdStrategy => {
                write!(f, "either a custom id or an id type must be provided")
            }
            Self::NoEditableField => write!(
                f,
                "at least one of nsfw, password, captcha, unembedify must be provided"
            ),
            Self::Rejected { body } => write!(f, "400 status code - {body}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "url" };
        assert_eq!(err.to_string(), "url must not be empty");

        let err = ValidationError::InvalidUrl {
            input: "nope".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid url: nope");

        let err = ValidationError::MissingNsfw;
        assert_eq!(err.to_string(), "nsfw must be set to true or false");

        let err = ValidationError::NoEditableField;
        assert_eq!(
            err.to_string(),
            "at least one of nsfw, password, captcha, unembedify must be provided"
        );
    }

    #[test]
    fn rejected_message_embeds_body() {
        let err = ValidationError::Rejected {
            body: r#"{"reason":"bad"}"#.to_owned(),
        };
        assert_eq!(err.to_string(), r#"400 status code - {"reason":"bad"}"#);
    }
}
