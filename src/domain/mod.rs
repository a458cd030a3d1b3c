//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    CreateUrl, EditOptions, EditUrl, IdStrategy, IdType, PasswordUpdate, REMOVE_PASSWORD_SENTINEL,
    ShortOptions,
};
pub use response::{Ratelimit, SecurityType, SuccessResponse, UrlRecord, User};
pub use validation::ValidationError;
pub use value::{TargetUrl, Token, UnixTimestamp, UrlId, UrlPassword};
