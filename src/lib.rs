//! Typed Rust client for the Fasmga URL shortener HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer for
//! wire-format details, and a small client layer orchestrating requests. Every
//! call checks the remaining rate-limit quota first and returns failures as
//! [`FasmgaError`] values; nothing panics on HTTP errors.
//!
//! ```rust,no_run
//! use fasmga::{FasmgaClient, IdType, ShortOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), fasmga::FasmgaError> {
//!     let client = FasmgaClient::new("...")?;
//!     let options = ShortOptions::generated("https://example.com", false, IdType::MixedCase);
//!     let created = client.short(options).await?;
//!     println!("{}", created.success);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{ErrorKind, FasmgaClient, FasmgaClientBuilder, FasmgaError};
pub use domain::{
    EditOptions, IdType, PasswordUpdate, REMOVE_PASSWORD_SENTINEL, Ratelimit, SecurityType,
    ShortOptions, SuccessResponse, Token, UnixTimestamp, UrlId, UrlRecord, User, ValidationError,
};
