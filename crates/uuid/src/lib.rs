//! RFC 4122 version-4 UUID generation and validation.
//!
//! UUIDs are handled as plain strings in the hyphenated textual form:
//! `xxxxxxxx-xxxx-4xxx-Nxxx-xxxxxxxxxxxx`, lowercase on output, where `N` is one of
//! `8`, `9`, `a` or `b`.
//!
//! This crate provides:
//! - Generation of random v4 UUIDs ([`generate_uuid`], [`generate_multiple_uuids`]) and the
//!   all-zero sentinel ([`generate_empty_uuid`]).
//! - Syntactic validation ([`is_valid_uuid`]) and sentinel checks ([`is_empty_uuid`]).
//! - A [`RandomByteSource`] capability so callers and tests can choose where entropy comes
//!   from. By default a process-wide source is picked once: the operating system CSPRNG when it
//!   works, a non-cryptographic PRNG otherwise.
//!
//! ## Empty sentinel
//! `00000000-0000-0000-0000-000000000000` means "no identifier assigned". Its version and
//! variant digits are zero, so it never passes [`is_valid_uuid`].
//!
//! ## Example
//! ```
//! use tango_uuid::{generate_uuid, is_empty_uuid, is_valid_uuid, EMPTY_UUID};
//!
//! let id = generate_uuid();
//! assert!(is_valid_uuid(&id));
//! assert!(is_empty_uuid(EMPTY_UUID));
//! assert!(!is_valid_uuid(EMPTY_UUID));
//! ```

pub mod constants;
mod generate;
mod source;
mod validate;

pub use constants::EMPTY_UUID;
pub use generate::{
    format_v4, generate_empty_uuid, generate_multiple_uuids, generate_uuid, UuidGenerator,
};
pub use source::{system_source, PseudoRandom, RandomByteSource, SecureRandom, SystemRandom};
pub use validate::{is_empty_uuid, is_valid_uuid, is_valid_uuid_with, VersionPolicy};

#[cfg(feature = "serde")]
pub use validate::{is_empty_uuid_value, is_valid_uuid_value};

/// Error type for UUID operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UuidError {
    /// An argument was outside the accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for UUID operations.
pub type UuidResult<T> = Result<T, UuidError>;
