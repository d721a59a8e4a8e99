//! Version-4 UUID generation.

use crate::constants::{EMPTY_UUID, UUID_BYTES};
use crate::source::{system_source, RandomByteSource};
use crate::{UuidError, UuidResult};
use std::fmt;
use std::sync::Arc;

/// Formats 16 random bytes as a hyphenated, lowercase v4 UUID.
///
/// The high nibble of byte 6 becomes `4` (version) and the top two bits of byte 8 become `10`
/// (RFC 4122 variant). Every other bit is taken from `bytes` unchanged.
pub fn format_v4(bytes: [u8; UUID_BYTES]) -> String {
    uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .hyphenated()
        .to_string()
}

/// Generates v4 UUIDs from an injected [`RandomByteSource`].
///
/// # Construction
/// - [`UuidGenerator::new`] (or `Default`) uses the process-wide [`system_source`].
/// - [`UuidGenerator::with_source`] takes any source, which is how tests get deterministic
///   output.
///
/// The generator holds no state of its own, so it is cheap to clone and safe to share across
/// threads.
#[derive(Clone)]
pub struct UuidGenerator {
    source: Arc<dyn RandomByteSource>,
}

impl Default for UuidGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for UuidGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UuidGenerator").finish_non_exhaustive()
    }
}

impl UuidGenerator {
    /// Creates a generator backed by the process-wide random source.
    pub fn new() -> Self {
        Self {
            source: system_source(),
        }
    }

    /// Creates a generator that draws from `source`.
    pub fn with_source<S>(source: S) -> Self
    where
        S: RandomByteSource + 'static,
    {
        Self {
            source: Arc::new(source),
        }
    }

    /// Generates a single random v4 UUID.
    ///
    /// The result is always 36 characters, lowercase, with `4` at the version position and one
    /// of `8`, `9`, `a`, `b` at the variant position.
    pub fn generate_uuid(&self) -> String {
        let mut bytes = [0u8; UUID_BYTES];
        self.source.fill(&mut bytes);
        format_v4(bytes)
    }

    /// Generates `count` independent v4 UUIDs, in generation order.
    ///
    /// A `count` of zero yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidArgument`] if `count` is negative, or too large to allocate
    /// a batch for. Nothing is generated in either case.
    pub fn generate_multiple_uuids(&self, count: i64) -> UuidResult<Vec<String>> {
        if count < 0 {
            return Err(UuidError::InvalidArgument(
                "Count must be a non-negative number".into(),
            ));
        }
        let too_large = || UuidError::InvalidArgument(format!("Count is too large: {}", count));

        // Reserve up front so an oversized batch fails before any randomness is drawn.
        let count = usize::try_from(count).map_err(|_| too_large())?;
        let mut uuids = Vec::new();
        uuids.try_reserve_exact(count).map_err(|_| too_large())?;

        tracing::debug!("generating {} uuids", count);
        for _ in 0..count {
            uuids.push(self.generate_uuid());
        }
        Ok(uuids)
    }

    /// Returns the all-zero sentinel. Draws no randomness.
    pub fn generate_empty_uuid(&self) -> String {
        generate_empty_uuid()
    }
}

/// Generates a random v4 UUID using the process-wide random source.
pub fn generate_uuid() -> String {
    UuidGenerator::new().generate_uuid()
}

/// Generates `count` random v4 UUIDs using the process-wide random source.
///
/// # Errors
///
/// Returns [`UuidError::InvalidArgument`] if `count` is negative.
pub fn generate_multiple_uuids(count: i64) -> UuidResult<Vec<String>> {
    UuidGenerator::new().generate_multiple_uuids(count)
}

/// Returns `00000000-0000-0000-0000-000000000000`.
pub fn generate_empty_uuid() -> String {
    EMPTY_UUID.to_string()
}
