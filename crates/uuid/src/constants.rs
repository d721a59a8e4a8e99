//! Constants describing the textual UUID layout.
//!
//! Kept in one place so the generator and the validator agree on positions.

/// The all-zero sentinel meaning "no identifier assigned".
pub const EMPTY_UUID: &str = "00000000-0000-0000-0000-000000000000";

/// Length of a hyphenated UUID string.
pub const UUID_LEN: usize = 36;

/// Number of raw bytes behind a UUID.
pub const UUID_BYTES: usize = 16;

/// Indices of the four hyphens in the hyphenated form.
pub const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// Index of the version digit.
pub const VERSION_INDEX: usize = 14;

/// Index of the variant digit.
pub const VARIANT_INDEX: usize = 19;
