//! UUID string validation.
//!
//! These are purely syntactic checks. Nothing here parses a UUID into fields.

use crate::constants::{EMPTY_UUID, HYPHEN_POSITIONS, UUID_LEN, VARIANT_INDEX, VERSION_INDEX};

/// Which version digits [`is_valid_uuid_with`] accepts.
///
/// [`is_valid_uuid`] uses [`VersionPolicy::AnyRfc4122`]: existing callers rely on UUIDs of
/// versions 1 to 5 passing, even though only v4 values are ever generated here. Use
/// [`VersionPolicy::V4Only`] to reject everything that is not a random UUID.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VersionPolicy {
    /// Version digit `1` to `5`.
    #[default]
    AnyRfc4122,
    /// Version digit `4` only.
    V4Only,
}

impl VersionPolicy {
    fn accepts(self, digit: u8) -> bool {
        match self {
            Self::AnyRfc4122 => matches!(digit, b'1'..=b'5'),
            Self::V4Only => digit == b'4',
        }
    }
}

/// Returns true if `input` is a hyphenated RFC 4122 UUID of version 1 to 5.
///
/// The whole string must match; surrounding whitespace is not trimmed. Hex digits, including
/// the variant digit, are matched case-insensitively.
///
/// The all-zero sentinel does not pass: its version and variant digits are `0`.
pub fn is_valid_uuid(input: &str) -> bool {
    is_valid_uuid_with(input, VersionPolicy::AnyRfc4122)
}

/// Like [`is_valid_uuid`], with an explicit rule for the version digit.
pub fn is_valid_uuid_with(input: &str, policy: VersionPolicy) -> bool {
    let bytes = input.as_bytes();
    if bytes.len() != UUID_LEN {
        return false;
    }

    bytes.iter().enumerate().all(|(i, &b)| match i {
        _ if HYPHEN_POSITIONS.contains(&i) => b == b'-',
        VERSION_INDEX => policy.accepts(b),
        VARIANT_INDEX => matches!(b.to_ascii_lowercase(), b'8' | b'9' | b'a' | b'b'),
        _ => b.is_ascii_hexdigit(),
    })
}

/// Returns true only for the exact string `00000000-0000-0000-0000-000000000000`.
pub fn is_empty_uuid(input: &str) -> bool {
    input == EMPTY_UUID
}

/// [`is_valid_uuid`] for dynamically typed input. Anything that is not a JSON string is
/// simply not a valid UUID.
#[cfg(feature = "serde")]
pub fn is_valid_uuid_value(value: &serde_json::Value) -> bool {
    value.as_str().is_some_and(is_valid_uuid)
}

/// [`is_empty_uuid`] for dynamically typed input.
#[cfg(feature = "serde")]
pub fn is_empty_uuid_value(value: &serde_json::Value) -> bool {
    value.as_str().is_some_and(is_empty_uuid)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "f47ac10b-58cc-4372-a567-0e02b2c3d479";

    #[test]
    fn test_valid_lowercase() {
        assert!(is_valid_uuid(VALID));
    }

    #[test]
    fn test_valid_uppercase() {
        assert!(is_valid_uuid("F47AC10B-58CC-4372-A567-0E02B2C3D479"));
    }

    #[test]
    fn test_valid_mixed_case() {
        assert!(is_valid_uuid("f47AC10b-58cC-4372-A567-0e02B2c3d479"));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(!is_valid_uuid(&VALID[..35]));
        assert!(!is_valid_uuid(&format!("{}x", VALID)));
        assert!(!is_valid_uuid(&format!("{}0", VALID)));
        assert!(!is_valid_uuid(""));
    }

    #[test]
    fn test_rejects_text() {
        assert!(!is_valid_uuid("not-a-uuid"));
    }

    #[test]
    fn test_rejects_surrounding_whitespace() {
        assert!(!is_valid_uuid(&format!(" {}", &VALID[..35])));
        assert!(!is_valid_uuid(&format!(" {} ", VALID)));
    }

    #[test]
    fn test_rejects_unhyphenated() {
        assert!(!is_valid_uuid("f47ac10b58cc4372a5670e02b2c3d479"));
        // Right length, hyphen moved one place.
        assert!(!is_valid_uuid("f47ac10b5-8cc-4372-a567-0e02b2c3d479"));
    }

    #[test]
    fn test_rejects_non_hex() {
        assert!(!is_valid_uuid("g47ac10b-58cc-4372-a567-0e02b2c3d479"));
        assert!(!is_valid_uuid("f47ac10b-58cc-4372-a567-0e02b2c3d47z"));
    }

    #[test]
    fn test_rejects_multibyte_input_of_same_byte_length() {
        // 34 ASCII bytes plus one two-byte character.
        let input = "f47ac10b-58cc-4372-a567-0e02b2c3d4é";
        assert_eq!(input.len(), 36);
        assert!(!is_valid_uuid(input));
    }

    #[test]
    fn test_version_digit_range() {
        for (digit, expected) in [
            ('0', false),
            ('1', true),
            ('3', true),
            ('5', true),
            ('6', false),
            ('a', false),
        ] {
            let candidate = format!("f47ac10b-58cc-{}372-a567-0e02b2c3d479", digit);
            assert_eq!(is_valid_uuid(&candidate), expected, "version {}", digit);
        }
    }

    #[test]
    fn test_variant_digit_range() {
        for (digit, expected) in [
            ('7', false),
            ('8', true),
            ('9', true),
            ('a', true),
            ('B', true),
            ('c', false),
            ('0', false),
        ] {
            let candidate = format!("f47ac10b-58cc-4372-{}567-0e02b2c3d479", digit);
            assert_eq!(is_valid_uuid(&candidate), expected, "variant {}", digit);
        }
    }

    #[test]
    fn test_v4_only_policy() {
        let v1 = "f47ac10b-58cc-1372-a567-0e02b2c3d479";

        assert!(is_valid_uuid(v1));
        assert!(!is_valid_uuid_with(v1, VersionPolicy::V4Only));
        assert!(is_valid_uuid_with(VALID, VersionPolicy::V4Only));
    }

    #[test]
    fn test_default_policy_is_permissive() {
        assert_eq!(VersionPolicy::default(), VersionPolicy::AnyRfc4122);
    }

    #[test]
    fn test_empty_sentinel() {
        assert!(is_empty_uuid(EMPTY_UUID));
        assert!(!is_valid_uuid(EMPTY_UUID));
    }

    #[test]
    fn test_empty_rejects_near_misses() {
        assert!(!is_empty_uuid("00000000-0000-0000-0000-000000000001"));
        assert!(!is_empty_uuid("00000000000000000000000000000000"));
        assert!(!is_empty_uuid(" 00000000-0000-0000-0000-000000000000"));
        assert!(!is_empty_uuid(""));
        assert!(!is_empty_uuid(VALID));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_value_inputs() {
        use serde_json::json;

        assert!(is_valid_uuid_value(&json!(VALID)));
        assert!(!is_valid_uuid_value(&json!(123)));
        assert!(!is_valid_uuid_value(&json!(null)));
        assert!(!is_valid_uuid_value(&json!([VALID])));
        assert!(!is_valid_uuid_value(&json!({ "id": VALID })));

        assert!(is_empty_uuid_value(&json!(EMPTY_UUID)));
        assert!(!is_empty_uuid_value(&json!(0)));
        assert!(!is_empty_uuid_value(&json!(false)));
    }
}
