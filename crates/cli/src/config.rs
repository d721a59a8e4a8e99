//! CLI runtime configuration.
//!
//! Environment variables are read once in `main` and turned into a [`CliConfig`]. Command
//! handlers only ever see the resolved struct.

use anyhow::{anyhow, Context};
use std::str::FromStr;
use tango_uuid::{PseudoRandom, SecureRandom, SystemRandom, UuidGenerator, VersionPolicy};

/// Selects the random source: `auto`, `secure` or `pseudo`.
pub const RNG_ENV: &str = "TANGO_UUID_RNG";

/// Makes `validate` reject non-v4 UUIDs by default.
pub const STRICT_ENV: &str = "TANGO_UUID_STRICT";

/// Which random source generated UUIDs come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RngChoice {
    /// Process-wide source, detected on first use.
    #[default]
    Auto,
    /// OS generator, degrading per draw only if it fails.
    Secure,
    /// Non-cryptographic generator.
    Pseudo,
}

impl FromStr for RngChoice {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Ok(Self::Auto),
            "secure" => Ok(Self::Secure),
            "pseudo" => Ok(Self::Pseudo),
            other => Err(anyhow!(
                "unknown random source '{}' (expected auto, secure or pseudo)",
                other
            )),
        }
    }
}

/// Configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    rng: RngChoice,
    strict: bool,
}

impl CliConfig {
    /// Create a configuration from already-resolved values.
    pub fn new(rng: RngChoice, strict: bool) -> Self {
        Self { rng, strict }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_env_values(std::env::var(RNG_ENV).ok(), std::env::var(STRICT_ENV).ok())
    }

    /// Build configuration from raw variable values. Missing values take defaults.
    pub fn from_env_values(rng: Option<String>, strict: Option<String>) -> anyhow::Result<Self> {
        let rng = rng
            .map(|v| v.parse::<RngChoice>())
            .transpose()
            .with_context(|| format!("invalid {}", RNG_ENV))?
            .unwrap_or_default();

        let strict = strict
            .map(|v| parse_flag(&v))
            .transpose()
            .with_context(|| format!("invalid {}", STRICT_ENV))?
            .unwrap_or(false);

        Ok(Self::new(rng, strict))
    }

    /// The configured random source.
    pub fn rng(&self) -> RngChoice {
        self.rng
    }

    /// Build a generator over the configured random source.
    pub fn generator(&self) -> UuidGenerator {
        match self.rng {
            RngChoice::Auto => UuidGenerator::new(),
            RngChoice::Secure => {
                UuidGenerator::with_source(SystemRandom::Secure(SecureRandom::new()))
            }
            RngChoice::Pseudo => UuidGenerator::with_source(PseudoRandom::new()),
        }
    }

    /// The validation policy, with a per-command `--strict` taking precedence.
    pub fn version_policy(&self, strict_flag: bool) -> VersionPolicy {
        if strict_flag || self.strict {
            VersionPolicy::V4Only
        } else {
            VersionPolicy::AnyRfc4122
        }
    }
}

fn parse_flag(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" => Ok(false),
        "1" | "true" | "yes" | "on" => Ok(true),
        other => Err(anyhow!("expected a boolean, got '{}'", other)),
    }
}
