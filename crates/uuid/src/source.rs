//! Random byte sources.
//!
//! The generator never reaches for ambient randomness itself. It is handed a
//! [`RandomByteSource`] and asks it to fill a buffer. [`system_source`] gives the process-wide
//! default, selected once on first use.

use rand::rngs::{OsRng, SmallRng};
use rand::{RngCore, SeedableRng};
use std::sync::{Arc, Mutex, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

/// Something that can fill a buffer with random bytes.
///
/// Filling is infallible: implementations that can fail internally must degrade to a weaker
/// source rather than return an error or panic.
pub trait RandomByteSource: Send + Sync {
    /// Overwrite every byte of `buf` with random data.
    fn fill(&self, buf: &mut [u8]);
}

impl<T: RandomByteSource + ?Sized> RandomByteSource for &T {
    fn fill(&self, buf: &mut [u8]) {
        (**self).fill(buf)
    }
}

impl<T: RandomByteSource + ?Sized> RandomByteSource for Box<T> {
    fn fill(&self, buf: &mut [u8]) {
        (**self).fill(buf)
    }
}

impl<T: RandomByteSource + ?Sized> RandomByteSource for Arc<T> {
    fn fill(&self, buf: &mut [u8]) {
        (**self).fill(buf)
    }
}

/// Non-cryptographic pseudo-random source.
///
/// Output is fine for identifiers that only need to look random, but it must not be used where
/// unpredictability matters.
#[derive(Debug)]
pub struct PseudoRandom {
    rng: Mutex<SmallRng>,
}

impl PseudoRandom {
    /// Seed from the wall clock and the process id.
    pub fn new() -> Self {
        Self::seeded(clock_seed())
    }

    /// Seed explicitly. Two sources with the same seed produce the same bytes.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }
}

impl Default for PseudoRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomByteSource for PseudoRandom {
    fn fill(&self, buf: &mut [u8]) {
        // A panic while holding the lock cannot leave a SmallRng in a bad state.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.fill_bytes(buf);
    }
}

fn clock_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    nanos ^ u64::from(std::process::id()).rotate_left(32)
}

/// Cryptographically strong source, the OS CSPRNG (`getrandom` under the hood) by default.
///
/// If the underlying generator refuses a request, that draw is served by a lazily created
/// [`PseudoRandom`]. The warning is logged once, when the fallback is first needed.
#[derive(Debug)]
pub struct SecureRandom<R = OsRng> {
    rng: Mutex<R>,
    fallback: OnceLock<PseudoRandom>,
}

impl SecureRandom {
    /// Creates a source over the operating system generator.
    pub fn new() -> Self {
        Self::with_rng(OsRng)
    }

    /// Returns true if the OS generator currently answers requests.
    pub fn is_available() -> bool {
        let mut probe = [0u8; 1];
        OsRng.try_fill_bytes(&mut probe).is_ok()
    }
}

impl Default for SecureRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + Send> SecureRandom<R> {
    /// Creates a source over `rng`, which must be a cryptographically strong generator.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
            fallback: OnceLock::new(),
        }
    }
}

impl<R: RngCore + Send> RandomByteSource for SecureRandom<R> {
    fn fill(&self, buf: &mut [u8]) {
        let result = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .try_fill_bytes(buf);

        if let Err(e) = result {
            self.fallback
                .get_or_init(|| {
                    tracing::warn!("secure random source failed, using pseudo-random bytes: {}", e);
                    PseudoRandom::new()
                })
                .fill(buf);
        }
    }
}

/// The source chosen for this process.
#[derive(Debug)]
pub enum SystemRandom {
    Secure(SecureRandom),
    Pseudo(PseudoRandom),
}

impl SystemRandom {
    /// Probe the OS generator and pick the best source that works.
    pub fn detect() -> Self {
        Self::detect_with(SecureRandom::is_available)
    }

    /// Pick the secure source if `probe` reports it usable, the pseudo-random one otherwise.
    pub fn detect_with(probe: impl FnOnce() -> bool) -> Self {
        if probe() {
            Self::Secure(SecureRandom::new())
        } else {
            tracing::warn!("no secure random source available, falling back to pseudo-random");
            Self::Pseudo(PseudoRandom::new())
        }
    }

    /// Returns true if this is the OS-backed source.
    pub fn is_secure(&self) -> bool {
        matches!(self, Self::Secure(_))
    }
}

impl RandomByteSource for SystemRandom {
    fn fill(&self, buf: &mut [u8]) {
        match self {
            Self::Secure(source) => source.fill(buf),
            Self::Pseudo(source) => source.fill(buf),
        }
    }
}

static SYSTEM_SOURCE: OnceLock<Arc<SystemRandom>> = OnceLock::new();

/// Returns the process-wide source, detecting it on first call.
pub fn system_source() -> Arc<dyn RandomByteSource> {
    SYSTEM_SOURCE
        .get_or_init(|| Arc::new(SystemRandom::detect()))
        .clone()
}
