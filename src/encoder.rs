use std::sync::{Arc, Mutex, OnceLock};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use sha2::digest::FixedOutputReset;
use sha2::{Digest, Sha256, Sha512};

/// Turns a string into identifier material.
///
/// Implementations must be deterministic. Nothing else is assumed, so a
/// closure such as `|s: &str| s.to_string()` works as a test double.
pub trait Encoder: Send + Sync {
    fn digest(&self, input: &str) -> String;
}

impl<F> Encoder for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn digest(&self, input: &str) -> String {
        self(input)
    }
}

/// Hash-backed encoder producing base64url (padded) output.
///
/// One hasher is reused across calls. The lock covers write, finalize and
/// reset, so concurrent callers serialize through it.
pub struct DigestEncoder<D> {
    hasher: Mutex<D>,
}

pub type Sha512Encoder = DigestEncoder<Sha512>;
pub type Sha256Encoder = DigestEncoder<Sha256>;

impl<D: Digest + FixedOutputReset> DigestEncoder<D> {
    pub fn new() -> Self {
        Self {
            hasher: Mutex::new(D::new()),
        }
    }
}

impl<D: Digest + FixedOutputReset> Default for DigestEncoder<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Encoder for DigestEncoder<D>
where
    D: Digest + FixedOutputReset + Send,
{
    fn digest(&self, input: &str) -> String {
        let mut hasher = self.hasher.lock().unwrap_or_else(|poisoned| {
            // A panic mid-update may have left partial input behind.
            let mut guard = poisoned.into_inner();
            Digest::reset(&mut *guard);
            guard
        });
        Digest::update(&mut *hasher, input.as_bytes());
        let output = Digest::finalize_reset(&mut *hasher);
        URL_SAFE.encode(output)
    }
}

/// The process-wide SHA-512 encoder shared by every default configuration.
pub fn default_encoder() -> Arc<dyn Encoder> {
    static DEFAULT: OnceLock<Arc<Sha512Encoder>> = OnceLock::new();
    let encoder = DEFAULT.get_or_init(|| Arc::new(Sha512Encoder::new()));
    Arc::clone(encoder) as Arc<dyn Encoder>
}
