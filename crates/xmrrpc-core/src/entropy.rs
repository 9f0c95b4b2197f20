//! Random source for correlation identifiers and digest client nonces.

use rand::Rng;

/// Supplies per-call randomness.
///
/// Implementations must be callable from many tasks at once without sharing
/// mutable generator state. Tests swap in a fixed source to make ids and
/// client nonces reproducible.
pub trait Entropy: Send + Sync {
    fn correlation_id(&self) -> u64;

    fn client_nonce(&self) -> [u8; 8];
}

/// Draws from the calling thread's own generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngEntropy;

impl Entropy for ThreadRngEntropy {
    fn correlation_id(&self) -> u64 {
        rand::thread_rng().r#gen()
    }

    fn client_nonce(&self) -> [u8; 8] {
        rand::thread_rng().r#gen()
    }
}

/// Returns the same values on every call.
#[derive(Debug, Clone, Copy)]
pub struct FixedEntropy {
    pub correlation_id: u64,
    pub client_nonce: [u8; 8],
}

impl Entropy for FixedEntropy {
    fn correlation_id(&self) -> u64 {
        self.correlation_id
    }

    fn client_nonce(&self) -> [u8; 8] {
        self.client_nonce
    }
}
