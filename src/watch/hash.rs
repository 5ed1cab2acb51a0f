// src/watch/hash.rs

//! Content fingerprints.
//!
//! A [`Fingerprint`] is a CRC-32 over an ordered byte stream. It is only ever
//! compared for equality. The empty stream hashes to [`Fingerprint::ZERO`],
//! which is also the starting "previous" value of every watcher.

use std::fmt;

use crc32fast::Hasher;

/// 32-bit checksum of a byte sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Fingerprint(u32);

impl Fingerprint {
    pub const ZERO: Fingerprint = Fingerprint(0);
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

/// Fingerprint a byte slice in one go.
pub fn checksum(bytes: &[u8]) -> Fingerprint {
    Fingerprint(crc32fast::hash(bytes))
}

/// Streaming fingerprint accumulator.
///
/// Feeding `["ab", "c"]` yields the same [`sum`](Self::sum) as feeding
/// `"abc"` in one call, so several files can be hashed without
/// concatenating them in memory.
#[derive(Clone, Default)]
pub struct Fingerprinter {
    hasher: Hasher,
}

impl fmt::Debug for Fingerprinter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fingerprinter")
            .field("sum", &self.sum())
            .finish()
    }
}

impl Fingerprinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    /// Current value of the accumulator. Does not consume or reset it.
    pub fn sum(&self) -> Fingerprint {
        Fingerprint(self.hasher.clone().finalize())
    }

    pub fn reset(&mut self) {
        self.hasher.reset();
    }
}
