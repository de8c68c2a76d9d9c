//! Key hashing and slot-index derivation shared by every filter width.

use crate::murmur3;

/// Applies a finalization mix to a randomly-seeded key, resulting in an avalanched hash. This
/// helps avoid high false-positive ratios (see Section 4 in the paper).
#[inline]
pub const fn mix(key: u64, seed: u64) -> u64 {
    murmur3::mix64(key.overflowing_add(seed).0)
}

/// Rotate `n` left by `c` bits, wrapping at 64 bits.
#[inline]
const fn rotl64(n: u64, c: isize) -> u64 {
    (n << (c & 63)) | (n >> ((-c) & 63))
}

/// [A fast alternative to the modulo reduction](http://lemire.me/blog/2016/06/27/a-fast-alternative-to-the-modulo-reduction/).
#[inline]
const fn reduce(hash: u32, n: usize) -> usize {
    ((hash as u64 * n as u64) >> 32) as usize
}

/// The three slot indices `h0, h1, h2` a hash maps to within a filter of the given block length.
/// `h0` falls in block 0, `h1` in block 1 (offset by `block_length`), `h2` in block 2 (offset
/// by `2 * block_length`); the three are pairwise distinct by construction.
#[inline]
pub const fn indices(hash: u64, block_length: usize) -> [usize; 3] {
    let r0 = hash as u32;
    let r1 = rotl64(hash, 21) as u32;
    let r2 = rotl64(hash, 42) as u32;
    [
        reduce(r0, block_length),
        reduce(r1, block_length) + block_length,
        reduce(r2, block_length) + 2 * block_length,
    ]
}

/// The hash of a key and the three slot indices it was mixed into.
pub struct HashTriple {
    /// The full 64-bit mixed hash. Construction needs this to recover the fingerprint and to
    /// recompute `indices` again without re-mixing the key (see `HashTriple::from_hash`).
    pub hash: u64,
    /// `[h0, h1, h2]`, already offset into their respective blocks.
    pub hset: [usize; 3],
}

impl HashTriple {
    /// Mixes `key` with `seed` and derives its three slot indices in one pass.
    #[inline]
    pub const fn from_key(key: u64, seed: u64, block_length: usize) -> Self {
        let hash = mix(key, seed);
        Self::from_hash(hash, block_length)
    }

    /// Recomputes `(h0, h1, h2)` from an already-mixed hash, without re-mixing a key. Used by
    /// the peeling and assignment phases, which only ever carry the hash forward.
    #[inline]
    pub const fn from_hash(hash: u64, block_length: usize) -> Self {
        Self {
            hash,
            hset: indices(hash, block_length),
        }
    }
}
