//! Parameterizes the filter over its fingerprint cell width (8 or 16 bits).
//!
//! The two published variants, [`Xor8`](crate::Xor8) and [`Xor16`](crate::Xor16), differ only in
//! how wide a fingerprint they store per slot and how they truncate a 64-bit hash down to that
//! width. Everything else — hashing, allocation sizing, peeling, assignment — is shared.

use core::fmt::Debug;
use core::ops::BitXor;

/// An unsigned cell type usable as a filter's fingerprint storage.
///
/// Implemented for `u8` and `u16`, the two widths this crate's filters support. Not meant to be
/// implemented outside this crate; wider cells than 16 bits buy no meaningful false-positive-rate
/// improvement over the space cost.
pub trait Fingerprint:
    Copy + Clone + Default + Eq + BitXor<Output = Self> + Debug + Send + Sync + 'static
{
    /// Truncates a 64-bit hash down to this fingerprint's width.
    fn from_hash(hash: u64) -> Self;
}

/// `hash ^ (hash >> 32)`, then truncated to the target width.
#[inline]
const fn fingerprint_bits(hash: u64) -> u64 {
    hash ^ (hash >> 32)
}

impl Fingerprint for u8 {
    #[inline]
    fn from_hash(hash: u64) -> Self {
        fingerprint_bits(hash) as Self
    }
}

impl Fingerprint for u16 {
    #[inline]
    fn from_hash(hash: u64) -> Self {
        fingerprint_bits(hash) as Self
    }
}
