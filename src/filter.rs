//! The generic xor filter: slot storage, allocation sizing, and the `contains` query.
//!
//! [`Xor8`](crate::Xor8) and [`Xor16`](crate::Xor16) are thin aliases over [`Xor`] with the
//! fingerprint cell type fixed to `u8`/`u16`; the construction algorithm lives in
//! [`crate::construct`] and operates on this type directly.

use alloc::boxed::Box;
use alloc::collections::TryReserveError;
use alloc::vec::Vec;
use core::mem;

use crate::construct;
use crate::fingerprint::Fingerprint;
use crate::hash::HashTriple;

/// A trait for approximate membership filters over a key type `T`.
///
/// Lets call sites that only care about "does this filter contain the key" stay generic over
/// [`Xor8`](crate::Xor8) and [`Xor16`](crate::Xor16) without caring which fingerprint width backs
/// a particular filter.
pub trait Filter<T> {
    /// Returns `true` if the filter (probably) contains `key`. Never false-negative.
    fn contains(&self, key: &T) -> bool;

    /// The number of fingerprint cells backing this filter (`3 * block_length`).
    fn len(&self) -> usize;

    /// Returns `true` if the filter holds no fingerprint cells, i.e. was built from zero keys
    /// with a zero-sized allocation. A filter built via [`Xor::allocate`] always has at least
    /// the `+32` floor worth of cells, so this is only ever true for a default-constructed or
    /// otherwise degenerate filter.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A compact, immutable xor filter over 64-bit keys, parameterized by fingerprint cell width `F`.
///
/// Use [`Xor8`](crate::Xor8) or [`Xor16`](crate::Xor16) rather than naming this type directly;
/// those aliases carry the doc examples and false-positive-rate guarantees for each width.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(serialize = "F: serde::Serialize", deserialize = "F: serde::Deserialize<'de>"))
)]
#[cfg_attr(feature = "bincode", derive(bincode::Encode, bincode::Decode))]
#[derive(Debug, Clone)]
pub struct Xor<F: 'static> {
    /// The seed selected during construction.
    pub(crate) seed: u64,
    /// The number of slots per block; total slot count is `3 * block_length`.
    pub(crate) block_length: usize,
    /// The fingerprint cells, `3 * block_length` of them, laid out block 0 / block 1 / block 2.
    pub(crate) fingerprints: Box<[F]>,
}

/// Computes the slot-array capacity for `n` expected keys: `floor((32 + 1.23n) / 3) * 3`.
///
/// The `+32` floor and `1.23` expansion factor bound construction to a small expected number of
/// seed retries (see `crate::construct`); smaller factors risk unbounded retry.
pub(crate) fn capacity_for(n: usize) -> usize {
    let capacity = (1.23 * n as f64) as usize + 32;
    capacity / 3 * 3
}

impl<F: Fingerprint> Xor<F> {
    /// Allocates a filter sized to hold up to `n` keys, with all fingerprint cells zeroed.
    ///
    /// Panics (aborts, via the global allocator) on OOM. Use [`Xor::try_allocate`] to observe
    /// an allocation failure instead.
    pub fn allocate(n: usize) -> Self {
        Self::try_allocate(n).expect("xor filter allocation failed")
    }

    /// Fallible form of [`Xor::allocate`]: reports OOM via `Err` rather than aborting.
    pub fn try_allocate(n: usize) -> Result<Self, TryReserveError> {
        let capacity = capacity_for(n);
        let mut fingerprints = Vec::new();
        fingerprints.try_reserve_exact(capacity)?;
        fingerprints.resize(capacity, F::default());
        Ok(Self {
            seed: 0,
            block_length: capacity / 3,
            fingerprints: fingerprints.into_boxed_slice(),
        })
    }

    /// Populates an already-allocated filter from `keys`, running the peeling construction
    /// algorithm until it finds a seed under which the key-slot hypergraph is acyclic.
    ///
    /// `keys` must be distinct; in debug builds this is checked with a `debug_assert!`. Calling
    /// this a second time on the same filter with a different key set is supported and fully
    /// overwrites the prior contents (see the crate-level re-populate test).
    ///
    /// Panics (aborts) on OOM in the construction scratch buffers. Use [`Xor::try_populate`] to
    /// observe the failure instead.
    pub fn populate(&mut self, keys: &[u64]) {
        self.try_populate(keys)
            .expect("xor filter construction scratch allocation failed")
    }

    /// Fallible form of [`Xor::populate`]: reports scratch OOM via `Err` rather than aborting.
    pub fn try_populate(&mut self, keys: &[u64]) -> Result<(), TryReserveError> {
        construct::populate(keys, self)
    }

    /// Constructs a filter directly from `keys`, allocating and populating in one step.
    pub fn from_keys(keys: &[u64]) -> Self {
        let mut filter = Self::allocate(keys.len());
        filter.populate(keys);
        filter
    }

    /// Returns `true` if the filter (probably) contains `key`. Never false-negative.
    #[inline]
    pub fn contains(&self, key: &u64) -> bool {
        let HashTriple { hash, hset } = HashTriple::from_key(*key, self.seed, self.block_length);
        let fp = F::from_hash(hash);
        fp == self.fingerprints[hset[0]] ^ self.fingerprints[hset[1]] ^ self.fingerprints[hset[2]]
    }

    /// Total in-memory size of the filter, including the struct header, in bytes. Matches the
    /// reference layout's `3 * blockLength * sizeof(cell) + sizeof(header)`.
    pub fn size_in_bytes(&self) -> usize {
        3 * self.block_length * mem::size_of::<F>() + mem::size_of::<Self>()
    }

    /// The number of fingerprint cells backing this filter (`3 * block_length`).
    pub fn len(&self) -> usize {
        self.fingerprints.len()
    }

    /// Returns `true` if the filter holds no fingerprint cells.
    pub fn is_empty(&self) -> bool {
        self.fingerprints.is_empty()
    }
}

impl<F: Fingerprint> Filter<u64> for Xor<F> {
    fn contains(&self, key: &u64) -> bool {
        Xor::contains(self, key)
    }

    fn len(&self) -> usize {
        Xor::len(self)
    }
}

impl<F: Fingerprint> From<&[u64]> for Xor<F> {
    fn from(keys: &[u64]) -> Self {
        Self::from_keys(keys)
    }
}

impl<F: Fingerprint> From<&Vec<u64>> for Xor<F> {
    fn from(keys: &Vec<u64>) -> Self {
        Self::from_keys(keys.as_slice())
    }
}

impl<F: Fingerprint> From<Vec<u64>> for Xor<F> {
    fn from(keys: Vec<u64>) -> Self {
        Self::from_keys(keys.as_slice())
    }
}
