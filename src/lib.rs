//! Compact, immutable xor filters for approximate membership testing of 64-bit integer keys.
//!
//! An xor filter answers "is `k` in the set this filter was built from?" with no false
//! negatives and a small, bounded false-positive rate: about 0.39% for [`Xor8`] at roughly 9.84
//! bits per entry, and about 0.0015% for [`Xor16`] at roughly 19.7 bits per entry. Once built, a
//! filter is immutable and free to share across threads; construction is the only part of this
//! crate with any real engineering in it (see [`Xor::populate`]).
//!
//! See ["Xor Filters: Faster and Smaller Than Bloom and Cuckoo
//! Filters"](https://arxiv.org/abs/1912.08258) for the algorithm this crate implements.

#![no_std]
#![warn(missing_docs)]
#![forbid(clippy::all, clippy::cargo, clippy::nursery)]

extern crate alloc;

mod construct;
mod fingerprint;
mod filter;
mod hash;
mod murmur3;
mod splitmix64;
mod xor16;
mod xor8;

pub use filter::{Filter, Xor};
pub use fingerprint::Fingerprint;
pub use xor16::Xor16;
pub use xor8::Xor8;
