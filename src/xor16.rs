//! Implements `Xor16` filters as described in [Xor Filters: Faster and Smaller Than Bloom and
//! Cuckoo Filters].
//!
//! [Xor Filters: Faster and Smaller Than Bloom and Cuckoo Filters]: https://arxiv.org/abs/1912.08258

use crate::filter::Xor;

/// Xor filter using 16-bit fingerprints.
///
/// An `Xor16` filter uses <20 bits per entry of the set it is constructed from, and has a false
/// positive rate of <0.002%. As with other probabilistic filters, a higher number of entries
/// decreases the bits per entry but increases the false positive rate.
///
/// An `Xor16` is constructed from a set of 64-bit unsigned integers and is immutable.
///
/// ```
/// # extern crate alloc;
/// use xorfilter::{Filter, Xor16};
/// # use alloc::vec::Vec;
/// # use rand::Rng;
///
/// # let mut rng = rand::thread_rng();
/// const SAMPLE_SIZE: usize = 1_000_000;
/// let keys: Vec<u64> = (0..SAMPLE_SIZE).map(|_| rng.gen()).collect();
/// let filter = Xor16::from(&keys);
///
/// // no false negatives
/// for key in &keys {
///     assert!(filter.contains(key));
/// }
///
/// // bits per entry
/// let bpe = (filter.len() as f64) * 16.0 / (SAMPLE_SIZE as f64);
/// assert!(bpe < 20., "Bits per entry is {}", bpe);
///
/// // false positive rate
/// let false_positives: usize = (0..SAMPLE_SIZE)
///     .map(|_| rng.gen())
///     .filter(|n| filter.contains(n))
///     .count();
/// let fp_rate: f64 = (false_positives * 100) as f64 / SAMPLE_SIZE as f64;
/// assert!(fp_rate < 0.0025, "False positive rate is {}", fp_rate);
/// ```
///
/// Serializing and deserializing `Xor16` filters can be enabled with the [`serde`] feature (or
/// [`bincode`] for a concrete wire encoder).
///
/// [`serde`]: http://serde.rs
/// [`bincode`]: https://docs.rs/bincode
pub type Xor16 = Xor<u16>;
