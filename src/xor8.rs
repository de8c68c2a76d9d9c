//! Implements `Xor8` filters as described in [Xor Filters: Faster and Smaller Than Bloom and
//! Cuckoo Filters].
//!
//! [Xor Filters: Faster and Smaller Than Bloom and Cuckoo Filters]: https://arxiv.org/abs/1912.08258

use crate::filter::Xor;

/// Xor filter using 8-bit fingerprints.
///
/// An `Xor8` filter uses <10 bits per entry of the set it is constructed from, and has a false
/// positive rate of <0.4%. As with other probabilistic filters, a higher number of entries
/// decreases the bits per entry but increases the false positive rate.
///
/// An `Xor8` is constructed from a set of 64-bit unsigned integers and is immutable.
///
/// ```
/// # extern crate alloc;
/// use xorfilter::{Filter, Xor8};
/// # use alloc::vec::Vec;
/// # use rand::Rng;
///
/// # let mut rng = rand::thread_rng();
/// const SAMPLE_SIZE: usize = 1_000_000;
/// let keys: Vec<u64> = (0..SAMPLE_SIZE).map(|_| rng.gen()).collect();
/// let filter = Xor8::from(&keys);
///
/// // no false negatives
/// for key in &keys {
///     assert!(filter.contains(key));
/// }
///
/// // bits per entry
/// let bpe = (filter.len() as f64) * 8.0 / (SAMPLE_SIZE as f64);
/// assert!(bpe < 10., "Bits per entry is {}", bpe);
///
/// // false positive rate
/// let false_positives: usize = (0..SAMPLE_SIZE)
///     .map(|_| rng.gen())
///     .filter(|n| filter.contains(n))
///     .count();
/// let fp_rate: f64 = (false_positives * 100) as f64 / SAMPLE_SIZE as f64;
/// assert!(fp_rate < 0.5, "False positive rate is {}", fp_rate);
/// ```
///
/// Serializing and deserializing `Xor8` filters can be enabled with the [`serde`] feature (or
/// [`bincode`] for a concrete wire encoder).
///
/// [`serde`]: http://serde.rs
/// [`bincode`]: https://docs.rs/bincode
pub type Xor8 = Xor<u8>;

#[cfg(test)]
mod test {
    use crate::{Filter, Xor8};

    use alloc::vec::Vec;
    use rand::Rng;

    #[test]
    fn test_initialization() {
        const SAMPLE_SIZE: usize = 1_000_000;
        let mut rng = rand::thread_rng();
        let keys: Vec<u64> = (0..SAMPLE_SIZE).map(|_| rng.gen()).collect();

        let filter = Xor8::from(&keys);

        for key in keys {
            assert!(filter.contains(&key));
        }
    }

    #[test]
    fn test_bits_per_entry() {
        const SAMPLE_SIZE: usize = 1_000_000;
        let mut rng = rand::thread_rng();
        let keys: Vec<u64> = (0..SAMPLE_SIZE).map(|_| rng.gen()).collect();

        let filter = Xor8::from(&keys);
        let bpe = (filter.len() as f64) * 8.0 / (SAMPLE_SIZE as f64);

        assert!(bpe < 10., "Bits per entry is {}", bpe);
    }

    #[test]
    fn test_false_positives() {
        const SAMPLE_SIZE: usize = 1_000_000;
        let mut rng = rand::thread_rng();
        let keys: Vec<u64> = (0..SAMPLE_SIZE).map(|_| rng.gen()).collect();

        let filter = Xor8::from(&keys);

        let false_positives: usize = (0..SAMPLE_SIZE)
            .map(|_| rng.gen())
            .filter(|n| filter.contains(n))
            .count();
        let fp_rate: f64 = (false_positives * 100) as f64 / SAMPLE_SIZE as f64;
        assert!(fp_rate < 0.5, "False positive rate is {}", fp_rate);
    }

    #[test]
    fn test_empty_set() {
        let filter = Xor8::from(&Vec::<u64>::new());
        let fp_rate = (0..100_000u64).filter(|k| filter.contains(k)).count() as f64 / 100_000.0;
        // With no keys, every slot is 0, so contains(k) is true iff fp(k) == 0: ~2^-8.
        assert!(fp_rate < 0.02, "False positive rate is {}", fp_rate);
    }

    #[test]
    fn test_single_key() {
        let filter = Xor8::from(&[42u64][..]);
        assert!(filter.contains(&42));
    }

    #[test]
    fn test_repopulate_overwrites() {
        let first: Vec<u64> = (0..10_000).collect();
        let second: Vec<u64> = (10_000..20_000).collect();

        let mut filter = Xor8::allocate(10_000);
        filter.populate(&first);
        for key in &first {
            assert!(filter.contains(key));
        }

        filter.populate(&second);
        for key in &second {
            assert!(filter.contains(key));
        }
        let stale_hits = first.iter().filter(|k| filter.contains(k)).count();
        assert!(
            (stale_hits as f64 / first.len() as f64) < 0.02,
            "stale hits after repopulate: {}",
            stale_hits
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "xor filters must be constructed from a collection of distinct keys")]
    fn test_debug_assert_duplicates() {
        let _ = Xor8::from(&[1u64, 2, 1][..]);
    }
}
