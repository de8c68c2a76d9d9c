//! The peeling construction algorithm: the hard part of an xor filter.
//!
//! Builds a 3-uniform key-slot hypergraph from the input keys under a candidate seed, then
//! repeatedly removes ("peels") slots referenced by exactly one remaining key. If every key is
//! eventually peeled, the hypergraph had no 2-core under that seed and a fingerprint assignment
//! exists; otherwise the whole attempt is discarded and retried under a fresh seed.
//!
//! See Algorithms 3 and 4 of ["Xor Filters: Faster and Smaller Than Bloom and Cuckoo
//! Filters"](https://arxiv.org/abs/1912.08258).

use alloc::collections::TryReserveError;
use alloc::vec::Vec;

use crate::fingerprint::Fingerprint;
use crate::filter::Xor;
use crate::hash::{indices, HashTriple};
use crate::splitmix64::splitmix64;

/// Per-slot accumulator during peeling: the XOR of every still-present key's hash that maps to
/// this slot, and how many such keys remain. Once `count == 1`, `xormask` holds exactly that
/// one key's hash and the slot is peelable.
#[derive(Default, Clone, Copy)]
struct XorSet {
    xormask: u64,
    count: u32,
}

/// A peeled key's hash and the slot it was removed from, in peeling order. Assignment walks this
/// in reverse.
#[derive(Default, Clone, Copy)]
struct KeyIndex {
    hash: u64,
    index: usize,
}

/// Checks all keys are pairwise distinct. `O(n log n)`, only run in debug builds: duplicate keys
/// are a caller contract violation (section 6/7 of the design), not a condition this crate
/// detects in release builds.
#[cfg(debug_assertions)]
fn all_distinct(keys: &[u64]) -> bool {
    use alloc::collections::BTreeSet;
    let mut seen = BTreeSet::new();
    keys.iter().all(|&k| seen.insert(k))
}

/// Runs the peeling construction algorithm against `filter`'s already-allocated slot array,
/// writing `filter.seed` and `filter.fingerprints` in place.
///
/// `keys` must be distinct and no larger than the key count `filter` was allocated for; neither
/// is checked in release builds (see module docs).
pub(crate) fn populate<F: Fingerprint>(
    keys: &[u64],
    filter: &mut Xor<F>,
) -> Result<(), TryReserveError> {
    #[cfg(debug_assertions)]
    debug_assert!(
        all_distinct(keys),
        "xor filters must be constructed from a collection of distinct keys"
    );

    let block_length = filter.block_length;
    let array_length = 3 * block_length;
    let num_keys = keys.len();

    let mut sets: Vec<XorSet> = Vec::new();
    sets.try_reserve_exact(array_length)?;
    sets.resize(array_length, XorSet::default());

    let mut queue: Vec<usize> = Vec::new();
    queue.try_reserve_exact(array_length)?;

    let mut stack: Vec<KeyIndex> = Vec::new();
    stack.try_reserve_exact(num_keys)?;

    let mut rng_counter: u64 = 1;
    let mut seed = splitmix64(&mut rng_counter);

    loop {
        for set in sets.iter_mut() {
            *set = XorSet::default();
        }

        for &key in keys {
            let HashTriple { hash, hset } = HashTriple::from_key(key, seed, block_length);
            for &idx in &hset {
                sets[idx].xormask ^= hash;
                sets[idx].count += 1;
            }
        }

        queue.clear();
        for (idx, set) in sets.iter().enumerate() {
            if set.count == 1 {
                queue.push(idx);
            }
        }

        stack.clear();
        while let Some(index) = queue.pop() {
            if sets[index].count == 0 {
                // Stale entry: a later peel already removed this slot's last key.
                continue;
            }
            let hash = sets[index].xormask;
            stack.push(KeyIndex { hash, index });

            for idx in indices(hash, block_length) {
                sets[idx].xormask ^= hash;
                sets[idx].count -= 1;
                if sets[idx].count == 1 {
                    queue.push(idx);
                }
            }
        }

        if stack.len() == num_keys {
            break;
        }

        seed = splitmix64(&mut rng_counter);
    }

    filter.seed = seed;
    for cell in filter.fingerprints.iter_mut() {
        *cell = F::default();
    }
    for ki in stack.iter().rev() {
        let hset = indices(ki.hash, block_length);
        let fp = F::from_hash(ki.hash);
        filter.fingerprints[ki.index] =
            fp ^ filter.fingerprints[hset[0]] ^ filter.fingerprints[hset[1]] ^ filter.fingerprints[hset[2]];
    }

    Ok(())
}
