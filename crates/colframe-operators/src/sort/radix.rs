//! Stable LSD radix argsort over 64-bit order keys.
//!
//! Eight passes of one byte each. A pass whose byte is identical for every
//! row leaves the order unchanged and is skipped. Descending runs the bucket
//! prefix scan from the top bucket down, which keeps rows with equal keys in
//! their original relative order.

const BITS_PER_PASS: u32 = 8;
const BUCKETS: usize = 1 << BITS_PER_PASS;
const PASSES: u32 = 64 / BITS_PER_PASS;

pub fn argsort(keys: &[u64], ascending: bool) -> Vec<usize> {
    let n = keys.len();
    let mut indices: Vec<usize> = (0..n).collect();
    if n < 2 {
        return indices;
    }
    let mut scratch = vec![0usize; n];
    let mut counts = [0usize; BUCKETS];

    for pass in 0..PASSES {
        let shift = pass * BITS_PER_PASS;
        counts.fill(0);

        for &idx in &indices {
            counts[bucket(keys[idx], shift)] += 1;
        }
        if counts.iter().any(|&c| c == n) {
            continue;
        }

        let mut sum = 0;
        if ascending {
            for c in counts.iter_mut() {
                let count = *c;
                *c = sum;
                sum += count;
            }
        } else {
            for c in counts.iter_mut().rev() {
                let count = *c;
                *c = sum;
                sum += count;
            }
        }

        for &idx in &indices {
            let b = bucket(keys[idx], shift);
            scratch[counts[b]] = idx;
            counts[b] += 1;
        }
        std::mem::swap(&mut indices, &mut scratch);
    }

    indices
}

#[inline]
fn bucket(key: u64, shift: u32) -> usize {
    ((key >> shift) & (BUCKETS as u64 - 1)) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_ascending_and_descending() {
        let keys = [5u64, 1 << 40, 3, 0, u64::MAX, 3];
        assert_eq!(argsort(&keys, true), vec![3, 2, 5, 0, 1, 4]);
        assert_eq!(argsort(&keys, false), vec![4, 1, 0, 2, 5, 3]);
    }

    #[test]
    fn constant_keys_keep_identity() {
        let keys = [7u64; 5];
        assert_eq!(argsort(&keys, true), vec![0, 1, 2, 3, 4]);
        assert_eq!(argsort(&keys, false), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn trivial_inputs() {
        assert!(argsort(&[], true).is_empty());
        assert_eq!(argsort(&[42], false), vec![0]);
    }
}
