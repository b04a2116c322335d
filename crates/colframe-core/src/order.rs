//! Total order over column values, expressed as unsigned 64-bit keys.
//!
//! `a < b` in the engine's order iff `key(a) < key(b)` as `u64`. The sorter's
//! radix and comparison paths, group equality, MIN/MAX and quantiles all use
//! these keys, so they can never disagree.
//!
//! Floats: `-0.0` is folded into `0.0` and every NaN into one canonical NaN
//! which lands above `+inf`.

use std::cmp::Ordering;

const SIGN_BIT: u64 = 1 << 63;

#[inline]
pub fn i64_key(v: i64) -> u64 {
    (v as u64) ^ SIGN_BIT
}

#[inline]
pub fn f64_key(v: f64) -> u64 {
    let v = if v.is_nan() {
        f64::NAN
    } else if v == 0.0 {
        0.0
    } else {
        v
    };
    let bits = v.to_bits();
    if bits & SIGN_BIT == 0 {
        bits ^ SIGN_BIT
    } else {
        !bits
    }
}

#[inline]
pub fn bool_key(v: bool) -> u64 {
    v as u64
}

/// Compare two floats under the engine's total order (NaN greatest).
#[inline]
pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    f64_key(a).cmp(&f64_key(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_keys_preserve_signed_order() {
        let vals = [i64::MIN, -5, -1, 0, 1, 7, i64::MAX];
        for w in vals.windows(2) {
            assert!(i64_key(w[0]) < i64_key(w[1]));
        }
    }

    #[test]
    fn float_keys_order_nan_last_and_fold_zero() {
        let vals = [f64::NEG_INFINITY, -2.5, -0.1, 0.0, 1e-300, 3.0, f64::INFINITY];
        for w in vals.windows(2) {
            assert!(f64_key(w[0]) < f64_key(w[1]), "{} < {}", w[0], w[1]);
        }
        assert!(f64_key(f64::INFINITY) < f64_key(f64::NAN));
        assert_eq!(f64_key(-0.0), f64_key(0.0));
        assert_eq!(f64_key(f64::NAN), f64_key(-f64::NAN));
        assert_eq!(cmp_f64(f64::NAN, 1.0), Ordering::Greater);
    }

    #[test]
    fn bool_false_before_true() {
        assert!(bool_key(false) < bool_key(true));
    }
}
