//! The Cantor codec: the generalized N^k <-> N bijection, built on
//! combinadics for an efficient inverse.

use crate::combinatorics::binomial;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Prefix-sum-with-offset: maps an arbitrary sequence to a strictly
/// increasing one (a canonical finite-set encoding).
///
/// `ys[i] = (sum_{j<=i} xs[j]) + i`.
pub fn list2set(xs: &[BigUint]) -> Vec<BigUint> {
    let mut ys = Vec::with_capacity(xs.len());
    let mut running = BigUint::zero();
    for (i, x) in xs.iter().enumerate() {
        running += x;
        ys.push(&running + BigUint::from(i as u64));
    }
    ys
}

/// Inverse of [`list2set`]: recovers the original sequence from a strictly
/// increasing one.
pub fn set2list(ys: &[BigUint]) -> Vec<BigUint> {
    let mut xs = Vec::with_capacity(ys.len());
    for (i, y) in ys.iter().enumerate() {
        if i == 0 {
            xs.push(y.clone());
        } else {
            xs.push(y - &ys[i - 1] - BigUint::one());
        }
    }
    xs
}

/// `fromCantorTuple`: the generalized Cantor N^k -> N bijection.
pub fn from_cantor_tuple(xs: &[BigUint]) -> BigUint {
    if xs.is_empty() {
        return BigUint::zero();
    }
    let ys = list2set(xs);
    let mut sum = BigUint::zero();
    for (i, y) in ys.iter().enumerate() {
        sum += binomial(y, (i + 1) as i64);
    }
    sum
}

/// Binary search for the smallest `m` with `binomial(m, k) > n`, searching
/// `[k-1, n+k]`. This range is valid because `binomial(n+k, k) > n` for all
/// `k >= 1, n >= 0`.
fn first_k_binomial_larger_than(k: usize, n: &BigUint) -> BigUint {
    let mut lo = BigUint::from((k - 1) as u64);
    let mut hi = n + BigUint::from(k as u64);
    debug_assert!(binomial(&hi, k as i64) > *n);
    while lo < hi {
        let mid = (&lo + &hi) / BigUint::from(2u32);
        if binomial(&mid, k as i64) > *n {
            hi = mid;
        } else {
            lo = mid + BigUint::one();
        }
    }
    lo
}

/// The combinadic decomposition of `n` into `k` terms: a strictly decreasing
/// sequence `[m_k, m_{k-1}, ..., m_1]` with `n = sum binomial(m_j, j)`.
pub fn to_combinadics(k: usize, n: &BigUint) -> Vec<BigUint> {
    let mut result = Vec::with_capacity(k);
    let mut remaining = n.clone();
    let mut j = k;
    while j >= 1 {
        let m = first_k_binomial_larger_than(j, &remaining) - BigUint::one();
        remaining -= binomial(&m, j as i64);
        result.push(m);
        j -= 1;
    }
    result
}

/// `toCantorTuple`: the efficient inverse of [`from_cantor_tuple`], returning
/// a length-`k` list.
pub fn to_cantor_tuple(k: usize, n: &BigUint) -> Vec<BigUint> {
    if k == 0 {
        return Vec::new();
    }
    let mut ys = to_combinadics(k, n);
    ys.reverse(); // now strictly increasing: canonical set form
    set2list(&ys)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bu(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn list2set_set2list_are_inverse() {
        let xs = vec![bu(3), bu(0), bu(7), bu(1)];
        let ys = list2set(&xs);
        assert_eq!(set2list(&ys), xs);
        // ys must be strictly increasing.
        for w in ys.windows(2) {
            assert!(w[0] < w[1]);
        }
    }

    #[test]
    fn cantor_tuple_roundtrip_example_from_spec() {
        let xs: Vec<BigUint> = [1, 0, 0, 2, 2, 0, 2, 1, 6, 0, 0, 3]
            .iter()
            .map(|&v| bu(v))
            .collect();
        let n = from_cantor_tuple(&xs);
        assert_eq!(n, bu(34567890));
        assert_eq!(to_cantor_tuple(12, &n), xs);
    }

    #[test]
    fn to_combinadics_example_from_spec() {
        let combinadics = to_combinadics(5, &bu(72));
        assert_eq!(combinadics, vec![bu(8), bu(6), bu(3), bu(1), bu(0)]);
        for w in combinadics.windows(2) {
            assert!(w[0] > w[1]);
        }
        let mut sum = BigUint::zero();
        for (j, m) in combinadics.iter().rev().enumerate() {
            sum += binomial(m, (j + 1) as i64);
        }
        assert_eq!(sum, bu(72));
    }

    #[test]
    fn cantor_tuple_roundtrip_random_sweep() {
        // Hand-rolled xorshift64 so the sweep is reproducible without a
        // randomness crate.
        let mut state: u64 = 0x9E3779B97F4A7C15;
        let mut next = || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        };
        for k in 0..8usize {
            for _ in 0..20 {
                let xs: Vec<BigUint> = (0..k).map(|_| bu(next() % 1000)).collect();
                let n = from_cantor_tuple(&xs);
                assert_eq!(to_cantor_tuple(k, &n), xs);
            }
        }
    }

    #[test]
    fn cantor_tuple_n_roundtrip_random_sweep() {
        let mut state: u64 = 0xD1B54A32D192ED03;
        let mut next = || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        };
        for k in 1..6usize {
            for _ in 0..20 {
                let n = bu(next() % 1_000_000);
                let xs = to_cantor_tuple(k, &n);
                assert_eq!(xs.len(), k);
                assert_eq!(from_cantor_tuple(&xs), n);
            }
        }
    }

    #[test]
    fn k_zero_is_the_trivial_map() {
        assert_eq!(from_cantor_tuple(&[]), BigUint::zero());
        assert_eq!(to_cantor_tuple(0, &BigUint::zero()), Vec::<BigUint>::new());
    }

    #[test]
    fn k_one_is_identity() {
        for v in [0u64, 1, 42, 1000] {
            assert_eq!(to_cantor_tuple(1, &bu(v)), vec![bu(v)]);
            assert_eq!(from_cantor_tuple(&[bu(v)]), bu(v));
        }
    }
}
