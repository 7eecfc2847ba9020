//! Binomial coefficients and Catalan numbers over arbitrary-precision
//! integers.
//!
//! Both `binomial` and `catalan` memoize in a per-call-local cache that does
//! not survive the call (per the "no global state" rule): callers that need
//! a standing cache build their own [`Combinatorics`] and reuse it.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use std::cell::RefCell;
use std::collections::HashMap;

/// `binomial(n, k)`, with `n` arbitrary-precision and `k` bounded by
/// ordinary memory (a coefficient with a `k` too large to fit in a `u64`
/// could not be materialized as a sum of that many terms anyway).
pub fn binomial(n: &BigUint, k: i64) -> BigUint {
    if k < 0 {
        return BigUint::zero();
    }
    let mut k = k as u64;
    if BigUint::from(k) > *n {
        return BigUint::zero();
    }

    // Symmetry: binomial(n, k) == binomial(n, n - k). Only triggers when n
    // itself is small (2k > n implies n - k < k), so the cast back to u64
    // is always in range.
    if BigUint::from(2 * k) > *n {
        let n_minus_k = n - BigUint::from(k);
        k = n_minus_k.to_u64().expect("n - k fits in u64 when 2k > n");
    }

    let mut b = BigUint::one();
    for i in 0..k {
        let numer = &b * (n - BigUint::from(i));
        let denom = BigUint::from(i) + BigUint::one();
        debug_assert!(numer.is_multiple_of(&denom), "binomial division must be exact");
        b = numer / denom;
    }
    b
}

/// `catalan(n) = C(2n, n) / (n + 1)`, computed via the multiplicative
/// recurrence `catalan(n) = 2*(2n-1)*catalan(n-1) / (n+1)`.
pub fn catalan(n: u64) -> BigUint {
    let mut c = BigUint::one();
    for i in 1..=n {
        let two = BigUint::from(2u32);
        let two_i_minus_one = &two * BigUint::from(i) - BigUint::one();
        let numer = &two * two_i_minus_one * c;
        let denom = BigUint::from(i) + BigUint::one();
        debug_assert!(numer.is_multiple_of(&denom), "catalan division must be exact");
        c = numer / denom;
    }
    c
}

/// A standing memo table for `catalan`, for callers (the Catalan codec) that
/// call it repeatedly for small, slowly growing `n` within one `rank`/`unrank`
/// invocation. Memoized values are exactly the values the pure recurrence
/// would produce; the cache is an implementation detail, never observable.
#[derive(Default)]
pub struct Combinatorics {
    catalan_memo: RefCell<HashMap<u64, BigUint>>,
}

impl Combinatorics {
    pub fn new() -> Self {
        Self {
            catalan_memo: RefCell::new(HashMap::new()),
        }
    }

    /// Memoized `catalan(n)`.
    pub fn catalan(&self, n: u64) -> BigUint {
        if let Some(v) = self.catalan_memo.borrow().get(&n) {
            return v.clone();
        }
        let v = catalan(n);
        self.catalan_memo.borrow_mut().insert(n, v.clone());
        v
    }

    /// Sum of `catalan(j)` for `j` in `0..n`.
    pub fn catalan_prefix_sum(&self, n: u64) -> BigUint {
        let mut sum = BigUint::zero();
        for j in 0..n {
            sum += self.catalan(j);
        }
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binomial_matches_pascal_identity() {
        let n = BigUint::from(10u32);
        for k in 0..=10i64 {
            let a = binomial(&n, k);
            let b = binomial(&n, 10 - k);
            assert_eq!(a, b, "binomial(10,{}) != binomial(10,{})", k, 10 - k);
        }
    }

    #[test]
    fn binomial_out_of_range_is_zero() {
        let n = BigUint::from(5u32);
        assert_eq!(binomial(&n, -1), BigUint::zero());
        assert_eq!(binomial(&n, 6), BigUint::zero());
    }

    #[test]
    fn binomial_small_values() {
        let n = BigUint::from(5u32);
        assert_eq!(binomial(&n, 0), BigUint::one());
        assert_eq!(binomial(&n, 1), BigUint::from(5u32));
        assert_eq!(binomial(&n, 2), BigUint::from(10u32));
        assert_eq!(binomial(&n, 5), BigUint::one());
    }

    #[test]
    fn catalan_small_values() {
        let expected: [u64; 8] = [1, 1, 2, 5, 14, 42, 132, 429];
        for (n, &c) in expected.iter().enumerate() {
            assert_eq!(catalan(n as u64), BigUint::from(c));
        }
    }

    #[test]
    fn catalan_memo_matches_pure_function() {
        let memo = Combinatorics::new();
        for n in 0..20 {
            assert_eq!(memo.catalan(n), catalan(n));
        }
    }

    #[test]
    fn catalan_prefix_sum_is_cumulative() {
        let memo = Combinatorics::new();
        let mut running = BigUint::zero();
        for n in 0..15 {
            assert_eq!(memo.catalan_prefix_sum(n), running);
            running += catalan(n);
        }
    }
}
