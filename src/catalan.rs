//! The Catalan codec: `rank`/`unrank` between balanced-parenthesis strings
//! and natural numbers, after Kreher & Stinson, *Combinatorial Algorithms*.

use crate::combinatorics::{binomial, Combinatorics};
use crate::error::{Error, Result};
use num_bigint::BigUint;
use num_traits::Zero;

/// A balanced-parenthesis string: `false` = `(`, `true` = `)`.
///
/// Every term's skeleton opens with `(` and closes with `)`; the length is
/// always even and at least 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pars(Vec<bool>);

impl Pars {
    /// Wraps a bit sequence without validating balance. Use [`Pars::parse`]
    /// if the input needs checking (e.g. it came from outside this crate).
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Pars(bits)
    }

    /// Wraps a bit sequence, checking it is a balanced parenthesis string.
    pub fn parse(bits: Vec<bool>) -> Result<Self> {
        validate_balanced(&bits)?;
        Ok(Pars(bits))
    }

    pub fn bits(&self) -> &[bool] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of tree nodes this skeleton describes (`len() / 2`).
    pub fn treecount(&self) -> usize {
        self.0.len() / 2
    }
}

fn validate_balanced(bits: &[bool]) -> Result<()> {
    if bits.len() < 2 || bits.len() % 2 != 0 {
        return Err(Error::UnbalancedParens(format!(
            "length {} is not even and >= 2",
            bits.len()
        )));
    }
    if bits[0] {
        return Err(Error::UnbalancedParens("must start with '('".to_string());
    }
    let mut excess: i64 = 0;
    for &b in bits {
        excess += if b { -1 } else { 1 };
        if excess < 0 {
            return Err(Error::UnbalancedParens(
                "closing paren without matching open".to_string(),
            ));
        }
    }
    if excess != 0 {
        return Err(Error::UnbalancedParens(
            "unequal number of '(' and ')'".to_string(),
        ));
    }
    Ok(())
}

/// `M(n, x, y) = C(2n - x, n - (x+y)/2) - C(2n - x, n - (x+y)/2 - 1)`: counts
/// balanced suffixes of length `2n - x` that start in excess-`y` state.
///
/// `BigUint` has no negative values, so the subtraction is clamped at 0;
/// the algorithm only ever needs this when the first binomial dominates.
fn m(n: u64, x: i64, y: i64) -> BigUint {
    let base_val = 2 * (n as i64) - x;
    let base = BigUint::from(base_val.max(0) as u64);
    let k1 = (n as i64) - (x + y) / 2;
    let k2 = k1 - 1;
    let a = binomial(&base, k1);
    let b = binomial(&base, k2);
    if a >= b {
        a - b
    } else {
        BigUint::zero()
    }
}

/// Ranks a balanced-parenthesis string: its position among all balanced
/// strings, ordered first by number of opening parens, then by the
/// Kreher-Stinson local order within that length.
pub fn rank(pars: &Pars) -> Result<BigUint> {
    validate_balanced(&pars.0)?;
    let cb = Combinatorics::new();
    let i = pars.0.len() / 2 - 1;
    let n_local = i as u64;

    let mut y: i64 = 0;
    let mut lo = BigUint::zero();

    // `hi` tracks the same running upper bound unrank uses, but rank only
    // ever needs `lo` for its result; we don't bother maintaining it here.
    for x in 1..=(2 * i) {
        let bit = pars.0[x];
        if !bit {
            // '(' : open
            y += 1;
        } else {
            // ')' : close
            lo += m(n_local, x as i64, y + 1);
            y -= 1;
        }
    }

    Ok(lo + cb.catalan_prefix_sum(n_local))
}

/// Unranks a natural number into its balanced-parenthesis string.
pub fn unrank(n: &BigUint) -> Pars {
    let cb = Combinatorics::new();

    // Largest i such that sum_{j=0..i-1} catalan(j) <= n.
    let mut i: u64 = 0;
    loop {
        let next_sum = cb.catalan_prefix_sum(i + 1);
        if &next_sum > n {
            break;
        }
        i += 1;
    }
    let local = n - cb.catalan_prefix_sum(i);

    let mut interior = vec![false; 2 * i as usize];
    let mut y: i64 = 0;
    let mut lo = BigUint::zero();

    for x in 1..=(2 * i as usize) {
        let k = m(i, x as i64, y + 1);
        if local < &lo + &k {
            interior[x - 1] = false; // '('
            y += 1;
        } else {
            interior[x - 1] = true; // ')'
            lo += k;
            y -= 1;
        }
    }

    let mut out = Vec::with_capacity(2 * (i as usize + 1));
    out.push(false);
    out.extend(interior);
    out.push(true);
    Pars::from_bits(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrank_zero_is_leaf() {
        assert_eq!(unrank(&BigUint::zero()), Pars::from_bits(vec![false, true]));
    }

    #[test]
    fn rank_unrank_roundtrip_small() {
        for n in 0u64..200 {
            let nb = BigUint::from(n);
            let pars = unrank(&nb);
            assert_eq!(rank(&pars).unwrap(), nb, "mismatch at n={}", n);
        }
    }

    #[test]
    fn unrank_rank_roundtrip_all_small_trees() {
        // Enumerate every balanced string by brute force up to length 10
        // and check unrank(rank(pars)) == pars.
        fn is_balanced(bits: &[bool]) -> bool {
            let mut excess = 0i64;
            for &b in bits {
                excess += if b { -1 } else { 1 };
                if excess < 0 {
                    return false;
                }
            }
            excess == 0
        }
        for len in (2..=10).step_by(2) {
            for mask in 0u32..(1 << len) {
                let bits: Vec<bool> = (0..len).map(|i| (mask >> i) & 1 == 1).collect();
                if !bits[0] && is_balanced(&bits) {
                    let pars = Pars::from_bits(bits.clone());
                    let r = rank(&pars).unwrap();
                    assert_eq!(unrank(&r), pars, "roundtrip failed for {:?}", bits);
                }
            }
        }
    }

    #[test]
    fn rank_rejects_unbalanced() {
        let bad = Pars::from_bits(vec![true, false]);
        assert!(matches!(rank(&bad), Err(Error::UnbalancedParens(_))));
    }

    #[test]
    fn rank_rejects_odd_length() {
        let bad = Pars::from_bits(vec![false, false, true]);
        assert!(matches!(rank(&bad), Err(Error::UnbalancedParens(_))));
    }

    #[test]
    fn distinct_ranks_are_ordered_by_node_count() {
        // All strings with i opens rank below all strings with i+1 opens.
        let two_node = unrank(&BigUint::from(1u32));
        assert_eq!(two_node.treecount(), 2);
        let one_node = unrank(&BigUint::zero());
        assert_eq!(one_node.treecount(), 1);
    }
}
