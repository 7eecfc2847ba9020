//! `TermEncoder`: composes the Catalan codec, the Cantor codec, and the
//! skeleton/sym split-join to deliver the infinite-signature bijection
//! between [`Term`] and `BigUint`.

use crate::cantor::{from_cantor_tuple, to_cantor_tuple};
use crate::catalan::{rank, unrank};
use crate::error::Result;
use crate::skeleton::{from_pair, to_pair};
use crate::term::Term;
use num_bigint::BigUint;

/// Encodes a term to its natural-number code.
///
/// 1. Split the term into `(skeleton, syms)`.
/// 2. Rank the skeleton and Cantor-tuple-encode the syms.
/// 3. Pair those two numbers with the 2-ary Cantor tupling bijection.
pub fn to_code(t: &Term) -> BigUint {
    let (pars, syms) = to_pair(t);
    let r = rank(&pars).expect("to_pair always produces a balanced skeleton");
    let x = from_cantor_tuple(&syms);
    from_cantor_tuple(&[r, x])
}

/// Decodes a natural-number code back into its term. Total: every `n` is a
/// valid code.
pub fn from_code(n: &BigUint) -> Result<Term> {
    let pair = to_cantor_tuple(2, n);
    let (r, x) = (&pair[0], &pair[1]);
    let pars = unrank(r);
    let syms = to_cantor_tuple(pars.treecount(), x);
    from_pair(&pars, &syms)
}
