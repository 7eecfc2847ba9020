//! The fixed-signature codec: a bijection between N and the well-formed
//! terms over a finite, user-supplied signature of variables, constants,
//! and arity-fixed function symbols.

use crate::cantor::{from_cantor_tuple, to_cantor_tuple};
use crate::error::{Error, Result};
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// A finite signature: `lv` variables, `lc` constants, `lf` function
/// symbols with fixed arities.
///
/// Symbol comparison (used by [`Signature::term2nat`] to find a symbol's
/// position) is ordinary [`PartialEq`] on `B`; arity comparison is `usize`
/// equality. Constructing a `Signature` does no validation beyond storing
/// the arrays — `lv + lc >= 1` and `lf >= 1` (when needed) are checked
/// lazily, at `nat2term`/`term2nat` call time, matching the error kinds in
/// [`crate::error::Error`].
#[derive(Debug, Clone)]
pub struct Signature<A, B> {
    pub vars: Vec<A>,
    pub consts: Vec<B>,
    /// Function symbols paired with their arity. Arity is a plain `usize`
    /// rather than an arbitrary-precision integer: an arity too large to fit
    /// a `usize` could never be realized as a Cantor tuple of that many
    /// children, so the narrowing loses no reachable term.
    pub funs: Vec<(B, usize)>,
}

/// A term over a [`Signature`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixedSignatureTerm<A, B> {
    FVar(A),
    FConst(B),
    FFun(B, Vec<FixedSignatureTerm<A, B>>),
}

impl<A, B> Signature<A, B> {
    pub fn new(vars: Vec<A>, consts: Vec<B>, funs: Vec<(B, usize)>) -> Self {
        Self { vars, consts, funs }
    }

    fn lv(&self) -> usize {
        self.vars.len()
    }

    fn lc(&self) -> usize {
        self.consts.len()
    }

    fn lf(&self) -> usize {
        self.funs.len()
    }
}

/// One decoding step: either a finished leaf, or a function symbol with the
/// (not yet decoded) codes of its children.
enum Decoded<A, B> {
    Leaf(FixedSignatureTerm<A, B>),
    Fun(B, Vec<BigUint>),
}

/// A function-application frame under construction during iterative decode.
struct PendingDecode<A, B> {
    symbol: B,
    remaining: Vec<BigUint>,
    done: Vec<FixedSignatureTerm<A, B>>,
}

impl<A: Clone, B: Clone + PartialEq> Signature<A, B> {
    fn decode_one(&self, n: &BigUint) -> Result<Decoded<A, B>> {
        if self.lv() + self.lc() == 0 && self.lf() == 0 {
            return Err(Error::EmptySignature(
                "signature has no variables, constants, or function symbols to decode into"
                    .to_string(),
            ));
        }
        let lv = BigUint::from(self.lv() as u64);
        let lvc = BigUint::from((self.lv() + self.lc()) as u64);

        if n < &lv {
            let idx = n.to_usize().expect("n < lv fits in usize");
            return Ok(Decoded::Leaf(FixedSignatureTerm::FVar(self.vars[idx].clone())));
        }
        if n < &lvc {
            let idx = (n - &lv).to_usize().expect("n - lv fits in usize");
            return Ok(Decoded::Leaf(FixedSignatureTerm::FConst(
                self.consts[idx].clone(),
            )));
        }
        if self.lf() == 0 {
            return Err(Error::EmptySignature(format!(
                "code {} is past the {} variable/constant codes and the signature has no function symbols to cover it",
                n, self.lv() + self.lc()
            )));
        }

        let n1 = BigUint::from(1u32) + n - &lvc;
        let (d, m) = get_b_digit(self.lf(), &n1);
        let (symbol, arity) = &self.funs[d];
        let args = to_cantor_tuple(*arity, &m);
        Ok(Decoded::Fun(symbol.clone(), args))
    }

    /// Decodes a natural number into the term it denotes.
    ///
    /// Iterative: an explicit work stack of [`PendingDecode`] frames stands
    /// in for recursion, so decoding does not overflow a fixed call stack
    /// for pathologically deep codes.
    pub fn nat2term(&self, n: &BigUint) -> Result<FixedSignatureTerm<A, B>> {
        let mut stack: Vec<PendingDecode<A, B>> = Vec::new();
        let mut next_code = Some(n.clone());
        let mut result = None;

        while result.is_none() {
            let code = match next_code.take() {
                Some(c) => c,
                None => {
                    let frame = stack.last_mut().expect("result is None, so a frame is pending");
                    match frame.remaining.pop() {
                        Some(c) => c,
                        None => {
                            let frame = stack.pop().unwrap();
                            let t = FixedSignatureTerm::FFun(frame.symbol, frame.done);
                            push_completed(&mut stack, &mut result, t);
                            continue;
                        }
                    }
                }
            };
            match self.decode_one(&code)? {
                Decoded::Leaf(t) => push_completed(&mut stack, &mut result, t),
                Decoded::Fun(symbol, mut child_codes) => {
                    child_codes.reverse(); // pop() yields children in order
                    stack.push(PendingDecode {
                        symbol,
                        remaining: child_codes,
                        done: Vec::new(),
                    });
                }
            }
        }

        Ok(result.unwrap())
    }

    fn var_code(&self, x: &A) -> Result<BigUint>
    where
        A: PartialEq,
    {
        let idx = self
            .vars
            .iter()
            .position(|v| v == x)
            .ok_or_else(|| Error::UnknownSymbol("variable not in signature".to_string()))?;
        Ok(BigUint::from(idx as u64))
    }

    fn const_code(&self, c: &B) -> Result<BigUint> {
        let idx = self
            .consts
            .iter()
            .position(|v| v == c)
            .ok_or_else(|| Error::UnknownSymbol("constant not in signature".to_string()))?;
        Ok(BigUint::from((self.lv() + idx) as u64))
    }

    /// Encodes a term into its natural-number index.
    ///
    /// Iterative postorder traversal: an explicit work stack plus a
    /// parallel stack of already-computed child codes stands in for
    /// recursion.
    pub fn term2nat(&self, t: &FixedSignatureTerm<A, B>) -> Result<BigUint>
    where
        A: PartialEq,
    {
        enum Item<'a, A, B> {
            Visit(&'a FixedSignatureTerm<A, B>),
            Combine(&'a B, usize),
        }

        let mut stack = vec![Item::Visit(t)];
        let mut codes: Vec<BigUint> = Vec::new();

        while let Some(item) = stack.pop() {
            match item {
                Item::Visit(FixedSignatureTerm::FVar(x)) => codes.push(self.var_code(x)?),
                Item::Visit(FixedSignatureTerm::FConst(c)) => codes.push(self.const_code(c)?),
                Item::Visit(FixedSignatureTerm::FFun(f, xs)) => {
                    stack.push(Item::Combine(f, xs.len()));
                    for x in xs.iter().rev() {
                        stack.push(Item::Visit(x));
                    }
                }
                Item::Combine(f, arity) => {
                    let split_at = codes.len() - arity;
                    let args: Vec<BigUint> = codes.split_off(split_at);
                    let d = self
                        .funs
                        .iter()
                        .position(|(sym, a)| sym == f && *a == arity)
                        .ok_or_else(|| {
                            Error::UnknownSymbol(format!(
                                "function symbol with arity {} not in signature",
                                arity
                            ))
                        })?;
                    let m = from_cantor_tuple(&args);
                    let n = put_b_digit(self.lf(), d, &m);
                    codes.push(n + BigUint::from((self.lv() + self.lc()) as u64) - BigUint::from(1u32));
                }
            }
        }

        Ok(codes.pop().expect("one root term produces exactly one code"))
    }
}

fn push_completed<A, B>(
    stack: &mut [PendingDecode<A, B>],
    result: &mut Option<FixedSignatureTerm<A, B>>,
    t: FixedSignatureTerm<A, B>,
) {
    match stack.last_mut() {
        Some(parent) => parent.done.push(t),
        None => *result = Some(t),
    }
}

/// Bijective base-`b` digit encoding: `putBDigit(b, d, m) = 1 + d + b*m`.
fn put_b_digit(b: usize, d: usize, m: &BigUint) -> BigUint {
    BigUint::from(1u32) + BigUint::from(d as u64) + BigUint::from(b as u64) * m
}

/// Inverse of [`put_b_digit`]: `(q, r) = (n / b, n mod b)`; if `r = 0`
/// return `(b - 1, q - 1)`, else return `(r - 1, q)`.
fn get_b_digit(b: usize, n: &BigUint) -> (usize, BigUint) {
    let bb = BigUint::from(b as u64);
    let q = n / &bb;
    let r = n % &bb;
    if r.is_zero() {
        (b - 1, q - BigUint::from(1u32))
    } else {
        let d = r.to_usize().expect("r < b fits in usize") - 1;
        (d, q)
    }
}
