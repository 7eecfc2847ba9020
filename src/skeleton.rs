//! Splitting a [`Term`] into its skeleton/sym pair, and rebuilding a `Term`
//! from that pair.
//!
//! Both directions are iterative (an explicit work stack stands in for
//! recursion) so that very deep or very wide terms don't overflow a fixed
//! call stack, per the recursion-depth discipline in this crate's design
//! notes.

use crate::catalan::Pars;
use crate::error::{Error, Result};
use crate::term::Term;
use num_bigint::BigUint;

/// The sym stream: one value per tree node, co-indexed with the skeleton's
/// opening parentheses in emission order.
pub type Syms = Vec<BigUint>;

enum Work<'a> {
    Enter(&'a Term),
    Exit,
}

/// Splits a term into its skeleton and sym streams in one traversal.
pub fn to_pair(t: &Term) -> (Pars, Syms) {
    let mut skeleton = Vec::new();
    let mut syms = Vec::new();
    let mut stack = vec![Work::Enter(t)];

    while let Some(item) = stack.pop() {
        match item {
            Work::Enter(Term::Var(i)) => {
                syms.push(BigUint::from(2u32) * i);
                skeleton.push(false);
                skeleton.push(true);
            }
            Work::Enter(Term::Fun(f, children)) if children.is_empty() => {
                syms.push(BigUint::from(2u32) * f + BigUint::from(1u32));
                skeleton.push(false);
                skeleton.push(true);
            }
            Work::Enter(Term::Fun(f, children)) => {
                syms.push(f.clone());
                skeleton.push(false);
                stack.push(Work::Exit);
                for child in children.iter().rev() {
                    stack.push(Work::Enter(child));
                }
            }
            Work::Exit => skeleton.push(true),
        }
    }

    (Pars::from_bits(skeleton), syms)
}

struct PendingFun {
    label: BigUint,
    children: Vec<Term>,
}

/// Reconstructs the term described by a skeleton/sym pair.
///
/// Both streams must be consumed to exhaustion by the single top-level term;
/// residual bits or syms, or a skeleton prefix inconsistent with the
/// grammar, are reported as [`Error::MalformedPair`].
pub fn from_pair(pars: &Pars, syms: &Syms) -> Result<Term> {
    let bits = pars.bits();
    let mut ip = 0usize;
    let mut is = 0usize;
    let mut stack: Vec<PendingFun> = Vec::new();
    let mut result: Option<Term> = None;

    while result.is_none() {
        if !stack.is_empty() && peek_bit(bits, ip)? {
            // Closing paren: finish the list at the top of the stack.
            ip += 1;
            let frame = stack.pop().unwrap();
            let completed = Term::Fun(frame.label, frame.children);
            match stack.last_mut() {
                Some(parent) => parent.children.push(completed),
                None => result = Some(completed),
            }
            continue;
        }

        // Parse one expression at the current position: a leaf (skeleton
        // "0,1") completes immediately; a non-leaf Fun start ("0" not
        // followed by "1") opens a new frame that subsequent iterations
        // fill in as a children list, terminated by the matching "1" above.
        if peek_bit(bits, ip)? {
            return Err(Error::MalformedPair(format!(
                "expected start of an expression ('(') at skeleton position {}, found ')'",
                ip
            )));
        }
        if peek_bit(bits, ip + 1)? {
            ip += 2;
            let x = next_sym(syms, &mut is)?;
            let two = BigUint::from(2u32);
            let leaf = if (&x % &two) == BigUint::from(0u32) {
                Term::Var(x / two)
            } else {
                Term::Fun((x - BigUint::from(1u32)) / two, Vec::new())
            };
            match stack.last_mut() {
                Some(parent) => parent.children.push(leaf),
                None => result = Some(leaf),
            }
        } else {
            ip += 1;
            let f = next_sym(syms, &mut is)?;
            stack.push(PendingFun {
                label: f,
                children: Vec::new(),
            });
        }
    }

    if ip != bits.len() {
        return Err(Error::MalformedPair(format!(
            "{} residual skeleton bit(s) after a complete term",
            bits.len() - ip
        )));
    }
    if is != syms.len() {
        return Err(Error::MalformedPair(format!(
            "{} residual sym(s) after a complete term",
            syms.len() - is
        )));
    }

    Ok(result.unwrap())
}

fn peek_bit(bits: &[bool], at: usize) -> Result<bool> {
    bits.get(at)
        .copied()
        .ok_or_else(|| Error::MalformedPair(format!("skeleton exhausted at position {}", at)))
}

fn next_sym(syms: &Syms, is: &mut usize) -> Result<BigUint> {
    let v = syms
        .get(*is)
        .cloned()
        .ok_or_else(|| Error::MalformedPair(format!("sym stream exhausted at position {}", is)))?;
    *is += 1;
    Ok(v)
}
