//! The term algebra's data model: `Term = Var(i) | Fun(f, children)`.

use num_bigint::BigUint;
use std::fmt;

/// A term over an unbounded supply of variable and function-symbol labels.
///
/// `Fun(f, [])` (a nullary function symbol) is distinct from `Var(f)` even
/// when the labels coincide — the two are different terms that merely share
/// an encoding convention (see [`crate::skeleton`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// A variable labeled by a natural number.
    Var(BigUint),
    /// A function symbol labeled by a natural number, applied to an ordered
    /// (possibly empty) sequence of subterms.
    Fun(BigUint, Vec<Term>),
}

impl Term {
    /// Number of nodes in the term tree (one per `Var` or `Fun` node).
    pub fn nodecount(&self) -> usize {
        // Iterative to avoid recursion depth proportional to term size.
        let mut stack = vec![self];
        let mut count = 0usize;
        while let Some(t) = stack.pop() {
            count += 1;
            if let Term::Fun(_, children) = t {
                stack.extend(children.iter());
            }
        }
        count
    }

    /// Length of the longest root-to-leaf path (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        // Iterative: a stack of (node, depth-of-parent-path) pairs stands in
        // for recursion.
        let mut stack = vec![(self, 1usize)];
        let mut max_depth = 0usize;
        while let Some((t, d)) = stack.pop() {
            max_depth = max_depth.max(d);
            if let Term::Fun(_, children) = t {
                stack.extend(children.iter().map(|c| (c, d + 1)));
            }
        }
        max_depth
    }
}

impl fmt::Display for Term {
    /// `Var(i)` renders as `v<i>`; `Fun(f, children)` renders as
    /// `F<f>(c1,...,cn)`, with no parentheses when `children` is empty
    /// (rendered as bare `F<f>`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(i) => write!(f, "v{}", i),
            Term::Fun(sym, children) => {
                write!(f, "F{}", sym)?;
                if !children.is_empty() {
                    write!(f, "(")?;
                    for (idx, child) in children.iter().enumerate() {
                        if idx > 0 {
                            write!(f, ",")?;
                        }
                        write!(f, "{}", child)?;
                    }
                    write!(f, ")")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bu(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn nodecount_leaf() {
        assert_eq!(Term::Var(bu(0)).nodecount(), 1);
        assert_eq!(Term::Fun(bu(5), vec![]).nodecount(), 1);
    }

    #[test]
    fn nodecount_nested() {
        let t = Term::Fun(
            bu(1),
            vec![Term::Var(bu(2)), Term::Fun(bu(3), vec![Term::Var(bu(4))])],
        );
        assert_eq!(t.nodecount(), 4);
    }

    #[test]
    fn depth_of_leaf_is_one() {
        assert_eq!(Term::Var(bu(0)).depth(), 1);
        assert_eq!(Term::Fun(bu(5), vec![]).depth(), 1);
    }

    #[test]
    fn depth_is_longest_path_not_total_size() {
        // A wide-but-shallow term and a narrow-but-deep term with the same
        // node count have different depths.
        let wide = Term::Fun(
            bu(0),
            vec![Term::Var(bu(1)), Term::Var(bu(2)), Term::Var(bu(3))],
        );
        assert_eq!(wide.depth(), 2);

        let deep = Term::Fun(bu(0), vec![Term::Fun(bu(1), vec![Term::Var(bu(2))])]);
        assert_eq!(deep.depth(), 3);
    }

    #[test]
    fn display_matches_convention() {
        assert_eq!(Term::Var(bu(3)).to_string(), "v3");
        assert_eq!(Term::Fun(bu(7), vec![]).to_string(), "F7");
        let t = Term::Fun(bu(1), vec![Term::Var(bu(0)), Term::Fun(bu(2), vec![])]);
        assert_eq!(t.to_string(), "F1(v0,F2)");
    }

    #[test]
    fn fun_with_empty_children_differs_from_var_with_same_label() {
        let as_var = Term::Var(bu(9));
        let as_fun = Term::Fun(bu(9), vec![]);
        assert_ne!(as_var, as_fun);
    }
}
