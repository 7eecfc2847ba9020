//! A total bijection between the natural numbers and the terms of a term
//! algebra.
//!
//! Two codecs are exposed:
//!
//! - [`encoder`]: the infinite-signature bijection, over [`term::Term`] —
//!   variables and function symbols are themselves natural numbers, and
//!   function symbols have no fixed arity.
//! - [`fixed`]: the fixed-signature bijection, over [`fixed::Signature`] and
//!   [`fixed::FixedSignatureTerm`] — a finite, user-supplied set of
//!   variables, constants, and arity-fixed function symbols.
//!
//! Both are built from the same three layers, each its own module:
//! arbitrary-precision combinatorics ([`combinatorics`]), the Catalan codec
//! for balanced-parenthesis skeletons ([`catalan`]), and the generalized
//! Cantor tupling bijection ([`cantor`]). [`skeleton`] glues the term shape
//! to those two codecs for the infinite-signature side.

pub mod cantor;
pub mod catalan;
pub mod combinatorics;
pub mod encoder;
pub mod error;
pub mod fixed;
pub mod skeleton;
pub mod term;

pub use encoder::{from_code, to_code};
pub use error::{Error, Result};
pub use fixed::{FixedSignatureTerm, Signature};
pub use term::Term;
