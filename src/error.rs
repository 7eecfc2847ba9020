//! Error kinds surfaced by the codecs in this crate.
//!
//! Every fallible public operation returns [`Result`]. Nothing is retried or
//! swallowed internally: a malformed input is always reported to the caller.

/// The error kinds from the bijection's error-handling design.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Passed to [`crate::catalan::rank`] when the bit sequence is not a
    /// balanced parenthesis string starting with `0`.
    #[error("parenthesis string is not balanced: {0}")]
    UnbalancedParens(String),

    /// [`crate::skeleton::from_pair`] encountered a skeleton prefix
    /// inconsistent with the grammar, or the skeleton/sym streams did not
    /// exhaust together.
    #[error("malformed (skeleton, symbol) pair: {0}")]
    MalformedPair(String),

    /// Fixed-signature `term2nat` was given a symbol, or `(symbol, arity)`
    /// pair, absent from the signature.
    #[error("symbol not present in signature: {0}")]
    UnknownSymbol(String),

    /// Fixed-signature `nat2term` was called with nothing to decode the
    /// given code into: either the signature has no variables, constants,
    /// or function symbols at all, or the code is past `lv + lc` and there
    /// are no function symbols to cover it.
    #[error("{0}")]
    EmptySignature(String),
}

/// Convenience alias for this crate's fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
