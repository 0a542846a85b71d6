//! Simulator error type.
//!
//! Every way a run can be rejected is one of three kinds.  Parsing and I/O
//! happen outside the core, but the loader maps its failures onto these
//! before anything reaches `SimBuilder`.  Once a `Sim` exists it cannot fail.

use thiserror::Error;

/// The error type shared by all `checkout-*` crates that validate input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// The register count was missing, non-numeric, or less than 1.
    #[error("invalid register count {0:?}: expected an integer >= 1")]
    InvalidRegisterCount(String),

    /// A customer line could not be turned into a valid customer.
    ///
    /// `line` is 1-based and refers to the source file; it is 0 for
    /// customers supplied programmatically.
    #[error("invalid customer record on line {line}: {reason}")]
    InvalidCustomerRecord { line: usize, reason: String },

    /// The input could not be read at all, or was empty.
    #[error("missing input: {0}")]
    MissingInput(String),
}

/// Shorthand result type for all `checkout-*` crates.
pub type CheckoutResult<T> = Result<T, CheckoutError>;
