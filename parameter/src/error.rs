//! Error taxonomy for parameter graph construction and queries.
//!
//! | Variant | Raised by | Recoverable |
//! |---------|-----------|-------------|
//! | `ResourceNotFound` | graph construction | no, the graph is not built |
//! | `MalformedCatalog` | graph construction | no |
//! | `SizeOverflow` | graph construction, radix tables | no |
//! | `IndexOutOfRange` | `parameter`, `adjacencies` | yes |
//! | `UnknownLogicCode` | `index` | yes |
//! | everything else | value constructors | yes |

use crate::network::NodeSignature;

/// Boxed error returned by catalog providers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The catalog provider could not supply a catalog for a node signature.
    #[error("no logic resource for node {node} (signature {signature})")]
    ResourceNotFound {
        /// Node whose catalog was requested.
        node: usize,
        /// Signature used as the lookup key.
        signature: NodeSignature,
        /// Provider-specific cause.
        #[source]
        source: BoxError,
    },

    /// A provider returned a catalog that violates the catalog contract.
    #[error("malformed logic catalog for node {node}: {reason}")]
    MalformedCatalog {
        /// Node whose catalog is malformed.
        node: usize,
        /// What is wrong with it.
        reason: String,
    },

    /// A product of place values does not fit in `u64`.
    #[error("parameter space size overflows u64")]
    SizeOverflow,

    /// A linear index at or beyond the size of the space.
    #[error("index {index} out of range for parameter graph of size {size}")]
    IndexOutOfRange {
        /// Requested index.
        index: u64,
        /// Size of the space.
        size: u64,
    },

    /// A logic code that does not belong to the node's catalog.
    #[error("logic code {code:?} is not in the catalog of node {node}")]
    UnknownLogicCode {
        /// Node whose catalog was searched.
        node: usize,
        /// The offending code.
        code: String,
    },

    /// A string that is not a well-formed truth-table code.
    #[error("invalid logic code {code:?} for {inputs} inputs: {reason}")]
    InvalidLogicCode {
        /// The offending code.
        code: String,
        /// Input arity the code was checked against.
        inputs: usize,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// An order index at or beyond `outputs!`.
    #[error("order index {index} out of range for {outputs} outputs ({bound} orderings)")]
    OrderIndexOutOfRange {
        /// Requested order index.
        index: u64,
        /// Output arity.
        outputs: usize,
        /// Number of orderings, `outputs!`.
        bound: u64,
    },

    /// A parameter whose per-node sequences do not match the network.
    #[error("parameter has {logic} logic and {order} order entries, network has {nodes} nodes")]
    NodeCountMismatch {
        /// Node count of the network.
        nodes: usize,
        /// Number of logic parameters supplied.
        logic: usize,
        /// Number of order parameters supplied.
        order: usize,
    },

    /// A radix of zero.
    #[error("radix at position {position} is zero")]
    InvalidRadix {
        /// Digit position.
        position: usize,
    },

    /// A digit that is not below the radix of its position.
    #[error("digit {digit} at position {position} is not below radix {radix}")]
    DigitOutOfRange {
        /// Digit position.
        position: usize,
        /// The offending digit.
        digit: u64,
        /// Radix at that position.
        radix: u64,
    },

    /// A digit sequence whose length differs from the radix table.
    #[error("expected {expected} digits, found {found}")]
    DigitCountMismatch {
        /// Number of radices.
        expected: usize,
        /// Number of digits supplied.
        found: usize,
    },

    /// A sequence that is not a permutation of `0..len`.
    #[error("{0:?} is not a permutation")]
    InvalidPermutation(Vec<usize>),
}
