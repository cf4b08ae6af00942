//! Parameter graphs for combinatorial regulatory networks.
//!
//! Every node of a regulatory network carries two discrete choices: an
//! admissible Boolean function of its inputs (a *logic parameter*) and an
//! ordering of its outputs (an *order parameter*). The product of these
//! choices over all nodes is a finite parameter space. This crate numbers
//! that space: [`ParameterGraph`] maps each index in `[0, size)` to exactly
//! one [`Parameter`] and back, and connects parameters whose truth tables
//! differ in a single bit.
//!
//! # Layout of the index
//!
//! | Component | Radix of node `d` | Subspace size |
//! |-----------|-------------------|---------------|
//! | Logic | `\|catalog[d]\|` | `fixed_order_size()` |
//! | Order | `m_d!` | `reorderings()` |
//!
//! `index = order_index · fixed_order_size + logic_index`, and each component
//! is a [mixed-radix](radix) number with node 0 least significant.
//!
//! # Collaborators
//!
//! The network and the catalogs of admissible codes are supplied from
//! outside, through the [`Network`] and [`CatalogProvider`] traits. The
//! crate performs no I/O.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use regnet_parameter::{MemoryCatalog, NodeSignature, ParameterGraph};
//!
//! let x = NodeSignature::new(1, 2, vec![1], false);
//! let y = NodeSignature::new(2, 1, vec![1, 1], false);
//! let provider = MemoryCatalog::new()
//!     .with(x.clone(), ["0", "8", "C"])
//!     .with(y.clone(), ["0", "8", "A", "C", "E", "F"]);
//! let graph = ParameterGraph::new(Arc::new(vec![x, y]), &provider).unwrap();
//!
//! assert_eq!(graph.fixed_order_size(), 18);
//! assert_eq!(graph.reorderings(), 2);
//! assert_eq!(graph.size(), 36);
//!
//! for i in 0..graph.size() {
//!     let p = graph.parameter(i).unwrap();
//!     assert_eq!(graph.index(&p).unwrap(), i);
//! }
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod catalog;
pub mod error;
pub mod graph;
pub mod logic;
pub mod network;
pub mod order;
pub mod parameter;
pub mod radix;

pub use catalog::{CatalogProvider, LogicCatalog, MemoryCatalog};
pub use error::{BoxError, Error, Result};
pub use graph::{ParameterGraph, Parameters};
pub use logic::LogicParameter;
pub use network::{Network, NodeSignature};
pub use order::OrderParameter;
pub use parameter::Parameter;
pub use radix::{factorial, MixedRadix};
