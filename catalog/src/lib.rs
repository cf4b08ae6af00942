//! Durable sources for regnet parameter graphs.
//!
//! `regnet-parameter` takes its network and its logic catalogs through
//! traits and never touches the file system. This crate supplies the two
//! collaborators a command-line tool needs:
//!
//! | Type | Implements | Source |
//! |------|------------|--------|
//! | [`DirectoryCatalog`] | `CatalogProvider` | one `<signature>.dat` file per node signature |
//! | [`NetworkDescription`] | `Network` | JSON document listing the nodes |
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use regnet_catalog::{DirectoryCatalog, NetworkDescription};
//! use regnet_parameter::ParameterGraph;
//!
//! let network = NetworkDescription::from_path("network.json").expect("network");
//! let catalogs = DirectoryCatalog::new("share/logic");
//! let graph = ParameterGraph::new(Arc::new(network), &catalogs).expect("graph");
//! println!("{graph}");
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod description;
pub mod directory;

use std::path::PathBuf;

pub use description::{NetworkDescription, NodeDescription};
pub use directory::DirectoryCatalog;

/// Errors raised while loading networks and catalogs.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A logic resource file does not exist.
    #[error("could not find logic resource {}", .path.display())]
    MissingResource {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// A file exists but could not be read.
    #[error("failed to read {}", .path.display())]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A network description is not valid JSON for the expected schema.
    #[error("invalid network description")]
    Json(#[from] serde_json::Error),

    /// A network description file is not valid JSON for the expected schema.
    #[error("invalid network description in {}", .path.display())]
    JsonFile {
        /// File being parsed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// A node description is inconsistent.
    #[error("node {node} ({name}): {reason}")]
    InvalidNode {
        /// Position of the node.
        node: usize,
        /// Name of the node.
        name: String,
        /// What is wrong with it.
        reason: String,
    },
}
