//! JSON network descriptions.
//!
//! A description lists the nodes of a network with the facts a parameter
//! graph needs:
//!
//! ```json
//! {
//!   "nodes": [
//!     { "name": "X", "inputs": 2, "outputs": 1, "logic": [1, 1] },
//!     { "name": "Y", "inputs": 1, "outputs": 2, "essential": true }
//!   ]
//! }
//! ```
//!
//! `logic` defaults to one group holding every input and `essential` to
//! `false`. Group sizes must be positive and sum to `inputs`, and node
//! names must be unique.

use std::collections::HashSet;
use std::path::Path;

use regnet_parameter::{Network, NodeSignature};
use serde::{Deserialize, Serialize};

use crate::LoadError;

/// One node of a [`NetworkDescription`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeDescription {
    /// Node name.
    pub name: String,
    /// Input arity.
    pub inputs: usize,
    /// Output arity.
    pub outputs: usize,
    /// Sizes of the logic groups.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub logic: Vec<usize>,
    /// Essential flag.
    #[serde(default)]
    pub essential: bool,
}

/// A validated network read from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkDescription {
    nodes: Vec<NodeDescription>,
}

impl NetworkDescription {
    /// Validate a list of nodes, filling in default logic groups.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::InvalidNode`] for a duplicate name, a zero-sized
    /// logic group, or groups that do not sum to the input arity.
    pub fn new(mut nodes: Vec<NodeDescription>) -> Result<Self, LoadError> {
        let mut names = HashSet::with_capacity(nodes.len());
        for (index, node) in nodes.iter_mut().enumerate() {
            let name = node.name.clone();
            let invalid = |reason: String| LoadError::InvalidNode {
                node: index,
                name: name.clone(),
                reason,
            };
            if !names.insert(name.clone()) {
                return Err(invalid("duplicate node name".to_owned()));
            }
            if node.logic.is_empty() && node.inputs > 0 {
                node.logic = vec![node.inputs];
            }
            if node.logic.contains(&0) {
                return Err(invalid("logic groups must be non-empty".to_owned()));
            }
            let total: usize = node.logic.iter().sum();
            if total != node.inputs {
                return Err(invalid(format!(
                    "logic groups {:?} cover {total} inputs, node has {}",
                    node.logic, node.inputs
                )));
            }
        }
        Ok(Self { nodes })
    }

    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Json`] for malformed JSON and
    /// [`LoadError::InvalidNode`] for inconsistent nodes.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let raw: NetworkDescription = serde_json::from_str(json)?;
        Self::new(raw.nodes)
    }

    /// Read, parse and validate a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] or [`LoadError::MissingResource`] when the
    /// file cannot be read, [`LoadError::JsonFile`] for malformed JSON and
    /// [`LoadError::InvalidNode`] for inconsistent nodes.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => LoadError::MissingResource {
                path: path.to_path_buf(),
            },
            _ => LoadError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        let raw: NetworkDescription =
            serde_json::from_str(&text).map_err(|source| LoadError::JsonFile {
                path: path.to_path_buf(),
                source,
            })?;
        let network = Self::new(raw.nodes)?;
        tracing::debug!(path = %path.display(), nodes = network.nodes.len(), "loaded network");
        Ok(network)
    }

    /// The nodes, in index order.
    pub fn nodes(&self) -> &[NodeDescription] {
        &self.nodes
    }

    /// Name of `node`.
    pub fn name(&self, node: usize) -> Option<&str> {
        self.nodes.get(node).map(|n| n.name.as_str())
    }

    /// Index of the node called `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.name == name)
    }
}

impl Network for NetworkDescription {
    fn size(&self) -> usize {
        self.nodes.len()
    }

    fn inputs(&self, node: usize) -> usize {
        self.nodes[node].inputs
    }

    fn outputs(&self, node: usize) -> usize {
        self.nodes[node].outputs
    }

    fn logic(&self, node: usize) -> &[usize] {
        &self.nodes[node].logic
    }

    fn essential(&self, node: usize) -> bool {
        self.nodes[node].essential
    }
}

impl From<&NodeDescription> for NodeSignature {
    fn from(node: &NodeDescription) -> Self {
        NodeSignature::new(node.inputs, node.outputs, node.logic.clone(), node.essential)
    }
}
