//! The read-only view of a regulatory network that parameter graphs consume.
//!
//! A parameter graph needs four facts per node: input arity, output arity,
//! the sizes of the groups partitioning the inputs, and whether the node is
//! essential. Together they form the node's [`NodeSignature`], the key under
//! which its logic catalog is looked up.

use core::fmt;

/// Read-only node queries on a regulatory network.
///
/// Node indices run over `0..size()`. Implementations may panic on an index
/// outside that range, like slice indexing.
pub trait Network {
    /// Number of nodes.
    fn size(&self) -> usize;

    /// Number of inputs of `node`.
    fn inputs(&self, node: usize) -> usize;

    /// Number of outputs of `node`.
    fn outputs(&self, node: usize) -> usize;

    /// Sizes of the logic groups partitioning the inputs of `node`.
    fn logic(&self, node: usize) -> &[usize];

    /// Whether `node` is essential.
    fn essential(&self, node: usize) -> bool;

    /// Catalog key of `node`.
    fn signature(&self, node: usize) -> NodeSignature {
        NodeSignature {
            inputs: self.inputs(node),
            outputs: self.outputs(node),
            logic: self.logic(node).to_vec(),
            essential: self.essential(node),
        }
    }
}

impl<N: Network + ?Sized> Network for &N {
    fn size(&self) -> usize {
        (**self).size()
    }
    fn inputs(&self, node: usize) -> usize {
        (**self).inputs(node)
    }
    fn outputs(&self, node: usize) -> usize {
        (**self).outputs(node)
    }
    fn logic(&self, node: usize) -> &[usize] {
        (**self).logic(node)
    }
    fn essential(&self, node: usize) -> bool {
        (**self).essential(node)
    }
}

/// The catalog key of a node: `(inputs, outputs, logic shape, essential)`.
///
/// Displays as the resource stem `n_m_g1_g2…`, suffixed with `_E` for
/// essential nodes.
///
/// ```
/// use regnet_parameter::NodeSignature;
///
/// let sig = NodeSignature::new(3, 2, vec![2, 1], true);
/// assert_eq!(sig.to_string(), "3_2_2_1_E");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeSignature {
    /// Input arity `n`.
    pub inputs: usize,
    /// Output arity `m`.
    pub outputs: usize,
    /// Sizes of the logic groups.
    pub logic: Vec<usize>,
    /// Essential flag.
    pub essential: bool,
}

impl NodeSignature {
    /// Create a signature.
    pub fn new(inputs: usize, outputs: usize, logic: Vec<usize>, essential: bool) -> Self {
        Self {
            inputs,
            outputs,
            logic,
            essential,
        }
    }
}

impl fmt::Display for NodeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.inputs, self.outputs)?;
        for group in &self.logic {
            write!(f, "_{group}")?;
        }
        if self.essential {
            f.write_str("_E")?;
        }
        Ok(())
    }
}

/// A list of signatures is itself a network, one node per entry.
impl Network for [NodeSignature] {
    fn size(&self) -> usize {
        self.len()
    }
    fn inputs(&self, node: usize) -> usize {
        self[node].inputs
    }
    fn outputs(&self, node: usize) -> usize {
        self[node].outputs
    }
    fn logic(&self, node: usize) -> &[usize] {
        &self[node].logic
    }
    fn essential(&self, node: usize) -> bool {
        self[node].essential
    }
    fn signature(&self, node: usize) -> NodeSignature {
        self[node].clone()
    }
}

impl Network for Vec<NodeSignature> {
    fn size(&self) -> usize {
        self.as_slice().size()
    }
    fn inputs(&self, node: usize) -> usize {
        self.as_slice().inputs(node)
    }
    fn outputs(&self, node: usize) -> usize {
        self.as_slice().outputs(node)
    }
    fn logic(&self, node: usize) -> &[usize] {
        self.as_slice().logic(node)
    }
    fn essential(&self, node: usize) -> bool {
        self.as_slice().essential(node)
    }
    fn signature(&self, node: usize) -> NodeSignature {
        self.as_slice().signature(node)
    }
}
