//! The parameter graph of a network.
//!
//! The parameter space factors into a logic part and an order part:
//!
//! ```text
//! index = order_index · fixed_order_size + logic_index
//!
//! logic_index  ∈ [0, Π |catalog[d]|)   mixed radix over catalog sizes
//! order_index  ∈ [0, Π m_d!)           mixed radix over output orderings
//! ```
//!
//! Node `d`'s logic digit is a position in its catalog and its order digit
//! is an [`OrderParameter`] index, so decoding an index is two mixed-radix
//! decodes followed by catalog lookups, and encoding a parameter is the
//! reverse.
//!
//! Two parameters are adjacent when they differ in exactly one bit of one
//! node's truth table and both codes are admissible.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use regnet_parameter::{MemoryCatalog, NodeSignature, ParameterGraph};
//!
//! let sig = NodeSignature::new(2, 1, vec![2], false);
//! let provider = MemoryCatalog::new().with(sig.clone(), ["0", "1", "2", "3"]);
//! let graph = ParameterGraph::new(Arc::new(vec![sig]), &provider).unwrap();
//!
//! assert_eq!(graph.size(), 4);
//! let p = graph.parameter(2).unwrap();
//! assert_eq!(p.logic()[0].hex(), "2");
//! assert_eq!(graph.index(&p).unwrap(), 2);
//! assert_eq!(graph.adjacencies(2).unwrap(), vec![0, 3]);
//! ```

use core::fmt;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::catalog::{CatalogProvider, LogicCatalog};
use crate::error::{Error, Result};
use crate::logic::LogicParameter;
use crate::network::{Network, NodeSignature};
use crate::order::OrderParameter;
use crate::parameter::Parameter;
use crate::radix::{factorial, MixedRadix};

/// Immutable index over every parameter of a network.
pub struct ParameterGraph<N: ?Sized> {
    network: Arc<N>,
    signatures: Vec<NodeSignature>,
    catalogs: Vec<LogicCatalog>,
    logic_radix: MixedRadix,
    order_radix: MixedRadix,
    size: u64,
}

impl<N: Network + ?Sized> ParameterGraph<N> {
    /// Build the graph, fetching one catalog per node from `provider`.
    ///
    /// # Errors
    ///
    /// - [`Error::ResourceNotFound`] when the provider has no catalog for a
    ///   node's signature.
    /// - [`Error::MalformedCatalog`] when a catalog is empty, has codes of the
    ///   wrong shape, or repeats a code.
    /// - [`Error::SizeOverflow`] when the space does not fit in `u64`.
    #[tracing::instrument(level = "debug", skip_all, fields(nodes = network.size()))]
    pub fn new<P>(network: Arc<N>, provider: &P) -> Result<Self>
    where
        P: CatalogProvider + ?Sized,
    {
        let nodes = network.size();
        let mut signatures = Vec::with_capacity(nodes);
        let mut catalogs = Vec::with_capacity(nodes);
        let mut logic_place_values = Vec::with_capacity(nodes);
        let mut order_place_values = Vec::with_capacity(nodes);

        for node in 0..nodes {
            let signature = network.signature(node);
            let codes = provider
                .fetch_catalog(&signature)
                .map_err(|source| Error::ResourceNotFound {
                    node,
                    signature: signature.clone(),
                    source,
                })?;
            let catalog = LogicCatalog::new(node, signature.inputs, codes)?;
            tracing::debug!(
                node,
                signature = %signature,
                codes = catalog.len(),
                "acquired logic catalog"
            );
            logic_place_values.push(catalog.len() as u64);
            order_place_values.push(factorial(signature.outputs)?);
            catalogs.push(catalog);
            signatures.push(signature);
        }

        let logic_radix = MixedRadix::new(logic_place_values)?;
        let order_radix = MixedRadix::new(order_place_values)?;
        let size = logic_radix
            .capacity()
            .checked_mul(order_radix.capacity())
            .ok_or(Error::SizeOverflow)?;
        tracing::info!(
            size,
            fixed_order_size = logic_radix.capacity(),
            reorderings = order_radix.capacity(),
            "built parameter graph"
        );

        Ok(Self {
            network,
            signatures,
            catalogs,
            logic_radix,
            order_radix,
            size,
        })
    }

    /// The parameter at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] when `index >= size()`.
    pub fn parameter(&self, index: u64) -> Result<Parameter<N>> {
        if index >= self.size {
            return Err(self.out_of_range(index));
        }
        let fixed = self.fixed_order_size();
        let logic_digits = self.logic_radix.decode(index % fixed)?;
        let order_digits = self.order_radix.decode(index / fixed)?;

        let mut logic = Vec::with_capacity(self.catalogs.len());
        let mut order = Vec::with_capacity(self.catalogs.len());
        for ((signature, catalog), (&l, &o)) in self
            .signatures
            .iter()
            .zip(&self.catalogs)
            .zip(logic_digits.iter().zip(&order_digits))
        {
            let code = catalog.get(l).ok_or_else(|| self.out_of_range(index))?;
            logic.push(LogicParameter::from_validated(
                signature.inputs,
                signature.outputs,
                code.to_owned(),
            ));
            order.push(OrderParameter::new(signature.outputs, o)?);
        }
        Parameter::new(logic, order, Arc::clone(&self.network))
    }

    /// Sorted indices of the parameters adjacent to `index`.
    ///
    /// Every bit of every node's code is flipped in turn; flips that leave
    /// the node's catalog are skipped. The result never contains `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] when `index >= size()`.
    pub fn adjacencies(&self, index: u64) -> Result<Vec<u64>> {
        let p = self.parameter(index)?;
        let mut neighbors = BTreeSet::new();
        for (node, (lp, catalog)) in p.logic().iter().zip(&self.catalogs).enumerate() {
            for bit in 0..lp.bit_len() {
                let Some(flipped) = lp.flip_bit(bit) else {
                    continue;
                };
                if !catalog.contains(flipped.hex()) {
                    continue;
                }
                if let Some(candidate) = p.with_logic(node, flipped) {
                    neighbors.insert(self.index(&candidate)?);
                }
            }
        }
        tracing::trace!(index, neighbors = neighbors.len(), "computed adjacencies");
        Ok(neighbors.into_iter().collect())
    }

    /// Every `(index, parameter)` pair in index order.
    pub fn parameters(&self) -> Parameters<'_, N> {
        Parameters {
            graph: self,
            next: 0,
        }
    }
}

impl<N: ?Sized> ParameterGraph<N> {
    /// Number of parameters, `fixed_order_size() × reorderings()`.
    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Size of the logic subspace, `Π |catalog[d]|`.
    #[inline]
    pub fn fixed_order_size(&self) -> u64 {
        self.logic_radix.capacity()
    }

    /// Size of the order subspace, `Π m_d!`.
    #[inline]
    pub fn reorderings(&self) -> u64 {
        self.order_radix.capacity()
    }

    /// The network.
    #[inline]
    pub fn network(&self) -> &Arc<N> {
        &self.network
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.catalogs.len()
    }

    /// Catalog of `node`.
    #[inline]
    pub fn catalog(&self, node: usize) -> Option<&LogicCatalog> {
        self.catalogs.get(node)
    }

    /// Catalog sizes, node 0 first.
    #[inline]
    pub fn logic_place_values(&self) -> &[u64] {
        self.logic_radix.radices()
    }

    /// Output ordering counts `m_d!`, node 0 first.
    #[inline]
    pub fn order_place_values(&self) -> &[u64] {
        self.order_radix.radices()
    }

    /// Linear index of `parameter`.
    ///
    /// Exact inverse of [`parameter`](ParameterGraph::parameter).
    ///
    /// # Errors
    ///
    /// - [`Error::NodeCountMismatch`] when the parameter has a different
    ///   number of nodes.
    /// - [`Error::UnknownLogicCode`] when a node's code is not in its
    ///   catalog.
    /// - [`Error::OrderIndexOutOfRange`] when a node's order index is not
    ///   below `m_d!`.
    pub fn index<M: ?Sized>(&self, parameter: &Parameter<M>) -> Result<u64> {
        let nodes = self.catalogs.len();
        let (logic, order) = (parameter.logic(), parameter.order());
        if logic.len() != nodes || order.len() != nodes {
            return Err(Error::NodeCountMismatch {
                nodes,
                logic: logic.len(),
                order: order.len(),
            });
        }

        let logic_digits = logic
            .iter()
            .zip(&self.catalogs)
            .enumerate()
            .map(|(node, (lp, catalog))| {
                catalog
                    .position(lp.hex())
                    .ok_or_else(|| Error::UnknownLogicCode {
                        node,
                        code: lp.hex().to_owned(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let order_digits = order
            .iter()
            .zip(self.order_radix.radices())
            .zip(&self.signatures)
            .map(|((op, &bound), signature)| {
                if op.index() < bound {
                    Ok(op.index())
                } else {
                    Err(Error::OrderIndexOutOfRange {
                        index: op.index(),
                        outputs: signature.outputs,
                        bound,
                    })
                }
            })
            .collect::<Result<Vec<_>>>()?;

        let logic_index = self.logic_radix.encode(&logic_digits)?;
        let order_index = self.order_radix.encode(&order_digits)?;
        Ok(order_index * self.fixed_order_size() + logic_index)
    }

    fn out_of_range(&self, index: u64) -> Error {
        Error::IndexOutOfRange {
            index,
            size: self.size,
        }
    }
}

impl<N: ?Sized> Clone for ParameterGraph<N> {
    fn clone(&self) -> Self {
        Self {
            network: Arc::clone(&self.network),
            signatures: self.signatures.clone(),
            catalogs: self.catalogs.clone(),
            logic_radix: self.logic_radix.clone(),
            order_radix: self.order_radix.clone(),
            size: self.size,
        }
    }
}

impl<N: ?Sized> fmt::Debug for ParameterGraph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterGraph")
            .field("size", &self.size)
            .field("signatures", &self.signatures)
            .field("logic_place_values", &self.logic_radix.radices())
            .field("order_place_values", &self.order_radix.radices())
            .finish_non_exhaustive()
    }
}

impl<N: ?Sized> fmt::Display for ParameterGraph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(ParameterGraph: {} parameters, {} nodes)",
            self.size,
            self.catalogs.len()
        )
    }
}

/// Iterator over the parameters of a graph, see [`ParameterGraph::parameters`].
pub struct Parameters<'a, N: ?Sized> {
    graph: &'a ParameterGraph<N>,
    next: u64,
}

impl<N: Network + ?Sized> Iterator for Parameters<'_, N> {
    type Item = (u64, Parameter<N>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.graph.size {
            return None;
        }
        let index = self.next;
        let p = self.graph.parameter(index).ok()?;
        self.next += 1;
        Some((index, p))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.graph.size - self.next;
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
