//! A point of the parameter space: one logic and one order parameter per node.

use core::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::logic::LogicParameter;
use crate::network::Network;
use crate::order::OrderParameter;

/// Per-node logic and order choices for a network.
///
/// Entry `d` of [`logic`](Self::logic) and [`order`](Self::order) belongs to
/// node `d`. Two parameters are equal when their logic and order sequences
/// are equal; the network handle is not compared.
pub struct Parameter<N: ?Sized> {
    logic: Vec<LogicParameter>,
    order: Vec<OrderParameter>,
    network: Arc<N>,
}

impl<N: Network + ?Sized> Parameter<N> {
    /// Assemble a parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeCountMismatch`] unless both sequences have one
    /// entry per network node.
    pub fn new(
        logic: Vec<LogicParameter>,
        order: Vec<OrderParameter>,
        network: Arc<N>,
    ) -> Result<Self> {
        let nodes = network.size();
        if logic.len() != nodes || order.len() != nodes {
            return Err(Error::NodeCountMismatch {
                nodes,
                logic: logic.len(),
                order: order.len(),
            });
        }
        Ok(Self {
            logic,
            order,
            network,
        })
    }
}

impl<N: ?Sized> Parameter<N> {
    /// Logic parameters, one per node.
    #[inline]
    pub fn logic(&self) -> &[LogicParameter] {
        &self.logic
    }

    /// Order parameters, one per node.
    #[inline]
    pub fn order(&self) -> &[OrderParameter] {
        &self.order
    }

    /// The network this parameter belongs to.
    #[inline]
    pub fn network(&self) -> &Arc<N> {
        &self.network
    }

    /// A copy with the logic of `node` replaced.
    ///
    /// Returns `None` when `node` is out of range.
    pub fn with_logic(&self, node: usize, logic: LogicParameter) -> Option<Self> {
        let mut replaced = self.logic.clone();
        *replaced.get_mut(node)? = logic;
        Some(Self {
            logic: replaced,
            order: self.order.clone(),
            network: Arc::clone(&self.network),
        })
    }
}

impl<N: ?Sized> Clone for Parameter<N> {
    fn clone(&self) -> Self {
        Self {
            logic: self.logic.clone(),
            order: self.order.clone(),
            network: Arc::clone(&self.network),
        }
    }
}

impl<N: ?Sized> PartialEq for Parameter<N> {
    fn eq(&self, other: &Self) -> bool {
        self.logic == other.logic && self.order == other.order
    }
}

impl<N: ?Sized> Eq for Parameter<N> {}

impl<N: ?Sized> fmt::Debug for Parameter<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameter")
            .field("logic", &self.logic)
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}

/// `[["2", "0F"], [[0], [1, 0]]]`: logic codes, then output permutations.
impl<N: ?Sized> fmt::Display for Parameter<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[[")?;
        for (i, lp) in self.logic.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "\"{lp}\"")?;
        }
        f.write_str("], [")?;
        for (i, op) in self.order.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{op}")?;
        }
        f.write_str("]]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NodeSignature;

    fn network() -> Arc<Vec<NodeSignature>> {
        Arc::new(vec![
            NodeSignature::new(2, 1, vec![2], false),
            NodeSignature::new(3, 2, vec![1, 2], false),
        ])
    }

    fn sample() -> Parameter<Vec<NodeSignature>> {
        Parameter::new(
            vec![
                LogicParameter::new(2, 1, "2").unwrap(),
                LogicParameter::new(3, 2, "0F").unwrap(),
            ],
            vec![
                OrderParameter::new(1, 0).unwrap(),
                OrderParameter::new(2, 1).unwrap(),
            ],
            network(),
        )
        .unwrap()
    }

    #[test]
    fn length_must_match_network() {
        let err = Parameter::new(
            vec![LogicParameter::new(2, 1, "2").unwrap()],
            vec![OrderParameter::new(1, 0).unwrap()],
            network(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::NodeCountMismatch {
                nodes: 2,
                logic: 1,
                order: 1
            }
        ));
    }

    #[test]
    fn equality_ignores_network_identity() {
        let a = sample();
        let b = Parameter::new(a.logic().to_vec(), a.order().to_vec(), network()).unwrap();
        assert!(!Arc::ptr_eq(a.network(), b.network()));
        assert_eq!(a, b);
    }

    #[test]
    fn with_logic_replaces_one_node() {
        let p = sample();
        let q = p
            .with_logic(1, LogicParameter::new(3, 2, "1F").unwrap())
            .unwrap();
        assert_eq!(q.logic()[0], p.logic()[0]);
        assert_eq!(q.logic()[1].hex(), "1F");
        assert_eq!(q.order(), p.order());
        assert_eq!(p.logic()[1].hex(), "0F");
        assert!(p.with_logic(2, p.logic()[0].clone()).is_none());
    }

    #[test]
    fn display() {
        assert_eq!(sample().to_string(), "[[\"2\", \"0F\"], [[0], [1, 0]]]");
    }
}
