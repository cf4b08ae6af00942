//! Logic catalogs and the providers that supply them.
//!
//! A catalog is the ordered list of admissible codes for one node signature.
//! The position of a code in its catalog is that node's logic digit, so the
//! order a provider returns is authoritative and must be stable.
//!
//! Providers are injected through [`CatalogProvider`]. The crate ships an
//! in-memory [`MemoryCatalog`]; any `Fn(&NodeSignature) -> Option<Vec<String>>`
//! is a provider too.
//!
//! ```
//! use regnet_parameter::{CatalogProvider, MemoryCatalog, NodeSignature};
//!
//! let sig = NodeSignature::new(2, 1, vec![2], false);
//! let provider = MemoryCatalog::new().with(sig.clone(), ["0", "1", "3"]);
//! assert_eq!(provider.fetch_catalog(&sig).unwrap().len(), 3);
//! ```

use std::collections::HashMap;

use crate::error::{BoxError, Error, Result};
use crate::logic::validate_code;
use crate::network::NodeSignature;

/// Source of admissible logic codes, keyed by node signature.
pub trait CatalogProvider {
    /// Ordered, duplicate-free codes for `signature`.
    ///
    /// # Errors
    ///
    /// Returns the provider's own error when no catalog exists for
    /// `signature` or it cannot be read.
    fn fetch_catalog(&self, signature: &NodeSignature) -> Result<Vec<String>, BoxError>;
}

impl<F> CatalogProvider for F
where
    F: Fn(&NodeSignature) -> Option<Vec<String>>,
{
    fn fetch_catalog(&self, signature: &NodeSignature) -> Result<Vec<String>, BoxError> {
        self(signature).ok_or_else(|| format!("no catalog for signature {signature}").into())
    }
}

/// In-memory provider backed by a map from signature to codes.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    catalogs: HashMap<NodeSignature, Vec<String>>,
}

impl MemoryCatalog {
    /// An empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `codes` for `signature`, replacing any previous entry.
    pub fn insert<I, S>(&mut self, signature: NodeSignature, codes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.catalogs
            .insert(signature, codes.into_iter().map(Into::into).collect());
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with<I, S>(mut self, signature: NodeSignature, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(signature, codes);
        self
    }
}

impl CatalogProvider for MemoryCatalog {
    fn fetch_catalog(&self, signature: &NodeSignature) -> Result<Vec<String>, BoxError> {
        self.catalogs
            .get(signature)
            .cloned()
            .ok_or_else(|| format!("no catalog registered for signature {signature}").into())
    }
}

/// A validated catalog with constant-time reverse lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicCatalog {
    codes: Vec<String>,
    positions: HashMap<String, u64>,
}

impl LogicCatalog {
    /// Validate `codes` as the catalog of `node`, whose codes describe
    /// truth tables on `inputs` inputs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedCatalog`] when the catalog is empty, holds a
    /// code that is not a valid truth table for `inputs`, or lists a code
    /// twice.
    pub fn new(node: usize, inputs: usize, codes: Vec<String>) -> Result<Self> {
        let malformed = |reason: String| Error::MalformedCatalog { node, reason };
        if codes.is_empty() {
            return Err(malformed("catalog is empty".to_owned()));
        }
        let mut positions = HashMap::with_capacity(codes.len());
        for (position, code) in codes.iter().enumerate() {
            validate_code(code, inputs).map_err(|e| malformed(e.to_string()))?;
            if let Some(first) = positions.insert(code.clone(), position as u64) {
                return Err(malformed(format!(
                    "code {code:?} listed at positions {first} and {position}"
                )));
            }
        }
        Ok(Self { codes, positions })
    }

    /// Number of codes; the node's logic place value.
    #[inline]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Always false for a validated catalog.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Code at `position`.
    #[inline]
    pub fn get(&self, position: u64) -> Option<&str> {
        usize::try_from(position)
            .ok()
            .and_then(|p| self.codes.get(p))
            .map(String::as_str)
    }

    /// Position of `code`, if it is a member.
    #[inline]
    pub fn position(&self, code: &str) -> Option<u64> {
        self.positions.get(code).copied()
    }

    /// Membership test.
    #[inline]
    pub fn contains(&self, code: &str) -> bool {
        self.positions.contains_key(code)
    }

    /// The codes in catalog order.
    #[inline]
    pub fn codes(&self) -> &[String] {
        &self.codes
    }
}
