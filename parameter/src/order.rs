//! Order parameters: one of the `m!` orderings of a node's outputs.
//!
//! The ordering is stored as an index into the factorial number system
//! (Lehmer code). Index `0` is the identity; the most significant
//! factorial digit picks the first element of the permutation.

use core::fmt;

use crate::error::{Error, Result};
use crate::radix::factorial;

/// An output-permutation index for a node with `m` outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OrderParameter {
    outputs: usize,
    index: u64,
}

impl OrderParameter {
    /// Create an order parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OrderIndexOutOfRange`] when `index >= outputs!`, and
    /// [`Error::SizeOverflow`] when `outputs!` does not fit in `u64`.
    pub fn new(outputs: usize, index: u64) -> Result<Self> {
        let bound = factorial(outputs)?;
        if index >= bound {
            return Err(Error::OrderIndexOutOfRange {
                index,
                outputs,
                bound,
            });
        }
        Ok(Self { outputs, index })
    }

    /// Index of the permutation that produces `permutation`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPermutation`] unless `permutation` holds each
    /// of `0..len` exactly once, and [`Error::SizeOverflow`] when `len!` does
    /// not fit in `u64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use regnet_parameter::OrderParameter;
    ///
    /// let op = OrderParameter::from_permutation(&[2, 0, 1]).unwrap();
    /// assert_eq!(op.index(), 4);
    /// assert_eq!(op.permutation(), vec![2, 0, 1]);
    /// ```
    pub fn from_permutation(permutation: &[usize]) -> Result<Self> {
        let m = permutation.len();
        factorial(m)?;
        let mut seen = vec![false; m];
        for &p in permutation {
            match seen.get_mut(p) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(Error::InvalidPermutation(permutation.to_vec())),
            }
        }
        let mut index = 0u64;
        for (i, &p) in permutation.iter().enumerate() {
            let smaller_unused = permutation[i + 1..].iter().filter(|&&q| q < p).count();
            index += smaller_unused as u64 * factorial(m - 1 - i)?;
        }
        Ok(Self { outputs: m, index })
    }

    /// Output arity `m`.
    #[inline]
    pub fn outputs(&self) -> usize {
        self.outputs
    }

    /// Factorial-base index in `[0, m!)`.
    #[inline]
    pub fn index(&self) -> u64 {
        self.index
    }

    /// The permutation of `0..m` this index denotes.
    pub fn permutation(&self) -> Vec<usize> {
        let mut available: Vec<usize> = (0..self.outputs).collect();
        let mut rest = self.index;
        let mut permutation = Vec::with_capacity(self.outputs);
        for i in 0..self.outputs {
            // outputs! fit in u64 at construction, so every smaller factorial does too.
            let place = factorial(self.outputs - 1 - i).unwrap_or(1);
            let pick = (rest / place) as usize;
            rest %= place;
            permutation.push(available.remove(pick));
        }
        permutation
    }
}

impl fmt::Display for OrderParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.permutation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert!(OrderParameter::new(0, 0).is_ok());
        assert!(OrderParameter::new(1, 0).is_ok());
        assert!(OrderParameter::new(3, 5).is_ok());
        assert!(matches!(
            OrderParameter::new(3, 6),
            Err(Error::OrderIndexOutOfRange {
                index: 6,
                outputs: 3,
                bound: 6
            })
        ));
    }

    #[test]
    fn identity_is_index_zero() {
        assert_eq!(OrderParameter::new(4, 0).unwrap().permutation(), vec![0, 1, 2, 3]);
        assert_eq!(OrderParameter::new(0, 0).unwrap().permutation(), Vec::<usize>::new());
    }

    #[test]
    fn permutations_of_three_in_lexicographic_order() {
        let expected = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];
        for (k, perm) in expected.iter().enumerate() {
            let op = OrderParameter::new(3, k as u64).unwrap();
            assert_eq!(op.permutation(), perm.to_vec(), "index {k}");
        }
    }

    #[test]
    fn lehmer_roundtrip_four_outputs() {
        for k in 0..24 {
            let op = OrderParameter::new(4, k).unwrap();
            let back = OrderParameter::from_permutation(&op.permutation()).unwrap();
            assert_eq!(back, op);
        }
    }

    #[test]
    fn rejects_non_permutations() {
        assert!(OrderParameter::from_permutation(&[0, 0]).is_err());
        assert!(OrderParameter::from_permutation(&[1, 2]).is_err());
        assert!(OrderParameter::from_permutation(&[]).is_ok());
    }

    #[test]
    fn oversized_permutation_overflows() {
        let reversed: Vec<usize> = (0..21).rev().collect();
        assert!(matches!(
            OrderParameter::from_permutation(&reversed),
            Err(Error::SizeOverflow)
        ));
        let reversed: Vec<usize> = (0..20).rev().collect();
        let op = OrderParameter::from_permutation(&reversed).unwrap();
        assert_eq!(op.index(), factorial(20).unwrap() - 1);
        assert_eq!(op.permutation(), reversed);
    }

    #[test]
    fn display_shows_permutation() {
        assert_eq!(OrderParameter::new(3, 3).unwrap().to_string(), "[1, 2, 0]");
    }
}
