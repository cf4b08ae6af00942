//! Mixed-radix numbering.
//!
//! A radix table `r[0..D)` numbers the digit sequences `d[0..D)` with
//! `d[i] < r[i]` by
//!
//! ```text
//! value = d[0] + r[0]·(d[1] + r[1]·(d[2] + … + r[D-2]·d[D-1]))
//! ```
//!
//! so digit 0 is the least significant. Decoding peels digits off with
//! repeated `mod`/`div`; encoding is the same expression evaluated by
//! Horner's rule from the most significant digit. Both are O(D).
//!
//! # Examples
//!
//! ```
//! use regnet_parameter::radix::MixedRadix;
//!
//! let radix = MixedRadix::new(vec![4, 2, 3]).unwrap();
//! assert_eq!(radix.capacity(), 24);
//! assert_eq!(radix.decode(13).unwrap(), vec![1, 1, 1]);
//! assert_eq!(radix.encode(&[1, 1, 1]).unwrap(), 13);
//! ```

use crate::error::{Error, Result};

/// `m!` for `m < 21`; `21!` no longer fits in `u64`.
const FACTORIALS: [u64; 21] = {
    let mut table = [1u64; 21];
    let mut m = 1;
    while m < 21 {
        table[m] = table[m - 1] * m as u64;
        m += 1;
    }
    table
};

/// Exact factorial.
///
/// # Errors
///
/// Returns [`Error::SizeOverflow`] when `m!` does not fit in `u64`.
///
/// # Examples
///
/// ```
/// use regnet_parameter::radix::factorial;
///
/// assert_eq!(factorial(0).unwrap(), 1);
/// assert_eq!(factorial(5).unwrap(), 120);
/// assert!(factorial(21).is_err());
/// ```
pub fn factorial(m: usize) -> Result<u64> {
    FACTORIALS.get(m).copied().ok_or(Error::SizeOverflow)
}

/// A radix table together with its total capacity `Π r[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MixedRadix {
    radices: Vec<u64>,
    capacity: u64,
}

impl MixedRadix {
    /// Build a radix table.
    ///
    /// An empty table is valid; it has capacity 1 and numbers the single
    /// empty digit sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRadix`] for a zero radix and
    /// [`Error::SizeOverflow`] when the capacity does not fit in `u64`.
    pub fn new(radices: Vec<u64>) -> Result<Self> {
        let mut capacity = 1u64;
        for (position, &radix) in radices.iter().enumerate() {
            if radix == 0 {
                return Err(Error::InvalidRadix { position });
            }
            capacity = capacity.checked_mul(radix).ok_or(Error::SizeOverflow)?;
        }
        Ok(Self { radices, capacity })
    }

    /// Number of digit positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.radices.len()
    }

    /// True when the table has no positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.radices.is_empty()
    }

    /// The radices, least significant first.
    #[inline]
    pub fn radices(&self) -> &[u64] {
        &self.radices
    }

    /// Number of representable values, `Π r[i]`.
    #[inline]
    pub const fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Split `value` into digits, least significant first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] when `value >= capacity()`.
    pub fn decode(&self, value: u64) -> Result<Vec<u64>> {
        if value >= self.capacity {
            return Err(Error::IndexOutOfRange {
                index: value,
                size: self.capacity,
            });
        }
        let mut rest = value;
        let digits = self
            .radices
            .iter()
            .map(|&radix| {
                let digit = rest % radix;
                rest /= radix;
                digit
            })
            .collect();
        Ok(digits)
    }

    /// Combine digits, least significant first, into a value.
    ///
    /// Exact left inverse of [`decode`](Self::decode).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DigitCountMismatch`] when `digits` and the table
    /// differ in length and [`Error::DigitOutOfRange`] when a digit is not
    /// below its radix.
    pub fn encode(&self, digits: &[u64]) -> Result<u64> {
        if digits.len() != self.radices.len() {
            return Err(Error::DigitCountMismatch {
                expected: self.radices.len(),
                found: digits.len(),
            });
        }
        // Digits are bounded by their radices and the capacity fits in u64,
        // so the accumulator never exceeds capacity - 1.
        let mut value = 0u64;
        for (position, (&digit, &radix)) in digits.iter().zip(&self.radices).enumerate().rev() {
            if digit >= radix {
                return Err(Error::DigitOutOfRange {
                    position,
                    digit,
                    radix,
                });
            }
            value = value * radix + digit;
        }
        Ok(value)
    }
}
