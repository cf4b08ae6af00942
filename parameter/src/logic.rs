//! Logic parameters: admissible Boolean-function codes for one node.
//!
//! A code is the truth table of a node's logic written in hexadecimal. The
//! table has `2^n` bits for `n` inputs, packed four to a hex digit with the
//! most significant bit of each nibble first, so the code is `⌈2^n/4⌉`
//! uppercase digits long.
//!
//! ```text
//! code "2"  → nibble 0010 → bits [0, 0, 1, 0]
//! code "A3" → 1010 0011   → bits [1, 0, 1, 0, 0, 0, 1, 1]
//! ```

use core::fmt;

use crate::error::{Error, Result};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Number of hex digits in a code for `inputs` inputs.
///
/// # Errors
///
/// Returns [`Error::SizeOverflow`] when `2^inputs` does not fit in `usize`.
pub fn code_width(inputs: usize) -> Result<usize> {
    let bits = u32::try_from(inputs)
        .ok()
        .and_then(|n| 1usize.checked_shl(n))
        .ok_or(Error::SizeOverflow)?;
    Ok(bits.div_ceil(4))
}

fn nibble(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

/// Validate `code` as a truth table for `inputs` inputs.
pub(crate) fn validate_code(code: &str, inputs: usize) -> Result<()> {
    let invalid = |reason| Error::InvalidLogicCode {
        code: code.to_owned(),
        inputs,
        reason,
    };
    if code.is_empty() {
        return Err(invalid("empty code"));
    }
    if code.bytes().any(|b| matches!(b, b'a'..=b'f')) {
        return Err(invalid("lowercase hexadecimal digits, codes must be uppercase"));
    }
    if code.bytes().any(|b| nibble(b).is_none()) {
        return Err(invalid("expected uppercase hexadecimal digits"));
    }
    if code.len() != code_width(inputs)? {
        return Err(invalid("width does not match input arity"));
    }
    Ok(())
}

/// A Boolean-function code attached to a node with `n` inputs and `m`
/// outputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LogicParameter {
    inputs: usize,
    outputs: usize,
    hex: String,
}

impl LogicParameter {
    /// Create a logic parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLogicCode`] when `hex` is empty, contains
    /// anything but uppercase hex digits, or is not `⌈2^inputs/4⌉` digits
    /// long.
    ///
    /// # Examples
    ///
    /// ```
    /// use regnet_parameter::LogicParameter;
    ///
    /// let lp = LogicParameter::new(2, 1, "2").unwrap();
    /// assert_eq!(lp.bits(), vec![false, false, true, false]);
    /// assert!(LogicParameter::new(2, 1, "2F").is_err());
    /// ```
    pub fn new(inputs: usize, outputs: usize, hex: impl Into<String>) -> Result<Self> {
        let hex = hex.into();
        validate_code(&hex, inputs)?;
        Ok(Self {
            inputs,
            outputs,
            hex,
        })
    }

    /// Construct from a code already validated against `inputs`.
    pub(crate) fn from_validated(inputs: usize, outputs: usize, hex: String) -> Self {
        Self {
            inputs,
            outputs,
            hex,
        }
    }

    /// Input arity `n`.
    #[inline]
    pub fn inputs(&self) -> usize {
        self.inputs
    }

    /// Output arity `m`.
    #[inline]
    pub fn outputs(&self) -> usize {
        self.outputs
    }

    /// The hexadecimal code.
    #[inline]
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Number of bits in the code, `4 × hex().len()`.
    ///
    /// This counts the padding bits of the last nibble when `2^n < 4`.
    #[inline]
    pub fn bit_len(&self) -> usize {
        self.hex.len() * 4
    }

    /// Bit `i` of the code, most significant bit of the first digit first.
    ///
    /// Returns `None` when `i >= bit_len()`.
    pub fn bit(&self, i: usize) -> Option<bool> {
        let digit = *self.hex.as_bytes().get(i / 4)?;
        let value = nibble(digit)?;
        Some(value & (0b1000 >> (i % 4)) != 0)
    }

    /// All bits of the code in order.
    pub fn bits(&self) -> Vec<bool> {
        self.hex
            .bytes()
            .filter_map(nibble)
            .flat_map(|value| (0..4).map(move |k| value & (0b1000 >> k) != 0))
            .collect()
    }

    /// The code with bit `i` toggled, or `None` when `i >= bit_len()`.
    ///
    /// ```
    /// use regnet_parameter::LogicParameter;
    ///
    /// let lp = LogicParameter::new(2, 1, "2").unwrap();
    /// assert_eq!(lp.flip_bit(0).unwrap().hex(), "A");
    /// assert_eq!(lp.flip_bit(3).unwrap().hex(), "3");
    /// ```
    pub fn flip_bit(&self, i: usize) -> Option<Self> {
        let mut bytes = self.hex.clone().into_bytes();
        let digit = bytes.get_mut(i / 4)?;
        let flipped = nibble(*digit)? ^ (0b1000 >> (i % 4));
        *digit = HEX_DIGITS[usize::from(flipped)];
        let hex = String::from_utf8(bytes).ok()?;
        Some(Self {
            inputs: self.inputs,
            outputs: self.outputs,
            hex,
        })
    }
}

impl fmt::Display for LogicParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths() {
        assert_eq!(code_width(0).unwrap(), 1);
        assert_eq!(code_width(1).unwrap(), 1);
        assert_eq!(code_width(2).unwrap(), 1);
        assert_eq!(code_width(3).unwrap(), 2);
        assert_eq!(code_width(4).unwrap(), 4);
        assert_eq!(code_width(6).unwrap(), 16);
        assert!(code_width(usize::MAX).is_err());
    }

    #[test]
    fn rejects_malformed_codes() {
        for (code, inputs) in [("", 2), ("2a", 3), ("G", 2), ("00", 2), ("0", 3)] {
            assert!(
                matches!(
                    LogicParameter::new(inputs, 1, code),
                    Err(Error::InvalidLogicCode { .. })
                ),
                "{code:?} accepted for {inputs} inputs"
            );
        }
    }

    #[test]
    fn bits_msb_first() {
        let lp = LogicParameter::new(3, 1, "A3").unwrap();
        assert_eq!(
            lp.bits(),
            vec![true, false, true, false, false, false, true, true]
        );
        assert_eq!(lp.bit_len(), 8);
        assert_eq!(lp.bit(0), Some(true));
        assert_eq!(lp.bit(7), Some(true));
        assert_eq!(lp.bit(8), None);
    }

    #[test]
    fn flip_every_bit_of_two() {
        let lp = LogicParameter::new(2, 1, "2").unwrap();
        let flipped: Vec<_> = (0..lp.bit_len())
            .map(|i| lp.flip_bit(i).unwrap().hex().to_owned())
            .collect();
        assert_eq!(flipped, ["A", "6", "0", "3"]);
        // The source is untouched.
        assert_eq!(lp.hex(), "2");
    }

    #[test]
    fn flip_is_an_involution() {
        let lp = LogicParameter::new(4, 2, "F0C1").unwrap();
        for i in 0..lp.bit_len() {
            let once = lp.flip_bit(i).unwrap();
            assert_ne!(once, lp);
            assert_eq!(once.flip_bit(i).unwrap(), lp);
        }
        assert!(lp.flip_bit(16).is_none());
    }

    #[test]
    fn flip_keeps_uppercase() {
        let lp = LogicParameter::new(3, 1, "05").unwrap();
        assert_eq!(lp.flip_bit(4).unwrap().hex(), "0D");
        assert_eq!(lp.flip_bit(0).unwrap().hex(), "85");
    }

    #[test]
    fn display_is_the_code() {
        let lp = LogicParameter::new(3, 2, "7E").unwrap();
        assert_eq!(lp.to_string(), "7E");
        assert_eq!(lp.inputs(), 3);
        assert_eq!(lp.outputs(), 2);
    }
}
