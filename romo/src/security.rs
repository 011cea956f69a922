//! Security parameter of an oracle and the output length derived from it.
use std::{fmt, num::NonZeroUsize};

use crate::{Error, Result};

/// Security parameter used by [`SecurityParameter::default`], in bytes.
pub const DEFAULT_SECURITY_PARAMETER: usize = 32;

/// The nominal security level `k` of an oracle, in bytes.
///
/// An oracle with security parameter `k` returns outputs of
/// [`output_length`](Self::output_length)` = 2k` bytes. By the birthday bound,
/// a collision among `2k`-byte outputs is found with probability about
/// `2^-(8k)`, which matches a brute-force search against `k` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SecurityParameter(NonZeroUsize);

impl SecurityParameter {
    /// Largest accepted parameter. The output length in bits must fit into a
    /// `usize`.
    pub const MAX: usize = usize::MAX / 16;

    /// Validate `bytes` as a security parameter.
    ///
    /// Returns [`Error::InvalidSecurityParameter`] if `bytes` is zero or larger
    /// than [`SecurityParameter::MAX`].
    pub fn new(bytes: usize) -> Result<Self> {
        NonZeroUsize::new(bytes)
            .filter(|k| k.get() <= Self::MAX)
            .map(Self)
            .ok_or(Error::InvalidSecurityParameter { value: bytes })
    }

    /// Nominal security level in bytes.
    #[inline]
    pub fn bytes(&self) -> usize {
        self.0.get()
    }

    /// Nominal security level in bits.
    #[inline]
    pub fn bits(&self) -> usize {
        self.bytes() * 8
    }

    /// Number of bytes returned by each oracle query, `2 * k`.
    #[inline]
    pub fn output_length(&self) -> usize {
        self.bytes() * 2
    }

    /// Number of bits returned by each oracle query, `16 * k`.
    #[inline]
    pub fn output_bits(&self) -> usize {
        self.output_length() * 8
    }

    /// Bits of collision resistance offered by outputs of
    /// [`output_length`](Self::output_length) bytes. This is half the output
    /// bits and equal to [`bits`](Self::bits).
    #[inline]
    pub fn collision_resistance_bits(&self) -> usize {
        self.output_bits() / 2
    }
}

impl Default for SecurityParameter {
    fn default() -> Self {
        match NonZeroUsize::new(DEFAULT_SECURITY_PARAMETER) {
            Some(k) => Self(k),
            None => unreachable!("default security parameter is positive"),
        }
    }
}

impl TryFrom<usize> for SecurityParameter {
    type Error = Error;

    fn try_from(bytes: usize) -> Result<Self> {
        Self::new(bytes)
    }
}

impl From<SecurityParameter> for usize {
    fn from(value: SecurityParameter) -> Self {
        value.bytes()
    }
}

impl fmt::Display for SecurityParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bytes", self.bytes())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_default() {
        let k = SecurityParameter::default();
        assert_eq!(32, k.bytes());
        assert_eq!(256, k.bits());
        assert_eq!(64, k.output_length());
        assert_eq!(512, k.output_bits());
        assert_eq!(256, k.collision_resistance_bits());
    }

    #[test]
    fn test_reject_zero() {
        assert!(matches!(
            SecurityParameter::new(0),
            Err(Error::InvalidSecurityParameter { value: 0 })
        ));
    }

    #[test]
    fn test_reject_overflowing_output_length() {
        assert!(SecurityParameter::new(SecurityParameter::MAX).is_ok());
        assert!(matches!(
            SecurityParameter::try_from(usize::MAX),
            Err(Error::InvalidSecurityParameter { value: usize::MAX })
        ));
        assert!(SecurityParameter::new(SecurityParameter::MAX + 1).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!("16 bytes", SecurityParameter::new(16).unwrap().to_string());
    }

    proptest! {
        #[test]
        fn output_length_is_twice_the_parameter(k in 1..=4096_usize) {
            let param = SecurityParameter::new(k).unwrap();
            prop_assert_eq!(2 * k, param.output_length());
            prop_assert_eq!(16 * k, param.output_bits());
            prop_assert_eq!(8 * k, param.collision_resistance_bits());
            prop_assert_eq!(k, usize::from(param));
        }
    }
}
