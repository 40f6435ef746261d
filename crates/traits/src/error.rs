//! Error types shared by digest consumers.
//!
//! Individual crates define their own errors for I/O and internal faults.

use core::fmt;

/// Authentication tag did not match.
///
/// Returned when a recomputed tag differs from the one supplied with a
/// message. This is an expected outcome of verification, not a fault, and the
/// error carries no detail about which bytes differed.
///
/// # Examples
///
/// ```
/// use traits::VerificationError;
///
/// fn check(computed: &[u8; 32], supplied: &[u8; 32]) -> Result<(), VerificationError> {
///   if computed == supplied {
///     Ok(())
///   } else {
///     Err(VerificationError::new())
///   }
/// }
///
/// assert!(check(&[0u8; 32], &[1u8; 32]).is_err());
/// assert!(check(&[7u8; 32], &[7u8; 32]).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct VerificationError;

impl VerificationError {
  /// Create a new verification error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }

  /// Compare two tags byte-for-byte.
  #[inline]
  pub fn check(computed: &[u8], supplied: &[u8]) -> Result<(), Self> {
    if computed == supplied { Ok(()) } else { Err(Self) }
  }
}

impl Default for VerificationError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for VerificationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("authentication tag mismatch")
  }
}

impl core::error::Error for VerificationError {}
