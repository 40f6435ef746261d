//! Errors raised while driving a digest over a byte source.

use core::fmt;

pub use crate::crypto::sha256::padding::PaddingInvariantViolation;

/// Failure while hashing a byte source.
///
/// Nothing here is retried: a partially consumed source cannot be replayed
/// without corrupting the length field.
#[derive(Debug)]
#[non_exhaustive]
pub enum DigestError {
  /// The byte source failed to deliver, including a premature close.
  #[cfg(feature = "std")]
  Read(std::io::Error),
  /// Padding arithmetic produced an impossible tail. This is a defect.
  Padding(PaddingInvariantViolation),
}

impl DigestError {
  /// `true` for internal defects that no caller can recover from.
  #[inline]
  #[must_use]
  pub fn is_defect(&self) -> bool {
    matches!(self, Self::Padding(_))
  }
}

impl fmt::Display for DigestError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      #[cfg(feature = "std")]
      Self::Read(e) => write!(f, "byte source read failed: {e}"),
      Self::Padding(v) => write!(f, "padding invariant violated: {v}"),
    }
  }
}

impl core::error::Error for DigestError {
  fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
    match self {
      #[cfg(feature = "std")]
      Self::Read(e) => Some(e),
      Self::Padding(v) => Some(v),
    }
  }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for DigestError {
  #[inline]
  fn from(e: std::io::Error) -> Self {
    Self::Read(e)
  }
}

impl From<PaddingInvariantViolation> for DigestError {
  #[inline]
  fn from(v: PaddingInvariantViolation) -> Self {
    Self::Padding(v)
  }
}
