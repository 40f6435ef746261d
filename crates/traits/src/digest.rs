//! Cryptographic digest trait.
//!
//! Streaming updates, idempotent finalize, and reset support.

use core::fmt::Debug;

/// Cryptographic hash function producing a fixed-size digest.
///
/// # Example
///
/// ```rust
/// # use traits::Digest;
/// # #[derive(Clone, Default)]
/// # struct XorDigest(u8);
/// # impl Digest for XorDigest {
/// #   const OUTPUT_SIZE: usize = 2;
/// #   type Output = [u8; 2];
/// #   fn new() -> Self { Self(0) }
/// #   fn update(&mut self, data: &[u8]) {
/// #     self.0 = data.iter().fold(self.0, |acc, &b| acc ^ b);
/// #   }
/// #   fn finalize(&self) -> Self::Output { [self.0; 2] }
/// #   fn reset(&mut self) { self.0 = 0; }
/// # }
/// let one_shot = XorDigest::digest(b"hello world");
///
/// let mut h = XorDigest::new();
/// h.update(b"hello ");
/// h.update(b"world");
/// assert_eq!(h.finalize(), one_shot);
/// assert_eq!(XorDigest::digest_vectored(&[b"hello", b" ", b"world"]), one_shot);
/// ```
pub trait Digest: Clone + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The digest output type.
  ///
  /// Typically `[u8; N]`.
  type Output: Copy + Eq + Debug;

  /// Create a new hasher in its initial state.
  #[must_use]
  fn new() -> Self;

  /// Update the hasher with additional data.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the digest.
  ///
  /// This method does not consume the hasher, allowing further updates if needed.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Compute the digest of data in one shot.
  #[inline]
  #[must_use]
  fn digest(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the digest of multiple buffers in one shot.
  ///
  /// Equivalent to hashing the concatenation of `bufs`.
  #[inline]
  #[must_use]
  fn digest_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }
}

#[cfg(test)]
mod tests {
  use super::Digest;

  /// Order-sensitive toy digest: enough to observe how default methods compose.
  #[derive(Clone, Default)]
  struct Fold(u32);

  impl Digest for Fold {
    const OUTPUT_SIZE: usize = 4;
    type Output = [u8; 4];

    fn new() -> Self {
      Self(7)
    }

    fn update(&mut self, data: &[u8]) {
      for &b in data {
        self.0 = self.0.wrapping_mul(31).wrapping_add(u32::from(b));
      }
    }

    fn finalize(&self) -> Self::Output {
      self.0.to_be_bytes()
    }

    fn reset(&mut self) {
      *self = Self::new();
    }
  }

  #[test]
  fn vectored_equals_concatenation() {
    assert_eq!(Fold::digest_vectored(&[b"secret", b"", b"message"]), Fold::digest(b"secretmessage"));
  }

  #[test]
  fn finalize_is_idempotent() {
    let mut h = Fold::new();
    h.update(b"abc");
    assert_eq!(h.finalize(), h.finalize());
  }

  #[test]
  fn reset_restores_initial_state() {
    let mut h = Fold::new();
    h.update(b"abc");
    h.reset();
    assert_eq!(h.finalize(), Fold::digest(b""));
  }
}
