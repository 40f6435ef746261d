//! Resuming a SHA-256 chain from a foreign digest (length extension).
//!
//! A SHA-256 digest *is* the chaining state after the last padded block. Anyone
//! holding `digest(secret ‖ message)` and `len(secret ‖ message)` can therefore
//! keep hashing as if they had absorbed `secret ‖ message ‖ glue` themselves,
//! and produce `digest(secret ‖ message ‖ glue ‖ suffix)` without the secret.
//!
//! This module exists to demonstrate that weakness of `hash(secret ‖ message)`
//! tags. It accepts any state and any declared prefix length; it cannot tell a
//! wrong length from a right one, and the resulting digest simply will not
//! verify. Ordinary hashing never goes through here.
//!
//! # Example
//!
//! ```rust
//! use hashes::{
//!   Digest,
//!   crypto::{
//!     Sha256,
//!     sha256::{extension::LengthExtension, glue_padding},
//!   },
//! };
//!
//! let secret = b"k";
//! let message = b"from:A;to:B;amount:1000";
//! let tag = Sha256::digest_vectored(&[secret, message]);
//!
//! // Attacker side: knows `tag`, `message`, and that the secret is 1 byte.
//! let original_len = (secret.len() + message.len()) as u64;
//! let forged = LengthExtension::for_message_len(&tag, original_len).extend(b";amount:999999");
//!
//! // Defender side recomputes over the extended message and is fooled.
//! let glue = glue_padding(original_len);
//! assert_eq!(Sha256::digest_vectored(&[secret, message, &glue, b";amount:999999"]), forged);
//! ```

use traits::Digest;

use super::{ChainingState, OUTPUT_LEN, Sha256, padded_bit_len};

/// A foreign digest together with the bit-length of the message behind it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LengthExtension {
  state: ChainingState,
  prefix_bits: u64,
}

impl LengthExtension {
  /// Resume from `foreign_digest`, declaring that `prefix_bits` bits (message
  /// *and* its padding) were absorbed to produce it.
  #[inline]
  #[must_use]
  pub fn new(foreign_digest: &[u8; OUTPUT_LEN], prefix_bits: u64) -> Self {
    Self { state: ChainingState::from_digest(foreign_digest), prefix_bits }
  }

  /// Resume from `foreign_digest` of an `original_len`-byte message, accounting
  /// for the glue padding that message received.
  #[inline]
  #[must_use]
  pub fn for_message_len(foreign_digest: &[u8; OUTPUT_LEN], original_len: u64) -> Self {
    Self::new(foreign_digest, padded_bit_len(original_len))
  }

  #[inline]
  #[must_use]
  pub const fn prefix_bits(&self) -> u64 {
    self.prefix_bits
  }

  #[inline]
  #[must_use]
  pub const fn state(&self) -> ChainingState {
    self.state
  }

  /// Streaming hasher positioned right after the foreign prefix.
  #[inline]
  #[must_use]
  pub fn hasher(&self) -> Sha256 {
    Sha256::resume(self.state, self.prefix_bits)
  }

  /// Digest of `prefix ‖ suffix` for the unseen prefix.
  #[must_use]
  pub fn extend(&self, suffix: &[u8]) -> [u8; OUTPUT_LEN] {
    let mut h = self.hasher();
    h.update(suffix);
    h.finalize()
  }

  /// [`extend`](Self::extend) over a byte source.
  ///
  /// # Errors
  ///
  /// [`DigestError::Read`](crate::DigestError::Read) if the suffix source fails.
  #[cfg(feature = "std")]
  pub fn extend_reader<R: std::io::Read>(&self, suffix: R) -> Result<[u8; OUTPUT_LEN], crate::DigestError> {
    super::absorb_padded(self.state, super::BlockPadder::with_offset(suffix, self.prefix_bits))
  }
}

/// Continue the chain behind `foreign_state` over `suffix`.
///
/// `original_bit_len` is the bit-length already absorbed into `foreign_state`,
/// padding included (see [`padded_bit_len`]). It is trusted as given.
///
/// # Errors
///
/// [`DigestError::Read`](crate::DigestError::Read) if the suffix source fails.
#[cfg(feature = "std")]
pub fn continue_digest<R: std::io::Read>(
  suffix: R,
  foreign_state: &[u8; OUTPUT_LEN],
  original_bit_len: u64,
) -> Result<[u8; OUTPUT_LEN], crate::DigestError> {
  LengthExtension::new(foreign_state, original_bit_len).extend_reader(suffix)
}
