use std::{fmt, io::Read};

use hashes::crypto::Sha256;
use tracing::debug;
use traits::VerificationError;

use crate::{BankError, Transaction};

/// A transaction authentication tag.
pub type Tag = [u8; 32];

/// Issues and checks `sha256(key ‖ transaction)` tags.
///
/// This construction is broken by length extension; see [`crate::forge`].
#[derive(Clone)]
pub struct Bank {
  key: Vec<u8>,
}

impl Bank {
  #[must_use]
  pub fn new(key: impl Into<Vec<u8>>) -> Self {
    Self { key: key.into() }
  }

  /// Tag for `transaction`.
  ///
  /// # Errors
  ///
  /// [`BankError::Digest`] if hashing fails.
  pub fn authenticate(&self, transaction: &[u8]) -> Result<Tag, BankError> {
    let tag = self.keyed_digest(transaction)?;
    debug!(len = transaction.len(), tag = %hex::encode(tag), "issued transaction tag");
    Ok(tag)
  }

  /// Recompute the tag for `transaction`, compare it byte-for-byte with `tag`,
  /// and decode the transaction if they match.
  ///
  /// # Errors
  ///
  /// [`BankError::Rejected`] on mismatch; [`BankError::Digest`] if hashing fails.
  pub fn verify(&self, transaction: &[u8], tag: &Tag) -> Result<Transaction, BankError> {
    let computed = self.keyed_digest(transaction)?;
    if let Err(e) = VerificationError::check(&computed, tag) {
      debug!(len = transaction.len(), "transaction tag mismatch");
      return Err(e.into());
    }
    let tx = Transaction::parse(transaction);
    debug!(%tx, "transaction verified");
    Ok(tx)
  }

  fn keyed_digest(&self, transaction: &[u8]) -> Result<Tag, BankError> {
    Ok(Sha256::digest_reader(self.key.as_slice().chain(transaction))?)
  }
}

impl fmt::Debug for Bank {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Bank").field("key_len", &self.key.len()).finish_non_exhaustive()
  }
}
