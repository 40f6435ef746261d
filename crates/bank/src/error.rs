use hashes::DigestError;
use traits::VerificationError;

/// Errors from issuing or checking a transaction tag.
#[derive(Debug, thiserror::Error)]
pub enum BankError {
  /// The supplied tag does not match the transaction. Expected for tampered
  /// or forged-with-the-wrong-length transactions.
  #[error("transaction rejected: {0}")]
  Rejected(#[from] VerificationError),
  /// Hashing the keyed transaction failed.
  #[error(transparent)]
  Digest(#[from] DigestError),
}

impl BankError {
  /// `true` when verification ran and the tag was wrong.
  #[must_use]
  pub fn is_rejection(&self) -> bool {
    matches!(self, Self::Rejected(_))
  }
}
