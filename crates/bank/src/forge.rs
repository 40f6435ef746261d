//! Length-extension forgery against [`Bank`](crate::Bank) tags.

use hashes::crypto::sha256::{extension::LengthExtension, glue_padding};
use tracing::{debug, info, trace};

use crate::Tag;

/// An extended transaction and the tag that authenticates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forgery {
  /// `message ‖ glue ‖ suffix`, without the key.
  pub message: Vec<u8>,
  pub tag: Tag,
}

/// Extend an authenticated `message` with `suffix`, assuming the key was
/// `secret_len` bytes long.
///
/// The result verifies exactly when `secret_len` is the real key length.
#[must_use]
pub fn forge(message: &[u8], tag: &Tag, secret_len: usize, suffix: &[u8]) -> Forgery {
  let original_len = (secret_len + message.len()) as u64;
  let glue = glue_padding(original_len);
  let ext = LengthExtension::for_message_len(tag, original_len);

  let mut forged = Vec::with_capacity(message.len() + glue.len() + suffix.len());
  forged.extend_from_slice(message);
  forged.extend_from_slice(&glue);
  forged.extend_from_slice(suffix);

  debug!(secret_len, glue_len = glue.len(), prefix_bits = ext.prefix_bits(), "built extension");
  Forgery { message: forged, tag: ext.extend(suffix) }
}

/// Try each candidate key length until `accepts` takes the forgery.
///
/// `accepts` stands in for whatever tells the attacker a tag was good, usually
/// submitting the transaction to the verifier.
pub fn scan_secret_len<I, F>(
  message: &[u8],
  tag: &Tag,
  suffix: &[u8],
  candidates: I,
  mut accepts: F,
) -> Option<(usize, Forgery)>
where
  I: IntoIterator<Item = usize>,
  F: FnMut(&Forgery) -> bool,
{
  for secret_len in candidates {
    let forgery = forge(message, tag, secret_len, suffix);
    if accepts(&forgery) {
      info!(secret_len, "forgery accepted");
      return Some((secret_len, forgery));
    }
    trace!(secret_len, "forgery rejected");
  }
  None
}
