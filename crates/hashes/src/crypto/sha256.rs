//! SHA-256 (FIPS 180-4).
//!
//! Two ways in:
//!
//! - [`Sha256`] implements [`Digest`] for in-memory, incremental hashing.
//! - [`Sha256::digest_reader`] drives a [`BlockPadder`] over any
//!   [`std::io::Read`] and returns once the source is drained.
//!
//! Both share [`ChainingState`], whose compression core lives in [`compress`]
//! and whose padding lives in [`padding`]. Resuming from somebody else's digest
//! lives in [`extension`].

use traits::Digest;

pub mod compress;
pub mod extension;
pub mod padding;

#[cfg(feature = "std")]
pub use padding::BlockPadder;
pub use padding::{BLOCK_LEN, GluePadding, Tail, glue_padding, padded_bit_len};

use crate::util::{load_be_words, store_be_words};

/// Digest size in bytes.
pub const OUTPUT_LEN: usize = 32;

/// Initialization vector: first 32 bits of the fractional parts of the square
/// roots of the first 8 primes.
pub(crate) const H0: [u32; 8] = [
  0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// The eight-word value carried from block to block.
///
/// A finished digest is this state serialized big-endian, which is why any
/// digest can be parsed straight back into a state with [`from_digest`](Self::from_digest).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChainingState([u32; 8]);

impl ChainingState {
  /// State before any block has been absorbed.
  pub const INITIAL: Self = Self(H0);

  /// Parse a 32-byte digest as eight big-endian words.
  #[inline]
  #[must_use]
  pub fn from_digest(digest: &[u8; OUTPUT_LEN]) -> Self {
    Self(load_be_words(digest))
  }

  #[inline]
  #[must_use]
  pub const fn from_words(words: [u32; 8]) -> Self {
    Self(words)
  }

  #[inline]
  #[must_use]
  pub const fn words(&self) -> &[u32; 8] {
    &self.0
  }

  /// Serialize as eight big-endian words.
  #[inline]
  #[must_use]
  pub fn to_digest(&self) -> [u8; OUTPUT_LEN] {
    store_be_words(&self.0)
  }

  /// Expand `block` and fold it into the state.
  #[inline]
  pub fn absorb(&mut self, block: &[u8; BLOCK_LEN]) {
    let schedule = compress::expand(block);
    compress::compress(&mut self.0, &schedule);
  }
}

impl Default for ChainingState {
  #[inline]
  fn default() -> Self {
    Self::INITIAL
  }
}

#[derive(Clone)]
pub struct Sha256 {
  state: ChainingState,
  block: [u8; BLOCK_LEN],
  block_len: usize,
  bytes_hashed: u64,
  prefix_bits: u64,
}

impl Default for Sha256 {
  #[inline]
  fn default() -> Self {
    Self::resume(ChainingState::INITIAL, 0)
  }
}

impl Sha256 {
  /// Hasher positioned after `prefix_bits` already absorbed into `state`.
  ///
  /// Only the [`extension`] module may build one of these.
  #[inline]
  pub(crate) fn resume(state: ChainingState, prefix_bits: u64) -> Self {
    Self {
      state,
      block: [0u8; BLOCK_LEN],
      block_len: 0,
      bytes_hashed: 0,
      prefix_bits,
    }
  }

  /// Hash everything `source` yields.
  ///
  /// # Errors
  ///
  /// [`DigestError::Read`](crate::DigestError::Read) if the source fails; the
  /// source is left partially consumed.
  ///
  /// # Example
  ///
  /// ```rust
  /// use hashes::crypto::Sha256;
  ///
  /// let digest = Sha256::digest_reader(&b"abc"[..])?;
  /// assert_eq!(digest[..4], [0xba, 0x78, 0x16, 0xbf]);
  /// # Ok::<(), hashes::DigestError>(())
  /// ```
  #[cfg(feature = "std")]
  pub fn digest_reader<R: std::io::Read>(source: R) -> Result<[u8; OUTPUT_LEN], crate::DigestError> {
    absorb_padded(ChainingState::INITIAL, BlockPadder::new(source))
  }

  #[inline]
  fn message_bits(&self) -> u64 {
    let total_len = self.bytes_hashed.wrapping_add(self.block_len as u64);
    self.prefix_bits.wrapping_add(total_len.wrapping_mul(8))
  }

  fn finalize_inner(&self) -> [u8; OUTPUT_LEN] {
    let mut state = self.state;
    let partial = self.block.get(..self.block_len).unwrap_or_default();
    let tail = match Tail::new(partial, self.message_bits()) {
      Ok(tail) => tail,
      Err(violation) => panic!("sha256 finalize: {violation}"),
    };
    for block in tail.blocks() {
      state.absorb(block);
    }
    state.to_digest()
  }
}

/// Absorb every block `padder` yields into `state` and serialize the result.
#[cfg(feature = "std")]
pub(crate) fn absorb_padded<R: std::io::Read>(
  mut state: ChainingState,
  padder: BlockPadder<R>,
) -> Result<[u8; OUTPUT_LEN], crate::DigestError> {
  for block in padder {
    state.absorb(&block?);
  }
  Ok(state.to_digest())
}

impl Digest for Sha256 {
  const OUTPUT_SIZE: usize = OUTPUT_LEN;
  type Output = [u8; OUTPUT_LEN];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  fn update(&mut self, mut data: &[u8]) {
    if data.is_empty() {
      return;
    }

    if self.block_len != 0 {
      let take = core::cmp::min(BLOCK_LEN - self.block_len, data.len());
      let (head, rest) = data.split_at(take);
      if let Some(dst) = self.block.get_mut(self.block_len..self.block_len + take) {
        dst.copy_from_slice(head);
      }
      self.block_len += take;
      data = rest;

      if self.block_len == BLOCK_LEN {
        let block = self.block;
        self.state.absorb(&block);
        self.bytes_hashed = self.bytes_hashed.wrapping_add(BLOCK_LEN as u64);
        self.block_len = 0;
      }
    }

    let (blocks, rest) = data.as_chunks::<BLOCK_LEN>();
    for block in blocks {
      self.state.absorb(block);
    }
    self.bytes_hashed = self.bytes_hashed.wrapping_add((blocks.len() * BLOCK_LEN) as u64);

    if !rest.is_empty()
      && let Some(dst) = self.block.get_mut(..rest.len())
    {
      dst.copy_from_slice(rest);
      self.block_len = rest.len();
    }
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    self.finalize_inner()
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}
