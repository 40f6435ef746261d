//! Merkle–Damgård padding and the block padder.
//!
//! A message is terminated by a single `1` bit (the byte `0x80`), zero fill, and
//! the 64-bit big-endian bit-length of the whole logical message, so that the
//! padded total is a multiple of 512 bits. The tail always spans one block when
//! the final partial block holds at most 55 bytes, and two otherwise.
//!
//! The bit-length written is `offset + 8 * bytes_read`. A non-zero offset makes
//! the padder behave as if an unseen prefix of `offset` bits had already been
//! hashed, which is what [`extension`](super::extension) builds on.
#![allow(clippy::indexing_slicing)] // Fixed-size block assembly

use core::{fmt, ops::Deref};

/// Block size in bytes.
pub const BLOCK_LEN: usize = 64;

/// Width of the trailing length field in bytes.
pub const LENGTH_LEN: usize = 8;

/// Longest partial block whose padding still fits in that same block.
pub const MAX_SINGLE_BLOCK_PARTIAL: usize = BLOCK_LEN - LENGTH_LEN - 1;

/// Longest possible glue padding: marker, 63 zero bytes, length field.
pub const MAX_GLUE_LEN: usize = BLOCK_LEN + LENGTH_LEN;

const BLOCK_BITS: u64 = (BLOCK_LEN as u64) * 8;
const LENGTH_BITS: u64 = (LENGTH_LEN as u64) * 8;
const LENGTH_OFFSET: usize = BLOCK_LEN - LENGTH_LEN;
const MARKER: u8 = 0x80;

/// The padded tail did not come out as one or two whole blocks.
///
/// Only reachable through a defect in the padding arithmetic or a caller
/// passing a "partial" block that is already full. Never recoverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaddingInvariantViolation {
  partial_len: usize,
  padded_bits: u64,
}

impl PaddingInvariantViolation {
  /// Bytes in the partial block that was being terminated.
  #[inline]
  #[must_use]
  pub const fn partial_len(&self) -> usize {
    self.partial_len
  }

  /// Total bits the tail would have occupied.
  #[inline]
  #[must_use]
  pub const fn padded_bits(&self) -> u64 {
    self.padded_bits
  }
}

impl fmt::Display for PaddingInvariantViolation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "padding a {}-byte partial block produced {} bits (expected 512 or 1024)",
      self.partial_len, self.padded_bits
    )
  }
}

impl core::error::Error for PaddingInvariantViolation {}

/// Number of tail blocks needed to terminate a `partial_len`-byte partial block.
///
/// # Errors
///
/// [`PaddingInvariantViolation`] unless the padded tail is exactly 512 or
/// 1024 bits, or if `partial_len` is not below [`BLOCK_LEN`].
pub fn tail_block_count(partial_len: usize) -> Result<usize, PaddingInvariantViolation> {
  let partial_bits = (partial_len as u64).saturating_mul(8);
  let fixed_bits = partial_bits.saturating_add(1 + LENGTH_BITS);
  let fill_bits = (BLOCK_BITS - fixed_bits % BLOCK_BITS) % BLOCK_BITS;
  let padded_bits = fixed_bits.saturating_add(fill_bits);

  match padded_bits {
    512 if partial_len <= MAX_SINGLE_BLOCK_PARTIAL => Ok(1),
    1024 if partial_len > MAX_SINGLE_BLOCK_PARTIAL && partial_len < BLOCK_LEN => Ok(2),
    _ => Err(PaddingInvariantViolation { partial_len, padded_bits }),
  }
}

/// The final one or two blocks of a padded message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tail {
  blocks: [[u8; BLOCK_LEN]; 2],
  count: usize,
}

impl Tail {
  /// Terminate `partial` (the bytes after the last full block) for a logical
  /// message of `message_bits` bits.
  ///
  /// # Errors
  ///
  /// See [`tail_block_count`].
  pub fn new(partial: &[u8], message_bits: u64) -> Result<Self, PaddingInvariantViolation> {
    let count = tail_block_count(partial.len())?;

    let mut blocks = [[0u8; BLOCK_LEN]; 2];
    blocks[0][..partial.len()].copy_from_slice(partial);
    blocks[0][partial.len()] = MARKER;
    blocks[count - 1][LENGTH_OFFSET..].copy_from_slice(&message_bits.to_be_bytes());

    Ok(Self { blocks, count })
  }

  /// Always 1 or 2.
  #[inline]
  #[must_use]
  pub fn block_count(&self) -> usize {
    self.count
  }

  #[inline]
  #[must_use]
  pub fn blocks(&self) -> &[[u8; BLOCK_LEN]] {
    &self.blocks[..self.count]
  }
}

/// The padding bytes a digest inserts after a message, before the next block.
///
/// For a message `m`, `m ‖ glue_padding(m.len())` is a whole number of blocks
/// and is exactly what the compression chain absorbed when `m` was hashed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct GluePadding {
  buf: [u8; MAX_GLUE_LEN],
  len: usize,
}

impl GluePadding {
  #[inline]
  #[must_use]
  pub fn as_slice(&self) -> &[u8] {
    &self.buf[..self.len]
  }
}

impl Deref for GluePadding {
  type Target = [u8];

  #[inline]
  fn deref(&self) -> &[u8] {
    self.as_slice()
  }
}

impl AsRef<[u8]> for GluePadding {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    self.as_slice()
  }
}

impl fmt::Debug for GluePadding {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("GluePadding(")?;
    for b in self.as_slice() {
      write!(f, "{b:02x}")?;
    }
    f.write_str(")")
  }
}

/// Padding inserted after a `message_len`-byte message: 9 to 72 bytes.
#[must_use]
pub fn glue_padding(message_len: u64) -> GluePadding {
  let partial = (message_len % BLOCK_LEN as u64) as usize;
  let zeros = (LENGTH_OFFSET + BLOCK_LEN - 1 - partial) % BLOCK_LEN;
  let len = 1 + zeros + LENGTH_LEN;

  let mut buf = [0u8; MAX_GLUE_LEN];
  buf[0] = MARKER;
  buf[1 + zeros..len].copy_from_slice(&message_len.wrapping_mul(8).to_be_bytes());
  GluePadding { buf, len }
}

/// Bit-length of `message ‖ glue_padding(message.len())`.
///
/// This is the offset a continuation must declare to resume after a message of
/// `message_len` bytes.
#[inline]
#[must_use]
pub fn padded_bit_len(message_len: u64) -> u64 {
  message_len.wrapping_add(glue_padding(message_len).len() as u64).wrapping_mul(8)
}

#[cfg(feature = "std")]
pub use padder::BlockPadder;

#[cfg(feature = "std")]
mod padder {
  use core::iter::FusedIterator;
  use std::io::{ErrorKind, Read};

  use super::{BLOCK_LEN, Tail};
  use crate::error::DigestError;

  #[derive(Debug)]
  enum Phase {
    Streaming,
    Padding { tail: Tail, next: usize },
    Done,
  }

  /// Lazy iterator of padded 64-byte blocks over a byte source.
  ///
  /// Full blocks are passed through as they are read; once the source is
  /// exhausted the padder yields the one or two tail blocks and then ends. The
  /// source is read exactly once and never rewound. After the first error the
  /// iterator is finished.
  ///
  /// # Example
  ///
  /// ```rust
  /// use hashes::crypto::sha256::BlockPadder;
  ///
  /// let blocks = BlockPadder::new(&b"abc"[..]).collect::<Result<Vec<_>, _>>()?;
  /// assert_eq!(blocks.len(), 1);
  /// assert_eq!(&blocks[0][..4], b"abc\x80");
  /// assert_eq!(blocks[0][63], 24);
  /// # Ok::<(), hashes::DigestError>(())
  /// ```
  #[derive(Debug)]
  pub struct BlockPadder<R> {
    source: R,
    buf: [u8; BLOCK_LEN],
    bytes_read: u64,
    offset_bits: u64,
    phase: Phase,
  }

  impl<R: Read> BlockPadder<R> {
    /// Pad `source` as a complete message.
    #[inline]
    #[must_use]
    pub fn new(source: R) -> Self {
      Self::with_offset(source, 0)
    }

    /// Pad `source` as the continuation of a message that already holds
    /// `offset_bits` bits.
    #[inline]
    #[must_use]
    pub fn with_offset(source: R, offset_bits: u64) -> Self {
      Self {
        source,
        buf: [0u8; BLOCK_LEN],
        bytes_read: 0,
        offset_bits,
        phase: Phase::Streaming,
      }
    }

    /// Bit-length of the logical message seen so far, offset included.
    #[inline]
    #[must_use]
    pub fn message_bits(&self) -> u64 {
      self.offset_bits.wrapping_add(self.bytes_read.wrapping_mul(8))
    }

    /// Read until the buffer holds a full block or the source is exhausted.
    fn fill(&mut self) -> std::io::Result<usize> {
      let mut filled = 0;
      while filled < BLOCK_LEN {
        match self.source.read(&mut self.buf[filled..]) {
          Ok(0) => break,
          Ok(n) => filled += n,
          Err(e) if e.kind() == ErrorKind::Interrupted => continue,
          Err(e) => return Err(e),
        }
      }
      Ok(filled)
    }
  }

  impl<R: Read> Iterator for BlockPadder<R> {
    type Item = Result<[u8; BLOCK_LEN], DigestError>;

    fn next(&mut self) -> Option<Self::Item> {
      loop {
        match &mut self.phase {
          Phase::Done => return None,
          Phase::Padding { tail, next } => {
            let block = tail.blocks().get(*next).copied();
            *next += 1;
            if block.is_none() {
              self.phase = Phase::Done;
            }
            return block.map(Ok);
          }
          Phase::Streaming => {
            let filled = match self.fill() {
              Ok(n) => n,
              Err(e) => {
                self.phase = Phase::Done;
                return Some(Err(DigestError::Read(e)));
              }
            };
            self.bytes_read = self.bytes_read.wrapping_add(filled as u64);

            if filled == BLOCK_LEN {
              return Some(Ok(self.buf));
            }

            match Tail::new(&self.buf[..filled], self.message_bits()) {
              Ok(tail) => self.phase = Phase::Padding { tail, next: 0 },
              Err(violation) => {
                self.phase = Phase::Done;
                return Some(Err(DigestError::Padding(violation)));
              }
            }
          }
        }
      }
    }
  }

  impl<R: Read> FusedIterator for BlockPadder<R> {}
}

#[cfg(all(test, feature = "std"))]
mod tests {
  extern crate alloc;
  extern crate std;

  use alloc::{vec, vec::Vec};
  use std::io::{self, Cursor, Read};

  use super::*;

  fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i as u8).wrapping_mul(31).wrapping_add(7)).collect()
  }

  fn pad_all(data: &[u8], offset_bits: u64) -> Vec<[u8; BLOCK_LEN]> {
    BlockPadder::with_offset(Cursor::new(data), offset_bits)
      .collect::<Result<Vec<_>, _>>()
      .expect("in-memory source cannot fail")
  }

  /// Expected tail bytes: everything after the last full message block.
  fn expected_tail(partial: &[u8], bits: u64, blocks: usize) -> Vec<u8> {
    let mut out = partial.to_vec();
    out.push(0x80);
    out.resize(blocks * BLOCK_LEN - LENGTH_LEN, 0);
    out.extend_from_slice(&bits.to_be_bytes());
    out
  }

  #[test]
  fn boundary_lengths_produce_documented_block_counts() {
    // (message length, total blocks, tail blocks)
    let cases = [(0, 1, 1), (55, 1, 1), (56, 2, 2), (63, 2, 2), (64, 2, 1), (65, 2, 1), (119, 2, 1), (120, 3, 2)];
    for (len, total, tail) in cases {
      let msg = pattern(len);
      let blocks = pad_all(&msg, 0);
      assert_eq!(blocks.len(), total, "len={len}");

      let full = len / BLOCK_LEN;
      for (i, block) in blocks[..full].iter().enumerate() {
        assert_eq!(&block[..], &msg[i * BLOCK_LEN..(i + 1) * BLOCK_LEN], "len={len} block={i}");
      }

      let built = Tail::new(&msg[full * BLOCK_LEN..], len as u64 * 8).unwrap();
      assert_eq!(built.block_count(), tail, "len={len}");
      assert_eq!(built.blocks(), &blocks[full..], "len={len}");

      let tail_bytes: Vec<u8> = blocks[full..].iter().flatten().copied().collect();
      assert_eq!(tail_bytes, expected_tail(&msg[full * BLOCK_LEN..], len as u64 * 8, tail), "len={len}");
    }
  }

  #[test]
  fn exact_multiple_gets_a_fresh_padding_block() {
    let blocks = pad_all(&pattern(128), 0);
    assert_eq!(blocks.len(), 3);
    let mut expected = [0u8; BLOCK_LEN];
    expected[0] = 0x80;
    expected[56..].copy_from_slice(&1024u64.to_be_bytes());
    assert_eq!(blocks[2], expected);
  }

  #[test]
  fn offset_is_added_to_length_field() {
    let blocks = pad_all(b"xy", 512);
    assert_eq!(blocks.len(), 1);
    assert_eq!(&blocks[0][..3], b"xy\x80");
    assert_eq!(&blocks[0][56..], &(512u64 + 16).to_be_bytes());
  }

  #[test]
  fn offset_does_not_change_block_split() {
    for len in [0, 55, 56, 64, 100] {
      assert_eq!(pad_all(&pattern(len), 0).len(), pad_all(&pattern(len), 4096).len(), "len={len}");
    }
  }

  #[test]
  fn iterator_is_fused() {
    let mut padder = BlockPadder::new(Cursor::new(b"abc"));
    assert!(padder.next().is_some());
    assert!(padder.next().is_none());
    assert!(padder.next().is_none());
  }

  /// Hands out one byte per call and an `Interrupted` before every byte.
  struct Trickle<'a> {
    data: &'a [u8],
    interrupt: bool,
  }

  impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
      self.interrupt = !self.interrupt;
      if self.interrupt {
        return Err(io::ErrorKind::Interrupted.into());
      }
      let Some((&first, rest)) = self.data.split_first() else {
        return Ok(0);
      };
      buf[0] = first;
      self.data = rest;
      Ok(1)
    }
  }

  #[test]
  fn short_reads_are_reassembled_into_full_blocks() {
    let msg = pattern(150);
    let trickled: Vec<_> = BlockPadder::new(Trickle { data: &msg, interrupt: false })
      .collect::<Result<_, _>>()
      .expect("interrupts are retried");
    assert_eq!(trickled, pad_all(&msg, 0));
  }

  struct FailAfter {
    remaining: usize,
  }

  impl Read for FailAfter {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
      if self.remaining == 0 {
        return Err(io::Error::new(io::ErrorKind::ConnectionReset, "source closed"));
      }
      let n = buf.len().min(self.remaining);
      buf[..n].fill(0xaa);
      self.remaining -= n;
      Ok(n)
    }
  }

  #[test]
  fn read_error_is_surfaced_then_iteration_stops() {
    let mut padder = BlockPadder::new(FailAfter { remaining: 70 });
    assert!(matches!(padder.next(), Some(Ok(_))));
    match padder.next() {
      Some(Err(crate::DigestError::Read(e))) => assert_eq!(e.kind(), io::ErrorKind::ConnectionReset),
      other => panic!("expected read error, got {other:?}"),
    }
    assert!(padder.next().is_none());
  }

  #[test]
  fn full_partial_block_is_an_invariant_violation() {
    let err = Tail::new(&[0u8; BLOCK_LEN], 0).unwrap_err();
    assert_eq!(err.partial_len(), BLOCK_LEN);
    assert_eq!(err.padded_bits(), 1024);
    assert!(tail_block_count(200).is_err());
  }

  #[test]
  fn tail_block_count_covers_every_partial_length() {
    for partial in 0..BLOCK_LEN {
      let expected = if partial <= MAX_SINGLE_BLOCK_PARTIAL { 1 } else { 2 };
      assert_eq!(tail_block_count(partial), Ok(expected), "partial={partial}");
    }
  }

  #[test]
  fn glue_padding_completes_whole_blocks() {
    for len in 0..=200u64 {
      let glue = glue_padding(len);
      assert!((9..=MAX_GLUE_LEN).contains(&glue.len()), "len={len}");
      assert_eq!((len + glue.len() as u64) % BLOCK_LEN as u64, 0, "len={len}");
      assert_eq!(glue[0], 0x80);
      assert_eq!(&glue[glue.len() - 8..], &(len * 8).to_be_bytes());
      assert_eq!(padded_bit_len(len), (len + glue.len() as u64) * 8);
    }
  }

  #[test]
  fn glue_padding_matches_padder_tail() {
    for len in [0usize, 1, 24, 55, 56, 63, 64, 65, 127] {
      let msg = pattern(len);
      let padded: Vec<u8> = pad_all(&msg, 0).into_iter().flatten().collect();
      let mut expected = msg.clone();
      expected.extend_from_slice(&glue_padding(len as u64));
      assert_eq!(padded, expected, "len={len}");
    }
  }

  #[test]
  fn glue_padding_debug_is_hex() {
    let glue = glue_padding(55);
    assert_eq!(alloc::format!("{glue:?}"), "GluePadding(8000000000000001b8)");
    assert_eq!(glue.as_ref(), &vec![0x80, 0, 0, 0, 0, 0, 0, 0x01, 0xb8][..]);
  }
}
