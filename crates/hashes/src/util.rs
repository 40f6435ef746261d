#[inline(always)]
pub const fn rotr32(x: u32, n: u32) -> u32 {
  x.rotate_right(n)
}

/// Parse big-endian words from the front of `bytes`.
///
/// Trailing bytes that do not fill a whole word are ignored.
#[inline]
pub fn load_be_words<const N: usize>(bytes: &[u8]) -> [u32; N] {
  let mut out = [0u32; N];
  let (chunks, _) = bytes.as_chunks::<4>();
  for (word, chunk) in out.iter_mut().zip(chunks) {
    *word = u32::from_be_bytes(*chunk);
  }
  out
}

#[inline]
pub fn store_be_words(words: &[u32; 8]) -> [u8; 32] {
  let mut out = [0u8; 32];
  let (chunks, _) = out.as_chunks_mut::<4>();
  for (chunk, word) in chunks.iter_mut().zip(words) {
    *chunk = word.to_be_bytes();
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn words_are_big_endian() {
    let words: [u32; 2] = load_be_words(&[0x01, 0x02, 0x03, 0x04, 0xde, 0xad, 0xbe, 0xef, 0xff]);
    assert_eq!(words, [0x0102_0304, 0xdead_beef]);
  }

  #[test]
  fn store_then_load_is_identity() {
    let words = [0x6a09e667, 0, u32::MAX, 1, 0x8000_0000, 0x1234_5678, 0xcafe_babe, 0x0000_00ff];
    let bytes = store_be_words(&words);
    assert_eq!(&bytes[..4], &[0x6a, 0x09, 0xe6, 0x67]);
    assert_eq!(load_be_words::<8>(&bytes), words);
  }
}
