//! Message schedule and compression round.
//!
//! Both functions are branch-free over fixed-size stack arrays and allocate
//! nothing.
#![allow(clippy::indexing_slicing)] // Fixed-size arrays + compression schedule

use super::BLOCK_LEN;
use crate::util::{load_be_words, rotr32};

/// Number of rounds, and the length of the expanded schedule.
pub const ROUNDS: usize = 64;

/// Round constants: first 32 bits of the fractional parts of the cube roots of
/// the first 64 primes.
pub const K: [u32; ROUNDS] = [
  0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5, 0xd807aa98,
  0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174, 0xe49b69c1, 0xefbe4786,
  0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da, 0x983e5152, 0xa831c66d, 0xb00327c8,
  0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967, 0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13,
  0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85, 0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819,
  0xd6990624, 0xf40e3585, 0x106aa070, 0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a,
  0x5b9cca4f, 0x682e6ff3, 0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7,
  0xc67178f2,
];

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
  rotr32(x, 2) ^ rotr32(x, 13) ^ rotr32(x, 22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
  rotr32(x, 6) ^ rotr32(x, 11) ^ rotr32(x, 25)
}

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
  rotr32(x, 7) ^ rotr32(x, 18) ^ (x >> 3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
  rotr32(x, 17) ^ rotr32(x, 19) ^ (x >> 10)
}

/// Expand one block into its 64-word schedule.
///
/// Words 0..16 are the block read as big-endian words; every later word mixes
/// the words 2, 7, 15 and 16 positions back.
#[inline]
#[must_use]
pub fn expand(block: &[u8; BLOCK_LEN]) -> [u32; ROUNDS] {
  let mut w = [0u32; ROUNDS];
  let head: [u32; 16] = load_be_words(block);
  w[..16].copy_from_slice(&head);

  for i in 16..ROUNDS {
    w[i] = small_sigma1(w[i - 2])
      .wrapping_add(w[i - 7])
      .wrapping_add(small_sigma0(w[i - 15]))
      .wrapping_add(w[i - 16]);
  }
  w
}

/// Fold one expanded schedule into `state`.
#[inline]
pub fn compress(state: &mut [u32; 8], schedule: &[u32; ROUNDS]) {
  let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

  for (&k, &wi) in K.iter().zip(schedule) {
    let t1 = h
      .wrapping_add(big_sigma1(e))
      .wrapping_add(ch(e, f, g))
      .wrapping_add(k)
      .wrapping_add(wi);
    let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

    h = g;
    g = f;
    f = e;
    e = d.wrapping_add(t1);
    d = c;
    c = b;
    b = a;
    a = t1.wrapping_add(t2);
  }

  for (word, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
    *word = word.wrapping_add(v);
  }
}
