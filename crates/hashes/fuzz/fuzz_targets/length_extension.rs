//! A forged continuation must equal the digest of the glued message, for any
//! split of the input into secret, message, and suffix.

#![no_main]

use arbitrary::Arbitrary;
use hashes::crypto::{
  Sha256,
  sha256::{extension::LengthExtension, glue_padding},
};
use libfuzzer_sys::fuzz_target;
use traits::Digest as _;

#[derive(Arbitrary, Debug)]
struct Input {
  secret: Vec<u8>,
  message: Vec<u8>,
  suffix: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let original_len = (input.secret.len() + input.message.len()) as u64;
  let tag = Sha256::digest_vectored(&[&input.secret, &input.message]);

  let ext = LengthExtension::for_message_len(&tag, original_len);
  let forged = ext.extend(&input.suffix);
  assert_eq!(ext.extend_reader(&input.suffix[..]).ok(), Some(forged));

  let glue = glue_padding(original_len);
  assert_eq!(Sha256::digest_vectored(&[&input.secret, &input.message, &glue, &input.suffix]), forged);
});
