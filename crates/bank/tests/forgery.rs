//! End-to-end forgery against a bank that never reveals its key.

use bank::{Bank, Transaction, forge, scan_secret_len};
use proptest::prelude::*;

const MESSAGE: &[u8] = b"from:A;to:B;amount:1000";
const SUFFIX: &[u8] = b";amount:999999";

#[test]
fn one_byte_key_forgery() {
  let bank = Bank::new("k");
  let tag = bank.authenticate(MESSAGE).unwrap();
  assert_eq!(hex::encode(tag), "c7da5c8323f6bdce7fc8d522dc472ca2ddb51e5d8b5674848c54a0a8f281eda0");

  let forgery = forge(MESSAGE, &tag, 1, SUFFIX);
  assert_eq!(hex::encode(forgery.tag), "2284718960eabf72d06edfe69c2b243c3250827744c2226972d02e8c0128a531");

  let tx = bank.verify(&forgery.message, &forgery.tag).unwrap();
  assert_eq!(tx.from_account(), "A");
  assert_eq!(tx.to_account(), "B");
  assert_eq!(tx.amount(), "999999");
}

#[test]
fn branch_transfer_is_forged_without_the_key() {
  let issuer = Bank::new("5a95b9feba8efda0b6c3c6a96ad05a87");
  let verifier = issuer.clone();
  let message = b"from:20-60-40.23311492;to:35-01-17.11911597;stoken:7a2afc675906eb180ba2e18b;amount:1000";
  let tag = issuer.authenticate(message).unwrap();

  let (secret_len, forgery) =
    scan_secret_len(message, &tag, b";amount:100000", 0..=64, |f| verifier.verify(&f.message, &f.tag).is_ok())
      .unwrap();

  assert_eq!(secret_len, 32);
  let tx = verifier.verify(&forgery.message, &forgery.tag).unwrap();
  assert_eq!(tx, Transaction::new("20-60-40.23311492", "35-01-17.11911597", "100000"));
}

#[test]
fn key_longer_than_a_block() {
  let key = vec![0x42u8; 100];
  let bank = Bank::new(key.clone());
  let tag = bank.authenticate(MESSAGE).unwrap();
  let forgery = forge(MESSAGE, &tag, key.len(), SUFFIX);
  assert!(bank.verify(&forgery.message, &forgery.tag).is_ok());
}

#[test]
fn tampering_without_extension_is_rejected() {
  let bank = Bank::new("k");
  let tag = bank.authenticate(MESSAGE).unwrap();
  let mut tampered = MESSAGE.to_vec();
  tampered.extend_from_slice(SUFFIX);
  assert!(bank.verify(&tampered, &tag).unwrap_err().is_rejection());
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(64))]

  #[test]
  fn forgery_verifies_for_any_key(
    key in proptest::collection::vec(any::<u8>(), 0..130),
    message in proptest::collection::vec(any::<u8>(), 0..200),
    suffix in proptest::collection::vec(any::<u8>(), 0..200),
  ) {
    let bank = Bank::new(key.clone());
    let tag = bank.authenticate(&message).unwrap();
    let forgery = forge(&message, &tag, key.len(), &suffix);
    prop_assert!(bank.verify(&forgery.message, &forgery.tag).is_ok());
  }
}
