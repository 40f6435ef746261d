//! A bank that authenticates transfers as `sha256(key ‖ transaction)`, and the
//! length-extension forgery that breaks it.
//!
//! [`Bank`] issues and checks tags. [`forge`] appends attacker-chosen fields to
//! an authenticated transaction and produces a tag the bank accepts, knowing only
//! the original tag and the key length. [`scan_secret_len`] recovers that
//! length by asking a verifier.
//!
//! ```rust
//! use bank::{Bank, forge};
//!
//! let bank = Bank::new("k");
//! let message = b"from:A;to:B;amount:1000";
//! let tag = bank.authenticate(message)?;
//!
//! let forgery = forge(message, &tag, 1, b";amount:999999");
//! let tx = bank.verify(&forgery.message, &forgery.tag)?;
//! assert_eq!(tx.amount(), "999999");
//! # Ok::<(), bank::BankError>(())
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]

mod bank;
mod error;
mod forge;
mod transaction;

pub use bank::{Bank, Tag};
pub use error::BankError;
pub use forge::{Forgery, forge, scan_secret_len};
pub use transaction::Transaction;
