//! SHA-256 built from its parts: padding, schedule, and compression.
//!
//! This crate is `no_std` compatible and has zero library dependencies outside
//! the lenext workspace. Dev-only dependencies are used for oracle testing
//! and benchmarking.
//!
//! # Modules
//!
//! - [`crypto::sha256`] - the digest, its block padder, and its compression core.
//! - [`crypto::sha256::extension`] - resuming a foreign digest (**length extension**).
//!
//! # Features
//!
//! `std` (default) enables the [`std::io::Read`] driven [`BlockPadder`](crypto::sha256::BlockPadder)
//! and the reader entry points.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod crypto;
pub mod error;

mod util;

pub use error::DigestError;
pub use traits::{Digest, VerificationError};
