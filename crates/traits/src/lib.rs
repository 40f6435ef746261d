//! Core digest traits for lenext.
//!
//! This crate provides the traits the hash implementations conform to. It is
//! `no_std` compatible and has zero dependencies.
//!
//! # Traits
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Digest`] | Fixed-output cryptographic hash | SHA-256 |
//!
//! # Error Types
//!
//! - [`VerificationError`] - Opaque error for tag verification
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod digest;
pub mod error;

pub use digest::Digest;
pub use error::VerificationError;
