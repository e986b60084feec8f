//! HMAC webhook signature generation and verification.
//!
//! This crate provides:
//! - Signature generation in the `"<algorithm>=<hex>"` wire format
//! - Constant-time signature verification for security
//! - Algorithm dispatch for SHA-1 and SHA-256 with a fail-soft fallback
//!
//! # Example
//!
//! ```rust
//! use hooksign_validator::{Algorithm, Validator};
//!
//! let validator = Validator::new(Algorithm::Sha256, "foobar");
//! let signature = validator.generate(b"foo");
//!
//! assert!(validator.is_valid(b"foo", &signature));
//! assert!(validator.is_invalid(b"foo", "bad-signature"));
//! ```

#![warn(missing_docs)]

mod algorithm;
mod timing;
mod validator;

pub use algorithm::Algorithm;
pub use timing::constant_time_compare;
pub use validator::Validator;
