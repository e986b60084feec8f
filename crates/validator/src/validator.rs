//! HMAC signature generation and verification.

use std::fmt;

use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;

use crate::{constant_time_compare, Algorithm};

type HmacSha256 = Hmac<Sha256>;
type HmacSha1 = Hmac<Sha1>;

/// An HMAC signature validator for webhook-style authentication.
///
/// A validator is an immutable pair of hash [`Algorithm`] and shared
/// secret, constructed once and reused across any number of generate or
/// verify calls. It holds no mutable state, so a shared instance is safe
/// to use from multiple threads without coordination.
///
/// # Example
///
/// ```rust
/// use hooksign_validator::{Algorithm, Validator};
///
/// let validator = Validator::new(Algorithm::Sha256, "foobar");
/// assert!(validator.is_valid(
///     b"foo",
///     "sha256=3d2a9378b1198d88c533bd37abab92c966c59698791bb42661d7c526302ce3e9",
/// ));
/// ```
#[derive(Clone)]
pub struct Validator {
    algorithm: Algorithm,
    secret: Vec<u8>,
}

impl Validator {
    /// Creates a validator for the given algorithm and secret.
    ///
    /// Construction always succeeds, even for an [`Algorithm::Other`]
    /// tag; unrecognized algorithms only degrade the operations
    /// (`generate` returns `""`, `is_valid` returns `false`).
    ///
    /// # Arguments
    /// * `algorithm` - Hash algorithm used for signing and verification
    /// * `secret` - Shared secret key, text or raw bytes
    pub fn new(algorithm: Algorithm, secret: impl Into<Vec<u8>>) -> Self {
        Self {
            algorithm,
            secret: secret.into(),
        }
    }

    /// Returns the configured algorithm.
    pub fn algorithm(&self) -> &Algorithm {
        &self.algorithm
    }

    /// Generates the signature for `body` in `"<algorithm>=<hex>"` form.
    ///
    /// For an unrecognized algorithm this returns the empty string. That
    /// is the degraded-mode signal for "unsupported algorithm", not a
    /// valid zero-length signature; callers must not compare it against
    /// incoming signatures themselves.
    ///
    /// # Arguments
    /// * `body` - Payload bytes to sign
    ///
    /// # Returns
    /// Signature string, e.g. `"sha256=3d2a93..."`, or `""`
    pub fn generate(&self, body: &[u8]) -> String {
        match &self.algorithm {
            Algorithm::Sha256 => format!("sha256={}", self.digest_sha256(body)),
            Algorithm::Sha1 => format!("sha1={}", self.digest_sha1(body)),
            Algorithm::Other(_) => String::new(),
        }
    }

    /// Returns true if `signature` is valid for `body` under this
    /// validator's algorithm and secret.
    ///
    /// The expected signature is recomputed from `body` and compared to
    /// `signature` in constant time. The supplied signature is treated as
    /// an opaque token; its `"<algorithm>="` prefix is not parsed, so a
    /// signature generated with a different algorithm simply fails the
    /// comparison. Unrecognized algorithms return `false` without
    /// comparing anything.
    ///
    /// Verification never panics or errors; every failure mode, from a
    /// tampered body to a malformed signature string, is expressed as
    /// `false`.
    ///
    /// # Arguments
    /// * `body` - Payload bytes to verify
    /// * `signature` - Signature to check, e.g. `"sha256=3d2a93..."`
    pub fn is_valid(&self, body: &[u8], signature: &str) -> bool {
        if matches!(self.algorithm, Algorithm::Other(_)) {
            return false;
        }
        let expected = self.generate(body);
        constant_time_compare(signature.as_bytes(), expected.as_bytes())
    }

    /// Returns true if `signature` is not valid for `body`.
    ///
    /// Convenience negation of [`Validator::is_valid`].
    pub fn is_invalid(&self, body: &[u8], signature: &str) -> bool {
        !self.is_valid(body, signature)
    }

    fn digest_sha256(&self, body: &[u8]) -> String {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(body);
        hex::encode(mac.finalize().into_bytes())
    }

    fn digest_sha1(&self, body: &[u8]) -> String {
        let mut mac = HmacSha1::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(body);
        hex::encode(mac.finalize().into_bytes())
    }
}

// Manual impl so the secret never reaches logs or panic messages.
impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("algorithm", &self.algorithm)
            .field("secret", &"<redacted>")
            .finish()
    }
}


#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;

    fn supported_algorithm() -> impl Strategy<Value = Algorithm> {
        prop_oneof![Just(Algorithm::Sha1), Just(Algorithm::Sha256)]
    }

    proptest! {
        #[test]
        fn generated_signature_round_trips(
            algorithm in supported_algorithm(),
            secret in proptest::collection::vec(any::<u8>(), 0..64),
            body in proptest::collection::vec(any::<u8>(), 0..256),
        ) {
            let validator = Validator::new(algorithm, secret);
            let signature = validator.generate(&body);
            prop_assert!(validator.is_valid(&body, &signature));
        }

        #[test]
        fn generated_signature_has_wire_format(
            algorithm in supported_algorithm(),
            secret in proptest::collection::vec(any::<u8>(), 0..64),
            body in proptest::collection::vec(any::<u8>(), 0..256),
        ) {
            let prefix = format!("{algorithm}=");
            let hex_len = algorithm.digest_hex_len().unwrap();
            let validator = Validator::new(algorithm, secret);
            let signature = validator.generate(&body);
            prop_assert!(signature.starts_with(&prefix));
            let digest = &signature[prefix.len()..];
            prop_assert_eq!(digest.len(), hex_len);
            prop_assert!(digest
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }

        #[test]
        fn is_invalid_negates_is_valid(
            algorithm in supported_algorithm(),
            body in proptest::collection::vec(any::<u8>(), 0..256),
            signature in ".*",
        ) {
            let validator = Validator::new(algorithm, "secret");
            prop_assert_eq!(
                validator.is_invalid(&body, &signature),
                !validator.is_valid(&body, &signature)
            );
        }

        #[test]
        fn flipping_any_hex_char_invalidates(
            algorithm in supported_algorithm(),
            body in proptest::collection::vec(any::<u8>(), 0..256),
            index in any::<prop::sample::Index>(),
        ) {
            let validator = Validator::new(algorithm, "secret");
            let signature = validator.generate(&body);
            let digest_start = signature.find('=').unwrap() + 1;
            let pos = digest_start + index.index(signature.len() - digest_start);

            let mut tampered: Vec<u8> = signature.clone().into_bytes();
            tampered[pos] = if tampered[pos] == b'0' { b'1' } else { b'0' };
            let tampered = String::from_utf8(tampered).unwrap();

            prop_assert_ne!(&tampered, &signature);
            prop_assert!(!validator.is_valid(&body, &tampered));
        }

        #[test]
        fn unknown_algorithm_always_degrades(
            tag in "[a-z0-9]{1,12}",
            body in proptest::collection::vec(any::<u8>(), 0..256),
            signature in ".*",
        ) {
            prop_assume!(tag != "sha1" && tag != "sha256");
            let validator = Validator::new(Algorithm::Other(tag), "secret");
            prop_assert_eq!(validator.generate(&body), "");
            prop_assert!(!validator.is_valid(&body, &signature));
            prop_assert!(validator.is_invalid(&body, &signature));
        }
    }
}
