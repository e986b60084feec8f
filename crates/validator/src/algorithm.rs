//! Hash algorithm selection for signature generation.

use std::fmt;
use std::str::FromStr;

/// The hash algorithm a [`crate::Validator`] signs and verifies with.
///
/// Only SHA-1 and SHA-256 are supported. Any other tag is carried as
/// [`Algorithm::Other`] and degrades every operation instead of failing
/// construction: `generate` returns an empty string and `is_valid`
/// returns `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Algorithm {
    /// HMAC-SHA1, 40 hex character digest. Legacy providers only.
    Sha1,
    /// HMAC-SHA256, 64 hex character digest.
    Sha256,
    /// An unrecognized algorithm tag, preserved verbatim.
    Other(String),
}

impl Algorithm {
    /// Returns the tag used as the signature prefix, e.g. `"sha256"`.
    pub fn as_str(&self) -> &str {
        match self {
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha256 => "sha256",
            Algorithm::Other(tag) => tag,
        }
    }

    /// Hex digest length for this algorithm, if it is a supported one.
    pub fn digest_hex_len(&self) -> Option<usize> {
        match self {
            Algorithm::Sha1 => Some(40),
            Algorithm::Sha256 => Some(64),
            Algorithm::Other(_) => None,
        }
    }
}

impl FromStr for Algorithm {
    type Err = std::convert::Infallible;

    /// Parsing never fails; unknown tags become [`Algorithm::Other`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "sha1" => Algorithm::Sha1,
            "sha256" => Algorithm::Sha256,
            other => Algorithm::Other(other.to_string()),
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
