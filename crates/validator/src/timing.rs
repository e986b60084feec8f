//! Constant-time operations for security.

use subtle::ConstantTimeEq;

/// Compare two byte slices in constant time.
///
/// This prevents timing attacks by ensuring the comparison takes the same
/// amount of time regardless of where differences occur. Inputs of
/// different lengths return `false` immediately; for webhook signatures
/// the length is public (40 or 64 hex characters), so the early return
/// leaks nothing secret.
///
/// # Arguments
/// * `a` - First byte slice
/// * `b` - Second byte slice
///
/// # Returns
/// true if slices are equal, false otherwise
pub fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
