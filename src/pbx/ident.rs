//! Digest helpers for pbxproj object identifiers
//!
//! Project files reference every object by a 24-character uppercase hex ID.
//! Deriving the ID from an MD5 digest of a seed string keeps regenerated
//! files diff-stable across runs. Hashing is delegated to the `md-5` crate;
//! nothing here implements a digest itself.

use md5::{Digest, Md5};

/// Length of a pbxproj object reference, in hex digits.
const OBJECT_ID_LEN: usize = 24;

/// Returns the lowercase hex MD5 digest of `input`.
pub fn md5_hex(input: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(input.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Derives a 24-character uppercase object reference from `seed`.
pub fn object_id(seed: &str) -> String {
    md5_hex(seed)[..OBJECT_ID_LEN].to_uppercase()
}
