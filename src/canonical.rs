//! Canonical serialization for catalog fingerprints.
//!
//! A frozen scheme version is identified by the hash of its codepoint to
//! label map. The hash is only stable if the bytes are, so everything that
//! gets fingerprinted goes through here.
//!
//! ## Determinism Guarantees
//!
//! - Struct fields serialize in declaration order
//! - Vectors serialize in index order
//! - Maps must be `BTreeMap`, never `HashMap`

use serde::Serialize;
use xxhash_rust::xxh64::xxh64;

/// Seed for every fingerprint.
pub const FINGERPRINT_SEED: u64 = 0;

/// Serialize a value to canonical JSON bytes.
///
/// Only used with types whose serialization cannot fail: plain structs,
/// strings, integers and `BTreeMap`s with string or integer keys.
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> Vec<u8> {
    serde_json::to_vec(value).expect("Canonical serialization failed")
}

/// xxh64 of the canonical bytes of `value`.
pub fn canonical_hash<T: Serialize>(value: &T) -> u64 {
    xxh64(&to_canonical_bytes(value), FINGERPRINT_SEED)
}

/// [`canonical_hash`] as 16 lowercase hex digits.
pub fn canonical_hash_hex<T: Serialize>(value: &T) -> String {
    format!("{:016x}", canonical_hash(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_map_insertion_order_does_not_matter() {
        let forward: BTreeMap<u32, &str> =
            [(48, "(way) gold"), (49, "(way) gold_alternative")].into();
        let mut backward = BTreeMap::new();
        backward.insert(49, "(way) gold_alternative");
        backward.insert(48, "(way) gold");

        assert_eq!(canonical_hash(&forward), canonical_hash(&backward));
    }

    #[test]
    fn test_hex_is_fixed_width() {
        let hex = canonical_hash_hex(&BTreeMap::<u32, String>::new());
        assert_eq!(hex.len(), 16);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_labels_change_hash() {
        let a: BTreeMap<u32, &str> = [(0, "(datatype) index")].into();
        let b: BTreeMap<u32, &str> = [(0, "(datatype) media")].into();
        assert_ne!(canonical_hash(&a), canonical_hash(&b));
    }
}
