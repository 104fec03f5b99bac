//! Canonical serialization for deterministic fingerprints.
//!
//! Analysis outputs and configuration are fingerprinted by hashing their
//! canonical JSON form, so equal content always yields an equal hash.
//!
//! ## Determinism Guarantees
//!
//! - Stable field order: struct fields serialize in declaration order
//! - Stable Vec order: vectors serialize in index order
//! - No HashMap allowed: use BTreeMap for maps in hashed data

use serde::Serialize;
use xxhash_rust::xxh64::xxh64;

/// Serialize a value to canonical JSON bytes for hashing.
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> Vec<u8> {
    serde_json::to_vec(value).expect("Canonical serialization failed")
}

/// Compute the canonical hash of a serializable value.
pub fn canonical_hash<T: Serialize>(value: &T) -> u64 {
    let bytes = to_canonical_bytes(value);
    xxh64(&bytes, 0)
}

/// Compute the canonical hash and return it as a hex string.
pub fn canonical_hash_hex<T: Serialize>(value: &T) -> String {
    format!("{:016x}", canonical_hash(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct TestStruct {
        txid: String,
        combinations: u64,
    }

    #[test]
    fn test_determinism() {
        let s = TestStruct {
            txid: "00ff".to_string(),
            combinations: 2,
        };

        let h1 = canonical_hash(&s);
        let h2 = canonical_hash(&s);
        assert_eq!(h1, h2);
    }

    #[test]
    fn test_content_sensitivity() {
        let a = TestStruct {
            txid: "00ff".to_string(),
            combinations: 2,
        };
        let b = TestStruct {
            txid: "00ff".to_string(),
            combinations: 3,
        };
        assert_ne!(canonical_hash(&a), canonical_hash(&b));
    }
}
