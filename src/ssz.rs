//! This module provides a simple serialization and deserialization mechanism for data structures.

use crate::{BYTES_PER_LENGTH_OFFSET, SSZError};
use alloc::vec::Vec;
use alloy_primitives::B256;

/// The `SimpleSerialize` trait defines methods for serializing data structures
pub trait SimpleSerialize {
    /// Appends the serialized data structure to `buffer`, returning the number of bytes written.
    fn serialize(&self, buffer: &mut Vec<u8>) -> Result<usize, SSZError>;

    /// Serializes the data structure into a fresh byte vector.
    fn to_ssz_bytes(&self) -> Result<Vec<u8>, SSZError> {
        let mut buffer = Vec::new();
        self.serialize(&mut buffer)?;
        Ok(buffer)
    }
}

/// The `SimpleDeserialize` trait defines methods for deserializing data structures
pub trait SimpleDeserialize: Sized {
    /// Deserializes the data structure from a byte slice.
    ///
    /// The slice must hold exactly one encoding of `Self`, trailing bytes are an error.
    fn deserialize(data: &[u8]) -> Result<Self, SSZError>;
}

/// The `SszTypeInfo` trait provides information about the size characteristics of a type.
pub trait SszTypeInfo {
    /// Returns true if every value of the type serializes to the same number of bytes.
    fn is_fixed_size() -> bool;
    /// If fixed-size, returns the size in bytes.
    /// If None, then it's variable-size (e.g. lists, bitlists).
    fn fixed_size() -> Option<usize>;
    /// Returns true if this type is a basic type (e.g. u8, u16, bool).
    fn is_basic_type() -> bool {
        false
    }
}

/// Merkleization trait for SSZ types
pub trait Merkleize {
    /// Calculate the hash tree root of this value
    fn hash_tree_root(&self) -> Result<B256, SSZError>;

    /// Number of leaf chunks the type's Merkle tree is sized for.
    fn chunk_count() -> usize
    where
        Self: Sized,
    {
        1 // Default for basic types
    }
}

/// Number of bytes `T` occupies in the fixed region of an enclosing composite: its own size when
/// fixed, an offset slot otherwise.
pub fn ssz_fixed_len<T: SszTypeInfo>() -> usize {
    T::fixed_size().unwrap_or(BYTES_PER_LENGTH_OFFSET)
}
