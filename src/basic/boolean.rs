//! Serialization deserialization and merkleization for boolean values.

use alloc::vec::Vec;
use alloy_primitives::B256;

use crate::{
    Merkleize,
    SSZError::{self, *},
    SimpleDeserialize, SimpleSerialize, SszTypeInfo,
};

impl SimpleSerialize for bool {
    /// Serializes a boolean value as a single `0x00` or `0x01` byte.
    fn serialize(&self, buffer: &mut Vec<u8>) -> Result<usize, SSZError> {
        buffer.push(u8::from(*self));
        Ok(1)
    }
}

impl SimpleDeserialize for bool {
    /// Deserializes a boolean value. Any byte other than 0 or 1 is rejected.
    fn deserialize(data: &[u8]) -> Result<Self, SSZError> {
        if data.len() != 1 {
            return Err(InvalidLength {
                expected: 1,
                got: data.len(),
            });
        }
        match data[0] {
            1 => Ok(true),
            0 => Ok(false),
            byte => Err(InvalidBooleanByte(byte)),
        }
    }
}

impl SszTypeInfo for bool {
    fn is_fixed_size() -> bool {
        true
    }

    fn fixed_size() -> Option<usize> {
        Some(1)
    }

    ///Returns true since it is basic type.
    fn is_basic_type() -> bool {
        true
    }
}

impl Merkleize for bool {
    /// Calculates the hash tree root of a boolean value.
    fn hash_tree_root(&self) -> Result<B256, SSZError> {
        let mut hash = B256::default();
        if *self {
            hash[0] = 1;
        }
        Ok(hash)
    }
}
