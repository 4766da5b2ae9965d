//! Serialization, deserialization and merkleization for uint values.

use crate::{BYTES_PER_CHUNK, Merkleize, SSZError, SimpleDeserialize, SimpleSerialize, SszTypeInfo};
use alloc::vec::Vec;
use alloy_primitives::{B256, U256};

/// Decodes exactly `N` bytes into an array, rejecting any other length.
fn exact_bytes<const N: usize>(data: &[u8]) -> Result<[u8; N], SSZError> {
    data.try_into().map_err(|_| SSZError::InvalidLength {
        expected: N,
        got: data.len(),
    })
}

macro_rules! impl_uint {
    ($type:ty, $bytes:expr) => {
        impl SimpleSerialize for $type {
            /// Writes the little-endian encoding.
            fn serialize(&self, buffer: &mut Vec<u8>) -> Result<usize, SSZError> {
                buffer.extend_from_slice(&self.to_le_bytes());
                Ok($bytes)
            }
        }

        impl SimpleDeserialize for $type {
            /// Reads exactly the type's width in little-endian order.
            fn deserialize(data: &[u8]) -> Result<Self, SSZError> {
                Ok(Self::from_le_bytes(exact_bytes::<$bytes>(data)?))
            }
        }

        impl SszTypeInfo for $type {
            fn is_fixed_size() -> bool {
                true
            }

            fn fixed_size() -> Option<usize> {
                Some($bytes)
            }

            fn is_basic_type() -> bool {
                true
            }
        }

        impl Merkleize for $type {
            /// The value packed into the low bytes of a single chunk.
            fn hash_tree_root(&self) -> Result<B256, SSZError> {
                let mut buf = [0u8; BYTES_PER_CHUNK];
                buf[..$bytes].copy_from_slice(&self.to_le_bytes());
                Ok(B256::from(buf))
            }
        }
    };
}

impl_uint!(u8, 1);
impl_uint!(u16, 2);
impl_uint!(u32, 4);
impl_uint!(u64, 8);
impl_uint!(u128, 16);

impl SimpleSerialize for U256 {
    fn serialize(&self, buffer: &mut Vec<u8>) -> Result<usize, SSZError> {
        buffer.extend_from_slice(&self.to_le_bytes::<BYTES_PER_CHUNK>());
        Ok(BYTES_PER_CHUNK)
    }
}

impl SimpleDeserialize for U256 {
    fn deserialize(data: &[u8]) -> Result<Self, SSZError> {
        Ok(U256::from_le_bytes(exact_bytes::<BYTES_PER_CHUNK>(data)?))
    }
}

impl SszTypeInfo for U256 {
    fn is_fixed_size() -> bool {
        true
    }

    fn fixed_size() -> Option<usize> {
        Some(BYTES_PER_CHUNK)
    }

    fn is_basic_type() -> bool {
        true
    }
}

impl Merkleize for U256 {
    /// A uint256 fills its chunk exactly.
    fn hash_tree_root(&self) -> Result<B256, SSZError> {
        Ok(B256::from(self.to_le_bytes::<BYTES_PER_CHUNK>()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloy_primitives::hex;

    #[test]
    fn test_uint_serialize() {
        assert_eq!(42u8.to_ssz_bytes(), Ok(vec![42]));
        assert_eq!(300u16.to_ssz_bytes(), Ok(vec![44, 1]));
        assert_eq!(0x10203040u32.to_ssz_bytes(), Ok(vec![0x40, 0x30, 0x20, 0x10]));
        assert_eq!(
            0x0102030405060708u64.to_ssz_bytes(),
            Ok(vec![8, 7, 6, 5, 4, 3, 2, 1])
        );
        assert_eq!(
            U256::from(65536).to_ssz_bytes().unwrap(),
            hex!("0000010000000000000000000000000000000000000000000000000000000000")
        );
    }

    #[test]
    fn test_uint_serialize_appends() {
        let mut buffer = vec![0xaa];
        assert_eq!(0x0102u16.serialize(&mut buffer), Ok(2));
        assert_eq!(buffer, vec![0xaa, 0x02, 0x01]);
    }

    #[test]
    fn test_uint_deserialize() {
        assert_eq!(u8::deserialize(&[42]), Ok(42));
        assert_eq!(u16::deserialize(&[44, 1]), Ok(300));
        assert_eq!(u32::deserialize(&[0x40, 0x30, 0x20, 0x10]), Ok(0x10203040));
        assert_eq!(u64::deserialize(&[0xff; 8]), Ok(u64::MAX));
        assert_eq!(U256::deserialize(&[0xffu8; 32]), Ok(U256::MAX));
    }

    #[test]
    fn test_uint_deserialize_wrong_length() {
        assert_eq!(
            u8::deserialize(&[0, 0]),
            Err(SSZError::InvalidLength { expected: 1, got: 2 })
        );
        assert_eq!(
            u32::deserialize(&[0, 0, 0]),
            Err(SSZError::InvalidLength { expected: 4, got: 3 })
        );
        assert!(u64::deserialize(&[]).is_err());
        assert!(U256::deserialize(&[0; 31]).is_err());
    }

    #[test]
    fn round_trip_uint() {
        for value in [0u64, 1, 255, 256, 65535, 65536, 4294967295, u64::MAX] {
            let serialized = value.to_ssz_bytes().unwrap();
            assert_eq!(u64::deserialize(&serialized), Ok(value));
        }
    }

    #[test]
    fn test_uint_type_info() {
        assert_eq!(u16::fixed_size(), Some(2));
        assert_eq!(u128::fixed_size(), Some(16));
        assert!(u64::is_basic_type());
        assert!(U256::is_fixed_size());
    }

    #[test]
    fn test_uint_hash_tree_root() {
        assert_eq!(
            0xFFu8.hash_tree_root().unwrap(),
            B256::from(hex!("ff00000000000000000000000000000000000000000000000000000000000000"))
        );
        assert_eq!(
            0x0102030405060708u64.hash_tree_root().unwrap(),
            B256::from(hex!("0807060504030201000000000000000000000000000000000000000000000000"))
        );
        assert_eq!(
            U256::MAX.hash_tree_root().unwrap(),
            B256::from(hex!("ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"))
        );
        assert_eq!(0u64.hash_tree_root().unwrap(), B256::ZERO);
    }
}
