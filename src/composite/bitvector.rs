// ! Serialization and deserialization for BitVector

use alloc::{vec, vec::Vec};
use alloy_primitives::B256;
use core::{fmt, str::FromStr};

use crate::{
    BITS_PER_BYTE, BITS_PER_CHUNK, Merkleize, SSZError, SimpleDeserialize, SimpleSerialize,
    SszTypeInfo,
    composite::hex::{decode_prefixed, fmt_prefixed},
    merkleization::{merkleize, pack_bits},
};

/// Packs `bits` LSB-first. With `delimiter` an extra set bit follows the last data bit.
pub(crate) fn pack_bools(bits: &[bool], delimiter: bool) -> Vec<u8> {
    let total = bits.len() + usize::from(delimiter);
    let mut bytes = vec![0u8; total.div_ceil(BITS_PER_BYTE)];
    for (i, &bit) in bits.iter().enumerate() {
        if bit {
            bytes[i / BITS_PER_BYTE] |= 1 << (i % BITS_PER_BYTE);
        }
    }
    if delimiter {
        bytes[bits.len() / BITS_PER_BYTE] |= 1 << (bits.len() % BITS_PER_BYTE);
    }
    bytes
}

/// Reads the first `len` bits of `bytes`, LSB-first.
pub(crate) fn unpack_bools(bytes: &[u8], len: usize) -> Vec<bool> {
    (0..len)
        .map(|i| (bytes[i / BITS_PER_BYTE] >> (i % BITS_PER_BYTE)) & 1 == 1)
        .collect()
}

/// A fixed-length sequence of `N` bits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitVector<const N: usize> {
    bits: Vec<bool>,
}

impl<const N: usize> Default for BitVector<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> BitVector<N> {
    /// All bits cleared.
    pub fn new() -> Self {
        Self {
            bits: vec![false; N],
        }
    }

    pub fn from_bools(bits: &[bool]) -> Result<Self, SSZError> {
        if bits.len() != N {
            return Err(SSZError::InvalidLength {
                expected: N,
                got: bits.len(),
            });
        }
        Ok(Self {
            bits: bits.to_vec(),
        })
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    pub fn set(&mut self, index: usize, value: bool) -> Result<(), SSZError> {
        let bit = self.bits.get_mut(index).ok_or(SSZError::CapacityExceeded {
            limit: N,
            got: index + 1,
        })?;
        *bit = value;
        Ok(())
    }

    pub fn len(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    pub fn num_set_bits(&self) -> usize {
        self.bits.iter().filter(|bit| **bit).count()
    }

    /// Parses the `0x`-hex form of the serialized bytes.
    ///
    /// A string covering fewer bytes than the vector is zero-filled at the end.
    pub fn from_hex_str(s: &str) -> Result<Self, SSZError> {
        let mut bytes = decode_prefixed(s)?;
        let byte_len = N.div_ceil(BITS_PER_BYTE);
        if bytes.len() > byte_len {
            return Err(SSZError::CapacityExceeded {
                limit: byte_len,
                got: bytes.len(),
            });
        }
        bytes.resize(byte_len, 0);
        Self::deserialize(&bytes)
    }
}

impl<const N: usize> FromStr for BitVector<N> {
    type Err = SSZError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_str(s)
    }
}

impl<const N: usize> fmt::Display for BitVector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_prefixed(&pack_bools(&self.bits, false), f)
    }
}

impl<const N: usize> SszTypeInfo for BitVector<N> {
    /// Indicates that the bit vector is fixed-size.
    fn is_fixed_size() -> bool {
        true
    }

    /// Returns the fixed size of the bit vector in bytes.
    fn fixed_size() -> Option<usize> {
        Some(N.div_ceil(BITS_PER_BYTE))
    }
}

impl<const N: usize> SimpleSerialize for BitVector<N> {
    /// Serializes a bit vector.
    fn serialize(&self, buffer: &mut Vec<u8>) -> Result<usize, SSZError> {
        let bytes = pack_bools(&self.bits, false);
        buffer.extend_from_slice(&bytes);
        Ok(bytes.len())
    }
}

impl<const N: usize> SimpleDeserialize for BitVector<N> {
    /// Deserializes a bit vector. Padding bits past `N` must be zero.
    fn deserialize(data: &[u8]) -> Result<Self, SSZError> {
        let expected_bytes = N.div_ceil(BITS_PER_BYTE);
        if data.len() != expected_bytes {
            return Err(SSZError::InvalidLength {
                expected: expected_bytes,
                got: data.len(),
            });
        }

        if N % BITS_PER_BYTE != 0 && data[expected_bytes - 1] >> (N % BITS_PER_BYTE) != 0 {
            return Err(SSZError::InvalidBitvector { len: N });
        }

        Ok(Self {
            bits: unpack_bools(data, N),
        })
    }
}

/// implements `hash_tree_root` for BitVector
impl<const N: usize> Merkleize for BitVector<N> {
    fn hash_tree_root(&self) -> Result<B256, SSZError> {
        let bytes = pack_bools(&self.bits, false);
        merkleize(&pack_bits(&bytes, N), Some(Self::chunk_count()))
    }

    fn chunk_count() -> usize {
        N.div_ceil(BITS_PER_CHUNK)
    }
}

#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for BitVector<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        crate::composite::hex::serde_hex::serialize(self, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: usize> serde::Deserialize<'de> for BitVector<N> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        crate::composite::hex::serde_hex::deserialize(deserializer)
    }
}
