// ! Serialization and deserialization for bitlist

use alloc::vec::Vec;
use alloy_primitives::B256;
use core::{fmt, str::FromStr};

use crate::{
    BITS_PER_BYTE, BITS_PER_CHUNK, Hasher, Merkleize, SSZError, SimpleDeserialize,
    SimpleSerialize, SszTypeInfo,
    composite::{
        bitvector::{pack_bools, unpack_bools},
        hex::{decode_prefixed, fmt_prefixed},
    },
    merkleization::{merkleize_with_length, pack_bits},
};

/// A sequence of at most `N` bits. The length is carried by a delimiter bit on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitList<const N: usize> {
    bits: Vec<bool>,
}

impl<const N: usize> Default for BitList<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> TryFrom<&[bool]> for BitList<N> {
    type Error = SSZError;

    fn try_from(slice: &[bool]) -> Result<Self, Self::Error> {
        BitList::from_vec(slice.to_vec())
    }
}

impl<const N: usize> BitList<N> {
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// All-false bitlist of length `len`.
    pub fn with_len(len: usize) -> Result<Self, SSZError> {
        Self::from_vec(alloc::vec![false; len])
    }

    pub fn from_vec(bits: Vec<bool>) -> Result<Self, SSZError> {
        if bits.len() > N {
            return Err(SSZError::CapacityExceeded {
                limit: N,
                got: bits.len(),
            });
        }
        Ok(Self { bits })
    }

    pub fn from_bools(bits: &[bool]) -> Result<Self, SSZError> {
        Self::try_from(bits)
    }

    pub fn push(&mut self, bit: bool) -> Result<(), SSZError> {
        if self.bits.len() >= N {
            return Err(SSZError::CapacityExceeded {
                limit: N,
                got: self.bits.len() + 1,
            });
        }
        self.bits.push(bit);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    pub fn set(&mut self, index: usize, value: bool) -> Result<(), SSZError> {
        let len = self.bits.len();
        let bit = self.bits.get_mut(index).ok_or(SSZError::CapacityExceeded {
            limit: len,
            got: index + 1,
        })?;
        *bit = value;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    pub fn num_set_bits(&self) -> usize {
        self.bits.iter().filter(|bit| **bit).count()
    }

    /// Parses the `0x`-hex form of the serialized bytes, delimiter included.
    pub fn from_hex_str(s: &str) -> Result<Self, SSZError> {
        Self::deserialize(&decode_prefixed(s)?)
    }
}

impl<const N: usize> FromStr for BitList<N> {
    type Err = SSZError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_str(s)
    }
}

impl<const N: usize> fmt::Display for BitList<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_prefixed(&pack_bools(&self.bits, true), f)
    }
}

impl<const N: usize> SszTypeInfo for BitList<N> {
    fn is_fixed_size() -> bool {
        false
    }

    fn fixed_size() -> Option<usize> {
        None
    }
}

impl<const N: usize> SimpleSerialize for BitList<N> {
    /// Serializes a bit list, appending the delimiter bit after the data bits.
    fn serialize(&self, buffer: &mut Vec<u8>) -> Result<usize, SSZError> {
        if self.bits.len() > N {
            return Err(SSZError::CapacityExceeded {
                limit: N,
                got: self.bits.len(),
            });
        }
        let bytes = pack_bools(&self.bits, true);
        buffer.extend_from_slice(&bytes);
        Ok(bytes.len())
    }
}

impl<const N: usize> SimpleDeserialize for BitList<N> {
    /// Deserializes a bit list. The highest set bit of the last byte is the delimiter.
    fn deserialize(data: &[u8]) -> Result<Self, SSZError> {
        let last = *data.last().ok_or(SSZError::ExpectedFurtherInput {
            expected: 1,
            got: 0,
        })?;
        if last == 0 {
            return Err(SSZError::ExpectedDelimiterBit);
        }

        let delimiter = (BITS_PER_BYTE - 1) - last.leading_zeros() as usize;
        let len = (data.len() - 1) * BITS_PER_BYTE + delimiter;
        if len > N {
            return Err(SSZError::CapacityExceeded { limit: N, got: len });
        }

        Ok(Self {
            bits: unpack_bools(data, len),
        })
    }
}

impl<const N: usize> Merkleize for BitList<N> {
    /// Root of the data bits padded to `N`, mixed with the bit length.
    fn hash_tree_root(&self) -> Result<B256, SSZError> {
        let chunks = if self.bits.is_empty() {
            Vec::new()
        } else {
            pack_bits(&pack_bools(&self.bits, false), self.bits.len())
        };
        merkleize_with_length(
            Hasher::global(),
            &chunks,
            Self::chunk_count(),
            self.bits.len(),
        )
    }

    fn chunk_count() -> usize {
        N.div_ceil(BITS_PER_CHUNK)
    }
}

#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for BitList<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        crate::composite::hex::serde_hex::serialize(self, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: usize> serde::Deserialize<'de> for BitList<N> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        crate::composite::hex::serde_hex::deserialize(deserializer)
    }
}
