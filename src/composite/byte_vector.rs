//! Fixed-length byte strings.

use crate::{
    BYTES_PER_CHUNK, Merkleize, SSZError, SimpleDeserialize, SimpleSerialize, SszTypeInfo,
    composite::hex::{decode_prefixed, fmt_prefixed},
    merkleization::{merkleize, pack},
};
use alloc::vec::Vec;
use alloy_primitives::{B256, FixedBytes};
use core::{
    fmt,
    ops::{BitXor, BitXorAssign, Deref},
    str::FromStr,
};

/// A byte string of exactly `N` bytes, serialized as-is.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ByteVector<const N: usize>([u8; N]);

pub type Bytes1 = ByteVector<1>;
pub type Bytes4 = ByteVector<4>;
pub type Bytes8 = ByteVector<8>;
pub type Bytes20 = ByteVector<20>;
pub type Bytes32 = ByteVector<32>;
pub type Bytes48 = ByteVector<48>;
pub type Bytes96 = ByteVector<96>;

impl<const N: usize> ByteVector<N> {
    /// All-zero bytes.
    pub const fn zero() -> Self {
        Self([0u8; N])
    }

    pub const fn from_array(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    pub fn into_array(self) -> [u8; N] {
        self.0
    }

    /// Parses a `0x`-prefixed hex string.
    ///
    /// Digits fill the buffer from the first byte, any bytes not covered stay zero. More digits
    /// than fit in `N` bytes are rejected.
    pub fn from_hex_str(s: &str) -> Result<Self, SSZError> {
        let decoded = decode_prefixed(s)?;
        if decoded.len() > N {
            return Err(SSZError::CapacityExceeded {
                limit: N,
                got: decoded.len(),
            });
        }
        let mut bytes = [0u8; N];
        bytes[..decoded.len()].copy_from_slice(&decoded);
        Ok(Self(bytes))
    }

    /// Appends `other`, producing an `L`-byte vector. `L` must be `N + M`.
    pub fn concat<const M: usize, const L: usize>(&self, other: &ByteVector<M>) -> ByteVector<L> {
        const { assert!(L == N + M, "concatenated length must equal the sum of both lengths") };
        let mut bytes = [0u8; L];
        bytes[..N].copy_from_slice(&self.0);
        bytes[N..].copy_from_slice(&other.0);
        ByteVector(bytes)
    }
}

impl<const N: usize> Default for ByteVector<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> From<[u8; N]> for ByteVector<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> From<ByteVector<N>> for [u8; N] {
    fn from(value: ByteVector<N>) -> Self {
        value.0
    }
}

impl<const N: usize> From<FixedBytes<N>> for ByteVector<N> {
    fn from(value: FixedBytes<N>) -> Self {
        Self(value.0)
    }
}

impl<const N: usize> From<ByteVector<N>> for FixedBytes<N> {
    fn from(value: ByteVector<N>) -> Self {
        FixedBytes(value.0)
    }
}

impl<const N: usize> TryFrom<&[u8]> for ByteVector<N> {
    type Error = SSZError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        slice.try_into().map(Self).map_err(|_| SSZError::InvalidLength {
            expected: N,
            got: slice.len(),
        })
    }
}

macro_rules! impl_from_uint {
    ($type:ty, $to:ident, $width:expr) => {
        impl<const N: usize> From<$type> for ByteVector<N> {
            /// Little-endian fill from the first byte.
            fn from(value: $type) -> Self {
                const { assert!($width <= N, "integer is wider than the byte vector") };
                let mut bytes = [0u8; N];
                bytes[..$width].copy_from_slice(&value.to_le_bytes());
                Self(bytes)
            }
        }

        impl ByteVector<$width> {
            pub const fn $to(&self) -> $type {
                <$type>::from_le_bytes(self.0)
            }
        }
    };
}

impl_from_uint!(u8, to_u8_le, 1);
impl_from_uint!(u16, to_u16_le, 2);
impl_from_uint!(u32, to_u32_le, 4);
impl_from_uint!(u64, to_u64_le, 8);

impl<const N: usize> Deref for ByteVector<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> AsRef<[u8]> for ByteVector<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> BitXor for ByteVector<N> {
    type Output = Self;

    fn bitxor(mut self, rhs: Self) -> Self::Output {
        self ^= rhs;
        self
    }
}

impl<const N: usize> BitXorAssign for ByteVector<N> {
    fn bitxor_assign(&mut self, rhs: Self) {
        for (byte, other) in self.0.iter_mut().zip(rhs.0) {
            *byte ^= other;
        }
    }
}

impl<const N: usize> FromStr for ByteVector<N> {
    type Err = SSZError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_str(s)
    }
}

impl<const N: usize> fmt::Display for ByteVector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_prefixed(&self.0, f)
    }
}

impl<const N: usize> fmt::Debug for ByteVector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_prefixed(&self.0, f)
    }
}

impl<const N: usize> SszTypeInfo for ByteVector<N> {
    fn is_fixed_size() -> bool {
        true
    }

    fn fixed_size() -> Option<usize> {
        Some(N)
    }
}

impl<const N: usize> SimpleSerialize for ByteVector<N> {
    /// The bytes are already in wire format.
    fn serialize(&self, buffer: &mut Vec<u8>) -> Result<usize, SSZError> {
        buffer.extend_from_slice(&self.0);
        Ok(N)
    }
}

impl<const N: usize> SimpleDeserialize for ByteVector<N> {
    fn deserialize(data: &[u8]) -> Result<Self, SSZError> {
        Self::try_from(data)
    }
}

impl<const N: usize> Merkleize for ByteVector<N> {
    fn hash_tree_root(&self) -> Result<B256, SSZError> {
        if N == BYTES_PER_CHUNK {
            return Ok(B256::from_slice(&self.0));
        }
        merkleize(&pack(&self.0), Some(Self::chunk_count()))
    }

    fn chunk_count() -> usize {
        N.div_ceil(BYTES_PER_CHUNK)
    }
}

#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for ByteVector<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        crate::composite::hex::serde_hex::serialize(self, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: usize> serde::Deserialize<'de> for ByteVector<N> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        crate::composite::hex::serde_hex::deserialize(deserializer)
    }
}
