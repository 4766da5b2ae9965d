//! Serialization and deserialization for `Vector`, a collection of exactly `N` elements.

use crate::{
    Merkleize, SSZError, SimpleDeserialize, SimpleSerialize, SszTypeInfo,
    composite::sequence::{deserialize_items, merkleize_items, serialize_items},
    merkleization::{SSZType, chunk_count},
};
use alloc::vec::Vec;
use alloy_primitives::B256;
use core::ops::{Deref, DerefMut};

/// Exactly `N` elements of `T`.
///
/// Elements may be variable-size, in which case the encoding carries an offset table like a
/// container's.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vector<T, const N: usize> {
    elements: Vec<T>,
}

impl<T, const N: usize> Vector<T, N> {
    pub fn new(elements: Vec<T>) -> Result<Self, SSZError> {
        if elements.len() != N {
            return Err(SSZError::InvalidLength {
                expected: N,
                got: elements.len(),
            });
        }
        Ok(Self { elements })
    }

    pub fn into_inner(self) -> Vec<T> {
        self.elements
    }
}

impl<T: Default, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self {
            elements: core::iter::repeat_with(T::default).take(N).collect(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(elements: [T; N]) -> Self {
        Self {
            elements: elements.into(),
        }
    }
}

impl<T, const N: usize> TryFrom<Vec<T>> for Vector<T, N> {
    type Error = SSZError;

    fn try_from(elements: Vec<T>) -> Result<Self, Self::Error> {
        Self::new(elements)
    }
}

impl<T, const N: usize> Deref for Vector<T, N> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.elements
    }
}

impl<T, const N: usize> DerefMut for Vector<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.elements
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: SszTypeInfo, const N: usize> SszTypeInfo for Vector<T, N> {
    fn is_fixed_size() -> bool {
        T::is_fixed_size()
    }

    fn fixed_size() -> Option<usize> {
        T::fixed_size().map(|size| size * N)
    }
}

impl<T, const N: usize> SimpleSerialize for Vector<T, N>
where
    T: SimpleSerialize + SszTypeInfo,
{
    fn serialize(&self, buffer: &mut Vec<u8>) -> Result<usize, SSZError> {
        serialize_items(&self.elements, buffer)
    }
}

impl<T, const N: usize> SimpleDeserialize for Vector<T, N>
where
    T: SimpleDeserialize + SszTypeInfo,
{
    fn deserialize(data: &[u8]) -> Result<Self, SSZError> {
        if let Some(expected) = Self::fixed_size() {
            if data.len() != expected {
                return Err(SSZError::InvalidLength {
                    expected,
                    got: data.len(),
                });
            }
        }
        Self::new(deserialize_items(data, N)?)
    }
}

impl<T, const N: usize> Merkleize for Vector<T, N>
where
    T: Merkleize + SimpleSerialize + SszTypeInfo,
{
    /// Basic elements are packed into chunks, composite ones contribute their own roots. No
    /// length is mixed in.
    fn hash_tree_root(&self) -> Result<B256, SSZError> {
        merkleize_items(&self.elements, Self::chunk_count())
    }

    fn chunk_count() -> usize {
        match T::fixed_size() {
            Some(elem_size) if T::is_basic_type() => {
                chunk_count(SSZType::VectorBasic { elem_size, count: N })
            }
            _ => chunk_count(SSZType::VectorComposite { count: N }),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T, const N: usize> serde::Deserialize<'de> for Vector<T, N>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let elements = Vec::<T>::deserialize(deserializer)?;
        Self::new(elements).map_err(serde::de::Error::custom)
    }
}
