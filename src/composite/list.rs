//! Serialization, deserialization and merkleization for `List`, a collection of at most `N`
//! elements.

use crate::{
    Hasher, Merkleize, SSZError, SimpleDeserialize, SimpleSerialize, SszTypeInfo,
    composite::sequence::{deserialize_items, item_chunks, serialize_items},
    merkleization::{SSZType, chunk_count, merkleize_with_length},
};
use alloc::vec::Vec;
use alloy_primitives::B256;
use core::ops::{Deref, DerefMut};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct List<T, const N: usize> {
    elements: Vec<T>,
}

impl<T, const N: usize> List<T, N> {
    pub fn new(elements: Vec<T>) -> Result<Self, SSZError> {
        if elements.len() > N {
            return Err(SSZError::CapacityExceeded {
                limit: N,
                got: elements.len(),
            });
        }
        Ok(Self { elements })
    }

    pub fn push(&mut self, element: T) -> Result<(), SSZError> {
        if self.elements.len() >= N {
            return Err(SSZError::CapacityExceeded {
                limit: N,
                got: self.elements.len() + 1,
            });
        }
        self.elements.push(element);
        Ok(())
    }

    pub fn into_inner(self) -> Vec<T> {
        self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<T, const N: usize> Default for List<T, N> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
        }
    }
}

impl<T, const N: usize> TryFrom<Vec<T>> for List<T, N> {
    type Error = SSZError;

    fn try_from(elements: Vec<T>) -> Result<Self, Self::Error> {
        Self::new(elements)
    }
}

impl<T, const N: usize> Deref for List<T, N> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.elements
    }
}

impl<T, const N: usize> DerefMut for List<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.elements
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a List<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T, const N: usize> SszTypeInfo for List<T, N>
where
    T: SszTypeInfo,
{
    fn is_fixed_size() -> bool {
        false
    }

    fn fixed_size() -> Option<usize> {
        None
    }
}

impl<T, const N: usize> SimpleSerialize for List<T, N>
where
    T: SimpleSerialize + SszTypeInfo,
{
    fn serialize(&self, buffer: &mut Vec<u8>) -> Result<usize, SSZError> {
        serialize_items(&self.elements, buffer)
    }
}

impl<T, const N: usize> SimpleDeserialize for List<T, N>
where
    T: SimpleDeserialize + SszTypeInfo,
{
    fn deserialize(data: &[u8]) -> Result<Self, SSZError> {
        Ok(Self {
            elements: deserialize_items(data, N)?,
        })
    }
}

impl<T, const N: usize> Merkleize for List<T, N>
where
    T: Merkleize + SimpleSerialize + SszTypeInfo,
{
    /// Root of a tree sized for `N` elements, mixed with the actual length.
    fn hash_tree_root(&self) -> Result<B256, SSZError> {
        merkleize_with_length(
            Hasher::global(),
            &item_chunks(&self.elements)?,
            Self::chunk_count(),
            self.len(),
        )
    }

    fn chunk_count() -> usize {
        match T::fixed_size() {
            Some(elem_size) if T::is_basic_type() => {
                chunk_count(SSZType::ListBasic { elem_size, limit: N })
            }
            _ => chunk_count(SSZType::ListComposite { limit: N }),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T, const N: usize> serde::Deserialize<'de> for List<T, N>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let elements = Vec::<T>::deserialize(deserializer)?;
        Self::new(elements).map_err(serde::de::Error::custom)
    }
}
