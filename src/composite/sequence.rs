//! Encoding shared by homogeneous collections (`Vector` and `List`).

use crate::{
    BYTES_PER_LENGTH_OFFSET, Chunk, MAX_OFFSET, Merkleize, SSZError, SimpleDeserialize,
    SimpleSerialize, SszTypeInfo,
    composite::container::{read_offset, sanitize_offset},
    merkleization::{merkleize, pack},
};
use alloc::vec::Vec;
use alloy_primitives::B256;

/// Appends `items`. Variable-size elements get an offset table in front of their encodings.
pub(crate) fn serialize_items<T>(items: &[T], buffer: &mut Vec<u8>) -> Result<usize, SSZError>
where
    T: SimpleSerialize + SszTypeInfo,
{
    let start = buffer.len();
    if T::is_fixed_size() {
        for item in items {
            item.serialize(buffer)?;
        }
        return Ok(buffer.len() - start);
    }

    buffer.resize(start + items.len() * BYTES_PER_LENGTH_OFFSET, 0);
    for (i, item) in items.iter().enumerate() {
        let offset = buffer.len() - start;
        if offset > MAX_OFFSET {
            return Err(SSZError::OffsetOutOfBounds {
                offset,
                len: MAX_OFFSET,
            });
        }
        let slot = start + i * BYTES_PER_LENGTH_OFFSET;
        buffer[slot..slot + BYTES_PER_LENGTH_OFFSET].copy_from_slice(&(offset as u32).to_le_bytes());
        item.serialize(buffer)?;
    }
    Ok(buffer.len() - start)
}

/// Decodes a run of elements, at most `max` of them.
pub(crate) fn deserialize_items<T>(data: &[u8], max: usize) -> Result<Vec<T>, SSZError>
where
    T: SimpleDeserialize + SszTypeInfo,
{
    match T::fixed_size() {
        Some(size) => deserialize_fixed_items(data, size, max),
        None => deserialize_variable_items(data, max),
    }
}

fn deserialize_fixed_items<T>(data: &[u8], size: usize, max: usize) -> Result<Vec<T>, SSZError>
where
    T: SimpleDeserialize,
{
    if size == 0 || data.len() % size != 0 {
        return Err(SSZError::InvalidListLength {
            len: data.len(),
            elem_size: size,
        });
    }
    let count = data.len() / size;
    if count > max {
        return Err(SSZError::CapacityExceeded {
            limit: max,
            got: count,
        });
    }
    data.chunks_exact(size).map(T::deserialize).collect()
}

fn deserialize_variable_items<T>(data: &[u8], max: usize) -> Result<Vec<T>, SSZError>
where
    T: SimpleDeserialize,
{
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let first = read_offset(data)?;
    if first == 0 || first % BYTES_PER_LENGTH_OFFSET != 0 {
        return Err(SSZError::InvalidListOffset(first));
    }
    let count = first / BYTES_PER_LENGTH_OFFSET;
    if count > max {
        return Err(SSZError::CapacityExceeded {
            limit: max,
            got: count,
        });
    }
    if first > data.len() {
        return Err(SSZError::OffsetOutOfBounds {
            offset: first,
            len: data.len(),
        });
    }

    let mut offsets = Vec::with_capacity(count + 1);
    let mut previous = None;
    for i in 0..count {
        let offset = read_offset(&data[i * BYTES_PER_LENGTH_OFFSET..])?;
        let offset = sanitize_offset(offset, previous, data.len(), first)?;
        offsets.push(offset);
        previous = Some(offset);
    }
    offsets.push(data.len());

    offsets
        .windows(2)
        .map(|window| T::deserialize(&data[window[0]..window[1]]))
        .collect()
}

/// Leaves of `items`. Basic elements are packed, every other element contributes its own root.
///
/// An empty run of basic elements has no leaves, so the tree is all padding.
pub(crate) fn item_chunks<T>(items: &[T]) -> Result<Vec<Chunk>, SSZError>
where
    T: Merkleize + SimpleSerialize + SszTypeInfo,
{
    if T::is_basic_type() {
        let mut serialized = Vec::new();
        serialize_items(items, &mut serialized)?;
        if serialized.is_empty() {
            return Ok(Vec::new());
        }
        return Ok(pack(&serialized));
    }
    items
        .iter()
        .map(|item| item.hash_tree_root().map(|root| root.0))
        .collect()
}

/// Root of `items` in a tree sized for `limit` chunks.
pub(crate) fn merkleize_items<T>(items: &[T], limit: usize) -> Result<B256, SSZError>
where
    T: Merkleize + SimpleSerialize + SszTypeInfo,
{
    merkleize(&item_chunks(items)?, Some(limit))
}
