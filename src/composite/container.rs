//! Serializes and deserializes containers.
//!
//! A container is an ordered list of heterogeneous fields. Fixed-size fields are written inline,
//! each variable-size field gets a 4-byte offset in the fixed region and its bytes are appended
//! after it. Structs normally get their impls from [`ssz_container!`](crate::ssz_container), which
//! drives the [`ContainerEncoder`] and [`ContainerDecoderBuilder`] defined here.

use crate::{
    BYTES_PER_LENGTH_OFFSET, SSZError, SimpleDeserialize, SimpleSerialize, SszTypeInfo,
};
use alloc::vec::Vec;
use smallvec::{SmallVec, smallvec};

/// Reads a little-endian offset from the first four bytes of `bytes`.
pub fn read_offset(bytes: &[u8]) -> Result<usize, SSZError> {
    let slot: [u8; BYTES_PER_LENGTH_OFFSET] = bytes
        .get(..BYTES_PER_LENGTH_OFFSET)
        .and_then(|slot| slot.try_into().ok())
        .ok_or(SSZError::ExpectedFurtherInput {
            expected: BYTES_PER_LENGTH_OFFSET,
            got: bytes.len(),
        })?;
    Ok(u32::from_le_bytes(slot) as usize)
}

/// Checks an offset read from an encoding of `num_bytes` bytes whose fixed region is
/// `num_fixed_bytes` long.
///
/// The first offset (`previous == None`) must point exactly at the end of the fixed region, every
/// later one must be at least its predecessor and none may exceed `num_bytes`.
pub fn sanitize_offset(
    offset: usize,
    previous: Option<usize>,
    num_bytes: usize,
    num_fixed_bytes: usize,
) -> Result<usize, SSZError> {
    let result = if offset < num_fixed_bytes {
        Err(SSZError::OffsetIntoFixedPortion {
            offset,
            fixed_len: num_fixed_bytes,
        })
    } else if previous.is_none() && offset != num_fixed_bytes {
        Err(SSZError::OffsetSkipsVariableBytes {
            offset,
            fixed_len: num_fixed_bytes,
        })
    } else if offset > num_bytes {
        Err(SSZError::OffsetOutOfBounds {
            offset,
            len: num_bytes,
        })
    } else {
        match previous {
            Some(previous) if previous > offset => {
                Err(SSZError::OffsetsAreDecreasing { previous, offset })
            }
            _ => Ok(offset),
        }
    };

    if let Err(err) = &result {
        tracing::debug!(offset, ?previous, num_bytes, %err, "rejected offset");
    }
    result
}

/// Writes a container field by field.
pub struct ContainerEncoder<'a> {
    buffer: &'a mut Vec<u8>,
    start: usize,
    offset: usize,
    variable_bytes: Vec<u8>,
}

impl<'a> ContainerEncoder<'a> {
    /// Starts an encoding whose fixed region, offsets included, is `num_fixed_bytes` long.
    pub fn new(buffer: &'a mut Vec<u8>, num_fixed_bytes: usize) -> Self {
        let start = buffer.len();
        buffer.reserve(num_fixed_bytes);
        Self {
            buffer,
            start,
            offset: num_fixed_bytes,
            variable_bytes: Vec::new(),
        }
    }

    /// Writes the next field, inline or as an offset to its variable part.
    pub fn append<T: SimpleSerialize + SszTypeInfo>(&mut self, item: &T) -> Result<(), SSZError> {
        if T::is_fixed_size() {
            item.serialize(self.buffer)?;
        } else {
            let offset = u32::try_from(self.offset).map_err(|_| SSZError::OffsetOutOfBounds {
                offset: self.offset,
                len: crate::MAX_OFFSET,
            })?;
            self.buffer.extend_from_slice(&offset.to_le_bytes());
            self.offset += item.serialize(&mut self.variable_bytes)?;
        }
        Ok(())
    }

    /// Appends the variable parts and returns the number of bytes written.
    pub fn finalize(self) -> Result<usize, SSZError> {
        self.buffer.extend_from_slice(&self.variable_bytes);
        Ok(self.buffer.len() - self.start)
    }
}

/// Location of a variable-size field's offset slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Offset {
    position: usize,
    offset: usize,
}

/// Splits a container encoding into per-field byte slices.
///
/// Register every field type in declaration order, then [`build`](Self::build) validates the
/// offsets and yields a [`ContainerDecoder`].
pub struct ContainerDecoderBuilder<'a> {
    bytes: &'a [u8],
    items: SmallVec<[&'a [u8]; 8]>,
    offsets: SmallVec<[Offset; 8]>,
    items_index: usize,
}

impl<'a> ContainerDecoderBuilder<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            items: smallvec![],
            offsets: smallvec![],
            items_index: 0,
        }
    }

    /// Claims the next field's bytes in the fixed region.
    pub fn register_type<T: SszTypeInfo>(&mut self) -> Result<(), SSZError> {
        let len = T::fixed_size().unwrap_or(BYTES_PER_LENGTH_OFFSET);
        let end = self.items_index + len;
        let slot = self
            .bytes
            .get(self.items_index..end)
            .ok_or(SSZError::ExpectedFurtherInput {
                expected: end,
                got: self.bytes.len(),
            })?;

        if T::is_fixed_size() {
            self.items.push(slot);
        } else {
            self.offsets.push(Offset {
                position: self.items.len(),
                offset: read_offset(slot)?,
            });
            // Filled in by `build` once every offset is known.
            self.items.push(&[]);
        }
        self.items_index = end;
        Ok(())
    }

    /// Validates the offset table and slices out each variable part.
    pub fn build(mut self) -> Result<ContainerDecoder<'a>, SSZError> {
        let bytes = self.bytes;
        let num_bytes = bytes.len();
        if self.offsets.is_empty() {
            if num_bytes != self.items_index {
                return Err(SSZError::InvalidLength {
                    expected: self.items_index,
                    got: num_bytes,
                });
            }
        } else {
            let mut previous = None;
            for entry in &self.offsets {
                sanitize_offset(entry.offset, previous, num_bytes, self.items_index)?;
                previous = Some(entry.offset);
            }

            let ends = self
                .offsets
                .iter()
                .skip(1)
                .map(|next| next.offset)
                .chain(core::iter::once(num_bytes));
            for (entry, end) in self.offsets.iter().zip(ends) {
                self.items[entry.position] = &bytes[entry.offset..end];
            }
        }

        Ok(ContainerDecoder {
            items: self.items,
            index: 0,
        })
    }
}

/// Hands out validated field slices in declaration order.
pub struct ContainerDecoder<'a> {
    items: SmallVec<[&'a [u8]; 8]>,
    index: usize,
}

impl ContainerDecoder<'_> {
    /// Decodes the next field.
    pub fn decode_next<T: SimpleDeserialize>(&mut self) -> Result<T, SSZError> {
        let bytes = self
            .items
            .get(self.index)
            .ok_or(SSZError::ExpectedFurtherInput {
                expected: self.index + 1,
                got: self.items.len(),
            })?;
        self.index += 1;
        T::deserialize(bytes)
    }
}

/// Declares a struct and implements the SSZ traits for it as a container.
///
/// Fields are encoded and merkleized in declaration order.
///
/// ```
/// use beacon_ssz::{List, Merkleize, SimpleDeserialize, SimpleSerialize, ssz_container};
///
/// ssz_container! {
///     #[derive(Debug, Clone, PartialEq, Eq, Default)]
///     pub struct Message {
///         pub nonce: u64,
///         pub payload: List<u8, 32>,
///     }
/// }
///
/// let message = Message { nonce: 1, payload: List::new(vec![0xab]).unwrap() };
/// let bytes = message.to_ssz_bytes().unwrap();
/// assert_eq!(bytes, [1, 0, 0, 0, 0, 0, 0, 0, 12, 0, 0, 0, 0xab]);
/// assert_eq!(Message::deserialize(&bytes).unwrap(), message);
/// assert!(message.hash_tree_root().is_ok());
/// ```
#[macro_export]
macro_rules! ssz_container {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )+
        }

        impl $crate::SszTypeInfo for $name {
            fn is_fixed_size() -> bool {
                true $(&& <$ty as $crate::SszTypeInfo>::is_fixed_size())+
            }

            fn fixed_size() -> Option<usize> {
                if <Self as $crate::SszTypeInfo>::is_fixed_size() {
                    Some(0 $(+ $crate::ssz_fixed_len::<$ty>())+)
                } else {
                    None
                }
            }
        }

        impl $crate::SimpleSerialize for $name {
            fn serialize(
                &self,
                buffer: &mut $crate::__private::Vec<u8>,
            ) -> Result<usize, $crate::SSZError> {
                let num_fixed_bytes = 0 $(+ $crate::ssz_fixed_len::<$ty>())+;
                let mut encoder = $crate::ContainerEncoder::new(buffer, num_fixed_bytes);
                $(encoder.append(&self.$field)?;)+
                encoder.finalize()
            }
        }

        impl $crate::SimpleDeserialize for $name {
            fn deserialize(data: &[u8]) -> Result<Self, $crate::SSZError> {
                let mut builder = $crate::ContainerDecoderBuilder::new(data);
                $(builder.register_type::<$ty>()?;)+
                let mut decoder = builder.build()?;
                Ok(Self {
                    $($field: decoder.decode_next()?,)+
                })
            }
        }

        impl $crate::Merkleize for $name {
            fn hash_tree_root(&self) -> Result<$crate::__private::B256, $crate::SSZError> {
                let leaves = [$($crate::Merkleize::hash_tree_root(&self.$field)?.0),+];
                $crate::merkleization::merkleize(&leaves, None)
            }

            fn chunk_count() -> usize {
                [$(stringify!($field)),+].len()
            }
        }
    };
}
