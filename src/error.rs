//! Error variants for SSZ.

use alloc::string::String;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SSZError {
    #[error("Invalid length: expected {expected}, got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("Invalid list length: {len} bytes is not a multiple of the element size {elem_size}")]
    InvalidListLength { len: usize, elem_size: usize },

    #[error("Expected further input: needed {expected} bytes, got {got}")]
    ExpectedFurtherInput { expected: usize, got: usize },

    #[error("Invalid byte {0:#04x} for boolean deserialization")]
    InvalidBooleanByte(u8),

    #[error("Offset {offset} points into the fixed portion ending at {fixed_len}")]
    OffsetIntoFixedPortion { offset: usize, fixed_len: usize },

    #[error("First offset {offset} skips variable bytes, expected {fixed_len}")]
    OffsetSkipsVariableBytes { offset: usize, fixed_len: usize },

    #[error("Offset {offset} is lower than the previous offset {previous}")]
    OffsetsAreDecreasing { previous: usize, offset: usize },

    #[error("Offset {offset} out of bounds for data length {len}")]
    OffsetOutOfBounds { offset: usize, len: usize },

    #[error("Invalid list offset table: first offset {0} is not a multiple of the offset size")]
    InvalidListOffset(usize),

    #[error("Expected delimiter bit not found")]
    ExpectedDelimiterBit,

    #[error("Invalid bitvector: padding bits beyond {len} are set")]
    InvalidBitvector { len: usize },

    #[error("Hex string is not prefixed with 0x")]
    MissingHexPrefix,

    #[error("Invalid hex string: {0}")]
    InvalidHex(String),

    #[error("Capacity exceeded: limit {limit}, got {got}")]
    CapacityExceeded { limit: usize, got: usize },

    #[error("Invalid Chunk Size")]
    InvalidChunkSize,

    #[error("Invalid Chunk Count: limit {limit}, got {count}")]
    ChunkCountExceedsLimit { count: usize, limit: usize },

    #[error("Cannot build a hash tree from zero chunks without a limit")]
    EmptyChunks,

    #[error("Tree depth {depth} exceeds the zero hash table depth {max}")]
    TreeTooDeep { depth: usize, max: usize },
}
