//! Contains all the constants required for ssz implementation.

/// Number of bytes per chunk.
pub const BYTES_PER_CHUNK: usize = 32;
/// Number of bytes per serialized length offset.
pub const BYTES_PER_LENGTH_OFFSET: usize = 4;
/// Number of bits per byte.
pub const BITS_PER_BYTE: usize = 8;
/// Number of bits packed into one chunk.
pub const BITS_PER_CHUNK: usize = BYTES_PER_CHUNK * BITS_PER_BYTE;
/// Size of the input to a single hash-tree node: two concatenated chunks.
pub const BYTES_PER_HASH_BLOCK: usize = 2 * BYTES_PER_CHUNK;
/// Number of entries in the zero-subtree hash table.
///
/// Entry `h` is the root of an all-zero tree of height `h`, enough for any type bounded by 2^41
/// chunks.
pub const ZERO_HASH_DEPTH: usize = 42;
/// Largest value an offset can take.
pub const MAX_OFFSET: usize = u32::MAX as usize;
