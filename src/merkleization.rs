//! SSZ Merkleization helper functions.

use crate::{BITS_PER_CHUNK, BYTES_PER_CHUNK, Chunk, HashTree, Hasher, SSZError};
use alloc::{vec, vec::Vec};
use alloy_primitives::B256;

/// Returns the next power of two >= i. 0 → 1
pub fn next_pow_of_two(i: usize) -> usize {
    if i <= 1 {
        1
    } else {
        1 << (usize::BITS - (i - 1).leading_zeros())
    }
}

/// Depth of the smallest binary tree with at least `i` leaves. 0 and 1 → 0
pub fn log2_ceil(i: usize) -> usize {
    if i <= 1 {
        0
    } else {
        (usize::BITS - (i - 1).leading_zeros()) as usize
    }
}

/// Returns the number of 32-byte chunks required for merkleization.
pub fn chunk_count(ty: SSZType) -> usize {
    match ty {
        SSZType::Basic { .. } => 1,
        SSZType::BitList { limit } => limit.div_ceil(BITS_PER_CHUNK),
        SSZType::BitVector { len } => len.div_ceil(BITS_PER_CHUNK),
        SSZType::ListBasic { elem_size, limit } => (limit * elem_size).div_ceil(BYTES_PER_CHUNK),
        SSZType::VectorBasic { elem_size, count } => (count * elem_size).div_ceil(BYTES_PER_CHUNK),
        SSZType::ListComposite { limit } => limit,
        SSZType::VectorComposite { count } => count,
        SSZType::Container { field_count } => field_count,
    }
}

/// Packs serialized basic values into 32-byte chunks with right-padding.
///
/// Empty input still yields one zero chunk.
pub fn pack(bytes: &[u8]) -> Vec<Chunk> {
    if bytes.is_empty() {
        return vec![[0u8; BYTES_PER_CHUNK]];
    }
    bytes
        .chunks(BYTES_PER_CHUNK)
        .map(|chunk| {
            let mut chunk_buf = [0u8; BYTES_PER_CHUNK];
            chunk_buf[..chunk.len()].copy_from_slice(chunk);
            chunk_buf
        })
        .collect()
}

/// Packs the first `len` bits of a little-endian bitfield into chunks.
///
/// Bits at positions `len` and above (a bitlist delimiter, or padding) are cleared.
pub fn pack_bits(bitfield_bytes: &[u8], len: usize) -> Vec<Chunk> {
    let used = len.div_ceil(8).min(bitfield_bytes.len());
    let mut chunks = pack(&bitfield_bytes[..used]);
    if len % 8 != 0 && used == len.div_ceil(8) {
        let last = used - 1;
        chunks[last / BYTES_PER_CHUNK][last % BYTES_PER_CHUNK] &= (1u8 << (len % 8)) - 1;
    }
    chunks
}

/// Merkleize a list of 32-byte chunks.
///
/// With a limit the tree is sized for `limit` chunks, otherwise for exactly `chunks.len()`.
pub fn merkleize(chunks: &[Chunk], limit: Option<usize>) -> Result<B256, SSZError> {
    Ok(merkle_tree(Hasher::global(), chunks, limit)?.hash_tree_root())
}

/// The tree [`merkleize`] takes its root from, built with `hasher`.
pub fn merkle_tree(
    hasher: Hasher,
    chunks: &[Chunk],
    limit: Option<usize>,
) -> Result<HashTree, SSZError> {
    let limit = match limit {
        Some(limit) if chunks.len() > limit => {
            return Err(SSZError::ChunkCountExceedsLimit {
                count: chunks.len(),
                limit,
            });
        }
        Some(limit) => limit.max(1),
        None => 0,
    };
    HashTree::with_hasher(hasher, chunks, limit)
}

/// Root of `chunks` in a tree sized for `limit`, mixed with `len`. One hasher does both steps.
pub fn merkleize_with_length(
    hasher: Hasher,
    chunks: &[Chunk],
    limit: usize,
    len: usize,
) -> Result<B256, SSZError> {
    let mut tree = merkle_tree(hasher, chunks, Some(limit))?;
    Ok(tree.mix_in(len))
}

/// Mix in length into a Merkle root (used for lists and bitlists).
pub fn mix_in_length(hasher: &Hasher, root: B256, len: usize) -> B256 {
    let mut len_bytes = [0u8; BYTES_PER_CHUNK];
    len_bytes[..8].copy_from_slice(&(len as u64).to_le_bytes());
    B256::from(hasher.hash_pair(&root.0, &len_bytes))
}

/// Helper enum to represent type metadata for chunk_count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SSZType {
    Basic { size: usize },
    BitList { limit: usize },
    BitVector { len: usize },
    ListBasic { elem_size: usize, limit: usize },
    VectorBasic { elem_size: usize, count: usize },
    ListComposite { limit: usize },
    VectorComposite { count: usize },
    Container { field_count: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Implementation, zero_hashes};
    use alloy_primitives::hex;

    #[test]
    fn test_next_pow_of_two() {
        assert_eq!(next_pow_of_two(0), 1);
        assert_eq!(next_pow_of_two(1), 1);
        assert_eq!(next_pow_of_two(2), 2);
        assert_eq!(next_pow_of_two(3), 4);
        assert_eq!(next_pow_of_two(1025), 2048);
    }

    #[test]
    fn test_log2_ceil() {
        assert_eq!(log2_ceil(0), 0);
        assert_eq!(log2_ceil(1), 0);
        assert_eq!(log2_ceil(2), 1);
        assert_eq!(log2_ceil(3), 2);
        assert_eq!(log2_ceil(4), 2);
        assert_eq!(log2_ceil(1 << 40), 40);
        assert_eq!(log2_ceil((1 << 40) + 1), 41);
    }

    #[test]
    fn test_chunk_count() {
        assert_eq!(chunk_count(SSZType::BitVector { len: 256 }), 1);
        assert_eq!(chunk_count(SSZType::BitVector { len: 257 }), 2);
        assert_eq!(chunk_count(SSZType::BitList { limit: 2048 }), 8);
        assert_eq!(chunk_count(SSZType::ListBasic { elem_size: 8, limit: 5 }), 2);
        assert_eq!(chunk_count(SSZType::VectorBasic { elem_size: 1, count: 32 }), 1);
        assert_eq!(chunk_count(SSZType::ListComposite { limit: 7 }), 7);
        assert_eq!(chunk_count(SSZType::Container { field_count: 3 }), 3);
    }

    #[test]
    fn test_pack() {
        assert_eq!(pack(&[]), vec![[0u8; 32]]);
        let packed = pack(&[0xaa; 33]);
        assert_eq!(packed.len(), 2);
        assert_eq!(packed[0], [0xaa; 32]);
        assert_eq!(packed[1][0], 0xaa);
        assert_eq!(packed[1][1..], [0u8; 31]);
    }

    #[test]
    fn test_pack_bits_clears_delimiter() {
        assert_eq!(pack_bits(&[0b0010_1011, 0b0000_0110], 10)[0][..2], [0b0010_1011, 0b10]);
        assert_eq!(pack_bits(&[0b1000_0000], 7)[0][0], 0);
        assert_eq!(pack_bits(&[0x01], 0), vec![[0u8; 32]]);
        assert_eq!(pack_bits(&[0xff, 0x01], 8)[0][..2], [0xff, 0x00]);
    }

    #[test]
    fn test_merkleize() {
        assert_eq!(merkleize(&[[1u8; 32]], None).unwrap(), B256::from([1u8; 32]));
        assert_eq!(
            merkleize(&[], Some(4)).unwrap(),
            B256::from(zero_hashes()[2])
        );
        assert_eq!(merkleize(&[], Some(0)).unwrap(), B256::ZERO);
        assert_eq!(
            merkleize(&[[0u8; 32]; 3], Some(2)),
            Err(SSZError::ChunkCountExceedsLimit { count: 3, limit: 2 })
        );
        assert_eq!(merkleize(&[], None), Err(SSZError::EmptyChunks));
    }

    #[test]
    fn test_mix_in_length_of_empty_list() {
        // Root of an empty List[uint64, 4]: zero chunk mixed with length 0.
        let root = mix_in_length(&Hasher::generic(), B256::ZERO, 0);
        assert_eq!(
            root,
            B256::from(hex!("f5a5fd42d16a20302798ef6ed309979b43003d2320d9f0e8ea9831a92759fb4b"))
        );
        assert_eq!(merkleize_with_length(Hasher::generic(), &[], 4, 0), Ok(root));
    }

    #[test]
    fn test_length_mix_in_uses_the_given_hasher() {
        let chunks = [[1u8; 32], [2u8; 32], [3u8; 32]];
        for implementation in [
            Implementation::Generic,
            Implementation::Avx,
            Implementation::Avx2,
            Implementation::Sha,
        ] {
            let hasher = Hasher::new(implementation);
            let mut tree = merkle_tree(hasher, &chunks, Some(8)).unwrap();
            assert_eq!(tree.hasher().implementation(), implementation);
            assert_eq!(tree.depth(), 3);

            let root = tree.hash_tree_root();
            let mixed = tree.mix_in(3);
            assert_eq!(mixed, mix_in_length(&hasher, root, 3));
            assert_eq!(merkleize_with_length(hasher, &chunks, 8, 3), Ok(mixed));
        }
        assert_eq!(
            merkleize_with_length(Hasher::generic(), &chunks, 2, 3),
            Err(SSZError::ChunkCountExceedsLimit { count: 3, limit: 2 })
        );
    }
}
