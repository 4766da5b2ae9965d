//! Binary Merkle tree over 32-byte chunks.
//!
//! A [`HashTree`] is built bottom-up from its leaves and padded up to the depth implied by a
//! capacity limit with precomputed zero-subtree hashes, so an all-zero region is never rehashed.
//! Every internal node is kept in one flat vector, level by level, with the root last.

use crate::{
    BYTES_PER_CHUNK, Hasher, SSZError, ZERO_HASH_DEPTH,
    merkleization::{log2_ceil, pack},
};
use alloc::{boxed::Box, vec, vec::Vec};
use alloy_primitives::B256;
use once_cell::race::OnceBox;

/// The Merkle tree unit.
pub type Chunk = [u8; BYTES_PER_CHUNK];

static ZERO_HASHES: OnceBox<[Chunk; ZERO_HASH_DEPTH]> = OnceBox::new();

/// Roots of all-zero trees: entry `h` is the root of a tree of height `h` whose leaves are zero
/// chunks.
pub fn zero_hashes() -> &'static [Chunk; ZERO_HASH_DEPTH] {
    ZERO_HASHES.get_or_init(|| {
        let hasher = Hasher::generic();
        let mut table = [[0u8; BYTES_PER_CHUNK]; ZERO_HASH_DEPTH];
        for height in 1..ZERO_HASH_DEPTH {
            table[height] = hasher.hash_pair(&table[height - 1], &table[height - 1]);
        }
        Box::new(table)
    })
}

/// A Merkle tree built from a sequence of leaf chunks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashTree {
    hasher: Hasher,
    nodes: Vec<Chunk>,
    leaf_count: usize,
    depth: usize,
    effective_depth: usize,
}

impl HashTree {
    /// Builds the tree with the process-wide hasher.
    ///
    /// `limit` is the number of leaves the type can hold. Zero means the tree is only as deep as
    /// `leaves` requires.
    pub fn new(leaves: &[Chunk], limit: usize) -> Result<Self, SSZError> {
        Self::with_hasher(Hasher::global(), leaves, limit)
    }

    /// Packs `bytes` into zero-padded chunks and builds the tree over them.
    pub fn from_bytes(bytes: &[u8], limit: usize) -> Result<Self, SSZError> {
        Self::new(&pack(bytes), limit)
    }

    /// Builds the tree with an explicit hasher.
    pub fn with_hasher(hasher: Hasher, leaves: &[Chunk], limit: usize) -> Result<Self, SSZError> {
        let leaf_count = leaves.len();
        if limit != 0 && leaf_count > limit {
            return Err(SSZError::ChunkCountExceedsLimit {
                count: leaf_count,
                limit,
            });
        }
        if leaf_count == 0 && limit == 0 {
            return Err(SSZError::EmptyChunks);
        }

        let effective_depth = log2_ceil(leaf_count);
        let depth = if limit == 0 {
            effective_depth
        } else {
            log2_ceil(limit)
        };
        if depth >= ZERO_HASH_DEPTH {
            return Err(SSZError::TreeTooDeep {
                depth,
                max: ZERO_HASH_DEPTH - 1,
            });
        }
        tracing::trace!(leaves = leaf_count, limit, depth, effective_depth, "building hash tree");

        let zero_hashes = zero_hashes();
        if leaf_count == 0 {
            return Ok(Self {
                hasher,
                nodes: vec![zero_hashes[depth]],
                leaf_count,
                depth,
                effective_depth,
            });
        }

        // A tree of height d over n leaves has fewer than n + d internal nodes.
        let mut nodes = Vec::with_capacity(leaf_count + depth);
        if effective_depth == 0 {
            nodes.push(leaves[0]);
        }

        let mut level_start = 0;
        for height in 0..effective_depth {
            let level_end = nodes.len();
            let level = if height == 0 {
                leaves
            } else {
                &nodes[level_start..level_end]
            };
            let next = hash_level(&hasher, level, &zero_hashes[height])?;
            level_start = level_end;
            nodes.extend_from_slice(&next);
        }

        let mut root = nodes.last().copied().unwrap_or(zero_hashes[0]);
        for zero_hash in &zero_hashes[effective_depth..depth] {
            root = hasher.hash_pair(&root, zero_hash);
            nodes.push(root);
        }

        Ok(Self {
            hasher,
            nodes,
            leaf_count,
            depth,
            effective_depth,
        })
    }

    /// Folds `length` into the root as a little-endian 64-bit chunk.
    pub fn mix_in(&mut self, length: usize) -> B256 {
        let mut length_chunk = [0u8; BYTES_PER_CHUNK];
        length_chunk[..8].copy_from_slice(&(length as u64).to_le_bytes());
        let root = self.hasher.hash_pair(&self.root_chunk(), &length_chunk);
        self.nodes.push(root);
        B256::from(root)
    }

    /// Current root, including any mixed-in length.
    pub fn hash_tree_root(&self) -> B256 {
        B256::from(self.root_chunk())
    }

    /// Cached nodes in bottom-up level order, the root last.
    ///
    /// The leaves themselves are not stored unless the tree is a single leaf.
    pub fn nodes(&self) -> &[Chunk] {
        &self.nodes
    }

    /// Hasher the tree was built with, also used by [`mix_in`](Self::mix_in).
    pub fn hasher(&self) -> Hasher {
        self.hasher
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Height of the padded tree.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Height of the tree spanned by the real leaves.
    pub fn effective_depth(&self) -> usize {
        self.effective_depth
    }

    fn root_chunk(&self) -> Chunk {
        self.nodes.last().copied().unwrap_or_default()
    }
}

/// Hashes adjacent pairs of `level`. An odd last node is paired with `zero_hash`.
fn hash_level(hasher: &Hasher, level: &[Chunk], zero_hash: &Chunk) -> Result<Vec<Chunk>, SSZError> {
    let pairs = level.len() / 2;
    let mut next = vec![[0u8; BYTES_PER_CHUNK]; level.len().div_ceil(2)];
    hasher.compress(&mut next[..pairs], level[..2 * pairs].as_flattened())?;
    if level.len() % 2 == 1 {
        next[pairs] = hasher.hash_pair(&level[level.len() - 1], zero_hash);
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Implementation;
    use alloy_primitives::hex;

    fn chunk(byte: u8) -> Chunk {
        [byte; BYTES_PER_CHUNK]
    }

    fn hash(left: &Chunk, right: &Chunk) -> Chunk {
        Hasher::generic().hash_pair(left, right)
    }

    #[test]
    fn test_zero_hashes() {
        let table = zero_hashes();
        assert_eq!(table[0], [0u8; 32]);
        assert_eq!(
            table[1],
            hex!("f5a5fd42d16a20302798ef6ed309979b43003d2320d9f0e8ea9831a92759fb4b")
        );
        assert_eq!(
            table[2],
            hex!("db56114e00fdd4c1f85c892bf35ac9a89289aaecb1ebd0a96cde606a748b5d71")
        );
        assert_eq!(
            table[3],
            hex!("c78009fdf07fc56a11f122370658a353aaa542ed63e44c4bc15ff4cd105ab33c")
        );
        assert!(core::ptr::eq(table, zero_hashes()));
    }

    #[test]
    fn test_single_leaf() {
        let tree = HashTree::new(&[chunk(1)], 0).unwrap();
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.effective_depth(), 0);
        assert_eq!(tree.hash_tree_root(), B256::from(chunk(1)));
        assert_eq!(tree.nodes(), &[chunk(1)]);
    }

    #[test]
    fn test_two_leaves() {
        let tree = HashTree::new(&[chunk(1), chunk(2)], 0).unwrap();
        assert_eq!(tree.hash_tree_root(), B256::from(hash(&chunk(1), &chunk(2))));
    }

    #[test]
    fn test_odd_leaf_pairs_with_zero_hash() {
        let leaves = [chunk(1), chunk(2), chunk(3)];
        let tree = HashTree::new(&leaves, 0).unwrap();
        let left = hash(&chunk(1), &chunk(2));
        let right = hash(&chunk(3), &zero_hashes()[0]);
        assert_eq!(tree.effective_depth(), 2);
        assert_eq!(tree.nodes(), &[left, right, hash(&left, &right)]);
    }

    #[test]
    fn test_odd_node_at_upper_level() {
        let leaves: Vec<Chunk> = (1..=5).map(chunk).collect();
        let tree = HashTree::new(&leaves, 0).unwrap();

        let l1 = [
            hash(&chunk(1), &chunk(2)),
            hash(&chunk(3), &chunk(4)),
            hash(&chunk(5), &zero_hashes()[0]),
        ];
        let l2 = [hash(&l1[0], &l1[1]), hash(&l1[2], &zero_hashes()[1])];
        let root = hash(&l2[0], &l2[1]);
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.hash_tree_root(), B256::from(root));
        assert_eq!(tree.nodes().len(), 6);
    }

    #[test]
    fn test_limit_pads_with_zero_hashes() {
        let tree = HashTree::new(&[chunk(7)], 4).unwrap();
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.effective_depth(), 0);
        let expected = hash(&hash(&chunk(7), &zero_hashes()[0]), &zero_hashes()[1]);
        assert_eq!(tree.hash_tree_root(), B256::from(expected));
    }

    #[test]
    fn test_limit_equals_explicit_zero_leaves() {
        let mut padded = vec![chunk(9), chunk(8), chunk(7)];
        padded.resize(8, [0u8; 32]);
        let exact = HashTree::new(&padded, 0).unwrap();
        let limited = HashTree::new(&padded[..3], 8).unwrap();
        assert_eq!(exact.hash_tree_root(), limited.hash_tree_root());
    }

    #[test]
    fn test_non_power_of_two_limit() {
        let a = HashTree::new(&[chunk(1)], 5).unwrap();
        let b = HashTree::new(&[chunk(1)], 8).unwrap();
        assert_eq!(a.depth(), 3);
        assert_eq!(a.hash_tree_root(), b.hash_tree_root());
    }

    #[test]
    fn test_empty_leaves() {
        assert_eq!(HashTree::new(&[], 0), Err(SSZError::EmptyChunks));

        let tree = HashTree::new(&[], 16).unwrap();
        assert_eq!(tree.depth(), 4);
        assert_eq!(tree.hash_tree_root(), B256::from(zero_hashes()[4]));
    }

    #[test]
    fn test_too_many_leaves() {
        let leaves = [chunk(0); 3];
        assert_eq!(
            HashTree::new(&leaves, 2),
            Err(SSZError::ChunkCountExceedsLimit { count: 3, limit: 2 })
        );
    }

    #[test]
    fn test_tree_too_deep() {
        assert_eq!(
            HashTree::new(&[chunk(0)], 1 << 42),
            Err(SSZError::TreeTooDeep { depth: 42, max: 41 })
        );
        assert!(HashTree::new(&[chunk(0)], 1 << 41).is_ok());
    }

    #[test]
    fn test_mix_in() {
        let mut tree = HashTree::new(&[chunk(1), chunk(2)], 4).unwrap();
        let root = tree.hash_tree_root();
        let mut length = [0u8; 32];
        length[0] = 2;
        let mixed = tree.mix_in(2);
        assert_eq!(mixed, B256::from(hash(&root.0, &length)));
        assert_eq!(tree.hash_tree_root(), mixed);
    }

    #[test]
    fn test_from_bytes() {
        let tree = HashTree::from_bytes(&[], 0).unwrap();
        assert_eq!(tree.hash_tree_root(), B256::ZERO);

        let tree = HashTree::from_bytes(&[1u8; 40], 0).unwrap();
        let mut second = [0u8; 32];
        second[..8].copy_from_slice(&[1u8; 8]);
        assert_eq!(tree.hash_tree_root(), B256::from(hash(&chunk(1), &second)));
    }

    #[test]
    fn test_backends_build_identical_trees() {
        let leaves: Vec<Chunk> = (0..37u8).map(chunk).collect();
        let reference = HashTree::with_hasher(Hasher::generic(), &leaves, 64).unwrap();
        for implementation in [Implementation::Avx, Implementation::Avx2, Implementation::Sha] {
            let tree = HashTree::with_hasher(Hasher::new(implementation), &leaves, 64).unwrap();
            assert_eq!(tree.nodes(), reference.nodes());
        }
    }
}
