//! SSZ serialization and hash-tree-root Merkleization for Ethereum consensus types.
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub mod basic;

pub mod composite;
pub use composite::*;

pub mod ssz;
pub use ssz::*;

pub mod error;
pub use error::*;

pub mod constants;
pub use constants::*;

pub mod hasher;
pub use hasher::{Hasher, Implementation};

pub mod hashtree;
pub use hashtree::{Chunk, HashTree, zero_hashes};

pub mod merkleization;

pub mod types;

#[doc(hidden)]
pub mod __private {
    pub use alloc::vec::Vec;
    pub use alloy_primitives::B256;
}
