//! List of composite modules.

mod hex;
mod sequence;

pub mod bitvector;
pub use bitvector::BitVector;

pub mod bitlist;
pub use bitlist::BitList;

pub mod byte_vector;
pub use byte_vector::*;

pub mod vector;
pub use vector::Vector;

pub mod list;
pub use list::List;

pub mod container;
pub use container::*;
