//! Basic SSZ types: unsigned integers and booleans.

pub mod boolean;
pub mod uint;
