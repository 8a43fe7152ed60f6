//! Components E and F: merging root types into a seed, then closing the
//! type-reference graph over that seed.

pub mod engine;
pub mod seed;
