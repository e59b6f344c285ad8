//! Command implementations.

pub mod catalog;
pub mod fingerprint;
pub mod head;
pub mod normalize;
