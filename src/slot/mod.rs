//! Opaque slot family - fixed-footprint inline storage.
//!
//! The module tree is intentionally stratified:
//! - `raw::*` are the minimal unsafe building blocks.
//! - `opaque::*` is the safe, value-semantic holder built on them.

pub mod opaque;
pub mod raw;

pub use opaque::OpaqueSlot;
pub use raw::RawSlot;
