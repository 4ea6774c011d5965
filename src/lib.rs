//! # `inlay` - Zero-Allocation Opaque Inline Storage
//!
//! A small toolkit for the compilation-firewall ("pimpl") pattern without
//! the pointer: a public-facing type stores its hidden implementation value
//! *inline*, inside its own memory footprint, while its surface names only
//! the payload type and two numbers: the payload's byte size and alignment.
//! No heap allocation, no indirection, no runtime bookkeeping.
//!
//! ## Safety Guarantees
//!
//! ### Memory Safety
//! - **No unsafe code in public APIs**: the value-semantic holder is safe to
//!   use; all unsafe operations live in a small, audited raw layer.
//! - **Single-occupant storage**: a holder owns exactly one payload,
//!   constructed in place at creation and destroyed in place exactly once at
//!   drop. The buffer is never shared and never emptied mid-lifetime.
//! - **Build-time layout contract**: the declared size/alignment numbers
//!   are checked against the payload's real layout whenever a construction
//!   or destruction path is monomorphized. Size drift in the hidden type is
//!   a build failure, never silent memory corruption.
//!
//! ### Debug Contract
//! - Release builds elide all occupancy tracking: a slot is exactly its
//!   declared bytes, and access is a pointer cast.
//! - Debug builds track occupancy in the raw layer and assert every
//!   lifecycle precondition (no double-init, no double-drop, no
//!   use-while-vacant), so raw-layer contract violations surface as
//!   assertions instead of undefined behavior.
//!
//! ## Key Features
//!
//! - **Inline pimpl**: hide an implementation type's definition from a
//!   public surface while storing it in place
//! - **Zero-cost value semantics**: construct, clone, assign, move out, and
//!   access at exactly the cost of the same operation on the payload
//! - **Const-generic layout pinning**: size and alignment are plain numbers
//!   at the declaration site; powers of two from 1 to 32768 are admissible
//!   alignments
//! - **Stratified design**: layout contract → raw slot → safe holder
//!
//! ## Architecture
//!
//! 1. **Layout contract** ([`layout`]): [`Align<N>`]/[`Alignment`] admit
//!    only representable alignments at the declaration site;
//!    [`layout_matches`] and the slots' deferred const assertions catch
//!    size/alignment drift at build time.
//! 2. **Raw slot** ([`slot::raw`], [`RawSlot`]): aligned uninitialized
//!    storage with manual placement init, in-place drop, and move-out, plus
//!    the debug occupancy contract.
//! 3. **Opaque slot** ([`slot::opaque`], [`OpaqueSlot`]): the safe holder,
//!    always occupied, value-semantic, `Deref`-transparent.
//!
//! ## Example
//!
//! ```rust
//! use inlay::OpaqueSlot;
//!
//! // The declaring site pins the hidden type's layout with two numbers.
//! let mut slot: OpaqueSlot<i32, 4, 4> = OpaqueSlot::new(42);
//!
//! // Using the slot reads like holding the value directly.
//! assert_eq!(*slot, 42);
//! *slot += 1;
//!
//! let copy = slot.clone();
//! assert_eq!(*copy, 43);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod layout;
pub mod slot;

pub use layout::{layout_matches, Align, Alignment};
pub use slot::{OpaqueSlot, RawSlot};

// Compile-time layout claims for the zero-overhead contract
const _: () = {
    use core::mem;

    use crate::layout::align::{Aligned1, Aligned64};

    // Alignment archetypes are ZSTs carrying exactly the advertised value.
    assert!(mem::size_of::<Aligned1>() == 0);
    assert!(mem::size_of::<Aligned64>() == 0);
    assert!(mem::align_of::<Aligned64>() == 64);

    // A slot imposes the declared alignment on its embedder.
    assert!(mem::align_of::<OpaqueSlot<u64, 8, 8>>() == 8);
    assert!(mem::align_of::<RawSlot<u8, 1, 1>>() == 1);

    // Release builds carry no occupancy tracking: a slot is exactly its
    // declared bytes. Debug builds add the raw layer's occupancy flag.
    #[cfg(not(debug_assertions))]
    assert!(mem::size_of::<OpaqueSlot<u64, 8, 8>>() == 8);
    #[cfg(not(debug_assertions))]
    assert!(mem::size_of::<RawSlot<[u8; 3], 3, 1>>() == 3);
};
