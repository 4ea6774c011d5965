//! Compile-time layout contract for opaque storage declarations.
//!
//! A declaration site names a payload type together with two numeric
//! parameters, the payload's byte size and alignment, without consulting
//! `size_of`/`align_of` there. The contract has two halves:
//!
//! - [`Align<N>`]/[`Alignment`] admit only representable alignments (powers
//!   of two), rejecting bad values at the declaration site.
//! - the deferred half: storage types assert the same predicate as
//!   [`layout_matches`] (split so the diagnostic names the mismatched
//!   quantity) in a `const` evaluated when construction or destruction is
//!   monomorphized, so a declared size or alignment that has drifted from
//!   the real type is a build failure, never a runtime fault.

pub mod align;

pub use align::{Align, Alignment};

use core::mem;

/// Returns `true` when the declared byte size and alignment exactly match
/// the payload type's real layout.
///
/// Usable in `const` contexts; storage types evaluate it at their deferred
/// check sites, and tests evaluate it directly.
#[must_use]
pub const fn layout_matches<T>(size: usize, align: usize) -> bool {
    size == mem::size_of::<T>() && align == mem::align_of::<T>()
}
