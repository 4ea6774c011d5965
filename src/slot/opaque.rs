//! `OpaqueSlot` — safe, value-semantic inline storage for a layout-pinned
//! payload.
//!
//! A public-facing type can embed an `OpaqueSlot` field naming only the
//! payload type and two numbers (its byte size and alignment), keeping the
//! payload's definition out of its own surface while still storing the value
//! inline, with no heap allocation. Using the slot reads exactly like
//! holding the payload directly: construction places the value, `Deref`
//! reaches it, `Clone` copies it, and drop destroys it in place, exactly
//! once.
//!
//! ## Safety invariant
//!
//! From a successful construction until drop, the slot's buffer holds
//! exactly one live, fully constructed payload at offset 0. Safe code cannot
//! observe any other state: every constructor produces a live payload, and
//! only `Drop` or [`OpaqueSlot::into_inner`] end its lifetime. The declared
//! size/alignment numbers are verified against the payload's real layout at
//! build time whenever a construction or destruction path is instantiated;
//! a drifted declaration never reaches runtime.

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    mem,
    ops::{Deref, DerefMut},
};

use crate::layout::{Align, Alignment};
use crate::slot::raw::RawSlot;

/// Fixed-footprint, value-semantic storage for a single payload whose
/// layout is pinned by explicit numeric parameters.
///
/// `SIZE` must equal `size_of::<T>()` and `ALIGN` must equal
/// `align_of::<T>()`; the declaration site supplies both as plain numbers
/// and the match is enforced by a build-time check at every
/// construction/destruction instantiation. In release builds the slot is
/// exactly `SIZE` bytes at alignment `ALIGN`; holding one is
/// indistinguishable in cost from holding the payload directly.
///
/// A slot is exactly as thread-safe as its payload: it performs no internal
/// synchronization, and `Send`/`Sync` follow `T` (through the storage's
/// ownership marker), never an unsafe assertion.
///
/// # Examples
///
/// ```
/// use inlay::OpaqueSlot;
///
/// let mut slot: OpaqueSlot<i32, 4, 4> = OpaqueSlot::new(42);
/// assert_eq!(*slot, 42);
/// *slot += 1;
/// assert_eq!(*slot, 43);
/// ```
///
/// A declared size that drifts from the payload's real layout fails the
/// build as soon as any construction or destruction path is instantiated:
///
/// ```compile_fail
/// use inlay::OpaqueSlot;
///
/// // `u32` is 4 bytes; the declaration claims 8.
/// let slot: OpaqueSlot<u32, 8, 4> = OpaqueSlot::new(7);
/// ```
///
/// So does a drifted alignment:
///
/// ```compile_fail
/// use inlay::OpaqueSlot;
///
/// // `u32` aligns to 4; the declaration claims 8.
/// let slot: OpaqueSlot<u32, 4, 8> = OpaqueSlot::new(7);
/// ```
///
/// A non-power-of-two alignment is rejected at the declaration itself,
/// before any value exists:
///
/// ```compile_fail
/// use inlay::OpaqueSlot;
///
/// fn declares(_: &OpaqueSlot<u32, 4, 3>) {}
/// ```
pub struct OpaqueSlot<T, const SIZE: usize, const ALIGN: usize>
where
    Align<ALIGN>: Alignment,
{
    raw: RawSlot<T, SIZE, ALIGN>,
}

impl<T, const SIZE: usize, const ALIGN: usize> OpaqueSlot<T, SIZE, ALIGN>
where
    Align<ALIGN>: Alignment,
{
    /// Places `value` into a new slot.
    ///
    /// Forces the layout check. Any panic raised while producing `value`
    /// happens before the slot exists and propagates unchanged.
    #[inline]
    pub fn new(value: T) -> Self {
        let mut raw = RawSlot::uninit();
        // SAFETY: a freshly created slot is vacant.
        unsafe { raw.init(value) };
        #[cfg(feature = "tracing")]
        tracing::trace!(
            payload = core::any::type_name::<T>(),
            size = SIZE,
            align = ALIGN,
            "opaque slot constructed"
        );
        Self { raw }
    }

    /// Constructs the payload via `f` and places it into a new slot.
    ///
    /// The closure form keeps construct-at-the-slot call sites tidy when the
    /// payload has no ready-made value; panics from `f` propagate unchanged.
    #[inline]
    pub fn with(f: impl FnOnce() -> T) -> Self {
        Self::new(f())
    }

    /// Returns a shared reference to the payload.
    #[inline(always)]
    pub fn get(&self) -> &T {
        // SAFETY: a safe slot is occupied from construction to drop.
        unsafe { self.raw.get() }
    }

    /// Returns an exclusive reference to the payload.
    #[inline(always)]
    pub fn get_mut(&mut self) -> &mut T {
        // SAFETY: a safe slot is occupied from construction to drop, and
        // `&mut self` guarantees exclusivity.
        unsafe { self.raw.get_mut() }
    }

    /// Returns a raw const pointer to the payload.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.raw.as_ptr()
    }

    /// Returns a raw mut pointer to the payload.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.raw.as_mut_ptr()
    }

    /// Replaces the payload with `value` via the payload's own
    /// drop-and-move assignment path. Both sides are live.
    #[inline]
    pub fn set(&mut self, value: T) {
        *self.get_mut() = value;
    }

    /// Replaces the payload with `value`, returning the previous payload.
    ///
    /// The slot keeps holding a live value throughout; only the payload's
    /// internal resources change hands.
    #[inline]
    pub fn replace(&mut self, value: T) -> T {
        mem::replace(self.get_mut(), value)
    }

    /// Moves the payload's value out, leaving `T::default()` in its place.
    ///
    /// The move-construction analog: the source slot still holds a valid
    /// (moved-from) payload afterwards; its storage is never emptied.
    #[inline]
    pub fn take(&mut self) -> T
    where
        T: Default,
    {
        mem::take(self.get_mut())
    }

    /// Consumes the slot and returns the payload by value.
    ///
    /// The in-place destructor does not run; the payload's lifetime simply
    /// continues in the returned value.
    #[inline]
    pub fn into_inner(self) -> T {
        let mut this = mem::ManuallyDrop::new(self);
        // SAFETY: the slot is occupied, and suppressing its `Drop` above
        // makes this read the unique end of the in-place lifetime.
        unsafe { this.raw.read() }
    }
}

impl<T, const SIZE: usize, const ALIGN: usize> Drop for OpaqueSlot<T, SIZE, ALIGN>
where
    Align<ALIGN>: Alignment,
{
    fn drop(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            payload = core::any::type_name::<T>(),
            "opaque slot destroyed"
        );
        // SAFETY: occupied from construction to drop; this is the sole
        // in-place destructor site for this storage.
        unsafe { self.raw.drop_payload() }
    }
}

impl<T: Clone, const SIZE: usize, const ALIGN: usize> Clone for OpaqueSlot<T, SIZE, ALIGN>
where
    Align<ALIGN>: Alignment,
{
    /// Copy-construction: places a clone of the source's live payload into
    /// fresh storage. The source is unchanged.
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.get().clone())
    }

    /// Copy-assignment between live payloads, reusing the payload's own
    /// `clone_from` path rather than destroy-and-reconstruct.
    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.get_mut().clone_from(source.get());
    }
}

impl<T, const SIZE: usize, const ALIGN: usize> Deref for OpaqueSlot<T, SIZE, ALIGN>
where
    Align<ALIGN>: Alignment,
{
    type Target = T;

    #[inline(always)]
    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T, const SIZE: usize, const ALIGN: usize> DerefMut for OpaqueSlot<T, SIZE, ALIGN>
where
    Align<ALIGN>: Alignment,
{
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut T {
        self.get_mut()
    }
}

impl<T: Default, const SIZE: usize, const ALIGN: usize> Default for OpaqueSlot<T, SIZE, ALIGN>
where
    Align<ALIGN>: Alignment,
{
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T, const SIZE: usize, const ALIGN: usize> From<T> for OpaqueSlot<T, SIZE, ALIGN>
where
    Align<ALIGN>: Alignment,
{
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: fmt::Debug, const SIZE: usize, const ALIGN: usize> fmt::Debug
    for OpaqueSlot<T, SIZE, ALIGN>
where
    Align<ALIGN>: Alignment,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.get().fmt(f)
    }
}

impl<T: fmt::Display, const SIZE: usize, const ALIGN: usize> fmt::Display
    for OpaqueSlot<T, SIZE, ALIGN>
where
    Align<ALIGN>: Alignment,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.get().fmt(f)
    }
}

impl<T: PartialEq, const SIZE: usize, const ALIGN: usize> PartialEq for OpaqueSlot<T, SIZE, ALIGN>
where
    Align<ALIGN>: Alignment,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<T: Eq, const SIZE: usize, const ALIGN: usize> Eq for OpaqueSlot<T, SIZE, ALIGN> where
    Align<ALIGN>: Alignment
{
}

impl<T: PartialOrd, const SIZE: usize, const ALIGN: usize> PartialOrd for OpaqueSlot<T, SIZE, ALIGN>
where
    Align<ALIGN>: Alignment,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.get().partial_cmp(other.get())
    }
}

impl<T: Ord, const SIZE: usize, const ALIGN: usize> Ord for OpaqueSlot<T, SIZE, ALIGN>
where
    Align<ALIGN>: Alignment,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.get().cmp(other.get())
    }
}

impl<T: Hash, const SIZE: usize, const ALIGN: usize> Hash for OpaqueSlot<T, SIZE, ALIGN>
where
    Align<ALIGN>: Alignment,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state);
    }
}

#[cfg(feature = "serde")]
impl<T, const SIZE: usize, const ALIGN: usize> serde::Serialize for OpaqueSlot<T, SIZE, ALIGN>
where
    T: serde::Serialize,
    Align<ALIGN>: Alignment,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.get().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, const SIZE: usize, const ALIGN: usize> serde::Deserialize<'de>
    for OpaqueSlot<T, SIZE, ALIGN>
where
    T: serde::Deserialize<'de>,
    Align<ALIGN>: Alignment,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::new)
    }
}
