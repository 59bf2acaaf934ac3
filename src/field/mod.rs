//! Finite-field arithmetic (spec.md §4.1 "Field kernel").
//!
//! A [`GaloisField`] is a zero-sized type that names a concrete field GF(p^m); all of
//! its methods are associated functions dispatched at compile time, never through a
//! vtable. Each implementor publishes its exp/log (and, where worthwhile, full
//! multiplication) tables once via [`std::sync::OnceLock`] and keeps them immutable for
//! the remainder of the process, satisfying spec.md §5's "constructed once; read-only
//! thereafter; safe to share across threads" requirement without a separate
//! construction step the caller has to remember to run.

pub mod binary;
pub mod prime;
pub mod tables;
pub mod wide;

use std::fmt::Debug;

/// A finite field GF(q), q = p^m, with the operations spec.md §4.1 enumerates.
///
/// Implementors are zero-sized marker types; `Elem` is the runtime representation of a
/// field element (`u8` for GF(2^8), `u16` for the wider binary and prime fields used by
/// the BCH codec and GF(257)).
pub trait GaloisField: Copy + Clone + Eq + Debug + 'static {
    /// Runtime representation of a field element.
    type Elem: Copy + Clone + Eq + Default + Debug;

    /// Characteristic `p`.
    const CHARACTERISTIC: u32;

    /// Field order `q = p^m`.
    fn order() -> usize;

    /// The additive identity, 0.
    fn zero() -> Self::Elem;

    /// The multiplicative identity, 1.
    fn one() -> Self::Elem;

    /// `a + b`. XOR for p=2, mod-p addition otherwise.
    fn add(a: Self::Elem, b: Self::Elem) -> Self::Elem;

    /// `a - b`. Identical to `add` for p=2.
    fn sub(a: Self::Elem, b: Self::Elem) -> Self::Elem;

    /// `a * b`, total on all inputs (0 absorbs).
    fn mul(a: Self::Elem, b: Self::Elem) -> Self::Elem;

    /// `a / b`. Panics (debug) if `b` is zero; total at 0/b = 0 as spec.md requires.
    fn div(a: Self::Elem, b: Self::Elem) -> Self::Elem;

    /// Multiplicative inverse. Undefined (panics) at 0.
    fn inv(a: Self::Elem) -> Self::Elem;

    /// `alpha^k`, k taken modulo `q - 1`.
    fn exp(k: usize) -> Self::Elem;

    /// `log_alpha(a)`. Undefined (panics) at 0 — callers must never log a zero element,
    /// per spec.md §3.
    fn log(a: Self::Elem) -> usize;

    /// True iff `a` is the additive identity.
    fn is_zero(a: Self::Elem) -> bool {
        a == Self::zero()
    }

    /// Map an element to a dense `0..order()` index, for table lookups. Distinct from
    /// `log` (which is undefined at zero); this is total and injective.
    fn to_index(a: Self::Elem) -> usize;

    /// Inverse of [`GaloisField::to_index`].
    fn from_index(i: usize) -> Self::Elem;
}

/// Fields whose elements fit in a single byte, the precondition for the wide-word
/// SIMD-in-a-register machinery in [`wide`] (spec.md §4.2) and for the byte-indexed LUT
/// encoders in `rs::encode` (spec.md §4.6).
pub trait ByteField: GaloisField<Elem = u8> {}

impl<F: GaloisField<Elem = u8>> ByteField for F {}
