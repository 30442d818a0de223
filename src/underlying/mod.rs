//! This module contains the machine-integer plumbing that the codecs are built on: count-leading-
//! zeros and the bit primitives derived from it, masks, and width/sign moves, exposed through two
//! sealed traits. [`Uint`] covers `u8`/`u16`/`u32`/`u64` (integer sources and PUL codewords),
//! [`Int`] covers `i8`/`i16`/`i32`/`i64` (SLOG codewords and signed fixed-point).
//!
//! Everything here compiles down to one or two instructions; in particular
//! [`leading_zeros_nonzero`](Uint::leading_zeros_nonzero) routes through the `NonZero*` types so
//! the compiler can emit a bare `lzcnt`/`clz` with no zero-input guard.

mod private {
  /// Prevents downstream impls of [`Uint`](super::Uint) and [`Int`](super::Int); the codec
  /// kernels lean on two's complement details that only hold for the built-in machine types.
  pub trait Sealed {}
}

/// The trait for the unsigned machine integer types (only satisfied by `u8`, `u16`, `u32`, and
/// `u64`). Linear integer and fixed-point sources, as well as PUL codewords, are these.
///
/// This is a *sealed* trait.
pub trait Uint:
  private::Sealed +
  core::fmt::Debug + core::fmt::Display + core::fmt::Binary +
  Copy + Clone +
  Eq + Ord +
  core::hash::Hash + Default +
  core::ops::Shl<u32, Output=Self> +
  core::ops::Shr<u32, Output=Self> +
  core::ops::BitAnd<Output=Self> +
  core::ops::BitOr<Output=Self> +
  core::ops::Div<Output=Self> +
  core::ops::Rem<Output=Self>
{
  const ZERO: Self;
  const ONE: Self;
  const MAX: Self;
  const BITS: u32;

  /// Number of leading (most significant) 0 bits until the first 1. `Self::BITS` if `self` is 0.
  fn leading_zeros(self) -> u32;

  /// As [`Uint::leading_zeros`], but is undefined behaviour if `self` is zero.
  unsafe fn leading_zeros_nonzero(self) -> u32;

  /// Find-last-set: the 1-indexed position of the most significant set bit, or 0 if `self` is 0.
  #[inline]
  fn fls(self) -> u32 {
    Self::BITS - self.leading_zeros()
  }

  /// `⌊log₂ self⌋`. `self` must not be 0.
  #[inline]
  fn log2_floor(self) -> u32 {
    debug_assert!(self != Self::ZERO);
    Self::BITS - 1 - self.leading_zeros()
  }

  /// Set all bits more significant than the lowest `n` to 0.
  ///
  /// ```ignore
  /// assert_eq!(0xabcd_u16.mask_lsb(4), 0x000d_u16)
  /// ```
  fn mask_lsb(self, n: u32) -> Self;

  fn as_u32(self) -> u32;
  fn of_u32(x: u32) -> Self;

  /// Widen to `u64` (always lossless).
  fn as_u64(self) -> u64;

  /// Narrow from `u64`, keeping the low `Self::BITS` bits (`as`-cast semantics).
  fn of_u64(x: u64) -> Self;

  fn wrapping_add(self, other: Self) -> Self;
  fn wrapping_sub(self, other: Self) -> Self;
}

/// The trait for the signed machine integer types (only satisfied by `i8`, `i16`, `i32`, and
/// `i64`). SLOG codewords and signed fixed-point values are these.
///
/// This is a *sealed* trait.
pub trait Int:
  private::Sealed +
  core::fmt::Debug + core::fmt::Display + core::fmt::Binary +
  Copy + Clone +
  Eq + Ord +
  core::hash::Hash + Default +
  core::ops::Shl<u32, Output=Self> +
  // Arithmetic shift; go through `as_unsigned` when a logical one is needed.
  core::ops::Shr<u32, Output=Self> +
  core::ops::BitAnd<Output=Self>
{
  /// The unsigned counterpart of the same width (e.g. `i32::Unsigned` = `u32`).
  type Unsigned: Uint;

  const ZERO: Self;
  const ONE: Self;
  const MIN: Self;
  const MAX: Self;
  const BITS: u32;

  fn as_unsigned(self) -> Self::Unsigned;
  fn of_unsigned(x: Self::Unsigned) -> Self;

  fn is_negative(self) -> bool;

  /// Set all bits more significant than the lowest `n` to 0.
  fn mask_lsb(self, n: u32) -> Self;

  fn as_u32(self) -> u32;
  fn of_u32(x: u32) -> Self;

  /// Widen to `i64`, sign-extending (always lossless).
  fn as_i64(self) -> i64;

  /// Narrow from `i64`, keeping the low `Self::BITS` bits (`as`-cast semantics).
  fn of_i64(x: i64) -> Self;

  fn wrapping_add(self, other: Self) -> Self;
  fn wrapping_sub(self, other: Self) -> Self;
  fn wrapping_neg(self) -> Self;
  fn wrapping_shl(self, n: u32) -> Self;
}

mod unsigned;
mod int;
mod const_as;
pub use const_as::{const_as, const_as_int};
