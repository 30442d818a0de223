//! Linear fixed-point values: plain machine words with `F` fractional bits carried in the type.
//!
//! These are the entry and exit points of the pseudo-logarithmic codecs, and the operands of the
//! [EWMA](crate::ewma) helpers. A `UFixed<8, u32>` holds a Q24.8 value in a `u32`; the raw word
//! is always `value × 2^F`.
//!
//! Conversions shift, never round: `to_int` truncates the fractional tail (towards −∞ for the
//! signed type, since its shift is arithmetic). A caller that wants round-to-nearest adds
//! `1 << (F − 1)` to the raw word before narrowing.

use crate::underlying::{const_as, const_as_int};

/// An unsigned fixed-point value with `F` fractional bits, stored in a `Uint`.
#[derive(Clone, Copy)]
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct UFixed<
  const F: u32,
  Uint: crate::Uint,
> (Uint);

/// A signed fixed-point value with `F` fractional bits, stored in an `Int`.
#[derive(Clone, Copy)]
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct SFixed<
  const F: u32,
  Int: crate::Int,
> (Int);

impl<
  const F: u32,
  Uint: crate::Uint,
> UFixed<F, Uint> {
  /// The number of fractional bits (i.e. parameter `F`).
  pub const FRACT_BITS: u32 = {
    assert!(
      F < Uint::BITS,
      "A fixed-point value needs at least one integer bit",
    );
    F
  };

  pub const ZERO: Self = Self(Uint::ZERO);

  /// Widen an integer into fixed-point: `v × 2^F`. The source must not be wider than the
  /// destination; high bits of a source as wide as the destination are shifted out.
  #[inline]
  pub fn from_int<H: crate::Uint>(v: H) -> Self {
    const { assert!(H::BITS <= Uint::BITS, "from_int widens; use to_int to narrow") }
    Self(const_as::<H, Uint>(v) << Self::FRACT_BITS)
  }

  /// Narrow fixed-point back to an integer, truncating the fractional tail.
  #[inline]
  pub fn to_int<L: crate::Uint>(self) -> L {
    const { assert!(L::BITS <= Uint::BITS, "to_int narrows; use from_int to widen") }
    const_as::<Uint, L>(self.0 >> Self::FRACT_BITS)
  }

  /// Construct from a raw word already scaled by `2^F`.
  #[inline]
  pub const fn from_bits(bits: Uint) -> Self {
    Self(bits)
  }

  /// The raw word, scaled by `2^F`.
  #[inline]
  pub const fn to_bits(self) -> Uint {
    self.0
  }
}

impl<
  const F: u32,
  Int: crate::Int,
> SFixed<F, Int> {
  /// The number of fractional bits (i.e. parameter `F`).
  pub const FRACT_BITS: u32 = {
    assert!(
      F < Int::BITS - 1,
      "A signed fixed-point value needs its sign bit and at least one integer bit",
    );
    F
  };

  pub const ZERO: Self = Self(Int::ZERO);

  /// Widen a signed integer into fixed-point: `v × 2^F`, sign-extended.
  #[inline]
  pub fn from_int<H: crate::Int>(v: H) -> Self {
    const { assert!(H::BITS <= Int::BITS, "from_int widens; use to_int to narrow") }
    Self(const_as_int::<H, Int>(v) << Self::FRACT_BITS)
  }

  /// Narrow fixed-point back to a signed integer. The arithmetic shift truncates the fractional
  /// tail towards −∞.
  #[inline]
  pub fn to_int<L: crate::Int>(self) -> L {
    const { assert!(L::BITS <= Int::BITS, "to_int narrows; use from_int to widen") }
    const_as_int::<Int, L>(self.0 >> Self::FRACT_BITS)
  }

  /// Construct from a raw word already scaled by `2^F`.
  #[inline]
  pub const fn from_bits(bits: Int) -> Self {
    Self(bits)
  }

  /// The raw word, scaled by `2^F`.
  #[inline]
  pub const fn to_bits(self) -> Int {
    self.0
  }
}

impl<
  const F: u32,
  Uint: crate::Uint,
> core::fmt::Debug for UFixed<F, Uint> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let int = self.0 >> Self::FRACT_BITS;
    let fract = self.0.mask_lsb(F);
    f.debug_tuple("UFixed")
      .field(&format_args!("0b{int:b}.{fract:0w$b}", w=F as usize))
      .finish()
  }
}

impl<
  const F: u32,
  Int: crate::Int,
> core::fmt::Debug for SFixed<F, Int> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let int = self.0 >> Self::FRACT_BITS;
    let fract = self.0.mask_lsb(F);
    f.debug_tuple("SFixed")
      .field(&format_args!("0b{int:b}.{fract:0w$b}", w=F as usize))
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unsigned_roundtrip() {
    let x = UFixed::<8, u32>::from_int(100_u16);
    assert_eq!(x.to_bits(), 100 << 8);
    assert_eq!(x.to_int::<u16>(), 100);
    assert_eq!(x.to_int::<u32>(), 100);
  }

  #[test]
  fn unsigned_truncates() {
    // 3.75 in Q8 narrows to 3, not 4
    let x = UFixed::<8, u32>::from_bits((3 << 8) + 192);
    assert_eq!(x.to_int::<u32>(), 3);
  }

  #[test]
  fn signed_roundtrip() {
    let x = SFixed::<8, i32>::from_int(-100_i16);
    assert_eq!(x.to_bits(), -100 << 8);
    assert_eq!(x.to_int::<i16>(), -100);
  }

  #[test]
  fn signed_truncates_towards_neg_infinity() {
    // -3.75 in Q8 narrows to -4 (the arithmetic shift is a floor)
    let x = SFixed::<8, i32>::from_bits(-((3 << 8) + 192));
    assert_eq!(x.to_int::<i32>(), -4);
  }

  #[test]
  fn widening_from_narrow_source() {
    let x = UFixed::<16, u64>::from_int(0xffff_u16);
    assert_eq!(x.to_bits(), 0xffff_0000_u64);
    let y = SFixed::<16, i64>::from_int(-1_i8);
    assert_eq!(y.to_bits(), -0x1_0000_i64);
  }

  #[test]
  fn zero_fract_bits_is_identity() {
    let x = UFixed::<0, u32>::from_int(1234_u32);
    assert_eq!(x.to_bits(), 1234);
    assert_eq!(x.to_int::<u32>(), 1234);
  }
}
