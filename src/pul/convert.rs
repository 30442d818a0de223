use super::*;
use crate::slog::Slog;
use crate::underlying::const_as;

impl<
  const M: u32,
  Uint: crate::Uint,
> Pul<M, Uint> {
  /// Convert to a PUL codeword of a different width and/or mantissa budget.
  ///
  /// Both changes are one shift: the codeword is `(exponent, mantissa)` read as a fixed-point
  /// number with `M` fractional bits, so realigning the mantissa budget realigns the exponent
  /// field with it. The shift happens in whichever of the two widths is wider, so no significant
  /// bits fall off the container on a widening conversion.
  ///
  /// ```
  /// # use intlog::{Pul, pul_max_mantissa};
  /// let narrow = Pul::<10, u16>::encode(50_000u64);
  /// let wide: Pul<26, u32> = narrow.resize();
  /// assert_eq!(wide.decode::<u64>(), narrow.decode::<u64>());
  /// ```
  pub fn resize<
    const M2: u32,
    Uint2: crate::Uint,
  >(self) -> Pul<M2, Uint2> {
    if self == Self::ZERO {
      return Pul::ZERO;
    }
    let bits = if const { M2 >= M } {
      const_as::<Uint, Uint2>(self.0) << (M2 - Self::MANTISSA_BITS)
    } else {
      const_as::<Uint, Uint2>(self.0 >> (Self::MANTISSA_BITS - M2))
    };
    Pul(bits)
  }

  /// Convert to a SLOG codeword of any width and mantissa budget.
  ///
  /// PUL codewords are nonnegative (they encode integers, never sub-unit values), so this is the
  /// same shift realignment as [`Pul::resize`] plus the sentinel remap.
  pub fn to_slog<
    const M2: u32,
    Int2: crate::Int,
  >(self) -> Slog<M2, Int2> {
    if self == Self::ZERO {
      return Slog::ZERO;
    }
    let bits = if const { M2 >= M } {
      const_as::<Uint, Int2::Unsigned>(self.0) << (M2 - Self::MANTISSA_BITS)
    } else {
      const_as::<Uint, Int2::Unsigned>(self.0 >> (Self::MANTISSA_BITS - M2))
    };
    Slog::from_bits(Int2::of_unsigned(bits))
  }
}
