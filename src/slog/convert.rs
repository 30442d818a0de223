use super::*;
use crate::pul::Pul;
use crate::underlying::{const_as, const_as_int};

impl<
  const M: u32,
  Int: crate::Int,
> Slog<M, Int> {
  /// Convert to a SLOG codeword of a different width and/or mantissa budget.
  ///
  /// One arithmetic shift realigns both the mantissa budget and the exponent field, exactly as
  /// in [`Pul::resize`] — but sign-propagating, and with the log-zero sentinel remapped to the
  /// destination's. Widening sign-extends before the shift so negative codewords keep their
  /// sign; narrowing shifts before truncating so the exponent field survives.
  pub fn resize<
    const M2: u32,
    Int2: crate::Int,
  >(self) -> Slog<M2, Int2> {
    if self == Self::ZERO {
      return Slog::ZERO;
    }
    let bits = if const { M2 >= M } {
      const_as_int::<Int, Int2>(self.0) << (M2 - Self::MANTISSA_BITS)
    } else {
      const_as_int::<Int, Int2>(self.0 >> (Self::MANTISSA_BITS - M2))
    };
    Slog(bits)
  }

  /// Convert to a PUL codeword of any width and mantissa budget.
  ///
  /// PUL has no codewords below 1.0, so any negative SLOG codeword (the sentinel included)
  /// collapses to the PUL zero sentinel. Nonnegative codewords shift-realign as usual.
  pub fn to_pul<
    const M2: u32,
    Uint2: crate::Uint,
  >(self) -> Pul<M2, Uint2> {
    if self.0.is_negative() {
      return Pul::ZERO;
    }
    let v = self.0.as_unsigned();
    let bits = if const { M2 >= M } {
      const_as::<Int::Unsigned, Uint2>(v) << (M2 - Self::MANTISSA_BITS)
    } else {
      const_as::<Int::Unsigned, Uint2>(v >> (Self::MANTISSA_BITS - M2))
    };
    Pul::from_bits(bits)
  }
}
