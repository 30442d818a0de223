use super::*;
use crate::fixed::UFixed;
use crate::underlying::const_as;
use crate::underlying::Uint;

impl<
  const M: u32,
  Int: crate::Int,
> Slog<M, Int> {
  /// Decode a SLOG codeword back to an unsigned fixed-point value with `F` fractional bits.
  ///
  /// The exponent is rescaled by the output's `F`; after rescaling, a still-negative exponent
  /// means the value is too small for the output grid and clamps to 0, and an exponent at or
  /// above `H::BITS` saturates to `H::MAX`.
  ///
  /// Sign handling is part of the wire contract: a negative codeword is negated, and the
  /// exponent and mantissa fields are read from the negated word (the mantissa keeps the
  /// magnitude's fraction rather than the two's complement one). Negative powers of two
  /// (mantissa 0) reconstruct exactly; other sub-unit codewords decode on that convention.
  pub fn decode_fixed<const F: u32, H: crate::Uint>(self) -> UFixed<F, H> {
    const { assert!(H::BITS >= Int::BITS, "SLOG decoding expands: the destination must be at least as wide as the codeword") }

    if self == Self::ZERO {
      return UFixed::ZERO;
    }

    let negative = self.0.is_negative();
    let v = if negative { self.0.wrapping_neg() } else { self.0 };

    // `v` is nonnegative now, so the arithmetic shift is a plain field extract; the sign moves
    // to the exponent alone.
    let e = v >> Self::MANTISSA_BITS;
    let e = if negative { e.wrapping_neg() } else { e };

    let scaled_e = e.wrapping_add(Int::of_u32(F));
    if scaled_e.is_negative() {
      return UFixed::ZERO; // Underflow: the value has no representation above 0 on this grid
    }
    if scaled_e >= Int::of_u32(H::BITS) {
      return UFixed::from_bits(H::MAX); // Overflow: saturate
    }
    let scaled_e = scaled_e.as_u32();

    let m = const_as::<Int::Unsigned, H>(v.as_unsigned().mask_lsb(Self::MANTISSA_BITS));
    let norm = (H::ONE << (H::BITS - 1)) | (m << (H::BITS - 1 - Self::MANTISSA_BITS));
    UFixed::from_bits(norm >> (H::BITS - 1 - scaled_e))
  }

  /// Decode a SLOG codeword back to an unsigned integer (truncating any fractional part).
  ///
  /// ```
  /// # use intlog::Slog;
  /// let code = Slog::<25, i32>::encode(1_000_000u64);
  /// assert_eq!(code.decode::<u64>(), 1_000_000);
  /// assert_eq!(Slog::<25, i32>::ZERO.decode::<u64>(), 0);
  /// ```
  #[inline]
  pub fn decode<H: crate::Uint>(self) -> H {
    self.decode_fixed::<0, H>().to_bits()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;
  use crate::slog_max_mantissa;

  #[test]
  fn special_values() {
    assert_eq!(Slog::<25, i32>::ZERO.decode::<u64>(), 0);
    assert_eq!(Slog::<9, i16>::ZERO.decode::<u16>(), 0);
    assert_eq!(Slog::<25, i32>::ONE.decode::<u64>(), 1);
  }

  #[test]
  fn power_of_two_roundtrip_is_exact() {
    for k in 0..64 {
      let v = 1u64 << k;
      assert_eq!(Slog::<{ slog_max_mantissa(64, 32) }, i32>::encode(v).decode::<u64>(), v, "k = {k}");
      assert_eq!(Slog::<{ slog_max_mantissa(64, 16) }, i16>::encode(v).decode::<u64>(), v, "k = {k}");
      assert_eq!(Slog::<{ slog_max_mantissa(64, 64) }, i64>::encode(v).decode::<u64>(), v, "k = {k}");
    }
    for k in 0..16 {
      let v = 1u16 << k;
      assert_eq!(Slog::<{ slog_max_mantissa(16, 16) }, i16>::encode(v).decode::<u16>(), v, "k = {k}");
    }
  }

  #[test]
  fn negative_power_of_two_roundtrip_is_exact() {
    // 2^-3 as Q8 input, back out on the same grid
    let v = crate::UFixed::<8, u64>::from_bits(32);
    let code = Slog::<25, i32>::encode_fixed(v);
    assert_eq!(code.to_bits(), -3 << 25);
    assert_eq!(code.decode_fixed::<8, u64>(), v);
  }

  #[test]
  fn underflow_clamps_to_zero() {
    // 2^-9 needs nine fractional bits; Q8 has eight
    let code = Slog::<25, i32>::from_bits(-9 << 25);
    assert_eq!(code.decode_fixed::<8, u64>().to_bits(), 0);
    // 2^-8 is the last one in
    let code = Slog::<25, i32>::from_bits(-8 << 25);
    assert_eq!(code.decode_fixed::<8, u64>().to_bits(), 1);
  }

  #[test]
  fn overflow_saturates() {
    let code = Slog::<25, i32>::from_bits(40 << 25);
    assert_eq!(code.decode::<u32>(), u32::MAX);
    assert_eq!(code.decode::<u64>(), 1u64 << 40);
    // Scaling can push an in-range exponent over the edge too
    let code = Slog::<25, i32>::from_bits(60 << 25);
    assert_eq!(code.decode_fixed::<8, u64>().to_bits(), u64::MAX);
  }

  #[test]
  fn e2e_million_roundtrip() {
    // The mantissa of 1_000_000 fits 26 bits exactly, so the round trip is lossless here
    let code = Slog::<25, i32>::encode(1_000_000u64);
    assert_eq!(code.decode::<u64>(), 1_000_000);
  }

  #[test]
  fn u16_source_exhaustive() {
    for v in 1..=u16::MAX {
      let got = Slog::<{ slog_max_mantissa(16, 16) }, i16>::encode(v).decode::<u16>();
      assert!(got <= v, "{v} decoded to {got}");
      assert!(v - got <= v >> 10, "{v} decoded to {got}");
    }
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn u64_through_slog32(v in 1u64..) {
      let got = Slog::<25, i32>::encode(v).decode::<u64>();
      prop_assert!(got <= v);
      prop_assert!(v - got <= v >> 24);
    }

    #[test]
    fn relative_error_bound(v in 2u64..) {
      let got = Slog::<25, i32>::encode(v).decode::<u64>();
      // Worst case of the linear-mantissa approximation for a single round trip
      prop_assert!((v - got) as f64 / v as f64 <= 0.086);
    }
  }
}
