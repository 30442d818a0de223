use super::*;
use crate::fixed::UFixed;
use crate::underlying::{const_as, const_as_int};

impl<
  const M: u32,
  Int: crate::Int,
> Slog<M, Int> {
  /// Encode an unsigned fixed-point value into a SLOG codeword.
  ///
  /// The input's `F` fractional bits fold into the exponent: a fixed-point value `v·2^-F` has
  /// `log₂ = log₂ v - F`, one subtraction folded into the exponent term below at no extra cost.
  /// An input below 1.0 therefore lands on a negative codeword.
  ///
  /// As with [`Pul::encode`](crate::Pul::encode), the source must be at least as wide as the
  /// codeword, and `M` at or below
  /// [`slog_max_mantissa`](crate::slog_max_mantissa)`(H::BITS, Int::BITS)` keeps every source
  /// value encodable.
  pub fn encode_fixed<const F: u32, H: crate::Uint>(v: UFixed<F, H>) -> Self {
    const { assert!(H::BITS >= Int::BITS, "SLOG encoding compresses: the source must be at least as wide as the codeword") }

    let v = v.to_bits();
    if v == H::ZERO {
      return Self::ZERO;
    }

    // Same normalise-and-keep-the-leading-1 trick as the PUL encoder: the mantissa's bit M
    // carries into the exponent field on assembly, turning the `- 1` exponent below into
    // `log2_floor(v)`. The assembly is wrapping two's complement arithmetic, so a negative
    // exponent (input below 1.0) borrows through the mantissa addition and comes out as a
    // negative codeword with the right Q-number reading.
    //
    // SAFETY: `v` is not 0.
    let clz = unsafe { v.leading_zeros_nonzero() };
    let m = const_as::<H, Int::Unsigned>((v << clz) >> (H::BITS - 1 - Self::MANTISSA_BITS));
    // Signed: the exponent is -1 for v = 1 (the mantissa carry brings it back to 0), and drops
    // further below zero for sub-unit fixed-point inputs.
    let e = const_as_int::<i32, Int>(H::BITS as i32 - 2 - clz as i32 - F as i32);
    Self(e.wrapping_shl(Self::MANTISSA_BITS).wrapping_add(Int::of_unsigned(m)))
  }

  /// Encode an unsigned integer into a SLOG codeword.
  ///
  /// ```
  /// # use intlog::Slog;
  /// // 1 is the zero codeword; exact powers of two land on exact multiples of 2^M
  /// assert_eq!(Slog::<25, i32>::encode(1u64).to_bits(), 0);
  /// assert_eq!(Slog::<25, i32>::encode(1024u64).to_bits(), 10 << 25);
  /// assert_eq!(Slog::<25, i32>::encode(0u64), Slog::ZERO);
  /// ```
  #[inline]
  pub fn encode<H: crate::Uint>(v: H) -> Self {
    Self::encode_fixed(UFixed::<0, H>::from_bits(v))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;
  use crate::slog_max_mantissa;

  #[test]
  fn special_values() {
    assert_eq!(Slog::<25, i32>::encode(0u64), Slog::ZERO);
    assert_eq!(Slog::<9, i16>::encode(0u16), Slog::ZERO);
    assert_eq!(Slog::<4, i8>::encode(0u8), Slog::ZERO);
    assert_eq!(Slog::<25, i32>::encode_fixed(crate::UFixed::<8, u64>::ZERO), Slog::ZERO);
  }

  #[test]
  fn known_codewords() {
    // 1_000_000 = 1.90734…×2^19: exponent 18 + mantissa carry, mantissa 64_000_000 = 1e6 << 6
    assert_eq!(Slog::<25, i32>::encode(1_000_000u64).to_bits(), (18 << 25) + 64_000_000);
    // 50000 through the 16-bit layout, M = 9
    assert_eq!(Slog::<9, i16>::encode(50_000u64).to_bits(), (14 << 9) + 781);
  }

  #[test]
  fn power_of_two_codewords_all_k() {
    for k in 0..64u32 {
      assert_eq!(
        Slog::<{ slog_max_mantissa(64, 32) }, i32>::encode(1u64 << k).to_bits(),
        (k as i32) << 25,
        "k = {k}",
      );
      assert_eq!(
        Slog::<{ slog_max_mantissa(64, 16) }, i16>::encode(1u64 << k).to_bits(),
        (k as i16) << 9,
        "k = {k}",
      );
    }
  }

  #[test]
  fn fractional_bits_shift_the_exponent() {
    // 256 as a Q8 value is the integer 1; its log is the zero codeword
    assert_eq!(
      Slog::<25, i32>::encode_fixed(crate::UFixed::<8, u64>::from_bits(256)).to_bits(),
      0,
    );
    // …and 1 as a Q8 value is 2^-8
    assert_eq!(
      Slog::<25, i32>::encode_fixed(crate::UFixed::<8, u64>::from_bits(1)).to_bits(),
      -8 << 25,
    );
    // 0.75 in Q8: floor(log₂) = -1, linear mantissa 0.5, read as the Q25 number -0.5
    assert_eq!(
      Slog::<25, i32>::encode_fixed(crate::UFixed::<8, u64>::from_bits(192)).to_bits(),
      -(1 << 24),
    );
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn monotone_u64_to_slog32(a in 1u64.., b in 1u64..) {
      let (a, b) = (a.min(b), a.max(b));
      prop_assert!(Slog::<25, i32>::encode(a) <= Slog::<25, i32>::encode(b));
    }

    #[test]
    fn monotone_u16_to_slog16(a in 1u16.., b in 1u16..) {
      let (a, b) = (a.min(b), a.max(b));
      prop_assert!(Slog::<11, i16>::encode(a) <= Slog::<11, i16>::encode(b));
    }

    #[test]
    fn codeword_is_within_the_linear_approximation_error(v in 2u64..) {
      // e + m stays within 0.0861 of log₂ everywhere, and never overshoots it by more than the
      // mantissa quantisation step.
      let code = Slog::<25, i32>::encode(v).to_bits() as f64 / (1u64 << 25) as f64;
      let log2 = (v as f64).log2();
      prop_assert!(code <= log2 + 1e-7);
      prop_assert!(code >= log2 - 0.0862);
    }
  }
}
