//! Quadratic mantissa correction.
//!
//! The uncorrected codec stores the linear fraction `m` where the true logarithm needs
//! `log₂(1+m)`. The difference `log₂(1+m) - m` is well approximated by a scaled parabola
//! `c·m·(1-m)`, which is what these tables hold: the encoder adds it, the decoder subtracts its
//! slightly smaller counterpart, and the worst-case log-domain error drops from ≈0.0861 to
//! ≈0.0085 for two table lookups and an add.
//!
//! The tables are indexed by the top 8 bits of the mantissa field and store the correction in
//! Q16, rescaled to the codeword's Q(M) at use. Entries come from the canonical rationals 89/256
//! (encode) and 88/256 (decode) in pure integer arithmetic — no float creeps in, so any two
//! implementations of this layout agree bit for bit.
//!
//! A correction never carries out of the mantissa field: `m + c·m·(1-m) < 1` for `c < 1`, and on
//! the decode side the subtracted term is strictly below any mantissa that produces a nonzero
//! index. Corrected codewords therefore stay layout-compatible with uncorrected ones.

use super::*;
use crate::fixed::UFixed;
use crate::underlying::Uint;

/// `(c · i · (256 - i)) >> 8` for every 8-bit mantissa prefix `i`: the correction `c·m·(1-m)` in
/// Q16, for `c` itself in units of 1/256.
const fn correction_table(c: u32) -> [u16; 256] {
  let mut table = [0u16; 256];
  let mut i = 0;
  while i < 256 {
    table[i] = ((c * i as u32 * (256 - i as u32)) >> 8) as u16;
    i += 1;
  }
  table
}

/// Added to the mantissa when encoding; `c_enc = 89/256`.
static ENCODE_CORRECTION: [u16; 256] = correction_table(89);

/// Subtracted from the mantissa when decoding; `c_dec = 88/256`.
static DECODE_CORRECTION: [u16; 256] = correction_table(88);

impl<
  const M: u32,
  Int: crate::Int,
> Slog<M, Int> {
  /// The table entry for this codeword's mantissa, rescaled from Q16 to Q(M).
  #[inline]
  fn correction(table: &[u16; 256], bits: Int) -> Int {
    let m = bits.as_unsigned().mask_lsb(Self::MANTISSA_BITS);
    let index = if const { M >= 8 } {
      (m >> (Self::MANTISSA_BITS - 8)).as_u32()
    } else {
      (m << (8 - Self::MANTISSA_BITS)).as_u32()
    };
    let q16 = table[index as usize] as u32;
    if const { M >= 16 } {
      Int::of_u32(q16).wrapping_shl(Self::MANTISSA_BITS - 16)
    } else {
      Int::of_u32(q16 >> (16 - Self::MANTISSA_BITS))
    }
  }

  /// As [`Slog::encode_fixed`], with the quadratic encode correction applied.
  ///
  /// Pair with [`Slog::decode_fixed_corrected`]; a corrected codeword through an uncorrected
  /// decoder is still valid, just less accurate.
  pub fn encode_fixed_corrected<const F: u32, H: crate::Uint>(v: UFixed<F, H>) -> Self {
    let base = Self::encode_fixed(v);
    if base == Self::ZERO {
      return base;
    }
    let corrected = base.0.wrapping_add(Self::correction(&ENCODE_CORRECTION, base.0));
    // The correction is nonnegative, so in the last ≈0.1% of the source range it can push a
    // codeword that was already at the top of its exponent field past MAX; that overflow
    // saturates like any other.
    Self(if corrected < base.0 { Int::MAX } else { corrected })
  }

  /// As [`Slog::encode`], with the quadratic encode correction applied.
  #[inline]
  pub fn encode_corrected<H: crate::Uint>(v: H) -> Self {
    Self::encode_fixed_corrected(UFixed::<0, H>::from_bits(v))
  }

  /// As [`Slog::decode_fixed`], with the quadratic decode correction applied first.
  pub fn decode_fixed_corrected<const F: u32, H: crate::Uint>(self) -> UFixed<F, H> {
    if self == Self::ZERO {
      return UFixed::ZERO;
    }
    Self(self.0.wrapping_sub(Self::correction(&DECODE_CORRECTION, self.0))).decode_fixed()
  }

  /// As [`Slog::decode`], with the quadratic decode correction applied first.
  #[inline]
  pub fn decode_corrected<H: crate::Uint>(self) -> H {
    self.decode_fixed_corrected::<0, H>().to_bits()
  }
}
