//! Affine rescaling of SLOG codewords between log₂ and other logarithmic bases.
//!
//! A SLOG codeword is `log₂ v` in Q(M); multiplying it by `log_b 2` turns it into `log_b v` in
//! the same fixed-point frame, which is how decibel figures or ×1.25-step gain tables come out
//! of the codec without ever leaving integer arithmetic. Each radix carries one constant per
//! direction (with its own shift, so each mantissa can use the full 32 bits).

use super::*;

/// A target logarithmic base for [`Slog::rescale_to`] / [`Slog::rescale_from`].
#[derive(Clone, Copy, Debug)]
#[derive(Eq, PartialEq, Hash)]
pub enum Radix {
  /// Power decibels: one unit is 10·log₁₀ of a power ratio.
  DbPower,
  /// Base 1.25: one unit is a 25% step, as used by coarse gain ladders.
  Ratio125,
}

struct Scale {
  /// Fixed-point constant for the log₂ → target direction.
  to: u32,
  to_shr: u32,
  /// Fixed-point constant for the target → log₂ direction.
  from: u32,
  from_shr: u32,
}

/// The published constants, verbatim. The `DbPower` pair is mutually inverse to within 1 ULP
/// over the whole supported range; the `Ratio125` pair is known not to be (its product falls
/// ≈1.5·10⁻⁸ short of an exact reciprocal), so that radix is two independent one-way mappings
/// rather than a round-trip pair.
const SCALES: [Scale; 2] = [
  Scale { to: 0xC0A8C129, to_shr: 30, from: 0x550A9686, from_shr: 32 },
  Scale { to: 0xC6CD5A3B, to_shr: 30, from: 0x5269E11A, from_shr: 32 },
];

impl Radix {
  #[inline]
  fn scale(self) -> &'static Scale {
    &SCALES[self as usize]
  }
}

impl<
  const M: u32,
  Int: crate::Int,
> Slog<M, Int> {
  #[inline]
  fn rescale(self, mul: u32, shr: u32) -> Self {
    // Only up to 32-bit codewords: the kernel's product must fit a u64.
    const { assert!(Int::BITS <= 32, "radix rescaling is only available for SLOG widths up to 32 bits") }

    if self == Self::ONE || self == Self::ZERO {
      return self;
    }
    let negative = self.0.is_negative();
    let v = if negative { self.0.wrapping_neg() } else { self.0 };
    let t = ((v.as_i64() as u64) * (mul as u64)) >> shr;
    let t = Int::of_i64(t as i64);
    Self(if negative { t.wrapping_neg() } else { t })
  }

  /// Rescale a base-2 codeword to `radix` (e.g. into a dB figure in Q(M)).
  #[inline]
  pub fn rescale_to(self, radix: Radix) -> Self {
    let scale = radix.scale();
    self.rescale(scale.to, scale.to_shr)
  }

  /// Rescale a codeword in `radix` back to base 2, making it a SLOG value again.
  #[inline]
  pub fn rescale_from(self, radix: Radix) -> Self {
    let scale = radix.scale();
    self.rescale(scale.from, scale.from_shr)
  }
}
