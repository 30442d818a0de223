use super::*;
use crate::underlying::const_as;

impl<
  const M: u32,
  Uint: crate::Uint,
> Pul<M, Uint> {
  /// Encode an unsigned integer into a PUL codeword.
  ///
  /// The source type `H` must be at least as wide as the codeword (this is the compressing
  /// direction; widening a codeword is [`Pul::resize`]'s job). Values above `2^(BITS-M) - 2`
  /// powers of two, i.e. whose exponent field would overflow, are a caller error — keep `M` at or
  /// below [`pul_max_mantissa`](crate::pul_max_mantissa)`(H::BITS, Uint::BITS)` to make every
  /// source value encodable.
  ///
  /// ```
  /// # use intlog::Pul;
  /// assert_eq!(Pul::<10, u16>::encode(50_000u64).to_bits(), 15_898);
  /// assert_eq!(Pul::<10, u16>::encode(0u64).to_bits(), 1);
  /// assert_eq!(Pul::<10, u16>::encode(1u64).to_bits(), 0);
  /// ```
  pub fn encode<H: crate::Uint>(v: H) -> Self {
    const { assert!(H::BITS >= Uint::BITS, "PUL encoding compresses: the source must be at least as wide as the codeword") }

    // 0 and 1 swap codewords; see the module docs.
    if v <= H::ONE {
      return if v == H::ZERO { Self::ZERO } else { Self(Uint::ZERO) };
    }

    // Normalise `v` so its leading 1 sits at the top bit, then take the top M+1 bits as the
    // mantissa. Keeping the leading 1 *in* the mantissa (rather than masking it off as an
    // implicit bit) is what makes the assembly below a plain addition: the leading 1 lands on
    // bit M and carries straight into the exponent field, so the stored exponent reads
    // `log2_floor(v)` even though we only computed `log2_floor(v) - 1` here.
    //
    // SAFETY: `v > 1`, so it has a set bit.
    let clz = unsafe { v.leading_zeros_nonzero() };
    let m = const_as::<H, Uint>((v << clz) >> (H::BITS - 1 - Self::MANTISSA_BITS));
    let e = Uint::of_u32(H::BITS - 2 - clz);
    Self((e << Self::MANTISSA_BITS).wrapping_add(m))
  }
}
