use super::*;
use crate::underlying::const_as;

impl<
  const M: u32,
  Uint: crate::Uint,
> Pul<M, Uint> {
  /// Decode a PUL codeword back to an unsigned integer.
  ///
  /// The sentinel decodes to 0; a codeword whose exponent is `H::BITS` or more saturates to
  /// `H::MAX`. Everything else reconstructs the normalised value and denormalises it, truncating
  /// the bits the mantissa never captured (the result is never above the encoded value).
  ///
  /// ```
  /// # use intlog::Pul;
  /// assert_eq!(Pul::<10, u16>::encode(50_000u64).decode::<u64>(), 49_984);
  /// assert_eq!(Pul::<10, u16>::encode(0u64).decode::<u64>(), 0);
  /// assert_eq!(Pul::<10, u16>::from_bits(0).decode::<u64>(), 1);
  /// ```
  pub fn decode<H: crate::Uint>(self) -> H {
    const { assert!(H::BITS >= Uint::BITS, "PUL decoding expands: the destination must be at least as wide as the codeword") }

    if self == Self::ZERO {
      return H::ZERO;
    }

    // The exponent field reads `log2_floor` of the original value thanks to the mantissa carry
    // (see the encoder). The all-zeros codeword falls through here with e = 0, m = 0 and decodes
    // to 1, which is exactly the value the 0/1 swap assigned to it.
    let e = self.0 >> Self::MANTISSA_BITS;
    if e >= Uint::of_u32(H::BITS) {
      return H::MAX;
    }
    let e = e.as_u32();

    // Put the implicit leading 1 back, align the mantissa just under it, then shift the
    // normalised value down to its real magnitude.
    let m = const_as::<Uint, H>(self.0.mask_lsb(Self::MANTISSA_BITS));
    let norm = (H::ONE << (H::BITS - 1)) | (m << (H::BITS - 1 - Self::MANTISSA_BITS));
    norm >> (H::BITS - 1 - e)
  }
}
