//! The packed-unsigned-log (PUL) storage format: an unsigned pseudo-logarithmic codeword that
//! compresses a wide integer into a narrow word.
//!
//! A PUL codeword is laid out `| exponent | mantissa |`, with the mantissa occupying the low `M`
//! bits. It is *not* meant for arithmetic — decode back to a linear integer for that, or move to
//! the arithmetic-friendly signed sibling with [`Pul::to_slog`]. What it buys is density: the top
//! of the `u64` range lands in a `u16` with a worst-case relative error of `2^-M`.
//!
//! Two codewords are only compatible if they agree on width *and* mantissa budget; both are part
//! of the type, so mixing them up is a type error rather than silent garbage.
//!
//! # Special encodings
//!
//! The integer 1 would naturally occupy the all-zeros codeword, which leaves no distinct code for
//! the integer 0. The codec therefore swaps them: 0 encodes as codeword 1 (the smallest nonzero
//! code, [`Pul::ZERO`]) and 1 encodes as codeword 0. Every decoder and transcoder preserves this
//! sentinel.

/// A PUL codeword with `M` mantissa bits, stored in a `Uint`.
///
/// The remaining `Uint::BITS - M` high bits hold the exponent. For the densest useful layout pick
/// `M` with [`pul_max_mantissa`](crate::pul_max_mantissa):
///
/// ```
/// use intlog::{Pul, pul_max_mantissa};
/// type Packed = Pul<{ pul_max_mantissa(64, 16) }, u16>;  // u64 range in 16 bits, M = 10
/// assert_eq!(Packed::encode(0u64), Packed::ZERO);
/// ```
#[derive(Clone, Copy)]
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash)]  // Codeword order is value order (monotone codec)
pub struct Pul<
  const M: u32,
  Uint: crate::Uint,
> (Uint);

impl<
  const M: u32,
  Uint: crate::Uint,
> Pul<M, Uint> {
  /// The size of this codeword in bits.
  pub const BITS: u32 = Uint::BITS;

  /// The number of mantissa bits (i.e. parameter `M`).
  pub const MANTISSA_BITS: u32 = {
    assert!(
      M >= 1 && M < Uint::BITS,
      "A PUL codeword needs at least one mantissa bit and at least one exponent bit",
    );
    M
  };

  /// The number of exponent bits.
  pub const EXPONENT_BITS: u32 = Uint::BITS - Self::MANTISSA_BITS;

  /// The codeword for the integer 0.
  //
  // Represented by the bit pattern `0b000…01`; the all-zeros codeword belongs to the integer 1.
  pub const ZERO: Self = Self(Uint::ONE);

  /// Construct a codeword from its raw bit representation.
  #[inline]
  pub const fn from_bits(bits: Uint) -> Self {
    Self(bits)
  }

  /// Return the raw bit representation of `self`. This is the storage/interchange form.
  #[inline]
  pub const fn to_bits(self) -> Uint {
    self.0
  }

  /// Whether `self` is the encoding of the integer 0.
  #[inline]
  pub fn is_zero(&self) -> bool {
    *self == Self::ZERO
  }
}

impl<
  const M: u32,
  Uint: crate::Uint,
> core::fmt::Debug for Pul<M, Uint> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let e = self.0 >> Self::MANTISSA_BITS;
    let m = self.0.mask_lsb(Self::MANTISSA_BITS);
    f.debug_tuple("Pul")
      .field(&format_args!("0b{e:0we$b}_{m:0wm$b}",
        we=Self::EXPONENT_BITS as usize, wm=Self::MANTISSA_BITS as usize,
      ))
      .finish()
  }
}

mod encode;
mod decode;
mod convert;


mod tests_compile_fail {
  /// ```compile_fail
  /// use intlog::Pul;
  /// pub fn foo() -> u32 { Pul::<16, u16>::MANTISSA_BITS }
  /// ```
  #[allow(dead_code)]
  fn mantissa_fills_word() {}

  /// ```compile_fail
  /// use intlog::Pul;
  /// pub fn foo() -> u32 { Pul::<0, u32>::MANTISSA_BITS }
  /// ```
  #[allow(dead_code)]
  fn mantissa_absent() {}
}
