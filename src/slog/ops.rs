//! Codeword arithmetic: adding SLOG codewords multiplies the values they stand for, subtracting
//! divides them. This is ordinary two's complement addition — the codeword *is* the (approximate)
//! logarithm as a Q(M) number — so it costs one instruction.
//!
//! Neither operand may be the log-zero sentinel (0·x and 0/x have no logarithm to arrive at),
//! and the result must stay inside the exponent field's range; both are the caller's contract,
//! exactly as they are when adding raw codewords in the wire format this crate speaks.

use super::*;

impl<
  const M: u32,
  Int: crate::Int,
> Slog<M, Int> {
  #[inline]
  fn add(self, rhs: Self) -> Self {
    debug_assert!(self != Self::ZERO && rhs != Self::ZERO);
    Self(self.0.wrapping_add(rhs.0))
  }

  #[inline]
  fn sub(self, rhs: Self) -> Self {
    debug_assert!(self != Self::ZERO && rhs != Self::ZERO);
    Self(self.0.wrapping_sub(rhs.0))
  }
}

/// Helper macro for implementing operators for all combinations of value and reference.
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident) => {
    impl<const M: u32, Int: crate::Int>
    $trait<Slog<M, Int>> for Slog<M, Int> {
      type Output = Slog<M, Int>;

      #[inline]
      fn $name(self, rhs: Self) -> Self::Output { self.$name(rhs) }
    }

    impl<const M: u32, Int: crate::Int>
    $trait<&Slog<M, Int>> for Slog<M, Int> {
      type Output = Slog<M, Int>;

      #[inline]
      fn $name(self, rhs: &Self) -> Self::Output { self.$name(*rhs) }
    }

    impl<const M: u32, Int: crate::Int>
    $trait<Slog<M, Int>> for &Slog<M, Int> {
      type Output = Slog<M, Int>;

      #[inline]
      fn $name(self, rhs: Slog<M, Int>) -> Self::Output { (*self).$name(rhs) }
    }

    impl<const M: u32, Int: crate::Int>
    $trait<&Slog<M, Int>> for &Slog<M, Int> {
      type Output = Slog<M, Int>;

      #[inline]
      fn $name(self, rhs: &Slog<M, Int>) -> Self::Output { (*self).$name(*rhs) }
    }

    impl<const M: u32, Int: crate::Int>
    $trait_assign<Slog<M, Int>> for Slog<M, Int> {
      #[inline]
      fn $name_assign(&mut self, rhs: Slog<M, Int>) { *self = self.$name(rhs) }
    }

    impl<const M: u32, Int: crate::Int>
    $trait_assign<&Slog<M, Int>> for Slog<M, Int> {
      #[inline]
      fn $name_assign(&mut self, rhs: &Slog<M, Int>) { *self = self.$name(*rhs) }
    }
  }
}

use core::ops::{Add, AddAssign, Sub, SubAssign};
mk_ops!{Add, AddAssign, add, add_assign}
mk_ops!{Sub, SubAssign, sub, sub_assign}
