use super::{private::Sealed, Int};

macro_rules! impl_int {
  ($int:ty, $uint:ty) => {
    impl Sealed for $int {}
    impl Int for $int {
      type Unsigned = $uint;

      const ZERO: Self = 0;
      const ONE: Self = 1;
      const MIN: Self = <$int>::MIN;
      const MAX: Self = <$int>::MAX;
      const BITS: u32 = <$int>::BITS;

      #[inline]
      fn as_unsigned(self) -> $uint { self as $uint }

      #[inline]
      fn of_unsigned(x: $uint) -> Self { x as $int }

      #[inline]
      fn is_negative(self) -> bool { self < 0 }

      #[inline]
      fn mask_lsb(self, n: u32) -> Self {
        let mask = (1 as $int << n).wrapping_sub(1);
        self & mask
      }

      #[inline]
      fn as_u32(self) -> u32 {
        debug_assert!(u32::try_from(self).is_ok());
        self as u32
      }

      #[inline]
      fn of_u32(x: u32) -> Self {
        debug_assert!(Self::try_from(x).is_ok());
        x as $int
      }

      #[inline]
      fn as_i64(self) -> i64 {
        self as i64
      }

      #[inline]
      fn of_i64(x: i64) -> Self {
        x as $int
      }

      #[inline]
      fn wrapping_add(self, other: Self) -> Self { self.wrapping_add(other) }

      #[inline]
      fn wrapping_sub(self, other: Self) -> Self { self.wrapping_sub(other) }

      #[inline]
      fn wrapping_neg(self) -> Self { self.wrapping_neg() }

      #[inline]
      fn wrapping_shl(self, n: u32) -> Self { self.wrapping_shl(n) }
    }
  }
}

impl_int!{i8, u8}
impl_int!{i16, u16}
impl_int!{i32, u32}
impl_int!{i64, u64}
