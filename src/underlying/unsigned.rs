use super::{private::Sealed, Uint};

macro_rules! impl_uint {
  ($uint:ty, $nonzero:ident) => {
    impl Sealed for $uint {}
    impl Uint for $uint {
      const ZERO: Self = 0;
      const ONE: Self = 1;
      const MAX: Self = <$uint>::MAX;
      const BITS: u32 = <$uint>::BITS;

      #[inline]
      fn leading_zeros(self) -> u32 {
        self.leading_zeros()
      }

      #[inline]
      unsafe fn leading_zeros_nonzero(self) -> u32 {
        unsafe { core::num::$nonzero::new_unchecked(self) }.leading_zeros()
      }

      #[inline]
      fn mask_lsb(self, n: u32) -> Self {
        let mask = (1 as $uint << n).wrapping_sub(1);
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
        x as $uint
      }

      #[inline]
      fn as_u64(self) -> u64 {
        self as u64
      }

      #[inline]
      fn of_u64(x: u64) -> Self {
        x as $uint
      }

      #[inline]
      fn wrapping_add(self, other: Self) -> Self { self.wrapping_add(other) }

      #[inline]
      fn wrapping_sub(self, other: Self) -> Self { self.wrapping_sub(other) }
    }
  }
}

impl_uint!{u8, NonZeroU8}
impl_uint!{u16, NonZeroU16}
impl_uint!{u32, NonZeroU32}
impl_uint!{u64, NonZeroU64}
