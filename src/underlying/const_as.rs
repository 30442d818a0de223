use super::*;

/// One line of the [`const_as`] function.
macro_rules! const_as_line {
  ($x:ident, $from:ty, $to:ty) => {
    if const { T::BITS == <$from>::BITS && U::BITS == <$to>::BITS } {
      // SAFETY: T, U and the candidate pair belong to the same sealed family, so matching on
      // BITS pins `$from` to `T` and `$to` to `U`; both transmute_copy are no-ops.
      let t = unsafe { ::core::mem::transmute_copy::<T, $from>(&$x) };
      let u = t as $to;
      return unsafe { ::core::mem::transmute_copy::<$to, U>(&u) }
    }
  }
}

/// A type-generic and `const` version of the keyword `as`, for casting between [`Uint`]s
/// (zero-extending when widening, truncating when narrowing).
///
/// ```ignore
/// assert_eq!(const_as::<u16, u32>(0xabcd_u16), 0x0000abcd_u32);
/// assert_eq!(const_as::<u64, u8>(0x1234_u64), 0x34_u8);
/// ```
pub const fn const_as<T: Uint, U: Uint>(x: T) -> U {
  const_as_line!(x, u8, u8);
  const_as_line!(x, u8, u16);
  const_as_line!(x, u8, u32);
  const_as_line!(x, u8, u64);
  const_as_line!(x, u16, u8);
  const_as_line!(x, u16, u16);
  const_as_line!(x, u16, u32);
  const_as_line!(x, u16, u64);
  const_as_line!(x, u32, u8);
  const_as_line!(x, u32, u16);
  const_as_line!(x, u32, u32);
  const_as_line!(x, u32, u64);
  const_as_line!(x, u64, u8);
  const_as_line!(x, u64, u16);
  const_as_line!(x, u64, u32);
  const_as_line!(x, u64, u64);
  unreachable!() // cannot be const { unreachable!() }
}

/// As [`const_as`], but for [`Int`]s (sign-extending when widening, truncating when narrowing).
pub const fn const_as_int<T: Int, U: Int>(x: T) -> U {
  const_as_line!(x, i8, i8);
  const_as_line!(x, i8, i16);
  const_as_line!(x, i8, i32);
  const_as_line!(x, i8, i64);
  const_as_line!(x, i16, i8);
  const_as_line!(x, i16, i16);
  const_as_line!(x, i16, i32);
  const_as_line!(x, i16, i64);
  const_as_line!(x, i32, i8);
  const_as_line!(x, i32, i16);
  const_as_line!(x, i32, i32);
  const_as_line!(x, i32, i64);
  const_as_line!(x, i64, i8);
  const_as_line!(x, i64, i16);
  const_as_line!(x, i64, i32);
  const_as_line!(x, i64, i64);
  unreachable!()
}
