//! Exponentially-weighted moving averages on signed integer (or fixed-point) samples:
//! `old + (new - old) / damper`, with a clamp floor and two damper flavours.
//!
//! These are Q-format agnostic — feed them raw integers or the bits of same-`F`
//! [`SFixed`](crate::SFixed) values alike, the arithmetic is identical.

use crate::underlying::Int;
use crate::underlying::Uint;

/// Fold `new` into the running average `old`, dividing the difference by `damper`.
///
/// The division rounds *up*, so whenever the clamped inputs differ the average moves by at least
/// 1 — a plain truncating division stalls forever below `old + damper`. A `damper` of 0 or 1
/// means no smoothing: `new` is returned as-is. Inputs below `bottom_limit` are clamped up to it
/// first.
///
/// ```
/// # use intlog::ewma_div;
/// // Q24.8 samples: old 100.0, new 200.0, damper 4 → 125.0
/// assert_eq!(ewma_div(200 << 8, 100 << 8, 0, 4u32), 125 << 8);
/// // Minimum advancement: a tiny difference still moves the average
/// assert_eq!(ewma_div(101i32, 100, 0, 64u32), 101);
/// ```
pub fn ewma_div<I: Int>(new: I, old: I, bottom_limit: I, damper: I::Unsigned) -> I {
  if damper <= <I::Unsigned>::ONE {
    return new;
  }
  let old = if old < bottom_limit { bottom_limit } else { old };
  let new = if new < bottom_limit { bottom_limit } else { new };
  if new == old {
    return old;
  }
  // The difference of two clamped signed values can exceed the signed range, so it is formed in
  // the unsigned mirror width, where two's complement makes it exact.
  let abs_diff = if new > old {
    new.as_unsigned().wrapping_sub(old.as_unsigned())
  } else {
    old.as_unsigned().wrapping_sub(new.as_unsigned())
  };
  let rem = if abs_diff % damper != <I::Unsigned>::ZERO { <I::Unsigned>::ONE } else { <I::Unsigned>::ZERO };
  let adj = (abs_diff / damper).wrapping_add(rem);
  if new > old {
    I::of_unsigned(old.as_unsigned().wrapping_add(adj))
  } else {
    I::of_unsigned(old.as_unsigned().wrapping_sub(adj))
  }
}

/// As [`ewma_div`], but the damper is a right-shift count: `old + (new - old) / 2^shift`.
///
/// Cheaper when the damper is a power of two, but the shift truncates, so the minimum-advance
/// guarantee of [`ewma_div`] is lost: differences below `2^shift` leave the average in place.
/// A `shift` of 0 or 1 returns `new` unsmoothed, mirroring the division flavour.
pub fn ewma_shr<I: Int>(new: I, old: I, bottom_limit: I, shift: u32) -> I {
  if shift <= 1 {
    return new;
  }
  let old = if old < bottom_limit { bottom_limit } else { old };
  let new = if new < bottom_limit { bottom_limit } else { new };
  if new == old {
    return old;
  }
  let abs_diff = if new > old {
    new.as_unsigned().wrapping_sub(old.as_unsigned())
  } else {
    old.as_unsigned().wrapping_sub(new.as_unsigned())
  };
  let adj = abs_diff >> shift;
  if new > old {
    I::of_unsigned(old.as_unsigned().wrapping_add(adj))
  } else {
    I::of_unsigned(old.as_unsigned().wrapping_sub(adj))
  }
}
