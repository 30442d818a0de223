#![cfg_attr(not(test), no_std)]
//! Integer-only fixed-point and pseudo-logarithmic numerics for FPU-free environments
//! (microcontroller firmware, kernels, bare-metal signal paths).
//!
//! # Introduction
//!
//! This crate provides three interconvertible encodings built entirely on integer operations:
//!
//!   - **Fixed-point** ([`UFixed`], [`SFixed`]): ordinary Q-format words, the linear side of
//!     every conversion.
//!   - **PUL** ([`Pul`]): a packed *unsigned* pseudo-logarithmic codeword. Dense — a `u64` range
//!     fits a `u16` — and meant for storage or transmission, not arithmetic.
//!   - **SLOG** ([`Slog`]): a *signed* pseudo-logarithmic codeword on which addition and
//!     subtraction are linear-domain multiplication and division. Hot values live here.
//!
//! Encoding is a count-leading-zeros, two shifts and an add: the codeword holds `⌊log₂ v⌋` in
//! its exponent field and the *linear* fraction of the normalised value in its mantissa field.
//! That linear stand-in for `log₂(1+m)` is the entire trick — see [`Slog`] for the error budget,
//! and the `*_corrected` codec variants for the table-driven quadratic correction that shrinks
//! it about tenfold.
//!
//! Every operation is a pure function on plain machine words: no allocation, no floats, no
//! shared state, constant time.
//!
//! # Usage
//!
//! ```
//! use intlog::{ewma_div, Pul, Slog, Radix, pul_max_mantissa, slog_max_mantissa};
//!
//! // Pack a u64 into 16 bits for storage: 6 exponent bits cover the u64 range, 10 mantissa
//! // bits give ~0.1% worst-case error.
//! type Packed = Pul<{ pul_max_mantissa(64, 16) }, u16>;
//! assert_eq!(Packed::encode(50_000u64).decode::<u64>(), 49_984);
//!
//! // Multiply by adding codewords; decode only at the edge.
//! type Log = Slog<{ slog_max_mantissa(64, 32) }, i32>;
//! let product = (Log::encode(1000u64) + Log::encode(2000u64)).decode::<u64>();
//! assert!(product > 1_800_000 && product < 2_220_000);
//!
//! // Apply a −3 dB gain without ever computing a logarithm at runtime.
//! let gain = Log::from_bits(-3 << 25).rescale_from(Radix::DbPower);
//! let attenuated = (Log::encode(1000u64) + gain).decode::<u64>();
//! assert!(attenuated > 450 && attenuated < 560);
//!
//! // Smooth a noisy sensor series in Q24.8.
//! assert_eq!(ewma_div(200 << 8, 100 << 8, 0, 4u32), 125 << 8);
//! ```
//!
//! The mantissa budget `M` (and the fixed-point fraction width `F`) ride in the types, so two
//! codewords of different layouts cannot be mixed by accident, and the zero sentinels of both
//! log formats are preserved by construction through every codec and converter. Serialized
//! codewords interoperate with any other implementation of the same layout contract: exponent
//! in the high bits, mantissa in the low bits, matching `(width, M, corrected?)` at both ends.

mod underlying;
mod fixed;
mod pul;
mod slog;
mod ewma;

pub use underlying::{Int, Uint};
pub use fixed::{SFixed, UFixed};
pub use pul::Pul;
pub use slog::{Radix, Slog};
pub use ewma::{ewma_div, ewma_shr};

/// `fls` over a plain `u32`, usable in const context (1-indexed position of the highest set
/// bit, 0 for 0).
const fn fls32(v: u32) -> u32 {
  32 - v.leading_zeros()
}

/// The largest mantissa budget for a PUL codeword of `pul_bits` that still fits every value of
/// an unsigned `int_bits`-wide source: what remains after the exponent field takes
/// `fls(int_bits - 1)` bits.
///
/// ```
/// # use intlog::pul_max_mantissa;
/// assert_eq!(pul_max_mantissa(64, 32), 26);
/// assert_eq!(pul_max_mantissa(64, 16), 10);
/// assert_eq!(pul_max_mantissa(8, 8), 5);
/// ```
pub const fn pul_max_mantissa(int_bits: u32, pul_bits: u32) -> u32 {
  pul_bits - fls32(int_bits - 1)
}

/// As [`pul_max_mantissa`], for SLOG codewords: one more bit goes to the sign.
///
/// ```
/// # use intlog::slog_max_mantissa;
/// assert_eq!(slog_max_mantissa(64, 32), 25);
/// assert_eq!(slog_max_mantissa(64, 16), 9);
/// ```
pub const fn slog_max_mantissa(int_bits: u32, slog_bits: u32) -> u32 {
  slog_bits - 1 - fls32(int_bits - 1)
}

/// 8-bit PUL codeword with `M` mantissa bits.
#[allow(non_camel_case_types)]
pub type pul8<const M: u32> = Pul<M, u8>;

/// 16-bit PUL codeword with `M` mantissa bits.
#[allow(non_camel_case_types)]
pub type pul16<const M: u32> = Pul<M, u16>;

/// 32-bit PUL codeword with `M` mantissa bits.
#[allow(non_camel_case_types)]
pub type pul32<const M: u32> = Pul<M, u32>;

/// 64-bit PUL codeword with `M` mantissa bits.
#[allow(non_camel_case_types)]
pub type pul64<const M: u32> = Pul<M, u64>;

/// 8-bit SLOG codeword with `M` mantissa bits.
#[allow(non_camel_case_types)]
pub type slog8<const M: u32> = Slog<M, i8>;

/// 16-bit SLOG codeword with `M` mantissa bits.
#[allow(non_camel_case_types)]
pub type slog16<const M: u32> = Slog<M, i16>;

/// 32-bit SLOG codeword with `M` mantissa bits.
#[allow(non_camel_case_types)]
pub type slog32<const M: u32> = Slog<M, i32>;

/// 64-bit SLOG codeword with `M` mantissa bits.
#[allow(non_camel_case_types)]
pub type slog64<const M: u32> = Slog<M, i64>;

#[cfg(test)]
pub(crate) const PROPTEST_CASES: u32 = if cfg!(debug_assertions) { 0x1_0000 } else { 0x10_0000 };
