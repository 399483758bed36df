//! Typed dispatch from element type to the best available kernel.
//!
//! Kernel selection happens in two orthogonal layers, both invisible to
//! the caller:
//!
//! 1. **Compile time**: the [`SimdCount`] impl for the element type
//!    either overrides the default method with a vector dispatch (the
//!    four specialized types) or keeps the scalar default (everything
//!    else).
//! 2. **Run time**: an overriding impl consults the cached capability
//!    flags and picks the widest kernel the CPU can execute, in
//!    priority order 512-bit, 128-bit, scalar.

#[cfg(target_arch = "x86_64")]
use crate::detect::cpu_features;
#[cfg(target_arch = "x86_64")]
use crate::{kernel128, kernel512};
use crate::scalar;

/// Element types accepted by [`count`].
///
/// The default method body is the scalar scan. `i32`, `u8`, `f32` and
/// `f64` override it with runtime-dispatched vector kernels; the other
/// primitives keep the default, so an empty impl is all a new scalar
/// type needs:
///
/// ```rust
/// use lanecount_core::{count, SimdCount};
///
/// #[derive(PartialEq)]
/// struct Tag(u32);
/// impl SimdCount for Tag {}
///
/// let tags = [Tag(1), Tag(2), Tag(1)];
/// assert_eq!(count(&tags, &Tag(1)), 2);
/// ```
pub trait SimdCount: PartialEq + Sized {
    /// Counts occurrences of `target` in `haystack`.
    ///
    /// Prefer the free function [`count`]; this exists so impls can
    /// override the execution path per element type.
    #[inline]
    fn count_occurrences(haystack: &[Self], target: &Self) -> usize {
        scalar::count(haystack, target)
    }
}

/// Counts elements of `haystack` equal to `target`.
///
/// For `i32`, `u8`, `f32` and `f64` the widest kernel the CPU supports
/// is used; every path returns exactly the count a scalar scan would.
/// Never fails: an empty slice counts 0, and capability absence only
/// degrades throughput.
///
/// ```rust
/// use lanecount_core::count;
///
/// assert_eq!(count(&[1.0_f32, -0.0, 0.0], &0.0), 2);
/// assert_eq!(count(&[f64::NAN; 8], &f64::NAN), 0);
/// ```
#[must_use]
#[inline]
pub fn count<T: SimdCount>(haystack: &[T], target: &T) -> usize {
    T::count_occurrences(haystack, target)
}

impl SimdCount for i32 {
    #[inline]
    fn count_occurrences(haystack: &[Self], target: &Self) -> usize {
        #[cfg(target_arch = "x86_64")]
        {
            let cpu = cpu_features();
            if cpu.avx512f {
                // SAFETY: AVX-512F confirmed by runtime detection.
                return unsafe { kernel512::count_i32(haystack, *target) };
            }
            if cpu.avx {
                // SAFETY: AVX confirmed by runtime detection.
                return unsafe { kernel128::count_i32(haystack, *target) };
            }
        }
        scalar::count(haystack, target)
    }
}

impl SimdCount for u8 {
    #[inline]
    fn count_occurrences(haystack: &[Self], target: &Self) -> usize {
        #[cfg(target_arch = "x86_64")]
        {
            let cpu = cpu_features();
            if cpu.avx512f && cpu.avx512bw {
                // SAFETY: AVX-512F and AVX-512BW confirmed by runtime detection.
                return unsafe { kernel512::count_u8(haystack, *target) };
            }
            if cpu.avx {
                // SAFETY: AVX confirmed by runtime detection.
                return unsafe { kernel128::count_u8(haystack, *target) };
            }
        }
        scalar::count(haystack, target)
    }
}

impl SimdCount for f32 {
    #[inline]
    fn count_occurrences(haystack: &[Self], target: &Self) -> usize {
        #[cfg(target_arch = "x86_64")]
        {
            let cpu = cpu_features();
            if cpu.avx512f {
                // SAFETY: AVX-512F confirmed by runtime detection.
                return unsafe { kernel512::count_f32(haystack, *target) };
            }
            if cpu.avx {
                // SAFETY: AVX confirmed by runtime detection.
                return unsafe { kernel128::count_f32(haystack, *target) };
            }
        }
        scalar::count(haystack, target)
    }
}

impl SimdCount for f64 {
    #[inline]
    fn count_occurrences(haystack: &[Self], target: &Self) -> usize {
        #[cfg(target_arch = "x86_64")]
        {
            let cpu = cpu_features();
            if cpu.avx512f {
                // SAFETY: AVX-512F confirmed by runtime detection.
                return unsafe { kernel512::count_f64(haystack, *target) };
            }
            if cpu.avx {
                // SAFETY: AVX confirmed by runtime detection.
                return unsafe { kernel128::count_f64(haystack, *target) };
            }
        }
        scalar::count(haystack, target)
    }
}

// Remaining primitives take the scalar default.
impl SimdCount for i8 {}
impl SimdCount for i16 {}
impl SimdCount for i64 {}
impl SimdCount for i128 {}
impl SimdCount for isize {}
impl SimdCount for u16 {}
impl SimdCount for u32 {}
impl SimdCount for u64 {}
impl SimdCount for u128 {}
impl SimdCount for usize {}
impl SimdCount for bool {}
impl SimdCount for char {}
