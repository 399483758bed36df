//! 512-bit compare-and-popcount kernels.
//!
//! Same shape as the 128-bit kernels at four times the width. AVX-512
//! compares produce a mask register directly, so each chunk reduces to
//! a single `count_ones` with no movemask step. The byte kernel needs
//! AVX-512BW on top of the Foundation set for its 64-lane compare; the
//! dispatcher checks both flags before calling it.

use std::arch::x86_64::*;

/// Counts `i32` occurrences 16 lanes at a time.
///
/// # Safety
///
/// Caller must ensure the CPU supports AVX-512F (enforced by runtime
/// detection in the dispatcher).
#[target_feature(enable = "avx512f")]
#[inline]
pub(crate) unsafe fn count_i32(haystack: &[i32], target: i32) -> usize {
    // SAFETY: `_mm512_loadu_si512` has no alignment requirement, and
    // each load reads offset i * 16 + 16 <= len elements, inside the slice.
    const LANES: usize = 16;
    let chunks = haystack.len() / LANES;
    let needle = _mm512_set1_epi32(target);
    let ptr = haystack.as_ptr();

    let mut matches = 0usize;
    for i in 0..chunks {
        let lanes = _mm512_loadu_si512(ptr.add(i * LANES).cast());
        let mask = _mm512_cmpeq_epi32_mask(lanes, needle);
        matches += mask.count_ones() as usize;
    }

    for &value in &haystack[chunks * LANES..] {
        if value == target {
            matches += 1;
        }
    }
    matches
}

/// Counts byte occurrences 64 lanes at a time.
///
/// # Safety
///
/// Caller must ensure the CPU supports AVX-512F and AVX-512BW
/// (enforced by runtime detection in the dispatcher).
#[target_feature(enable = "avx512f", enable = "avx512bw")]
#[inline]
pub(crate) unsafe fn count_u8(haystack: &[u8], target: u8) -> usize {
    // SAFETY: unaligned loads, each fully inside the slice (see count_i32).
    const LANES: usize = 64;
    let chunks = haystack.len() / LANES;
    #[allow(clippy::cast_possible_wrap)] // bit pattern only, compared lanewise
    let needle = _mm512_set1_epi8(target as i8);
    let ptr = haystack.as_ptr();

    let mut matches = 0usize;
    for i in 0..chunks {
        let lanes = _mm512_loadu_si512(ptr.add(i * LANES).cast());
        let mask = _mm512_cmpeq_epi8_mask(lanes, needle);
        matches += mask.count_ones() as usize;
    }

    for &value in &haystack[chunks * LANES..] {
        if value == target {
            matches += 1;
        }
    }
    matches
}

/// Counts `f32` occurrences 16 lanes at a time.
///
/// Ordered quiet equality: `NaN` lanes never match, `-0.0` matches
/// `+0.0`.
///
/// # Safety
///
/// Caller must ensure the CPU supports AVX-512F (enforced by runtime
/// detection in the dispatcher).
#[target_feature(enable = "avx512f")]
#[inline]
pub(crate) unsafe fn count_f32(haystack: &[f32], target: f32) -> usize {
    // SAFETY: unaligned loads, each fully inside the slice (see count_i32).
    const LANES: usize = 16;
    let chunks = haystack.len() / LANES;
    let needle = _mm512_set1_ps(target);
    let ptr = haystack.as_ptr();

    let mut matches = 0usize;
    for i in 0..chunks {
        let lanes = _mm512_loadu_ps(ptr.add(i * LANES));
        let mask = _mm512_cmpeq_ps_mask(lanes, needle);
        matches += mask.count_ones() as usize;
    }

    for &value in &haystack[chunks * LANES..] {
        if value == target {
            matches += 1;
        }
    }
    matches
}

/// Counts `f64` occurrences 8 lanes at a time.
///
/// # Safety
///
/// Caller must ensure the CPU supports AVX-512F (enforced by runtime
/// detection in the dispatcher).
#[target_feature(enable = "avx512f")]
#[inline]
pub(crate) unsafe fn count_f64(haystack: &[f64], target: f64) -> usize {
    // SAFETY: unaligned loads, each fully inside the slice (see count_i32).
    const LANES: usize = 8;
    let chunks = haystack.len() / LANES;
    let needle = _mm512_set1_pd(target);
    let ptr = haystack.as_ptr();

    let mut matches = 0usize;
    for i in 0..chunks {
        let lanes = _mm512_loadu_pd(ptr.add(i * LANES));
        let mask = _mm512_cmpeq_pd_mask(lanes, needle);
        matches += mask.count_ones() as usize;
    }

    for &value in &haystack[chunks * LANES..] {
        if value == target {
            matches += 1;
        }
    }
    matches
}
