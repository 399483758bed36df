//! 128-bit compare-and-popcount kernels.
//!
//! Each kernel broadcasts the target into every lane of one XMM
//! register, walks the slice in full-lane chunks with unaligned loads,
//! reduces each lanewise equality mask with a population count, then
//! finishes the sub-lane tail with scalar compares. The vector/tail
//! split is element-index-exact, so no element is ever counted twice
//! or skipped.

use std::arch::x86_64::*;

/// Counts `i32` occurrences 4 lanes at a time.
///
/// # Safety
///
/// Caller must ensure the CPU supports AVX (enforced by runtime
/// detection in the dispatcher).
#[target_feature(enable = "avx")]
#[inline]
pub(crate) unsafe fn count_i32(haystack: &[i32], target: i32) -> usize {
    // SAFETY: `_mm_loadu_si128` has no alignment requirement, and each
    // load reads offset i * 4 + 4 <= len elements, inside the slice.
    const LANES: usize = 4;
    let chunks = haystack.len() / LANES;
    let needle = _mm_set1_epi32(target);
    let ptr = haystack.as_ptr();

    let mut matches = 0usize;
    for i in 0..chunks {
        let lanes = _mm_loadu_si128(ptr.add(i * LANES).cast());
        let eq = _mm_cmpeq_epi32(lanes, needle);
        let mask = _mm_movemask_ps(_mm_castsi128_ps(eq));
        matches += mask.count_ones() as usize;
    }

    for &value in &haystack[chunks * LANES..] {
        if value == target {
            matches += 1;
        }
    }
    matches
}

/// Counts byte occurrences 16 lanes at a time.
///
/// # Safety
///
/// Caller must ensure the CPU supports AVX (enforced by runtime
/// detection in the dispatcher).
#[target_feature(enable = "avx")]
#[inline]
pub(crate) unsafe fn count_u8(haystack: &[u8], target: u8) -> usize {
    // SAFETY: unaligned loads, each fully inside the slice (see count_i32).
    const LANES: usize = 16;
    let chunks = haystack.len() / LANES;
    #[allow(clippy::cast_possible_wrap)] // bit pattern only, compared lanewise
    let needle = _mm_set1_epi8(target as i8);
    let ptr = haystack.as_ptr();

    let mut matches = 0usize;
    for i in 0..chunks {
        let lanes = _mm_loadu_si128(ptr.add(i * LANES).cast());
        let eq = _mm_cmpeq_epi8(lanes, needle);
        let mask = _mm_movemask_epi8(eq);
        matches += mask.count_ones() as usize;
    }

    for &value in &haystack[chunks * LANES..] {
        if value == target {
            matches += 1;
        }
    }
    matches
}

/// Counts `f32` occurrences 4 lanes at a time.
///
/// Uses the ordered quiet equality predicate, so `NaN` lanes never
/// match and `-0.0` matches `+0.0`, exactly like scalar `==`.
///
/// # Safety
///
/// Caller must ensure the CPU supports AVX (enforced by runtime
/// detection in the dispatcher).
#[target_feature(enable = "avx")]
#[inline]
pub(crate) unsafe fn count_f32(haystack: &[f32], target: f32) -> usize {
    // SAFETY: unaligned loads, each fully inside the slice (see count_i32).
    const LANES: usize = 4;
    let chunks = haystack.len() / LANES;
    let needle = _mm_set1_ps(target);
    let ptr = haystack.as_ptr();

    let mut matches = 0usize;
    for i in 0..chunks {
        let lanes = _mm_loadu_ps(ptr.add(i * LANES));
        let eq = _mm_cmpeq_ps(lanes, needle);
        let mask = _mm_movemask_ps(eq);
        matches += mask.count_ones() as usize;
    }

    for &value in &haystack[chunks * LANES..] {
        if value == target {
            matches += 1;
        }
    }
    matches
}

/// Counts `f64` occurrences 2 lanes at a time.
///
/// # Safety
///
/// Caller must ensure the CPU supports AVX (enforced by runtime
/// detection in the dispatcher).
#[target_feature(enable = "avx")]
#[inline]
pub(crate) unsafe fn count_f64(haystack: &[f64], target: f64) -> usize {
    // SAFETY: unaligned loads, each fully inside the slice (see count_i32).
    const LANES: usize = 2;
    let chunks = haystack.len() / LANES;
    let needle = _mm_set1_pd(target);
    let ptr = haystack.as_ptr();

    let mut matches = 0usize;
    for i in 0..chunks {
        let lanes = _mm_loadu_pd(ptr.add(i * LANES));
        let eq = _mm_cmpeq_pd(lanes, needle);
        let mask = _mm_movemask_pd(eq);
        matches += mask.count_ones() as usize;
    }

    for &value in &haystack[chunks * LANES..] {
        if value == target {
            matches += 1;
        }
    }
    matches
}
