//! Runtime CPU capability probing.
//!
//! Flags are probed once per process through a lazily-initialized
//! `OnceLock` and reused on every dispatch, so repeated counting calls
//! never re-read CPU identification state.

use std::sync::OnceLock;

/// Vector-extension flags for the executing CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CpuFeatures {
    /// 128-bit compare kernels (AVX, CPUID leaf 1 bit 28).
    pub avx: bool,
    /// AVX-512 Foundation (CPUID leaf 7 sub-leaf 0 bit 16).
    pub avx512f: bool,
    /// Byte-granular AVX-512 mask compares, needed by the u8 kernel.
    pub avx512bw: bool,
}

impl CpuFeatures {
    const NONE: Self = Self {
        avx: false,
        avx512f: false,
        avx512bw: false,
    };
}

/// Cached capability flags - probed once at first use.
static CPU_FEATURES: OnceLock<CpuFeatures> = OnceLock::new();

fn probe() -> CpuFeatures {
    #[cfg(target_arch = "x86_64")]
    {
        let features = CpuFeatures {
            avx: is_x86_feature_detected!("avx"),
            avx512f: is_x86_feature_detected!("avx512f"),
            avx512bw: is_x86_feature_detected!("avx512bw"),
        };
        tracing::debug!(
            avx = features.avx,
            avx512f = features.avx512f,
            avx512bw = features.avx512bw,
            "probed cpu vector capabilities"
        );
        features
    }
    #[cfg(not(target_arch = "x86_64"))]
    {
        // No CPUID-style probe on this architecture; never claim a
        // capability that cannot be verified.
        CpuFeatures::NONE
    }
}

/// Returns the cached capability flags, probing the CPU on first use.
#[inline]
pub(crate) fn cpu_features() -> CpuFeatures {
    *CPU_FEATURES.get_or_init(probe)
}

/// Returns true if the 128-bit AVX compare kernels can run on this CPU.
///
/// Stable for the lifetime of the process: every call returns the value
/// probed on first use.
#[must_use]
#[inline]
pub fn is_avx_supported() -> bool {
    cpu_features().avx
}

/// Returns true if AVX-512 Foundation is available on this CPU.
///
/// On architectures without the x86 identification mechanism this is
/// always false.
#[must_use]
#[inline]
pub fn is_avx512_supported() -> bool {
    cpu_features().avx512f
}
