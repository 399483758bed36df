//! # `lanecount`
//!
//! Occurrence counting over contiguous slices, accelerated with
//! runtime-dispatched vector kernels.
//!
//! For `i32`, `u8`, `f32` and `f64` slices the dispatcher picks the widest
//! compare-and-popcount kernel the executing CPU supports, in priority order
//! AVX-512 (512-bit), AVX (128-bit), scalar. Every other element type takes
//! the scalar path. All paths return exactly the count a plain linear scan
//! would; vectorization only changes throughput, never the result.
//!
//! ## Quick Start
//!
//! ```rust
//! use lanecount_core::count;
//!
//! let values = [1, 2, 3, 3, 3, 4];
//! assert_eq!(count(&values, &3), 3);
//!
//! let text = b"mississippi";
//! assert_eq!(count(text, &b's'), 4);
//! ```
//!
//! ## Float semantics
//!
//! Equality follows IEEE-754 on every path: `NaN` never matches anything,
//! `-0.0` matches `+0.0`.
//!
//! ## Architecture Support
//!
//! - **`x86_64` AVX-512**: 512-bit kernels (16 x i32/f32, 64 x u8, 8 x f64)
//! - **`x86_64` AVX**: 128-bit kernels (4 x i32/f32, 16 x u8, 2 x f64)
//! - **Fallback**: scalar scan for other architectures and element types

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]

mod count;
mod detect;
#[cfg(target_arch = "x86_64")]
mod kernel128;
#[cfg(target_arch = "x86_64")]
mod kernel512;
mod scalar;

pub use count::{count, SimdCount};
pub use detect::{is_avx512_supported, is_avx_supported};
