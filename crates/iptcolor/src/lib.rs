#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. Enable the `pyffi` feature for a version that also covers Python integration. "
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**. Disable the `pyffi` feature for a version without Python integration. "
)]
//!
//! # IPT Colors in 32 Bits
//!
//! This crate stores colors in an IPT-like opponent color space. One channel
//! captures intensity and two channels capture the red-green and
//! yellow-blue opponent axes. Because intensity is decoupled from chroma,
//! lightening, darkening, saturating, and desaturating a color are simple
//! channel edits. Since only a part of the cube spanned by the three channels
//! corresponds to displayable sRGB colors, every editor that may push a color
//! out of gamut limits the result by pulling chroma toward neutral along a
//! fixed intensity.
//!
//!
//! ## 1. Overview
//!
//! The crate's main abstractions are:
//!
//!   * [`Ipt`] is a **high-resolution color** with intensity, two chroma
//!     channels, and alpha. All four channels are stored in the unit range,
//!     with neutral chroma at 0.5. Its methods implement conversion from and
//!     to sRGB, gamut testing and limiting, as well as a large number of
//!     editors.
//!   * [`PackedIpt`] is the **32-bit storage format**. It holds intensity and
//!     chroma in 8 bits each and alpha in 7 bits. The remaining bit is always
//!     zero, which keeps the word a finite number when reinterpreted as a
//!     32-bit float.
//!   * [`ChannelEdit`] is a multiply-add edit across all four channels.
//!   * [`random_color`] and [`try_random_color`] generate **random in-gamut
//!     colors** by rejection sampling.
//!
//! The mapping between sRGB and IPT goes through linear sRGB and LMS. It
//! approximates sRGB's transfer function with a plain square and applies a
//! sign-preserving power 0.43 to LMS cone responses.
//!
//! ```
//! # use iptcolor::{Ipt, PackedIpt};
//! let steel = Ipt::from_24bit(0x33, 0x66, 0x99);
//! assert!(steel.in_gamut());
//!
//! let packed = PackedIpt::from(steel);
//! assert_eq!(packed.alpha_byte(), 0xfe);
//!
//! let [r, g, b] = Ipt::from(packed).to_24bit();
//! assert!(r.abs_diff(0x33) <= 2 && g.abs_diff(0x66) <= 2 && b.abs_diff(0x99) <= 2);
//! ```
//!
//!
//! ## 2. Optional Features
//!
//! This crate supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`pyffi`** controls the Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Throughout the API documentation, items that are only available in Rust are
//! decorated with <i class=rust-only>Rust only!</i>.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]
//!
//!
//! ## 3. Logging
//!
//! The gamut limiter and the random color generator emit [`tracing`] events at
//! the `trace` and `debug` levels. They are free unless an application
//! installs a subscriber.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
mod edit;
pub mod error;
mod object;
mod packed;
mod random;

#[cfg(feature = "pyffi")]
pub use core::close_enough;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use edit::ChannelEdit;
pub use object::Ipt;
pub use packed::PackedIpt;
pub use random::{random_color, try_random_color};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn iptcolor(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(close_enough, m)?)?;
    m.add_class::<Ipt>()?;
    m.add_class::<PackedIpt>()?;
    Ok(())
}
