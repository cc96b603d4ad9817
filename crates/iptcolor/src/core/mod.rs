pub(crate) mod adjust;
mod conversion;
mod equality;
mod gamut;
mod hsl;
mod packing;
mod string;

// conversion
pub(crate) use conversion::{from_24bit, ipt_to_rgb, rgb_to_ipt, to_24bit};

// equality
#[cfg(feature = "pyffi")]
pub use equality::close_enough;
pub use equality::to_eq_bits;
pub(crate) use equality::to_eq_channels;

// gamut
pub(crate) use gamut::{in_gamut, maximize_chroma};

// packing
pub(crate) use packing::{pack, packed_in_gamut, settle_in_gamut, unpack, RESERVED_BIT};

// string
pub(crate) use string::{format, parse, Notation};
