//! Integer bitfield arrays and the elementwise bit primitives built on them.
//!
//! Every element of a bitfield array is an unsigned integer whose bits are
//! independent flags. This crate knows nothing about what the bits mean; it
//! only answers "which elements carry these bits" and edits bits in place.

/// Elementwise mask queries and in-place bit edits.
pub mod mask;
/// Unsigned integer element types.
pub mod word;

pub use mask::{boolean_mask, clear_bits, select_mask, zero_fill};
pub use ndarray;
pub use word::BitWord;
