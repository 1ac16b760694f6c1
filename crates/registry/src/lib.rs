//! Named bit planes over integer bitfield arrays.
//!
//! # Purpose
//!
//! Each element of a bitfield array packs independent flags into one
//! unsigned integer. This crate names those bits ("planes"), keeps the
//! name to bit mapping stable, and converts between the three ways a caller
//! can pick planes: one name, a list of names, or a raw bit pattern.
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`PlaneMaskRegistry`] | Owns the array, the plane table and the bad-plane set. |
//! | [`PlaneTable`] | Ordered name to bit-index mapping. |
//! | [`PlaneSelection`] | Name, names, or bit pattern. |
//! | [`PlaneMaskBuilder`] | Seeds planes and bad planes before first use. |
//! | [`PlaneError`] | Duplicate, unknown, or over-capacity planes. |
//!
//! # Invariants
//!
//! - Planes receive bit indices 0, 1, 2, ... in insertion order and keep them.
//! - The bad set only references registered planes and only grows until
//!   [`PlaneMaskRegistry::reset_bad`].
//! - Failed operations leave the registry unchanged.
//!
//! # Example
//!
//! ```
//! use planemask_registry::PlaneMaskRegistry;
//! use planemask_registry::ndarray::array;
//!
//! let mut mask = PlaneMaskRegistry::with_planes(array![1u8, 2, 4, 8], ["a", "b", "c", "d"])?;
//! mask.mark_bad(10u64)?;
//! assert_eq!(mask.get_bad_mask(), array![false, true, false, true]);
//! mask.clear("b")?;
//! assert_eq!(mask.data(), &array![1u8, 0, 4, 8]);
//! # Ok::<(), planemask_registry::PlaneError>(())
//! ```

mod builder;
mod error;
mod plane_mask;
mod selection;
mod table;

pub use builder::PlaneMaskBuilder;
pub use error::PlaneError;
pub use plane_mask::PlaneMaskRegistry;
pub use planemask_bitfield::{BitWord, ndarray};
pub use selection::PlaneSelection;
pub use table::PlaneTable;
