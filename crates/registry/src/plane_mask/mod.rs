use std::borrow::Cow;

use indexmap::IndexMap;
use planemask_bitfield::ndarray::{Array, Dimension, IxDyn};
use planemask_bitfield::{BitWord, clear_bits, select_mask, zero_fill};

use crate::{PlaneError, PlaneMaskBuilder, PlaneSelection, PlaneTable};


pub(crate) const DEFAULT_LABEL: &str = "planes";

/// Named bit planes over an owned bitfield array.
///
/// Each element of `data` is a `W` whose bits are planes. Planes get bit
/// indices in the order they are added; queries accept any
/// [`PlaneSelection`] and answer with boolean arrays shaped like `data`.
///
/// Bad planes are tracked as a bit pattern over registered planes only, so
/// the set can grow by union but never refers to an unknown name.
#[derive(Debug, Clone)]
pub struct PlaneMaskRegistry<W: BitWord = u64, D: Dimension = IxDyn> {
	pub(crate) label: Cow<'static, str>,
	pub(crate) data: Array<W, D>,
	pub(crate) table: PlaneTable,
	pub(crate) bad: u64,
}

impl<W: BitWord, D: Dimension> PlaneMaskRegistry<W, D> {
	/// Wraps `data` with an empty plane table.
	pub fn new(data: Array<W, D>) -> Self {
		Self {
			label: Cow::Borrowed(DEFAULT_LABEL),
			data,
			table: PlaneTable::new(W::BITS),
			bad: 0,
		}
	}

	/// Wraps `data` and registers `planes` at bits 0, 1, 2, ... in order.
	pub fn with_planes<I>(data: Array<W, D>, planes: I) -> Result<Self, PlaneError>
	where
		I: IntoIterator,
		I::Item: AsRef<str>,
	{
		Self::builder(data).planes(planes).build()
	}

	/// Starts a [`PlaneMaskBuilder`] over `data`.
	pub fn builder(data: Array<W, D>) -> PlaneMaskBuilder<W, D> {
		PlaneMaskBuilder::new(data)
	}

	/// Name used in log events.
	pub fn label(&self) -> &str {
		&self.label
	}

	pub fn data(&self) -> &Array<W, D> {
		&self.data
	}

	/// Mutable access to the backing array. Plane bookkeeping is unaffected.
	pub fn data_mut(&mut self) -> &mut Array<W, D> {
		&mut self.data
	}

	pub fn into_data(self) -> Array<W, D> {
		self.data
	}

	pub fn table(&self) -> &PlaneTable {
		&self.table
	}

	/// Registers `name` at the bit after the most recently added plane.
	pub fn add_plane(&mut self, name: &str) -> Result<(), PlaneError> {
		let index = self.table.insert(name)?;
		tracing::debug!(registry = %self.label, plane = name, index, "added mask plane");
		Ok(())
	}

	/// Every plane mapped to its bit value, in bit order.
	pub fn planes(&self) -> IndexMap<&str, u64> {
		self.table.decode(u64::MAX).collect()
	}

	pub fn plane_bit(&self, name: &str) -> Option<u64> {
		self.table.bit_value(name)
	}

	pub fn plane_index(&self, name: &str) -> Option<u32> {
		self.table.index_of(name)
	}

	pub fn contains_plane(&self, name: &str) -> bool {
		self.table.contains(name)
	}

	pub fn plane_count(&self) -> usize {
		self.table.len()
	}

	/// Closest registered plane name to `name`, if any is near enough.
	pub fn suggest_plane(&self, name: &str) -> Option<&str> {
		self.table.suggest(name)
	}

	/// Bad planes mapped to their bit values, in bit order.
	pub fn bad_planes(&self) -> IndexMap<&str, u64> {
		self.table.decode(self.bad).collect()
	}

	/// Combined bit pattern of every bad plane.
	pub fn bad_bits(&self) -> u64 {
		self.bad
	}

	/// Adds the selected planes to the bad set.
	///
	/// The set only grows. A raw bit pattern marks every registered plane
	/// whose bit it sets and ignores the rest. A name selection containing
	/// any unregistered name fails and marks nothing.
	pub fn mark_bad(&mut self, selection: impl Into<PlaneSelection>) -> Result<(), PlaneError> {
		let selection: PlaneSelection = selection.into();
		let bits = match selection {
			PlaneSelection::ByBits(bits) => bits & self.table.known_bits(),
			names => self.table.to_bits(&names)?,
		};
		self.bad |= bits;
		tracing::debug!(registry = %self.label, bits, bad = self.bad, "marked bad planes");
		Ok(())
	}

	/// Empties the bad set.
	pub fn reset_bad(&mut self) {
		self.bad = 0;
		tracing::debug!(registry = %self.label, "reset bad planes");
	}

	/// Converts a selection into a bit pattern.
	///
	/// See [`PlaneTable::to_bits`].
	pub fn to_bits(&self, selection: impl Into<PlaneSelection>) -> Result<u64, PlaneError> {
		self.table.to_bits(&selection.into())
	}

	/// Marks elements that carry at least one bad-plane bit.
	///
	/// All `false` while the bad set is empty.
	pub fn get_bad_mask(&self) -> Array<bool, D> {
		tracing::trace!(registry = %self.label, bits = self.bad, "bad mask");
		select_mask(&self.data, W::from_pattern(self.bad))
	}

	/// Marks elements that carry at least one selected bit.
	///
	/// Bits outside the selection never affect the result. Bits past the
	/// width of `W` cannot be set on any element and match nothing.
	pub fn get_bool_mask(
		&self,
		selection: impl Into<PlaneSelection>,
	) -> Result<Array<bool, D>, PlaneError> {
		let bits = self.to_bits(selection)?;
		tracing::trace!(registry = %self.label, bits, "bool mask");
		Ok(select_mask(&self.data, W::from_pattern(bits)))
	}

	/// Clears the selected bits on every element.
	pub fn clear(&mut self, selection: impl Into<PlaneSelection>) -> Result<(), PlaneError> {
		let bits = self.to_bits(selection)?;
		clear_bits(&mut self.data, W::from_pattern(bits));
		tracing::debug!(registry = %self.label, bits, "cleared planes");
		Ok(())
	}

	/// Zeroes the whole array, keeping its shape.
	pub fn clear_all(&mut self) {
		zero_fill(&mut self.data);
		tracing::debug!(registry = %self.label, shape = ?self.data.shape(), "cleared all planes");
	}
}
