use std::borrow::Cow;

use planemask_bitfield::BitWord;
use planemask_bitfield::ndarray::{Array, Dimension, IxDyn};

use crate::plane_mask::DEFAULT_LABEL;
use crate::{PlaneError, PlaneMaskRegistry, PlaneSelection, PlaneTable};

/// Builder for a [`PlaneMaskRegistry`].
///
/// Planes are registered in the order given, then bad selections are
/// applied. The first failure aborts the build.
pub struct PlaneMaskBuilder<W: BitWord = u64, D: Dimension = IxDyn> {
	label: Cow<'static, str>,
	data: Array<W, D>,
	planes: Vec<String>,
	bad: Vec<PlaneSelection>,
}

impl<W: BitWord, D: Dimension> PlaneMaskBuilder<W, D> {
	/// Creates a builder over `data` with no planes.
	pub fn new(data: Array<W, D>) -> Self {
		Self {
			label: Cow::Borrowed(DEFAULT_LABEL),
			data,
			planes: Vec::new(),
			bad: Vec::new(),
		}
	}

	/// Sets the name used in log events.
	pub fn label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
		self.label = label.into();
		self
	}

	/// Adds one plane at the next bit.
	pub fn plane(mut self, name: impl Into<String>) -> Self {
		self.planes.push(name.into());
		self
	}

	/// Adds planes at the next bits, in iteration order.
	pub fn planes<I>(mut self, names: I) -> Self
	where
		I: IntoIterator,
		I::Item: AsRef<str>,
	{
		self.planes
			.extend(names.into_iter().map(|name| name.as_ref().to_owned()));
		self
	}

	/// Marks a selection bad once the planes are registered.
	pub fn bad(mut self, selection: impl Into<PlaneSelection>) -> Self {
		self.bad.push(selection.into());
		self
	}

	/// Builds the registry.
	pub fn build(self) -> Result<PlaneMaskRegistry<W, D>, PlaneError> {
		let mut table = PlaneTable::new(W::BITS);
		for name in &self.planes {
			table.insert(name)?;
		}

		let mut registry = PlaneMaskRegistry {
			label: self.label,
			data: self.data,
			table,
			bad: 0,
		};
		for selection in self.bad {
			registry.mark_bad(selection)?;
		}

		tracing::debug!(
			registry = %registry.label,
			planes = registry.plane_count(),
			bad = registry.bad,
			"built plane mask registry"
		);
		Ok(registry)
	}
}
