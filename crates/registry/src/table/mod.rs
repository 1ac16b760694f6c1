//! Ordered name to bit-index table.
//!
//! # Invariants
//!
//! - Bit indices are contiguous from 0 in insertion order.
//!   - Enforced in: [`PlaneTable::insert`].
//!   - Failure symptom: two names share a bit, or a bit is skipped.
//! - A name's index never changes once assigned. There is no removal.
//! - Name selections resolve all-or-nothing.
//!   - Enforced in: [`PlaneTable::check`], which runs before any bit is combined.

use indexmap::IndexMap;

use crate::{PlaneError, PlaneSelection};


/// Name to bit-index mapping with a fixed capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaneTable {
	indices: IndexMap<String, u32>,
	capacity: u32,
}

impl PlaneTable {
	/// Creates an empty table holding at most `capacity` planes (clamped to 64).
	pub fn new(capacity: u32) -> Self {
		Self {
			indices: IndexMap::new(),
			capacity: capacity.min(u64::BITS),
		}
	}

	/// Maximum number of planes.
	pub fn capacity(&self) -> u32 {
		self.capacity
	}

	/// Number of registered planes.
	pub fn len(&self) -> usize {
		self.indices.len()
	}

	/// Returns true if no plane is registered.
	pub fn is_empty(&self) -> bool {
		self.indices.is_empty()
	}

	pub fn contains(&self, name: &str) -> bool {
		self.indices.contains_key(name)
	}

	/// Bit index of `name`.
	pub fn index_of(&self, name: &str) -> Option<u32> {
		self.indices.get(name).copied()
	}

	/// Bit value (`1 << index`) of `name`.
	pub fn bit_value(&self, name: &str) -> Option<u64> {
		self.index_of(name).map(bit_of)
	}

	/// Iterates `(name, index)` pairs in assignment order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
		self.indices
			.iter()
			.map(|(name, &index)| (name.as_str(), index))
	}

	/// Registers `name` at the next free bit and returns its index.
	///
	/// The next index follows the most recently added plane, not the
	/// highest-sorting name.
	pub fn insert(&mut self, name: &str) -> Result<u32, PlaneError> {
		if self.contains(name) {
			return Err(PlaneError::DuplicatePlane {
				name: name.to_owned(),
			});
		}
		let index = self.indices.last().map_or(0, |(_, &last)| last + 1);
		if index >= self.capacity {
			return Err(PlaneError::CapacityExceeded {
				name: name.to_owned(),
				capacity: self.capacity,
			});
		}
		self.indices.insert(name.to_owned(), index);
		Ok(index)
	}

	/// Pattern with the bit of every registered plane set.
	pub fn known_bits(&self) -> u64 {
		self.indices
			.values()
			.fold(0, |bits, &index| bits | bit_of(index))
	}

	/// Fails with every name in `names` that is not registered.
	///
	/// Unknown names are reported once each, in the order given. The error
	/// carries a suggestion for the first of them when a close match exists.
	pub fn check<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Result<(), PlaneError> {
		let mut unknown: Vec<String> = Vec::new();
		for name in names {
			if !self.contains(name) && !unknown.iter().any(|seen| seen == name) {
				unknown.push(name.to_owned());
			}
		}
		let Some(first) = unknown.first() else {
			return Ok(());
		};
		let suggestion = self.suggest(first).map(str::to_owned);
		Err(PlaneError::UnknownPlanes {
			names: unknown,
			suggestion,
		})
	}

	/// Converts a selection into a bit pattern.
	///
	/// Bit patterns pass through unchecked. Name selections must be fully
	/// registered; their bits are OR-combined so a repeated name stays set.
	pub fn to_bits(&self, selection: &PlaneSelection) -> Result<u64, PlaneError> {
		match selection {
			PlaneSelection::ByBits(bits) => Ok(*bits),
			PlaneSelection::ByName(name) => self.names_to_bits(core::slice::from_ref(name)),
			PlaneSelection::ByNames(names) => self.names_to_bits(names),
		}
	}

	/// Iterates `(name, bit value)` for every registered plane whose bit is set in `bits`.
	pub fn decode(&self, bits: u64) -> impl Iterator<Item = (&str, u64)> + '_ {
		self.iter()
			.map(|(name, index)| (name, bit_of(index)))
			.filter(move |&(_, bit)| bits & bit != 0)
	}

	/// Closest registered name to `name`, within an edit distance of 3.
	pub fn suggest(&self, name: &str) -> Option<&str> {
		self.indices
			.keys()
			.map(String::as_str)
			.min_by_key(|known| strsim::levenshtein(name, known))
			.filter(|known| strsim::levenshtein(name, known) <= 3)
	}

	fn names_to_bits(&self, names: &[String]) -> Result<u64, PlaneError> {
		self.check(names.iter().map(String::as_str))?;
		Ok(names
			.iter()
			.filter_map(|name| self.index_of(name))
			.fold(0, |bits, index| bits | bit_of(index)))
	}
}

#[inline]
pub(crate) fn bit_of(index: u32) -> u64 {
	1u64 << index
}
