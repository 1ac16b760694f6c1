/// A choice of planes, by name or by raw bit pattern.
///
/// Every registry query takes `impl Into<PlaneSelection>`, so callers pass a
/// `&str`, a list of names, or a `u64` directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlaneSelection {
	/// A single plane.
	ByName(String),
	/// Several planes. Repeats are harmless.
	ByNames(Vec<String>),
	/// A bit pattern used verbatim.
	ByBits(u64),
}

impl From<&str> for PlaneSelection {
	fn from(name: &str) -> Self {
		PlaneSelection::ByName(name.to_owned())
	}
}

impl From<String> for PlaneSelection {
	fn from(name: String) -> Self {
		PlaneSelection::ByName(name)
	}
}

impl From<&String> for PlaneSelection {
	fn from(name: &String) -> Self {
		PlaneSelection::ByName(name.clone())
	}
}

impl From<Vec<String>> for PlaneSelection {
	fn from(names: Vec<String>) -> Self {
		PlaneSelection::ByNames(names)
	}
}

impl From<Vec<&str>> for PlaneSelection {
	fn from(names: Vec<&str>) -> Self {
		names.as_slice().into()
	}
}

impl From<&[&str]> for PlaneSelection {
	fn from(names: &[&str]) -> Self {
		PlaneSelection::ByNames(names.iter().map(|&name| name.to_owned()).collect())
	}
}

impl<const N: usize> From<[&str; N]> for PlaneSelection {
	fn from(names: [&str; N]) -> Self {
		names.as_slice().into()
	}
}

impl From<u64> for PlaneSelection {
	fn from(bits: u64) -> Self {
		PlaneSelection::ByBits(bits)
	}
}
