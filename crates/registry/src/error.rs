/// Errors raised while editing or querying a plane table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaneError {
	/// A plane with this name is already registered.
	#[error("a mask plane named {name:?} already exists")]
	DuplicatePlane { name: String },

	/// A selection named planes that are not registered.
	///
	/// `names` lists every offender once, in selection order.
	#[error("planes not registered: {}{}", .names.join(", "), suggestion_hint(.suggestion))]
	UnknownPlanes {
		names: Vec<String>,
		suggestion: Option<String>,
	},

	/// Every bit of the element type already carries a plane.
	#[error("cannot add plane {name:?}: all {capacity} bits are assigned")]
	CapacityExceeded { name: String, capacity: u32 },
}

impl PlaneError {
	/// Returns the unknown names carried by [`PlaneError::UnknownPlanes`].
	pub fn unknown_names(&self) -> &[String] {
		match self {
			PlaneError::UnknownPlanes { names, .. } => names,
			_ => &[],
		}
	}
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
	suggestion
		.as_deref()
		.map(|name| format!(" (did you mean {name:?}?)"))
		.unwrap_or_default()
}
