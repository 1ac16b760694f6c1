use ndarray::{Array, ArrayBase, Data, DataMut, Dimension};

use crate::BitWord;

#[cfg(test)]
mod tests;

/// Marks elements carrying at least one bit outside `ignore`.
///
/// The result has the shape of `array`. Zero elements, and elements whose
/// set bits all fall inside `ignore`, map to `false`.
pub fn boolean_mask<W, S, D>(array: &ArrayBase<S, D>, ignore: W) -> Array<bool, D>
where
	W: BitWord,
	S: Data<Elem = W>,
	D: Dimension,
{
	let keep = !ignore;
	array.mapv(|word| !(word & keep).is_clear())
}

/// Marks elements carrying at least one bit of `bits`.
///
/// Same as [`boolean_mask`] with every other bit ignored. A pattern that
/// matches nothing yields an all-`false` array.
pub fn select_mask<W, S, D>(array: &ArrayBase<S, D>, bits: W) -> Array<bool, D>
where
	W: BitWord,
	S: Data<Elem = W>,
	D: Dimension,
{
	boolean_mask(array, !bits)
}

/// Clears `bits` on every element and leaves all other bits alone.
pub fn clear_bits<W, S, D>(array: &mut ArrayBase<S, D>, bits: W)
where
	W: BitWord,
	S: DataMut<Elem = W>,
	D: Dimension,
{
	let keep = !bits;
	array.map_inplace(|word| *word &= keep);
}

/// Resets every element to zero. The shape is unchanged.
pub fn zero_fill<W, S, D>(array: &mut ArrayBase<S, D>)
where
	W: BitWord,
	S: DataMut<Elem = W>,
	D: Dimension,
{
	array.fill(W::ZERO);
}
