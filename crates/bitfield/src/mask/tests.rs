use ndarray::{Array1, Array2, ArrayD, IxDyn, arr2, array};
use proptest::prelude::*;
use rstest::rstest;

use super::*;

fn grid() -> Array2<u16> {
	array![[1, 2, 4, 8], [3, 0, 12, 15]]
}

#[test]
fn boolean_mask_skips_ignored_bits() {
	let mask = boolean_mask(&grid(), 0b0001u16);
	assert_eq!(
		mask,
		array![[false, true, true, true], [true, false, true, true]]
	);
}

#[test]
fn boolean_mask_without_ignore_flags_nonzero() {
	let data = grid();
	assert_eq!(boolean_mask(&data, 0u16), data.mapv(|w| w != 0));
}

#[test]
fn boolean_mask_ignoring_everything_is_all_false() {
	let mask = boolean_mask(&grid(), u16::MAX);
	assert!(mask.iter().all(|&flag| !flag));
}

#[rstest]
#[case(0b0001, [[true, false, false, false], [true, false, false, true]])]
#[case(0b0110, [[false, true, true, false], [true, false, true, true]])]
#[case(0b1_0000, [[false; 4]; 2])]
#[case(0b0000, [[false; 4]; 2])]
fn select_mask_sees_only_selected_bits(#[case] bits: u16, #[case] expected: [[bool; 4]; 2]) {
	assert_eq!(select_mask(&grid(), bits), arr2(&expected));
}

#[test]
fn select_mask_keeps_dynamic_shape() {
	let data = ArrayD::<u8>::from_elem(IxDyn(&[2, 1, 3]), 0b101);
	let mask = select_mask(&data, 0b100u8);
	assert_eq!(mask.shape(), &[2, 1, 3]);
	assert!(mask.iter().all(|&flag| flag));
}

#[test]
fn clear_bits_keeps_unselected_bits() {
	let mut data = grid();
	clear_bits(&mut data, 0b0001u16);
	assert_eq!(data, array![[0, 2, 4, 8], [2, 0, 12, 14]]);
}

#[test]
fn clear_bits_through_view() {
	let mut data = grid();
	clear_bits(&mut data.row_mut(1), 0b1000u16);
	assert_eq!(data, array![[1, 2, 4, 8], [3, 0, 4, 7]]);
}

#[test]
fn zero_fill_preserves_shape() {
	let mut data = ArrayD::<u32>::from_elem(IxDyn(&[2, 3, 4]), 7);
	zero_fill(&mut data);
	assert_eq!(data.shape(), &[2, 3, 4]);
	assert!(data.iter().all(|&w| w == 0));
}

proptest! {
	#[test]
	fn select_mask_matches_elementwise_and(
		words in prop::collection::vec(any::<u8>(), 0..64),
		bits in any::<u8>(),
	) {
		let data = Array1::from(words);
		let mask = select_mask(&data, bits);
		prop_assert_eq!(mask.len(), data.len());
		for (word, flagged) in data.iter().zip(mask.iter()) {
			prop_assert_eq!(*flagged, word & bits != 0);
		}
	}

	#[test]
	fn clear_bits_then_select_is_empty(
		words in prop::collection::vec(any::<u32>(), 0..64),
		bits in any::<u32>(),
	) {
		let mut data = Array1::from(words);
		let before = data.clone();
		clear_bits(&mut data, bits);
		prop_assert!(select_mask(&data, bits).iter().all(|&flag| !flag));
		for (old, new) in before.iter().zip(data.iter()) {
			prop_assert_eq!(old & !bits, *new);
		}
	}
}
