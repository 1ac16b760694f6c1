use core::fmt::Debug;
use core::hash::Hash;
use core::ops::{BitAnd, BitAndAssign, BitOr, Not};

/// An unsigned integer storing one flag per bit.
///
/// Bit patterns cross crate boundaries as `u64`; [`BitWord::from_pattern`]
/// narrows them to the element width and drops bits that cannot exist on an
/// element of this type.
pub trait BitWord:
	Copy
	+ Eq
	+ Hash
	+ Debug
	+ Default
	+ Send
	+ Sync
	+ 'static
	+ BitAnd<Output = Self>
	+ BitAndAssign
	+ BitOr<Output = Self>
	+ Not<Output = Self>
{
	/// Number of flags one element can hold.
	const BITS: u32;
	/// All bits clear.
	const ZERO: Self;

	/// Narrows a 64-bit pattern to this width.
	fn from_pattern(bits: u64) -> Self;

	/// Widens this word to a 64-bit pattern.
	fn to_pattern(self) -> u64;

	/// Returns true if no bit is set.
	#[inline]
	fn is_clear(self) -> bool {
		self == Self::ZERO
	}
}

macro_rules! impl_bit_word {
	($($ty:ty),* $(,)?) => {
		$(
			impl BitWord for $ty {
				const BITS: u32 = <$ty>::BITS;
				const ZERO: Self = 0;

				#[inline]
				fn from_pattern(bits: u64) -> Self {
					bits as $ty
				}

				#[inline]
				fn to_pattern(self) -> u64 {
					self as u64
				}
			}
		)*
	};
}

impl_bit_word!(u8, u16, u32, u64);

#[cfg(test)]
mod tests {
	use super::BitWord;

	#[test]
	fn from_pattern_drops_bits_past_width() {
		assert_eq!(u8::from_pattern(0x1_0f), 0x0f);
		assert_eq!(u16::from_pattern(0xdead_beef), 0xbeef);
		assert_eq!(u64::from_pattern(u64::MAX), u64::MAX);
	}

	#[test]
	fn to_pattern_widens_without_sign() {
		assert_eq!(0xffu8.to_pattern(), 0xff);
		assert_eq!(u32::MAX.to_pattern(), 0xffff_ffff);
	}

	#[test]
	fn widths_match_primitive() {
		assert_eq!(<u8 as BitWord>::BITS, 8);
		assert_eq!(<u64 as BitWord>::BITS, 64);
		assert!(0u16.is_clear());
		assert!(!4u16.is_clear());
	}
}
