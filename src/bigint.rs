//! Immutable arbitrary-precision signed integer type.

//	This lint check is unnecessary in this module because all indexing is
//	guarded by explicit length checks immediately beforehand, and adding
//	.get() plus unwrapping would obscure the canonical-form logic these
//	accesses implement.
#![allow(clippy::indexing_slicing, reason = "All indexing is length-checked")]



//		Modules

#[cfg(test)]
#[path = "tests/bigint.rs"]
mod tests;



//		Packages

use crate::errors::{ConversionError, ParseError};
use crate::kernel::{DefaultKernel as Kernel, MagnitudeKernel};
use core::{
	cmp::Ordering,
	fmt::{Binary, Debug, Display, Formatter, LowerHex, UpperHex, self},
	iter::{Product, Sum},
	ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr, ShrAssign},
	str::FromStr,
};
use num_traits::{One as NumOne, Zero as NumZero};
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, Visitor},
	ser::Error as SerdeSerError,
};



//		Structs

//		BigInt
/// An immutable arbitrary-precision signed integer.
///
/// # Internal representation
///
/// The value is stored as a sequence of bytes in big-endian order (most
/// significant byte first), interpreted as two's complement: the high bit of
/// the first byte denotes the sign, exactly as in a C# `BigInteger` byte
/// array. The sequence is always kept in canonical form, meaning the minimal
/// length that still represents the value unambiguously:
///
///   - A leading `0x00` byte is stripped while the following byte has its
///     high bit clear.
///   - A leading `0xFF` byte is stripped while the following byte has its
///     high bit set.
///   - Zero is exactly one `0x00` byte, never an empty sequence.
///
/// For example, 127 is stored as `[0x7F]`, 255 as `[0x00, 0xFF]` (the leading
/// zero marks the value as positive), -1 as `[0xFF]`, and -256 as
/// `[0xFF, 0x00]`.
///
/// Equality, ordering, and hashing all operate on this canonical form, so two
/// instances are equal exactly when they represent the same value.
///
/// The externally-visible byte contract is little-endian: [`from_le_bytes()`](BigInt::from_le_bytes),
/// [`to_le_bytes()`](BigInt::to_le_bytes), and [`copy_to()`](BigInt::copy_to)
/// all reverse the byte order at the boundary.
///
/// # The error sentinel
///
/// Invalid operations do not panic and do not return [`Result`]. Instead they
/// produce the unique [error sentinel](BigInt::error()), whose internal byte
/// sequence is empty and which compares unequal to every valid value,
/// including [zero](BigInt::zero()). Operations producing the sentinel:
///
///   - Division or remainder by zero.
///   - [`pow()`](BigInt::pow()) with a negative exponent.
///   - A shift whose count does not fit an [`i64`].
///   - Any operation where an operand is already the sentinel (the sentinel
///     poisons downstream results).
///
/// Callers are expected to check [`is_error()`](BigInt::is_error()) before
/// trusting a result. Fallible conversions at the boundary (parsing, float
/// ingestion, and narrowing to native integers) return [`Result`] instead,
/// and never produce the sentinel.
///
/// # Arithmetic
///
/// All operations are pure: every operator returns a new instance, and the
/// compound-assignment forms rebind rather than mutate. Division truncates
/// toward zero and the remainder takes the dividend's sign. The magnitude
/// work itself is delegated to the crate's [magnitude kernel](crate::MagnitudeKernel);
/// this type owns only sign, canonicalization, and sentinel policy.
///
/// Bitwise operators interpret both operands as two's complement,
/// sign-extending the shorter one to the longer one's byte length before
/// combining. Shifts accept a signed count, and a negative count shifts in
/// the opposite direction; right shifts are arithmetic, flooring toward
/// negative infinity.
///
/// # Conversion
///
/// This type can be converted from any native integer type losslessly via
/// [`From`], and back to any native integer type via [`TryFrom`], which fails
/// rather than silently truncating. Floating-point values convert via
/// [`TryFrom`], truncating toward zero and rejecting NaN and infinities.
///
/// # Concurrency
///
/// Instances are immutable after construction and own their buffer
/// exclusively, so they are freely shareable across threads.
///
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct BigInt(Vec<u8>);

//󰭅		BigInt
impl BigInt {
	//		Constructors

	//		error
	/// Creates the error sentinel.
	///
	/// This is the unique instance whose internal byte sequence is empty. It
	/// is not a number: it is the value carried by failed operations such as
	/// division by zero, and it compares unequal to every valid integer.
	#[must_use]
	pub fn error() -> Self {
		Self(Vec::new())
	}

	//		from_be_bytes
	/// Creates a [`BigInt`] from big-endian two's-complement bytes.
	///
	/// The input is canonicalized: redundant leading sign-extension bytes are
	/// stripped. An empty input yields [zero](BigInt::zero()), never the error
	/// sentinel.
	///
	/// # Parameters
	///
	/// * `bytes` - The big-endian byte sequence to create the [`BigInt`] from.
	///
	#[must_use]
	pub fn from_be_bytes(bytes: &[u8]) -> Self {
		Self(Self::canonical(bytes.to_vec()))
	}

	//		from_le_bytes
	/// Creates a [`BigInt`] from little-endian two's-complement bytes.
	///
	/// As this type uses big-endian storage internally, this reverses the
	/// bytes before canonicalizing. An empty input yields
	/// [zero](BigInt::zero()), never the error sentinel.
	///
	/// # Parameters
	///
	/// * `bytes` - The little-endian byte sequence to create the [`BigInt`]
	///             from.
	///
	#[must_use]
	pub fn from_le_bytes(bytes: &[u8]) -> Self {
		let mut data = bytes.to_vec();
		data.reverse();
		Self(Self::canonical(data))
	}

	//		from_str_radix
	/// Parses a numeral string in the given base.
	///
	/// The supported bases, and their notations, are:
	///
	///   - **2**: digits `0` and `1` only. The numeral is the big-endian
	///     two's-complement bit pattern of the value, left-padded with `0` to
	///     a whole number of bytes, so `"11111111"` is -1 and
	///     `"011111111"` is 255.
	///   - **10**: an optional leading `-`, then decimal digits.
	///   - **16**: an optional `0x` prefix, then case-insensitive hex digits,
	///     interpreted as two's complement: a numeral whose first digit is 8
	///     or above is negative, and an odd-length numeral is sign-extended
	///     by one nibble, so `"0xFF"` is -1 and `"0x0FF"` is 255.
	///
	/// Leading and trailing whitespace is ignored.
	///
	/// # Parameters
	///
	/// * `text` - The numeral to parse, most significant digit first.
	/// * `base` - The base to parse in: 2, 10, or 16.
	///
	/// # Errors
	///
	/// Returns an error if the base is unsupported, the numeral is empty or a
	/// bare prefix, or any character is not a valid digit for the base.
	///
	pub fn from_str_radix(text: &str, base: u8) -> Result<Self, ParseError> {
		let trimmed = text.trim();
		match base {
			2     => Self::parse_binary(trimmed),
			10    => Self::parse_decimal(trimmed),
			16    => {
				let digits = trimmed.strip_prefix("0x")
					.or_else(|| trimmed.strip_prefix("0X"))
					.unwrap_or(trimmed);
				Self::parse_hex(digits)
			},
			other => Err(ParseError::UnsupportedBase(other)),
		}
	}

	//		minus_one
	/// Creates a [`BigInt`] with the value -1.
	#[must_use]
	pub fn minus_one() -> Self {
		Self(vec![0xFF])
	}

	//		one
	/// Creates a [`BigInt`] with the value 1.
	#[must_use]
	pub fn one() -> Self {
		Self(vec![0x01])
	}

	//		zero
	/// Creates a [`BigInt`] with the value 0.
	///
	/// Zero is canonically a single `0x00` byte, and is distinct from the
	/// [error sentinel](BigInt::error()), whose byte sequence is empty.
	#[must_use]
	pub fn zero() -> Self {
		Self(vec![0x00])
	}

	//		Public methods

	//		abs
	/// Returns the absolute value.
	///
	/// The error sentinel propagates unchanged.
	#[must_use]
	pub fn abs(&self) -> Self {
		if self.is_negative() {
			-self
		} else {
			self.clone()
		}
	}

	//		byte_len
	/// The length of the canonical internal byte sequence.
	///
	/// This is the number of bytes [`to_le_bytes()`](BigInt::to_le_bytes)
	/// returns and [`copy_to()`](BigInt::copy_to) requires. The error sentinel
	/// has length zero.
	#[must_use]
	pub fn byte_len(&self) -> usize {
		self.0.len()
	}

	//		copy_to
	/// Copies the little-endian bytes into a caller-provided buffer.
	///
	/// If the buffer is at least [`byte_len()`](BigInt::byte_len) bytes long,
	/// the value's bytes are written to its start and `true` is returned. If
	/// the buffer is too small, nothing is written at all and `false` is
	/// returned - there are no partial writes. Bytes beyond
	/// [`byte_len()`](BigInt::byte_len) are left untouched.
	///
	/// # Parameters
	///
	/// * `buffer` - The buffer to write the little-endian bytes into.
	///
	pub fn copy_to(&self, buffer: &mut [u8]) -> bool {
		if buffer.len() < self.0.len() {
			return false;
		}
		for (destination, byte) in buffer.iter_mut().zip(self.0.iter().rev()) {
			*destination = *byte;
		}
		true
	}

	//		is_error
	/// Checks whether this is the [error sentinel](BigInt::error()).
	#[must_use]
	pub fn is_error(&self) -> bool {
		self.0.is_empty()
	}

	//		is_negative
	/// Checks whether the value is strictly negative.
	///
	/// The error sentinel is not negative.
	#[must_use]
	pub fn is_negative(&self) -> bool {
		self.0.first().is_some_and(|&byte| byte & 0x80 != 0)
	}

	//		is_positive
	/// Checks whether the value is strictly positive.
	///
	/// The error sentinel is not positive.
	#[must_use]
	pub fn is_positive(&self) -> bool {
		!self.is_error() && !self.is_zero() && !self.is_negative()
	}

	//		is_zero
	/// Checks whether the value equals [zero](BigInt::zero()).
	///
	/// The error sentinel is not zero.
	#[must_use]
	pub fn is_zero(&self) -> bool {
		self.0 == [0x00]
	}

	//		pow
	/// Raises the value to the given exponent.
	///
	/// A zero exponent yields 1, including for a zero base. A negative
	/// exponent yields the [error sentinel](BigInt::error()), as does an error
	/// sentinel base.
	///
	/// # Parameters
	///
	/// * `exponent` - The power to raise the value to. Must be non-negative.
	///
	#[must_use]
	pub fn pow(&self, exponent: i32) -> Self {
		if self.is_error() || exponent < 0 {
			return Self::error();
		}
		if exponent == 0 {
			return Self::one();
		}
		let negative     = self.is_negative() && exponent % 2 == 1;
		let mut base     = self.magnitude();
		let mut exponent = exponent.unsigned_abs();
		let mut result   = vec![0x01];

		//	Square and multiply
		while exponent > 0 {
			if exponent & 1 == 1 {
				result = Kernel::mul(&result, &base);
			}
			exponent >>= 1_i32;
			if exponent > 0 {
				base = Kernel::mul(&base, &base);
			}
		}

		Self::from_sign_magnitude(negative, result)
	}

	//		signum
	/// The sign of the value: -1, 0, or 1.
	///
	/// The error sentinel has no sign and yields 0.
	#[must_use]
	pub fn signum(&self) -> i32 {
		if self.is_error() || self.is_zero() {
			0
		} else if self.is_negative() {
			-1
		} else {
			1
		}
	}

	//		to_be_bytes
	/// The canonical internal byte sequence, big-endian.
	///
	/// The error sentinel yields an empty [`Vec`].
	#[must_use]
	pub fn to_be_bytes(&self) -> Vec<u8> {
		self.0.clone()
	}

	//		to_hex_str
	/// The canonical bytes as lowercase hex digits, little-endian.
	///
	/// This is the hex rendering of [`to_le_bytes()`](BigInt::to_le_bytes),
	/// with no prefix: 255 yields `"ff00"`. The conventional big-endian,
	/// `0x`-prefixed form comes from [`to_str_radix()`](BigInt::to_str_radix)
	/// with base 16.
	#[must_use]
	pub fn to_hex_str(&self) -> String {
		self.0.iter().rev().map(|byte| format!("{byte:02x}")).collect()
	}

	//		to_le_bytes
	/// The canonical byte sequence in little-endian order.
	///
	/// This is the inverse of [`from_le_bytes()`](BigInt::from_le_bytes) for
	/// inputs that were already canonical. The error sentinel yields an empty
	/// [`Vec`].
	#[must_use]
	pub fn to_le_bytes(&self) -> Vec<u8> {
		let mut bytes = self.0.clone();
		bytes.reverse();
		bytes
	}

	//		to_str_radix
	/// Renders the value as a numeral string in the given base.
	///
	/// The supported bases, and their notations, are:
	///
	///   - **2**: one zero-padded 8-bit group per stored byte, most
	///     significant byte first, except that the leading sign-marker `0x00`
	///     byte of a positive value is omitted, so 255 renders as
	///     `"11111111"`.
	///   - **10**: conventional decimal, with a leading `-` for negative
	///     values.
	///   - **16**: a `0x` prefix, then two lowercase hex digits per stored
	///     byte, so 255 renders as `"0x00ff"` and -1 as `"0xff"`.
	///
	/// The error sentinel renders as `"0x"` in base 16, the empty string in
	/// base 2, and `"error"` in base 10.
	///
	/// # Parameters
	///
	/// * `base` - The base to render in: 2, 10, or 16.
	///
	/// # Errors
	///
	/// Returns an error if the base is unsupported.
	///
	pub fn to_str_radix(&self, base: u8) -> Result<String, ParseError> {
		match base {
			2     => Ok(format!("{self:b}")),
			10    => Ok(format!("{self}")),
			16    => Ok(format!("{self:#x}")),
			other => Err(ParseError::UnsupportedBase(other)),
		}
	}

	//		Private methods

	//		canonical
	/// Reduces big-endian two's-complement bytes to canonical form.
	///
	/// Strips redundant leading sign-extension bytes: a `0x00` followed by a
	/// byte with its high bit clear, or a `0xFF` followed by a byte with its
	/// high bit set. An empty input canonicalizes to zero.
	fn canonical(mut data: Vec<u8>) -> Vec<u8> {
		if data.is_empty() {
			return vec![0x00];
		}
		let mut start = 0;
		while start + 1 < data.len() {
			let strippable = matches!(
				(data[start], data[start + 1] & 0x80),
				(0x00, 0x00) | (0xFF, 0x80)
			);
			if !strippable {
				break;
			}
			start += 1;
		}
		data.drain(..start);
		data
	}

	//		compare_magnitudes
	/// Orders two minimal big-endian magnitudes numerically.
	fn compare_magnitudes(a: &[u8], b: &[u8]) -> Ordering {
		a.len().cmp(&b.len()).then_with(|| a.cmp(b))
	}

	//		digit_value
	/// Maps a numeral character to its digit value in the given base.
	fn digit_value(c: char, base: u8) -> Result<u8, ParseError> {
		let digit = match c {
			'0'..='9' => c as u8 - b'0',
			'a'..='f' => c as u8 - b'a' + 10,
			'A'..='F' => c as u8 - b'A' + 10,
			_         => return Err(ParseError::InvalidDigit(c)),
		};
		if digit >= base {
			return Err(ParseError::InvalidRadix(c, base));
		}
		Ok(digit)
	}

	//		from_sign_magnitude
	/// Builds a canonical value from a sign and an unsigned magnitude.
	///
	/// The magnitude is big-endian and may carry leading zero bytes. A zero
	/// magnitude yields zero regardless of the requested sign.
	fn from_sign_magnitude(negative: bool, magnitude: Vec<u8>) -> Self {
		let start  = magnitude.iter().position(|&byte| byte != 0x00).unwrap_or(magnitude.len());
		let digits = &magnitude[start..];
		if digits.is_empty() {
			return Self::zero();
		}
		let mut data = Vec::with_capacity(digits.len() + 1);
		//	A set high bit would read as a sign, so positive values get a zero
		//	marker byte
		if digits[0] & 0x80 != 0 {
			data.push(0x00);
		}
		data.extend_from_slice(digits);
		if negative {
			Self::negate_in_place(&mut data);
			return Self(Self::canonical(data));
		}
		Self(data)
	}

	//		magnitude
	/// The unsigned magnitude of the value, big-endian, minimal.
	///
	/// Zero and the error sentinel both yield an empty [`Vec`].
	fn magnitude(&self) -> Vec<u8> {
		if self.is_negative() {
			let mut magnitude = self.0.clone();
			Self::negate_in_place(&mut magnitude);
			let start = magnitude.iter().position(|&byte| byte != 0x00).unwrap_or(magnitude.len());
			magnitude.drain(..start);
			magnitude
		} else {
			let start = self.0.iter().position(|&byte| byte != 0x00).unwrap_or(self.0.len());
			self.0[start..].to_vec()
		}
	}

	//		magnitude_is_zero
	/// Checks whether a magnitude buffer denotes zero.
	fn magnitude_is_zero(magnitude: &[u8]) -> bool {
		magnitude.iter().all(|&byte| byte == 0x00)
	}

	//		negate_in_place
	/// Replaces a big-endian buffer with its two's complement.
	fn negate_in_place(bytes: &mut [u8]) {
		for byte in bytes.iter_mut() {
			*byte = !*byte;
		}
		for byte in bytes.iter_mut().rev() {
			let (incremented, carried) = byte.overflowing_add(1);
			*byte = incremented;
			if !carried {
				break;
			}
		}
	}

	//		parse_binary
	/// Parses a base-2 numeral: a big-endian two's-complement bit pattern.
	fn parse_binary(bits: &str) -> Result<Self, ParseError> {
		if bits.is_empty() {
			return Err(ParseError::EmptyValue);
		}
		let mut pattern = Vec::with_capacity(bits.len() / 8 + 1);
		//	Left-pad to a whole number of bytes
		let mut bit_count = (8 - bits.len() % 8) % 8;
		let mut byte      = 0_u8;
		for c in bits.chars() {
			byte       = (byte << 1) | Self::digit_value(c, 2)?;
			bit_count += 1;
			if bit_count % 8 == 0 {
				pattern.push(byte);
				byte = 0;
			}
		}
		Ok(Self(Self::canonical(pattern)))
	}

	//		parse_decimal
	/// Parses a base-10 numeral with an optional leading minus sign.
	fn parse_decimal(text: &str) -> Result<Self, ParseError> {
		let (negative, digits) = match text.strip_prefix('-') {
			Some(rest) => (true,  rest),
			None       => (false, text),
		};
		if digits.is_empty() {
			return Err(ParseError::EmptyValue);
		}
		let mut magnitude = Vec::new();
		for c in digits.chars() {
			let digit = Self::digit_value(c, 10)?;
			magnitude = Kernel::add(&Kernel::mul(&magnitude, &[0x0A]), &[digit]);
		}
		Ok(Self::from_sign_magnitude(negative, magnitude))
	}

	//		parse_hex
	/// Parses a base-16 numeral as two's complement, prefix already stripped.
	fn parse_hex(digits: &str) -> Result<Self, ParseError> {
		if digits.is_empty() {
			return Err(ParseError::EmptyValue);
		}
		let mut nibbles = Vec::with_capacity(digits.len() + 1);
		for c in digits.chars() {
			nibbles.push(Self::digit_value(c, 16)?);
		}
		//	Sign-extend an odd-length numeral by one nibble
		if nibbles.len() % 2 == 1 {
			let extension = if nibbles[0] >= 0x8 { 0xF } else { 0x0 };
			nibbles.insert(0, extension);
		}
		let data = nibbles.chunks(2).map(|pair| (pair[0] << 4) | pair[1]).collect();
		Ok(Self(Self::canonical(data)))
	}

	//		shifted_left
	/// Shifts the value left by a non-negative bit count.
	fn shifted_left(&self, count: u64) -> Self {
		if self.is_error() {
			return Self::error();
		}
		if self.is_zero() || count == 0 {
			return self.clone();
		}
		//	32-bit targets saturate; a shift this large cannot be materialised
		//	anyway
		let count = usize::try_from(count).unwrap_or(usize::MAX);
		Self::from_sign_magnitude(self.is_negative(), Kernel::shl(&self.magnitude(), count))
	}

	//		shifted_right
	/// Shifts the value right by a non-negative bit count, arithmetically.
	///
	/// Negative values floor toward negative infinity, so shifting -1 right
	/// by any count yields -1.
	fn shifted_right(&self, count: u64) -> Self {
		if self.is_error() {
			return Self::error();
		}
		if self.is_zero() || count == 0 {
			return self.clone();
		}
		let count       = usize::try_from(count).unwrap_or(usize::MAX);
		let magnitude   = self.magnitude();
		let mut shifted = Kernel::shr(&magnitude, count);
		if self.is_negative() {
			//	Flooring: if any set bit was discarded, round away from zero
			if Kernel::shl(&shifted, count) != magnitude {
				shifted = Kernel::add(&shifted, &[0x01]);
			}
			return Self::from_sign_magnitude(true, shifted);
		}
		Self::from_sign_magnitude(false, shifted)
	}

	//		sign_extended
	/// The stored bytes, sign-extended to the given length.
	fn sign_extended(&self, length: usize) -> Vec<u8> {
		let fill         = if self.is_negative() { 0xFF } else { 0x00 };
		let mut extended = vec![fill; length - self.0.len()];
		extended.extend_from_slice(&self.0);
		extended
	}

	//		to_i128
	/// Narrows the value into the [`i128`] window.
	fn to_i128(&self) -> Result<i128, ConversionError> {
		if self.is_error() {
			return Err(ConversionError::ErrorValue);
		}
		if self.0.len() > 16 {
			return Err(ConversionError::ValueTooLarge);
		}
		let mut buffer = [if self.is_negative() { 0xFF } else { 0x00 }; 16];
		buffer[16 - self.0.len()..].copy_from_slice(&self.0);
		Ok(i128::from_be_bytes(buffer))
	}
}

//󰭅		Add
impl Add for BigInt {
	type Output = Self;

	//		add
	fn add(self, rhs: Self) -> Self::Output {
		&self + &rhs
	}
}

//󰭅		Add<&BigInt>
impl Add<&BigInt> for &BigInt {
	type Output = BigInt;

	//		add
	fn add(self, rhs: &BigInt) -> Self::Output {
		if self.is_error() || rhs.is_error() {
			return BigInt::error();
		}
		let (lhs_negative, lhs_magnitude) = (self.is_negative(), self.magnitude());
		let (rhs_negative, rhs_magnitude) = (rhs.is_negative(),  rhs.magnitude());

		if lhs_negative == rhs_negative {
			return BigInt::from_sign_magnitude(lhs_negative, Kernel::add(&lhs_magnitude, &rhs_magnitude));
		}

		//	Opposite signs: the difference takes the larger magnitude's sign
		match BigInt::compare_magnitudes(&lhs_magnitude, &rhs_magnitude) {
			Ordering::Equal   => BigInt::zero(),
			Ordering::Greater => BigInt::from_sign_magnitude(lhs_negative, Kernel::sub(&lhs_magnitude, &rhs_magnitude)),
			Ordering::Less    => BigInt::from_sign_magnitude(rhs_negative, Kernel::sub(&rhs_magnitude, &lhs_magnitude)),
		}
	}
}

//󰭅		Add<i64>
impl Add<i64> for BigInt {
	type Output = Self;

	//		add
	fn add(self, rhs: i64) -> Self::Output {
		&self + &Self::from(rhs)
	}
}

//󰭅		AddAssign
impl AddAssign for BigInt {
	//		add_assign
	fn add_assign(&mut self, rhs: Self) {
		*self = &*self + &rhs;
	}
}

//󰭅		Binary
impl Binary for BigInt {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if f.alternate() {
			write!(f, "0b")?;
		}

		//	A positive value's leading sign-marker byte carries no magnitude
		//	bits, so it is not rendered
		let bytes = if self.0.len() > 1 && self.0[0] == 0x00 {
			&self.0[1..]
		} else {
			&self.0[..]
		};

		for byte in bytes {
			write!(f, "{byte:08b}")?;
		}

		Ok(())
	}
}

//󰭅		BitAnd
impl BitAnd for BigInt {
	type Output = Self;

	//		bitand
	fn bitand(self, rhs: Self) -> Self::Output {
		&self & &rhs
	}
}

//󰭅		BitAnd<&BigInt>
impl BitAnd<&BigInt> for &BigInt {
	type Output = BigInt;

	//		bitand
	fn bitand(self, rhs: &BigInt) -> Self::Output {
		if self.is_error() || rhs.is_error() {
			return BigInt::error();
		}
		let length = self.0.len().max(rhs.0.len());
		BigInt(BigInt::canonical(Kernel::bit_and(&self.sign_extended(length), &rhs.sign_extended(length))))
	}
}

//󰭅		BitAndAssign
impl BitAndAssign for BigInt {
	//		bitand_assign
	fn bitand_assign(&mut self, rhs: Self) {
		*self = &*self & &rhs;
	}
}

//󰭅		BitOr
impl BitOr for BigInt {
	type Output = Self;

	//		bitor
	fn bitor(self, rhs: Self) -> Self::Output {
		&self | &rhs
	}
}

//󰭅		BitOr<&BigInt>
impl BitOr<&BigInt> for &BigInt {
	type Output = BigInt;

	//		bitor
	fn bitor(self, rhs: &BigInt) -> Self::Output {
		if self.is_error() || rhs.is_error() {
			return BigInt::error();
		}
		let length = self.0.len().max(rhs.0.len());
		BigInt(BigInt::canonical(Kernel::bit_or(&self.sign_extended(length), &rhs.sign_extended(length))))
	}
}

//󰭅		BitOrAssign
impl BitOrAssign for BigInt {
	//		bitor_assign
	fn bitor_assign(&mut self, rhs: Self) {
		*self = &*self | &rhs;
	}
}

//󰭅		BitXor
impl BitXor for BigInt {
	type Output = Self;

	//		bitxor
	fn bitxor(self, rhs: Self) -> Self::Output {
		&self ^ &rhs
	}
}

//󰭅		BitXor<&BigInt>
impl BitXor<&BigInt> for &BigInt {
	type Output = BigInt;

	//		bitxor
	fn bitxor(self, rhs: &BigInt) -> Self::Output {
		if self.is_error() || rhs.is_error() {
			return BigInt::error();
		}
		let length = self.0.len().max(rhs.0.len());
		BigInt(BigInt::canonical(Kernel::bit_xor(&self.sign_extended(length), &rhs.sign_extended(length))))
	}
}

//󰭅		BitXorAssign
impl BitXorAssign for BigInt {
	//		bitxor_assign
	fn bitxor_assign(&mut self, rhs: Self) {
		*self = &*self ^ &rhs;
	}
}

//󰭅		Debug
impl Debug for BigInt {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if self.is_error() {
			return write!(f, "BigInt(error)");
		}
		write!(f, "BigInt({self})")?;

		//	For alternate formatting (#), show the canonical bytes
		if f.alternate() {
			write!(f, " [")?;
			for (i, byte) in self.0.iter().enumerate() {
				if i > 0 {
					write!(f, ", ")?;
				}
				write!(f, "0x{byte:02x}")?;
			}
			write!(f, "]")?;
		}

		Ok(())
	}
}

//󰭅		Default
impl Default for BigInt {
	//		default
	fn default() -> Self {
		Self::zero()
	}
}

//󰭅		Deserialize
impl<'de> Deserialize<'de> for BigInt {
	//		deserialize
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			//	If the format is human-readable, accept both numbers and strings
			deserializer.deserialize_any(BigIntVisitor)
		} else {
			//	For binary formats, expect raw little-endian bytes
			deserializer.deserialize_bytes(BytesVisitor)
		}
	}
}

//󰭅		Display
impl Display for BigInt {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if self.is_error() {
			return write!(f, "error");
		}
		if self.is_zero() {
			return write!(f, "0");
		}
		if self.is_negative() {
			write!(f, "-")?;
		}

		//	Convert the magnitude to decimal digits
		let mut digits    = Vec::new();
		let mut remaining = self.magnitude();

		while !Self::magnitude_is_zero(&remaining) {
			let (quotient, remainder) = Kernel::div_rem(&remaining, &[0x0A]);
			remaining = quotient;
			let digit = u32::from(remainder.first().copied().unwrap_or(0));
			digits.push(match char::from_digit(digit, 10) {
				Some(d) => d,
				None    => return Err(fmt::Error),
			});
		}

		//	Write digits in reverse order
		for digit in digits.iter().rev() {
			write!(f, "{digit}")?;
		}

		Ok(())
	}
}

//󰭅		Div
impl Div for BigInt {
	type Output = Self;

	//		div
	fn div(self, rhs: Self) -> Self::Output {
		&self / &rhs
	}
}

//󰭅		Div<&BigInt>
impl Div<&BigInt> for &BigInt {
	type Output = BigInt;

	//		div
	fn div(self, rhs: &BigInt) -> Self::Output {
		//	Division by zero yields the error sentinel, never a panic
		if self.is_error() || rhs.is_error() || rhs.is_zero() {
			return BigInt::error();
		}
		let (quotient, _) = Kernel::div_rem(&self.magnitude(), &rhs.magnitude());
		BigInt::from_sign_magnitude(self.is_negative() != rhs.is_negative(), quotient)
	}
}

//󰭅		Div<i64>
impl Div<i64> for BigInt {
	type Output = Self;

	//		div
	fn div(self, rhs: i64) -> Self::Output {
		&self / &Self::from(rhs)
	}
}

//󰭅		DivAssign
impl DivAssign for BigInt {
	//		div_assign
	fn div_assign(&mut self, rhs: Self) {
		*self = &*self / &rhs;
	}
}

//󰭅		From: i8 -> BigInt
impl From<i8> for BigInt {
	//		from
	fn from(v: i8) -> Self {
		Self(Self::canonical(v.to_be_bytes().to_vec()))
	}
}

//󰭅		From: i16 -> BigInt
impl From<i16> for BigInt {
	//		from
	fn from(v: i16) -> Self {
		Self(Self::canonical(v.to_be_bytes().to_vec()))
	}
}

//󰭅		From: i32 -> BigInt
impl From<i32> for BigInt {
	//		from
	fn from(v: i32) -> Self {
		Self(Self::canonical(v.to_be_bytes().to_vec()))
	}
}

//󰭅		From: i64 -> BigInt
impl From<i64> for BigInt {
	//		from
	fn from(v: i64) -> Self {
		Self(Self::canonical(v.to_be_bytes().to_vec()))
	}
}

//󰭅		From: i128 -> BigInt
impl From<i128> for BigInt {
	//		from
	fn from(v: i128) -> Self {
		Self(Self::canonical(v.to_be_bytes().to_vec()))
	}
}

//󰭅		From: isize -> BigInt
impl From<isize> for BigInt {
	//		from
	fn from(v: isize) -> Self {
		Self::from(v as i128)
	}
}

//󰭅		From: u8 -> BigInt
impl From<u8> for BigInt {
	//		from
	fn from(v: u8) -> Self {
		let mut data = vec![0x00];
		data.extend_from_slice(&v.to_be_bytes());
		Self(Self::canonical(data))
	}
}

//󰭅		From: u16 -> BigInt
impl From<u16> for BigInt {
	//		from
	fn from(v: u16) -> Self {
		let mut data = vec![0x00];
		data.extend_from_slice(&v.to_be_bytes());
		Self(Self::canonical(data))
	}
}

//󰭅		From: u32 -> BigInt
impl From<u32> for BigInt {
	//		from
	fn from(v: u32) -> Self {
		let mut data = vec![0x00];
		data.extend_from_slice(&v.to_be_bytes());
		Self(Self::canonical(data))
	}
}

//󰭅		From: u64 -> BigInt
impl From<u64> for BigInt {
	//		from
	fn from(v: u64) -> Self {
		let mut data = vec![0x00];
		data.extend_from_slice(&v.to_be_bytes());
		Self(Self::canonical(data))
	}
}

//󰭅		From: u128 -> BigInt
impl From<u128> for BigInt {
	//		from
	fn from(v: u128) -> Self {
		let mut data = vec![0x00];
		data.extend_from_slice(&v.to_be_bytes());
		Self(Self::canonical(data))
	}
}

//󰭅		From: usize -> BigInt
impl From<usize> for BigInt {
	//		from
	fn from(v: usize) -> Self {
		Self::from(v as u128)
	}
}

//󰭅		FromStr
impl FromStr for BigInt {
	type Err = ParseError;

	//		from_str
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();

		//	A prefix selects the base; the default is decimal
		if let Some(digits) = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
			Self::parse_hex(digits)
		} else if let Some(bits) = trimmed.strip_prefix("0b").or_else(|| trimmed.strip_prefix("0B")) {
			Self::parse_binary(bits)
		} else {
			Self::parse_decimal(trimmed)
		}
	}
}

//󰭅		LowerHex
impl LowerHex for BigInt {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if f.alternate() {
			write!(f, "0x")?;
		}
		for byte in &self.0 {
			write!(f, "{byte:02x}")?;
		}
		Ok(())
	}
}

//󰭅		Mul
impl Mul for BigInt {
	type Output = Self;

	//		mul
	fn mul(self, rhs: Self) -> Self::Output {
		&self * &rhs
	}
}

//󰭅		Mul<&BigInt>
impl Mul<&BigInt> for &BigInt {
	type Output = BigInt;

	//		mul
	fn mul(self, rhs: &BigInt) -> Self::Output {
		if self.is_error() || rhs.is_error() {
			return BigInt::error();
		}
		BigInt::from_sign_magnitude(
			self.is_negative() != rhs.is_negative(),
			Kernel::mul(&self.magnitude(), &rhs.magnitude()),
		)
	}
}

//󰭅		Mul<i64>
impl Mul<i64> for BigInt {
	type Output = Self;

	//		mul
	fn mul(self, rhs: i64) -> Self::Output {
		&self * &Self::from(rhs)
	}
}

//󰭅		MulAssign
impl MulAssign for BigInt {
	//		mul_assign
	fn mul_assign(&mut self, rhs: Self) {
		*self = &*self * &rhs;
	}
}

//󰭅		Neg
impl Neg for BigInt {
	type Output = Self;

	//		neg
	fn neg(self) -> Self::Output {
		-&self
	}
}

//󰭅		Neg: &BigInt
impl Neg for &BigInt {
	type Output = BigInt;

	//		neg
	fn neg(self) -> Self::Output {
		//	Negation is subtraction from zero; there is no second negation path
		&BigInt::zero() - self
	}
}

//󰭅		Not
impl Not for BigInt {
	type Output = Self;

	//		not
	fn not(self) -> Self::Output {
		!&self
	}
}

//󰭅		Not: &BigInt
impl Not for &BigInt {
	type Output = BigInt;

	//		not
	fn not(self) -> Self::Output {
		if self.is_error() {
			return BigInt::error();
		}
		//	Bytewise complement of two's complement is exactly -x - 1
		BigInt(BigInt::canonical(self.0.iter().map(|byte| !byte).collect()))
	}
}

//󰭅		One
impl NumOne for BigInt {
	//		one
	fn one() -> Self {
		Self::one()
	}
}

//󰭅		Ord
impl Ord for BigInt {
	//		cmp
	fn cmp(&self, other: &Self) -> Ordering {
		if self.0 == other.0 {
			return Ordering::Equal;
		}

		//	The error sentinel orders before every valid value
		match (self.is_error(), other.is_error()) {
			(true, _)  => return Ordering::Less,
			(_, true)  => return Ordering::Greater,
			_          => {},
		}

		//	Sign dominates
		let signs = self.signum().cmp(&other.signum());
		if signs != Ordering::Equal {
			return signs;
		}

		//	Same sign: canonical form makes length decisive, then the bytes
		//	compare lexicographically
		match self.signum() {
			1  => self.0.len().cmp(&other.0.len()).then_with(|| self.0.cmp(&other.0)),
			-1 => other.0.len().cmp(&self.0.len()).then_with(|| self.0.cmp(&other.0)),
			_  => Ordering::Equal,
		}
	}
}

//󰭅		PartialOrd
impl PartialOrd for BigInt {
	//		partial_cmp
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

//󰭅		Product
impl Product for BigInt {
	//		product
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::one(), |acc, x| acc * x)
	}
}

//󰭅		Product<&>
impl<'a> Product<&'a Self> for BigInt {
	//		product
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::one(), |acc, x| &acc * x)
	}
}

//󰭅		Rem
impl Rem for BigInt {
	type Output = Self;

	//		rem
	fn rem(self, rhs: Self) -> Self::Output {
		&self % &rhs
	}
}

//󰭅		Rem<&BigInt>
impl Rem<&BigInt> for &BigInt {
	type Output = BigInt;

	//		rem
	fn rem(self, rhs: &BigInt) -> Self::Output {
		//	Remainder by zero yields the error sentinel, never a panic
		if self.is_error() || rhs.is_error() || rhs.is_zero() {
			return BigInt::error();
		}
		let (_, remainder) = Kernel::div_rem(&self.magnitude(), &rhs.magnitude());
		//	Truncated division: the remainder takes the dividend's sign
		BigInt::from_sign_magnitude(self.is_negative(), remainder)
	}
}

//󰭅		Rem<i64>
impl Rem<i64> for BigInt {
	type Output = Self;

	//		rem
	fn rem(self, rhs: i64) -> Self::Output {
		&self % &Self::from(rhs)
	}
}

//󰭅		RemAssign
impl RemAssign for BigInt {
	//		rem_assign
	fn rem_assign(&mut self, rhs: Self) {
		*self = &*self % &rhs;
	}
}

//󰭅		Serialize
impl Serialize for BigInt {
	//		serialize
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if self.is_error() {
			return Err(S::Error::custom("the error sentinel cannot be serialised"));
		}
		if serializer.is_human_readable() {
			//	For JSON and similar formats, serialise as a number if it fits
			if let Ok(v) = i64::try_from(self) {
				return serializer.serialize_i64(v);
			}
			if let Ok(v) = u64::try_from(self) {
				return serializer.serialize_u64(v);
			}
			//	Fall back to a decimal string for larger numbers
			serializer.serialize_str(&self.to_string())
		} else {
			//	For binary formats, serialise the canonical little-endian bytes
			serializer.serialize_bytes(&self.to_le_bytes())
		}
	}
}

//󰭅		Shl<i64>
impl Shl<i64> for BigInt {
	type Output = Self;

	//		shl
	fn shl(self, rhs: i64) -> Self::Output {
		&self << rhs
	}
}

//󰭅		Shl<i64>: &BigInt
impl Shl<i64> for &BigInt {
	type Output = BigInt;

	//		shl
	fn shl(self, rhs: i64) -> Self::Output {
		//	A negative count shifts the other way
		if rhs < 0 {
			self.shifted_right(rhs.unsigned_abs())
		} else {
			self.shifted_left(rhs.unsigned_abs())
		}
	}
}

//󰭅		Shl<BigInt>
impl Shl for BigInt {
	type Output = Self;

	//		shl
	fn shl(self, rhs: Self) -> Self::Output {
		&self << &rhs
	}
}

//󰭅		Shl<&BigInt>
impl Shl<&BigInt> for &BigInt {
	type Output = BigInt;

	//		shl
	fn shl(self, rhs: &BigInt) -> Self::Output {
		match i64::try_from(rhs) {
			Ok(count) => self << count,
			Err(_)    => BigInt::error(),
		}
	}
}

//󰭅		ShlAssign<i64>
impl ShlAssign<i64> for BigInt {
	//		shl_assign
	fn shl_assign(&mut self, rhs: i64) {
		*self = &*self << rhs;
	}
}

//󰭅		ShlAssign<BigInt>
impl ShlAssign for BigInt {
	//		shl_assign
	fn shl_assign(&mut self, rhs: Self) {
		*self = &*self << &rhs;
	}
}

//󰭅		Shr<i64>
impl Shr<i64> for BigInt {
	type Output = Self;

	//		shr
	fn shr(self, rhs: i64) -> Self::Output {
		&self >> rhs
	}
}

//󰭅		Shr<i64>: &BigInt
impl Shr<i64> for &BigInt {
	type Output = BigInt;

	//		shr
	fn shr(self, rhs: i64) -> Self::Output {
		//	A negative count shifts the other way
		if rhs < 0 {
			self.shifted_left(rhs.unsigned_abs())
		} else {
			self.shifted_right(rhs.unsigned_abs())
		}
	}
}

//󰭅		Shr<BigInt>
impl Shr for BigInt {
	type Output = Self;

	//		shr
	fn shr(self, rhs: Self) -> Self::Output {
		&self >> &rhs
	}
}

//󰭅		Shr<&BigInt>
impl Shr<&BigInt> for &BigInt {
	type Output = BigInt;

	//		shr
	fn shr(self, rhs: &BigInt) -> Self::Output {
		match i64::try_from(rhs) {
			Ok(count) => self >> count,
			Err(_)    => BigInt::error(),
		}
	}
}

//󰭅		ShrAssign<i64>
impl ShrAssign<i64> for BigInt {
	//		shr_assign
	fn shr_assign(&mut self, rhs: i64) {
		*self = &*self >> rhs;
	}
}

//󰭅		ShrAssign<BigInt>
impl ShrAssign for BigInt {
	//		shr_assign
	fn shr_assign(&mut self, rhs: Self) {
		*self = &*self >> &rhs;
	}
}

//󰭅		Sub
impl Sub for BigInt {
	type Output = Self;

	//		sub
	fn sub(self, rhs: Self) -> Self::Output {
		&self - &rhs
	}
}

//󰭅		Sub<&BigInt>
impl Sub<&BigInt> for &BigInt {
	type Output = BigInt;

	//		sub
	fn sub(self, rhs: &BigInt) -> Self::Output {
		if self.is_error() || rhs.is_error() {
			return BigInt::error();
		}
		let (lhs_negative, lhs_magnitude) = (self.is_negative(), self.magnitude());
		let (rhs_negative, rhs_magnitude) = (rhs.is_negative(),  rhs.magnitude());

		//	Opposite signs: the magnitudes accumulate under the left sign
		if lhs_negative != rhs_negative {
			return BigInt::from_sign_magnitude(lhs_negative, Kernel::add(&lhs_magnitude, &rhs_magnitude));
		}

		match BigInt::compare_magnitudes(&lhs_magnitude, &rhs_magnitude) {
			Ordering::Equal   => BigInt::zero(),
			Ordering::Greater => BigInt::from_sign_magnitude(lhs_negative,  Kernel::sub(&lhs_magnitude, &rhs_magnitude)),
			Ordering::Less    => BigInt::from_sign_magnitude(!lhs_negative, Kernel::sub(&rhs_magnitude, &lhs_magnitude)),
		}
	}
}

//󰭅		Sub<i64>
impl Sub<i64> for BigInt {
	type Output = Self;

	//		sub
	fn sub(self, rhs: i64) -> Self::Output {
		&self - &Self::from(rhs)
	}
}

//󰭅		SubAssign
impl SubAssign for BigInt {
	//		sub_assign
	fn sub_assign(&mut self, rhs: Self) {
		*self = &*self - &rhs;
	}
}

//󰭅		Sum
impl Sum for BigInt {
	//		sum
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::zero(), |acc, x| acc + x)
	}
}

//󰭅		Sum<&>
impl<'a> Sum<&'a Self> for BigInt {
	//		sum
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::zero(), |acc, x| &acc + x)
	}
}

//󰭅		TryFrom: f32 -> BigInt
impl TryFrom<f32> for BigInt {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: f32) -> Result<Self, Self::Error> {
		Self::try_from(f64::from(v))
	}
}

//󰭅		TryFrom: f64 -> BigInt
impl TryFrom<f64> for BigInt {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: f64) -> Result<Self, Self::Error> {
		if !v.is_finite() {
			return Err(ConversionError::NotFinite);
		}
		let truncated = v.trunc();
		if truncated == 0.0 {
			return Ok(Self::zero());
		}

		//	Integral doubles below 2^53 cast to i64 exactly
		if truncated.abs() < 9_007_199_254_740_992.0 {
			#[expect(clippy::cast_possible_truncation, reason = "Already checked")]
			return Ok(Self::from(truncated as i64));
		}

		//	Larger values are decomposed into mantissa and exponent; the
		//	exponent is necessarily positive here, so this is a pure shift
		let bits     = truncated.to_bits();
		let exponent = ((bits >> 52) & 0x7FF) as i64 - 1075;
		let mantissa = (bits & ((1_u64 << 52) - 1)) | (1_u64 << 52);
		#[expect(clippy::cast_sign_loss, reason = "Always positive for values this large")]
		let magnitude = Kernel::shl(&mantissa.to_be_bytes(), exponent as usize);
		Ok(Self::from_sign_magnitude(truncated.is_sign_negative(), magnitude))
	}
}

//󰭅		TryFrom: &BigInt -> i8
impl TryFrom<&BigInt> for i8 {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
		Self::try_from(v.to_i128()?).map_err(|_| ConversionError::ValueTooLarge)
	}
}

//󰭅		TryFrom: &BigInt -> i16
impl TryFrom<&BigInt> for i16 {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
		Self::try_from(v.to_i128()?).map_err(|_| ConversionError::ValueTooLarge)
	}
}

//󰭅		TryFrom: &BigInt -> i32
impl TryFrom<&BigInt> for i32 {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
		Self::try_from(v.to_i128()?).map_err(|_| ConversionError::ValueTooLarge)
	}
}

//󰭅		TryFrom: &BigInt -> i64
impl TryFrom<&BigInt> for i64 {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
		Self::try_from(v.to_i128()?).map_err(|_| ConversionError::ValueTooLarge)
	}
}

//󰭅		TryFrom: &BigInt -> i128
impl TryFrom<&BigInt> for i128 {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
		v.to_i128()
	}
}

//󰭅		TryFrom: &BigInt -> isize
impl TryFrom<&BigInt> for isize {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
		Self::try_from(v.to_i128()?).map_err(|_| ConversionError::ValueTooLarge)
	}
}

//󰭅		TryFrom: &BigInt -> u8
impl TryFrom<&BigInt> for u8 {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
		if v.is_negative() {
			return Err(ConversionError::ValueIsNegative);
		}
		Self::try_from(v.to_i128()?).map_err(|_| ConversionError::ValueTooLarge)
	}
}

//󰭅		TryFrom: &BigInt -> u16
impl TryFrom<&BigInt> for u16 {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
		if v.is_negative() {
			return Err(ConversionError::ValueIsNegative);
		}
		Self::try_from(v.to_i128()?).map_err(|_| ConversionError::ValueTooLarge)
	}
}

//󰭅		TryFrom: &BigInt -> u32
impl TryFrom<&BigInt> for u32 {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
		if v.is_negative() {
			return Err(ConversionError::ValueIsNegative);
		}
		Self::try_from(v.to_i128()?).map_err(|_| ConversionError::ValueTooLarge)
	}
}

//󰭅		TryFrom: &BigInt -> u64
impl TryFrom<&BigInt> for u64 {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
		if v.is_negative() {
			return Err(ConversionError::ValueIsNegative);
		}
		Self::try_from(v.to_i128()?).map_err(|_| ConversionError::ValueTooLarge)
	}
}

//󰭅		TryFrom: &BigInt -> u128
impl TryFrom<&BigInt> for u128 {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
		if v.is_error() {
			return Err(ConversionError::ErrorValue);
		}
		if v.is_negative() {
			return Err(ConversionError::ValueIsNegative);
		}
		//	The i128 window is one bit too narrow here, so the magnitude is
		//	taken directly
		let magnitude = v.magnitude();
		if magnitude.len() > 16 {
			return Err(ConversionError::ValueTooLarge);
		}
		let mut buffer = [0_u8; 16];
		buffer[16 - magnitude.len()..].copy_from_slice(&magnitude);
		Ok(Self::from_be_bytes(buffer))
	}
}

//󰭅		TryFrom: &BigInt -> usize
impl TryFrom<&BigInt> for usize {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
		if v.is_negative() {
			return Err(ConversionError::ValueIsNegative);
		}
		Self::try_from(v.to_i128()?).map_err(|_| ConversionError::ValueTooLarge)
	}
}

//󰭅		TryFrom: BigInt -> i8
impl TryFrom<BigInt> for i8 {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: BigInt) -> Result<Self, Self::Error> {
		Self::try_from(&v)
	}
}

//󰭅		TryFrom: BigInt -> i16
impl TryFrom<BigInt> for i16 {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: BigInt) -> Result<Self, Self::Error> {
		Self::try_from(&v)
	}
}

//󰭅		TryFrom: BigInt -> i32
impl TryFrom<BigInt> for i32 {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: BigInt) -> Result<Self, Self::Error> {
		Self::try_from(&v)
	}
}

//󰭅		TryFrom: BigInt -> i64
impl TryFrom<BigInt> for i64 {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: BigInt) -> Result<Self, Self::Error> {
		Self::try_from(&v)
	}
}

//󰭅		TryFrom: BigInt -> i128
impl TryFrom<BigInt> for i128 {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: BigInt) -> Result<Self, Self::Error> {
		Self::try_from(&v)
	}
}

//󰭅		TryFrom: BigInt -> isize
impl TryFrom<BigInt> for isize {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: BigInt) -> Result<Self, Self::Error> {
		Self::try_from(&v)
	}
}

//󰭅		TryFrom: BigInt -> u8
impl TryFrom<BigInt> for u8 {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: BigInt) -> Result<Self, Self::Error> {
		Self::try_from(&v)
	}
}

//󰭅		TryFrom: BigInt -> u16
impl TryFrom<BigInt> for u16 {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: BigInt) -> Result<Self, Self::Error> {
		Self::try_from(&v)
	}
}

//󰭅		TryFrom: BigInt -> u32
impl TryFrom<BigInt> for u32 {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: BigInt) -> Result<Self, Self::Error> {
		Self::try_from(&v)
	}
}

//󰭅		TryFrom: BigInt -> u64
impl TryFrom<BigInt> for u64 {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: BigInt) -> Result<Self, Self::Error> {
		Self::try_from(&v)
	}
}

//󰭅		TryFrom: BigInt -> u128
impl TryFrom<BigInt> for u128 {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: BigInt) -> Result<Self, Self::Error> {
		Self::try_from(&v)
	}
}

//󰭅		TryFrom: BigInt -> usize
impl TryFrom<BigInt> for usize {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: BigInt) -> Result<Self, Self::Error> {
		Self::try_from(&v)
	}
}

//󰭅		UpperHex
impl UpperHex for BigInt {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if f.alternate() {
			write!(f, "0x")?;
		}
		for byte in &self.0 {
			write!(f, "{byte:02X}")?;
		}
		Ok(())
	}
}

//󰭅		Zero
impl NumZero for BigInt {
	//		zero
	fn zero() -> Self {
		Self::zero()
	}

	//		is_zero
	fn is_zero(&self) -> bool {
		self.0 == [0x00]
	}
}

//		BigIntVisitor
/// A serde visitor for deserialising [`BigInt`] from human-readable formats.
struct BigIntVisitor;

//󰭅		Visitor: BigIntVisitor
impl Visitor<'_> for BigIntVisitor {
	type Value = BigInt;

	//		expecting
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "an integer, a numeral string, or integer bytes")
	}

	//		visit_i64
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(BigInt::from(v))
	}

	//		visit_u64
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(BigInt::from(v))
	}

	//		visit_i128
	fn visit_i128<E>(self, v: i128) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(BigInt::from(v))
	}

	//		visit_u128
	fn visit_u128<E>(self, v: u128) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(BigInt::from(v))
	}

	//		visit_str
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		v.parse().map_err(E::custom)
	}

	//		visit_bytes
	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(BigInt::from_le_bytes(v))
	}
}

//		BytesVisitor
/// A serde visitor for deserialising [`BigInt`] from binary formats.
struct BytesVisitor;

//󰭅		Visitor: BytesVisitor
impl Visitor<'_> for BytesVisitor {
	type Value = BigInt;

	//		expecting
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "integer bytes in little-endian order")
	}

	//		visit_bytes
	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(BigInt::from_le_bytes(v))
	}

	//		visit_byte_buf
	fn visit_byte_buf<E>(self, v: Vec<u8>) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(BigInt::from_le_bytes(&v))
	}
}


