//! Contains error types used throughout the library.



//		Packages

use thiserror::Error as ThisError;



//		Enums

//		ConversionError
/// Represents all possible conversion errors that can occur.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ConversionError {
	/// The incoming value is the error sentinel, which has no numeric value.
	#[error("Error sentinel has no numeric value")]
	ErrorValue,

	/// The incoming floating-point value is NaN or infinite.
	#[error("Value is not finite")]
	NotFinite,

	/// The incoming value is negative, which is not allowed by the destination
	/// type.
	#[error("Value is negative")]
	ValueIsNegative,

	/// The incoming value is too large to be converted to the destination type.
	#[error("Value too large")]
	ValueTooLarge,
}

//		ParseError
/// Represents all possible numeral-parsing errors that can occur.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ParseError {
	/// The incoming value is empty, e.g. an empty string or a bare prefix.
	#[error("Empty value")]
	EmptyValue,

	/// The incoming value contains a character that is not a digit in any
	/// supported base.
	#[error("Invalid digit: {0}")]
	InvalidDigit(char),

	/// The incoming value contains a digit that is not valid for the requested
	/// base.
	#[error("Invalid digit for base {1}: {0}")]
	InvalidRadix(char, u8),

	/// The requested base is not one of the supported bases (2, 10, or 16).
	#[error("Unsupported base: {0}")]
	UnsupportedBase(u8),
}


