//! Contains error types used throughout the library.



//		Packages

use crate::u256;
use core::fmt::{Display, Formatter, self};
use thiserror::Error as ThisError;



//		Enums

//		ConversionError															
/// Represents all possible conversion errors that can occur.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ConversionError {
	/// The incoming value is empty, e.g. an empty string.
	#[error("Empty value")]
	EmptyValue,

	/// The incoming value contains a character that is not a decimal digit.
	#[error("Invalid digit: {0}")]
	InvalidDigit(char),

	/// The incoming byte buffer is longer than the canonical 32 bytes.
	#[error("Invalid byte length: {0} (max 32)")]
	InvalidLength(usize),

	/// The incoming value is negative, which is not allowed by the destination
	/// type.
	#[error("Value is negative")]
	ValueIsNegative,

	/// The incoming value is too large to be converted to the destination type.
	#[error("Value too large")]
	ValueTooLarge,
}

//		ArithmeticError															
/// Represents all possible arithmetic errors that can occur.
/// 
/// Each failure carries the offending operands, so that callers can surface
/// them in diagnostics without keeping their own copies around.
/// 
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ArithmeticError {
	/// The divisor is exactly zero.
	#[error("Division by zero")]
	DivisionByZero,

	/// The result does not fit in 256 bits.
	#[error("{op} overflow: {lhs:#x} and {rhs:#x}")]
	Overflow {
		/// The operation that overflowed.
		op:  Operation,

		/// The left operand.
		lhs: u256,

		/// The right operand.
		rhs: u256,
	},

	/// The result would be negative, which is unrepresentable.
	#[error("Subtraction underflow: {lhs:#x} - {rhs:#x}")]
	Underflow {
		/// The left operand.
		lhs: u256,

		/// The right operand.
		rhs: u256,
	},
}

//		Operation																
/// The arithmetic operations that report overflow.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Operation {
	/// Addition of two values.
	Addition,

	/// Multiplication of two values.
	Multiplication,
}

//󰭅		Display																	
impl Display for Operation {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match *self {
			Self::Addition       => write!(f, "Addition"),
			Self::Multiplication => write!(f, "Multiplication"),
		}
	}
}


