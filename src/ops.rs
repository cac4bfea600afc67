//! Checked arithmetic and ordering over canonical 256-bit values.

//	This lint check is unnecessary in this module because all indexing is
//	based on the BYTES constant, which is tied to the fixed 32-byte canonical
//	form.
#![allow(clippy::indexing_slicing, reason = "We always know the size")]



//		Modules

#[cfg(test)]
#[path = "tests/ops.rs"]
mod tests;



//		Packages

use crate::errors::{ArithmeticError, Operation};
use crate::u256;
use core::{
	iter::Sum,
	ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign},
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not},
};
use num_bigint::BigUint;



//		Functions

//		add																		
/// Checked addition of two values.
/// 
/// Adds byte-wise from the least-significant byte (index 31) to the
/// most-significant (index 0), propagating the carry. Each per-byte sum is at
/// most `255 + 255 + 1 = 511`, so the carry out of any step is at most 1. A
/// carry remaining after the most-significant byte means the true result
/// needs a 257th bit, which is unrepresentable.
/// 
/// # Parameters
/// 
/// * `lhs` - The left operand.
/// * `rhs` - The right operand.
/// 
/// # Errors
/// 
/// Returns an error if the sum exceeds `2²⁵⁶ - 1`.
/// 
pub fn add(lhs: u256, rhs: u256) -> Result<u256, ArithmeticError> {
	let a = lhs.as_bytes();
	let b = rhs.as_bytes();

	let mut result = [0_u8; 32];
	let mut carry  = 0_u8;

	//	Add bytes with carry, least-significant byte first
	for i in (0..u256::BYTES).rev() {
		let (sum1, c1) = a[i].overflowing_add(b[i]);
		let (sum2, c2) = sum1.overflowing_add(carry);
		result[i]      = sum2;
		carry          = u8::from(c1 || c2);
	}

	if carry != 0 {
		return Err(ArithmeticError::Overflow { op: Operation::Addition, lhs, rhs });
	}

	Ok(u256::new(result))
}

//		bitwise_and																
/// Bitwise AND of two values.
/// 
/// Operates per-byte across all 32 bytes, and never fails.
/// 
/// # Parameters
/// 
/// * `lhs` - The left operand.
/// * `rhs` - The right operand.
/// 
#[must_use]
pub fn bitwise_and(lhs: u256, rhs: u256) -> u256 {
	let mut result = [0_u8; 32];

	for i in 0..u256::BYTES {
		result[i] = lhs.as_bytes()[i] & rhs.as_bytes()[i];
	}

	u256::new(result)
}

//		bitwise_not																
/// Bitwise NOT of a value.
/// 
/// Takes the one's complement of each of the 32 bytes, and never fails.
/// 
/// # Parameters
/// 
/// * `value` - The operand.
/// 
#[must_use]
pub fn bitwise_not(value: u256) -> u256 {
	let mut result = [0_u8; 32];

	for i in 0..u256::BYTES {
		result[i] = !value.as_bytes()[i];
	}

	u256::new(result)
}

//		bitwise_or																
/// Bitwise OR of two values.
/// 
/// Operates per-byte across all 32 bytes, and never fails.
/// 
/// # Parameters
/// 
/// * `lhs` - The left operand.
/// * `rhs` - The right operand.
/// 
#[must_use]
pub fn bitwise_or(lhs: u256, rhs: u256) -> u256 {
	let mut result = [0_u8; 32];

	for i in 0..u256::BYTES {
		result[i] = lhs.as_bytes()[i] | rhs.as_bytes()[i];
	}

	u256::new(result)
}

//		bitwise_xor																
/// Bitwise XOR of two values.
/// 
/// Operates per-byte across all 32 bytes, and never fails.
/// 
/// # Parameters
/// 
/// * `lhs` - The left operand.
/// * `rhs` - The right operand.
/// 
#[must_use]
pub fn bitwise_xor(lhs: u256, rhs: u256) -> u256 {
	let mut result = [0_u8; 32];

	for i in 0..u256::BYTES {
		result[i] = lhs.as_bytes()[i] ^ rhs.as_bytes()[i];
	}

	u256::new(result)
}

//		divide																	
/// Checked integer division of two values.
/// 
/// Computes the floor of `lhs / rhs` through an arbitrary-precision
/// intermediate. The quotient of two 256-bit values is never larger than the
/// dividend, so re-encoding to the canonical form cannot fail.
/// 
/// # Parameters
/// 
/// * `lhs` - The dividend.
/// * `rhs` - The divisor.
/// 
/// # Errors
/// 
/// Returns an error if the divisor is zero.
/// 
pub fn divide(lhs: u256, rhs: u256) -> Result<u256, ArithmeticError> {
	if rhs.is_zero() {
		return Err(ArithmeticError::DivisionByZero);
	}

	Ok(from_wide(&(to_wide(lhs) / to_wide(rhs))))
}

//		multiply																
/// Checked multiplication of two values.
/// 
/// Computes the exact product through an arbitrary-precision intermediate,
/// then checks whether it fits in 256 bits.
/// 
/// # Parameters
/// 
/// * `lhs` - The left operand.
/// * `rhs` - The right operand.
/// 
/// # Errors
/// 
/// Returns an error if the product exceeds `2²⁵⁶ - 1`.
/// 
pub fn multiply(lhs: u256, rhs: u256) -> Result<u256, ArithmeticError> {
	let product = to_wide(lhs) * to_wide(rhs);

	if product.bits() > 256 {
		return Err(ArithmeticError::Overflow { op: Operation::Multiplication, lhs, rhs });
	}

	Ok(from_wide(&product))
}

//		subtract																
/// Checked subtraction of two values.
/// 
/// Computed as unsigned big-integer subtraction through an
/// arbitrary-precision intermediate. The canonical big-endian encoding makes
/// the underflow check a plain byte comparison.
/// 
/// # Parameters
/// 
/// * `lhs` - The left operand.
/// * `rhs` - The right operand.
/// 
/// # Errors
/// 
/// Returns an error if `rhs` is greater than `lhs`, as the result would be
/// negative.
/// 
pub fn subtract(lhs: u256, rhs: u256) -> Result<u256, ArithmeticError> {
	if lhs < rhs {
		return Err(ArithmeticError::Underflow { lhs, rhs });
	}

	Ok(from_wide(&(to_wide(lhs) - to_wide(rhs))))
}

//		Private functions

//		from_wide																
/// Re-encodes an arbitrary-precision value into the canonical form.
/// 
/// The value must already be known to fit in 256 bits.
/// 
fn from_wide(value: &BigUint) -> u256 {
	let magnitude = value.to_bytes_be();
	let mut bytes = [0_u8; 32];
	bytes[u256::BYTES - magnitude.len()..].copy_from_slice(&magnitude);
	u256::new(bytes)
}

//		to_wide																	
/// Widens a canonical value into an arbitrary-precision intermediate.
fn to_wide(value: u256) -> BigUint {
	BigUint::from_bytes_be(value.as_slice())
}

//󰭅		Add																		
impl Add for u256 {
	type Output = Self;

	//		add																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn add(self, rhs: Self) -> Self::Output {
		add(self, rhs).expect("Attempt to add overflowed")
	}
}

//󰭅		AddAssign																
impl AddAssign for u256 {
	//		add_assign															
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

//󰭅		BitAnd																	
impl BitAnd for u256 {
	type Output = Self;

	//		bitand																
	fn bitand(self, rhs: Self) -> Self::Output {
		bitwise_and(self, rhs)
	}
}

//󰭅		BitAndAssign															
impl BitAndAssign for u256 {
	//		bitand_assign														
	fn bitand_assign(&mut self, rhs: Self) {
		*self = *self & rhs;
	}
}

//󰭅		BitOr																	
impl BitOr for u256 {
	type Output = Self;

	//		bitor																
	fn bitor(self, rhs: Self) -> Self::Output {
		bitwise_or(self, rhs)
	}
}

//󰭅		BitOrAssign																
impl BitOrAssign for u256 {
	//		bitor_assign														
	fn bitor_assign(&mut self, rhs: Self) {
		*self = *self | rhs;
	}
}

//󰭅		BitXor																	
impl BitXor for u256 {
	type Output = Self;

	//		bitxor																
	fn bitxor(self, rhs: Self) -> Self::Output {
		bitwise_xor(self, rhs)
	}
}

//󰭅		BitXorAssign															
impl BitXorAssign for u256 {
	//		bitxor_assign														
	fn bitxor_assign(&mut self, rhs: Self) {
		*self = *self ^ rhs;
	}
}

//󰭅		Div																		
impl Div for u256 {
	type Output = Self;

	//		div																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn div(self, rhs: Self) -> Self::Output {
		assert!(!rhs.is_zero(), "Attempt to divide by zero");
		divide(self, rhs).expect("Attempt to divide overflowed")
	}
}

//󰭅		DivAssign																
impl DivAssign for u256 {
	//		div_assign															
	fn div_assign(&mut self, rhs: Self) {
		*self = *self / rhs;
	}
}

//󰭅		Mul																		
impl Mul for u256 {
	type Output = Self;

	//		mul																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn mul(self, rhs: Self) -> Self::Output {
		multiply(self, rhs).expect("Attempt to multiply overflowed")
	}
}

//󰭅		MulAssign																
impl MulAssign for u256 {
	//		mul_assign															
	fn mul_assign(&mut self, rhs: Self) {
		*self = *self * rhs;
	}
}

//󰭅		Not																		
impl Not for u256 {
	type Output = Self;

	//		not																	
	fn not(self) -> Self::Output {
		bitwise_not(self)
	}
}

//󰭅		Sub																		
impl Sub for u256 {
	type Output = Self;

	//		sub																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn sub(self, rhs: Self) -> Self::Output {
		subtract(self, rhs).expect("Attempt to subtract overflowed")
	}
}

//󰭅		SubAssign																
impl SubAssign for u256 {
	//		sub_assign															
	fn sub_assign(&mut self, rhs: Self) {
		*self = *self - rhs;
	}
}

//󰭅		Sum																		
impl Sum for u256 {
	//		sum																	
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::MIN, |acc, x| acc + x)
	}
}

//󰭅		Sum<&>																	
impl<'a> Sum<&'a Self> for u256 {
	//		sum																	
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::MIN, |acc, &x| acc + x)
	}
}


