//! Custom 256-bit unsigned integer column type.

//	These lint checks are unnecessary in this module because all indexing is
//	based on the BYTES constant, which is tied to the fixed 32-byte canonical
//	form. Using .get() would add unnecessary runtime checks and make the code
//	more verbose with .unwrap()s.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "We always know the size"
)]



//		Modules

#[cfg(test)]
#[path = "tests/u256.rs"]
mod tests;



//		Packages

use crate::errors::ConversionError;
use bytes::BytesMut;
use core::{
	error::Error,
	fmt::{Debug, Display, Formatter, LowerHex, UpperHex, self},
	str::FromStr,
};
use num_bigint::BigUint;
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, Visitor},
};
use serde_json::Error as JsonError;
use std::io::{Error as IoError, ErrorKind as IoErrorKind};
use tokio_postgres::types::{FromSql, IsNull, ToSql, Type, to_sql_checked};



//		Structs

//		u256																	
/// A 256-bit unsigned integer.
/// 
/// This type represents a fixed-width 256-bit unsigned integer column value
/// inside a columnar query engine. Engines of this kind commonly model wide
/// integers as variable-length byte buffers, which makes it possible to store
/// payloads that are not valid values; this type exists to close that gap by
/// enforcing a single canonical encoding at every entry point.
/// 
/// # Canonical form
/// 
/// The value is stored as exactly 32 bytes in big-endian order, representing
/// an integer in the range `[0, 2²⁵⁶ - 1]`. Shorter buffers are accepted on
/// decode and left-padded with zero bytes (i.e. the buffer is placed at the
/// least-significant end), so that a canonical value always comes out. Longer
/// buffers are rejected rather than truncated, as truncation would silently
/// lose magnitude.
/// 
/// Two values with equal bytes are equal and interchangeable; there is no
/// other identity.
/// 
/// # Ordering
/// 
/// Because the canonical form is big-endian and fixed-width, byte-wise
/// lexicographic comparison of two values is identical to unsigned numeric
/// comparison. The [`Ord`] and [`PartialOrd`] implementations are therefore
/// derived directly from the inner byte array, and the equivalence is
/// guaranteed by the encoding itself rather than by a separate comparison
/// algorithm.
/// 
/// # Arithmetic
/// 
/// Checked arithmetic lives in the crate root as freestanding functions:
/// [`add()`](crate::add()), [`subtract()`](crate::subtract()),
/// [`multiply()`](crate::multiply()), [`divide()`](crate::divide()), and the
/// [`bitwise_and()`](crate::bitwise_and()) family. These return a typed error
/// on overflow, underflow, or division by zero, and are the intended surface
/// for a host engine's operator dispatch.
/// 
/// The standard arithmetic operators are also implemented for convenience,
/// and follow standard Rust integer behaviour: they panic on overflow,
/// underflow, and division by zero. Code that needs failures as values should
/// call the checked functions instead.
/// 
/// No operation mutates an operand; every operation produces a new value.
/// 
/// # Conversion
/// 
/// This type can be converted from any of the following types:
/// 
///   - [`u8`], [`u16`], [`u32`], [`u64`], [`u128`] — losslessly, via
///     [`From`]
///   - [`i8`], [`i16`], [`i32`], [`i64`], [`i128`] — via [`TryFrom`], which
///     rejects negative values (the type is unsigned, and no two's-complement
///     reinterpretation takes place)
/// 
/// Conversions to [`u64`] and [`i64`] are provided via [`TryFrom`], and fail
/// if the value does not fit.
/// 
/// Textual exchange uses base-10 only: [`Display`] renders decimal digits
/// with no leading zeros, and [`FromStr`] parses strictly (no signs, no
/// whitespace, no radix prefixes). The hexadecimal renderings exist for
/// diagnostics and are not part of the exchange contract.
/// 
/// # Null handling
/// 
/// Nulls live in the host's value containers, not in the payload: a nullable
/// column slot is an `Option<u256>`, and a null entry never reaches this
/// type. If either operand of an arithmetic operation is null, the result is
/// null, and the host is expected to short-circuit without calling into this
/// crate.
/// 
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[expect(non_camel_case_types, reason = "Needed to fit with convention")]
pub struct u256([u8; 32]);

//󰭅		u256																	
impl u256 {
	//		Public constants													
	/// Number of bytes in the canonical representation.
	pub const BYTES: usize = 32;

	/// The maximum value for a `u256`, i.e. `2²⁵⁶ - 1`.
	pub const MAX: Self = Self([0xFF; 32]);

	/// The minimum value for a `u256`, i.e. zero.
	pub const MIN: Self = Self([0; 32]);

	/// The value `1` as a `u256`.
	pub const ONE: Self = {
		let mut bytes = [0; 32];
		bytes[31]     = 1;
		Self(bytes)
	};

	//		Constructors														

	//		new																	
	/// Creates a new [`u256`] from a canonical 32-byte big-endian array.
	/// 
	/// Every 32-byte pattern is a valid value, so this cannot fail.
	/// 
	/// # Parameters
	/// 
	/// * `bytes` - The canonical big-endian bytes.
	/// 
	#[must_use]
	pub const fn new(bytes: [u8; 32]) -> Self {
		Self(bytes)
	}

	//		Public methods														

	//		as_bytes															
	/// Represents the canonical form as a reference to the inner byte array.
	#[must_use]
	pub const fn as_bytes(&self) -> &[u8; 32] {
		&self.0
	}

	//		as_slice															
	/// Represents the canonical form as a slice of bytes.
	/// 
	/// The length of the slice is always equal to [`Self::BYTES`].
	/// 
	#[must_use]
	pub const fn as_slice(&self) -> &[u8] {
		self.0.as_slice()
	}

	//		from_be_bytes														
	/// Creates a [`u256`] from a variable-length big-endian byte buffer.
	/// 
	/// A buffer of exactly 32 bytes is already canonical and is taken as-is.
	/// A shorter buffer is left-padded with zero bytes, i.e. placed at the
	/// least-significant end of the canonical form. A longer buffer fails
	/// rather than being truncated: truncation would silently lose magnitude
	/// and corrupt comparisons that depend on exact value equivalence.
	/// 
	/// # Parameters
	/// 
	/// * `bytes` - The big-endian byte buffer to create the [`u256`] from.
	/// 
	/// # Errors
	/// 
	/// Returns an error if the buffer is longer than 32 bytes.
	/// 
	pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, ConversionError> {
		if bytes.len() > Self::BYTES {
			return Err(ConversionError::InvalidLength(bytes.len()));
		}

		let mut value = [0_u8; 32];
		value[Self::BYTES - bytes.len()..].copy_from_slice(bytes);
		Ok(Self(value))
	}

	//		from_json															
	/// Deserialises a JSON value into a [`u256`].
	/// 
	/// Accepts either a JSON number or a string of decimal digits.
	/// 
	/// # Parameters
	/// 
	/// * `json` - The JSON string to deserialise.
	/// 
	/// # Errors
	/// 
	/// If the JSON string is invalid, or the number inside the JSON is
	/// invalid, then an error will be returned.
	/// 
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}

	//		is_zero																
	/// Determines if the value is zero.
	#[must_use]
	pub fn is_zero(self) -> bool {
		self.0.iter().all(|&b| b == 0)
	}

	//		to_be_bytes															
	/// Represents the canonical form as a 32-byte big-endian array.
	#[must_use]
	pub const fn to_be_bytes(self) -> [u8; 32] {
		self.0
	}

	//		to_json																
	/// Serialises the value to a JSON string.
	/// 
	/// # Errors
	/// 
	/// If the value cannot be serialised, an error will be returned.
	/// 
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}

	//		to_vec																
	/// Represents the canonical form as a [`Vec`] of bytes.
	#[must_use]
	pub fn to_vec(&self) -> Vec<u8> {
		self.0.to_vec()
	}
}

//󰭅		Debug																	
impl Debug for u256 {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "u256({self})")
	}
}

//󰭅		Deserialize																
impl<'de> Deserialize<'de> for u256 {
	//		deserialize															
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			//	If the format is human-readable, accept both numbers and strings
			deserializer.deserialize_any(U256Visitor)
		} else {
			//	For binary formats, expect raw bytes
			deserializer.deserialize_bytes(BytesVisitor)
		}
	}
}

//󰭅		Display																	
impl Display for u256 {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}", BigUint::from_bytes_be(&self.0).to_str_radix(10))
	}
}

//󰭅		From: u8 -> u256														
impl From<u8> for u256 {
	//		from																
	fn from(v: u8) -> Self {
		Self::from(u64::from(v))
	}
}

//󰭅		From: u16 -> u256														
impl From<u16> for u256 {
	//		from																
	fn from(v: u16) -> Self {
		Self::from(u64::from(v))
	}
}

//󰭅		From: u32 -> u256														
impl From<u32> for u256 {
	//		from																
	fn from(v: u32) -> Self {
		Self::from(u64::from(v))
	}
}

//󰭅		From: u64 -> u256														
impl From<u64> for u256 {
	//		from																
	fn from(v: u64) -> Self {
		let mut bytes = [0_u8; 32];
		bytes[24..].copy_from_slice(&v.to_be_bytes());
		Self(bytes)
	}
}

//󰭅		From: u128 -> u256														
impl From<u128> for u256 {
	//		from																
	fn from(v: u128) -> Self {
		let mut bytes = [0_u8; 32];
		bytes[16..].copy_from_slice(&v.to_be_bytes());
		Self(bytes)
	}
}

//󰭅		FromSql																	
impl<'a> FromSql<'a> for u256 {
	//		from_sql															
	fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::BYTEA => Self::from_be_bytes(raw).map_err(Into::into),
			&Type::TEXT  => String::from_utf8(raw.to_vec())?.parse::<Self>().map_err(Into::into),
			unknown      => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for u256: {unknown}"),
			))),
		}
	}

	//		accepts																
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::BYTEA | Type::TEXT)
	}
}

//󰭅		FromStr																	
impl FromStr for u256 {
	type Err = ConversionError;

	//		from_str															
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.is_empty() {
			return Err(ConversionError::EmptyValue);
		}

		//	Strictly base 10: no signs, no whitespace, no radix prefixes, no
		//	digit separators
		let mut value = BigUint::default();
		for c in s.chars() {
			let digit = c.to_digit(10).ok_or(ConversionError::InvalidDigit(c))?;
			value     = value * 10_u32 + digit;
		}

		if value.bits() > 256 {
			return Err(ConversionError::ValueTooLarge);
		}

		//	Left-pad the magnitude into the canonical form
		let magnitude = value.to_bytes_be();
		let mut bytes = [0_u8; 32];
		bytes[Self::BYTES - magnitude.len()..].copy_from_slice(&magnitude);
		Ok(Self(bytes))
	}
}

//󰭅		LowerHex																
impl LowerHex for u256 {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if f.alternate() {
			write!(f, "0x")?;
		}

		//	Find first non-zero byte (or last byte if all zero)
		let mut start = 0;
		while start < Self::BYTES - 1 && self.0[start] == 0 {
			start += 1;
		}

		//	Handle first byte without leading zeros
		write!(f, "{:x}", self.0[start])?;

		//	Handle remaining bytes with full width
		for &byte in &self.0[start + 1..] {
			write!(f, "{byte:02x}")?;
		}

		Ok(())
	}
}

//󰭅		Serialize																
impl Serialize for u256 {
	//		serialize															
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if serializer.is_human_readable() {
			//	For JSON and similar formats, serialise as a number if it fits
			//	in a u64, and fall back to a decimal string for larger values
			if let Ok(v) = u64::try_from(*self) {
				return serializer.serialize_u64(v);
			}
			serializer.serialize_str(&self.to_string())
		} else {
			//	For binary formats, serialise the canonical bytes
			serializer.serialize_bytes(&self.0)
		}
	}
}

//󰭅		ToSql																	
impl ToSql for u256 {
	//		to_sql																
	fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::BYTEA => {
				out.extend_from_slice(&self.0);
				Ok(IsNull::No)
			},
			&Type::TEXT  => self.to_string().to_sql(ty, out),
			unknown      => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for u256: {unknown}"),
			))),
		}
	}

	//		accepts																
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::BYTEA | Type::TEXT)
	}

	to_sql_checked!();
}

//󰭅		TryFrom: i8 -> u256														
impl TryFrom<i8> for u256 {
	type Error = ConversionError;

	//		try_from															
	fn try_from(v: i8) -> Result<Self, Self::Error> {
		Self::try_from(i64::from(v))
	}
}

//󰭅		TryFrom: i16 -> u256													
impl TryFrom<i16> for u256 {
	type Error = ConversionError;

	//		try_from															
	fn try_from(v: i16) -> Result<Self, Self::Error> {
		Self::try_from(i64::from(v))
	}
}

//󰭅		TryFrom: i32 -> u256													
impl TryFrom<i32> for u256 {
	type Error = ConversionError;

	//		try_from															
	fn try_from(v: i32) -> Result<Self, Self::Error> {
		Self::try_from(i64::from(v))
	}
}

//󰭅		TryFrom: i64 -> u256													
impl TryFrom<i64> for u256 {
	type Error = ConversionError;

	//		try_from															
	fn try_from(v: i64) -> Result<Self, Self::Error> {
		if v < 0 {
			return Err(ConversionError::ValueIsNegative);
		}

		#[expect(clippy::cast_sign_loss, reason = "Already checked")]
		let value = v as u64;
		Ok(Self::from(value))
	}
}

//󰭅		TryFrom: i128 -> u256													
impl TryFrom<i128> for u256 {
	type Error = ConversionError;

	//		try_from															
	fn try_from(v: i128) -> Result<Self, Self::Error> {
		if v < 0 {
			return Err(ConversionError::ValueIsNegative);
		}

		#[expect(clippy::cast_sign_loss, reason = "Already checked")]
		let value = v as u128;
		Ok(Self::from(value))
	}
}

//󰭅		TryFrom: u256 -> i64													
impl TryFrom<u256> for i64 {
	type Error = ConversionError;

	//		try_from															
	fn try_from(v: u256) -> Result<Self, Self::Error> {
		let value = u64::try_from(v)?;

		#[expect(clippy::cast_sign_loss, reason = "Maximum is a positive constant")]
		if value > Self::MAX as u64 {
			return Err(ConversionError::ValueTooLarge);
		}

		#[expect(clippy::cast_possible_wrap, reason = "Already checked")]
		let result = value as Self;
		Ok(result)
	}
}

//󰭅		TryFrom: u256 -> u64													
impl TryFrom<u256> for u64 {
	type Error = ConversionError;

	//		try_from															
	fn try_from(v: u256) -> Result<Self, Self::Error> {
		if v.0[..24].iter().any(|&b| b != 0) {
			return Err(ConversionError::ValueTooLarge);
		}

		let mut bytes = [0_u8; 8];
		bytes.copy_from_slice(&v.0[24..]);
		Ok(Self::from_be_bytes(bytes))
	}
}

//󰭅		UpperHex																
impl UpperHex for u256 {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if f.alternate() {
			write!(f, "0x")?;
		}

		//	Find first non-zero byte (or last byte if all zero)
		let mut start = 0;
		while start < Self::BYTES - 1 && self.0[start] == 0 {
			start += 1;
		}

		//	Handle first byte without leading zeros
		write!(f, "{:X}", self.0[start])?;

		//	Handle remaining bytes with full width
		for &byte in &self.0[start + 1..] {
			write!(f, "{byte:02X}")?;
		}

		Ok(())
	}
}

//		BytesVisitor															
/// A visitor for parsing values from raw bytes.
struct BytesVisitor;

//󰭅		Visitor																	
impl Visitor<'_> for BytesVisitor {
	type Value = u256;

	//		expecting															
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "at most 32 bytes representing an unsigned 256-bit integer")
	}

	//		visit_bytes															
	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		u256::from_be_bytes(v).map_err(E::custom)
	}
}

//		U256Visitor																
/// A visitor for parsing values from numbers and strings.
struct U256Visitor;

//󰭅		Visitor																	
impl Visitor<'_> for U256Visitor {
	type Value = u256;

	//		expecting															
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "an unsigned 256-bit integer")
	}

	//		visit_i64															
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		u256::try_from(v).map_err(E::custom)
	}

	//		visit_u64															
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(u256::from(v))
	}

	//		visit_str															
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		v.parse().map_err(E::custom)
	}

	//		visit_bytes															
	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		u256::from_be_bytes(v).map_err(E::custom)
	}
}


