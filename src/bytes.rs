//! Endian-aware conversions between byte spans and fixed-width scalars.
//!
//! Every decoder requires a slice of exactly the scalar's width. Integer
//! encoders accept a wide `i128` and reject anything the target type cannot
//! represent, so callers holding values of unknown range get an error rather
//! than silent truncation.

use crate::error::CodecError;

/// Byte order of a multi-byte scalar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

impl Endian {
    /// `Big` when `be` is true, `Little` otherwise.
    pub const fn from_big_endian_flag(be: bool) -> Self {
        if be { Self::Big } else { Self::Little }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width numeric type with a byte representation in either endianness.
///
/// Implemented for all primitive integers up to 64 bits, `f32` and `f64`.
pub trait Scalar: Copy + sealed::Sealed {
    /// Encoded width in bytes.
    const WIDTH: usize;
    /// Type name used in error messages.
    const NAME: &'static str;
    /// Fixed-size encoded form.
    type Bytes: AsRef<[u8]> + Copy;

    #[doc(hidden)]
    fn read(bytes: &[u8], endian: Endian) -> Option<Self>;

    #[doc(hidden)]
    fn write(self, endian: Endian) -> Self::Bytes;
}

macro_rules! impl_scalar {
    ($($ty:ty => $width:literal),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl Scalar for $ty {
            const WIDTH: usize = $width;
            const NAME: &'static str = stringify!($ty);
            type Bytes = [u8; $width];

            #[inline]
            fn read(bytes: &[u8], endian: Endian) -> Option<Self> {
                let arr: [u8; $width] = bytes.try_into().ok()?;
                Some(match endian {
                    Endian::Little => <$ty>::from_le_bytes(arr),
                    Endian::Big => <$ty>::from_be_bytes(arr),
                })
            }

            #[inline]
            fn write(self, endian: Endian) -> [u8; $width] {
                match endian {
                    Endian::Little => self.to_le_bytes(),
                    Endian::Big => self.to_be_bytes(),
                }
            }
        }
    )*};
}

impl_scalar! {
    u8 => 1, i8 => 1,
    u16 => 2, i16 => 2,
    u32 => 4, i32 => 4,
    u64 => 8, i64 => 8,
    f32 => 4, f64 => 8,
}

/// Decode a scalar from a slice of exactly `T::WIDTH` bytes.
#[inline]
pub fn decode<T: Scalar>(bytes: &[u8], endian: Endian) -> Result<T, CodecError> {
    T::read(bytes, endian).ok_or(CodecError::InvalidLength {
        expected: T::WIDTH,
        actual: bytes.len(),
    })
}

/// Encode a scalar. Infallible: the value already has the target width.
#[inline]
pub fn encode<T: Scalar>(value: T, endian: Endian) -> T::Bytes {
    value.write(endian)
}

/// Encode an arbitrary integer as `T`, rejecting values outside `T`'s range.
pub fn encode_int<T>(value: i128, endian: Endian) -> Result<T::Bytes, CodecError>
where
    T: Scalar + TryFrom<i128>,
{
    let narrowed = T::try_from(value).map_err(|_| CodecError::out_of_range(value, T::NAME))?;
    Ok(narrowed.write(endian))
}

/// Read `T` at `offset`, or `None` if the slice ends first.
#[inline]
pub(crate) fn read_at<T: Scalar>(data: &[u8], offset: usize, endian: Endian) -> Option<T> {
    let end = offset.checked_add(T::WIDTH)?;
    T::read(data.get(offset..end)?, endian)
}

// ── Named conversions ───────────────────────────────────────────────

/// One byte to `u8`.
pub fn byte_to_int(data: &[u8]) -> Result<u8, CodecError> {
    decode(data, Endian::Little)
}

/// Integer in `0..=255` to one byte.
pub fn int_to_byte(val: i128) -> Result<[u8; 1], CodecError> {
    encode_int::<u8>(val, Endian::Little)
}

/// Two bytes to an unsigned word.
pub fn word_to_int(data: &[u8], endian: Endian) -> Result<u16, CodecError> {
    decode(data, endian)
}

/// Two bytes to a signed word.
pub fn signed_word_to_int(data: &[u8], endian: Endian) -> Result<i16, CodecError> {
    decode(data, endian)
}

/// Integer in `0..=65535` to two bytes.
pub fn int_to_word(val: i128, endian: Endian) -> Result<[u8; 2], CodecError> {
    encode_int::<u16>(val, endian)
}

/// Integer in `-32768..=32767` to two bytes.
pub fn int_to_signed_word(val: i128, endian: Endian) -> Result<[u8; 2], CodecError> {
    encode_int::<i16>(val, endian)
}

/// Four bytes to an unsigned double word.
pub fn dword_to_int(data: &[u8], endian: Endian) -> Result<u32, CodecError> {
    decode(data, endian)
}

/// Four bytes to a signed double word.
pub fn signed_dword_to_int(data: &[u8], endian: Endian) -> Result<i32, CodecError> {
    decode(data, endian)
}

/// Unsigned 32-bit integer to four bytes.
pub fn int_to_dword(val: i128, endian: Endian) -> Result<[u8; 4], CodecError> {
    encode_int::<u32>(val, endian)
}

/// Signed 32-bit integer to four bytes.
pub fn int_to_signed_dword(val: i128, endian: Endian) -> Result<[u8; 4], CodecError> {
    encode_int::<i32>(val, endian)
}

/// Eight bytes to an unsigned quad word.
pub fn qword_to_int(data: &[u8], endian: Endian) -> Result<u64, CodecError> {
    decode(data, endian)
}

/// Eight bytes to a signed quad word.
pub fn signed_qword_to_int(data: &[u8], endian: Endian) -> Result<i64, CodecError> {
    decode(data, endian)
}

/// Unsigned 64-bit integer to eight bytes.
pub fn int_to_qword(val: i128, endian: Endian) -> Result<[u8; 8], CodecError> {
    encode_int::<u64>(val, endian)
}

/// Signed 64-bit integer to eight bytes.
pub fn int_to_signed_qword(val: i128, endian: Endian) -> Result<[u8; 8], CodecError> {
    encode_int::<i64>(val, endian)
}

/// Eight bytes to two little-endian unsigned double words.
pub fn pair_dword_to_int(data: &[u8]) -> Result<(u32, u32), CodecError> {
    if data.len() != 8 {
        return Err(CodecError::InvalidLength {
            expected: 8,
            actual: data.len(),
        });
    }
    let (lo, hi) = data.split_at(4);
    Ok((decode(lo, Endian::Little)?, decode(hi, Endian::Little)?))
}

/// Big-endian unsigned word.
pub fn uint16_be(chunk: &[u8]) -> Result<u16, CodecError> {
    decode(chunk, Endian::Big)
}

/// Four bytes to an IEEE-754 single, widened to `f64`.
pub fn float_to_f32(data: &[u8], endian: Endian) -> Result<f64, CodecError> {
    decode::<f32>(data, endian).map(f64::from)
}

/// Round `val` to single precision and encode it.
///
/// Finite values whose rounding overflows to infinity are rejected;
/// infinities and NaN are encoded as-is.
pub fn f32_to_float(val: f64, endian: Endian) -> Result<[u8; 4], CodecError> {
    let narrowed = val as f32;
    if narrowed.is_infinite() && val.is_finite() {
        return Err(CodecError::out_of_range(val, f32::NAME));
    }
    Ok(narrowed.write(endian))
}

/// Eight bytes to an IEEE-754 double.
pub fn double_to_f64(data: &[u8], endian: Endian) -> Result<f64, CodecError> {
    decode(data, endian)
}

/// IEEE-754 double to eight bytes.
pub fn f64_to_double(val: f64, endian: Endian) -> [u8; 8] {
    encode(val, endian)
}
