//! # zenbinutils
//!
//! Binary codec primitives for container formats: endian-aware scalar
//! conversions, RIFF chunk sizing, and BMP file reconstruction around raw
//! DIB payloads (as found in clipboard data and embedded resources).
//!
//! ## Scalars (`bytes`)
//! - 8/16/32/64-bit integers, signed and unsigned, either byte order
//! - IEEE-754 single and double precision
//! - Range-checked integer encoding: values that don't fit the target width
//!   are rejected, never truncated
//!
//! ## RIFF (`riff`)
//! - Chunk size fields with the even-padding rule applied
//!
//! ## BMP (`bmp`)
//! - [`dib_to_bmp`]: prepend the 14-byte file header, computing the pixel
//!   data offset from the OS/2 core (12-byte) or Windows info (40+ byte) header
//! - [`bmp_to_dib`]: strip the file header (zero-copy)
//!
//! ## Non-Goals
//!
//! - Pixel decoding or encoding
//! - Compressed DIB variants
//! - Validation of headers beyond the two recognized layouts
//!
//! ## Usage
//!
//! ```
//! use zenbinutils::bytes::{Endian, int_to_word, word_to_int};
//!
//! let raw = int_to_word(0xBEEF, Endian::Big)?;
//! assert_eq!(raw, [0xBE, 0xEF]);
//! assert_eq!(word_to_int(&raw, Endian::Big)?, 0xBEEF);
//!
//! let mut dib = vec![0u8; 12];
//! dib[..4].copy_from_slice(&12u32.to_le_bytes());
//! dib[10..12].copy_from_slice(&1i16.to_le_bytes());
//! let bmp = zenbinutils::dib_to_bmp(&dib)?;
//! assert_eq!(zenbinutils::bmp_to_dib(&bmp)?, &dib[..]);
//! # Ok::<(), zenbinutils::CodecError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(feature = "tracing")]
macro_rules! debug_event {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_event {
    ($($arg:tt)*) => {};
}

mod error;
mod limits;
mod request;

pub mod bmp;
pub mod bytes;
pub mod riff;

use alloc::vec::Vec;

// Re-exports
pub use bytes::Endian;
pub use enough::{Stop, Unstoppable};
pub use error::CodecError;
pub use limits::Limits;
pub use request::DibRequest;

/// Wrap a DIB in a BMP file header, with default palette sizing and no limits.
///
/// See [`DibRequest`] for limits, cancellation, and palette entry width.
pub fn dib_to_bmp(dib: &[u8]) -> Result<Vec<u8>, CodecError> {
    DibRequest::new(dib).into_bmp(Unstoppable)
}

/// Return the DIB following the 14-byte file header of a BMP file.
///
/// The file header is discarded without validation; use
/// [`bmp::FileHeader::parse`] to inspect it.
pub fn bmp_to_dib(bmp: &[u8]) -> Result<&[u8], CodecError> {
    bmp::bmp_to_dib(bmp)
}
