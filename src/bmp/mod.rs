//! BMP file container around a raw DIB payload.
//!
//! A DIB (header, optional color table, pixels) becomes a BMP file by
//! prepending a 14-byte file header that records the total size and where
//! pixel data starts. Pixel data is never touched in either direction.
//!
//! Use top-level [`crate::dib_to_bmp`], [`crate::bmp_to_dib`], or
//! [`crate::DibRequest`] for limits and cancellation.

mod header;

pub use header::{DibHeader, FILE_HEADER_LEN, FileHeader, PaletteEntry};

use crate::error::CodecError;
use crate::limits::Limits;
use alloc::vec::Vec;
use enough::Stop;

/// Wrap a DIB in a BMP file header.
pub(crate) fn dib_to_bmp(
    dib: &[u8],
    entry: PaletteEntry,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Vec<u8>, CodecError> {
    if let Some(limits) = limits {
        limits.check_input(dib.len())?;
    }
    let header = DibHeader::parse(dib)?;
    let file_header = FileHeader::for_dib(dib.len(), &header, entry)?;
    let out_len = FILE_HEADER_LEN + dib.len();
    if let Some(limits) = limits {
        limits.check_memory(out_len)?;
    }
    stop.check()?;

    let mut out = Vec::with_capacity(out_len);
    out.extend_from_slice(&file_header.to_bytes());
    out.extend_from_slice(dib);
    Ok(out)
}

/// Strip the file header. The header itself is not validated.
pub(crate) fn bmp_to_dib(bmp: &[u8]) -> Result<&[u8], CodecError> {
    bmp.get(FILE_HEADER_LEN..).ok_or(CodecError::InvalidLength {
        expected: FILE_HEADER_LEN,
        actual: bmp.len(),
    })
}
