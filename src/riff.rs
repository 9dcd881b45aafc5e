//! RIFF chunk sizing.
//!
//! Chunk sizes are stored unpadded, but every chunk starts on an even
//! offset: an odd-sized chunk is followed by one pad byte that the size
//! field does not count.

use crate::bytes::{self, Endian};
use crate::error::CodecError;

/// Decode a 4-byte little-endian chunk size field and round it up to even.
///
/// Returned as `u64` so that `u32::MAX` pads to `2^32`.
pub fn chunk_size(size_field: &[u8]) -> Result<u64, CodecError> {
    let raw: u32 = bytes::decode(size_field, Endian::Little)?;
    Ok(padded_size(raw))
}

/// Apply the even-padding rule to an already decoded size.
#[inline]
pub const fn padded_size(raw: u32) -> u64 {
    let raw = raw as u64;
    raw + (raw & 1)
}

/// Chunk header: FourCC identifier followed by the raw little-endian size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkHeader {
    /// FourCC chunk identifier, e.g. `b"fmt "`.
    pub id: [u8; 4],
    /// Size as stored, excluding the pad byte.
    pub size: u32,
}

impl ChunkHeader {
    /// Encoded header length.
    pub const LEN: usize = 8;

    /// Parse the header from the first 8 bytes of `data`.
    pub fn parse(data: &[u8]) -> Result<Self, CodecError> {
        let header = data.get(..Self::LEN).ok_or(CodecError::InvalidLength {
            expected: Self::LEN,
            actual: data.len(),
        })?;
        let (id, size_field) = header.split_at(4);
        let id: [u8; 4] = id.try_into().map_err(|_| CodecError::InvalidLength {
            expected: 4,
            actual: id.len(),
        })?;
        let size = bytes::decode(size_field, Endian::Little)?;
        Ok(Self { id, size })
    }

    /// Bytes the chunk body occupies in the stream, pad byte included.
    pub fn padded_size(&self) -> u64 {
        padded_size(self.size)
    }
}
