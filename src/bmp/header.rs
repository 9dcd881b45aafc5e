//! DIB header classification and BMP file header layout.

use alloc::format;

use crate::bytes::{self, Endian, read_at};
use crate::error::CodecError;

/// Length of the BMP file header that precedes the DIB.
pub const FILE_HEADER_LEN: usize = 14;

/// OS/2 `BITMAPCOREHEADER` size.
const CORE_HEADER_SIZE: u32 = 12;
/// Smallest Windows info header (`BITMAPINFOHEADER`).
const INFO_HEADER_SIZE: u32 = 40;

// Field offsets within the DIB header.
const CORE_BPP_OFFSET: usize = 10;
const INFO_BPP_OFFSET: usize = 14;
const INFO_COLORS_USED_OFFSET: usize = 32;

/// Width of one color table entry when sizing the palette of an info header.
///
/// Core headers always use 3-byte entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PaletteEntry {
    /// 3 bytes per entry. Byte-compatible with DIB-to-BMP converters that
    /// size every palette as RGB triples.
    #[default]
    Rgb,
    /// 4 bytes per entry (`RGBQUAD`), as stored in Windows BMP files.
    Rgbquad,
}

impl PaletteEntry {
    /// Bytes per color table entry.
    pub const fn size(self) -> u64 {
        match self {
            Self::Rgb => 3,
            Self::Rgbquad => 4,
        }
    }
}

/// The two recognized DIB header layouts, selected by the leading size field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DibHeader {
    /// 12-byte OS/2 core header; bit depth at offset 10.
    Core { bits_per_pixel: i16 },
    /// 40-byte or larger info header; bit depth at 14, colors used at 32.
    Info {
        header_size: u32,
        bits_per_pixel: i16,
        colors_used: u32,
    },
}

impl DibHeader {
    /// Classify and read the header at the start of `dib`.
    pub fn parse(dib: &[u8]) -> Result<Self, CodecError> {
        let header_size: u32 = read_at(dib, 0, Endian::Little)
            .ok_or_else(|| truncated("header size", 4, dib.len()))?;

        let header = match header_size {
            CORE_HEADER_SIZE => {
                let bits_per_pixel = read_at(dib, CORE_BPP_OFFSET, Endian::Little)
                    .ok_or_else(|| truncated("core header", 12, dib.len()))?;
                Self::Core { bits_per_pixel }
            }
            size if size >= INFO_HEADER_SIZE => {
                let truncated_info = || truncated("info header", 36, dib.len());
                Self::Info {
                    header_size: size,
                    bits_per_pixel: read_at(dib, INFO_BPP_OFFSET, Endian::Little)
                        .ok_or_else(truncated_info)?,
                    colors_used: read_at(dib, INFO_COLORS_USED_OFFSET, Endian::Little)
                        .ok_or_else(truncated_info)?,
                }
            }
            other => {
                return Err(CodecError::MalformedHeader(format!(
                    "unsupported DIB header size {other}"
                )));
            }
        };

        debug_event!(
            header_size = header.header_size(),
            bits_per_pixel = header.bits_per_pixel(),
            "parsed DIB header"
        );
        Ok(header)
    }

    /// Value of the leading size field.
    pub fn header_size(&self) -> u32 {
        match *self {
            Self::Core { .. } => CORE_HEADER_SIZE,
            Self::Info { header_size, .. } => header_size,
        }
    }

    /// Bit depth as stored, signed.
    pub fn bits_per_pixel(&self) -> i16 {
        match *self {
            Self::Core { bits_per_pixel } | Self::Info { bits_per_pixel, .. } => bits_per_pixel,
        }
    }

    /// `colors_used` field; core headers have none.
    pub fn colors_used(&self) -> Option<u32> {
        match *self {
            Self::Core { .. } => None,
            Self::Info { colors_used, .. } => Some(colors_used),
        }
    }

    /// Whether pixels are palette indices (depth of 8 bits or less).
    pub fn is_indexed(&self) -> bool {
        self.bits_per_pixel() <= 8
    }

    /// Color table size in bytes.
    ///
    /// Indexed images get a full `2^bpp` entry table. Deeper info headers
    /// carry `colors_used` entries. Deeper core headers carry none.
    ///
    /// A negative depth gives a fractional table of `2^bpp` entries, which is
    /// rounded up to whole bytes. The pixel offset is the same as if the
    /// fraction had been kept and the region rounded afterwards.
    pub fn palette_size(&self, entry: PaletteEntry) -> u64 {
        let entry_size = match self {
            Self::Core { .. } => 3,
            Self::Info { .. } => entry.size(),
        };
        let bits_per_pixel = self.bits_per_pixel();
        if bits_per_pixel < 0 {
            // entry_size <= 4, so any shift of 8 or more already yields one byte
            let divisor = 1u64 << bits_per_pixel.unsigned_abs().min(8);
            return entry_size.div_ceil(divisor);
        }
        let entries = if self.is_indexed() {
            1u64 << bits_per_pixel
        } else {
            match *self {
                Self::Core { .. } => 0,
                Self::Info { colors_used, .. } => u64::from(colors_used),
            }
        };
        entries * entry_size
    }

    /// Offset of pixel data within the full BMP file.
    ///
    /// Header plus palette, rounded up to a 4-byte boundary, after the file header.
    pub fn pixel_offset(&self, entry: PaletteEntry) -> u64 {
        let region = u64::from(self.header_size()) + self.palette_size(entry);
        FILE_HEADER_LEN as u64 + region.next_multiple_of(4)
    }
}

fn truncated(what: &str, needed: usize, actual: usize) -> CodecError {
    CodecError::MalformedHeader(format!(
        "{what} needs {needed} bytes, buffer has {actual}"
    ))
}

/// The 14-byte header of a BMP file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    /// Total file length, this header included.
    pub file_size: u32,
    /// Byte offset of pixel data from the start of the file.
    pub pixel_offset: u32,
}

impl FileHeader {
    /// File signature, `"BM"`.
    pub const MAGIC: [u8; 2] = *b"BM";

    /// Header for wrapping a DIB of `dib_len` bytes described by `header`.
    pub fn for_dib(
        dib_len: usize,
        header: &DibHeader,
        entry: PaletteEntry,
    ) -> Result<Self, CodecError> {
        let file_size = (FILE_HEADER_LEN as u64).saturating_add(dib_len as u64);
        let pixel_offset = header.pixel_offset(entry);
        debug_event!(file_size, pixel_offset, "computed BMP file header");
        Ok(Self {
            file_size: u32::try_from(file_size)
                .map_err(|_| CodecError::out_of_range(file_size, "u32 file size"))?,
            pixel_offset: u32::try_from(pixel_offset)
                .map_err(|_| CodecError::out_of_range(pixel_offset, "u32 pixel offset"))?,
        })
    }

    /// Read the header from the start of a BMP file, checking the magic.
    pub fn parse(bmp: &[u8]) -> Result<Self, CodecError> {
        let raw = bmp.get(..FILE_HEADER_LEN).ok_or(CodecError::InvalidLength {
            expected: FILE_HEADER_LEN,
            actual: bmp.len(),
        })?;
        if raw[..2] != Self::MAGIC {
            return Err(CodecError::UnrecognizedFormat);
        }
        Ok(Self {
            file_size: bytes::decode(&raw[2..6], Endian::Little)?,
            // 4 reserved bytes skipped
            pixel_offset: bytes::decode(&raw[10..14], Endian::Little)?,
        })
    }

    /// Serialize with the reserved bytes zeroed.
    pub fn to_bytes(&self) -> [u8; FILE_HEADER_LEN] {
        let mut out = [0u8; FILE_HEADER_LEN];
        out[..2].copy_from_slice(&Self::MAGIC);
        out[2..6].copy_from_slice(&self.file_size.to_le_bytes());
        // 6..10 reserved, left zero
        out[10..14].copy_from_slice(&self.pixel_offset.to_le_bytes());
        out
    }
}
