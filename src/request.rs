use alloc::vec::Vec;

use enough::Stop;

use crate::bmp::{self, DibHeader, FileHeader, PaletteEntry};
use crate::error::CodecError;
use crate::limits::Limits;

/// Builder for wrapping a DIB into a BMP file.
///
/// ```
/// use zenbinutils::{DibRequest, Limits, Unstoppable, bmp::PaletteEntry};
///
/// let mut dib = vec![0u8; 40];
/// dib[..4].copy_from_slice(&40u32.to_le_bytes());
/// dib[14..16].copy_from_slice(&24i16.to_le_bytes());
///
/// let limits = Limits { max_memory_bytes: Some(1 << 20), ..Default::default() };
/// let bmp = DibRequest::new(&dib)
///     .with_limits(&limits)
///     .with_palette_entry(PaletteEntry::Rgb)
///     .into_bmp(Unstoppable)?;
/// assert_eq!(&bmp[..2], b"BM");
/// assert_eq!(&bmp[10..14], &54u32.to_le_bytes());
/// # Ok::<(), zenbinutils::CodecError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DibRequest<'a> {
    dib: &'a [u8],
    limits: Option<&'a Limits>,
    palette_entry: PaletteEntry,
}

impl<'a> DibRequest<'a> {
    /// Start a request over `dib`, with default palette sizing and no limits.
    pub fn new(dib: &'a [u8]) -> Self {
        Self {
            dib,
            limits: None,
            palette_entry: PaletteEntry::default(),
        }
    }

    /// Enforce input and output size limits.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Color table entry width used for info headers. Defaults to [`PaletteEntry::Rgb`].
    pub fn with_palette_entry(mut self, entry: PaletteEntry) -> Self {
        self.palette_entry = entry;
        self
    }

    /// Parse the DIB header without building any output.
    pub fn header(&self) -> Result<DibHeader, CodecError> {
        DibHeader::parse(self.dib)
    }

    /// Compute the file header the BMP would carry.
    pub fn file_header(&self) -> Result<FileHeader, CodecError> {
        FileHeader::for_dib(self.dib.len(), &self.header()?, self.palette_entry)
    }

    /// Build the BMP file: file header followed by the unmodified DIB.
    pub fn into_bmp(self, stop: impl Stop) -> Result<Vec<u8>, CodecError> {
        bmp::dib_to_bmp(self.dib, self.palette_entry, self.limits, &stop)
    }
}
