#![no_main]
use libfuzzer_sys::fuzz_target;
use zenbinutils::bmp::{DibHeader, FileHeader, PaletteEntry};

fuzz_target!(|data: &[u8]| {
    // Header parsing and geometry must never panic on arbitrary bytes
    if let Ok(header) = DibHeader::parse(data) {
        let _ = header.pixel_offset(PaletteEntry::Rgb);
        let _ = header.pixel_offset(PaletteEntry::Rgbquad);
    }
    let _ = FileHeader::parse(data);
    let _ = zenbinutils::riff::ChunkHeader::parse(data);
    let _ = zenbinutils::bmp_to_dib(data);
});
