#![no_main]
use libfuzzer_sys::fuzz_target;
use zenbinutils::*;

fuzz_target!(|data: &[u8]| {
    // If a DIB can be wrapped, unwrapping must return it unchanged
    let Ok(bmp) = DibRequest::new(data).into_bmp(enough::Unstoppable) else {
        return;
    };

    let header = zenbinutils::bmp::FileHeader::parse(&bmp).expect("wrapped output has a valid file header");
    assert_eq!(header.file_size as usize, bmp.len());
    assert_eq!(header.pixel_offset % 4, 2, "pixel data not 4-byte aligned");
    assert_eq!(bmp_to_dib(&bmp).expect("wrapped output too short"), data);
});
