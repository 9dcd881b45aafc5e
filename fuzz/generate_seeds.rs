#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    for target in ["fuzz_parse", "fuzz_roundtrip"] {
        let dir = format!("fuzz/corpus/{target}");
        fs::create_dir_all(&dir).unwrap();

        // OS/2 core header, 1 bpp, 2-entry palette
        let mut core = vec![0u8; 12];
        core[..4].copy_from_slice(&12u32.to_le_bytes());
        core[4..6].copy_from_slice(&1u16.to_le_bytes());
        core[6..8].copy_from_slice(&1u16.to_le_bytes());
        core[8..10].copy_from_slice(&1u16.to_le_bytes());
        core[10..12].copy_from_slice(&1u16.to_le_bytes());
        core.extend_from_slice(&[0, 0, 0, 255, 255, 255, 0, 0, 0x80, 0, 0, 0]);
        fs::write(format!("{dir}/core_1bpp.dib"), &core).unwrap();

        // Info header, 24 bpp, 1x1
        let mut info = vec![0u8; 40];
        info[..4].copy_from_slice(&40u32.to_le_bytes());
        info[4..8].copy_from_slice(&1i32.to_le_bytes());
        info[8..12].copy_from_slice(&1i32.to_le_bytes());
        info[12..14].copy_from_slice(&1u16.to_le_bytes());
        info[14..16].copy_from_slice(&24u16.to_le_bytes());
        info.extend_from_slice(&[0x00, 0x00, 0xFF, 0x00]);
        fs::write(format!("{dir}/info_24bpp_1x1.dib"), &info).unwrap();

        // Info header, 8 bpp, explicit colors used
        let mut indexed = vec![0u8; 40];
        indexed[..4].copy_from_slice(&40u32.to_le_bytes());
        indexed[14..16].copy_from_slice(&8u16.to_le_bytes());
        indexed[32..36].copy_from_slice(&2u32.to_le_bytes());
        fs::write(format!("{dir}/info_8bpp.dib"), &indexed).unwrap();

        // RIFF chunk header with odd size
        fs::write(format!("{dir}/riff_odd.bin"), b"LIST\x0b\x00\x00\x00").unwrap();
    }
}
