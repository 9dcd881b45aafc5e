//! Property tests: every encoder is the exact inverse of its decoder.

use proptest::prelude::*;
use zenbinutils::bytes::*;
use zenbinutils::riff::chunk_size;
use zenbinutils::{bmp_to_dib, dib_to_bmp};

fn endian() -> impl Strategy<Value = Endian> {
    prop_oneof![Just(Endian::Little), Just(Endian::Big)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn byte_roundtrip(v in any::<u8>()) {
        let raw = int_to_byte(v.into()).unwrap();
        prop_assert_eq!(byte_to_int(&raw).unwrap(), v);
    }

    #[test]
    fn word_roundtrip(v in any::<u16>(), e in endian()) {
        let raw = int_to_word(v.into(), e).unwrap();
        prop_assert_eq!(word_to_int(&raw, e).unwrap(), v);
    }

    #[test]
    fn signed_word_roundtrip(v in any::<i16>(), e in endian()) {
        let raw = int_to_signed_word(v.into(), e).unwrap();
        prop_assert_eq!(signed_word_to_int(&raw, e).unwrap(), v);
    }

    #[test]
    fn dword_roundtrip(v in any::<u32>(), e in endian()) {
        let raw = int_to_dword(v.into(), e).unwrap();
        prop_assert_eq!(dword_to_int(&raw, e).unwrap(), v);
    }

    #[test]
    fn signed_dword_roundtrip(v in any::<i32>(), e in endian()) {
        let raw = int_to_signed_dword(v.into(), e).unwrap();
        prop_assert_eq!(signed_dword_to_int(&raw, e).unwrap(), v);
    }

    #[test]
    fn qword_roundtrip(v in any::<u64>(), s in any::<i64>(), e in endian()) {
        prop_assert_eq!(qword_to_int(&int_to_qword(v.into(), e).unwrap(), e).unwrap(), v);
        prop_assert_eq!(
            signed_qword_to_int(&int_to_signed_qword(s.into(), e).unwrap(), e).unwrap(),
            s
        );
    }

    #[test]
    fn word_rejects_out_of_range(v in prop_oneof![i128::MIN..0i128, 65536i128..i128::MAX]) {
        let rejected = matches!(
            int_to_word(v, Endian::Little),
            Err(zenbinutils::CodecError::ValueOutOfRange { .. })
        );
        prop_assert!(rejected);
    }

    #[test]
    fn float32_roundtrip_bitwise(bits in any::<u32>(), e in endian()) {
        let v = f32::from_bits(bits);
        prop_assume!(!v.is_nan());
        let raw = f32_to_float(f64::from(v), e).unwrap();
        let back = float_to_f32(&raw, e).unwrap() as f32;
        prop_assert_eq!(back.to_bits(), bits);
    }

    #[test]
    fn float64_roundtrip_bitwise(bits in any::<u64>(), e in endian()) {
        let v = f64::from_bits(bits);
        prop_assume!(!v.is_nan());
        let raw = f64_to_double(v, e);
        prop_assert_eq!(double_to_f64(&raw, e).unwrap().to_bits(), bits);
    }

    #[test]
    fn generic_path_matches_std(v in any::<i32>(), e in endian()) {
        let expected = match e {
            Endian::Little => v.to_le_bytes(),
            Endian::Big => v.to_be_bytes(),
        };
        prop_assert_eq!(encode(v, e), expected);
        prop_assert_eq!(decode::<i32>(&expected, e).unwrap(), v);
    }

    #[test]
    fn riff_padding(n in 0u32..=(u32::MAX / 2)) {
        let even = 2 * n;
        prop_assert_eq!(chunk_size(&even.to_le_bytes()).unwrap(), u64::from(even));
        let odd = 2 * n + 1;
        prop_assert_eq!(chunk_size(&odd.to_le_bytes()).unwrap(), u64::from(odd) + 1);
    }

    #[test]
    fn core_dib_survives_wrapping(
        bpp in prop_oneof![Just(1i16), Just(4), Just(8), Just(24)],
        body in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        let mut dib = 12u32.to_le_bytes().to_vec();
        dib.extend_from_slice(&[0u8; 6]);
        dib.extend_from_slice(&bpp.to_le_bytes());
        dib.extend_from_slice(&body);
        let bmp = dib_to_bmp(&dib).unwrap();
        prop_assert_eq!(bmp.len(), dib.len() + 14);
        prop_assert_eq!(bmp_to_dib(&bmp).unwrap(), &dib[..]);
    }

    #[test]
    fn info_dib_survives_wrapping(
        size in prop_oneof![Just(40u32), Just(52), Just(56), Just(108), Just(124)],
        bpp in prop_oneof![Just(1i16), Just(2), Just(4), Just(8), Just(16), Just(24), Just(32)],
        colors_used in 0u32..=256,
        body in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        let mut dib = vec![0u8; size as usize];
        dib[..4].copy_from_slice(&size.to_le_bytes());
        dib[14..16].copy_from_slice(&bpp.to_le_bytes());
        dib[32..36].copy_from_slice(&colors_used.to_le_bytes());
        dib.extend_from_slice(&body);
        let bmp = dib_to_bmp(&dib).unwrap();

        let pixel_offset = u32::from_le_bytes(bmp[10..14].try_into().unwrap());
        prop_assert_eq!(pixel_offset % 4, 2, "14 + 4-aligned region");
        prop_assert!(pixel_offset >= 14 + size);
        prop_assert_eq!(bmp_to_dib(&bmp).unwrap(), &dib[..]);
    }

    #[test]
    fn arbitrary_input_never_panics(data in proptest::collection::vec(any::<u8>(), 0..64)) {
        let _ = dib_to_bmp(&data);
        let _ = bmp_to_dib(&data);
        let _ = zenbinutils::bmp::FileHeader::parse(&data);
        let _ = zenbinutils::riff::ChunkHeader::parse(&data);
    }
}
