use std::fs;

use image::{Rgba, RgbaImage};
use tempfile::TempDir;

use pngcrypt_core::{commands, Key, PngCryptError};

fn zero_key() -> Key {
    "00".repeat(32).parse().expect("key was not parsed")
}

fn white_cover(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([0xff, 0xff, 0xff, 0xff]))
}

#[test]
fn should_encode_and_decode_the_reference_scenario_through_files() {
    let out_dir = TempDir::new().expect("no temp dir");
    let input = out_dir.path().join("mock.zip");
    let cover = out_dir.path().join("mock_mask.png");
    let encoded = out_dir.path().join("encrypted.png");
    let decoded = out_dir.path().join("decrypted.zip");

    fs::write(&input, [1u8, 2, 3, 4, 5]).unwrap();
    white_cover(100, 100).save(&cover).unwrap();

    commands::encode(zero_key(), &input, &cover, &encoded).expect("encode failed");

    let encoded_len = fs::metadata(&encoded).expect("encoded image was not written").len();
    assert!(encoded_len > 0, "encoded image is not supposed to be empty");

    commands::decode(zero_key(), &encoded, &decoded).expect("decode failed");

    assert_eq!(fs::read(&decoded).unwrap(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn encoded_image_should_differ_from_the_cover_only_in_blue_lsbs() {
    let out_dir = TempDir::new().expect("no temp dir");
    let input = out_dir.path().join("note.txt");
    let cover_path = out_dir.path().join("cover.png");
    let encoded_path = out_dir.path().join("encoded.png");

    fs::write(&input, b"a short secret note").unwrap();

    // a cover with some texture, not just flat white
    let cover = RgbaImage::from_fn(64, 64, |x, y| {
        Rgba([(x * 3) as u8, (y * 5) as u8, (x + y) as u8, 0xff])
    });
    cover.save(&cover_path).unwrap();

    commands::encode(zero_key(), &input, &cover_path, &encoded_path).expect("encode failed");

    let encoded = image::open(&encoded_path).unwrap().to_rgba8();
    assert_eq!(cover.dimensions(), encoded.dimensions());

    for (c, e) in cover.pixels().zip(encoded.pixels()) {
        assert_eq!(c[0], e[0], "red channel changed");
        assert_eq!(c[1], e[1], "green channel changed");
        assert_eq!(c[3], e[3], "alpha channel changed");
        assert_eq!(c[2] & 0xfe, e[2] & 0xfe, "high blue bits changed");
    }
}

#[test]
fn should_round_trip_a_larger_binary_file() {
    let out_dir = TempDir::new().expect("no temp dir");
    let input = out_dir.path().join("random.bin");
    let cover = out_dir.path().join("cover.png");
    let encoded = out_dir.path().join("encoded.png");
    let decoded = out_dir.path().join("decoded.bin");

    // incompressible-ish pattern, forces a payload of a few KiB
    let data: Vec<u8> = (0..4096u32)
        .map(|i| (i.wrapping_mul(2_654_435_761) >> 13) as u8)
        .collect();
    fs::write(&input, &data).unwrap();
    white_cover(256, 256).save(&cover).unwrap();

    commands::encode(zero_key(), &input, &cover, &encoded).expect("encode failed");
    commands::decode(zero_key(), &encoded, &decoded).expect("decode failed");

    assert_eq!(fs::read(&decoded).unwrap(), data);
}

#[test]
fn should_not_write_an_output_file_when_decoding_fails() {
    let out_dir = TempDir::new().expect("no temp dir");
    let cover = out_dir.path().join("plain.png");
    let decoded = out_dir.path().join("should_not_exist.bin");

    white_cover(100, 100).save(&cover).unwrap();

    let result = commands::decode(zero_key(), &cover, &decoded);
    assert!(result.is_err(), "a plain image must not decode");
    assert!(!decoded.exists(), "no partial output may be written");
}

#[test]
fn should_surface_unsupported_image_formats() {
    let out_dir = TempDir::new().expect("no temp dir");
    let input = out_dir.path().join("data.bin");
    let not_an_image = out_dir.path().join("cover.png");
    let encoded = out_dir.path().join("encoded.png");

    fs::write(&input, [1u8, 2, 3]).unwrap();
    fs::write(&not_an_image, b"definitely not a png").unwrap();

    let result = commands::encode(zero_key(), &input, &not_an_image, &encoded);
    match result.err() {
        Some(PngCryptError::UnsupportedImageFormat) => (),
        _ => panic!("broken cover image was not rejected"),
    }
}

#[test]
fn decoding_with_the_wrong_key_should_not_return_the_original() {
    let out_dir = TempDir::new().expect("no temp dir");
    let input = out_dir.path().join("data.bin");
    let cover = out_dir.path().join("cover.png");
    let encoded = out_dir.path().join("encoded.png");
    let decoded = out_dir.path().join("decoded.bin");

    let data = b"the original bytes".to_vec();
    fs::write(&input, &data).unwrap();
    white_cover(100, 100).save(&cover).unwrap();

    commands::encode(zero_key(), &input, &cover, &encoded).expect("encode failed");

    let wrong_key: Key = "42".repeat(32).parse().unwrap();
    match commands::decode(wrong_key, &encoded, &decoded) {
        Err(PngCryptError::Decryption) => assert!(!decoded.exists()),
        Err(e) => panic!("unexpected error kind: {e:?}"),
        Ok(()) => assert_ne!(fs::read(&decoded).unwrap(), data),
    }
}
