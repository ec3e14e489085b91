/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use zune_core::bit_depth::BitType;
use zune_core::colorspace::ColorSpace;
use zune_core::options::{DecoderOptions, EncoderOptions};
use zune_freeimage::{FreeImageFormat, ImageType, NativeLibrary};
use zune_image::codecs::freeimage::FreeImageCodec;
use zune_image::codecs::ImageFormat;
use zune_image::errors::ImageErrors;
use zune_image::traits::DecoderTrait;

use crate::{random_image, RawLibrary};

fn codec() -> FreeImageCodec<RawLibrary> {
    FreeImageCodec::new(RawLibrary::new())
}

#[test]
fn unstorable_pixel_formats_allocate_nothing() {
    let codec = codec();
    let options = EncoderOptions::default();

    let cases = [
        (ColorSpace::RG, BitType::U8, ImageFormat::TIFF),
        (ColorSpace::RGB, BitType::I32, ImageFormat::TIFF),
        (ColorSpace::RGBA, BitType::F64, ImageFormat::TIFF),
        // the double's PNG writer has no float types
        (ColorSpace::Luma, BitType::F32, ImageFormat::PNG),
        // and its GIF writer is palette only
        (ColorSpace::RGB, BitType::U8, ImageFormat::GIF),
        (ColorSpace::RGB, BitType::U8, ImageFormat::QOI),
        (ColorSpace::RGB, BitType::U8, ImageFormat::RAW)
    ];
    let mut failed = vec![];

    for (colorspace, depth, format) in cases {
        let image = random_image(4, 4, colorspace, depth, 1);

        match codec.encode(&image, format, &options) {
            Err(ImageErrors::UnsupportedFormat(_)) => (),
            other => failed.push(format!("{colorspace:?}/{depth:?} as {format:?}: {other:?}"))
        }
    }
    assert_eq!(codec.library().acquired_bitmaps(), 0);

    if !failed.is_empty() {
        panic!("Errors found during test run: {failed:#?}");
    }
}

#[test]
fn failed_save_releases_the_bitmap() {
    let codec = codec();
    let image = random_image(3, 3, ColorSpace::RGB, BitType::U8, 2);

    codec.library().fail_saves(true);

    match codec.encode(&image, ImageFormat::PNG, &EncoderOptions::default()) {
        Err(ImageErrors::CodecError(Some(message))) => {
            assert_eq!(message, "No space left on device")
        }
        other => panic!("Expected a codec error, got {other:?}")
    }
    assert_eq!(codec.library().acquired_bitmaps(), 1);
    assert_eq!(codec.library().live_bitmaps(), 0);
}

#[test]
fn warnings_of_earlier_calls_are_not_reported() {
    let codec = codec();
    let library = codec.library();
    let image = random_image(3, 2, ColorSpace::RGB, BitType::U8, 12);

    let bytes = codec
        .encode(&image, ImageFormat::PNG, &EncoderOptions::default())
        .unwrap();

    library.warn_on_load("PNG warning: iCCP: known incorrect sRGB profile");
    codec.decode(&bytes).unwrap();

    library.fail_saves_quietly();

    match codec.encode(&image, ImageFormat::PNG, &EncoderOptions::default()) {
        Err(ImageErrors::CodecError(None)) => (),
        other => panic!("Expected a codec error without a message, got {other:?}")
    }
    assert_eq!(library.live_bitmaps(), 0);
}

#[test]
fn truncated_data() {
    let codec = codec();
    let image = random_image(3, 3, ColorSpace::RGB, BitType::U8, 3);

    let mut bytes = codec
        .encode(&image, ImageFormat::TIFF, &EncoderOptions::default())
        .unwrap();
    bytes.pop();

    match codec.decode(&bytes) {
        Err(ImageErrors::CodecError(Some(message))) => assert_eq!(message, "Truncated bitmap"),
        other => panic!("Expected a codec error, got {other:?}")
    }
    assert_eq!(codec.library().live_bitmaps(), 0);
}

#[test]
fn unknown_data() {
    let codec = codec();

    assert!(codec.identify(b"definitely not an image").is_none());
    assert!(matches!(
        codec.decode(b"definitely not an image"),
        Err(ImageErrors::UnsupportedFormat(_))
    ));
    assert!(matches!(
        codec.decode_as(&[], ImageFormat::QOI),
        Err(ImageErrors::UnsupportedFormat(_))
    ));
    assert_eq!(codec.library().acquired_bitmaps(), 0);
}

#[test]
fn wrong_format_hint() {
    let codec = codec();
    let image = random_image(2, 2, ColorSpace::Luma, BitType::U8, 4);
    let bytes = codec
        .encode(&image, ImageFormat::BMP, &EncoderOptions::default())
        .unwrap();

    match codec.decode_as(&bytes, ImageFormat::PNG) {
        Err(ImageErrors::CodecError(Some(message))) => {
            assert_eq!(message, "Data was saved as another format")
        }
        other => panic!("Expected a codec error, got {other:?}")
    }
}

#[test]
fn unreadable_bit_depth_releases_the_bitmap() {
    let codec = codec();
    let library = codec.library();

    let bitmap = library.allocate(ImageType::Bitmap, 4, 4, 4).unwrap();
    let bytes = library
        .save_to_memory(FreeImageFormat::BMP, &bitmap, 0)
        .unwrap();
    drop(bitmap);

    assert!(matches!(
        codec.decode(&bytes),
        Err(ImageErrors::InvalidBitDepth(4))
    ));
    assert_eq!(library.acquired_bitmaps(), 2);
    assert_eq!(library.live_bitmaps(), 0);
}

#[test]
fn size_limits() {
    let options = DecoderOptions::default().set_max_width(16).set_max_height(8);
    let codec = FreeImageCodec::new_with_options(RawLibrary::new(), options);

    let wide = random_image(17, 2, ColorSpace::Luma, BitType::U8, 5);
    let bytes = codec
        .encode(&wide, ImageFormat::PNG, &EncoderOptions::default())
        .unwrap();

    assert!(matches!(
        codec.decode(&bytes),
        Err(ImageErrors::ImageTooLarge("width", 16, 17))
    ));

    let tall = random_image(2, 9, ColorSpace::Luma, BitType::U8, 5);
    let bytes = codec
        .encode(&tall, ImageFormat::PNG, &EncoderOptions::default())
        .unwrap();

    assert!(matches!(
        codec.decode(&bytes),
        Err(ImageErrors::ImageTooLarge("height", 8, 9))
    ));
    assert_eq!(codec.library().live_bitmaps(), 0);
}

#[test]
fn headers_are_not_available() {
    let codec = codec();

    assert!(matches!(
        codec.read_headers(&[]),
        Err(ImageErrors::NotImplemented(_))
    ));
    assert!(matches!(
        codec.decoder(&[]).read_headers(),
        Err(ImageErrors::NotImplemented(_))
    ));
}

#[test]
fn files() {
    let codec = codec();
    let image = random_image(2, 2, ColorSpace::RGB, BitType::U8, 6);
    let directory = std::env::temp_dir();

    let missing = directory.join("zune-freeimage-does-not-exist.png");
    assert!(matches!(
        codec.decode_file(&missing),
        Err(ImageErrors::IoError(_))
    ));

    let unknown = directory.join(format!("zune-freeimage-{}.xyz", std::process::id()));
    assert!(matches!(
        codec.encode_to_file(&image, &unknown, &EncoderOptions::default()),
        Err(ImageErrors::UnsupportedFormat(_))
    ));
    assert!(!unknown.exists());
}

#[test]
fn messages() {
    let error = ImageErrors::ImageTooLarge("width", 16, 17);
    assert!(format!("{error}").contains("16"));

    let error = ImageErrors::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
    assert!(format!("{error:?}").contains("gone"));
}
