/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use zune_core::bit_depth::BitType;
use zune_core::colorspace::ColorSpace;
use zune_core::options::EncoderOptions;
use zune_freeimage::{FreeImageFormat, ImageType, NativeBitmap, NativeLibrary, RgbQuad};
use zune_image::codecs::freeimage::FreeImageCodec;
use zune_image::codecs::ImageFormat;
use zune_image::image::Image;
use zune_image::traits::{DecoderTrait, EncoderTrait};

use crate::{random_image, RawHeader, RawLibrary};

fn codec() -> FreeImageCodec<RawLibrary> {
    FreeImageCodec::new(RawLibrary::new())
}

#[test]
fn top_row_stays_on_top() {
    let codec = codec();
    // 5x2 gray, top row 0, bottom row 255
    let mut pixels = vec![0_u8; 5];
    pixels.extend_from_slice(&[255; 5]);

    let image = Image::from_u8(&pixels, 5, 2, ColorSpace::Luma).unwrap();
    let bitmap = codec.encode_bitmap(&image, ImageFormat::PNG).unwrap();

    // native memory starts with the bottom row
    assert_eq!(&bitmap.scanline(0)[..5], &[255; 5]);
    assert_eq!(&bitmap.scanline(1)[..5], &[0; 5]);

    let decoded = codec.decode_bitmap(&bitmap).unwrap();
    assert_eq!(decoded.row::<u8>(0).unwrap(), &[0; 5]);
    assert_eq!(decoded.row::<u8>(1).unwrap(), &[255; 5]);
}

#[test]
fn channel_order_survives() {
    let codec = codec();
    let options = EncoderOptions::default();

    let rgb = Image::from_u8(&[10, 20, 30], 1, 1, ColorSpace::RGB).unwrap();
    let bitmap = codec.encode_bitmap(&rgb, ImageFormat::BMP).unwrap();

    if ImageType::Bitmap.stores_bgr() {
        assert_eq!(&bitmap.scanline(0)[..3], &[30, 20, 10]);
    }
    let bytes = codec.encode(&rgb, ImageFormat::BMP, &options).unwrap();
    let decoded = codec.decode(&bytes).unwrap();
    assert_eq!(decoded.colorspace(), ColorSpace::RGB);
    assert_eq!(decoded.to_vec::<u8>().unwrap(), vec![10, 20, 30]);

    // the same pixel described blue first
    let bgr = Image::from_u8(&[30, 20, 10], 1, 1, ColorSpace::BGR).unwrap();
    let bytes = codec.encode(&bgr, ImageFormat::BMP, &options).unwrap();
    let decoded = codec.decode(&bytes).unwrap();
    assert_eq!(decoded.colorspace(), ColorSpace::RGB);
    assert_eq!(decoded.to_vec::<u8>().unwrap(), vec![10, 20, 30]);
}

#[test]
fn monochrome_pattern_independent_of_palette() {
    let codec = codec();
    let library = codec.library();

    let pattern: Vec<u8> = (0..11).map(|x| if x % 2 == 0 { 255 } else { 0 }).collect();
    let image = Image::from_u8(&pattern, 11, 1, ColorSpace::BW).unwrap();

    let bytes = codec
        .encode(&image, ImageFormat::TIFF, &EncoderOptions::default())
        .unwrap();
    assert_eq!(codec.decode(&bytes).unwrap().to_vec::<u8>().unwrap(), pattern);

    // a bitmap written by someone else, white at palette index 0
    let mut bitmap = library.allocate(ImageType::Bitmap, 11, 1, 1).unwrap();
    bitmap.palette_mut().copy_from_slice(&[RgbQuad::WHITE, RgbQuad::BLACK]);
    bitmap.scanline_mut(0)[..2].copy_from_slice(&[0b0101_0101, 0b0100_0000]);

    let bytes = library.save_to_memory(FreeImageFormat::TIFF, &bitmap, 0).unwrap();
    drop(bitmap);

    let decoded = codec.decode(&bytes).unwrap();
    assert_eq!(decoded.colorspace(), ColorSpace::BW);
    assert_eq!(decoded.to_vec::<u8>().unwrap(), pattern);
    assert_eq!(library.live_bitmaps(), 0);
}

#[test]
fn alpha_is_dropped_for_formats_without_it() {
    let codec = codec();
    let image = Image::from_u8(&[1, 2, 3, 200, 4, 5, 6, 100], 2, 1, ColorSpace::RGBA).unwrap();

    let bytes = codec
        .encode(&image, ImageFormat::JPEG, &EncoderOptions::default())
        .unwrap();

    assert_eq!(RawHeader::parse(&bytes).unwrap().bpp, 24);

    let decoded = codec.decode(&bytes).unwrap();
    assert_eq!(decoded.colorspace(), ColorSpace::RGB);
    assert_eq!(decoded.to_vec::<u8>().unwrap(), vec![1, 2, 3, 4, 5, 6]);

    // source is untouched
    assert_eq!(image.colorspace(), ColorSpace::RGBA);
}

#[test]
fn alpha_is_dropped_from_views() {
    let codec = codec();
    let image = random_image(8, 6, ColorSpace::BGRA, BitType::U8, 7);
    let view = image.view(1, 1, 5, 3).unwrap();

    let bytes = codec
        .encode(&view, ImageFormat::JPEG, &EncoderOptions::default())
        .unwrap();
    let decoded = codec.decode(&bytes).unwrap();

    assert_eq!(decoded.colorspace(), ColorSpace::RGB);
    assert_eq!(decoded.dimensions(), (5, 3));

    for y in 0..3 {
        let source = view.row::<u8>(y).unwrap();
        let row = decoded.row::<u8>(y).unwrap();

        for (src, out) in source.chunks_exact(4).zip(row.chunks_exact(3)) {
            assert_eq!(out, &[src[2], src[1], src[0]]);
        }
    }
}

#[test]
fn capabilities() {
    let codec = codec();

    assert_eq!(codec.name(), "FreeImage");
    assert!(codec.version().starts_with("3.18"));

    assert!(codec.can_decode(ImageFormat::RAW));
    assert!(!codec.can_encode(ImageFormat::RAW));
    assert!(codec.can_encode(ImageFormat::PNG));

    for format in [
        ImageFormat::QOI,
        ImageFormat::Farbfeld,
        ImageFormat::JPEG_XL,
        ImageFormat::Unknown
    ] {
        assert!(!codec.can_decode(format));
        assert!(!codec.can_encode(format));
    }
}

#[test]
fn trait_objects() {
    let codec = codec();
    let image = random_image(6, 4, ColorSpace::RGB, BitType::U16, 3);

    let mut encoder = codec.encoder(ImageFormat::PNG);
    encoder.set_options(EncoderOptions::default().png_set_compression_level(1));

    assert_eq!(encoder.format(), ImageFormat::PNG);
    let bytes = encoder.encode(&image).unwrap();
    assert_eq!(RawHeader::parse(&bytes).unwrap().flags, 1);

    let mut decoder = codec.decoder(&bytes);
    assert_eq!(decoder.dimensions(), None);
    assert_eq!(decoder.out_colorspace(), ColorSpace::Unknown);

    let decoded = decoder.decode().unwrap();
    assert_eq!(decoder.dimensions(), Some((6, 4)));
    assert_eq!(decoder.out_colorspace(), ColorSpace::RGB);
    assert_eq!(decoded.to_vec::<u16>().unwrap(), image.to_vec::<u16>().unwrap());
}

#[test]
fn files() {
    let codec = codec();
    let image = random_image(9, 3, ColorSpace::Luma, BitType::F32, 11);

    let path = std::env::temp_dir().join(format!("zune-freeimage-{}.tif", std::process::id()));

    codec
        .encode_to_file(&image, &path, &EncoderOptions::default())
        .unwrap();
    let decoded = codec.decode_file(&path);
    std::fs::remove_file(&path).unwrap();

    let decoded = decoded.unwrap();
    assert_eq!(decoded.metadata().image_format(), Some(ImageFormat::TIFF));
    assert_eq!(
        decoded.pixel_data().as_bytes(),
        image.pixel_data().as_bytes()
    );
}
