/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Lookup tables between zune types and native identifiers
//!
//! - [`native_format`] / [`image_format`]: file formats
//! - [`native_target`]: the bitmap an image is stored in
//! - [`typed_format`]: the image a non standard bitmap is read into
//! - [`save_flags`]: the flag word handed to the native encoder
use zune_core::bit_depth::BitType;
use zune_core::colorspace::ColorSpace;
use zune_core::options::{EncoderOptions, ExrCompression, TiffCompression};
use zune_freeimage::{flags, FreeImageFormat, ImageType};

use crate::codecs::ImageFormat;
use crate::errors::ImageErrors;

/// Native file format of `format`, `None` if FreeImage has no plugin for it
pub const fn native_format(format: ImageFormat) -> Option<FreeImageFormat> {
    let fif = match format {
        ImageFormat::BMP => FreeImageFormat::BMP,
        ImageFormat::ICO => FreeImageFormat::ICO,
        ImageFormat::JPEG => FreeImageFormat::JPEG,
        ImageFormat::JNG => FreeImageFormat::JNG,
        ImageFormat::KOALA => FreeImageFormat::KOALA,
        ImageFormat::IFF => FreeImageFormat::LBM,
        ImageFormat::MNG => FreeImageFormat::MNG,
        ImageFormat::PBM => FreeImageFormat::PBM,
        ImageFormat::PBMRAW => FreeImageFormat::PBMRAW,
        ImageFormat::PCD => FreeImageFormat::PCD,
        ImageFormat::PCX => FreeImageFormat::PCX,
        ImageFormat::PGM => FreeImageFormat::PGM,
        ImageFormat::PGMRAW => FreeImageFormat::PGMRAW,
        ImageFormat::PNG => FreeImageFormat::PNG,
        ImageFormat::PPM => FreeImageFormat::PPM,
        ImageFormat::PPMRAW => FreeImageFormat::PPMRAW,
        ImageFormat::RAS => FreeImageFormat::RAS,
        ImageFormat::TARGA => FreeImageFormat::TARGA,
        ImageFormat::TIFF => FreeImageFormat::TIFF,
        ImageFormat::WBMP => FreeImageFormat::WBMP,
        ImageFormat::PSD => FreeImageFormat::PSD,
        ImageFormat::CUT => FreeImageFormat::CUT,
        ImageFormat::XBM => FreeImageFormat::XBM,
        ImageFormat::XPM => FreeImageFormat::XPM,
        ImageFormat::DDS => FreeImageFormat::DDS,
        ImageFormat::GIF => FreeImageFormat::GIF,
        ImageFormat::HDR => FreeImageFormat::HDR,
        ImageFormat::FAXG3 => FreeImageFormat::FAXG3,
        ImageFormat::SGI => FreeImageFormat::SGI,
        ImageFormat::EXR => FreeImageFormat::EXR,
        ImageFormat::J2K => FreeImageFormat::J2K,
        ImageFormat::JP2 => FreeImageFormat::JP2,
        ImageFormat::PFM => FreeImageFormat::PFM,
        ImageFormat::PICT => FreeImageFormat::PICT,
        ImageFormat::RAW => FreeImageFormat::RAW,
        ImageFormat::WEBP => FreeImageFormat::WEBP,
        ImageFormat::JXR => FreeImageFormat::JXR,
        ImageFormat::QOI | ImageFormat::Farbfeld | ImageFormat::JPEG_XL | ImageFormat::Unknown => {
            return None
        }
    };
    Some(fif)
}

/// Inverse of [`native_format`]
pub const fn image_format(fif: FreeImageFormat) -> Option<ImageFormat> {
    let format = match fif {
        FreeImageFormat::BMP => ImageFormat::BMP,
        FreeImageFormat::ICO => ImageFormat::ICO,
        FreeImageFormat::JPEG => ImageFormat::JPEG,
        FreeImageFormat::JNG => ImageFormat::JNG,
        FreeImageFormat::KOALA => ImageFormat::KOALA,
        FreeImageFormat::LBM => ImageFormat::IFF,
        FreeImageFormat::MNG => ImageFormat::MNG,
        FreeImageFormat::PBM => ImageFormat::PBM,
        FreeImageFormat::PBMRAW => ImageFormat::PBMRAW,
        FreeImageFormat::PCD => ImageFormat::PCD,
        FreeImageFormat::PCX => ImageFormat::PCX,
        FreeImageFormat::PGM => ImageFormat::PGM,
        FreeImageFormat::PGMRAW => ImageFormat::PGMRAW,
        FreeImageFormat::PNG => ImageFormat::PNG,
        FreeImageFormat::PPM => ImageFormat::PPM,
        FreeImageFormat::PPMRAW => ImageFormat::PPMRAW,
        FreeImageFormat::RAS => ImageFormat::RAS,
        FreeImageFormat::TARGA => ImageFormat::TARGA,
        FreeImageFormat::TIFF => ImageFormat::TIFF,
        FreeImageFormat::WBMP => ImageFormat::WBMP,
        FreeImageFormat::PSD => ImageFormat::PSD,
        FreeImageFormat::CUT => ImageFormat::CUT,
        FreeImageFormat::XBM => ImageFormat::XBM,
        FreeImageFormat::XPM => ImageFormat::XPM,
        FreeImageFormat::DDS => ImageFormat::DDS,
        FreeImageFormat::GIF => ImageFormat::GIF,
        FreeImageFormat::HDR => ImageFormat::HDR,
        FreeImageFormat::FAXG3 => ImageFormat::FAXG3,
        FreeImageFormat::SGI => ImageFormat::SGI,
        FreeImageFormat::EXR => ImageFormat::EXR,
        FreeImageFormat::J2K => ImageFormat::J2K,
        FreeImageFormat::JP2 => ImageFormat::JP2,
        FreeImageFormat::PFM => ImageFormat::PFM,
        FreeImageFormat::PICT => ImageFormat::PICT,
        FreeImageFormat::RAW => ImageFormat::RAW,
        FreeImageFormat::WEBP => ImageFormat::WEBP,
        FreeImageFormat::JXR => ImageFormat::JXR,
        FreeImageFormat::Unknown => return None
    };
    Some(format)
}

/// The native bitmap an image is stored in
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct NativeTarget {
    pub image_type: ImageType,
    /// Bits per pixel, all channels included
    pub bpp:        usize
}

const fn target(image_type: ImageType, bpp: usize) -> Option<NativeTarget> {
    Some(NativeTarget { image_type, bpp })
}

/// Bitmap that stores `colorspace` pixels of `depth` samples
///
/// `None` if no native bitmap type can hold them
pub const fn native_target(colorspace: ColorSpace, depth: BitType) -> Option<NativeTarget> {
    use ColorSpace::*;

    match (colorspace, depth) {
        (BW, BitType::U8) => target(ImageType::Bitmap, 1),
        (Luma, BitType::U8) => target(ImageType::Bitmap, 8),
        (RGB | BGR, BitType::U8) => target(ImageType::Bitmap, 24),
        (RGBA | RGBP | BGRA | BGRP, BitType::U8) => target(ImageType::Bitmap, 32),

        (Luma, BitType::U16) => target(ImageType::UInt16, 16),
        (Luma, BitType::I16) => target(ImageType::Int16, 16),
        (Luma, BitType::U32) => target(ImageType::UInt32, 32),
        (Luma, BitType::I32) => target(ImageType::Int32, 32),
        (Luma, BitType::F32) => target(ImageType::Float, 32),
        (Luma, BitType::F64) => target(ImageType::Double, 64),
        (RG, BitType::F64) => target(ImageType::Complex, 128),

        (RGB | BGR, BitType::U16) => target(ImageType::Rgb16, 48),
        (RGBA | RGBP | BGRA | BGRP, BitType::U16) => target(ImageType::Rgba16, 64),
        (RGB | BGR, BitType::F32) => target(ImageType::RgbF, 96),
        (RGBA | RGBP | BGRA | BGRP, BitType::F32) => target(ImageType::RgbaF, 128),
        _ => None
    }
}

/// Image format a bitmap of a non standard type is read into
///
/// [`ImageType::Bitmap`] depends on the bit depth and palette and
/// is not covered here
pub const fn typed_format(image_type: ImageType) -> Option<(ColorSpace, BitType)> {
    let format = match image_type {
        ImageType::UInt16 => (ColorSpace::Luma, BitType::U16),
        ImageType::Int16 => (ColorSpace::Luma, BitType::I16),
        ImageType::UInt32 => (ColorSpace::Luma, BitType::U32),
        ImageType::Int32 => (ColorSpace::Luma, BitType::I32),
        ImageType::Float => (ColorSpace::Luma, BitType::F32),
        ImageType::Double => (ColorSpace::Luma, BitType::F64),
        ImageType::Complex => (ColorSpace::RG, BitType::F64),
        ImageType::Rgb16 => (ColorSpace::RGB, BitType::U16),
        ImageType::Rgba16 => (ColorSpace::RGBA, BitType::U16),
        ImageType::RgbF => (ColorSpace::RGB, BitType::F32),
        ImageType::RgbaF => (ColorSpace::RGBA, BitType::F32),
        ImageType::Bitmap | ImageType::Unknown => return None
    };
    Some(format)
}

/// Flag word for saving an image with `depth` samples to `format`
///
/// Options that do not apply to `format` are ignored, a format without
/// applicable options gets its `*_DEFAULT` flag.
///
/// # Errors
/// If `format` has no native counterpart
pub fn save_flags(
    format: ImageFormat, options: &EncoderOptions, depth: BitType
) -> Result<i32, ImageErrors> {
    if native_format(format).is_none() {
        return Err(ImageErrors::UnsupportedFormat(format!(
            "FreeImage has no plugin for {format:?}"
        )));
    }
    let value = match format {
        ImageFormat::PNG => {
            let level = match options.png_get_compression_level() {
                Some(0) => flags::PNG_Z_NO_COMPRESSION,
                Some(level) => i32::from(level),
                None => flags::PNG_DEFAULT
            };
            if options.png_get_interlaced() {
                level | flags::PNG_INTERLACED
            } else {
                level
            }
        }
        ImageFormat::JPEG => {
            let quality = options
                .get_quality()
                .map_or(flags::JPEG_DEFAULT, i32::from);

            if options.jpeg_encode_progressive() {
                quality | flags::JPEG_PROGRESSIVE
            } else {
                quality
            }
        }
        ImageFormat::WEBP => {
            if options.webp_get_lossless() {
                flags::WEBP_LOSSLESS
            } else {
                options
                    .get_quality()
                    .map_or(flags::WEBP_DEFAULT, i32::from)
            }
        }
        ImageFormat::EXR => {
            let compression = match options.exr_get_compression() {
                Some(ExrCompression::None) => flags::EXR_NONE,
                Some(ExrCompression::Zip) => flags::EXR_ZIP,
                Some(ExrCompression::Piz) => flags::EXR_PIZ,
                Some(ExrCompression::Pxr24) => flags::EXR_PXR24,
                Some(ExrCompression::B44) => flags::EXR_B44,
                None => flags::EXR_DEFAULT
            };
            if depth == BitType::F32 {
                compression | flags::EXR_FLOAT
            } else {
                compression
            }
        }
        ImageFormat::TIFF => match options.tiff_get_compression() {
            Some(TiffCompression::None) => flags::TIFF_NONE,
            Some(TiffCompression::CcittFax3) => flags::TIFF_CCITTFAX3,
            Some(TiffCompression::CcittFax4) => flags::TIFF_CCITTFAX4,
            Some(TiffCompression::Lzw) => flags::TIFF_LZW,
            Some(TiffCompression::Jpeg) => flags::TIFF_JPEG,
            Some(TiffCompression::Deflate) => flags::TIFF_DEFLATE,
            Some(TiffCompression::PackBits) => flags::TIFF_PACKBITS,
            None => flags::TIFF_DEFAULT
        },
        ImageFormat::BMP if options.get_rle() => flags::BMP_SAVE_RLE,
        ImageFormat::TARGA if options.get_rle() => flags::TARGA_SAVE_RLE,
        _ => 0
    };
    Ok(value)
}
