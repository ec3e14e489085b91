/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Load/save flag words understood by the native plugins
//!
//! Values are those of `FreeImage.h`, a plugin ignores bits it does not know.
#![allow(missing_docs)]

pub const BMP_DEFAULT: i32 = 0;
pub const BMP_SAVE_RLE: i32 = 1;

pub const EXR_DEFAULT: i32 = 0;
/// Save data as float instead of half float
pub const EXR_FLOAT: i32 = 0x0001;
pub const EXR_NONE: i32 = 0x0002;
pub const EXR_ZIP: i32 = 0x0004;
pub const EXR_PIZ: i32 = 0x0008;
pub const EXR_PXR24: i32 = 0x0010;
pub const EXR_B44: i32 = 0x0020;
pub const EXR_LC: i32 = 0x0040;

/// Quality 75, the plugin also accepts a plain `1..=100` value
pub const JPEG_DEFAULT: i32 = 0;
pub const JPEG_QUALITYSUPERB: i32 = 0x80;
pub const JPEG_QUALITYGOOD: i32 = 0x0100;
pub const JPEG_QUALITYNORMAL: i32 = 0x0200;
pub const JPEG_QUALITYAVERAGE: i32 = 0x0400;
pub const JPEG_QUALITYBAD: i32 = 0x0800;
pub const JPEG_PROGRESSIVE: i32 = 0x2000;

/// zlib level 6
pub const PNG_DEFAULT: i32 = 0;
pub const PNG_Z_BEST_SPEED: i32 = 0x0001;
pub const PNG_Z_DEFAULT_COMPRESSION: i32 = 0x0006;
pub const PNG_Z_BEST_COMPRESSION: i32 = 0x0009;
pub const PNG_Z_NO_COMPRESSION: i32 = 0x0100;
pub const PNG_INTERLACED: i32 = 0x0200;

pub const TARGA_DEFAULT: i32 = 0;
pub const TARGA_SAVE_RLE: i32 = 2;

pub const TIFF_DEFAULT: i32 = 0;
pub const TIFF_PACKBITS: i32 = 0x0100;
pub const TIFF_DEFLATE: i32 = 0x0200;
pub const TIFF_ADOBE_DEFLATE: i32 = 0x0400;
pub const TIFF_NONE: i32 = 0x0800;
pub const TIFF_CCITTFAX3: i32 = 0x1000;
pub const TIFF_CCITTFAX4: i32 = 0x2000;
pub const TIFF_LZW: i32 = 0x4000;
pub const TIFF_JPEG: i32 = 0x8000;

/// Lossy, quality 75
pub const WEBP_DEFAULT: i32 = 0;
pub const WEBP_LOSSLESS: i32 = 0x100;
