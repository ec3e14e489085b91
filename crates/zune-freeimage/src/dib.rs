/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A device independent bitmap allocated on the rust heap
//!
//! [`Dib`] has the exact memory layout of a natively allocated bitmap,
//! which makes it usable wherever a [`NativeBitmap`] is expected without
//! the native library being present.

use crate::library::NativeBitmap;
use crate::types::{ImageType, RgbQuad};

/// Bytes between two scanlines of a bitmap
///
/// Scanlines are padded to a multiple of 4 bytes.
///
/// Returns `None` on overflow
pub fn compute_pitch(width: usize, bpp: usize) -> Option<usize> {
    let bits = width.checked_mul(bpp)?.checked_add(31)?;
    Some((bits / 32) * 4)
}

/// Whether an image type can be allocated with `bpp` bits per pixel
pub fn is_valid_bpp(image_type: ImageType, bpp: usize) -> bool {
    match image_type {
        ImageType::Bitmap => matches!(bpp, 1 | 4 | 8 | 16 | 24 | 32),
        ImageType::Unknown => false,
        _ => image_type.fixed_bpp() == Some(bpp as u32)
    }
}

/// Palette a freshly allocated bitmap gets, a linear
/// grayscale ramp for depths up to 8 bits and nothing otherwise
pub fn default_palette(image_type: ImageType, bpp: usize) -> Vec<RgbQuad> {
    if image_type != ImageType::Bitmap || bpp > 8 {
        return Vec::new();
    }
    let colors = 1_usize << bpp;
    (0..colors)
        .map(|index| RgbQuad::gray(((index * 255) / (colors - 1)) as u8))
        .collect()
}

/// An owned bitmap, see module docs
#[derive(Clone, Debug, PartialEq)]
pub struct Dib {
    image_type: ImageType,
    width:      usize,
    height:     usize,
    bpp:        usize,
    pitch:      usize,
    bits:       Vec<u8>,
    palette:    Vec<RgbQuad>
}

impl Dib {
    /// Allocate a zeroed bitmap
    ///
    /// Returns `None` for zero dimensions, an unsupported bits per
    /// pixel value or a size that overflows
    pub fn allocate(image_type: ImageType, width: usize, height: usize, bpp: usize) -> Option<Dib> {
        if width == 0 || height == 0 || !is_valid_bpp(image_type, bpp) {
            return None;
        }
        let pitch = compute_pitch(width, bpp)?;
        let size = pitch.checked_mul(height)?;

        Some(Dib {
            image_type,
            width,
            height,
            bpp,
            pitch,
            bits: vec![0; size],
            palette: default_palette(image_type, bpp)
        })
    }

    /// Build a bitmap from raw scanline memory
    ///
    /// `bits` must hold exactly `pitch * height` bytes laid out bottom-up,
    /// `palette` must have `2^bpp` entries for paletted depths and be empty otherwise.
    pub fn from_parts(
        image_type: ImageType, width: usize, height: usize, bpp: usize, bits: Vec<u8>,
        palette: Vec<RgbQuad>
    ) -> Option<Dib> {
        let mut dib = Dib::allocate(image_type, width, height, bpp)?;

        if bits.len() != dib.bits.len() || palette.len() != dib.palette.len() {
            return None;
        }
        dib.bits = bits;
        dib.palette = palette;

        Some(dib)
    }

    /// Consume the bitmap returning its scanline memory and palette
    pub fn into_parts(self) -> (Vec<u8>, Vec<RgbQuad>) {
        (self.bits, self.palette)
    }
}

impl NativeBitmap for Dib {
    fn image_type(&self) -> ImageType {
        self.image_type
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn bpp(&self) -> usize {
        self.bpp
    }

    fn pitch(&self) -> usize {
        self.pitch
    }

    fn bits(&self) -> &[u8] {
        &self.bits
    }

    fn bits_mut(&mut self) -> &mut [u8] {
        &mut self.bits
    }

    fn palette(&self) -> &[RgbQuad] {
        &self.palette
    }

    fn palette_mut(&mut self) -> &mut [RgbQuad] {
        &mut self.palette
    }
}
