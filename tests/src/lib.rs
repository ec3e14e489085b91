/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use nanorand::{Rng, WyRand};
use serde::Deserialize;
use zune_core::bit_depth::BitType;
use zune_core::colorspace::ColorSpace;
use zune_image::image::{Image, PixelData};

pub use crate::library::{RawBitmap, RawHeader, RawLibrary};

mod codec;
mod errors;
mod library;

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonColorspace {
    Luma,
    BW,
    RG,
    RGB,
    RGBA,
    RGBP,
    BGR,
    BGRA,
    BGRP
}

impl JsonColorspace {
    pub fn to_colorspace(self) -> ColorSpace {
        match self {
            Self::Luma => ColorSpace::Luma,
            Self::BW => ColorSpace::BW,
            Self::RG => ColorSpace::RG,
            Self::RGB => ColorSpace::RGB,
            Self::RGBA => ColorSpace::RGBA,
            Self::RGBP => ColorSpace::RGBP,
            Self::BGR => ColorSpace::BGR,
            Self::BGRA => ColorSpace::BGRA,
            Self::BGRP => ColorSpace::BGRP
        }
    }
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonBitType {
    U8,
    I16,
    U16,
    I32,
    U32,
    F32,
    F64
}

impl JsonBitType {
    pub fn to_bit_type(self) -> BitType {
        match self {
            Self::U8 => BitType::U8,
            Self::I16 => BitType::I16,
            Self::U16 => BitType::U16,
            Self::I32 => BitType::I32,
            Self::U32 => BitType::U32,
            Self::F32 => BitType::F32,
            Self::F64 => BitType::F64
        }
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub colorspace: JsonColorspace,
    pub depth:      JsonBitType,
    pub extension:  String,
    pub width:      usize,
    pub height:     usize,
    pub comment:    Option<String>
}

/// An image of random samples, one bit images only hold 0 and 255
pub fn random_image(
    width: usize, height: usize, colorspace: ColorSpace, depth: BitType, seed: u64
) -> Image {
    let len = width * height * colorspace.num_components();
    let mut data = PixelData::zeroed(depth, len).unwrap();
    let mut rand = WyRand::new_seed(seed);

    rand.fill(data.as_bytes_mut());

    if colorspace == ColorSpace::BW {
        if let PixelData::U8(pixels) = &mut data {
            pixels.iter_mut().for_each(|x| *x = if *x & 1 == 1 { 255 } else { 0 });
        }
    }
    Image::new(data, width, height, colorspace).unwrap()
}

/// Colorspace and dense bytes an image reads back as after a save,
/// decoded images are always red first and never premultiplied
pub fn canonical(image: &Image) -> (ColorSpace, Vec<u8>) {
    let colorspace = match image.colorspace() {
        ColorSpace::BGR => ColorSpace::RGB,
        ColorSpace::RGBP | ColorSpace::BGRA | ColorSpace::BGRP => ColorSpace::RGBA,
        other => other
    };
    let dense = image.to_dense();
    let mut bytes = dense.pixel_data().as_bytes().to_vec();

    if image.colorspace().is_bgr() {
        let size = image.depth().size_of();
        let pixel = image.colorspace().num_components() * size;

        for px in bytes.chunks_exact_mut(pixel) {
            for i in 0..size {
                px.swap(i, 2 * size + i);
            }
        }
    }
    (colorspace, bytes)
}
