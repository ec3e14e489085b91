/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::{Rng, WyRand};
use zune_core::bit_depth::BitType;
use zune_core::colorspace::ColorSpace;
use zune_image::image::{Image, PixelData};

/// An image filled with noise, so that no transcoding
/// path gets an easy ride from repeated values
pub fn noise_image(width: usize, height: usize, colorspace: ColorSpace, depth: BitType) -> Image {
    let len = width * height * colorspace.num_components();
    let mut data = PixelData::zeroed(depth, len).unwrap();

    WyRand::new_seed(0x2023).fill(data.as_bytes_mut());

    Image::new(data, width, height, colorspace).unwrap()
}
