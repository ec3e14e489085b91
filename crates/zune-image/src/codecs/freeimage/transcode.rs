/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Moving pixels between images and native bitmaps
//!
//! An image row `y` is native scanline `height - 1 - y`, scanlines are
//! `pitch` bytes apart and only the first `width * bpp / 8` bytes of a
//! scanline hold pixels.
//!
//! Samples are copied byte for byte, the only changes are the channel
//! order within a pixel and the expansion of one bit and paletted bitmaps.
use zune_core::bit_depth::BitType;
use zune_core::colorspace::ColorSpace;
use zune_core::log::trace;
use zune_freeimage::{ImageType, NativeBitmap, NativeLibrary, RgbQuad};

use crate::codecs::freeimage::channel_order::channel_order;
use crate::codecs::freeimage::dispatch::{typed_format, NativeTarget};
use crate::errors::ImageErrors;
use crate::image::{Image, PixelData};

/// Palette entry 0 at least this bright means bit value 0 is white
const WHITE_THRESHOLD: u32 = 384;

/// Read a native bitmap into a new image
///
/// # Errors
/// - [`ImageErrors::UnsupportedFormat`] for bitmaps of unknown type
/// - [`ImageErrors::InvalidBitDepth`] for standard bitmaps that are not
///   1, 8, 24 or 32 bits per pixel
pub fn bitmap_to_image<B: NativeBitmap>(bitmap: &B) -> Result<Image, ImageErrors> {
    if bitmap.width() == 0 || bitmap.height() == 0 {
        return Err(ImageErrors::GenericStr("Bitmap has zero width or height"));
    }
    check_memory(bitmap)?;

    let image_type = bitmap.image_type();
    let bpp = bitmap.bpp();

    trace!(
        "Reading {:?} bitmap of {}x{}, {} bpp",
        image_type,
        bitmap.width(),
        bitmap.height(),
        bpp
    );

    match image_type {
        ImageType::Bitmap => match bpp {
            1 => read_monochrome(bitmap),
            8 if !is_gray_ramp(bitmap.palette()) => read_paletted(bitmap),
            8 => read_interleaved(bitmap, ColorSpace::Luma, BitType::U8),
            24 => read_interleaved(bitmap, ColorSpace::RGB, BitType::U8),
            32 => read_interleaved(bitmap, ColorSpace::RGBA, BitType::U8),
            _ => Err(ImageErrors::InvalidBitDepth(bpp as u32))
        },
        _ => {
            let (colorspace, depth) = typed_format(image_type).ok_or_else(|| {
                ImageErrors::UnsupportedFormat(format!(
                    "Cannot read native bitmaps of type {image_type:?}"
                ))
            })?;
            if bpp != colorspace.num_components() * depth.bits() {
                return Err(ImageErrors::InvalidBitDepth(bpp as u32));
            }
            read_interleaved(bitmap, colorspace, depth)
        }
    }
}

/// Allocate a bitmap for `target` and copy `image` into it
///
/// # Errors
/// - The image has no pixels
/// - The library refused the allocation, the error carries the
///   library's diagnostic if it reported one
pub fn image_to_bitmap<L: NativeLibrary>(
    library: &L, image: &Image, target: NativeTarget
) -> Result<L::Bitmap, ImageErrors> {
    let (width, height) = image.dimensions();

    if width == 0 || height == 0 {
        return Err(ImageErrors::GenericStr(
            "Cannot store an image with zero width or height"
        ));
    }
    trace!(
        "Storing {:?} {:?} image of {}x{} in a {:?} bitmap, {} bpp",
        image.colorspace(),
        image.depth(),
        width,
        height,
        target.image_type,
        target.bpp
    );

    library.clear_last_error();

    let mut bitmap = library
        .allocate(target.image_type, width, height, target.bpp)
        .ok_or_else(|| ImageErrors::CodecError(library.take_last_error()))?;

    write_bitmap(image, &mut bitmap)?;

    Ok(bitmap)
}

/// Copy `image` into an already allocated bitmap of the same dimensions
///
/// The image may have any layout, a one bit bitmap requires
/// a [`ColorSpace::BW`] image of `u8` samples.
pub fn write_bitmap<B: NativeBitmap>(image: &Image, bitmap: &mut B) -> Result<(), ImageErrors> {
    check_memory(bitmap)?;

    let (width, height) = image.dimensions();

    if (bitmap.width(), bitmap.height()) != (width, height) {
        return Err(ImageErrors::DimensionsMisMatch(
            width * height,
            bitmap.width() * bitmap.height()
        ));
    }
    let colorspace = image.colorspace();
    let depth = image.depth();

    if bitmap.bpp() == 1 {
        if (colorspace, depth) != (ColorSpace::BW, BitType::U8) {
            return Err(ImageErrors::unsupported_pixel_format(colorspace, depth));
        }
        return write_monochrome(image, bitmap);
    }

    let order = channel_order(colorspace)
        .ok_or_else(|| ImageErrors::unsupported_pixel_format(colorspace, depth))?
        .for_native(bitmap.image_type().stores_bgr());

    let size = depth.size_of();

    if bitmap.bpp() != order.len() * size * 8 {
        return Err(ImageErrors::UnsupportedFormat(format!(
            "{colorspace:?} pixels with {depth:?} samples do not fit a {} bpp bitmap",
            bitmap.bpp()
        )));
    }
    let pixel_bytes = order.len() * size;

    for y in 0..height {
        let src = image.row_bytes(y);
        let dst = bitmap.scanline_mut(height - 1 - y);

        if is_identity(order) {
            dst[..src.len()].copy_from_slice(src);
            continue;
        }
        for (src_px, dst_px) in src
            .chunks_exact(pixel_bytes)
            .zip(dst.chunks_exact_mut(pixel_bytes))
        {
            for (channel, &position) in order.iter().enumerate() {
                dst_px[position * size..(position + 1) * size]
                    .copy_from_slice(&src_px[channel * size..(channel + 1) * size]);
            }
        }
    }
    Ok(())
}

fn read_interleaved<B: NativeBitmap>(
    bitmap: &B, colorspace: ColorSpace, depth: BitType
) -> Result<Image, ImageErrors> {
    let (width, height) = (bitmap.width(), bitmap.height());

    let order = channel_order(colorspace)
        .ok_or_else(|| ImageErrors::unsupported_pixel_format(colorspace, depth))?
        .for_native(bitmap.image_type().stores_bgr());

    let size = depth.size_of();
    let pixel_bytes = order.len() * size;
    let row_bytes = width * pixel_bytes;

    let mut data = PixelData::zeroed(depth, width * height * order.len())
        .ok_or_else(|| ImageErrors::unsupported_pixel_format(colorspace, depth))?;

    let out = data.as_bytes_mut();

    for (y, out_row) in out.chunks_exact_mut(row_bytes).enumerate() {
        let line = bitmap.scanline(height - 1 - y);

        if is_identity(order) {
            out_row.copy_from_slice(&line[..row_bytes]);
            continue;
        }
        for (out_px, in_px) in out_row
            .chunks_exact_mut(pixel_bytes)
            .zip(line.chunks_exact(pixel_bytes))
        {
            for (channel, &position) in order.iter().enumerate() {
                out_px[channel * size..(channel + 1) * size]
                    .copy_from_slice(&in_px[position * size..(position + 1) * size]);
            }
        }
    }
    Image::new(data, width, height, colorspace)
}

/// One bit bitmaps become [`ColorSpace::BW`] images of 0 and 255
fn read_monochrome<B: NativeBitmap>(bitmap: &B) -> Result<Image, ImageErrors> {
    let (width, height) = (bitmap.width(), bitmap.height());

    let zero_is_white = bitmap
        .palette()
        .first()
        .map_or(false, |entry| entry.brightness() >= WHITE_THRESHOLD);

    let mut pixels = vec![0_u8; width * height];

    for (y, out_row) in pixels.chunks_exact_mut(width).enumerate() {
        let line = bitmap.scanline(height - 1 - y);

        for (x, out) in out_row.iter_mut().enumerate() {
            let bit = (line[x >> 3] >> (7 - (x & 7))) & 1;
            // white is whichever bit value the palette says is brighter
            *out = if (bit == 1) != zero_is_white { 255 } else { 0 };
        }
    }
    Image::new(PixelData::U8(pixels), width, height, ColorSpace::BW)
}

/// Expand an 8 bit bitmap with a color palette to RGB
fn read_paletted<B: NativeBitmap>(bitmap: &B) -> Result<Image, ImageErrors> {
    let (width, height) = (bitmap.width(), bitmap.height());
    let palette = bitmap.palette();

    let mut pixels = vec![0_u8; width * height * 3];

    for (y, out_row) in pixels.chunks_exact_mut(width * 3).enumerate() {
        let line = bitmap.scanline(height - 1 - y);

        for (out_px, index) in out_row.chunks_exact_mut(3).zip(line) {
            let entry = palette
                .get(usize::from(*index))
                .copied()
                .unwrap_or(RgbQuad::BLACK);

            out_px.copy_from_slice(&[entry.red, entry.green, entry.blue]);
        }
    }
    Image::new(PixelData::U8(pixels), width, height, ColorSpace::RGB)
}

fn write_monochrome<B: NativeBitmap>(image: &Image, bitmap: &mut B) -> Result<(), ImageErrors> {
    let (width, height) = image.dimensions();

    match bitmap.palette_mut() {
        [black, white, ..] => {
            *black = RgbQuad::BLACK;
            *white = RgbQuad::WHITE;
        }
        _ => {
            return Err(ImageErrors::CodecError(Some(
                "One bit bitmap has no two entry palette".to_string()
            )))
        }
    }

    for y in 0..height {
        let src = image.row_bytes(y);
        let line = bitmap.scanline_mut(height - 1 - y);

        line.fill(0);

        for (x, value) in src.iter().enumerate().take(width) {
            if value & 0x80 != 0 {
                line[x >> 3] |= 0x80 >> (x & 7);
            }
        }
    }
    Ok(())
}

/// Whether an 8 bit palette maps every index to the gray level of the same value
fn is_gray_ramp(palette: &[RgbQuad]) -> bool {
    palette.iter().enumerate().all(|(index, entry)| {
        let level = index as u32;
        [entry.red, entry.green, entry.blue]
            .iter()
            .all(|c| u32::from(*c) == level)
    })
}

fn is_identity(order: &[usize]) -> bool {
    order.iter().enumerate().all(|(channel, &position)| channel == position)
}

/// Make sure scanline access stays inside the bitmap memory
fn check_memory<B: NativeBitmap>(bitmap: &B) -> Result<(), ImageErrors> {
    let line_bytes = bitmap
        .width()
        .checked_mul(bitmap.bpp())
        .map(|bits| (bits + 7) / 8);
    let total = bitmap.pitch().checked_mul(bitmap.height());

    match (line_bytes, total) {
        (Some(line_bytes), Some(total))
            if line_bytes <= bitmap.pitch() && total <= bitmap.bits().len() =>
        {
            Ok(())
        }
        _ => Err(ImageErrors::CodecError(Some(format!(
            "Bitmap memory of {} bytes cannot hold {} scanlines of pitch {}",
            bitmap.bits().len(),
            bitmap.height(),
            bitmap.pitch()
        ))))
    }
}
