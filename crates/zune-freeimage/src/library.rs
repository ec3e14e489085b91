/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The surface of the native library the image adapter relies on
//!
//! Everything the adapter needs from the library goes through the two traits here,
//! [`NativeLibrary`] for loading, saving and allocating bitmaps and [`NativeBitmap`]
//! for reading and writing the pixel memory of one bitmap.
//!
//! A bitmap handle is released when it is dropped, so a handle acquired
//! in a function is released on every exit path, including early returns
//! through `?`.

use crate::types::{FreeImageFormat, ImageType, RgbQuad};

/// A bitmap owned by the native library
///
/// # Memory layout
/// - Scanlines are stored bottom-up, the first scanline in memory is the
///   last row of the image.
/// - Consecutive scanlines are [`pitch`](NativeBitmap::pitch) bytes apart, the pitch
///   may be larger than the bytes a row of pixels needs.
/// - Color pixels of [`ImageType::Bitmap`] are stored blue first, see
///   [`ImageType::stores_bgr`].
/// - One bit images pack 8 pixels per byte, most significant bit first and
///   carry a two entry palette.
pub trait NativeBitmap {
    /// Data type of the samples
    fn image_type(&self) -> ImageType;

    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Bits per pixel, all channels included
    fn bpp(&self) -> usize;

    /// Distance in bytes between two consecutive scanlines
    fn pitch(&self) -> usize;

    /// Pixel memory, `pitch * height` bytes, last image row first
    fn bits(&self) -> &[u8];

    fn bits_mut(&mut self) -> &mut [u8];

    /// Palette entries, empty for bitmaps without a palette
    fn palette(&self) -> &[RgbQuad];

    fn palette_mut(&mut self) -> &mut [RgbQuad];

    /// Bytes of a single stored scanline, padding included
    ///
    /// Scanline `0` is the bottom row of the image.
    ///
    /// # Panics
    /// If `line` is not less than the bitmap height
    fn scanline(&self, line: usize) -> &[u8] {
        let pitch = self.pitch();
        &self.bits()[line * pitch..(line + 1) * pitch]
    }

    /// Mutable bytes of a single stored scanline, see [`scanline`](NativeBitmap::scanline)
    fn scanline_mut(&mut self, line: usize) -> &mut [u8] {
        let pitch = self.pitch();
        &mut self.bits_mut()[line * pitch..(line + 1) * pitch]
    }
}

/// A loaded native image library
///
/// Calls are synchronous, the only state shared between calls is the
/// library's last error message, see [`take_last_error`](NativeLibrary::take_last_error).
pub trait NativeLibrary {
    /// Bitmap handle type, released on drop
    type Bitmap: NativeBitmap;

    /// Human readable library version
    fn version(&self) -> String;

    /// Allocate a zero filled bitmap
    ///
    /// Returns `None` if the library refused the allocation, e.g for
    /// a bits per pixel value the image type does not support.
    fn allocate(
        &self, image_type: ImageType, width: usize, height: usize, bpp: usize
    ) -> Option<Self::Bitmap>;

    /// Decode an encoded image held in memory
    fn load_from_memory(
        &self, format: FreeImageFormat, data: &[u8], flags: i32
    ) -> Option<Self::Bitmap>;

    /// Encode a bitmap, returning the encoded bytes
    fn save_to_memory(
        &self, format: FreeImageFormat, bitmap: &Self::Bitmap, flags: i32
    ) -> Option<Vec<u8>>;

    /// Guess the format of an encoded image from its leading bytes
    fn identify(&self, data: &[u8]) -> FreeImageFormat;

    fn supports_reading(&self, format: FreeImageFormat) -> bool;

    fn supports_writing(&self, format: FreeImageFormat) -> bool;

    /// Whether the format can store bitmaps of `image_type`
    fn supports_export_type(&self, format: FreeImageFormat, image_type: ImageType) -> bool;

    /// Whether the format can store standard bitmaps with `bpp` bits per pixel
    fn supports_export_bpp(&self, format: FreeImageFormat, bpp: usize) -> bool;

    /// Read and clear the last diagnostic the library reported
    ///
    /// The slot is process wide and not tied to a call, it is only meaningful
    /// when read right after a call on the same thread failed. Concurrent
    /// failing calls on other threads can overwrite it.
    fn take_last_error(&self) -> Option<String>;

    /// Drop whatever diagnostic is left in the slot
    ///
    /// Successful calls may leave warnings behind, callers clear the slot
    /// before a call whose failure they want to report.
    fn clear_last_error(&self) {
        let _ = self.take_last_error();
    }
}
