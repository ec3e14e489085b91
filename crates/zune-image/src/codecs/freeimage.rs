/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Loading and saving images through the FreeImage library
//!
//! [`FreeImageCodec`] wraps anything implementing [`NativeLibrary`], with the
//! `system` feature enabled [`FreeImageCodec::system`] uses the linked library.
//!
//! Every decode and encode acquires exactly one native bitmap, the bitmap
//! is released when the call returns, whether it succeeded or not.
//!
//! # Example
//! Moving an image into a native bitmap and back
//! ```
//! use zune_core::colorspace::ColorSpace;
//! use zune_freeimage::{Dib, ImageType};
//! use zune_image::codecs::freeimage::{bitmap_to_image, write_bitmap};
//! use zune_image::image::Image;
//!
//! let image = Image::from_u8(&[10, 20, 30, 40, 50, 60], 1, 2, ColorSpace::RGB).unwrap();
//! let mut bitmap = Dib::allocate(ImageType::Bitmap, 1, 2, 24).unwrap();
//!
//! write_bitmap(&image, &mut bitmap).unwrap();
//!
//! let back = bitmap_to_image(&bitmap).unwrap();
//! assert_eq!(back.to_vec::<u8>().unwrap(), vec![10, 20, 30, 40, 50, 60]);
//! ```
use std::path::Path;

use zune_core::bit_depth::{BitType, ALL_BIT_TYPES};
use zune_core::colorspace::{ColorSpace, ALL_COLORSPACES};
use zune_core::log::{trace, warn};
use zune_core::options::{DecoderOptions, EncoderOptions};
#[cfg(feature = "system")]
use zune_freeimage::FreeImage;
use zune_freeimage::{FreeImageFormat, ImageType, NativeBitmap, NativeLibrary};

pub use crate::codecs::freeimage::dispatch::{
    image_format, native_format, native_target, save_flags, typed_format, NativeTarget
};
pub use crate::codecs::freeimage::transcode::{bitmap_to_image, image_to_bitmap, write_bitmap};
use crate::codecs::ImageFormat;
use crate::errors::ImageErrors;
use crate::image::Image;
use crate::metadata::ImageMetadata;
use crate::traits::{DecoderTrait, EncoderTrait};

pub mod channel_order;
pub mod dispatch;
pub mod transcode;

/// A codec that decodes and encodes through a native FreeImage library
pub struct FreeImageCodec<L: NativeLibrary> {
    library: L,
    options: DecoderOptions
}

#[cfg(feature = "system")]
impl FreeImageCodec<FreeImage> {
    /// A codec using the system FreeImage library
    pub fn system() -> FreeImageCodec<FreeImage> {
        FreeImageCodec::new(FreeImage::new())
    }
}

impl<L: NativeLibrary> FreeImageCodec<L> {
    /// Create a codec with default decoder options
    pub fn new(library: L) -> FreeImageCodec<L> {
        FreeImageCodec::new_with_options(library, DecoderOptions::default())
    }

    /// Create a codec whose decodes respect `options`
    pub fn new_with_options(library: L, options: DecoderOptions) -> FreeImageCodec<L> {
        FreeImageCodec { library, options }
    }

    pub const fn library(&self) -> &L {
        &self.library
    }

    pub const fn options(&self) -> &DecoderOptions {
        &self.options
    }

    /// Human readable codec name
    pub const fn name(&self) -> &'static str {
        "FreeImage"
    }

    /// Version of the native library
    pub fn version(&self) -> String {
        self.library.version()
    }

    /// Whether images of `format` can be decoded
    pub fn can_decode(&self, format: ImageFormat) -> bool {
        native_format(format).map_or(false, |fif| self.library.supports_reading(fif))
    }

    /// Whether images can be encoded to `format`
    pub fn can_encode(&self, format: ImageFormat) -> bool {
        native_format(format).map_or(false, |fif| self.library.supports_writing(fif))
    }

    /// Guess the format of an encoded image
    pub fn identify(&self, data: &[u8]) -> Option<ImageFormat> {
        image_format(self.library.identify(data))
    }

    /// Decode an image, guessing its format from its content
    ///
    /// # Errors
    /// - [`ImageErrors::UnsupportedFormat`] if the format cannot be identified or read
    /// - [`ImageErrors::CodecError`] if the native decoder failed
    pub fn decode(&self, data: &[u8]) -> Result<Image, ImageErrors> {
        let format = self.identify(data).ok_or_else(|| {
            ImageErrors::UnsupportedFormat("Could not identify the image format".to_string())
        })?;
        self.decode_as(data, format)
    }

    /// Decode an image of a known format
    pub fn decode_as(&self, data: &[u8], format: ImageFormat) -> Result<Image, ImageErrors> {
        let fif = self.reader_for(format)?;

        trace!("Decoding {} bytes as {:?}", data.len(), format);

        self.library.clear_last_error();

        let bitmap = self
            .library
            .load_from_memory(fif, data, self.options.get_load_flags())
            .ok_or_else(|| ImageErrors::CodecError(self.library.take_last_error()))?;

        let mut image = self.decode_bitmap(&bitmap)?;
        image.metadata_mut().set_image_format(format);

        Ok(image)
    }

    /// Read a file and decode it
    pub fn decode_file<P: AsRef<Path>>(&self, path: P) -> Result<Image, ImageErrors> {
        let data = std::fs::read(path)?;
        self.decode(&data)
    }

    /// Copy an already loaded native bitmap into a new image
    ///
    /// # Errors
    /// Besides the transcoding errors, if the bitmap is larger
    /// than the decoder options allow
    pub fn decode_bitmap<B: NativeBitmap>(&self, bitmap: &B) -> Result<Image, ImageErrors> {
        if bitmap.width() > self.options.get_max_width() {
            return Err(ImageErrors::ImageTooLarge(
                "width",
                self.options.get_max_width(),
                bitmap.width()
            ));
        }
        if bitmap.height() > self.options.get_max_height() {
            return Err(ImageErrors::ImageTooLarge(
                "height",
                self.options.get_max_height(),
                bitmap.height()
            ));
        }
        bitmap_to_image(bitmap)
    }

    /// Image information without decoding pixels, not provided by FreeImage
    pub fn read_headers(&self, _data: &[u8]) -> Result<ImageMetadata, ImageErrors> {
        Err(ImageErrors::NotImplemented("read_headers"))
    }

    /// Encode an image to `format`
    ///
    /// The alpha channel is dropped for formats that cannot store it,
    /// strided views are copied to a dense image first.
    ///
    /// # Errors
    /// - [`ImageErrors::UnsupportedFormat`] if the format has no native writer or the
    ///   writer cannot store the image's pixel format, nothing is allocated in this case
    /// - [`ImageErrors::CodecError`] if allocating or encoding failed
    pub fn encode(
        &self, image: &Image, format: ImageFormat, options: &EncoderOptions
    ) -> Result<Vec<u8>, ImageErrors> {
        let fif = self.writer_for(format)?;
        let flags = save_flags(format, options, image.depth())?;
        let bitmap = self.encode_bitmap(image, format)?;

        trace!("Saving as {:?} with flags {:#x}", format, flags);

        self.library.clear_last_error();

        self.library
            .save_to_memory(fif, &bitmap, flags)
            .ok_or_else(|| ImageErrors::CodecError(self.library.take_last_error()))
    }

    /// Encode an image and write it to `path`, the format is
    /// guessed from the file extension
    pub fn encode_to_file<P: AsRef<Path>>(
        &self, image: &Image, path: P, options: &EncoderOptions
    ) -> Result<(), ImageErrors> {
        let path = path.as_ref();
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(ImageFormat::from_extension)
            .ok_or_else(|| {
                ImageErrors::UnsupportedFormat(format!(
                    "Cannot determine image format of {}",
                    path.display()
                ))
            })?;

        let bytes = self.encode(image, format, options)?;
        std::fs::write(path, bytes)?;

        Ok(())
    }

    /// Store an image in a new native bitmap the way [`encode`](Self::encode)
    /// would before handing it to the native encoder for `format`
    pub fn encode_bitmap(&self, image: &Image, format: ImageFormat) -> Result<L::Bitmap, ImageErrors> {
        let fif = self.writer_for(format)?;

        let depth = image.depth();
        let mut colorspace = image.colorspace();

        let drop_alpha = colorspace.has_alpha() && !format.supports_alpha();

        if drop_alpha {
            colorspace = colorspace.without_alpha();
        }
        let target = native_target(colorspace, depth)
            .ok_or_else(|| ImageErrors::unsupported_pixel_format(colorspace, depth))?;

        self.check_export(fif, target)?;

        let source = if drop_alpha {
            warn!("{:?} cannot store alpha, dropping the alpha channel", format);
            image.to_dense_without_alpha()
        } else {
            image.to_dense()
        };
        image_to_bitmap(&self.library, &source, target)
    }

    /// A decoder for `data` usable through [`DecoderTrait`]
    pub fn decoder<'a>(&'a self, data: &'a [u8]) -> FreeImageDecoder<'a, L> {
        FreeImageDecoder {
            codec: self,
            data,
            dimensions: None,
            colorspace: ColorSpace::Unknown
        }
    }

    /// An encoder for `format` usable through [`EncoderTrait`]
    pub fn encoder(&self, format: ImageFormat) -> FreeImageEncoder<'_, L> {
        FreeImageEncoder {
            codec: self,
            format,
            options: EncoderOptions::default()
        }
    }

    fn reader_for(&self, format: ImageFormat) -> Result<FreeImageFormat, ImageErrors> {
        match native_format(format) {
            Some(fif) if self.library.supports_reading(fif) => Ok(fif),
            _ => Err(ImageErrors::UnsupportedFormat(format!(
                "FreeImage cannot read {format:?}"
            )))
        }
    }

    fn writer_for(&self, format: ImageFormat) -> Result<FreeImageFormat, ImageErrors> {
        match native_format(format) {
            Some(fif) if self.library.supports_writing(fif) => Ok(fif),
            _ => Err(ImageErrors::UnsupportedFormat(format!(
                "FreeImage cannot write {format:?}"
            )))
        }
    }

    fn check_export(&self, fif: FreeImageFormat, target: NativeTarget) -> Result<(), ImageErrors> {
        let supported = if target.image_type == ImageType::Bitmap {
            self.library.supports_export_type(fif, ImageType::Bitmap)
                && self.library.supports_export_bpp(fif, target.bpp)
        } else {
            self.library.supports_export_type(fif, target.image_type)
        };

        if supported {
            Ok(())
        } else {
            Err(ImageErrors::UnsupportedFormat(format!(
                "{fif:?} cannot store {:?} bitmaps of {} bpp",
                target.image_type, target.bpp
            )))
        }
    }
}

/// Decoder side of [`FreeImageCodec`]
pub struct FreeImageDecoder<'a, L: NativeLibrary> {
    codec:      &'a FreeImageCodec<L>,
    data:       &'a [u8],
    dimensions: Option<(usize, usize)>,
    colorspace: ColorSpace
}

impl<'a, L: NativeLibrary> DecoderTrait for FreeImageDecoder<'a, L> {
    fn decode(&mut self) -> Result<Image, ImageErrors> {
        let image = self.codec.decode(self.data)?;

        self.dimensions = Some(image.dimensions());
        self.colorspace = image.colorspace();

        Ok(image)
    }

    fn dimensions(&self) -> Option<(usize, usize)> {
        self.dimensions
    }

    fn out_colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    fn name(&self) -> &'static str {
        "FreeImage Decoder"
    }

    fn read_headers(&mut self) -> Result<Option<ImageMetadata>, ImageErrors> {
        self.codec.read_headers(self.data).map(Some)
    }
}

/// Encoder side of [`FreeImageCodec`]
pub struct FreeImageEncoder<'a, L: NativeLibrary> {
    codec:   &'a FreeImageCodec<L>,
    format:  ImageFormat,
    options: EncoderOptions
}

impl<'a, L: NativeLibrary> EncoderTrait for FreeImageEncoder<'a, L> {
    fn name(&self) -> &'static str {
        "FreeImage Encoder"
    }

    fn encode_inner(&mut self, image: &Image) -> Result<Vec<u8>, ImageErrors> {
        self.codec.encode(image, self.format, &self.options)
    }

    fn supported_colorspaces(&self) -> &'static [ColorSpace] {
        &ALL_COLORSPACES
    }

    fn format(&self) -> ImageFormat {
        self.format
    }

    fn supported_bit_types(&self) -> &'static [BitType] {
        &ALL_BIT_TYPES
    }

    fn set_options(&mut self, options: EncoderOptions) {
        self.options = options;
    }
}
