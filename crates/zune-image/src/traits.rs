/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits implemented by image decoders and encoders
use zune_core::bit_depth::BitType;
use zune_core::colorspace::ColorSpace;
use zune_core::options::EncoderOptions;

use crate::codecs::ImageFormat;
use crate::errors::ImageErrors;
use crate::image::Image;
use crate::metadata::ImageMetadata;

/// Encapsulates an image decoder.
///
/// All supported image decoders must implement this class
pub trait DecoderTrait {
    /// Decode a buffer already in memory
    ///
    /// The buffer should be passed in the decoder's constructor
    fn decode(&mut self) -> Result<Image, ImageErrors>;

    /// Get width and height of the image
    ///
    /// # Returns
    /// - Some(width,height)
    /// - None -> If image hasn't been decoded and we can't extract
    ///  the width and height.
    fn dimensions(&self) -> Option<(usize, usize)>;

    /// Get the colorspace that the decoded pixels belong to
    ///
    /// [`ColorSpace::Unknown`] until the image is decoded
    fn out_colorspace(&self) -> ColorSpace;

    /// Get the name of the decoder
    fn name(&self) -> &'static str;

    /// Read image metadata without decoding the pixels
    fn read_headers(&mut self) -> Result<Option<ImageMetadata>, ImageErrors>;
}

/// Encapsulates an image encoder
pub trait EncoderTrait {
    /// Get the name of the encoder
    fn name(&self) -> &'static str;

    /// Encode an image to bytes
    ///
    /// The image is guaranteed to be in a colorspace and
    /// sample type the encoder supports
    fn encode_inner(&mut self, image: &Image) -> Result<Vec<u8>, ImageErrors>;

    /// Return all colorspaces supported by this encoder.
    fn supported_colorspaces(&self) -> &'static [ColorSpace];

    /// The format this encoder produces
    fn format(&self) -> ImageFormat;

    /// Return all sample types this encoder accepts
    fn supported_bit_types(&self) -> &'static [BitType];

    /// Set encoder options for this encoder
    fn set_options(&mut self, options: EncoderOptions);

    /// Encode an image
    ///
    /// Checks that the colorspace and sample type are supported
    /// before handing the image to [`encode_inner`](EncoderTrait::encode_inner)
    fn encode(&mut self, image: &Image) -> Result<Vec<u8>, ImageErrors> {
        let colorspace = image.colorspace();
        let depth = image.depth();

        if !self.supported_colorspaces().contains(&colorspace) {
            return Err(ImageErrors::UnsupportedFormat(format!(
                "Encoder {} does not support colorspace {colorspace:?}, supported colorspaces are {:?}",
                self.name(),
                self.supported_colorspaces()
            )));
        }
        if !self.supported_bit_types().contains(&depth) {
            return Err(ImageErrors::UnsupportedFormat(format!(
                "Encoder {} does not support {depth:?} samples, supported types are {:?}",
                self.name(),
                self.supported_bit_types()
            )));
        }
        self.encode_inner(image)
    }
}
