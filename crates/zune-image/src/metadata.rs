/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image metadata
//!
//! This module provides the ability to describe an image without
//! touching its pixels

use zune_core::bit_depth::BitType;
use zune_core::colorspace::ColorSpace;

use crate::codecs::ImageFormat;

/// Contains information about whether the image
/// is pre multiplied with it's alpha
/// or it's not
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AlphaState {
    PreMultiplied,
    NonPreMultiplied
}

/// Image metadata
///
/// Each image carries this information, the FreeImage
/// decoder fills it from the native bitmap it read
#[derive(Clone, Debug, PartialEq)]
pub struct ImageMetadata {
    // REMEMBER: If you add a field here add it's serialization
    // to serde.rs
    pub(crate) width:      usize,
    pub(crate) height:     usize,
    pub(crate) colorspace: ColorSpace,
    pub(crate) depth:      BitType,
    pub(crate) format:     Option<ImageFormat>,
    pub(crate) alpha:      AlphaState
}

impl Default for ImageMetadata {
    fn default() -> Self {
        ImageMetadata {
            width:      0,
            height:     0,
            colorspace: ColorSpace::Unknown,
            depth:      BitType::U8,
            format:     None,
            alpha:      AlphaState::NonPreMultiplied
        }
    }
}

impl ImageMetadata {
    pub(crate) fn new(width: usize, height: usize, colorspace: ColorSpace, depth: BitType) -> Self {
        let alpha = if colorspace.is_premultiplied() {
            AlphaState::PreMultiplied
        } else {
            AlphaState::NonPreMultiplied
        };
        ImageMetadata {
            width,
            height,
            colorspace,
            depth,
            format: None,
            alpha
        }
    }
    /// Get image dimensions as a tuple of width and height
    ///  
    /// # Example
    ///
    /// ```rust
    ///use zune_image::metadata::ImageMetadata;
    /// let meta = ImageMetadata::default();
    /// // default dimensions are usually zero
    /// assert_eq!(meta.dimensions(),(0,0));
    /// ```
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    /// Get an image's colorspace
    ///
    /// The default colorspace is usually [`ColorSpace::Unknown`]
    /// which represents an uninitialized image
    pub const fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }
    /// Get the type of a single sample
    pub const fn depth(&self) -> BitType {
        self.depth
    }

    /// Get the format the image was decoded from
    ///
    /// May be None if the image was not created by a decoder
    pub const fn image_format(&self) -> Option<ImageFormat> {
        self.format
    }

    pub(crate) fn set_image_format(&mut self, format: ImageFormat) {
        self.format = Some(format);
    }

    pub const fn alpha(&self) -> AlphaState {
        self.alpha
    }
    pub fn is_premultiplied_alpha(&self) -> bool {
        self.alpha.eq(&AlphaState::PreMultiplied)
    }
}
