/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image loading and saving
use std::fmt::{Debug, Display, Formatter};

use zune_core::bit_depth::BitType;
use zune_core::colorspace::ColorSpace;

/// All possible image errors that can occur.
///
/// This is the grandfather of image errors and contains
/// all container, transcoding and native codec errors
pub enum ImageErrors {
    /// A pixel format or file format has no native mapping
    UnsupportedFormat(String),
    /// A native bitmap has a bits per pixel value that cannot be read
    InvalidBitDepth(u32),
    /// The native library failed to load, save or allocate,
    /// carries the library's diagnostic if it reported one
    CodecError(Option<String>),
    /// The operation is not provided by this codec
    NotImplemented(&'static str),
    /// Pixel storage length does not match the image description,
    /// expected, found
    DimensionsMisMatch(usize, usize),
    /// Image dimensions exceed the configured limits,
    /// dimension name, limit, found
    ImageTooLarge(&'static str, usize, usize),
    /// Sample accessor called with a type different from the stored one
    WrongBitType(BitType, BitType),
    UnsupportedColorspace(ColorSpace, &'static str),
    IoError(std::io::Error),
    GenericString(String),
    GenericStr(&'static str)
}

impl ImageErrors {
    pub(crate) fn unsupported_pixel_format(colorspace: ColorSpace, depth: BitType) -> ImageErrors {
        ImageErrors::UnsupportedFormat(format!(
            "No native bitmap stores {colorspace:?} pixels with {depth:?} samples"
        ))
    }
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedFormat(reason) => {
                writeln!(f, "Unsupported format: {reason}")
            }
            Self::InvalidBitDepth(depth) => {
                writeln!(f, "Cannot read native bitmaps with {depth} bits per pixel")
            }
            Self::CodecError(Some(message)) => {
                writeln!(f, "Native codec error: {message}")
            }
            Self::CodecError(None) => {
                writeln!(f, "Native codec error, no diagnostic was reported")
            }
            Self::NotImplemented(operation) => {
                writeln!(f, "Operation {operation} is not implemented")
            }
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {} but found {}",
                    expected, found
                )
            }
            Self::ImageTooLarge(dimension, limit, found) => {
                writeln!(
                    f,
                    "Too large image {dimension}, {found} exceeds configured limit {limit}"
                )
            }
            Self::WrongBitType(expected, found) => {
                writeln!(f, "Expected {expected:?} samples but found {found:?}")
            }
            Self::UnsupportedColorspace(colorspace, operation) => {
                writeln!(
                    f,
                    "Unsupported colorspace {colorspace:?}, for the operation {operation}"
                )
            }
            Self::IoError(err) => writeln!(f, "I/O error: {err}"),
            Self::GenericString(err) => writeln!(f, "{err}"),
            Self::GenericStr(err) => writeln!(f, "{err}")
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ImageErrors {}

impl From<std::io::Error> for ImageErrors {
    fn from(err: std::io::Error) -> Self {
        ImageErrors::IoError(err)
    }
}

impl From<String> for ImageErrors {
    fn from(s: String) -> ImageErrors {
        ImageErrors::GenericString(s)
    }
}

impl From<&'static str> for ImageErrors {
    fn from(s: &'static str) -> ImageErrors {
        ImageErrors::GenericStr(s)
    }
}
