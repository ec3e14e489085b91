/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image Colorspace information and manipulation utilities.

/// All channel layouts an image can be stored in
///
/// The colorspace describes the meaning and the order of interleaved
/// samples within a single pixel, the type of each sample is described
/// separately by [`BitType`](crate::bit_depth::BitType)
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum ColorSpace {
    /// Red, Green , Blue
    RGB,
    /// Red, Green, Blue, Alpha
    RGBA,
    /// Red, Green, Blue, Alpha where the color channels
    /// have already been multiplied by alpha
    RGBP,
    /// Grayscale colorspace
    Luma,
    /// Black and white.
    ///
    /// One sample per pixel like [`Luma`](ColorSpace::Luma) but only two
    /// values carry meaning, `0` for black and `255` for white.
    /// This is what one bit images decode to.
    BW,
    /// Two channel data, e.g complex numbers stored as (real, imaginary)
    RG,
    /// Blue, Green, Red
    BGR,
    /// Blue, Green, Red, Alpha
    BGRA,
    /// Blue, Green, Red, Alpha with premultiplied colors
    BGRP,
    /// The colorspace is unknown
    Unknown
}

impl ColorSpace {
    /// Number of color channels present for a certain colorspace
    ///
    /// E.g. RGB returns 3 since it contains R,G and B colors to make up a pixel
    pub const fn num_components(&self) -> usize {
        match self {
            Self::RGB | Self::BGR => 3,
            Self::RGBA | Self::RGBP | Self::BGRA | Self::BGRP => 4,
            Self::Luma | Self::BW => 1,
            Self::RG => 2,
            Self::Unknown => 0
        }
    }

    pub const fn has_alpha(&self) -> bool {
        matches!(self, Self::RGBA | Self::RGBP | Self::BGRA | Self::BGRP)
    }

    pub const fn is_grayscale(&self) -> bool {
        matches!(self, Self::Luma | Self::BW)
    }

    /// Whether the color channels are stored premultiplied by alpha
    pub const fn is_premultiplied(&self) -> bool {
        matches!(self, Self::RGBP | Self::BGRP)
    }

    /// Whether blue is stored before red within a pixel
    pub const fn is_bgr(&self) -> bool {
        matches!(self, Self::BGR | Self::BGRA | Self::BGRP)
    }

    /// Returns the position of the alpha sample in a pixel
    ///
    /// If an image doesn't have an alpha channel returns `None`
    pub const fn alpha_position(&self) -> Option<usize> {
        match self {
            Self::RGBA | Self::RGBP | Self::BGRA | Self::BGRP => Some(3),
            _ => None
        }
    }

    /// The colorspace left after removing alpha.
    ///
    /// Channel order is kept, so `BGRA` becomes `BGR`.
    /// Colorspaces without alpha are returned unchanged
    pub const fn without_alpha(&self) -> ColorSpace {
        match self {
            Self::RGBA | Self::RGBP => Self::RGB,
            Self::BGRA | Self::BGRP => Self::BGR,
            _ => *self
        }
    }
}

/// Encapsulates all colorspaces supported by
/// the library
pub static ALL_COLORSPACES: [ColorSpace; 9] = [
    ColorSpace::RGB,
    ColorSpace::RGBA,
    ColorSpace::RGBP,
    ColorSpace::Luma,
    ColorSpace::BW,
    ColorSpace::RG,
    ColorSpace::BGR,
    ColorSpace::BGRA,
    ColorSpace::BGRP
];
