/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Native enums and structs, mirroring `FreeImage.h`
#![allow(clippy::upper_case_acronyms)]

/// Native file format identifier (`FREE_IMAGE_FORMAT`)
///
/// Discriminants are the values the library uses, they
/// cross the FFI boundary unchanged.
#[repr(i32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FreeImageFormat {
    Unknown = -1,
    BMP = 0,
    ICO = 1,
    JPEG = 2,
    JNG = 3,
    KOALA = 4,
    LBM = 5,
    MNG = 6,
    PBM = 7,
    PBMRAW = 8,
    PCD = 9,
    PCX = 10,
    PGM = 11,
    PGMRAW = 12,
    PNG = 13,
    PPM = 14,
    PPMRAW = 15,
    RAS = 16,
    TARGA = 17,
    TIFF = 18,
    WBMP = 19,
    PSD = 20,
    CUT = 21,
    XBM = 22,
    XPM = 23,
    DDS = 24,
    GIF = 25,
    HDR = 26,
    FAXG3 = 27,
    SGI = 28,
    EXR = 29,
    J2K = 30,
    JP2 = 31,
    PFM = 32,
    PICT = 33,
    RAW = 34,
    WEBP = 35,
    JXR = 36
}

/// Every known format, in identifier order
pub static ALL_FORMATS: [FreeImageFormat; 37] = [
    FreeImageFormat::BMP,
    FreeImageFormat::ICO,
    FreeImageFormat::JPEG,
    FreeImageFormat::JNG,
    FreeImageFormat::KOALA,
    FreeImageFormat::LBM,
    FreeImageFormat::MNG,
    FreeImageFormat::PBM,
    FreeImageFormat::PBMRAW,
    FreeImageFormat::PCD,
    FreeImageFormat::PCX,
    FreeImageFormat::PGM,
    FreeImageFormat::PGMRAW,
    FreeImageFormat::PNG,
    FreeImageFormat::PPM,
    FreeImageFormat::PPMRAW,
    FreeImageFormat::RAS,
    FreeImageFormat::TARGA,
    FreeImageFormat::TIFF,
    FreeImageFormat::WBMP,
    FreeImageFormat::PSD,
    FreeImageFormat::CUT,
    FreeImageFormat::XBM,
    FreeImageFormat::XPM,
    FreeImageFormat::DDS,
    FreeImageFormat::GIF,
    FreeImageFormat::HDR,
    FreeImageFormat::FAXG3,
    FreeImageFormat::SGI,
    FreeImageFormat::EXR,
    FreeImageFormat::J2K,
    FreeImageFormat::JP2,
    FreeImageFormat::PFM,
    FreeImageFormat::PICT,
    FreeImageFormat::RAW,
    FreeImageFormat::WEBP,
    FreeImageFormat::JXR
];

impl FreeImageFormat {
    /// Convert a raw identifier returned by the library
    ///
    /// Identifiers outside the known range map to [`Unknown`](FreeImageFormat::Unknown),
    /// plugins registered at runtime get such identifiers.
    pub fn from_raw(value: i32) -> FreeImageFormat {
        usize::try_from(value)
            .ok()
            .and_then(|index| ALL_FORMATS.get(index).copied())
            .unwrap_or(FreeImageFormat::Unknown)
    }

    pub const fn as_raw(self) -> i32 {
        self as i32
    }
}

/// Native image data type (`FREE_IMAGE_TYPE`)
#[repr(i32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ImageType {
    /// Unknown type
    Unknown = 0,
    /// Standard image, 1, 4, 8, 16, 24 or 32 bits per pixel
    Bitmap = 1,
    /// Array of unsigned short, unsigned 16-bit
    UInt16 = 2,
    /// Array of short, signed 16-bit
    Int16 = 3,
    /// Array of unsigned long, unsigned 32-bit
    UInt32 = 4,
    /// Array of long, signed 32-bit
    Int32 = 5,
    /// Array of float, 32-bit IEEE floating point
    Float = 6,
    /// Array of double, 64-bit IEEE floating point
    Double = 7,
    /// Array of two doubles (real, imaginary)
    Complex = 8,
    /// 48-bit RGB image, 3 x 16-bit
    Rgb16 = 9,
    /// 64-bit RGBA image, 4 x 16-bit
    Rgba16 = 10,
    /// 96-bit RGB float image, 3 x 32-bit IEEE floating point
    RgbF = 11,
    /// 128-bit RGBA float image, 4 x 32-bit IEEE floating point
    RgbaF = 12
}

impl ImageType {
    pub fn from_raw(value: i32) -> ImageType {
        match value {
            1 => Self::Bitmap,
            2 => Self::UInt16,
            3 => Self::Int16,
            4 => Self::UInt32,
            5 => Self::Int32,
            6 => Self::Float,
            7 => Self::Double,
            8 => Self::Complex,
            9 => Self::Rgb16,
            10 => Self::Rgba16,
            11 => Self::RgbF,
            12 => Self::RgbaF,
            _ => Self::Unknown
        }
    }

    pub const fn as_raw(self) -> i32 {
        self as i32
    }

    /// Bits per pixel of every type except [`Bitmap`](ImageType::Bitmap),
    /// which supports several depths and returns `None`
    pub const fn fixed_bpp(self) -> Option<u32> {
        match self {
            Self::UInt16 | Self::Int16 => Some(16),
            Self::UInt32 | Self::Int32 | Self::Float => Some(32),
            Self::Double => Some(64),
            Self::Complex => Some(128),
            Self::Rgb16 => Some(48),
            Self::Rgba16 => Some(64),
            Self::RgbF => Some(96),
            Self::RgbaF => Some(128),
            Self::Bitmap | Self::Unknown => None
        }
    }

    /// Whether color pixels of this type are laid out blue first.
    ///
    /// Only standard bitmaps are, on little endian hosts, the
    /// 16 bit and float color types keep red first.
    pub const fn stores_bgr(self) -> bool {
        matches!(self, Self::Bitmap) && cfg!(target_endian = "little")
    }
}

/// A palette entry (`RGBQUAD`)
///
/// Field order matches the little endian library layout
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct RgbQuad {
    pub blue:     u8,
    pub green:    u8,
    pub red:      u8,
    pub reserved: u8
}

impl RgbQuad {
    pub const BLACK: RgbQuad = RgbQuad::gray(0);
    pub const WHITE: RgbQuad = RgbQuad::gray(255);

    pub const fn new(red: u8, green: u8, blue: u8) -> RgbQuad {
        RgbQuad {
            blue,
            green,
            red,
            reserved: 0
        }
    }

    pub const fn gray(value: u8) -> RgbQuad {
        RgbQuad::new(value, value, value)
    }

    /// Sum of the three color components, `0..=765`
    pub const fn brightness(&self) -> u32 {
        self.red as u32 + self.green as u32 + self.blue as u32
    }
}
