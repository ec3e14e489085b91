/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Entry point for all supported codecs the library understands
//!
//! Decoding and encoding is delegated to the FreeImage library, see
//! [`freeimage`] for the adapter that moves pixels between an [`Image`](crate::image::Image)
//! and a native bitmap.
//!
//! # Note on Compatibility with images
//!
//! - Pixels are never converted between sample types, an image is either stored with
//!   its own sample type or the encode fails with an unsupported format error.
//!
//! - Images with an alpha channel saved to a format without alpha support have
//!   their alpha channel dropped, the source image is left as is, unmodified.
#![allow(non_camel_case_types)]

pub mod freeimage;

/// All supported image formats
///
/// This enum contains formats FreeImage can read or write plus
/// formats the rest of the zune family knows about
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum ImageFormat {
    /// Windows Bitmap Files
    BMP,
    /// Windows Icon
    ICO,
    /// Joint Photographic Experts Group
    JPEG,
    /// JPEG Network Graphics
    JNG,
    /// Commodore 64 Koala
    KOALA,
    /// Amiga Interchange File Format
    IFF,
    /// Multiple-image Network Graphics
    MNG,
    /// Portable Bitmap, ASCII
    PBM,
    /// Portable Bitmap, binary
    PBMRAW,
    /// Kodak PhotoCD
    PCD,
    /// Zsoft Paintbrush
    PCX,
    /// Portable Graymap, ASCII
    PGM,
    /// Portable Graymap, binary
    PGMRAW,
    /// Portable Network Graphics
    PNG,
    /// Portable Pixel Map image, ASCII
    PPM,
    /// Portable Pixel Map image, binary
    PPMRAW,
    /// Sun Raster
    RAS,
    /// Truevision Targa
    TARGA,
    /// Tagged Image File Format
    TIFF,
    /// Wireless Bitmap
    WBMP,
    /// Photoshop PSD component
    PSD,
    /// Dr. Halo
    CUT,
    /// X11 Bitmap
    XBM,
    /// X11 Pixmap
    XPM,
    /// DirectDraw Surface
    DDS,
    /// Graphics Interchange Format
    GIF,
    /// Radiance HDR
    HDR,
    /// Raw fax format CCITT G3
    FAXG3,
    /// Silicon Graphics
    SGI,
    /// OpenEXR
    EXR,
    /// JPEG 2000 codestream
    J2K,
    /// JPEG 2000 file format
    JP2,
    /// Portable Float Map
    PFM,
    /// Macintosh PICT
    PICT,
    /// Camera RAW
    RAW,
    /// Google WebP
    WEBP,
    /// JPEG XR
    JXR,
    /// Quite Okay Image
    QOI,
    /// Farbfeld format
    Farbfeld,
    /// JPEG XL, new format
    JPEG_XL,
    /// Any unknown format
    Unknown
}

impl ImageFormat {
    /// Whether an alpha channel survives encoding to this format
    ///
    /// Images with alpha are saved without it to formats returning `false`
    pub const fn supports_alpha(self) -> bool {
        matches!(
            self,
            ImageFormat::BMP
                | ImageFormat::ICO
                | ImageFormat::PNG
                | ImageFormat::TARGA
                | ImageFormat::TIFF
                | ImageFormat::PSD
                | ImageFormat::EXR
                | ImageFormat::J2K
                | ImageFormat::JP2
                | ImageFormat::WEBP
                | ImageFormat::JXR
                | ImageFormat::QOI
                | ImageFormat::Farbfeld
                | ImageFormat::JPEG_XL
        )
    }

    /// Guess a format from a file extension, case insensitive
    ///
    /// # Example
    /// ```
    /// use zune_image::codecs::ImageFormat;
    ///
    /// assert_eq!(ImageFormat::from_extension("JPG"), Some(ImageFormat::JPEG));
    /// assert_eq!(ImageFormat::from_extension("txt"), None);
    /// ```
    pub fn from_extension<P: AsRef<str>>(extension: P) -> Option<ImageFormat> {
        let format = match extension.as_ref().to_ascii_lowercase().as_str() {
            "bmp" => ImageFormat::BMP,
            "ico" => ImageFormat::ICO,
            "jpg" | "jpeg" | "jpe" | "jif" => ImageFormat::JPEG,
            "jng" => ImageFormat::JNG,
            "koa" => ImageFormat::KOALA,
            "iff" | "lbm" => ImageFormat::IFF,
            "mng" => ImageFormat::MNG,
            "pbm" => ImageFormat::PBM,
            "pcd" => ImageFormat::PCD,
            "pcx" => ImageFormat::PCX,
            "pgm" => ImageFormat::PGM,
            "png" => ImageFormat::PNG,
            "ppm" => ImageFormat::PPM,
            "ras" => ImageFormat::RAS,
            "tga" | "targa" => ImageFormat::TARGA,
            "tif" | "tiff" => ImageFormat::TIFF,
            "wbmp" => ImageFormat::WBMP,
            "psd" => ImageFormat::PSD,
            "cut" => ImageFormat::CUT,
            "xbm" => ImageFormat::XBM,
            "xpm" => ImageFormat::XPM,
            "dds" => ImageFormat::DDS,
            "gif" => ImageFormat::GIF,
            "hdr" => ImageFormat::HDR,
            "g3" => ImageFormat::FAXG3,
            "sgi" | "rgb" | "rgba" | "bw" => ImageFormat::SGI,
            "exr" => ImageFormat::EXR,
            "j2k" | "j2c" => ImageFormat::J2K,
            "jp2" => ImageFormat::JP2,
            "pfm" => ImageFormat::PFM,
            "pct" | "pict" | "pic" => ImageFormat::PICT,
            "raw" | "cr2" | "nef" | "dng" | "arw" => ImageFormat::RAW,
            "webp" => ImageFormat::WEBP,
            "jxr" | "wdp" | "hdp" => ImageFormat::JXR,
            "qoi" => ImageFormat::QOI,
            "ff" => ImageFormat::Farbfeld,
            "jxl" => ImageFormat::JPEG_XL,
            _ => return None
        };
        Some(format)
    }
}
