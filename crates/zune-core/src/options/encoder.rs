/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use bitflags::bitflags;

bitflags! {
    /// Encoder options that are flags
    #[derive(Copy, Debug, Clone, Default, Eq, PartialEq)]
    struct EncoderFlags: u64 {
        /// Whether JPEG images should be encoded as progressive images
        const JPEG_ENCODE_PROGRESSIVE = 0b0000_0000_0000_0000_0000_0000_0000_0001;
        /// Whether PNG images should be written with Adam7 interlacing
        const PNG_INTERLACED          = 0b0000_0000_0000_0000_0000_0000_0000_0010;
        /// Whether WEBP images should be written losslessly
        const WEBP_LOSSLESS           = 0b0000_0000_0000_0000_0000_0000_0000_0100;
        /// Whether formats with optional run length encoding (BMP, TARGA) should use it
        const RLE_COMPRESS            = 0b0000_0000_0000_0000_0000_0000_0000_1000;
    }
}

/// Compression schemes an OpenEXR file can be written with
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ExrCompression {
    /// Store pixels uncompressed
    None,
    /// zlib compression, in blocks of 16 scan lines
    Zip,
    /// piz-based wavelet compression
    Piz,
    /// lossy 24-bit float compression
    Pxr24,
    /// lossy 44% float compression
    B44
}

/// Compression schemes a TIFF file can be written with
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TiffCompression {
    /// Store pixels uncompressed
    None,
    /// CCITT Group 3 fax encoding, one bit images only
    CcittFax3,
    /// CCITT Group 4 fax encoding, one bit images only
    CcittFax4,
    /// Lempel-Ziv & Welch
    Lzw,
    /// JPEG compression, lossy
    Jpeg,
    /// zlib deflate
    Deflate,
    /// Macintosh RLE
    PackBits
}

/// Options shared by the encoders
///
/// Every value is optional, an option left unset means the output
/// format's default is used.
#[derive(Debug, Copy, Clone, Default)]
pub struct EncoderOptions {
    quality:           Option<u8>,
    compression_level: Option<u8>,
    exr_compression:   Option<ExrCompression>,
    tiff_compression:  Option<TiffCompression>,
    flags:             EncoderFlags
}

impl EncoderOptions {
    /// Get the quality for which the image will be encoded with
    ///
    /// # Lossy
    /// - Higher quality means some images take longer to write and
    ///   are big but they look good
    ///
    /// - Lower quality means small images and low quality.
    ///
    /// Returns `None` if no quality was configured
    pub const fn get_quality(&self) -> Option<u8> {
        self.quality
    }

    /// Set quality of the image to be encoded
    ///
    /// Values are clamped to `1..=100`
    pub fn set_quality(mut self, quality: u8) -> Self {
        self.quality = Some(quality.clamp(1, 100));
        self
    }

    /// Return true if run length encoding was requested
    /// for formats that support it
    pub const fn get_rle(&self) -> bool {
        self.flags.contains(EncoderFlags::RLE_COMPRESS)
    }

    /// Request run length encoding for formats that
    /// optionally support it (BMP and TARGA)
    pub fn set_rle(mut self, yes: bool) -> Self {
        self.flags.set(EncoderFlags::RLE_COMPRESS, yes);
        self
    }
}

/// PNG options
impl EncoderOptions {
    /// Get the zlib compression level, `0` meaning no compression
    pub const fn png_get_compression_level(&self) -> Option<u8> {
        self.compression_level
    }

    /// Set the zlib compression level
    ///
    /// `0` stores the image without compression, `9` is the
    /// slowest and smallest, values above are clamped to `9`
    pub fn png_set_compression_level(mut self, level: u8) -> Self {
        self.compression_level = Some(level.min(9));
        self
    }

    pub const fn png_get_interlaced(&self) -> bool {
        self.flags.contains(EncoderFlags::PNG_INTERLACED)
    }

    pub fn png_set_interlaced(mut self, yes: bool) -> Self {
        self.flags.set(EncoderFlags::PNG_INTERLACED, yes);
        self
    }
}

/// JPEG options
impl EncoderOptions {
    pub const fn jpeg_encode_progressive(&self) -> bool {
        self.flags.contains(EncoderFlags::JPEG_ENCODE_PROGRESSIVE)
    }

    pub fn jpeg_set_encode_progressive(mut self, yes: bool) -> Self {
        self.flags.set(EncoderFlags::JPEG_ENCODE_PROGRESSIVE, yes);
        self
    }
}

/// WEBP options
impl EncoderOptions {
    pub const fn webp_get_lossless(&self) -> bool {
        self.flags.contains(EncoderFlags::WEBP_LOSSLESS)
    }

    /// Write webp images losslessly, quality is ignored when set
    pub fn webp_set_lossless(mut self, yes: bool) -> Self {
        self.flags.set(EncoderFlags::WEBP_LOSSLESS, yes);
        self
    }
}

/// EXR options
impl EncoderOptions {
    pub const fn exr_get_compression(&self) -> Option<ExrCompression> {
        self.exr_compression
    }

    pub fn exr_set_compression(mut self, compression: ExrCompression) -> Self {
        self.exr_compression = Some(compression);
        self
    }
}

/// TIFF options
impl EncoderOptions {
    pub const fn tiff_get_compression(&self) -> Option<TiffCompression> {
        self.tiff_compression
    }

    pub fn tiff_set_compression(mut self, compression: TiffCompression) -> Self {
        self.tiff_compression = Some(compression);
        self
    }
}
