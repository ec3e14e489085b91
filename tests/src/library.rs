/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An in-process stand in for the native library
//!
//! "Encoding" writes the bitmap header, palette and scanlines verbatim after
//! a small header, so anything that survives a save/load cycle survived the
//! transcoder. Format capabilities follow the real plugins closely enough to
//! exercise the alpha and bit depth checks.
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use zune_freeimage::{Dib, FreeImageFormat, ImageType, NativeBitmap, NativeLibrary, RgbQuad};

const MAGIC: &[u8; 4] = b"RAWB";
const HEADER_SIZE: usize = 32;

/// A bitmap owned by [`RawLibrary`], counted while alive
pub struct RawBitmap {
    dib:  Dib,
    live: Rc<Cell<usize>>
}

impl Drop for RawBitmap {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

impl NativeBitmap for RawBitmap {
    fn image_type(&self) -> ImageType {
        self.dib.image_type()
    }

    fn width(&self) -> usize {
        self.dib.width()
    }

    fn height(&self) -> usize {
        self.dib.height()
    }

    fn bpp(&self) -> usize {
        self.dib.bpp()
    }

    fn pitch(&self) -> usize {
        self.dib.pitch()
    }

    fn bits(&self) -> &[u8] {
        self.dib.bits()
    }

    fn bits_mut(&mut self) -> &mut [u8] {
        self.dib.bits_mut()
    }

    fn palette(&self) -> &[RgbQuad] {
        self.dib.palette()
    }

    fn palette_mut(&mut self) -> &mut [RgbQuad] {
        self.dib.palette_mut()
    }
}

/// Header of an encoded bitmap
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RawHeader {
    pub format:     FreeImageFormat,
    pub flags:      i32,
    pub image_type: ImageType,
    pub width:      usize,
    pub height:     usize,
    pub bpp:        usize,
    pub colors:     usize
}

impl RawHeader {
    pub fn parse(data: &[u8]) -> Option<RawHeader> {
        if data.len() < HEADER_SIZE || &data[..4] != MAGIC {
            return None;
        }
        let word = |index: usize| {
            let start = 4 + index * 4;
            i32::from_le_bytes([data[start], data[start + 1], data[start + 2], data[start + 3]])
        };
        Some(RawHeader {
            format:     FreeImageFormat::from_raw(word(0)),
            flags:      word(1),
            image_type: ImageType::from_raw(word(2)),
            width:      word(3) as usize,
            height:     word(4) as usize,
            bpp:        word(5) as usize,
            colors:     word(6) as usize
        })
    }

    fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(MAGIC);
        for word in [
            self.format.as_raw(),
            self.flags,
            self.image_type.as_raw(),
            self.width as i32,
            self.height as i32,
            self.bpp as i32,
            self.colors as i32
        ] {
            out.extend_from_slice(&word.to_le_bytes());
        }
    }
}

/// Test double for the FreeImage library
///
/// Single threaded, counts bitmaps so tests can check every
/// acquired bitmap was released.
#[derive(Default)]
pub struct RawLibrary {
    live:       Rc<Cell<usize>>,
    acquired:   Cell<usize>,
    last_error: RefCell<Option<String>>,
    fail_saves: Cell<bool>,
    quiet:      Cell<bool>,
    warning:    RefCell<Option<String>>
}

impl RawLibrary {
    pub fn new() -> RawLibrary {
        RawLibrary::default()
    }

    /// Bitmaps currently alive
    pub fn live_bitmaps(&self) -> usize {
        self.live.get()
    }

    /// Bitmaps ever created, by allocation or by loading
    pub fn acquired_bitmaps(&self) -> usize {
        self.acquired.get()
    }

    /// Make every following save fail with a diagnostic
    pub fn fail_saves(&self, yes: bool) {
        self.fail_saves.set(yes);
    }

    /// Make every following save fail without a diagnostic
    pub fn fail_saves_quietly(&self) {
        self.fail_saves.set(true);
        self.quiet.set(true);
    }

    /// Report `message` during every following successful load,
    /// the way plugins report recoverable problems
    pub fn warn_on_load(&self, message: &str) {
        *self.warning.borrow_mut() = Some(message.to_string());
    }

    fn report(&self, message: &str) {
        *self.last_error.borrow_mut() = Some(message.to_string());
    }

    fn adopt(&self, dib: Dib) -> RawBitmap {
        self.live.set(self.live.get() + 1);
        self.acquired.set(self.acquired.get() + 1);

        RawBitmap {
            dib,
            live: Rc::clone(&self.live)
        }
    }

    fn decode(&self, data: &[u8]) -> Result<Dib, &'static str> {
        let header = RawHeader::parse(data).ok_or("Not a raw bitmap")?;
        let blank = Dib::allocate(header.image_type, header.width, header.height, header.bpp)
            .ok_or("Invalid bitmap header")?;

        let palette_end = HEADER_SIZE + header.colors * 4;
        let bits_end = palette_end + blank.bits().len();

        if data.len() != bits_end {
            return Err("Truncated bitmap");
        }
        let palette = data[HEADER_SIZE..palette_end]
            .chunks_exact(4)
            .map(|c| RgbQuad {
                blue:     c[0],
                green:    c[1],
                red:      c[2],
                reserved: c[3]
            })
            .collect();

        Dib::from_parts(
            header.image_type,
            header.width,
            header.height,
            header.bpp,
            data[palette_end..].to_vec(),
            palette
        )
        .ok_or("Palette does not match bit depth")
    }
}

/// Formats the double can only read
const READ_ONLY: [FreeImageFormat; 10] = [
    FreeImageFormat::CUT,
    FreeImageFormat::DDS,
    FreeImageFormat::FAXG3,
    FreeImageFormat::KOALA,
    FreeImageFormat::MNG,
    FreeImageFormat::PCD,
    FreeImageFormat::PICT,
    FreeImageFormat::RAW,
    FreeImageFormat::SGI,
    FreeImageFormat::XBM
];

impl NativeLibrary for RawLibrary {
    type Bitmap = RawBitmap;

    fn version(&self) -> String {
        "3.18.0-raw".to_string()
    }

    fn allocate(
        &self, image_type: ImageType, width: usize, height: usize, bpp: usize
    ) -> Option<RawBitmap> {
        match Dib::allocate(image_type, width, height, bpp) {
            Some(dib) => Some(self.adopt(dib)),
            None => {
                self.report("Cannot allocate bitmap");
                None
            }
        }
    }

    fn load_from_memory(&self, format: FreeImageFormat, data: &[u8], _flags: i32) -> Option<RawBitmap> {
        match RawHeader::parse(data) {
            Some(header) if header.format != format => {
                self.report("Data was saved as another format");
                return None;
            }
            _ => ()
        }
        match self.decode(data) {
            Ok(dib) => {
                if let Some(warning) = self.warning.borrow().as_deref() {
                    self.report(warning);
                }
                Some(self.adopt(dib))
            }
            Err(message) => {
                self.report(message);
                None
            }
        }
    }

    fn save_to_memory(&self, format: FreeImageFormat, bitmap: &RawBitmap, flags: i32) -> Option<Vec<u8>> {
        if self.fail_saves.get() {
            if !self.quiet.get() {
                self.report("No space left on device");
            }
            return None;
        }
        let header = RawHeader {
            format,
            flags,
            image_type: bitmap.image_type(),
            width: bitmap.width(),
            height: bitmap.height(),
            bpp: bitmap.bpp(),
            colors: bitmap.palette().len()
        };
        let mut out = Vec::with_capacity(HEADER_SIZE + bitmap.bits().len());

        header.write(&mut out);

        for entry in bitmap.palette() {
            out.extend_from_slice(&[entry.blue, entry.green, entry.red, entry.reserved]);
        }
        out.extend_from_slice(bitmap.bits());

        Some(out)
    }

    fn identify(&self, data: &[u8]) -> FreeImageFormat {
        RawHeader::parse(data).map_or(FreeImageFormat::Unknown, |header| header.format)
    }

    fn supports_reading(&self, format: FreeImageFormat) -> bool {
        format != FreeImageFormat::Unknown
    }

    fn supports_writing(&self, format: FreeImageFormat) -> bool {
        format != FreeImageFormat::Unknown && !READ_ONLY.contains(&format)
    }

    fn supports_export_type(&self, format: FreeImageFormat, image_type: ImageType) -> bool {
        use ImageType::*;

        match format {
            FreeImageFormat::TIFF => image_type != Unknown,
            FreeImageFormat::PNG => matches!(image_type, Bitmap | UInt16 | Rgb16 | Rgba16),
            FreeImageFormat::EXR => matches!(image_type, Float | RgbF | RgbaF),
            FreeImageFormat::PFM => matches!(image_type, Float | RgbF),
            FreeImageFormat::HDR => image_type == RgbF,
            _ => image_type == Bitmap
        }
    }

    fn supports_export_bpp(&self, format: FreeImageFormat, bpp: usize) -> bool {
        match format {
            FreeImageFormat::JPEG => matches!(bpp, 8 | 24),
            FreeImageFormat::GIF => bpp == 8,
            FreeImageFormat::TARGA => matches!(bpp, 8 | 16 | 24 | 32),
            FreeImageFormat::BMP | FreeImageFormat::PNG | FreeImageFormat::TIFF => {
                matches!(bpp, 1 | 4 | 8 | 16 | 24 | 32)
            }
            FreeImageFormat::EXR | FreeImageFormat::PFM | FreeImageFormat::HDR => false,
            _ => matches!(bpp, 1 | 8 | 24 | 32)
        }
    }

    fn take_last_error(&self) -> Option<String> {
        self.last_error.borrow_mut().take()
    }
}
