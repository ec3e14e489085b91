/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Bindings to the system FreeImage library
//!
//! Only the handful of entry points the adapter needs are declared.
//! Finding and loading the shared library is left to the platform linker.
#![cfg(feature = "system")]

use std::ffi::CStr;
use std::ptr::{self, NonNull};
use std::slice;
use std::sync::{Mutex, Once};

use libc::{c_char, c_int, c_uint};
use zune_core::log::{trace, warn};

use crate::library::{NativeBitmap, NativeLibrary};
use crate::types::{FreeImageFormat, ImageType, RgbQuad};

#[repr(C)]
struct FIBITMAP {
    _private: [u8; 0]
}

#[repr(C)]
struct FIMEMORY {
    _private: [u8; 0]
}

type BOOL = c_int;
type OutputMessageFunction = extern "C" fn(fif: c_int, msg: *const c_char);

const FI_RGBA_RED_MASK: c_uint = 0x00FF_0000;
const FI_RGBA_GREEN_MASK: c_uint = 0x0000_FF00;
const FI_RGBA_BLUE_MASK: c_uint = 0x0000_00FF;

#[cfg_attr(windows, link(name = "FreeImage"))]
#[cfg_attr(not(windows), link(name = "freeimage"))]
extern "system" {
    fn FreeImage_GetVersion() -> *const c_char;
    fn FreeImage_SetOutputMessage(omf: OutputMessageFunction);

    fn FreeImage_AllocateT(
        image_type: c_int, width: c_int, height: c_int, bpp: c_int, red_mask: c_uint,
        green_mask: c_uint, blue_mask: c_uint
    ) -> *mut FIBITMAP;
    fn FreeImage_Unload(dib: *mut FIBITMAP);

    fn FreeImage_OpenMemory(data: *mut u8, size_in_bytes: u32) -> *mut FIMEMORY;
    fn FreeImage_CloseMemory(stream: *mut FIMEMORY);
    fn FreeImage_AcquireMemory(stream: *mut FIMEMORY, data: *mut *mut u8, size: *mut u32)
        -> BOOL;
    fn FreeImage_LoadFromMemory(fif: c_int, stream: *mut FIMEMORY, flags: c_int)
        -> *mut FIBITMAP;
    fn FreeImage_SaveToMemory(
        fif: c_int, dib: *mut FIBITMAP, stream: *mut FIMEMORY, flags: c_int
    ) -> BOOL;
    fn FreeImage_GetFileTypeFromMemory(stream: *mut FIMEMORY, size: c_int) -> c_int;

    fn FreeImage_FIFSupportsReading(fif: c_int) -> BOOL;
    fn FreeImage_FIFSupportsWriting(fif: c_int) -> BOOL;
    fn FreeImage_FIFSupportsExportType(fif: c_int, image_type: c_int) -> BOOL;
    fn FreeImage_FIFSupportsExportBPP(fif: c_int, bpp: c_int) -> BOOL;

    fn FreeImage_GetImageType(dib: *mut FIBITMAP) -> c_int;
    fn FreeImage_GetBPP(dib: *mut FIBITMAP) -> c_uint;
    fn FreeImage_GetWidth(dib: *mut FIBITMAP) -> c_uint;
    fn FreeImage_GetHeight(dib: *mut FIBITMAP) -> c_uint;
    fn FreeImage_GetPitch(dib: *mut FIBITMAP) -> c_uint;
    fn FreeImage_GetBits(dib: *mut FIBITMAP) -> *mut u8;
    fn FreeImage_GetPalette(dib: *mut FIBITMAP) -> *mut RgbQuad;
    fn FreeImage_GetColorsUsed(dib: *mut FIBITMAP) -> c_uint;
}

/// Last message reported through the output message callback.
///
/// Single slot shared by the whole process.
static LAST_ERROR: Mutex<Option<String>> = Mutex::new(None);
static INSTALL_HANDLER: Once = Once::new();

extern "C" fn on_output_message(fif: c_int, msg: *const c_char) {
    if msg.is_null() {
        return;
    }
    // safety: the library hands us a nul terminated string valid for this call
    let message = unsafe { CStr::from_ptr(msg) }
        .to_string_lossy()
        .into_owned();

    warn!("FreeImage ({:?}): {}", FreeImageFormat::from_raw(fif), message);

    if let Ok(mut slot) = LAST_ERROR.lock() {
        *slot = Some(message);
    }
}

fn to_bool(value: BOOL) -> bool {
    value != 0
}

/// A memory stream owned by the library, closed on drop
struct MemoryStream(NonNull<FIMEMORY>);

impl MemoryStream {
    fn open(data: *mut u8, size: u32) -> Option<MemoryStream> {
        // safety: a null data pointer asks for a growable stream,
        // a non null one must point to `size` readable bytes
        NonNull::new(unsafe { FreeImage_OpenMemory(data, size) }).map(MemoryStream)
    }

    /// Open a read only stream over `data`
    ///
    /// The library only writes to streams it allocated itself, so handing
    /// it a pointer derived from a shared slice is fine for loading.
    fn open_read(data: &[u8]) -> Option<MemoryStream> {
        let size = u32::try_from(data.len()).ok()?;
        MemoryStream::open(data.as_ptr().cast_mut(), size)
    }
}

impl Drop for MemoryStream {
    fn drop(&mut self) {
        unsafe { FreeImage_CloseMemory(self.0.as_ptr()) }
    }
}

/// A bitmap allocated by the library, unloaded on drop
pub struct FiBitmap {
    dib: NonNull<FIBITMAP>
}

impl FiBitmap {
    fn from_raw(dib: *mut FIBITMAP) -> Option<FiBitmap> {
        NonNull::new(dib).map(|dib| FiBitmap { dib })
    }

    fn raw(&self) -> *mut FIBITMAP {
        self.dib.as_ptr()
    }

    fn len(&self) -> usize {
        self.pitch() * self.height()
    }
}

impl Drop for FiBitmap {
    fn drop(&mut self) {
        trace!("Releasing native bitmap {:p}", self.dib);
        unsafe { FreeImage_Unload(self.raw()) }
    }
}

impl NativeBitmap for FiBitmap {
    fn image_type(&self) -> ImageType {
        ImageType::from_raw(unsafe { FreeImage_GetImageType(self.raw()) })
    }

    fn width(&self) -> usize {
        unsafe { FreeImage_GetWidth(self.raw()) as usize }
    }

    fn height(&self) -> usize {
        unsafe { FreeImage_GetHeight(self.raw()) as usize }
    }

    fn bpp(&self) -> usize {
        unsafe { FreeImage_GetBPP(self.raw()) as usize }
    }

    fn pitch(&self) -> usize {
        unsafe { FreeImage_GetPitch(self.raw()) as usize }
    }

    fn bits(&self) -> &[u8] {
        let bits = unsafe { FreeImage_GetBits(self.raw()) };
        if bits.is_null() {
            return &[];
        }
        // safety: pixel memory spans pitch * height bytes and lives as long as the handle
        unsafe { slice::from_raw_parts(bits, self.len()) }
    }

    fn bits_mut(&mut self) -> &mut [u8] {
        let bits = unsafe { FreeImage_GetBits(self.raw()) };
        if bits.is_null() {
            return &mut [];
        }
        // safety: as above, and `&mut self` guarantees exclusive access
        unsafe { slice::from_raw_parts_mut(bits, self.len()) }
    }

    fn palette(&self) -> &[RgbQuad] {
        let palette = unsafe { FreeImage_GetPalette(self.raw()) };
        if palette.is_null() {
            return &[];
        }
        let colors = unsafe { FreeImage_GetColorsUsed(self.raw()) } as usize;
        // safety: a non null palette holds `colors used` entries
        unsafe { slice::from_raw_parts(palette, colors) }
    }

    fn palette_mut(&mut self) -> &mut [RgbQuad] {
        let palette = unsafe { FreeImage_GetPalette(self.raw()) };
        if palette.is_null() {
            return &mut [];
        }
        let colors = unsafe { FreeImage_GetColorsUsed(self.raw()) } as usize;
        unsafe { slice::from_raw_parts_mut(palette, colors) }
    }
}

/// The system FreeImage library
///
/// Creating an instance installs the output message handler that feeds
/// [`take_last_error`](NativeLibrary::take_last_error).
pub struct FreeImage {
    _private: ()
}

impl FreeImage {
    pub fn new() -> FreeImage {
        INSTALL_HANDLER.call_once(|| unsafe { FreeImage_SetOutputMessage(on_output_message) });
        FreeImage { _private: () }
    }
}

impl Default for FreeImage {
    fn default() -> Self {
        FreeImage::new()
    }
}

impl NativeLibrary for FreeImage {
    type Bitmap = FiBitmap;

    fn version(&self) -> String {
        let version = unsafe { FreeImage_GetVersion() };
        if version.is_null() {
            return String::from("unknown");
        }
        unsafe { CStr::from_ptr(version) }
            .to_string_lossy()
            .into_owned()
    }

    fn allocate(
        &self, image_type: ImageType, width: usize, height: usize, bpp: usize
    ) -> Option<FiBitmap> {
        let width = c_int::try_from(width).ok()?;
        let height = c_int::try_from(height).ok()?;
        let bpp = c_int::try_from(bpp).ok()?;

        let (red, green, blue) = if image_type == ImageType::Bitmap && bpp >= 24 {
            (FI_RGBA_RED_MASK, FI_RGBA_GREEN_MASK, FI_RGBA_BLUE_MASK)
        } else {
            (0, 0, 0)
        };
        let dib =
            unsafe { FreeImage_AllocateT(image_type.as_raw(), width, height, bpp, red, green, blue) };

        FiBitmap::from_raw(dib)
    }

    fn load_from_memory(
        &self, format: FreeImageFormat, data: &[u8], flags: i32
    ) -> Option<FiBitmap> {
        let stream = MemoryStream::open_read(data)?;
        let dib = unsafe { FreeImage_LoadFromMemory(format.as_raw(), stream.0.as_ptr(), flags) };
        FiBitmap::from_raw(dib)
    }

    fn save_to_memory(
        &self, format: FreeImageFormat, bitmap: &FiBitmap, flags: i32
    ) -> Option<Vec<u8>> {
        let stream = MemoryStream::open(ptr::null_mut(), 0)?;

        let saved = unsafe {
            FreeImage_SaveToMemory(format.as_raw(), bitmap.raw(), stream.0.as_ptr(), flags)
        };
        if !to_bool(saved) {
            return None;
        }
        let mut data: *mut u8 = ptr::null_mut();
        let mut size: u32 = 0;

        let acquired = unsafe { FreeImage_AcquireMemory(stream.0.as_ptr(), &mut data, &mut size) };
        if !to_bool(acquired) || data.is_null() {
            return None;
        }
        // safety: the buffer belongs to the stream, copy it out before the stream closes
        Some(unsafe { slice::from_raw_parts(data, size as usize) }.to_vec())
    }

    fn identify(&self, data: &[u8]) -> FreeImageFormat {
        match MemoryStream::open_read(data) {
            Some(stream) => FreeImageFormat::from_raw(unsafe {
                FreeImage_GetFileTypeFromMemory(stream.0.as_ptr(), 0)
            }),
            None => FreeImageFormat::Unknown
        }
    }

    fn supports_reading(&self, format: FreeImageFormat) -> bool {
        to_bool(unsafe { FreeImage_FIFSupportsReading(format.as_raw()) })
    }

    fn supports_writing(&self, format: FreeImageFormat) -> bool {
        to_bool(unsafe { FreeImage_FIFSupportsWriting(format.as_raw()) })
    }

    fn supports_export_type(&self, format: FreeImageFormat, image_type: ImageType) -> bool {
        to_bool(unsafe { FreeImage_FIFSupportsExportType(format.as_raw(), image_type.as_raw()) })
    }

    fn supports_export_bpp(&self, format: FreeImageFormat, bpp: usize) -> bool {
        match c_int::try_from(bpp) {
            Ok(bpp) => to_bool(unsafe { FreeImage_FIFSupportsExportBPP(format.as_raw(), bpp) }),
            Err(_) => false
        }
    }

    fn take_last_error(&self) -> Option<String> {
        LAST_ERROR.lock().ok().and_then(|mut slot| slot.take())
    }
}
