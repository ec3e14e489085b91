/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The FreeImage side of the zune FreeImage adapter
//!
//! This crate describes the native library in rust terms,
//! it does not decode or encode anything by itself.
//!
//! - [`FreeImageFormat`] and [`ImageType`] mirror the native format and data type enums
//! - [`flags`] holds the per plugin load/save flag words
//! - [`NativeLibrary`] and [`NativeBitmap`] are the operations the adapter
//!   in `zune-image` performs on the library and its bitmaps
//! - [`Dib`] is a bitmap with the native memory layout allocated on the rust heap
//!
//! # Features
//! - `system`: Link against the system FreeImage and expose it as [`FreeImage`].
//! - `log`: Log native diagnostics through the `log` crate
//!
//! # Example
//! ```
//! use zune_freeimage::{Dib, ImageType, NativeBitmap};
//!
//! // a 5x3 24 bit bitmap, rows are padded to 16 bytes
//! let dib = Dib::allocate(ImageType::Bitmap, 5, 3, 24).unwrap();
//! assert_eq!(dib.pitch(), 16);
//! ```

pub use crate::dib::{compute_pitch, Dib};
#[cfg(feature = "system")]
pub use crate::ffi::{FiBitmap, FreeImage};
pub use crate::library::{NativeBitmap, NativeLibrary};
pub use crate::types::{FreeImageFormat, ImageType, RgbQuad, ALL_FORMATS};

mod dib;
mod ffi;
pub mod flags;
mod library;
mod types;
