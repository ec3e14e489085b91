/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An image container that loads and saves through FreeImage
//!
//! - [`image::Image`] holds interleaved samples of one of seven scalar types,
//!   possibly as a strided view into a larger allocation
//! - [`codecs::freeimage::FreeImageCodec`] decodes and encodes images by moving
//!   their pixels into and out of native FreeImage bitmaps
//!
//! # Features
//! - `log`: Log through the `log` crate
//! - `serde-support`: Serialize image metadata
//! - `system`: Link the system FreeImage library
pub mod codecs;
pub mod errors;
pub mod image;
pub mod metadata;
mod serde;
pub mod traits;
