/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder and encoder options
//!
//! This module exposes structs for which all decoders and encoders
//! get shared options.
//!
//! All supported options are put into one struct to allow for global configurations,
//! i.e the same `EncoderOptions` can be reused for every output format, each
//! format reads the options that apply to it and ignores the rest.
pub use decoder::DecoderOptions;
pub use encoder::{EncoderOptions, ExrCompression, TiffCompression};

mod decoder;
mod encoder;
