/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all libraries
//!
//! This crate provides a set of core routines shared
//! by the FreeImage adapter, the image container and the test harnesses
//!
//! It currently contains
//!
//! - Colorspace and sample type information shared by images
//! - Image decoder and encoder options, including per-format save options
//! - A logging shim that compiles to nothing unless the `log` feature is on
//!
//! This library is `#[no_std]` with `alloc` feature needed for defining `Vec`
//!
//!
//! # Features
//!  - `std`: Enables std facilities.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
//!  - `log`: Routes the macros in [`log`] to the `log` crate
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![macro_use]
extern crate alloc;

pub mod bit_depth;
pub mod colorspace;
pub mod log;
pub mod options;
mod serde;
