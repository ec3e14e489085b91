/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image sample types, information and manipulations

/// The underlying representation of a single image sample
///
/// This represents the rust type that is used
/// to store one channel of one pixel, required
/// by the `PixelData` storage in zune-image
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum BitType {
    /// Samples stored as [`u8`], range 0-255
    U8,
    /// Samples stored as [`i16`]
    I16,
    /// Samples stored as [`u16`], range 0-65535
    U16,
    /// Samples stored as [`i32`]
    I32,
    /// Samples stored as [`u32`]
    U32,
    /// Samples stored as [`f32`]
    ///
    /// No range is assumed, HDR formats routinely
    /// exceed `[0.0, 1.0]`
    F32,
    /// Samples stored as [`f64`]
    F64
}

impl BitType {
    /// Get the number of bytes needed to store one sample of this type
    ///
    /// # Example
    /// ```
    /// use zune_core::bit_depth::BitType;
    /// assert_eq!(BitType::U8.size_of(), 1);
    /// assert_eq!(BitType::I16.size_of(), 2);
    /// assert_eq!(BitType::F64.size_of(), 8);
    /// ```
    pub const fn size_of(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::I16 | Self::U16 => 2,
            Self::I32 | Self::U32 | Self::F32 => 4,
            Self::F64 => 8
        }
    }

    /// Number of bits needed to store one sample of this type
    pub const fn bits(self) -> usize {
        self.size_of() * 8
    }

    /// Return true if samples of this type are floating point
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Return true if samples of this type carry a sign
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::I16 | Self::I32 | Self::F32 | Self::F64)
    }
}

/// All sample types understood by the library
pub static ALL_BIT_TYPES: [BitType; 7] = [
    BitType::U8,
    BitType::I16,
    BitType::U16,
    BitType::I32,
    BitType::U32,
    BitType::F32,
    BitType::F64
];
