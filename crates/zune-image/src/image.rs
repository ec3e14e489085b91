/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a single image
//!
//! An image is represented as
//!
//! - interleaved samples
//!     - of a single scalar type
//!         - representing a colorspace
//!             - addressed through a layout of offset and row stride
//!
//! Storage is shared between an image and the views created from it,
//! so [`Image::view`] does not copy pixels.
//! Images cannot be modified once created.
use std::fmt::Debug;
use std::sync::Arc;

use bytemuck::Pod;
use zune_core::bit_depth::BitType;
use zune_core::colorspace::ColorSpace;

use crate::errors::ImageErrors;
use crate::metadata::ImageMetadata;

/// Backing storage of an image, one variant per sample type
#[derive(Clone, Debug, PartialEq)]
pub enum PixelData {
    U8(Vec<u8>),
    I16(Vec<i16>),
    U16(Vec<u16>),
    I32(Vec<i32>),
    U32(Vec<u32>),
    F32(Vec<f32>),
    F64(Vec<f64>)
}

impl PixelData {
    /// Zero filled storage of `len` samples of `bit_type`
    ///
    /// Returns `None` for sample types this container cannot store
    pub fn zeroed(bit_type: BitType, len: usize) -> Option<PixelData> {
        let data = match bit_type {
            BitType::U8 => PixelData::U8(vec![0; len]),
            BitType::I16 => PixelData::I16(vec![0; len]),
            BitType::U16 => PixelData::U16(vec![0; len]),
            BitType::I32 => PixelData::I32(vec![0; len]),
            BitType::U32 => PixelData::U32(vec![0; len]),
            BitType::F32 => PixelData::F32(vec![0.0; len]),
            BitType::F64 => PixelData::F64(vec![0.0; len]),
            _ => return None
        };
        Some(data)
    }

    /// Zero filled storage of `len` samples with the same type as `self`
    pub fn zeroed_like(&self, len: usize) -> PixelData {
        match self {
            PixelData::U8(_) => PixelData::U8(vec![0; len]),
            PixelData::I16(_) => PixelData::I16(vec![0; len]),
            PixelData::U16(_) => PixelData::U16(vec![0; len]),
            PixelData::I32(_) => PixelData::I32(vec![0; len]),
            PixelData::U32(_) => PixelData::U32(vec![0; len]),
            PixelData::F32(_) => PixelData::F32(vec![0.0; len]),
            PixelData::F64(_) => PixelData::F64(vec![0.0; len])
        }
    }

    pub const fn bit_type(&self) -> BitType {
        match self {
            PixelData::U8(_) => BitType::U8,
            PixelData::I16(_) => BitType::I16,
            PixelData::U16(_) => BitType::U16,
            PixelData::I32(_) => BitType::I32,
            PixelData::U32(_) => BitType::U32,
            PixelData::F32(_) => BitType::F32,
            PixelData::F64(_) => BitType::F64
        }
    }

    /// Number of samples stored
    pub fn len(&self) -> usize {
        match self {
            PixelData::U8(v) => v.len(),
            PixelData::I16(v) => v.len(),
            PixelData::U16(v) => v.len(),
            PixelData::I32(v) => v.len(),
            PixelData::U32(v) => v.len(),
            PixelData::F32(v) => v.len(),
            PixelData::F64(v) => v.len()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Samples as native endian bytes
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            PixelData::U8(v) => v.as_slice(),
            PixelData::I16(v) => bytemuck::cast_slice(v),
            PixelData::U16(v) => bytemuck::cast_slice(v),
            PixelData::I32(v) => bytemuck::cast_slice(v),
            PixelData::U32(v) => bytemuck::cast_slice(v),
            PixelData::F32(v) => bytemuck::cast_slice(v),
            PixelData::F64(v) => bytemuck::cast_slice(v)
        }
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        match self {
            PixelData::U8(v) => v.as_mut_slice(),
            PixelData::I16(v) => bytemuck::cast_slice_mut(v),
            PixelData::U16(v) => bytemuck::cast_slice_mut(v),
            PixelData::I32(v) => bytemuck::cast_slice_mut(v),
            PixelData::U32(v) => bytemuck::cast_slice_mut(v),
            PixelData::F32(v) => bytemuck::cast_slice_mut(v),
            PixelData::F64(v) => bytemuck::cast_slice_mut(v)
        }
    }
}

/// A scalar type an image can store
pub trait Sample: Pod + PartialEq + Debug + Send + Sync + 'static {
    const BIT_TYPE: BitType;

    fn into_pixel_data(samples: Vec<Self>) -> PixelData;

    /// The samples of `data` if it stores `Self`
    fn samples_of(data: &PixelData) -> Option<&[Self]>;
}

macro_rules! impl_sample {
    ($ty:ty, $variant:ident) => {
        impl Sample for $ty {
            const BIT_TYPE: BitType = BitType::$variant;

            fn into_pixel_data(samples: Vec<Self>) -> PixelData {
                PixelData::$variant(samples)
            }

            fn samples_of(data: &PixelData) -> Option<&[Self]> {
                match data {
                    PixelData::$variant(v) => Some(v.as_slice()),
                    _ => None
                }
            }
        }
    };
}

impl_sample!(u8, U8);
impl_sample!(i16, I16);
impl_sample!(u16, U16);
impl_sample!(i32, I32);
impl_sample!(u32, U32);
impl_sample!(f32, F32);
impl_sample!(f64, F64);

/// Position of an image inside its storage
///
/// Both values are counted in samples, not bytes.
/// Pixel `(x, y)` starts at sample `offset + y * row_stride + x * channels`
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Layout {
    offset:     usize,
    row_stride: usize
}

impl Layout {
    pub const fn new(offset: usize, row_stride: usize) -> Layout {
        Layout { offset, row_stride }
    }
    /// Layout of rows stored back to back with no padding
    pub const fn dense(width: usize, channels: usize) -> Layout {
        Layout {
            offset:     0,
            row_stride: width * channels
        }
    }
    pub const fn offset(&self) -> usize {
        self.offset
    }
    pub const fn row_stride(&self) -> usize {
        self.row_stride
    }
}

/// Represents a single image
#[derive(Clone, Debug)]
pub struct Image {
    data:     Arc<PixelData>,
    layout:   Layout,
    metadata: ImageMetadata
}

impl Image {
    /// Create an image from densely packed interleaved samples
    ///
    /// Pixels are expected to be interleaved according to number of components in the colorspace
    ///
    /// e.g if image is RGBA, pixels should be in the form of `[R,G,B,A,R,G,B,A]`
    ///
    /// # Errors
    /// - The colorspace is unknown
    /// - `data` does not hold exactly `width * height * components` samples
    pub fn new(
        data: PixelData, width: usize, height: usize, colorspace: ColorSpace
    ) -> Result<Image, ImageErrors> {
        let channels = channels_of(colorspace)?;
        let expected = checked_len(width, height, channels)?;

        if data.len() != expected {
            return Err(ImageErrors::DimensionsMisMatch(expected, data.len()));
        }
        let depth = data.bit_type();

        Ok(Image {
            data:     Arc::new(data),
            layout:   Layout::dense(width, channels),
            metadata: ImageMetadata::new(width, height, colorspace, depth)
        })
    }

    /// Create an image over existing storage addressed with `layout`
    ///
    /// # Errors
    /// - The row stride is smaller than a row of pixels
    /// - The last pixel would lie outside the storage
    pub fn with_layout(
        data: Arc<PixelData>, layout: Layout, width: usize, height: usize, colorspace: ColorSpace
    ) -> Result<Image, ImageErrors> {
        let channels = channels_of(colorspace)?;
        let row_len = checked_len(width, 1, channels)?;

        if layout.row_stride < row_len {
            return Err(ImageErrors::GenericString(format!(
                "Row stride {} cannot hold {} samples",
                layout.row_stride, row_len
            )));
        }
        if width != 0 && height != 0 {
            let required = (height - 1)
                .checked_mul(layout.row_stride)
                .and_then(|x| x.checked_add(layout.offset))
                .and_then(|x| x.checked_add(row_len))
                .ok_or(ImageErrors::GenericStr("Layout overflows usize"))?;

            if data.len() < required {
                return Err(ImageErrors::DimensionsMisMatch(required, data.len()));
            }
        }
        let depth = data.bit_type();

        Ok(Image {
            data,
            layout,
            metadata: ImageMetadata::new(width, height, colorspace, depth)
        })
    }

    /// Create an image from densely packed samples of any supported type
    pub fn from_samples<T: Sample>(
        samples: Vec<T>, width: usize, height: usize, colorspace: ColorSpace
    ) -> Result<Image, ImageErrors> {
        Image::new(T::into_pixel_data(samples), width, height, colorspace)
    }

    /// Create an image from raw u8 pixels
    ///
    /// # Example
    /// ```
    /// use zune_core::colorspace::ColorSpace;
    /// use zune_image::image::Image;
    ///
    /// let image = Image::from_u8(&[10, 20, 30, 40, 50, 60], 2, 1, ColorSpace::RGB).unwrap();
    /// assert_eq!(image.dimensions(), (2, 1));
    /// ```
    pub fn from_u8(
        pixels: &[u8], width: usize, height: usize, colorspace: ColorSpace
    ) -> Result<Image, ImageErrors> {
        Image::from_samples(pixels.to_vec(), width, height, colorspace)
    }

    /// Create an image from raw u16 pixels
    pub fn from_u16(
        pixels: &[u16], width: usize, height: usize, colorspace: ColorSpace
    ) -> Result<Image, ImageErrors> {
        Image::from_samples(pixels.to_vec(), width, height, colorspace)
    }

    /// Create an image from raw f32 pixels
    pub fn from_f32(
        pixels: &[f32], width: usize, height: usize, colorspace: ColorSpace
    ) -> Result<Image, ImageErrors> {
        Image::from_samples(pixels.to_vec(), width, height, colorspace)
    }

    /// A rectangular region of this image sharing its storage
    ///
    /// # Errors
    /// If the region does not lie completely inside the image
    pub fn view(
        &self, x: usize, y: usize, width: usize, height: usize
    ) -> Result<Image, ImageErrors> {
        let (image_width, image_height) = self.dimensions();

        let fits_x = x.checked_add(width).map_or(false, |end| end <= image_width);
        let fits_y = y.checked_add(height).map_or(false, |end| end <= image_height);

        if !(fits_x && fits_y) {
            return Err(ImageErrors::GenericString(format!(
                "View of {width}x{height} at ({x},{y}) is outside a {image_width}x{image_height} image"
            )));
        }
        let channels = self.colorspace().num_components();
        let offset = self.layout.offset + y * self.layout.row_stride + x * channels;

        let mut metadata = self.metadata.clone();
        metadata.width = width;
        metadata.height = height;

        Ok(Image {
            data: Arc::clone(&self.data),
            layout: Layout::new(offset, self.layout.row_stride),
            metadata
        })
    }

    /// Get image dimensions as a tuple of (width,height)
    pub const fn dimensions(&self) -> (usize, usize) {
        self.metadata.dimensions()
    }

    pub const fn colorspace(&self) -> ColorSpace {
        self.metadata.colorspace()
    }

    /// Get the type of the image samples
    pub const fn depth(&self) -> BitType {
        self.metadata.depth()
    }

    pub const fn metadata(&self) -> &ImageMetadata {
        &self.metadata
    }

    pub(crate) fn metadata_mut(&mut self) -> &mut ImageMetadata {
        &mut self.metadata
    }

    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// The whole storage this image addresses, views included
    pub fn pixel_data(&self) -> &PixelData {
        &self.data
    }

    /// Whether the samples are exactly `height` unpadded rows starting
    /// at the beginning of the storage
    pub fn is_dense(&self) -> bool {
        let (width, height) = self.dimensions();
        let row_len = width * self.colorspace().num_components();

        self.layout.offset == 0
            && self.layout.row_stride == row_len
            && self.data.len() == row_len * height
    }

    /// Bytes of row `y`, exactly `width * channels` samples
    ///
    /// # Panics
    /// If `y` is not less than the image height
    pub(crate) fn row_bytes(&self, y: usize) -> &[u8] {
        let size = self.depth().size_of();
        let row_len = self.dimensions().0 * self.colorspace().num_components();
        let start = (self.layout.offset + y * self.layout.row_stride) * size;

        &self.data.as_bytes()[start..start + row_len * size]
    }

    /// Samples of row `y`
    ///
    /// Returns `None` if `T` is not the stored sample type or `y` is out of bounds
    pub fn row<T: Sample>(&self, y: usize) -> Option<&[T]> {
        if y >= self.dimensions().1 {
            return None;
        }
        let samples = T::samples_of(&self.data)?;
        let row_len = self.dimensions().0 * self.colorspace().num_components();
        let start = self.layout.offset + y * self.layout.row_stride;

        samples.get(start..start + row_len)
    }

    /// Copy the image samples to a densely packed vector
    ///
    /// # Errors
    /// If `T` is not the stored sample type
    pub fn to_vec<T: Sample>(&self) -> Result<Vec<T>, ImageErrors> {
        if T::BIT_TYPE != self.depth() {
            return Err(ImageErrors::WrongBitType(T::BIT_TYPE, self.depth()));
        }
        let height = self.dimensions().1;
        let mut out = Vec::with_capacity(height * self.dimensions().0);

        for y in 0..height {
            if let Some(row) = self.row::<T>(y) {
                out.extend_from_slice(row);
            }
        }
        Ok(out)
    }

    /// A densely packed version of this image
    ///
    /// Shares storage with `self` if it already is dense
    pub fn to_dense(&self) -> Image {
        if self.is_dense() {
            return self.clone();
        }
        self.materialize(self.colorspace())
    }

    /// A densely packed copy of this image with the alpha channel removed
    ///
    /// Colorspaces without alpha behave like [`to_dense`](Image::to_dense)
    pub fn to_dense_without_alpha(&self) -> Image {
        let colorspace = self.colorspace();

        if !colorspace.has_alpha() {
            return self.to_dense();
        }
        self.materialize(colorspace.without_alpha())
    }

    /// Copy into fresh storage, keeping the leading channels of `colorspace`
    fn materialize(&self, colorspace: ColorSpace) -> Image {
        let (width, height) = self.dimensions();
        let size = self.depth().size_of();

        let pixel_in = self.colorspace().num_components() * size;
        let pixel_out = colorspace.num_components() * size;
        let row_out = width * pixel_out;

        let mut data = self
            .data
            .zeroed_like(width * height * colorspace.num_components());

        if row_out != 0 {
            let out = data.as_bytes_mut();

            for (y, out_row) in out.chunks_exact_mut(row_out).enumerate() {
                let in_row = self.row_bytes(y);

                if pixel_in == pixel_out {
                    out_row.copy_from_slice(in_row);
                } else {
                    // alpha is always the last channel
                    for (out_px, in_px) in out_row
                        .chunks_exact_mut(pixel_out)
                        .zip(in_row.chunks_exact(pixel_in))
                    {
                        out_px.copy_from_slice(&in_px[..pixel_out]);
                    }
                }
            }
        }

        let mut metadata = ImageMetadata::new(width, height, colorspace, self.depth());
        metadata.format = self.metadata.format;

        Image {
            data: Arc::new(data),
            layout: Layout::dense(width, colorspace.num_components()),
            metadata
        }
    }
}

fn channels_of(colorspace: ColorSpace) -> Result<usize, ImageErrors> {
    match colorspace.num_components() {
        0 => Err(ImageErrors::UnsupportedColorspace(
            colorspace,
            "image creation"
        )),
        channels => Ok(channels)
    }
}

fn checked_len(width: usize, height: usize, channels: usize) -> Result<usize, ImageErrors> {
    width
        .checked_mul(height)
        .and_then(|x| x.checked_mul(channels))
        .ok_or(ImageErrors::GenericStr("Image dimensions overflow usize"))
}
