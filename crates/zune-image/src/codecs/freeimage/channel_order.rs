/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Channel order of every colorspace the adapter can move
//!
//! A permutation is indexed by the channel position inside an image pixel
//! and gives the channel position inside a native pixel.
//!
//! Native bitmaps always lay color out red first or blue first, so a colorspace
//! has two permutations, the plain one for red first storage and the
//! swapped one for blue first storage.
use zune_core::colorspace::ColorSpace;

/// Plain and swapped permutation of one colorspace
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ChannelOrder {
    plain:   &'static [usize],
    swapped: &'static [usize]
}

const GRAY: ChannelOrder = ChannelOrder {
    plain:   &[0],
    swapped: &[0]
};
const TWO_CHANNELS: ChannelOrder = ChannelOrder {
    plain:   &[0, 1],
    swapped: &[0, 1]
};
const RGB: ChannelOrder = ChannelOrder {
    plain:   &[0, 1, 2],
    swapped: &[2, 1, 0]
};
const BGR: ChannelOrder = ChannelOrder {
    plain:   &[2, 1, 0],
    swapped: &[0, 1, 2]
};
const RGBA: ChannelOrder = ChannelOrder {
    plain:   &[0, 1, 2, 3],
    swapped: &[2, 1, 0, 3]
};
const BGRA: ChannelOrder = ChannelOrder {
    plain:   &[2, 1, 0, 3],
    swapped: &[0, 1, 2, 3]
};

/// Channel order of `colorspace`, `None` for colorspaces the adapter does not move
pub const fn channel_order(colorspace: ColorSpace) -> Option<ChannelOrder> {
    match colorspace {
        ColorSpace::Luma | ColorSpace::BW => Some(GRAY),
        ColorSpace::RG => Some(TWO_CHANNELS),
        ColorSpace::RGB => Some(RGB),
        ColorSpace::BGR => Some(BGR),
        ColorSpace::RGBA | ColorSpace::RGBP => Some(RGBA),
        ColorSpace::BGRA | ColorSpace::BGRP => Some(BGRA),
        _ => None
    }
}

impl ChannelOrder {
    /// Permutation for a native bitmap, `blue_first` selects the swapped one
    pub const fn for_native(&self, blue_first: bool) -> &'static [usize] {
        if blue_first {
            self.swapped
        } else {
            self.plain
        }
    }
}
