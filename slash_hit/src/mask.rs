// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-pixel alpha buffers for targets.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

/// Error returned when an alpha buffer does not match the mask dimensions.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct MaskError {
    /// Requested mask width in pixels.
    pub width: u32,
    /// Requested mask height in pixels.
    pub height: u32,
    /// Length of the buffer that was supplied.
    pub len: usize,
}

impl fmt::Debug for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MaskError {{ width: {}, height: {}, len: {} }}",
            self.width, self.height, self.len
        )
    }
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "alpha buffer of {} bytes does not match a {}x{} mask",
            self.len, self.width, self.height
        )
    }
}

impl core::error::Error for MaskError {}

/// Row-major 8-bit alpha channel of a target's current texture.
///
/// Pixel `(x, y)` covers the half-open square `[x, x + 1) × [y, y + 1)` in
/// local coordinates, so a local point is mapped to a pixel by flooring.
#[derive(Clone, PartialEq, Eq)]
pub struct AlphaMask {
    width: u32,
    height: u32,
    alpha: Vec<u8>,
}

impl fmt::Debug for AlphaMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlphaMask")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl AlphaMask {
    /// Wraps an existing alpha buffer of exactly `width * height` bytes.
    ///
    /// # Errors
    ///
    /// - [`MaskError`]: returned when the buffer length does not match.
    pub fn new(width: u32, height: u32, alpha: Vec<u8>) -> Result<Self, MaskError> {
        let expected = (width as usize).checked_mul(height as usize);
        if expected != Some(alpha.len()) {
            return Err(MaskError {
                width,
                height,
                len: alpha.len(),
            });
        }
        Ok(Self {
            width,
            height,
            alpha,
        })
    }

    /// Builds a mask by evaluating `f(x, y)` for every pixel.
    #[must_use]
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> u8) -> Self {
        let mut alpha = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                alpha.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            alpha,
        }
    }

    /// Builds a mask with every pixel set to `alpha`.
    #[must_use]
    pub fn filled(width: u32, height: u32, alpha: u8) -> Self {
        Self {
            width,
            height,
            alpha: vec![alpha; width as usize * height as usize],
        }
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Alpha of pixel `(x, y)`, or `None` outside the mask.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.alpha
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Alpha under a local point, or `None` outside the mask.
    #[must_use]
    pub fn alpha_at(&self, local: Point) -> Option<u8> {
        let x = local.x.floor();
        let y = local.y.floor();
        let inside =
            x >= 0.0 && y >= 0.0 && x < f64::from(self.width) && y < f64::from(self.height);
        if !inside {
            return None;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "both coordinates were checked to lie inside the mask"
        )]
        let (px, py) = (x as u32, y as u32);
        self.pixel(px, py)
    }
}
