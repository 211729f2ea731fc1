// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The one error type of the renderer.  Configuration problems are
//! reported before any thread is started; everything else is either an
//! I/O failure on the way out or a render that did not finish.

use failure::Fail;
use num::Complex;

/// Everything that can go wrong between reading the configuration and
/// writing the image.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// The concurrent renderer was asked to run without workers.
    #[fail(display = "worker count must be at least 1")]
    NoWorkers,

    /// The pixel grid has no pixels.
    #[fail(display = "image dimensions must be non-zero, got {}x{}", width, height)]
    EmptyImage {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// The viewport has no area, or a corner is not a finite number.
    #[fail(display = "viewport {} to {} has no area", topleft, bottomright)]
    DegenerateViewport {
        /// The top-left corner as given.
        topleft: Complex<f64>,
        /// The bottom-right corner as given.
        bottomright: Complex<f64>,
    },

    /// The image handed to a renderer is not the size of its plane.
    #[fail(
        display = "image is {}x{} but the plane is {}x{}",
        image_width, image_height, plane_width, plane_height
    )]
    DimensionMismatch {
        /// Width of the image buffer.
        image_width: u32,
        /// Height of the image buffer.
        image_height: u32,
        /// Width of the integral plane.
        plane_width: u32,
        /// Height of the integral plane.
        plane_height: u32,
    },

    /// The result collector finished with pixels missing.
    #[fail(display = "render wrote {} of {} pixels", written, expected)]
    Incomplete {
        /// Pixels in the plane.
        expected: usize,
        /// Pixels the collector actually wrote.
        written: usize,
    },

    /// One of the render threads panicked.
    #[fail(display = "a render thread panicked")]
    ThreadPanicked,

    /// The image could not be encoded or written.
    #[fail(display = "could not write {}: {}", path, cause)]
    Image {
        /// Destination file.
        path: String,
        /// What the encoder reported.
        #[cause]
        cause: image::ImageError,
    },
}
