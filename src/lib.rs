#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points `c` on the complex plane
//! for which `z <- z^2 + c`, started at zero, stays bounded.  The
//! "escape time" of a point outside the set is the iteration at which
//! `|z|` first exceeds a bound; colouring each pixel by that time draws
//! the familiar banded image around the black heart of the set.
//!
//! Two renderers produce the same image.  [`render_image`] walks the
//! pixels on the calling thread.  [`render_image_concurrent`] pushes one
//! work item per pixel through a channel to a fixed pool of workers and
//! funnels their colours back to a single collector thread, which is
//! the only code that ever writes to the image.

pub mod colour;
pub mod concurrent;
pub mod config;
pub mod errors;
pub mod escape;
pub mod options;
pub mod output;
pub mod pipeline;
pub mod planes;
pub mod sequential;

pub use concurrent::render_image_concurrent;
pub use errors::RenderError;
pub use escape::{evaluate, MAX_ITERATIONS};
pub use options::RenderOptions;
pub use planes::PlaneMapper;
pub use sequential::render_image;
