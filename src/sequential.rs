// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The single-threaded renderer.  Walks every pixel of the plane,
//! maps it, colours it and writes it straight into the image.  This is
//! the reference the concurrent renderer is checked against.

use image::RgbaImage;
use num::Complex;

use crate::errors::RenderError;
use crate::escape::colour_at;
use crate::planes::PlaneMapper;

/// Render the viewport between `topleft` and `bottomright` into every
/// pixel of `image`.
pub fn render_image(
    image: &mut RgbaImage,
    topleft: Complex<f64>,
    bottomright: Complex<f64>,
    iterations: usize,
) -> Result<(), RenderError> {
    let plane = PlaneMapper::new(image.width(), image.height(), topleft, bottomright)?;
    render_plane(image, &plane, iterations)
}

/// Render an already constructed plane.  The image must be exactly the
/// size of the plane.
pub fn render_plane(
    image: &mut RgbaImage,
    plane: &PlaneMapper,
    iterations: usize,
) -> Result<(), RenderError> {
    plane.fits(image)?;
    for pixel in plane.pixels() {
        let point = plane.pixel_to_point(&pixel);
        image.put_pixel(pixel.0, pixel.1, colour_at(point, iterations));
    }
    Ok(())
}
