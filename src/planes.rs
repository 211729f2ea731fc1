// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a rectangle on the complex plane with an arbitrary pair of
//! corners defining the top-left and bottom-right corners of the
//! viewport.
use image::RgbaImage;
use itertools::iproduct;
use num::Complex;

use crate::errors::RenderError;

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0.  Both values must be non-zero.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub u32, pub u32);

/// Describes the top-left corner and bottom-right corner of the
/// viewport on the complex plane, treating the real part of each
/// value as the x-component and the imaginary part of each value as
/// the y-component.  "Top" is wherever pixel row zero lands; nothing
/// requires the imaginary axis to point up.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexPlane(pub Complex<f64>, pub Complex<f64>);

/// Describes the x, y of a pixel in the integral plane.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pixel(pub u32, pub u32);

/// Contains the definitions of two planes: an integral cartesian plane,
/// and a complex cartesian plane.  Maps pixels from the one to points
/// in the other.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    /// The size of the integral cartesian plane.
    pub integral_plane: IntegralPlane,
    /// The two corners of the viewport, top-left and bottom-right.
    pub complex_plane: ComplexPlane,
    // bottomright - topleft, per axis.
    extent: Complex<f64>,
}

impl PlaneMapper {
    /// Constructor.  Takes the size of the integral plane and the two
    /// corners of the viewport.  Fails if the grid has no pixels or the
    /// viewport has no area.
    pub fn new(
        width: u32,
        height: u32,
        topleft: Complex<f64>,
        bottomright: Complex<f64>,
    ) -> Result<PlaneMapper, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyImage { width, height });
        }

        let extent = bottomright - topleft;
        let usable = |d: f64| d.is_finite() && d != 0.0;
        if !usable(extent.re) || !usable(extent.im) {
            return Err(RenderError::DegenerateViewport {
                topleft,
                bottomright,
            });
        }

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            complex_plane: ComplexPlane(topleft, bottomright),
            extent,
        })
    }

    /// Width of the integral plane.
    pub fn width(&self) -> u32 {
        self.integral_plane.0
    }

    /// Height of the integral plane.
    pub fn height(&self) -> u32 {
        self.integral_plane.1
    }

    /// The total number of points in the integral grid.
    pub fn len(&self) -> usize {
        self.integral_plane.0 as usize * self.integral_plane.1 as usize
    }

    /// Describes that the integral plane is of a size.  Always false for
    /// a constructed mapper.
    pub fn is_empty(&self) -> bool {
        self.integral_plane.0 == 0 || self.integral_plane.1 == 0
    }

    /// Given a pixel on the integral cartesian plane, return the
    /// complex number at the equivalent location in the viewport.
    /// Linear on each axis; the operations are always done in the same
    /// order so that every caller gets the same bits for the same pixel.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        let origin = self.complex_plane.0;
        Complex::new(
            origin.re + self.extent.re * f64::from(pixel.0) / f64::from(self.integral_plane.0),
            origin.im + self.extent.im * f64::from(pixel.1) / f64::from(self.integral_plane.1),
        )
    }

    /// Every pixel of the integral plane exactly once, column by column.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> {
        iproduct!(0..self.integral_plane.0, 0..self.integral_plane.1).map(|(x, y)| Pixel(x, y))
    }

    /// Checks that an image buffer has exactly the size of the integral
    /// plane, so every pixel the mapper yields can be written to it.
    pub fn fits(&self, image: &RgbaImage) -> Result<(), RenderError> {
        let (image_width, image_height) = image.dimensions();
        if image_width != self.integral_plane.0 || image_height != self.integral_plane.1 {
            return Err(RenderError::DimensionMismatch {
                image_width,
                image_height,
                plane_width: self.integral_plane.0,
                plane_height: self.integral_plane.1,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn planemapper_fails_on_empty_grid() {
        let pm = PlaneMapper::new(0, 4, Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0));
        match pm {
            Err(RenderError::EmptyImage { width, height }) => assert_eq!((width, height), (0, 4)),
            other => panic!("expected EmptyImage, got {:?}", other),
        }
        assert!(PlaneMapper::new(4, 0, Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0)).is_err());
    }

    #[test]
    fn planemapper_fails_on_flat_viewport() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-1.0, 1.0), Complex::new(1.0, 1.0));
        assert!(matches!(pm, Err(RenderError::DegenerateViewport { .. })));
        let pm = PlaneMapper::new(4, 4, Complex::new(1.0, -1.0), Complex::new(1.0, 1.0));
        assert!(matches!(pm, Err(RenderError::DegenerateViewport { .. })));
    }

    #[test]
    fn planemapper_fails_on_non_finite_corner() {
        let pm = PlaneMapper::new(4, 4, Complex::new(f64::NAN, -1.0), Complex::new(1.0, 1.0));
        assert!(pm.is_err());
        let pm = PlaneMapper::new(4, 4, Complex::new(-1.0, -1.0), Complex::new(1.0, f64::INFINITY));
        assert!(pm.is_err());
    }

    #[test]
    fn planemapper_passes_on_good_shape() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0));
        assert!(pm.is_ok());
    }

    #[test]
    fn planemapper_accepts_either_orientation() {
        // Imaginary part growing downwards, as in the default viewport.
        let pm = PlaneMapper::new(8, 6, Complex::new(-2.2, -1.2), Complex::new(1.0, 1.2));
        assert!(pm.is_ok());
        let pm = PlaneMapper::new(8, 6, Complex::new(1.0, 1.2), Complex::new(-2.2, -1.2));
        assert!(pm.is_ok());
    }

    #[test]
    fn pixel_to_point_on_positive_planes() {
        let pm = PlaneMapper::new(5, 5, Complex::new(0.0, 0.0), Complex::new(5.0, 5.0)).unwrap();
        assert_eq!(pm.pixel_to_point(&Pixel(0, 0)), Complex::new(0.0, 0.0));
        assert_eq!(pm.pixel_to_point(&Pixel(2, 2)), Complex::new(2.0, 2.0));
        assert_eq!(pm.pixel_to_point(&Pixel(4, 4)), Complex::new(4.0, 4.0));
    }

    #[test]
    fn pixel_to_points_on_mixed_planes() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0)).unwrap();
        assert_eq!(pm.pixel_to_point(&Pixel(2, 2)), Complex::new(0.0, 0.0));
        assert_eq!(pm.pixel_to_point(&Pixel(0, 0)), Complex::new(-2.0, -2.0));
        assert_eq!(pm.pixel_to_point(&Pixel(3, 1)), Complex::new(1.0, -1.0));
    }

    #[test]
    fn pixel_to_point_axes_are_independent() {
        let pm = PlaneMapper::new(4, 2, Complex::new(0.0, 10.0), Complex::new(8.0, 0.0)).unwrap();
        assert_eq!(pm.pixel_to_point(&Pixel(1, 0)), Complex::new(2.0, 10.0));
        assert_eq!(pm.pixel_to_point(&Pixel(0, 1)), Complex::new(0.0, 5.0));
    }

    #[test]
    fn pixel_to_point_matches_linear_formula() {
        let (tl, br) = (Complex::new(-2.2, -1.2), Complex::new(1.0, 1.2));
        let pm = PlaneMapper::new(800, 600, tl, br).unwrap();
        let (x, y) = (123u32, 456u32);
        let re = tl.re + (br.re - tl.re) * f64::from(x) / 800.0;
        let im = tl.im + (br.im - tl.im) * f64::from(y) / 600.0;
        let point = pm.pixel_to_point(&Pixel(x, y));
        assert_eq!(point.re.to_bits(), re.to_bits());
        assert_eq!(point.im.to_bits(), im.to_bits());
    }

    #[test]
    fn pixels_cover_the_plane_once() {
        let pm = PlaneMapper::new(7, 3, Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0)).unwrap();
        let pixels: Vec<Pixel> = pm.pixels().collect();
        assert_eq!(pixels.len(), pm.len());
        let distinct: HashSet<Pixel> = pixels.iter().cloned().collect();
        assert_eq!(distinct.len(), 21);
        assert!(pixels.iter().all(|p| p.0 < 7 && p.1 < 3));
        assert_eq!(pixels[0], Pixel(0, 0));
        assert_eq!(pixels[1], Pixel(0, 1));
    }

    #[test]
    fn len_and_is_empty() {
        let pm = PlaneMapper::new(800, 600, Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0)).unwrap();
        assert_eq!(pm.len(), 480_000);
        assert!(!pm.is_empty());
        assert_eq!((pm.width(), pm.height()), (800, 600));
    }

    #[test]
    fn fits_checks_image_size() {
        let pm = PlaneMapper::new(4, 3, Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0)).unwrap();
        assert!(pm.fits(&RgbaImage::new(4, 3)).is_ok());
        assert!(matches!(
            pm.fits(&RgbaImage::new(3, 4)),
            Err(RenderError::DimensionMismatch { .. })
        ));
    }
}
