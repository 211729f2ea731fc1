use image::RgbaImage;
use num::Complex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use mandelbrot::escape::OPAQUE_BLACK;
use mandelbrot::{render_image, render_image_concurrent, RenderOptions, MAX_ITERATIONS};

fn default_view() -> (Complex<f64>, Complex<f64>) {
    (Complex::new(-2.2, -1.2), Complex::new(1.0, 1.2))
}

#[test]
fn full_size_render_is_complete_and_identical() {
    let (tl, br) = default_view();
    let mut sequential = RgbaImage::new(800, 600);
    let mut concurrent = RgbaImage::new(800, 600);

    render_image(&mut sequential, tl, br, MAX_ITERATIONS).unwrap();
    let options = RenderOptions::default().with_workers(num_cpus::get().max(1));
    render_image_concurrent(&mut concurrent, tl, br, &options).unwrap();

    // A fresh buffer is transparent black; every computed pixel is opaque.
    assert!(concurrent.pixels().all(|p| p.0[3] == 255));
    assert!(concurrent.pixels().any(|p| *p == OPAQUE_BLACK));
    assert_eq!(sequential, concurrent);
}

#[test]
fn any_worker_count_matches_one_worker() {
    let (tl, br) = default_view();
    let base = RenderOptions::default().with_iterations(500);
    let mut reference = RgbaImage::new(37, 23);
    render_image_concurrent(&mut reference, tl, br, &base.with_workers(1)).unwrap();

    for workers in 2..=9 {
        let mut image = RgbaImage::new(37, 23);
        render_image_concurrent(&mut image, tl, br, &base.with_workers(workers)).unwrap();
        assert_eq!(image, reference, "{} workers", workers);
    }
}

#[test]
fn random_viewports_agree_across_renderers() {
    let mut rng = StdRng::seed_from_u64(0x6d61_6e64);
    for _ in 0..12 {
        let tl = Complex::new(rng.gen_range(-2.5..0.0), rng.gen_range(-1.5..0.0));
        let br = Complex::new(
            tl.re + rng.gen_range(0.01..2.5),
            tl.im + rng.gen_range(0.01..2.5),
        );
        let (width, height) = (rng.gen_range(1..40), rng.gen_range(1..40));
        let options = RenderOptions::default()
            .with_iterations(rng.gen_range(1..400))
            .with_workers(rng.gen_range(1..8))
            .with_queue_depth(rng.gen_range(0..16));

        let mut sequential = RgbaImage::new(width, height);
        let mut concurrent = RgbaImage::new(width, height);
        render_image(&mut sequential, tl, br, options.iterations).unwrap();
        render_image_concurrent(&mut concurrent, tl, br, &options).unwrap();
        assert_eq!(sequential, concurrent, "{} to {} with {:?}", tl, br, options);
    }
}

#[test]
fn one_pixel_image() {
    let (tl, br) = default_view();
    let mut sequential = RgbaImage::new(1, 1);
    let mut concurrent = RgbaImage::new(1, 1);
    render_image(&mut sequential, tl, br, 100).unwrap();
    render_image_concurrent(&mut concurrent, tl, br, &RenderOptions::default().with_iterations(100))
        .unwrap();
    assert_eq!(sequential, concurrent);
    assert_eq!(sequential.get_pixel(0, 0).0[3], 255);
}
