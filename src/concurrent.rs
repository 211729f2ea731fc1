// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The concurrent renderer.  Fans the pixels of the plane out to a
//! fixed pool of worker threads and fans the colours back in through a
//! single collector thread, which is the only thread holding the image.
//! See [`pipeline`](crate::pipeline) for the stages themselves.

use crossbeam::channel::{bounded, unbounded};
use image::RgbaImage;
use log::debug;
use num::Complex;

use crate::errors::RenderError;
use crate::options::RenderOptions;
use crate::pipeline;
use crate::planes::PlaneMapper;

/// Render the viewport between `topleft` and `bottomright` into every
/// pixel of `image` using `options.workers` threads.  Blocks until the
/// image is complete.
pub fn render_image_concurrent(
    image: &mut RgbaImage,
    topleft: Complex<f64>,
    bottomright: Complex<f64>,
    options: &RenderOptions,
) -> Result<(), RenderError> {
    options.validate()?;
    let plane = PlaneMapper::new(image.width(), image.height(), topleft, bottomright)?;
    render_plane_concurrent(image, &plane, options)
}

/// Render an already constructed plane.  The image must be exactly the
/// size of the plane.
pub fn render_plane_concurrent(
    image: &mut RgbaImage,
    plane: &PlaneMapper,
    options: &RenderOptions,
) -> Result<(), RenderError> {
    options.validate()?;
    plane.fits(image)?;

    let expected = plane.len();
    let workers = options.workers;
    let iterations = options.iterations;
    debug!(
        "rendering {}x{} with {} workers, queue depth {}",
        plane.width(),
        plane.height(),
        workers,
        options.queue_depth
    );

    let (job_tx, job_rx) = bounded(options.queue_depth);
    let (result_tx, result_rx) = unbounded();
    let (done_tx, done_rx) = unbounded();
    let (finished_tx, finished_rx) = bounded(1);

    let finished = crossbeam::scope(|scope| {
        scope.spawn(move |_| {
            let written = pipeline::collect(image, result_rx);
            let _ = finished_tx.send(written);
        });

        for id in 0..workers {
            let jobs = job_rx.clone();
            let results = result_tx.clone();
            let done = done_tx.clone();
            scope.spawn(move |_| pipeline::work(id, iterations, jobs, results, done));
        }
        // From here on the workers own the only job receivers and done
        // senders, and the barrier owns the last result sender.
        drop(job_rx);
        drop(done_tx);
        scope.spawn(move |_| pipeline::await_workers(workers, done_rx, result_tx));
        scope.spawn(move |_| pipeline::produce(plane, job_tx));

        finished_rx.recv().ok()
    })
    .map_err(|_| RenderError::ThreadPanicked)?;

    match finished {
        Some(written) if written == expected => Ok(()),
        Some(written) => Err(RenderError::Incomplete { expected, written }),
        None => Err(RenderError::ThreadPanicked),
    }
}
