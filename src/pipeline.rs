// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The stages of the concurrent renderer.  Each stage is a plain
//! blocking function meant to run on its own thread, connected to its
//! neighbours by channels:
//!
//! ```text
//! produce --jobs--> work (x N) --results--> collect
//!                      |                       ^
//!                      +--done--> await_workers (closes results)
//! ```
//!
//! A stage ends its stream by dropping its sender.  The job stream
//! closes when `produce` runs out of pixels.  The result stream closes
//! when `await_workers` has seen every worker report done and drops the
//! last sender; workers drop their own result senders before they
//! report, so no result can arrive after the close.  Only `collect`
//! ever touches the image.

use crossbeam::channel::{Receiver, Sender};
use image::{Rgba, RgbaImage};
use log::{debug, trace, warn};
use num::Complex;

use crate::escape::colour_at;
use crate::planes::{Pixel, PlaneMapper};

/// One pixel to render and the point it maps to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WorkItem {
    /// Where the result goes.
    pub pixel: Pixel,
    /// What to evaluate.
    pub point: Complex<f64>,
}

/// One rendered pixel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderResult {
    /// Where the colour goes.
    pub pixel: Pixel,
    /// The evaluated colour.
    pub colour: Rgba<u8>,
}

/// Queue one work item per pixel of the plane, then close the queue by
/// dropping `jobs`.  Returns the number of items queued, which is the
/// size of the plane unless every worker went away early.
pub fn produce(plane: &PlaneMapper, jobs: Sender<WorkItem>) -> usize {
    let mut queued = 0;
    for pixel in plane.pixels() {
        let point = plane.pixel_to_point(&pixel);
        if jobs.send(WorkItem { pixel, point }).is_err() {
            warn!("no workers left, {} of {} items queued", queued, plane.len());
            break;
        }
        queued += 1;
    }
    trace!("work queue closed after {} items", queued);
    queued
}

/// A worker: evaluate items until the queue is closed and drained, then
/// release `results` and report `id` on `done`.  Returns the number of
/// items this worker evaluated.
pub fn work(
    id: usize,
    iterations: usize,
    jobs: Receiver<WorkItem>,
    results: Sender<RenderResult>,
    done: Sender<usize>,
) -> usize {
    debug!("worker {} started", id);
    let mut evaluated = 0;
    for job in jobs.iter() {
        let result = RenderResult {
            pixel: job.pixel,
            colour: colour_at(job.point, iterations),
        };
        if results.send(result).is_err() {
            warn!("worker {}: result collector is gone", id);
            break;
        }
        evaluated += 1;
    }
    // Our last result is already in the channel; let go of it before
    // telling the barrier we are finished.
    drop(results);
    debug!("worker {} done after {} items", id, evaluated);
    if done.send(id).is_err() {
        warn!("worker {}: nobody is waiting for done", id);
    }
    evaluated
}

/// The completion barrier.  Waits for `count` workers to report done,
/// then drops the last result sender, which closes the result stream.
/// If the done channel closes first (a worker died without reporting)
/// the stream is closed anyway so the collector can finish.  Returns
/// how many workers reported.
pub fn await_workers(count: usize, done: Receiver<usize>, results: Sender<RenderResult>) -> usize {
    let mut reported = 0;
    while reported < count {
        match done.recv() {
            Ok(id) => {
                reported += 1;
                trace!("worker {} reported ({}/{})", id, reported, count);
            }
            Err(_) => {
                warn!("only {} of {} workers reported done", reported, count);
                break;
            }
        }
    }
    drop(results);
    debug!("all workers accounted for, result stream closed");
    reported
}

/// The single writer.  Copies every result into the image until the
/// result stream is closed and drained.  Returns the number of pixels
/// written.
pub fn collect(image: &mut RgbaImage, results: Receiver<RenderResult>) -> usize {
    let mut written = 0;
    for result in results.iter() {
        image.put_pixel(result.pixel.0, result.pixel.1, result.colour);
        written += 1;
    }
    trace!("collector finished after {} pixels", written);
    written
}
