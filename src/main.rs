// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fs::File;
use std::path::Path;
use std::time::Instant;

use env_logger::{Env, Target};
use image::RgbaImage;
use log::{error, info};

use mandelbrot::config::Config;
use mandelbrot::output::write_image;
use mandelbrot::{render_image, render_image_concurrent, RenderError};

/// Log records go to the log file; if it cannot be created they go to
/// stderr instead.  RUST_LOG overrides the default "info" filter.
fn init_logging(path: &Path) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    builder.format_timestamp_micros();
    match File::create(path) {
        Ok(file) => {
            builder.target(Target::Pipe(Box::new(file)));
        }
        Err(e) => eprintln!(
            "Could not create log file {}: {}; logging to stderr",
            path.display(),
            e
        ),
    }
    builder.init();
}

fn run(config: &Config) -> Result<(), RenderError> {
    info!("Number of available cores: {}", num_cpus::get());

    let mut image = RgbaImage::new(config.width, config.height);
    let mut concurrent_image = RgbaImage::new(config.width, config.height);

    info!("rendering sequentially");
    let start = Instant::now();
    render_image(
        &mut image,
        config.topleft,
        config.bottomright,
        config.options.iterations,
    )?;
    info!("sequential render took {:?}", start.elapsed());
    write_image(&config.output, &image)?;
    info!("wrote {}", config.output.display());

    info!(
        "rendering concurrently with {} workers",
        config.options.workers
    );
    let start = Instant::now();
    render_image_concurrent(
        &mut concurrent_image,
        config.topleft,
        config.bottomright,
        &config.options,
    )?;
    info!("concurrent render took {:?}", start.elapsed());
    write_image(&config.concurrent_output, &concurrent_image)?;
    info!("wrote {}", config.concurrent_output.display());

    Ok(())
}

fn main() {
    let config = Config::from_args(std::env::args_os()).unwrap_or_else(|e| e.exit());
    init_logging(&config.log);

    if let Err(e) = run(&config) {
        error!("Render failure: {}", e);
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
