// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command-line configuration.  Every flag defaults to the value the
//! renderer has always used, so running without arguments renders the
//! classic 800x600 view with four workers.

use std::ffi::OsString;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{App, Arg, ArgMatches, ErrorKind};
use num::Complex;

use crate::options::RenderOptions;

const OUTPUT: &str = "output";
const CONCURRENT_OUTPUT: &str = "concurrent-output";
const LOG: &str = "log";
const SIZE: &str = "size";
const TOPLEFT: &str = "topleft";
const BOTTOMRIGHT: &str = "bottomright";
const THREADS: &str = "threads";
const ITERATIONS: &str = "iterations";
const QUEUE_DEPTH: &str = "queue-depth";

const MAX_THREADS: usize = 256;
const MAX_QUEUE_DEPTH: usize = 65_536;

/// Given a string and a separator, returns the two values
/// separated by the separator.
pub fn parse_pair<T: FromStr>(s: &str, separator: char) -> Option<(T, T)> {
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

/// A specific implementation of parse_pair using a comma and expecting
/// floating point numbers.
pub fn parse_complex(s: &str) -> Option<Complex<f64>> {
    parse_pair(s, ',').map(|(re, im)| Complex { re, im })
}

fn validate_complex(s: &str, err: &str) -> Result<(), String> {
    match parse_complex(s) {
        Some(c) if c.re.is_finite() && c.im.is_finite() => Ok(()),
        _ => Err(err.to_string()),
    }
}

fn validate_size(s: &str) -> Result<(), String> {
    match parse_pair::<u32>(s, 'x') {
        Some((w, h)) if w > 0 && h > 0 => Ok(()),
        Some(_) => Err("Image width and height must be at least 1".to_string()),
        None => Err("Could not parse output image size".to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

/// The argument parser.
pub fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("mandelbrot")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Escape-time Mandelbrot renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value("image.png")
                .help("Output file for the sequential render"),
        )
        .arg(
            Arg::with_name(CONCURRENT_OUTPUT)
                .long(CONCURRENT_OUTPUT)
                .short("c")
                .takes_value(true)
                .default_value("concurrent_image.png")
                .help("Output file for the concurrent render"),
        )
        .arg(
            Arg::with_name(LOG)
                .long(LOG)
                .takes_value(true)
                .default_value("logfile")
                .help("Log file"),
        )
        .arg(
            Arg::with_name(SIZE)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("800x600")
                .validator(|s| validate_size(&s))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(TOPLEFT)
                .long(TOPLEFT)
                .short("l")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2.2,-1.2")
                .validator(|s| validate_complex(&s, "Could not parse top left corner"))
                .help("Top left corner of the viewport, as RE,IM"),
        )
        .arg(
            Arg::with_name(BOTTOMRIGHT)
                .long(BOTTOMRIGHT)
                .short("r")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("1.0,1.2")
                .validator(|s| validate_complex(&s, "Could not parse bottom right corner"))
                .help("Bottom right corner of the viewport, as RE,IM"),
        )
        .arg(
            Arg::with_name(THREADS)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("4")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        MAX_THREADS,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", MAX_THREADS),
                    )
                })
                .help("Number of workers in the concurrent render"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("2000")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        200_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 200000",
                    )
                })
                .help("Maximum iterations per point"),
        )
        .arg(
            Arg::with_name(QUEUE_DEPTH)
                .long(QUEUE_DEPTH)
                .short("q")
                .takes_value(true)
                .default_value("0")
                .validator(|s| {
                    validate_range(
                        &s,
                        0,
                        MAX_QUEUE_DEPTH,
                        "Could not parse queue depth",
                        &format!("Queue depth must be between 0 and {}", MAX_QUEUE_DEPTH),
                    )
                })
                .help("Work items allowed to wait for a worker"),
        )
}

/// Everything the binary needs to know to run.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Where the sequential render is written.
    pub output: PathBuf,
    /// Where the concurrent render is written.
    pub concurrent_output: PathBuf,
    /// Where log records go.
    pub log: PathBuf,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Top left corner of the viewport.
    pub topleft: Complex<f64>,
    /// Bottom right corner of the viewport.
    pub bottomright: Complex<f64>,
    /// Iterations, workers and queue depth.
    pub options: RenderOptions,
}

impl Config {
    /// Parse a full argument list, program name first.
    pub fn from_args<I, T>(args: I) -> Result<Config, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = app().get_matches_from_safe(args)?;
        Config::from_matches(&matches)
    }

    /// Build a configuration from matches produced by [`app`].
    pub fn from_matches(matches: &ArgMatches) -> Result<Config, clap::Error> {
        let (width, height) = value(matches, SIZE, |s| parse_pair(s, 'x'))?;
        Ok(Config {
            output: value(matches, OUTPUT, |s| Some(PathBuf::from(s)))?,
            concurrent_output: value(matches, CONCURRENT_OUTPUT, |s| Some(PathBuf::from(s)))?,
            log: value(matches, LOG, |s| Some(PathBuf::from(s)))?,
            width,
            height,
            topleft: value(matches, TOPLEFT, parse_complex)?,
            bottomright: value(matches, BOTTOMRIGHT, parse_complex)?,
            options: RenderOptions {
                iterations: value(matches, ITERATIONS, |s| s.parse().ok())?,
                workers: value(matches, THREADS, |s| s.parse().ok())?,
                queue_depth: value(matches, QUEUE_DEPTH, |s| s.parse().ok())?,
            },
        })
    }
}

fn value<T, F>(matches: &ArgMatches, name: &str, parse: F) -> Result<T, clap::Error>
where
    F: Fn(&str) -> Option<T>,
{
    matches.value_of(name).and_then(parse).ok_or_else(|| {
        clap::Error::with_description(
            &format!("Invalid value for --{}", name),
            ErrorKind::InvalidValue,
        )
    })
}
