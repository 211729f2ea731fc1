// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Colour-space helpers.

/// Standard hexagonal HSV to RGB conversion.  `h` is a fraction of a full
/// turn (0.0 to 1.0, so 120 degrees is 1/3), `s` and `v` run from 0.0 to
/// 1.0.  Each channel is rounded to the nearest byte.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    (channel(r), channel(g), channel(b))
}

#[inline]
fn channel(value: f64) -> u8 {
    (value * 255.0 + 0.5) as u8
}
