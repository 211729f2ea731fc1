// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Writing finished images to disk.

use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::errors::RenderError;

/// Encode the image as a PNG at `path`, whatever its extension.
pub fn write_image(path: &Path, image: &RgbaImage) -> Result<(), RenderError> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|cause| RenderError::Image {
            path: path.display().to_string(),
            cause,
        })
}
