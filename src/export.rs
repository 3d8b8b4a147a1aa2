use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::canvas::Canvas;
use crate::error::ExportError;

/// Extension written by [`PngEncoder`] and appended to bare save paths.
pub const PNG_EXTENSION: &str = "png";

/// Writes a canvas to disk in some image format.
pub trait ImageEncoder {
    fn encode(&self, canvas: &Canvas, path: &Path) -> Result<(), ExportError>;
}

/// Lossless 8-bit RGB PNG via the `image` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngEncoder;

impl ImageEncoder for PngEncoder {
    fn encode(&self, canvas: &Canvas, path: &Path) -> Result<(), ExportError> {
        let io_err = |source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        canvas
            .to_rgb_image()
            .write_to(&mut writer, image::ImageFormat::Png)
            .map_err(|source| ExportError::Encode {
                path: path.to_path_buf(),
                source,
            })?;
        writer.flush().map_err(io_err)
    }
}

/// Append `.png` unless the file name already ends in it (any case).
///
/// Other extensions are kept and `.png` goes after them, so `art.jpg`
/// becomes `art.jpg.png`. A bare `.png` file name counts as having it.
pub fn with_png_extension(path: &Path) -> PathBuf {
    let suffix = format!(".{PNG_EXTENSION}");
    let is_png = path
        .file_name()
        .is_some_and(|name| name.to_string_lossy().to_ascii_lowercase().ends_with(&suffix));
    if is_png {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}
