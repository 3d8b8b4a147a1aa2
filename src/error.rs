use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while exporting the canvas to an image file
#[derive(Debug, Error)]
pub enum ExportError {
    /// The file could not be created or written
    #[error("could not write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The codec rejected the pixel data or failed while writing
    #[error("could not encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl ExportError {
    /// Path the export was aimed at.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::Encode { path, .. } => path,
        }
    }
}
