use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlicerError {
    #[error("filename \"{filename}\" does not match <source>_<industry>.<ext>")]
    Naming { filename: String },

    #[error("could not decode image {}: {source}", path.display())]
    ImageOpen {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("could not write tile {}: {source}", path.display())]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
