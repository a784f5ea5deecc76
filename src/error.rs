use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single animation. None of these abort a batch.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("no frames found for {animation} in {}", dir.display())]
    NoFrames { animation: String, dir: PathBuf },

    #[error("{animation} is missing frames {indices:?}")]
    MissingFrames { animation: String, indices: Vec<u32> },

    #[error("failed to decode frame at {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write sprite sheet at {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode sprite sheet at {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: png::EncodingError,
    },
}
