use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the simulation core and its image export.
/// Every variant is fatal to the running application.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid grid dimensions {width}x{height}: both must be non-zero")]
    InvalidDimensions { width: usize, height: usize },

    #[error("failed to write snapshot {}", path.display())]
    Snapshot {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
