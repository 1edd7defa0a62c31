//! Application errors

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    #[error("failed to read font {}: {source}", path.display())]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("window error: {0}")]
    Window(#[from] eframe::Error),
}
