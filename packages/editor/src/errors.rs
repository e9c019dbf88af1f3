//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Snapshot serialization error: {0}")]
    Snapshot(#[from] serde_json::Error),
}
