//! Error types for prediction processing.
//!
//! Decoding failures from [`crate::io`] are wrapped with the file or model
//! they came from, so a batch can report which prediction stopped and why.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while processing predictions or preparing inputs.
#[derive(Debug, Error)]
pub enum Error {
    /// A reader or writer failed outside any particular model.
    #[error(transparent)]
    Io(#[from] crate::io::Error),

    /// A file or directory could not be opened, created or listed.
    #[error("failed to access '{path}': {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Decoding one ranked model failed; processing of its prediction stops.
    #[error("failed to process {model_id} of prediction '{prediction}': {source}")]
    Model {
        prediction: String,
        model_id: String,
        #[source]
        source: crate::io::Error,
    },

    /// The ranking lists a model whose structure file is not on disk.
    #[error("structure file for {model_id} not found at '{path}'")]
    MissingModel { model_id: String, path: PathBuf },

    /// Neither the sibling nor the in-folder FASTA of a prediction exists.
    #[error("no FASTA file found for prediction '{prediction}'")]
    MissingFasta {
        prediction: String,
        searched: Vec<PathBuf>,
    },

    /// The given path has no final component to name the prediction by.
    #[error("'{0}' does not name a prediction folder")]
    InvalidPredictionFolder(PathBuf),

    /// The configuration file is not valid TOML or has unknown keys.
    #[error("failed to parse configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    /// Creates a [`File`](Error::File) error for `path`.
    pub fn file(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::File {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a [`Model`](Error::Model) error.
    pub fn model(
        prediction: impl Into<String>,
        model_id: impl Into<String>,
        source: crate::io::Error,
    ) -> Self {
        Self::Model {
            prediction: prediction.into(),
            model_id: model_id.into(),
            source,
        }
    }
}
