//! Errors of the command-line program.

use displaydoc::Display;
use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors of the command-line program.
#[derive(Debug, Display, Error)]
pub(crate) enum Error {
    /// {0}
    Automaton(#[from] ternca_lib::Error),
    /// I/O error: {0}
    Io(#[from] io::Error),
    /// Invalid JSON: {0}
    Json(#[from] serde_json::Error),
    /// Invalid YAML: {0}
    Yaml(#[from] serde_yaml::Error),
    /// Invalid TOML: {0}
    Toml(#[from] toml::de::Error),
    /// Unable to encode the image: {0}
    Png(#[from] png::EncodingError),
    /// The field has no cells and cannot be drawn as an image.
    EmptyImage,
    /// The field is too large to be drawn as an image: {0} x {1}.
    ImageSize(usize, usize),
    /// Unknown config file format: {0:?}. Use .json, .yaml, .yml or .toml.
    UnknownFormat(PathBuf),
}
