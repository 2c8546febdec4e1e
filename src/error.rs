//! Error types for nodejob.
//!
//! All errors are represented by the `NodeJobError` enum. `get_node_job_input`
//! never surfaces these: it collapses failures into an absent value.

use std::string::FromUtf8Error;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all nodejob operations.
#[derive(Deserialize, Serialize, Error, Debug, Clone, PartialEq)]
pub enum NodeJobError {
    /// The raw batch could not be decoded.
    #[error("failed to decode node job input: {0}")]
    Decode(String),

    /// The batch could not be encoded.
    #[error("failed to encode node job input: {0}")]
    Encode(String),

    /// Configuration parsing errors.
    #[error("{0}")]
    Config(String),

    /// An action or observe payload is not valid base64 text.
    #[error("invalid script payload: {0}")]
    Script(String),

    /// Another job is already active on the node.
    #[error("another job({running}) is running on node {node}, try later")]
    NodeBusy {
        node: String,
        running: String,
    },

    /// I/O operation errors.
    #[error("{0}")]
    IoError(String),
}

impl From<std::io::Error> for NodeJobError {
    fn from(error: std::io::Error) -> Self {
        NodeJobError::IoError(error.to_string())
    }
}

impl From<FromUtf8Error> for NodeJobError {
    fn from(_: FromUtf8Error) -> Self {
        NodeJobError::Script("script is not utf-8 text".to_string())
    }
}

impl From<base64::DecodeError> for NodeJobError {
    fn from(error: base64::DecodeError) -> Self {
        NodeJobError::Script(error.to_string())
    }
}

impl From<serde_json::Error> for NodeJobError {
    fn from(error: serde_json::Error) -> Self {
        NodeJobError::Decode(error.to_string())
    }
}

impl From<toml::de::Error> for NodeJobError {
    fn from(error: toml::de::Error) -> Self {
        NodeJobError::Config(error.to_string())
    }
}
