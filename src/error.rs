//! Error type shared by the whole crate.
//!
//! Every failure is fatal for the run. Variants fall into two kinds:
//! malformed input (bad CIDR text, undecodable records) and I/O (reading
//! the input stream, writing the report or an image).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    /// CIDR text that is not `a.b.c.d/len`.
    #[error("invalid CIDR '{input}': {reason}")]
    InvalidCidr { input: String, reason: String },

    /// Prefix length above 32.
    #[error("network length /{0} is too long")]
    InvalidPrefix(u8),

    /// A record that is not valid JSON or does not match the VPC shape.
    #[error("malformed record #{record} at '{path}': {source}")]
    MalformedRecord {
        record: usize,
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The JSON reader hit an I/O failure on the input stream.
    #[error("failed reading input: {0}")]
    Input(#[source] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("failed writing image {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl MapError {
    /// True for errors caused by bad input text rather than the environment.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            MapError::InvalidCidr { .. } | MapError::InvalidPrefix(_) | MapError::MalformedRecord { .. }
        )
    }

    /// True for failures reading the input or writing output.
    pub fn is_io(&self) -> bool {
        !self.is_malformed_input()
    }
}
