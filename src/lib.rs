//! # hashtrace
//!
//! Synthetic datasets for hash-inversion experiments.
//!
//! This crate does two unrelated things, each behind a thin binary:
//!
//! 1. **Dataset generation** — sample random fixed-width bit-strings, push
//!    them through one of five selectable transformations (real SHA-256
//!    with internal trace capture, MD5, and three toy bit constructions),
//!    and write one CSV row of individual bit columns per sample.
//!
//! 2. **Component visualization** — load a boolean adjacency matrix over
//!    bit positions, keep the connected component containing the prediction
//!    target, and render it to a PNG.

use thiserror::Error as ThisError;

pub mod algo;
pub mod bits;
pub mod config;
pub mod dataset;
pub mod graph;
pub mod render;
pub mod sha256;

pub use algo::{HashAlgo, HashOutput};
pub use bits::BitString;
pub use config::{BIT_PRED, HASH_INPUT_NBITS, HASH_OUTPUT_NBITS};
pub use dataset::{dataset_path, generate, GeneratorConfig, GeneratorReport};
pub use graph::{BitGraph, ComponentSummary};
pub use render::render_png;
pub use sha256::{sha256_traced, Sha256Trace, TRACE_BITS_PER_BLOCK};

/// Errors across dataset generation and graph handling.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("hash algorithm \"{0}\" is not supported")]
    UnsupportedAlgorithm(String),

    #[error("hash input width {0} is not a multiple of 8")]
    InputWidth(usize),

    #[error("adjacency matrix row {row}: {reason}")]
    Matrix { row: usize, reason: String },

    #[error("bit {0} is not present in any graph component")]
    MissingReferenceBit(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
