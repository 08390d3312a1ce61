//! Shared constants for the dataset generator and the graph tools.

use std::env;
use std::path::PathBuf;

/// Default directory for generated datasets, relative to the working
/// directory. Override with the `HASHTRACE_DATA_DIR` environment variable
/// or the `--data-dir` flag.
pub const DATA_DIR: &str = "data";

/// Environment variable consulted for the data directory.
pub const DATA_DIR_ENV: &str = "HASHTRACE_DATA_DIR";

/// Width of every hash input in bits. The SHA-256 path additionally
/// requires this to be a multiple of 8.
pub const HASH_INPUT_NBITS: usize = 64;

/// Width of every hash output in bits. All five transformations emit
/// exactly this many bits, zero-extended where the raw digest is shorter.
pub const HASH_OUTPUT_NBITS: usize = 256;

/// Bit position whose connected component the graph tools retain.
///
/// Dataset columns are hash bits first, input bits second, so position 256
/// is the first hash-input bit — the prediction target.
pub const BIT_PRED: usize = 256;

/// Resolve the data directory: environment override, then [`DATA_DIR`].
pub fn default_data_dir() -> PathBuf {
    match env::var(DATA_DIR_ENV) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(DATA_DIR),
    }
}
