//! Dataset generation: seeded sampling, transformation, CSV emission.
//!
//! Row layout is fixed: 256 hash-output bits, then the input bits (the
//! ground truth), then any internal trace bits — each bit one
//! comma-separated '0'/'1' column, no header.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::algo::HashAlgo;
use crate::bits::BitString;
use crate::config::HASH_INPUT_NBITS;
use crate::{Error, Result};

/// Parameters of one generation run.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub num_samples: u64,
    pub algo: HashAlgo,
    pub seed: u64,
    pub data_dir: PathBuf,
}

/// What a finished run produced.
#[derive(Clone, Debug)]
pub struct GeneratorReport {
    pub path: PathBuf,
    pub samples: u64,
    /// Bit columns per row (hash + input + internals).
    pub columns: usize,
}

/// Output file for a given algorithm and sample count.
pub fn dataset_path(data_dir: &Path, algo: HashAlgo, num_samples: u64) -> PathBuf {
    data_dir.join(format!("{}-{}.csv", algo.name(), num_samples))
}

/// Run the generator: `num_samples` rows into the derived output file,
/// overwriting any previous dataset with the same parameters.
pub fn generate(cfg: &GeneratorConfig) -> Result<GeneratorReport> {
    // SHA-256 packs the input into whole bytes; fail before opening the
    // output rather than after a partial write.
    if cfg.algo == HashAlgo::Sha256 && HASH_INPUT_NBITS % 8 != 0 {
        return Err(Error::InputWidth(HASH_INPUT_NBITS));
    }

    fs::create_dir_all(&cfg.data_dir)?;
    let path = dataset_path(&cfg.data_dir, cfg.algo, cfg.num_samples);
    debug!("writing dataset to {}", path.display());

    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let mut writer = BufWriter::new(File::create(&path)?);
    let mut columns = 0;

    for _ in 0..cfg.num_samples {
        let input = BitString::random(HASH_INPUT_NBITS, &mut rng);
        let out = cfg.algo.apply(&input)?;
        columns = out.hash.len() + input.len() + out.internals.len();
        let row = csv_row(&out.hash, &input, &out.internals);
        writer.write_all(row.as_bytes())?;
    }
    writer.flush()?;

    Ok(GeneratorReport {
        path,
        samples: cfg.num_samples,
        columns,
    })
}

/// One newline-terminated row: every bit its own comma-separated column.
fn csv_row(hash: &BitString, input: &BitString, internals: &BitString) -> String {
    let total = hash.len() + input.len() + internals.len();
    let mut row = String::with_capacity(total * 2);
    for bit in hash.iter().chain(input.iter()).chain(internals.iter()) {
        if !row.is_empty() {
            row.push(',');
        }
        row.push(if bit == 0 { '0' } else { '1' });
    }
    row.push('\n');
    row
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_path_shape() {
        let path = dataset_path(Path::new("data"), HashAlgo::Md5, 500);
        assert_eq!(path, Path::new("data").join("md5-500.csv"));
    }

    #[test]
    fn test_csv_row_layout() {
        let hash = BitString::from_bits(vec![1, 0]);
        let input = BitString::from_bits(vec![1]);
        let internals = BitString::from_bits(vec![0, 1]);
        assert_eq!(csv_row(&hash, &input, &internals), "1,0,1,0,1\n");
    }

    #[test]
    fn test_csv_row_without_internals() {
        let hash = BitString::from_bits(vec![0]);
        let input = BitString::from_bits(vec![1]);
        assert_eq!(csv_row(&hash, &input, &BitString::new()), "0,1\n");
    }
}
