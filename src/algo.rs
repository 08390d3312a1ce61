//! The five hash transformations.
//!
//! One is a real cryptographic hash with trace capture (`sha256`), one
//! delegates to a stock digest (`md5`), and three are toy bit constructions
//! kept around as easier learning targets. The toy definitions are
//! normative as written — their exact bit arithmetic *is* the function.

use md5::{Digest, Md5};
use std::str::FromStr;

use crate::bits::BitString;
use crate::config::HASH_OUTPUT_NBITS;
use crate::sha256::sha256_traced;
use crate::{Error, Result};

/// Selectable hash transformation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashAlgo {
    /// Real SHA-256 over the fixed-width byte encoding of the input.
    Sha256,
    /// MD5 over the minimal byte encoding, zero-extended to 256 bits.
    Md5,
    /// Each output bit copies a proportionally indexed input bit.
    MapFromInput,
    /// Two-bit lookup chained on the previous output bit, then reversed.
    ConditionedOnInputAndHash,
    /// Four 16-bit lanes XOR'd with constants and mixed.
    PseudoHash,
}

/// 256 hash bits plus whatever internal wires the transformation exposes.
#[derive(Clone, Debug)]
pub struct HashOutput {
    pub hash: BitString,
    pub internals: BitString,
}

impl HashAlgo {
    /// Every selectable transformation, in CLI listing order.
    pub const ALL: [HashAlgo; 5] = [
        HashAlgo::Sha256,
        HashAlgo::Md5,
        HashAlgo::MapFromInput,
        HashAlgo::ConditionedOnInputAndHash,
        HashAlgo::PseudoHash,
    ];

    /// Selector name as it appears on the CLI and in output file names.
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgo::Sha256 => "sha256",
            HashAlgo::Md5 => "md5",
            HashAlgo::MapFromInput => "map_from_input",
            HashAlgo::ConditionedOnInputAndHash => "conditioned_on_input_and_hash",
            HashAlgo::PseudoHash => "pseudo_hash",
        }
    }

    /// Parse a selector name.
    pub fn from_str(s: &str) -> Result<Self> {
        HashAlgo::ALL
            .into_iter()
            .find(|algo| algo.name() == s)
            .ok_or_else(|| Error::UnsupportedAlgorithm(s.to_string()))
    }

    /// Apply the transformation to one input bit-string.
    pub fn apply(&self, input: &BitString) -> Result<HashOutput> {
        match self {
            HashAlgo::Sha256 => {
                if input.len() % 8 != 0 {
                    return Err(Error::InputWidth(input.len()));
                }
                let out = sha256_traced(&input.to_bytes_be());
                Ok(HashOutput {
                    hash: BitString::from_bytes_be(&out.digest),
                    internals: out.trace,
                })
            }

            HashAlgo::Md5 => {
                let digest = Md5::digest(input.to_min_bytes_be());
                Ok(HashOutput {
                    hash: BitString::from_bytes_be(&digest).zero_extended(HASH_OUTPUT_NBITS),
                    internals: BitString::new(),
                })
            }

            HashAlgo::MapFromInput => {
                let mut hash = BitString::new();
                for i in 0..HASH_OUTPUT_NBITS {
                    hash.push(input.bit(i * input.len() / HASH_OUTPUT_NBITS));
                }
                Ok(HashOutput {
                    hash,
                    internals: BitString::new(),
                })
            }

            HashAlgo::ConditionedOnInputAndHash => {
                let mut out = BitString::new();
                out.push(input.bit(0));
                out.push(input.bit(1));
                for i in 2..HASH_OUTPUT_NBITS {
                    let input_bit = input.bit(i * input.len() / HASH_OUTPUT_NBITS);
                    out.push(conditioned_table(out.bit(i - 2), input_bit));
                }
                Ok(HashOutput {
                    hash: out.reversed(),
                    internals: BitString::new(),
                })
            }

            HashAlgo::PseudoHash => {
                const A: u64 = 0xAC32;
                const B: u64 = 0xFFE1;
                const C: u64 = 0xBF09;
                const D: u64 = 0xBEEF;
                let num = input.value_u64();
                let mut a = (num & 0xFFFF) ^ A;
                let mut b = ((num >> 16) & 0xFFFF) ^ B;
                let mut c = ((num >> 32) & 0xFFFF) ^ C;
                let d = ((num >> 48) & 0xFFFF) ^ D;
                a |= b;
                b = (b + c) & 0xFFFF;
                c ^= d;
                let value = a | (b << 16) | (c << 32) | (d << 48);
                Ok(HashOutput {
                    hash: BitString::from_u64(value).zero_extended(HASH_OUTPUT_NBITS),
                    internals: BitString::new(),
                })
            }
        }
    }
}

/// Lookup table of the conditioned mode, keyed (previous output bit,
/// current input bit).
fn conditioned_table(prev: u8, input_bit: u8) -> u8 {
    match (prev, input_bit) {
        (0, 0) => 1,
        (0, 1) => 0,
        (1, 0) => 1,
        (1, 1) => 0,
        _ => unreachable!("bit values are 0/1"),
    }
}

impl FromStr for HashAlgo {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        HashAlgo::from_str(s)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HASH_INPUT_NBITS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use sha2::Sha256;

    fn random_input() -> BitString {
        let mut rng = StdRng::seed_from_u64(7);
        BitString::random(HASH_INPUT_NBITS, &mut rng)
    }

    #[test]
    fn test_name_from_str_roundtrip() {
        for algo in HashAlgo::ALL {
            assert_eq!(HashAlgo::from_str(algo.name()).unwrap(), algo);
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = HashAlgo::from_str("sha512").unwrap_err();
        assert!(matches!(err, Error::UnsupportedAlgorithm(_)));
    }

    #[test]
    fn test_sha256_matches_reference_digest() {
        let input = random_input();
        let out = HashAlgo::Sha256.apply(&input).unwrap();
        let expected = Sha256::digest(input.to_bytes_be());
        assert_eq!(out.hash, BitString::from_bytes_be(&expected));
        assert_eq!(out.internals.len(), crate::sha256::TRACE_BITS_PER_BLOCK);
    }

    #[test]
    fn test_sha256_rejects_unaligned_width() {
        let input = BitString::from_bits(vec![1; 63]);
        let err = HashAlgo::Sha256.apply(&input).unwrap_err();
        assert!(matches!(err, Error::InputWidth(63)));
    }

    #[test]
    fn test_md5_zero_extends_to_256() {
        let input = random_input();
        let out = HashAlgo::Md5.apply(&input).unwrap();
        assert_eq!(out.hash.len(), 256);
        // MD5 is 128 bits, so the first 128 columns are padding
        assert!(out.hash.iter().take(128).all(|b| b == 0));
        let expected = Md5::digest(input.to_min_bytes_be());
        assert_eq!(
            out.hash,
            BitString::from_bytes_be(&expected).zero_extended(256)
        );
    }

    #[test]
    fn test_md5_uses_minimal_encoding() {
        // Value 1: a single 0x01 byte, not eight bytes
        let out = HashAlgo::Md5.apply(&BitString::from_u64(1)).unwrap();
        let expected = Md5::digest([0x01u8]);
        assert_eq!(
            out.hash,
            BitString::from_bytes_be(&expected).zero_extended(256)
        );
    }

    #[test]
    fn test_map_from_input_copies_proportional_bits() {
        let input = random_input();
        let out = HashAlgo::MapFromInput.apply(&input).unwrap();
        assert_eq!(out.hash.len(), 256);
        for i in 0..256 {
            assert_eq!(out.hash.bit(i), input.bit(i * HASH_INPUT_NBITS / 256));
        }
    }

    #[test]
    fn test_conditioned_endpoints_after_reversal() {
        let input = random_input();
        let out = HashAlgo::ConditionedOnInputAndHash.apply(&input).unwrap();
        assert_eq!(out.hash.len(), 256);
        // Pre-reversal positions 0/1 are raw input copies
        assert_eq!(out.hash.bit(255), input.bit(0));
        assert_eq!(out.hash.bit(254), input.bit(1));
        // Pre-reversal position 255 came through the table, which always
        // negates the selected input bit
        let last_input = input.bit(255 * HASH_INPUT_NBITS / 256);
        assert_eq!(out.hash.bit(0), 1 - last_input);
    }

    #[test]
    fn test_pseudo_hash_zero_input_vector() {
        let out = HashAlgo::PseudoHash.apply(&BitString::from_u64(0)).unwrap();
        assert_eq!(out.hash.len(), 256);
        assert_eq!(
            out.hash,
            BitString::from_u64(0xBEEF01E6BEEAFFF3).zero_extended(256)
        );
    }

    #[test]
    fn test_toy_modes_have_no_internals() {
        let input = random_input();
        for algo in [
            HashAlgo::Md5,
            HashAlgo::MapFromInput,
            HashAlgo::ConditionedOnInputAndHash,
            HashAlgo::PseudoHash,
        ] {
            assert!(algo.apply(&input).unwrap().internals.is_empty());
        }
    }
}
