// Copyright (c) SimpleStaking, Viable Systems and Tezedge Contributors
// SPDX-FileCopyrightText: 2023 TriliTech <contact@trili.tech>
// SPDX-License-Identifier: MIT

//! Base58 with a 4-byte double-SHA256 checksum, as used for all Tezos
//! identifiers.

use cryptoxide::hashing::sha256;
use thiserror::Error;

/// Size of the checksum appended to the payload.
pub const CHECKSUM_BYTE_SIZE: usize = 4;

/// Possible errors for base58check decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FromBase58CheckError {
    /// The input has characters outside of the base58 alphabet.
    #[error("invalid base58")]
    InvalidBase58,
    /// The input had invalid checksum.
    #[error("invalid checksum")]
    InvalidChecksum,
    /// The input is missing checksum.
    #[error("missing checksum")]
    MissingChecksum,
}

fn double_sha256(data: &[u8]) -> [u8; 32] {
    let digest = sha256(data);
    sha256(digest.as_ref())
}

/// A trait for converting a value to base58check encoded string.
pub trait ToBase58Check {
    fn to_base58check(&self) -> String;
}

/// A trait for decoding base58check encoded values.
pub trait FromBase58Check {
    /// Decode and verify the checksum, returning the payload without it.
    #[allow(clippy::wrong_self_convention)]
    fn from_base58check(&self) -> Result<Vec<u8>, FromBase58CheckError>;
}

impl ToBase58Check for [u8] {
    fn to_base58check(&self) -> String {
        let mut payload = Vec::with_capacity(self.len() + CHECKSUM_BYTE_SIZE);
        payload.extend(self);
        let checksum = double_sha256(self);
        payload.extend(&checksum[..CHECKSUM_BYTE_SIZE]);

        bs58::encode(payload).into_string()
    }
}

impl FromBase58Check for str {
    fn from_base58check(&self) -> Result<Vec<u8>, FromBase58CheckError> {
        let mut payload = bs58::decode(self)
            .into_vec()
            .map_err(|_| FromBase58CheckError::InvalidBase58)?;
        if payload.len() < CHECKSUM_BYTE_SIZE {
            return Err(FromBase58CheckError::MissingChecksum);
        }
        let data_len = payload.len() - CHECKSUM_BYTE_SIZE;
        let (data, checksum_provided) = payload.split_at(data_len);
        let checksum_expected = double_sha256(data);
        if &checksum_expected[..CHECKSUM_BYTE_SIZE] != checksum_provided {
            return Err(FromBase58CheckError::InvalidChecksum);
        }
        payload.truncate(data_len);
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() -> Result<(), anyhow::Error> {
        let encoded = hex::decode("5752008eceda2f")?.to_base58check();
        assert_eq!("NetXgtSLGNJvNye", &encoded);

        Ok(())
    }

    #[test]
    fn test_decode() -> Result<(), anyhow::Error> {
        let decoded = "NetXgtSLGNJvNye".from_base58check()?;
        assert_eq!(hex::decode("5752008eceda2f")?, decoded);

        Ok(())
    }

    #[test]
    fn test_decode_bad_checksum() {
        // last character altered
        assert_eq!(
            "NetXgtSLGNJvNyf".from_base58check(),
            Err(FromBase58CheckError::InvalidChecksum)
        );
    }

    #[test]
    fn test_decode_bad_alphabet() {
        assert_eq!(
            "NetXgtSLGNJvN0e".from_base58check(),
            Err(FromBase58CheckError::InvalidBase58)
        );
    }

    #[test]
    fn test_decode_too_short() {
        assert_eq!(
            "1".from_base58check(),
            Err(FromBase58CheckError::MissingChecksum)
        );
    }
}
