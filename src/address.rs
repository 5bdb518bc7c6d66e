// SPDX-FileCopyrightText: [2023] Serokell <hi@serokell.io>
// SPDX-FileCopyrightText: [2022-2023] TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! Tezos addresses and their binary encoding.
//!
//! An address is either implicit (`tz1`, `tz2`, `tz3`) or originated
//! (`KT1`), optionally followed by `%` and an entrypoint name.

pub mod entrypoint;
pub mod error;

pub use self::entrypoint::Entrypoint;
pub use self::error::AddressError;

use crate::hash::{check_decode, HashType, IdError};
use crate::writer::Writer;

const TAG_IMPLICIT: u8 = 0;
const TAG_KT1: u8 = 1;
const PADDING_ORIGINATED: &[u8] = &[0];

/// Kinds an address may decode to, in the order they are tried.
pub const ADDRESS_KINDS: [HashType; 4] = [
    HashType::ContractTz1Hash,
    HashType::ContractTz2Hash,
    HashType::ContractTz3Hash,
    HashType::ContractKt1Hash,
];

/// All address hashes are 20 bytes in length.
pub const HASH_SIZE: usize = 20;

/// Public key hash of an implicit account.
#[derive(Debug, Clone, Copy, Eq, PartialOrd, Ord, PartialEq, Hash)]
pub enum KeyHash {
    Tz1([u8; HASH_SIZE]),
    Tz2([u8; HASH_SIZE]),
    Tz3([u8; HASH_SIZE]),
}

impl KeyHash {
    /// Curve tag followed by the hash.
    pub fn to_bytes(&self, out: &mut Writer) {
        let (tag, hash) = match self {
            KeyHash::Tz1(h) => (0u8, h),
            KeyHash::Tz2(h) => (1, h),
            KeyHash::Tz3(h) => (2, h),
        };
        out.write_u8(tag);
        out.write_bytes(hash);
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialOrd, Ord, PartialEq, Hash)]
pub enum AddressHash {
    Implicit(KeyHash),
    Kt1([u8; HASH_SIZE]),
}

impl AddressHash {
    /// Decode a base58check address hash, without entrypoint.
    pub fn from_base58_check(data: &str) -> Result<Self, AddressError> {
        let invalid = |source: IdError| AddressError::InvalidAddress {
            address: data.to_owned(),
            source,
        };
        let (kind, payload) = check_decode(data, &ADDRESS_KINDS).map_err(invalid)?;
        tracing::debug!(%kind, "resolved address hash");

        let hash: [u8; HASH_SIZE] = payload.as_slice().try_into().map_err(|_| {
            invalid(IdError::InvalidSize {
                kind,
                expected: HASH_SIZE,
                actual: payload.len(),
            })
        })?;
        Ok(match kind {
            HashType::ContractTz1Hash => AddressHash::Implicit(KeyHash::Tz1(hash)),
            HashType::ContractTz2Hash => AddressHash::Implicit(KeyHash::Tz2(hash)),
            HashType::ContractTz3Hash => AddressHash::Implicit(KeyHash::Tz3(hash)),
            HashType::ContractKt1Hash => AddressHash::Kt1(hash),
            other => return Err(AddressError::UnexpectedKind(other)),
        })
    }

    pub fn to_bytes(&self, out: &mut Writer) {
        match self {
            AddressHash::Implicit(hash) => {
                out.write_u8(TAG_IMPLICIT);
                hash.to_bytes(out);
            }
            AddressHash::Kt1(hash) => {
                out.write_u8(TAG_KT1);
                out.write_bytes(hash);
                out.write_bytes(PADDING_ORIGINATED);
            }
        }
    }
}

#[derive(Debug, Clone, Eq, PartialOrd, Ord, PartialEq)]
pub struct Address {
    pub hash: AddressHash,
    pub entrypoint: Entrypoint,
}

impl Address {
    pub fn is_default_ep(&self) -> bool {
        self.entrypoint.is_default()
    }

    /// Parse `<hash>` or `<hash>%<entrypoint>`. The entrypoint ends at the
    /// next `%`, if any; later segments are ignored.
    pub fn from_base58_check(data: &str) -> Result<Self, AddressError> {
        let mut segments = data.split('%');
        let hash = segments.next().unwrap_or_default();
        let ep = segments.next().unwrap_or_default();
        let hash = AddressHash::from_base58_check(hash).map_err(|err| match err {
            AddressError::InvalidAddress { source, .. } => AddressError::InvalidAddress {
                address: data.to_owned(),
                source,
            },
            other => other,
        })?;
        Ok(Address {
            hash,
            entrypoint: Entrypoint::from(ep),
        })
    }

    /// Binary form: the hash, then the entrypoint name unless it is the
    /// default one. The entrypoint has no length prefix and runs to the end.
    pub fn to_bytes(&self, out: &mut Writer) {
        self.hash.to_bytes(out);
        if !self.is_default_ep() {
            out.write_bytes(self.entrypoint.as_bytes())
        }
    }

    pub fn to_bytes_vec(&self) -> Vec<u8> {
        let mut out = Writer::new();
        self.to_bytes(&mut out);
        out.into_bytes()
    }
}

impl TryFrom<&str> for Address {
    type Error = AddressError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_base58_check(value)
    }
}

/// Encode a textual address, with optional `%entrypoint`, to its binary form.
pub fn encode_address(raw: &str) -> Result<Vec<u8>, AddressError> {
    Address::from_base58_check(raw).map(|addr| addr.to_bytes_vec())
}
