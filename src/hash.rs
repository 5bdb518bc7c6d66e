// Copyright (c) SimpleStaking, Viable Systems and Tezedge Contributors
// SPDX-FileCopyrightText: 2023 TriliTech <contact@trili.tech>
// SPDX-License-Identifier: MIT

//! Typed base58check identifiers: the prefix table and the resolver that
//! classifies a decoded identifier by its prefix.

use strum_macros::{Display, EnumString, IntoStaticStr};
use thiserror::Error;

use crate::base58::{FromBase58Check, FromBase58CheckError, ToBase58Check};

mod prefix_bytes {
    pub const CHAIN_ID: [u8; 3] = [87, 82, 0];
    pub const BLOCK_HASH: [u8; 2] = [1, 52];
    pub const OPERATION_HASH: [u8; 2] = [5, 116];
    pub const OPERATION_LIST_HASH: [u8; 2] = [133, 233];
    pub const OPERATION_LIST_LIST_HASH: [u8; 3] = [29, 159, 109];
    pub const PROTOCOL_HASH: [u8; 2] = [2, 170];
    pub const CONTEXT_HASH: [u8; 2] = [79, 199];
    pub const CONTRACT_TZ1_HASH: [u8; 3] = [6, 161, 159];
    pub const CONTRACT_TZ2_HASH: [u8; 3] = [6, 161, 161];
    pub const CONTRACT_TZ3_HASH: [u8; 3] = [6, 161, 164];
    pub const CONTRACT_KT1_HASH: [u8; 3] = [2, 90, 121];
    pub const CRYPTOBOX_PUBLIC_KEY_HASH: [u8; 2] = [153, 103];
    pub const SEED_ED25519: [u8; 4] = [13, 15, 58, 7];
    pub const PUBLIC_KEY_ED25519: [u8; 4] = [13, 15, 37, 217];
    pub const SECRET_KEY_SECP256K1: [u8; 4] = [17, 162, 224, 201];
    pub const SECRET_KEY_P256: [u8; 4] = [16, 81, 238, 189];
    pub const ENCRYPTED_SEED_ED25519: [u8; 5] = [7, 90, 60, 179, 41];
    pub const ENCRYPTED_SECRET_KEY_SECP256K1: [u8; 5] = [9, 237, 241, 174, 150];
    pub const ENCRYPTED_SECRET_KEY_P256: [u8; 5] = [9, 48, 57, 115, 171];
    pub const PUBLIC_KEY_SECP256K1: [u8; 4] = [3, 254, 226, 86];
    pub const PUBLIC_KEY_P256: [u8; 4] = [3, 178, 139, 127];
    pub const SCALAR_SECP256K1: [u8; 3] = [38, 248, 136];
    pub const ELEMENT_SECP256K1: [u8; 3] = [5, 92, 0];
    // 64-byte legacy secret key, not the 32-byte seed
    pub const SECRET_KEY_ED25519: [u8; 4] = [43, 246, 78, 7];
    pub const ED25519_SIGNATURE: [u8; 5] = [9, 245, 205, 134, 18];
    pub const SECP256K1_SIGNATURE: [u8; 5] = [13, 115, 101, 19, 63];
    pub const P256_SIGNATURE: [u8; 4] = [54, 240, 44, 52];
    pub const GENERIC_SIGNATURE: [u8; 3] = [4, 130, 43];
}

/// Kind of a base58check identifier. Each kind has a fixed payload size and
/// a unique prefix prepended to the payload before checksum-encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
pub enum HashType {
    // "\087\082\000" (* Net(15) *)
    ChainId,
    // "\001\052" (* B(51) *)
    BlockHash,
    // "\005\116" (* o(51) *)
    OperationHash,
    // "\133\233" (* Lo(52) *)
    OperationListHash,
    // "\029\159\109" (* LLo(53) *)
    OperationListListHash,
    // "\002\170" (* P(51) *)
    ProtocolHash,
    // "\079\199" (* Co(52) *)
    ContextHash,
    // "\006\161\159" (* tz1(36) *)
    ContractTz1Hash,
    // "\006\161\161" (* tz2(36) *)
    ContractTz2Hash,
    // "\006\161\164" (* tz3(36) *)
    ContractTz3Hash,
    // "\002\090\121" (* KT1(36) *)
    ContractKt1Hash,
    // "\153\103" (* id(30) *)
    CryptoboxPublicKeyHash,
    // "\013\015\058\007" (* edsk(54) *)
    SeedEd25519,
    // "\013\015\037\217" (* edpk(54) *)
    PublicKeyEd25519,
    // "\017\162\224\201" (* spsk(54) *)
    SecretKeySecp256k1,
    // "\016\081\238\189" (* p2sk(54) *)
    SecretKeyP256,
    // "\007\090\060\179\041" (* edesk(88) *)
    EncryptedSeedEd25519,
    // "\009\237\241\174\150" (* spesk(88) *)
    EncryptedSecretKeySecp256k1,
    // "\009\048\057\115\171" (* p2esk(88) *)
    EncryptedSecretKeyP256,
    // "\003\254\226\086" (* sppk(55) *)
    PublicKeySecp256k1,
    // "\003\178\139\127" (* p2pk(55) *)
    PublicKeyP256,
    // "\038\248\136" (* SSp(53) *)
    Secp256k1Scalar,
    // "\005\092\000" (* GSp(54) *)
    Secp256k1Element,
    // "\043\246\078\007" (* edsk(98) *)
    SecretKeyEd25519,
    // "\009\245\205\134\018" (* edsig(99) *)
    Ed25519Signature,
    // "\013\115\101\019\063" (* spsig1(99) *)
    Secp256k1Signature,
    // "\054\240\044\052" (* p2sig(98) *)
    P256Signature,
    // "\004\130\043" (* sig(96) *)
    UnknownSignature,
}

/// Errors when classifying an identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    #[error("invalid identifier {text}: {source}")]
    Base58 {
        text: String,
        source: FromBase58CheckError,
    },
    /// Decoded fine, but no candidate kind matched prefix and length.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
    #[error("invalid payload size for {kind}: expected {expected}, actual {actual}")]
    InvalidSize {
        kind: HashType,
        expected: usize,
        actual: usize,
    },
}

impl HashType {
    /// Every known kind, in table order.
    pub const ALL: [HashType; 28] = [
        HashType::ChainId,
        HashType::BlockHash,
        HashType::OperationHash,
        HashType::OperationListHash,
        HashType::OperationListListHash,
        HashType::ProtocolHash,
        HashType::ContextHash,
        HashType::ContractTz1Hash,
        HashType::ContractTz2Hash,
        HashType::ContractTz3Hash,
        HashType::ContractKt1Hash,
        HashType::CryptoboxPublicKeyHash,
        HashType::SeedEd25519,
        HashType::PublicKeyEd25519,
        HashType::SecretKeySecp256k1,
        HashType::SecretKeyP256,
        HashType::EncryptedSeedEd25519,
        HashType::EncryptedSecretKeySecp256k1,
        HashType::EncryptedSecretKeyP256,
        HashType::PublicKeySecp256k1,
        HashType::PublicKeyP256,
        HashType::Secp256k1Scalar,
        HashType::Secp256k1Element,
        HashType::SecretKeyEd25519,
        HashType::Ed25519Signature,
        HashType::Secp256k1Signature,
        HashType::P256Signature,
        HashType::UnknownSignature,
    ];

    #[inline]
    pub fn base58check_prefix(&self) -> &'static [u8] {
        use prefix_bytes::*;
        match self {
            HashType::ChainId => &CHAIN_ID,
            HashType::BlockHash => &BLOCK_HASH,
            HashType::OperationHash => &OPERATION_HASH,
            HashType::OperationListHash => &OPERATION_LIST_HASH,
            HashType::OperationListListHash => &OPERATION_LIST_LIST_HASH,
            HashType::ProtocolHash => &PROTOCOL_HASH,
            HashType::ContextHash => &CONTEXT_HASH,
            HashType::ContractTz1Hash => &CONTRACT_TZ1_HASH,
            HashType::ContractTz2Hash => &CONTRACT_TZ2_HASH,
            HashType::ContractTz3Hash => &CONTRACT_TZ3_HASH,
            HashType::ContractKt1Hash => &CONTRACT_KT1_HASH,
            HashType::CryptoboxPublicKeyHash => &CRYPTOBOX_PUBLIC_KEY_HASH,
            HashType::SeedEd25519 => &SEED_ED25519,
            HashType::PublicKeyEd25519 => &PUBLIC_KEY_ED25519,
            HashType::SecretKeySecp256k1 => &SECRET_KEY_SECP256K1,
            HashType::SecretKeyP256 => &SECRET_KEY_P256,
            HashType::EncryptedSeedEd25519 => &ENCRYPTED_SEED_ED25519,
            HashType::EncryptedSecretKeySecp256k1 => &ENCRYPTED_SECRET_KEY_SECP256K1,
            HashType::EncryptedSecretKeyP256 => &ENCRYPTED_SECRET_KEY_P256,
            HashType::PublicKeySecp256k1 => &PUBLIC_KEY_SECP256K1,
            HashType::PublicKeyP256 => &PUBLIC_KEY_P256,
            HashType::Secp256k1Scalar => &SCALAR_SECP256K1,
            HashType::Secp256k1Element => &ELEMENT_SECP256K1,
            HashType::SecretKeyEd25519 => &SECRET_KEY_ED25519,
            HashType::Ed25519Signature => &ED25519_SIGNATURE,
            HashType::Secp256k1Signature => &SECP256K1_SIGNATURE,
            HashType::P256Signature => &P256_SIGNATURE,
            HashType::UnknownSignature => &GENERIC_SIGNATURE,
        }
    }

    /// Size of the payload in bytes, prefix excluded.
    pub const fn size(&self) -> usize {
        match self {
            HashType::ChainId => 4,
            HashType::CryptoboxPublicKeyHash => 16,
            HashType::ContractTz1Hash
            | HashType::ContractTz2Hash
            | HashType::ContractTz3Hash
            | HashType::ContractKt1Hash => 20,
            HashType::BlockHash
            | HashType::OperationHash
            | HashType::OperationListHash
            | HashType::OperationListListHash
            | HashType::ProtocolHash
            | HashType::ContextHash
            | HashType::SeedEd25519
            | HashType::PublicKeyEd25519
            | HashType::SecretKeySecp256k1
            | HashType::SecretKeyP256 => 32,
            HashType::PublicKeySecp256k1
            | HashType::PublicKeyP256
            | HashType::Secp256k1Scalar
            | HashType::Secp256k1Element => 33,
            HashType::EncryptedSeedEd25519
            | HashType::EncryptedSecretKeySecp256k1
            | HashType::EncryptedSecretKeyP256 => 56,
            HashType::SecretKeyEd25519
            | HashType::Ed25519Signature
            | HashType::Secp256k1Signature
            | HashType::P256Signature
            | HashType::UnknownSignature => 64,
        }
    }

    /// Whether `decoded` (checksum already stripped) is an identifier of this
    /// kind. Returns the payload with the prefix removed.
    pub fn strip_prefix<'a>(&self, decoded: &'a [u8]) -> Option<&'a [u8]> {
        let prefix = self.base58check_prefix();
        if decoded.len() != self.size() + prefix.len() {
            return None;
        }
        decoded.strip_prefix(prefix)
    }

    /// Render a payload of this kind as base58check text.
    pub fn hash_to_b58check(&self, data: &[u8]) -> Result<String, IdError> {
        if self.size() != data.len() {
            return Err(IdError::InvalidSize {
                kind: *self,
                expected: self.size(),
                actual: data.len(),
            });
        }
        let mut hash = Vec::with_capacity(self.base58check_prefix().len() + data.len());
        hash.extend(self.base58check_prefix());
        hash.extend(data);
        Ok(hash.to_base58check())
    }

    /// Decode text that must be of this kind.
    pub fn b58check_to_hash(&self, text: &str) -> Result<Vec<u8>, IdError> {
        check_decode(text, &[*self]).map(|(_, payload)| payload)
    }
}

/// Decode `text` and classify it against `kinds`, in order. The first kind
/// whose length and prefix both match wins; ordering ambiguities are left to
/// the caller.
pub fn check_decode(text: &str, kinds: &[HashType]) -> Result<(HashType, Vec<u8>), IdError> {
    let decoded = text.from_base58check().map_err(|source| IdError::Base58 {
        text: text.to_owned(),
        source,
    })?;
    kinds
        .iter()
        .find_map(|kind| {
            kind.strip_prefix(&decoded)
                .map(|payload| (*kind, payload.to_vec()))
        })
        .ok_or_else(|| IdError::InvalidIdentifier(text.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::str::FromStr;

    const TZ1: &str = "tz1Nw5nr152qddEjKT2dKBH8XcBMDAg72iLw";
    const ADDRESS_KINDS: [HashType; 4] = [
        HashType::ContractTz1Hash,
        HashType::ContractTz2Hash,
        HashType::ContractTz3Hash,
        HashType::ContractKt1Hash,
    ];

    #[test]
    fn prefixes_are_unique_per_kind() {
        let prefixes: HashSet<(&[u8], usize)> = HashType::ALL
            .iter()
            .map(|k| (k.base58check_prefix(), k.size()))
            .collect();
        assert_eq!(prefixes.len(), HashType::ALL.len());
    }

    #[test]
    fn test_resolve_tz1() -> Result<(), anyhow::Error> {
        let (kind, payload) = check_decode(TZ1, &ADDRESS_KINDS)?;
        assert_eq!(kind, HashType::ContractTz1Hash);
        assert_eq!(payload.len(), 20);
        assert_eq!(payload, hex::decode("2422090f872dfd3a39471bb23f180e6dfed030f3")?);
        Ok(())
    }

    #[test]
    fn test_resolve_wrong_candidates() {
        assert_eq!(
            check_decode(TZ1, &[HashType::ContractKt1Hash]),
            Err(IdError::InvalidIdentifier(TZ1.to_owned()))
        );
    }

    #[test]
    fn test_resolve_no_candidates() {
        assert_eq!(
            check_decode(TZ1, &[]),
            Err(IdError::InvalidIdentifier(TZ1.to_owned()))
        );
    }

    #[test]
    fn test_resolve_bad_checksum() {
        let bad = "tz1Nw5nr152qddEjKT2dKBH8XcBMDAg72iLx";
        assert!(matches!(
            check_decode(bad, &ADDRESS_KINDS),
            Err(IdError::Base58 {
                source: FromBase58CheckError::InvalidChecksum,
                ..
            })
        ));
    }

    #[test]
    fn test_resolve_chain_id() -> Result<(), anyhow::Error> {
        let (kind, payload) = check_decode("NetXgtSLGNJvNye", &HashType::ALL)?;
        assert_eq!(kind, HashType::ChainId);
        assert_eq!(payload, hex::decode("8eceda2f")?);
        Ok(())
    }

    #[test]
    fn test_hash_to_b58check() -> Result<(), anyhow::Error> {
        let encoded = HashType::ContractKt1Hash
            .hash_to_b58check(&hex::decode("9af3138763ec09dde90926f5a6b60783a21607d5")?)?;
        assert_eq!(encoded, "KT1Ni4pYV3UGWcDp7MgR5prgcD4NCK1MpXiR");
        Ok(())
    }

    #[test]
    fn test_hash_to_b58check_wrong_size() {
        assert_eq!(
            HashType::ChainId.hash_to_b58check(&[0; 5]),
            Err(IdError::InvalidSize {
                kind: HashType::ChainId,
                expected: 4,
                actual: 5
            })
        );
    }

    #[test]
    fn test_b58check_to_hash() -> Result<(), anyhow::Error> {
        let payload = HashType::ContractTz3Hash
            .b58check_to_hash("tz3UoffC7FG7zfpmvmjUmUeAaHvzdcUvAj6r")?;
        assert_eq!(payload, hex::decode("5cfa532f50de3e12befc0ad21603835dd7698d35")?);
        Ok(())
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(HashType::from_str("ContractKt1Hash"), Ok(HashType::ContractKt1Hash));
        assert_eq!(HashType::SeedEd25519.to_string(), "SeedEd25519");
        assert!(HashType::from_str("Kt1").is_err());
    }
}
