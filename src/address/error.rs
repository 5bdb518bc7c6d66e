// SPDX-FileCopyrightText: [2023] Serokell <hi@serokell.io>
// SPDX-FileCopyrightText: [2022-2023] TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

use crate::hash::{HashType, IdError};

#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum AddressError {
    /// The text is not an identifier of any address kind.
    #[error("invalid address {address}: {source}")]
    InvalidAddress { address: String, source: IdError },
    /// The identifier decoded to a kind that is not an address.
    #[error("unexpected address type: {0}")]
    UnexpectedKind(HashType),
}
