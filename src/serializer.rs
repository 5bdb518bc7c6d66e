// SPDX-FileCopyrightText: [2023] Serokell <hi@serokell.io>
// SPDX-FileCopyrightText: [2022-2023] TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! Serialization of Micheline to bytes, in the format used by the `PACK`
//! instruction.
//!
//! Functions are defined as associated functions on [crate::ast::Micheline],
//! see [crate::ast::Micheline::encode_for_pack].

pub mod constants;
mod encode;
mod integration_tests;

pub use encode::parse_hex;

use crate::ast::PrimError;
use constants::DEFAULT_MAX_DEPTH;

/// Errors possible while encoding. Any of them aborts the whole encoding and
/// no partial output is returned.
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum EncodeError {
    /// Application of a primitive outside of the vocabulary.
    #[error(transparent)]
    UnknownPrimitive(#[from] PrimError),
    /// A bytes literal is not valid hex.
    #[error("can't parse hex byte {pair:?} at offset {offset}")]
    MalformedHex { pair: String, offset: usize },
    /// An int literal is not a decimal integer.
    #[error("invalid int literal: {0}")]
    InvalidInt(String),
    #[error("expression is nested deeper than {0} levels")]
    DepthExceeded(usize),
}

/// Limits applied while encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeConfig {
    /// Maximum nesting of expressions, the top-level one counting as 1.
    pub max_depth: usize,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        EncodeConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
