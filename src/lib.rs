// SPDX-FileCopyrightText: [2023] Serokell <hi@serokell.io>
// SPDX-FileCopyrightText: [2022-2023] TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT
#![forbid(unsafe_code)]
#![warn(clippy::redundant_clone)]

//! # Micheline PACK encoding
//!
//! Serialization of Micheline expressions into the binary format used by the
//! Michelson `PACK` instruction, and of Tezos addresses into their binary
//! form.
//!
//! Expressions are represented by [ast::Micheline], either built directly or
//! parsed from their JSON form with [ast::Micheline::from_json]. Serialization
//! is done with [ast::Micheline::encode_for_pack]:
//!
//! ```
//! use tezos_micheline_pack::ast::{Micheline, Prim};
//! use tezos_micheline_pack::address::encode_address;
//!
//! let target = encode_address("KT1Ni4pYV3UGWcDp7MgR5prgcD4NCK1MpXiR").unwrap();
//! let data = Micheline::prim2(
//!     Prim::Pair,
//!     Micheline::prim2(Prim::Pair, "testId".into(), Micheline::bytes(target)),
//!     Micheline::int(17170000),
//! );
//! assert_eq!(
//!     hex::encode(data.encode_for_pack().unwrap()),
//!     "05070707070100000006746573744964\
//!      0a00000016019af3138763ec09dde90926f5a6b60783a21607d500\
//!      0090f9af10"
//! );
//! ```
//!
//! Base58check identifiers of any known kind can be classified with
//! [hash::check_decode].

pub mod address;
pub mod ast;
pub mod base58;
pub mod hash;
pub mod serializer;
pub mod writer;

pub use address::{encode_address, Address, AddressError};
pub use ast::{Micheline, Prim};
pub use hash::{check_decode, HashType, IdError};
pub use serializer::{EncodeConfig, EncodeError};
