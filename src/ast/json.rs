// SPDX-FileCopyrightText: [2023] Serokell <hi@serokell.io>
// SPDX-FileCopyrightText: [2022-2023] TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! JSON representation of Micheline, as produced by `octez-client` and the
//! RPC node: `{"prim": .., "args": [..], "annots": [..]}`, `{"int": ".."}`,
//! `{"string": ".."}`, `{"bytes": ".."}`, and arrays for sequences.

use serde::{Deserialize, Serialize};

use super::micheline::Micheline;

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    Seq(Vec<Micheline>),
    Int {
        int: String,
    },
    String {
        string: String,
    },
    Bytes {
        bytes: String,
    },
    App {
        prim: String,
        #[serde(default)]
        args: Vec<Micheline>,
        #[serde(default)]
        annots: Vec<String>,
    },
}

/// Borrowed counterpart of [Repr], for serialization.
#[derive(Serialize)]
#[serde(untagged)]
enum ReprRef<'a> {
    Seq(&'a [Micheline]),
    Int {
        int: &'a str,
    },
    String {
        string: &'a str,
    },
    Bytes {
        bytes: &'a str,
    },
    App {
        prim: &'a str,
        #[serde(skip_serializing_if = "<[_]>::is_empty")]
        args: &'a [Micheline],
        #[serde(skip_serializing_if = "<[_]>::is_empty")]
        annots: &'a [String],
    },
}

impl From<Repr> for Micheline {
    fn from(r: Repr) -> Self {
        match r {
            Repr::Seq(s) => Micheline::Seq(s),
            Repr::Int { int } => Micheline::Int(int),
            Repr::String { string } => Micheline::String(string),
            Repr::Bytes { bytes } => Micheline::Bytes(bytes),
            Repr::App { prim, args, annots } => Micheline::App(prim, args, annots),
        }
    }
}

impl<'a> From<&'a Micheline> for ReprRef<'a> {
    fn from(m: &'a Micheline) -> Self {
        match m {
            Micheline::Seq(s) => ReprRef::Seq(s),
            Micheline::Int(int) => ReprRef::Int { int },
            Micheline::String(string) => ReprRef::String { string },
            Micheline::Bytes(bytes) => ReprRef::Bytes { bytes },
            Micheline::App(prim, args, annots) => ReprRef::App { prim, args, annots },
        }
    }
}

impl Serialize for Micheline {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ReprRef::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Micheline {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Repr::deserialize(deserializer).map(Micheline::from)
    }
}

/// Nesting accepted by [Micheline::from_json], as set by `serde_json`'s
/// recursion limit. Deeper input fails to parse, whatever the
/// [crate::serializer::EncodeConfig] used to encode it.
pub const MAX_JSON_DEPTH: usize = 128;

impl Micheline {
    /// Parse the JSON form. Nesting is limited to [MAX_JSON_DEPTH] levels.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn to_json(&self) -> String {
        // Serializing a tree of strings into a String cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}
