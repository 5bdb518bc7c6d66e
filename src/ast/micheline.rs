// SPDX-FileCopyrightText: [2023] Serokell <hi@serokell.io>
// SPDX-FileCopyrightText: [2022-2023] TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

use num_bigint::BigInt;

use super::prim::Prim;

/// A Micheline expression.
///
/// Literals are kept in their textual form: integers as decimal strings and
/// byte sequences as hex strings. They are only interpreted when encoding, so
/// a malformed literal surfaces as an encoding error.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Micheline {
    Int(String),
    String(String),
    /// Hex-encoded bytes, without `0x`.
    Bytes(String),
    /// Application of a primitive to some arguments with optional
    /// annotations. The primitive name is the first field, arguments are the
    /// second field, annotations are the last field.
    App(String, Vec<Micheline>, Vec<String>),
    Seq(Vec<Micheline>),
}

impl Micheline {
    pub fn prim0(prim: Prim) -> Self {
        Micheline::App(prim.to_string(), vec![], vec![])
    }

    pub fn prim1(prim: Prim, arg: Micheline) -> Self {
        Micheline::App(prim.to_string(), vec![arg], vec![])
    }

    pub fn prim2(prim: Prim, arg1: Micheline, arg2: Micheline) -> Self {
        Micheline::App(prim.to_string(), vec![arg1, arg2], vec![])
    }

    pub fn prim3(prim: Prim, arg1: Micheline, arg2: Micheline, arg3: Micheline) -> Self {
        Micheline::App(prim.to_string(), vec![arg1, arg2, arg3], vec![])
    }

    /// Application of a primitive given by name, which is not checked until
    /// encoding.
    pub fn app(
        name: impl Into<String>,
        args: impl IntoIterator<Item = Micheline>,
        annots: impl IntoIterator<Item = String>,
    ) -> Self {
        Micheline::App(
            name.into(),
            args.into_iter().collect(),
            annots.into_iter().collect(),
        )
    }

    pub fn seq(args: impl IntoIterator<Item = Micheline>) -> Self {
        Micheline::Seq(args.into_iter().collect())
    }

    pub fn int(x: impl Into<BigInt>) -> Self {
        Micheline::Int(x.into().to_string())
    }

    pub fn string(s: impl Into<String>) -> Self {
        Micheline::String(s.into())
    }

    /// Bytes literal from raw bytes.
    pub fn bytes(bs: impl AsRef<[u8]>) -> Self {
        Micheline::Bytes(hex::encode(bs))
    }

    /// Add annotations to an application. Other nodes are returned as is.
    pub fn with_annots(self, annots: impl IntoIterator<Item = String>) -> Self {
        match self {
            Micheline::App(prim, args, mut anns) => {
                anns.extend(annots);
                Micheline::App(prim, args, anns)
            }
            other => other,
        }
    }
}

impl From<i128> for Micheline {
    fn from(x: i128) -> Self {
        Micheline::int(x)
    }
}

impl From<BigInt> for Micheline {
    fn from(x: BigInt) -> Self {
        Micheline::Int(x.to_string())
    }
}

impl From<String> for Micheline {
    fn from(x: String) -> Self {
        Micheline::String(x)
    }
}

impl From<&str> for Micheline {
    fn from(s: &str) -> Self {
        Micheline::from(s.to_owned())
    }
}

impl From<Vec<u8>> for Micheline {
    fn from(x: Vec<u8>) -> Self {
        Micheline::bytes(x)
    }
}

impl From<()> for Micheline {
    fn from(_: ()) -> Self {
        Micheline::prim0(Prim::Unit)
    }
}

impl From<bool> for Micheline {
    fn from(x: bool) -> Self {
        Micheline::prim0(if x { Prim::True } else { Prim::False })
    }
}
