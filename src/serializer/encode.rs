// SPDX-FileCopyrightText: [2023] Serokell <hi@serokell.io>
// SPDX-FileCopyrightText: [2022-2023] TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! Micheline serialization.

use std::str::FromStr;

use num_bigint::{BigInt, Sign};
use num_traits::Zero;

use super::constants::*;
use super::{EncodeConfig, EncodeError};
use crate::ast::{Micheline, Prim};
use crate::writer::Writer;

/// Parse a hex string into bytes. Every byte must be exactly two hex digits.
/// A bad pair is reported before a dangling digit.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, EncodeError> {
    let raw = s.as_bytes();
    let malformed = |offset: usize| EncodeError::MalformedHex {
        pair: String::from_utf8_lossy(&raw[offset..(offset + 2).min(raw.len())]).into_owned(),
        offset,
    };
    let whole = raw.len() - raw.len() % 2;
    let bs = hex::decode(&raw[..whole]).map_err(|err| match err {
        hex::FromHexError::InvalidHexCharacter { index, .. } => malformed(index - index % 2),
        _ => malformed(0),
    })?;
    if whole < raw.len() {
        return Err(malformed(whole));
    }
    Ok(bs)
}

/// Put a number, in sign-magnitude form: the first byte carries the sign bit
/// (0x40) and 6 bits of magnitude, every next byte 7 bits. The top bit (0x80)
/// of each byte marks that more bytes follow. Least significant group first.
fn put_number(n: &BigInt, out: &mut Writer) {
    let negative = n.sign() == Sign::Minus;
    let mut mag = n.magnitude().clone();

    let low_bits = |mag: &num_bigint::BigUint, bits: u32| {
        (mag.iter_u32_digits().next().unwrap_or(0) & ((1 << bits) - 1)) as u8
    };

    let mut byte = low_bits(&mag, 6);
    mag >>= 6usize;
    if negative {
        byte |= 0x40;
    }
    loop {
        if mag.is_zero() {
            out.write_u8(byte);
            return;
        }
        out.write_u8(byte | 0x80);
        byte = low_bits(&mag, 7);
        mag >>= 7usize;
    }
}

/// An optional sign followed by at least one ASCII digit.
fn is_decimal(text: &str) -> bool {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn put_int(text: &str, out: &mut Writer) -> Result<(), EncodeError> {
    let invalid = || EncodeError::InvalidInt(text.to_owned());
    if !is_decimal(text) {
        return Err(invalid());
    }
    let n = BigInt::from_str(text).map_err(|_| invalid())?;
    out.write_u8(NUMBER_TAG);
    put_number(&n, out);
    Ok(())
}

/// Put a Michelson string.
fn put_string(s: &str, out: &mut Writer) {
    out.write_u8(STRING_TAG);
    out.put_len_prefixed(s.as_bytes())
}

/// Put a bytes literal given in hex.
fn put_bytes(hex: &str, out: &mut Writer) -> Result<(), EncodeError> {
    let bs = parse_hex(hex)?;
    out.write_u8(BYTES_TAG);
    out.put_len_prefixed(&bs);
    Ok(())
}

/// Annotations, space-separated, with their length.
fn put_annots(annots: &[String], out: &mut Writer) {
    out.put_len_prefixed(annots.join(" ").as_bytes())
}

/// Tag of an application with `n_args` arguments.
fn app_tag(n_args: usize, has_annots: bool) -> u8 {
    match n_args {
        0..=2 => APP_NO_ARGS_NO_ANNOTS_TAG + (n_args as u8) * 2 + u8::from(has_annots),
        _ => APP_GENERIC,
    }
}

struct Encoder<'c> {
    config: &'c EncodeConfig,
}

impl Encoder<'_> {
    /// Recursive encoding function for [Micheline].
    fn encode(&self, mich: &Micheline, depth: usize, out: &mut Writer) -> Result<(), EncodeError> {
        if depth > self.config.max_depth {
            return Err(EncodeError::DepthExceeded(self.config.max_depth));
        }
        match mich {
            Micheline::Int(i) => put_int(i, out),
            Micheline::String(s) => {
                put_string(s, out);
                Ok(())
            }
            Micheline::Bytes(b) => put_bytes(b, out),
            Micheline::Seq(s) => {
                out.write_u8(SEQ_TAG);
                out.with_patchback_len(|out| self.encode_all(s, depth, out))
            }
            Micheline::App(prim, args, annots) => self.encode_app(prim, args, annots, depth, out),
        }
    }

    fn encode_all(
        &self,
        items: &[Micheline],
        depth: usize,
        out: &mut Writer,
    ) -> Result<(), EncodeError> {
        items
            .iter()
            .try_for_each(|item| self.encode(item, depth + 1, out))
    }

    fn encode_app(
        &self,
        name: &str,
        args: &[Micheline],
        annots: &[String],
        depth: usize,
        out: &mut Writer,
    ) -> Result<(), EncodeError> {
        let prim = Prim::from_name(name)?;
        out.write_u8(app_tag(args.len(), !annots.is_empty()));
        out.write_u8(prim.code());
        if args.len() < 3 {
            // arity is implied by the tag
            self.encode_all(args, depth, out)?;
            if !annots.is_empty() {
                put_annots(annots, out);
            }
        } else {
            out.with_patchback_len(|out| self.encode_all(args, depth, out))?;
            // the generic form always has an annotation slot, possibly empty
            put_annots(annots, out);
        }
        Ok(())
    }
}

impl Micheline {
    /// Serialize the expression, without the version marker.
    pub fn encode_raw(&self) -> Result<Vec<u8>, EncodeError> {
        self.encode_starting_with(&[], &EncodeConfig::default())
    }

    /// Serialize the expression the way `PACK` does: the version marker
    /// `0x05` followed by the expression.
    pub fn encode_for_pack(&self) -> Result<Vec<u8>, EncodeError> {
        self.encode_for_pack_with(&EncodeConfig::default())
    }

    /// Like [Micheline::encode_for_pack], with explicit limits.
    pub fn encode_for_pack_with(&self, config: &EncodeConfig) -> Result<Vec<u8>, EncodeError> {
        self.encode_starting_with(&[PACK_TAG], config)
    }

    fn encode_starting_with(
        &self,
        start_bytes: &[u8],
        config: &EncodeConfig,
    ) -> Result<Vec<u8>, EncodeError> {
        let mut out = Writer::new();
        out.write_bytes(start_bytes);
        Encoder { config }.encode(self, 1, &mut out)?;
        tracing::trace!(len = out.len(), "encoded micheline");
        Ok(out.into_bytes())
    }
}
