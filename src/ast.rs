// SPDX-FileCopyrightText: [2023] Serokell <hi@serokell.io>
// SPDX-FileCopyrightText: [2022-2023] TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! Micheline expressions and the primitive vocabulary.

pub mod json;
pub mod micheline;
pub mod prim;

pub use micheline::Micheline;
pub use prim::{Prim, PrimError};
