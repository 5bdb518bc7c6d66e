// SPDX-FileCopyrightText: [2023] Serokell <hi@serokell.io>
// SPDX-FileCopyrightText: [2022-2023] TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! Entrypoints, the part after `%` in `KT1BRd2ka5q2cPRdXALtXD1QZ38CPam2j1ye%foo`.

/// Name of the entrypoint used when none is given.
pub const DEFAULT_EP_NAME: &str = "default";

/// Entrypoint of an address. The name is kept as given; an empty name and
/// `default` both denote the default entrypoint.
#[derive(Debug, Clone, Eq, PartialOrd, Ord, PartialEq, Hash)]
pub struct Entrypoint(String);

impl Entrypoint {
    pub fn is_default(&self) -> bool {
        self.0.is_empty() || self.0 == DEFAULT_EP_NAME
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl Default for Entrypoint {
    fn default() -> Self {
        Entrypoint(DEFAULT_EP_NAME.to_owned())
    }
}

impl From<&str> for Entrypoint {
    fn from(s: &str) -> Self {
        Entrypoint(s.to_owned())
    }
}

impl std::fmt::Display for Entrypoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_entrypoints() {
        assert!(Entrypoint::default().is_default());
        assert!(Entrypoint::from("").is_default());
        assert!(Entrypoint::from("default").is_default());
        assert!(!Entrypoint::from("defaults").is_default());
        assert!(!Entrypoint::from("Default").is_default());
    }
}
