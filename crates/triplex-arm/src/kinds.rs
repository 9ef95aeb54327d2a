//! Instruction set, byte order and profile classifications.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Instruction set selected by an ARM-family architecture token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IsaKind {
    /// Not an ARM-family token, or a token the rules reject.
    Invalid,
    /// 32-bit ARM (A32).
    Arm,
    /// Thumb (T16/T32).
    Thumb,
    /// 64-bit ARM (A64).
    #[serde(rename = "aarch64")]
    AArch64,
}

/// Byte order selected by an ARM-family architecture token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndianKind {
    Invalid,
    Little,
    Big,
}

/// ARM architecture profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    /// No profile: pre-v7 architectures, the legacy names, or unknown tokens.
    None,
    /// Application profile.
    A,
    /// Real-time profile.
    R,
    /// Microcontroller profile.
    M,
}

impl IsaKind {
    /// Lower-case name of the instruction set, empty for `Invalid`.
    pub fn name(self) -> &'static str {
        match self {
            IsaKind::Invalid => "",
            IsaKind::Arm => "arm",
            IsaKind::Thumb => "thumb",
            IsaKind::AArch64 => "aarch64",
        }
    }
}

impl fmt::Display for IsaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ProfileKind {
    /// Single-letter profile name, empty when there is no profile.
    pub fn letter(self) -> &'static str {
        match self {
            ProfileKind::None => "",
            ProfileKind::A => "A",
            ProfileKind::R => "R",
            ProfileKind::M => "M",
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(IsaKind::AArch64.to_string(), "aarch64");
        assert_eq!(IsaKind::Invalid.to_string(), "");
        assert_eq!(ProfileKind::M.to_string(), "M");
        assert_eq!(ProfileKind::None.letter(), "");
    }

    #[test]
    fn serde_names() {
        assert_eq!(serde_json::to_string(&IsaKind::AArch64).unwrap(), "\"aarch64\"");
        assert_eq!(serde_json::to_string(&EndianKind::Big).unwrap(), "\"big\"");
        let profile: ProfileKind = serde_json::from_str("\"r\"").unwrap();
        assert_eq!(profile, ProfileKind::R);
    }
}
