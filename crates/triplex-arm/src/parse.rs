//! Decomposition of ARM-family architecture tokens.
//!
//! Accepted tokens look like `(arm|thumb|aarch64)(eb)?(vN[.M]...)?(eb)?`,
//! plus the Apple spellings `arm64`, `arm64e`, `arm64_32`, `aarch64_32`,
//! the `aarch64_be` form, and the legacy names `iwmmxt`, `iwmmxt2` and
//! `xscale` (optionally followed by `eb`).

use crate::arch::{ArchKind, ARCH_NAMES};
use crate::kinds::{EndianKind, IsaKind, ProfileKind};

const LEGACY_NAMES: &[&str] = &["iwmmxt", "iwmmxt2", "xscale"];

/// True for the bare legacy marketing names.
pub fn is_legacy_arch_name(arch: &str) -> bool {
    LEGACY_NAMES.contains(&arch)
}

/// A legacy name, optionally followed by a big-endian `eb`.
fn is_legacy_token(arch: &str) -> bool {
    is_legacy_arch_name(arch.strip_suffix("eb").unwrap_or(arch))
}

/// Length of the recognized ISA prefix, including AArch64's `_be` marker.
///
/// `None` if the token has no ARM-family prefix, `Some(None)` if the
/// prefix is malformed (an `eb` marker on an AArch64 token).
fn isa_prefix_len(arch: &str) -> Option<Option<usize>> {
    let len = if arch.starts_with("arm64_32") {
        8
    } else if arch.starts_with("arm64e") {
        6
    } else if arch.starts_with("arm64") {
        5
    } else if arch.starts_with("aarch64_32") {
        10
    } else if arch.starts_with("arm") {
        3
    } else if arch.starts_with("thumb") {
        5
    } else if arch.starts_with("aarch64") {
        // AArch64 spells big-endian "_be", never "eb".
        if arch.contains("eb") {
            return Some(None);
        }
        if arch[7..].starts_with("_be") {
            10
        } else {
            7
        }
    } else {
        return None;
    };
    Some(Some(len))
}

/// Strip the ISA prefix and any `eb` marker from an architecture token.
///
/// Returns the `vN...` version suffix for prefixed tokens, the whole token
/// when nothing follows the prefix (`arm`, `thumbeb`, `aarch64_be`), the
/// bare legacy name for legacy tokens, and the empty string for anything
/// that is not a well-formed ARM-family token.
///
/// ```
/// use triplex_arm::canonical_arch_name;
///
/// assert_eq!(canonical_arch_name("armebv7"), "v7");
/// assert_eq!(canonical_arch_name("thumbv7em"), "v7em");
/// assert_eq!(canonical_arch_name("xscaleeb"), "xscale");
/// assert_eq!(canonical_arch_name("x86_64"), "");
/// ```
pub fn canonical_arch_name(arch: &str) -> &str {
    let offset = match isa_prefix_len(arch) {
        Some(Some(len)) => Some(len),
        Some(None) => return "",
        None => None,
    };

    let mut rest = arch;
    let mut offset = offset;
    match offset {
        // "armebv7": skip the "eb" after the prefix.
        Some(len) if arch[len..].starts_with("eb") => offset = Some(len + 2),
        // "armv7eb": chop the trailing "eb".
        _ => {
            if let Some(stripped) = rest.strip_suffix("eb") {
                rest = stripped;
            }
        }
    }

    let Some(offset) = offset else {
        return if LEGACY_NAMES.contains(&rest) { rest } else { "" };
    };

    let rest = rest.get(offset..).unwrap_or("");
    if rest.is_empty() {
        return arch;
    }

    let mut chars = rest.chars();
    let well_formed = chars.next() == Some('v') && chars.next().is_some_and(|c| c.is_ascii_digit());
    if !well_formed || rest.contains("eb") {
        return "";
    }
    rest
}

/// Expand a canonical name to the spelling used in the architecture table.
///
/// `v8` becomes `v8-a`, `v7em` becomes `v7e-m`, and so on. Names without
/// a synonym are returned unchanged.
pub fn arch_synonym(arch: &str) -> &str {
    match arch {
        "v5" => "v5t",
        "v5e" => "v5te",
        "v6j" => "v6",
        "v6hl" => "v6k",
        "v6m" | "v6sm" | "v6s-m" => "v6-m",
        "v6z" | "v6zk" => "v6kz",
        "v7" | "v7a" | "v7hl" | "v7l" => "v7-a",
        "v7r" => "v7-r",
        "v7m" => "v7-m",
        "v7em" => "v7e-m",
        "v8" | "v8a" | "v8l" | "aarch64" | "arm64" => "v8-a",
        "v8.1a" => "v8.1-a",
        "v8.2a" => "v8.2-a",
        "v8.3a" => "v8.3-a",
        "v8.4a" => "v8.4-a",
        "v8.5a" => "v8.5-a",
        "v8.6a" => "v8.6-a",
        "v8.7a" => "v8.7-a",
        "v8.8a" => "v8.8-a",
        "v8.9a" => "v8.9-a",
        "v9" | "v9a" => "v9-a",
        "v9.1a" => "v9.1-a",
        "v9.2a" => "v9.2-a",
        "v9.3a" => "v9.3-a",
        "v9.4a" => "v9.4-a",
        "v9.5a" => "v9.5-a",
        "v8r" => "v8-r",
        "v8m.base" => "v8-m.base",
        "v8m.main" => "v8-m.main",
        "v8.1m.main" => "v8.1-m.main",
        other => other,
    }
}

/// Architecture revision for an already canonicalized name.
fn arch_for_canonical(canonical: &str) -> ArchKind {
    let synonym = arch_synonym(canonical);
    if synonym.is_empty() {
        return ArchKind::Invalid;
    }
    ARCH_NAMES
        .iter()
        .find(|info| info.name.ends_with(synonym))
        .map_or(ArchKind::Invalid, |info| info.kind)
}

/// Architecture revision named by a token, e.g. `thumbv7em` → `ArmV7EM`.
pub fn parse_arch(arch: &str) -> ArchKind {
    arch_for_canonical(canonical_arch_name(arch))
}

/// Instruction set named by a token's prefix.
pub fn parse_arch_isa(arch: &str) -> IsaKind {
    if arch.starts_with("aarch64") || arch.starts_with("arm64") {
        IsaKind::AArch64
    } else if arch.starts_with("thumb") {
        IsaKind::Thumb
    } else if arch.starts_with("arm") || is_legacy_token(arch) {
        IsaKind::Arm
    } else {
        IsaKind::Invalid
    }
}

/// Byte order named by a token.
pub fn parse_arch_endian(arch: &str) -> EndianKind {
    if arch.starts_with("armeb") || arch.starts_with("thumbeb") || arch.starts_with("aarch64_be") {
        return EndianKind::Big;
    }
    if arch.starts_with("arm") || arch.starts_with("thumb") || is_legacy_token(arch) {
        return if arch.ends_with("eb") {
            EndianKind::Big
        } else {
            EndianKind::Little
        };
    }
    if arch.starts_with("aarch64") {
        return EndianKind::Little;
    }
    EndianKind::Invalid
}

/// Profile of the revision named by a token.
pub fn parse_arch_profile(arch: &str) -> ProfileKind {
    parse_arch(arch).profile()
}

/// Major version of the revision named by a token, 0 if unknown.
pub fn parse_arch_version(arch: &str) -> u32 {
    parse_arch(arch).version()
}

/// Major version written after the `v` of a canonical name, if any.
fn written_major(canonical: &str) -> Option<u32> {
    let digits = canonical.strip_prefix('v')?;
    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    digits[..len].parse().ok()
}

/// A fully decomposed ARM-family architecture token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmArch<'a> {
    /// Effective instruction set after the availability rules.
    pub isa: IsaKind,
    pub endian: EndianKind,
    /// Canonical name as returned by [`canonical_arch_name`].
    pub canonical: &'a str,
    /// Table revision, `Invalid` for spellings the table does not know.
    pub kind: ArchKind,
    pub profile: ProfileKind,
    /// Major version from the table, or as written for unknown revisions.
    pub version: u32,
}

impl<'a> ArmArch<'a> {
    const INVALID: ArmArch<'static> = ArmArch {
        isa: IsaKind::Invalid,
        endian: EndianKind::Invalid,
        canonical: "",
        kind: ArchKind::Invalid,
        profile: ProfileKind::None,
        version: 0,
    };

    /// Decompose an architecture token.
    ///
    /// Tokens that are not ARM-family come back with `IsaKind::Invalid`
    /// and an empty canonical name. Two rules adjust the instruction set:
    /// Thumb does not exist before ARMv4, so `thumbv2`/`thumbv3` are
    /// rejected, and M-profile v6 cores only execute Thumb, so `armv6m`
    /// selects Thumb whatever prefix was written.
    pub fn parse(arch: &'a str) -> Self {
        let canonical = canonical_arch_name(arch);
        let requested = parse_arch_isa(arch);
        if canonical.is_empty() || requested == IsaKind::Invalid {
            return Self::INVALID;
        }

        let endian = parse_arch_endian(arch);
        let kind = arch_for_canonical(canonical);
        let written = written_major(canonical);
        let version = match kind {
            ArchKind::Invalid => written.unwrap_or(0),
            known => known.version(),
        };
        let profile = kind.profile();

        let isa = if requested == IsaKind::Thumb && written.is_some_and(|major| major < 4) {
            IsaKind::Invalid
        } else if profile == ProfileKind::M && version == 6 {
            IsaKind::Thumb
        } else {
            requested
        };

        Self {
            isa,
            endian,
            canonical,
            kind,
            profile,
            version,
        }
    }

    /// True if the token selected a usable instruction set.
    pub fn is_valid(&self) -> bool {
        self.isa != IsaKind::Invalid
    }
}
