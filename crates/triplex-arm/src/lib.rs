//! ARM architecture-name parsing.
//!
//! The architecture slot of an ARM-family triple packs several facts into
//! one token: `thumbebv7m` names the Thumb instruction set, big-endian byte
//! order and the ARMv7-M architecture. This crate takes such tokens apart:
//!
//! - **ISA:** ARM, Thumb or AArch64 ([`IsaKind`])
//! - **Endianness:** from an `eb` marker after the ISA or at the end ([`EndianKind`])
//! - **Canonical name:** the `vN[.M]...` suffix, e.g. `v8.1a` ([`canonical_arch_name`])
//! - **Architecture:** the entry in the ARM architecture table ([`ArchKind`])
//! - **Profile and version:** A/R/M and the major version ([`ProfileKind`])
//!
//! [`ArmArch::parse`] combines all of these and applies the rules that
//! constrain which instruction set a token can actually select.

pub mod arch;
pub mod kinds;
pub mod parse;

pub use arch::{arch_info, ArchInfo, ArchKind, ARCH_NAMES};
pub use kinds::{EndianKind, IsaKind, ProfileKind};
pub use parse::{
    arch_synonym, canonical_arch_name, is_legacy_arch_name, parse_arch, parse_arch_endian,
    parse_arch_isa, parse_arch_profile, parse_arch_version, ArmArch,
};
