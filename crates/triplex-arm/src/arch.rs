//! The ARM architecture table.
//!
//! One row per architecture revision the parser recognizes. Lookups go
//! through the table, so the name, sub-architecture string, version and
//! profile of a revision can never disagree with each other.

use serde::{Deserialize, Serialize};

use crate::kinds::ProfileKind;

/// An ARM architecture revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ArchKind {
    /// Not a recognized revision.
    Invalid,
    ArmV4,
    /// ARMv4 with the Thumb instruction set.
    ArmV4T,
    ArmV5T,
    /// ARMv5T with DSP extensions.
    ArmV5TE,
    /// ARMv5TE with Jazelle.
    ArmV5TEJ,
    ArmV6,
    /// ARMv6 with multiprocessing extensions.
    ArmV6K,
    /// ARMv6 with Thumb-2.
    ArmV6T2,
    /// ARMv6K with TrustZone.
    ArmV6KZ,
    /// ARMv6-M, the Thumb-only microcontroller profile.
    ArmV6M,
    ArmV7A,
    /// ARMv7-A with virtualization extensions.
    ArmV7VE,
    ArmV7R,
    ArmV7M,
    /// ARMv7-M with DSP extensions.
    ArmV7EM,
    ArmV8A,
    ArmV8_1A,
    ArmV8_2A,
    ArmV8_3A,
    ArmV8_4A,
    ArmV8_5A,
    ArmV8_6A,
    ArmV8_7A,
    ArmV8_8A,
    ArmV8_9A,
    ArmV9A,
    ArmV9_1A,
    ArmV9_2A,
    ArmV9_3A,
    ArmV9_4A,
    ArmV9_5A,
    ArmV8R,
    /// ARMv8-M without the main extension.
    ArmV8MBaseline,
    /// ARMv8-M with the main extension.
    ArmV8MMainline,
    /// ARMv8.1-M mainline, the revision that adds the M-profile vector extension.
    ArmV8_1MMainline,
    // Non-standard names.
    /// Intel Wireless MMX, an ARMv5TE variant.
    IwMmxt,
    /// Second-generation Intel Wireless MMX.
    IwMmxt2,
    /// Intel XScale, an ARMv5TE core.
    XScale,
    /// Apple's ARMv7-A variant with VFPv4 (Swift cores).
    ArmV7S,
    /// Apple's ARMv7-A variant for watchOS.
    ArmV7K,
}

/// A row of the architecture table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchInfo {
    pub kind: ArchKind,
    /// Full architecture name, e.g. `armv8.1-a`.
    pub name: &'static str,
    /// Name used in the `Tag_CPU_name` build attribute, e.g. `8.1-A`.
    pub cpu_attr: &'static str,
    /// Sub-architecture feature name without the leading `+`, e.g. `v8.1a`.
    pub sub_arch: &'static str,
    /// Major architecture version.
    pub version: u32,
    pub profile: ProfileKind,
}

const fn row(
    kind: ArchKind,
    name: &'static str,
    cpu_attr: &'static str,
    sub_arch: &'static str,
    version: u32,
    profile: ProfileKind,
) -> ArchInfo {
    ArchInfo {
        kind,
        name,
        cpu_attr,
        sub_arch,
        version,
        profile,
    }
}

use ArchKind as K;
use ProfileKind as P;

/// Every known ARM architecture revision, in lookup order.
///
/// Name lookups take the first row whose name ends with the requested
/// suffix, so shorter names that are suffixes of longer ones come first.
pub const ARCH_NAMES: &[ArchInfo] = &[
    row(K::ArmV4, "armv4", "4", "v4", 4, P::None),
    row(K::ArmV4T, "armv4t", "4T", "v4t", 4, P::None),
    row(K::ArmV5T, "armv5t", "5T", "v5", 5, P::None),
    row(K::ArmV5TE, "armv5te", "5TE", "v5e", 5, P::None),
    row(K::ArmV5TEJ, "armv5tej", "5TEJ", "v5e", 5, P::None),
    row(K::ArmV6, "armv6", "6", "v6", 6, P::None),
    row(K::ArmV6K, "armv6k", "6K", "v6k", 6, P::None),
    row(K::ArmV6T2, "armv6t2", "6T2", "v6t2", 6, P::None),
    row(K::ArmV6KZ, "armv6kz", "6KZ", "v6kz", 6, P::None),
    row(K::ArmV6M, "armv6-m", "6-M", "v6m", 6, P::M),
    row(K::ArmV7A, "armv7-a", "7-A", "v7", 7, P::A),
    row(K::ArmV7VE, "armv7ve", "7VE", "v7ve", 7, P::A),
    row(K::ArmV7R, "armv7-r", "7-R", "v7r", 7, P::R),
    row(K::ArmV7M, "armv7-m", "7-M", "v7m", 7, P::M),
    row(K::ArmV7EM, "armv7e-m", "7E-M", "v7em", 7, P::M),
    row(K::ArmV8A, "armv8-a", "8-A", "v8a", 8, P::A),
    row(K::ArmV8_1A, "armv8.1-a", "8.1-A", "v8.1a", 8, P::A),
    row(K::ArmV8_2A, "armv8.2-a", "8.2-A", "v8.2a", 8, P::A),
    row(K::ArmV8_3A, "armv8.3-a", "8.3-A", "v8.3a", 8, P::A),
    row(K::ArmV8_4A, "armv8.4-a", "8.4-A", "v8.4a", 8, P::A),
    row(K::ArmV8_5A, "armv8.5-a", "8.5-A", "v8.5a", 8, P::A),
    row(K::ArmV8_6A, "armv8.6-a", "8.6-A", "v8.6a", 8, P::A),
    row(K::ArmV8_7A, "armv8.7-a", "8.7-A", "v8.7a", 8, P::A),
    row(K::ArmV8_8A, "armv8.8-a", "8.8-A", "v8.8a", 8, P::A),
    row(K::ArmV8_9A, "armv8.9-a", "8.9-A", "v8.9a", 8, P::A),
    row(K::ArmV9A, "armv9-a", "9-A", "v9a", 9, P::A),
    row(K::ArmV9_1A, "armv9.1-a", "9.1-A", "v9.1a", 9, P::A),
    row(K::ArmV9_2A, "armv9.2-a", "9.2-A", "v9.2a", 9, P::A),
    row(K::ArmV9_3A, "armv9.3-a", "9.3-A", "v9.3a", 9, P::A),
    row(K::ArmV9_4A, "armv9.4-a", "9.4-A", "v9.4a", 9, P::A),
    row(K::ArmV9_5A, "armv9.5-a", "9.5-A", "v9.5a", 9, P::A),
    row(K::ArmV8R, "armv8-r", "8-R", "v8r", 8, P::R),
    row(K::ArmV8MBaseline, "armv8-m.base", "8-M.Baseline", "v8m.base", 8, P::M),
    row(K::ArmV8MMainline, "armv8-m.main", "8-M.Mainline", "v8m.main", 8, P::M),
    row(K::ArmV8_1MMainline, "armv8.1-m.main", "8.1-M.Mainline", "v8.1m.main", 8, P::M),
    row(K::IwMmxt, "iwmmxt", "iwmmxt", "", 5, P::None),
    row(K::IwMmxt2, "iwmmxt2", "iwmmxt2", "", 5, P::None),
    row(K::XScale, "xscale", "xscale", "v5e", 5, P::None),
    row(K::ArmV7S, "armv7s", "7-S", "v7s", 7, P::None),
    row(K::ArmV7K, "armv7k", "7-K", "v7k", 7, P::A),
];

/// Look up the table row for a revision. `Invalid` has no row.
pub fn arch_info(kind: ArchKind) -> Option<&'static ArchInfo> {
    ARCH_NAMES.iter().find(|info| info.kind == kind)
}

impl ArchKind {
    /// Full architecture name, empty for `Invalid`.
    pub fn name(self) -> &'static str {
        arch_info(self).map_or("", |info| info.name)
    }

    /// Major architecture version, 0 for `Invalid`.
    pub fn version(self) -> u32 {
        arch_info(self).map_or(0, |info| info.version)
    }

    pub fn profile(self) -> ProfileKind {
        arch_info(self).map_or(ProfileKind::None, |info| info.profile)
    }

    /// Sub-architecture feature name, e.g. `v7em`.
    pub fn sub_arch(self) -> &'static str {
        arch_info(self).map_or("", |info| info.sub_arch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_but_invalid_has_one_row() {
        for info in ARCH_NAMES {
            assert_ne!(info.kind, ArchKind::Invalid);
            let rows = ARCH_NAMES.iter().filter(|r| r.kind == info.kind).count();
            assert_eq!(rows, 1, "{:?}", info.kind);
        }
        assert!(arch_info(ArchKind::Invalid).is_none());
    }

    #[test]
    fn row_accessors() {
        assert_eq!(ArchKind::ArmV8_1A.name(), "armv8.1-a");
        assert_eq!(ArchKind::ArmV8_1A.version(), 8);
        assert_eq!(ArchKind::ArmV8_1A.profile(), ProfileKind::A);
        assert_eq!(ArchKind::ArmV7EM.sub_arch(), "v7em");
        assert_eq!(ArchKind::ArmV6M.profile(), ProfileKind::M);
        assert_eq!(ArchKind::XScale.version(), 5);
        assert_eq!(ArchKind::Invalid.version(), 0);
        assert_eq!(ArchKind::Invalid.name(), "");
    }

    #[test]
    fn profiles_by_family() {
        for info in ARCH_NAMES {
            match info.profile {
                ProfileKind::M => assert!(info.name.contains("-m") || info.name.ends_with("m.main")),
                ProfileKind::R => assert!(info.name.ends_with("-r")),
                ProfileKind::A => assert!(info.version >= 7),
                ProfileKind::None => {}
            }
        }
    }
}
