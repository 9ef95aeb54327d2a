//! Object file format classification and per-target defaults.

use crate::arch::ArchKind;
use crate::os::OsKind;
use crate::table::{component_table, lookup_suffix, Axis, Component};

component_table! {
    /// The object file format a target emits.
    pub enum ObjectFormatKind(ObjectFormat) {
        Unknown => "",
        Coff => "coff",
        DxContainer => "dxcontainer",
        Elf => "elf",
        Goff => "goff",
        MachO => "macho",
        Spirv => "spirv",
        Wasm => "wasm",
        Xcoff => "xcoff",
    }
}

impl Component for ObjectFormatKind {
    const AXIS: Axis = Axis::ObjectFormat;
    const UNKNOWN: Self = ObjectFormatKind::Unknown;

    fn canonical_name(self) -> &'static str {
        ObjectFormatKind::canonical_name(self)
    }

    fn aliases() -> &'static [(&'static str, Self)] {
        ObjectFormatKind::ALIASES
    }

    fn classify(token: &str) -> Self {
        parse_object_format(token)
    }
}

/// Classify the object format spelled at the end of an environment token.
///
/// The longest matching suffix wins, so `xcoff` is XCOFF rather than COFF.
pub fn parse_object_format(token: &str) -> ObjectFormatKind {
    lookup_suffix(ObjectFormatKind::ALIASES, token).unwrap_or(ObjectFormatKind::Unknown)
}

/// The object format a target uses when its triple does not name one.
///
/// An unknown architecture on an unknown OS has no default.
pub fn default_object_format(arch: ArchKind, os: OsKind) -> ObjectFormatKind {
    use ArchKind::*;

    match arch {
        Unknown if os == OsKind::Unknown => ObjectFormatKind::Unknown,
        Unknown => match os {
            OsKind::Win32 | OsKind::Uefi => ObjectFormatKind::Coff,
            OsKind::Aix => ObjectFormatKind::Xcoff,
            OsKind::ZOs => ObjectFormatKind::Goff,
            OsKind::Vulkan => ObjectFormatKind::Spirv,
            OsKind::ShaderModel => ObjectFormatKind::DxContainer,
            os if os.is_darwin() => ObjectFormatKind::MachO,
            _ => ObjectFormatKind::Elf,
        },
        Aarch64 | Aarch64_32 | Arm | Thumb | X86 | X86_64 => match os {
            OsKind::Win32 | OsKind::Uefi => ObjectFormatKind::Coff,
            os if os.is_darwin() => ObjectFormatKind::MachO,
            _ => ObjectFormatKind::Elf,
        },
        Ppc | Ppc64 => match os {
            OsKind::Aix => ObjectFormatKind::Xcoff,
            os if os.is_darwin() => ObjectFormatKind::MachO,
            _ => ObjectFormatKind::Elf,
        },
        Systemz if os == OsKind::ZOs => ObjectFormatKind::Goff,
        Wasm32 | Wasm64 => ObjectFormatKind::Wasm,
        Spirv | Spirv32 | Spirv64 => ObjectFormatKind::Spirv,
        Dxil => ObjectFormatKind::DxContainer,
        _ => ObjectFormatKind::Elf,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffixes() {
        assert_eq!(parse_object_format("elf"), ObjectFormatKind::Elf);
        assert_eq!(parse_object_format("gnu-elf"), ObjectFormatKind::Elf);
        assert_eq!(parse_object_format("msvc-coff"), ObjectFormatKind::Coff);
        assert_eq!(parse_object_format("xcoff"), ObjectFormatKind::Xcoff);
        assert_eq!(parse_object_format("macho"), ObjectFormatKind::MachO);
        assert_eq!(parse_object_format("gnu"), ObjectFormatKind::Unknown);
        assert_eq!(parse_object_format(""), ObjectFormatKind::Unknown);
    }

    #[test]
    fn canonical_names_round_trip() {
        for &kind in ObjectFormatKind::ALL {
            assert_eq!(parse_object_format(kind.canonical_name()), kind);
        }
    }

    #[test]
    fn defaults() {
        use ObjectFormatKind as F;

        assert_eq!(default_object_format(ArchKind::X86_64, OsKind::Linux), F::Elf);
        assert_eq!(default_object_format(ArchKind::X86_64, OsKind::Win32), F::Coff);
        assert_eq!(default_object_format(ArchKind::Aarch64, OsKind::MacOsx), F::MachO);
        assert_eq!(default_object_format(ArchKind::Aarch64, OsKind::XrOs), F::MachO);
        assert_eq!(default_object_format(ArchKind::Thumb, OsKind::Uefi), F::Coff);
        assert_eq!(default_object_format(ArchKind::Armeb, OsKind::Win32), F::Elf);
        assert_eq!(default_object_format(ArchKind::Ppc64, OsKind::Aix), F::Xcoff);
        assert_eq!(default_object_format(ArchKind::Ppc, OsKind::Darwin), F::MachO);
        assert_eq!(default_object_format(ArchKind::Ppc64le, OsKind::Aix), F::Elf);
        assert_eq!(default_object_format(ArchKind::Systemz, OsKind::ZOs), F::Goff);
        assert_eq!(default_object_format(ArchKind::Systemz, OsKind::Linux), F::Elf);
        assert_eq!(default_object_format(ArchKind::Wasm32, OsKind::Wasi), F::Wasm);
        assert_eq!(default_object_format(ArchKind::Spirv, OsKind::Vulkan), F::Spirv);
        assert_eq!(default_object_format(ArchKind::Dxil, OsKind::ShaderModel), F::DxContainer);
        assert_eq!(default_object_format(ArchKind::Riscv64, OsKind::Unknown), F::Elf);
    }

    #[test]
    fn unknown_arch_defaults_follow_os() {
        use ObjectFormatKind as F;

        assert_eq!(default_object_format(ArchKind::Unknown, OsKind::Unknown), F::Unknown);
        assert_eq!(default_object_format(ArchKind::Unknown, OsKind::Linux), F::Elf);
        assert_eq!(default_object_format(ArchKind::Unknown, OsKind::Ios), F::MachO);
        assert_eq!(default_object_format(ArchKind::Unknown, OsKind::Win32), F::Coff);
        assert_eq!(default_object_format(ArchKind::Unknown, OsKind::Aix), F::Xcoff);
        assert_eq!(default_object_format(ArchKind::Unknown, OsKind::ZOs), F::Goff);
    }
}
