//! Pointer-width and byte-order variants of a triple's architecture, and
//! triple compatibility.

use crate::arch::{ArchKind, SubArchKind};
use crate::environment::EnvironmentKind;
use crate::triple::Triple;
use crate::vendor::VendorKind;

/// The 32-bit counterpart of an architecture, `None` if it already is one.
fn arch_32bit_variant(arch: ArchKind) -> Option<ArchKind> {
    use ArchKind::*;

    let variant = match arch {
        Unknown | Amdgcn | Avr | Bpfeb | Bpfel | Msp430 | Systemz | Ve => Unknown,

        Aarch64_32 | Amdil | Arc | Arm | Armeb | Csky | Dxil | Hexagon | Hsail | Kalimba
        | Lanai | Le32 | Loongarch32 | M68k | Mips | Mipsel | Nvptx | Ppc | Ppcle | R600
        | Renderscript32 | Riscv32 | Shave | Sparc | Sparcel | Spir | Spirv32 | Tce | Tcele
        | Thumb | Thumbeb | Wasm32 | X86 | Xcore | Xtensa => return None,

        Aarch64 => Arm,
        Aarch64Be => Armeb,
        Amdil64 => Amdil,
        Hsail64 => Hsail,
        Le64 => Le32,
        Loongarch64 => Loongarch32,
        Mips64 => Mips,
        Mips64el => Mipsel,
        Nvptx64 => Nvptx,
        Ppc64 => Ppc,
        Ppc64le => Ppcle,
        Renderscript64 => Renderscript32,
        Riscv64 => Riscv32,
        Sparcv9 => Sparc,
        Spir64 => Spir,
        Spirv | Spirv64 => Spirv32,
        Wasm64 => Wasm32,
        X86_64 => X86,
    };
    Some(variant)
}

/// The 64-bit counterpart of an architecture, `None` if it already is one.
fn arch_64bit_variant(arch: ArchKind) -> Option<ArchKind> {
    use ArchKind::*;

    let variant = match arch {
        Unknown | Arc | Avr | Csky | Dxil | Hexagon | Kalimba | Lanai | M68k | Msp430 | R600
        | Shave | Sparcel | Tce | Tcele | Xcore | Xtensa => Unknown,

        Aarch64 | Aarch64Be | Amdgcn | Amdil64 | Bpfeb | Bpfel | Hsail64 | Le64 | Loongarch64
        | Mips64 | Mips64el | Nvptx64 | Ppc64 | Ppc64le | Renderscript64 | Riscv64 | Sparcv9
        | Spir64 | Spirv64 | Systemz | Ve | Wasm64 | X86_64 => return None,

        Aarch64_32 => Aarch64,
        Amdil => Amdil64,
        Arm | Thumb => Aarch64,
        Armeb | Thumbeb => Aarch64Be,
        Hsail => Hsail64,
        Le32 => Le64,
        Loongarch32 => Loongarch64,
        Mips => Mips64,
        Mipsel => Mips64el,
        Nvptx => Nvptx64,
        Ppc => Ppc64,
        Ppcle => Ppc64le,
        Renderscript32 => Renderscript64,
        Riscv32 => Riscv64,
        Sparc => Sparcv9,
        Spir => Spir64,
        Spirv | Spirv32 => Spirv64,
        Wasm32 => Wasm64,
        X86 => X86_64,
    };
    Some(variant)
}

/// The big-endian counterpart of a little-endian architecture.
///
/// ARM and Thumb have no variant here: switching them would drop the
/// revision spelled in the architecture name.
fn big_endian_variant(arch: ArchKind) -> ArchKind {
    use ArchKind::*;

    match arch {
        Aarch64 => Aarch64Be,
        Bpfel => Bpfeb,
        Mips64el => Mips64,
        Mipsel => Mips,
        Ppcle => Ppc,
        Ppc64le => Ppc64,
        Sparcel => Sparc,
        Tcele => Tce,
        _ => Unknown,
    }
}

/// The little-endian counterpart of a big-endian architecture.
fn little_endian_variant(arch: ArchKind) -> ArchKind {
    use ArchKind::*;

    match arch {
        Aarch64Be => Aarch64,
        Bpfeb => Bpfel,
        Mips64 => Mips64el,
        Mips => Mipsel,
        Ppc => Ppcle,
        Ppc64 => Ppc64le,
        Sparc => Sparcel,
        Tce => Tcele,
        _ => Unknown,
    }
}

/// MIPS and SPIR-V keep their release or version across variants.
fn keeps_sub_arch(arch: ArchKind) -> bool {
    matches!(
        arch,
        ArchKind::Mips
            | ArchKind::Mipsel
            | ArchKind::Mips64
            | ArchKind::Mips64el
            | ArchKind::Spirv
            | ArchKind::Spirv32
            | ArchKind::Spirv64
    )
}

impl Triple {
    /// Pointer width of the architecture in bits, 0 if unknown.
    pub fn arch_pointer_bit_width(&self) -> u32 {
        self.arch().pointer_bit_width()
    }

    pub fn is_arch_64bit(&self) -> bool {
        self.arch_pointer_bit_width() == 64
    }

    pub fn is_arch_32bit(&self) -> bool {
        self.arch_pointer_bit_width() == 32
    }

    pub fn is_arch_16bit(&self) -> bool {
        self.arch_pointer_bit_width() == 16
    }

    /// True if the architecture has `bits`-wide pointers.
    ///
    /// # Panics
    ///
    /// Panics unless `bits` is 16, 32 or 64.
    pub fn is_arch_width(&self, bits: u32) -> bool {
        match bits {
            16 => self.is_arch_16bit(),
            32 => self.is_arch_32bit(),
            64 => self.is_arch_64bit(),
            _ => panic!("unsupported pointer width {bits}, expected 16, 32 or 64"),
        }
    }

    /// Rebuild this triple with `arch` in place of its architecture.
    fn with_arch(&self, arch: ArchKind) -> Triple {
        let sub_arch = if keeps_sub_arch(arch) {
            self.sub_arch()
        } else {
            SubArchKind::NoSubArch
        };
        let mut triple = self.clone();
        triple.set_arch(arch, sub_arch);
        triple
    }

    /// This triple with the 32-bit variant of its architecture.
    ///
    /// The architecture becomes `unknown` when there is no such variant.
    pub fn arch_32bit_variant(&self) -> Triple {
        match arch_32bit_variant(self.arch()) {
            Some(arch) => self.with_arch(arch),
            None => self.clone(),
        }
    }

    /// This triple with the 64-bit variant of its architecture.
    ///
    /// The architecture becomes `unknown` when there is no such variant.
    pub fn arch_64bit_variant(&self) -> Triple {
        match arch_64bit_variant(self.arch()) {
            Some(arch) => self.with_arch(arch),
            None => self.clone(),
        }
    }

    /// This triple with a big-endian architecture.
    pub fn big_endian_arch_variant(&self) -> Triple {
        if !self.is_little_endian() {
            return self.clone();
        }
        self.with_arch(big_endian_variant(self.arch()))
    }

    /// This triple with a little-endian architecture.
    pub fn little_endian_arch_variant(&self) -> Triple {
        if self.is_little_endian() {
            return self.clone();
        }
        self.with_arch(little_endian_variant(self.arch()))
    }

    pub fn is_little_endian(&self) -> bool {
        self.arch().is_little_endian()
    }

    /// True if objects built for the two triples can be linked together.
    ///
    /// ARM and Thumb of the same byte order mix freely. Apple targets
    /// ignore the environment and object format, which carry the
    /// deployment version.
    pub fn is_compatible_with(&self, other: &Triple) -> bool {
        let arm_thumb_pair = matches!(
            (self.arch(), other.arch()),
            (ArchKind::Thumb, ArchKind::Arm)
                | (ArchKind::Arm, ArchKind::Thumb)
                | (ArchKind::Thumbeb, ArchKind::Armeb)
                | (ArchKind::Armeb, ArchKind::Thumbeb)
        );
        let same_platform = self.sub_arch() == other.sub_arch()
            && self.vendor() == other.vendor()
            && self.os() == other.os();
        let same_abi = self.environment() == other.environment()
            && self.object_format() == other.object_format();

        if arm_thumb_pair {
            return same_platform && (self.vendor() == VendorKind::Apple || same_abi);
        }
        if self.vendor() == VendorKind::Apple {
            return self.arch() == other.arch() && same_platform;
        }
        self == other
    }

    /// The triple string to use when linking objects for both triples.
    ///
    /// For Apple targets this is whichever has the newer OS version;
    /// otherwise `other` wins.
    pub fn merge(&self, other: &Triple) -> String {
        if self.vendor() == VendorKind::Apple && other.is_os_version_lt_triple(self) {
            return self.as_str().to_string();
        }
        other.as_str().to_string()
    }

    /// True if the architecture is AArch64 with `bits`-wide pointers.
    ///
    /// ILP32 AArch64, either `aarch64_32` or the `gnu_ilp32` environment,
    /// has 32-bit pointers.
    ///
    /// # Panics
    ///
    /// Panics unless `bits` is 32 or 64.
    pub fn is_aarch64_with_pointer_width(&self, bits: u32) -> bool {
        assert!(bits == 32 || bits == 64, "unsupported AArch64 pointer width {bits}, expected 32 or 64");
        if !self.is_aarch64() {
            return false;
        }
        let ilp32 = self.arch() == ArchKind::Aarch64_32 || self.environment() == EnvironmentKind::GnuIlp32;
        if ilp32 {
            bits == 32
        } else {
            bits == 64
        }
    }
}
