//! Architecture and sub-architecture classification.
//!
//! The architecture slot is matched in three stages: the exact spelling
//! table, then the ARM-family sub-parser for `arm*`/`thumb*`/`aarch64*`
//! tokens and the legacy ARM names, then the `kalimba*` and `bpf` special
//! cases. The sub-architecture is read from the same token independently.

use serde::{Deserialize, Serialize};
use triplex_arm::{ArchKind as ArmArchKind, ArmArch, EndianKind, IsaKind};
use triplex_version::VersionTuple;

use crate::table::{component_table, lookup_exact, Axis, Component};

component_table! {
    /// A CPU architecture.
    pub enum ArchKind(Arch) {
        Unknown => "unknown",
        /// ARM (little endian): arm, armv.*, xscale
        Arm => "arm" | "xscale",
        /// ARM (big endian): armeb
        Armeb => "armeb" | "xscaleeb",
        /// AArch64 (little endian): aarch64
        Aarch64 => "aarch64" | "arm64" | "arm64e" | "arm64ec",
        /// AArch64 (big endian): aarch64_be
        Aarch64Be => "aarch64_be",
        /// AArch64 (little endian) ILP32: aarch64_32
        Aarch64_32 => "aarch64_32" | "arm64_32",
        /// Synopsys ARC
        Arc => "arc",
        /// Atmel AVR microcontroller
        Avr => "avr",
        /// eBPF (little endian)
        Bpfel => "bpfel" | "bpf_le",
        /// eBPF (big endian)
        Bpfeb => "bpfeb" | "bpf_be",
        Csky => "csky",
        /// DXIL 32-bit DirectX bytecode
        Dxil => "dxil"
            | "dxilv1.0" | "dxilv1.1" | "dxilv1.2" | "dxilv1.3" | "dxilv1.4"
            | "dxilv1.5" | "dxilv1.6" | "dxilv1.7" | "dxilv1.8",
        Hexagon => "hexagon",
        Loongarch32 => "loongarch32",
        Loongarch64 => "loongarch64",
        /// Motorola 680x0 family
        M68k => "m68k",
        Mips => "mips" | "mipseb" | "mipsallegrex" | "mipsisa32r6" | "mipsr6",
        Mipsel => "mipsel" | "mipsallegrexel" | "mipsisa32r6el" | "mipsr6el",
        Mips64 => "mips64" | "mips64eb" | "mipsn32" | "mipsisa64r6" | "mips64r6" | "mipsn32r6",
        Mips64el => "mips64el" | "mipsn32el" | "mipsisa64r6el" | "mips64r6el" | "mipsn32r6el",
        Msp430 => "msp430",
        Ppc => "powerpc" | "powerpcspe" | "ppc" | "ppc32",
        Ppcle => "powerpcle" | "ppcle" | "ppc32le",
        Ppc64 => "powerpc64" | "ppu" | "ppc64",
        Ppc64le => "powerpc64le" | "ppc64le",
        /// AMD GPUs HD2XXX - HD6XXX
        R600 => "r600",
        /// AMD GCN GPUs
        Amdgcn => "amdgcn",
        Riscv32 => "riscv32",
        Riscv64 => "riscv64",
        Sparc => "sparc",
        Sparcv9 => "sparcv9" | "sparc64",
        /// SPARC with little-endian byte order
        Sparcel => "sparcel",
        Systemz => "s390x" | "systemz",
        Tce => "tce",
        Tcele => "tcele",
        /// Thumb (little endian): thumb, thumbv.*
        Thumb => "thumb",
        /// Thumb (big endian): thumbeb
        Thumbeb => "thumbeb",
        X86 => "i386" | "i486" | "i586" | "i686" | "i786" | "i886" | "i986",
        X86_64 => "x86_64" | "amd64" | "x86_64h",
        Xcore => "xcore",
        /// Tensilica Xtensa
        Xtensa => "xtensa",
        Nvptx => "nvptx",
        Nvptx64 => "nvptx64",
        /// Generic little-endian 32-bit CPU (PNaCl)
        Le32 => "le32",
        /// Generic little-endian 64-bit CPU (PNaCl)
        Le64 => "le64",
        Amdil => "amdil",
        Amdil64 => "amdil64",
        Hsail => "hsail",
        Hsail64 => "hsail64",
        /// SPIR for OpenCL, 32-bit
        Spir => "spir",
        /// SPIR for OpenCL, 64-bit
        Spir64 => "spir64",
        /// SPIR-V with logical memory layout
        Spirv => "spirv"
            | "spirv1.0" | "spirv1.1" | "spirv1.2" | "spirv1.3"
            | "spirv1.4" | "spirv1.5" | "spirv1.6",
        Spirv32 => "spirv32"
            | "spirv32v1.0" | "spirv32v1.1" | "spirv32v1.2" | "spirv32v1.3"
            | "spirv32v1.4" | "spirv32v1.5" | "spirv32v1.6",
        Spirv64 => "spirv64"
            | "spirv64v1.0" | "spirv64v1.1" | "spirv64v1.2" | "spirv64v1.3"
            | "spirv64v1.4" | "spirv64v1.5" | "spirv64v1.6",
        Kalimba => "kalimba",
        /// Movidius vector VLIW processors
        Shave => "shave",
        Lanai => "lanai",
        Wasm32 => "wasm32",
        Wasm64 => "wasm64",
        Renderscript32 => "renderscript32",
        Renderscript64 => "renderscript64",
        /// NEC SX-Aurora Vector Engine
        Ve => "ve",
    }
}

impl Component for ArchKind {
    const AXIS: Axis = Axis::Arch;
    const UNKNOWN: Self = ArchKind::Unknown;

    fn canonical_name(self) -> &'static str {
        ArchKind::canonical_name(self)
    }

    fn aliases() -> &'static [(&'static str, Self)] {
        ArchKind::ALIASES
    }

    fn classify(token: &str) -> Self {
        parse_arch(token)
    }
}

/// A refinement of the architecture: an ARM revision, a SPIR-V or DXIL
/// version, a Kalimba generation, or a vendor-specific variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum SubArchKind {
    #[default]
    NoSubArch,

    ArmV9_5A,
    ArmV9_4A,
    ArmV9_3A,
    ArmV9_2A,
    ArmV9_1A,
    ArmV9,
    ArmV8_9A,
    ArmV8_8A,
    ArmV8_7A,
    ArmV8_6A,
    ArmV8_5A,
    ArmV8_4A,
    ArmV8_3A,
    ArmV8_2A,
    ArmV8_1A,
    ArmV8,
    ArmV8R,
    ArmV8MBaseline,
    ArmV8MMainline,
    ArmV8_1MMainline,
    ArmV7,
    ArmV7EM,
    ArmV7M,
    ArmV7S,
    ArmV7K,
    ArmV7VE,
    ArmV6,
    ArmV6M,
    ArmV6K,
    ArmV6T2,
    ArmV5,
    ArmV5TE,
    ArmV4T,

    Arm64E,
    Arm64EC,

    KalimbaV3,
    KalimbaV4,
    KalimbaV5,

    MipsR6,

    PpcSpe,

    SpirvV10,
    SpirvV11,
    SpirvV12,
    SpirvV13,
    SpirvV14,
    SpirvV15,
    SpirvV16,

    DxilV1_0,
    DxilV1_1,
    DxilV1_2,
    DxilV1_3,
    DxilV1_4,
    DxilV1_5,
    DxilV1_6,
    DxilV1_7,
    DxilV1_8,
}

/// SPIR-V sub-architectures by version suffix.
const SPIRV_SUB_ARCHES: &[(&str, SubArchKind, u32)] = &[
    ("v1.0", SubArchKind::SpirvV10, 0),
    ("v1.1", SubArchKind::SpirvV11, 1),
    ("v1.2", SubArchKind::SpirvV12, 2),
    ("v1.3", SubArchKind::SpirvV13, 3),
    ("v1.4", SubArchKind::SpirvV14, 4),
    ("v1.5", SubArchKind::SpirvV15, 5),
    ("v1.6", SubArchKind::SpirvV16, 6),
];

/// DXIL sub-architectures by version suffix.
const DXIL_SUB_ARCHES: &[(&str, SubArchKind, u32)] = &[
    ("v1.0", SubArchKind::DxilV1_0, 0),
    ("v1.1", SubArchKind::DxilV1_1, 1),
    ("v1.2", SubArchKind::DxilV1_2, 2),
    ("v1.3", SubArchKind::DxilV1_3, 3),
    ("v1.4", SubArchKind::DxilV1_4, 4),
    ("v1.5", SubArchKind::DxilV1_5, 5),
    ("v1.6", SubArchKind::DxilV1_6, 6),
    ("v1.7", SubArchKind::DxilV1_7, 7),
    ("v1.8", SubArchKind::DxilV1_8, 8),
];

const KALIMBA_SUB_ARCHES: &[(&str, SubArchKind)] = &[
    ("kalimba3", SubArchKind::KalimbaV3),
    ("kalimba4", SubArchKind::KalimbaV4),
    ("kalimba5", SubArchKind::KalimbaV5),
];

impl SubArchKind {
    /// The newest DXIL version this library knows about.
    pub const LATEST_DXIL: SubArchKind = SubArchKind::DxilV1_8;

    /// SPIR-V version named by a SPIR-V sub-architecture.
    pub fn spirv_version(self) -> Option<VersionTuple> {
        SPIRV_SUB_ARCHES
            .iter()
            .find(|(_, kind, _)| *kind == self)
            .map(|&(_, _, minor)| VersionTuple::major_minor(1, minor))
    }

    /// DXIL version named by a DXIL sub-architecture.
    pub fn dxil_version(self) -> Option<VersionTuple> {
        DXIL_SUB_ARCHES
            .iter()
            .find(|(_, kind, _)| *kind == self)
            .map(|&(_, _, minor)| VersionTuple::major_minor(1, minor))
    }

    /// DXIL sub-architecture for DXIL version `1.minor`.
    pub fn dxil_from_minor(minor: u32) -> Option<SubArchKind> {
        DXIL_SUB_ARCHES
            .iter()
            .find(|&&(_, _, m)| m == minor)
            .map(|&(_, kind, _)| kind)
    }
}

fn is_arm_family(token: &str) -> bool {
    token.starts_with("arm")
        || token.starts_with("thumb")
        || token.starts_with("aarch64")
        || triplex_arm::is_legacy_arch_name(token.strip_suffix("eb").unwrap_or(token))
}

/// Map an ARM-family token through the ARM sub-parser.
fn parse_arm_arch(token: &str) -> ArchKind {
    let arm = ArmArch::parse(token);
    let big = arm.endian == EndianKind::Big;
    match arm.isa {
        IsaKind::Invalid => ArchKind::Unknown,
        IsaKind::Arm if big => ArchKind::Armeb,
        IsaKind::Arm => ArchKind::Arm,
        IsaKind::Thumb if big => ArchKind::Thumbeb,
        IsaKind::Thumb => ArchKind::Thumb,
        IsaKind::AArch64 if big => ArchKind::Aarch64Be,
        IsaKind::AArch64 if token.starts_with("arm64_32") || token.starts_with("aarch64_32") => {
            ArchKind::Aarch64_32
        }
        IsaKind::AArch64 => ArchKind::Aarch64,
    }
}

/// The BPF variant matching the byte order of the host.
fn host_bpf_arch() -> ArchKind {
    if cfg!(target_endian = "big") {
        ArchKind::Bpfeb
    } else {
        ArchKind::Bpfel
    }
}

/// Classify an architecture token.
///
/// ```
/// use triplex_core::{parse_arch, ArchKind};
///
/// assert_eq!(parse_arch("x86_64"), ArchKind::X86_64);
/// assert_eq!(parse_arch("thumbv7em"), ArchKind::Thumb);
/// assert_eq!(parse_arch("armebv7"), ArchKind::Armeb);
/// assert_eq!(parse_arch("nonsense"), ArchKind::Unknown);
/// ```
pub fn parse_arch(token: &str) -> ArchKind {
    if let Some(kind) = lookup_exact(ArchKind::ALIASES, token) {
        return kind;
    }
    if token.starts_with("kalimba") {
        return ArchKind::Kalimba;
    }
    if is_arm_family(token) {
        return parse_arm_arch(token);
    }
    if token == "bpf" {
        return host_bpf_arch();
    }
    ArchKind::Unknown
}

fn arm_sub_arch(kind: ArmArchKind) -> SubArchKind {
    use ArmArchKind as A;
    use SubArchKind as S;

    match kind {
        A::ArmV4T => S::ArmV4T,
        A::ArmV5T => S::ArmV5,
        A::ArmV5TE | A::IwMmxt | A::IwMmxt2 | A::XScale | A::ArmV5TEJ => S::ArmV5TE,
        A::ArmV6 => S::ArmV6,
        A::ArmV6K | A::ArmV6KZ => S::ArmV6K,
        A::ArmV6T2 => S::ArmV6T2,
        A::ArmV6M => S::ArmV6M,
        A::ArmV7A | A::ArmV7R => S::ArmV7,
        A::ArmV7VE => S::ArmV7VE,
        A::ArmV7K => S::ArmV7K,
        A::ArmV7M => S::ArmV7M,
        A::ArmV7S => S::ArmV7S,
        A::ArmV7EM => S::ArmV7EM,
        A::ArmV8A => S::ArmV8,
        A::ArmV8_1A => S::ArmV8_1A,
        A::ArmV8_2A => S::ArmV8_2A,
        A::ArmV8_3A => S::ArmV8_3A,
        A::ArmV8_4A => S::ArmV8_4A,
        A::ArmV8_5A => S::ArmV8_5A,
        A::ArmV8_6A => S::ArmV8_6A,
        A::ArmV8_7A => S::ArmV8_7A,
        A::ArmV8_8A => S::ArmV8_8A,
        A::ArmV8_9A => S::ArmV8_9A,
        A::ArmV9A => S::ArmV9,
        A::ArmV9_1A => S::ArmV9_1A,
        A::ArmV9_2A => S::ArmV9_2A,
        A::ArmV9_3A => S::ArmV9_3A,
        A::ArmV9_4A => S::ArmV9_4A,
        A::ArmV9_5A => S::ArmV9_5A,
        A::ArmV8R => S::ArmV8R,
        A::ArmV8MBaseline => S::ArmV8MBaseline,
        A::ArmV8MMainline => S::ArmV8MMainline,
        A::ArmV8_1MMainline => S::ArmV8_1MMainline,
        A::Invalid | A::ArmV4 => S::NoSubArch,
    }
}

fn versioned_sub_arch(token: &str, table: &[(&str, SubArchKind, u32)]) -> SubArchKind {
    table
        .iter()
        .find(|(suffix, _, _)| token.ends_with(suffix))
        .map_or(SubArchKind::NoSubArch, |&(_, kind, _)| kind)
}

/// Read the sub-architecture from an architecture token.
pub fn parse_sub_arch(token: &str) -> SubArchKind {
    if token.starts_with("mips") && (token.ends_with("r6el") || token.ends_with("r6")) {
        return SubArchKind::MipsR6;
    }
    match token {
        "powerpcspe" => return SubArchKind::PpcSpe,
        "arm64e" => return SubArchKind::Arm64E,
        "arm64ec" => return SubArchKind::Arm64EC,
        _ => {}
    }
    if token.starts_with("spirv") {
        return versioned_sub_arch(token, SPIRV_SUB_ARCHES);
    }
    if token.starts_with("dxil") {
        return versioned_sub_arch(token, DXIL_SUB_ARCHES);
    }
    if let Some(&(_, kind)) = KALIMBA_SUB_ARCHES.iter().find(|(suffix, _)| token.ends_with(suffix)) {
        return kind;
    }
    if !is_arm_family(token) {
        return SubArchKind::NoSubArch;
    }
    arm_sub_arch(triplex_arm::parse_arch(token))
}

impl ArchKind {
    /// Pointer width in bits: 16, 32 or 64, or 0 for `Unknown`.
    pub fn pointer_bit_width(self) -> u32 {
        use ArchKind::*;

        match self {
            Unknown => 0,

            Avr | Msp430 => 16,

            Aarch64_32 | Amdil | Arc | Arm | Armeb | Csky | Dxil | Hexagon | Hsail | Kalimba
            | Lanai | Le32 | Loongarch32 | M68k | Mips | Mipsel | Nvptx | Ppc | Ppcle | R600
            | Renderscript32 | Riscv32 | Shave | Sparc | Sparcel | Spir | Spirv32 | Tce | Tcele
            | Thumb | Thumbeb | Wasm32 | X86 | Xcore | Xtensa => 32,

            Aarch64 | Aarch64Be | Amdgcn | Amdil64 | Bpfeb | Bpfel | Hsail64 | Le64
            | Loongarch64 | Mips64 | Mips64el | Nvptx64 | Ppc64 | Ppc64le | Renderscript64
            | Riscv64 | Sparcv9 | Spirv | Spir64 | Spirv64 | Systemz | Ve | Wasm64 | X86_64 => 64,
        }
    }

    /// Prefix of the architecture's compiler builtins, e.g. `x86` or `nvvm`.
    pub fn prefix(self) -> Option<&'static str> {
        use ArchKind::*;

        let prefix = match self {
            Aarch64 | Aarch64Be | Aarch64_32 => "aarch64",
            Arc => "arc",
            Arm | Armeb | Thumb | Thumbeb => "arm",
            Avr => "avr",
            Ppc64 | Ppc64le | Ppc | Ppcle => "ppc",
            M68k => "m68k",
            Mips | Mipsel | Mips64 | Mips64el => "mips",
            Hexagon => "hexagon",
            Amdgcn => "amdgcn",
            R600 => "r600",
            Bpfel | Bpfeb => "bpf",
            Sparcv9 | Sparcel | Sparc => "sparc",
            Systemz => "s390",
            X86 | X86_64 => "x86",
            Xcore => "xcore",
            Nvptx | Nvptx64 => "nvvm",
            Le32 => "le32",
            Le64 => "le64",
            Amdil | Amdil64 => "amdil",
            Hsail | Hsail64 => "hsail",
            Spir | Spir64 => "spir",
            Spirv | Spirv32 | Spirv64 => "spv",
            Kalimba => "kalimba",
            Lanai => "lanai",
            Shave => "shave",
            Wasm32 | Wasm64 => "wasm",
            Riscv32 | Riscv64 => "riscv",
            Ve => "ve",
            Csky => "csky",
            Loongarch32 | Loongarch64 => "loongarch",
            Dxil => "dx",
            Xtensa => "xtensa",
            Unknown | Msp430 | Tce | Tcele | Renderscript32 | Renderscript64 => return None,
        };
        Some(prefix)
    }

    /// The architecture for a code-generator backend name such as `x86-64`.
    ///
    /// Backend names overlap with triple spellings but are not the same
    /// set: `x86` and `x86-64` are backend names, `i686` and `amd64` are not.
    pub fn from_backend_name(name: &str) -> ArchKind {
        use ArchKind::*;

        match name {
            "aarch64" | "arm64" => Aarch64,
            "aarch64_be" => Aarch64Be,
            "aarch64_32" | "arm64_32" => Aarch64_32,
            "arc" => Arc,
            "arm" => Arm,
            "armeb" => Armeb,
            "avr" => Avr,
            "bpf" => host_bpf_arch(),
            "bpf_be" | "bpfeb" => Bpfeb,
            "bpf_le" | "bpfel" => Bpfel,
            "mips" => Mips,
            "mipsel" => Mipsel,
            "mips64" => Mips64,
            "mips64el" => Mips64el,
            "msp430" => Msp430,
            "ppc64" => Ppc64,
            "ppc32" | "ppc" => Ppc,
            "ppc32le" | "ppcle" => Ppcle,
            "ppc64le" => Ppc64le,
            "r600" => R600,
            "amdgcn" => Amdgcn,
            "riscv32" => Riscv32,
            "riscv64" => Riscv64,
            "hexagon" => Hexagon,
            "sparc" => Sparc,
            "sparcel" => Sparcel,
            "sparcv9" => Sparcv9,
            "s390x" | "systemz" => Systemz,
            "tce" => Tce,
            "tcele" => Tcele,
            "thumb" => Thumb,
            "thumbeb" => Thumbeb,
            "x86" | "i386" => X86,
            "x86-64" => X86_64,
            "xcore" => Xcore,
            "nvptx" => Nvptx,
            "nvptx64" => Nvptx64,
            "le32" => Le32,
            "le64" => Le64,
            "amdil" => Amdil,
            "amdil64" => Amdil64,
            "hsail" => Hsail,
            "hsail64" => Hsail64,
            "spir" => Spir,
            "spir64" => Spir64,
            "spirv" => Spirv,
            "spirv32" => Spirv32,
            "spirv64" => Spirv64,
            "kalimba" => Kalimba,
            "lanai" => Lanai,
            "shave" => Shave,
            "wasm32" => Wasm32,
            "wasm64" => Wasm64,
            "renderscript32" => Renderscript32,
            "renderscript64" => Renderscript64,
            "ve" => Ve,
            "csky" => Csky,
            "loongarch32" => Loongarch32,
            "loongarch64" => Loongarch64,
            "dxil" => Dxil,
            "xtensa" => Xtensa,
            _ => Unknown,
        }
    }

    /// True if the architecture stores multi-byte values little-endian.
    pub fn is_little_endian(self) -> bool {
        use ArchKind::*;

        matches!(
            self,
            Aarch64 | Aarch64_32 | Amdgcn | Amdil64 | Amdil | Arm | Avr | Bpfel | Csky | Dxil
                | Hexagon | Hsail64 | Hsail | Kalimba | Le32 | Le64 | Loongarch32 | Loongarch64
                | Mips64el | Mipsel | Msp430 | Nvptx64 | Nvptx | Ppcle | Ppc64le | R600
                | Renderscript32 | Renderscript64 | Riscv32 | Riscv64 | Shave | Sparcel | Spir64
                | Spir | Spirv | Spirv32 | Spirv64 | Tcele | Thumb | Ve | Wasm32 | Wasm64 | X86
                | X86_64 | Xcore | Xtensa
        )
    }
}

/// Architecture spelling for a kind and sub-architecture pair.
///
/// Most pairs use the canonical architecture name; MIPS release 6, the
/// `arm64e`/`arm64ec` variants and DXIL versions have spellings of their own.
pub fn arch_name_with_sub_arch(kind: ArchKind, sub_arch: SubArchKind) -> &'static str {
    match (kind, sub_arch) {
        (ArchKind::Mips, SubArchKind::MipsR6) => "mipsisa32r6",
        (ArchKind::Mipsel, SubArchKind::MipsR6) => "mipsisa32r6el",
        (ArchKind::Mips64, SubArchKind::MipsR6) => "mipsisa64r6",
        (ArchKind::Mips64el, SubArchKind::MipsR6) => "mipsisa64r6el",
        (ArchKind::Aarch64, SubArchKind::Arm64E) => "arm64e",
        (ArchKind::Aarch64, SubArchKind::Arm64EC) => "arm64ec",
        (ArchKind::Dxil, sub) => match sub {
            SubArchKind::DxilV1_1 => "dxilv1.1",
            SubArchKind::DxilV1_2 => "dxilv1.2",
            SubArchKind::DxilV1_3 => "dxilv1.3",
            SubArchKind::DxilV1_4 => "dxilv1.4",
            SubArchKind::DxilV1_5 => "dxilv1.5",
            SubArchKind::DxilV1_6 => "dxilv1.6",
            SubArchKind::DxilV1_7 => "dxilv1.7",
            SubArchKind::DxilV1_8 => "dxilv1.8",
            _ => "dxilv1.0",
        },
        (kind, _) => kind.canonical_name(),
    }
}
