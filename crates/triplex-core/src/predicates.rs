//! Derived queries over the classified components.
//!
//! Each axis enum answers the questions that depend on it alone; the
//! methods on [`Triple`] combine them.

use crate::arch::{ArchKind, SubArchKind};
use crate::environment::EnvironmentKind;
use crate::object_format::ObjectFormatKind;
use crate::os::OsKind;
use crate::triple::Triple;
use crate::vendor::VendorKind;

impl ArchKind {
    /// ARM in either byte order. Thumb is not included.
    pub fn is_arm(self) -> bool {
        matches!(self, ArchKind::Arm | ArchKind::Armeb)
    }

    pub fn is_thumb(self) -> bool {
        matches!(self, ArchKind::Thumb | ArchKind::Thumbeb)
    }

    /// AArch64 in either byte order, including the ILP32 variant.
    pub fn is_aarch64(self) -> bool {
        matches!(self, ArchKind::Aarch64 | ArchKind::Aarch64Be | ArchKind::Aarch64_32)
    }

    pub fn is_mips32(self) -> bool {
        matches!(self, ArchKind::Mips | ArchKind::Mipsel)
    }

    pub fn is_mips64(self) -> bool {
        matches!(self, ArchKind::Mips64 | ArchKind::Mips64el)
    }

    pub fn is_mips(self) -> bool {
        self.is_mips32() || self.is_mips64()
    }

    pub fn is_ppc32(self) -> bool {
        matches!(self, ArchKind::Ppc | ArchKind::Ppcle)
    }

    pub fn is_ppc64(self) -> bool {
        matches!(self, ArchKind::Ppc64 | ArchKind::Ppc64le)
    }

    pub fn is_ppc(self) -> bool {
        self.is_ppc32() || self.is_ppc64()
    }

    pub fn is_riscv(self) -> bool {
        matches!(self, ArchKind::Riscv32 | ArchKind::Riscv64)
    }

    pub fn is_sparc32(self) -> bool {
        matches!(self, ArchKind::Sparc | ArchKind::Sparcel)
    }

    pub fn is_sparc(self) -> bool {
        self.is_sparc32() || self == ArchKind::Sparcv9
    }

    pub fn is_loongarch(self) -> bool {
        matches!(self, ArchKind::Loongarch32 | ArchKind::Loongarch64)
    }

    pub fn is_x86(self) -> bool {
        matches!(self, ArchKind::X86 | ArchKind::X86_64)
    }

    pub fn is_wasm(self) -> bool {
        matches!(self, ArchKind::Wasm32 | ArchKind::Wasm64)
    }

    pub fn is_spir(self) -> bool {
        matches!(self, ArchKind::Spir | ArchKind::Spir64)
    }

    /// SPIR-V with any memory model.
    pub fn is_spirv(self) -> bool {
        matches!(self, ArchKind::Spirv | ArchKind::Spirv32 | ArchKind::Spirv64)
    }

    pub fn is_nvptx(self) -> bool {
        matches!(self, ArchKind::Nvptx | ArchKind::Nvptx64)
    }

    pub fn is_amdgpu(self) -> bool {
        matches!(self, ArchKind::R600 | ArchKind::Amdgcn)
    }

    pub fn is_bpf(self) -> bool {
        matches!(self, ArchKind::Bpfel | ArchKind::Bpfeb)
    }
}

impl SubArchKind {
    /// True unless the revision lacks the full Thumb-2 instruction set.
    pub fn is_arm_t32(self) -> bool {
        !matches!(
            self,
            SubArchKind::ArmV8MBaseline
                | SubArchKind::ArmV7S
                | SubArchKind::ArmV7K
                | SubArchKind::ArmV7VE
                | SubArchKind::ArmV6
                | SubArchKind::ArmV6M
                | SubArchKind::ArmV6K
                | SubArchKind::ArmV6T2
                | SubArchKind::ArmV5
                | SubArchKind::ArmV5TE
                | SubArchKind::ArmV4T
        )
    }

    /// Microcontroller-profile ARM revisions.
    pub fn is_arm_mclass(self) -> bool {
        matches!(
            self,
            SubArchKind::ArmV6M
                | SubArchKind::ArmV7M
                | SubArchKind::ArmV7EM
                | SubArchKind::ArmV8MMainline
                | SubArchKind::ArmV8MBaseline
                | SubArchKind::ArmV8_1MMainline
        )
    }
}

impl OsKind {
    /// macOS under either of its names.
    pub fn is_macos(self) -> bool {
        matches!(self, OsKind::Darwin | OsKind::MacOsx)
    }

    /// iOS or tvOS, which share version numbering.
    pub fn is_ios(self) -> bool {
        matches!(self, OsKind::Ios | OsKind::TvOs)
    }

    /// Any Apple operating system.
    pub fn is_darwin(self) -> bool {
        self.is_macos()
            || self.is_ios()
            || matches!(self, OsKind::WatchOs | OsKind::DriverKit | OsKind::XrOs)
    }

    pub fn is_bsd(self) -> bool {
        matches!(
            self,
            OsKind::FreeBsd | OsKind::NetBsd | OsKind::OpenBsd | OsKind::DragonFly | OsKind::KFreeBsd
        )
    }

    /// Operating systems whose C library is glibc, Android aside.
    pub fn is_glibc_family(self) -> bool {
        matches!(self, OsKind::Linux | OsKind::KFreeBsd | OsKind::Hurd)
    }
}

impl EnvironmentKind {
    pub fn is_gnu(self) -> bool {
        use EnvironmentKind::*;

        matches!(
            self,
            Gnu | GnuT64
                | GnuAbiN32
                | GnuAbi64
                | GnuEabi
                | GnuEabiT64
                | GnuEabiHf
                | GnuEabiHfT64
                | GnuF32
                | GnuF64
                | GnuSf
                | GnuX32
        )
    }

    /// musl environments. LiteOS is musl-based too but has no environment
    /// name of its own; see [`Triple::is_musl`].
    pub fn is_musl(self) -> bool {
        use EnvironmentKind::*;

        matches!(self, Musl | MuslEabi | MuslEabiHf | MuslX32 | OpenHos)
    }

    /// Environments that name a shader pipeline stage.
    pub fn is_shader_stage(self) -> bool {
        use EnvironmentKind::*;

        matches!(
            self,
            Pixel
                | Vertex
                | Geometry
                | Hull
                | Domain
                | Compute
                | Library
                | RayGeneration
                | Intersection
                | AnyHit
                | ClosestHit
                | Miss
                | Callable
                | Mesh
                | Amplification
        )
    }

    /// ARM EABI environments, Android excluded.
    fn is_eabi(self) -> bool {
        use EnvironmentKind::*;

        matches!(
            self,
            Eabi | GnuEabi | GnuEabiT64 | MuslEabi | EabiHf | GnuEabiHf | GnuEabiHfT64 | OpenHos | MuslEabiHf
        )
    }

    /// Environments forcing a 64-bit `time_t` on 32-bit targets.
    pub fn is_time64(self) -> bool {
        matches!(
            self,
            EnvironmentKind::GnuT64 | EnvironmentKind::GnuEabiT64 | EnvironmentKind::GnuEabiHfT64
        )
    }

    pub fn is_hard_float(self) -> bool {
        matches!(
            self,
            EnvironmentKind::GnuEabiHf
                | EnvironmentKind::GnuEabiHfT64
                | EnvironmentKind::MuslEabiHf
                | EnvironmentKind::EabiHf
        )
    }

    pub fn is_x32(self) -> bool {
        matches!(self, EnvironmentKind::GnuX32 | EnvironmentKind::MuslX32)
    }
}

impl ObjectFormatKind {
    /// True if the format has COMDAT sections.
    pub fn supports_comdat(self) -> bool {
        !matches!(
            self,
            ObjectFormatKind::MachO | ObjectFormatKind::Xcoff | ObjectFormatKind::DxContainer
        )
    }
}

/// Operating system queries.
impl Triple {
    pub fn is_macos(&self) -> bool {
        self.os().is_macos()
    }

    /// iOS, including tvOS.
    pub fn is_ios(&self) -> bool {
        self.os().is_ios()
    }

    pub fn is_tvos(&self) -> bool {
        self.os() == OsKind::TvOs
    }

    pub fn is_watchos(&self) -> bool {
        self.os() == OsKind::WatchOs
    }

    /// Apple Watch ABI, selected by the `armv7k` architecture.
    pub fn is_watch_abi(&self) -> bool {
        self.sub_arch() == SubArchKind::ArmV7K
    }

    pub fn is_xros(&self) -> bool {
        self.os() == OsKind::XrOs
    }

    pub fn is_driverkit(&self) -> bool {
        self.os() == OsKind::DriverKit
    }

    /// macOS, iOS, tvOS, watchOS, xrOS or DriverKit.
    pub fn is_os_darwin(&self) -> bool {
        self.os().is_darwin()
    }

    /// True for targets whose code runs on a Mac.
    pub fn is_target_machine_mac(&self) -> bool {
        self.is_macos()
            || (self.is_os_darwin()
                && (self.is_simulator_environment() || self.is_mac_catalyst_environment()))
    }

    pub fn is_os_zos(&self) -> bool {
        self.os() == OsKind::ZOs
    }

    pub fn is_os_netbsd(&self) -> bool {
        self.os() == OsKind::NetBsd
    }

    pub fn is_os_openbsd(&self) -> bool {
        self.os() == OsKind::OpenBsd
    }

    pub fn is_os_freebsd(&self) -> bool {
        self.os() == OsKind::FreeBsd
    }

    pub fn is_os_dragonfly(&self) -> bool {
        self.os() == OsKind::DragonFly
    }

    pub fn is_os_kfreebsd(&self) -> bool {
        self.os() == OsKind::KFreeBsd
    }

    pub fn is_os_fuchsia(&self) -> bool {
        self.os() == OsKind::Fuchsia
    }

    pub fn is_os_solaris(&self) -> bool {
        self.os() == OsKind::Solaris
    }

    pub fn is_os_iamcu(&self) -> bool {
        self.os() == OsKind::ElfIamcu
    }

    pub fn is_os_unknown(&self) -> bool {
        self.os() == OsKind::Unknown
    }

    pub fn is_os_haiku(&self) -> bool {
        self.os() == OsKind::Haiku
    }

    pub fn is_uefi(&self) -> bool {
        self.os() == OsKind::Uefi
    }

    pub fn is_os_windows(&self) -> bool {
        self.os() == OsKind::Win32
    }

    pub fn is_os_nacl(&self) -> bool {
        self.os() == OsKind::NaCl
    }

    pub fn is_os_linux(&self) -> bool {
        self.os() == OsKind::Linux
    }

    pub fn is_os_hurd(&self) -> bool {
        self.os() == OsKind::Hurd
    }

    pub fn is_os_wasi(&self) -> bool {
        self.os() == OsKind::Wasi
    }

    pub fn is_os_emscripten(&self) -> bool {
        self.os() == OsKind::Emscripten
    }

    /// Linux, kFreeBSD or Hurd with the GNU C library.
    pub fn is_os_glibc(&self) -> bool {
        self.os().is_glibc_family() && !self.is_android()
    }

    pub fn is_os_aix(&self) -> bool {
        self.os() == OsKind::Aix
    }

    pub fn is_os_serenity(&self) -> bool {
        self.os() == OsKind::Serenity
    }

    pub fn is_os_liteos(&self) -> bool {
        self.os() == OsKind::LiteOs
    }

    pub fn is_shader_model_os(&self) -> bool {
        self.os() == OsKind::ShaderModel
    }

    pub fn is_vulkan_os(&self) -> bool {
        self.os() == OsKind::Vulkan
    }

    pub fn is_ps4(&self) -> bool {
        self.arch() == ArchKind::X86_64 && self.vendor() == VendorKind::Scei && self.os() == OsKind::Ps4
    }

    pub fn is_ps5(&self) -> bool {
        self.arch() == ArchKind::X86_64 && self.vendor() == VendorKind::Scei && self.os() == OsKind::Ps5
    }

    pub fn is_ps(&self) -> bool {
        self.is_ps4() || self.is_ps5()
    }
}

/// Environment queries.
impl Triple {
    pub fn is_simulator_environment(&self) -> bool {
        self.environment() == EnvironmentKind::Simulator
    }

    pub fn is_mac_catalyst_environment(&self) -> bool {
        self.environment() == EnvironmentKind::MacAbi
    }

    pub fn is_gnu_environment(&self) -> bool {
        self.environment().is_gnu()
    }

    /// Windows with the MSVC environment spelled out.
    pub fn is_known_windows_msvc_environment(&self) -> bool {
        self.is_os_windows() && self.environment() == EnvironmentKind::Msvc
    }

    /// Windows with MSVC or no environment at all.
    pub fn is_windows_msvc_environment(&self) -> bool {
        self.is_known_windows_msvc_environment()
            || (self.is_os_windows() && self.environment() == EnvironmentKind::Unknown)
    }

    pub fn is_windows_coreclr_environment(&self) -> bool {
        self.is_os_windows() && self.environment() == EnvironmentKind::CoreClr
    }

    pub fn is_windows_itanium_environment(&self) -> bool {
        self.is_os_windows() && self.environment() == EnvironmentKind::Itanium
    }

    pub fn is_windows_cygwin_environment(&self) -> bool {
        self.is_os_windows() && self.environment() == EnvironmentKind::Cygnus
    }

    /// MinGW.
    pub fn is_windows_gnu_environment(&self) -> bool {
        self.is_os_windows() && self.environment() == EnvironmentKind::Gnu
    }

    /// Cygwin or MinGW.
    pub fn is_os_cygming(&self) -> bool {
        self.is_windows_cygwin_environment() || self.is_windows_gnu_environment()
    }

    /// Windows linking against `MSVCRT.dll`.
    pub fn is_os_msvcrt(&self) -> bool {
        self.is_windows_msvc_environment()
            || self.is_windows_gnu_environment()
            || self.is_windows_itanium_environment()
    }

    pub fn is_android(&self) -> bool {
        self.environment() == EnvironmentKind::Android
    }

    pub fn is_musl(&self) -> bool {
        self.environment().is_musl() || self.is_os_liteos()
    }

    pub fn is_open_hos(&self) -> bool {
        self.environment() == EnvironmentKind::OpenHos
    }

    /// OpenHarmony, or LiteOS whose OHOS environment goes unwritten.
    pub fn is_ohos_family(&self) -> bool {
        self.is_open_hos() || self.is_os_liteos()
    }

    pub fn is_shader_stage_environment(&self) -> bool {
        self.environment().is_shader_stage()
    }

    pub fn is_x32(&self) -> bool {
        self.environment().is_x32()
    }

    pub fn is_time64_abi(&self) -> bool {
        self.environment().is_time64()
    }

    pub fn is_hard_float_abi(&self) -> bool {
        self.environment().is_hard_float()
    }
}

/// Object format queries.
impl Triple {
    pub fn is_os_bin_format_elf(&self) -> bool {
        self.object_format() == ObjectFormatKind::Elf
    }

    pub fn is_os_bin_format_coff(&self) -> bool {
        self.object_format() == ObjectFormatKind::Coff
    }

    pub fn is_os_bin_format_goff(&self) -> bool {
        self.object_format() == ObjectFormatKind::Goff
    }

    pub fn is_os_bin_format_macho(&self) -> bool {
        self.object_format() == ObjectFormatKind::MachO
    }

    pub fn is_os_bin_format_wasm(&self) -> bool {
        self.object_format() == ObjectFormatKind::Wasm
    }

    pub fn is_os_bin_format_xcoff(&self) -> bool {
        self.object_format() == ObjectFormatKind::Xcoff
    }

    pub fn is_os_bin_format_dxcontainer(&self) -> bool {
        self.object_format() == ObjectFormatKind::DxContainer
    }
}

/// Architecture queries.
impl Triple {
    pub fn is_arm(&self) -> bool {
        self.arch().is_arm()
    }

    pub fn is_thumb(&self) -> bool {
        self.arch().is_thumb()
    }

    /// ARM or Thumb with an EHABI-capable environment and ELF objects.
    pub fn is_arm_eabi(&self) -> bool {
        (self.is_arm() || self.is_thumb())
            && (self.environment().is_eabi() || self.is_android())
            && self.is_os_bin_format_elf()
    }

    pub fn is_arm_t32(&self) -> bool {
        self.sub_arch().is_arm_t32()
    }

    pub fn is_arm_mclass(&self) -> bool {
        self.sub_arch().is_arm_mclass()
    }

    pub fn is_aarch64(&self) -> bool {
        self.arch().is_aarch64()
    }

    /// Apple's pointer-authenticating `arm64e`.
    pub fn is_arm64e(&self) -> bool {
        self.arch() == ArchKind::Aarch64 && self.sub_arch() == SubArchKind::Arm64E
    }

    /// The Arm64EC ABI for mixing x64 and ARM64 code on Windows.
    pub fn is_windows_arm64ec(&self) -> bool {
        self.arch() == ArchKind::Aarch64 && self.sub_arch() == SubArchKind::Arm64EC
    }

    pub fn is_loongarch32(&self) -> bool {
        self.arch() == ArchKind::Loongarch32
    }

    pub fn is_loongarch64(&self) -> bool {
        self.arch() == ArchKind::Loongarch64
    }

    pub fn is_loongarch(&self) -> bool {
        self.arch().is_loongarch()
    }

    pub fn is_mips32(&self) -> bool {
        self.arch().is_mips32()
    }

    pub fn is_mips64(&self) -> bool {
        self.arch().is_mips64()
    }

    pub fn is_mips(&self) -> bool {
        self.arch().is_mips()
    }

    pub fn is_ppc(&self) -> bool {
        self.arch().is_ppc()
    }

    pub fn is_ppc32(&self) -> bool {
        self.arch().is_ppc32()
    }

    pub fn is_ppc64(&self) -> bool {
        self.arch().is_ppc64()
    }

    /// FreeBSD 13 or newer, with an unversioned FreeBSD counting as new.
    fn is_modern_freebsd(&self) -> bool {
        self.os() == OsKind::FreeBsd && (self.os_major_version() >= 13 || self.os_version().is_empty())
    }

    /// Big-endian 64-bit PowerPC using the ELFv2 ABI.
    pub fn is_ppc64_elfv2_abi(&self) -> bool {
        self.arch() == ArchKind::Ppc64
            && (self.is_modern_freebsd() || self.os() == OsKind::OpenBsd || self.is_musl())
    }

    /// 32-bit PowerPC using the secure PLT.
    pub fn is_ppc32_secure_plt(&self) -> bool {
        self.is_ppc32()
            && (self.is_modern_freebsd()
                || matches!(self.os(), OsKind::NetBsd | OsKind::OpenBsd)
                || self.is_musl())
    }

    pub fn is_riscv32(&self) -> bool {
        self.arch() == ArchKind::Riscv32
    }

    pub fn is_riscv64(&self) -> bool {
        self.arch() == ArchKind::Riscv64
    }

    pub fn is_riscv(&self) -> bool {
        self.arch().is_riscv()
    }

    pub fn is_sparc32(&self) -> bool {
        self.arch().is_sparc32()
    }

    pub fn is_sparc64(&self) -> bool {
        self.arch() == ArchKind::Sparcv9
    }

    pub fn is_sparc(&self) -> bool {
        self.arch().is_sparc()
    }

    pub fn is_systemz(&self) -> bool {
        self.arch() == ArchKind::Systemz
    }

    pub fn is_x86(&self) -> bool {
        self.arch().is_x86()
    }

    pub fn is_ve(&self) -> bool {
        self.arch() == ArchKind::Ve
    }

    pub fn is_wasm(&self) -> bool {
        self.arch().is_wasm()
    }

    pub fn is_csky(&self) -> bool {
        self.arch() == ArchKind::Csky
    }

    pub fn is_bpf(&self) -> bool {
        self.arch().is_bpf()
    }

    pub fn is_dxil(&self) -> bool {
        self.arch() == ArchKind::Dxil
    }

    pub fn is_spir(&self) -> bool {
        self.arch().is_spir()
    }

    pub fn is_spirv(&self) -> bool {
        self.arch().is_spirv()
    }

    pub fn is_spirv_logical(&self) -> bool {
        self.arch() == ArchKind::Spirv
    }

    pub fn is_nvptx(&self) -> bool {
        self.arch().is_nvptx()
    }

    pub fn is_amdgcn(&self) -> bool {
        self.arch() == ArchKind::Amdgcn
    }

    pub fn is_amdgpu(&self) -> bool {
        self.arch().is_amdgpu()
    }
}

/// Code generation defaults.
impl Triple {
    pub fn supports_comdat(&self) -> bool {
        self.object_format().supports_comdat()
    }

    /// True if thread-local storage is emulated unless asked otherwise.
    ///
    /// Android gained ELF TLS at API level 29.
    pub fn has_default_emulated_tls(&self) -> bool {
        (self.is_android() && self.is_android_version_lt(29))
            || self.is_os_openbsd()
            || self.is_windows_cygwin_environment()
            || self.is_ohos_family()
    }

    /// True if TLS descriptors are the default TLS dialect.
    pub fn has_default_tlsdesc(&self) -> bool {
        self.is_android() && self.is_riscv64()
    }

    pub fn has_default_data_sections(&self) -> bool {
        self.is_os_bin_format_xcoff() || self.is_wasm()
    }

    pub fn has_dll_import_export(&self) -> bool {
        self.is_os_windows() || self.is_ps()
    }
}
