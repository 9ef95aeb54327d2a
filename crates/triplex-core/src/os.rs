//! Operating system classification.
//!
//! OS tokens routinely carry a version suffix (`macosx10.15`, `ios17.0`),
//! so the token is matched against the longest known spelling that is a
//! prefix of it and the rest is left for version parsing.

use triplex_version::VersionTuple;

use crate::table::{component_table, lookup_prefix, Axis, Component};

component_table! {
    /// The operating system component of a triple.
    pub enum OsKind(Os) {
        Unknown => "unknown",
        Darwin => "darwin",
        DragonFly => "dragonfly",
        FreeBsd => "freebsd",
        Fuchsia => "fuchsia",
        Ios => "ios",
        KFreeBsd => "kfreebsd",
        Linux => "linux",
        /// PS3
        Lv2 => "lv2",
        MacOsx => "macosx" | "macos",
        NetBsd => "netbsd",
        OpenBsd => "openbsd",
        Solaris => "solaris",
        Uefi => "uefi",
        Win32 => "windows" | "win32",
        /// IBM z/OS
        ZOs => "zos",
        Haiku => "haiku",
        Rtems => "rtems",
        /// Native Client
        NaCl => "nacl",
        Aix => "aix",
        /// NVIDIA CUDA
        Cuda => "cuda",
        /// NVIDIA OpenCL
        Nvcl => "nvcl",
        /// AMD HSA Runtime
        AmdHsa => "amdhsa",
        Ps4 => "ps4",
        Ps5 => "ps5",
        ElfIamcu => "elfiamcu",
        TvOs => "tvos",
        WatchOs => "watchos",
        BridgeOs => "bridgeos",
        DriverKit => "driverkit",
        /// Apple visionOS
        XrOs => "xros" | "visionos",
        Mesa3D => "mesa3d",
        /// AMD PAL Runtime
        AmdPal => "amdpal",
        /// HermitCore unikernel/multikernel
        HermitCore => "hermit",
        /// GNU/Hurd
        Hurd => "hurd",
        /// WebAssembly System Interface
        Wasi => "wasi",
        Emscripten => "emscripten",
        /// DirectX shader model
        ShaderModel => "shadermodel",
        LiteOs => "liteos",
        Serenity => "serenity",
        /// Vulkan SPIR-V
        Vulkan => "vulkan",
    }
}

impl Component for OsKind {
    const AXIS: Axis = Axis::Os;
    const UNKNOWN: Self = OsKind::Unknown;

    fn canonical_name(self) -> &'static str {
        OsKind::canonical_name(self)
    }

    fn aliases() -> &'static [(&'static str, Self)] {
        OsKind::ALIASES
    }

    fn classify(token: &str) -> Self {
        parse_os(token)
    }
}

/// Split an OS token into its kind and whatever follows the matched name.
///
/// When no spelling matches, the kind is `Unknown` and the whole token is
/// returned as the remainder.
///
/// ```
/// use triplex_core::{split_os, OsKind};
///
/// assert_eq!(split_os("macosx10.15"), (OsKind::MacOsx, "10.15"));
/// assert_eq!(split_os("visionos1.2"), (OsKind::XrOs, "1.2"));
/// ```
pub fn split_os(token: &str) -> (OsKind, &str) {
    match lookup_prefix(OsKind::ALIASES, token) {
        Some((kind, len)) => (kind, &token[len..]),
        None => (OsKind::Unknown, token),
    }
}

/// Classify an OS token, ignoring any version suffix.
pub fn parse_os(token: &str) -> OsKind {
    split_os(token).0
}

/// The version written after the OS name, without its build component.
pub fn os_version(token: &str) -> VersionTuple {
    let (_, rest) = split_os(token);
    VersionTuple::parse_prefix(rest).0.without_build()
}
