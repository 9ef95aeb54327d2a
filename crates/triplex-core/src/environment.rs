//! Environment (ABI) classification.

use triplex_version::VersionTuple;

use crate::table::{component_table, lookup_prefix, Axis, Component};

component_table! {
    /// The environment component of a triple: the ABI, C library, or runtime.
    pub enum EnvironmentKind(Environment) {
        Unknown => "unknown",
        Gnu => "gnu",
        GnuAbiN32 => "gnuabin32",
        GnuAbi64 => "gnuabi64",
        GnuEabi => "gnueabi",
        GnuEabiHf => "gnueabihf",
        GnuF32 => "gnuf32",
        GnuF64 => "gnuf64",
        GnuSf => "gnusf",
        GnuX32 => "gnux32",
        GnuIlp32 => "gnu_ilp32",
        Code16 => "code16",
        Eabi => "eabi",
        EabiHf => "eabihf",
        Android => "android",
        Musl => "musl",
        MuslEabi => "musleabi",
        MuslEabiHf => "musleabihf",
        MuslX32 => "muslx32",
        Msvc => "msvc",
        Itanium => "itanium",
        Cygnus => "cygnus",
        CoreClr => "coreclr",
        /// Simulator variants of other systems, e.g. Apple's iOS.
        Simulator => "simulator",
        /// Mac Catalyst variant of Apple's iOS deployment target.
        MacAbi => "macabi",
        Pixel => "pixel",
        Vertex => "vertex",
        Geometry => "geometry",
        Hull => "hull",
        Domain => "domain",
        Compute => "compute",
        Library => "library",
        RayGeneration => "raygeneration",
        Intersection => "intersection",
        AnyHit => "anyhit",
        ClosestHit => "closesthit",
        Miss => "miss",
        Callable => "callable",
        Mesh => "mesh",
        Amplification => "amplification",
        OpenCl => "opencl",
        /// OpenHarmony
        OpenHos => "ohos",
        PAuthTest => "pauthtest",
        GnuT64 => "gnut64",
        GnuEabiT64 => "gnueabit64",
        GnuEabiHfT64 => "gnueabihft64",
    }
}

impl Component for EnvironmentKind {
    const AXIS: Axis = Axis::Environment;
    const UNKNOWN: Self = EnvironmentKind::Unknown;

    fn canonical_name(self) -> &'static str {
        EnvironmentKind::canonical_name(self)
    }

    fn aliases() -> &'static [(&'static str, Self)] {
        EnvironmentKind::ALIASES
    }

    fn classify(token: &str) -> Self {
        parse_environment(token)
    }
}

/// Split an environment token into its kind and whatever follows the matched name.
pub fn split_environment(token: &str) -> (EnvironmentKind, &str) {
    match lookup_prefix(EnvironmentKind::ALIASES, token) {
        Some((kind, len)) => (kind, &token[len..]),
        None => (EnvironmentKind::Unknown, token),
    }
}

/// Classify an environment token by its longest known prefix.
///
/// ```
/// use triplex_core::{parse_environment, EnvironmentKind};
///
/// assert_eq!(parse_environment("gnueabihf"), EnvironmentKind::GnuEabiHf);
/// assert_eq!(parse_environment("android21"), EnvironmentKind::Android);
/// ```
pub fn parse_environment(token: &str) -> EnvironmentKind {
    split_environment(token).0
}

/// The version written after the environment name, e.g. an Android API level.
pub fn environment_version(token: &str) -> VersionTuple {
    let (_, rest) = split_environment(token);
    VersionTuple::parse_prefix(rest).0.without_build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_prefix() {
        assert_eq!(parse_environment("gnu"), EnvironmentKind::Gnu);
        assert_eq!(parse_environment("gnueabi"), EnvironmentKind::GnuEabi);
        assert_eq!(parse_environment("gnueabihft64"), EnvironmentKind::GnuEabiHfT64);
        assert_eq!(parse_environment("gnu_ilp32"), EnvironmentKind::GnuIlp32);
        assert_eq!(parse_environment("musleabihf"), EnvironmentKind::MuslEabiHf);
        assert_eq!(parse_environment("eabihf"), EnvironmentKind::EabiHf);
        assert_eq!(parse_environment("msvc-coff"), EnvironmentKind::Msvc);
        assert_eq!(parse_environment("elf"), EnvironmentKind::Unknown);
        assert_eq!(parse_environment(""), EnvironmentKind::Unknown);
    }

    #[test]
    fn versions() {
        assert_eq!(environment_version("android21"), VersionTuple::new(21));
        assert_eq!(environment_version("android"), VersionTuple::new(0));
        assert_eq!(environment_version("simulator"), VersionTuple::default());
    }

    #[test]
    fn canonical_names_round_trip() {
        for &kind in EnvironmentKind::ALL {
            assert_eq!(parse_environment(kind.canonical_name()), kind);
        }
        assert_eq!(EnvironmentKind::OpenHos.canonical_name(), "ohos");
    }
}
