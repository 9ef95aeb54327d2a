//! OS and environment versions carried by a triple.
//!
//! Versions are read from the triple string on demand. The Apple getters
//! translate between the numbering schemes of the Darwin family, and
//! return `None` for operating systems the scheme does not apply to.

use triplex_version::VersionTuple;

use crate::arch::{ArchKind, SubArchKind};
use crate::environment::{environment_version, split_environment};
use crate::os::{os_version, OsKind};
use crate::triple::Triple;
use crate::vendor::VendorKind;

/// Shader model spelling that selects the newest DXIL version.
const LATEST_SHADER_MODEL: &str = "shadermodel6.x";

/// Normalize a version to the numbering an OS currently uses.
///
/// macOS 10.16 was renamed 11.0; every other version is returned unchanged.
pub fn canonical_version_for_os(os: OsKind, version: VersionTuple) -> VersionTuple {
    if os == OsKind::MacOsx && version == VersionTuple::major_minor(10, 16) {
        VersionTuple::major_minor(11, 0)
    } else {
        version
    }
}

impl Triple {
    /// The version suffix of the OS component, e.g. `12.0` for `ios12.0`.
    pub fn os_version(&self) -> VersionTuple {
        os_version(self.os_name())
    }

    pub fn os_major_version(&self) -> u32 {
        self.os_version().major()
    }

    /// The version suffix of the environment component, e.g. `21` for `android21`.
    pub fn environment_version(&self) -> VersionTuple {
        environment_version(self.environment_name())
    }

    /// The environment component with its environment name removed.
    pub fn environment_version_string(&self) -> &str {
        split_environment(self.environment_name()).1
    }

    /// The macOS version this triple targets.
    ///
    /// Darwin kernel versions map onto macOS versions (`darwin8` is 10.4,
    /// `darwin20` is 11); an unversioned `darwin` or `macosx` means 10.4.
    /// iOS, tvOS and watchOS report 10.4. Returns `None` for other operating
    /// systems and for versions that predate Mac OS X.
    pub fn macos_version(&self) -> Option<VersionTuple> {
        let version = self.os_version();
        match self.os() {
            OsKind::Darwin => {
                let major = match version.major() {
                    0 => 8,
                    major => major,
                };
                if major < 4 {
                    None
                } else if major <= 19 {
                    Some(VersionTuple::major_minor(10, major - 4))
                } else {
                    Some(VersionTuple::new((major - 20).saturating_add(11)))
                }
            }
            OsKind::MacOsx => match version.major() {
                0 => Some(VersionTuple::major_minor(10, 4)),
                major if major < 10 => None,
                _ => Some(version),
            },
            OsKind::Ios | OsKind::TvOs | OsKind::WatchOs => Some(VersionTuple::major_minor(10, 4)),
            _ => None,
        }
    }

    /// The iOS version this triple targets.
    ///
    /// xrOS versions are aligned with iOS: xrOS 1 is iOS 17.
    pub fn ios_version(&self) -> Option<VersionTuple> {
        match self.os() {
            OsKind::Darwin | OsKind::MacOsx => Some(VersionTuple::new(5)),
            OsKind::Ios | OsKind::TvOs => {
                let version = self.os_version();
                if version.major() != 0 {
                    Some(version)
                } else if self.arch() == ArchKind::Aarch64 {
                    Some(VersionTuple::new(7))
                } else {
                    Some(VersionTuple::new(5))
                }
            }
            OsKind::XrOs => {
                let version = self.os_version();
                Some(version.with_major_replaced(version.major().saturating_add(16)))
            }
            _ => None,
        }
    }

    pub fn watchos_version(&self) -> Option<VersionTuple> {
        match self.os() {
            OsKind::Darwin | OsKind::MacOsx => Some(VersionTuple::new(2)),
            OsKind::WatchOs => match self.os_version() {
                version if version.major() == 0 => Some(VersionTuple::new(2)),
                version => Some(version),
            },
            _ => None,
        }
    }

    /// The DriverKit version, defaulting to 19.
    pub fn driverkit_version(&self) -> Option<VersionTuple> {
        if self.os() != OsKind::DriverKit {
            return None;
        }
        let version = self.os_version();
        if version.major() == 0 {
            Some(version.with_major_replaced(19))
        } else {
            Some(version)
        }
    }

    /// The Vulkan version of a `spirv-*-vulkan` triple.
    ///
    /// Vulkan 1.2 pairs with SPIR-V 1.5 and Vulkan 1.3 with SPIR-V 1.6; an
    /// unversioned OS means Vulkan 1.2. Any other combination yields `0`.
    pub fn vulkan_version(&self) -> Option<VersionTuple> {
        if self.arch() != ArchKind::Spirv || self.os() != OsKind::Vulkan {
            return None;
        }
        let mut version = self.os_version();
        if version == VersionTuple::new(0) {
            version = VersionTuple::major_minor(1, 2);
        }
        let paired = if version == VersionTuple::major_minor(1, 2) {
            Some(SubArchKind::SpirvV15)
        } else if version == VersionTuple::major_minor(1, 3) {
            Some(SubArchKind::SpirvV16)
        } else {
            None
        };
        match paired {
            Some(sub) if self.sub_arch() == sub || self.sub_arch() == SubArchKind::NoSubArch => {
                Some(version)
            }
            _ => Some(VersionTuple::new(0)),
        }
    }

    /// The DXIL version of a `dxil-*-shadermodel` triple.
    ///
    /// An explicit `dxilv1.N` architecture wins. Otherwise shader model 6.N
    /// means DXIL 1.N, `shadermodel6.x` means the newest DXIL version, and
    /// anything else means DXIL 1.0. Shader model 6 minors past the newest
    /// known DXIL version have no DXIL version.
    pub fn dxil_version(&self) -> Option<VersionTuple> {
        if self.arch() != ArchKind::Dxil || self.os() != OsKind::ShaderModel {
            return None;
        }
        if let Some(version) = self.sub_arch().dxil_version() {
            return Some(version);
        }
        if self.os_name() == LATEST_SHADER_MODEL {
            return SubArchKind::LATEST_DXIL.dxil_version();
        }
        let shader_model = self.os_version();
        match shader_model.minor() {
            Some(minor) if shader_model.major() == 6 => {
                SubArchKind::dxil_from_minor(minor).and_then(SubArchKind::dxil_version)
            }
            _ => SubArchKind::DxilV1_0.dxil_version(),
        }
    }

    /// The oldest OS version that supports this Apple AArch64 target.
    ///
    /// `None` when there is no architecture-specific minimum.
    pub fn minimum_supported_os_version(&self) -> Option<VersionTuple> {
        if self.vendor() != VendorKind::Apple || self.arch() != ArchKind::Aarch64 {
            return None;
        }
        match self.os() {
            OsKind::MacOsx => Some(VersionTuple::major_minor(11, 0)),
            OsKind::Ios
                if self.is_mac_catalyst_environment()
                    || self.is_simulator_environment()
                    || self.is_arm64e() =>
            {
                Some(VersionTuple::major_minor(14, 0))
            }
            OsKind::TvOs if self.is_simulator_environment() => Some(VersionTuple::major_minor(14, 0)),
            OsKind::WatchOs if self.is_simulator_environment() => Some(VersionTuple::major_minor(7, 0)),
            OsKind::DriverKit => Some(VersionTuple::major_minor(20, 0)),
            _ => None,
        }
    }

    /// True if the OS version is older than `major.minor.micro`.
    ///
    /// Missing components compare as zero on both sides.
    pub fn is_os_version_lt(&self, major: u32, minor: Option<u32>, micro: Option<u32>) -> bool {
        let bound = VersionTuple::major_minor_subminor(major, minor.unwrap_or(0), micro.unwrap_or(0));
        self.os_version() < bound
    }

    /// True if this triple's OS version is older than `other`'s.
    pub fn is_os_version_lt_triple(&self, other: &Triple) -> bool {
        self.os_version() < other.os_version()
    }

    /// Compare against a macOS version, translating `darwinN` numbering.
    ///
    /// Triples that are not Darwin compare their OS version directly.
    pub fn is_macos_version_lt(&self, major: u32, minor: Option<u32>, micro: Option<u32>) -> bool {
        if self.os() != OsKind::Darwin {
            return self.is_os_version_lt(major, minor, micro);
        }
        match major {
            10 => self.is_os_version_lt(minor.unwrap_or(0).saturating_add(4), micro, Some(0)),
            major if major >= 11 => {
                self.is_os_version_lt((major - 11).saturating_add(20), minor, micro)
            }
            _ => self.is_os_version_lt(major, minor, micro),
        }
    }

    /// True if the Android API level is below `major`.
    ///
    /// 64-bit Android starts at API level 21, so lower levels on 64-bit
    /// targets are read as 21.
    ///
    /// # Panics
    ///
    /// Panics if the environment is not Android.
    pub fn is_android_version_lt(&self, major: u32) -> bool {
        assert!(self.is_android(), "not an Android triple: {}", self.as_str());

        let version = self.environment_version();
        if self.is_arch_64bit() && version.major() < 21 {
            return VersionTuple::new(21) < VersionTuple::new(major);
        }
        version < VersionTuple::new(major)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(triple: &str) -> VersionTuple {
        Triple::new(triple).os_version()
    }

    #[test]
    fn os_versions() {
        assert_eq!(version("arm64-apple-ios12.0"), VersionTuple::major_minor(12, 0));
        assert_eq!(version("x86_64-apple-macosx10.15.7"), VersionTuple::major_minor_subminor(10, 15, 7));
        assert_eq!(version("x86_64-unknown-linux-gnu"), VersionTuple::default());
        assert_eq!(Triple::new("x86_64-unknown-freebsd13.2").os_major_version(), 13);
    }

    #[test]
    fn environment_versions() {
        let triple = Triple::new("aarch64-unknown-linux-android29");
        assert_eq!(triple.environment_version(), VersionTuple::new(29));
        assert_eq!(triple.environment_version_string(), "29");
    }

    #[test]
    fn macos_from_darwin() {
        let macos = |t: &str| Triple::new(t).macos_version();
        assert_eq!(macos("x86_64-apple-darwin"), Some(VersionTuple::major_minor(10, 4)));
        assert_eq!(macos("x86_64-apple-darwin10"), Some(VersionTuple::major_minor(10, 6)));
        assert_eq!(macos("x86_64-apple-darwin19"), Some(VersionTuple::major_minor(10, 15)));
        assert_eq!(macos("arm64-apple-darwin20"), Some(VersionTuple::new(11)));
        assert_eq!(macos("arm64-apple-darwin23"), Some(VersionTuple::new(14)));
        assert_eq!(macos("x86_64-apple-darwin3"), None);
    }

    #[test]
    fn macos_from_macosx() {
        let macos = |t: &str| Triple::new(t).macos_version();
        assert_eq!(macos("x86_64-apple-macosx"), Some(VersionTuple::major_minor(10, 4)));
        assert_eq!(macos("x86_64-apple-macos11.2"), Some(VersionTuple::major_minor(11, 2)));
        assert_eq!(macos("x86_64-apple-macosx9"), None);
        assert_eq!(macos("arm64-apple-ios14"), Some(VersionTuple::major_minor(10, 4)));
        assert_eq!(macos("x86_64-unknown-linux"), None);
    }

    #[test]
    fn ios_versions() {
        let ios = |t: &str| Triple::new(t).ios_version();
        assert_eq!(ios("armv7-apple-ios"), Some(VersionTuple::new(5)));
        assert_eq!(ios("arm64-apple-ios"), Some(VersionTuple::new(7)));
        assert_eq!(ios("arm64-apple-tvos15.1"), Some(VersionTuple::major_minor(15, 1)));
        assert_eq!(ios("x86_64-apple-macosx"), Some(VersionTuple::new(5)));
        assert_eq!(ios("arm64-apple-xros"), Some(VersionTuple::new(16)));
        assert_eq!(ios("arm64-apple-xros1.1"), Some(VersionTuple::major_minor(17, 1)));
        assert_eq!(ios("arm64-apple-watchos"), None);
    }

    #[test]
    fn watchos_and_driverkit() {
        assert_eq!(Triple::new("armv7k-apple-watchos").watchos_version(), Some(VersionTuple::new(2)));
        assert_eq!(
            Triple::new("arm64_32-apple-watchos8.1").watchos_version(),
            Some(VersionTuple::major_minor(8, 1))
        );
        assert_eq!(Triple::new("x86_64-apple-macosx").watchos_version(), Some(VersionTuple::new(2)));
        assert_eq!(Triple::new("arm64-apple-driverkit").driverkit_version(), Some(VersionTuple::new(19)));
        assert_eq!(
            Triple::new("arm64-apple-driverkit21.0").driverkit_version(),
            Some(VersionTuple::major_minor(21, 0))
        );
        assert_eq!(Triple::new("arm64-apple-ios").driverkit_version(), None);
    }

    #[test]
    fn vulkan_versions() {
        let vulkan = |t: &str| Triple::new(t).vulkan_version();
        assert_eq!(vulkan("spirv-unknown-vulkan"), Some(VersionTuple::major_minor(1, 2)));
        assert_eq!(vulkan("spirv1.6-unknown-vulkan1.3"), Some(VersionTuple::major_minor(1, 3)));
        assert_eq!(vulkan("spirv1.5-unknown-vulkan1.2"), Some(VersionTuple::major_minor(1, 2)));
        assert_eq!(vulkan("spirv1.5-unknown-vulkan1.3"), Some(VersionTuple::new(0)));
        assert_eq!(vulkan("spirv-unknown-vulkan1.1"), Some(VersionTuple::new(0)));
        assert_eq!(vulkan("spirv64-unknown-vulkan"), None);
    }

    #[test]
    fn dxil_versions() {
        let dxil = |t: &str| Triple::new(t).dxil_version();
        assert_eq!(dxil("dxilv1.3-unknown-shadermodel6.7"), Some(VersionTuple::major_minor(1, 3)));
        assert_eq!(dxil("dxil-unknown-shadermodel6.5"), Some(VersionTuple::major_minor(1, 5)));
        assert_eq!(dxil("dxil-unknown-shadermodel6.x"), Some(VersionTuple::major_minor(1, 8)));
        assert_eq!(dxil("dxil-unknown-shadermodel5.0"), Some(VersionTuple::major_minor(1, 0)));
        assert_eq!(dxil("dxil-unknown-shadermodel6.9"), None);
        assert_eq!(dxil("x86_64-unknown-shadermodel6.0"), None);
    }

    #[test]
    fn minimum_versions() {
        let min = |t: &str| Triple::new(t).minimum_supported_os_version();
        assert_eq!(min("arm64-apple-macosx"), Some(VersionTuple::major_minor(11, 0)));
        assert_eq!(min("arm64-apple-ios-simulator"), Some(VersionTuple::major_minor(14, 0)));
        assert_eq!(min("arm64-apple-ios-macabi"), Some(VersionTuple::major_minor(14, 0)));
        assert_eq!(min("arm64e-apple-ios"), Some(VersionTuple::major_minor(14, 0)));
        assert_eq!(min("arm64-apple-ios"), None);
        assert_eq!(min("arm64-apple-watchos-simulator"), Some(VersionTuple::major_minor(7, 0)));
        assert_eq!(min("arm64-apple-driverkit"), Some(VersionTuple::major_minor(20, 0)));
        assert_eq!(min("x86_64-apple-macosx"), None);
    }

    #[test]
    fn canonical_versions() {
        assert_eq!(
            canonical_version_for_os(OsKind::MacOsx, VersionTuple::major_minor(10, 16)),
            VersionTuple::major_minor(11, 0)
        );
        assert_eq!(
            canonical_version_for_os(OsKind::MacOsx, VersionTuple::major_minor(10, 15)),
            VersionTuple::major_minor(10, 15)
        );
        assert_eq!(
            canonical_version_for_os(OsKind::Ios, VersionTuple::major_minor(10, 16)),
            VersionTuple::major_minor(10, 16)
        );
    }

    #[test]
    fn version_comparisons() {
        let triple = Triple::new("x86_64-apple-macosx10.15");
        assert!(triple.is_os_version_lt(11, None, None));
        assert!(triple.is_os_version_lt(10, Some(15), Some(1)));
        assert!(!triple.is_os_version_lt(10, Some(15), None));
        assert!(!triple.is_os_version_lt(10, None, None));
        assert!(triple.is_os_version_lt_triple(&Triple::new("x86_64-apple-macosx11")));
        assert!(triple.is_macos_version_lt(10, Some(16), None));
    }

    #[test]
    fn darwin_version_comparisons() {
        let triple = Triple::new("x86_64-apple-darwin19");
        assert!(triple.is_macos_version_lt(10, Some(16), None));
        assert!(!triple.is_macos_version_lt(10, Some(15), None));
        assert!(triple.is_macos_version_lt(11, None, None));

        let triple = Triple::new("arm64-apple-darwin21");
        assert!(!triple.is_macos_version_lt(12, None, None));
        assert!(triple.is_macos_version_lt(13, None, None));
    }

    #[test]
    fn conversions_saturate_at_u32_max() {
        let triple = Triple::new("arm64-apple-xros4294967295");
        assert_eq!(triple.os_version(), VersionTuple::new(u32::MAX));
        assert_eq!(triple.ios_version(), Some(VersionTuple::new(u32::MAX)));

        let triple = Triple::new("x86_64-apple-darwin4294967295");
        assert_eq!(triple.macos_version(), Some(VersionTuple::new(u32::MAX - 9)));
        assert!(!triple.is_macos_version_lt(u32::MAX, None, None));

        let triple = Triple::new("x86_64-apple-darwin20");
        assert!(triple.is_macos_version_lt(10, Some(u32::MAX), None));
        assert!(triple.is_macos_version_lt(u32::MAX, None, None));
    }

    #[test]
    fn android_versions() {
        assert!(Triple::new("armv7-unknown-linux-android16").is_android_version_lt(21));
        assert!(!Triple::new("aarch64-unknown-linux-android29").is_android_version_lt(29));
        assert!(Triple::new("aarch64-unknown-linux-android29").is_android_version_lt(30));
        // 64-bit Android starts at API 21.
        assert!(!Triple::new("aarch64-unknown-linux-android").is_android_version_lt(21));
        assert!(Triple::new("aarch64-unknown-linux-android").is_android_version_lt(22));
    }

    #[test]
    #[should_panic(expected = "not an Android triple")]
    fn android_version_needs_android() {
        Triple::new("aarch64-unknown-linux-gnu").is_android_version_lt(21);
    }
}
