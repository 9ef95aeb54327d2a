//! The [`Triple`] type: a target string plus its classified components.

use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::arch::{arch_name_with_sub_arch, parse_arch, parse_sub_arch, ArchKind, SubArchKind};
use crate::environment::{parse_environment, EnvironmentKind};
use crate::normalize::normalize;
use crate::object_format::{default_object_format, parse_object_format, ObjectFormatKind};
use crate::os::{parse_os, OsKind};
use crate::vendor::{parse_vendor, VendorKind};

/// A target triple such as `x86_64-pc-linux-gnu`.
///
/// The string is kept exactly as given; the components are classified once
/// at construction. Parsing never fails: each component that cannot be
/// classified is `Unknown`. Two triples are equal when their classified
/// components are, whatever their spelling.
///
/// ```
/// use triplex_core::{ArchKind, EnvironmentKind, ObjectFormatKind, OsKind, Triple, VendorKind};
///
/// let triple = Triple::new("x86_64-pc-linux-gnu");
/// assert_eq!(triple.arch(), ArchKind::X86_64);
/// assert_eq!(triple.vendor(), VendorKind::Pc);
/// assert_eq!(triple.os(), OsKind::Linux);
/// assert_eq!(triple.environment(), EnvironmentKind::Gnu);
/// assert_eq!(triple.object_format(), ObjectFormatKind::Elf);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Triple {
    data: String,
    arch: ArchKind,
    sub_arch: SubArchKind,
    vendor: VendorKind,
    os: OsKind,
    environment: EnvironmentKind,
    object_format: ObjectFormatKind,
}

/// Environment implied by a bare MIPS architecture token.
fn mips_default_environment(arch: &str) -> EnvironmentKind {
    if arch.starts_with("mipsn32") {
        EnvironmentKind::GnuAbiN32
    } else if arch.starts_with("mips64") || arch.starts_with("mipsisa64") {
        EnvironmentKind::GnuAbi64
    } else if arch.starts_with("mipsisa32") {
        EnvironmentKind::Gnu
    } else if matches!(arch, "mips" | "mipsel" | "mipsr6" | "mipsr6el") {
        EnvironmentKind::Gnu
    } else {
        EnvironmentKind::Unknown
    }
}

impl Triple {
    /// Parse a triple string.
    ///
    /// The string is split into at most four components on `-`; the fourth
    /// keeps any further hyphens. A string with no `-` at all is a bare
    /// architecture, and MIPS architectures then imply their usual GNU
    /// environment.
    pub fn new(data: impl Into<String>) -> Self {
        let data = data.into();

        let components: Vec<&str> = data.splitn(4, '-').collect();
        let arch_token = components.first().copied().unwrap_or_default();
        let arch = parse_arch(arch_token);
        let sub_arch = parse_sub_arch(arch_token);

        let (vendor, os, environment, explicit_format) = match components.as_slice() {
            [_, vendor] => (
                parse_vendor(vendor),
                OsKind::Unknown,
                EnvironmentKind::Unknown,
                ObjectFormatKind::Unknown,
            ),
            [_, vendor, os] => (
                parse_vendor(vendor),
                parse_os(os),
                EnvironmentKind::Unknown,
                ObjectFormatKind::Unknown,
            ),
            [_, vendor, os, environment, ..] => (
                parse_vendor(vendor),
                parse_os(os),
                parse_environment(environment),
                parse_object_format(environment),
            ),
            _ => (
                VendorKind::Unknown,
                OsKind::Unknown,
                mips_default_environment(arch_token),
                ObjectFormatKind::Unknown,
            ),
        };

        let object_format = match explicit_format {
            ObjectFormatKind::Unknown => default_object_format(arch, os),
            explicit => explicit,
        };

        Self {
            data,
            arch,
            sub_arch,
            vendor,
            os,
            environment,
            object_format,
        }
    }

    /// Build `arch-vendor-os` from component names.
    pub fn from_components(arch: &str, vendor: &str, os: &str) -> Self {
        Self::new(format!("{arch}-{vendor}-{os}"))
    }

    /// Build `arch-vendor-os-environment` from component names.
    pub fn from_components_with_env(arch: &str, vendor: &str, os: &str, environment: &str) -> Self {
        Self::new(format!("{arch}-{vendor}-{os}-{environment}"))
    }

    pub fn arch(&self) -> ArchKind {
        self.arch
    }

    pub fn sub_arch(&self) -> SubArchKind {
        self.sub_arch
    }

    pub fn vendor(&self) -> VendorKind {
        self.vendor
    }

    pub fn os(&self) -> OsKind {
        self.os
    }

    pub fn environment(&self) -> EnvironmentKind {
        self.environment
    }

    /// The object format named in the environment component, or the
    /// target's default when none is named.
    pub fn object_format(&self) -> ObjectFormatKind {
        self.object_format
    }

    /// The triple string as given.
    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// The canonical form of this triple's string.
    pub fn normalize(&self) -> String {
        normalize(&self.data)
    }

    fn component(&self, index: usize) -> &str {
        self.data.splitn(4, '-').nth(index).unwrap_or("")
    }

    /// The architecture component as written.
    pub fn arch_name(&self) -> &str {
        self.component(0)
    }

    pub fn vendor_name(&self) -> &str {
        self.component(1)
    }

    /// The OS component as written, version suffix included.
    pub fn os_name(&self) -> &str {
        self.component(2)
    }

    /// Everything after the third `-`, hyphens included.
    pub fn environment_name(&self) -> &str {
        self.component(3)
    }

    /// Everything after the second `-`.
    pub fn os_and_environment_name(&self) -> &str {
        self.data.splitn(3, '-').nth(2).unwrap_or("")
    }

    pub fn has_environment(&self) -> bool {
        !self.environment_name().is_empty()
    }

    /// Replace the whole triple.
    pub fn set_triple(&mut self, data: impl Into<String>) {
        *self = Self::new(data);
    }

    /// Replace the architecture with the spelling for `kind` and `sub_arch`.
    pub fn set_arch(&mut self, kind: ArchKind, sub_arch: SubArchKind) {
        self.set_arch_name(arch_name_with_sub_arch(kind, sub_arch));
    }

    pub fn set_vendor(&mut self, kind: VendorKind) {
        self.set_vendor_name(kind.canonical_name());
    }

    pub fn set_os(&mut self, kind: OsKind) {
        self.set_os_name(kind.canonical_name());
    }

    /// Replace the environment, keeping an object format that differs from
    /// the target's default as a `-format` suffix.
    pub fn set_environment(&mut self, kind: EnvironmentKind) {
        if self.object_format == default_object_format(self.arch, self.os) {
            self.set_environment_name(kind.canonical_name());
        } else {
            let name = format!("{}-{}", kind.canonical_name(), self.object_format.canonical_name());
            self.set_environment_name(&name);
        }
    }

    /// Name an explicit object format in the environment component.
    pub fn set_object_format(&mut self, kind: ObjectFormatKind) {
        if self.environment == EnvironmentKind::Unknown {
            self.set_environment_name(kind.canonical_name());
        } else {
            let name = format!("{}-{}", self.environment.canonical_name(), kind.canonical_name());
            self.set_environment_name(&name);
        }
    }

    pub fn set_arch_name(&mut self, name: &str) {
        let data = format!("{name}-{}-{}", self.vendor_name(), self.os_and_environment_name());
        self.set_triple(data);
    }

    pub fn set_vendor_name(&mut self, name: &str) {
        let data = format!("{}-{name}-{}", self.arch_name(), self.os_and_environment_name());
        self.set_triple(data);
    }

    pub fn set_os_name(&mut self, name: &str) {
        let data = if self.has_environment() {
            format!(
                "{}-{}-{name}-{}",
                self.arch_name(),
                self.vendor_name(),
                self.environment_name()
            )
        } else {
            format!("{}-{}-{name}", self.arch_name(), self.vendor_name())
        };
        self.set_triple(data);
    }

    pub fn set_environment_name(&mut self, name: &str) {
        let data = format!(
            "{}-{}-{}-{name}",
            self.arch_name(),
            self.vendor_name(),
            self.os_name()
        );
        self.set_triple(data);
    }

    /// Replace the OS and environment with a single `os[-environment]` string.
    pub fn set_os_and_environment_name(&mut self, name: &str) {
        let data = format!("{}-{}-{name}", self.arch_name(), self.vendor_name());
        self.set_triple(data);
    }

    fn classified(&self) -> (ArchKind, SubArchKind, VendorKind, OsKind, EnvironmentKind, ObjectFormatKind) {
        (
            self.arch,
            self.sub_arch,
            self.vendor,
            self.os,
            self.environment,
            self.object_format,
        )
    }
}

impl Default for Triple {
    fn default() -> Self {
        Self::new("")
    }
}

impl PartialEq for Triple {
    fn eq(&self, other: &Self) -> bool {
        self.classified() == other.classified()
    }
}

impl Eq for Triple {}

impl Hash for Triple {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.classified().hash(state);
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

impl FromStr for Triple {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Triple {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Triple {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<Triple> for String {
    fn from(triple: Triple) -> Self {
        triple.data
    }
}
