//! Target triple parsing, classification and normalization.
//!
//! A target triple such as `aarch64-apple-ios17.0-simulator` names the
//! platform a compiler generates code for. [`Triple`] splits the string
//! into its components and classifies each one:
//!
//! - **Architecture:** CPU family and sub-architecture ([`ArchKind`], [`SubArchKind`])
//! - **Vendor:** who built the platform ([`VendorKind`])
//! - **Operating system:** with an optional version suffix ([`OsKind`])
//! - **Environment:** the ABI or C library, also versioned ([`EnvironmentKind`])
//! - **Object format:** named explicitly or derived from the rest ([`ObjectFormatKind`])
//!
//! Classification never fails. Components that are not recognized are
//! `Unknown`, and the original string is kept as given. [`normalize`]
//! repairs strings whose components are missing or out of order, and
//! [`config`] maps short target names and object-format overrides from a
//! TOML file.

mod predicates;
mod table;
mod variants;

pub mod arch;
pub mod config;
pub mod environment;
pub mod error;
pub mod normalize;
pub mod object_format;
pub mod os;
pub mod triple;
pub mod vendor;
pub mod versions;

pub use arch::{arch_name_with_sub_arch, parse_arch, parse_sub_arch, ArchKind, SubArchKind};
pub use config::{load_config, parse_config, validate_config, ObjectFormatRule, TargetConfig};
pub use environment::{parse_environment, split_environment, EnvironmentKind};
pub use error::{Result, TargetError};
pub use normalize::normalize;
pub use object_format::{default_object_format, parse_object_format, ObjectFormatKind};
pub use os::{parse_os, split_os, OsKind};
pub use table::{Axis, Component};
pub use triple::Triple;
pub use triplex_version::VersionTuple;
pub use vendor::{parse_vendor, VendorKind};
pub use versions::canonical_version_for_os;
