//! TOML target configuration.
//!
//! A `triplex.toml` file names a default target, short aliases for
//! frequently used triples, and object-format rules that override the
//! built-in default format for matching targets:
//!
//! ```toml
//! default-triple = "host"
//!
//! [aliases]
//! host = "x86_64-pc-linux-gnu"
//!
//! [[object-format]]
//! arch = "x86_64"
//! os = "uefi"
//! format = "elf"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::arch::ArchKind;
use crate::error::{Result, TargetError};
use crate::object_format::{parse_object_format, ObjectFormatKind};
use crate::os::OsKind;
use crate::triple::Triple;

/// Conventional file name for a target configuration.
pub const CONFIG_FILE_NAME: &str = "triplex.toml";

/// A validation issue found in a target configuration.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Severity: "error" or "warning".
    pub severity: &'static str,
    /// Human-readable description.
    pub message: String,
}

/// Override of the default object format for matching targets.
///
/// An absent `arch` or `os` matches any value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ObjectFormatRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    pub format: String,
}

impl ObjectFormatRule {
    /// True if the rule applies to `triple`.
    ///
    /// A rule whose names do not parse never matches.
    pub fn matches(&self, triple: &Triple) -> bool {
        let arch_matches = match &self.arch {
            Some(name) => name.parse::<ArchKind>().is_ok_and(|arch| arch == triple.arch()),
            None => true,
        };
        let os_matches = match &self.os {
            Some(name) => name.parse::<OsKind>().is_ok_and(|os| os == triple.os()),
            None => true,
        };
        arch_matches && os_matches
    }
}

/// Target configuration loaded from `triplex.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TargetConfig {
    /// Triple or alias used when no target is requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_triple: Option<String>,
    /// Short names for full triples.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub aliases: BTreeMap<String, String>,
    /// Object-format overrides, first match wins.
    #[serde(default, rename = "object-format", skip_serializing_if = "Vec::is_empty")]
    pub object_format: Vec<ObjectFormatRule>,
}

impl TargetConfig {
    /// Resolve an alias or triple string into a [`Triple`].
    ///
    /// The first matching object-format rule is applied unless the
    /// environment component already names a format.
    pub fn resolve(&self, name: &str) -> Triple {
        let spelled = self.aliases.get(name).map_or(name, String::as_str);
        let mut triple = Triple::new(spelled);

        if parse_object_format(triple.environment_name()) != ObjectFormatKind::Unknown {
            return triple;
        }
        let Some(rule) = self.object_format.iter().find(|rule| rule.matches(&triple)) else {
            return triple;
        };
        if let Ok(format) = rule.format.parse::<ObjectFormatKind>() {
            if format != ObjectFormatKind::Unknown && format != triple.object_format() {
                debug!(triple = triple.as_str(), %format, "object format overridden by configuration");
                triple.set_object_format(format);
            }
        }
        triple
    }

    /// Like [`TargetConfig::resolve`], but the architecture must be known.
    pub fn resolve_known(&self, name: &str) -> Result<Triple> {
        let triple = self.resolve(name);
        if triple.arch() == ArchKind::Unknown {
            return Err(TargetError::Validation {
                detail: format!("target '{name}' has an unknown architecture"),
            });
        }
        Ok(triple)
    }

    /// The configured default target, if any.
    pub fn default_target(&self) -> Option<Triple> {
        self.default_triple.as_deref().map(|name| self.resolve(name))
    }
}

/// Load a target configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<TargetConfig> {
    if !path.exists() {
        return Err(TargetError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    debug!(
        path = %path.display(),
        aliases = config.aliases.len(),
        rules = config.object_format.len(),
        "loaded target configuration"
    );
    Ok(config)
}

/// Parse a target configuration from a TOML string.
pub fn parse_config(toml_str: &str) -> Result<TargetConfig> {
    let config: TargetConfig = toml::from_str(toml_str)?;
    Ok(config)
}

/// Serialize a target configuration to pretty TOML.
pub fn config_to_toml(config: &TargetConfig) -> Result<String> {
    let toml_str = toml::to_string_pretty(config)?;
    Ok(toml_str)
}

/// Validate a target configuration.
///
/// Returns `Ok(())` if valid, or `Err(issues)` with a list of problems.
pub fn validate_config(config: &TargetConfig) -> std::result::Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    if let Some(default) = &config.default_triple {
        if config.resolve(default).arch() == ArchKind::Unknown {
            issues.push(ValidationIssue {
                severity: "warning",
                message: format!("default-triple '{default}' has an unknown architecture"),
            });
        }
    }

    for (alias, target) in &config.aliases {
        if alias.is_empty() || alias.contains('-') {
            issues.push(ValidationIssue {
                severity: "error",
                message: format!("alias '{alias}' must be a non-empty name without '-'"),
            });
        }
        if config.aliases.contains_key(target.as_str()) {
            issues.push(ValidationIssue {
                severity: "error",
                message: format!("alias '{alias}' refers to another alias '{target}'"),
            });
        } else if Triple::new(target.as_str()).arch() == ArchKind::Unknown {
            issues.push(ValidationIssue {
                severity: "warning",
                message: format!("alias '{alias}' target '{target}' has an unknown architecture"),
            });
        }
    }

    for (index, rule) in config.object_format.iter().enumerate() {
        if let Some(arch) = &rule.arch {
            if let Err(err) = arch.parse::<ArchKind>() {
                issues.push(ValidationIssue {
                    severity: "error",
                    message: format!("object-format rule {index}: {err}"),
                });
            }
        }
        if let Some(os) = &rule.os {
            if let Err(err) = os.parse::<OsKind>() {
                issues.push(ValidationIssue {
                    severity: "error",
                    message: format!("object-format rule {index}: {err}"),
                });
            }
        }
        match rule.format.parse::<ObjectFormatKind>() {
            Ok(ObjectFormatKind::Unknown) => issues.push(ValidationIssue {
                severity: "error",
                message: format!("object-format rule {index}: format must not be empty"),
            }),
            Ok(_) => {}
            Err(err) => issues.push(ValidationIssue {
                severity: "error",
                message: format!("object-format rule {index}: {err}"),
            }),
        }
        if rule.arch.is_none() && rule.os.is_none() {
            issues.push(ValidationIssue {
                severity: "warning",
                message: format!("object-format rule {index} matches every target"),
            });
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}
