//! Version tuples for target triples.
//!
//! A [`VersionTuple`] is a version number of the form
//! `major[.minor[.subminor[.build]]]`. Trailing components may be absent;
//! an absent component compares equal to zero but is never rendered.
//!
//! Triple components carry versions as numeric suffixes (`ios12.0`,
//! `android21`); [`VersionTuple::parse_prefix`] splits such a suffix off
//! the front of a string without failing, while [`str::parse`] accepts
//! only a complete version.

pub mod error;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use error::{Result, VersionError};

/// Maximum number of dot-separated components in a version.
pub const MAX_COMPONENTS: usize = 4;

/// A version number in the form `major[.minor[.subminor[.build]]]`.
///
/// Presence is nested: the constructors never produce a present field
/// after an absent one, and rendering stops at the first absent field.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VersionTuple {
    major: u32,
    minor: Option<u32>,
    subminor: Option<u32>,
    build: Option<u32>,
}

impl VersionTuple {
    /// A version with only a major component.
    pub const fn new(major: u32) -> Self {
        Self {
            major,
            minor: None,
            subminor: None,
            build: None,
        }
    }

    /// A version with major and minor components.
    pub const fn major_minor(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor: Some(minor),
            subminor: None,
            build: None,
        }
    }

    /// A version with major, minor and subminor components.
    pub const fn major_minor_subminor(major: u32, minor: u32, subminor: u32) -> Self {
        Self {
            major,
            minor: Some(minor),
            subminor: Some(subminor),
            build: None,
        }
    }

    /// A version with all four components.
    pub const fn full(major: u32, minor: u32, subminor: u32, build: u32) -> Self {
        Self {
            major,
            minor: Some(minor),
            subminor: Some(subminor),
            build: Some(build),
        }
    }

    /// Build a version from a slice of one to four components.
    ///
    /// Returns `None` for an empty slice or more than four components.
    pub fn from_components(components: &[u32]) -> Option<Self> {
        match *components {
            [major] => Some(Self::new(major)),
            [major, minor] => Some(Self::major_minor(major, minor)),
            [major, minor, subminor] => Some(Self::major_minor_subminor(major, minor, subminor)),
            [major, minor, subminor, build] => Some(Self::full(major, minor, subminor, build)),
            _ => None,
        }
    }

    /// The major version number.
    pub fn major(&self) -> u32 {
        self.major
    }

    /// The minor version number, if present.
    pub fn minor(&self) -> Option<u32> {
        self.minor
    }

    /// The subminor version number, if present.
    pub fn subminor(&self) -> Option<u32> {
        self.subminor
    }

    /// The build number, if present.
    pub fn build(&self) -> Option<u32> {
        self.build
    }

    /// True if every component is zero, counting absent components as zero.
    pub fn is_empty(&self) -> bool {
        self.major == 0
            && self.minor.unwrap_or(0) == 0
            && self.subminor.unwrap_or(0) == 0
            && self.build.unwrap_or(0) == 0
    }

    /// This version with the build component dropped.
    pub fn without_build(&self) -> Self {
        Self {
            build: None,
            ..*self
        }
    }

    /// This version with the major component replaced, keeping the rest.
    pub fn with_major_replaced(&self, major: u32) -> Self {
        Self { major, ..*self }
    }

    /// The four components with absent ones read as zero.
    fn padded(&self) -> [u32; 4] {
        [
            self.major,
            self.minor.unwrap_or(0),
            self.subminor.unwrap_or(0),
            self.build.unwrap_or(0),
        ]
    }

    /// Scan a leading `digit+('.'digit+){0,3}` run from the front of `s`.
    ///
    /// Returns the parsed version and the number of bytes consumed. When
    /// `s` does not start with a digit the result is `(VersionTuple::default(), 0)`.
    /// A `.` not followed by a digit, or a component that overflows `u32`,
    /// ends the scan before it.
    ///
    /// ```
    /// use triplex_version::VersionTuple;
    ///
    /// let (version, consumed) = VersionTuple::parse_prefix("12.0-simulator");
    /// assert_eq!(version, VersionTuple::major_minor(12, 0));
    /// assert_eq!(consumed, 4);
    /// ```
    pub fn parse_prefix(s: &str) -> (Self, usize) {
        let bytes = s.as_bytes();
        let mut components = Vec::with_capacity(MAX_COMPONENTS);
        let mut consumed = 0;
        let mut pos = 0;

        while components.len() < MAX_COMPONENTS {
            if !components.is_empty() {
                if bytes.get(pos) != Some(&b'.') {
                    break;
                }
                pos += 1;
            }
            let start = pos;
            while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
                pos += 1;
            }
            if pos == start {
                break;
            }
            match s[start..pos].parse::<u32>() {
                Ok(value) => components.push(value),
                Err(_) => break,
            }
            consumed = pos;
        }

        match Self::from_components(&components) {
            Some(version) => (version, consumed),
            None => (Self::default(), 0),
        }
    }
}

impl PartialEq for VersionTuple {
    fn eq(&self, other: &Self) -> bool {
        self.padded() == other.padded()
    }
}

impl Eq for VersionTuple {}

impl Hash for VersionTuple {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.padded().hash(state);
    }
}

impl PartialOrd for VersionTuple {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionTuple {
    fn cmp(&self, other: &Self) -> Ordering {
        self.padded().cmp(&other.padded())
    }
}

impl fmt::Display for VersionTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major)?;
        let Some(minor) = self.minor else {
            return Ok(());
        };
        write!(f, ".{minor}")?;
        let Some(subminor) = self.subminor else {
            return Ok(());
        };
        write!(f, ".{subminor}")?;
        if let Some(build) = self.build {
            write!(f, ".{build}")?;
        }
        Ok(())
    }
}

impl FromStr for VersionTuple {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(VersionError::Empty);
        }

        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() > MAX_COMPONENTS {
            return Err(VersionError::TooManyComponents { found: parts.len() });
        }

        let last = parts.len() - 1;
        let mut components = Vec::with_capacity(parts.len());
        for (position, part) in parts.iter().enumerate() {
            let digits = part.bytes().take_while(u8::is_ascii_digit).count();
            if digits > 0 && digits < part.len() && position == last {
                return Err(VersionError::TrailingCharacters {
                    rest: part[digits..].to_string(),
                });
            }
            let value = if digits == part.len() && digits > 0 {
                part.parse::<u32>().ok()
            } else {
                None
            };
            match value {
                Some(value) => components.push(value),
                None => {
                    return Err(VersionError::InvalidComponent {
                        position,
                        text: (*part).to_string(),
                    })
                }
            }
        }

        Self::from_components(&components).ok_or(VersionError::Empty)
    }
}

impl TryFrom<String> for VersionTuple {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<VersionTuple> for String {
    fn from(value: VersionTuple) -> Self {
        value.to_string()
    }
}

impl From<u32> for VersionTuple {
    fn from(major: u32) -> Self {
        Self::new(major)
    }
}

impl From<(u32, u32)> for VersionTuple {
    fn from((major, minor): (u32, u32)) -> Self {
        Self::major_minor(major, minor)
    }
}

impl From<(u32, u32, u32)> for VersionTuple {
    fn from((major, minor, subminor): (u32, u32, u32)) -> Self {
        Self::major_minor_subminor(major, minor, subminor)
    }
}

impl From<(u32, u32, u32, u32)> for VersionTuple {
    fn from((major, minor, subminor, build): (u32, u32, u32, u32)) -> Self {
        Self::full(major, minor, subminor, build)
    }
}
