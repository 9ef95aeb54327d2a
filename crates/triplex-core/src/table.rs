//! Registration tables shared by the five component axes.
//!
//! Each axis is declared once with [`component_table!`]: the variant list
//! carries the canonical spelling and every accepted alias, and the macro
//! derives the enum, its serde names, the alias slice used by the
//! classifier and the canonical-name function from that single list.

use std::fmt;

/// One of the five classification dimensions of a triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Arch,
    Vendor,
    Os,
    Environment,
    ObjectFormat,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Arch => "architecture",
            Axis::Vendor => "vendor",
            Axis::Os => "operating system",
            Axis::Environment => "environment",
            Axis::ObjectFormat => "object format",
        })
    }
}

/// Behaviour common to the component enums.
pub trait Component: Copy + Eq + fmt::Debug + fmt::Display + 'static {
    /// The axis this component classifies.
    const AXIS: Axis;

    /// The sentinel produced when classification fails.
    const UNKNOWN: Self;

    /// The preferred spelling of this kind.
    fn canonical_name(self) -> &'static str;

    /// Every accepted spelling paired with the kind it names.
    fn aliases() -> &'static [(&'static str, Self)];

    /// Classify a triple token the way the triple parser does.
    ///
    /// Never fails; unrecognized tokens produce [`Component::UNKNOWN`].
    fn classify(token: &str) -> Self;

    fn is_unknown(self) -> bool {
        self == Self::UNKNOWN
    }
}

/// Exact, case-sensitive lookup.
pub(crate) fn lookup_exact<K: Copy>(table: &[(&'static str, K)], token: &str) -> Option<K> {
    table
        .iter()
        .find(|(name, _)| *name == token)
        .map(|&(_, kind)| kind)
}

/// Longest alias that is a prefix of `token`, with its length.
pub(crate) fn lookup_prefix<K: Copy>(
    table: &[(&'static str, K)],
    token: &str,
) -> Option<(K, usize)> {
    table
        .iter()
        .filter(|(name, _)| !name.is_empty() && token.starts_with(name))
        .max_by_key(|(name, _)| name.len())
        .map(|&(name, kind)| (kind, name.len()))
}

/// Longest alias that is a suffix of `token`.
pub(crate) fn lookup_suffix<K: Copy>(table: &[(&'static str, K)], token: &str) -> Option<K> {
    table
        .iter()
        .filter(|(name, _)| !name.is_empty() && token.ends_with(name))
        .max_by_key(|(name, _)| name.len())
        .map(|&(_, kind)| kind)
}

/// Declare a component enum from its registration table.
///
/// ```text
/// component_table! {
///     /// Docs.
///     pub enum VendorKind(Vendor) {
///         Unknown => "unknown",
///         Scei => "scei" | "sie",
///     }
/// }
/// ```
///
/// The first string is the canonical name, the rest are aliases accepted on
/// input. The generated `FromStr` is strict: it accepts exactly the listed
/// spellings and reports anything else as [`TargetError::UnknownComponent`].
///
/// [`TargetError::UnknownComponent`]: crate::error::TargetError::UnknownComponent
macro_rules! component_table {
    (
        $(#[$meta:meta])*
        pub enum $name:ident($axis:ident) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $canonical:literal $(| $alias:literal)*,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $canonical $(, alias = $alias)*)]
                $variant,
            )+
        }

        impl $name {
            /// Every kind, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Every accepted spelling paired with the kind it names.
            pub const ALIASES: &'static [(&'static str, $name)] = &[
                $(
                    ($canonical, $name::$variant),
                    $(($alias, $name::$variant),)*
                )+
            ];

            /// The preferred spelling of this kind.
            pub const fn canonical_name(self) -> &'static str {
                match self {
                    $($name::$variant => $canonical,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.canonical_name())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::TargetError;

            fn from_str(s: &str) -> $crate::error::Result<Self> {
                $crate::table::lookup_exact(Self::ALIASES, s).ok_or_else(|| {
                    $crate::error::TargetError::UnknownComponent {
                        axis: $crate::table::Axis::$axis,
                        name: s.to_string(),
                    }
                })
            }
        }
    };
}

pub(crate) use component_table;

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[(&str, u8)] = &[("gnu", 1), ("gnueabi", 2), ("gnueabihf", 3), ("elf", 4), ("", 0)];

    #[test]
    fn exact_lookup_is_case_sensitive() {
        assert_eq!(lookup_exact(TABLE, "gnu"), Some(1));
        assert_eq!(lookup_exact(TABLE, "GNU"), None);
        assert_eq!(lookup_exact(TABLE, ""), Some(0));
    }

    #[test]
    fn prefix_lookup_prefers_longest() {
        assert_eq!(lookup_prefix(TABLE, "gnueabihf"), Some((3, 9)));
        assert_eq!(lookup_prefix(TABLE, "gnueabi21"), Some((2, 7)));
        assert_eq!(lookup_prefix(TABLE, "gnu"), Some((1, 3)));
        assert_eq!(lookup_prefix(TABLE, "musl"), None);
        assert_eq!(lookup_prefix(TABLE, ""), None);
    }

    #[test]
    fn suffix_lookup_skips_empty() {
        assert_eq!(lookup_suffix(TABLE, "gnu-elf"), Some(4));
        assert_eq!(lookup_suffix(TABLE, "macho"), None);
    }

    #[test]
    fn axis_names() {
        assert_eq!(Axis::Os.to_string(), "operating system");
        assert_eq!(Axis::ObjectFormat.to_string(), "object format");
    }
}
