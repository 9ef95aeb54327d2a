//! Vendor classification.

use crate::table::{component_table, lookup_exact, Axis, Component};

component_table! {
    /// The vendor component of a triple.
    pub enum VendorKind(Vendor) {
        Unknown => "unknown",
        Apple => "apple",
        Pc => "pc",
        /// Sony Interactive Entertainment
        Scei => "scei" | "sie",
        Freescale => "fsl",
        Ibm => "ibm",
        ImaginationTechnologies => "img",
        MipsTechnologies => "mti",
        Nvidia => "nvidia",
        Csr => "csr",
        Amd => "amd",
        Mesa => "mesa",
        Suse => "suse",
        OpenEmbedded => "oe",
    }
}

impl Component for VendorKind {
    const AXIS: Axis = Axis::Vendor;
    const UNKNOWN: Self = VendorKind::Unknown;

    fn canonical_name(self) -> &'static str {
        VendorKind::canonical_name(self)
    }

    fn aliases() -> &'static [(&'static str, Self)] {
        VendorKind::ALIASES
    }

    fn classify(token: &str) -> Self {
        parse_vendor(token)
    }
}

/// Classify a vendor token. Vendors are matched exactly.
pub fn parse_vendor(token: &str) -> VendorKind {
    lookup_exact(VendorKind::ALIASES, token).unwrap_or(VendorKind::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendors() {
        assert_eq!(parse_vendor("apple"), VendorKind::Apple);
        assert_eq!(parse_vendor("sie"), VendorKind::Scei);
        assert_eq!(VendorKind::Scei.canonical_name(), "scei");
        assert_eq!(parse_vendor("fsl"), VendorKind::Freescale);
        assert_eq!(parse_vendor("applex"), VendorKind::Unknown);
        assert_eq!(parse_vendor("Apple"), VendorKind::Unknown);
        assert_eq!(parse_vendor(""), VendorKind::Unknown);
    }

    #[test]
    fn canonical_names_round_trip() {
        for &kind in VendorKind::ALL {
            assert_eq!(parse_vendor(kind.canonical_name()), kind);
        }
    }
}
