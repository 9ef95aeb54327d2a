use triplex_core::{
    normalize, ArchKind, Component, EnvironmentKind, ObjectFormatKind, OsKind, SubArchKind, Triple,
    VendorKind, VersionTuple,
};

#[test]
fn basic_splitting() {
    let table = [
        ("", "", "", "", ""),
        ("-", "", "", "", ""),
        ("--", "", "", "", ""),
        ("---", "", "", "", ""),
        ("----", "", "", "", "-"),
        ("a", "a", "", "", ""),
        ("a-b", "a", "b", "", ""),
        ("a-b-c", "a", "b", "c", ""),
        ("a-b-c-d", "a", "b", "c", "d"),
    ];
    for (input, arch, vendor, os, environment) in table {
        let triple = Triple::new(input);
        assert_eq!(triple.arch_name(), arch, "{input:?}");
        assert_eq!(triple.vendor_name(), vendor, "{input:?}");
        assert_eq!(triple.os_name(), os, "{input:?}");
        assert_eq!(triple.environment_name(), environment, "{input:?}");
        assert_eq!(triple.as_str(), input);
    }
}

#[test]
fn linux_gnu() {
    let triple = Triple::new("x86_64-pc-linux-gnu");
    assert_eq!(triple.arch(), ArchKind::X86_64);
    assert_eq!(triple.vendor(), VendorKind::Pc);
    assert_eq!(triple.os(), OsKind::Linux);
    assert_eq!(triple.environment(), EnvironmentKind::Gnu);
    assert_eq!(triple.object_format(), ObjectFormatKind::Elf);
    assert!(triple.is_os_linux());
    assert!(triple.is_gnu_environment());
    assert!(triple.is_os_glibc());
    assert!(triple.is_arch_64bit());
}

#[test]
fn xros() {
    let triple = Triple::new("arm64-apple-xros");
    assert!(triple.is_xros());
    assert!(triple.is_os_darwin());
    assert!(!triple.is_ios());
    assert!(!triple.is_macos());
    assert!(!triple.is_simulator_environment());
    assert_eq!(triple.os_name(), "xros");
    assert_eq!(triple.os_version(), VersionTuple::new(0));

    let triple = Triple::new("arm64-apple-visionos1.2");
    assert!(triple.is_xros());
    assert!(triple.is_os_darwin());
    assert!(!triple.is_ios());
    assert_eq!(triple.os_name(), "visionos1.2");
    assert_eq!(triple.os_version(), VersionTuple::major_minor(1, 2));

    let triple = Triple::new("arm64-apple-xros1-simulator");
    assert_eq!(triple.arch(), ArchKind::Aarch64);
    assert_eq!(triple.vendor(), VendorKind::Apple);
    assert_eq!(triple.os(), OsKind::XrOs);
    assert_eq!(triple.environment(), EnvironmentKind::Simulator);
    assert!(triple.is_xros());
    assert!(triple.is_os_darwin());
    assert!(triple.is_simulator_environment());
    assert!(triple.is_target_machine_mac());
    assert_eq!(triple.os_version(), VersionTuple::major_minor_subminor(1, 0, 0));
    assert_eq!(triple.ios_version(), Some(VersionTuple::new(17)));
    assert_eq!(triple.object_format(), ObjectFormatKind::MachO);
}

#[test]
fn arm_tokens() {
    let triple = Triple::new("armv8.1a-unknown-linux-gnueabihf");
    assert_eq!(triple.arch(), ArchKind::Arm);
    assert_eq!(triple.sub_arch(), SubArchKind::ArmV8_1A);
    assert!(triple.is_little_endian());
    assert!(triple.is_hard_float_abi());

    // M-profile v6 is Thumb-only whatever the prefix says.
    let triple = Triple::new("armv6m-none-none-eabi");
    assert_eq!(triple.arch(), ArchKind::Thumb);
    assert_eq!(triple.sub_arch(), SubArchKind::ArmV6M);

    let triple = Triple::new("thumbv6m-none-none-eabi");
    assert_eq!(triple.arch(), ArchKind::Thumb);
    assert!(triple.is_arm_mclass());
    assert!(triple.is_arm_eabi());

    assert_eq!(Triple::new("thumbv3-unknown-linux").arch(), ArchKind::Unknown);
    assert_eq!(Triple::new("armebv7-unknown-linux").arch(), ArchKind::Armeb);
}

#[test]
fn darwin_versions() {
    let triple = Triple::new("x86_64-apple-darwin19");
    assert_eq!(triple.macos_version(), Some(VersionTuple::major_minor(10, 15)));
    assert!(triple.is_macos_version_lt(10, Some(16), None));

    let triple = Triple::new("arm64-apple-macosx14.2");
    assert_eq!(triple.macos_version(), Some(VersionTuple::major_minor(14, 2)));
    assert_eq!(triple.minimum_supported_os_version(), Some(VersionTuple::major_minor(11, 0)));

    let triple = Triple::new("arm64-apple-ios-simulator");
    assert_eq!(triple.ios_version(), Some(VersionTuple::new(7)));
    assert_eq!(triple.minimum_supported_os_version(), Some(VersionTuple::major_minor(14, 0)));
}

#[test]
fn versions_at_the_u32_limit() {
    let max = u32::MAX;
    for input in [
        "arm64-apple-xros4294967295",
        "arm64-apple-ios4294967295-simulator",
        "arm64-apple-watchos4294967295",
        "x86_64-apple-darwin4294967295",
        "x86_64-apple-macosx4294967295.4294967295",
    ] {
        let triple = Triple::new(input);
        assert_eq!(triple.os_version().major(), max, "{input}");
        let _ = triple.macos_version();
        let _ = triple.ios_version();
        let _ = triple.watchos_version();
        let _ = triple.minimum_supported_os_version();
        let _ = triple.is_macos_version_lt(10, Some(max), Some(max));
        let _ = triple.is_macos_version_lt(max, Some(max), None);
    }

    assert_eq!(
        Triple::new("arm64-apple-xros4294967295").ios_version(),
        Some(VersionTuple::new(max))
    );
    assert_eq!(
        Triple::new("arm64-apple-watchos4294967295").watchos_version(),
        Some(VersionTuple::new(max))
    );
    assert_eq!(
        Triple::new("arm64-apple-ios4294967295-simulator").minimum_supported_os_version(),
        Some(VersionTuple::major_minor(14, 0))
    );
}

#[test]
fn android_api_levels() {
    let triple = Triple::new("aarch64-unknown-linux-android28");
    assert!(triple.is_android());
    assert_eq!(triple.environment_version(), VersionTuple::new(28));
    assert!(triple.is_android_version_lt(29));
    assert!(triple.has_default_emulated_tls());
}

#[test]
#[should_panic(expected = "not an Android triple")]
fn android_comparison_requires_android() {
    Triple::new("x86_64-pc-linux-gnu").is_android_version_lt(21);
}

#[test]
fn canonical_names_round_trip() {
    fn check<K: Component>() {
        for &(name, kind) in K::aliases() {
            let canonical = kind.canonical_name();
            assert_eq!(K::classify(canonical), kind, "{:?} via {canonical:?}", K::AXIS);
            assert_eq!(K::classify(canonical).canonical_name(), canonical);
            assert!(!name.is_empty() || kind.is_unknown());
        }
    }
    check::<ArchKind>();
    check::<VendorKind>();
    check::<OsKind>();
    check::<EnvironmentKind>();
    check::<ObjectFormatKind>();
}

#[test]
fn normalized_strings_reparse_alike() {
    for input in ["linux-gnu-x86_64", "pc-i686-windows-msvc", "apple-arm64-ios17.0-simulator"] {
        let normalized = normalize(input);
        let triple = Triple::new(&normalized);
        assert_ne!(triple.arch(), ArchKind::Unknown, "{normalized}");
        assert_eq!(Triple::new(input).normalize(), normalized);
        assert_eq!(normalize(&normalized), normalized);
    }
    assert_eq!(normalize("apple-arm64-ios17.0-simulator"), "arm64-apple-ios17.0-simulator");
}

#[test]
fn setters_and_variants_compose() {
    let mut triple = Triple::new("i686-pc-linux-gnu");
    triple.set_os(OsKind::FreeBsd);
    assert_eq!(triple.as_str(), "i686-pc-freebsd-gnu");

    let wide = triple.arch_64bit_variant();
    assert_eq!(wide.as_str(), "x86_64-pc-freebsd-gnu");
    assert_eq!(wide.arch_32bit_variant().arch(), ArchKind::X86);
    assert!(wide.is_compatible_with(&Triple::new("amd64-pc-freebsd-gnu")));
}

#[test]
fn serde_round_trip() {
    let triple = Triple::new("riscv64-unknown-linux-musl");
    let json = serde_json::to_string(&triple).unwrap();
    let back: Triple = serde_json::from_str(&json).unwrap();
    assert_eq!(back, triple);

    let kinds: Vec<OsKind> = serde_json::from_str(r#"["macos", "visionos", "windows"]"#).unwrap();
    assert_eq!(kinds, [OsKind::MacOsx, OsKind::XrOs, OsKind::Win32]);
    assert_eq!(serde_json::to_string(&OsKind::XrOs).unwrap(), "\"xros\"");
}
