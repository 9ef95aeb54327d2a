//! Reassembly of malformed or reordered triple strings.
//!
//! Unlike [`Triple::new`](crate::Triple::new), which trusts position, the
//! normalizer classifies every `-`-separated token on its own and moves it
//! to the slot of the axis it belongs to:
//!
//! 1. A token is assigned to the first axis, in the order architecture,
//!    vendor, OS, environment, object format, that recognizes it.
//! 2. The first token for each axis fills that axis's slot. Later tokens
//!    for an occupied axis, and every object-format token, are appended to
//!    the environment.
//! 3. Tokens no axis recognizes keep their position if that slot is free,
//!    else take the first free slot, else are appended to the environment.
//!
//! Trailing empty components are dropped. The result is a fixed point:
//! normalizing it again changes nothing.

use tracing::{debug, trace};

use crate::arch::parse_arch;
use crate::environment::parse_environment;
use crate::object_format::parse_object_format;
use crate::os::parse_os;
use crate::table::{Axis, Component};
use crate::vendor::parse_vendor;

const ARCH: usize = 0;
const VENDOR: usize = 1;
const OS: usize = 2;
const ENVIRONMENT: usize = 3;

/// The axis that claims `token`, if any.
fn classify(token: &str) -> Option<Axis> {
    if !parse_arch(token).is_unknown() {
        Some(Axis::Arch)
    } else if !parse_vendor(token).is_unknown() {
        Some(Axis::Vendor)
    } else if !parse_os(token).is_unknown() {
        Some(Axis::Os)
    } else if !parse_environment(token).is_unknown() {
        Some(Axis::Environment)
    } else if !parse_object_format(token).is_unknown() {
        Some(Axis::ObjectFormat)
    } else {
        None
    }
}

fn slot_for(axis: Axis) -> Option<usize> {
    match axis {
        Axis::Arch => Some(ARCH),
        Axis::Vendor => Some(VENDOR),
        Axis::Os => Some(OS),
        Axis::Environment => Some(ENVIRONMENT),
        Axis::ObjectFormat => None,
    }
}

/// Rewrite a triple string into `arch-vendor-os[-environment]` order.
///
/// ```
/// use triplex_core::normalize;
///
/// assert_eq!(normalize("x86_64-linux-gnu"), "x86_64--linux-gnu");
/// assert_eq!(normalize("linux-gnu-x86_64"), "x86_64--linux-gnu");
/// assert_eq!(normalize("x86_64-pc-linux-gnu"), "x86_64-pc-linux-gnu");
/// ```
pub fn normalize(input: &str) -> String {
    let tokens: Vec<&str> = input.split('-').collect();
    let mut slots: [Option<&str>; 4] = [None; 4];
    let mut tail: Vec<&str> = Vec::new();
    let mut unclassified: Vec<(usize, &str)> = Vec::new();

    for (position, &token) in tokens.iter().enumerate() {
        let axis = classify(token);
        trace!(token, position, ?axis, "classified triple token");

        let Some(axis) = axis else {
            unclassified.push((position, token));
            continue;
        };
        match slot_for(axis) {
            Some(slot) if slots[slot].is_none() => slots[slot] = Some(token),
            _ => {
                debug!(token, %axis, "moving token into the environment");
                tail.push(token);
            }
        }
    }

    let mut overflow: Vec<&str> = Vec::new();
    for (position, token) in unclassified {
        let slot = if position < slots.len() && slots[position].is_none() {
            Some(position)
        } else {
            slots.iter().position(Option::is_none)
        };
        match slot {
            Some(slot) => slots[slot] = Some(token),
            None => overflow.push(token),
        }
    }

    let environment: Vec<&str> = slots[ENVIRONMENT]
        .into_iter()
        .chain(tail)
        .chain(overflow)
        .collect();
    let environment = environment.join("-");

    let mut components: Vec<&str> = slots[..ENVIRONMENT]
        .iter()
        .map(|slot| slot.unwrap_or(""))
        .collect();
    components.push(&environment);
    while components.last().is_some_and(|component| component.is_empty()) {
        components.pop();
    }
    components.join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_triples_are_unchanged() {
        for triple in [
            "x86_64-pc-linux-gnu",
            "x86_64-unknown-linux-gnu",
            "aarch64-apple-ios17.0-simulator",
            "armv7-unknown-linux-gnueabihf",
            "i686-pc-windows-msvc",
            "x86_64-pc-linux-gnu-elf",
            "wasm32-unknown-wasi",
        ] {
            assert_eq!(normalize(triple), triple);
        }
    }

    #[test]
    fn missing_vendor_leaves_a_gap() {
        assert_eq!(normalize("x86_64-linux"), "x86_64--linux");
        assert_eq!(normalize("x86_64-linux-gnu"), "x86_64--linux-gnu");
        assert_eq!(normalize("aarch64-linux-android21"), "aarch64--linux-android21");
    }

    #[test]
    fn tokens_move_to_their_slot() {
        assert_eq!(normalize("linux-x86_64"), "x86_64--linux");
        assert_eq!(normalize("gnu-linux-pc-x86_64"), "x86_64-pc-linux-gnu");
        assert_eq!(normalize("pc-x86_64"), "x86_64-pc");
        assert_eq!(normalize("apple-arm64-ios"), "arm64-apple-ios");
    }

    #[test]
    fn conflicts_go_to_the_environment() {
        assert_eq!(normalize("x86_64-i686-linux"), "x86_64--linux-i686");
        assert_eq!(normalize("x86_64-pc-linux-freebsd"), "x86_64-pc-linux-freebsd");
        assert_eq!(normalize("x86_64-pc-linux-musl-gnu"), "x86_64-pc-linux-musl-gnu");
    }

    #[test]
    fn object_format_follows_environment() {
        assert_eq!(normalize("x86_64-pc-linux-elf-gnu"), "x86_64-pc-linux-gnu-elf");
        assert_eq!(normalize("x86_64-elf"), "x86_64---elf");
    }

    #[test]
    fn unknown_tokens_keep_position() {
        assert_eq!(normalize("x86_64-foo-linux"), "x86_64-foo-linux");
        assert_eq!(normalize("foo-x86_64"), "x86_64-foo");
        assert_eq!(normalize("a-linux-b"), "a-b-linux");
        assert_eq!(normalize("a-b-c-d-e"), "a-b-c-d-e");
        assert_eq!(normalize("x86_64-unknown-linux"), "x86_64-unknown-linux");
    }

    #[test]
    fn trailing_empties_are_dropped() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("-"), "");
        assert_eq!(normalize("---"), "");
        assert_eq!(normalize("x86_64--"), "x86_64");
        assert_eq!(normalize("-pc"), "-pc");
    }

    #[test]
    fn idempotent() {
        for input in [
            "",
            "----",
            "x86_64",
            "linux-gnu-x86_64",
            "x86_64-i686-linux",
            "x86_64-pc-linux--i686",
            "x86_64-elf",
            "a-b-c-d-x86_64-e",
            "gnu-foo-bar",
            "elf-macho-coff",
            "armv7-apple-ios-simulator-macabi",
            "i386-foo-bar-baz-qux-quux",
        ] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input {input:?}");
        }
    }
}
