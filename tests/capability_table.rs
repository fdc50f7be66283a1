//! Reference table and override monotonicity of the capability resolver.

use tola_target::caps::{resolve, Capabilities, Feature, Overrides, SystemHeader, CURRENT};
use tola_target::toolchain::{Domain, Signals, Toolchain};

// =============================================================================
// Reference Table (const)
// =============================================================================

const fn default_caps(tc: Toolchain, domain: Domain) -> Capabilities {
    resolve(&Signals::canonical(tc, domain), &Overrides::NONE)
}

const _: () = assert!(default_caps(Toolchain::Gcc, Domain::Host).rtti);
const _: () = assert!(default_caps(Toolchain::Msvc, Domain::Host).typeid);
const _: () = assert!(!default_caps(Toolchain::Clang, Domain::Device).exceptions);
const _: () = assert!(default_caps(Toolchain::Nvhpc, Domain::Device).f16);
const _: () = assert!(!default_caps(Toolchain::Nvrtc, Domain::Host).rtti);
const _: () = assert!(!default_caps(Toolchain::Unknown, Domain::Host).f16);

/// (toolchain, host row, device row) with columns rtti, typeid, exceptions, f16.
const TABLE: &[(Toolchain, [bool; 4], [bool; 4])] = &[
    (Toolchain::Gcc, [true, true, true, true], [false, false, false, true]),
    (Toolchain::Clang, [true, true, true, true], [false, false, false, true]),
    (Toolchain::Msvc, [true, true, true, true], [false, false, false, true]),
    (Toolchain::Icc, [true, true, true, true], [false, false, false, true]),
    (Toolchain::Nvhpc, [true, true, true, true], [false, false, false, true]),
    (Toolchain::Nvrtc, [false, false, false, true], [false, false, false, true]),
    (Toolchain::Unknown, [false, false, false, false], [false, false, false, false]),
];

fn row(caps: &Capabilities) -> [bool; 4] {
    Feature::ALL.map(|f| caps.has(f))
}

#[test]
fn test_reference_table() {
    assert_eq!(TABLE.len(), Toolchain::ALL.len());
    for &(tc, host, device) in TABLE {
        assert_eq!(row(&default_caps(tc, Domain::Host)), host, "{tc} on host");
        assert_eq!(row(&default_caps(tc, Domain::Device)), device, "{tc} on device");
    }
}

#[test]
fn test_rtti_switched_off_natively() {
    for tc in Toolchain::ALL {
        let caps = resolve(&Signals::canonical(tc, Domain::Host).without_rtti(), &Overrides::NONE);
        assert!(!caps.rtti, "{tc}");
        // Only MSVC keeps type tags
        assert_eq!(caps.typeid, tc == Toolchain::Msvc, "{tc}");
    }
}

#[test]
fn test_native_exception_and_f16_reports() {
    let gcc = Signals::canonical(Toolchain::Gcc, Domain::Host);
    assert!(!resolve(&gcc.without_exceptions(), &Overrides::NONE).exceptions);
    assert!(!resolve(&gcc.without_fp16(), &Overrides::NONE).f16);
}

#[test]
fn test_override_semantics() {
    let msvc = Signals::canonical(Toolchain::Msvc, Domain::Host);

    let mut o = Overrides::NONE;
    o.disable_rtti = true;
    let caps = resolve(&msvc, &o);
    assert!(!caps.rtti && !caps.typeid);

    let mut o = Overrides::NONE;
    o.disable_typeid = true;
    let caps = resolve(&msvc, &o);
    assert!(caps.rtti && !caps.typeid);
}

#[test]
fn test_system_header_table() {
    let expected = [
        (Toolchain::Gcc, Some(SystemHeader::Gcc)),
        (Toolchain::Nvhpc, Some(SystemHeader::Gcc)),
        (Toolchain::Icc, Some(SystemHeader::Gcc)),
        (Toolchain::Clang, Some(SystemHeader::Clang)),
        (Toolchain::Msvc, Some(SystemHeader::Msvc)),
        (Toolchain::Nvrtc, None),
        (Toolchain::Unknown, None),
    ];
    for (tc, header) in expected {
        let caps = default_caps(tc, Domain::Host);
        assert_eq!(caps.implicit_system_header, header, "{tc}");

        let mut o = Overrides::NONE;
        o.no_system_header = true;
        assert_eq!(resolve(&Signals::canonical(tc, Domain::Host), &o).implicit_system_header, None);
    }
}

// =============================================================================
// Monotonicity
// =============================================================================

fn overrides_from_mask(mask: u32) -> Overrides {
    let mut o = Overrides::NONE;
    for (i, name) in Overrides::NAMES.iter().enumerate() {
        if mask & (1 << i) != 0 {
            assert!(o.set(name));
        }
    }
    o
}

fn signal_variants(tc: Toolchain, domain: Domain) -> [Signals; 5] {
    let s = Signals::canonical(tc, domain);
    [s, s.without_rtti(), s.without_exceptions(), s.without_fp16(), s.emulating_msvc()]
}

#[test]
fn test_overrides_only_remove_capabilities() {
    let combos = 1u32 << Overrides::NAMES.len();
    for tc in Toolchain::ALL {
        for domain in Domain::ALL {
            for signals in signal_variants(tc, domain) {
                for mask in 0..combos {
                    let base = resolve(&signals, &overrides_from_mask(mask));
                    for extra in 0..Overrides::NAMES.len() {
                        let more = resolve(&signals, &overrides_from_mask(mask | (1 << extra)));
                        for f in Feature::ALL {
                            assert!(
                                !more.has(f) || base.has(f),
                                "{tc}/{domain}: adding {} enabled {}",
                                Overrides::NAMES[extra],
                                f.name()
                            );
                        }
                        assert!(more.implicit_system_header.is_none() || base.implicit_system_header.is_some());
                    }
                }
            }
        }
    }
}

#[test]
fn test_current_respects_enabled_overrides() {
    let o = Overrides::current();
    if o.disable_rtti {
        assert!(!CURRENT.rtti && !CURRENT.typeid);
    }
    if o.disable_f16 {
        assert!(!CURRENT.f16);
    }
    assert_eq!(CURRENT.f16, cfg!(feature = "f16") && !o.disable_f16 && CURRENT.toolchain.is_recognized());
}
