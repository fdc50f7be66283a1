//! Target gates as seen from a dependent crate.

use tola_target::target::{Gate, CURRENT_SM, IS_DEVICE, KNOWN_REVISIONS};
use tola_target::{gate, require_capability, target_cfg, target_if};

#[cfg(all(panic = "unwind", not(feature = "disable-exceptions")))]
require_capability!(Exceptions);

#[target_cfg(provides_sm_70)]
fn tensor_width() -> usize {
    device_only_intrinsic()
}

#[target_cfg(!provides_sm_70)]
fn tensor_width() -> usize {
    1
}

#[test]
fn test_host_build_takes_portable_paths() {
    assert_eq!(tensor_width(), 1);
    assert!(!IS_DEVICE);
    assert_eq!(CURRENT_SM, None);

    let path = target_if! {
        provides_sm_53 & is_device => { "native" },
        else => { "portable" },
    };
    assert_eq!(path, "portable");
}

#[test]
fn test_every_revision_gate_is_off_on_host() {
    for r in KNOWN_REVISIONS {
        assert!(!Gate::ProvidesSm(r).holds());
        assert!(!Gate::IsExactlySm(r).holds());
    }
    assert!(gate!(is_exactly_sm_90 | is_host));
}
