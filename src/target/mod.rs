//! # Layer 3: Dual-Target Dispatch
//!
//! Algorithmic code picks between a fast path that exists only on some
//! hardware revisions and a portable fallback:
//!
//! ```
//! use tola_target::target_if;
//!
//! fn twice(x: f32) -> f32 {
//!     target_if! {
//!         provides_sm_53 => { x * 2.0 },
//!         else => { x + x },
//!     }
//! }
//! assert_eq!(twice(1.5), 3.0);
//! ```
//!
//! The selection happens through `cfg`, so the rejected body is never
//! compiled and may name symbols that only exist on the other target. The
//! same gate expressions are accepted by [`target_cfg`] on items and by
//! [`gate!`] as a `bool` constant. [`Gate`] and [`CURRENT_SM`] expose the
//! decision as values.
//!
//! Gate expressions: `is_host`, `is_device`, `provides_sm_N`,
//! `is_exactly_sm_N`, `any_target`, `no_target`, combined with `&`, `|`,
//! `!` and parentheses.
//!
//! `is_device` holds on `nvptx64`, `amdgpu` and under `--cfg tola_device`.
//! Revision gates only ever hold on `nvptx64` with an `sm_N` target feature,
//! so the other device passes take the `is_device` bodies but never a
//! revision-gated one. An unknown gate is a build error:
//!
//! ```compile_fail
//! let _ = tola_target::gate!(provides_sm_54);
//! ```

pub use macros::{gate, target_cfg, target_if};

use core::fmt;

/// Every hardware revision a gate may name, oldest first.
pub const KNOWN_REVISIONS: [u32; 16] = [35, 37, 50, 52, 53, 60, 61, 62, 70, 72, 75, 80, 86, 87, 89, 90];

/// Newest revision the current target provides, `None` off-device.
pub const CURRENT_SM: Option<u32> = macros::current_sm!();

/// `true` on the device compilation pass.
pub const IS_DEVICE: bool = gate!(is_device);

/// A single target predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    IsHost,
    IsDevice,
    /// The target is `sm_N` or newer.
    ProvidesSm(u32),
    /// The target is exactly `sm_N`.
    IsExactlySm(u32),
}

impl Gate {
    /// Whether the predicate holds for the current target.
    pub const fn holds(self) -> bool {
        self.holds_for(IS_DEVICE, CURRENT_SM)
    }

    /// Whether the predicate holds for a given domain and revision.
    pub const fn holds_for(self, device: bool, sm: Option<u32>) -> bool {
        match (self, sm) {
            (Gate::IsHost, _) => !device,
            (Gate::IsDevice, _) => device,
            (Gate::ProvidesSm(r), Some(current)) => current >= r,
            (Gate::IsExactlySm(r), Some(current)) => current == r,
            (Gate::ProvidesSm(_) | Gate::IsExactlySm(_), None) => false,
        }
    }

    /// Whether `revision` is one a gate may name.
    pub const fn is_known_revision(revision: u32) -> bool {
        let mut i = 0;
        while i < KNOWN_REVISIONS.len() {
            if KNOWN_REVISIONS[i] == revision {
                return true;
            }
            i += 1;
        }
        false
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::IsHost => f.write_str("is_host"),
            Gate::IsDevice => f.write_str("is_device"),
            Gate::ProvidesSm(r) => write!(f, "provides_sm_{r}"),
            Gate::IsExactlySm(r) => write!(f, "is_exactly_sm_{r}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_pass() {
        assert!(!IS_DEVICE);
        assert_eq!(CURRENT_SM, None);
        assert!(Gate::IsHost.holds());
        assert!(!Gate::IsDevice.holds());
        assert!(!Gate::ProvidesSm(35).holds());
    }

    #[test]
    fn test_revision_ordering() {
        assert!(Gate::ProvidesSm(53).holds_for(true, Some(53)));
        assert!(Gate::ProvidesSm(53).holds_for(true, Some(80)));
        assert!(!Gate::ProvidesSm(53).holds_for(true, Some(52)));
        assert!(Gate::IsExactlySm(80).holds_for(true, Some(80)));
        assert!(!Gate::IsExactlySm(80).holds_for(true, Some(86)));
    }

    #[test]
    fn test_gate_macro_agrees_with_values() {
        assert_eq!(gate!(is_host), Gate::IsHost.holds());
        assert_eq!(gate!(is_device), Gate::IsDevice.holds());
        assert_eq!(gate!(provides_sm_53), Gate::ProvidesSm(53).holds());
        assert!(gate!(any_target));
        assert!(!gate!(no_target));
        assert!(gate!(is_host | is_device));
        assert!(!gate!(is_host & !(any_target)));
    }

    #[test]
    fn test_target_if_selects_one_body() {
        let picked = target_if! {
            is_device => { "device" },
            else => { "host" },
        };
        assert_eq!(picked, "host");

        let mut hits = 0;
        target_if! { is_host => { hits += 1; } }
        target_if! { is_device => { hits += 10; } }
        assert_eq!(hits, 1);
    }

    #[target_cfg(is_device)]
    fn only_on_device() -> u32 {
        undefined_on_host()
    }

    #[test]
    fn test_device_pass_without_revision() {
        // amdgpu or --cfg tola_device
        assert!(Gate::IsDevice.holds_for(true, None));
        assert!(!Gate::ProvidesSm(35).holds_for(true, None));
        assert!(!Gate::IsExactlySm(53).holds_for(true, None));
    }

    #[test]
    fn test_known_revisions() {
        assert!(Gate::is_known_revision(53));
        assert!(!Gate::is_known_revision(54));
        assert_eq!(Gate::ProvidesSm(53).to_string(), "provides_sm_53");
    }
}
