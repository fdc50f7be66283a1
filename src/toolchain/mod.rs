//! # Layer 1: Toolchain and Target Identification
//!
//! Answers two questions about the current compilation, both as constants:
//!
//! 1. Which toolchain family is the code built against (`Toolchain`)?
//! 2. Is this pass generating code for the constrained device domain (`Domain`)?
//!
//! Both are pure functions of a [`Signals`] record. [`Signals::current`]
//! derives the record for this compilation from `cfg` facts; other records
//! can be built with [`Signals::canonical`] to evaluate any combination.
//!
//! ```text
//! cfg facts -> Signals -> Toolchain::identify / Domain::of
//! ```

mod signals;

pub use signals::Signals;

use core::fmt;

/// Toolchain family processing the current compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toolchain {
    Gcc,
    Clang,
    Msvc,
    /// Intel classic front end.
    Icc,
    Nvhpc,
    /// Device-code runtime translator.
    Nvrtc,
    /// No identification signal was recognized.
    Unknown,
}

impl Toolchain {
    /// Every identity, in identification priority order, then `Unknown`.
    pub const ALL: [Toolchain; 7] = [
        Toolchain::Nvhpc,
        Toolchain::Icc,
        Toolchain::Clang,
        Toolchain::Gcc,
        Toolchain::Msvc,
        Toolchain::Nvrtc,
        Toolchain::Unknown,
    ];

    /// Identity of the current compilation.
    pub const CURRENT: Toolchain = Toolchain::identify(&Signals::current());

    /// Pick the identity from the identification signals.
    ///
    /// The order matters: Clang and the Intel front end also report the GNU
    /// and MSVC signals of the compiler they emulate, so they are tested first.
    pub const fn identify(signals: &Signals) -> Toolchain {
        if signals.nvhpc {
            Toolchain::Nvhpc
        } else if signals.intel {
            Toolchain::Icc
        } else if signals.clang {
            Toolchain::Clang
        } else if signals.gnuc {
            Toolchain::Gcc
        } else if signals.msc_ver {
            Toolchain::Msvc
        } else if signals.nvrtc {
            Toolchain::Nvrtc
        } else {
            Toolchain::Unknown
        }
    }

    pub const fn is_recognized(self) -> bool {
        !matches!(self, Toolchain::Unknown)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Toolchain::Gcc => "gcc",
            Toolchain::Clang => "clang",
            Toolchain::Msvc => "msvc",
            Toolchain::Icc => "icc",
            Toolchain::Nvhpc => "nvhpc",
            Toolchain::Nvrtc => "nvrtc",
            Toolchain::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Toolchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Execution domain of the current compilation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Host,
    Device,
}

impl Domain {
    pub const ALL: [Domain; 2] = [Domain::Host, Domain::Device];

    /// Domain of the current compilation pass.
    pub const CURRENT: Domain = Domain::of(&Signals::current());

    pub const fn of(signals: &Signals) -> Domain {
        if signals.device_pass { Domain::Device } else { Domain::Host }
    }

    pub const fn is_device(self) -> bool {
        matches!(self, Domain::Device)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Domain::Host => "host",
            Domain::Device => "device",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_signals_identify_their_toolchain() {
        for tc in Toolchain::ALL {
            for domain in Domain::ALL {
                let s = Signals::canonical(tc, domain);
                assert_eq!(Toolchain::identify(&s), tc, "{tc} / {domain}");
                assert_eq!(Domain::of(&s), domain, "{tc} / {domain}");
            }
        }
    }

    #[test]
    fn test_priority_order() {
        // clang-cl: Clang signal plus the MSVC one
        let clang_cl = Signals::canonical(Toolchain::Clang, Domain::Host).emulating_msvc();
        assert_eq!(Toolchain::identify(&clang_cl), Toolchain::Clang);

        // Intel on Windows
        let icl = Signals::canonical(Toolchain::Icc, Domain::Host).emulating_msvc();
        assert_eq!(Toolchain::identify(&icl), Toolchain::Icc);

        let mut both = Signals::NONE;
        both.gnuc = true;
        both.msc_ver = true;
        assert_eq!(Toolchain::identify(&both), Toolchain::Gcc);
    }

    #[test]
    fn test_no_signal_is_unknown() {
        assert_eq!(Toolchain::identify(&Signals::NONE), Toolchain::Unknown);
        assert!(!Toolchain::Unknown.is_recognized());
        assert_eq!(Domain::of(&Signals::NONE), Domain::Host);
    }

    #[test]
    fn test_domain_is_independent_of_toolchain() {
        let mut s = Signals::NONE;
        s.device_pass = true;
        assert_eq!(Domain::of(&s), Domain::Device);
        assert_eq!(Toolchain::identify(&s), Toolchain::Unknown);
    }

    #[test]
    fn test_current_matches_signals() {
        assert_eq!(Toolchain::CURRENT, Toolchain::identify(&Signals::current()));
        assert_eq!(Domain::CURRENT, Domain::of(&Signals::current()));
        // Unit tests run on the host
        assert_eq!(Domain::CURRENT, Domain::Host);
    }

    #[test]
    fn test_device_translator_keeps_f16_only() {
        use crate::caps::{resolve, Overrides};

        let caps = resolve(&Signals::canonical(Toolchain::Nvrtc, Domain::Device), &Overrides::NONE);
        assert!(caps.f16);
        assert!(!caps.rtti && !caps.typeid && !caps.exceptions);

        // Host passes only report it when named
        assert_eq!(Signals::current().nvrtc, cfg!(tola_toolchain = "nvrtc"));
    }
}
