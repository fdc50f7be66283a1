//! Predefined toolchain signals.

use super::{Domain, Toolchain};

/// The identification and feature-reporting signals a toolchain exposes.
///
/// Each field mirrors one predefined signal. Identification fields decide
/// the [`Toolchain`]; `device_pass` decides the [`Domain`]; the remaining
/// fields are the toolchain's own report on whether a feature is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signals {
    // Identification
    pub nvhpc: bool,
    pub intel: bool,
    pub clang: bool,
    pub gnuc: bool,
    pub msc_ver: bool,
    pub nvrtc: bool,

    // Domain
    pub device_pass: bool,

    // Run-time type information reporting
    pub gxx_rtti: bool,
    pub cpp_rtti: bool,
    pub msvc_rtti: bool,
    pub intel_rtti: bool,
    pub has_feature_rtti: bool,

    /// Exception / unwinding support reported by the toolchain.
    pub exceptions: bool,
    /// Half-precision support is present.
    pub fp16_header: bool,
}

/// `--cfg tola_toolchain="..."` was given.
const EXPLICIT: bool = cfg!(any(
    tola_toolchain = "gcc",
    tola_toolchain = "clang",
    tola_toolchain = "msvc",
    tola_toolchain = "icc",
    tola_toolchain = "nvhpc",
    tola_toolchain = "nvrtc",
));

/// Toolchains that also report the host platform's native compiler signals.
const NATIVE_EMULATION: bool =
    !EXPLICIT || cfg!(any(tola_toolchain = "clang", tola_toolchain = "icc", tola_toolchain = "nvhpc"));

impl Signals {
    /// No signal at all: an unrecognized toolchain on the host.
    pub const NONE: Signals = Signals {
        nvhpc: false,
        intel: false,
        clang: false,
        gnuc: false,
        msc_ver: false,
        nvrtc: false,
        device_pass: false,
        gxx_rtti: false,
        cpp_rtti: false,
        msvc_rtti: false,
        intel_rtti: false,
        has_feature_rtti: false,
        exceptions: false,
        fp16_header: false,
    };

    /// Signals of the current compilation.
    ///
    /// `--cfg tola_toolchain="<name>"` names the toolchain explicitly.
    /// Without it the family is taken from the target: `target_env = "msvc"`
    /// reports the MSVC signal, GNU and musl environments the GNU signal, and
    /// Apple, Android and BSD targets the Clang one. The device pass is the
    /// `is_device` gate; a device pass with no explicit toolchain is taken to
    /// be the device translator. `--cfg tola_no_native_rtti` turns the RTTI reports
    /// off; exception support follows the panic strategy.
    pub const fn current() -> Signals {
        let device = macros::gate!(is_device);

        let mut id = Signals::NONE;
        id.nvhpc = cfg!(tola_toolchain = "nvhpc");
        id.intel = cfg!(tola_toolchain = "icc");
        id.nvrtc = cfg!(tola_toolchain = "nvrtc") || (!EXPLICIT && device);
        id.clang = cfg!(tola_toolchain = "clang")
            || (!EXPLICIT
                && cfg!(any(
                    target_vendor = "apple",
                    target_os = "android",
                    target_os = "freebsd",
                    target_os = "openbsd",
                    target_os = "fuchsia",
                )));
        id.gnuc = cfg!(tola_toolchain = "gcc")
            || (NATIVE_EMULATION && cfg!(any(target_env = "gnu", target_env = "musl")));
        id.msc_ver = cfg!(tola_toolchain = "msvc") || (NATIVE_EMULATION && cfg!(target_env = "msvc"));

        let domain = if device { Domain::Device } else { Domain::Host };
        let mut s = Signals::canonical(Toolchain::identify(&id), domain);

        // Emulated compiler signals come from the platform, not the family.
        if id.msc_ver && !id.gnuc {
            s = s.emulating_msvc();
        }

        if cfg!(tola_no_native_rtti) {
            s = s.without_rtti();
        }
        s.exceptions = s.exceptions && cfg!(panic = "unwind");
        s.fp16_header = s.fp16_header && cfg!(feature = "f16");
        s
    }

    /// The signals `toolchain` reports in its default mode.
    pub const fn canonical(toolchain: Toolchain, domain: Domain) -> Signals {
        let mut s = Signals::NONE;
        s.device_pass = domain.is_device();

        match toolchain {
            Toolchain::Gcc => {
                s.gnuc = true;
                s.gxx_rtti = true;
                s.cpp_rtti = true;
            }
            Toolchain::Clang => {
                s.clang = true;
                s.gnuc = true;
                s.gxx_rtti = true;
                s.cpp_rtti = true;
                s.has_feature_rtti = true;
            }
            Toolchain::Msvc => {
                s.msc_ver = true;
                s.msvc_rtti = true;
                s.cpp_rtti = true;
            }
            Toolchain::Icc => {
                s.intel = true;
                s.gnuc = true;
                s.intel_rtti = true;
                s.gxx_rtti = true;
                s.cpp_rtti = true;
            }
            Toolchain::Nvhpc => {
                s.nvhpc = true;
                s.gnuc = true;
                s.gxx_rtti = true;
                s.cpp_rtti = true;
            }
            Toolchain::Nvrtc => {
                s.nvrtc = true;
            }
            Toolchain::Unknown => return s,
        }

        s.exceptions = true;
        s.fp16_header = true;
        s
    }

    /// Same toolchain with RTTI switched off on the command line.
    pub const fn without_rtti(mut self) -> Signals {
        self.gxx_rtti = false;
        self.cpp_rtti = false;
        self.msvc_rtti = false;
        self.intel_rtti = false;
        self.has_feature_rtti = false;
        self
    }

    /// Same toolchain with exceptions switched off.
    pub const fn without_exceptions(mut self) -> Signals {
        self.exceptions = false;
        self
    }

    /// Same toolchain without half-precision support.
    pub const fn without_fp16(mut self) -> Signals {
        self.fp16_header = false;
        self
    }

    /// Same toolchain emulating the MSVC interface (clang-cl, Intel on Windows).
    pub const fn emulating_msvc(mut self) -> Signals {
        self.msvc_rtti = self.any_rtti();
        self.gnuc = false;
        self.msc_ver = true;
        self
    }

    /// Report of any run-time type information signal.
    pub const fn any_rtti(&self) -> bool {
        self.gxx_rtti || self.cpp_rtti || self.msvc_rtti || self.intel_rtti || self.has_feature_rtti
    }
}

impl Default for Signals {
    fn default() -> Self {
        Signals::NONE
    }
}
