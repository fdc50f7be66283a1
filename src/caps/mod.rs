//! # Layer 2: Feature Capability Flags
//!
//! Resolves, once per compilation, which language/runtime features are usable:
//!
//! ```text
//! (Signals, Overrides) --resolve--> Capabilities
//! ```
//!
//! Each flag is decided by the first rule that applies:
//!
//! 1. an override (`disable-*` cargo feature) turns it off;
//! 2. the device domain excludes it;
//! 3. the toolchain's own report;
//! 4. unrecognized toolchains report nothing, so the flag stays off.
//!
//! Overrides only ever remove a capability. `disable-rtti` removes both
//! run-time type information and type-tag querying; `disable-typeid` removes
//! only the latter.
//!
//! MSVC answers the two RTTI questions differently: type-tag querying stays
//! available when RTTI is switched off. The Intel front end does the same
//! while it emulates MSVC. Both cases are kept exactly as reported.

mod flags;
mod overrides;
mod type_tag;

pub use flags::{Exceptions, F16, HasExceptions, HasF16, HasRtti, HasTypeTag, Rtti, TypeTag};
pub use overrides::Overrides;
pub use type_tag::{downcast_ref, type_name, type_tag};

use core::fmt;

use crate::toolchain::{Domain, Signals, Toolchain};

/// A tracked language/runtime feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Run-time type information (dynamic downcasts).
    Rtti,
    /// Type-tag querying (`TypeId`, type names).
    TypeId,
    /// Exception-based dispatch (unwinding).
    Exceptions,
    /// Reduced-precision float intrinsics.
    F16,
}

impl Feature {
    pub const ALL: [Feature; 4] = [Feature::Rtti, Feature::TypeId, Feature::Exceptions, Feature::F16];

    pub const fn name(self) -> &'static str {
        match self {
            Feature::Rtti => "rtti",
            Feature::TypeId => "typeid",
            Feature::Exceptions => "exceptions",
            Feature::F16 => "f16",
        }
    }
}

/// How a toolchain is told to treat a header as a system header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemHeader {
    Gcc,
    Clang,
    Msvc,
}

impl SystemHeader {
    /// The directive a generated header starts with.
    pub const fn pragma(self) -> &'static str {
        match self {
            SystemHeader::Gcc => "#pragma GCC system_header",
            SystemHeader::Clang => "#pragma clang system_header",
            SystemHeader::Msvc => "#pragma system_header",
        }
    }
}

/// The resolved capability record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capabilities {
    pub toolchain: Toolchain,
    pub domain: Domain,
    pub rtti: bool,
    pub typeid: bool,
    pub exceptions: bool,
    pub f16: bool,
    /// System-header directive the toolchain supports, if any.
    pub forced_system_header: Option<SystemHeader>,
    /// System-header directive to emit, after overrides.
    pub implicit_system_header: Option<SystemHeader>,
}

/// Capabilities of the current compilation.
pub const CURRENT: Capabilities = resolve(&Signals::current(), &Overrides::current());

/// Resolve the capability record for a toolchain report and an override set.
pub const fn resolve(signals: &Signals, overrides: &Overrides) -> Capabilities {
    let toolchain = Toolchain::identify(signals);
    let domain = Domain::of(signals);
    let forced_system_header = forced_system_header(toolchain);

    Capabilities {
        toolchain,
        domain,
        rtti: resolve_rtti(toolchain, domain, signals, overrides),
        typeid: resolve_typeid(toolchain, domain, signals, overrides),
        exceptions: resolve_exceptions(toolchain, domain, signals, overrides),
        f16: resolve_f16(toolchain, signals, overrides),
        forced_system_header,
        implicit_system_header: implicit_system_header(toolchain, forced_system_header, overrides),
    }
}

const fn resolve_rtti(tc: Toolchain, domain: Domain, s: &Signals, o: &Overrides) -> bool {
    if o.disable_rtti || domain.is_device() {
        return false;
    }
    match tc {
        Toolchain::Icc => s.intel_rtti || s.gxx_rtti || s.msvc_rtti,
        Toolchain::Nvrtc => false,
        Toolchain::Msvc => s.msvc_rtti,
        Toolchain::Clang => s.has_feature_rtti,
        Toolchain::Gcc | Toolchain::Nvhpc => s.gxx_rtti || s.cpp_rtti,
        Toolchain::Unknown => false,
    }
}

const fn resolve_typeid(tc: Toolchain, domain: Domain, s: &Signals, o: &Overrides) -> bool {
    if o.disable_rtti || o.disable_typeid || domain.is_device() {
        return false;
    }
    match tc {
        // Emulating MSVC keeps type tags even without RTTI
        Toolchain::Icc => s.msc_ver || s.intel_rtti || s.gxx_rtti || s.msvc_rtti,
        Toolchain::Nvrtc => false,
        Toolchain::Msvc => true,
        Toolchain::Clang => s.has_feature_rtti,
        Toolchain::Gcc | Toolchain::Nvhpc => s.gxx_rtti || s.cpp_rtti,
        Toolchain::Unknown => false,
    }
}

const fn resolve_exceptions(tc: Toolchain, domain: Domain, s: &Signals, o: &Overrides) -> bool {
    if o.disable_exceptions || domain.is_device() {
        return false;
    }
    match tc {
        Toolchain::Nvrtc | Toolchain::Unknown => false,
        _ => s.exceptions,
    }
}

// The device domain is where half precision is native, so it is not excluded there.
const fn resolve_f16(tc: Toolchain, s: &Signals, o: &Overrides) -> bool {
    if o.disable_f16 {
        return false;
    }
    match tc {
        Toolchain::Unknown => false,
        _ => s.fp16_header,
    }
}

const fn forced_system_header(tc: Toolchain) -> Option<SystemHeader> {
    match tc {
        Toolchain::Gcc | Toolchain::Nvhpc | Toolchain::Icc => Some(SystemHeader::Gcc),
        Toolchain::Clang => Some(SystemHeader::Clang),
        Toolchain::Msvc => Some(SystemHeader::Msvc),
        Toolchain::Nvrtc | Toolchain::Unknown => None,
    }
}

const fn implicit_system_header(
    tc: Toolchain,
    forced: Option<SystemHeader>,
    o: &Overrides,
) -> Option<SystemHeader> {
    let suppressed = o.no_system_header
        || o.disable_pragma_system_header
        || matches!(tc, Toolchain::Nvrtc)
        || (matches!(tc, Toolchain::Msvc) && o.disable_pragma_msvc_warning);
    if suppressed { None } else { forced }
}

impl Capabilities {
    pub const fn has(&self, feature: Feature) -> bool {
        match feature {
            Feature::Rtti => self.rtti,
            Feature::TypeId => self.typeid,
            Feature::Exceptions => self.exceptions,
            Feature::F16 => self.f16,
        }
    }

    /// Fail constant evaluation when `feature` is unavailable.
    ///
    /// Used from `const` items this turns a missing capability into a build
    /// error on the offending target; see [`require_capability!`](crate::require_capability).
    pub const fn require(&self, feature: Feature) {
        if !self.has(feature) {
            match feature {
                Feature::Rtti => panic!("run-time type information is unavailable for this target"),
                Feature::TypeId => panic!("type-tag querying is unavailable for this target"),
                Feature::Exceptions => panic!("exception support is unavailable for this target"),
                Feature::F16 => panic!("reduced-precision float support is unavailable for this target"),
            }
        }
    }

    /// Emit the record as one structured event.
    #[cfg(feature = "tracing")]
    pub fn trace(&self) {
        tracing::debug!(
            toolchain = self.toolchain.name(),
            domain = self.domain.name(),
            rtti = self.rtti,
            typeid = self.typeid,
            exceptions = self.exceptions,
            f16 = self.f16,
            system_header = self.implicit_system_header.map(SystemHeader::pragma),
            "resolved target capabilities"
        );
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}:", self.toolchain, self.domain)?;
        for feature in Feature::ALL {
            let sign = if self.has(feature) { '+' } else { '-' };
            write!(f, " {}{}", sign, feature.name())?;
        }
        Ok(())
    }
}

/// Fail the build when the current target lacks a capability.
///
/// ```
/// # #[cfg(all(feature = "f16", not(feature = "disable-f16")))]
/// tola_target::require_capability!(F16);
/// ```
///
/// ```compile_fail
/// // Nothing is available for an unrecognized toolchain
/// use tola_target::caps::{resolve, Feature, Overrides};
/// use tola_target::toolchain::Signals;
/// const _: () = resolve(&Signals::NONE, &Overrides::NONE).require(Feature::Rtti);
/// ```
#[macro_export]
macro_rules! require_capability {
    ($feature:ident) => {
        const _: () = $crate::caps::CURRENT.require($crate::caps::Feature::$feature);
    };
}
