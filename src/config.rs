//! Capability resolution from a build script.
//!
//! The library decides everything during its own compilation. A build
//! script that generates code for some other toolchain or domain can run the
//! same resolution over values taken from the environment:
//!
//! | variable | value | default |
//! |----------|-------|---------|
//! | `TOLA_TOOLCHAIN` | `gcc`, `clang`, `msvc`, `icc`, `nvhpc`, `nvrtc`, `unknown` | current toolchain |
//! | `TOLA_DOMAIN` | `host`, `device` | current domain |
//! | `TOLA_OVERRIDES` | comma separated override names | none |
//!
//! ```
//! use tola_target::config::Profile;
//!
//! let profile = Profile::from_lookup(|key| match key {
//!     "TOLA_TOOLCHAIN" => Some("msvc".into()),
//!     "TOLA_OVERRIDES" => Some("disable-rtti".into()),
//!     _ => None,
//! })?;
//! let caps = profile.resolve();
//! assert!(!caps.rtti && !caps.typeid);
//! # Ok::<(), tola_target::error::ConfigError>(())
//! ```

use std::env::{self, VarError};
use std::str::FromStr;

use crate::caps::{self, Capabilities, Overrides};
use crate::error::{ConfigError, Result};
use crate::toolchain::{Domain, Signals, Toolchain};

pub const TOOLCHAIN_VAR: &str = "TOLA_TOOLCHAIN";
pub const DOMAIN_VAR: &str = "TOLA_DOMAIN";
pub const OVERRIDES_VAR: &str = "TOLA_OVERRIDES";

impl FromStr for Toolchain {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Toolchain::ALL
            .into_iter()
            .find(|tc| tc.name().eq_ignore_ascii_case(name))
            .or_else(|| name.eq_ignore_ascii_case("intel").then_some(Toolchain::Icc))
            .ok_or_else(|| ConfigError::UnknownToolchain(name.to_string()))
    }
}

impl FromStr for Domain {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Domain::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigError::UnknownDomain(name.to_string()))
    }
}

impl FromStr for Overrides {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let mut overrides = Overrides::NONE;
        for name in s.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            if !overrides.set(name) {
                return Err(ConfigError::UnknownOverride(name.to_string()));
            }
        }
        Ok(overrides)
    }
}

/// A toolchain, a domain and the overrides to resolve against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Profile {
    pub toolchain: Toolchain,
    pub domain: Domain,
    pub overrides: Overrides,
}

impl Default for Profile {
    fn default() -> Self {
        Profile::current()
    }
}

impl Profile {
    /// The profile the library itself was compiled with.
    pub const fn current() -> Profile {
        Profile {
            toolchain: Toolchain::CURRENT,
            domain: Domain::CURRENT,
            overrides: Overrides::current(),
        }
    }

    /// Read the profile from the process environment.
    pub fn from_env() -> Result<Profile> {
        Profile::from_source(|key| match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { key }),
        })
    }

    /// Read the profile through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(mut lookup: impl FnMut(&str) -> Option<String>) -> Result<Profile> {
        Profile::from_source(|key| Ok(lookup(key)))
    }

    fn from_source(mut read: impl FnMut(&'static str) -> Result<Option<String>>) -> Result<Profile> {
        let current = Profile::current();

        let toolchain = match read(TOOLCHAIN_VAR)? {
            Some(v) => v.parse()?,
            None => current.toolchain,
        };
        let domain = match read(DOMAIN_VAR)? {
            Some(v) => v.parse()?,
            None => current.domain,
        };
        let overrides = match read(OVERRIDES_VAR)? {
            Some(v) => v.parse()?,
            None => Overrides::NONE,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            toolchain = toolchain.name(),
            domain = domain.name(),
            overrides = ?overrides,
            "read target profile"
        );

        Ok(Profile { toolchain, domain, overrides })
    }

    /// Signals the profile's toolchain reports in its default mode.
    pub const fn signals(&self) -> Signals {
        Signals::canonical(self.toolchain, self.domain)
    }

    pub const fn resolve(&self) -> Capabilities {
        caps::resolve(&self.signals(), &self.overrides)
    }
}
