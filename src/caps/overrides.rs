//! User escape hatches.

/// Capability overrides. Every field can only switch something off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Overrides {
    /// Disables run-time type information and type-tag querying.
    pub disable_rtti: bool,
    /// Disables type-tag querying only.
    pub disable_typeid: bool,
    pub disable_exceptions: bool,
    pub disable_f16: bool,
    /// No system-header directive, on any toolchain.
    pub no_system_header: bool,
    /// Same, scoped to the headers of this layer.
    pub disable_pragma_system_header: bool,
    /// No system-header directive on MSVC.
    pub disable_pragma_msvc_warning: bool,
}

impl Overrides {
    pub const NONE: Overrides = Overrides {
        disable_rtti: false,
        disable_typeid: false,
        disable_exceptions: false,
        disable_f16: false,
        no_system_header: false,
        disable_pragma_system_header: false,
        disable_pragma_msvc_warning: false,
    };

    /// Every override set.
    pub const ALL: Overrides = Overrides {
        disable_rtti: true,
        disable_typeid: true,
        disable_exceptions: true,
        disable_f16: true,
        no_system_header: true,
        disable_pragma_system_header: true,
        disable_pragma_msvc_warning: true,
    };

    /// Overrides enabled through cargo features.
    pub const fn current() -> Overrides {
        Overrides {
            disable_rtti: cfg!(feature = "disable-rtti"),
            disable_typeid: cfg!(feature = "disable-typeid"),
            disable_exceptions: cfg!(feature = "disable-exceptions"),
            disable_f16: cfg!(feature = "disable-f16"),
            no_system_header: cfg!(feature = "no-system-header"),
            disable_pragma_system_header: cfg!(feature = "disable-pragma-system-header"),
            disable_pragma_msvc_warning: cfg!(feature = "disable-pragma-msvc-warning"),
        }
    }

    /// Names accepted by [`Overrides::set`], matching the cargo feature names.
    pub const NAMES: [&'static str; 7] = [
        "disable-rtti",
        "disable-typeid",
        "disable-exceptions",
        "disable-f16",
        "no-system-header",
        "disable-pragma-system-header",
        "disable-pragma-msvc-warning",
    ];

    /// Switch on the override called `name`. Returns `false` for unknown names.
    pub fn set(&mut self, name: &str) -> bool {
        let slot = match name {
            "disable-rtti" => &mut self.disable_rtti,
            "disable-typeid" => &mut self.disable_typeid,
            "disable-exceptions" => &mut self.disable_exceptions,
            "disable-f16" => &mut self.disable_f16,
            "no-system-header" => &mut self.no_system_header,
            "disable-pragma-system-header" => &mut self.disable_pragma_system_header,
            "disable-pragma-msvc-warning" => &mut self.disable_pragma_msvc_warning,
            _ => return false,
        };
        *slot = true;
        true
    }

    /// Union of two override sets.
    pub const fn union(self, other: Overrides) -> Overrides {
        Overrides {
            disable_rtti: self.disable_rtti || other.disable_rtti,
            disable_typeid: self.disable_typeid || other.disable_typeid,
            disable_exceptions: self.disable_exceptions || other.disable_exceptions,
            disable_f16: self.disable_f16 || other.disable_f16,
            no_system_header: self.no_system_header || other.no_system_header,
            disable_pragma_system_header: self.disable_pragma_system_header
                || other.disable_pragma_system_header,
            disable_pragma_msvc_warning: self.disable_pragma_msvc_warning
                || other.disable_pragma_msvc_warning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_by_name() {
        for name in Overrides::NAMES {
            let mut o = Overrides::NONE;
            assert!(o.set(name), "{name}");
            assert_ne!(o, Overrides::NONE, "{name}");
        }

        let mut o = Overrides::NONE;
        assert!(!o.set("enable-rtti"));
        assert_eq!(o, Overrides::NONE);
    }

    #[test]
    fn test_union() {
        let mut a = Overrides::NONE;
        a.set("disable-rtti");
        let mut b = Overrides::NONE;
        b.set("disable-f16");

        let both = a.union(b);
        assert!(both.disable_rtti && both.disable_f16);
        assert!(!both.disable_typeid);
        assert_eq!(Overrides::NONE.union(Overrides::ALL), Overrides::ALL);
    }
}
