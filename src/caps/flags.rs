//! Type-level view of the resolved capabilities.
//!
//! Each alias is `Present` or `Absent` for the current compilation, so a
//! capability can be demanded in a `where` clause:
//!
//! ```
//! use tola_target::caps::HasTypeTag;
//! use tola_target::primitives::Require;
//!
//! fn tagged<T: 'static>() -> core::any::TypeId
//! where
//!     T: Require<HasTypeTag>,
//! {
//!     core::any::TypeId::of::<T>()
//! }
//! ```

use super::CURRENT;
use crate::primitives::{Fact, Flag};

/// Run-time type information.
pub type Rtti = Flag<{ CURRENT.rtti }>;
/// Type-tag querying.
pub type TypeTag = Flag<{ CURRENT.typeid }>;
pub type Exceptions = Flag<{ CURRENT.exceptions }>;
pub type F16 = Flag<{ CURRENT.f16 }>;

macro_rules! capability_fact {
    ($($(#[$meta:meta])* $name:ident => $flag:ty;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
            pub struct $name;

            impl Fact for $name {
                type Out = $flag;
            }
        )*
    };
}

capability_fact! {
    /// Holds when run-time type information is available.
    HasRtti => Rtti;
    /// Holds when type tags can be queried.
    HasTypeTag => TypeTag;
    HasExceptions => Exceptions;
    HasF16 => F16;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Bool;

    #[test]
    fn test_aliases_follow_current() {
        assert_eq!(<Rtti as Bool>::VALUE, CURRENT.rtti);
        assert_eq!(<TypeTag as Bool>::VALUE, CURRENT.typeid);
        assert_eq!(<Exceptions as Bool>::VALUE, CURRENT.exceptions);
        assert_eq!(<F16 as Bool>::VALUE, CURRENT.f16);
        assert_eq!(<<HasF16 as Fact>::Out as Bool>::VALUE, CURRENT.f16);
    }
}
