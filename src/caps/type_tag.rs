//! Type queries that only compile where the capability exists.

use core::any::{Any, TypeId};

use super::flags::{HasRtti, HasTypeTag};
use crate::primitives::Require;

/// The type tag of `T`.
pub fn type_tag<T: ?Sized + 'static>() -> TypeId
where
    T: Require<HasTypeTag>,
{
    TypeId::of::<T>()
}

/// The name of `T`.
pub fn type_name<T: ?Sized>() -> &'static str
where
    T: Require<HasTypeTag>,
{
    core::any::type_name::<T>()
}

/// Dynamic downcast through run-time type information.
pub fn downcast_ref<T: Any>(value: &dyn Any) -> Option<&T>
where
    T: Require<HasRtti>,
{
    value.downcast_ref::<T>()
}
