#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, f32 leaf kernels and the config layer
// - f16: half-precision routines
// - bind: partial application
// - tracing: structured diagnostics
// - disable-*, no-system-header: capability overrides

//! # tola-target
//!
//! Compile-time toolchain capabilities and host/device dispatch.
//!
//! One body of generic code, built by several toolchains for a general
//! purpose **host** and a constrained accelerator **device**, asks two kinds
//! of questions. Both are answered while compiling, with nothing left over at
//! run time:
//!
//! - *Which language features may I use here?* [`caps::CURRENT`]
//! - *Is the fast path available on this target?* [`target_if!`]
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Present / Absent, If, Require                                  |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Identification                                          |
//! |  - Signals -> Toolchain, Domain                                   |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Capability Flags                                        |
//! |  - (Signals, Overrides) -> Capabilities, type-level flags         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Dispatch                                                |
//! |  - target_if!, #[target_cfg], gate!  ->  half (f16 routines)      |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 4/5: Algorithms                                            |
//! |  - general_copy (assignability witness), bind_front               |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_target::prelude::*;
//!
//! // Fails to build on targets without type tags
//! fn tag_of<T: 'static>() -> core::any::TypeId
//! where
//!     T: Require<HasTypeTag>,
//! {
//!     core::any::TypeId::of::<T>()
//! }
//!
//! let lanes = target_if! {
//!     provides_sm_80 => { 64 },
//!     else => { 8 },
//! };
//!
//! println!("{} with {lanes} lanes", CURRENT);
//! ```

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Toolchain and Target Identification
// =============================================================================
pub mod toolchain;

// =============================================================================
// Layer 2: Feature Capability Flags
// =============================================================================
pub mod caps;

// =============================================================================
// Layer 3: Dual-Target Dispatch
// =============================================================================
pub mod target;

#[cfg(feature = "f16")]
pub mod half;

// =============================================================================
// Layer 4: Capability-Gated Copy
// =============================================================================
pub mod copy;

// =============================================================================
// Layer 5: Partial Application
// =============================================================================
#[cfg(feature = "bind")]
pub mod functional;

// =============================================================================
// Build-script Configuration
// =============================================================================
#[cfg(feature = "std")]
pub mod config;
#[cfg(feature = "std")]
pub mod error;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use caps::{Capabilities, Feature, Overrides};
pub use primitives::{Absent, Bool, Present, Require};
pub use target::{gate, target_cfg, target_if};
pub use toolchain::{Domain, Signals, Toolchain};

/// Common items for capability checks and dispatch.
pub mod prelude {
    pub use crate::caps::{
        Capabilities, Feature, HasExceptions, HasF16, HasRtti, HasTypeTag, CURRENT,
    };
    pub use crate::copy::{general_copy, general_copy_n, Cursor, OutputCursor};
    #[cfg(feature = "bind")]
    pub use crate::functional::{apply, bind_front, not_fn, Invoke, InvokeMut, InvokeOnce};
    pub use crate::primitives::{Absent, Bool, Present, Require};
    pub use crate::target::{gate, target_cfg, target_if, Gate};
    pub use crate::toolchain::{Domain, Toolchain};
    // Note: require_capability!, has_store! and bind_front! are #[macro_export] so they're at crate root
}
