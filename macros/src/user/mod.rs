//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `target_if!` | function macro | Per-target body selection |
//! | `#[target_cfg]` | on item | Gate an item on a target predicate |
//! | `gate!` | function macro | Gate predicate as `bool` |

pub mod target_if;
