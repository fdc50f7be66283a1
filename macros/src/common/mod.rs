// Common utilities shared between internal and user-facing macros
//
// This module contains:
// - gate_expr: gate expression parsing and lowering to `cfg`
// - revisions: the known hardware revision table

mod gate_expr;
mod revisions;

pub use gate_expr::*;
pub use revisions::*;
