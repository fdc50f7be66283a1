//! Known device hardware revisions.

/// Every `sm_N` revision a gate may name, oldest first.
pub const KNOWN_REVISIONS: &[u32] = &[35, 37, 50, 52, 53, 60, 61, 62, 70, 72, 75, 80, 86, 87, 89, 90];

pub fn known_revisions_list() -> String {
    KNOWN_REVISIONS
        .iter()
        .map(|r| format!("sm_{r}"))
        .collect::<Vec<_>>()
        .join(", ")
}
