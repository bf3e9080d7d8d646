/// Longest poll description, in bytes, that fits in a `Poll` account.
pub const MAX_DESCRIPTION_LEN: usize = 280;

/// Longest candidate name, in bytes. The name is used verbatim as a PDA seed,
/// so it cannot exceed the ledger's per-seed limit.
pub const MAX_CANDIDATE_NAME_LEN: usize = 32;
