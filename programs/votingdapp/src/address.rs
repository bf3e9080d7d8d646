//! Program-derived addresses for poll and candidate accounts.
//!
//! These are the same seeds the `#[account(seeds = ...)]` constraints in
//! `lib.rs` use, so an address computed here always matches the account the
//! on-chain program creates.

use anchor_lang::prelude::*;

use crate::error::ErrorCode;

/// Derives the program address and bump for a sequence of key parts.
///
/// Returns `None` when no address exists for the parts, which happens when a
/// part is longer than the ledger's per-seed limit.
pub fn derive_address(parts: &[&[u8]]) -> Option<(Pubkey, u8)> {
    Pubkey::try_find_program_address(parts, &crate::ID)
}

pub fn poll_address(poll_id: u64) -> (Pubkey, u8) {
    // An 8-byte seed is always within the seed limit.
    Pubkey::find_program_address(&[poll_id.to_le_bytes().as_ref()], &crate::ID)
}

/// Candidate accounts are keyed by their poll and their name, so the same
/// name can be registered under different polls.
pub fn candidate_address(poll_id: u64, name: &str) -> Result<(Pubkey, u8)> {
    derive_address(&[poll_id.to_le_bytes().as_ref(), name.as_bytes()])
        .ok_or_else(|| error!(ErrorCode::CandidateNameTooLong))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_CANDIDATE_NAME_LEN;

    #[test]
    fn poll_address_is_deterministic() {
        assert_eq!(poll_address(1), poll_address(1));
        assert_ne!(poll_address(1).0, poll_address(2).0);
    }

    #[test]
    fn poll_address_matches_raw_seeds() {
        let expected = Pubkey::find_program_address(&[&1u64.to_le_bytes()], &crate::ID);
        assert_eq!(poll_address(1), expected);
        assert_eq!(derive_address(&[&1u64.to_le_bytes()]), Some(expected));
    }

    #[test]
    fn candidate_address_depends_on_poll_and_name() {
        let trump = candidate_address(1, "Donald Trump").unwrap();
        assert_eq!(trump, candidate_address(1, "Donald Trump").unwrap());
        assert_ne!(trump.0, candidate_address(1, "Kamala Harris").unwrap().0);
        assert_ne!(trump.0, candidate_address(2, "Donald Trump").unwrap().0);
        assert_ne!(trump.0, poll_address(1).0);
    }

    #[test]
    fn oversized_name_has_no_address() {
        assert!(candidate_address(1, &"n".repeat(MAX_CANDIDATE_NAME_LEN)).is_ok());
        assert!(candidate_address(1, &"n".repeat(MAX_CANDIDATE_NAME_LEN + 1)).is_err());
        assert_eq!(derive_address(&[&[0u8; 33]]), None);
    }
}
