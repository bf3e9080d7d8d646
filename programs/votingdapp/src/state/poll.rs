use anchor_lang::prelude::*;

use crate::{constants::MAX_DESCRIPTION_LEN, error::ErrorCode};

/// A voting event with a validity window, stored at `poll_address(poll_id)`.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Poll {
    /// Caller-supplied identifier, also the PDA seed
    pub poll_id: u64,
    /// What the poll is about (max 280 bytes)
    #[max_len(280)]
    pub description: String,
    /// Unix timestamp the poll opens at
    pub poll_start: u64,
    /// Unix timestamp the poll closes at
    pub poll_end: u64,
    /// Number of candidates registered under this poll
    pub candidate_amount: u64,
}

impl Poll {
    pub fn new(poll_id: u64, description: String, poll_start: u64, poll_end: u64) -> Result<Self> {
        require!(!description.is_empty(), ErrorCode::EmptyDescription);
        require!(
            description.len() <= MAX_DESCRIPTION_LEN,
            ErrorCode::DescriptionTooLong
        );
        require!(poll_start < poll_end, ErrorCode::InvalidTimeRange);

        Ok(Self {
            poll_id,
            description,
            poll_start,
            poll_end,
            candidate_amount: 0,
        })
    }

    pub fn register_candidate(&mut self) -> Result<()> {
        self.candidate_amount = self
            .candidate_amount
            .checked_add(1)
            .ok_or(ErrorCode::CandidateCountOverflow)?;
        Ok(())
    }
}
