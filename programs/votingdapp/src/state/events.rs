use anchor_lang::prelude::*;

#[event]
pub struct PollInitialized {
    pub poll: Pubkey,
    pub poll_id: u64,
    pub poll_start: u64,
    pub poll_end: u64,
}

#[event]
pub struct CandidateInitialized {
    pub candidate: Pubkey,
    pub poll_id: u64,
    pub name: String,
}

#[event]
pub struct VoteCast {
    pub candidate: Pubkey,
    pub poll_id: u64,
    /// Tally after this vote was counted
    pub votes: u64,
}
