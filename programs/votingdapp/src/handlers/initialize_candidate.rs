use anchor_lang::prelude::*;

use crate::{
    state::{Candidate, CandidateInitialized},
    InitializeCandidate,
};

/// Registers `candidate_name` under an existing poll with a zero tally.
pub fn initialize_candidate(
    ctx: Context<InitializeCandidate>,
    poll_id: u64,
    candidate_name: String,
) -> Result<()> {
    msg!("Registering candidate {} for poll {}", candidate_name, poll_id);

    let candidate = Candidate::new(poll_id, candidate_name)?;
    ctx.accounts.poll.register_candidate()?;

    emit!(CandidateInitialized {
        candidate: ctx.accounts.candidate.key(),
        poll_id,
        name: candidate.name.clone(),
    });

    ctx.accounts.candidate.set_inner(candidate);

    Ok(())
}
