use anchor_lang::prelude::*;

use crate::{state::VoteCast, Vote};

/// Adds one vote to the candidate's tally.
///
/// The poll's time window is not checked and voters are not tracked, so the
/// same signer may vote any number of times.
pub fn vote(ctx: Context<Vote>, poll_id: u64, candidate_name: String) -> Result<()> {
    let candidate = &mut ctx.accounts.candidate;
    candidate.record_vote()?;

    msg!(
        "Vote for {} in poll {}, tally now {}",
        candidate_name,
        poll_id,
        candidate.votes
    );

    emit!(VoteCast {
        candidate: candidate.key(),
        poll_id,
        votes: candidate.votes,
    });

    Ok(())
}
