use anchor_lang::prelude::*;

use crate::{
    state::{Poll, PollInitialized},
    InitializePoll,
};

/// Creates the poll account for `poll_id`.
///
/// The account itself is allocated by the `init` constraint on
/// [`InitializePoll`], so a second call with the same id fails before this
/// body runs.
///
/// # Arguments
/// * `poll_id` - Identifier the poll PDA is derived from
/// * `description` - What the poll asks, at most 280 bytes
/// * `poll_start` / `poll_end` - Voting window, `poll_start < poll_end`
pub fn initialize_poll(
    ctx: Context<InitializePoll>,
    poll_id: u64,
    description: String,
    poll_start: u64,
    poll_end: u64,
) -> Result<()> {
    msg!("Initializing poll {}", poll_id);

    ctx.accounts
        .poll
        .set_inner(Poll::new(poll_id, description, poll_start, poll_end)?);

    emit!(PollInitialized {
        poll: ctx.accounts.poll.key(),
        poll_id,
        poll_start,
        poll_end,
    });

    Ok(())
}
