//! Executes the program's instructions against an injected [`AccountStore`].
//!
//! Each operation reads what it needs, validates, and commits a single write
//! set, so a failed call leaves the store exactly as it found it. Record
//! validation and mutation go through the same `Poll` / `Candidate` methods
//! the on-chain handlers use.

use anchor_lang::prelude::*;

use crate::{
    address::{candidate_address, poll_address},
    error::ErrorCode,
    state::{Candidate, Poll},
    store::{load, to_account_data, AccountStore, Write},
};

pub struct Processor<S> {
    store: S,
}

impl<S: AccountStore> Processor<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates a poll and returns its address.
    pub fn initialize_poll(
        &mut self,
        poll_id: u64,
        description: String,
        poll_start: u64,
        poll_end: u64,
    ) -> Result<Pubkey> {
        let (address, _bump) = poll_address(poll_id);
        require!(!self.store.contains(&address), ErrorCode::AlreadyExists);

        let poll = Poll::new(poll_id, description, poll_start, poll_end)?;
        self.store.commit(vec![Write::Create {
            address,
            data: to_account_data(&poll)?,
        }])?;

        msg!("Initialized poll {} at {}", poll_id, address);
        Ok(address)
    }

    /// Registers a candidate under an existing poll and returns its address.
    ///
    /// The candidate account and the poll's updated `candidate_amount` are
    /// committed together.
    pub fn initialize_candidate(&mut self, poll_id: u64, name: String) -> Result<Pubkey> {
        let (poll_key, _) = poll_address(poll_id);
        let mut poll: Poll = load(&self.store, &poll_key)?.ok_or(ErrorCode::PollNotFound)?;

        let candidate = Candidate::new(poll_id, name)?;
        let (address, _bump) = candidate_address(poll_id, &candidate.name)?;
        require!(!self.store.contains(&address), ErrorCode::AlreadyExists);

        poll.register_candidate()?;
        self.store.commit(vec![
            Write::Create {
                address,
                data: to_account_data(&candidate)?,
            },
            Write::Update {
                address: poll_key,
                data: to_account_data(&poll)?,
            },
        ])?;

        msg!(
            "Registered candidate {} for poll {} ({} total)",
            candidate.name,
            poll_id,
            poll.candidate_amount
        );
        Ok(address)
    }

    /// Adds one vote to a candidate and returns the new tally.
    ///
    /// A candidate cannot exist without its poll, so a missing poll is
    /// reported as `CandidateNotFound` too.
    pub fn vote(&mut self, poll_id: u64, name: &str) -> Result<u64> {
        let (address, mut candidate) = self.load_candidate(poll_id, name)?;
        candidate.record_vote()?;
        self.store.commit(vec![Write::Update {
            address,
            data: to_account_data(&candidate)?,
        }])?;

        msg!("Vote for {} in poll {}, tally now {}", name, poll_id, candidate.votes);
        Ok(candidate.votes)
    }

    pub fn fetch_poll(&self, poll_id: u64) -> Result<Poll> {
        let (address, _) = poll_address(poll_id);
        load(&self.store, &address)?.ok_or_else(|| error!(ErrorCode::PollNotFound))
    }

    pub fn fetch_candidate(&self, poll_id: u64, name: &str) -> Result<Candidate> {
        self.load_candidate(poll_id, name).map(|(_, candidate)| candidate)
    }

    fn load_candidate(&self, poll_id: u64, name: &str) -> Result<(Pubkey, Candidate)> {
        // Names longer than a seed can never have been registered.
        let (address, _) = candidate_address(poll_id, name)
            .map_err(|_| error!(ErrorCode::CandidateNotFound))?;
        let candidate =
            load(&self.store, &address)?.ok_or_else(|| error!(ErrorCode::CandidateNotFound))?;
        Ok((address, candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn failed_candidate_leaves_poll_unchanged() {
        let mut processor = Processor::new(MemoryStore::new());
        processor
            .initialize_poll(3, "Lunch".to_string(), 0, 100)
            .unwrap();
        processor.initialize_candidate(3, "Pizza".to_string()).unwrap();

        assert!(processor.initialize_candidate(3, "Pizza".to_string()).is_err());
        assert!(processor.initialize_candidate(3, String::new()).is_err());

        assert_eq!(processor.fetch_poll(3).unwrap().candidate_amount, 1);
        assert_eq!(processor.store().len(), 2);
    }

    #[test]
    fn vote_returns_new_tally() {
        let mut processor = Processor::new(MemoryStore::new());
        processor.initialize_poll(4, "Tabs or spaces".to_string(), 0, 1).unwrap();
        processor.initialize_candidate(4, "Tabs".to_string()).unwrap();

        assert_eq!(processor.vote(4, "Tabs").unwrap(), 1);
        assert_eq!(processor.vote(4, "Tabs").unwrap(), 2);
    }
}
