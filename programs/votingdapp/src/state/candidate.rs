use anchor_lang::prelude::*;

use crate::{constants::MAX_CANDIDATE_NAME_LEN, error::ErrorCode};

/// A named option under a poll, stored at `candidate_address(poll_id, name)`.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub poll_id: u64,
    #[max_len(32)]
    pub name: String,
    pub votes: u64,
}

impl Candidate {
    pub fn new(poll_id: u64, name: String) -> Result<Self> {
        Self::validate_name(&name)?;
        Ok(Self {
            poll_id,
            name,
            votes: 0,
        })
    }

    pub fn validate_name(name: &str) -> Result<()> {
        require!(!name.is_empty(), ErrorCode::EmptyCandidateName);
        require!(
            name.len() <= MAX_CANDIDATE_NAME_LEN,
            ErrorCode::CandidateNameTooLong
        );
        Ok(())
    }

    pub fn record_vote(&mut self) -> Result<()> {
        self.votes = self.votes.checked_add(1).ok_or(ErrorCode::VoteOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_zero_votes() {
        let candidate = Candidate::new(1, "Kamala Harris".to_string()).unwrap();
        assert_eq!(candidate.votes, 0);
        assert_eq!(Candidate::INIT_SPACE, 8 + (4 + MAX_CANDIDATE_NAME_LEN) + 8);
    }

    #[test]
    fn name_must_fit_in_a_seed() {
        assert!(Candidate::new(1, String::new()).is_err());
        assert!(Candidate::new(1, "n".repeat(MAX_CANDIDATE_NAME_LEN)).is_ok());
        assert!(Candidate::new(1, "n".repeat(MAX_CANDIDATE_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn record_vote_increments_by_one() {
        let mut candidate = Candidate::new(1, "Donald Trump".to_string()).unwrap();
        candidate.record_vote().unwrap();
        candidate.record_vote().unwrap();
        assert_eq!(candidate.votes, 2);

        candidate.votes = u64::MAX;
        assert!(candidate.record_vote().is_err());
    }
}
