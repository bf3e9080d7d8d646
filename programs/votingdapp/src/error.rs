use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("An account already exists at the derived address")]
    AlreadyExists,
    #[msg("Poll not found")]
    PollNotFound,
    #[msg("Candidate not found")]
    CandidateNotFound,
    #[msg("Poll start must be earlier than poll end")]
    InvalidTimeRange,
    #[msg("Poll description must not be empty")]
    EmptyDescription,
    #[msg("Poll description is too long")]
    DescriptionTooLong,
    #[msg("Candidate name must not be empty")]
    EmptyCandidateName,
    #[msg("Candidate name is too long")]
    CandidateNameTooLong,
    #[msg("Too many candidates registered for this poll")]
    CandidateCountOverflow,
    #[msg("Vote count overflow")]
    VoteOverflow,
    #[msg("Update targets an account that does not exist")]
    AccountMissing,
}
