//! Owned account buffers for driving the handlers through a real `Context`
//! without a ledger.

use anchor_lang::{prelude::*, system_program};

use crate::store::to_account_data;

pub struct TestAccount {
    key: Pubkey,
    lamports: u64,
    data: Vec<u8>,
    owner: Pubkey,
    is_signer: bool,
    executable: bool,
}

impl TestAccount {
    pub fn signer() -> Self {
        Self {
            key: Pubkey::new_unique(),
            lamports: 1_000_000_000,
            data: Vec::new(),
            owner: system_program::ID,
            is_signer: true,
            executable: false,
        }
    }

    pub fn system_program() -> Self {
        Self {
            key: system_program::ID,
            lamports: 1,
            data: Vec::new(),
            owner: Pubkey::default(),
            is_signer: false,
            executable: true,
        }
    }

    /// A program-owned account as `init` leaves it: allocated and zeroed.
    pub fn allocated(key: Pubkey, space: usize) -> Self {
        Self::owned(key, vec![0; space])
    }

    pub fn record<T: AccountSerialize>(key: Pubkey, record: &T) -> Self {
        Self::owned(key, to_account_data(record).unwrap())
    }

    fn owned(key: Pubkey, data: Vec<u8>) -> Self {
        Self {
            key,
            lamports: 1_000_000,
            data,
            owner: crate::ID,
            is_signer: false,
            executable: false,
        }
    }

    pub fn info(&mut self) -> AccountInfo<'_> {
        AccountInfo::new(
            &self.key,
            self.is_signer,
            true,
            &mut self.lamports,
            &mut self.data,
            &self.owner,
            self.executable,
            0,
        )
    }
}
