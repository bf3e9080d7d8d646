//! Account storage for running the program's state transitions off-chain.
//!
//! The ledger hands the on-chain program its accounts already loaded; the
//! [`Processor`](crate::Processor) instead reads them through an
//! [`AccountStore`] and hands back a write set to commit.

use std::collections::{HashMap, HashSet};

use anchor_lang::prelude::*;

use crate::error::ErrorCode;

/// A single account write produced by one instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Write {
    /// Allocate a new account. Fails if the address is already in use.
    Create { address: Pubkey, data: Vec<u8> },
    /// Overwrite an existing account.
    Update { address: Pubkey, data: Vec<u8> },
}

/// Key-value account storage addressed by derived addresses.
///
/// `commit` is all-or-nothing: if any write in the set is rejected, none of
/// them are applied.
pub trait AccountStore {
    fn get(&self, address: &Pubkey) -> Option<&[u8]>;

    fn commit(&mut self, writes: Vec<Write>) -> Result<()>;

    fn contains(&self, address: &Pubkey) -> bool {
        self.get(address).is_some()
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    accounts: HashMap<Pubkey, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl AccountStore for MemoryStore {
    fn get(&self, address: &Pubkey) -> Option<&[u8]> {
        self.accounts.get(address).map(Vec::as_slice)
    }

    fn commit(&mut self, writes: Vec<Write>) -> Result<()> {
        let mut created = HashSet::new();
        for write in &writes {
            match write {
                Write::Create { address, .. } => {
                    require!(
                        !self.accounts.contains_key(address) && created.insert(*address),
                        ErrorCode::AlreadyExists
                    );
                }
                Write::Update { address, .. } => {
                    require!(
                        self.accounts.contains_key(address) || created.contains(address),
                        ErrorCode::AccountMissing
                    );
                }
            }
        }

        for write in writes {
            let (Write::Create { address, data } | Write::Update { address, data }) = write;
            self.accounts.insert(address, data);
        }
        Ok(())
    }
}

/// Serializes a record into account bytes (discriminator followed by Borsh).
pub fn to_account_data<T: AccountSerialize>(record: &T) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    record.try_serialize(&mut data)?;
    Ok(data)
}

/// Loads and deserializes the record at `address`, if any.
pub fn load<T: AccountDeserialize, S: AccountStore + ?Sized>(
    store: &S,
    address: &Pubkey,
) -> Result<Option<T>> {
    store
        .get(address)
        .map(|mut data| T::try_deserialize(&mut data))
        .transpose()
}
