use std::ops::{Deref, DerefMut};

use thiserror::Error;
use tracing::debug;

pub type AccountId = u32;

pub type Balance = i64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Account {id} is already locked")]
    AlreadyLocked { id: AccountId },
    #[error("Account {id} must be locked before its balance is changed")]
    LockRequired { id: AccountId },
    #[error("Balance of account {id} would overflow")]
    BalanceOverflow { id: AccountId },
}

/// Operations the transfer protocol needs from an account.
///
/// The lock is a reentrancy guard for a single thread of control, not a
/// synchronization primitive: [`Account::lock`] fails on an account that is
/// already locked, and [`Account::change_balance`] fails on one that isn't.
pub trait Account {
    fn id(&self) -> AccountId;

    fn balance(&self) -> Balance;

    /// Adds `delta` to the balance. The account must be locked.
    fn change_balance(&mut self, delta: Balance) -> Result<(), AccountError>;

    fn lock(&mut self) -> Result<(), AccountError>;

    /// Unlocking an unlocked account is a no-op.
    fn unlock(&mut self);

    fn is_locked(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankAccount {
    id: AccountId,
    balance: Balance,
    locked: bool,
}

impl BankAccount {
    pub fn new(id: AccountId, balance: Balance) -> Self {
        Self {
            id,
            balance,
            locked: false,
        }
    }
}

impl Account for BankAccount {
    fn id(&self) -> AccountId {
        self.id
    }

    fn balance(&self) -> Balance {
        self.balance
    }

    fn change_balance(&mut self, delta: Balance) -> Result<(), AccountError> {
        if !self.locked {
            return Err(AccountError::LockRequired { id: self.id });
        }
        self.balance = self
            .balance
            .checked_add(delta)
            .ok_or(AccountError::BalanceOverflow { id: self.id })?;
        Ok(())
    }

    fn lock(&mut self) -> Result<(), AccountError> {
        if self.locked {
            return Err(AccountError::AlreadyLocked { id: self.id });
        }
        self.locked = true;
        debug!(account = self.id, "account locked");
        Ok(())
    }

    fn unlock(&mut self) {
        self.locked = false;
        debug!(account = self.id, "account unlocked");
    }

    fn is_locked(&self) -> bool {
        self.locked
    }
}

/// Holds an account locked for as long as the guard lives.
pub struct AccountGuard<'a, A: Account + ?Sized> {
    account: &'a mut A,
}

impl<'a, A: Account + ?Sized> AccountGuard<'a, A> {
    pub fn lock(account: &'a mut A) -> Result<Self, AccountError> {
        account.lock()?;
        Ok(Self { account })
    }
}

impl<A: Account + ?Sized> Deref for AccountGuard<'_, A> {
    type Target = A;

    fn deref(&self) -> &Self::Target {
        self.account
    }
}

impl<A: Account + ?Sized> DerefMut for AccountGuard<'_, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.account
    }
}

impl<A: Account + ?Sized> Drop for AccountGuard<'_, A> {
    fn drop(&mut self) {
        self.account.unlock();
    }
}
