use thiserror::Error;
use tracing::{debug, info, warn};

use crate::account::{Account, AccountError, AccountGuard, AccountId, Balance};

pub const DEFAULT_FEE: Balance = 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransactionError {
    #[error("Account {id} cannot transfer funds to itself")]
    SameAccount { id: AccountId },
    #[error("Transfer amount must not be negative, got {amount}")]
    InvalidAmount { amount: Balance },
    #[error("Transfer amount {amount} must be greater than the fee {fee}")]
    AmountTooSmall { amount: Balance, fee: Balance },
    #[error(transparent)]
    Account(#[from] AccountError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclineReason {
    /// Source balance cannot cover amount plus fee.
    InsufficientFunds,
    /// Fee takes more than half of the transferred amount.
    FeeTooHigh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferOutcome {
    Completed,
    Declined(DeclineReason),
}

impl TransferOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Moves funds between two accounts, charging the source a fixed fee.
///
/// Errors are reserved for malformed calls (see [`TransactionError`]). A valid
/// transfer that cannot be covered is declined instead, and leaves both
/// balances as they were.
#[derive(Debug, Clone)]
pub struct Transaction {
    fee: Balance,
}

impl Default for Transaction {
    fn default() -> Self {
        Self::with_fee(DEFAULT_FEE)
    }
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fee(fee: Balance) -> Self {
        Self { fee }
    }

    pub fn fee(&self) -> Balance {
        self.fee
    }

    /// Any value is accepted here, it is checked against the amount on transfer.
    pub fn set_fee(&mut self, fee: Balance) {
        self.fee = fee;
    }

    /// Returns `true` if the transfer completed and `false` if it was declined.
    pub fn make<A, B>(
        &self,
        from: &mut A,
        to: &mut B,
        amount: Balance,
    ) -> Result<bool, TransactionError>
    where
        A: Account + ?Sized,
        B: Account + ?Sized,
    {
        self.transfer(from, to, amount)
            .map(|outcome| outcome.is_completed())
    }

    /// Transfers `amount` from `from` to `to`, debiting `from` by `amount + fee`.
    ///
    /// Accounts are locked source first and released in reverse order on every
    /// return path. If the debit overdraws the source, both balances are
    /// restored and the transfer is declined.
    pub fn transfer<A, B>(
        &self,
        from: &mut A,
        to: &mut B,
        amount: Balance,
    ) -> Result<TransferOutcome, TransactionError>
    where
        A: Account + ?Sized,
        B: Account + ?Sized,
    {
        let (from_id, to_id) = (from.id(), to.id());
        if from_id == to_id {
            return Err(TransactionError::SameAccount { id: from_id });
        }
        if amount < 0 {
            return Err(TransactionError::InvalidAmount { amount });
        }
        if amount <= self.fee {
            return Err(TransactionError::AmountTooSmall {
                amount,
                fee: self.fee,
            });
        }
        if self.fee > amount / 2 {
            warn!(
                from = from_id,
                to = to_id,
                amount,
                fee = self.fee,
                "fee too high, transfer declined"
            );
            return Ok(TransferOutcome::Declined(DeclineReason::FeeTooHigh));
        }
        let Some((charge, debit)) = amount
            .checked_add(self.fee)
            .and_then(|charge| charge.checked_neg().map(|debit| (charge, debit)))
        else {
            warn!(
                from = from_id,
                to = to_id,
                amount,
                fee = self.fee,
                "charge out of range, transfer declined"
            );
            return Ok(TransferOutcome::Declined(DeclineReason::InsufficientFunds));
        };

        // `to` is declared last, so it is released first
        let mut from = AccountGuard::lock(from)?;
        let mut to = AccountGuard::lock(to)?;
        debug!(from = from_id, to = to_id, "accounts locked");

        match from.change_balance(debit) {
            Ok(()) => {}
            // a debit can only overflow below the lowest representable balance
            Err(AccountError::BalanceOverflow { .. }) => {
                warn!(
                    from = from_id,
                    to = to_id,
                    amount,
                    fee = self.fee,
                    balance = from.balance(),
                    "debit out of range, transfer declined"
                );
                return Ok(TransferOutcome::Declined(DeclineReason::InsufficientFunds));
            }
            Err(err) => return Err(err.into()),
        }
        if let Err(err) = to.change_balance(amount) {
            from.change_balance(charge)?;
            return Err(err.into());
        }

        if from.balance() < 0 {
            let reverted_credit = to.change_balance(-amount);
            from.change_balance(charge)?;
            reverted_credit?;
            warn!(
                from = from_id,
                to = to_id,
                amount,
                fee = self.fee,
                balance = from.balance(),
                "insufficient funds, transfer rolled back"
            );
            return Ok(TransferOutcome::Declined(DeclineReason::InsufficientFunds));
        }

        info!(
            from = from_id,
            to = to_id,
            amount,
            fee = self.fee,
            "transfer completed"
        );
        Ok(TransferOutcome::Completed)
    }
}
