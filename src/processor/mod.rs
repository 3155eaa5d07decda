use thiserror::Error;

use crate::{
    account::{AccountId, Balance},
    command::{LedgerCommandError, RecordKind},
    transaction::{DeclineReason, TransactionError},
};

pub mod in_memory_processor;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransferProcessError {
    #[error(transparent)]
    CommandErr(#[from] LedgerCommandError),
    #[error(transparent)]
    TransactionErr(#[from] TransactionError),
    #[error("Account {id} does not exist")]
    UnknownAccount { id: AccountId },
    #[error("Account {id} already exists")]
    DuplicateAccount { id: AccountId },
    #[error("Transfer of {amount} from {from} to {to} declined: {reason:?}")]
    Declined {
        from: AccountId,
        to: AccountId,
        amount: Balance,
        reason: DeclineReason,
    },
}

pub trait TransferProcessor {
    fn process_record(
        &mut self,
        kind: RecordKind,
        account: Option<AccountId>,
        counterparty: Option<AccountId>,
        amount: Option<Balance>,
    ) -> Result<(), TransferProcessError>;
}
