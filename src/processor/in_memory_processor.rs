use std::collections::{HashMap, hash_map::Entry};

use tracing::debug;

use crate::{
    account::{AccountId, Balance, BankAccount},
    command::{LedgerCommand, RecordKind},
    transaction::{Transaction, TransactionError, TransferOutcome},
};

use super::{TransferProcessError, TransferProcessor};

#[derive(Default)]
pub struct InMemoryTransferProcessor {
    transaction: Transaction,
    pub accounts: HashMap<AccountId, BankAccount>,
}

impl InMemoryTransferProcessor {
    pub fn with_fee(fee: Balance) -> Self {
        Self {
            transaction: Transaction::with_fee(fee),
            accounts: HashMap::new(),
        }
    }

    pub fn fee(&self) -> Balance {
        self.transaction.fee()
    }

    fn open_account(&mut self, id: AccountId, balance: Balance) -> Result<(), TransferProcessError> {
        match self.accounts.entry(id) {
            Entry::Occupied(_) => Err(TransferProcessError::DuplicateAccount { id }),
            Entry::Vacant(entry) => {
                entry.insert(BankAccount::new(id, balance));
                debug!(account = id, balance, "account opened");
                Ok(())
            }
        }
    }

    fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Balance,
    ) -> Result<(), TransferProcessError> {
        if from == to {
            return Err(TransactionError::SameAccount { id: from }.into());
        }
        // source is taken out so that both accounts can be borrowed mutably
        let mut source = self
            .accounts
            .remove(&from)
            .ok_or(TransferProcessError::UnknownAccount { id: from })?;
        let result = match self.accounts.get_mut(&to) {
            Some(destination) => self
                .transaction
                .transfer(&mut source, destination, amount)
                .map_err(TransferProcessError::from),
            None => Err(TransferProcessError::UnknownAccount { id: to }),
        };
        self.accounts.insert(from, source);

        match result? {
            TransferOutcome::Completed => Ok(()),
            TransferOutcome::Declined(reason) => Err(TransferProcessError::Declined {
                from,
                to,
                amount,
                reason,
            }),
        }
    }
}

impl TransferProcessor for InMemoryTransferProcessor {
    fn process_record(
        &mut self,
        kind: RecordKind,
        account: Option<AccountId>,
        counterparty: Option<AccountId>,
        amount: Option<Balance>,
    ) -> Result<(), TransferProcessError> {
        match LedgerCommand::parse_command(kind, account, counterparty, amount)? {
            LedgerCommand::Open { id, balance } => self.open_account(id, balance),
            LedgerCommand::SetFee { fee } => {
                self.transaction.set_fee(fee);
                Ok(())
            }
            LedgerCommand::Transfer { from, to, amount } => self.transfer(from, to, amount),
        }
    }
}
