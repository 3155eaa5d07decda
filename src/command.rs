use serde::Deserialize;
use thiserror::Error;

use crate::account::{AccountId, Balance};

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Open,
    Fee,
    Transfer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerCommand {
    Open {
        id: AccountId,
        balance: Balance,
    },
    SetFee {
        fee: Balance,
    },
    Transfer {
        from: AccountId,
        to: AccountId,
        amount: Balance,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerCommandError {
    #[error("Account is required for {kind:?}")]
    AccountRequired { kind: RecordKind },
    #[error("Counterparty is required for {kind:?}")]
    CounterpartyRequired { kind: RecordKind },
    #[error("Amount is required for {kind:?}")]
    AmountRequired { kind: RecordKind },
}

impl LedgerCommand {
    pub fn parse_command(
        kind: RecordKind,
        account: Option<AccountId>,
        counterparty: Option<AccountId>,
        amount: Option<Balance>,
    ) -> Result<Self, LedgerCommandError> {
        let amount = amount.ok_or(LedgerCommandError::AmountRequired { kind })?;
        match kind {
            RecordKind::Open => Ok(Self::Open {
                id: account.ok_or(LedgerCommandError::AccountRequired { kind })?,
                balance: amount,
            }),
            RecordKind::Fee => Ok(Self::SetFee { fee: amount }),
            RecordKind::Transfer => Ok(Self::Transfer {
                from: account.ok_or(LedgerCommandError::AccountRequired { kind })?,
                to: counterparty.ok_or(LedgerCommandError::CounterpartyRequired { kind })?,
                amount,
            }),
        }
    }
}
