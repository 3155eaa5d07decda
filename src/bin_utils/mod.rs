//! CSV front-end for [`crate::processor`], shared by the binary and the
//! integration tests.

use std::io::{Read, Write};

use crate::{
    account::{Account, Balance},
    processor::{
        TransferProcessError, TransferProcessor, in_memory_processor::InMemoryTransferProcessor,
    },
};
use anyhow::{Context, Result};
use csv_parser::CsvRecordParser;
use csv_printer::{AccountRow, print_accounts};
use tracing::warn;
pub mod csv_parser;
pub mod csv_printer;
pub mod logging;

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    /// Fee in effect until a `fee` record changes it
    pub fee: Balance,
    pub error_printer: Box<dyn FnMut(u64, TransferProcessError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvRecordParser::new(self.input);

        let mut processor = InMemoryTransferProcessor::with_fee(self.fee);

        for (line, row) in parser {
            let row = row.with_context(|| format!("Malformed record at line {line}"))?;
            match processor.process_record(row.kind, row.account, row.counterparty, row.amount) {
                Ok(()) => {}
                Err(err @ TransferProcessError::Declined { .. }) => {
                    warn!(line, "{err}");
                }
                Err(err) => (self.error_printer)(line, err),
            }
        }

        let mut accounts: Vec<_> = processor.accounts.values().collect();
        accounts.sort_by_key(|acc| acc.id());
        print_accounts(
            self.output,
            accounts.into_iter().map(|acc| AccountRow {
                account: acc.id(),
                balance: acc.balance(),
                locked: acc.is_locked(),
            }),
        )
    }
}
