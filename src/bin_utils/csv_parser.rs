use std::io::Read;

use crate::{
    account::{AccountId, Balance},
    command::RecordKind,
};
use csv::{DeserializeRecordsIntoIter, Trim};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Record {
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub account: Option<AccountId>,
    pub counterparty: Option<AccountId>,
    pub amount: Option<Balance>,
}

/// Parses ledger records in CSV format, yielding each with its line number
pub struct CsvRecordParser<R> {
    iter: DeserializeRecordsIntoIter<R, Record>,
}

impl<R> CsvRecordParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            iter: reader.into_deserialize(),
        }
    }
}

impl<R> Iterator for CsvRecordParser<R>
where
    R: Read,
{
    type Item = (u64, csv::Result<Record>);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| (curr_line, row))
    }
}
