use std::fs::File;

use anyhow::{Context, Result};
use locked_transfer::{
    bin_utils::{Service, logging::init_logging},
    processor::TransferProcessError,
    transaction::DEFAULT_FEE,
};

fn main() -> Result<()> {
    init_logging();

    let mut args = std::env::args().skip(1);
    let filename = args
        .next()
        .context("Expected a file name as the first argument")?;
    let fee = match args.next() {
        Some(fee) => fee
            .parse()
            .with_context(|| format!("Invalid fee `{fee}`"))?,
        None => DEFAULT_FEE,
    };
    let file = File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;

    let service = Service {
        input: file,
        output: &mut std::io::stdout(),
        fee,
        error_printer: Box::new(|line: u64, err: TransferProcessError| {
            eprintln!("Error at line {line}: {err}")
        }),
    };
    service.run()
}
