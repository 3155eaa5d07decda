/// Lock-guarded accounts: the [`account::Account`] capability trait and the
/// in-memory [`account::BankAccount`].
pub mod account;

/// The transfer protocol between two accounts, charging a configurable fee.
pub mod transaction;

/// Ledger commands parsed from input records, executed by [`processor`].
pub mod command;

/// Transfer processor interface, plus "in memory" implementation that owns
/// the accounts and drives [`transaction::Transaction`] over them.
pub mod processor;

/// Bootstraps the processor from CSV input. Kept in the library so the
/// integration tests can drive it.
pub mod bin_utils;
