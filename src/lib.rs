//! Teaching utilities: a generic arithmetic module and a single-account
//! ledger, plus a CSV replay driver for the ledger.

pub mod calculator;
pub mod config;
pub mod dlq;
pub mod domain;
pub mod engine;
pub mod ingestion;
pub mod output;

pub use calculator::{add, divide, factorial, multiply, square, subtract};
pub use domain::{AccountState, BankAccount, Error, Transaction, TransactionKind};
