pub mod account;
pub mod error;
pub mod traits;
pub mod transaction;

pub use account::{AccountState, BankAccount};
pub use error::Error;
pub use traits::{DeadLetterQueue, HistoryOutput, OperationStream};
pub use transaction::{Operation, Transaction, TransactionKind};
