use futures::Stream;

use crate::domain::{BankAccount, Error, Operation};

pub trait OperationStream {
    type OpStream: Stream<Item = Result<Operation, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::OpStream;
}

pub trait DeadLetterQueue {
    fn report(&self, error: &Error);
}

pub trait HistoryOutput {
    fn write(&mut self, account: &BankAccount) -> Result<(), Error>;
}
