use futures::StreamExt;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::domain::{
    BankAccount, Error, Operation,
    traits::{DeadLetterQueue, HistoryOutput, OperationStream},
};

/// Replays a stream of operations against one account.
#[derive(Debug)]
pub struct Engine<I, D>
where
    I: OperationStream,
    D: DeadLetterQueue,
{
    ingestion: I,
    account: BankAccount,
    dlq: D,
}

impl<I, D> Engine<I, D>
where
    I: OperationStream,
    D: DeadLetterQueue,
{
    pub fn new(ingestion: I, account: BankAccount, dlq: D) -> Self {
        Self {
            ingestion,
            account,
            dlq,
        }
    }

    pub async fn process(&mut self) -> Result<(), Error> {
        info!(account = %self.account.account_number(), "replay started");
        let mut res = self.ingestion.stream();

        while let Some(op) = res.next().await {
            match op {
                Ok(op) => {
                    if let Err(e) = self.apply_operation(op) {
                        self.dlq.report(&e);
                    }
                }
                Err(e) => self.dlq.report(&e),
            }
        }

        info!(
            account = %self.account.account_number(),
            balance = %self.account.balance(),
            active = self.account.is_active(),
            "replay finished"
        );
        Ok(())
    }

    fn apply_operation(&mut self, op: Operation) -> Result<Decimal, Error> {
        debug!(%op, "applying operation");
        match op {
            Operation::Deposit { amount } => self.account.deposit(amount),
            Operation::Withdraw { amount } => self.account.withdraw(amount),
            Operation::Close => self.account.close(),
        }
    }

    pub fn account(&self) -> &BankAccount {
        &self.account
    }

    pub fn dlq(&self) -> &D {
        &self.dlq
    }

    pub fn flush<O: HistoryOutput>(&self, output: &mut O) -> Result<(), Error> {
        output.write(&self.account)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::domain::TransactionKind;
    use crate::ingestion::CsvReader;

    #[derive(Default)]
    struct CollectingDLQ {
        reports: RefCell<Vec<String>>,
    }

    impl DeadLetterQueue for CollectingDLQ {
        fn report(&self, error: &Error) {
            self.reports.borrow_mut().push(error.to_string());
        }
    }

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn engine(script: &'static str) -> Engine<CsvReader<&'static [u8]>, CollectingDLQ> {
        Engine::new(
            CsvReader::new(script.as_bytes()),
            BankAccount::with_balance("12345", "John Doe", d("100.0")),
            CollectingDLQ::default(),
        )
    }

    #[tokio::test]
    async fn applies_operations_in_order() {
        let mut engine = engine("type,amount\ndeposit,50.0\nwithdraw,30\nclose,\n");
        engine.process().await.unwrap();

        let account = engine.account();
        assert_eq!(account.balance(), d("120.0"));
        assert!(!account.is_active());

        let kinds: Vec<TransactionKind> = account.history().iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TransactionKind::Open,
                TransactionKind::Deposit,
                TransactionKind::Withdraw,
                TransactionKind::Close,
            ]
        );
        assert!(engine.dlq.reports.borrow().is_empty());
    }

    #[tokio::test]
    async fn rejected_operations_go_to_the_dlq() {
        let mut engine = engine(
            "type,amount\n\
             withdraw,150.0\n\
             deposit,-5\n\
             bogus,1\n\
             deposit,25\n\
             close,\n\
             deposit,10\n\
             close,\n",
        );
        engine.process().await.unwrap();

        assert_eq!(engine.account().balance(), d("125.0"));
        assert_eq!(engine.account().history().len(), 3);

        let reports = engine.dlq.reports.borrow();
        assert_eq!(reports.len(), 5);
        assert!(reports[0].starts_with("Cannot withdraw 150.0"));
        assert!(reports[1].starts_with("Invalid argument"));
        assert!(reports[2].starts_with("Ingestion failed"));
        assert!(reports[3].starts_with("Illegal state"));
        assert!(reports[4].starts_with("Illegal state"));
    }

    #[tokio::test]
    async fn overflowing_deposit_is_dead_lettered() {
        let mut engine = engine(
            "type,amount\n\
             deposit,79228162514264337593543950335\n\
             deposit,1\n",
        );
        engine.process().await.unwrap();

        assert_eq!(engine.account().balance(), d("101.0"));
        assert_eq!(engine.account().history().len(), 2);

        let reports = engine.dlq().reports.borrow();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].starts_with("Arithmetic overflow"));
    }
}
