use std::cell::Cell;

use tracing::warn;

use crate::domain::{DeadLetterQueue, Error};

/// Reports rejected operations on stderr and keeps a count of them.
#[derive(Default, Debug)]
pub struct StdErrDLQ {
    rejected: Cell<usize>,
}

impl StdErrDLQ {
    pub fn rejected(&self) -> usize {
        self.rejected.get()
    }
}

impl DeadLetterQueue for StdErrDLQ {
    fn report(&self, error: &Error) {
        let seq = self.rejected.get() + 1;
        self.rejected.set(seq);
        warn!(seq, %error, "operation dead-lettered");
        eprintln!("DLQ Report #{} - Error: {}", seq, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_every_report() {
        let dlq = StdErrDLQ::default();
        assert_eq!(dlq.rejected(), 0);

        dlq.report(&Error::DivisionByZero);
        dlq.report(&Error::IllegalState("Account is already closed".to_string()));
        assert_eq!(dlq.rejected(), 2);
    }
}
