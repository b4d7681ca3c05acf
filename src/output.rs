use std::io::Write;

use crate::domain::{BankAccount, Error, HistoryOutput};

/// Writes an account's history as `type,amount,resulting_balance` rows.
#[derive(Debug)]
pub struct CsvOutput<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvOutput<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> Result<W, Error> {
        self.writer
            .into_inner()
            .map_err(|e| Error::IO(e.into_error()))
    }
}

impl<W: Write> HistoryOutput for CsvOutput<W> {
    fn write(&mut self, account: &BankAccount) -> Result<(), Error> {
        for tx in account.history() {
            self.writer.serialize(tx)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
