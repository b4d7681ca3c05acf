use std::io::Read;
use std::pin::Pin;
use std::str::FromStr;

use futures::stream::{self, Stream};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::traits::OperationStream;
use crate::domain::{Error, Operation};

pub struct CsvReader<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> CsvReader<R> {
    pub fn new(reader: R) -> Self {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        Self { reader: Some(rdr) }
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "type")]
    kind: String,
    amount: Option<String>,
}

fn parse_amount(raw: &str) -> Result<Decimal, Error> {
    Decimal::from_str(raw).map_err(|e| Error::Ingestion(format!("Invalid amount {}: {}", raw, e)))
}

impl TryFrom<CsvRow> for Operation {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        let amount = row.amount.as_deref().filter(|a| !a.is_empty());
        let op = match (row.kind.to_ascii_lowercase().as_str(), amount) {
            ("deposit", Some(amount)) => Operation::Deposit {
                amount: parse_amount(amount)?,
            },
            ("withdraw" | "withdrawal", Some(amount)) => Operation::Withdraw {
                amount: parse_amount(amount)?,
            },
            ("close", None) => Operation::Close,
            ("deposit" | "withdraw" | "withdrawal", None) => {
                return Err(Error::Ingestion(format!("Missing amount for {}", row.kind)));
            }
            ("close", Some(amount)) => {
                return Err(Error::Ingestion(format!(
                    "Unexpected amount {} for close",
                    amount
                )));
            }
            (other, _) => {
                return Err(Error::Ingestion(format!(
                    "Invalid operation type: {}",
                    other
                )));
            }
        };

        Ok(op)
    }
}

impl<R: Read + Send + 'static> OperationStream for CsvReader<R> {
    type OpStream = Pin<Box<dyn Stream<Item = Result<Operation, Error>> + Send>>;

    fn stream(&mut self) -> Self::OpStream {
        // Take the reader so the returned stream owns everything it reads.
        let reader = match self.reader.take() {
            Some(r) => r,
            None => return Box::pin(stream::empty()),
        };

        let iter = reader
            .into_deserialize::<CsvRow>()
            .map(|row_res| match row_res {
                Ok(row) => Operation::try_from(row),
                Err(e) => Err(Error::Ingestion(format!(
                    "CSV deserialization error: {}",
                    e
                ))),
            });

        Box::pin(stream::iter(iter))
    }
}
