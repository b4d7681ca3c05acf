use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::Error;

pub const USAGE: &str = "usage: teller <script.csv> <account-number> <owner-name> [initial-balance]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub script: PathBuf,
    pub account_number: String,
    pub owner_name: String,
    pub initial_balance: Decimal,
}

impl Config {
    /// Builds the configuration from positional arguments, program name excluded.
    pub fn from_args<I>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut next = |name: &str| {
            args.next()
                .ok_or_else(|| Error::Config(format!("missing {}; {}", name, USAGE)))
        };

        let script = PathBuf::from(next("script path")?);
        let account_number = next("account number")?;
        let owner_name = next("owner name")?;
        let initial_balance = match next("initial balance") {
            Ok(raw) => Decimal::from_str(raw.trim())
                .map_err(|e| Error::Config(format!("invalid initial balance {}: {}", raw, e)))?,
            Err(_) => Decimal::ZERO,
        };

        if let Some(extra) = args.next() {
            return Err(Error::Config(format!("unexpected argument {}; {}", extra, USAGE)));
        }

        Ok(Self {
            script,
            account_number,
            owner_name,
            initial_balance,
        })
    }
}
