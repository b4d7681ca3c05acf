use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::{Error, Transaction, TransactionKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountState {
    Active,
    Closed, // terminal
}

/// A single in-memory account.
///
/// The balance only changes through [`BankAccount::deposit`] and
/// [`BankAccount::withdraw`], and every change is appended to the history.
/// Failed operations leave the account untouched.
#[derive(Debug, Clone)]
pub struct BankAccount {
    account_number: String,
    owner_name: String,
    balance: Decimal,
    state: AccountState,
    history: Vec<Transaction>,
}

impl BankAccount {
    pub fn new(account_number: impl Into<String>, owner_name: impl Into<String>) -> Self {
        Self::with_balance(account_number, owner_name, Decimal::ZERO)
    }

    pub fn with_balance(
        account_number: impl Into<String>,
        owner_name: impl Into<String>,
        initial_balance: Decimal,
    ) -> Self {
        let mut account = Self {
            account_number: account_number.into(),
            owner_name: owner_name.into(),
            balance: initial_balance,
            state: AccountState::Active,
            history: Vec::new(),
        };
        account.record(TransactionKind::Open, initial_balance);
        account
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn state(&self) -> AccountState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == AccountState::Active
    }

    /// Returns a snapshot of the history; the account keeps its own copy.
    pub fn history(&self) -> Vec<Transaction> {
        self.history.clone()
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, Error> {
        self.ensure_active("Cannot deposit to a closed account")?;
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidArgument(
                "Deposit amount must be positive".to_string(),
            ));
        }

        self.balance = self.balance.checked_add(amount).ok_or_else(|| {
            Error::Overflow(format!("Deposit of {} exceeds the maximum balance", amount))
        })?;
        self.record(TransactionKind::Deposit, amount);
        Ok(self.balance)
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, Error> {
        self.ensure_active("Cannot withdraw from a closed account")?;
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidArgument(
                "Withdrawal amount must be positive".to_string(),
            ));
        }
        if amount > self.balance {
            return Err(Error::InsufficientFunds {
                requested: amount,
                balance: self.balance,
            });
        }

        self.balance = self.balance.checked_sub(amount).ok_or_else(|| {
            Error::Overflow(format!("Withdrawal of {} exceeds the minimum balance", amount))
        })?;
        self.record(TransactionKind::Withdraw, -amount);
        Ok(self.balance)
    }

    pub fn close(&mut self) -> Result<Decimal, Error> {
        self.ensure_active("Account is already closed")?;

        self.state = AccountState::Closed;
        self.record(TransactionKind::Close, Decimal::ZERO);
        Ok(self.balance)
    }

    fn ensure_active(&self, message: &str) -> Result<(), Error> {
        match self.state {
            AccountState::Active => Ok(()),
            AccountState::Closed => Err(Error::IllegalState(message.to_string())),
        }
    }

    fn record(&mut self, kind: TransactionKind, amount: Decimal) {
        let tx = Transaction {
            kind,
            amount,
            resulting_balance: self.balance,
        };
        debug!(account = %self.account_number, %tx, "recorded transaction");
        self.history.push(tx);
    }
}
