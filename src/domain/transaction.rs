use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    Open,
    Deposit,
    Withdraw,
    Close,
}

/// One entry of an account's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Decimal,            // negative for withdrawals, zero for close
    pub resulting_balance: Decimal, // balance right after the operation
}

impl core::fmt::Display for Transaction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{:?},amount={},balance={}",
            self.kind, self.amount, self.resulting_balance
        )
    }
}

/// A request to mutate an account, as read from a replay script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Deposit { amount: Decimal },
    Withdraw { amount: Decimal },
    Close,
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Operation::Deposit { amount } => write!(f, "deposit {}", amount),
            Operation::Withdraw { amount } => write!(f, "withdraw {}", amount),
            Operation::Close => write!(f, "close"),
        }
    }
}
