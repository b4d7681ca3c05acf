use std::io::Write;

use assert_cmd::Command;
use predicates as pred;
use predicates::prelude::PredicateBooleanExt;
use rust_decimal::Decimal;
use tempfile::NamedTempFile;

use teller::{BankAccount, Error, TransactionKind};

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn end_to_end_replays_script_and_prints_history() {
    // 100.0 + 50.0 - 30 = 120.0, the overdraft and the post-close deposit
    // are rejected.
    let mut file = NamedTempFile::new().expect("create temp file");
    writeln!(
        file,
        "type, amount\n\
    deposit, 50.0\n\
    withdraw, 30\n\
    withdraw, 500\n\
    close,\n\
    deposit, 10"
    )
    .unwrap();

    let exe = env!("CARGO_BIN_EXE_teller");
    let mut cmd = Command::new(exe);
    cmd.arg(file.path()).arg("12345").arg("John Doe").arg("100.0");

    cmd.assert()
        .success()
        .stdout(pred::str::contains("type,amount,resulting_balance"))
        .stdout(pred::str::contains("OPEN,100.0,100.0"))
        .stdout(pred::str::contains("DEPOSIT,50.0,150.0"))
        .stdout(pred::str::contains("WITHDRAW,-30,120.0"))
        .stdout(pred::str::contains("CLOSE,0,120.0"))
        .stdout(pred::str::contains("500").not())
        .stderr(pred::str::contains("Cannot withdraw 500"))
        .stderr(pred::str::contains("Cannot deposit to a closed account"));
}

#[test]
fn overflowing_deposit_is_dead_lettered_not_fatal() {
    let mut file = NamedTempFile::new().expect("create temp file");
    writeln!(
        file,
        "type, amount\n\
    deposit, 79228162514264337593543950335\n\
    deposit, 2"
    )
    .unwrap();

    let exe = env!("CARGO_BIN_EXE_teller");
    Command::new(exe)
        .arg(file.path())
        .arg("1")
        .arg("x")
        .arg("1")
        .assert()
        .success()
        .stdout(pred::str::contains("DEPOSIT,2,3"))
        .stderr(pred::str::contains("DLQ Report #1 - Error: Arithmetic overflow"));
}

#[test]
fn missing_arguments_fail_with_usage() {
    let exe = env!("CARGO_BIN_EXE_teller");
    Command::new(exe)
        .arg("ops.csv")
        .assert()
        .failure()
        .stderr(pred::str::contains("usage: teller"));
}

#[test]
fn missing_script_fails() {
    let exe = env!("CARGO_BIN_EXE_teller");
    Command::new(exe)
        .args(["/nonexistent/ops.csv", "12345", "John Doe"])
        .assert()
        .failure();
}

#[test]
fn library_account_lifecycle() {
    let mut account = BankAccount::with_balance("67890", "Jane Smith", d("200.0"));
    assert_eq!(account.withdraw(d("50.0")).unwrap(), d("150.0"));
    assert_eq!(teller::factorial(5).unwrap(), 120);
    assert!(matches!(teller::divide(1, 0), Err(Error::DivisionByZero)));

    account.close().unwrap();
    let kinds: Vec<_> = account.history().into_iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        [
            TransactionKind::Open,
            TransactionKind::Withdraw,
            TransactionKind::Close
        ]
    );
}
