//! End-to-end walk through a month of activity on two accounts.

use bookkeeping_core::{AggregateRoot, DomainError};
use bookkeeping_ledger::{Account, AccountKind, OpenAccount, format_amount};
use rust_decimal::Decimal;

fn usd(units: i64) -> Decimal {
    Decimal::new(units, 0)
}

#[test]
fn savings_and_checking_month() {
    let mut savings = Account::open(OpenAccount {
        account_number: "SA-001".into(),
        owner: "Aster".to_string(),
        opening_balance: usd(1000),
        kind: AccountKind::savings(Decimal::new(5, 3)),
    })
    .unwrap();
    let mut checking = Account::open(OpenAccount {
        account_number: "CA-001".into(),
        owner: "Adnan".to_string(),
        opening_balance: usd(200),
        kind: AccountKind::checking(usd(500), usd(10)),
    })
    .unwrap();

    savings.deposit(usd(200)).unwrap();
    checking.withdraw(usd(250)).unwrap();
    savings.transfer_to(usd(100), &mut checking).unwrap();

    assert_eq!(
        savings.apply_monthly_update().unwrap(),
        "Monthly interest applied: $5.50 at rate 0.005"
    );
    assert_eq!(
        checking.apply_monthly_update().unwrap(),
        "Monthly fee charged: -$10.00 -> $40.00"
    );

    assert_eq!(format_amount(savings.balance()), "$1105.50");
    assert_eq!(format_amount(checking.balance()), "$40.00");

    assert_eq!(
        savings.transactions(),
        vec![
            "Account opened with balance $1000.00",
            "Deposit: +$200.00 -> $1200.00",
            "Withdraw: -$100.00 -> $1100.00",
            "Transfer out: -$100.00 -> $1100.00 to CA-001",
            "Deposit: +$5.50 -> $1105.50",
            "Monthly interest applied: $5.50 at rate 0.005",
        ]
    );
    assert_eq!(
        checking.transactions(),
        vec![
            "Account opened with balance $200.00",
            "Withdraw: -$250.00 -> $-50.00",
            "Deposit: +$100.00 -> $50.00",
            "Transfer in: +$100.00 from SA-001 -> $50.00",
            "Monthly fee charged: -$10.00 -> $40.00",
        ]
    );

    assert_eq!(savings.version(), 3);
    assert_eq!(checking.version(), 3);
}

#[test]
fn checking_cannot_exceed_overdraft_through_transfer() {
    let mut checking = Account::checking("CA-002", "Adnan", usd(0), usd(50), usd(5)).unwrap();
    let mut savings = Account::savings("SA-002", "Aster", usd(0), Decimal::ZERO).unwrap();

    checking.transfer_to(usd(50), &mut savings).unwrap();
    assert_eq!(
        checking.transfer_to(usd(1), &mut savings),
        Err(DomainError::OverdraftExceeded)
    );
    assert_eq!(checking.balance(), usd(-50));
    assert_eq!(savings.balance(), usd(50));
}
