//! Savings/checking walkthrough: deposits, an overdraft, a transfer and the
//! monthly update.

use rust_decimal::Decimal;

use bookkeeping_ledger::{Account, format_amount};

pub fn run() -> anyhow::Result<()> {
    // 0.5% monthly interest; overdraft 500 with a $10 monthly fee.
    let mut savings = Account::savings("SA-001", "Aster", Decimal::new(1000, 0), Decimal::new(5, 3))?;
    let mut checking = Account::checking(
        "CA-001",
        "Adnan",
        Decimal::new(200, 0),
        Decimal::new(500, 0),
        Decimal::new(10, 0),
    )?;

    println!("Initial balances:");
    print_balance(&savings);
    print_balance(&checking);

    savings.deposit(Decimal::new(200, 0))?;
    checking.withdraw(Decimal::new(250, 0))?;
    savings.transfer_to(Decimal::new(100, 0), &mut checking)?;

    println!("\nMonthly updates:");
    println!("{}", savings.apply_monthly_update()?);
    println!("{}", checking.apply_monthly_update()?);

    println!("\nFinal balances:");
    print_balance(&savings);
    print_balance(&checking);

    for account in [&savings, &checking] {
        println!("\n{} transactions:", account.account_number());
        println!("{}", account.transactions().join("\n"));
    }

    tracing::info!(
        savings = %savings.balance(),
        checking = %checking.balance(),
        "ledger demo finished"
    );
    Ok(())
}

fn print_balance(account: &Account) {
    println!(
        "{} ({}): {}",
        account.account_number(),
        account.owner(),
        format_amount(account.balance())
    );
}
