use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bookkeeping_core::{AccountNumber, AggregateRoot, DomainError, DomainResult};

use crate::money::{Amount, format_amount, has_sub_cent_digits, round_cents};

/// Monthly interest rate of a savings account when none is given (1%).
pub const DEFAULT_INTEREST_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Overdraft limit of a checking account when none is given.
pub const DEFAULT_OVERDRAFT_LIMIT: Amount = Decimal::ZERO;

/// Monthly fee of a checking account when none is given.
pub const DEFAULT_MONTHLY_FEE: Amount = Decimal::from_parts(5, 0, 0, false, 0);

/// Terms of a savings account: earns interest, never overdraws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsTerms {
    /// Non-negative fraction applied to the balance once a month.
    pub interest_rate: Decimal,
}

impl Default for SavingsTerms {
    fn default() -> Self {
        Self {
            interest_rate: DEFAULT_INTEREST_RATE,
        }
    }
}

/// Terms of a checking account: may go negative down to the overdraft limit,
/// pays a fee every month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckingTerms {
    /// How far below zero a withdrawal may take the balance.
    pub overdraft_limit: Amount,
    pub monthly_fee: Amount,
}

impl Default for CheckingTerms {
    fn default() -> Self {
        Self {
            overdraft_limit: DEFAULT_OVERDRAFT_LIMIT,
            monthly_fee: DEFAULT_MONTHLY_FEE,
        }
    }
}

/// Account variant; decides the withdrawal floor and the monthly update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AccountKind {
    Savings(SavingsTerms),
    Checking(CheckingTerms),
}

impl AccountKind {
    pub fn savings(interest_rate: Decimal) -> Self {
        Self::Savings(SavingsTerms { interest_rate })
    }

    pub fn checking(overdraft_limit: Amount, monthly_fee: Amount) -> Self {
        Self::Checking(CheckingTerms {
            overdraft_limit,
            monthly_fee,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            AccountKind::Savings(_) => "savings",
            AccountKind::Checking(_) => "checking",
        }
    }

    /// Lowest balance a withdrawal may leave behind.
    pub fn floor(&self) -> Amount {
        match self {
            AccountKind::Savings(_) => Decimal::ZERO,
            AccountKind::Checking(terms) => -terms.overdraft_limit,
        }
    }

    fn validate(&self) -> DomainResult<()> {
        match self {
            AccountKind::Savings(terms) => {
                if terms.interest_rate < Decimal::ZERO {
                    return Err(DomainError::invalid_amount("interest rate cannot be negative"));
                }
            }
            AccountKind::Checking(terms) => {
                if terms.overdraft_limit < Decimal::ZERO {
                    return Err(DomainError::invalid_amount("overdraft limit cannot be negative"));
                }
                if terms.monthly_fee < Decimal::ZERO {
                    return Err(DomainError::invalid_amount("monthly fee cannot be negative"));
                }
                ensure_whole_cents(terms.overdraft_limit, "overdraft limit")?;
                ensure_whole_cents(terms.monthly_fee, "monthly fee")?;
            }
        }
        Ok(())
    }
}

/// Command: OpenAccount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenAccount {
    pub account_number: AccountNumber,
    pub owner: String,
    pub opening_balance: Amount,
    pub kind: AccountKind,
}

/// Aggregate root: Account.
///
/// The transaction log is append-only; every successful operation adds at
/// least one human-readable entry to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    account_number: AccountNumber,
    owner: String,
    balance: Amount,
    kind: AccountKind,
    transactions: Vec<String>,
    version: u64,
}

/// Serializable point-in-time view of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub account_number: AccountNumber,
    pub owner: String,
    pub balance: Amount,
    #[serde(flatten)]
    pub kind: AccountKind,
    pub transactions: Vec<String>,
}

impl Account {
    /// Open an account; the opening balance becomes the first log entry.
    pub fn open(cmd: OpenAccount) -> DomainResult<Self> {
        cmd.kind.validate()?;
        ensure_whole_cents(cmd.opening_balance, "opening balance")?;
        if cmd.opening_balance < cmd.kind.floor() {
            return Err(DomainError::invalid_amount(format!(
                "opening balance {} is below the {} account floor",
                format_amount(cmd.opening_balance),
                cmd.kind.name()
            )));
        }

        let mut account = Self {
            account_number: cmd.account_number,
            owner: cmd.owner,
            balance: cmd.opening_balance,
            kind: cmd.kind,
            transactions: Vec::new(),
            version: 0,
        };
        account.record(format!(
            "Account opened with balance {}",
            format_amount(account.balance)
        ));

        tracing::debug!(
            account = %account.account_number,
            kind = account.kind.name(),
            balance = %account.balance,
            "account opened"
        );
        Ok(account)
    }

    pub fn savings(
        account_number: impl Into<AccountNumber>,
        owner: impl Into<String>,
        opening_balance: Amount,
        interest_rate: Decimal,
    ) -> DomainResult<Self> {
        Self::open(OpenAccount {
            account_number: account_number.into(),
            owner: owner.into(),
            opening_balance,
            kind: AccountKind::savings(interest_rate),
        })
    }

    pub fn checking(
        account_number: impl Into<AccountNumber>,
        owner: impl Into<String>,
        opening_balance: Amount,
        overdraft_limit: Amount,
        monthly_fee: Amount,
    ) -> DomainResult<Self> {
        Self::open(OpenAccount {
            account_number: account_number.into(),
            owner: owner.into(),
            opening_balance,
            kind: AccountKind::checking(overdraft_limit, monthly_fee),
        })
    }

    pub fn account_number(&self) -> &AccountNumber {
        &self.account_number
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn interest_rate(&self) -> Option<Decimal> {
        match &self.kind {
            AccountKind::Savings(terms) => Some(terms.interest_rate),
            AccountKind::Checking(_) => None,
        }
    }

    pub fn overdraft_limit(&self) -> Option<Amount> {
        match &self.kind {
            AccountKind::Savings(_) => None,
            AccountKind::Checking(terms) => Some(terms.overdraft_limit),
        }
    }

    pub fn monthly_fee(&self) -> Option<Amount> {
        match &self.kind {
            AccountKind::Savings(_) => None,
            AccountKind::Checking(terms) => Some(terms.monthly_fee),
        }
    }

    /// Copy of the transaction log, oldest entry first.
    pub fn transactions(&self) -> Vec<String> {
        self.transactions.clone()
    }

    pub fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            account_number: self.account_number.clone(),
            owner: self.owner.clone(),
            balance: self.balance,
            kind: self.kind,
            transactions: self.transactions(),
        }
    }

    pub fn deposit(&mut self, amount: Amount) -> DomainResult<()> {
        ensure_positive(amount, "deposit amount must be positive")?;
        self.credit(amount)?;
        self.version += 1;

        tracing::debug!(account = %self.account_number, %amount, balance = %self.balance, "deposit applied");
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Amount) -> DomainResult<()> {
        ensure_positive(amount, "withdraw amount must be positive")?;
        self.debit(amount)?;
        self.version += 1;

        tracing::debug!(account = %self.account_number, %amount, balance = %self.balance, "withdrawal applied");
        Ok(())
    }

    /// Move `amount` from this account into `target`.
    ///
    /// The withdrawal follows this account's variant rules. When it is
    /// rejected, or the target balance cannot hold the amount, nothing changes
    /// on either side.
    pub fn transfer_to(&mut self, amount: Amount, target: &mut Account) -> DomainResult<()> {
        ensure_positive(amount, "transfer amount must be positive")?;
        target.balance.checked_add(amount).ok_or_else(balance_overflow)?;
        self.debit(amount)?;
        target.credit(amount)?;

        self.record(format!(
            "Transfer out: -{} -> {} to {}",
            format_amount(amount),
            format_amount(self.balance),
            target.account_number
        ));
        target.record(format!(
            "Transfer in: +{} from {} -> {}",
            format_amount(amount),
            self.account_number,
            format_amount(target.balance)
        ));
        self.version += 1;
        target.version += 1;

        tracing::debug!(
            from = %self.account_number,
            to = %target.account_number,
            %amount,
            "transfer applied"
        );
        Ok(())
    }

    /// Run the monthly policy of the account's variant and describe it.
    ///
    /// Savings accounts earn interest on a positive balance. Checking accounts
    /// are charged their fee even when that takes the balance past the
    /// overdraft floor. Fails only when the result does not fit an amount.
    pub fn apply_monthly_update(&mut self) -> DomainResult<String> {
        let note = match self.kind {
            AccountKind::Savings(terms) => {
                let interest = self
                    .balance
                    .checked_mul(terms.interest_rate)
                    .map(round_cents)
                    .ok_or_else(balance_overflow)?;
                if interest > Decimal::ZERO {
                    self.credit(interest)?;
                    format!(
                        "Monthly interest applied: {} at rate {}",
                        format_amount(interest),
                        terms.interest_rate
                    )
                } else if self.balance <= Decimal::ZERO {
                    "No interest (balance zero or negative)".to_string()
                } else if terms.interest_rate.is_zero() {
                    "No interest (interest rate is zero)".to_string()
                } else {
                    "No interest (amount below one cent)".to_string()
                }
            }
            AccountKind::Checking(terms) => {
                self.balance = self
                    .balance
                    .checked_sub(terms.monthly_fee)
                    .ok_or_else(balance_overflow)?;
                format!(
                    "Monthly fee charged: -{} -> {}",
                    format_amount(terms.monthly_fee),
                    format_amount(self.balance)
                )
            }
        };
        self.record(note.clone());
        self.version += 1;

        tracing::debug!(account = %self.account_number, balance = %self.balance, "monthly update applied");
        Ok(note)
    }

    /// Replace the monthly fee of a checking account.
    pub fn set_monthly_fee(&mut self, amount: Amount) -> DomainResult<()> {
        let AccountKind::Checking(terms) = &mut self.kind else {
            return Err(DomainError::invariant(
                "monthly fee applies to checking accounts only",
            ));
        };
        if amount < Decimal::ZERO {
            return Err(DomainError::invalid_amount("monthly fee cannot be negative"));
        }
        ensure_whole_cents(amount, "monthly fee")?;
        terms.monthly_fee = amount;

        self.record(format!("Monthly fee set to {}", format_amount(amount)));
        self.version += 1;
        Ok(())
    }

    fn credit(&mut self, amount: Amount) -> DomainResult<()> {
        self.balance = self.balance.checked_add(amount).ok_or_else(balance_overflow)?;
        self.record(format!(
            "Deposit: +{} -> {}",
            format_amount(amount),
            format_amount(self.balance)
        ));
        Ok(())
    }

    fn debit(&mut self, amount: Amount) -> DomainResult<()> {
        let remaining = self.balance.checked_sub(amount).ok_or_else(balance_overflow)?;
        if remaining < self.kind.floor() {
            tracing::debug!(
                account = %self.account_number,
                %amount,
                balance = %self.balance,
                "withdrawal rejected"
            );
            return Err(match self.kind {
                AccountKind::Savings(_) => DomainError::InsufficientFunds,
                AccountKind::Checking(_) => DomainError::OverdraftExceeded,
            });
        }

        self.balance = remaining;
        self.record(format!(
            "Withdraw: -{} -> {}",
            format_amount(amount),
            format_amount(self.balance)
        ));
        Ok(())
    }

    fn record(&mut self, note: String) {
        self.transactions.push(note);
    }
}

impl AggregateRoot for Account {
    type Id = AccountNumber;

    fn id(&self) -> &Self::Id {
        &self.account_number
    }

    fn version(&self) -> u64 {
        self.version
    }
}

fn balance_overflow() -> DomainError {
    DomainError::invalid_amount("balance would overflow")
}

fn ensure_positive(amount: Amount, msg: &str) -> DomainResult<()> {
    if amount <= Decimal::ZERO {
        return Err(DomainError::invalid_amount(msg));
    }
    ensure_whole_cents(amount, "amount")
}

fn ensure_whole_cents(amount: Amount, what: &str) -> DomainResult<()> {
    if has_sub_cent_digits(amount) {
        return Err(DomainError::invalid_amount(format!(
            "{what} {amount} is finer than one cent"
        )));
    }
    Ok(())
}
