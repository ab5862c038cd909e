use rust_decimal::Decimal;
use thiserror::Error;

/// The validation rule an amount failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmountRule {
    #[error("amount exceeds available balance of {balance}")]
    ExceedsBalance { balance: Decimal },
    #[error("amount must be positive")]
    Negative,
    #[error("amount must be positive and non-zero")]
    NotPositive,
    #[error("amount would overflow balance of {balance}")]
    Overflow { balance: Decimal },
}

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("account is blocked")]
    Blocked,
    #[error("invalid amount {amount}: {rule}")]
    InvalidAmount { amount: Decimal, rule: AmountRule },
    #[error("destination account must not be absent")]
    NullDestination,
}

#[derive(Debug)]
pub struct Account {
    owner_name: String,
    balance: Decimal,
    blocked: bool,
}

impl Account {
    pub fn new(owner_name: impl Into<String>, balance: Decimal) -> Self {
        Self {
            owner_name: owner_name.into(),
            balance,
            blocked: false,
        }
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn blocked(&self) -> bool {
        self.blocked
    }

    /// Withdraws `amount` from the balance.
    ///
    /// The balance check runs before the sign check, so the rule reported
    /// for a bad amount depends on that order. Zero is accepted.
    pub fn debit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        self.check_blocked()?;
        if amount > self.balance {
            return Err(AccountError::InvalidAmount {
                amount,
                rule: AmountRule::ExceedsBalance {
                    balance: self.balance,
                },
            });
        }
        if amount < Decimal::ZERO {
            return Err(AccountError::InvalidAmount {
                amount,
                rule: AmountRule::Negative,
            });
        }
        self.balance -= amount;
        tracing::debug!(owner = %self.owner_name, %amount, balance = %self.balance, "debited");
        Ok(())
    }

    /// Adds a strictly positive `amount` to the balance.
    pub fn credit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        self.check_blocked()?;
        if amount <= Decimal::ZERO {
            return Err(AccountError::InvalidAmount {
                amount,
                rule: AmountRule::NotPositive,
            });
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(AccountError::InvalidAmount {
                amount,
                rule: AmountRule::Overflow {
                    balance: self.balance,
                },
            })?;
        tracing::debug!(owner = %self.owner_name, %amount, balance = %self.balance, "credited");
        Ok(())
    }

    /// Debits `amount` from this account, then credits it to `destination`.
    ///
    /// There is no rollback between the two steps. A zero amount passes the
    /// debit (a no-op) and is then rejected by the destination's credit, so
    /// the call fails while both balances stay untouched.
    pub fn transfer(
        &mut self,
        destination: Option<&mut Account>,
        amount: Decimal,
    ) -> Result<(), AccountError> {
        let destination = destination.ok_or(AccountError::NullDestination)?;
        tracing::trace!(
            from = %self.owner_name,
            to = %destination.owner_name,
            %amount,
            "transfer started"
        );
        self.debit(amount)?;
        destination.credit(amount)?;
        Ok(())
    }

    fn check_blocked(&self) -> Result<(), AccountError> {
        match self.blocked {
            false => Ok(()),
            true => Err(AccountError::Blocked),
        }
    }

    // Nothing outside this module can block an account yet.
    #[cfg_attr(not(test), allow(dead_code))]
    fn block(&mut self) {
        self.blocked = true;
    }

    #[cfg_attr(not(test), allow(dead_code))]
    fn unblock(&mut self) {
        self.blocked = false;
    }
}
