//! Smoke-test scenario for [`crate::account`]: open an account, credit it,
//! try a debit and print what is left.

use std::io::Write;

use anyhow::{Context, Result};
use rust_decimal::Decimal;

use crate::account::Account;
use csv_printer::{Statement, print_statement};
pub mod csv_printer;

#[derive(Debug, Clone)]
pub struct Scenario {
    pub owner: String,
    pub initial_balance: Decimal,
    pub credit: Decimal,
    pub debit: Decimal,
}

impl Default for Scenario {
    /// The debit exceeds the credited balance, so the default run fails.
    fn default() -> Self {
        Self {
            owner: "Pr Mamadou Samba Camara".to_string(),
            initial_balance: Decimal::from(500_000),
            credit: Decimal::from(100_000),
            debit: Decimal::from(700_000),
        }
    }
}

impl Scenario {
    /// Replaces the debit amount with one given on the command line.
    pub fn with_debit_arg(self, arg: &str) -> Result<Self> {
        let debit = arg
            .trim()
            .parse::<Decimal>()
            .with_context(|| format!("Expected a debit amount, got `{arg}`"))?;
        Ok(Self { debit, ..self })
    }
}

pub struct Service<'w, W: 'w> {
    pub scenario: Scenario,
    pub output: &'w mut W,
}

impl<'w, W> Service<'w, W>
where
    W: Write + 'w,
{
    pub fn run(self) -> Result<()> {
        let Scenario {
            owner,
            initial_balance,
            credit,
            debit,
        } = self.scenario;
        tracing::info!(%owner, %initial_balance, "opening account");

        let mut acc = Account::new(owner, initial_balance);
        acc.credit(credit)
            .with_context(|| format!("Failed to credit {credit}"))?;
        acc.debit(debit)
            .with_context(|| format!("Failed to debit {debit}"))?;

        print_statement(self.output, Statement::from(&acc))
    }
}
