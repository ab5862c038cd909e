use std::io::Write;

use csv::Writer;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Statement<'a> {
    pub owner: &'a str,
    pub balance: Decimal,
    pub blocked: bool,
}

impl<'a> From<&'a crate::Account> for Statement<'a> {
    fn from(acc: &'a crate::Account) -> Self {
        Self {
            owner: acc.owner_name(),
            balance: acc.balance(),
            blocked: acc.blocked(),
        }
    }
}

pub fn print_statement<W>(output: &mut W, statement: Statement<'_>) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    if let Err(err) = writer.serialize(statement) {
        anyhow::bail!("Failed to write to CSV: {err}")
    }
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}
