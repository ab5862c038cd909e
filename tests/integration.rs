use std::str::from_utf8;

use bank_account::{
    AccountError, AmountRule,
    demo::{Scenario, Service},
};
use rust_decimal::Decimal;

#[test]
fn default_scenario_rejects_overdraft() {
    let mut output = Vec::new();
    let service = Service {
        scenario: Scenario::default(),
        output: &mut output,
    };
    let err = service.run().unwrap_err();
    let account_err = err.downcast_ref::<AccountError>().unwrap();
    assert!(matches!(
        account_err,
        AccountError::InvalidAmount {
            rule: AmountRule::ExceedsBalance { .. },
            ..
        }
    ));
    assert!(output.is_empty());
}

#[test]
fn scenario_prints_remaining_balance() {
    let mut output = Vec::new();
    let service = Service {
        scenario: Scenario {
            debit: Decimal::from(500_000),
            ..Default::default()
        },
        output: &mut output,
    };
    service.run().unwrap();
    let lines: Vec<&str> = from_utf8(&output).unwrap().lines().collect();
    assert_eq!(
        lines,
        ["owner,balance,blocked", "Pr Mamadou Samba Camara,100000,false"]
    );
}

#[test]
fn scenario_rejects_zero_credit() {
    let mut output = Vec::new();
    let service = Service {
        scenario: Scenario {
            credit: Decimal::ZERO,
            ..Default::default()
        },
        output: &mut output,
    };
    let err = service.run().unwrap_err();
    assert!(err.to_string().contains("Failed to credit 0"));
    assert!(matches!(
        err.downcast_ref::<AccountError>(),
        Some(AccountError::InvalidAmount {
            rule: AmountRule::NotPositive,
            ..
        })
    ));
}

#[test]
fn debit_arg_drives_the_run() {
    let mut output = Vec::new();
    let service = Service {
        scenario: Scenario::default().with_debit_arg("600000").unwrap(),
        output: &mut output,
    };
    service.run().unwrap();
    assert_eq!(
        from_utf8(&output).unwrap(),
        "owner,balance,blocked\nPr Mamadou Samba Camara,0,false\n"
    );
}
