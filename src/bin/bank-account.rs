use anyhow::Result;
use bank_account::demo::{Scenario, Service};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut scenario = Scenario::default();
    if let Some(debit) = std::env::args().nth(1) {
        scenario = scenario.with_debit_arg(&debit)?;
    }

    let service = Service {
        scenario,
        output: &mut std::io::stdout(),
    };
    service.run()
}
