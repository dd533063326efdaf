//! Validation Example
//!
//! Loads a fixture set and prints which discounts each purchase context is
//! eligible for.
//!
//! Use `-f` to load a fixture set by name
//! Use `-c` to validate against a single purchase context
//! Use `-a` to consult every payment leg instead of only the first one

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use discount_rules::{
    eligibility::EligibilityReport, fixtures::Fixture, utils::ExampleValidateArgs,
};

/// Validation Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = ExampleValidateArgs::parse();

    tracing_subscriber::fmt()
        .compact()
        .with_target(true)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))?;

    let mut fixture = Fixture::with_base_path(&args.base_path);
    fixture
        .load_discounts(&args.fixture)?
        .load_contexts(&args.fixture)?;

    let engine = args.engine();
    let discounts = fixture.discounts();

    let context_names = match args.context.as_deref() {
        Some(name) => vec![name.to_string()],
        None => {
            let mut names = fixture.context_names();
            names.sort_unstable();
            names
        }
    };

    info!(
        discounts = discounts.len(),
        contexts = context_names.len(),
        scope = ?engine.scope(),
        "validating fixture set {}",
        args.fixture
    );

    for name in context_names {
        let context = fixture.context(&name)?;
        let report = EligibilityReport::evaluate(discounts.iter().copied(), &engine, context);

        println!("\n{name} ({} payment leg(s))", context.payment_count());

        report.write_to(io::stdout().lock())?;
    }

    Ok(())
}
