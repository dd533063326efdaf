//! Utils

use clap::Parser;

use crate::validation::{PaymentScope, ValidationEngine};

/// Arguments for the validation example
#[derive(Debug, Parser)]
pub struct ExampleValidateArgs {
    /// Fixture set holding the discounts and purchase contexts
    #[clap(short, long, default_value = "checkout")]
    pub fixture: String,

    /// Base directory of the fixture files
    #[clap(short, long, default_value = "./fixtures")]
    pub base_path: String,

    /// Purchase context to validate against; all contexts when omitted
    #[clap(short, long)]
    pub context: Option<String>,

    /// Consult every payment leg instead of only the first one
    #[clap(short, long)]
    pub all_payments: bool,

    /// Default log level, overridden by `RUST_LOG`
    #[clap(short, long, default_value = "info")]
    pub log_level: String,
}

impl ExampleValidateArgs {
    /// Build the validation engine selected by the arguments.
    pub fn engine(&self) -> ValidationEngine {
        if self.all_payments {
            ValidationEngine::new(PaymentScope::AnyPayment)
        } else {
            ValidationEngine::default()
        }
    }
}
