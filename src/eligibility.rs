//! Eligibility
//!
//! Per-discount eligibility outcomes for one checkout attempt, and a table
//! rendering of them. Amounts are reported as offered; nothing here sums or
//! stacks discounts.

use std::io;

use rust_decimal::Decimal;
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    discounts::{Discount, DiscountKind},
    payments::PurchaseContext,
    validation::ValidationEngine,
};

/// Errors that can occur when writing an eligibility report.
#[derive(Debug, Error)]
pub enum EligibilityError {
    /// IO error
    #[error("failed to write eligibility report")]
    Io(#[from] io::Error),
}

/// Eligibility outcome for a single candidate discount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eligibility {
    /// Caller-supplied label for the discount
    pub name: String,

    /// Discount kind
    pub kind: DiscountKind,

    /// Offered amount
    pub amount: Decimal,

    /// Combinability flag, if the discount has one
    pub combinable: Option<bool>,

    /// Rendered discount target, if any
    pub target: Option<String>,

    /// Whether the discount validated against the purchase
    pub eligible: bool,
}

/// Eligibility outcomes for a set of candidate discounts.
#[derive(Debug, Clone, Default)]
pub struct EligibilityReport {
    rows: SmallVec<[Eligibility; 4]>,
}

impl EligibilityReport {
    /// Validate each named discount against the purchase and collect the outcomes.
    pub fn evaluate<'d>(
        discounts: impl IntoIterator<Item = (&'d str, &'d Discount)>,
        engine: &ValidationEngine,
        context: &PurchaseContext,
    ) -> Self {
        let rows = discounts
            .into_iter()
            .map(|(name, discount)| Eligibility {
                name: name.to_string(),
                kind: discount.kind(),
                amount: discount.discount_amount(),
                combinable: discount.combine(),
                target: discount.coupon_entity().map(ToString::to_string),
                eligible: discount.validate_with(engine, context),
            })
            .collect();

        Self { rows }
    }

    /// Return all outcomes in evaluation order.
    pub fn rows(&self) -> &[Eligibility] {
        &self.rows
    }

    /// Iterate over the outcomes of eligible discounts.
    pub fn eligible(&self) -> impl Iterator<Item = &Eligibility> {
        self.rows.iter().filter(|row| row.eligible)
    }

    /// Writes the report as a table.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), EligibilityError> {
        let mut builder = Builder::default();

        builder.push_record(["Discount", "Type", "Amount", "Combine", "Target", "Eligible"]);

        for row in &self.rows {
            builder.push_record([
                row.name.clone(),
                row.kind.to_string(),
                row.amount.to_string(),
                optional_cell(row.combinable.map(yes_no)),
                optional_cell(row.target.clone()),
                yes_no(row.eligible),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::one(2), Alignment::right());
        table.modify(Rows::first(), Alignment::center());

        writeln!(out, "{table}")?;

        Ok(())
    }
}

fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

fn optional_cell(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}
