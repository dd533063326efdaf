//! Constraints
//!
//! Eligibility conditions a discount can require of the buyer's payment.

use std::fmt;

/// A single eligibility condition.
///
/// Equality is structural: two constraints are equal when they are the same
/// variant carrying the same value. Validation relies on this to test set
/// membership against the constraints derived from a payment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// Number of installments the payment is split into.
    InstallmentCount(i32),

    /// Payment method code (e.g. `VISA`, `ELO`).
    PaymentMethod(String),

    /// Payment type code (e.g. `CREDIT_CARD`, `DEBITCARD`).
    PaymentType(String),

    /// Card issuer identifier.
    Issuer(i32),
}

/// The kind of a [`Constraint`], without its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// [`Constraint::InstallmentCount`]
    InstallmentCount,

    /// [`Constraint::PaymentMethod`]
    PaymentMethod,

    /// [`Constraint::PaymentType`]
    PaymentType,

    /// [`Constraint::Issuer`]
    Issuer,
}

impl Constraint {
    /// Create a payment method constraint.
    pub fn payment_method(code: impl Into<String>) -> Self {
        Self::PaymentMethod(code.into())
    }

    /// Create a payment type constraint.
    pub fn payment_type(code: impl Into<String>) -> Self {
        Self::PaymentType(code.into())
    }

    /// Return the kind of this constraint.
    pub const fn kind(&self) -> ConstraintKind {
        match self {
            Constraint::InstallmentCount(_) => ConstraintKind::InstallmentCount,
            Constraint::PaymentMethod(_) => ConstraintKind::PaymentMethod,
            Constraint::PaymentType(_) => ConstraintKind::PaymentType,
            Constraint::Issuer(_) => ConstraintKind::Issuer,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::InstallmentCount(count) => write!(f, "installments={count}"),
            Constraint::PaymentMethod(code) => write!(f, "payment_method={code}"),
            Constraint::PaymentType(code) => write!(f, "payment_type={code}"),
            Constraint::Issuer(id) => write!(f, "issuer={id}"),
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConstraintKind::InstallmentCount => "installments",
            ConstraintKind::PaymentMethod => "payment_method",
            ConstraintKind::PaymentType => "payment_type",
            ConstraintKind::Issuer => "issuer",
        };

        f.write_str(name)
    }
}
