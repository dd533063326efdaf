//! Payments
//!
//! The buyer's selected payment legs, expressed in the same vocabulary as
//! [`Constraint`] so they can be compared against a discount's requirements.

use smallvec::SmallVec;
use thiserror::Error;

use crate::constraints::Constraint;

/// Errors that can occur while building a purchase context.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PurchaseContextError {
    /// No payment selections were provided.
    #[error("a purchase context needs at least one payment selection")]
    NoPayments,
}

/// One payment leg selected by the buyer.
///
/// Inputs are not validated; unexpected values simply fail to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentSelection {
    payment_method: String,
    payment_type: String,
    installment_count: i32,
    issuer: i32,
}

impl PaymentSelection {
    /// Create a payment selection from the raw values picked at checkout.
    pub fn new(
        payment_method: impl Into<String>,
        payment_type: impl Into<String>,
        installment_count: i32,
        issuer: i32,
    ) -> Self {
        Self {
            payment_method: payment_method.into(),
            payment_type: payment_type.into(),
            installment_count,
            issuer,
        }
    }

    /// Return the payment method code
    pub fn payment_method(&self) -> &str {
        &self.payment_method
    }

    /// Return the payment type code
    pub fn payment_type(&self) -> &str {
        &self.payment_type
    }

    /// Return the number of installments
    pub fn installment_count(&self) -> i32 {
        self.installment_count
    }

    /// Return the issuer id
    pub fn issuer(&self) -> i32 {
        self.issuer
    }

    /// Constraint derived from the payment method.
    pub fn payment_method_constraint(&self) -> Constraint {
        Constraint::PaymentMethod(self.payment_method.clone())
    }

    /// Constraint derived from the payment type.
    pub fn payment_type_constraint(&self) -> Constraint {
        Constraint::PaymentType(self.payment_type.clone())
    }

    /// Constraint derived from the installment count.
    pub fn installment_count_constraint(&self) -> Constraint {
        Constraint::InstallmentCount(self.installment_count)
    }

    /// Constraint derived from the issuer.
    pub fn issuer_constraint(&self) -> Constraint {
        Constraint::Issuer(self.issuer)
    }

    /// All four derived constraints: installment count, issuer, payment method
    /// and payment type, in that order.
    pub fn constraints(&self) -> [Constraint; 4] {
        [
            self.installment_count_constraint(),
            self.issuer_constraint(),
            self.payment_method_constraint(),
            self.payment_type_constraint(),
        ]
    }
}

/// The payment legs of a single checkout attempt.
///
/// Always holds at least one selection. Split payments add further legs after
/// the primary one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseContext {
    primary: PaymentSelection,
    additional: SmallVec<[PaymentSelection; 1]>,
}

impl PurchaseContext {
    /// Create a context with a single payment leg.
    pub fn new(primary: PaymentSelection) -> Self {
        Self {
            primary,
            additional: SmallVec::new(),
        }
    }

    /// Create a context from an ordered sequence of payment legs.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseContextError::NoPayments`] if `selections` is empty.
    pub fn from_selections(
        selections: impl IntoIterator<Item = PaymentSelection>,
    ) -> Result<Self, PurchaseContextError> {
        let mut selections = selections.into_iter();
        let primary = selections.next().ok_or(PurchaseContextError::NoPayments)?;

        Ok(Self {
            primary,
            additional: selections.collect(),
        })
    }

    /// Return the first payment leg.
    pub fn primary(&self) -> &PaymentSelection {
        &self.primary
    }

    /// Return the payment leg at `index`, if present.
    pub fn payment(&self, index: usize) -> Option<&PaymentSelection> {
        match index {
            0 => Some(&self.primary),
            n => self.additional.get(n - 1),
        }
    }

    /// Iterate over all payment legs in order.
    pub fn payments(&self) -> impl Iterator<Item = &PaymentSelection> {
        std::iter::once(&self.primary).chain(self.additional.iter())
    }

    /// Number of payment legs
    pub fn payment_count(&self) -> usize {
        self.additional.len() + 1
    }

    /// Whether the buyer split the purchase across several payments.
    pub fn is_split(&self) -> bool {
        !self.additional.is_empty()
    }
}

impl From<PaymentSelection> for PurchaseContext {
    fn from(selection: PaymentSelection) -> Self {
        Self::new(selection)
    }
}
