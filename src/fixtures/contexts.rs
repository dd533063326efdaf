//! Purchase Context Fixtures

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::payments::{PaymentSelection, PurchaseContext, PurchaseContextError};

/// Wrapper for purchase contexts in YAML
#[derive(Debug, Deserialize)]
pub struct ContextsFixture {
    /// Map of context key -> ordered payment legs
    pub contexts: FxHashMap<String, Vec<PaymentFixture>>,
}

/// A single payment leg from YAML
#[derive(Debug, Deserialize)]
pub struct PaymentFixture {
    /// Payment method code (e.g., "VISA")
    pub payment_method: String,

    /// Payment type code (e.g., "DEBITCARD")
    pub payment_type: String,

    /// Number of installments
    pub installments: i32,

    /// Issuer id
    pub issuer: i32,
}

impl From<PaymentFixture> for PaymentSelection {
    fn from(fixture: PaymentFixture) -> Self {
        PaymentSelection::new(
            fixture.payment_method,
            fixture.payment_type,
            fixture.installments,
            fixture.issuer,
        )
    }
}

/// Build a purchase context from fixture payment legs
///
/// # Errors
///
/// Returns [`PurchaseContextError::NoPayments`] if `payments` is empty.
pub fn try_into_context(
    payments: Vec<PaymentFixture>,
) -> Result<PurchaseContext, PurchaseContextError> {
    PurchaseContext::from_selections(payments.into_iter().map(PaymentSelection::from))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_split_payment_context() -> TestResult {
        let yaml = r"
contexts:
  split:
    - payment_method: VISA
      payment_type: CREDIT_CARD
      installments: 3
      issuer: 87
    - payment_method: ACCOUNT_MONEY
      payment_type: ACCOUNT_MONEY
      installments: 1
      issuer: 0
";
        let mut fixture: ContextsFixture = serde_norway::from_str(yaml)?;
        let payments = fixture.contexts.remove("split").unwrap_or_default();
        let context = try_into_context(payments)?;

        assert_eq!(context.payment_count(), 2);
        assert_eq!(context.primary().payment_method(), "VISA");
        assert_eq!(
            context.payment(1).map(PaymentSelection::installment_count),
            Some(1)
        );

        Ok(())
    }

    #[test]
    fn rejects_missing_fields() {
        let yaml = r"
payment_method: VISA
installments: 1
";
        let result: Result<PaymentFixture, _> = serde_norway::from_str(yaml);

        assert!(result.is_err());
    }
}
