//! Validation Engine
//!
//! Subset satisfaction: a discount applies when every constraint it requires
//! is among the constraints derived from the buyer's payment.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{
    constraints::{Constraint, ConstraintKind},
    payments::{PaymentSelection, PurchaseContext},
};

/// Which payment legs of a purchase are consulted during validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaymentScope {
    /// Only the first payment leg is consulted.
    #[default]
    PrimaryPayment,

    /// Satisfied when any single payment leg meets every required constraint.
    AnyPayment,
}

/// Decides whether required constraints are satisfied by a purchase context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationEngine {
    scope: PaymentScope,
}

impl ValidationEngine {
    /// Create an engine consulting the given payment scope.
    pub const fn new(scope: PaymentScope) -> Self {
        Self { scope }
    }

    /// Return the payment scope
    pub const fn scope(&self) -> PaymentScope {
        self.scope
    }

    /// Return whether `required` is satisfied by `context`.
    ///
    /// An empty requirement list is always satisfied. Otherwise every required
    /// constraint must equal one of the constraints derived from a consulted
    /// payment leg. Order and duplicates in `required` do not matter.
    pub fn satisfies(&self, required: &[Constraint], context: &PurchaseContext) -> bool {
        if required.is_empty() {
            return true;
        }

        let satisfied = match self.scope {
            PaymentScope::PrimaryPayment => is_subset(required, context.primary()),
            PaymentScope::AnyPayment => context
                .payments()
                .any(|payment| is_subset(required, payment)),
        };

        if satisfied {
            trace!(required = required.len(), scope = ?self.scope, "constraints satisfied");
        } else {
            let missing = self.unsatisfied(required, context);

            debug!(
                kinds = ?kinds_of(&missing),
                unsatisfied = ?missing,
                scope = ?self.scope,
                "constraints not satisfied"
            );
        }

        satisfied
    }

    /// Return the required constraints a consulted payment leg does not provide.
    ///
    /// With [`PaymentScope::AnyPayment`] the leg missing the fewest constraints
    /// is reported. Duplicates are reported once, in the order they were first
    /// required.
    pub fn unsatisfied(
        &self,
        required: &[Constraint],
        context: &PurchaseContext,
    ) -> SmallVec<[Constraint; 4]> {
        match self.scope {
            PaymentScope::PrimaryPayment => missing_from(required, context.primary()),
            PaymentScope::AnyPayment => context
                .payments()
                .map(|payment| missing_from(required, payment))
                .min_by_key(SmallVec::len)
                .unwrap_or_default(),
        }
    }
}

/// Distinct kinds of `constraints`, in first-seen order.
fn kinds_of(constraints: &[Constraint]) -> SmallVec<[ConstraintKind; 4]> {
    let mut kinds = SmallVec::<[ConstraintKind; 4]>::new();

    for kind in constraints.iter().map(Constraint::kind) {
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }

    kinds
}

fn is_subset(required: &[Constraint], payment: &PaymentSelection) -> bool {
    let derived = payment.constraints();

    required.iter().all(|constraint| derived.contains(constraint))
}

fn missing_from(required: &[Constraint], payment: &PaymentSelection) -> SmallVec<[Constraint; 4]> {
    let derived = payment.constraints();
    let mut missing = SmallVec::<[Constraint; 4]>::new();

    for constraint in required {
        if !derived.contains(constraint) && !missing.contains(constraint) {
            missing.push(constraint.clone());
        }
    }

    missing
}
