//! Integration tests for the validation rules of pay-in-full discounts.
//!
//! Every combination of a small pool of constraints is checked against a set
//! of payment selections, so the subset rule, order independence and purity
//! are exercised exhaustively over that pool.

use rust_decimal::Decimal;

use discount_rules::prelude::*;

fn pool() -> [Constraint; 8] {
    [
        Constraint::InstallmentCount(1),
        Constraint::InstallmentCount(2),
        Constraint::Issuer(87),
        Constraint::Issuer(90),
        Constraint::payment_method("VISA"),
        Constraint::payment_method("ELO"),
        Constraint::payment_type("CREDIT_CARD"),
        Constraint::payment_type("DEBITCARD"),
    ]
}

fn selections() -> [PaymentSelection; 5] {
    [
        PaymentSelection::new("VISA", "DEBITCARD", 1, 87),
        PaymentSelection::new("VISA", "CREDIT_CARD", 2, 90),
        PaymentSelection::new("ELO", "CREDIT_CARD", 1, 90),
        PaymentSelection::new("PAYPAL", "PAYPAL", 1, 87),
        PaymentSelection::new("", "", 0, 0),
    ]
}

/// Every subset of the pool, selected by bitmask.
fn subsets() -> impl Iterator<Item = Vec<Constraint>> {
    let pool = pool();

    (0u32..(1u32 << pool.len())).map(move |mask| {
        pool.iter()
            .enumerate()
            .filter(|&(idx, _)| mask & (1u32 << idx) != 0)
            .map(|(_, constraint)| constraint.clone())
            .collect()
    })
}

fn pay_in_full(constraints: Vec<Constraint>) -> Discount {
    PayInFullDiscount::new(
        Decimal::from(45),
        constraints,
        true,
        CouponEntity::item("MLA12345"),
    )
    .into()
}

#[test]
fn validate_holds_exactly_when_required_is_a_subset_of_the_payment() {
    for selection in selections() {
        let derived = selection.constraints();
        let context = PurchaseContext::new(selection.clone());

        for required in subsets() {
            let expected =
                required.is_empty() || required.iter().all(|constraint| derived.contains(constraint));

            let discount = pay_in_full(required.clone());

            assert_eq!(
                discount.validate(&context),
                expected,
                "required {required:?} against {selection:?}"
            );
        }
    }
}

#[test]
fn empty_requirements_validate_for_every_context() {
    let discounts = [
        Discount::None,
        pay_in_full(Vec::new()),
        RebateDiscount::new(Decimal::from(67), CouponEntity::item("MLA999887"), true).into(),
    ];

    for selection in selections() {
        let context = PurchaseContext::new(selection);

        for discount in &discounts {
            assert!(discount.validate(&context), "{discount:?} should always apply");
        }
    }
}

#[test]
fn permuting_required_constraints_never_changes_the_outcome() {
    for selection in selections() {
        let context = PurchaseContext::new(selection);

        for required in subsets().filter(|required| required.len() > 1) {
            let expected = pay_in_full(required.clone()).validate(&context);

            let mut reversed = required.clone();
            reversed.reverse();

            assert_eq!(pay_in_full(reversed).validate(&context), expected);

            for shift in 1..required.len() {
                let mut rotated = required.clone();
                rotated.rotate_left(shift);

                assert_eq!(pay_in_full(rotated).validate(&context), expected);
            }
        }
    }
}

#[test]
fn validate_is_idempotent() {
    for selection in selections() {
        let context = PurchaseContext::new(selection);

        for required in subsets() {
            let discount = pay_in_full(required);

            assert_eq!(discount.validate(&context), discount.validate(&context));
        }
    }
}

#[test]
fn unsatisfied_is_empty_exactly_when_validation_passes() {
    let engine = ValidationEngine::default();

    for selection in selections() {
        let context = PurchaseContext::new(selection);

        for required in subsets() {
            assert_eq!(
                engine.satisfies(&required, &context),
                engine.unsatisfied(&required, &context).is_empty()
            );
        }
    }
}

#[test]
fn any_payment_scope_matches_when_some_leg_satisfies() -> Result<(), PurchaseContextError> {
    let engine = ValidationEngine::new(PaymentScope::AnyPayment);
    let legs = selections();
    let context = PurchaseContext::from_selections(legs.clone())?;

    for required in subsets() {
        let expected = required.is_empty()
            || legs.iter().any(|leg| {
                let derived = leg.constraints();

                required.iter().all(|constraint| derived.contains(constraint))
            });

        assert_eq!(engine.satisfies(&required, &context), expected);
    }

    Ok(())
}

#[test]
fn validation_is_safe_to_share_across_threads() {
    let discount = pay_in_full(vec![Constraint::InstallmentCount(1)]);
    let context = PurchaseContext::new(PaymentSelection::new("VISA", "DEBITCARD", 1, 87));

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| discount.validate(&context)))
            .collect();

        for handle in handles {
            assert!(matches!(handle.join(), Ok(true)));
        }
    });
}
