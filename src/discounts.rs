//! Discounts
//!
//! The discount variants a checkout can be offered, and the eligibility check
//! each one performs against the buyer's payment.

use std::fmt;

use rust_decimal::Decimal;

use crate::{
    constraints::Constraint, coupons::CouponEntity, payments::PurchaseContext,
    validation::ValidationEngine,
};

/// The kind of a [`Discount`], without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscountKind {
    /// [`Discount::None`]
    None,

    /// [`Discount::PayInFull`]
    PayInFull,

    /// [`Discount::Rebate`]
    Rebate,
}

impl fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DiscountKind::None => "none",
            DiscountKind::PayInFull => "a_vista",
            DiscountKind::Rebate => "rebate",
        };

        f.write_str(name)
    }
}

/// A discount for paying in a single installment ("a vista").
///
/// Carries the payment constraints the buyer must meet. Upstream data is
/// expected to include at least an installment count constraint, but an
/// empty list is accepted and always validates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayInFullDiscount {
    amount: Decimal,
    constraints: Vec<Constraint>,
    combinable: bool,
    coupon_entity: CouponEntity,
}

impl PayInFullDiscount {
    /// Create a new pay-in-full discount.
    pub fn new(
        amount: Decimal,
        constraints: impl IntoIterator<Item = Constraint>,
        combinable: bool,
        coupon_entity: CouponEntity,
    ) -> Self {
        Self {
            amount,
            constraints: constraints.into_iter().collect(),
            combinable,
            coupon_entity,
        }
    }

    /// Return the discount amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Return the required constraints
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Whether this discount may stack with others
    pub fn combinable(&self) -> bool {
        self.combinable
    }

    /// Return the discount target
    pub fn coupon_entity(&self) -> &CouponEntity {
        &self.coupon_entity
    }
}

/// An unconditional rebate. Rebates never carry payment constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebateDiscount {
    amount: Decimal,
    combinable: bool,
    coupon_entity: CouponEntity,
}

impl RebateDiscount {
    /// Create a new rebate.
    pub fn new(amount: Decimal, coupon_entity: CouponEntity, combinable: bool) -> Self {
        Self {
            amount,
            combinable,
            coupon_entity,
        }
    }

    /// Return the discount amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Whether this discount may stack with others
    pub fn combinable(&self) -> bool {
        self.combinable
    }

    /// Return the discount target
    pub fn coupon_entity(&self) -> &CouponEntity {
        &self.coupon_entity
    }
}

/// A discount offered to the buyer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discount {
    /// Nothing was offered. Has no amount, constraints, target or
    /// combinability, and always validates.
    None,

    /// Pay-in-full discount, valid only when its constraints are met.
    PayInFull(PayInFullDiscount),

    /// Unconditional rebate.
    Rebate(RebateDiscount),
}

impl Discount {
    /// Return the kind of discount.
    pub const fn kind(&self) -> DiscountKind {
        match self {
            Discount::None => DiscountKind::None,
            Discount::PayInFull(_) => DiscountKind::PayInFull,
            Discount::Rebate(_) => DiscountKind::Rebate,
        }
    }

    /// Return the discount amount. Zero when no discount was offered.
    pub fn discount_amount(&self) -> Decimal {
        match self {
            Discount::None => Decimal::ZERO,
            Discount::PayInFull(discount) => discount.amount(),
            Discount::Rebate(discount) => discount.amount(),
        }
    }

    /// Return the required constraints.
    ///
    /// `None` when no discount was offered; rebates report an empty list.
    pub fn constraints(&self) -> Option<&[Constraint]> {
        match self {
            Discount::None => None,
            Discount::PayInFull(discount) => Some(discount.constraints()),
            Discount::Rebate(_) => Some(&[]),
        }
    }

    /// Return the discount target, if any.
    pub fn coupon_entity(&self) -> Option<&CouponEntity> {
        match self {
            Discount::None => None,
            Discount::PayInFull(discount) => Some(discount.coupon_entity()),
            Discount::Rebate(discount) => Some(discount.coupon_entity()),
        }
    }

    /// Return whether this discount may stack with others, if known.
    ///
    /// Advisory only; deciding how discounts combine is up to the caller.
    pub fn combine(&self) -> Option<bool> {
        match self {
            Discount::None => None,
            Discount::PayInFull(discount) => Some(discount.combinable()),
            Discount::Rebate(discount) => Some(discount.combinable()),
        }
    }

    /// Return whether this discount is eligible for the given purchase.
    ///
    /// Only the first payment leg is consulted.
    pub fn validate(&self, context: &PurchaseContext) -> bool {
        self.validate_with(&ValidationEngine::default(), context)
    }

    /// Return whether this discount is eligible, using a configured engine.
    pub fn validate_with(&self, engine: &ValidationEngine, context: &PurchaseContext) -> bool {
        match self {
            Discount::None | Discount::Rebate(_) => true,
            Discount::PayInFull(discount) => engine.satisfies(discount.constraints(), context),
        }
    }
}

impl From<PayInFullDiscount> for Discount {
    fn from(discount: PayInFullDiscount) -> Self {
        Discount::PayInFull(discount)
    }
}

impl From<RebateDiscount> for Discount {
    fn from(discount: RebateDiscount) -> Self {
        Discount::Rebate(discount)
    }
}

#[cfg(test)]
mod tests {
    use crate::{payments::PaymentSelection, validation::PaymentScope};

    use super::*;

    fn visa_debit(installments: i32) -> PurchaseContext {
        PurchaseContext::new(PaymentSelection::new("VISA", "DEBITCARD", installments, 87))
    }

    fn pay_in_full(constraints: impl IntoIterator<Item = Constraint>) -> Discount {
        PayInFullDiscount::new(
            Decimal::from(45),
            constraints,
            true,
            CouponEntity::item("MLA12345"),
        )
        .into()
    }

    fn rebate() -> Discount {
        RebateDiscount::new(Decimal::from(67), CouponEntity::item("MLA999887"), true).into()
    }

    #[test]
    fn no_discount_reports_absence() {
        let discount = Discount::None;

        assert_eq!(discount.kind(), DiscountKind::None);
        assert_eq!(discount.discount_amount(), Decimal::ZERO);
        assert_eq!(discount.constraints(), None);
        assert_eq!(discount.coupon_entity(), None);
        assert_eq!(discount.combine(), None);
    }

    #[test]
    fn no_discount_always_validates() {
        assert!(Discount::None.validate(&visa_debit(1)));
        assert!(Discount::None.validate(&visa_debit(12)));
    }

    #[test]
    fn pay_in_full_exposes_construction_values() {
        let discount = pay_in_full([Constraint::InstallmentCount(1)]);

        assert_eq!(discount.kind(), DiscountKind::PayInFull);
        assert_eq!(discount.discount_amount(), Decimal::from(45));
        assert_eq!(
            discount.constraints(),
            Some([Constraint::InstallmentCount(1)].as_slice())
        );
        assert_eq!(
            discount.coupon_entity(),
            Some(&CouponEntity::item("MLA12345"))
        );
        assert_eq!(discount.combine(), Some(true));
    }

    #[test]
    fn rebate_has_no_constraints() {
        let discount = rebate();

        assert_eq!(discount.kind(), DiscountKind::Rebate);
        assert_eq!(discount.constraints(), Some([].as_slice()));
        assert_eq!(discount.discount_amount(), Decimal::from(67));
        assert_eq!(
            discount.coupon_entity(),
            Some(&CouponEntity::item("MLA999887"))
        );
        assert_eq!(discount.combine(), Some(true));
    }

    #[test]
    fn rebate_always_validates() {
        assert!(rebate().validate(&visa_debit(2)));
    }

    #[test]
    fn pay_in_full_validates_installment_count() {
        let discount = pay_in_full([Constraint::InstallmentCount(1)]);

        assert!(discount.validate(&visa_debit(1)));
        assert!(!discount.validate(&visa_debit(2)));
    }

    #[test]
    fn pay_in_full_without_constraints_always_validates() {
        let discount = pay_in_full(Vec::<Constraint>::new());

        assert_eq!(discount.constraints(), Some([].as_slice()));
        assert!(discount.validate(&visa_debit(12)));
    }

    #[test]
    fn validate_with_uses_engine_scope() -> testresult::TestResult {
        let discount = pay_in_full([Constraint::InstallmentCount(1)]);
        let context = PurchaseContext::from_selections([
            PaymentSelection::new("VISA", "CREDIT_CARD", 3, 87),
            PaymentSelection::new("ACCOUNT_MONEY", "ACCOUNT_MONEY", 1, 0),
        ])?;

        assert!(!discount.validate(&context));
        assert!(discount.validate_with(&ValidationEngine::new(PaymentScope::AnyPayment), &context));

        Ok(())
    }

    #[test]
    fn kind_display_uses_upstream_tags() {
        assert_eq!(DiscountKind::PayInFull.to_string(), "a_vista");
        assert_eq!(DiscountKind::Rebate.to_string(), "rebate");
        assert_eq!(DiscountKind::None.to_string(), "none");
    }
}
