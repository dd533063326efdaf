//! Discount Rules prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    constraints::{Constraint, ConstraintKind},
    coupons::{CouponEntity, ItemId},
    discounts::{Discount, DiscountKind, PayInFullDiscount, RebateDiscount},
    eligibility::{Eligibility, EligibilityError, EligibilityReport},
    payments::{PaymentSelection, PurchaseContext, PurchaseContextError},
    validation::{PaymentScope, ValidationEngine},
};
