//! Discount Rules
//!
//! Checkout-time eligibility checks for discounts proposed by an upstream
//! pricing service. Each discount is re-validated against the payment method,
//! payment type, installment count and issuer the buyer actually selected.

pub mod constraints;
pub mod coupons;
pub mod discounts;
pub mod eligibility;
pub mod fixtures;
pub mod payments;
pub mod prelude;
pub mod utils;
pub mod validation;
