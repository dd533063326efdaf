//! Discount Fixtures

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{
    constraints::Constraint,
    coupons::CouponEntity,
    discounts::{Discount, PayInFullDiscount, RebateDiscount},
    fixtures::FixtureError,
};

/// Wrapper for discounts in YAML
#[derive(Debug, Deserialize)]
pub struct DiscountsFixture {
    /// Map of discount key -> discount fixture
    pub discounts: FxHashMap<String, DiscountFixture>,
}

/// Discount payload as provided by the upstream pricing service
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiscountFixture {
    /// No discount offered
    None,

    /// Pay-in-full discount
    AVista {
        /// Discount amount (e.g., "45" or "12.50")
        amount: String,

        /// Required payment constraints; omitted means none
        #[serde(default)]
        constraints: Vec<ConstraintFixture>,

        /// Whether the discount may stack with others
        combine: bool,

        /// Discount target
        entity: CouponEntityFixture,
    },

    /// Unconditional rebate
    Rebate {
        /// Discount amount (e.g., "67")
        amount: String,

        /// Whether the discount may stack with others
        combine: bool,

        /// Discount target
        entity: CouponEntityFixture,
    },
}

/// Constraint entry, e.g. `installments: 1` or `payment_method: VISA`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintFixture {
    /// Installment count
    Installments(i32),

    /// Payment method code
    PaymentMethod(String),

    /// Payment type code
    PaymentType(String),

    /// Issuer id
    Issuer(i32),
}

/// Discount target from YAML
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CouponEntityFixture {
    /// Catalog item
    Item {
        /// Item identifier
        id: String,
    },
}

impl From<ConstraintFixture> for Constraint {
    fn from(fixture: ConstraintFixture) -> Self {
        match fixture {
            ConstraintFixture::Installments(count) => Constraint::InstallmentCount(count),
            ConstraintFixture::PaymentMethod(code) => Constraint::PaymentMethod(code),
            ConstraintFixture::PaymentType(code) => Constraint::PaymentType(code),
            ConstraintFixture::Issuer(id) => Constraint::Issuer(id),
        }
    }
}

impl From<CouponEntityFixture> for CouponEntity {
    fn from(fixture: CouponEntityFixture) -> Self {
        match fixture {
            CouponEntityFixture::Item { id } => CouponEntity::item(id),
        }
    }
}

impl TryFrom<DiscountFixture> for Discount {
    type Error = FixtureError;

    fn try_from(fixture: DiscountFixture) -> Result<Self, Self::Error> {
        match fixture {
            DiscountFixture::None => Ok(Discount::None),
            DiscountFixture::AVista {
                amount,
                constraints,
                combine,
                entity,
            } => Ok(PayInFullDiscount::new(
                parse_amount(&amount)?,
                constraints.into_iter().map(Constraint::from),
                combine,
                entity.into(),
            )
            .into()),
            DiscountFixture::Rebate {
                amount,
                combine,
                entity,
            } => Ok(RebateDiscount::new(parse_amount(&amount)?, entity.into(), combine).into()),
        }
    }
}

/// Parse a positive decimal amount (e.g., "45" or "12.50")
///
/// # Errors
///
/// Returns an error if the string is not a decimal number or is not greater than zero.
pub fn parse_amount(s: &str) -> Result<Decimal, FixtureError> {
    let amount = s
        .trim()
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidAmount(s.to_string()))?;

    if amount <= Decimal::ZERO {
        return Err(FixtureError::InvalidAmount(s.to_string()));
    }

    Ok(amount)
}
