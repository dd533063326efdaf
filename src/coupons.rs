//! Coupon Entities
//!
//! What a discount targets. The core never interprets the target; it is
//! carried through for the pricing layer that applies the amount.

use std::fmt;

/// Catalog item identifier (e.g. `MLA12345`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId(String);

impl ItemId {
    /// Create a new item identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Discount target.
///
/// Payment, shipment and bundle level targets are expected to join this enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CouponEntity {
    /// A specific catalog item.
    Item(ItemId),
}

impl CouponEntity {
    /// Target a catalog item by identifier.
    pub fn item(id: impl Into<String>) -> Self {
        Self::Item(ItemId::new(id))
    }
}

impl fmt::Display for CouponEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CouponEntity::Item(id) => write!(f, "item:{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_targets_compare_by_identifier() {
        assert_eq!(CouponEntity::item("MLA12345"), CouponEntity::item("MLA12345"));
        assert_ne!(CouponEntity::item("MLA12345"), CouponEntity::item("MLA999887"));
    }

    #[test]
    fn display_includes_target_scope() {
        assert_eq!(CouponEntity::item("MLA12345").to_string(), "item:MLA12345");
    }
}
