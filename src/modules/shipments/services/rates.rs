//! Pure pricing rules: weight-to-charge selection, packaging fee tiers and
//! the tariff/duty rate tables.
//!
//! The dollar values here are the operation's published tables and are
//! regression-locked by `tests/unit/rates_test.rs`; change them only when the
//! business changes them.

use rust_decimal::Decimal;

use crate::modules::catalog::models::ArticleType;
use crate::modules::shipments::models::CustomerTier;

/// Packaging is charged per started block of this many pounds.
const PACKAGING_BLOCK_LB: u32 = 10;
/// Flat fee per packaging block.
const PACKAGING_FEE_PER_BLOCK: u32 = 50;

/// The weight a shipment is billed on: the larger of the label weight and the
/// volumetric weight. The central-scale weight is informational only and
/// never participates.
pub fn billable_weight(label_weight: Decimal, volumetric_weight: Decimal) -> Decimal {
    label_weight.max(volumetric_weight)
}

/// Packaging fee: $50 per started 10 lb block of billable weight.
///
/// 6.3 lb -> $50, 10.0 lb -> $50, 10.1 lb -> $100, 20.1 lb -> $150.
/// Zero or negative billable weight carries no packaging fee.
pub fn packaging_fee(billable_weight: Decimal) -> Decimal {
    if billable_weight <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let blocks = (billable_weight / Decimal::from(PACKAGING_BLOCK_LB)).ceil();
    blocks * Decimal::from(PACKAGING_FEE_PER_BLOCK)
}

/// Per-pound tariff by customer tier and destination.
///
/// |        | capital | other |
/// |--------|---------|-------|
/// | vip    |     140 |   170 |
/// | normal |     150 |   180 |
pub fn tariff_rate(tier: CustomerTier, capital_destination: bool) -> Decimal {
    let dollars = match (tier, capital_destination) {
        (CustomerTier::Vip, true) => 140,
        (CustomerTier::Vip, false) => 170,
        (CustomerTier::Normal, true) => 150,
        (CustomerTier::Normal, false) => 180,
    };
    Decimal::from(dollars)
}

/// Per-unit customs duty by article type, customer tier and destination.
/// `Other` articles ignore the table and charge the catalog's fixed duty
/// (zero when unset).
pub fn duty_rate(
    article_type: ArticleType,
    tier: CustomerTier,
    capital_destination: bool,
    fixed_duty: Decimal,
) -> Decimal {
    let dollars = match article_type {
        ArticleType::Phone => match (tier, capital_destination) {
            (CustomerTier::Normal, true) => 800,
            (CustomerTier::Normal, false) => 1000,
            (CustomerTier::Vip, true) => 700,
            (CustomerTier::Vip, false) => 900,
        },
        ArticleType::LaptopTablet => match (tier, capital_destination) {
            (CustomerTier::Normal, true) => 1000,
            (CustomerTier::Normal, false) => 1300,
            (CustomerTier::Vip, true) => 800,
            (CustomerTier::Vip, false) => 1100,
        },
        ArticleType::Other => return fixed_duty.max(Decimal::ZERO),
    };
    Decimal::from(dollars)
}
