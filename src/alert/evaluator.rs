//! Threshold evaluation

use rust_decimal::Decimal;

use crate::common::types::Decision;

/// Compare an observed price against the sell/buy thresholds
///
/// Pure and total: every `(price, sell_price, buy_price)` triple maps to
/// exactly one [`Decision`]. The sell check runs first, so in a degenerate
/// configuration where `sell_price <= buy_price` both conditions can hold
/// at once and the sell alert wins purely by evaluation order.
///
/// Callers must only evaluate prices that were actually observed; a failed
/// fetch has no price and never reaches this function.
pub fn evaluate(price: Decimal, sell_price: Decimal, buy_price: Decimal) -> Decision {
    if price >= sell_price {
        Decision::SellAlert
    } else if price <= buy_price {
        Decision::BuyAlert
    } else {
        Decision::NoAlert
    }
}
