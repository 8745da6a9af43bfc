//! Order totals.

use crate::cart::reconcile::CartLine;

/// Derived order totals, in minor currency units.
///
/// Inputs are already integral, so no rounding happens here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderTotals {
    /// Sum of all line totals.
    pub goods_subtotal: u64,
    /// Cost of the chosen delivery slot, supplied by the delivery pricing
    /// rule.
    pub delivery_cost: u64,
    pub grand_total: u64,
}

/// Calculate the order totals for a set of reconciled lines.
///
/// An empty line set yields a zero subtotal, not an error.
pub fn totals(lines: &[CartLine], delivery_cost: u64) -> OrderTotals {
    let goods_subtotal = lines.iter().map(CartLine::line_total).sum::<u64>();

    OrderTotals {
        goods_subtotal,
        delivery_cost,
        grand_total: goods_subtotal + delivery_cost,
    }
}
