//! Line-item and invoice totals.

use super::data::{ServiceLine, Totals};

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl ServiceLine {
    /// Build a line whose total is `quantity × unit_price`, rounded to cents.
    pub fn priced(name: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            quantity,
            unit_price,
            total: round_cents(quantity * unit_price),
        }
    }
}

/// Subtotal, tax and grand total for `lines` at `tax_rate` percent.
///
/// Line totals are recomputed from quantity and unit price rather than
/// trusted, and each result is rounded to cents.
pub fn calculate_totals(lines: &[ServiceLine], tax_rate: f64) -> Totals {
    let subtotal: f64 = lines.iter().map(|l| l.quantity * l.unit_price).sum();
    let tax_amount = subtotal * (tax_rate / 100.0);
    Totals {
        subtotal: Some(round_cents(subtotal)),
        tax_rate: Some(tax_rate),
        tax_amount: Some(round_cents(tax_amount)),
        total: Some(round_cents(subtotal + tax_amount)),
    }
}
