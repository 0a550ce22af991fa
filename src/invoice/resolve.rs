//! Resolution of variable names against invoice data.
//!
//! Resolution is total: any variable string and any (sparse) record yields a
//! display string. Unknown or stale names resolve to `""`.

use super::data::InvoiceData;
use super::format::{format_number, CurrencyFormat};
use crate::mapping::VariableName;

/// Resolves variables with a given currency format.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    pub currency: CurrencyFormat,
}

impl Resolver {
    pub fn new(currency: CurrencyFormat) -> Self {
        Self { currency }
    }

    /// Resolve `variable`, using the first service line for `service.*`.
    pub fn resolve(&self, data: &InvoiceData, variable: &str) -> String {
        self.resolve_at(data, variable, 0)
    }

    /// Resolve `variable`, using service line `index` for `service.*`.
    ///
    /// A missing line resolves to a bracketed placeholder such as
    /// `[quantity]`, marking the slot as repeating rather than blank.
    pub fn resolve_at(&self, data: &InvoiceData, variable: &str, index: usize) -> String {
        // Only the first two dot segments address a field.
        let mut parts = variable.split('.');
        let category = parts.next().unwrap_or_default();
        let Some(field) = parts.next() else {
            return match category {
                "terms" => data.terms.clone().unwrap_or_default(),
                "message" => data.message.clone().unwrap_or_default(),
                _ => String::new(),
            };
        };

        match category {
            "invoice" => text(data.invoice.field(field)),
            "sender" => text(data.sender.field(field)),
            "recipient" => text(data.recipient.field(field)),
            "bank" => text(data.bank.field(field)),
            "totals" => match (field, data.totals.field(field)) {
                ("taxRate", Some(rate)) => format!("{}%", format_number(rate)),
                (_, Some(amount)) => self.currency.format(amount),
                (_, None) => String::new(),
            },
            "service" => self.resolve_service(data, field, index),
            _ => String::new(),
        }
    }

    fn resolve_service(&self, data: &InvoiceData, field: &str, index: usize) -> String {
        let Some(line) = data.services.get(index) else {
            return format!("[{field}]");
        };
        match field {
            "name" => line.name.clone(),
            "description" => line.description.clone().unwrap_or_default(),
            "quantity" => format_number(line.quantity),
            "unitPrice" => self.currency.format(line.unit_price),
            "total" => self.currency.format(line.total),
            _ => String::new(),
        }
    }

    /// One rendered line per service: `1. name - qty x unit = total`.
    pub fn services_preview(&self, data: &InvoiceData) -> String {
        data.services
            .iter()
            .enumerate()
            .map(|(i, s)| {
                format!(
                    "{}. {} - {} x {} = {}",
                    i + 1,
                    s.name,
                    format_number(s.quantity),
                    self.currency.format(s.unit_price),
                    self.currency.format(s.total)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// Resolve with the default (French euro) currency format.
pub fn resolve_value(data: &InvoiceData, variable: &str) -> String {
    Resolver::default().resolve(data, variable)
}

/// Indexed variant of [`resolve_value`] for repeating service rows.
pub fn resolve_value_at(data: &InvoiceData, variable: &str, index: usize) -> String {
    Resolver::default().resolve_at(data, variable, index)
}

/// Typed convenience over [`resolve_value`].
pub fn resolve_variable(data: &InvoiceData, variable: VariableName) -> String {
    resolve_value(data, variable.as_str())
}

/// Listing of every service line, for previews of the repeating block.
pub fn format_services_for_preview(data: &InvoiceData) -> String {
    Resolver::default().services_preview(data)
}
