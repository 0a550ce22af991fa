//! Invoice data records and variable resolution.

pub mod data;
pub mod format;
pub mod resolve;
pub mod sample;
pub mod totals;

pub use data::{BankInfo, InvoiceData, InvoiceInfo, RecipientInfo, SenderInfo, ServiceLine, Totals};
pub use format::{format_number, CurrencyFormat};
pub use resolve::{
    format_services_for_preview, resolve_value, resolve_value_at, resolve_variable, Resolver,
};
pub use sample::sample_invoice;
pub use totals::calculate_totals;
