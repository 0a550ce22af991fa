mod convert;
mod import;
mod map;
mod preview;
mod resolve;
mod templates;
mod variables;

pub use convert::run_convert;
pub use import::run_import;
pub use map::run_map;
pub use preview::run_preview;
pub use resolve::run_resolve;
pub use templates::{run_delete, run_templates};
pub use variables::run_variables;

use std::path::Path;

use figinvoice_lib::{sample_invoice, InvoiceData, Result};

/// Invoice data from `--data`, or the built-in sample.
fn load_invoice_data(path: Option<&Path>) -> Result<InvoiceData> {
    match path {
        Some(path) => InvoiceData::from_path(path),
        None => Ok(sample_invoice().clone()),
    }
}
