use std::path::PathBuf;
use std::process::ExitCode;

use figinvoice_lib::output::FIGINVOICE_OUTPUT_VERSION;
use figinvoice_lib::{variable_label, FigInvoiceError, FigInvoiceOutput, ResolveOutput, Resolver};

use crate::cli::OutputArgs;
use crate::formatting::{render_error, write_output};
use crate::settings::load_config;

use super::load_invoice_data;

/// Run the resolve command. Unknown variables resolve to an empty value
/// rather than failing, as they would on the canvas.
pub fn run_resolve(
    config_path: Option<PathBuf>,
    variable: String,
    data: Option<PathBuf>,
    index: Option<usize>,
    out: OutputArgs,
) -> ExitCode {
    let OutputArgs { format, output } = out;
    let config = match load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format, output),
    };
    let invoice = match load_invoice_data(data.as_deref()) {
        Ok(invoice) => invoice,
        Err(err) => return render_error(err, format, output),
    };

    let resolver = Resolver::new(config.currency);
    let value = resolver.resolve_at(&invoice, &variable, index.unwrap_or(0));

    let body = FigInvoiceOutput::Resolve(ResolveOutput {
        version: FIGINVOICE_OUTPUT_VERSION.to_string(),
        label: variable_label(&variable).to_string(),
        variable,
        index,
        value,
    });
    if let Err(err) = write_output(&body, format, output.clone()) {
        return render_error(FigInvoiceError::Config(err.to_string()), format, output);
    }
    ExitCode::SUCCESS
}
