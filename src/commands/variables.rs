use std::process::ExitCode;

use figinvoice_lib::{FigInvoiceError, FigInvoiceOutput, VariablesOutput};

use crate::cli::OutputArgs;
use crate::formatting::{render_error, write_output};

/// Run the variables command.
pub fn run_variables(out: OutputArgs) -> ExitCode {
    let OutputArgs { format, output } = out;
    let body = FigInvoiceOutput::Variables(VariablesOutput::catalog());
    if let Err(err) = write_output(&body, format, output.clone()) {
        return render_error(FigInvoiceError::Config(err.to_string()), format, output);
    }
    ExitCode::SUCCESS
}
