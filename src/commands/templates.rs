use std::path::PathBuf;
use std::process::ExitCode;

use figinvoice_lib::output::FIGINVOICE_OUTPUT_VERSION;
use figinvoice_lib::{
    DeleteOutput, FigInvoiceError, FigInvoiceOutput, TemplateStore, TemplateSummary,
    TemplatesOutput,
};

use crate::cli::OutputArgs;
use crate::formatting::{render_error, write_output};
use crate::settings::{load_config, open_store};

/// Run the templates command (list the store).
pub fn run_templates(
    config_path: Option<PathBuf>,
    store_dir: Option<PathBuf>,
    out: OutputArgs,
) -> ExitCode {
    let OutputArgs { format, output } = out;
    let config = match load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format, output),
    };
    let records = match open_store(store_dir, &config).list() {
        Ok(records) => records,
        Err(err) => return render_error(err, format, output),
    };

    let templates = records
        .into_iter()
        .map(|r| TemplateSummary {
            elements_count: r.structure.elements.len(),
            mappings_count: r.mappings.len(),
            id: r.id,
            name: r.name,
            updated_at: r.updated_at,
        })
        .collect();
    let body = FigInvoiceOutput::Templates(TemplatesOutput {
        version: FIGINVOICE_OUTPUT_VERSION.to_string(),
        templates,
    });
    if let Err(err) = write_output(&body, format, output.clone()) {
        return render_error(FigInvoiceError::Config(err.to_string()), format, output);
    }
    ExitCode::SUCCESS
}

/// Run the delete command.
pub fn run_delete(
    config_path: Option<PathBuf>,
    store_dir: Option<PathBuf>,
    template: String,
    out: OutputArgs,
) -> ExitCode {
    let OutputArgs { format, output } = out;
    let config = match load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format, output),
    };
    if let Err(err) = open_store(store_dir, &config).delete(&template) {
        return render_error(err, format, output);
    }

    let body = FigInvoiceOutput::Delete(DeleteOutput {
        version: FIGINVOICE_OUTPUT_VERSION.to_string(),
        template_id: template,
    });
    if let Err(err) = write_output(&body, format, output.clone()) {
        return render_error(FigInvoiceError::Config(err.to_string()), format, output);
    }
    ExitCode::SUCCESS
}
