use std::path::PathBuf;
use std::process::ExitCode;

use figinvoice_lib::output::FIGINVOICE_OUTPUT_VERSION;
use figinvoice_lib::{
    render_canvas, FigInvoiceError, FigInvoiceOutput, PreviewOutput, RenderOptions, Resolver,
    TemplateStore,
};
use tracing::debug;

use crate::cli::{OutputArgs, RenderModeArg};
use crate::formatting::{render_error, write_output};
use crate::settings::{load_config, open_store};

use super::load_invoice_data;

/// Run the preview command.
pub fn run_preview(
    config_path: Option<PathBuf>,
    store_dir: Option<PathBuf>,
    template: String,
    data: Option<PathBuf>,
    mode: RenderModeArg,
    zoom: Option<f64>,
    out: OutputArgs,
) -> ExitCode {
    let OutputArgs { format, output } = out;
    let config = match load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format, output),
    };
    let zoom = zoom.unwrap_or(config.preview.zoom);
    if !(zoom > 0.0) {
        return render_error(
            FigInvoiceError::Config(format!("zoom must be greater than zero, got {zoom}")),
            format,
            output,
        );
    }

    let store = open_store(store_dir, &config);
    let mut record = match store.load(&template) {
        Ok(record) => record,
        Err(err) => return render_error(err, format, output),
    };
    let stale = record.mappings.prune(&record.structure);
    if stale > 0 {
        debug!(stale, template = %record.id, "ignoring mappings for missing elements");
    }

    let invoice = match load_invoice_data(data.as_deref()) {
        Ok(invoice) => invoice,
        Err(err) => return render_error(err, format, output),
    };
    let options = RenderOptions {
        zoom,
        mode: mode.into(),
        resolver: Resolver::new(config.currency.clone()),
    };
    let canvas = render_canvas(&record.structure, &record.mappings, Some(&invoice), &options);

    let body = FigInvoiceOutput::Preview(PreviewOutput {
        version: FIGINVOICE_OUTPUT_VERSION.to_string(),
        template_id: record.id,
        name: record.name,
        zoom,
        canvas,
    });
    if let Err(err) = write_output(&body, format, output.clone()) {
        return render_error(FigInvoiceError::Config(err.to_string()), format, output);
    }
    ExitCode::SUCCESS
}
