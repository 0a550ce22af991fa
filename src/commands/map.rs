use std::path::PathBuf;
use std::process::ExitCode;

use figinvoice_lib::output::FIGINVOICE_OUTPUT_VERSION;
use figinvoice_lib::{
    FigInvoiceError, FigInvoiceOutput, MapOutput, TemplateRecord, TemplateStore, VariableName,
};

use crate::cli::OutputArgs;
use crate::formatting::{render_error, write_output};
use crate::settings::{load_config, open_store};

/// Run the map command.
///
/// With a variable this toggles the binding like the editor's picker; without
/// one it unbinds the element.
pub fn run_map(
    config_path: Option<PathBuf>,
    store_dir: Option<PathBuf>,
    template: String,
    element: String,
    variable: Option<String>,
    out: OutputArgs,
) -> ExitCode {
    let OutputArgs { format, output } = out;
    let config = match load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format, output),
    };
    let variable = match variable.as_deref().map(str::parse::<VariableName>).transpose() {
        Ok(v) => v,
        Err(err) => return render_error(FigInvoiceError::Config(err.to_string()), format, output),
    };

    let store = open_store(store_dir, &config);
    let mut record = match store.load(&template) {
        Ok(record) => record,
        Err(err) => return render_error(err, format, output),
    };
    let element_id = match find_text_element(&record, &element) {
        Ok(id) => id,
        Err(err) => return render_error(err, format, output),
    };

    let previous = record.mappings.get(&element_id).map(str::to_string);
    let current = match variable {
        Some(variable) => record.mappings.toggle(&element_id, variable),
        None => {
            record.mappings.clear(&element_id);
            None
        }
    };
    record.touch();
    if let Err(err) = store.save(&record) {
        return render_error(err, format, output);
    }

    let body = FigInvoiceOutput::Map(MapOutput {
        version: FIGINVOICE_OUTPUT_VERSION.to_string(),
        template_id: record.id,
        element_id,
        previous,
        variable: current.map(|v| v.as_str().to_string()),
        label: current.map(|v| v.label().to_string()),
        mappings_count: record.mappings.len(),
    });
    if let Err(err) = write_output(&body, format, output.clone()) {
        return render_error(FigInvoiceError::Config(err.to_string()), format, output);
    }
    ExitCode::SUCCESS
}

/// Accept either the element's own id or the Figma node id it came from.
fn find_text_element(record: &TemplateRecord, element: &str) -> Result<String, FigInvoiceError> {
    let found = record
        .structure
        .element(element)
        .or_else(|| {
            record
                .structure
                .elements
                .iter()
                .find(|e| e.node_id == element)
        })
        .ok_or_else(|| {
            FigInvoiceError::Config(format!(
                "Element '{element}' not found in template {}",
                record.id
            ))
        })?;
    if !found.is_text() {
        return Err(FigInvoiceError::Config(format!(
            "Element '{}' is a {} element; only text elements can be bound to variables",
            found.name,
            found.kind.as_str()
        )));
    }
    Ok(found.id.clone())
}
