use std::path::PathBuf;
use std::process::ExitCode;

use figinvoice_lib::figma::parse_node_json;
use figinvoice_lib::output::FIGINVOICE_OUTPUT_VERSION;
use figinvoice_lib::{
    import_document, ConvertOutput, FigInvoiceError, FigInvoiceOutput, TemplateRecord,
    TemplateStore,
};
use tracing::debug;

use crate::cli::OutputArgs;
use crate::formatting::{render_error, write_output};
use crate::settings::{load_config, open_store};

/// Run the convert command: the import pipeline over a saved node JSON.
pub fn run_convert(
    config_path: Option<PathBuf>,
    store_dir: Option<PathBuf>,
    input: PathBuf,
    name: String,
    save: bool,
    out: OutputArgs,
) -> ExitCode {
    let OutputArgs { format, output } = out;
    let config = match load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format, output),
    };
    let raw = match std::fs::read_to_string(&input) {
        Ok(raw) => raw,
        Err(err) => return render_error(err.into(), format, output),
    };
    let root = match parse_node_json(&raw) {
        Ok(root) => root,
        Err(err) => return render_error(err, format, output),
    };
    debug!(input = %input.display(), nodes = root.subtree_len(), "read node tree");

    let design = import_document(&root, &name, config.page.into());

    let mut template_id = None;
    if save {
        let record = TemplateRecord::new(
            name.clone(),
            design.structure.clone(),
            design.mappings.clone(),
        );
        let store = open_store(store_dir, &config);
        if let Err(err) = store.save(&record) {
            return render_error(err, format, output);
        }
        template_id = Some(record.id);
    }

    let body = FigInvoiceOutput::Convert(ConvertOutput {
        version: FIGINVOICE_OUTPUT_VERSION.to_string(),
        template_id,
        counts: design.counts,
        structure: design.structure,
        mappings: design.mappings,
    });
    if let Err(err) = write_output(&body, format, output.clone()) {
        return render_error(FigInvoiceError::Config(err.to_string()), format, output);
    }
    ExitCode::SUCCESS
}
