use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use figinvoice_lib::output::FIGINVOICE_OUTPUT_VERSION;
use figinvoice_lib::{
    import_template, FigInvoiceError, FigInvoiceOutput, FigmaAuth, FigmaClient, ImportOptions,
    ImportOutput, ImportRequest, ProgressCallback, TemplateRecord, TemplateStore,
};
use tracing::info;

use crate::cli::OutputArgs;
use crate::formatting::{render_error, write_output};
use crate::settings::{load_config, open_store};

/// Run the import command.
pub async fn run_import(
    config_path: Option<PathBuf>,
    store_dir: Option<PathBuf>,
    url: String,
    name: String,
    node_id: Option<String>,
    thumbnail: Option<PathBuf>,
    out: OutputArgs,
) -> ExitCode {
    let OutputArgs { format, output } = out;
    let config = match load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format, output),
    };
    let auth = match FigmaAuth::require_from_env() {
        Ok(auth) => auth,
        Err(err) => return render_error(err, format, output),
    };
    let client = match FigmaClient::with_base_url_and_timeout(
        auth,
        &config.figma.base_url,
        config.figma.timeout,
    ) {
        Ok(client) => client,
        Err(err) => return render_error(err, format, output),
    };

    let request = ImportRequest {
        figma_url: url,
        name,
        node_id,
    };
    let options = ImportOptions {
        page: config.page.into(),
        thumbnail_scale: config.figma.thumbnail_scale,
        thumbnail_path: thumbnail,
    };
    let progress: ProgressCallback = Arc::new(|msg: &str| info!("{msg}"));

    let imported = match import_template(&client, &request, &options, Some(&progress)).await {
        Ok(imported) => imported,
        Err(err) => return render_error(err, format, output),
    };

    let counts = imported.design.counts;
    let mut record = TemplateRecord::new(
        request.name.clone(),
        imported.design.structure,
        imported.design.mappings,
    );
    record.figma_file_key = Some(imported.file_key.clone());
    record.figma_node_id = Some(imported.node_id.clone());
    record.figma_url = Some(imported.figma_url);
    record.thumbnail_url = imported.thumbnail_url.clone();

    let store = open_store(store_dir, &config);
    if let Err(err) = store.save(&record) {
        return render_error(err, format, output);
    }

    let body = FigInvoiceOutput::Import(ImportOutput {
        version: FIGINVOICE_OUTPUT_VERSION.to_string(),
        template_id: record.id,
        name: record.name,
        figma_file_key: imported.file_key,
        figma_node_id: imported.node_id,
        counts,
        thumbnail_url: imported.thumbnail_url,
        thumbnail_path: imported.thumbnail_path,
    });
    if let Err(err) = write_output(&body, format, output.clone()) {
        return render_error(FigInvoiceError::Config(err.to_string()), format, output);
    }
    ExitCode::SUCCESS
}
