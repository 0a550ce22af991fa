mod cli;
mod commands;
mod formatting;
mod settings;

use std::process::ExitCode;

use cli::Commands;
use commands::{
    run_convert, run_delete, run_import, run_map, run_preview, run_resolve, run_templates,
    run_variables,
};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    run().await
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::from_default_env().add_directive(level.into());
    // Logs go to stderr so stdout stays machine-readable.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

async fn run() -> ExitCode {
    let args = cli::parse();
    init_tracing(args.verbose);

    let config = args.config;
    let store_dir = args.store_dir;

    match args.command {
        Commands::Import {
            url,
            name,
            node_id,
            thumbnail,
            out,
        } => run_import(config, store_dir, url, name, node_id, thumbnail, out).await,
        Commands::Convert {
            input,
            name,
            save,
            out,
        } => run_convert(config, store_dir, input, name, save, out),
        Commands::Map {
            template,
            element,
            variable,
            out,
        } => run_map(config, store_dir, template, element, variable, out),
        Commands::Preview {
            template,
            data,
            mode,
            zoom,
            out,
        } => run_preview(config, store_dir, template, data, mode, zoom, out),
        Commands::Resolve {
            variable,
            data,
            index,
            out,
        } => run_resolve(config, variable, data, index, out),
        Commands::Variables { out } => run_variables(out),
        Commands::Templates { out } => run_templates(config, store_dir, out),
        Commands::Delete { template, out } => run_delete(config, store_dir, template, out),
    }
}
