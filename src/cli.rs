use clap::{Args, Parser, Subcommand, ValueEnum};
use figinvoice_lib::RenderMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "figinvoice")]
#[command(
    version,
    about = "Figma-to-Invoice - turn Figma frames into invoice templates",
    long_about = "Figma-to-Invoice (figinvoice)\n\nModes:\n- import: fetch a Figma frame, flatten it and suggest variable bindings.\n- convert: the same from a node JSON file, offline.\n- map: bind or unbind a template element to an invoice variable.\n- preview: lay out a template with placeholders or resolved invoice data.\n- resolve: resolve one variable against invoice data.\n- variables: list the bindable variables.\n- templates / delete: manage stored templates.\n\nUse --help on any subcommand for details."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Enable verbose (debug) logging on stderr")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Optional config file (TOML) for page size, currency, Figma and store settings"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        value_name = "DIR",
        help = "Template store directory (overrides [store] dir from config)"
    )]
    pub store_dir: Option<PathBuf>,
}

#[derive(Args, Clone, Debug, Default)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value = "json", help = "Output format")]
    pub format: OutputFormat,

    #[arg(long, short, help = "Output file path (stdout if omitted)")]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import a Figma frame as a template (needs FIGMA_TOKEN or FIGMA_OAUTH_TOKEN)
    Import {
        #[arg(long, help = "Figma link (https://www.figma.com/design/<KEY>/...?node-id=1-2)")]
        url: String,

        #[arg(long, help = "Template name")]
        name: String,

        #[arg(long, help = "Node id to import (overrides node-id in the link; default 0:0)")]
        node_id: Option<String>,

        #[arg(
            long,
            value_name = "PATH",
            help = "Download the rendered thumbnail and save it here"
        )]
        thumbnail: Option<PathBuf>,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Build a template from a Figma node JSON file, without network access
    Convert {
        #[arg(long, value_name = "PATH", help = "Node JSON (a document node or a /nodes response)")]
        input: PathBuf,

        #[arg(long, help = "Template name")]
        name: String,

        #[arg(long, help = "Save the template to the store")]
        save: bool,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Bind an element to a variable; binding the same variable again unbinds it
    Map {
        #[arg(long, help = "Template id")]
        template: String,

        #[arg(long, help = "Element id (or the Figma node id of the element)")]
        element: String,

        #[arg(long, help = "Variable name, e.g. invoice.number; omit to unbind")]
        variable: Option<String>,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Lay out a stored template for the editor canvas
    Preview {
        #[arg(long, help = "Template id")]
        template: String,

        #[arg(long, value_name = "PATH", help = "Invoice data (JSON or YAML); sample data if omitted")]
        data: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "edit", help = "Show {variable} placeholders or resolved values")]
        mode: RenderModeArg,

        #[arg(long, help = "Zoom factor (defaults to [preview] zoom from config)")]
        zoom: Option<f64>,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Resolve one variable against invoice data
    Resolve {
        #[arg(long, help = "Variable name, e.g. totals.total")]
        variable: String,

        #[arg(long, value_name = "PATH", help = "Invoice data (JSON or YAML); sample data if omitted")]
        data: Option<PathBuf>,

        #[arg(long, help = "Service line index for service.* variables")]
        index: Option<usize>,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// List bindable variables by category
    Variables {
        #[command(flatten)]
        out: OutputArgs,
    },

    /// List stored templates
    Templates {
        #[command(flatten)]
        out: OutputArgs,
    },

    /// Delete a stored template
    Delete {
        #[arg(long, help = "Template id")]
        template: String,

        #[command(flatten)]
        out: OutputArgs,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Clone, Copy, Debug, ValueEnum, Default)]
pub enum RenderModeArg {
    #[default]
    Edit,
    Preview,
}

impl From<RenderModeArg> for RenderMode {
    fn from(mode: RenderModeArg) -> Self {
        match mode {
            RenderModeArg::Edit => RenderMode::Edit,
            RenderModeArg::Preview => RenderMode::Preview,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands, OutputFormat, RenderModeArg};
    use clap::Parser;

    #[test]
    fn import_command_uses_defaults() {
        let cli = Cli::parse_from([
            "figinvoice",
            "import",
            "--url",
            "https://www.figma.com/design/ABC/Invoice?node-id=1-2",
            "--name",
            "Invoice",
        ]);

        assert!(!cli.verbose);
        assert!(cli.config.is_none());
        assert!(cli.store_dir.is_none());

        match cli.command {
            Commands::Import {
                url,
                name,
                node_id,
                thumbnail,
                out,
            } => {
                assert!(url.contains("ABC"));
                assert_eq!(name, "Invoice");
                assert!(node_id.is_none());
                assert!(thumbnail.is_none());
                assert!(matches!(out.format, OutputFormat::Json));
                assert!(out.output.is_none());
            }
            _ => panic!("expected import command"),
        }
    }

    #[test]
    fn preview_command_respects_overrides() {
        let cli = Cli::parse_from([
            "figinvoice",
            "preview",
            "--template",
            "t-1",
            "--data",
            "invoice.yaml",
            "--mode",
            "preview",
            "--zoom",
            "0.5",
            "--format",
            "pretty",
            "--store-dir",
            "/tmp/store",
            "--config",
            "figinvoice.toml",
        ]);

        assert_eq!(
            cli.store_dir.as_deref(),
            Some(std::path::Path::new("/tmp/store"))
        );
        match cli.command {
            Commands::Preview {
                template,
                data,
                mode,
                zoom,
                out,
            } => {
                assert_eq!(template, "t-1");
                assert_eq!(data.as_deref(), Some(std::path::Path::new("invoice.yaml")));
                assert!(matches!(mode, RenderModeArg::Preview));
                assert_eq!(zoom, Some(0.5));
                assert!(matches!(out.format, OutputFormat::Pretty));
            }
            _ => panic!("expected preview command"),
        }
    }

    #[test]
    fn resolve_command_sets_verbose() {
        let cli = Cli::parse_from([
            "figinvoice",
            "--verbose",
            "resolve",
            "--variable",
            "service.quantity",
            "--index",
            "2",
        ]);

        assert!(cli.verbose);
        match cli.command {
            Commands::Resolve {
                variable,
                data,
                index,
                ..
            } => {
                assert_eq!(variable, "service.quantity");
                assert!(data.is_none());
                assert_eq!(index, Some(2));
            }
            _ => panic!("expected resolve command"),
        }
    }

    #[test]
    fn map_variable_is_optional() {
        let cli = Cli::parse_from(["figinvoice", "map", "--template", "t", "--element", "e"]);
        match cli.command {
            Commands::Map { variable, .. } => assert!(variable.is_none()),
            _ => panic!("expected map command"),
        }
    }
}
