use std::fmt::Write as FmtWrite;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use figinvoice_lib::output::FIGINVOICE_OUTPUT_VERSION;
use figinvoice_lib::{ErrorOutput, FigInvoiceError, FigInvoiceOutput};

use crate::cli::OutputFormat;

/// Write output in the requested format.
pub fn write_output(
    body: &FigInvoiceOutput,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => write_json_output(body, output.as_deref())?,
        OutputFormat::Pretty => write_pretty_output(body, output.as_deref())?,
    };
    Ok(())
}

/// Render an error and return the appropriate exit code.
pub fn render_error(err: FigInvoiceError, format: OutputFormat, output: Option<PathBuf>) -> ExitCode {
    let error_payload = err.to_payload();
    let payload = FigInvoiceOutput::Error(ErrorOutput {
        version: FIGINVOICE_OUTPUT_VERSION.to_string(),
        message: Some(error_payload.message.clone()),
        error: error_payload,
    });

    match format {
        OutputFormat::Json => {
            let content =
                serde_json::to_string(&payload).unwrap_or_else(|_| "{\"mode\":\"error\"}".into());
            if let Some(path) = output {
                if let Err(write_err) = std::fs::write(&path, &content) {
                    eprintln!("Failed to write error output: {}", write_err);
                    println!("{content}");
                }
            } else {
                println!("{content}");
            }
        }
        OutputFormat::Pretty => {
            if let Err(write_err) = write_pretty_output(&payload, output.as_deref()) {
                eprintln!("Failed to write error output: {}", write_err);
            }
        }
    };

    ExitCode::from(2)
}

/// Write JSON output to file or stdout.
fn write_json_output(
    body: &FigInvoiceOutput,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = serde_json::to_string(body)?;
    if let Some(path) = output {
        std::fs::write(path, content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

/// Write pretty output to file or stdout.
fn write_pretty_output(body: &FigInvoiceOutput, output: Option<&Path>) -> io::Result<()> {
    let stdout_is_tty = std::io::stdout().is_terminal();
    let use_human = output.is_none() && stdout_is_tty;

    if use_human {
        let content = format_pretty(body, true);
        println!("{content}");
        return Ok(());
    }

    // Non-tty or file output: keep JSON shape for pipelines/files.
    let content =
        serde_json::to_string_pretty(body).unwrap_or_else(|_| "{\"mode\":\"error\"}".to_string());
    if let Some(path) = output {
        std::fs::write(path, &content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

/// Format output for human consumption in a terminal.
pub fn format_pretty(body: &FigInvoiceOutput, colorize: bool) -> String {
    let mut buf = String::new();
    match body {
        FigInvoiceOutput::Import(out) => {
            let header = color("[IMPORT]", "32", colorize);
            writeln!(buf, "{} {} ({})", header, out.name, out.template_id).ok();
            writeln!(buf, "Figma: file {} node {}", out.figma_file_key, out.figma_node_id).ok();
            write_counts(&mut buf, &out.counts);
            if let Some(url) = &out.thumbnail_url {
                writeln!(buf, "Thumbnail: {url}").ok();
            }
            if let Some(path) = &out.thumbnail_path {
                writeln!(buf, "Thumbnail saved: {}", path.display()).ok();
            }
        }
        FigInvoiceOutput::Convert(out) => {
            let header = color("[CONVERT]", "36", colorize);
            writeln!(
                buf,
                "{} {} ({}x{})",
                header, out.structure.name, out.structure.width, out.structure.height
            )
            .ok();
            write_counts(&mut buf, &out.counts);
            if let Some(id) = &out.template_id {
                writeln!(buf, "Saved as {id}").ok();
            }
            if !out.mappings.is_empty() {
                writeln!(buf, "Suggested mappings:").ok();
                for (element_id, variable) in out.mappings.iter() {
                    let name = out
                        .structure
                        .element(element_id)
                        .map(|e| e.name.as_str())
                        .unwrap_or(element_id);
                    writeln!(buf, "- {:24} {}", name, variable).ok();
                }
            }
        }
        FigInvoiceOutput::Map(out) => {
            let header = color("[MAP]", "34", colorize);
            match (&out.variable, &out.label) {
                (Some(variable), Some(label)) => {
                    writeln!(buf, "{} {} -> {} ({})", header, out.element_id, variable, label).ok()
                }
                _ => writeln!(buf, "{} {} unbound", header, out.element_id).ok(),
            };
            if let Some(previous) = &out.previous {
                writeln!(buf, "Previously: {previous}").ok();
            }
            writeln!(buf, "Template {} has {} mappings", out.template_id, out.mappings_count).ok();
        }
        FigInvoiceOutput::Preview(out) => {
            let header = color("[PREVIEW]", "35", colorize);
            writeln!(
                buf,
                "{} {} at {:.0}% ({}x{})",
                header,
                out.name,
                out.zoom * 100.0,
                out.canvas.width,
                out.canvas.height
            )
            .ok();
            for el in &out.canvas.elements {
                let text = el
                    .text
                    .as_deref()
                    .map(|t| format!(" \"{}\"", t.replace('\n', " / ")))
                    .unwrap_or_default();
                writeln!(
                    buf,
                    "- {:10} {:20} @({:.0},{:.0}){}",
                    el.kind.as_str(),
                    el.name,
                    el.left,
                    el.top,
                    text
                )
                .ok();
            }
        }
        FigInvoiceOutput::Resolve(out) => {
            let label = color(&out.label, "36", colorize);
            writeln!(buf, "{} ({}): {}", label, out.variable, out.value).ok();
        }
        FigInvoiceOutput::Variables(out) => {
            for group in &out.categories {
                writeln!(buf, "{}", color(&group.label, "1", colorize)).ok();
                for v in &group.variables {
                    let repeat = if v.repeating { " [repeating]" } else { "" };
                    writeln!(buf, "  {:24} {}{}", v.name.as_str(), v.label, repeat).ok();
                }
            }
        }
        FigInvoiceOutput::Templates(out) => {
            if out.templates.is_empty() {
                writeln!(buf, "No templates stored").ok();
            }
            for t in &out.templates {
                writeln!(
                    buf,
                    "{}  {}  ({} elements, {} mappings, updated {})",
                    color(&t.id, "33", colorize),
                    t.name,
                    t.elements_count,
                    t.mappings_count,
                    t.updated_at.format("%Y-%m-%d %H:%M")
                )
                .ok();
            }
        }
        FigInvoiceOutput::Delete(out) => {
            writeln!(buf, "{} {}", color("[DELETED]", "31", colorize), out.template_id).ok();
        }
        FigInvoiceOutput::Error(out) => {
            let header = color("[ERROR]", "31", colorize);
            let message = out
                .message
                .as_deref()
                .unwrap_or_else(|| out.error.message.as_str());
            writeln!(buf, "{} {}", header, message).ok();
            if let Some(remediation) = &out.error.remediation {
                writeln!(buf, "Hint: {}", remediation).ok();
            }
        }
    }
    buf
}

fn write_counts(buf: &mut String, counts: &figinvoice_lib::ImportCounts) {
    writeln!(
        buf,
        "Elements: {} ({} text, {} suggested mappings)",
        counts.elements_count, counts.text_elements_count, counts.suggested_mappings_count
    )
    .ok();
}

/// Apply ANSI color codes when enabled.
fn color(text: &str, code: &str, colorize: bool) -> String {
    if colorize {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}
