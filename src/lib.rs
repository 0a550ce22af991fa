//! Figma-to-Invoice (figinvoice) Library
//!
//! Turns a Figma frame into a reusable invoice template: the node tree is
//! flattened into parent-relative elements, text elements are bound to
//! invoice variables, and bound elements render either as `{variable}`
//! placeholders or as values resolved from invoice data.
//!
//! # Module Overview
//!
//! - [`design`] - Flattening, style extraction and structure assembly
//! - [`mapping`] - Variable vocabulary, mapping table and suggestions
//! - [`invoice`] - Invoice data, currency formatting and variable resolution
//! - [`figma`] - Figma API client and template import
//! - [`render`] - Editor canvas model (edit and preview modes)
//! - [`store`] - Template persistence
//! - [`config`] - Configuration file support
//! - [`output`] - JSON output schemas
//!
//! # Example
//!
//! ```no_run
//! use figinvoice_lib::{build_structure, resolve_value, sample_invoice, suggest_mappings};
//! use figinvoice_lib::figma::DesignNode;
//!
//! # fn example(root: DesignNode) {
//! let structure = build_structure(&root, "Invoice");
//! let mappings = suggest_mappings(structure.text_elements());
//! for (element_id, variable) in mappings.iter() {
//!     println!("{element_id}: {}", resolve_value(sample_invoice(), variable));
//! }
//! # }
//! ```

pub mod config;
pub mod design;
pub mod error;
pub mod figma;
pub mod invoice;
pub mod mapping;
pub mod output;
pub mod progress;
pub mod render;
pub mod resource;
pub mod store;

pub use config::Config;
pub use design::{
    build_structure, build_structure_with_page, extract_style, flatten, DesignStructure, Element,
    ElementKind, ElementStyle, PageSize,
};
pub use error::{ErrorCategory, ErrorPayload, FigInvoiceError, Result};
pub use figma::{
    import_document, import_template, FigmaAuth, FigmaClient, ImportCounts, ImportOptions,
    ImportRequest, ImportedDesign, ImportedTemplate,
};
pub use invoice::{
    calculate_totals, format_services_for_preview, resolve_value, resolve_value_at,
    resolve_variable, sample_invoice, CurrencyFormat, InvoiceData, Resolver, ServiceLine, Totals,
};
pub use mapping::{
    suggest_mappings, suggest_variable, variable_label, MappingTable, VariableCategory,
    VariableName,
};
pub use output::{
    ConvertOutput, DeleteOutput, ErrorOutput, FigInvoiceOutput, ImportOutput, MapOutput,
    PreviewOutput, ResolveOutput, TemplateSummary, TemplatesOutput, VariablesOutput,
    FIGINVOICE_OUTPUT_VERSION,
};
pub use progress::ProgressCallback;
pub use render::{display_text, render_canvas, Canvas, RenderMode, RenderOptions, RenderedElement};
pub use resource::{parse_figma_url, FigmaInfo, ResourceParseError};
pub use store::{FsTemplateStore, TemplateRecord, TemplateStore};
