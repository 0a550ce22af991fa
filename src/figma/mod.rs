//! Figma integration for importing designs as invoice templates.
//!
//! This module provides:
//! - [`FigmaClient`] - HTTP client for the Figma REST API
//! - [`import_template`] - Fetch, flatten and seed mappings for one frame
//! - API types for parsing Figma JSON responses

pub mod api_types;
pub mod client;
pub mod import;


pub use client::{FigmaAuth, FigmaClient, ImageExportOptions, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use import::{
    import_document, import_template, parse_node_json, ImportCounts, ImportOptions, ImportRequest,
    ImportedDesign, ImportedTemplate, DEFAULT_NODE_ID, DEFAULT_THUMBNAIL_SCALE,
};

pub use api_types::{
    DesignNode, FigmaBoundingBox, FigmaColor, FigmaImageExport, FigmaNodeWrapper,
    FigmaNodesResponse, FigmaPaintData, FigmaTypeStyle, ImageFormat,
};
