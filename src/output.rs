use crate::design::DesignStructure;
use crate::error::ErrorPayload;
use crate::figma::ImportCounts;
use crate::mapping::{MappingTable, VariableCategory, VariableName};
use crate::render::Canvas;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Schema version for output payloads.
pub const FIGINVOICE_OUTPUT_VERSION: &str = "0.1.0";

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum FigInvoiceOutput {
    Import(ImportOutput),
    Convert(ConvertOutput),
    Map(MapOutput),
    Preview(PreviewOutput),
    Resolve(ResolveOutput),
    Variables(VariablesOutput),
    Templates(TemplatesOutput),
    Delete(DeleteOutput),
    Error(ErrorOutput),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportOutput {
    pub version: String,
    pub template_id: String,
    pub name: String,
    pub figma_file_key: String,
    pub figma_node_id: String,
    #[serde(flatten)]
    pub counts: ImportCounts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertOutput {
    pub version: String,
    /// Set when the template was saved to the store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(flatten)]
    pub counts: ImportCounts,
    pub structure: DesignStructure,
    pub mappings: MappingTable,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOutput {
    pub version: String,
    pub template_id: String,
    pub element_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    /// Binding after the change; absent when the element was cleared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub mappings_count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewOutput {
    pub version: String,
    pub template_id: String,
    pub name: String,
    pub zoom: f64,
    pub canvas: Canvas,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveOutput {
    pub version: String,
    pub variable: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariablesOutput {
    pub version: String,
    pub categories: Vec<VariableGroup>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableGroup {
    pub category: VariableCategory,
    pub label: String,
    pub variables: Vec<VariableInfo>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableInfo {
    pub name: VariableName,
    pub label: String,
    pub example: String,
    pub repeating: bool,
}

impl VariablesOutput {
    /// The full catalog, grouped by category in display order.
    pub fn catalog() -> Self {
        let categories = VariableCategory::ALL
            .iter()
            .map(|&category| VariableGroup {
                category,
                label: category.label().to_string(),
                variables: category
                    .variables()
                    .into_iter()
                    .map(|name| VariableInfo {
                        name,
                        label: name.label().to_string(),
                        example: name.example().to_string(),
                        repeating: name.is_repeating(),
                    })
                    .collect(),
            })
            .collect();
        Self {
            version: FIGINVOICE_OUTPUT_VERSION.to_string(),
            categories,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatesOutput {
    pub version: String,
    pub templates: Vec<TemplateSummary>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    pub elements_count: usize,
    pub mappings_count: usize,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutput {
    pub version: String,
    pub template_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorOutput {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub error: ErrorPayload,
}
