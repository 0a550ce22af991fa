//! Importing a Figma frame as an invoice template.
//!
//! Fetches the node tree, assembles it into a [`DesignStructure`], seeds the
//! mapping table from text-content heuristics and optionally renders a
//! thumbnail. Nothing here persists; callers hand the result to a store.

use image::GenericImageView;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::design::{build_structure_with_page, DesignStructure, PageSize};
use crate::error::{FigInvoiceError, Result};
use crate::mapping::{suggest_mappings, MappingTable};
use crate::progress::ProgressCallback;
use crate::resource::parse_figma_url;

use super::api_types::{DesignNode, FigmaNodesResponse, ImageFormat};
use super::client::{FigmaClient, ImageExportOptions};

/// Node imported when the link does not name one: the document's first page.
pub const DEFAULT_NODE_ID: &str = "0:0";
pub const DEFAULT_THUMBNAIL_SCALE: f32 = 0.5;

#[derive(Debug, Clone)]
pub struct ImportRequest {
    pub figma_url: String,
    pub name: String,
    /// Overrides the `node-id` query parameter of the link.
    pub node_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ImportOptions {
    pub page: PageSize,
    pub thumbnail_scale: f32,
    /// Where to write the decoded thumbnail. `None` skips the download.
    pub thumbnail_path: Option<PathBuf>,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            page: PageSize::default(),
            thumbnail_scale: DEFAULT_THUMBNAIL_SCALE,
            thumbnail_path: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportCounts {
    pub elements_count: usize,
    pub text_elements_count: usize,
    pub suggested_mappings_count: usize,
}

/// A design turned into a template body, before it is stored.
#[derive(Debug, Clone)]
pub struct ImportedDesign {
    pub structure: DesignStructure,
    pub mappings: MappingTable,
    pub counts: ImportCounts,
}

#[derive(Debug, Clone)]
pub struct ImportedTemplate {
    pub file_key: String,
    pub node_id: String,
    pub figma_url: String,
    pub design: ImportedDesign,
    pub thumbnail_url: Option<String>,
    pub thumbnail_path: Option<PathBuf>,
}

/// Assemble a node tree and suggest initial mappings for its text elements.
pub fn import_document(root: &DesignNode, name: &str, page: PageSize) -> ImportedDesign {
    let structure = build_structure_with_page(root, name, page);
    let text_elements = structure.text_elements();
    let mappings = suggest_mappings(text_elements.iter().copied());

    let counts = ImportCounts {
        elements_count: structure.elements.len(),
        text_elements_count: text_elements.len(),
        suggested_mappings_count: mappings.len(),
    };

    ImportedDesign {
        structure,
        mappings,
        counts,
    }
}

/// Read a node tree saved from the API: either a bare document node or a
/// whole `/nodes` response, in which case the first non-null document in id
/// order is used.
pub fn parse_node_json(raw: &str) -> Result<DesignNode> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    if value.get("nodes").is_some_and(serde_json::Value::is_object) {
        let response: FigmaNodesResponse = serde_json::from_value(value)?;
        let mut ids: Vec<&String> = response.nodes.keys().collect();
        ids.sort();
        return ids
            .into_iter()
            .find_map(|id| response.document(id))
            .cloned()
            .ok_or_else(|| FigInvoiceError::NodeNotFound("no document in nodes response".into()));
    }
    Ok(serde_json::from_value(value)?)
}

pub async fn import_template(
    client: &FigmaClient,
    request: &ImportRequest,
    options: &ImportOptions,
    progress: Option<&ProgressCallback>,
) -> Result<ImportedTemplate> {
    let info = parse_figma_url(&request.figma_url)
        .map_err(|e| FigInvoiceError::Config(e.to_string()))?;
    let node_id = request
        .node_id
        .clone()
        .or(info.node_id)
        .unwrap_or_else(|| DEFAULT_NODE_ID.to_string());

    report(progress, &format!("Fetching node {node_id} from file {}", info.file_key));
    let root = client.fetch_node(&info.file_key, &node_id).await?;
    debug!(nodes = root.subtree_len(), "fetched design tree");

    report(progress, "Flattening design");
    let design = import_document(&root, &request.name, options.page);
    info!(
        elements = design.counts.elements_count,
        text = design.counts.text_elements_count,
        suggested = design.counts.suggested_mappings_count,
        "imported design"
    );

    report(progress, "Rendering thumbnail");
    let export = ImageExportOptions {
        scale: options.thumbnail_scale,
        format: ImageFormat::Png,
    };
    let thumbnail_url = match client.export_image(&info.file_key, &node_id, export).await {
        Ok(url) => url,
        Err(err) => {
            warn!(error = %err, "thumbnail export failed; continuing without one");
            None
        }
    };

    let mut thumbnail_path = None;
    if let (Some(url), Some(path)) = (thumbnail_url.as_deref(), options.thumbnail_path.as_deref()) {
        match save_thumbnail(client, url, path).await {
            Ok(()) => thumbnail_path = Some(path.to_path_buf()),
            Err(err) => warn!(error = %err, path = %path.display(), "thumbnail download failed"),
        }
    }

    Ok(ImportedTemplate {
        file_key: info.file_key,
        node_id,
        figma_url: request.figma_url.clone(),
        design,
        thumbnail_url,
        thumbnail_path,
    })
}

async fn save_thumbnail(client: &FigmaClient, url: &str, path: &Path) -> Result<()> {
    let bytes = client.download_image(url).await?;
    let image = image::load_from_memory(&bytes)?;
    let (width, height) = image.dimensions();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    image.save(path)?;
    debug!(width, height, path = %path.display(), "saved thumbnail");
    Ok(())
}

fn report(progress: Option<&ProgressCallback>, message: &str) {
    if let Some(cb) = progress {
        cb(message);
    }
}
