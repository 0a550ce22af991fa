//! Figma API response types for parsing JSON from the Figma REST API.
//!
//! Every field that Figma may omit is defaulted so that partial or
//! malformed trees still deserialize; the flattener decides what absence
//! means.

use palette::Srgb;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Supported image export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpg,
    Svg,
}

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpg => "jpg",
            ImageFormat::Svg => "svg",
        }
    }
}

/// One node of a Figma document tree.
///
/// Bounding boxes are absolute: children share the coordinate space of
/// their parent rather than being expressed relative to it.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DesignNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DesignNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_bounding_box: Option<FigmaBoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<FigmaTypeStyle>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<FigmaPaintData>,
}

impl DesignNode {
    pub fn is_text(&self) -> bool {
        self.node_type == "TEXT"
    }

    /// Number of nodes in this subtree, the node itself included.
    pub fn subtree_len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }
}

/// Bounding box coordinates from Figma.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FigmaBoundingBox {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

/// Typography style from Figma.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FigmaTypeStyle {
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub font_weight: Option<f32>,
    pub line_height_px: Option<f32>,
}

/// Paint/fill data from Figma.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FigmaPaintData {
    #[serde(rename = "type", default)]
    pub paint_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<FigmaColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

impl FigmaPaintData {
    pub fn is_solid(&self) -> bool {
        self.paint_type == "SOLID"
    }
}

/// RGBA color from Figma (0.0-1.0 range).
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FigmaColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a: Option<f32>,
}

impl FigmaColor {
    /// Convert to hex color string (e.g., "#ff8000"). Alpha is dropped.
    pub fn to_hex(&self) -> String {
        let rgb: Srgb<u8> = Srgb::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
        .into_format();
        format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
    }
}

/// Response from the nodes endpoint. Unknown ids come back as `null`.
#[derive(Debug, Deserialize)]
pub struct FigmaNodesResponse {
    #[serde(default)]
    pub nodes: HashMap<String, Option<FigmaNodeWrapper>>,
}

impl FigmaNodesResponse {
    pub fn document(&self, node_id: &str) -> Option<&DesignNode> {
        self.nodes
            .get(node_id)
            .and_then(Option::as_ref)
            .map(|wrapper| &wrapper.document)
    }
}

/// Wrapper containing the document for a node.
#[derive(Debug, Deserialize)]
pub struct FigmaNodeWrapper {
    pub document: DesignNode,
}

/// Response from the images export endpoint.
#[derive(Debug, Deserialize)]
pub struct FigmaImageExport {
    #[serde(default)]
    pub images: HashMap<String, Option<String>>,
    #[serde(default)]
    pub err: Option<String>,
}
