//! Normalized, positioned elements produced by flattening a design tree.

use serde::{Deserialize, Serialize};

/// Closed set of element kinds understood by the template engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ElementKind {
    Text,
    Rectangle,
    Ellipse,
    Frame,
    Group,
    Vector,
    Image,
}

impl ElementKind {
    /// Narrow a Figma node type to an element kind.
    ///
    /// Components, instances and anything unrecognised are treated as frames.
    pub fn from_node_type(node_type: &str) -> Self {
        match node_type {
            "TEXT" => ElementKind::Text,
            "RECTANGLE" => ElementKind::Rectangle,
            "ELLIPSE" => ElementKind::Ellipse,
            "GROUP" => ElementKind::Group,
            "VECTOR" => ElementKind::Vector,
            "FRAME" | "INSTANCE" | "COMPONENT" => ElementKind::Frame,
            _ => ElementKind::Frame,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Text => "TEXT",
            ElementKind::Rectangle => "RECTANGLE",
            ElementKind::Ellipse => "ELLIPSE",
            ElementKind::Frame => "FRAME",
            ElementKind::Group => "GROUP",
            ElementKind::Vector => "VECTOR",
            ElementKind::Image => "IMAGE",
        }
    }

    /// Kinds drawn on the editor canvas; groups, vectors and images are skipped.
    pub fn is_renderable(&self) -> bool {
        matches!(
            self,
            ElementKind::Text | ElementKind::Rectangle | ElementKind::Frame | ElementKind::Ellipse
        )
    }
}

/// Minimal style record kept per element.
///
/// `color` is only ever set on text elements and `background_color` only on
/// everything else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
}

impl ElementStyle {
    pub fn is_empty(&self) -> bool {
        self == &ElementStyle::default()
    }
}

/// One flattened design node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Synthetic id, regenerated on every import.
    pub id: String,
    /// Id of the Figma node this element came from.
    pub node_id: String,
    /// Synthetic id of the enclosing element; `None` for the root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// Offset from the parent element's top-left corner.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ElementStyle>,
}

impl Element {
    pub fn is_text(&self) -> bool {
        self.kind == ElementKind::Text
    }
}
