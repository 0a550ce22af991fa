//! Packaging of flattened elements into a storable design structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::figma::api_types::DesignNode;

use super::element::Element;
use super::flatten::flatten;

/// Fallback page size, a portrait single-page document.
pub const DEFAULT_PAGE_WIDTH: f64 = 800.0;
pub const DEFAULT_PAGE_HEIGHT: f64 = 1200.0;

/// Page dimensions used when the root node has no usable bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl Default for PageSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_PAGE_WIDTH,
            height: DEFAULT_PAGE_HEIGHT,
        }
    }
}

/// A flattened, imported design: the unit of storage for a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignStructure {
    /// Id of the Figma node the design was imported from.
    pub id: String,
    pub name: String,
    pub width: f64,
    pub height: f64,
    /// Pre-order, depth-first; never nested.
    pub elements: Vec<Element>,
    pub last_synced: DateTime<Utc>,
}

/// Build a structure from a root node using the default page size fallback.
pub fn build_structure(root: &DesignNode, name: &str) -> DesignStructure {
    build_structure_with_page(root, name, PageSize::default())
}

/// Build a structure from a root node.
///
/// The root is flattened against its own position so it always sits at
/// `(0, 0)`.
pub fn build_structure_with_page(
    root: &DesignNode,
    name: &str,
    fallback: PageSize,
) -> DesignStructure {
    let (origin_x, origin_y) = root
        .absolute_bounding_box
        .map(|bb| (bb.x, bb.y))
        .unwrap_or((0.0, 0.0));
    let elements = flatten(root, origin_x, origin_y);

    let (width, height) = root
        .absolute_bounding_box
        .map(|bb| (bb.width, bb.height))
        .unwrap_or((0.0, 0.0));

    DesignStructure {
        id: root.id.clone(),
        name: name.to_string(),
        width: positive_or(width, fallback.width),
        height: positive_or(height, fallback.height),
        elements,
        last_synced: Utc::now(),
    }
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value > 0.0 {
        value
    } else {
        fallback
    }
}

impl DesignStructure {
    /// Elements that carry text and can be bound to a variable.
    pub fn text_elements(&self) -> Vec<&Element> {
        self.elements.iter().filter(|el| el.is_text()).collect()
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|el| el.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    /// Position of an element relative to the root, by summing the offsets
    /// of its ancestor chain.
    pub fn absolute_position(&self, id: &str) -> Option<(f64, f64)> {
        let index: HashMap<&str, &Element> =
            self.elements.iter().map(|el| (el.id.as_str(), el)).collect();
        absolute_position_in(&index, id)
    }

    /// Absolute positions of every element, keyed by element id.
    pub fn absolute_positions(&self) -> HashMap<String, (f64, f64)> {
        let index: HashMap<&str, &Element> =
            self.elements.iter().map(|el| (el.id.as_str(), el)).collect();
        self.elements
            .iter()
            .filter_map(|el| {
                absolute_position_in(&index, &el.id).map(|pos| (el.id.clone(), pos))
            })
            .collect()
    }
}

fn absolute_position_in(index: &HashMap<&str, &Element>, id: &str) -> Option<(f64, f64)> {
    let mut current = *index.get(id)?;
    let (mut x, mut y) = (current.x, current.y);
    // At most one step per element, even if parent ids form a cycle.
    for _ in 0..index.len() {
        let Some(parent) = current.parent_id.as_deref().and_then(|p| index.get(p)) else {
            break;
        };
        x += parent.x;
        y += parent.y;
        current = parent;
    }
    Some((x, y))
}
