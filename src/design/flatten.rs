//! Coordinate flattening of a Figma node tree into positioned elements.

use uuid::Uuid;

use crate::figma::api_types::DesignNode;

use super::element::{Element, ElementKind};
use super::style::extract_style;

struct Pending<'a> {
    node: &'a DesignNode,
    origin_x: f64,
    origin_y: f64,
    parent_id: Option<String>,
}

/// Flatten `root` and all its descendants into a pre-order element list.
///
/// Each element's position is relative to its parent's absolute position;
/// the root is placed relative to `(origin_x, origin_y)`. Every node yields
/// exactly one element, including invisible or zero-sized ones.
///
/// The walk uses an explicit stack so arbitrarily deep trees cannot exhaust
/// the call stack.
pub fn flatten(root: &DesignNode, origin_x: f64, origin_y: f64) -> Vec<Element> {
    let mut elements = Vec::new();
    let mut stack = vec![Pending {
        node: root,
        origin_x,
        origin_y,
        parent_id: None,
    }];

    while let Some(Pending {
        node,
        origin_x,
        origin_y,
        parent_id,
    }) = stack.pop()
    {
        let bb = node.absolute_bounding_box.unwrap_or_default();
        let style = extract_style(node);
        let element = Element {
            id: Uuid::new_v4().to_string(),
            node_id: node.id.clone(),
            parent_id,
            name: node.name.clone(),
            kind: ElementKind::from_node_type(&node.node_type),
            x: bb.x - origin_x,
            y: bb.y - origin_y,
            width: bb.width,
            height: bb.height,
            content: node.characters.clone(),
            style: (!style.is_empty()).then_some(style),
        };

        // Reverse push keeps siblings in document order when popped.
        for child in node.children.iter().rev() {
            stack.push(Pending {
                node: child,
                origin_x: bb.x,
                origin_y: bb.y,
                parent_id: Some(element.id.clone()),
            });
        }

        elements.push(element);
    }

    elements
}
