//! Tests for flattening and structure assembly.

#[cfg(test)]
mod tests {
    use crate::design::{
        build_structure, build_structure_with_page, flatten, ElementKind, PageSize,
        DEFAULT_PAGE_HEIGHT, DEFAULT_PAGE_WIDTH,
    };
    use crate::figma::api_types::{
        DesignNode, FigmaBoundingBox, FigmaColor, FigmaPaintData, FigmaTypeStyle,
    };
    use std::collections::HashSet;

    fn node(id: &str, node_type: &str, x: f64, y: f64, children: Vec<DesignNode>) -> DesignNode {
        DesignNode {
            id: id.to_string(),
            name: format!("Node {id}"),
            node_type: node_type.to_string(),
            children,
            absolute_bounding_box: Some(FigmaBoundingBox {
                x,
                y,
                width: 10.0,
                height: 10.0,
            }),
            ..DesignNode::default()
        }
    }

    fn sample_tree() -> DesignNode {
        let a1 = node("A1", "TEXT", 30.0, 30.0, vec![]);
        let a = node("A", "GROUP", 20.0, 20.0, vec![a1]);
        let b = node("B", "RECTANGLE", 40.0, 40.0, vec![]);
        node("root", "FRAME", 0.0, 0.0, vec![a, b])
    }

    #[test]
    fn flatten_emits_one_element_per_node() {
        let tree = sample_tree();
        let elements = flatten(&tree, 0.0, 0.0);
        assert_eq!(elements.len(), tree.subtree_len());
        assert_eq!(elements.len(), 4);
    }

    #[test]
    fn flatten_is_pre_order_depth_first() {
        let elements = flatten(&sample_tree(), 0.0, 0.0);
        let order: Vec<&str> = elements.iter().map(|e| e.node_id.as_str()).collect();
        assert_eq!(order, vec!["root", "A", "A1", "B"]);
    }

    #[test]
    fn flatten_positions_are_parent_relative() {
        let grandchild = node("gc", "TEXT", 160.0, 130.0, vec![]);
        let child = node("c", "FRAME", 150.0, 120.0, vec![grandchild]);
        let root = node("r", "FRAME", 100.0, 100.0, vec![child]);

        let structure = build_structure(&root, "Invoice");
        let pos: Vec<(f64, f64)> = structure.elements.iter().map(|e| (e.x, e.y)).collect();
        assert_eq!(pos, vec![(0.0, 0.0), (50.0, 20.0), (10.0, 10.0)]);

        let direct = flatten(&root, 100.0, 100.0);
        assert_eq!((direct[2].x, direct[2].y), (10.0, 10.0));
    }

    #[test]
    fn flatten_without_origin_keeps_root_absolute() {
        let root = node("r", "FRAME", 100.0, 100.0, vec![]);
        let elements = flatten(&root, 0.0, 0.0);
        assert_eq!((elements[0].x, elements[0].y), (100.0, 100.0));
    }

    #[test]
    fn large_canvas_offsets_keep_sub_pixel_precision() {
        let child = node("c", "TEXT", 24580.12, 18003.47, vec![]);
        let root = node("r", "FRAME", 24567.83, 17990.5, vec![child]);

        let structure = build_structure(&root, "Far away");
        let el = &structure.elements[1];
        assert!((el.x - 12.29).abs() < 1e-9, "x = {}", el.x);
        assert!((el.y - 12.97).abs() < 1e-9, "y = {}", el.y);

        let (abs_x, abs_y) = structure.absolute_position(&el.id).expect("position");
        assert!((abs_x - 12.29).abs() < 1e-9);
        assert!((abs_y - 12.97).abs() < 1e-9);
    }

    #[test]
    fn absolute_position_sums_ancestor_offsets() {
        let grandchild = node("gc", "TEXT", 160.0, 130.0, vec![]);
        let child = node("c", "FRAME", 150.0, 120.0, vec![grandchild]);
        let root = node("r", "FRAME", 100.0, 100.0, vec![child]);
        let structure = build_structure(&root, "Invoice");

        let gc = structure
            .elements
            .iter()
            .find(|e| e.node_id == "gc")
            .expect("grandchild");
        assert_eq!(structure.absolute_position(&gc.id), Some((60.0, 30.0)));
        assert_eq!(structure.absolute_position("missing"), None);
        assert_eq!(structure.absolute_positions().len(), 3);
    }

    #[test]
    fn parent_ids_link_to_enclosing_element() {
        let elements = flatten(&sample_tree(), 0.0, 0.0);
        assert!(elements[0].parent_id.is_none());
        assert_eq!(elements[1].parent_id.as_deref(), Some(elements[0].id.as_str()));
        assert_eq!(elements[2].parent_id.as_deref(), Some(elements[1].id.as_str()));
        assert_eq!(elements[3].parent_id.as_deref(), Some(elements[0].id.as_str()));
    }

    #[test]
    fn element_ids_are_synthetic_and_unique() {
        let elements = flatten(&sample_tree(), 0.0, 0.0);
        let ids: HashSet<&str> = elements.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), elements.len());
        assert!(elements.iter().all(|e| e.id != e.node_id));
    }

    #[test]
    fn missing_bounding_box_zeroes_geometry() {
        let mut bare = node("x", "RECTANGLE", 0.0, 0.0, vec![]);
        bare.absolute_bounding_box = None;
        let elements = flatten(&bare, 5.0, 5.0);
        let el = &elements[0];
        assert_eq!((el.x, el.y, el.width, el.height), (-5.0, -5.0, 0.0, 0.0));
    }

    #[test]
    fn unknown_and_component_types_become_frames() {
        let tree = node(
            "root",
            "CANVAS",
            0.0,
            0.0,
            vec![
                node("i", "INSTANCE", 0.0, 0.0, vec![]),
                node("c", "COMPONENT", 0.0, 0.0, vec![]),
                node("s", "STAR", 0.0, 0.0, vec![]),
                node("v", "VECTOR", 0.0, 0.0, vec![]),
            ],
        );
        let kinds: Vec<ElementKind> = flatten(&tree, 0.0, 0.0).iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ElementKind::Frame,
                ElementKind::Frame,
                ElementKind::Frame,
                ElementKind::Frame,
                ElementKind::Vector
            ]
        );
    }

    #[test]
    fn text_content_and_style_carried_over() {
        let mut text = node("t", "TEXT", 0.0, 0.0, vec![]);
        text.characters = Some("Facture".into());
        text.style = Some(FigmaTypeStyle {
            font_family: Some("Inter".into()),
            font_size: Some(24.0),
            font_weight: Some(600.0),
            line_height_px: None,
        });
        text.fills = vec![FigmaPaintData {
            paint_type: "SOLID".into(),
            color: Some(FigmaColor {
                r: 0.2,
                g: 0.2,
                b: 0.2,
                a: Some(1.0),
            }),
            opacity: Some(0.9),
            visible: None,
        }];

        let elements = flatten(&text, 0.0, 0.0);
        let el = &elements[0];
        assert_eq!(el.content.as_deref(), Some("Facture"));
        let style = el.style.as_ref().expect("style");
        assert_eq!(style.color.as_deref(), Some("#333333"));
        assert_eq!(style.font_size, Some(24.0));
        assert_eq!(style.opacity, Some(0.9));
    }

    #[test]
    fn deep_tree_does_not_overflow() {
        let mut tree = node("leaf", "TEXT", 0.0, 0.0, vec![]);
        for i in 0..20_000 {
            tree = node(&format!("n{i}"), "GROUP", 0.0, 0.0, vec![tree]);
        }
        let elements = flatten(&tree, 0.0, 0.0);
        assert_eq!(elements.len(), 20_001);
        assert_eq!(elements.last().map(|e| e.node_id.as_str()), Some("leaf"));
        // Unwind iteratively; the derived Drop would recurse.
        let mut next = Some(tree);
        while let Some(mut n) = next {
            next = n.children.pop();
        }
    }

    #[test]
    fn structure_defaults_page_size_when_root_box_missing() {
        let mut root = node("r", "FRAME", 0.0, 0.0, vec![]);
        root.absolute_bounding_box = None;
        let structure = build_structure(&root, "Blank");
        assert_eq!(structure.width, DEFAULT_PAGE_WIDTH);
        assert_eq!(structure.height, DEFAULT_PAGE_HEIGHT);
        assert_eq!(structure.id, "r");
        assert_eq!(structure.name, "Blank");

        let custom = build_structure_with_page(
            &root,
            "Blank",
            PageSize {
                width: 595.0,
                height: 842.0,
            },
        );
        assert_eq!((custom.width, custom.height), (595.0, 842.0));
    }

    #[test]
    fn structure_uses_root_box_dimensions() {
        let mut root = node("r", "FRAME", 12.0, 8.0, vec![]);
        root.absolute_bounding_box = Some(FigmaBoundingBox {
            x: 12.0,
            y: 8.0,
            width: 595.0,
            height: 842.0,
        });
        let structure = build_structure(&root, "A4");
        assert_eq!((structure.width, structure.height), (595.0, 842.0));
        assert_eq!((structure.elements[0].x, structure.elements[0].y), (0.0, 0.0));
    }

    #[test]
    fn text_elements_filters_by_kind() {
        let structure = build_structure(&sample_tree(), "Sample");
        let texts = structure.text_elements();
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].node_id, "A1");
    }

    #[test]
    fn structure_serializes_with_camel_case_shape() {
        let structure = build_structure(&sample_tree(), "Sample");
        let value = serde_json::to_value(&structure).expect("serialize");
        assert!(value.get("lastSynced").is_some());
        let first = &value["elements"][0];
        assert_eq!(first["type"], "FRAME");
        assert_eq!(first["nodeId"], "root");
        assert!(first.get("parentId").is_none());

        let back: crate::design::DesignStructure =
            serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, structure);
    }
}
