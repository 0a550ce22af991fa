use figinvoice_lib::figma::DesignNode;
use figinvoice_lib::{
    build_structure, resolve_value, resolve_variable, suggest_mappings, sample_invoice,
    ElementKind, InvoiceData, MappingTable, VariableName,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn node(value: serde_json::Value) -> DesignNode {
    serde_json::from_value(value).expect("valid design node")
}

fn bbox(x: f64, y: f64) -> serde_json::Value {
    json!({ "x": x, "y": y, "width": 10.0, "height": 10.0 })
}

#[test]
fn structure_keeps_every_node_in_pre_order() {
    let root = node(json!({
        "id": "root", "name": "root", "type": "FRAME",
        "absoluteBoundingBox": bbox(100.0, 100.0),
        "children": [
            {
                "id": "a", "name": "A", "type": "GROUP",
                "absoluteBoundingBox": bbox(150.0, 120.0),
                "children": [
                    { "id": "a1", "name": "A1", "type": "TEXT", "characters": "Hi",
                      "absoluteBoundingBox": bbox(160.0, 130.0) }
                ]
            },
            { "id": "b", "name": "B", "type": "STAR" }
        ]
    }));

    let structure = build_structure(&root, "Tree");
    let order: Vec<&str> = structure.elements.iter().map(|e| e.node_id.as_str()).collect();
    assert_eq!(order, vec!["root", "a", "a1", "b"]);
    assert_eq!(structure.elements.len(), root.subtree_len());

    let positions: Vec<(f64, f64)> = structure.elements.iter().map(|e| (e.x, e.y)).collect();
    assert_eq!(
        positions[..3].to_vec(),
        vec![(0.0, 0.0), (50.0, 20.0), (10.0, 10.0)]
    );

    // Missing geometry and unknown types degrade instead of failing.
    let b = &structure.elements[3];
    assert_eq!(b.kind, ElementKind::Frame);
    assert_eq!((b.width, b.height), (0.0, 0.0));
}

#[test]
fn solid_fill_goes_to_text_color_or_background() {
    let red = json!([{ "type": "SOLID", "color": { "r": 1.0, "g": 0.0, "b": 0.0 } }]);
    let root = node(json!({
        "id": "root", "name": "root", "type": "FRAME",
        "children": [
            { "id": "t", "name": "Label", "type": "TEXT", "fills": red.clone() },
            { "id": "r", "name": "Box", "type": "RECTANGLE", "fills": red },
            { "id": "g", "name": "Fade", "type": "RECTANGLE",
              "fills": [{ "type": "GRADIENT_LINEAR" }] }
        ]
    }));

    let structure = build_structure(&root, "Styles");
    let text = structure.elements[1].style.clone().unwrap_or_default();
    assert_eq!(text.color.as_deref(), Some("#ff0000"));
    assert_eq!(text.background_color, None);

    let rect = structure.elements[2].style.clone().unwrap_or_default();
    assert_eq!(rect.background_color.as_deref(), Some("#ff0000"));
    assert_eq!(rect.color, None);

    let gradient = structure.elements[3].style.clone().unwrap_or_default();
    assert_eq!(gradient.background_color, None);
}

#[test]
fn tax_rule_wins_over_total_rule() {
    let root = node(json!({
        "id": "root", "name": "root", "type": "FRAME",
        "children": [
            { "id": "t", "name": "Total TVA", "type": "TEXT", "characters": "Total TVA" }
        ]
    }));
    let structure = build_structure(&root, "Totals");
    let mappings = suggest_mappings(structure.text_elements());
    let id = &structure.elements[1].id;

    assert_eq!(mappings.get(id), Some("totals.taxAmount"));
}

#[test]
fn an_element_holds_at_most_one_mapping() {
    let mut mappings = MappingTable::new();
    mappings.toggle("el", VariableName::InvoiceNumber);
    mappings.toggle("el", VariableName::InvoiceDate);
    assert_eq!(mappings.get("el"), Some("invoice.date"));
    assert_eq!(mappings.len(), 1);

    mappings.toggle("el", VariableName::InvoiceDate);
    assert!(mappings.is_empty());
}

#[test]
fn resolver_is_total_over_the_catalog() {
    let empty = InvoiceData::default();
    let sample = sample_invoice();
    for variable in VariableName::ALL {
        let _ = resolve_variable(&empty, variable);
        assert!(!resolve_variable(sample, variable).is_empty(), "{variable:?}");
    }
}

#[test]
fn resolver_formats_numbers_and_placeholders() {
    let mut data = InvoiceData::default();
    assert_eq!(resolve_value(&data, "service.quantity"), "[quantity]");
    assert_eq!(resolve_value(&data, "bogus.field"), "");

    data.totals.total = Some(1200.0);
    data.totals.tax_rate = Some(20.0);
    let total = resolve_value(&data, "totals.total");
    assert_ne!(total, "1200");
    assert!(total.contains('€'));
    assert!(total.contains("200,00"));
    assert_eq!(resolve_value(&data, "totals.taxRate"), "20%");
}
