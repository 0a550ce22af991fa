//! Style extraction from Figma typography and fills.

use crate::figma::api_types::DesignNode;

use super::element::ElementStyle;

/// Extract the minimal style record for a node.
///
/// Only the first fill is consulted and only solid fills yield a color.
/// Opacity comes from that same first fill and is left unset when Figma
/// does not provide one.
pub fn extract_style(node: &DesignNode) -> ElementStyle {
    let mut style = ElementStyle::default();

    if let Some(type_style) = &node.style {
        style.font_family = type_style.font_family.clone();
        style.font_size = type_style.font_size;
        style.font_weight = type_style.font_weight;
    }

    if let Some(fill) = node.fills.first() {
        if fill.is_solid() {
            if let Some(color) = &fill.color {
                let hex = color.to_hex();
                if node.is_text() {
                    style.color = Some(hex);
                } else {
                    style.background_color = Some(hex);
                }
            }
        }
        style.opacity = fill.opacity;
    }

    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figma::api_types::{FigmaColor, FigmaPaintData, FigmaTypeStyle};

    fn red_fill() -> FigmaPaintData {
        FigmaPaintData {
            paint_type: "SOLID".into(),
            color: Some(FigmaColor {
                r: 1.0,
                g: 0.0,
                b: 0.0,
                a: Some(1.0),
            }),
            opacity: None,
            visible: None,
        }
    }

    fn node(node_type: &str, fills: Vec<FigmaPaintData>) -> DesignNode {
        DesignNode {
            id: "1:1".into(),
            name: "Node".into(),
            node_type: node_type.into(),
            fills,
            ..DesignNode::default()
        }
    }

    #[test]
    fn solid_fill_on_text_sets_foreground_color() {
        let style = extract_style(&node("TEXT", vec![red_fill()]));
        assert_eq!(style.color.as_deref(), Some("#ff0000"));
        assert!(style.background_color.is_none());
    }

    #[test]
    fn solid_fill_on_rectangle_sets_background_color() {
        let style = extract_style(&node("RECTANGLE", vec![red_fill()]));
        assert_eq!(style.background_color.as_deref(), Some("#ff0000"));
        assert!(style.color.is_none());
    }

    #[test]
    fn gradient_fill_yields_no_color() {
        let gradient = FigmaPaintData {
            paint_type: "GRADIENT_LINEAR".into(),
            color: None,
            opacity: Some(0.5),
            visible: None,
        };
        let style = extract_style(&node("RECTANGLE", vec![gradient]));
        assert!(style.color.is_none());
        assert!(style.background_color.is_none());
        assert_eq!(style.opacity, Some(0.5));
    }

    #[test]
    fn only_first_fill_is_used() {
        let blue = FigmaPaintData {
            paint_type: "SOLID".into(),
            color: Some(FigmaColor {
                r: 0.0,
                g: 0.0,
                b: 1.0,
                a: None,
            }),
            opacity: Some(0.3),
            visible: None,
        };
        let style = extract_style(&node("ELLIPSE", vec![red_fill(), blue]));
        assert_eq!(style.background_color.as_deref(), Some("#ff0000"));
        assert!(style.opacity.is_none());
    }

    #[test]
    fn opacity_absent_is_not_defaulted() {
        let style = extract_style(&node("TEXT", vec![red_fill()]));
        assert_eq!(style.opacity, None);
    }

    #[test]
    fn typography_copied_verbatim() {
        let mut text = node("TEXT", vec![]);
        text.style = Some(FigmaTypeStyle {
            font_family: Some("Inter".into()),
            font_size: Some(14.0),
            font_weight: Some(700.0),
            line_height_px: Some(20.0),
        });
        let style = extract_style(&text);
        assert_eq!(style.font_family.as_deref(), Some("Inter"));
        assert_eq!(style.font_size, Some(14.0));
        assert_eq!(style.font_weight, Some(700.0));
        assert!(style.color.is_none());
    }

    #[test]
    fn no_style_and_no_fills_yields_empty_record() {
        assert!(extract_style(&node("FRAME", vec![])).is_empty());
    }
}
